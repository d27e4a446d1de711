pub mod child;
pub mod env_file;

use crate::config::Settings;
use crate::network::NetworkProfile;

/// One `NAME=value` pair handed to downstream release steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EnvVar<'a> {
    pub name: &'a str,
    pub value: &'static str,
}

pub fn env_vars<'a>(settings: &'a Settings, profile: &NetworkProfile) -> [EnvVar<'a>; 2] {
    [
        EnvVar {
            name: settings.network_var(),
            value: profile.network.as_str(),
        },
        EnvVar {
            name: settings.network_dir_var(),
            value: profile.network_dir.as_str(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configured_names() {
        let settings = Settings {
            network_var: Some("NET".to_string()),
            network_dir_var: None,
        };
        let vars = env_vars(&settings, &NetworkProfile::ESME);
        assert_eq!(
            vars,
            [
                EnvVar {
                    name: "NET",
                    value: "esme"
                },
                EnvVar {
                    name: "TAIJI_NETWORK_DIR",
                    value: "testnet"
                },
            ]
        );
    }
}
