use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_NETWORK_VAR: &str = "TAIJI_NETWORK";
pub const DEFAULT_NETWORK_DIR_VAR: &str = "TAIJI_NETWORK_DIR";

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub network_var: Option<String>,
    #[serde(default)]
    pub network_dir_var: Option<String>,
}

impl Settings {
    pub fn network_var(&self) -> &str {
        self.network_var.as_deref().unwrap_or(DEFAULT_NETWORK_VAR)
    }

    pub fn network_dir_var(&self) -> &str {
        self.network_dir_var
            .as_deref()
            .unwrap_or(DEFAULT_NETWORK_DIR_VAR)
    }

    pub fn validate(&self) -> AppResult<()> {
        for name in [self.network_var(), self.network_dir_var()] {
            if !is_env_name(name) {
                return Err(AppError::Config(format!(
                    "`{name}` is not a valid environment variable name"
                )));
            }
        }

        if self.network_var() == self.network_dir_var() {
            return Err(AppError::Config(format!(
                "network_var and network_dir_var must differ (both `{}`)",
                self.network_var()
            )));
        }

        Ok(())
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    let raw = fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&raw)?;
    settings.validate()?;
    Ok(settings)
}

fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_taiji_names() {
        let settings = Settings::default();
        assert_eq!(settings.network_var(), "TAIJI_NETWORK");
        assert_eq!(settings.network_dir_var(), "TAIJI_NETWORK_DIR");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn accepts_env_names() {
        assert!(is_env_name("TAIJI_NETWORK"));
        assert!(is_env_name("_private2"));
        assert!(!is_env_name(""));
        assert!(!is_env_name("2FAST"));
        assert!(!is_env_name("HAS-DASH"));
        assert!(!is_env_name("HAS SPACE"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let settings = Settings {
            network_var: Some("NET".to_string()),
            network_dir_var: Some("NET".to_string()),
        };
        assert!(matches!(settings.validate(), Err(AppError::Config(_))));
    }
}
