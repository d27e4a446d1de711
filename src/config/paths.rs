use std::path::{Path, PathBuf};

const APP_DIR: &str = "taiji-multinet";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    /// Returns `None` when the platform has no per-user config directory.
    pub fn discover() -> Option<Self> {
        dirs::config_dir().map(|root| Self::with_root(&root))
    }

    pub fn with_root(config_root: &Path) -> Self {
        Self {
            config_dir: config_root.join(APP_DIR),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_live_under_app_dir() {
        let paths = AppPaths::with_root(Path::new("/home/dev/.config"));
        assert_eq!(paths.config_dir(), Path::new("/home/dev/.config/taiji-multinet"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/home/dev/.config/taiji-multinet/settings.json")
        );
    }
}
