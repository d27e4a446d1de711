pub mod paths;
pub mod settings;

use std::path::Path;

pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::{AppError, AppResult};

/// Loads settings from an explicitly requested file, which must exist, or
/// from the per-user settings file when present. Falls back to defaults.
pub fn load_settings(explicit: Option<&Path>, paths: Option<&AppPaths>) -> AppResult<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "settings file {} does not exist",
                path.display()
            )));
        }
        tracing::debug!("loading settings from {}", path.display());
        return settings::load(path);
    }

    match paths.map(AppPaths::settings_file) {
        Some(path) if path.exists() => {
            tracing::debug!("loading settings from {}", path.display());
            settings::load(&path)
        }
        Some(path) => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        None => {
            tracing::debug!("no config directory, using default settings");
            Ok(Settings::default())
        }
    }
}
