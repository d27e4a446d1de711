use std::path::PathBuf;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::{Output, OutputFormat};

#[derive(Debug)]
pub struct AppContext {
    pub settings: Settings,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(config: Option<PathBuf>, format: OutputFormat) -> AppResult<Self> {
        let paths = AppPaths::discover();
        let settings = config::load_settings(config.as_deref(), paths.as_ref())?;
        let output = Output::new(format);

        Ok(Self {
            settings,
            output,
        })
    }
}
