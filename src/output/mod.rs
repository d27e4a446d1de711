pub mod dotenv;
pub mod json;
pub mod shell;

use std::io::{self, Write};

use clap::ValueEnum;

use crate::error::AppResult;
use crate::network::Resolution;
use crate::publish::EnvVar;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `export NAME=value` lines
    #[default]
    Shell,
    /// `NAME=value` lines
    Dotenv,
    /// JSON report
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render(&self, resolution: &Resolution<'_>, vars: &[EnvVar<'_>]) -> AppResult<String> {
        match self.format {
            OutputFormat::Shell => Ok(shell::render(vars)),
            OutputFormat::Dotenv => Ok(dotenv::render(vars)),
            OutputFormat::Json => json::render(resolution, vars),
        }
    }

    pub fn emit(&self, resolution: &Resolution<'_>, vars: &[EnvVar<'_>]) -> AppResult<()> {
        let payload = self.render(resolution, vars)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(payload.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
