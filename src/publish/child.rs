use std::process::Command;

use crate::error::{AppError, AppResult};

use super::EnvVar;

/// Runs `argv` with the variables added to its environment and waits for it.
pub fn run(argv: &[String], vars: &[EnvVar<'_>]) -> AppResult<()> {
    let Some((program, args)) = argv.split_first() else {
        return Err(AppError::InvalidInput("command must not be empty".to_string()));
    };
    if program.is_empty() {
        return Err(AppError::InvalidInput("command program must not be empty".to_string()));
    }

    tracing::debug!("running {program} with {} published variables", vars.len());
    let status = Command::new(program)
        .args(args)
        .envs(vars.iter().map(|var| (var.name, var.value)))
        .status()?;

    if status.success() {
        return Ok(());
    }

    Err(AppError::Command {
        program: program.clone(),
        code: status.code(),
    })
}
