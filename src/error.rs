use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("`{program}` exited with {}", exit_status(.code))]
    Command { program: String, code: Option<i32> },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument(_) | Self::Config(_) | Self::InvalidInput(_) => 2,
            Self::Command { code, .. } => code.filter(|code| *code != 0).unwrap_or(1),
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(AppError::MissingArgument("TAG").exit_code(), 2);
        assert_eq!(AppError::Config("bad".to_string()).exit_code(), 2);
    }

    #[test]
    fn command_errors_forward_child_status() {
        let err = AppError::Command {
            program: "make".to_string(),
            code: Some(7),
        };
        assert_eq!(err.exit_code(), 7);
        assert_eq!(err.to_string(), "`make` exited with status 7");

        let killed = AppError::Command {
            program: "make".to_string(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
    }
}
