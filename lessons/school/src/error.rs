//! Errors surfaced by the `school` command line.
//!
//! The lessons themselves are total; only argument handling can fail.

use thiserror::Error;

/// Result type for command-line handling.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown lesson '{0}' (expected one of: classes, structs, enums)")]
    UnknownLesson(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl CliError {
    /// Whether usage text should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::UnknownCommand(_) | CliError::UnknownOption(_))
    }
}
