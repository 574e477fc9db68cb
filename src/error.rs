//! Error types for the dotairc CLI.
//!
//! Uses thiserror for derive macros. A template that does not exist is not an
//! error at all; it is reported as a warning by the generate command.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for dotairc operations.
#[derive(Error, Debug)]
pub enum AircError {
    /// Missing or invalid command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Config file could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),

    /// Filesystem failure on the template directory or the output file.
    #[error("{0}")]
    Io(String),
}

impl AircError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AircError::Usage(_) => exit_codes::USER_ERROR,
            AircError::Config(_) => exit_codes::USER_ERROR,
            AircError::Io(_) => exit_codes::IO_FAILURE,
        }
    }

    /// Whether the message should be printed verbatim, without an `Error:` prefix.
    pub fn is_usage(&self) -> bool {
        matches!(self, AircError::Usage(_))
    }
}

/// Result type alias for dotairc operations.
pub type Result<T> = std::result::Result<T, AircError>;
