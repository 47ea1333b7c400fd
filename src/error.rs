//! Error types for the readmequick CLI.
//!
//! Generation failures never show up here: the services degrade them into
//! default sections, empty badges or an error placeholder. What remains are
//! the failures a user has to act on.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for readmequick operations.
#[derive(Error, Debug)]
pub enum ReadmeError {
    /// User provided invalid arguments or the session is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Project metadata or section selection failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Configuration file or credentials are unusable.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl ReadmeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadmeError::UserError(_) => exit_codes::USER_ERROR,
            ReadmeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            ReadmeError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            ReadmeError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for readmequick operations.
pub type Result<T> = std::result::Result<T, ReadmeError>;
