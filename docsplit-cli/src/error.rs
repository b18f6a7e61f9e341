//! Error handling for the CLI application

use docsplit_engine::SplitError;
use std::fmt;

/// Exit status for a failed discovery
pub const EXIT_NO_INPUT: i32 = 2;
/// Exit status for an unreadable input document
pub const EXIT_EXTRACTION: i32 = 3;
/// Exit status for a failed output write
pub const EXIT_WRITE: i32 = 4;
/// Exit status for anything else
pub const EXIT_FAILURE: i32 = 1;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Process exit status for an error, distinct per split failure kind
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<SplitError>())
        .map(|split| match split {
            SplitError::NoInputDocument { .. } => EXIT_NO_INPUT,
            SplitError::Extraction { .. } => EXIT_EXTRACTION,
            SplitError::Write { .. } => EXIT_WRITE,
            _ => EXIT_FAILURE,
        })
        .unwrap_or(EXIT_FAILURE)
}
