//! Output formatting module

use crate::commands::OutputFormat;
use anyhow::Result;
use docsplit_engine::{ServiceStatus, SplitResult};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the outcome of a split
    fn write_result(&mut self, result: &SplitResult) -> Result<()>;

    /// Format the readiness descriptor
    fn write_status(&mut self, status: &ServiceStatus) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Formatter for `format` writing to stdout
pub fn stdout_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::stdout()),
        OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
    }
}
