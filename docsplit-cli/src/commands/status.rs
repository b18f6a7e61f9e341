//! Status command implementation

use super::OutputFormat;
use crate::output;
use anyhow::Result;
use clap::Args;

/// Arguments for the status command
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl StatusArgs {
    /// Execute the status command
    pub fn execute(&self) -> Result<()> {
        let mut formatter = output::stdout_formatter(self.format);
        formatter.write_status(&docsplit_engine::status())?;
        formatter.finish()
    }
}
