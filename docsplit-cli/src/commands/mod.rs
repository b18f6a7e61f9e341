//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod split;
pub mod status;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a document into one document per segment
    Split(split::SplitArgs),

    /// Report service readiness
    Status(status::StatusArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Status(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per generated file and a summary
    Text,
    /// JSON response envelope
    Json,
}
