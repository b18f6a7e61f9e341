//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use docsplit_engine::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use docsplit_engine::DEFAULT_SPLIT_MARKER;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for splitting:");
        println!("   docsplit split --config {}", self.output.display());

        Ok(())
    }
}

/// Template configuration content, every key at its default
fn generate_template() -> String {
    format!(
        r#"# docsplit configuration
#
# Command-line flags override these values, and DOCSPLIT_* environment
# variables override them as well.

[paths]
# Directory searched for the input document (first .docx by name)
input_dir = "{DEFAULT_INPUT_DIR}"

# Directory receiving <stem>_segment-<n>.docx files, created when missing
output_dir = "{DEFAULT_OUTPUT_DIR}"

[split]
# Literal text separating segments; must not be empty.
# Documents with fewer than two marked pieces are split per line instead.
marker = "{DEFAULT_SPLIT_MARKER}"

[performance]
# Build and write segments on a worker pool
parallel = false

# Worker threads for the pool (0 = auto)
worker_threads = 0
"#
    )
}
