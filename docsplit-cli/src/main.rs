//! docsplit command-line entry point

use clap::Parser;
use docsplit_cli::commands::Commands;
use docsplit_cli::error::exit_code;

/// Split word-processing documents into one document per segment
#[derive(Debug, Parser)]
#[command(name = "docsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}
