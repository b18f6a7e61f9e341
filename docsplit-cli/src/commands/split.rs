//! Split command implementation

use super::OutputFormat;
use crate::config::CliConfig;
use crate::input::resolve_patterns;
use crate::output;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use docsplit_engine::{EngineConfig, ExecutionMode, LogFacade, SplitOrchestrator, SplitResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input documents or patterns (supports glob); without this the first
    /// document in the input directory is split
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Directory searched for the input document
    #[arg(long, value_name = "DIR", env = "DOCSPLIT_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the split documents
    #[arg(short, long, value_name = "DIR", env = "DOCSPLIT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Literal marker separating segments
    #[arg(short, long, value_name = "TEXT", env = "DOCSPLIT_MARKER")]
    pub marker: Option<String>,

    /// Build and write segments on a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "DOCSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let engine_config = self.engine_config(&file_config)?;
        log::debug!("Engine configuration: {:?}", engine_config);

        let output_dir = engine_config.output_dir.clone();
        let orchestrator = SplitOrchestrator::builder()
            .config(engine_config)
            .log(Arc::new(LogFacade::default()))
            .build()?;

        let result = if self.input.is_empty() {
            orchestrator.run()?
        } else {
            self.split_each(&orchestrator, &output_dir)?
        };

        let mut formatter = output::stdout_formatter(self.format);
        formatter.write_result(&result)?;
        formatter.finish()
    }

    /// Split every file matched by the input patterns, in sorted order
    fn split_each(
        &self,
        orchestrator: &SplitOrchestrator,
        output_dir: &Path,
    ) -> Result<SplitResult> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Splitting {} document(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total = SplitResult::default();
        for file in &files {
            total.merge(orchestrator.split_document(file, output_dir)?);
            progress.file_completed(&file.display().to_string());
        }

        progress.finish();
        Ok(total)
    }

    /// Merge flags, environment and config file; flags win
    pub fn engine_config(&self, file: &CliConfig) -> Result<EngineConfig> {
        let execution_mode = if self.parallel || file.performance.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };

        let config = EngineConfig::builder()
            .input_dir(
                self.input_dir
                    .clone()
                    .unwrap_or_else(|| file.paths.input_dir.clone()),
            )
            .output_dir(
                self.output_dir
                    .clone()
                    .unwrap_or_else(|| file.paths.output_dir.clone()),
            )
            .split_marker(
                self.marker
                    .clone()
                    .unwrap_or_else(|| file.split.marker.clone()),
            )
            .execution_mode(execution_mode)
            .worker_threads(self.threads.or_else(|| file.performance.worker_threads()))
            .build()?;

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
