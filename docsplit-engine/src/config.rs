//! Engine configuration

use crate::error::{Result, SplitError};
use docsplit_core::{Segmenter, DEFAULT_SPLIT_MARKER};
use std::path::PathBuf;

/// Directory searched for the input document, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "test";

/// Directory receiving the split documents, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "file";

/// Upper bound on automatically sized worker pools
pub const MAX_AUTO_WORKERS: usize = 4;

/// How output documents are built and written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One segment after another on the calling thread
    #[default]
    Sequential,
    /// Segments spread over a bounded worker pool
    Parallel,
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory searched by discovery
    pub input_dir: PathBuf,
    /// Directory receiving output documents
    pub output_dir: PathBuf,
    /// Literal marker for the marker strategy
    pub split_marker: String,
    /// Sequential or parallel segment writing
    pub execution_mode: ExecutionMode,
    /// Worker count for parallel mode (None = auto)
    pub worker_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            split_marker: DEFAULT_SPLIT_MARKER.to_string(),
            execution_mode: ExecutionMode::Sequential,
            worker_threads: None,
        }
    }
}

impl EngineConfig {
    /// Configuration for the given input and output directories
    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_dir: I, output_dir: O) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Default directories with parallel segment writing
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Default::default()
        }
    }

    /// Start a builder from the defaults
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        self.segmenter()?;
        if self.worker_threads == Some(0) {
            return Err(SplitError::Config(
                "worker thread count must be greater than 0".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(SplitError::Config(
                "output directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Segmenter for the configured marker
    pub fn segmenter(&self) -> Result<Segmenter> {
        Ok(Segmenter::new(self.split_marker.as_str())?)
    }

    /// Number of workers a parallel run will use
    pub fn worker_count(&self) -> usize {
        match self.worker_threads {
            Some(count) => count,
            None => default_workers(),
        }
    }
}

#[cfg(feature = "parallel")]
fn default_workers() -> usize {
    num_cpus::get().clamp(1, MAX_AUTO_WORKERS)
}

#[cfg(not(feature = "parallel"))]
fn default_workers() -> usize {
    1
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input directory
    pub fn input_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.input_dir = dir.into();
        self
    }

    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the split marker
    pub fn split_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.config.split_marker = marker.into();
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the worker count
    pub fn worker_threads(mut self, count: Option<usize>) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Replace every setting at once
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("test"));
        assert_eq!(config.output_dir, PathBuf::from("file"));
        assert_eq!(config.split_marker, DEFAULT_SPLIT_MARKER);
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parallel_preset() {
        let config = EngineConfig::parallel();
        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert!(config.worker_count() >= 1);
        assert!(config.worker_count() <= MAX_AUTO_WORKERS);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::builder()
            .input_dir("in")
            .output_dir("out")
            .split_marker("---")
            .execution_mode(ExecutionMode::Parallel)
            .worker_threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.split_marker, "---");
        assert_eq!(config.worker_count(), 2);
    }

    #[test]
    fn test_empty_marker_rejected() {
        let result = EngineConfig::builder().split_marker("").build();
        assert!(matches!(
            result,
            Err(SplitError::Core(docsplit_core::CoreError::EmptyMarker))
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = EngineConfig::builder().worker_threads(Some(0)).build();
        assert!(matches!(result, Err(SplitError::Config(msg)) if msg.contains("greater than 0")));
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let result = EngineConfig::builder().output_dir("").build();
        assert!(result.is_err());
    }
}
