//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use docsplit_engine::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use docsplit_engine::DEFAULT_SPLIT_MARKER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory configuration
    #[serde(default)]
    pub paths: PathsConfig,

    /// Segmentation configuration
    #[serde(default)]
    pub split: SplitConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }
}

/// Input and output directories
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory searched for the input document
    pub input_dir: PathBuf,

    /// Directory receiving the split documents
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Segmentation settings
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SplitConfig {
    /// Literal marker separating segments
    pub marker: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SPLIT_MARKER.to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Write segments on a worker pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker count for the engine, `None` meaning auto
    pub fn worker_threads(&self) -> Option<usize> {
        (self.worker_threads > 0).then_some(self.worker_threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.paths.input_dir, PathBuf::from("test"));
        assert_eq!(config.paths.output_dir, PathBuf::from("file"));
        assert_eq!(config.split.marker, DEFAULT_SPLIT_MARKER);
        assert!(!config.performance.parallel);
        assert_eq!(config.performance.worker_threads(), None);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[split]
marker = "<MARK>"

[performance]
worker_threads = 2
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.split.marker, "<MARK>");
        assert_eq!(config.performance.worker_threads(), Some(2));
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/docsplit.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[paths\ninput_dir = ").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
