//! Execution strategies for building and writing segments

use crate::{
    builder::DocumentBuilder,
    cancel::CancellationToken,
    config::{EngineConfig, ExecutionMode},
    error::{Result, SplitError},
    logging::SplitLog,
    result::OutputDocument,
};
use docsplit_core::Segment;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Trait for execution strategies
///
/// Implementations must return paths in segment order, whatever order the
/// segments were completed in.
pub trait Executor: Send + Sync {
    /// Build and write every segment, returning the written paths
    fn execute(
        &self,
        segments: &[Segment<'_>],
        writer: &SegmentWriter<'_>,
    ) -> Result<Vec<PathBuf>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Executor for the configured mode
pub fn for_config(config: &EngineConfig) -> Box<dyn Executor> {
    match config.execution_mode {
        ExecutionMode::Sequential => Box::new(SequentialExecutor),
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Box::new(ParallelExecutor::new(config.worker_count())),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => Box::new(SequentialExecutor),
    }
}

/// Builds one output document per segment and writes it
pub struct SegmentWriter<'a> {
    builder: &'a dyn DocumentBuilder,
    cancel: &'a CancellationToken,
    log: &'a dyn SplitLog,
    source_stem: &'a str,
    output_dir: &'a Path,
}

impl<'a> SegmentWriter<'a> {
    /// Create a writer for documents derived from `source_stem`
    pub fn new(
        builder: &'a dyn DocumentBuilder,
        cancel: &'a CancellationToken,
        log: &'a dyn SplitLog,
        source_stem: &'a str,
        output_dir: &'a Path,
    ) -> Self {
        Self {
            builder,
            cancel,
            log,
            source_stem,
            output_dir,
        }
    }

    /// Build and write one segment
    ///
    /// Cancellation is checked before any work starts, never during a write.
    pub fn write(&self, segment: &Segment<'_>) -> Result<PathBuf> {
        if self.cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }

        let bytes = self
            .builder
            .build(segment.text)
            .map_err(|source| SplitError::Build {
                index: segment.index,
                source,
            })?;

        let document = OutputDocument::new(
            self.source_stem,
            segment.index,
            self.builder.extension(),
            bytes,
            self.output_dir,
        );
        document.write()?;

        self.log.info(&format!("generated {}", document.path.display()));
        Ok(document.path)
    }
}
