//! Split orchestration for word-processing documents
//!
//! This crate wires text extraction, segmentation and document building
//! into a single split run: one `.docx` in, one `.docx` per kept segment out.
//!
//! ```no_run
//! use docsplit_engine::{EngineConfig, SplitOrchestrator};
//!
//! let config = EngineConfig::new("incoming", "segments");
//! let orchestrator = SplitOrchestrator::new(config)?;
//! let result = orchestrator.run()?;
//! println!("wrote {} documents", result.count);
//! # Ok::<(), docsplit_engine::SplitError>(())
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod cancel;
pub mod config;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod extractor;
pub mod logging;
pub mod orchestrator;
pub mod result;
pub mod status;

// Re-export key types
pub use builder::{DocumentBuilder, DocxBuilder};
pub use cancel::CancellationToken;
pub use config::{EngineConfig, EngineConfigBuilder, ExecutionMode};
pub use discovery::{discover_input, list_candidates};
pub use error::{BuildError, ExtractionError, Result, SplitError};
pub use executor::Executor;
pub use extractor::{DocxExtractor, TextExtractor};
pub use logging::{LogFacade, LogLevel, LogRecord, MemoryLog, SplitLog};
pub use orchestrator::{SplitOrchestrator, SplitOrchestratorBuilder};
pub use result::{OutputDocument, SplitResult};
pub use status::{status, Readiness, ServiceStatus};

// Re-export from core for convenience
pub use docsplit_core::{Segment, Segmentation, Segmenter, SplitStrategy, DEFAULT_SPLIT_MARKER};

/// Split the first document in the default input directory
///
/// Uses [`EngineConfig::default`] and logs through the `log` facade. Errors
/// are returned unchanged for the caller to report.
pub fn trigger_split() -> Result<SplitResult> {
    SplitOrchestrator::new(EngineConfig::default())?.run()
}
