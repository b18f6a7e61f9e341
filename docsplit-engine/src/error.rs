//! Layered error types
//!
//! Collaborator errors ([`ExtractionError`], [`BuildError`]) are wrapped by
//! [`SplitError`] together with the path or segment they concern, so the
//! underlying cause is always reachable through `source()`.

use docsplit_core::CoreError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Text extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// File missing or unreadable
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File is not a readable document package
    #[error("invalid document package: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Package lacks a required part
    #[error("document part '{0}' is missing")]
    MissingPart(&'static str),

    /// Main document part is not well-formed XML
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Document construction errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Package could not be assembled
    #[error("failed to assemble document package: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing a part into the package failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors surfaced by a split run
#[derive(Error, Debug)]
pub enum SplitError {
    /// Discovery found no candidate document
    #[error("no .{extension} document found in {}", dir.display())]
    NoInputDocument {
        /// Directory that was searched
        dir: PathBuf,
        /// Extension that was searched for
        extension: String,
    },

    /// The input directory could not be listed
    #[error("failed to list input directory {}: {source}", dir.display())]
    Discovery {
        /// Directory that was searched
        dir: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The input document could not be read or parsed
    #[error("failed to extract text from {}: {source}", path.display())]
    Extraction {
        /// Input document
        path: PathBuf,
        /// Underlying extraction failure
        #[source]
        source: ExtractionError,
    },

    /// An output document could not be constructed
    #[error("failed to build document for segment {index}: {source}")]
    Build {
        /// 1-based segment index
        index: usize,
        /// Underlying build failure
        #[source]
        source: BuildError,
    },

    /// The output directory or an output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The run was cancelled between segments
    #[error("split cancelled")]
    Cancelled,

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ThreadPool(String),

    /// Segmenter rejected its configuration
    #[error("segmenter error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for split operations
pub type Result<T> = std::result::Result<T, SplitError>;
