//! Split orchestration
//!
//! Drives discovery, extraction, segmentation and output writing for one
//! input document per call. Steps run in order; only the per-segment build
//! and write step may be spread across workers.

use crate::{
    builder::{DocumentBuilder, DocxBuilder},
    cancel::CancellationToken,
    config::{EngineConfig, EngineConfigBuilder, ExecutionMode},
    discovery::discover_input,
    error::{Result, SplitError},
    executor::{self, SegmentWriter},
    extractor::{DocxExtractor, TextExtractor},
    logging::{LogFacade, SplitLog},
    result::{source_stem, SplitResult},
};
use docsplit_core::Segmenter;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Splits one document into one output document per kept segment
pub struct SplitOrchestrator {
    config: EngineConfig,
    segmenter: Segmenter,
    extractor: Arc<dyn TextExtractor>,
    builder: Arc<dyn DocumentBuilder>,
    log: Arc<dyn SplitLog>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for SplitOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitOrchestrator")
            .field("config", &self.config)
            .field("segmenter", &self.segmenter)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl SplitOrchestrator {
    /// Orchestrator with the default extractor, builder and log sink
    pub fn new(config: EngineConfig) -> Result<Self> {
        SplitOrchestratorBuilder::new().config(config).build()
    }

    /// Start a builder
    pub fn builder() -> SplitOrchestratorBuilder {
        SplitOrchestratorBuilder::new()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Token that cancels this orchestrator's runs
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Locate the input document in the configured input directory
    pub fn discover(&self) -> Result<PathBuf> {
        discover_input(&self.config.input_dir, self.builder.extension())
    }

    /// Discover the input document and split it into the configured output directory
    ///
    /// Nothing is created when discovery fails.
    pub fn run(&self) -> Result<SplitResult> {
        let input = self.discover().inspect_err(|e| self.log.error(&e.to_string()))?;
        self.split_document(&input, &self.config.output_dir)
    }

    /// Split `input` into `output_dir`, independent of discovery
    ///
    /// Documents already written when a later step fails stay on disk.
    pub fn split_document(&self, input: &Path, output_dir: &Path) -> Result<SplitResult> {
        self.log.info(&format!("processing document {}", input.display()));

        self.split_inner(input, output_dir).inspect_err(|e| {
            self.log
                .error(&format!("failed to split {}: {e}", input.display()))
        })
    }

    fn split_inner(&self, input: &Path, output_dir: &Path) -> Result<SplitResult> {
        fs::create_dir_all(output_dir).map_err(|source| SplitError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let text = self
            .extractor
            .extract(input)
            .map_err(|source| SplitError::Extraction {
                path: input.to_path_buf(),
                source,
            })?;

        let segmentation = self.segmenter.segment(&text);
        let segments = segmentation.segments();
        self.log.info(&format!(
            "{} strategy kept {} of {} pieces",
            segmentation.strategy(),
            segments.len(),
            segmentation.pieces().len()
        ));

        let stem = source_stem(input);
        let writer = SegmentWriter::new(
            self.builder.as_ref(),
            &self.cancel,
            self.log.as_ref(),
            &stem,
            output_dir,
        );
        let files = executor::for_config(&self.config).execute(&segments, &writer)?;

        self.log.info(&format!(
            "split {} into {} documents",
            input.display(),
            files.len()
        ));
        Ok(SplitResult::from_files(files))
    }
}

/// Builder for SplitOrchestrator
///
/// Every collaborator has a default: [`DocxExtractor`], [`DocxBuilder`],
/// [`LogFacade`] and a fresh [`CancellationToken`].
#[derive(Default)]
pub struct SplitOrchestratorBuilder {
    config_builder: EngineConfigBuilder,
    extractor: Option<Arc<dyn TextExtractor>>,
    builder: Option<Arc<dyn DocumentBuilder>>,
    log: Option<Arc<dyn SplitLog>>,
    cancel: Option<CancellationToken>,
}

impl SplitOrchestratorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config_builder = self.config_builder.config(config);
        self
    }

    /// Set the input directory
    pub fn input_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config_builder = self.config_builder.input_dir(dir);
        self
    }

    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.config_builder = self.config_builder.output_dir(dir);
        self
    }

    /// Set the split marker
    pub fn split_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.config_builder = self.config_builder.split_marker(marker);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config_builder = self.config_builder.execution_mode(mode);
        self
    }

    /// Set the worker count for parallel mode
    pub fn worker_threads(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.worker_threads(count);
        self
    }

    /// Use a custom text extractor
    pub fn extractor<E: TextExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }

    /// Use a custom document builder
    pub fn document_builder<B: DocumentBuilder + 'static>(mut self, builder: B) -> Self {
        self.builder = Some(Arc::new(builder));
        self
    }

    /// Send progress messages to `log`
    pub fn log(mut self, log: Arc<dyn SplitLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Share a cancellation token with the caller
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Build the orchestrator
    pub fn build(self) -> Result<SplitOrchestrator> {
        let config = self.config_builder.build()?;
        let segmenter = config.segmenter()?;

        Ok(SplitOrchestrator {
            config,
            segmenter,
            extractor: self.extractor.unwrap_or_else(|| Arc::new(DocxExtractor)),
            builder: self.builder.unwrap_or_else(|| Arc::new(DocxBuilder)),
            log: self.log.unwrap_or_else(|| Arc::new(LogFacade::default())),
            cancel: self.cancel.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use crate::logging::{LogLevel, MemoryLog};
    use tempfile::TempDir;

    /// Returns a fixed text for any path
    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract(&self, _path: &Path) -> std::result::Result<String, ExtractionError> {
            Ok(self.0.to_string())
        }
    }

    fn orchestrator(text: &'static str, log: Arc<MemoryLog>) -> SplitOrchestrator {
        SplitOrchestrator::builder()
            .split_marker("<MARK>")
            .extractor(FixedText(text))
            .log(log)
            .build()
            .unwrap()
    }

    #[test]
    fn test_split_document_with_marker() {
        let out = TempDir::new().unwrap();
        let log = Arc::new(MemoryLog::new());
        let result = orchestrator("A<MARK>B<MARK>C", log.clone())
            .split_document(Path::new("doc.docx"), out.path())
            .unwrap();

        assert!(result.success);
        assert_eq!(result.count, 3);
        assert_eq!(
            result.files,
            vec![
                out.path().join("doc_segment-1.docx"),
                out.path().join("doc_segment-2.docx"),
                out.path().join("doc_segment-3.docx"),
            ]
        );
        assert!(result.files.iter().all(|path| path.is_file()));

        let info = log.messages(LogLevel::Info);
        assert_eq!(info.first().unwrap(), "processing document doc.docx");
        assert!(info.iter().any(|m| m == "marker strategy kept 3 of 3 pieces"));
        assert!(info.last().unwrap().ends_with("into 3 documents"));
        assert!(log.messages(LogLevel::Error).is_empty());
    }

    #[test]
    fn test_blank_text_writes_nothing() {
        let out = TempDir::new().unwrap();
        let result = orchestrator(" \n\n ", Arc::new(MemoryLog::new()))
            .split_document(Path::new("blank.docx"), out.path())
            .unwrap();

        assert_eq!(result.count, 0);
        assert!(result.files.is_empty());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_cancelled_before_first_segment() {
        let out = TempDir::new().unwrap();
        let log = Arc::new(MemoryLog::new());
        let orchestrator = orchestrator("A<MARK>B", log.clone());
        orchestrator.cancellation_token().cancel();

        let result = orchestrator.split_document(Path::new("doc.docx"), out.path());
        assert!(matches!(result, Err(SplitError::Cancelled)));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
        assert_eq!(
            log.messages(LogLevel::Error),
            vec!["failed to split doc.docx: split cancelled"]
        );
    }

    #[test]
    fn test_debug_omits_collaborators() {
        let debug = format!("{:?}", orchestrator("x", Arc::new(MemoryLog::new())));
        assert!(debug.contains("SplitOrchestrator"));
        assert!(debug.contains("<MARK>"));
    }

    #[test]
    fn test_empty_marker_is_segmenter_error() {
        let result = SplitOrchestrator::builder().split_marker("").build();
        assert!(matches!(
            result,
            Err(SplitError::Core(docsplit_core::CoreError::EmptyMarker))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SplitOrchestrator::builder().worker_threads(Some(0)).build();
        assert!(matches!(result, Err(SplitError::Config(_))));
    }
}
