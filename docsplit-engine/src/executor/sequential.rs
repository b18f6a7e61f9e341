//! Sequential execution strategy

use super::{ExecutionMode, Executor, SegmentWriter};
use crate::error::Result;
use docsplit_core::Segment;
use std::path::PathBuf;

/// Single-threaded sequential executor
#[derive(Debug, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn execute(
        &self,
        segments: &[Segment<'_>],
        writer: &SegmentWriter<'_>,
    ) -> Result<Vec<PathBuf>> {
        segments.iter().map(|segment| writer.write(segment)).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
