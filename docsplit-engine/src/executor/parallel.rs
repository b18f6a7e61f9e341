//! Parallel execution strategy

use super::{ExecutionMode, Executor, SegmentWriter};
use crate::error::{Result, SplitError};
use docsplit_core::Segment;
use rayon::prelude::*;
use std::path::PathBuf;

/// Bounded worker-pool executor
#[derive(Debug)]
pub struct ParallelExecutor {
    workers: usize,
}

impl ParallelExecutor {
    /// Create an executor with the given number of workers
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of workers in the pool
    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Executor for ParallelExecutor {
    fn execute(
        &self,
        segments: &[Segment<'_>],
        writer: &SegmentWriter<'_>,
    ) -> Result<Vec<PathBuf>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("docsplit-worker-{i}"))
            .build()
            .map_err(|e| SplitError::ThreadPool(e.to_string()))?;

        // indexed collect keeps segment order regardless of completion order
        pool.install(|| {
            segments
                .par_iter()
                .map(|segment| writer.write(segment))
                .collect::<Result<Vec<_>>>()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
