//! Injected progress logging
//!
//! The orchestrator reports progress through a [`SplitLog`] handed to it at
//! construction time instead of a process-wide logger.

use std::sync::{Mutex, PoisonError};

/// Sink for split progress messages
pub trait SplitLog: Send + Sync {
    /// Record a progress message
    fn info(&self, message: &str);

    /// Record a failure
    fn error(&self, message: &str);
}

/// Forwards messages to the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    /// Create a facade sink logging under the given target
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new("docsplit")
    }
}

impl SplitLog for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: self.target, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: self.target, "{message}");
    }
}

/// Severity of a captured record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Progress message
    Info,
    /// Failure
    Error,
}

/// A captured log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Message text
    pub message: String,
}

/// Keeps every message in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    /// Create an empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at the given level
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|record| record.level == level)
            .map(|record| record.message)
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                level,
                message: message.to_string(),
            });
    }
}

impl SplitLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
