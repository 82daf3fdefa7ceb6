//! In-memory sink that keeps every record it receives

use crate::core::{Channel, LogLevel, LogRecord, Result, Sink};
use parking_lot::Mutex;

/// Owned copy of one [`LogRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Option<LogLevel>,
    pub channel: Channel,
    pub glyph: Option<&'static str>,
    pub prefix: String,
    pub colored: bool,
    /// Each argument, rendered
    pub args: Vec<String>,
    /// The full uncolored line
    pub line: String,
}

impl From<&LogRecord<'_>> for CapturedRecord {
    fn from(record: &LogRecord<'_>) -> Self {
        Self {
            level: record.level,
            channel: record.channel,
            glyph: record.style.glyph,
            prefix: record.prefix.clone(),
            colored: record.colored,
            args: record.args.iter().map(|arg| arg.render()).collect(),
            line: record.format_line(),
        }
    }
}

/// Sink that stores records instead of printing them.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::build(LoggerOptions::default(), sink.clone()).unwrap();
/// leveled_logger::info!(logger, "ready").unwrap();
/// assert_eq!(sink.records()[0].args, vec!["ready"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records written so far
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.line.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &LogRecord<'_>) -> Result<()> {
        self.records.lock().push(CapturedRecord::from(record));
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
