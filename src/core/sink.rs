//! Sink trait for log output destinations

use super::{error::Result, record::LogRecord};

/// Destination for formatted log records.
///
/// A sink is shared by every clone of a logger, so `write` takes `&self`;
/// implementations that keep state use interior mutability. Each call to
/// `write` must produce exactly one output record. Errors are reported by
/// the logger and do not fail the log call.
pub trait Sink: Send + Sync {
    fn write(&self, record: &LogRecord<'_>) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
