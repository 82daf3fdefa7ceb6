//! Core logger types and traits

pub mod error;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod record;
pub mod sink;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{EmitFn, Logger, LoggerBuilder, MethodLogger};
pub use options::{validate, LoggerOptions};
pub use record::{Channel, LogRecord, Loggable, Payload, Style};
pub use sink::Sink;
