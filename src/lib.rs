//! # Leveled Logger
//!
//! A small configurable logger with five ordered levels
//! (`debug`, `info`, `warn`, `error`, `fatal`).
//!
//! ## Features
//!
//! - **Zero-cost suppression**: levels below the minimum are bound to a no-op
//!   once, at build time
//! - **Validated options**: configuration maps are checked before a logger exists
//! - **Optional prefixes**: caller method name and level name, with a short separator
//! - **Explicit wiring**: the logger is handed to a host, never installed globally

pub mod core;
pub mod macros;
pub mod plugin;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::{CapturedRecord, MemorySink};
    pub use crate::core::{
        Channel, LogLevel, LogRecord, Loggable, Logger, LoggerBuilder, LoggerError,
        LoggerOptions, MethodLogger, Payload, Result, Sink, Style,
    };
    pub use crate::plugin::{install, install_with_sink, AppContext, Component, LoggerHost};
}

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::{CapturedRecord, MemorySink};
pub use crate::core::{
    validate, Channel, EmitFn, LogLevel, LogRecord, Loggable, Logger, LoggerBuilder, LoggerError,
    LoggerOptions, MethodLogger, Payload, Result, Sink, Style,
};
pub use crate::plugin::{install, install_with_sink, AppContext, Component, LoggerHost};
