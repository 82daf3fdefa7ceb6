//! Main logger implementation
//!
//! A [`Logger`] is a fixed table with one emit function per [`LogLevel`].
//! Levels below the configured minimum share a single no-op, so a suppressed
//! call never formats, serializes or touches the sink. The table is built once
//! and never re-evaluated.

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    options::LoggerOptions,
    record::{LogRecord, Loggable, Payload},
    sink::Sink,
};
use std::fmt;
use std::sync::Arc;

/// Emit function bound to one level: takes an optional caller method name
/// and the call arguments.
pub type EmitFn = Arc<dyn Fn(Option<&str>, &[&dyn Loggable]) -> Result<()> + Send + Sync>;

fn noop(_method: Option<&str>, _args: &[&dyn Loggable]) -> Result<()> {
    Ok(())
}

/// Formatting state shared by every active level of one logger.
struct Emitter {
    options: Arc<LoggerOptions>,
    sink: Arc<dyn Sink>,
}

impl Emitter {
    fn segment(&self, name: &str) -> String {
        if self.options.separator.is_empty() {
            name.to_string()
        } else {
            format!("{} {}", name, self.options.separator)
        }
    }

    fn prefix(&self, method: Option<&str>, level_name: &str) -> String {
        let mut segments = Vec::with_capacity(2);
        if self.options.show_method_name {
            if let Some(method) = method {
                segments.push(self.segment(method));
            }
        }
        if self.options.show_log_level {
            segments.push(self.segment(level_name));
        }
        segments.join(" ")
    }

    fn payload<'a>(&self, args: &[&'a dyn Loggable]) -> Result<Vec<Payload<'a>>> {
        if self.options.stringify_arguments {
            args.iter()
                .map(|arg| arg.to_json().map(Payload::Json).map_err(LoggerError::from))
                .collect()
        } else {
            Ok(args.iter().map(|arg| Payload::Raw(*arg)).collect())
        }
    }

    fn emit(&self, level: LogLevel, method: Option<&str>, args: &[&dyn Loggable]) -> Result<()> {
        let prefix = self.prefix(method, level.as_str());
        let payload = self.payload(args)?;
        let record =
            LogRecord::new(level, prefix, payload).with_colors(self.options.show_console_colors);
        self.write(&record);
        Ok(())
    }

    /// Hand `record` to the sink; sink failures are reported, never returned.
    fn write(&self, record: &LogRecord<'_>) {
        if let Err(e) = self.sink.write(record) {
            eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", self.sink.name(), e);
        }
    }

    fn emit_named(&self, level_name: &str, method: Option<&str>, args: &[&dyn Loggable]) -> Result<()> {
        match level_name.parse::<LogLevel>() {
            Ok(level) => self.emit(level, method, args),
            Err(_) => {
                let prefix = self.prefix(method, level_name);
                let payload = self.payload(args)?;
                let record =
                    LogRecord::plain(prefix, payload).with_colors(self.options.show_console_colors);
                self.write(&record);
                Ok(())
            }
        }
    }
}

/// Leveled logger with a precomputed dispatch table.
///
/// Cloning is cheap; clones share the table, options and sink.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
/// use leveled_logger::{error, debug};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// debug!(logger, "hidden").unwrap();
/// error!(logger, "boom").unwrap();
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    table: [EmitFn; 5],
    emitter: Arc<Emitter>,
}

impl Logger {
    /// Build the dispatch table for `options`, writing to `sink`.
    ///
    /// Fails when `options` break a constraint its types cannot express,
    /// such as an over-long separator.
    pub fn build(options: LoggerOptions, sink: Arc<dyn Sink>) -> Result<Self> {
        options.validate()?;

        let emitter = Arc::new(Emitter {
            options: Arc::new(options),
            sink,
        });
        let min_level = emitter.options.log_level;
        let silent: EmitFn = Arc::new(noop);

        let table = LogLevel::ALL.map(|level| {
            if level.passes(min_level) {
                let emitter = Arc::clone(&emitter);
                let active: EmitFn = Arc::new(
                    move |method: Option<&str>, args: &[&dyn Loggable]| -> Result<()> {
                        emitter.emit(level, method, args)
                    },
                );
                active
            } else {
                Arc::clone(&silent)
            }
        });

        Ok(Self { table, emitter })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// The function bound to `level`.
    pub fn emitter(&self, level: LogLevel) -> &EmitFn {
        &self.table[level.index()]
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.emitter.options
    }

    pub fn min_level(&self) -> LogLevel {
        self.emitter.options.log_level
    }

    /// Whether calls at `level` reach the sink.
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.min_level())
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.emitter.sink
    }

    pub fn flush(&self) -> Result<()> {
        self.emitter.sink.flush()
    }

    /// Log `args` at `level` through the dispatch table.
    #[inline]
    pub fn log(&self, level: LogLevel, args: &[&dyn Loggable]) -> Result<()> {
        (self.table[level.index()])(None, args)
    }

    #[inline]
    pub fn debug(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    #[inline]
    pub fn info(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    #[inline]
    pub fn warn(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Warn, args)
    }

    #[inline]
    pub fn error(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Error, args)
    }

    #[inline]
    pub fn fatal(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Fatal, args)
    }

    /// Attach a caller method name to the next calls.
    ///
    /// The name only shows up when `show_method_name` is enabled.
    pub fn at<'a>(&'a self, method: &'a str) -> MethodLogger<'a> {
        MethodLogger {
            logger: self,
            method,
        }
    }

    /// Emit under a level name, ignoring the minimum level.
    ///
    /// Unknown names are written as plain records on the standard channel.
    pub fn print(&self, level_name: &str, args: &[&dyn Loggable]) -> Result<()> {
        self.emitter.emit_named(level_name, None, args)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("options", &self.emitter.options)
            .field("sink", &self.emitter.sink.name())
            .finish()
    }
}

/// A logger view that tags every call with a caller method name.
#[derive(Clone, Copy)]
pub struct MethodLogger<'a> {
    logger: &'a Logger,
    method: &'a str,
}

impl MethodLogger<'_> {
    pub fn method(&self) -> &str {
        self.method
    }

    #[inline]
    pub fn log(&self, level: LogLevel, args: &[&dyn Loggable]) -> Result<()> {
        (self.logger.table[level.index()])(Some(self.method), args)
    }

    #[inline]
    pub fn debug(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Debug, args)
    }

    #[inline]
    pub fn info(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Info, args)
    }

    #[inline]
    pub fn warn(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Warn, args)
    }

    #[inline]
    pub fn error(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Error, args)
    }

    #[inline]
    pub fn fatal(&self, args: &[&dyn Loggable]) -> Result<()> {
        self.log(LogLevel::Fatal, args)
    }

    pub fn print(&self, level_name: &str, args: &[&dyn Loggable]) -> Result<()> {
        self.logger
            .emitter
            .emit_named(level_name, Some(self.method), args)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .separator("::")
///     .show_log_level(true)
///     .sink(Arc::new(MemorySink::new()))
///     .build()
///     .unwrap();
/// assert!(!logger.is_enabled(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    options: LoggerOptions,
    sink: Option<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            sink: None,
        }
    }

    /// Start from existing options
    pub fn from_options(options: LoggerOptions) -> Self {
        Self {
            options,
            sink: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.options.log_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn stringify_arguments(mut self, enabled: bool) -> Self {
        self.options.stringify_arguments = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_log_level(mut self, enabled: bool) -> Self {
        self.options.show_log_level = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_method_name(mut self, enabled: bool) -> Self {
        self.options.show_method_name = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_console_colors(mut self, enabled: bool) -> Self {
        self.options.show_console_colors = enabled;
        self
    }

    /// Set the output sink
    ///
    /// Without one, `build` falls back to a [`ConsoleSink`](crate::sinks::ConsoleSink).
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Validate the options and build the Logger
    pub fn build(self) -> Result<Logger> {
        let sink = match self.sink {
            Some(sink) => sink,
            None => default_sink()?,
        };
        Logger::build(self.options, sink)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "console")]
pub(crate) fn default_sink() -> Result<Arc<dyn Sink>> {
    Ok(Arc::new(crate::sinks::ConsoleSink::new()))
}

#[cfg(not(feature = "console"))]
pub(crate) fn default_sink() -> Result<Arc<dyn Sink>> {
    Err(LoggerError::config(
        "sink",
        "no sink given and the console feature is disabled",
    ))
}
