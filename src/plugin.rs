//! Installing a logger into a host application
//!
//! The host exposes a [`LoggerHost`] and receives one shared logger. Nothing
//! global is mutated; components get the logger from whatever the host hands
//! them. [`AppContext`] is a ready-made host for applications without one.

use crate::core::{
    logger::default_sink, options, Logger, LoggerError, LoggerOptions, Result, Sink,
};
use serde_json::Value;
use std::sync::Arc;

/// Error message used when installation rejects its options
pub const INVALID_OPTIONS: &str = "Provided options for the logger are not valid";

/// Something that can hold the application's shared logger.
pub trait LoggerHost {
    fn attach_logger(&mut self, logger: Arc<Logger>);
}

/// Validate `config`, build a console logger and attach it to `host`.
///
/// Defaults are merged in first, so `{}` installs a debug-level logger.
/// On failure nothing is attached.
pub fn install<H: LoggerHost + ?Sized>(host: &mut H, config: &Value) -> Result<Arc<Logger>> {
    let options = parse_options(config)?;
    attach(host, options, default_sink()?)
}

/// Like [`install`], writing to `sink` instead of the console.
pub fn install_with_sink<H: LoggerHost + ?Sized>(
    host: &mut H,
    config: &Value,
    sink: Arc<dyn Sink>,
) -> Result<Arc<Logger>> {
    let options = parse_options(config)?;
    attach(host, options, sink)
}

fn parse_options(config: &Value) -> Result<LoggerOptions> {
    for key in options::unknown_keys(config) {
        eprintln!("[LOGGER WARNING] Ignoring unknown logger option '{}'", key);
    }

    LoggerOptions::from_value(config).map_err(|e| match e {
        LoggerError::InvalidConfiguration { component, message } => {
            LoggerError::config(component, format!("{} ({})", INVALID_OPTIONS, message))
        }
        other => other,
    })
}

fn attach<H: LoggerHost + ?Sized>(
    host: &mut H,
    options: LoggerOptions,
    sink: Arc<dyn Sink>,
) -> Result<Arc<Logger>> {
    let logger = Arc::new(Logger::build(options, sink)?);
    host.attach_logger(Arc::clone(&logger));
    Ok(logger)
}

/// Minimal composition root holding the shared logger.
#[derive(Debug, Default)]
pub struct AppContext {
    log: Option<Arc<Logger>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed logger, if any
    pub fn log(&self) -> Option<&Arc<Logger>> {
        self.log.as_ref()
    }

    /// Create a component wired to the shared logger.
    pub fn component(&self, name: impl Into<String>) -> Result<Component> {
        let log = self
            .log
            .clone()
            .ok_or_else(|| LoggerError::other("no logger installed"))?;
        Ok(Component {
            name: name.into(),
            log,
        })
    }
}

impl LoggerHost for AppContext {
    fn attach_logger(&mut self, logger: Arc<Logger>) {
        self.log = Some(logger);
    }
}

/// A unit of application code with access to the shared logger.
#[derive(Debug, Clone)]
pub struct Component {
    name: String,
    log: Arc<Logger>,
}

impl Component {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log(&self) -> &Logger {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::sinks::MemorySink;
    use serde_json::json;

    #[test]
    fn test_install_attaches_shared_logger() {
        let mut app = AppContext::new();
        let sink = Arc::new(MemorySink::new());
        let logger = install_with_sink(&mut app, &json!({ "logLevel": "info" }), sink.clone()).unwrap();

        let a = app.component("header").unwrap();
        let b = app.component("footer").unwrap();
        assert!(Arc::ptr_eq(app.log().unwrap(), &logger));
        assert_eq!(a.name(), "header");

        a.log().info(&[&"from a"]).unwrap();
        b.log().debug(&[&"hidden"]).unwrap();
        b.log().warn(&[&"from b"]).unwrap();
        assert_eq!(sink.records().len(), 2);
        assert_eq!(a.log().min_level(), LogLevel::Info);
    }

    #[test]
    fn test_install_rejects_and_attaches_nothing() {
        let mut app = AppContext::new();
        let sink = Arc::new(MemorySink::new());
        let err = install_with_sink(&mut app, &json!({ "logLevel": "loud" }), sink).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid configuration for logLevel: Provided options for the logger are not valid \
             (Invalid log level: 'loud')"
        );
        assert_eq!(err.component(), Some("logLevel"));
        assert!(app.log().is_none());
        assert!(app.component("any").is_err());
    }

    #[test]
    fn test_install_merges_defaults() {
        let mut app = AppContext::new();
        let sink = Arc::new(MemorySink::new());
        let logger = install_with_sink(&mut app, &json!({}), sink).unwrap();
        assert_eq!(logger.min_level(), LogLevel::Debug);
        assert_eq!(logger.options().separator, "|");
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_install_with_console() {
        let mut app = AppContext::new();
        let logger = install(&mut app, &json!({ "logLevel": "fatal" })).unwrap();
        assert_eq!(logger.sink().name(), "console");
    }
}
