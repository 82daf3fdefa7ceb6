//! Logging macros for variadic log calls.
//!
//! Each macro takes a logger followed by any number of values that implement
//! [`Loggable`](crate::Loggable). A leading `at = <method>;` tags the call
//! with a caller method name. Every macro evaluates to the `Result<()>` of
//! the call.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warn};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .show_method_name(true)
//!     .sink(sink.clone())
//!     .build()?;
//!
//! // Values of different types in one call
//! info!(logger, "Server listening on port", 8080)?;
//!
//! // Tagged with the calling method
//! warn!(logger, at = "connect"; "retrying", 3)?;
//!
//! assert_eq!(sink.lines()[1], "⚠️ connect | retrying 3");
//! # Ok::<(), LoggerError>(())
//! ```

/// Log values at a given level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::build(LoggerOptions::default(), std::sync::Arc::new(MemorySink::new())).unwrap();
/// use leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code:", 500).unwrap();
/// log!(logger, LogLevel::Warn, at = "save"; "slow write").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, at = $method:expr; $($arg:expr),+ $(,)?) => {
        $logger
            .at($method)
            .log($level, &[$(&$arg as &dyn $crate::Loggable),+])
    };
    ($logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.log($level, &[$(&$arg as &dyn $crate::Loggable),+])
    };
}

/// Log at debug level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::build(LoggerOptions::default(), std::sync::Arc::new(MemorySink::new())).unwrap();
/// use leveled_logger::debug;
/// debug!(logger, "Counter value:", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at fatal level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::build(LoggerOptions::default(), std::sync::Arc::new(MemorySink::new())).unwrap();
/// use leveled_logger::fatal;
/// fatal!(logger, "Unable to recover from error:", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger, LoggerOptions};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn logger_with(options: LoggerOptions) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Logger::build(options, sink.clone()).unwrap(), sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger_with(LoggerOptions::default());
        log!(logger, LogLevel::Info, "Test message").unwrap();
        log!(logger, LogLevel::Info, "Values:", 42, true, vec!["a", "b"]).unwrap();
        assert_eq!(sink.records()[1].args, vec!["Values:", "42", "true", "[\"a\", \"b\"]"]);
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger_with(LoggerOptions::default());
        debug!(logger, "Debug message").unwrap();
        info!(logger, "Items:", 100).unwrap();
        warn!(logger, "Retry", 1, "of", 3).unwrap();
        error!(logger, "Code:", 500).unwrap();
        fatal!(logger, "Critical failure:", "system").unwrap();

        let levels: Vec<_> = sink.records().iter().map(|r| r.level).collect();
        assert_eq!(
            levels,
            LogLevel::ALL.iter().copied().map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_method_form() {
        let options = LoggerOptions {
            show_method_name: true,
            show_log_level: true,
            ..LoggerOptions::default()
        };
        let (logger, sink) = logger_with(options);
        let method = String::from("beforeDestroy");

        info!(logger, at = &method; "tearing down").unwrap();
        assert_eq!(sink.records()[0].prefix, "beforeDestroy | info |");
    }

    #[test]
    fn test_trailing_comma() {
        let (logger, sink) = logger_with(LoggerOptions::default());
        info!(logger, "a", "b",).unwrap();
        assert_eq!(sink.records()[0].args, vec!["a", "b"]);
    }
}
