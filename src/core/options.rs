//! Logger configuration and option validation
//!
//! Options arrive as a loosely typed JSON map (camelCase keys, the shape a
//! host application hands over at setup time). [`check`] and [`validate`]
//! inspect that raw map; [`LoggerOptions`] is the typed, immutable result.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Longest separator accepted, in characters
pub const MAX_SEPARATOR_LEN: usize = 3;

pub const DEFAULT_SEPARATOR: &str = "|";

const BOOLEAN_KEYS: [&str; 4] = [
    "stringifyArguments",
    "showLogLevel",
    "showMethodName",
    "showConsoleColors",
];

/// `prefix` is the older spelling of `separator`.
const SEPARATOR_KEYS: [&str; 2] = ["separator", "prefix"];

/// Every key the validator knows about.
pub const KNOWN_KEYS: [&str; 7] = [
    "logLevel",
    "separator",
    "prefix",
    "stringifyArguments",
    "showLogLevel",
    "showMethodName",
    "showConsoleColors",
];

/// Logger configuration
///
/// Fields are public, so a value built by hand or deserialized directly may
/// break the separator limit; [`Logger::build`](crate::Logger::build) rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerOptions {
    /// Minimum level that produces output
    pub log_level: LogLevel,
    /// Text placed after each prefix segment
    pub separator: String,
    /// Serialize every argument to JSON text before it reaches the sink
    pub stringify_arguments: bool,
    pub show_log_level: bool,
    pub show_method_name: bool,
    pub show_console_colors: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            separator: DEFAULT_SEPARATOR.to_string(),
            stringify_arguments: false,
            show_log_level: false,
            show_method_name: false,
            show_console_colors: false,
        }
    }
}

impl LoggerOptions {
    /// Merge `config` over the defaults, validate the result and convert it.
    ///
    /// # Example
    ///
    /// ```
    /// use leveled_logger::{LoggerOptions, LogLevel};
    /// use serde_json::json;
    ///
    /// let options = LoggerOptions::from_value(&json!({ "logLevel": "warn" })).unwrap();
    /// assert_eq!(options.log_level, LogLevel::Warn);
    /// assert_eq!(options.separator, "|");
    /// ```
    pub fn from_value(config: &Value) -> Result<Self> {
        let mut merged = merge_defaults(config)?;
        check(&merged)?;

        if let Value::Object(map) = &mut merged {
            map.remove("prefix");
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Parse JSON configuration text, then behave like [`LoggerOptions::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Re-check constraints the type system does not carry.
    pub fn validate(&self) -> Result<()> {
        check_separator("separator", &self.separator)
    }
}

/// Whether `config` is an acceptable logger configuration.
///
/// # Example
///
/// ```
/// use leveled_logger::core::options::validate;
/// use serde_json::json;
///
/// assert!(validate(&json!({ "logLevel": "debug" })));
/// assert!(!validate(&json!({ "logLevel": "loud" })));
/// ```
pub fn validate(config: &Value) -> bool {
    check(config).is_ok()
}

/// Same checks as [`validate`], naming the first offending key.
pub fn check(config: &Value) -> Result<()> {
    let map = config
        .as_object()
        .ok_or_else(|| LoggerError::config("options", "expected an object"))?;

    match field(map, "logLevel") {
        None => return Err(LoggerError::config("logLevel", "is required")),
        Some(Value::String(name)) => {
            name.parse::<LogLevel>()
                .map_err(|e| LoggerError::config("logLevel", e))?;
        }
        Some(_) => return Err(LoggerError::config("logLevel", "must be a string")),
    }

    for key in BOOLEAN_KEYS {
        if let Some(value) = field(map, key) {
            if !value.is_boolean() {
                return Err(LoggerError::config(key, "must be a boolean"));
            }
        }
    }

    for key in SEPARATOR_KEYS {
        match field(map, key) {
            None => {}
            Some(Value::String(text)) => check_separator(key, text)?,
            Some(_) => return Err(LoggerError::config(key, "must be a string")),
        }
    }

    Ok(())
}

/// Keys present in `config` that no option reads.
pub fn unknown_keys(config: &Value) -> Vec<String> {
    config
        .as_object()
        .map(|map| {
            map.keys()
                .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

fn check_separator(key: &str, text: &str) -> Result<()> {
    if text.chars().count() > MAX_SEPARATOR_LEN {
        return Err(LoggerError::config(
            key,
            format!("must be at most {} characters", MAX_SEPARATOR_LEN),
        ));
    }
    Ok(())
}

/// Null counts as absent.
fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|value| !value.is_null())
}

fn merge_defaults(config: &Value) -> Result<Value> {
    let user = config
        .as_object()
        .ok_or_else(|| LoggerError::config("options", "expected an object"))?;

    let mut merged = match serde_json::to_value(LoggerOptions::default())? {
        Value::Object(map) => map,
        _ => return Err(LoggerError::other("default options did not serialize to a map")),
    };

    for (key, value) in user {
        if !value.is_null() {
            merged.insert(key.clone(), value.clone());
        }
    }

    if field(user, "separator").is_none() {
        if let Some(prefix) = field(user, "prefix") {
            merged.insert("separator".to_string(), prefix.clone());
        }
    }

    Ok(Value::Object(merged))
}
