//! Log record structure handed to sinks

use super::log_level::LogLevel;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A value that can be passed to a log call.
///
/// Implemented for every `Serialize + Debug` type, so strings, numbers,
/// collections and derived structs all work as arguments.
pub trait Loggable: fmt::Debug {
    /// JSON text of the value
    fn to_json(&self) -> serde_json::Result<String>;

    /// JSON tree of the value
    fn to_json_value(&self) -> serde_json::Result<Value>;

    /// Human-readable text: strings as-is, everything else via `Debug`.
    fn render(&self) -> String {
        match self.to_json_value() {
            Ok(Value::String(text)) => text,
            _ => format!("{:?}", self),
        }
    }
}

impl<T: Serialize + fmt::Debug + ?Sized> Loggable for T {
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Output stream a record is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Standard,
    Warning,
    Error,
}

/// Decoration applied in front of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub glyph: Option<&'static str>,
    /// 24-bit RGB
    pub color: Option<(u8, u8, u8)>,
}

impl Style {
    pub const PLAIN: Style = Style {
        glyph: None,
        color: None,
    };

    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Style {
                glyph: Some("🔧"),
                color: Some((0x9E, 0x9E, 0x9E)),
            },
            LogLevel::Info => Style {
                glyph: Some("🔷"),
                color: Some((0x03, 0xA9, 0xF4)),
            },
            LogLevel::Warn => Style {
                glyph: Some("⚠️"),
                color: None,
            },
            LogLevel::Error => Style {
                glyph: Some("⛔"),
                color: None,
            },
            LogLevel::Fatal => Style {
                glyph: Some("💣"),
                color: None,
            },
        }
    }
}

impl Channel {
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug | LogLevel::Info => Channel::Standard,
            LogLevel::Warn => Channel::Warning,
            LogLevel::Error | LogLevel::Fatal => Channel::Error,
        }
    }
}

/// One argument as the sink receives it.
#[derive(Debug, Clone)]
pub enum Payload<'a> {
    /// The caller's own value, untouched
    Raw(&'a dyn Loggable),
    /// JSON text produced by argument stringification
    Json(String),
}

impl Payload<'_> {
    pub fn render(&self) -> String {
        match self {
            Payload::Raw(value) => value.render(),
            Payload::Json(text) => text.clone(),
        }
    }
}

/// Everything one log call forwards to a sink.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    /// `None` when emitted under a level name the logger does not know
    pub level: Option<LogLevel>,
    pub channel: Channel,
    pub style: Style,
    /// Method and level segments, already joined; may be empty
    pub prefix: String,
    /// Whether the sink should apply `style.color`
    pub colored: bool,
    pub args: Vec<Payload<'a>>,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, prefix: String, args: Vec<Payload<'a>>) -> Self {
        Self {
            level: Some(level),
            channel: Channel::for_level(level),
            style: Style::for_level(level),
            prefix,
            colored: false,
            args,
        }
    }

    /// Record for an unrecognized level name.
    pub fn plain(prefix: String, args: Vec<Payload<'a>>) -> Self {
        Self {
            level: None,
            channel: Channel::Standard,
            style: Style::PLAIN,
            prefix,
            colored: false,
            args,
        }
    }

    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Arguments rendered and joined by single spaces.
    pub fn message(&self) -> String {
        self.args
            .iter()
            .map(Payload::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Plain text of the whole line: glyph, prefix, then arguments.
    pub fn format_line(&self) -> String {
        let message = self.message();
        [self.style.glyph.unwrap_or(""), self.prefix.as_str(), message.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
