//! Console sink implementation

use crate::core::{Channel, LogRecord, Result, Sink};
use colored::Colorize;
use std::io::Write;

pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Allow or forbid color output regardless of the logger options
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Text written for `record`, colored when the record asks for it.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let color = record.style.color.filter(|_| self.use_colors && record.colored);
        let Some((r, g, b)) = color else {
            return record.format_line();
        };

        let head = [record.style.glyph.unwrap_or(""), record.prefix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let message = record.message();

        match (head.is_empty(), message.is_empty()) {
            (true, _) => message,
            (false, true) => head.truecolor(r, g, b).to_string(),
            (false, false) => format!("{} {}", head.truecolor(r, g, b), message),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &LogRecord<'_>) -> Result<()> {
        let line = self.format(record);

        // Warning and error channels go to stderr, the standard channel to stdout
        match record.channel {
            Channel::Standard => writeln!(std::io::stdout().lock(), "{}", line)?,
            Channel::Warning | Channel::Error => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Payload};

    #[test]
    fn test_plain_format_without_colors() {
        let sink = ConsoleSink::with_colors(false);
        let record = LogRecord::new(LogLevel::Info, "info |".to_string(), vec![Payload::Raw(&"up")])
            .with_colors(true);
        assert_eq!(sink.format(&record), "🔷 info | up");
    }

    #[test]
    fn test_colors_only_when_record_requests_them() {
        colored::control::set_override(true);
        let sink = ConsoleSink::new();

        let plain = LogRecord::new(LogLevel::Debug, String::new(), vec![Payload::Raw(&"x")]);
        assert_eq!(sink.format(&plain), "🔧 x");

        let colored = plain.clone().with_colors(true);
        let text = sink.format(&colored);
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with(" x"));
    }

    #[test]
    fn test_levels_without_color_stay_plain() {
        let sink = ConsoleSink::new();
        let record = LogRecord::new(LogLevel::Error, String::new(), vec![Payload::Raw(&"boom")])
            .with_colors(true);
        assert_eq!(sink.format(&record), "⛔ boom");
    }

    #[test]
    fn test_write_and_flush() {
        let sink = ConsoleSink::with_colors(false);
        let record = LogRecord::new(LogLevel::Warn, String::new(), vec![Payload::Raw(&"disk")]);
        assert!(sink.write(&record).is_ok());
        assert!(sink.flush().is_ok());
        assert_eq!(sink.name(), "console");
    }
}
