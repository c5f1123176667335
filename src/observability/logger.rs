//! Structured JSON logger.
//!
//! One log line is one event, serialized as a JSON object carrying `event`,
//! `severity`, and the caller's fields. Key ordering is deterministic
//! (sorted) so log output is diffable across runs. Writes are synchronous
//! and unbuffered.

use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail.
    Trace,
    /// Normal operations.
    Info,
    /// Recoverable issues.
    Warn,
    /// Operation failures.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Structured logger writing one JSON object per line.
pub struct Logger;

impl Logger {
    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, String)],
        writer: &mut W,
    ) {
        let mut record = Map::new();
        record.insert("event".to_string(), Value::String(event.to_string()));
        record.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);
        for (key, value) in sorted {
            record.insert(key.to_string(), Value::String(value.clone()));
        }

        let mut line = Value::Object(record).to_string();
        line.push('\n');
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    pub fn trace(event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(Severity::Trace, event, fields, &mut io::stdout());
    }

    pub fn info(event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(Severity::Info, event, fields, &mut io::stdout());
    }

    pub fn warn(event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(Severity::Warn, event, fields, &mut io::stdout());
    }

    pub fn error(event: &str, fields: &[(&str, String)]) {
        Self::log_to_writer(Severity::Error, event, fields, &mut io::stderr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, String)]) -> String {
        let mut buffer = Vec::new();
        Logger::log_to_writer(severity, event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_line_is_valid_json() {
        let line = capture(Severity::Info, "SOLVE_COMPLETED", &[]);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "SOLVE_COMPLETED");
        assert_eq!(value["severity"], "INFO");
    }

    #[test]
    fn test_fields_are_sorted() {
        let a = capture(
            Severity::Info,
            "E",
            &[("zulu", "1".into()), ("alpha", "2".into())],
        );
        let b = capture(
            Severity::Info,
            "E",
            &[("alpha", "2".into()), ("zulu", "1".into())],
        );
        assert_eq!(a, b);
        assert!(a.find("alpha").unwrap() < a.find("zulu").unwrap());
    }

    #[test]
    fn test_one_line_per_event() {
        let line = capture(Severity::Warn, "E", &[("detail", "a\nb".into())]);
        assert_eq!(line.matches('\n').count(), 1);
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }
}
