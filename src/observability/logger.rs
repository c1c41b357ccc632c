//! Structured JSON logging for tourcal
//!
//! - Structured logs (JSON), one log line = one event
//! - Event and severity keys first, remaining fields in sorted order
//! - Errors to stderr, everything else to stdout
//! - Synchronous, no buffering

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (skipped files, dropped records)
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Injectable logging interface.
///
/// The tour store and the HTTP layer receive an `Arc<dyn EventLog>` at
/// construction rather than writing to a process-global logger, so tests
/// can observe skipped files and dropped records through [`MemoryLog`].
pub trait EventLog: Send + Sync {
    /// Record an event with the given severity and fields.
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]);

    /// Log at TRACE level
    fn trace(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Trace, event, fields);
    }

    /// Log at INFO level
    fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// A logger that writes one JSON line per event.
///
/// Field ordering is deterministic (alphabetical by key) so identical
/// events always render identically.
#[derive(Debug, Default)]
pub struct JsonLogger;

impl JsonLogger {
    /// Create a new JSON line logger.
    pub fn new() -> Self {
        Self
    }
}

impl EventLog for JsonLogger {
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = render_line(severity, event, fields);
        if severity >= Severity::Error {
            write_line(&mut io::stderr(), &line);
        } else {
            write_line(&mut io::stdout(), &line);
        }
    }
}

fn write_line<W: Write>(writer: &mut W, line: &str) {
    // Write atomically (one syscall)
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

/// Render an event as a single JSON line.
///
/// Builds JSON manually to keep key ordering deterministic: `event` first,
/// then `severity`, then the remaining fields sorted alphabetically.
pub fn render_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(256);

    output.push('{');

    output.push_str("\"event\":\"");
    escape_json_string(&mut output, event);
    output.push('"');

    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push('}');
    output.push('\n');

    output
}

/// Escape special characters for JSON strings
fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

/// One recorded entry in a [`MemoryLog`].
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: Severity,
    pub event: String,
    pub fields: Vec<(String, String)>,
}

/// In-memory log implementation for tests.
///
/// Records every entry so assertions can check which events fired.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    /// Create a new in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Check whether an event with the given name was recorded.
    pub fn has_event(&self, event: &str) -> bool {
        self.entries.lock().unwrap().iter().any(|e| e.event == event)
    }
}

impl EventLog for MemoryLog {
    fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let entry = LogEntry {
            severity,
            event: event.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        self.entries.lock().unwrap().push(entry);
    }
}
