//! JSONL event log: append-only line-delimited JSON.
//!
//! Each line is a self-contained JSON object, assembled in memory and
//! written with a single `write_all` so a tailing process never sees a
//! partial line. Degradation chain: configured file → stderr → silent
//! discard — the dashboard must never fail because logging did.
//!
//! This log is also the observable channel for locally-recovered
//! conditions, such as a chart mode falling back to the bar representation.

#![allow(missing_docs)]

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Event types matching the dashboard activity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DatasetLoaded,
    LoadFailed,
    ChartFallback,
    InputIgnored,
}

/// A single JSONL entry — `ts`, `event`, `severity` always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    pub event: EventType,
    pub severity: Severity,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// LXD error code when the event reports a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Record count involved (e.g. snapshot size on load).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    #[must_use]
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: format_utc_now(),
            event,
            severity,
            details: None,
            error_code: None,
            record_count: None,
        }
    }

    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    #[must_use]
    pub const fn record_count(mut self, count: usize) -> Self {
        self.record_count = Some(count);
        self
    }
}

fn format_utc_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug)]
enum Sink {
    File(BufWriter<std::fs::File>),
    Stderr,
    Memory(Vec<String>),
    Discard,
}

/// Append-only event log with a never-fail write path.
#[derive(Debug)]
pub struct EventLog {
    sink: Sink,
}

impl EventLog {
    /// Log to a file, opened in append mode. Falls back to stderr if the
    /// file cannot be opened.
    #[must_use]
    pub fn to_file(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Sink::File(BufWriter::new(file)),
            },
            Err(e) => {
                eprintln!("[LEXIDASH-LOG] cannot open {}: {e}; using stderr", path.display());
                Self::stderr()
            }
        }
    }

    #[must_use]
    pub const fn stderr() -> Self {
        Self { sink: Sink::Stderr }
    }

    /// Collect entries in memory. Used by tests to assert on emitted events.
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            sink: Sink::Memory(Vec::new()),
        }
    }

    /// Drop every entry.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            sink: Sink::Discard,
        }
    }

    /// Append one entry, degrading the sink on write failure.
    pub fn append(&mut self, entry: &LogEntry) {
        let Ok(mut line) = serde_json::to_string(entry) else {
            return;
        };
        line.push('\n');
        let failed = match &mut self.sink {
            Sink::File(writer) => writer
                .write_all(line.as_bytes())
                .and_then(|()| writer.flush())
                .is_err(),
            Sink::Stderr => io::stderr().write_all(line.as_bytes()).is_err(),
            Sink::Memory(lines) => {
                lines.push(line.trim_end().to_string());
                false
            }
            Sink::Discard => false,
        };
        if failed {
            self.degrade(&line);
        }
    }

    /// Recorded lines for the in-memory sink; empty for every other sink.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Memory(lines) => lines,
            _ => &[],
        }
    }

    /// Whether any recorded entry matches the given event type. In-memory
    /// sink only.
    #[must_use]
    pub fn contains_event(&self, event: EventType) -> bool {
        let Ok(needle) = serde_json::to_string(&event) else {
            return false;
        };
        self.lines()
            .iter()
            .any(|line| line.contains(&format!("\"event\":{needle}")))
    }

    fn degrade(&mut self, line: &str) {
        if matches!(self.sink, Sink::File(_)) {
            self.sink = Sink::Stderr;
            if io::stderr().write_all(line.as_bytes()).is_err() {
                self.sink = Sink::Discard;
            }
        } else {
            self.sink = Sink::Discard;
        }
    }
}
