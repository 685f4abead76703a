//! Bounded in-memory log buffer
//!
//! Stores the most recent entries in arrival order, evicting the oldest once
//! capacity is exceeded, and forwards every entry to the configured sink.

use std::collections::VecDeque;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sink::{ConsoleSink, LogSink};

/// Default capacity used by [`RingLog::default`] and the factory.
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Severity of a log entry
///
/// Filtering matches severities exactly; there is no ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Get the display name for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp when the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Entry severity
    pub level: Severity,
    /// Log message
    pub message: String,
}

impl LogEntry {
    /// Create a new entry stamped with the current time
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
        }
    }
}

/// Thread-safe ring buffer of recent log entries
///
/// Holds at most `max_size` entries; inserting into a full buffer evicts the
/// oldest entry. Every insertion is also forwarded to the sink as a
/// `[LEVEL] message` line, including when the capacity is zero and nothing
/// is stored.
pub struct RingLog {
    /// Entries in arrival order (capped at max_size)
    entries: RwLock<VecDeque<LogEntry>>,
    /// Maximum entries to keep
    max_size: usize,
    /// Output collaborator for forwarded lines
    sink: Box<dyn LogSink>,
}

impl RingLog {
    /// Create a ring log that forwards to the console channels
    ///
    /// Negative capacities are clamped to zero; a zero-capacity log stores
    /// nothing but still forwards.
    pub fn new(max_size: isize) -> Self {
        Self::with_sink(max_size, Box::new(ConsoleSink))
    }

    /// Create a ring log with a custom output sink
    pub fn with_sink(max_size: isize, sink: Box<dyn LogSink>) -> Self {
        let max_size = usize::try_from(max_size).unwrap_or(0);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_size)),
            max_size,
            sink,
        }
    }

    /// Record a debug entry
    pub fn debug(&self, message: impl Into<String>) {
        self.record(Severity::Debug, message.into());
    }

    /// Record an info entry
    pub fn info(&self, message: impl Into<String>) {
        self.record(Severity::Info, message.into());
    }

    /// Record a warning entry
    pub fn warn(&self, message: impl Into<String>) {
        self.record(Severity::Warn, message.into());
    }

    /// Record an error entry
    pub fn error(&self, message: impl Into<String>) {
        self.record(Severity::Error, message.into());
    }

    /// Buffer the entry (unless capacity is zero) and forward it to the sink
    fn record(&self, level: Severity, message: String) {
        let line = format!("[{}] {}", level.as_str(), message);

        if self.max_size > 0 {
            if let Ok(mut entries) = self.entries.write() {
                if entries.len() >= self.max_size {
                    entries.pop_front();
                }
                entries.push_back(LogEntry::new(level, message));
            }
        }

        self.sink.write(level, &line);
    }

    /// Get a snapshot of all entries, oldest first
    ///
    /// The returned vector is an independent copy; mutating it does not
    /// affect the buffer.
    pub fn logs(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get a snapshot of the entries with the given severity, oldest first
    ///
    /// Returns an empty vector when no entry matches.
    pub fn logs_by_level(&self, level: Severity) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|e| {
                e.iter()
                    .filter(|entry| entry.level == level)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the fixed capacity set at construction
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drop all stored entries, keeping the capacity
    ///
    /// Nothing is forwarded to the sink.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for RingLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE as isize)
    }
}
