//! Log entry metadata: level, message, timestamp and source location.
//!
//! An entry describes one log event. The redaction layer treats it as opaque
//! cargo: it is forwarded to the inner sink untouched, and only the fields
//! attached alongside it are ever inspected.

use std::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "json")]
use serde::{Serialize, Serializer};

/// Severity of a log event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Lowercase name, as emitted by structured sinks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "json")]
impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Source location of a log statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    file: &'static str,
    line: u32,
    module: &'static str,
}

impl Location {
    #[must_use]
    pub fn new(file: &'static str, line: u32, module: &'static str) -> Self {
        Self { file, line, module }
    }

    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn module(&self) -> &'static str {
        self.module
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Metadata for one log event.
///
/// Timestamps are assigned at construction. Entries carry no fields; the
/// ordered field sequence travels next to the entry through
/// [`Sink::write`](crate::Sink::write) so that the redaction layer can
/// transform fields without touching entry metadata.
#[derive(Clone, Debug)]
pub struct LogEntry {
    level: Level,
    message: String,
    timestamp: DateTime<Utc>,
    location: Option<Location>,
}

impl LogEntry {
    /// Creates an entry stamped with the current time.
    pub fn new<M>(level: Level, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            location: None,
        }
    }

    /// Attaches a source location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Overrides the timestamp. Useful for deterministic tests and for
    /// bridges that receive an already-stamped event.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, Location, LogEntry};

    #[test]
    fn level_names_are_lowercase() {
        assert_eq!(Level::Trace.as_str(), "trace");
        assert_eq!(Level::Error.to_string(), "error");
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn entry_carries_location_when_attached() {
        let entry = LogEntry::new(Level::Info, "started")
            .with_location(Location::new("src/main.rs", 42, "app"));
        assert_eq!(entry.message(), "started");
        let location = entry.location().expect("location was attached");
        assert_eq!(location.file(), "src/main.rs");
        assert_eq!(location.line(), 42);
        assert_eq!(location.to_string(), "src/main.rs:42");
    }

    #[test]
    fn entry_without_location_has_none() {
        let entry = LogEntry::new(Level::Debug, "tick");
        assert!(entry.location().is_none());
    }
}
