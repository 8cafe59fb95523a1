//! In-memory sinks for exercising redaction chains in isolation.

use std::sync::{Arc, Mutex, PoisonError};

use super::{Sink, WriteError};
use crate::{entry::LogEntry, field::Field};

/// One recorded `write` call.
#[derive(Clone, Debug)]
pub struct CapturedWrite {
    pub entry: LogEntry,
    pub fields: Vec<Field>,
}

/// A sink that records every write and never fails.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`RedactingSink`](super::RedactingSink) and keep another to assert on
/// what came out the far end.
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    writes: Arc<Mutex<Vec<CapturedWrite>>>,
}

impl CaptureSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    #[must_use]
    pub fn writes(&self) -> Vec<CapturedWrite> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of writes recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sink for CaptureSink {
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(CapturedWrite { entry, fields });
        Ok(())
    }
}

/// A sink that rejects every write with a fixed message.
///
/// Exists to verify that decorators propagate inner failures verbatim.
#[derive(Clone, Debug)]
pub struct FailingSink {
    message: &'static str,
}

impl FailingSink {
    #[must_use]
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SinkUnavailable(&'static str);

impl Sink for FailingSink {
    fn write(&self, _entry: LogEntry, _fields: Vec<Field>) -> Result<(), WriteError> {
        Err(WriteError::sink(SinkUnavailable(self.message)))
    }
}
