//! The sink boundary: where entries and fields leave the process.
//!
//! - **`error`**: the [`WriteError`] taxonomy shared by every sink.
//! - **`redacting`**: [`RedactingSink`], the field-masking decorator.
//! - **`capture`**: [`CaptureSink`] and [`FailingSink`] for isolated tests.
//! - **`json`** (feature `json`): [`JsonSink`], one JSON object per line.
//!
//! A [`Sink`] is the capability the redaction layer wraps and implements:
//! the decorator exposes the exact same signature as the sink it decorates,
//! so callers cannot tell a redacting chain from a bare sink.

mod capture;
mod error;
#[cfg(feature = "json")]
mod json;
mod redacting;

use std::sync::Arc;

pub use capture::{CaptureSink, CapturedWrite, FailingSink};
pub use error::WriteError;
#[cfg(feature = "json")]
pub use json::JsonSink;
pub use redacting::RedactingSink;

use crate::{entry::LogEntry, field::Field};

/// A log-writing capability: persists or forwards one entry and its fields.
///
/// Fields are an ordered sequence; implementations must not reorder or drop
/// them. Taking `fields` by value means every call owns its data outright —
/// a layer that mutates values (as [`RedactingSink`] does) can never alias a
/// copy the caller still holds.
///
/// Implementations must be callable concurrently from many threads; any
/// interior I/O state needs its own synchronization.
pub trait Sink: Send + Sync {
    /// Writes one log event.
    ///
    /// Errors surface the sink's own failure and nothing else; decorators
    /// layered on top return them to the caller unchanged.
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError> {
        (**self).write(entry, fields)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError> {
        (**self).write(entry, fields)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write(&self, entry: LogEntry, fields: Vec<Field>) -> Result<(), WriteError> {
        (**self).write(entry, fields)
    }
}
