//! Failure modes at the sink boundary.
//!
//! Redaction itself never fails: rule lookup and masking are total, so the
//! only errors that can surface from a redacting chain are the wrapped
//! sink's own. One shared error type across all sinks keeps propagation
//! literal — a decorator hands back the same value it received.

use thiserror::Error;

/// An error from a sink's `write` operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteError {
    /// The output writer failed.
    #[error("log output write failed")]
    Io(#[from] std::io::Error),

    /// The entry could not be encoded as JSON.
    #[cfg(feature = "json")]
    #[error("log entry serialization failed")]
    Serialize(#[from] serde_json::Error),

    /// A foreign sink implementation failed.
    #[error(transparent)]
    Sink(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl WriteError {
    /// Wraps a foreign sink's error.
    pub fn sink<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Sink(Box::new(error))
    }
}
