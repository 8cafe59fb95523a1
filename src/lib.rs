//! Field-redaction layer for structured log sinks.
//!
//! This crate separates:
//! - **Policies**: pure string transformations that mask sensitive values
//!   ([`TextRedactionPolicy`] and the presets in [`policy::presets`]).
//! - **Rules**: an immutable table binding policies to exact field names
//!   ([`RuleSet`]).
//! - **The boundary**: [`RedactingSink`], a decorator over any [`Sink`] that
//!   applies the table to each write and forwards everything else verbatim.
//!
//! What this crate does:
//! - masks string-valued fields whose names carry a registered rule
//! - guarantees bounds-safe masking (short values degrade to placeholders,
//!   never to out-of-range slicing)
//! - preserves field count, order and non-matched values exactly
//! - propagates the wrapped sink's errors unchanged (fault transparency)
//! - provides concrete sinks (JSON lines, in-memory capture) and boundary
//!   adapters for `slog` and `tracing` behind feature flags
//!
//! What it does not do:
//! - inspect or rewrite entry metadata (level, message, timestamp, location)
//! - scan message text for patterns; matching is by field name only
//! - allow rule changes after construction
//!
//! # Example
//!
//! ```
//! use logveil::{CaptureSink, Field, Level, LogEntry, RedactingSink, RuleSet, Sink};
//!
//! let output = CaptureSink::new();
//! let sink = RedactingSink::new(output.clone(), RuleSet::with_defaults());
//!
//! sink.write(
//!     LogEntry::new(Level::Info, "verification sms sent"),
//!     vec![
//!         Field::new("phone", "13800138000"),
//!         Field::new("template", "welcome"),
//!     ],
//! )?;
//!
//! let writes = output.writes();
//! assert_eq!(writes[0].fields[0].value().as_str(), Some("138****8000"));
//! assert_eq!(writes[0].fields[1].value().as_str(), Some("welcome"));
//! # Ok::<(), logveil::WriteError>(())
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::option_if_let_else,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod entry;
mod field;
pub mod policy;
mod rules;
mod sink;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from the entry and field model
pub use entry::{Level, Location, LogEntry};
pub use field::{Field, FieldValue};
// Re-exports from the policy module
pub use policy::{
    CustomMask, ELIDE_TOKEN, ElideConfig, EmailConfig, KeepConfig, MASK_CHAR, MaskConfig,
    REDACTED_PLACEHOLDER, TextRedactionPolicy,
};
// Re-exports from the rule table
pub use rules::{RuleSet, RuleSetBuilder};
#[cfg(feature = "json")]
pub use sink::JsonSink;
// Re-exports from the sink boundary
pub use sink::{CaptureSink, CapturedWrite, FailingSink, RedactingSink, Sink, WriteError};
#[cfg(feature = "slog")]
pub use slog::SinkDrain;
#[cfg(feature = "tracing")]
pub use tracing::TracingRedactedExt;
