//! The field-redaction decorator.

use super::{Sink, WriteError};
use crate::{
    entry::LogEntry,
    field::{Field, FieldValue},
    rules::RuleSet,
};

/// A sink decorator that masks sensitive field values before forwarding.
///
/// `RedactingSink` wraps any [`Sink`] and overrides exactly one behavior:
/// on every write it looks up each field's name in its [`RuleSet`] and, when
/// a rule matches a string-valued field, swaps the value for its masked form.
/// The entry itself, field order, field count, non-matched fields and
/// non-string values all pass through untouched, and so does the inner
/// sink's result — success or error, nothing is added, retried or swallowed.
///
/// The rule table is fixed at construction, so a `RedactingSink` is safe to
/// share across threads as freely as the sink it wraps.
///
/// ```
/// use logveil::{CaptureSink, Field, Level, LogEntry, RedactingSink, RuleSet, Sink};
///
/// let inner = CaptureSink::new();
/// let sink = RedactingSink::new(inner.clone(), RuleSet::with_defaults());
///
/// sink.write(
///     LogEntry::new(Level::Info, "sms sent"),
///     vec![Field::new("phone", "13800138000")],
/// )?;
///
/// let writes = inner.writes();
/// assert_eq!(writes[0].fields[0].value().as_str(), Some("138****8000"));
/// # Ok::<(), logveil::WriteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RedactingSink<S> {
    inner: S,
    rules: RuleSet,
}

impl<S> RedactingSink<S> {
    /// Wraps `inner` with the given rule table.
    ///
    /// To share the inner sink rather than hand it over, pass an `Arc`, a
    /// reference, or any other value with a [`Sink`] impl.
    pub fn new(inner: S, rules: RuleSet) -> Self {
        Self { inner, rules }
    }

    /// The wrapped sink.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// The rule table this decorator applies.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Unwraps the decorator, returning the inner sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sink> Sink for RedactingSink<S> {
    fn write(&self, entry: LogEntry, mut fields: Vec<Field>) -> Result<(), WriteError> {
        for field in &mut fields {
            let Some(policy) = self.rules.policy_for(field.name()) else {
                continue;
            };
            // Rules are defined over string-shaped data only; any other kind
            // passes through even when the name matches.
            if let FieldValue::Str(value) = field.value_mut() {
                *value = policy.apply_to(value).into();
            }
        }
        self.inner.write(entry, fields)
    }
}
