//! Adapter for emitting rule-masked values through `tracing`.
//!
//! `tracing` events declare their field names statically, so a rule table
//! cannot intercept them at a sink the way the slog drain bridge can for
//! slog. Instead the masking moves to the call site: ask the rule set for
//! the logging-safe rendition of a value and pass that as the field.
//!
//! ```ignore
//! use logveil::{RuleSet, tracing::TracingRedactedExt};
//!
//! let rules = RuleSet::with_defaults();
//! tracing::info!(phone = %rules.tracing_redacted("phone", &phone), "sms sent");
//! ```
//!
//! A name with no registered rule renders the value unchanged, mirroring
//! the sink-side passthrough behavior.

use tracing::field::{DisplayValue, display};

use crate::rules::RuleSet;

/// Extension trait for rendering rule-masked values as `tracing` fields.
pub trait TracingRedactedExt {
    /// Applies the rule registered for `name` (if any) and wraps the result
    /// for `tracing` as a display value.
    fn tracing_redacted(&self, name: &str, value: &str) -> DisplayValue<String>;
}

impl TracingRedactedExt for RuleSet {
    fn tracing_redacted(&self, name: &str, value: &str) -> DisplayValue<String> {
        let text = match self.policy_for(name) {
            Some(policy) => policy.apply_to(value),
            None => value.to_string(),
        };
        display(text)
    }
}
