//! Ready-made policies for common sensitive field shapes.
//!
//! Each preset is a plain constructor returning a [`TextRedactionPolicy`],
//! meant to be registered under a field name of your choosing:
//!
//! ```
//! use logveil::{RuleSet, policy::presets};
//!
//! let rules = RuleSet::builder()
//!     .rule("phone", presets::phone())
//!     .rule("card_number", presets::credit_card())
//!     .build();
//! ```
//!
//! Only [`phone`] is registered by [`RuleSet::with_defaults`](crate::RuleSet::with_defaults);
//! everything else is opt-in.

use super::text::TextRedactionPolicy;

/// Phone numbers: first 3 and last 4 characters visible, fixed token between.
///
/// `"13800138000"` → `"138****8000"`. Values shorter than 7 characters yield
/// a fixed 7-character placeholder instead of risking out-of-range spans.
#[must_use]
pub fn phone() -> TextRedactionPolicy {
    TextRedactionPolicy::elide(3, 4)
}

/// Email addresses: first 2 characters of the local part, domain preserved.
///
/// `"alice@example.com"` → `"al***@example.com"`.
#[must_use]
pub fn email() -> TextRedactionPolicy {
    TextRedactionPolicy::email_local(2)
}

/// Card numbers and PANs: last 4 digits visible.
///
/// `"4111111111111111"` → `"************1111"`.
#[must_use]
pub fn credit_card() -> TextRedactionPolicy {
    TextRedactionPolicy::keep_last(4)
}

/// API keys and bearer tokens: last 4 characters visible.
#[must_use]
pub fn token() -> TextRedactionPolicy {
    TextRedactionPolicy::keep_last(4)
}

/// IP addresses: last 4 characters visible.
#[must_use]
pub fn ip_address() -> TextRedactionPolicy {
    TextRedactionPolicy::keep_last(4)
}

/// Names and other short identifying text: last 2 characters visible.
#[must_use]
pub fn pii() -> TextRedactionPolicy {
    TextRedactionPolicy::keep_last(2)
}

/// Passwords and opaque secrets: full placeholder, nothing visible.
#[must_use]
pub fn secret() -> TextRedactionPolicy {
    TextRedactionPolicy::default_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_produce_expected_shapes() {
        assert_eq!(phone().apply_to("13800138000"), "138****8000");
        assert_eq!(email().apply_to("alice@example.com"), "al***@example.com");
        assert_eq!(credit_card().apply_to("4111111111111111"), "************1111");
        assert_eq!(token().apply_to("sk_live_abc123"), "**********c123");
        assert_eq!(ip_address().apply_to("192.168.1.100"), "*********.100");
        assert_eq!(pii().apply_to("John Doe"), "******oe");
        assert_eq!(secret().apply_to("hunter2"), "[REDACTED]");
    }
}
