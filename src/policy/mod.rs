//! Redaction policies: pure string transformations and common presets.
//!
//! - **`text`**: the [`TextRedactionPolicy`] enum and its configuration types
//!   (`KeepConfig`, `MaskConfig`, `ElideConfig`, `EmailConfig`, `CustomMask`).
//! - **`presets`**: named constructors for common sensitive field shapes
//!   (phone numbers, emails, card numbers, tokens).
//!
//! Policies know nothing about fields or sinks; binding a policy to a field
//! name happens in [`RuleSet`](crate::RuleSet).

pub mod presets;
pub mod text;

pub use text::{
    CustomMask, ELIDE_TOKEN, ElideConfig, EmailConfig, KeepConfig, MASK_CHAR, MaskConfig,
    REDACTED_PLACEHOLDER, TextRedactionPolicy,
};
