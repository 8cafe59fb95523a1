//! Masking policies for string-valued fields.
//!
//! A [`TextRedactionPolicy`] is a pure transformation from one string to
//! another. Policies never fail, never panic, and never index outside the
//! value: every shape saturates or degrades to a placeholder when the input
//! is shorter than the configured spans. All offsets count Unicode scalar
//! values, not bytes.

use std::{borrow::Cow, fmt, sync::Arc};

/// Default placeholder used for full redaction.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Default token inserted by eliding policies.
pub const ELIDE_TOKEN: &str = "****";

/// Keeps selected edges of the value visible and masks every character
/// in between, preserving the value's length.
///
/// Build instances with [`KeepConfig::first`], [`KeepConfig::last`] or
/// [`KeepConfig::both`].
#[derive(Clone, Copy, Debug)]
pub struct KeepConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    mask_char: char,
}

impl KeepConfig {
    /// Keeps only the first `visible_prefix` characters in clear text.
    #[must_use]
    pub fn first(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps only the last `visible_suffix` characters in clear text.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self {
            visible_prefix: 0,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Keeps both edges in clear text.
    ///
    /// When `visible_prefix + visible_suffix >= length` the whole value is
    /// already visible and the input is returned unchanged.
    #[must_use]
    pub fn both(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total == 0 {
            return REDACTED_PLACEHOLDER.to_string();
        }
        // Keep spans covering the whole value leave nothing to mask.
        if self.visible_prefix.saturating_add(self.visible_suffix) >= total {
            return chars.into_iter().collect();
        }
        for ch in &mut chars[self.visible_prefix..(total - self.visible_suffix)] {
            *ch = self.mask_char;
        }
        chars.into_iter().collect()
    }
}

/// Masks selected edges of the value and leaves the rest untouched.
///
/// The mirror image of [`KeepConfig`]: spans name what gets hidden, not
/// what stays visible.
#[derive(Clone, Copy, Debug)]
pub struct MaskConfig {
    mask_prefix: usize,
    mask_suffix: usize,
    mask_char: char,
}

impl MaskConfig {
    /// Masks only the first `mask_prefix` characters.
    #[must_use]
    pub fn first(mask_prefix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix: 0,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks only the last `mask_suffix` characters.
    #[must_use]
    pub fn last(mask_suffix: usize) -> Self {
        Self {
            mask_prefix: 0,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Masks both edges.
    ///
    /// When `mask_prefix + mask_suffix >= length` the whole value is masked.
    #[must_use]
    pub fn both(mask_prefix: usize, mask_suffix: usize) -> Self {
        Self {
            mask_prefix,
            mask_suffix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let mut chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total == 0 {
            return REDACTED_PLACEHOLDER.to_string();
        }
        // Overlapping mask spans collapse into a full mask.
        if self.mask_prefix.saturating_add(self.mask_suffix) >= total {
            chars.fill(self.mask_char);
            return chars.into_iter().collect();
        }
        for ch in &mut chars[..self.mask_prefix] {
            *ch = self.mask_char;
        }
        if self.mask_suffix > 0 {
            let start = total - self.mask_suffix;
            for ch in &mut chars[start..] {
                *ch = self.mask_char;
            }
        }
        chars.into_iter().collect()
    }
}

/// Keeps both edges visible and replaces the middle with a fixed token.
///
/// Unlike [`KeepConfig`] this does not preserve the value's length: the
/// middle collapses to `mask_token` no matter how many characters it spans.
/// A value shorter than `visible_prefix + visible_suffix` has no middle to
/// elide and yields a fixed-length all-mask placeholder instead, so short
/// inputs can never push the spans out of bounds.
#[derive(Clone, Debug)]
pub struct ElideConfig {
    visible_prefix: usize,
    visible_suffix: usize,
    mask_token: Cow<'static, str>,
}

impl ElideConfig {
    /// Keeps the first `visible_prefix` and last `visible_suffix` characters.
    #[must_use]
    pub fn new(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self {
            visible_prefix,
            visible_suffix,
            mask_token: Cow::Borrowed(ELIDE_TOKEN),
        }
    }

    /// Uses a specific token for the elided middle.
    #[must_use]
    pub fn with_mask_token<T>(mut self, mask_token: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        self.mask_token = mask_token.into();
        self
    }

    /// The placeholder returned for values too short to elide.
    ///
    /// Its length depends only on the configured spans, never on the input,
    /// so it leaks nothing about the original value's length.
    fn placeholder(&self) -> String {
        let mask = self.mask_token.chars().next().unwrap_or(MASK_CHAR);
        std::iter::repeat_n(mask, self.visible_prefix + self.visible_suffix).collect()
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        let chars: Vec<char> = value.chars().collect();
        let total = chars.len();
        if total < self.visible_prefix + self.visible_suffix {
            return self.placeholder();
        }
        let prefix: String = chars[..self.visible_prefix].iter().collect();
        let suffix: String = chars[total - self.visible_suffix..].iter().collect();
        format!("{prefix}{}{suffix}", self.mask_token)
    }
}

/// Masks the local part of an email address while preserving the domain.
///
/// Inputs without an `@` are masked like a prefix-keep policy.
#[derive(Clone, Copy, Debug)]
pub struct EmailConfig {
    visible_prefix: usize,
    mask_char: char,
}

impl EmailConfig {
    /// Keeps the first `visible_prefix` characters of the local part.
    #[must_use]
    pub fn new(visible_prefix: usize) -> Self {
        Self {
            visible_prefix,
            mask_char: MASK_CHAR,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        if value.is_empty() {
            return REDACTED_PLACEHOLDER.to_string();
        }
        match value.find('@') {
            Some(at_pos) => {
                let local: Vec<char> = value[..at_pos].chars().collect();
                if self.visible_prefix >= local.len() {
                    return value.to_string();
                }
                let visible: String = local[..self.visible_prefix].iter().collect();
                let masked: String =
                    std::iter::repeat_n(self.mask_char, local.len() - self.visible_prefix)
                        .collect();
                // `at_pos` is a char boundary, so the slice keeps the @ and domain intact.
                format!("{visible}{masked}{}", &value[at_pos..])
            }
            None => KeepConfig::first(self.visible_prefix)
                .with_mask_char(self.mask_char)
                .apply_to(value),
        }
    }
}

/// A user-supplied masking function.
///
/// The function must be pure: same input, same output, no I/O. It is the
/// implementor's responsibility not to panic; the built-in policies never do.
#[derive(Clone)]
pub struct CustomMask(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl CustomMask {
    /// Wraps a masking function.
    pub fn new<F>(mask: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(mask))
    }

    pub(crate) fn apply_to(&self, value: &str) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CustomMask").finish_non_exhaustive()
    }
}

// Masking functions are pure and hold no state a panic could corrupt.
// Without these, a single custom rule would stop the whole rule table (and
// any drain built over it) from crossing unwind boundaries.
impl std::panic::RefUnwindSafe for CustomMask {}
impl std::panic::UnwindSafe for CustomMask {}

/// A redaction strategy for string-valued fields.
///
/// Every variant is a total function over `&str`: out-of-range spans saturate
/// or fall back to placeholders, and the output is always an owned `String`.
#[derive(Clone, Debug)]
pub enum TextRedactionPolicy {
    /// Replace the entire value with a fixed placeholder.
    Full {
        /// The placeholder text to use.
        placeholder: Cow<'static, str>,
    },
    /// Keep configured edges visible, mask the middle character by character.
    Keep(KeepConfig),
    /// Mask configured edges, leave the remainder untouched.
    Mask(MaskConfig),
    /// Keep configured edges visible, collapse the middle into a fixed token.
    Elide(ElideConfig),
    /// Mask the local part of an email address, preserve the domain.
    Email(EmailConfig),
    /// Apply a user-registered masking function.
    Custom(CustomMask),
}

impl TextRedactionPolicy {
    /// Full redaction with [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn default_full() -> Self {
        Self::Full {
            placeholder: Cow::Borrowed(REDACTED_PLACEHOLDER),
        }
    }

    /// Full redaction with a custom placeholder.
    #[must_use]
    pub fn full_with<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    /// Keep policy from an explicit configuration.
    #[must_use]
    pub fn keep_with(config: KeepConfig) -> Self {
        Self::Keep(config)
    }

    /// Keeps only the first `visible_prefix` characters in clear text.
    #[must_use]
    pub fn keep_first(visible_prefix: usize) -> Self {
        Self::keep_with(KeepConfig::first(visible_prefix))
    }

    /// Keeps only the last `visible_suffix` characters in clear text.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::keep_with(KeepConfig::last(visible_suffix))
    }

    /// Mask policy from an explicit configuration.
    #[must_use]
    pub fn mask_with(config: MaskConfig) -> Self {
        Self::Mask(config)
    }

    /// Masks the first `mask_prefix` characters.
    #[must_use]
    pub fn mask_first(mask_prefix: usize) -> Self {
        Self::mask_with(MaskConfig::first(mask_prefix))
    }

    /// Masks the last `mask_suffix` characters.
    #[must_use]
    pub fn mask_last(mask_suffix: usize) -> Self {
        Self::mask_with(MaskConfig::last(mask_suffix))
    }

    /// Elide policy from an explicit configuration.
    #[must_use]
    pub fn elide_with(config: ElideConfig) -> Self {
        Self::Elide(config)
    }

    /// Keeps the first `visible_prefix` and last `visible_suffix` characters,
    /// eliding the middle with [`ELIDE_TOKEN`].
    ///
    /// # Example
    /// ```
    /// use logveil::TextRedactionPolicy;
    ///
    /// let policy = TextRedactionPolicy::elide(3, 4);
    /// assert_eq!(policy.apply_to("13800138000"), "138****8000");
    /// assert_eq!(policy.apply_to("123"), "*******");
    /// ```
    #[must_use]
    pub fn elide(visible_prefix: usize, visible_suffix: usize) -> Self {
        Self::elide_with(ElideConfig::new(visible_prefix, visible_suffix))
    }

    /// Keeps the first `visible_prefix` characters of the local part,
    /// preserving the domain.
    ///
    /// # Example
    /// ```
    /// use logveil::TextRedactionPolicy;
    ///
    /// let policy = TextRedactionPolicy::email_local(2);
    /// assert_eq!(policy.apply_to("alice@example.com"), "al***@example.com");
    /// ```
    #[must_use]
    pub fn email_local(visible_prefix: usize) -> Self {
        Self::Email(EmailConfig::new(visible_prefix))
    }

    /// Registers a custom masking function.
    ///
    /// # Example
    /// ```
    /// use logveil::TextRedactionPolicy;
    ///
    /// let policy = TextRedactionPolicy::custom(|value| format!("<{} chars>", value.len()));
    /// assert_eq!(policy.apply_to("secret"), "<6 chars>");
    /// ```
    #[must_use]
    pub fn custom<F>(mask: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(CustomMask::new(mask))
    }

    /// Overrides the masking character used by keep/mask/email policies.
    ///
    /// Has no effect on `Full`, `Elide` and `Custom`: the first two replace
    /// text with whole tokens rather than per-character masks, and custom
    /// functions own their output entirely.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        match &mut self {
            Self::Keep(config) => *config = config.with_mask_char(mask_char),
            Self::Mask(config) => *config = config.with_mask_char(mask_char),
            Self::Email(config) => *config = config.with_mask_char(mask_char),
            Self::Full { .. } | Self::Elide(_) | Self::Custom(_) => {}
        }
        self
    }

    /// Applies the policy to `value`.
    ///
    /// This method is total: it never errors and never panics for any input.
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            Self::Full { placeholder } => placeholder.clone().into_owned(),
            Self::Keep(config) => config.apply_to(value),
            Self::Mask(config) => config.apply_to(value),
            Self::Elide(config) => config.apply_to(value),
            Self::Email(config) => config.apply_to(value),
            Self::Custom(mask) => mask.apply_to(value),
        }
    }
}

impl std::default::Default for TextRedactionPolicy {
    fn default() -> Self {
        Self::default_full()
    }
}
