//! The rule table: field names bound to masking policies.
//!
//! A [`RuleSet`] is assembled once through [`RuleSetBuilder`] and is
//! read-only afterwards — no registration path exists post-construction, so
//! concurrent lookups from many threads need no locking. Matching is by
//! exact, case-sensitive field name; there is no wildcard or prefix matching.

use std::{borrow::Cow, collections::HashMap};

use crate::policy::{TextRedactionPolicy, presets};

/// An immutable mapping from field name to masking policy.
///
/// ```
/// use logveil::{RuleSet, TextRedactionPolicy};
///
/// let rules = RuleSet::builder()
///     .rule("phone", TextRedactionPolicy::elide(3, 4))
///     .rule("password", TextRedactionPolicy::default_full())
///     .build();
///
/// assert!(rules.policy_for("phone").is_some());
/// assert!(rules.policy_for("Phone").is_none()); // case-sensitive
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: HashMap<Cow<'static, str>, TextRedactionPolicy>,
}

impl RuleSet {
    /// Starts building a rule set.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder {
            rules: HashMap::new(),
        }
    }

    /// A rule set with the stock sensitive fields registered.
    ///
    /// Currently that is `"phone"` with the eliding phone policy
    /// ([`presets::phone`]). Everything else is opt-in through the builder.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::builder().rule("phone", presets::phone()).build()
    }

    /// A rule set that matches nothing; every field passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Looks up the policy registered for `name`, if any.
    #[must_use]
    pub fn policy_for(&self, name: &str) -> Option<&TextRedactionPolicy> {
        self.rules.get(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Builder for [`RuleSet`]. Registration happens here and only here.
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: HashMap<Cow<'static, str>, TextRedactionPolicy>,
}

impl RuleSetBuilder {
    /// Binds `policy` to the exact field name `name`.
    ///
    /// Registering the same name twice keeps the later policy.
    #[must_use]
    pub fn rule<N>(mut self, name: N, policy: TextRedactionPolicy) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        self.rules.insert(name.into(), policy);
        self
    }

    /// Freezes the table into an immutable [`RuleSet`].
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}
