//! Named rule registry
//!
//! A [`RuleSet`] maps rule names to compiled full-string patterns. It is
//! seeded with the four built-in rules and stays mutable: callers may add
//! or overwrite entries by name at any time. There is no removal
//! operation.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::validators::{Pattern, PatternError};

// Built-in rule patterns. Pattern anchors every source itself; the
// explicit `^…$` here is redundant but harmless.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@(.+)$";
const PHONE_PATTERN: &str = r"^\d{10}$";
const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
const CREDIT_CARD_PATTERN: &str = r"^\d{16}$";

static BUILTIN_RULES: LazyLock<[(&'static str, Pattern); 4]> = LazyLock::new(|| {
    [
        ("email", Pattern::new(EMAIL_PATTERN).unwrap()),
        ("phone", Pattern::new(PHONE_PATTERN).unwrap()),
        ("date", Pattern::new(DATE_PATTERN).unwrap()),
        ("creditCard", Pattern::new(CREDIT_CARD_PATTERN).unwrap()),
    ]
});

/// A registry of named, compiled full-string patterns.
///
/// Invariant: every stored [`Pattern`] compiled successfully at
/// registration time. [`add`](Self::add) compiles before it inserts, so a
/// source that fails to compile never displaces an existing rule.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::rules::RuleSet;
///
/// let mut rules = RuleSet::with_builtin_rules();
/// rules.add("zip", r"^\d{5}$")?;
/// assert!(rules.get("zip").unwrap().is_full_match("90210"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: HashMap<String, Pattern>,
}

impl RuleSet {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Creates a registry seeded with the built-in rules:
    ///
    /// | name | pattern |
    /// |---|---|
    /// | `email` | `^[A-Za-z0-9+_.-]+@(.+)$` |
    /// | `phone` | `^\d{10}$` |
    /// | `date` | `^\d{4}-\d{2}-\d{2}$` |
    /// | `creditCard` | `^\d{16}$` |
    ///
    /// Matching is case-sensitive with full-string semantics; `date`
    /// checks the digit shape only, with no calendar validity check.
    #[must_use]
    pub fn with_builtin_rules() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(name, pattern)| ((*name).to_string(), pattern.clone()))
            .collect();
        Self { rules }
    }

    /// Compiles `source` and stores it under `name`, overwriting any
    /// existing rule of that name.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `source` is not valid pattern
    /// syntax; the registry is left untouched, so the existing rule (if
    /// any) under `name` stays in force.
    pub fn add(&mut self, name: impl Into<String>, source: &str) -> Result<(), PatternError> {
        let name = name.into();
        let pattern = Pattern::new(source)?;
        debug!(rule = %name, pattern = %source, "registered validation rule");
        self.rules.insert(name, pattern);
        Ok(())
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.rules.get(name)
    }

    /// Returns true when a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true when no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over the registered rule names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_are_seeded() {
        let rules = RuleSet::with_builtin_rules();
        assert_eq!(rules.len(), 4);
        for name in ["email", "phone", "date", "creditCard"] {
            assert!(rules.contains(name), "missing builtin rule {name}");
        }
    }

    #[test]
    fn test_new_is_empty() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_builtin_email_shape() {
        let rules = RuleSet::with_builtin_rules();
        let email = rules.get("email").unwrap();
        assert!(email.is_full_match("user@example.com"));
        assert!(email.is_full_match("user+tag@x"));
        assert!(!email.is_full_match("not-an-email"));
        assert!(!email.is_full_match("@example.com"));
    }

    #[test]
    fn test_builtin_phone_is_exactly_ten_digits() {
        let rules = RuleSet::with_builtin_rules();
        let phone = rules.get("phone").unwrap();
        assert!(phone.is_full_match("1234567890"));
        assert!(!phone.is_full_match("123"));
        assert!(!phone.is_full_match("12345678901"));
        assert!(!phone.is_full_match("123456789x"));
    }

    #[test]
    fn test_builtin_date_is_shape_only() {
        let rules = RuleSet::with_builtin_rules();
        let date = rules.get("date").unwrap();
        assert!(date.is_full_match("2024-02-30")); // shape only, not a calendar
        assert!(!date.is_full_match("2024/01/01"));
        assert!(!date.is_full_match("24-01-01"));
    }

    #[test]
    fn test_add_and_lookup() {
        let mut rules = RuleSet::new();
        rules.add("zip", r"^\d{5}$").unwrap();
        assert!(rules.get("zip").unwrap().is_full_match("90210"));
    }

    #[test]
    fn test_add_overwrites_existing() {
        let mut rules = RuleSet::with_builtin_rules();
        rules.add("phone", r"^\d{3}$").unwrap();
        let phone = rules.get("phone").unwrap();
        assert!(phone.is_full_match("123"));
        assert!(!phone.is_full_match("1234567890"));
    }

    #[test]
    fn test_failed_add_keeps_existing_rule() {
        let mut rules = RuleSet::with_builtin_rules();
        assert!(rules.add("phone", r"[unclosed").is_err());
        // The prior rule is still in force.
        assert!(rules.get("phone").unwrap().is_full_match("1234567890"));
        assert_eq!(rules.len(), 4);
    }

    #[test]
    fn test_names_cover_all_rules() {
        let rules = RuleSet::with_builtin_rules();
        let mut names: Vec<&str> = rules.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["creditCard", "date", "email", "phone"]);
    }
}
