//! Validation engine
//!
//! [`Validator`] binds a [`RuleSet`] and a [`ValidationReport`] behind the
//! boolean-returning operations a presentation layer drives: each failed
//! check records its diagnostic in the report and returns `false`. The
//! engine contains no validation logic of its own — every operation is a
//! thin adapter over a pure counterpart that returns the structured
//! verdict and never touches the report.

use std::str::FromStr;

use tracing::debug;

use crate::foundation::{Validate, ValidationError};
use crate::report::ValidationReport;
use crate::rules::RuleSet;
use crate::validators::{Consistency, ConsistencyKind, NumericRange, PatternError};

/// The validation engine: a mutable rule registry plus an accumulating
/// error report.
///
/// Single-threaded by design; wrap it in external locking if a target
/// environment needs shared concurrent access.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::engine::Validator;
///
/// let mut validator = Validator::new();
/// assert!(validator.validate("1234567890", "phone"));
/// assert!(!validator.validate("123", "phone"));
/// assert_eq!(
///     validator.errors(),
///     vec!["Data validation failed for rule: phone".to_string()],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    rules: RuleSet,
    report: ValidationReport,
}

impl Default for Validator {
    /// Equivalent to [`Validator::new`]: the registry comes seeded.
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Creates an engine seeded with the built-in rules and an empty
    /// report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RuleSet::with_builtin_rules(),
            report: ValidationReport::new(),
        }
    }

    /// Creates an engine over a caller-assembled rule registry.
    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            report: ValidationReport::new(),
        }
    }

    /// Borrows the rule registry.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Borrows the error report.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    // ------------------------------------------------------------------
    // Rule management (hard failure channel)
    // ------------------------------------------------------------------

    /// Compiles `source` and registers it under `name`, overwriting any
    /// existing rule of that name.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `source` does not compile;
    /// registration has no effect and the existing rule (if any) under
    /// `name` is left unchanged.
    pub fn add_rule(&mut self, name: impl Into<String>, source: &str) -> Result<(), PatternError> {
        self.rules.add(name, source)
    }

    // ------------------------------------------------------------------
    // Logging operations (soft failure channel)
    // ------------------------------------------------------------------

    /// Validates `value` against the named rule.
    ///
    /// Returns true on a full-string match. An unknown rule name or a
    /// mismatch records a diagnostic and returns false.
    pub fn validate(&mut self, value: &str, rule_name: &str) -> bool {
        self.note(self.check_value(value, rule_name)).is_ok()
    }

    /// Validates that `min <= value <= max`, both ends inclusive.
    ///
    /// Records a diagnostic and returns false when the value falls
    /// outside the range. NaN (as value or bound) never validates.
    pub fn validate_numeric_range(&mut self, value: f64, min: f64, max: f64) -> bool {
        self.note(self.check_numeric_range(value, min, max)).is_ok()
    }

    /// Compares two raw values for consistency under a string kind tag.
    ///
    /// An unknown tag or an unparseable numeric value records a
    /// diagnostic and returns false. A comparison that completes with a
    /// false verdict records nothing: only error conditions log.
    pub fn check_consistency(&mut self, left: &str, right: &str, kind: &str) -> bool {
        match ConsistencyKind::from_str(kind).and_then(|kind| self.check_pair(left, right, kind)) {
            Ok(verdict) => verdict,
            Err(error) => {
                debug!(error = %error, "consistency check failed");
                self.report.record(error);
                false
            }
        }
    }

    /// Empties the error report.
    pub fn clear_errors(&mut self) {
        self.report.clear();
    }

    /// Returns a snapshot of the accumulated error messages, in
    /// recording order. The snapshot is independent of the engine.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.report.messages()
    }

    // ------------------------------------------------------------------
    // Pure counterparts — structured verdicts, report untouched
    // ------------------------------------------------------------------

    /// Checks `value` against the named rule without recording anything.
    ///
    /// # Errors
    ///
    /// The unknown-rule diagnostic when no rule is registered under
    /// `rule_name`; the mismatch diagnostic when the value does not
    /// fully match.
    pub fn check_value(&self, value: &str, rule_name: &str) -> Result<(), ValidationError> {
        let Some(rule) = self.rules.get(rule_name) else {
            return Err(ValidationError::unknown_rule(rule_name));
        };
        if rule.is_full_match(value) {
            Ok(())
        } else {
            Err(ValidationError::rule_mismatch(rule_name))
        }
    }

    /// Checks the inclusive range without recording anything.
    ///
    /// # Errors
    ///
    /// The out-of-range diagnostic when `value` is not within
    /// `[min, max]`.
    pub fn check_numeric_range(&self, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
        NumericRange::new(min, max).validate(&value)
    }

    /// Runs a typed consistency comparison without recording anything.
    ///
    /// # Errors
    ///
    /// The bad-numeric diagnostic when a numeric comparison cannot
    /// parse one of its sides.
    pub fn check_pair(
        &self,
        left: &str,
        right: &str,
        kind: ConsistencyKind,
    ) -> Result<bool, ValidationError> {
        Consistency::new(kind).check(left, right)
    }

    /// Records the diagnostic of a failed check and hands the result
    /// back.
    fn note(&mut self, result: Result<(), ValidationError>) -> Result<(), ValidationError> {
        if let Err(error) = &result {
            debug!(error = %error, "validation failed");
            self.report.record(error.clone());
        }
        result
    }
}

// ============================================================================
// TESTS
// ============================================================================
