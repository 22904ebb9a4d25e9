//! Error types for validation failures
//!
//! A structured error type with an error code for programmatic handling, a
//! human-readable message, and parameterized details. All string fields use
//! `Cow<'static, str>` for zero-allocation in the common case of static
//! error codes.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Checks return this as the `Err` side of their verdict; the message alone
/// is the human-readable line that ends up in a
/// [`ValidationReport`](crate::report::ValidationReport), while `code` and
/// `params` carry the machine-readable detail.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("out_of_range", "Value 7 is outside range [1, 5]")
///     .with_param("min", "1")
///     .with_param("max", "5");
/// assert_eq!(error.param("min"), Some("1"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "unknown_rule", "rule_mismatch", "out_of_range"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Parameters carrying the values behind the message.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,

    /// Underlying errors, populated by combinators that aggregate failures.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The message alone is the display form: diagnostics are already
        // complete human-readable sentences, and report snapshots must
        // reproduce them verbatim.
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

// The recurring diagnostics of the validation engine. Exact message text
// lives here and nowhere else.
impl ValidationError {
    /// No rule is registered under the given name.
    pub fn unknown_rule(name: &str) -> Self {
        Self::new("unknown_rule", format!("Validation rule not found: {name}"))
            .with_param("rule", name.to_string())
    }

    /// The value did not fully match the named rule's pattern.
    pub fn rule_mismatch(name: &str) -> Self {
        Self::new(
            "rule_mismatch",
            format!("Data validation failed for rule: {name}"),
        )
        .with_param("rule", name.to_string())
    }

    /// The value fell outside an inclusive numeric range.
    pub fn out_of_range(value: f64, min: f64, max: f64) -> Self {
        Self::new(
            "out_of_range",
            format!("Value {value} is outside range [{min}, {max}]"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", value.to_string())
    }

    /// One side of a numeric consistency check failed to parse.
    pub fn invalid_numeric_pair() -> Self {
        Self::new(
            "invalid_numeric",
            "Invalid numeric values for consistency check",
        )
    }

    /// The consistency-kind tag is not one of the supported kinds.
    pub fn unsupported_kind(kind: &str) -> Self {
        Self::new(
            "unsupported_kind",
            format!("Unknown consistency check type: {kind}"),
        )
        .with_param("kind", kind.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
