//! Full-string pattern check
//!
//! [`Pattern`] compiles a regex source and matches it against the ENTIRE
//! input: a value validates only when the whole string satisfies the
//! pattern, never a substring of it.

use regex::Regex;
use thiserror::Error;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// PATTERN ERROR
// ============================================================================

/// Hard failure raised when a pattern source does not compile.
///
/// This is the registration-time error channel: a source that fails to
/// compile is rejected immediately and never stored.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern source is not valid regex syntax.
    #[error("invalid pattern `{pattern}`: {source}")]
    Invalid {
        /// The pattern source as the caller supplied it.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
}

// ============================================================================
// PATTERN
// ============================================================================

/// A compiled pattern matched against the entire input string.
///
/// `Regex::is_match` alone would accept any substring match; `Pattern`
/// anchors the compiled form (`\A(?:…)\z`) so the full-string semantics
/// hold even for sources that omit their own `^…$` anchors. The original
/// source is retained for display.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::validators::Pattern;
/// use fieldcheck_validator::foundation::Validate;
///
/// let zip = Pattern::new(r"\d{5}")?;
/// assert!(zip.validate("90210").is_ok());
/// assert!(zip.validate("90210-1234").is_err()); // substring match is not enough
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
}

impl Pattern {
    /// Compiles a pattern source into a full-string matcher.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Invalid`] when the source is not valid
    /// regex syntax.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        let source = source.into();
        // Compile the raw source first so syntax errors point at the
        // caller's pattern, not at the anchored wrapper.
        Regex::new(&source).map_err(|e| PatternError::Invalid {
            pattern: source.clone(),
            source: e,
        })?;
        let anchored = Regex::new(&format!(r"\A(?:{source})\z")).map_err(|e| {
            PatternError::Invalid {
                pattern: source.clone(),
                source: e,
            }
        })?;
        Ok(Self { source, anchored })
    }

    /// Returns the pattern source as the caller supplied it.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true when the entire input matches the pattern.
    #[must_use]
    pub fn is_full_match(&self, input: &str) -> bool {
        self.anchored.is_match(input)
    }
}

impl Validate for Pattern {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_full_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "pattern_mismatch",
                format!("Value does not match pattern: {}", self.source),
            )
            .with_param("pattern", self.source.clone()))
        }
    }
}

/// Compiles a full-string pattern check.
pub fn matches_pattern(source: impl Into<String>) -> Result<Pattern, PatternError> {
    Pattern::new(source)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_passes() {
        let v = matches_pattern(r"\d{3}-\d{4}").unwrap();
        assert!(v.validate("123-4567").is_ok());
    }

    #[test]
    fn test_partial_match_fails() {
        let v = matches_pattern(r"\d{3}-\d{4}").unwrap();
        assert!(v.validate("call 123-4567 now").is_err());
        assert!(v.validate("123-45678").is_err());
    }

    #[test]
    fn test_anchored_source_still_works() {
        let v = matches_pattern(r"^\d{5}$").unwrap();
        assert!(v.validate("90210").is_ok());
        assert!(v.validate("9021").is_err());
    }

    #[test]
    fn test_empty_input_against_star() {
        let v = matches_pattern(r"\d*").unwrap();
        assert!(v.validate("").is_ok());
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        let err = Pattern::new(r"[unclosed").unwrap_err();
        let PatternError::Invalid { pattern, .. } = err;
        assert_eq!(pattern, "[unclosed");
    }

    #[test]
    fn test_source_is_retained() {
        let v = Pattern::new(r"\d{5}").unwrap();
        assert_eq!(v.source(), r"\d{5}");
    }

    #[test]
    fn test_mismatch_error_shape() {
        let v = Pattern::new(r"\d{5}").unwrap();
        let err = v.validate("abc").unwrap_err();
        assert_eq!(err.code, "pattern_mismatch");
        assert_eq!(err.param("pattern"), Some(r"\d{5}"));
    }
}
