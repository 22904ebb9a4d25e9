//! NOT combinator - logical negation of checks

use crate::foundation::{Validate, ValidationError};

/// Inverts a check with logical NOT.
///
/// - If the inner check succeeds, `Not` fails
/// - If the inner check fails, `Not` succeeds
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::combinators::Not;
/// use fieldcheck_validator::foundation::Validate;
///
/// let validator = Not::new(matches_pattern(r"\d+")?);
/// assert!(validator.validate("letters").is_ok());
/// assert!(validator.validate("12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner check to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner check.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Value matched a forbidden condition",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a check.
pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}
