//! OR combinator - logical disjunction of checks

use crate::foundation::{Validate, ValidationError};

/// Combines two checks with logical OR.
///
/// At least one check must pass for the combined check to succeed.
/// If the first check passes, the second is not evaluated (short-circuits).
/// If both fail, the combined error nests both causes.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::combinators::Or;
/// use fieldcheck_validator::foundation::Validate;
///
/// let validator = Or::new(matches_pattern(r"\d{10}")?, matches_pattern(r"\d{16}")?);
/// assert!(validator.validate("1234567890").is_ok());
/// assert!(validator.validate("123").is_err()); // neither length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) check.
    pub(crate) left: L,
    /// The right (second) check.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right checks.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => {
                    Err(ValidationError::new("or_failed", "All alternatives failed")
                        .with_nested(vec![left_error, right_error]))
                }
            },
        }
    }
}

/// Creates an `Or` combinator from two checks.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
