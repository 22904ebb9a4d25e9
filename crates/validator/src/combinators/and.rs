//! AND combinator - logical conjunction of checks

use crate::foundation::{Validate, ValidationError};

/// Combines two checks with logical AND.
///
/// Both checks must pass for the combined check to succeed.
/// Errors are returned from the first failing check.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::combinators::And;
/// use fieldcheck_validator::foundation::Validate;
///
/// let validator = And::new(matches_pattern(r"\d+")?, matches_pattern(r".{4,}")?);
/// assert!(validator.validate("12345").is_ok());
/// assert!(validator.validate("123").is_err()); // too short
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) check.
    pub(crate) left: L,
    /// The right (second) check.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right checks.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two checks.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
