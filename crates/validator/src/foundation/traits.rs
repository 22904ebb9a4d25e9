//! Core traits for the validation system

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all checks implement.
///
/// The trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All checks return
/// `Result<(), ValidationError>` for a consistent API.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::foundation::{Validate, ValidationError};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::new("non_empty", "Value must not be empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for checks.
///
/// Automatically implemented for all types that implement [`Validate`],
/// providing a fluent API for composing checks.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
///
/// let ten_digits = matches_pattern(r"\d{10}")?;
/// let sixteen_digits = matches_pattern(r"\d{16}")?;
/// let phone_or_card = ten_digits.or(sixteen_digits);
/// assert!(phone_or_card.validate("1234567890").is_ok());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two checks with logical AND.
    ///
    /// Both must pass for the combined check to succeed.
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two checks with logical OR.
    ///
    /// At least one must pass for the combined check to succeed.
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the check with logical NOT.
    ///
    /// The combined check succeeds if the original fails, and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
