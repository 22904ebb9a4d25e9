//! Core validation types and traits
//!
//! The fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Every check is a type implementing [`Validate`]: it is generic over its
//! input type and returns `Result<(), ValidationError>` — a verdict plus a
//! structured diagnostic the caller may accumulate, log, or discard.
//! [`ValidateExt`] adds the logical combinators (`and` / `or` / `not`).

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult = Result<(), ValidationError>;
