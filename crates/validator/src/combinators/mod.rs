//! Logical combinators for composing checks
//!
//! Checks compose with [`And`], [`Or`], and [`Not`], normally reached
//! through the fluent methods on
//! [`ValidateExt`](crate::foundation::ValidateExt):
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let digits_10 = matches_pattern(r"\d{10}")?;
//! let digits_16 = matches_pattern(r"\d{16}")?;
//! let phone_or_card = digits_10.or(digits_16);
//! ```

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
