//! # fieldcheck-validator
//!
//! The validation core of fieldcheck: named pattern rules, numeric range
//! and pairwise consistency checks, and an accumulating error report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let mut validator = Validator::new();
//! assert!(validator.validate("user@example.com", "email"));
//! assert!(!validator.validate("not-an-email", "email"));
//! assert_eq!(
//!     validator.errors(),
//!     vec!["Data validation failed for rule: email".to_string()],
//! );
//! ```
//!
//! ## Layers
//!
//! - [`foundation`] — the [`Validate`](foundation::Validate) trait and the
//!   structured [`ValidationError`](foundation::ValidationError) every check
//!   returns.
//! - [`validators`] — the typed checks: full-string [`Pattern`](validators::Pattern),
//!   inclusive [`NumericRange`](validators::NumericRange), and pairwise
//!   [`Consistency`](validators::Consistency).
//! - [`rules`] — the named rule registry, seeded with the built-in
//!   `email` / `phone` / `date` / `creditCard` rules.
//! - [`report`] — the ordered, explicitly-clearable error log.
//! - [`engine`] — the [`Validator`](engine::Validator) facade binding the
//!   registry and the report behind boolean-returning operations.

// ValidationError is the fundamental error type for all checks — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod validators;
