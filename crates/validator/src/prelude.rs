//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the commonly needed traits, types, and checks.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let mut validator = Validator::new();
//! validator.add_rule("zip", r"^\d{5}$")?;
//! assert!(validator.validate("90210", "zip"));
//! ```

pub use crate::combinators::{And, Not, Or, and, not, or};
pub use crate::engine::Validator;
pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};
pub use crate::report::ValidationReport;
pub use crate::rules::RuleSet;
pub use crate::validators::{
    Consistency, ConsistencyKind, NumericRange, Pattern, PatternError, matches_pattern,
    numeric_range,
};
