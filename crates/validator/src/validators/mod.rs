//! Built-in checks
//!
//! The typed checks the engine is assembled from:
//!
//! - **Pattern**: full-string regex match — the compiled form of every
//!   registry rule
//! - **Numeric**: inclusive range check over `f64`
//! - **Consistency**: pairwise comparison of two raw values, by exact
//!   string equality or by parsed numeric equality
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let zip = matches_pattern(r"\d{5}")?;
//! assert!(zip.validate("90210").is_ok());
//!
//! let percent = numeric_range(0.0, 100.0);
//! assert!(percent.validate(&55.5).is_ok());
//! ```

pub mod consistency;
pub mod pattern;
pub mod range;

pub use consistency::{Consistency, ConsistencyKind};
pub use pattern::{Pattern, PatternError, matches_pattern};
pub use range::{NumericRange, numeric_range};
