//! Accumulating error report
//!
//! The [`ValidationReport`] is the ordered log of diagnostics failed
//! checks leave behind. It is append-only apart from an explicit
//! [`clear`](ValidationReport::clear), and it is not keyed to particular
//! validation calls: a caller that wants a clean slate per check sequence
//! clears it first.

use std::fmt;

use serde::Serialize;

use crate::foundation::ValidationError;

/// An ordered, explicitly-clearable sequence of validation diagnostics.
///
/// The report stores the structured [`ValidationError`] records;
/// [`messages`](Self::messages) renders the human-readable lines for
/// display.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::report::ValidationReport;
/// use fieldcheck_validator::foundation::ValidationError;
///
/// let mut report = ValidationReport::new();
/// report.record(ValidationError::unknown_rule("zip"));
/// assert_eq!(report.messages(), vec!["Validation rule not found: zip".to_string()]);
/// report.clear();
/// assert!(report.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    entries: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a diagnostic to the report.
    pub fn record(&mut self, error: ValidationError) {
        self.entries.push(error);
    }

    /// Empties the report.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrows the structured diagnostic records, in recording order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.entries
    }

    /// Renders a snapshot of the human-readable lines, in recording
    /// order.
    ///
    /// The returned vector is independent of the report: mutating it
    /// does not affect later snapshots.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.entries.len())?;
        for (i, error) in self.entries.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
