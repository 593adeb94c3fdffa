//! Engine error taxonomy.
//!
//! Expected branching — empty candidate pools, unstaffable slots — is
//! ordinary data (unfilled assignments, run events), never an error.
//! Errors cover configuration gaps, invalid external input, and storage
//! failures that must abort a date's run.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::StoreError;

/// Errors produced by the rostering engine.
#[derive(Error, Debug)]
pub enum RosterError {
    /// A named shift template is absent from the catalog. Non-fatal to
    /// a run: the planner skips the slot and continues.
    #[error("shift template '{name}' is not in the catalog")]
    TemplateNotFound {
        /// The missing template name.
        name: String,
    },

    /// A date range was given end-before-start. Rejected before any
    /// mutation.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Requested range start.
        start: NaiveDate,
        /// Requested range end.
        end: NaiveDate,
    },

    /// The storage collaborator failed; the affected date's run is
    /// aborted rather than left partially written and silent.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for engine operations.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_display() {
        let err = RosterError::TemplateNotFound {
            name: "09-17".to_string(),
        };
        assert_eq!(err.to_string(), "shift template '09-17' is not in the catalog");
    }

    #[test]
    fn test_invalid_range_display() {
        let start = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let err = RosterError::InvalidDateRange { start, end };
        assert!(err.to_string().contains("2025-02-12"));
        assert!(err.to_string().contains("2025-02-10"));
    }
}
