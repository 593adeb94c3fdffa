//! Run diagnostics.
//!
//! A run returns its produced roster together with a structured event
//! log and an over-cap list, so callers consume diagnostics without any
//! coupling to console output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Roster;

/// A structured diagnostic event emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A date's previously persisted assignments were purged before
    /// regeneration.
    ScheduleCleared {
        /// The regenerated date.
        date: NaiveDate,
        /// How many assignments were deleted.
        deleted: usize,
    },
    /// A requirement had no eligible employees at all.
    NoCandidates {
        /// Department of the requirement.
        department_id: String,
        /// Date of the requirement.
        date: NaiveDate,
    },
    /// A template named by the shift structure is absent from the
    /// catalog; the slot was skipped.
    TemplateMissing {
        /// The missing template name.
        name: String,
    },
    /// A slot exhausted its candidates and was recorded unfilled.
    SlotUnfilled {
        /// Department of the requirement.
        department_id: String,
        /// Date of the requirement.
        date: NaiveDate,
        /// Template name of the unstaffable slot.
        template: String,
    },
}

/// An employee found over their weekly cap after a run.
///
/// Diagnostic only: the engine reports the excess, it never rolls back
/// assignments already made. Planner-created assignments respect the cap
/// at selection time, so an over-cap total originates from pre-existing
/// persisted history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverCapEntry {
    /// The over-cap employee.
    pub employee_id: String,
    /// Accumulated minutes within the horizon.
    pub minutes: i64,
    /// The employee's weekly cap in minutes.
    pub cap_minutes: i64,
}

impl OverCapEntry {
    /// Minutes beyond the cap.
    #[inline]
    pub fn excess_minutes(&self) -> i64 {
        self.minutes - self.cap_minutes
    }
}

/// Everything one `run(date)` produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// The regenerated date.
    pub date: NaiveDate,
    /// All assignments produced, filled and unfilled.
    pub roster: Roster,
    /// Employees over their weekly cap after the run.
    pub over_cap: Vec<OverCapEntry>,
    /// Structured diagnostic log, in emission order.
    pub events: Vec<RunEvent>,
}

impl RunReport {
    /// Number of filled assignments.
    pub fn filled_count(&self) -> usize {
        self.roster.filled().count()
    }

    /// Number of unfilled markers.
    pub fn unfilled_count(&self) -> usize {
        self.roster.unfilled_count()
    }
}
