//! Time-off records.
//!
//! An employee with time off covering a date is excluded from that
//! date's candidate pool, alongside the weekday-availability gate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why an employee is away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeOffReason {
    /// Sick leave.
    Sick,
    /// Planned holiday.
    Holiday,
}

/// An employee's absence over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOff {
    /// The absent employee.
    pub employee_id: String,
    /// First day away (inclusive).
    pub start_date: NaiveDate,
    /// Last day away (inclusive).
    pub end_date: NaiveDate,
    /// Reason for the absence.
    pub reason: TimeOffReason,
}

impl TimeOff {
    /// Creates a new time-off record.
    pub fn new(
        employee_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: TimeOffReason,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date,
            end_date,
            reason,
        }
    }

    /// Whether this record covers a date (inclusive on both ends).
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
