//! Assignments and the roster that collects them.
//!
//! An assignment is one produced shift record: either a real
//! (employee, role, interval) tuple or an explicit "unfilled" marker for
//! a slot no one could staff. Unfilled markers are first-class output —
//! an unstaffable slot is a decision, not an error.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{ShiftInterval, ShiftTemplate};

/// One produced shift record, filled or explicitly unfilled.
///
/// `employee_id == None` marks an unfilled slot; `role_id` mirrors it.
/// Times are present whenever the slot's template resolved, so an
/// unfilled record still says which coverage is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned employee; `None` marks an unfilled slot.
    pub employee_id: Option<String>,
    /// Department the slot belongs to.
    pub department_id: String,
    /// Role the employee covers; `None` when unfilled.
    pub role_id: Option<String>,
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Shift start; `None` when no template resolved.
    pub start: Option<NaiveTime>,
    /// Shift end; `None` when no template resolved.
    pub end: Option<NaiveTime>,
}

impl Assignment {
    /// Creates a filled assignment.
    pub fn filled(
        employee_id: impl Into<String>,
        department_id: impl Into<String>,
        role_id: Option<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            department_id: department_id.into(),
            role_id,
            date,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates an unfilled marker with no times (no template resolved).
    pub fn unfilled(department_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            employee_id: None,
            department_id: department_id.into(),
            role_id: None,
            date,
            start: None,
            end: None,
        }
    }

    /// Creates an unfilled marker carrying the slot's template times.
    pub fn unfilled_slot(
        department_id: impl Into<String>,
        date: NaiveDate,
        template: &ShiftTemplate,
    ) -> Self {
        Self {
            employee_id: None,
            department_id: department_id.into(),
            role_id: None,
            date,
            start: Some(template.start),
            end: Some(template.end),
        }
    }

    /// Whether an employee holds this slot.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.employee_id.is_some()
    }

    /// The wall-clock interval, when times are present.
    pub fn interval(&self) -> Option<ShiftInterval> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(ShiftInterval::new(start, end)),
            _ => None,
        }
    }

    /// Minute-accurate duration; zero when times are absent.
    pub fn duration_minutes(&self) -> i64 {
        self.interval().map_or(0, |i| i.duration_minutes())
    }
}

/// The set of assignments produced for a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Assignments in creation order, filled and unfilled.
    pub assignments: Vec<Assignment>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// All assignments, in creation order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Filled assignments only.
    pub fn filled(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| a.is_filled())
    }

    /// Unfilled markers only.
    pub fn unfilled(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| !a.is_filled())
    }

    /// Assignments held by one employee.
    pub fn for_employee<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments
            .iter()
            .filter(move |a| a.employee_id.as_deref() == Some(employee_id))
    }

    /// Assignments held by one employee on one date.
    pub fn for_employee_on<'a>(
        &'a self,
        employee_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = &'a Assignment> {
        self.for_employee(employee_id).filter(move |a| a.date == date)
    }

    /// Total minutes covered by filled assignments.
    pub fn covered_minutes(&self) -> i64 {
        self.filled().map(Assignment::duration_minutes).sum()
    }

    /// Number of unfilled markers.
    pub fn unfilled_count(&self) -> usize {
        self.unfilled().count()
    }

    /// Total number of assignments, filled and unfilled.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day_template() -> ShiftTemplate {
        ShiftTemplate::new("08-20", t(8, 0), t(20, 0), 12)
    }

    #[test]
    fn test_filled_assignment() {
        let a = Assignment::filled(
            "e1",
            "icu",
            Some("nurse".to_string()),
            d(2025, 2, 10),
            t(8, 0),
            t(20, 0),
        );
        assert!(a.is_filled());
        assert_eq!(a.duration_minutes(), 720);
        assert!(a.interval().is_some());
    }

    #[test]
    fn test_unfilled_marker() {
        let a = Assignment::unfilled("icu", d(2025, 2, 10));
        assert!(!a.is_filled());
        assert_eq!(a.role_id, None);
        assert_eq!(a.interval(), None);
        assert_eq!(a.duration_minutes(), 0);
    }

    #[test]
    fn test_unfilled_slot_keeps_times() {
        let a = Assignment::unfilled_slot("icu", d(2025, 2, 10), &day_template());
        assert!(!a.is_filled());
        assert_eq!(a.start, Some(t(8, 0)));
        assert_eq!(a.end, Some(t(20, 0)));
    }

    #[test]
    fn test_roster_queries() {
        let date = d(2025, 2, 10);
        let mut roster = Roster::new();
        roster.push(Assignment::filled(
            "e1",
            "icu",
            Some("nurse".to_string()),
            date,
            t(8, 0),
            t(20, 0),
        ));
        roster.push(Assignment::filled(
            "e2",
            "icu",
            Some("nurse".to_string()),
            date,
            t(20, 0),
            t(8, 0),
        ));
        roster.push(Assignment::unfilled_slot("er", date, &day_template()));

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.filled().count(), 2);
        assert_eq!(roster.unfilled_count(), 1);
        assert_eq!(roster.for_employee("e1").count(), 1);
        assert_eq!(roster.for_employee_on("e2", date).count(), 1);
        assert_eq!(roster.for_employee_on("e2", d(2025, 2, 11)).count(), 0);
        // Unfilled slots carry times but never count as covered.
        assert_eq!(roster.covered_minutes(), 2 * 720);
    }
}
