//! Double-booking prevention.
//!
//! Decides whether a proposed shift interval conflicts with intervals an
//! employee already holds on the same date — assignments made earlier in
//! the current run and any still persisted for that date. Interval
//! semantics (half-open, 24h-wrapped) live in
//! [`ShiftInterval`](crate::models::ShiftInterval); this module applies
//! them to an employee's day.

use chrono::NaiveDate;

use crate::models::{Assignment, ShiftInterval};

/// Checks proposed intervals against an employee's existing shifts.
#[derive(Debug, Clone, Copy)]
pub struct OverlapGuard;

impl OverlapGuard {
    /// Whether `candidate` overlaps any interval in `existing`.
    pub fn conflicts(candidate: &ShiftInterval, existing: &[ShiftInterval]) -> bool {
        existing.iter().any(|held| candidate.overlaps(held))
    }

    /// Whether `candidate` would double-book `employee_id` on `date`,
    /// given all assignments visible to the run so far.
    ///
    /// Unfilled markers and assignments on other dates never conflict.
    pub fn would_double_book(
        employee_id: &str,
        date: NaiveDate,
        candidate: &ShiftInterval,
        assignments: &[Assignment],
    ) -> bool {
        assignments
            .iter()
            .filter(|a| a.date == date && a.employee_id.as_deref() == Some(employee_id))
            .filter_map(Assignment::interval)
            .any(|held| candidate.overlaps(&held))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn iv(start: u32, end: u32) -> ShiftInterval {
        ShiftInterval::new(t(start), t(end))
    }

    fn shift(employee: &str, day: u32, start: u32, end: u32) -> Assignment {
        Assignment::filled(employee, "icu", None, d(day), t(start), t(end))
    }

    #[test]
    fn test_conflicts_basic() {
        let held = vec![iv(8, 14)];
        assert!(OverlapGuard::conflicts(&iv(13, 20), &held));
        assert!(!OverlapGuard::conflicts(&iv(14, 20), &held));
        assert!(!OverlapGuard::conflicts(&iv(20, 8), &[]));
    }

    #[test]
    fn test_double_book_same_employee_same_date() {
        let assignments = vec![shift("e1", 10, 8, 20)];
        assert!(OverlapGuard::would_double_book(
            "e1",
            d(10),
            &iv(14, 20),
            &assignments
        ));
    }

    #[test]
    fn test_other_employee_never_conflicts() {
        let assignments = vec![shift("e1", 10, 8, 20)];
        assert!(!OverlapGuard::would_double_book(
            "e2",
            d(10),
            &iv(8, 20),
            &assignments
        ));
    }

    #[test]
    fn test_other_date_never_conflicts() {
        let assignments = vec![shift("e1", 10, 8, 20)];
        assert!(!OverlapGuard::would_double_book(
            "e1",
            d(11),
            &iv(8, 20),
            &assignments
        ));
    }

    #[test]
    fn test_unfilled_marker_never_conflicts() {
        let assignments = vec![Assignment::unfilled("icu", d(10))];
        assert!(!OverlapGuard::would_double_book(
            "e1",
            d(10),
            &iv(8, 20),
            &assignments
        ));
    }

    #[test]
    fn test_night_shift_wraps() {
        // 20-08 wraps midnight; a back-to-back 08-14 does not conflict,
        // an overlapping evening slot does.
        let assignments = vec![shift("e1", 10, 20, 8)];
        assert!(!OverlapGuard::would_double_book(
            "e1",
            d(10),
            &iv(8, 14),
            &assignments
        ));
        assert!(OverlapGuard::would_double_book(
            "e1",
            d(10),
            &iv(14, 22),
            &assignments
        ));
    }
}
