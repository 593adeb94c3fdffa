//! Per-employee accumulated-hours tracking.
//!
//! A tracker lives for exactly one run. It is seeded from assignments
//! already persisted inside the scheduling horizon (the ISO week of the
//! run date) and mutated as the planner places people, so "least loaded"
//! always reflects both history and the current run.
//!
//! All accounting is in whole minutes.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Assignment, Employee};

/// Running per-employee load, weekly and per-date.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    weekly_minutes: HashMap<String, i64>,
    daily_minutes: HashMap<(String, NaiveDate), i64>,
}

impl LoadTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker seeded from persisted assignments.
    ///
    /// Unfilled markers carry no employee and contribute nothing.
    pub fn seeded(history: &[Assignment]) -> Self {
        let mut tracker = Self::new();
        for assignment in history {
            if let Some(employee_id) = assignment.employee_id.as_deref() {
                tracker.add(employee_id, assignment.date, assignment.duration_minutes());
            }
        }
        tracker
    }

    /// Records minutes worked by an employee on a date.
    pub fn add(&mut self, employee_id: &str, date: NaiveDate, minutes: i64) {
        *self
            .weekly_minutes
            .entry(employee_id.to_string())
            .or_insert(0) += minutes;
        *self
            .daily_minutes
            .entry((employee_id.to_string(), date))
            .or_insert(0) += minutes;
    }

    /// Accumulated minutes for an employee across the horizon.
    pub fn minutes_of(&self, employee_id: &str) -> i64 {
        self.weekly_minutes.get(employee_id).copied().unwrap_or(0)
    }

    /// Accumulated minutes for an employee on one date.
    pub fn daily_minutes(&self, employee_id: &str, date: NaiveDate) -> i64 {
        self.daily_minutes
            .get(&(employee_id.to_string(), date))
            .copied()
            .unwrap_or(0)
    }

    /// Whether an employee's accumulated minutes exceed their weekly
    /// cap. Exactly at the cap is not over.
    pub fn over_cap(&self, employee: &Employee) -> bool {
        self.minutes_of(&employee.id) > employee.weekly_cap_minutes()
    }

    /// All tracked (employee, minutes) totals.
    pub fn totals(&self) -> impl Iterator<Item = (&str, i64)> {
        self.weekly_minutes.iter().map(|(id, &m)| (id.as_str(), m))
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

    #[test]
    fn test_add_and_query() {
        let mut tracker = LoadTracker::new();
        tracker.add("e1", d(10), 720);
        tracker.add("e1", d(11), 360);
        tracker.add("e2", d(10), 360);

        assert_eq!(tracker.minutes_of("e1"), 1080);
        assert_eq!(tracker.daily_minutes("e1", d(10)), 720);
        assert_eq!(tracker.daily_minutes("e1", d(11)), 360);
        assert_eq!(tracker.minutes_of("e2"), 360);
        assert_eq!(tracker.minutes_of("unknown"), 0);
        assert_eq!(tracker.daily_minutes("e1", d(12)), 0);
    }

    #[test]
    fn test_seeded_from_history() {
        let history = vec![
            Assignment::filled("e1", "icu", None, d(10), t(8), t(20)),
            Assignment::filled("e1", "icu", None, d(11), t(20), t(8)),
            // Unfilled marker: no employee, no contribution.
            Assignment::unfilled("icu", d(10)),
        ];

        let tracker = LoadTracker::seeded(&history);
        assert_eq!(tracker.minutes_of("e1"), 1440);
        assert_eq!(tracker.daily_minutes("e1", d(11)), 720);
    }

    #[test]
    fn test_over_cap_strictly_greater() {
        let employee = Employee::new("e1", "Ana").with_weekly_cap(12);
        let mut tracker = LoadTracker::new();

        tracker.add("e1", d(10), 12 * 60);
        assert!(!tracker.over_cap(&employee)); // exactly at the cap

        tracker.add("e1", d(11), 1);
        assert!(tracker.over_cap(&employee));
    }

    #[test]
    fn test_totals() {
        let mut tracker = LoadTracker::new();
        tracker.add("e1", d(10), 100);
        tracker.add("e2", d(10), 200);

        let mut totals: Vec<(String, i64)> = tracker
            .totals()
            .map(|(id, m)| (id.to_string(), m))
            .collect();
        totals.sort();
        assert_eq!(totals, vec![("e1".to_string(), 100), ("e2".to_string(), 200)]);
    }
}
