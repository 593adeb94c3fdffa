//! Candidate-pool filtering.
//!
//! Produces the employees eligible for one requirement: department
//! members, available on the requirement's weekday, holding at least one
//! of the required roles, and not away on time off. An empty pool is a
//! designed outcome — the planner answers it with unfilled markers, not
//! an error.

use chrono::Datelike;
use tracing::debug;

use crate::models::{Employee, Requirement, TimeOff};

/// Filters the employee roster down to a requirement's candidate pool.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityFilter<'a> {
    employees: &'a [Employee],
    time_off: &'a [TimeOff],
}

impl<'a> AvailabilityFilter<'a> {
    /// Creates a filter over the roster and its time-off records.
    pub fn new(employees: &'a [Employee], time_off: &'a [TimeOff]) -> Self {
        Self {
            employees,
            time_off,
        }
    }

    /// The candidate pool for one requirement.
    ///
    /// An employee qualifies when they belong to the requirement's
    /// department, are available on the weekday of its date, hold a
    /// role in its eligible set, and have no time off covering the
    /// date.
    pub fn candidates(&self, requirement: &Requirement) -> Vec<&'a Employee> {
        let weekday = requirement.date.weekday();
        let pool: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|e| e.in_department(&requirement.department_id))
            .filter(|e| e.is_available_on(weekday))
            .filter(|e| e.holds_any_role(&requirement.required_roles))
            .filter(|e| !self.is_away(&e.id, requirement))
            .collect();

        debug!(
            department = %requirement.department_id,
            date = %requirement.date,
            candidates = pool.len(),
            "candidate pool resolved"
        );
        pool
    }

    fn is_away(&self, employee_id: &str, requirement: &Requirement) -> bool {
        self.time_off
            .iter()
            .any(|off| off.employee_id == employee_id && off.covers(requirement.date))
    }
}
