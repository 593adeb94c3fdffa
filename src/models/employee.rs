//! Employee model.
//!
//! Employees are the staffing pool the planner draws from. Eligibility
//! for a requirement is decided by department membership, weekday
//! availability, role intersection, and absence of time off; hour caps
//! bound how much work the planner may give one person.
//!
//! `priority` and `workable_templates` are carried as reference data for
//! the surrounding application but are not consulted during selection.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// An employee who can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Departments this employee belongs to.
    pub departments: HashSet<String>,
    /// Roles this employee holds, in preference order. The planner
    /// records the first role matching a requirement's eligible set.
    pub roles: Vec<String>,
    /// Weekly hour cap within the scheduling horizon.
    pub max_weekly_hours: u32,
    /// Daily hour cap for any single date.
    pub max_daily_hours: u32,
    /// Scheduling priority (lower = preferred). Present in the data
    /// model; not consulted during selection.
    pub priority: i32,
    /// Weekdays this employee is available to work.
    pub available_days: HashSet<Weekday>,
    /// Names of shift templates this employee may work. Reference data
    /// only; selection does not gate on it.
    pub workable_templates: HashSet<String>,
}

impl Employee {
    /// Creates a new employee with default caps (40h weekly, 12h daily).
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            departments: HashSet::new(),
            roles: Vec::new(),
            max_weekly_hours: 40,
            max_daily_hours: 12,
            priority: 1,
            available_days: HashSet::new(),
            workable_templates: HashSet::new(),
        }
    }

    /// Adds a department membership.
    pub fn with_department(mut self, department_id: impl Into<String>) -> Self {
        self.departments.insert(department_id.into());
        self
    }

    /// Adds a role, appended after any roles already held.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.roles.push(role_id.into());
        self
    }

    /// Sets the weekly hour cap.
    pub fn with_weekly_cap(mut self, hours: u32) -> Self {
        self.max_weekly_hours = hours;
        self
    }

    /// Sets the daily hour cap.
    pub fn with_daily_cap(mut self, hours: u32) -> Self {
        self.max_daily_hours = hours;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Adds an available weekday.
    pub fn with_available_day(mut self, day: Weekday) -> Self {
        self.available_days.insert(day);
        self
    }

    /// Marks the employee available on every weekday.
    pub fn available_all_week(mut self) -> Self {
        use Weekday::*;
        self.available_days = [Mon, Tue, Wed, Thu, Fri, Sat, Sun].into_iter().collect();
        self
    }

    /// Adds a workable shift template by name.
    pub fn with_workable_template(mut self, name: impl Into<String>) -> Self {
        self.workable_templates.insert(name.into());
        self
    }

    /// Weekly cap in minutes.
    #[inline]
    pub fn weekly_cap_minutes(&self) -> i64 {
        i64::from(self.max_weekly_hours) * 60
    }

    /// Daily cap in minutes.
    #[inline]
    pub fn daily_cap_minutes(&self) -> i64 {
        i64::from(self.max_daily_hours) * 60
    }

    /// Whether the employee belongs to a department.
    pub fn in_department(&self, department_id: &str) -> bool {
        self.departments.contains(department_id)
    }

    /// Whether the employee is available on a weekday.
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    /// First held role that appears in the eligible set, in the order
    /// roles were added.
    pub fn first_matching_role(&self, eligible: &HashSet<String>) -> Option<&str> {
        self.roles
            .iter()
            .find(|r| eligible.contains(r.as_str()))
            .map(String::as_str)
    }

    /// Whether any held role appears in the eligible set.
    pub fn holds_any_role(&self, eligible: &HashSet<String>) -> bool {
        self.first_matching_role(eligible).is_some()
    }
}
