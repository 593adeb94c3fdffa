//! Staffing requirements.
//!
//! A requirement is one department's coverage need for a single date:
//! total hours to cover, plus the roles and shift templates eligible to
//! cover them. Requirements are created by the surrounding application
//! ahead of a run and are read-only to the engine.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A department's staffing need for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Department raising the need.
    pub department_id: String,
    /// Calendar date to cover.
    pub date: NaiveDate,
    /// Names of shift templates eligible to cover this need.
    pub shift_templates: HashSet<String>,
    /// Roles eligible to cover this need.
    pub required_roles: HashSet<String>,
    /// Total coverage hours required for the department/day.
    pub required_hours: u32,
}

impl Requirement {
    /// Creates a new requirement.
    pub fn new(department_id: impl Into<String>, date: NaiveDate, required_hours: u32) -> Self {
        Self {
            department_id: department_id.into(),
            date,
            shift_templates: HashSet::new(),
            required_roles: HashSet::new(),
            required_hours,
        }
    }

    /// Adds an eligible shift template by name.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.shift_templates.insert(name.into());
        self
    }

    /// Adds an eligible role.
    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.required_roles.insert(role_id.into());
        self
    }

    /// Required coverage in minutes.
    #[inline]
    pub fn required_minutes(&self) -> i64 {
        i64::from(self.required_hours) * 60
    }
}
