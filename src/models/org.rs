//! Organizational reference data.
//!
//! Departments raise staffing requirements; roles belong to exactly one
//! department and qualify employees for requirements that ask for them.
//! Both are immutable reference data maintained by the surrounding
//! application — the engine only reads them.

use serde::{Deserialize, Serialize};

/// A department (ward, unit) that raises staffing requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

/// A role an employee can hold, owned by exactly one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier.
    pub id: String,
    /// Human-readable name (e.g., "Nurse", "Technician").
    pub name: String,
    /// The department this role belongs to.
    pub department_id: String,
}

impl Department {
    /// Creates a new department.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Role {
    /// Creates a new role within a department.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department_id: department_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_new() {
        let d = Department::new("icu", "Intensive Care");
        assert_eq!(d.id, "icu");
        assert_eq!(d.name, "Intensive Care");
    }

    #[test]
    fn test_role_new() {
        let r = Role::new("nurse", "Nurse", "icu");
        assert_eq!(r.id, "nurse");
        assert_eq!(r.name, "Nurse");
        assert_eq!(r.department_id, "icu");
    }
}
