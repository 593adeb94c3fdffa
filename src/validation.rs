//! Snapshot integrity checks.
//!
//! Validates a planning snapshot before a run: duplicate identifiers,
//! dangling references between employees, requirements, roles,
//! departments, and the template catalog, and inverted time-off ranges.
//! The surrounding application normally guarantees referential
//! integrity at its storage layer; these checks catch snapshots
//! assembled by hand or from partial exports.

use std::collections::HashSet;

use crate::engine::PlanningSnapshot;

/// Validation result: `Ok(())` or every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A snapshot integrity error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of snapshot integrity errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// A reference to a department that does not exist.
    UnknownDepartment,
    /// A reference to a role that does not exist.
    UnknownRole,
    /// A requirement references a template absent from the catalog.
    UnknownTemplate,
    /// A time-off record references an employee that does not exist.
    UnknownEmployee,
    /// A time-off record ends before it starts.
    InvertedDateRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a snapshot's structural integrity.
///
/// Checks:
/// 1. No duplicate department, role, or employee ids
/// 2. Roles belong to existing departments
/// 3. Employees reference existing departments and roles
/// 4. Requirements reference existing departments, roles, and catalog
///    templates
/// 5. Time-off records reference existing employees and have ordered
///    date ranges
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &PlanningSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let mut department_ids = HashSet::new();
    for d in &snapshot.departments {
        if !department_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate department ID: {}", d.id),
            ));
        }
    }

    let mut role_ids = HashSet::new();
    for r in &snapshot.roles {
        if !role_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", r.id),
            ));
        }
        if !department_ids.contains(r.department_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDepartment,
                format!(
                    "Role '{}' references unknown department '{}'",
                    r.id, r.department_id
                ),
            ));
        }
    }

    let mut employee_ids = HashSet::new();
    for e in &snapshot.employees {
        if !employee_ids.insert(e.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate employee ID: {}", e.id),
            ));
        }
        for dep in &e.departments {
            if !department_ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownDepartment,
                    format!("Employee '{}' references unknown department '{}'", e.id, dep),
                ));
            }
        }
        for role in &e.roles {
            if !role_ids.contains(role.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRole,
                    format!("Employee '{}' references unknown role '{}'", e.id, role),
                ));
            }
        }
    }

    for req in &snapshot.requirements {
        if !department_ids.contains(req.department_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDepartment,
                format!(
                    "Requirement for {} references unknown department '{}'",
                    req.date, req.department_id
                ),
            ));
        }
        for role in &req.required_roles {
            if !role_ids.contains(role.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRole,
                    format!(
                        "Requirement for {}/{} references unknown role '{}'",
                        req.department_id, req.date, role
                    ),
                ));
            }
        }
        for template in &req.shift_templates {
            if !snapshot.catalog.contains(template) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTemplate,
                    format!(
                        "Requirement for {}/{} references unknown template '{}'",
                        req.department_id, req.date, template
                    ),
                ));
            }
        }
    }

    for off in &snapshot.time_off {
        if !employee_ids.contains(off.employee_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownEmployee,
                format!("Time off references unknown employee '{}'", off.employee_id),
            ));
        }
        if off.start_date > off.end_date {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedDateRange,
                format!(
                    "Time off for '{}' ends {} before it starts {}",
                    off.employee_id, off.end_date, off.start_date
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
