//! Shift templates and the catalog that resolves them by name.
//!
//! A template is a reusable named shift definition: a start time, an end
//! time (which may wrap past midnight), and a nominal duration in hours.
//! Templates are immutable reference data; the planner resolves them by
//! name through a [`ShiftCatalog`].
//!
//! The nominal duration drives the coverage-hours decomposition; all
//! load accounting uses the minute-accurate interval duration instead.

use std::collections::HashMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

use super::ShiftInterval;

/// A named, reusable shift definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// Unique template name (e.g., "08-20").
    pub name: String,
    /// Shift start.
    pub start: NaiveTime,
    /// Shift end; earlier than `start` means the shift wraps past
    /// midnight.
    pub end: NaiveTime,
    /// Nominal duration in hours, used when decomposing a requirement's
    /// coverage hours into slots.
    pub duration_hours: u32,
}

impl ShiftTemplate {
    /// Creates a new template.
    pub fn new(
        name: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        duration_hours: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            duration_hours,
        }
    }

    /// The wall-clock interval this template occupies.
    #[inline]
    pub fn interval(&self) -> ShiftInterval {
        ShiftInterval::new(self.start, self.end)
    }

    /// Minute-accurate, midnight-aware duration.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.interval().duration_minutes()
    }
}

/// Shift-template reference data, keyed by unique name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftCatalog {
    templates: HashMap<String, ShiftTemplate>,
}

impl ShiftCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard hospital catalog: a 12h day shift, a 12h night
    /// shift, and two 6h day splits.
    pub fn standard() -> Self {
        fn t(h: u32, m: u32) -> NaiveTime {
            NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
        }
        Self::new()
            .with_template(ShiftTemplate::new("08-20", t(8, 0), t(20, 0), 12))
            .with_template(ShiftTemplate::new("20-08", t(20, 0), t(8, 0), 12))
            .with_template(ShiftTemplate::new("08-14", t(8, 0), t(14, 0), 6))
            .with_template(ShiftTemplate::new("14-20", t(14, 0), t(20, 0), 6))
    }

    /// Adds a template, replacing any existing one with the same name.
    pub fn with_template(mut self, template: ShiftTemplate) -> Self {
        self.templates.insert(template.name.clone(), template);
        self
    }

    /// Resolves a template by name.
    ///
    /// Fails with [`RosterError::TemplateNotFound`] when the name is not
    /// in the catalog; the planner treats this as "skip the slot,
    /// continue", never as a run abort.
    pub fn lookup(&self, name: &str) -> RosterResult<&ShiftTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| RosterError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the template if present.
    pub fn get(&self, name: &str) -> Option<&ShiftTemplate> {
        self.templates.get(name)
    }

    /// Whether a template with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Iterates over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &ShiftTemplate> {
        self.templates.values()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_template_interval() {
        let tpl = ShiftTemplate::new("08-20", t(8, 0), t(20, 0), 12);
        assert_eq!(tpl.duration_minutes(), 720);
        assert!(!tpl.interval().wraps_midnight());
    }

    #[test]
    fn test_night_template_wraps() {
        let tpl = ShiftTemplate::new("20-08", t(20, 0), t(8, 0), 12);
        assert_eq!(tpl.duration_minutes(), 720);
        assert!(tpl.interval().wraps_midnight());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ShiftCatalog::standard();
        let tpl = catalog.lookup("08-20").unwrap();
        assert_eq!(tpl.duration_hours, 12);

        let err = catalog.lookup("09-17").unwrap_err();
        assert!(err.to_string().contains("09-17"));
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = ShiftCatalog::standard();
        assert_eq!(catalog.len(), 4);
        for name in ["08-20", "20-08", "08-14", "14-20"] {
            assert!(catalog.contains(name));
        }
    }

    #[test]
    fn test_with_template_replaces() {
        let catalog = ShiftCatalog::new()
            .with_template(ShiftTemplate::new("08-20", t(8, 0), t(20, 0), 12))
            .with_template(ShiftTemplate::new("08-20", t(8, 30), t(20, 30), 12));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("08-20").unwrap().start, t(8, 30));
    }
}
