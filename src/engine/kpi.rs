//! Roster coverage metrics.
//!
//! Computes fill and coverage indicators from a produced roster and the
//! requirements it was planned against.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill rate | filled slots / total slots |
//! | Coverage rate | covered minutes / required minutes |
//! | Unfilled slots | explicit unfilled markers |
//! | Per-department coverage | covered minutes grouped by department |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Requirement, Roster};

/// Coverage indicators for one produced roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterKpi {
    /// Total produced slots, filled and unfilled.
    pub total_slots: usize,
    /// Slots an employee holds.
    pub filled_slots: usize,
    /// Explicit unfilled markers.
    pub unfilled_slots: usize,
    /// filled / total; zero for an empty roster.
    pub fill_rate: f64,
    /// Minutes covered by filled slots.
    pub covered_minutes: i64,
    /// Minutes the requirements asked for.
    pub required_minutes: i64,
    /// covered / required; zero when nothing was required.
    pub coverage_rate: f64,
    /// Covered minutes per department.
    pub covered_by_department: HashMap<String, i64>,
}

impl RosterKpi {
    /// Computes indicators from a roster and the requirements it was
    /// planned against.
    pub fn calculate(roster: &Roster, requirements: &[Requirement]) -> Self {
        let total_slots = roster.len();
        let filled_slots = roster.filled().count();
        let unfilled_slots = total_slots - filled_slots;

        let covered_minutes = roster.covered_minutes();
        let required_minutes: i64 = requirements.iter().map(Requirement::required_minutes).sum();

        let mut covered_by_department: HashMap<String, i64> = HashMap::new();
        for a in roster.filled() {
            *covered_by_department
                .entry(a.department_id.clone())
                .or_insert(0) += a.duration_minutes();
        }

        let fill_rate = if total_slots == 0 {
            0.0
        } else {
            filled_slots as f64 / total_slots as f64
        };
        let coverage_rate = if required_minutes <= 0 {
            0.0
        } else {
            covered_minutes as f64 / required_minutes as f64
        };

        Self {
            total_slots,
            filled_slots,
            unfilled_slots,
            fill_rate,
            covered_minutes,
            required_minutes,
            coverage_rate,
            covered_by_department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, ShiftTemplate};
    use chrono::{NaiveDate, NaiveTime};

    fn d() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()
    }

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_kpi_mixed_roster() {
        let mut roster = Roster::new();
        roster.push(Assignment::filled("e1", "icu", None, d(), t(8), t(20)));
        roster.push(Assignment::filled("e2", "er", None, d(), t(20), t(8)));
        let tpl = ShiftTemplate::new("08-20", t(8), t(20), 12);
        roster.push(Assignment::unfilled_slot("icu", d(), &tpl));

        let requirements = vec![
            Requirement::new("icu", d(), 24),
            Requirement::new("er", d(), 12),
        ];

        let kpi = RosterKpi::calculate(&roster, &requirements);
        assert_eq!(kpi.total_slots, 3);
        assert_eq!(kpi.filled_slots, 2);
        assert_eq!(kpi.unfilled_slots, 1);
        assert!((kpi.fill_rate - 2.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.covered_minutes, 2 * 720);
        assert_eq!(kpi.required_minutes, 36 * 60);
        assert!((kpi.coverage_rate - 1440.0 / 2160.0).abs() < 1e-10);
        assert_eq!(kpi.covered_by_department["icu"], 720);
        assert_eq!(kpi.covered_by_department["er"], 720);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = RosterKpi::calculate(&Roster::new(), &[]);
        assert_eq!(kpi.total_slots, 0);
        assert!((kpi.fill_rate - 0.0).abs() < f64::EPSILON);
        assert!((kpi.coverage_rate - 0.0).abs() < f64::EPSILON);
    }
}
