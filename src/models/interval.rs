//! Wrap-aware shift intervals.
//!
//! A shift interval is a half-open wall-clock range `[start, end)`.
//! An interval whose end is earlier than its start wraps past midnight:
//! `22:00-06:00` runs into the following day. Comparisons normalize the
//! wrapped end by adding 24h, so overlap and duration are always
//! computed on the same 24h-wrapped basis.
//!
//! Durations are minute-accurate. Naive hour subtraction is never used.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes in one day.
const DAY_MINUTES: i64 = 24 * 60;

/// A half-open wall-clock interval `[start, end)`, wrapping past
/// midnight when `end < start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive); earlier than `start` means the
    /// interval wraps past midnight.
    pub end: NaiveTime,
}

impl ShiftInterval {
    /// Creates a new interval.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether this interval crosses midnight.
    #[inline]
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Minute-accurate, midnight-aware duration.
    ///
    /// `22:00-06:00` is 480 minutes; `08:00-14:30` is 390 minutes.
    /// An interval with `start == end` has zero duration.
    pub fn duration_minutes(&self) -> i64 {
        let (start, end) = self.wrapped_minutes();
        end - start
    }

    /// Whether two intervals on the same date share any wall-clock
    /// moment.
    ///
    /// Half-open semantics: an interval ending exactly when the other
    /// starts does not conflict. Wrapped ends are normalized by adding
    /// 24h before comparison.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_start, a_end) = self.wrapped_minutes();
        let (b_start, b_end) = other.wrapped_minutes();
        a_start < b_end && b_start < a_end
    }

    /// Start and end as minutes from midnight, with a wrapped end
    /// pushed past 24h.
    fn wrapped_minutes(&self) -> (i64, i64) {
        let start = minutes_from_midnight(self.start);
        let mut end = minutes_from_midnight(self.end);
        if end < start {
            end += DAY_MINUTES;
        }
        (start, end)
    }
}

fn minutes_from_midnight(t: NaiveTime) -> i64 {
    i64::from(t.num_seconds_from_midnight()) / 60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_duration_plain() {
        let day = ShiftInterval::new(t(8, 0), t(20, 0));
        assert_eq!(day.duration_minutes(), 720);
        assert!(!day.wraps_midnight());
    }

    #[test]
    fn test_duration_minute_accurate() {
        let i = ShiftInterval::new(t(8, 0), t(14, 30));
        assert_eq!(i.duration_minutes(), 390);
    }

    #[test]
    fn test_duration_wrapping() {
        let night = ShiftInterval::new(t(20, 0), t(8, 0));
        assert_eq!(night.duration_minutes(), 720);
        assert!(night.wraps_midnight());

        let late = ShiftInterval::new(t(22, 30), t(6, 15));
        assert_eq!(late.duration_minutes(), 465);
    }

    #[test]
    fn test_zero_duration() {
        let i = ShiftInterval::new(t(8, 0), t(8, 0));
        assert_eq!(i.duration_minutes(), 0);
    }

    #[test]
    fn test_overlap_plain() {
        let a = ShiftInterval::new(t(8, 0), t(14, 0));
        let b = ShiftInterval::new(t(13, 0), t(20, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_does_not_overlap() {
        let a = ShiftInterval::new(t(8, 0), t(14, 0));
        let b = ShiftInterval::new(t(14, 0), t(20, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlap_wrapping() {
        let night = ShiftInterval::new(t(20, 0), t(8, 0));
        let evening = ShiftInterval::new(t(14, 0), t(22, 0));
        assert!(night.overlaps(&evening));

        // Wrapped end extends past 24h and clears an early-morning slot.
        let morning = ShiftInterval::new(t(8, 0), t(14, 0));
        assert!(!night.overlaps(&morning));
    }

    #[test]
    fn test_overlap_both_wrapping() {
        let a = ShiftInterval::new(t(22, 0), t(6, 0));
        let b = ShiftInterval::new(t(23, 0), t(2, 0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        let outer = ShiftInterval::new(t(8, 0), t(20, 0));
        let inner = ShiftInterval::new(t(10, 0), t(12, 0));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
