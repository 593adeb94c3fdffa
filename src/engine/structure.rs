//! Coverage-hours decomposition.
//!
//! Maps a requirement's total coverage hours to an ordered list of
//! shift-template names to attempt. A 24h day is split one of three
//! ways, chosen at random so repeated runs spread shift shapes across
//! the roster; anything else is assumed to be the overnight remainder.
//! This is a coarse heuristic over the standard catalog, not a
//! bin-packing solver.

use rand::Rng;

/// 12h day shift.
pub const DAY_FULL: &str = "08-20";
/// 12h night shift.
pub const NIGHT_FULL: &str = "20-08";
/// 6h morning split.
pub const DAY_EARLY: &str = "08-14";
/// 6h afternoon split.
pub const DAY_LATE: &str = "14-20";

/// The three accepted decompositions of a 24h coverage day.
const FULL_DAY_SPLITS: [&[&str]; 3] = [
    &[DAY_FULL, DAY_FULL],
    &[DAY_FULL, DAY_EARLY, DAY_LATE],
    &[DAY_EARLY, DAY_EARLY, DAY_LATE, DAY_LATE],
];

/// Ordered template names covering `required_hours`.
///
/// 24h → one of the splits above, picked with `rng`; anything else →
/// the single overnight template.
pub fn decompose<R: Rng>(required_hours: u32, rng: &mut R) -> Vec<&'static str> {
    if required_hours == 24 {
        let pick = rng.random_range(0..FULL_DAY_SPLITS.len());
        FULL_DAY_SPLITS[pick].to_vec()
    } else {
        vec![NIGHT_FULL]
    }
}
