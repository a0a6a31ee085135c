//! Interval labels relative to a root.
//!
//! Labels are what the fretboard diagram prints on each dot: `F` for the
//! fundamental, then `b9`, `2`/`9`, `b3`, `3`, `4`/`11`, ... Whether a second,
//! fourth or sixth is shown as a 9, 11 or 13 depends only on register: the note
//! has to sit more than an octave above the root.

use serde::{Deserialize, Serialize};

use crate::pitch::{effective_flats, Accidental};

/// Label of the fundamental itself.
pub const FUNDAMENTAL: &str = "F";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalInfo {
    pub label: String,
    /// Semitones above the root, reduced into `0..12`.
    pub semitone_class: u8,
    /// More than an octave above the root.
    pub is_compound: bool,
}

/// Semitone distance from root to target, reduced into `0..12`.
pub fn semitone_class(root_absolute: i32, target_absolute: i32) -> u8 {
    (target_absolute - root_absolute).rem_euclid(12) as u8
}

/// Label the interval from `root_absolute` up to `target_absolute`.
///
/// # Example
/// ```
/// use fretlab::interval::classify_interval;
///
/// // Low E up to G on the same string
/// assert_eq!(classify_interval(40, 43, false, None).label, "b3");
/// // D an octave and a step above C
/// assert_eq!(classify_interval(48, 62, false, None).label, "9");
/// ```
pub fn classify_interval(
    root_absolute: i32,
    target_absolute: i32,
    use_flats: bool,
    explicit: Option<Accidental>,
) -> IntervalInfo {
    let raw_diff = target_absolute - root_absolute;
    let class = semitone_class(root_absolute, target_absolute);
    let is_compound = raw_diff > 12;
    let flats = effective_flats(use_flats, explicit);

    let label = match class {
        0 => FUNDAMENTAL,
        1 => "b9",
        2 if is_compound => "9",
        2 => "2",
        3 if is_compound && !flats => "#9",
        3 => "b3",
        4 => "3",
        5 if is_compound => "11",
        5 => "4",
        6 if flats => "b5",
        6 => "#11",
        7 => "5",
        8 if flats => "b13",
        8 => "#5",
        9 if is_compound => "13",
        9 => "6",
        10 => "b7",
        _ => "7",
    };

    IntervalInfo {
        label: label.to_string(),
        semitone_class: class,
        is_compound,
    }
}
