//! # Public API
//!
//! The narrow boundary a presentation layer calls into. Everything here is keyed
//! by tuning id and takes plain values; nothing is remembered between calls.
//!
//! ## Functions
//!
//! - [`resolve_position()`] - Pitch at a (string, fret) under a tuning id
//! - [`display_name()`] - Spell a pitch class
//! - [`classify_interval()`] - Interval label relative to a root
//! - [`name_chord()`] - Chord name for a root and its notes
//! - [`generic_name()`] - Chord name with the root replaced by a placeholder
//! - [`analyze()`] - All of the above for a list of positions at once
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretlab::api;
//! use fretlab::note::PositionSpec;
//!
//! // Open-position C7: x32310
//! let positions: Vec<PositionSpec> = ["1:3", "2:2", "3:3", "4:1", "5:0"]
//!     .iter()
//!     .map(|p| p.parse())
//!     .collect::<Result<_, _>>()?;
//!
//! let report = api::analyze(&api::default_tunings(), "standard", &positions, None, false)?;
//! assert_eq!(report.name.as_deref(), Some("C7"));
//! assert_eq!(report.generic_name.as_deref(), Some("Ac. 7"));
//! # Ok::<(), fretlab::FretError>(())
//! ```

use serde::Serialize;

use crate::chord::{Chord, LabelMode, NoteLabel};
use crate::error::FretError;
use crate::note::{PositionSpec, ResolvedNote, ResolvedPitch};
use crate::tuning::TuningTable;

pub use crate::chord::{generic_name, name_chord};
pub use crate::interval::classify_interval;
pub use crate::pitch::display_name;

/// The built-in tuning table.
pub fn default_tunings() -> TuningTable {
    TuningTable::default()
}

/// Pitch at (`string`, `fret`) under one of the built-in tunings.
///
/// # Example
/// ```rust
/// use fretlab::api::resolve_position;
/// use fretlab::pitch::PitchClass;
///
/// let pitch = resolve_position("standard", 0, 3)?;
/// assert_eq!(pitch.pitch_class, PitchClass::G);
/// assert_eq!(pitch.absolute_semitone, 43);
/// assert_eq!(pitch.octave, 2);
/// # Ok::<(), fretlab::FretError>(())
/// ```
///
/// # Errors
/// [`FretError::UnknownTuning`] if `tuning_id` isn't in the table.
pub fn resolve_position(
    tuning_id: &str,
    string_index: usize,
    fret_number: u32,
) -> Result<ResolvedPitch, FretError> {
    resolve_position_in(&default_tunings(), tuning_id, string_index, fret_number)
}

/// Like [`resolve_position()`], against a caller-supplied table.
pub fn resolve_position_in(
    tunings: &TuningTable,
    tuning_id: &str,
    string_index: usize,
    fret_number: u32,
) -> Result<ResolvedPitch, FretError> {
    Ok(tunings.require(tuning_id)?.resolve(string_index, fret_number))
}

/// Everything a fretboard diagram shows for a set of positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordReport {
    pub tuning_id: String,
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub notes: Vec<ResolvedNote>,
    pub labels: Vec<NoteLabel>,
}

/// Resolve `positions`, pick the root and name the chord.
///
/// The root is `root` when given (added if it isn't among `positions`), else
/// the first position. Positions sharing a string replace one another, the
/// later one winning, as on a real fretboard.
///
/// # Errors
/// [`FretError::UnknownTuning`] if `tuning_id` isn't in `tunings`.
pub fn analyze(
    tunings: &TuningTable,
    tuning_id: &str,
    positions: &[PositionSpec],
    root: Option<PositionSpec>,
    use_flats: bool,
) -> Result<ChordReport, FretError> {
    let tuning = tunings.require(tuning_id)?;
    let mut chord = Chord::new(use_flats);

    for spec in positions {
        chord.insert(tuning, spec.position, spec.accidental);
    }
    if let Some(root) = root {
        chord.insert(tuning, root.position, root.accidental);
        chord.set_root(tuning, root.position.string_index, root.position.fret_number);
    } else if chord.root_note().is_none() {
        // The first position was replaced on its string; fall back to the
        // earliest note still standing.
        if let Some(first) = chord.notes().first().map(|note| note.position) {
            chord.set_root(tuning, first.string_index, first.fret_number);
        }
    }

    let name = chord.name();
    Ok(ChordReport {
        tuning_id: tuning.id().to_string(),
        generic_name: name.as_deref().map(generic_name),
        name,
        notes: chord.notes().to_vec(),
        labels: chord.labels(LabelMode::Intervals),
    })
}
