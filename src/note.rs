//! Fretted positions and the notes they resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretError;
use crate::pitch::{display_name, Accidental, PitchClass};

/// A (string, fret) pair on the fretboard. Fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrettedPosition {
    pub string_index: usize,
    pub fret_number: u32,
}

impl FrettedPosition {
    pub fn new(string_index: usize, fret_number: u32) -> Self {
        Self {
            string_index,
            fret_number,
        }
    }
}

impl fmt::Display for FrettedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.string_index, self.fret_number)
    }
}

/// A position written as `string:fret`, optionally followed by a spelling
/// (`2:3b`, `4:1#`).
///
/// # Example
/// ```
/// use fretlab::note::PositionSpec;
/// use fretlab::pitch::Accidental;
///
/// let spec: PositionSpec = "2:3b".parse().unwrap();
/// assert_eq!(spec.position.string_index, 2);
/// assert_eq!(spec.position.fret_number, 3);
/// assert_eq!(spec.accidental, Some(Accidental::Flat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionSpec {
    pub position: FrettedPosition,
    pub accidental: Option<Accidental>,
}

impl FromStr for PositionSpec {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FretError::InvalidPosition(s.to_string());
        let (string_part, fret_part) = s.trim().split_once(':').ok_or_else(invalid)?;

        let (fret_digits, accidental) = if let Some(digits) = fret_part.strip_suffix('b') {
            (digits, Some(Accidental::Flat))
        } else if let Some(digits) = fret_part.strip_suffix('#') {
            (digits, Some(Accidental::Sharp))
        } else {
            (fret_part, None)
        };

        let string_index = string_part.parse::<usize>().map_err(|_| invalid())?;
        let fret_number = fret_digits.parse::<u32>().map_err(|_| invalid())?;

        Ok(PositionSpec {
            position: FrettedPosition::new(string_index, fret_number),
            accidental,
        })
    }
}

/// The pitch a position sounds under some tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPitch {
    pub pitch_class: PitchClass,
    pub absolute_semitone: i32,
    pub octave: i32,
}

impl ResolvedPitch {
    /// Pitch of an absolute semitone. Octaves are MIDI-style: 60 is C4.
    pub fn from_absolute(absolute_semitone: i32) -> Self {
        Self {
            pitch_class: PitchClass::from_semitone(absolute_semitone),
            absolute_semitone,
            octave: absolute_semitone.div_euclid(12) - 1,
        }
    }
}

/// A note placed on the fretboard, with its resolved pitch.
///
/// `accidental` is a per-note spelling preference that overrides the chord-wide
/// flat/sharp setting wherever this note is displayed or named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNote {
    #[serde(flatten)]
    pub position: FrettedPosition,
    #[serde(rename = "note")]
    pub pitch_class: PitchClass,
    pub absolute_semitone: i32,
    pub octave: i32,
    #[serde(default)]
    pub is_root: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accidental: Option<Accidental>,
}

impl ResolvedNote {
    pub fn new(position: FrettedPosition, pitch: ResolvedPitch) -> Self {
        Self {
            position,
            pitch_class: pitch.pitch_class,
            absolute_semitone: pitch.absolute_semitone,
            octave: pitch.octave,
            is_root: false,
            accidental: None,
        }
    }

    /// Build a note straight from an absolute semitone, with no fretboard
    /// context. Useful for callers that already know the pitch.
    pub fn from_absolute(position: FrettedPosition, absolute_semitone: i32) -> Self {
        Self::new(position, ResolvedPitch::from_absolute(absolute_semitone))
    }

    pub fn with_accidental(mut self, accidental: Option<Accidental>) -> Self {
        self.accidental = accidental;
        self
    }

    pub fn as_root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Name of this note, honoring its own accidental over `use_flats`.
    pub fn display_name(&self, use_flats: bool) -> &'static str {
        display_name(self.pitch_class, use_flats, self.accidental)
    }

    /// Equal-tempered frequency with A4 (semitone 69) at 440 Hz.
    pub fn frequency_hz(&self) -> f64 {
        440.0 * 2.0_f64.powf((self.absolute_semitone - 69) as f64 / 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_numbering() {
        assert_eq!(ResolvedPitch::from_absolute(60).octave, 4);
        assert_eq!(ResolvedPitch::from_absolute(40).octave, 2);
        assert_eq!(ResolvedPitch::from_absolute(0).octave, -1);
        assert_eq!(ResolvedPitch::from_absolute(11).octave, -1);
        assert_eq!(ResolvedPitch::from_absolute(-1).octave, -2);
    }

    #[test]
    fn test_frequency() {
        let a4 = ResolvedNote::from_absolute(FrettedPosition::new(0, 0), 69);
        assert!((a4.frequency_hz() - 440.0).abs() < 1e-9);
        let a5 = ResolvedNote::from_absolute(FrettedPosition::new(0, 0), 81);
        assert!((a5.frequency_hz() - 880.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_position_spec() {
        let plain: PositionSpec = "0:5".parse().unwrap();
        assert_eq!(plain.position, FrettedPosition::new(0, 5));
        assert_eq!(plain.accidental, None);

        let sharp: PositionSpec = " 3:11# ".parse().unwrap();
        assert_eq!(sharp.position, FrettedPosition::new(3, 11));
        assert_eq!(sharp.accidental, Some(Accidental::Sharp));

        assert!("3".parse::<PositionSpec>().is_err());
        assert!("a:3".parse::<PositionSpec>().is_err());
        assert!("1:-2".parse::<PositionSpec>().is_err());
        assert!("1:x".parse::<PositionSpec>().is_err());
    }

    #[test]
    fn test_note_serializes_like_ui_note_data() {
        let note = ResolvedNote::from_absolute(FrettedPosition::new(1, 3), 48)
            .with_accidental(Some(Accidental::Flat))
            .as_root(true);
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["stringIndex"], 1);
        assert_eq!(json["fretNumber"], 3);
        assert_eq!(json["note"], "C");
        assert_eq!(json["absoluteSemitone"], 48);
        assert_eq!(json["octave"], 3);
        assert_eq!(json["isRoot"], true);
        assert_eq!(json["accidental"], "b");
    }
}
