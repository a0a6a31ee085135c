//! # Pitch Classes
//!
//! The twelve semitone classes and how they are spelled.
//!
//! Every pitch class has a canonical sharp/natural name (`C`, `C#`, `D`, ...).
//! The five black-key classes can also be spelled with a flat (`Db`, `Eb`, `Gb`,
//! `Ab`, `Bb`). Which spelling is shown depends on the chord-wide flat preference,
//! unless a note carries its own [`Accidental`], which always wins.
//!
//! ## Example
//! ```rust
//! use fretlab::pitch::{display_name, Accidental, PitchClass};
//!
//! assert_eq!(display_name(PitchClass::DSharp, false, None), "D#");
//! assert_eq!(display_name(PitchClass::DSharp, true, None), "Eb");
//! assert_eq!(display_name(PitchClass::DSharp, false, Some(Accidental::Flat)), "Eb");
//! assert_eq!(display_name(PitchClass::E, true, None), "E");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretError;

/// One of the twelve equal-tempered semitone classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// Pitch classes ordered by semitone, starting at C.
pub const NOTES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

impl PitchClass {
    /// Pitch class of an absolute semitone (any integer, negative included).
    pub fn from_semitone(semitone: i32) -> Self {
        NOTES[semitone.rem_euclid(12) as usize]
    }

    /// Canonical (sharp or natural) spelling.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling for the five black-key classes, `None` for naturals.
    pub fn flat_name(self) -> Option<&'static str> {
        match self {
            PitchClass::CSharp => Some("Db"),
            PitchClass::DSharp => Some("Eb"),
            PitchClass::FSharp => Some("Gb"),
            PitchClass::GSharp => Some("Ab"),
            PitchClass::ASharp => Some("Bb"),
            _ => None,
        }
    }

    pub fn is_natural(self) -> bool {
        self.flat_name().is_none()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note_name(s).map(|(pitch_class, _)| pitch_class)
    }
}

/// A per-note spelling preference.
///
/// Serialized as `"b"` / `"#"`, the way the presentation layer stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    #[serde(rename = "b")]
    Flat,
    #[serde(rename = "#")]
    Sharp,
}

impl Accidental {
    /// The opposite spelling.
    pub fn flipped(self) -> Self {
        match self {
            Accidental::Flat => Accidental::Sharp,
            Accidental::Sharp => Accidental::Flat,
        }
    }

    /// The accidental matching a global flat/sharp preference.
    pub fn from_preference(use_flats: bool) -> Self {
        if use_flats {
            Accidental::Flat
        } else {
            Accidental::Sharp
        }
    }
}

impl FromStr for Accidental {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "b" | "flat" => Ok(Accidental::Flat),
            "#" | "sharp" => Ok(Accidental::Sharp),
            other => Err(FretError::InvalidNoteName(other.to_string())),
        }
    }
}

/// Resolve a per-note accidental against the global preference.
///
/// An explicit accidental always wins; otherwise `use_flats` decides.
pub fn effective_flats(use_flats: bool, explicit: Option<Accidental>) -> bool {
    match explicit {
        Some(accidental) => accidental == Accidental::Flat,
        None => use_flats,
    }
}

/// Display name of a pitch class.
///
/// Black-key classes use their flat spelling when flats are in effect (after
/// `explicit` overrides `use_flats`). Naturals never change.
pub fn display_name(
    pitch_class: PitchClass,
    use_flats: bool,
    explicit: Option<Accidental>,
) -> &'static str {
    if effective_flats(use_flats, explicit) {
        if let Some(flat) = pitch_class.flat_name() {
            return flat;
        }
    }
    pitch_class.name()
}

/// Parse a note name such as `"C"`, `"F#"` or `"Bb"`.
///
/// Returns the pitch class and, when the name was written with an accidental,
/// that accidental as a spelling preference. Enharmonic spellings outside the
/// twelve-class table (`"Cb"`, `"E#"`) resolve by semitone arithmetic.
pub fn parse_note_name(name: &str) -> Result<(PitchClass, Option<Accidental>), FretError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();

    let base: i32 = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return Err(FretError::InvalidNoteName(name.to_string())),
    };

    let (offset, accidental) = match chars.as_str() {
        "" => (0, None),
        "#" | "♯" => (1, Some(Accidental::Sharp)),
        "b" | "♭" => (-1, Some(Accidental::Flat)),
        _ => return Err(FretError::InvalidNoteName(name.to_string())),
    };

    Ok((PitchClass::from_semitone(base + offset), accidental))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_semitone_wraps_both_directions() {
        assert_eq!(PitchClass::from_semitone(0), PitchClass::C);
        assert_eq!(PitchClass::from_semitone(40), PitchClass::E);
        assert_eq!(PitchClass::from_semitone(43), PitchClass::G);
        assert_eq!(PitchClass::from_semitone(-1), PitchClass::B);
        for semitone in -24..48 {
            assert_eq!(
                PitchClass::from_semitone(semitone),
                PitchClass::from_semitone(semitone + 12)
            );
        }
    }

    #[test]
    fn test_naturals_ignore_flat_preference() {
        for pc in NOTES.iter().copied().filter(|pc| pc.is_natural()) {
            assert_eq!(display_name(pc, true, None), display_name(pc, false, None));
            assert_eq!(display_name(pc, false, Some(Accidental::Flat)), pc.name());
        }
    }

    #[test]
    fn test_black_keys_follow_preference() {
        assert_eq!(display_name(PitchClass::CSharp, false, None), "C#");
        assert_eq!(display_name(PitchClass::CSharp, true, None), "Db");
        assert_eq!(display_name(PitchClass::FSharp, true, None), "Gb");
        assert_eq!(display_name(PitchClass::GSharp, true, None), "Ab");
        assert_eq!(display_name(PitchClass::ASharp, true, None), "Bb");
    }

    #[test]
    fn test_explicit_accidental_overrides_global() {
        assert_eq!(display_name(PitchClass::DSharp, true, Some(Accidental::Sharp)), "D#");
        assert_eq!(display_name(PitchClass::DSharp, false, Some(Accidental::Flat)), "Eb");
    }

    #[test]
    fn test_parse_note_name() {
        assert_eq!(parse_note_name("C").unwrap(), (PitchClass::C, None));
        assert_eq!(parse_note_name("F#").unwrap(), (PitchClass::FSharp, Some(Accidental::Sharp)));
        assert_eq!(parse_note_name("Bb").unwrap(), (PitchClass::ASharp, Some(Accidental::Flat)));
        assert_eq!(parse_note_name("Cb").unwrap(), (PitchClass::B, Some(Accidental::Flat)));
        assert_eq!(parse_note_name("e").unwrap(), (PitchClass::E, None));
        assert!(parse_note_name("H").is_err());
        assert!(parse_note_name("C##").is_err());
        assert!(parse_note_name("").is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&PitchClass::GSharp).unwrap();
        assert_eq!(json, "\"G#\"");
        let accidental: Accidental = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(accidental, Accidental::Flat);
    }
}
