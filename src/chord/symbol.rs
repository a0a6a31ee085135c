//! Chord symbol parts
//!
//! A chord name is built as `root + quality + extension + alterations`, each part
//! kept as its own typed field until it is rendered.

use std::fmt;

/// The triad (or triad-replacing) part of a chord name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// Major triad, rendered as nothing.
    Major,
    Minor,
    /// Root and fifth only: `5`
    Power,
    /// `aug`
    Augmented,
    /// Augmented triad with a minor seventh: `+7`
    AugmentedSeventh,
    /// Augmented triad read as a dominant with a flat thirteenth: `7`
    AlteredDominant,
    /// `dim`
    Diminished,
    /// `dim7`
    DiminishedSeventh,
    /// `m7b5`
    HalfDiminished,
    Sus2,
    Sus4,
    /// `7sus4`
    SeventhSus4,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Power => "5",
            Quality::Augmented => "aug",
            Quality::AugmentedSeventh => "+7",
            Quality::AlteredDominant => "7",
            Quality::Diminished => "dim",
            Quality::DiminishedSeventh => "dim7",
            Quality::HalfDiminished => "m7b5",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
            Quality::SeventhSus4 => "7sus4",
        }
    }
}

/// Sevenths, sixths and the upper extensions folded on top of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    None,
    Sixth,
    SixNine,
    Seventh,
    Major7,
    Ninth,
    Major9,
    Add9,
    /// `m(add9)`; carries its own minor marker.
    MinorAdd9,
    Eleventh,
    Major11,
    Add11,
    Thirteenth,
    Major13,
    /// `m13`; carries its own minor marker.
    Minor13,
}

impl Extension {
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::None => "",
            Extension::Sixth => "6",
            Extension::SixNine => "6/9",
            Extension::Seventh => "7",
            Extension::Major7 => "Maj7",
            Extension::Ninth => "9",
            Extension::Major9 => "Maj9",
            Extension::Add9 => "add9",
            Extension::MinorAdd9 => "m(add9)",
            Extension::Eleventh => "11",
            Extension::Major11 => "Maj11",
            Extension::Add11 => "add11",
            Extension::Thirteenth => "13",
            Extension::Major13 => "Maj13",
            Extension::Minor13 => "m13",
        }
    }

    pub fn is_none(self) -> bool {
        self == Extension::None
    }

    pub fn is_sixth(self) -> bool {
        matches!(self, Extension::Sixth | Extension::SixNine)
    }

    pub fn is_thirteenth(self) -> bool {
        matches!(
            self,
            Extension::Thirteenth | Extension::Major13 | Extension::Minor13
        )
    }

    /// Extensions that name a 7th or 9th, which turns a flat fifth into a `#11`.
    pub fn names_seventh_or_ninth(self) -> bool {
        matches!(
            self,
            Extension::Seventh
                | Extension::Major7
                | Extension::Ninth
                | Extension::Major9
                | Extension::Add9
                | Extension::MinorAdd9
                | Extension::SixNine
        )
    }

    /// Extensions a 13th can be stacked on.
    pub fn accepts_thirteenth(self) -> bool {
        matches!(
            self,
            Extension::Seventh
                | Extension::Major7
                | Extension::Ninth
                | Extension::Major9
                | Extension::Add9
                | Extension::MinorAdd9
                | Extension::Eleventh
                | Extension::Major11
                | Extension::Add11
        )
    }

    pub fn is_major_family(self) -> bool {
        matches!(
            self,
            Extension::Major7 | Extension::Major9 | Extension::Major11 | Extension::Major13
        )
    }

    /// Starts with its own `m`, so a minor quality in front of it is redundant.
    pub fn has_minor_marker(self) -> bool {
        matches!(self, Extension::MinorAdd9 | Extension::Minor13)
    }
}

/// Altered tones appended after the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alteration {
    Flat5,
    Sharp11,
    Sharp5,
    /// Rendered in parentheses: `(b13)`
    Flat13,
    Flat9,
    Sharp9,
}

impl Alteration {
    pub fn as_str(self) -> &'static str {
        match self {
            Alteration::Flat5 => "b5",
            Alteration::Sharp11 => "#11",
            Alteration::Sharp5 => "#5",
            Alteration::Flat13 => "(b13)",
            Alteration::Flat9 => "b9",
            Alteration::Sharp9 => "#9",
        }
    }
}

/// A fully derived chord name, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSymbol {
    pub root: &'static str,
    pub quality: Quality,
    pub extension: Extension,
    pub alterations: Vec<Alteration>,
}

impl ChordSymbol {
    /// A single tone: the root name alone.
    pub fn single(root: &'static str) -> Self {
        Self {
            root,
            quality: Quality::Major,
            extension: Extension::None,
            alterations: Vec::new(),
        }
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root)?;
        f.write_str(self.quality.as_str())?;
        f.write_str(self.extension.as_str())?;
        for alteration in &self.alterations {
            f.write_str(alteration.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_concatenates_without_separators() {
        let symbol = ChordSymbol {
            root: "Bb",
            quality: Quality::Major,
            extension: Extension::Seventh,
            alterations: vec![Alteration::Flat9, Alteration::Sharp9],
        };
        assert_eq!(symbol.to_string(), "Bb7b9#9");
    }

    #[test]
    fn test_single_tone() {
        assert_eq!(ChordSymbol::single("F#").to_string(), "F#");
    }
}
