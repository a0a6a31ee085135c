//! Chord naming from a root and a set of notes.
//!
//! The name is derived by a fixed cascade over the set of interval classes above
//! the root. Voicing and octave are discarded; only which of the eleven
//! non-root classes are present matters, plus how the player chose to spell a
//! few of them.
//!
//! Stages, in order:
//! 1. quality (power, augmented, diminished family, minor, sus, major)
//! 2. seventh or sixth
//! 3. 9th, then 11th, then 13th folded into the seventh
//! 4. alterations (`#11`/`b5`, `#5`/`(b13)`, `b9`, `#9`)
//! 5. drop a minor quality that the extension already spells
//!
//! Each stage reads the previous stage's output; the order encodes real
//! precedence (a flat-spelled `#5` next to a `b7` is a `7(b13)`, not a `+7`).

use crate::chord::symbol::{Alteration, ChordSymbol, Extension, Quality};
use crate::interval::semitone_class;
use crate::note::ResolvedNote;
use crate::pitch::{effective_flats, Accidental};

const FLAT_NINTH: u8 = 1;
const SECOND: u8 = 2;
const MINOR_THIRD: u8 = 3;
const MAJOR_THIRD: u8 = 4;
const FOURTH: u8 = 5;
const FLAT_FIFTH: u8 = 6;
const FIFTH: u8 = 7;
const SHARP_FIFTH: u8 = 8;
const SIXTH: u8 = 9;
const MINOR_SEVENTH: u8 = 10;
const MAJOR_SEVENTH: u8 = 11;

/// Distinct interval classes (1..=11) present above the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalSet(u16);

impl IntervalSet {
    pub fn insert(&mut self, class: u8) {
        if (1..12).contains(&class) {
            self.0 |= 1 << class;
        }
    }

    pub fn has(&self, class: u8) -> bool {
        self.0 & (1 << class) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn classes(&self) -> impl Iterator<Item = u8> + '_ {
        (1..12).filter(move |&class| self.has(class))
    }
}

impl FromIterator<u8> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = IntervalSet::default();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Everything the cascade needs to know about the notes, computed once.
#[derive(Debug, Clone, Copy)]
struct Analysis {
    intervals: IntervalSet,
    /// The `#5` was entered with a flat spelling, so it reads as a `b13`.
    sharp5_as_flat13: bool,
    is_diminished: bool,
    is_augmented: bool,
    is_sus2: bool,
    is_sus4: bool,
    is_power: bool,
}

impl Analysis {
    fn new(root: &ResolvedNote, others: &[&ResolvedNote], use_flats: bool) -> Self {
        let intervals: IntervalSet = others
            .iter()
            .map(|note| semitone_class(root.absolute_semitone, note.absolute_semitone))
            .collect();
        let has = |class| intervals.has(class);

        let no_third = !has(MAJOR_THIRD) && !has(MINOR_THIRD);
        let sharp5_as_flat13 =
            has(SHARP_FIFTH) && interval_is_flat(root, others, SHARP_FIFTH, use_flats);

        Self {
            intervals,
            sharp5_as_flat13,
            is_diminished: has(MINOR_THIRD) && has(FLAT_FIFTH) && !has(FIFTH),
            is_augmented: has(MAJOR_THIRD) && has(SHARP_FIFTH) && !has(FIFTH),
            is_sus2: no_third && has(SECOND),
            is_sus4: no_third && has(FOURTH),
            is_power: has(FIFTH) && no_third && !has(SECOND) && !has(FOURTH),
        }
    }

    fn has(&self, class: u8) -> bool {
        self.intervals.has(class)
    }
}

/// Spelling of an interval class, taken from the first note that produces it.
///
/// A note's own accidental decides; without one the global preference does.
fn interval_is_flat(
    root: &ResolvedNote,
    others: &[&ResolvedNote],
    class: u8,
    use_flats: bool,
) -> bool {
    let explicit: Option<Accidental> = others
        .iter()
        .find(|note| semitone_class(root.absolute_semitone, note.absolute_semitone) == class)
        .and_then(|note| note.accidental);
    effective_flats(use_flats, explicit)
}

fn quality(a: &Analysis) -> Quality {
    if a.is_power {
        Quality::Power
    } else if a.is_augmented {
        if a.sharp5_as_flat13 && a.has(MINOR_SEVENTH) {
            Quality::AlteredDominant
        } else {
            Quality::Augmented
        }
    } else if a.is_diminished {
        if a.has(SIXTH) {
            Quality::DiminishedSeventh
        } else if a.has(MINOR_SEVENTH) {
            Quality::HalfDiminished
        } else {
            Quality::Diminished
        }
    } else if a.has(MINOR_THIRD) && !a.has(MAJOR_THIRD) {
        Quality::Minor
    } else if a.is_sus4 {
        Quality::Sus4
    } else if a.is_sus2 {
        Quality::Sus2
    } else {
        // Covers both thirds together: a major chord with a #9.
        Quality::Major
    }
}

fn seventh(a: &Analysis, quality: Quality) -> (Quality, Extension) {
    if a.has(MAJOR_SEVENTH) {
        let extension = match quality {
            Quality::Minor | Quality::Major | Quality::Augmented | Quality::Sus4 => {
                Extension::Major7
            }
            _ => Extension::None,
        };
        (quality, extension)
    } else if a.has(MINOR_SEVENTH) {
        match quality {
            Quality::Minor | Quality::Major => (quality, Extension::Seventh),
            Quality::Sus4 => (Quality::SeventhSus4, Extension::None),
            Quality::Augmented => (Quality::AugmentedSeventh, Extension::None),
            _ => (quality, Extension::None),
        }
    } else if a.has(SIXTH) && !a.is_diminished {
        if a.has(SECOND) {
            (quality, Extension::SixNine)
        } else {
            (quality, Extension::Sixth)
        }
    } else {
        (quality, Extension::None)
    }
}

fn fold_ninth(a: &Analysis, quality: Quality, extension: Extension) -> Extension {
    if !a.has(SECOND) || a.is_sus2 || extension == Extension::SixNine {
        return extension;
    }
    match extension {
        Extension::Seventh => Extension::Ninth,
        Extension::Major7 => Extension::Major9,
        Extension::None if quality == Quality::Minor => Extension::MinorAdd9,
        Extension::None => Extension::Add9,
        other => other,
    }
}

fn fold_eleventh(a: &Analysis, extension: Extension) -> Extension {
    if !a.has(FOURTH) || a.is_sus4 {
        return extension;
    }
    match extension {
        Extension::Ninth | Extension::Seventh => Extension::Eleventh,
        Extension::Major9 | Extension::Major7 => Extension::Major11,
        Extension::None => Extension::Add11,
        other => other,
    }
}

fn fold_thirteenth(a: &Analysis, extension: Extension) -> Extension {
    if !a.has(SIXTH) || a.is_diminished || extension.is_sixth() || !extension.accepts_thirteenth() {
        return extension;
    }
    if extension.is_major_family() {
        Extension::Major13
    } else if extension.has_minor_marker() {
        Extension::Minor13
    } else {
        Extension::Thirteenth
    }
}

fn alterations(a: &Analysis, quality: Quality, extension: Extension) -> Vec<Alteration> {
    let mut alterations = Vec::new();

    if a.has(FLAT_FIFTH) && !a.is_diminished {
        if extension.names_seventh_or_ninth() {
            alterations.push(Alteration::Sharp11);
        } else {
            alterations.push(Alteration::Flat5);
        }
    }

    if a.has(SHARP_FIFTH) && !a.is_augmented && a.has(MINOR_SEVENTH) && !extension.is_thirteenth() {
        if a.sharp5_as_flat13 {
            alterations.push(Alteration::Flat13);
        } else {
            alterations.push(Alteration::Sharp5);
        }
    }

    if a.has(FLAT_NINTH) {
        alterations.push(Alteration::Flat9);
    }

    if a.has(MINOR_THIRD) && a.has(MAJOR_THIRD) && a.has(MINOR_SEVENTH) {
        alterations.push(Alteration::Sharp9);
    }

    if a.has(SHARP_FIFTH) && !matches!(quality, Quality::Augmented | Quality::AugmentedSeventh) {
        if a.sharp5_as_flat13 && quality == Quality::AlteredDominant {
            if !alterations.contains(&Alteration::Flat13) {
                alterations.push(Alteration::Flat13);
            }
        } else if !extension.is_none()
            && !alterations.contains(&Alteration::Sharp5)
            && !a.sharp5_as_flat13
        {
            alterations.push(Alteration::Sharp5);
        }
    }

    alterations
}

/// Derive the chord symbol for `root` and `notes`.
///
/// `notes` is the chord's note set and may contain the root itself (matched by
/// position); it is skipped. Returns `None` only when `notes` is empty. A single
/// note, whether or not it is the root, names just the root.
pub fn derive_symbol(
    root: &ResolvedNote,
    notes: &[ResolvedNote],
    use_flats: bool,
) -> Option<ChordSymbol> {
    if notes.is_empty() {
        return None;
    }

    let root_name = root.display_name(use_flats);
    let others: Vec<&ResolvedNote> = notes
        .iter()
        .filter(|note| note.position != root.position)
        .collect();
    if notes.len() == 1 || others.is_empty() {
        return Some(ChordSymbol::single(root_name));
    }

    let analysis = Analysis::new(root, &others, use_flats);
    let quality = quality(&analysis);
    log::trace!(
        "intervals {:?} above {} -> {:?}",
        analysis.intervals.classes().collect::<Vec<_>>(),
        root_name,
        quality
    );

    if quality == Quality::Power {
        return Some(ChordSymbol {
            root: root_name,
            quality,
            extension: Extension::None,
            alterations: Vec::new(),
        });
    }

    let (quality, extension) = seventh(&analysis, quality);
    let extension = fold_ninth(&analysis, quality, extension);
    let extension = fold_eleventh(&analysis, extension);
    let extension = fold_thirteenth(&analysis, extension);
    let alterations = alterations(&analysis, quality, extension);

    let quality = if quality == Quality::Minor && extension.has_minor_marker() {
        Quality::Major
    } else {
        quality
    };

    Some(ChordSymbol {
        root: root_name,
        quality,
        extension,
        alterations,
    })
}

/// Name the chord formed by `root` and `notes`, e.g. `"Dm7b5"` or `"G7(b13)"`.
///
/// # Example
/// ```
/// use fretlab::chord::name_chord;
/// use fretlab::note::{FrettedPosition, ResolvedNote};
///
/// let note = |string, absolute| {
///     ResolvedNote::from_absolute(FrettedPosition::new(string, 0), absolute)
/// };
/// let root = note(0, 48);
/// let notes = vec![root.clone(), note(1, 51), note(2, 55), note(3, 58)];
///
/// assert_eq!(name_chord(&root, &notes, false).as_deref(), Some("Cm7"));
/// assert_eq!(name_chord(&root, &[], false), None);
/// ```
pub fn name_chord(root: &ResolvedNote, notes: &[ResolvedNote], use_flats: bool) -> Option<String> {
    let name = derive_symbol(root, notes, use_flats).map(|symbol| symbol.to_string());
    log::debug!("named chord {:?}", name);
    name
}
