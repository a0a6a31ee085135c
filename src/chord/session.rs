//! # Chord Editing State
//!
//! [`Chord`] is the caller-owned value a fretboard editor keeps while the user
//! places notes. It holds no global state; every query reads only `self`.
//!
//! ## Rules
//! - One note per string: placing a note replaces whatever was on that string.
//! - Toggling an occupied position removes the note there; removing the root
//!   clears the root designation.
//! - The first note placed on an empty chord becomes the root.
//! - New notes record the global flat/sharp preference as their own spelling,
//!   so flipping the global setting later doesn't respell notes already placed.
//!
//! ## Example
//! ```rust
//! use fretlab::chord::{Chord, LabelMode};
//! use fretlab::tuning::TuningDefinition;
//!
//! let guitar = TuningDefinition::standard();
//! let mut chord = Chord::new(false);
//! chord.toggle(&guitar, 1, 3); // C on the A string, becomes root
//! chord.toggle(&guitar, 2, 2); // E
//! chord.toggle(&guitar, 3, 0); // G
//!
//! assert_eq!(chord.name().as_deref(), Some("C"));
//! let labels: Vec<String> = chord
//!     .labels(LabelMode::Intervals)
//!     .into_iter()
//!     .map(|l| l.text)
//!     .collect();
//! assert_eq!(labels, vec!["F", "3", "5"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::chord::namer::name_chord;
use crate::interval::{classify_interval, FUNDAMENTAL};
use crate::note::{FrettedPosition, ResolvedNote};
use crate::pitch::Accidental;
use crate::tuning::TuningDefinition;

/// Name stored on a snapshot whose chord has no root.
pub const UNNAMED: &str = "Unnamed";

/// What each fretboard dot should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Interval from the root (`F`, `b3`, `9`, ...)
    Intervals,
    /// Note names (`C`, `Eb`, ...)
    Notes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteLabel {
    #[serde(flatten)]
    pub position: FrettedPosition,
    pub text: String,
    pub is_root: bool,
}

/// A chord being edited on a fretboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chord {
    notes: Vec<ResolvedNote>,
    root: Option<FrettedPosition>,
    use_flats: bool,
}

impl Chord {
    pub fn new(use_flats: bool) -> Self {
        Self {
            notes: Vec::new(),
            root: None,
            use_flats,
        }
    }

    pub fn notes(&self) -> &[ResolvedNote] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn use_flats(&self) -> bool {
        self.use_flats
    }

    pub fn set_use_flats(&mut self, use_flats: bool) {
        self.use_flats = use_flats;
    }

    pub fn root_note(&self) -> Option<&ResolvedNote> {
        let root = self.root?;
        self.notes.iter().find(|note| note.position == root)
    }

    fn find(&self, position: FrettedPosition) -> Option<usize> {
        self.notes.iter().position(|note| note.position == position)
    }

    fn new_note(&self, tuning: &TuningDefinition, position: FrettedPosition) -> ResolvedNote {
        let pitch = tuning.resolve(position.string_index, position.fret_number);
        ResolvedNote::new(position, pitch)
    }

    /// Put `note` on its string, replacing whatever was there.
    fn place(&mut self, note: ResolvedNote) {
        let string = note.position.string_index;
        if self.root.is_some_and(|root| root.string_index == string) {
            self.root = None;
        }
        self.notes.retain(|n| n.position.string_index != string);
        self.notes.push(note);
    }

    fn mark_root(&mut self, root: Option<FrettedPosition>) {
        self.root = root;
        for note in &mut self.notes {
            note.is_root = Some(note.position) == root;
        }
    }

    /// Add a note at (`string`, `fret`), or remove the note already there.
    pub fn toggle(&mut self, tuning: &TuningDefinition, string_index: usize, fret_number: u32) {
        let position = FrettedPosition::new(string_index, fret_number);

        if let Some(index) = self.find(position) {
            self.notes.remove(index);
            if self.root == Some(position) {
                self.mark_root(None);
            }
            return;
        }

        self.insert(tuning, position, None);
    }

    /// Place a note at `position` with an explicit spelling (or the global
    /// preference when `accidental` is `None`). Unlike [`toggle`](Self::toggle),
    /// an existing note there is kept; only a given `accidental` respells it.
    pub fn insert(
        &mut self,
        tuning: &TuningDefinition,
        position: FrettedPosition,
        accidental: Option<Accidental>,
    ) {
        if let Some(index) = self.find(position) {
            if accidental.is_some() {
                self.notes[index].accidental = accidental;
            }
            return;
        }

        let accidental = accidental.unwrap_or(Accidental::from_preference(self.use_flats));
        let note = self.new_note(tuning, position).with_accidental(Some(accidental));
        self.place(note);
        let root = if self.notes.len() == 1 && self.root.is_none() {
            Some(position)
        } else {
            self.root
        };
        self.mark_root(root);
    }

    /// Make (`string`, `fret`) the root, placing a note there if needed.
    pub fn set_root(&mut self, tuning: &TuningDefinition, string_index: usize, fret_number: u32) {
        let position = FrettedPosition::new(string_index, fret_number);
        if self.find(position).is_none() {
            self.insert(tuning, position, None);
        }
        self.mark_root(Some(position));
    }

    /// Flip the spelling of the note at (`string`, `fret`). A note with no
    /// explicit spelling becomes flat. Returns `false` if no note is there.
    pub fn toggle_accidental(&mut self, string_index: usize, fret_number: u32) -> bool {
        let position = FrettedPosition::new(string_index, fret_number);
        match self.notes.iter_mut().find(|note| note.position == position) {
            Some(note) => {
                note.accidental = Some(match note.accidental {
                    Some(accidental) => accidental.flipped(),
                    None => Accidental::Flat,
                });
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.notes.clear();
        self.root = None;
    }

    /// The chord's name, or `None` without a root or without notes.
    pub fn name(&self) -> Option<String> {
        let root = self.root_note()?;
        name_chord(root, &self.notes, self.use_flats)
    }

    /// One label per note, in placement order.
    ///
    /// In [`LabelMode::Intervals`] mode, a chord without a root falls back to
    /// note names.
    pub fn labels(&self, mode: LabelMode) -> Vec<NoteLabel> {
        let root = self.root_note();
        self.notes
            .iter()
            .map(|note| {
                let text = match (mode, root) {
                    (LabelMode::Intervals, Some(_)) if note.is_root => FUNDAMENTAL.to_string(),
                    (LabelMode::Intervals, Some(root)) => {
                        classify_interval(
                            root.absolute_semitone,
                            note.absolute_semitone,
                            self.use_flats,
                            note.accidental,
                        )
                        .label
                    }
                    _ => note.display_name(self.use_flats).to_string(),
                };
                NoteLabel {
                    position: note.position,
                    text,
                    is_root: note.is_root,
                }
            })
            .collect()
    }

    /// Notes from lowest to highest pitch, the order they are strummed.
    pub fn playback_order(&self) -> Vec<&ResolvedNote> {
        let mut notes: Vec<&ResolvedNote> = self.notes.iter().collect();
        notes.sort_by_key(|note| note.absolute_semitone);
        notes
    }

    /// Snapshot the chord for a chord sheet. `None` if there are no notes.
    pub fn capture(
        &self,
        id: impl Into<String>,
        created_at: u64,
        tuning: &TuningDefinition,
        show_intervals: bool,
    ) -> Option<SavedChord> {
        if self.notes.is_empty() {
            return None;
        }
        Some(SavedChord {
            id: id.into(),
            name: self.name().unwrap_or_else(|| UNNAMED.to_string()),
            notes: self.notes.clone(),
            root_note: self.root_note().cloned(),
            date: created_at,
            show_intervals,
            use_flats: self.use_flats,
            instrument: "guitar".to_string(),
            tuning_id: tuning.id().to_string(),
        })
    }
}

/// A captured chord, as stored in a chord sheet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedChord {
    pub id: String,
    pub name: String,
    pub notes: Vec<ResolvedNote>,
    pub root_note: Option<ResolvedNote>,
    pub date: u64,
    pub show_intervals: bool,
    pub use_flats: bool,
    pub instrument: String,
    pub tuning_id: String,
}

impl SavedChord {
    /// Re-open the snapshot for editing.
    pub fn restore(&self) -> Chord {
        let mut chord = Chord {
            notes: self.notes.clone(),
            root: None,
            use_flats: self.use_flats,
        };
        let root = self
            .root_note
            .as_ref()
            .map(|root| root.position)
            .filter(|&position| chord.find(position).is_some());
        chord.mark_root(root);
        chord
    }

    /// Name of the shape with the root letter replaced, for movable shapes.
    pub fn generic_name(&self) -> String {
        crate::chord::generic::generic_name(&self.name)
    }

    pub fn label_mode(&self) -> LabelMode {
        if self.show_intervals {
            LabelMode::Intervals
        } else {
            LabelMode::Notes
        }
    }
}
