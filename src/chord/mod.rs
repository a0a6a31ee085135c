//! # Chord Module
//!
//! Naming chords from fretted notes, and the editing state a fretboard keeps.
//!
//! ## Sub-modules
//! - `symbol` - Typed chord-name parts (quality, extension, alterations)
//! - `namer` - The naming cascade
//! - `generic` - Root-independent names for movable shapes
//! - `session` - [`Chord`] editing state and [`SavedChord`] snapshots
//!
//! ## Entry Points
//! - [`name_chord()`] - Chord name for a root and a note set
//! - [`generic_name()`] - `"F#m7"` → `"Ac. m7"`
//!
//! ## Example
//! ```rust
//! use fretlab::chord::{generic_name, name_chord};
//! use fretlab::note::{FrettedPosition, ResolvedNote};
//! use fretlab::pitch::Accidental;
//!
//! let at = |string, absolute| {
//!     ResolvedNote::from_absolute(FrettedPosition::new(string, 0), absolute)
//! };
//! let root = at(0, 48);
//! let notes = vec![
//!     root.clone(),
//!     at(1, 52),
//!     at(2, 56).with_accidental(Some(Accidental::Flat)),
//!     at(3, 58),
//! ];
//!
//! let name = name_chord(&root, &notes, false).unwrap();
//! assert_eq!(name, "C7(b13)");
//! assert_eq!(generic_name(&name), "Ac. 7(b13)");
//! ```

mod generic;
mod namer;
mod session;
mod symbol;

#[cfg(test)]
mod tests;

pub use generic::{generic_name, GENERIC_PREFIX};
pub use namer::{derive_symbol, name_chord, IntervalSet};
pub use session::{Chord, LabelMode, NoteLabel, SavedChord, UNNAMED};
pub use symbol::{Alteration, ChordSymbol, Extension, Quality};
