//! Pitch, interval and chord-name inference for fretted instruments.
//!
//! Given a tuning and a set of fretted positions, fretlab resolves each position
//! to a pitch, labels every note by its interval to a chosen root, and names the
//! chord (`"C7"`, `"Dm7b5"`, `"G7(b13)"`). All of it is pure: callers own their
//! chord state and pass it in.
//!
//! ```rust
//! use fretlab::chord::Chord;
//! use fretlab::tuning::TuningDefinition;
//!
//! let guitar = TuningDefinition::standard();
//! let mut chord = Chord::new(false);
//! for (string, fret) in [(1, 5), (2, 7), (3, 5), (4, 7), (5, 5)] {
//!     chord.toggle(&guitar, string, fret);
//! }
//! assert_eq!(chord.name().as_deref(), Some("D7"));
//! ```

pub mod api;
pub mod chord;
pub mod error;
pub mod interval;
pub mod note;
pub mod pitch;
pub mod tuning;

pub use chord::{generic_name, name_chord, Chord, SavedChord};
pub use error::*;
pub use interval::{classify_interval, IntervalInfo};
pub use note::{FrettedPosition, ResolvedNote, ResolvedPitch};
pub use pitch::{display_name, Accidental, PitchClass};
pub use tuning::{resolve_position, TuningDefinition, TuningTable};
