//! # Tuning Module
//!
//! Tuning definitions and the position → pitch lookup.
//!
//! A tuning lists the absolute semitone of every open string. The pitch at a
//! fretted position is that open-string value plus the fret number; there is no
//! upper bound on frets.
//!
//! ## Configuration
//! The table ships with a single `standard` 6-string guitar tuning. More can be
//! loaded from YAML, keyed by tuning id:
//!
//! ```rust
//! use fretlab::tuning::TuningTable;
//!
//! let yaml = r#"
//! drop-d:
//!   name: Drop D (D A D G B E)
//!   offsets: [38, 45, 50, 55, 59, 64]
//! "#;
//!
//! let mut table = TuningTable::default();
//! table.extend_from_yaml(yaml)?;
//!
//! let drop_d = table.require("drop-d")?;
//! assert_eq!(drop_d.resolve(0, 0).absolute_semitone, 38);
//! # Ok::<(), fretlab::FretError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FretError;
use crate::note::ResolvedPitch;

/// Id of the built-in tuning.
pub const STANDARD: &str = "standard";

/// Open strings of a standard guitar, low E to high E.
pub const STANDARD_OFFSETS: [i32; 6] = [40, 45, 50, 55, 59, 64];

/// An instrument tuning: one absolute semitone per open string.
///
/// Always holds at least one string, and `string_count` always equals the
/// number of open strings. Construct with [`TuningDefinition::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningDefinition {
    id: String,
    #[serde(rename = "name")]
    display_name: String,
    #[serde(rename = "offsets")]
    open_strings: Vec<i32>,
    string_count: usize,
}

impl TuningDefinition {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        open_strings: Vec<i32>,
    ) -> Result<Self, FretError> {
        let id = id.into();
        if open_strings.is_empty() {
            return Err(FretError::InvalidTuning {
                id,
                message: "a tuning needs at least one string".to_string(),
            });
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            string_count: open_strings.len(),
            open_strings,
        })
    }

    /// The built-in standard guitar tuning.
    pub fn standard() -> Self {
        Self {
            id: STANDARD.to_string(),
            display_name: "Standard Guitar (E A D G B E)".to_string(),
            open_strings: STANDARD_OFFSETS.to_vec(),
            string_count: STANDARD_OFFSETS.len(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn open_strings(&self) -> &[i32] {
        &self.open_strings
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    /// Pitch at a fretted position.
    ///
    /// Out-of-range string indexes are clamped to the last string rather than
    /// rejected. The pitch saturates at `i32::MAX` for absurdly high frets.
    pub fn resolve(&self, string_index: usize, fret_number: u32) -> ResolvedPitch {
        let last = self.string_count - 1;
        if string_index > last {
            log::debug!(
                "string index {} out of range for tuning '{}', clamping to {}",
                string_index,
                self.id,
                last
            );
        }
        let open = self.open_strings[string_index.min(last)];
        let fret = i32::try_from(fret_number).unwrap_or(i32::MAX);
        ResolvedPitch::from_absolute(open.saturating_add(fret))
    }
}

/// Resolve a position under `tuning`. See [`TuningDefinition::resolve`].
pub fn resolve_position(
    tuning: &TuningDefinition,
    string_index: usize,
    fret_number: u32,
) -> ResolvedPitch {
    tuning.resolve(string_index, fret_number)
}

/// One tuning as written in a YAML configuration file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TuningEntry {
    name: String,
    offsets: Vec<i32>,
    #[serde(default)]
    string_count: Option<usize>,
}

impl TuningEntry {
    fn into_definition(self, id: String) -> Result<TuningDefinition, FretError> {
        if let Some(count) = self.string_count {
            if count != self.offsets.len() {
                return Err(FretError::InvalidTuning {
                    id,
                    message: format!(
                        "expected {} open strings, found {}",
                        count,
                        self.offsets.len()
                    ),
                });
            }
        }
        TuningDefinition::new(id, self.name, self.offsets)
    }
}

/// Tunings keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TuningTable {
    tunings: BTreeMap<String, TuningDefinition>,
}

impl Default for TuningTable {
    fn default() -> Self {
        let mut tunings = BTreeMap::new();
        tunings.insert(STANDARD.to_string(), TuningDefinition::standard());
        Self { tunings }
    }
}

impl TuningTable {
    /// A table holding only the tunings defined in `yaml`.
    pub fn from_yaml(yaml: &str) -> Result<Self, FretError> {
        let mut table = Self {
            tunings: BTreeMap::new(),
        };
        table.extend_from_yaml(yaml)?;
        Ok(table)
    }

    /// Add (or replace) the tunings defined in `yaml`.
    ///
    /// Either every definition in the document is valid and added, or the
    /// table is left untouched.
    pub fn extend_from_yaml(&mut self, yaml: &str) -> Result<(), FretError> {
        let entries: BTreeMap<String, TuningEntry> = serde_yaml::from_str(yaml)?;
        let definitions = entries
            .into_iter()
            .map(|(id, entry)| entry.into_definition(id))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("loaded {} tuning definition(s)", definitions.len());
        for definition in definitions {
            self.insert(definition);
        }
        Ok(())
    }

    pub fn insert(&mut self, tuning: TuningDefinition) {
        self.tunings.insert(tuning.id.clone(), tuning);
    }

    pub fn get(&self, id: &str) -> Option<&TuningDefinition> {
        self.tunings.get(id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<&TuningDefinition, FretError> {
        self.get(id)
            .ok_or_else(|| FretError::UnknownTuning(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TuningDefinition> {
        self.tunings.values()
    }

    pub fn len(&self) -> usize {
        self.tunings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tunings.is_empty()
    }
}
