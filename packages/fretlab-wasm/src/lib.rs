use serde::Serialize;
use wasm_bindgen::prelude::*;

use fretlab::api;
use fretlab::note::{FrettedPosition, PositionSpec, ResolvedNote};
use fretlab::pitch::{parse_note_name, Accidental};
use fretlab::FretError;

#[derive(Serialize)]
struct EngineError {
    message: String,
    kind: &'static str,
}

fn error_to_engine_error(e: FretError) -> EngineError {
    let kind = match &e {
        FretError::UnknownTuning(_) | FretError::InvalidTuning { .. } => "tuning",
        FretError::ConfigError(_) => "config",
        FretError::InvalidNoteName(_) | FretError::InvalidPosition(_) => "input",
        FretError::Serialization(_) => "serialization",
    };
    EngineError {
        message: e.to_string(),
        kind,
    }
}

fn to_js_error(e: FretError) -> JsValue {
    let error = error_to_engine_error(e);
    let text = serde_json::to_string(&error).unwrap_or_else(|_| error.message.clone());
    JsValue::from_str(&text)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.into()))
}

fn parse_accidental(accidental: Option<String>) -> Option<Accidental> {
    // Anything unrecognized falls back to the global preference.
    accidental.and_then(|text| text.parse().ok())
}

/// Pitch at a position as JSON: `{ pitchClass, absoluteSemitone, octave }`
#[wasm_bindgen]
pub fn resolve_position(
    tuning_id: &str,
    string_index: usize,
    fret_number: u32,
) -> Result<String, JsValue> {
    let pitch = api::resolve_position(tuning_id, string_index, fret_number).map_err(to_js_error)?;
    to_json(&pitch)
}

/// Spell a note name (`"C#"`) under the flat preference, e.g. `"Db"`
#[wasm_bindgen]
pub fn display_name(
    note: &str,
    use_flats: bool,
    accidental: Option<String>,
) -> Result<String, JsValue> {
    let (pitch_class, _) = parse_note_name(note).map_err(to_js_error)?;
    Ok(api::display_name(pitch_class, use_flats, parse_accidental(accidental)).to_string())
}

/// Interval label as JSON: `{ label, semitoneClass, isCompound }`
#[wasm_bindgen]
pub fn classify_interval(
    root_absolute: i32,
    target_absolute: i32,
    use_flats: bool,
    accidental: Option<String>,
) -> Result<String, JsValue> {
    let accidental = parse_accidental(accidental);
    let info = api::classify_interval(root_absolute, target_absolute, use_flats, accidental);
    to_json(&info)
}

/// Name a chord from notes given as JSON (the editor's note objects).
///
/// Returns `undefined` when there are no notes.
#[wasm_bindgen]
pub fn name_chord(
    root_json: &str,
    notes_json: &str,
    use_flats: bool,
) -> Result<Option<String>, JsValue> {
    let root: ResolvedNote =
        serde_json::from_str(root_json).map_err(|e| to_js_error(e.into()))?;
    let notes: Vec<ResolvedNote> =
        serde_json::from_str(notes_json).map_err(|e| to_js_error(e.into()))?;
    Ok(api::name_chord(&root, &notes, use_flats))
}

/// Movable-shape name, e.g. `"F#m7"` → `"Ac. m7"`
#[wasm_bindgen]
pub fn generic_name(chord_name: &str) -> String {
    api::generic_name(chord_name)
}

/// Full report for a list of positions written as `"string:fret[b|#]"`.
#[wasm_bindgen]
pub fn analyze_positions(
    tuning_id: &str,
    positions: Vec<String>,
    root: Option<String>,
    use_flats: bool,
) -> Result<String, JsValue> {
    let specs = positions
        .iter()
        .map(|text| text.parse::<PositionSpec>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_js_error)?;
    let root = root
        .map(|text| text.parse::<PositionSpec>())
        .transpose()
        .map_err(to_js_error)?;

    let report = api::analyze(&api::default_tunings(), tuning_id, &specs, root, use_flats)
        .map_err(to_js_error)?;
    to_json(&report)
}

/// Built-in tunings as a JSON array of `{ id, name, offsets, stringCount }`
#[wasm_bindgen]
pub fn list_tunings() -> String {
    let tunings: Vec<_> = api::default_tunings().iter().cloned().collect();
    serde_json::to_string(&tunings).unwrap_or_else(|_| "[]".to_string())
}

/// Position key the front end uses to index fretboard dots: `"string:fret"`
#[wasm_bindgen]
pub fn position_key(string_index: usize, fret_number: u32) -> String {
    FrettedPosition::new(string_index, fret_number).to_string()
}
