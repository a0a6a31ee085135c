//! # Error Types
//!
//! This module defines the error type for the fretlab engine.
//!
//! The inference functions themselves (pitch lookup, interval naming, chord naming)
//! are total and never fail. Errors only come from the edges: looking up a tuning
//! by id, loading tuning definitions from YAML, and parsing user-entered text.
//!
//! ## Error Types
//! - `UnknownTuning` - A tuning id that is not in the table
//! - `InvalidTuning` - A tuning definition that breaks its string-count invariant
//! - `ConfigError` - YAML tuning configuration that does not deserialize
//! - `InvalidNoteName` - Text that is not a note name (`"C#"`, `"Eb"`, ...)
//! - `InvalidPosition` - Text that is not a `string:fret` position
//! - `Serialization` - A report that could not be encoded as JSON
//!
//! ## Usage
//! ```rust
//! use fretlab::{api, FretError};
//!
//! match api::resolve_position("banjo", 0, 3) {
//!     Ok(pitch) => println!("{:?}", pitch),
//!     Err(FretError::UnknownTuning(id)) => eprintln!("no tuning called {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FretError {
    /// The requested tuning id is not present in the tuning table.
    ///
    /// # Example
    /// ```
    /// # use fretlab::FretError;
    /// let err = FretError::UnknownTuning("banjo".to_string());
    /// assert_eq!(err.to_string(), "Unknown tuning: banjo");
    /// ```
    #[error("Unknown tuning: {0}")]
    UnknownTuning(String),

    /// A tuning definition is malformed.
    ///
    /// Occurs when the number of open-string pitches doesn't match the declared
    /// string count, or when a tuning has no strings at all.
    ///
    /// # Example
    /// ```
    /// # use fretlab::FretError;
    /// let err = FretError::InvalidTuning {
    ///     id: "drop-d".to_string(),
    ///     message: "expected 6 open strings, found 5".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid tuning 'drop-d': expected 6 open strings, found 5");
    /// ```
    #[error("Invalid tuning '{id}': {message}")]
    InvalidTuning { id: String, message: String },

    /// Tuning configuration could not be read or deserialized.
    #[error("Invalid tuning configuration: {0}")]
    ConfigError(String),

    /// Text that doesn't name a pitch class.
    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),

    /// Text that doesn't describe a fretted position.
    ///
    /// # Example
    /// ```
    /// # use fretlab::FretError;
    /// let err = FretError::InvalidPosition("x:3".to_string());
    /// assert_eq!(err.to_string(), "Invalid position 'x:3', expected string:fret (e.g. 2:3b)");
    /// ```
    #[error("Invalid position '{0}', expected string:fret (e.g. 2:3b)")]
    InvalidPosition(String),

    /// A report couldn't be encoded as JSON for a consumer.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for FretError {
    fn from(e: serde_yaml::Error) -> Self {
        FretError::ConfigError(e.to_string())
    }
}

impl From<serde_json::Error> for FretError {
    fn from(e: serde_json::Error) -> Self {
        FretError::Serialization(e.to_string())
    }
}
