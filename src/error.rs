//! # Error Types
//!
//! The generation engine itself is total: every [`PitchClass`](crate::PitchClass),
//! [`ScaleType`](crate::ScaleType) and [`Genre`](crate::Genre) is a closed enum, so
//! building a section can never fail. Errors only arise at the string boundaries
//! where user input is turned into those enums (CLI flags, YAML requests, the
//! WASM bindings) and when serializing or reading files.
//!
//! ## Usage
//! ```rust
//! use chordgen::{ChordgenError, PitchClass};
//!
//! match "H".parse::<PitchClass>() {
//!     Ok(note) => println!("root: {}", note),
//!     Err(ChordgenError::UnknownNote(name)) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordgenError {
    /// A note name that is not one of the twelve pitch classes.
    ///
    /// # Example
    /// ```
    /// # use chordgen::ChordgenError;
    /// let err = ChordgenError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// A scale name outside the scale catalogue.
    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    /// A genre name outside the genre catalogue.
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    /// A song part other than verse, pre-chorus, chorus or bridge.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Invalid YAML song request.
    ///
    /// # Example
    /// ```
    /// # use chordgen::SongRequest;
    /// let err = SongRequest::from_yaml("key: [").unwrap_err();
    /// assert!(err.to_string().starts_with("Invalid song request:"));
    /// ```
    #[error("Invalid song request: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
