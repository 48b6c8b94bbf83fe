//! # Voicing Module
//!
//! Turn chord names into playable guitar fingerings in standard tuning.
//!
//! ## Sub-modules
//! - `types` - Voicing and Fret types, neck constants
//! - `shapes` - Movable shape templates per shape family
//! - `engine` - Transposition, validation, dedup and ordering
//!
//! ## Algorithm
//! For every template of the chord's [`ShapeFamily`](crate::ShapeFamily):
//! 1. Find the fret on the anchor string that sounds the root (`0..12`)
//! 2. Add it to every offset; drop the result if any fret leaves `0..=MAX_FRET`
//! 3. Try the same shape an octave higher (+12 frets)
//!
//! Identical fret patterns are kept once. Survivors are ordered by their lowest
//! fretted note, so "Position 1" is always the fingering nearest the nut, and
//! the first four are returned.
//!
//! ## Example
//! ```rust
//! use chordgen::voicing::generate_voicings;
//!
//! let voicings = generate_voicings("Am");
//! assert_eq!(voicings.len(), 4);
//! assert_eq!(voicings[0].to_string(), "x02210");
//! assert_eq!(voicings[1].to_string(), "577555");
//! ```

mod engine;
mod shapes;
mod types;


pub use engine::{generate_voicings, voicings_for, MAX_VOICINGS};
pub use shapes::STANDARD_TUNING;
pub use types::{Fret, Voicing, MAX_FRET, STRING_COUNT};
