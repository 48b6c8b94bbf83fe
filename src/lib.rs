//! # chordgen
//!
//! Chord progression and guitar voicing generator.
//!
//! Given a root note, a scale and a genre, [`build_section`] picks one of the
//! genre's progression templates, turns each scale degree into a named chord
//! with a Roman numeral label, and fingers every chord in up to four positions
//! on a six-string guitar in standard tuning.
//!
//! ## Modules
//! - `pitch` - Pitch classes and modulo-12 interval arithmetic
//! - `scale` - Scale interval tables and degree harmonization
//! - `genre` - Genre chord types and progression templates
//! - `roman` - Roman numeral labels
//! - `chord` - Chord quality suffixes and shape families
//! - `voicing` - Fretboard fingerings
//! - `progression` - Section builder and template pickers
//! - `song` - Four-section songs and per-section regeneration
//! - `config` - YAML song requests
//! - `api` - String-level entry points

pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod genre;
pub mod pitch;
pub mod progression;
pub mod roman;
pub mod scale;
pub mod song;
pub mod voicing;

pub use api::{build_section_named, catalog, generate_song_named, Catalog};
pub use chord::{chord_suffix, describe_chord, ShapeFamily};
pub use config::SongRequest;
pub use error::*;
pub use genre::{ChordType, Genre, GenrePattern};
pub use pitch::{note_at_interval, PitchClass, NOTE_COUNT};
pub use progression::{
    build_section, build_section_with, ChordData, RandomPicker, Section, SequencePicker,
    TemplatePicker,
};
pub use roman::roman_numeral;
pub use scale::{scale_notes, BaseQuality, ScaleType};
pub use song::{generate_song, Song, SongPart};
pub use voicing::{generate_voicings, Fret, Voicing};
