//! # Public API
//!
//! String-level entry points for presentation layers (CLI, WASM) that receive
//! note, scale and genre names as text.
//!
//! ## Functions
//! - [`generate_song_named()`] - Full four-section song
//! - [`build_section_named()`] - A single titled section, e.g. to regenerate one slot
//! - [`catalog()`] - Every selectable note, scale, genre and section name
//!
//! ## Example
//! ```rust
//! use chordgen::generate_song_named;
//!
//! let song = generate_song_named("A", "minor", "blues", Some(3))?;
//! assert!(song.verse.chords.iter().all(|c| c.name.ends_with('7')));
//! # Ok::<(), chordgen::ChordgenError>(())
//! ```

use serde::Serialize;

use crate::{
    build_section_with, generate_song, ChordgenError, Genre, PitchClass, RandomPicker, ScaleType,
    Section, Song, SongPart,
};

/// Generate a song from catalogue names.
///
/// # Errors
/// Returns [`ChordgenError`] if any of the names is not in the catalogue.
pub fn generate_song_named(
    key: &str,
    scale: &str,
    genre: &str,
    seed: Option<u64>,
) -> Result<Song, ChordgenError> {
    let key: PitchClass = key.parse()?;
    let scale: ScaleType = scale.parse()?;
    let genre: Genre = genre.parse()?;
    Ok(generate_song(key, scale, genre, &mut RandomPicker::from_seed(seed)))
}

/// Build one section from catalogue names.
///
/// # Example
/// ```rust
/// use chordgen::build_section_named;
///
/// let section = build_section_named("E", "phrygian", "metal", "Bridge", None)?;
/// assert_eq!(section.title, "Bridge");
/// assert!(section.chords.iter().all(|c| c.name.ends_with('5')));
/// # Ok::<(), chordgen::ChordgenError>(())
/// ```
pub fn build_section_named(
    key: &str,
    scale: &str,
    genre: &str,
    title: &str,
    seed: Option<u64>,
) -> Result<Section, ChordgenError> {
    let key: PitchClass = key.parse()?;
    let scale: ScaleType = scale.parse()?;
    let genre: Genre = genre.parse()?;
    Ok(build_section_with(key, scale, genre, title, &mut RandomPicker::from_seed(seed)))
}

/// Selectable names, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub notes: Vec<&'static str>,
    pub scales: Vec<&'static str>,
    pub genres: Vec<&'static str>,
    pub sections: Vec<&'static str>,
}

pub fn catalog() -> Catalog {
    Catalog {
        notes: PitchClass::ALL.iter().map(|n| n.name()).collect(),
        scales: ScaleType::ALL.iter().map(|s| s.name()).collect(),
        genres: Genre::ALL.iter().map(|g| g.name()).collect(),
        sections: SongPart::ALL.iter().map(|p| p.title()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entry_points_reject_unknown_names() {
        assert!(matches!(
            generate_song_named("C", "major", "polka", None),
            Err(ChordgenError::UnknownGenre(_))
        ));
        assert!(matches!(
            build_section_named("C", "bebop", "pop", "Verse", None),
            Err(ChordgenError::UnknownScale(_))
        ));
        assert!(matches!(
            build_section_named("Q", "major", "pop", "Verse", None),
            Err(ChordgenError::UnknownNote(_))
        ));
    }

    #[test]
    fn test_seed_makes_output_repeatable() {
        let a = generate_song_named("G", "mixolydian", "funk", Some(11)).unwrap();
        let b = generate_song_named("G", "mixolydian", "funk", Some(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_catalog_lists_everything() {
        let catalog = catalog();
        assert_eq!(catalog.notes.len(), 12);
        assert_eq!(catalog.scales.len(), ScaleType::ALL.len());
        assert_eq!(catalog.genres.len(), 11);
        assert_eq!(catalog.sections, vec!["Verse", "Pre-Chorus", "Chorus", "Bridge"]);
    }
}
