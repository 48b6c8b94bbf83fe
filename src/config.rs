//! # Song Requests
//!
//! A song request names the key, scale and genre to generate in, an optional
//! seed for reproducible template choices, and which sections to emit. It is
//! written as YAML; every field is optional.
//!
//! ```yaml
//! key: F#
//! scale: dorian
//! genre: neo-soul
//! seed: 1234
//! sections: [verse, chorus]
//! ```
//!
//! Names go through the same parsers as the CLI flags, so `"Bb"`,
//! `"harmonic-minor"` and `"R&B"` are all accepted.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ChordgenError;
use crate::genre::Genre;
use crate::pitch::PitchClass;
use crate::progression::RandomPicker;
use crate::scale::ScaleType;
use crate::song::{generate_song, Song, SongPart};

/// Raw request for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSongRequest {
    key: Option<String>,
    scale: Option<String>,
    genre: Option<String>,
    seed: Option<u64>,
    sections: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongRequest {
    pub key: PitchClass,
    pub scale: ScaleType,
    pub genre: Genre,
    pub seed: Option<u64>,
    pub sections: Vec<SongPart>,
}

impl Default for SongRequest {
    fn default() -> Self {
        Self {
            key: PitchClass::C,
            scale: ScaleType::Major,
            genre: Genre::Pop,
            seed: None,
            sections: SongPart::ALL.to_vec(),
        }
    }
}

impl SongRequest {
    /// Parse a YAML request; an empty document yields the defaults.
    pub fn from_yaml(source: &str) -> Result<Self, ChordgenError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSongRequest = serde_yaml::from_str(source)?;
        Self::resolve(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChordgenError> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    fn resolve(raw: RawSongRequest) -> Result<Self, ChordgenError> {
        let defaults = Self::default();

        let key = match raw.key {
            Some(key) => key.parse::<PitchClass>()?,
            None => defaults.key,
        };
        let scale = match raw.scale {
            Some(scale) => scale.parse::<ScaleType>()?,
            None => defaults.scale,
        };
        let genre = match raw.genre {
            Some(genre) => genre.parse::<Genre>()?,
            None => defaults.genre,
        };
        let sections = match raw.sections {
            Some(names) => names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<SongPart>, _>>()?,
            None => defaults.sections,
        };

        Ok(Self {
            key,
            scale,
            genre,
            seed: raw.seed,
            sections,
        })
    }

    /// Picker seeded from `seed`, or from OS entropy when unset.
    pub fn picker(&self) -> RandomPicker<StdRng> {
        RandomPicker::from_seed(self.seed)
    }

    /// Generate the full song described by this request.
    pub fn generate(&self) -> Song {
        generate_song(self.key, self.scale, self.genre, &mut self.picker())
    }
}
