//! # Songs
//!
//! A song is four independently generated sections sharing one key, scale and
//! genre. Regenerating a part rebuilds only that slot.
//!
//! ## Example
//! ```rust
//! use chordgen::{generate_song, Genre, PitchClass, RandomPicker, ScaleType, SongPart};
//!
//! let mut picker = RandomPicker::seeded(42);
//! let mut song = generate_song(PitchClass::D, ScaleType::Major, Genre::Country, &mut picker);
//! let verse = song.verse.clone();
//!
//! song.regenerate(SongPart::Chorus, &mut picker);
//! assert_eq!(song.verse, verse);
//! assert_eq!(song.chorus.title, "Chorus");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::ChordgenError;
use crate::genre::Genre;
use crate::pitch::PitchClass;
use crate::progression::{build_section_with, Section, TemplatePicker};
use crate::scale::{normalize_name, ScaleType};

/// The four sections of a song, in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SongPart {
    Verse,
    PreChorus,
    Chorus,
    Bridge,
}

impl SongPart {
    pub const ALL: [SongPart; 4] = [
        SongPart::Verse,
        SongPart::PreChorus,
        SongPart::Chorus,
        SongPart::Bridge,
    ];

    /// Section title used when the part is built.
    pub fn title(self) -> &'static str {
        match self {
            SongPart::Verse => "Verse",
            SongPart::PreChorus => "Pre-Chorus",
            SongPart::Chorus => "Chorus",
            SongPart::Bridge => "Bridge",
        }
    }
}

impl fmt::Display for SongPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for SongPart {
    type Err = ChordgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "verse" => Ok(SongPart::Verse),
            "pre chorus" | "prechorus" => Ok(SongPart::PreChorus),
            "chorus" => Ok(SongPart::Chorus),
            "bridge" => Ok(SongPart::Bridge),
            _ => Err(ChordgenError::UnknownSection(s.to_string())),
        }
    }
}

impl TryFrom<String> for SongPart {
    type Error = ChordgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SongPart> for String {
    fn from(part: SongPart) -> Self {
        part.title().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub key: PitchClass,
    pub scale: ScaleType,
    pub genre: Genre,
    pub verse: Section,
    pub pre_chorus: Section,
    pub chorus: Section,
    pub bridge: Section,
}

impl Song {
    pub fn section(&self, part: SongPart) -> &Section {
        match part {
            SongPart::Verse => &self.verse,
            SongPart::PreChorus => &self.pre_chorus,
            SongPart::Chorus => &self.chorus,
            SongPart::Bridge => &self.bridge,
        }
    }

    fn section_mut(&mut self, part: SongPart) -> &mut Section {
        match part {
            SongPart::Verse => &mut self.verse,
            SongPart::PreChorus => &mut self.pre_chorus,
            SongPart::Chorus => &mut self.chorus,
            SongPart::Bridge => &mut self.bridge,
        }
    }

    /// Sections paired with their part, in playing order.
    pub fn sections(&self) -> impl Iterator<Item = (SongPart, &Section)> {
        SongPart::ALL.into_iter().map(move |part| (part, self.section(part)))
    }

    /// Replace one section with a freshly built one; the others are untouched.
    pub fn regenerate<P: TemplatePicker + ?Sized>(&mut self, part: SongPart, picker: &mut P) {
        debug!(%part, "regenerating section");
        let section = build_section_with(self.key, self.scale, self.genre, part.title(), picker);
        *self.section_mut(part) = section;
    }
}

/// Build all four sections, verse first.
pub fn generate_song<P: TemplatePicker + ?Sized>(
    key: PitchClass,
    scale: ScaleType,
    genre: Genre,
    picker: &mut P,
) -> Song {
    debug!(%key, %scale, %genre, "generating song");
    let mut build =
        |part: SongPart| build_section_with(key, scale, genre, part.title(), &mut *picker);
    Song {
        key,
        scale,
        genre,
        verse: build(SongPart::Verse),
        pre_chorus: build(SongPart::PreChorus),
        chorus: build(SongPart::Chorus),
        bridge: build(SongPart::Bridge),
    }
}
