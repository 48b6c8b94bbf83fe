//! # Genre Patterns
//!
//! Per-genre harmonic data: the chord-type family used to extend each triad,
//! and the candidate progressions a section may be built from.
//!
//! Progressions are 1-based scale degrees. Degrees may repeat and may exceed
//! the scale length; the builder wraps them onto the scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChordgenError;
use crate::scale::normalize_name;

/// How a genre extends the triads of a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    /// Plain major/minor/diminished triads.
    Triad,
    /// Root-fifth power chords ("5") on every degree.
    Power,
    /// maj7 / m7 / m7b5, with the dominant degree as a plain 7.
    Seventh,
    /// maj9 / m9 / m7b5, with the dominant degree as a plain 9.
    Ninth,
    /// Dominant seventh ("7") on every degree.
    Dominant7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Genre {
    Pop,
    Rock,
    Jazz,
    Blues,
    Edm,
    NeoSoul,
    Country,
    Metal,
    RnB,
    Reggae,
    Funk,
}

/// Chord-type family and progression templates for one genre.
#[derive(Debug)]
pub struct GenrePattern {
    pub chord_type: ChordType,
    pub progressions: &'static [&'static [u8]],
}

static POP: GenrePattern = GenrePattern {
    chord_type: ChordType::Triad,
    progressions: &[
        &[1, 5, 6, 4], // classic pop
        &[6, 4, 1, 5], // sensitive female chord progression
        &[1, 4, 1, 5],
        &[1, 6, 4, 5], // 50s
        &[4, 1, 5, 6],
    ],
};

static ROCK: GenrePattern = GenrePattern {
    chord_type: ChordType::Power,
    progressions: &[
        &[1, 4, 5, 4],
        &[1, 6, 3, 7],
        &[1, 5, 4, 1],
        &[2, 4, 1, 5],
        &[1, 3, 4, 5],
    ],
};

static JAZZ: GenrePattern = GenrePattern {
    chord_type: ChordType::Seventh,
    progressions: &[
        &[2, 5, 1, 6],
        &[1, 6, 2, 5], // rhythm changes turnaround
        &[3, 6, 2, 5],
        &[2, 5, 1, 4],
        &[1, 2, 4, 5],
        &[2, 5, 1],
        &[1, 4, 7, 3, 6, 2, 5, 8], // diatonic circle of fifths
    ],
};

static BLUES: GenrePattern = GenrePattern {
    chord_type: ChordType::Dominant7,
    progressions: &[
        &[1, 1, 1, 1],
        &[4, 4, 1, 1],
        &[5, 4, 1, 5],
        &[1, 4, 1, 5], // quick change
        &[1, 1, 1, 1, 4, 4, 1, 1, 5, 4, 1, 5], // 12-bar
    ],
};

static EDM: GenrePattern = GenrePattern {
    chord_type: ChordType::Triad,
    progressions: &[
        &[6, 4, 1, 5],
        &[6, 7, 1, 5],
        &[1, 5, 4, 4],
        &[6, 1, 5, 2],
        &[1, 3, 4, 6],
    ],
};

static NEO_SOUL: GenrePattern = GenrePattern {
    chord_type: ChordType::Ninth,
    progressions: &[
        &[2, 5, 1, 4],
        &[6, 2, 5, 1],
        &[4, 3, 2, 1],
        &[7, 3, 6, 2],
        &[1, 3, 2, 5],
    ],
};

static COUNTRY: GenrePattern = GenrePattern {
    chord_type: ChordType::Triad,
    progressions: &[
        &[1, 4, 1, 5],
        &[1, 5, 4, 1],
        &[1, 4, 5, 5],
        &[1, 1, 4, 5],
        &[6, 4, 1, 5],
    ],
};

static METAL: GenrePattern = GenrePattern {
    chord_type: ChordType::Power,
    progressions: &[
        &[1, 2, 1, 2],
        &[1, 6, 7, 1],
        &[6, 5, 4, 3],
        &[1, 4, 3, 2],
        &[1, 5, 6, 3],
    ],
};

static RNB: GenrePattern = GenrePattern {
    chord_type: ChordType::Seventh,
    progressions: &[
        &[1, 4, 2, 5],
        &[6, 2, 4, 1],
        &[4, 5, 1, 6],
        &[2, 3, 4, 5],
        &[1, 3, 6, 5],
    ],
};

static REGGAE: GenrePattern = GenrePattern {
    chord_type: ChordType::Triad,
    progressions: &[
        &[1, 4, 1, 4],
        &[1, 2, 1, 2],
        &[1, 5, 1, 5],
        &[6, 4, 1, 5],
        &[1, 4, 5, 4],
    ],
};

static FUNK: GenrePattern = GenrePattern {
    chord_type: ChordType::Ninth,
    progressions: &[
        &[1, 1, 4, 4],
        &[2, 5, 2, 5],
        &[1, 2, 4, 1],
        &[1, 4, 5, 4],
        &[6, 2, 6, 2],
    ],
};

impl Genre {
    pub const ALL: [Genre; 11] = [
        Genre::Pop,
        Genre::Rock,
        Genre::Jazz,
        Genre::Blues,
        Genre::Edm,
        Genre::NeoSoul,
        Genre::Country,
        Genre::Metal,
        Genre::RnB,
        Genre::Reggae,
        Genre::Funk,
    ];

    pub fn pattern(self) -> &'static GenrePattern {
        match self {
            Genre::Pop => &POP,
            Genre::Rock => &ROCK,
            Genre::Jazz => &JAZZ,
            Genre::Blues => &BLUES,
            Genre::Edm => &EDM,
            Genre::NeoSoul => &NEO_SOUL,
            Genre::Country => &COUNTRY,
            Genre::Metal => &METAL,
            Genre::RnB => &RNB,
            Genre::Reggae => &REGGAE,
            Genre::Funk => &FUNK,
        }
    }

    pub fn chord_type(self) -> ChordType {
        self.pattern().chord_type
    }

    pub fn progressions(self) -> &'static [&'static [u8]] {
        self.pattern().progressions
    }

    pub fn name(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Jazz => "Jazz",
            Genre::Blues => "Blues",
            Genre::Edm => "EDM",
            Genre::NeoSoul => "Neo-Soul",
            Genre::Country => "Country",
            Genre::Metal => "Metal",
            Genre::RnB => "R&B",
            Genre::Reggae => "Reggae",
            Genre::Funk => "Funk",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = ChordgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "pop" => Ok(Genre::Pop),
            "rock" => Ok(Genre::Rock),
            "jazz" => Ok(Genre::Jazz),
            "blues" => Ok(Genre::Blues),
            "edm" => Ok(Genre::Edm),
            "neo soul" | "neosoul" => Ok(Genre::NeoSoul),
            "country" => Ok(Genre::Country),
            "metal" => Ok(Genre::Metal),
            "r&b" | "rnb" | "r and b" => Ok(Genre::RnB),
            "reggae" => Ok(Genre::Reggae),
            "funk" => Ok(Genre::Funk),
            _ => Err(ChordgenError::UnknownGenre(s.to_string())),
        }
    }
}

impl TryFrom<String> for Genre {
    type Error = ChordgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.name().to_string()
    }
}
