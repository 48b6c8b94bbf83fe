//! # Scales
//!
//! Scale interval tables and the per-scale harmonization rules that decide
//! whether the triad built on each scale degree is major, minor or diminished.
//!
//! ## Degree Addressing
//! Degrees are 1-based. Progression templates may use degrees beyond the
//! length of the scale (e.g. degree 8 for the tonic an octave up), and
//! pentatonic and blues scales have fewer than seven notes, so every lookup
//! wraps via `(degree - 1) mod len`. The wrapped 1-based value is called the
//! *scale position* below.
//!
//! ## Harmonization
//! Each scale owns an ordered list of rules `(positions, quality)`. Rules are
//! applied in order and a later rule overwrites an earlier one for the same
//! position; positions no rule mentions are major. Phrygian Dominant relies
//! on this: its third degree is first marked minor and then diminished.
//!
//! ## Example
//! ```rust
//! use chordgen::{scale_notes, PitchClass, ScaleType};
//!
//! let notes = scale_notes(PitchClass::A, ScaleType::Minor);
//! let names: Vec<&str> = notes.iter().map(|n| n.name()).collect();
//! assert_eq!(names, vec!["A", "B", "C", "D", "E", "F", "G"]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChordgenError;
use crate::pitch::{note_at_interval, PitchClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleType {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    HarmonicMinor,
    MelodicMinor,
    PhrygianDominant,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
}

/// Triad quality implied by a scale degree before any genre extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseQuality {
    Major,
    Minor,
    Diminished,
}

impl BaseQuality {
    /// Chord-symbol suffix for the plain triad.
    pub fn triad_suffix(self) -> &'static str {
        match self {
            BaseQuality::Major => "",
            BaseQuality::Minor => "m",
            BaseQuality::Diminished => "dim",
        }
    }
}

const M: BaseQuality = BaseQuality::Minor;
const DIM: BaseQuality = BaseQuality::Diminished;

type HarmonizationRule = (&'static [usize], BaseQuality);

impl ScaleType {
    pub const ALL: [ScaleType; 13] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::PhrygianDominant,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
    ];

    /// Semitone offsets from the root, one per scale degree.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::PhrygianDominant => &[0, 1, 4, 5, 7, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Display name, as shown in selectors.
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::PhrygianDominant => "Phrygian Dominant",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
        }
    }

    /// Scales labelled with the minor Roman numeral convention.
    pub fn is_minor_like(self) -> bool {
        matches!(
            self,
            ScaleType::Minor | ScaleType::HarmonicMinor | ScaleType::MelodicMinor
        )
    }

    /// Scales whose tonic chord behaves like a dominant chord.
    pub fn has_dominant_tonic(self) -> bool {
        matches!(self, ScaleType::PhrygianDominant)
    }

    /// Wrap a 1-based degree into a 1-based position within this scale.
    pub fn position(self, degree: u8) -> usize {
        (degree as usize + self.intervals().len() - 1) % self.intervals().len() + 1
    }

    /// Whether `degree` sits a perfect fifth above the tonic.
    pub fn is_dominant_degree(self, degree: u8) -> bool {
        self.intervals()[self.position(degree) - 1] == 7
    }

    fn harmonization(self) -> &'static [HarmonizationRule] {
        match self {
            ScaleType::Major => &[(&[2, 3, 6], M), (&[7], DIM)],
            ScaleType::Minor => &[(&[1, 4, 5], M), (&[2], DIM)],
            ScaleType::Dorian => &[(&[1, 2, 5], M), (&[6], DIM)],
            ScaleType::Phrygian => &[(&[1, 4, 7], M), (&[5], DIM)],
            ScaleType::Lydian => &[(&[3, 6, 7], M), (&[4], DIM)],
            ScaleType::Mixolydian => &[(&[2, 5, 6], M), (&[3], DIM)],
            ScaleType::Locrian => &[(&[3, 4, 7], M), (&[1], DIM)],
            ScaleType::HarmonicMinor => &[(&[1, 4], M), (&[2, 7], DIM)],
            ScaleType::MelodicMinor => &[(&[1, 2], M), (&[6, 7], DIM)],
            ScaleType::PhrygianDominant => &[(&[3, 4, 7], M), (&[3, 5], DIM)],
            ScaleType::MajorPentatonic => &[(&[2, 3, 5], M)],
            ScaleType::MinorPentatonic => &[(&[1, 3, 4], M)],
            ScaleType::Blues => &[(&[1, 3, 5], M), (&[4], DIM)],
        }
    }

    /// Triad quality on `degree`; later rules win over earlier ones.
    pub fn base_quality(self, degree: u8) -> BaseQuality {
        let position = self.position(degree);
        self.harmonization()
            .iter()
            .fold(BaseQuality::Major, |quality, (positions, rule)| {
                if positions.contains(&position) {
                    *rule
                } else {
                    quality
                }
            })
    }
}

/// Notes of `scale` starting from `root`, one per interval.
pub fn scale_notes(root: PitchClass, scale: ScaleType) -> Vec<PitchClass> {
    scale
        .intervals()
        .iter()
        .map(|&interval| note_at_interval(root, interval as i32))
        .collect()
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase a catalogue name and fold `-`/`_` separators into spaces.
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for ScaleType {
    type Err = ChordgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "major" | "ionian" => Ok(ScaleType::Major),
            "minor" | "natural minor" | "aeolian" => Ok(ScaleType::Minor),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            "locrian" => Ok(ScaleType::Locrian),
            "harmonic minor" => Ok(ScaleType::HarmonicMinor),
            "melodic minor" => Ok(ScaleType::MelodicMinor),
            "phrygian dominant" => Ok(ScaleType::PhrygianDominant),
            "major pentatonic" | "pentatonic" => Ok(ScaleType::MajorPentatonic),
            "minor pentatonic" => Ok(ScaleType::MinorPentatonic),
            "blues" => Ok(ScaleType::Blues),
            _ => Err(ChordgenError::UnknownScale(s.to_string())),
        }
    }
}

impl TryFrom<String> for ScaleType {
    type Error = ChordgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScaleType> for String {
    fn from(scale: ScaleType) -> Self {
        scale.name().to_string()
    }
}
