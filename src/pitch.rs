//! # Pitch Classes
//!
//! The twelve equal-tempered pitch classes, always spelled with sharps.
//!
//! A pitch class is identified by its position in [`PitchClass::ALL`]; all
//! interval arithmetic is done modulo [`NOTE_COUNT`] so offsets of any sign wrap
//! back into the chromatic table.
//!
//! ## Example
//! ```rust
//! use chordgen::{note_at_interval, PitchClass};
//!
//! assert_eq!(note_at_interval(PitchClass::A, 3), PitchClass::C);
//! assert_eq!(note_at_interval(PitchClass::C, -1), PitchClass::B);
//! assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::As);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChordgenError;

/// Number of pitch classes in the chromatic table.
pub const NOTE_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

impl PitchClass {
    /// Chromatic table, starting from C.
    pub const ALL: [PitchClass; NOTE_COUNT] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Position in the chromatic table (C = 0 ... B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index`, wrapping past B back to C.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % NOTE_COUNT]
    }

    /// Sharp spelling of the note.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Upward distance in semitones from `self` to `other`, in `[0, 12)`.
    pub fn semitones_to(self, other: PitchClass) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(NOTE_COUNT as i32) as u8
    }

    /// Split a chord name into its root and the remaining quality suffix.
    ///
    /// Matches `[A-G]#?` at the start of `symbol`; returns `None` when the name
    /// does not start with a sharp-spelled root.
    ///
    /// ```
    /// use chordgen::PitchClass;
    ///
    /// assert_eq!(PitchClass::split_symbol("C#m7"), Some((PitchClass::Cs, "m7")));
    /// assert_eq!(PitchClass::split_symbol("G"), Some((PitchClass::G, "")));
    /// assert_eq!(PitchClass::split_symbol("Hm"), None);
    /// ```
    pub fn split_symbol(symbol: &str) -> Option<(PitchClass, &str)> {
        let natural = match symbol.chars().next()? {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return None,
        };
        let rest = &symbol[1..];
        match rest.strip_prefix('#') {
            Some(quality) => Some((note_at_interval(natural, 1), quality)),
            None => Some((natural, rest)),
        }
    }
}

/// Note `semitones` above `root`, wrapping modulo 12.
///
/// Negative offsets walk downward: the result is always normalized into the
/// chromatic table before indexing.
pub fn note_at_interval(root: PitchClass, semitones: i32) -> PitchClass {
    let index = (root.index() as i32 + semitones).rem_euclid(NOTE_COUNT as i32);
    PitchClass::ALL[index as usize]
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChordgenError;

    /// Accepts sharp and flat spellings, case-insensitive on the letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .ok_or_else(|| ChordgenError::UnknownNote(s.to_string()))?;

        let natural = match letter.to_ascii_uppercase() {
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return Err(ChordgenError::UnknownNote(s.to_string())),
        };

        let offset = match chars.as_str() {
            "" => 0,
            "#" | "s" | "sharp" => 1,
            "b" | "flat" => -1,
            _ => return Err(ChordgenError::UnknownNote(s.to_string())),
        };

        Ok(note_at_interval(natural, offset))
    }
}

impl TryFrom<String> for PitchClass {
    type Error = ChordgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PitchClass> for String {
    fn from(note: PitchClass) -> Self {
        note.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_at_interval_wraps_both_directions() {
        assert_eq!(note_at_interval(PitchClass::C, 7), PitchClass::G);
        assert_eq!(note_at_interval(PitchClass::A, 5), PitchClass::D);
        assert_eq!(note_at_interval(PitchClass::B, 1), PitchClass::C);
        assert_eq!(note_at_interval(PitchClass::C, -3), PitchClass::A);
        assert_eq!(note_at_interval(PitchClass::E, -29), PitchClass::B);
    }

    #[test]
    fn test_note_at_interval_is_cyclic() {
        for root in PitchClass::ALL {
            for interval in -24..24 {
                assert_eq!(
                    note_at_interval(root, interval),
                    note_at_interval(root, interval + 12),
                    "{} + {}",
                    root,
                    interval
                );
            }
        }
    }

    #[test]
    fn test_parse_note_names() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("f#".parse::<PitchClass>().unwrap(), PitchClass::Fs);
        assert_eq!("Eb".parse::<PitchClass>().unwrap(), PitchClass::Ds);
        assert_eq!("Cb".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert_eq!(" A ".parse::<PitchClass>().unwrap(), PitchClass::A);
        assert!("H".parse::<PitchClass>().is_err());
        assert!("".parse::<PitchClass>().is_err());
        assert!("C##".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_names_use_sharps() {
        let names: Vec<&str> = PitchClass::ALL.iter().map(|n| n.name()).collect();
        assert_eq!(
            names,
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_semitones_to() {
        assert_eq!(PitchClass::E.semitones_to(PitchClass::A), 5);
        assert_eq!(PitchClass::A.semitones_to(PitchClass::E), 7);
        assert_eq!(PitchClass::G.semitones_to(PitchClass::G), 0);
    }

    #[test]
    fn test_split_symbol() {
        assert_eq!(PitchClass::split_symbol("A#dim"), Some((PitchClass::As, "dim")));
        assert_eq!(PitchClass::split_symbol("E5"), Some((PitchClass::E, "5")));
        assert_eq!(PitchClass::split_symbol(""), None);
        assert_eq!(PitchClass::split_symbol("x7"), None);
    }

    #[test]
    fn test_serde_uses_note_names() {
        let json = serde_json::to_string(&PitchClass::Gs).unwrap();
        assert_eq!(json, "\"G#\"");
        let back: PitchClass = serde_json::from_str("\"Ab\"").unwrap();
        assert_eq!(back, PitchClass::Gs);
    }
}
