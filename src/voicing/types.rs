//! Voicing data types.

use serde::{Serialize, Serializer};
use std::fmt;

/// Strings on the instrument, low E first.
pub const STRING_COUNT: usize = 6;

/// Highest playable fret.
pub const MAX_FRET: u8 = 22;

/// State of a single string in a fingering.
///
/// Serializes as `"x"` when muted and as the fret number otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fret {
    Muted,
    Fretted(u8),
}

impl Fret {
    pub fn fret(self) -> Option<u8> {
        match self {
            Fret::Muted => None,
            Fret::Fretted(fret) => Some(fret),
        }
    }
}

impl Serialize for Fret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fret::Muted => serializer.serialize_str("x"),
            Fret::Fretted(fret) => serializer.serialize_u8(*fret),
        }
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fret::Muted => f.write_str("x"),
            Fret::Fretted(fret) => write!(f, "{}", fret),
        }
    }
}

/// A concrete fingering of a chord.
///
/// # Fields
/// - `frets`: one entry per string, low E to high E
/// - `description`: position label, `"Position 1"` being closest to the nut
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voicing {
    pub frets: [Fret; STRING_COUNT],
    pub description: String,
}

impl Voicing {
    /// Lowest fretted (non-open) fret, or 0 when only open strings sound.
    pub fn min_fret(&self) -> u8 {
        min_sounding_fret(&self.frets)
    }

    /// True when at least one string sounds and every fret is on the neck.
    pub fn is_playable(&self) -> bool {
        is_playable(&self.frets)
    }
}

pub(crate) fn min_sounding_fret(frets: &[Fret; STRING_COUNT]) -> u8 {
    frets
        .iter()
        .filter_map(|f| f.fret())
        .filter(|&fret| fret > 0)
        .min()
        .unwrap_or(0)
}

pub(crate) fn is_playable(frets: &[Fret; STRING_COUNT]) -> bool {
    frets.iter().any(|f| *f != Fret::Muted)
        && frets.iter().filter_map(|f| f.fret()).all(|fret| fret <= MAX_FRET)
}

/// Tab-style rendering, e.g. `x02210` or `x-12-14-14-13-12` above fret 9.
impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.frets.iter().map(|fret| fret.to_string()).collect();
        if parts.iter().all(|p| p.len() == 1) {
            f.write_str(&parts.concat())
        } else {
            f.write_str(&parts.join("-"))
        }
    }
}
