//! # Chord Symbols
//!
//! Resolves the quality suffix of a chord from its scale degree and the
//! genre's chord type, and classifies suffixes into the shape families the
//! voicing generator knows how to finger.
//!
//! ## Quality Resolution
//! | Chord type  | Major     | Minor | Diminished |
//! |-------------|-----------|-------|------------|
//! | `Triad`     | (none)    | `m`   | `dim`      |
//! | `Power`     | `5`       | `5`   | `5`        |
//! | `Dominant7` | `7`       | `7`   | `7`        |
//! | `Seventh`   | `maj7`*   | `m7`  | `m7b5`     |
//! | `Ninth`     | `maj9`*   | `m9`  | `m7b5`     |
//!
//! \* A major chord on the dominant degree (or on the tonic of a scale with a
//! dominant tonic) becomes a plain `7` / `9` instead.
//!
//! ## Supported Suffixes
//! - **Power**: `5`
//! - **Minor**: `m`, seventh variant `m7`, `m9`
//! - **Major**: (none), `maj`, seventh variant `maj7`, `maj9`
//! - **Dominant**: `7`, `9`
//! - **Fallback**: `dim`, `m7b5` and anything unrecognized

use crate::genre::ChordType;
use crate::pitch::PitchClass;
use crate::scale::{BaseQuality, ScaleType};

/// Quality suffix for the chord on `degree` of `scale` under `chord_type`.
///
/// ```
/// use chordgen::{chord_suffix, ChordType, ScaleType};
///
/// assert_eq!(chord_suffix(2, ScaleType::Major, ChordType::Seventh), "m7");
/// assert_eq!(chord_suffix(5, ScaleType::Major, ChordType::Seventh), "7");
/// assert_eq!(chord_suffix(1, ScaleType::Major, ChordType::Seventh), "maj7");
/// assert_eq!(chord_suffix(3, ScaleType::Minor, ChordType::Power), "5");
/// ```
pub fn chord_suffix(degree: u8, scale: ScaleType, chord_type: ChordType) -> &'static str {
    let base = scale.base_quality(degree);
    let dominant = scale.is_dominant_degree(degree)
        || (scale.has_dominant_tonic() && scale.position(degree) == 1);

    match (chord_type, base) {
        (ChordType::Triad, base) => base.triad_suffix(),
        (ChordType::Power, _) => "5",
        (ChordType::Dominant7, _) => "7",
        (ChordType::Seventh, BaseQuality::Minor) => "m7",
        (ChordType::Seventh, BaseQuality::Diminished) => "m7b5",
        (ChordType::Seventh, BaseQuality::Major) if dominant => "7",
        (ChordType::Seventh, BaseQuality::Major) => "maj7",
        (ChordType::Ninth, BaseQuality::Minor) => "m9",
        (ChordType::Ninth, BaseQuality::Diminished) => "m7b5",
        (ChordType::Ninth, BaseQuality::Major) if dominant => "9",
        (ChordType::Ninth, BaseQuality::Major) => "maj9",
    }
}

/// Closed set of fingering families, chosen once per chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFamily {
    Power,
    Minor { seventh: bool },
    Major { seventh: bool },
    SeventhOrNinth { ninth: bool },
    Fallback,
}

impl ShapeFamily {
    pub fn classify(suffix: &str) -> Self {
        match suffix {
            "5" => ShapeFamily::Power,
            "m" | "min" => ShapeFamily::Minor { seventh: false },
            "m7" | "m9" => ShapeFamily::Minor { seventh: true },
            "" | "maj" => ShapeFamily::Major { seventh: false },
            "maj7" | "maj9" => ShapeFamily::Major { seventh: true },
            "7" => ShapeFamily::SeventhOrNinth { ninth: false },
            "9" => ShapeFamily::SeventhOrNinth { ninth: true },
            _ => ShapeFamily::Fallback,
        }
    }
}

/// Spell a chord name out for display, e.g. `"C#m7"` -> `"C# minor 7"`.
///
/// Names without a recognizable root are returned unchanged.
///
/// ```
/// use chordgen::describe_chord;
///
/// assert_eq!(describe_chord("Am"), "A minor");
/// assert_eq!(describe_chord("Fmaj7"), "F major 7");
/// assert_eq!(describe_chord("G"), "G major");
/// ```
pub fn describe_chord(name: &str) -> String {
    let Some((root, suffix)) = PitchClass::split_symbol(name) else {
        return name.to_string();
    };
    let quality = match suffix {
        "" | "maj" => "major".to_string(),
        "m" | "min" => "minor".to_string(),
        "dim" => "diminished".to_string(),
        "m7b5" => "half-diminished".to_string(),
        "5" | "7" | "9" => suffix.to_string(),
        other => {
            if let Some(ext) = other.strip_prefix("maj") {
                format!("major {}", ext)
            } else if let Some(ext) = other.strip_prefix('m') {
                format!("minor {}", ext)
            } else {
                other.to_string()
            }
        }
    };
    format!("{} {}", root, quality)
}
