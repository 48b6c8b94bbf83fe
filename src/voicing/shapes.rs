//! Movable shape templates.
//!
//! Each shape is written relative to the root fret on its anchor string, so an
//! E-shape barre has the root on the low E string at offset 0. Offsets below
//! zero (the C-shape reaches back toward the nut) only fit when the root sits
//! high enough on the anchor string; otherwise the octave-up copy is used.

use super::types::STRING_COUNT;
use crate::chord::ShapeFamily;
use crate::pitch::PitchClass;

/// Open-string pitch classes in standard tuning, low E first.
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

const X: Option<i8> = None;

/// Root-relative fingering anchored on one string.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// String carrying the root (0 = low E).
    pub anchor: usize,
    pub offsets: [Option<i8>; STRING_COUNT],
}

const fn shape(anchor: usize, offsets: [Option<i8>; STRING_COUNT]) -> Shape {
    Shape { anchor, offsets }
}

static POWER: [Shape; 3] = [
    shape(0, [Some(0), Some(2), Some(2), X, X, X]),
    shape(1, [X, Some(0), Some(2), Some(2), X, X]),
    shape(2, [X, X, Some(0), Some(2), Some(3), X]),
];

static MAJOR: [Shape; 4] = [
    shape(0, [Some(0), Some(2), Some(2), Some(1), Some(0), Some(0)]),
    shape(1, [X, Some(0), Some(2), Some(2), Some(2), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(3), Some(2)]),
    shape(1, [X, Some(0), Some(-1), Some(-3), Some(-2), Some(-3)]),
];

static MAJOR_SEVENTH: [Shape; 4] = [
    shape(0, [Some(0), X, Some(1), Some(1), Some(0), X]),
    shape(1, [X, Some(0), Some(2), Some(1), Some(2), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(2), Some(2)]),
    shape(1, [X, Some(0), Some(-1), Some(-3), Some(-3), Some(-3)]),
];

static MINOR: [Shape; 4] = [
    shape(0, [Some(0), Some(2), Some(2), Some(0), Some(0), Some(0)]),
    shape(1, [X, Some(0), Some(2), Some(2), Some(1), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(3), Some(1)]),
    shape(1, [X, Some(0), Some(-2), Some(-3), Some(-2), Some(0)]),
];

static MINOR_SEVENTH: [Shape; 3] = [
    shape(0, [Some(0), Some(2), Some(0), Some(0), Some(0), Some(0)]),
    shape(1, [X, Some(0), Some(2), Some(0), Some(1), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(1), Some(1)]),
];

static DOMINANT_SEVENTH: [Shape; 4] = [
    shape(0, [Some(0), Some(2), Some(0), Some(1), Some(0), Some(0)]),
    shape(1, [X, Some(0), Some(2), Some(0), Some(2), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(1), Some(2)]),
    shape(1, [X, Some(0), Some(-1), Some(0), Some(-2), Some(-3)]),
];

static DOMINANT_NINTH: [Shape; 4] = [
    shape(0, [Some(0), Some(2), Some(0), Some(1), Some(3), Some(2)]),
    shape(1, [X, Some(0), Some(2), Some(4), Some(2), Some(3)]),
    shape(1, [X, Some(0), Some(-1), Some(0), Some(0), Some(0)]),
    shape(2, [X, X, Some(0), Some(2), Some(1), Some(0)]),
];

// Diminished triads; also used for m7b5 and unknown suffixes.
static FALLBACK: [Shape; 3] = [
    shape(0, [Some(0), Some(1), Some(2), Some(0), X, X]),
    shape(1, [X, Some(0), Some(1), Some(2), Some(1), X]),
    shape(2, [X, X, Some(0), Some(1), Some(3), Some(1)]),
];

/// Templates owned by `family`, in preference order.
pub fn shapes_for(family: ShapeFamily) -> &'static [Shape] {
    match family {
        ShapeFamily::Power => &POWER,
        ShapeFamily::Major { seventh: false } => &MAJOR,
        ShapeFamily::Major { seventh: true } => &MAJOR_SEVENTH,
        ShapeFamily::Minor { seventh: false } => &MINOR,
        ShapeFamily::Minor { seventh: true } => &MINOR_SEVENTH,
        ShapeFamily::SeventhOrNinth { ninth: false } => &DOMINANT_SEVENTH,
        ShapeFamily::SeventhOrNinth { ninth: true } => &DOMINANT_NINTH,
        ShapeFamily::Fallback => &FALLBACK,
    }
}
