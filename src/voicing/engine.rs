//! Voicing generation: transposes shape templates onto the neck.

use tracing::{debug, trace};

use super::shapes::{shapes_for, Shape, STANDARD_TUNING};
use super::types::{is_playable, min_sounding_fret, Fret, Voicing, STRING_COUNT};
use crate::chord::ShapeFamily;
use crate::pitch::PitchClass;

/// Most voicings returned for a single chord.
pub const MAX_VOICINGS: usize = 4;

/// Generate up to four fingerings for a chord name such as `"Am7"`.
///
/// Returns an empty list when the name does not start with a sharp-spelled
/// root; a section containing such a chord is still built.
///
/// ```
/// use chordgen::voicing::{generate_voicings, Fret};
///
/// let voicings = generate_voicings("E5");
/// assert_eq!(voicings[0].description, "Position 1");
/// assert_eq!(voicings[0].frets[0], Fret::Fretted(0));
/// assert!(generate_voicings("H7").is_empty());
/// ```
pub fn generate_voicings(chord_name: &str) -> Vec<Voicing> {
    match PitchClass::split_symbol(chord_name) {
        Some((root, suffix)) => voicings_for(root, ShapeFamily::classify(suffix)),
        None => {
            debug!(chord = chord_name, "no root in chord name, skipping voicings");
            Vec::new()
        }
    }
}

/// Fingerings of `family` rooted on `root`, sorted from the nut upward.
pub fn voicings_for(root: PitchClass, family: ShapeFamily) -> Vec<Voicing> {
    let mut candidates: Vec<[Fret; STRING_COUNT]> = Vec::new();

    for shape in shapes_for(family) {
        let anchor_fret = STANDARD_TUNING[shape.anchor].semitones_to(root) as i16;
        for base in [anchor_fret, anchor_fret + 12] {
            match place(shape, base) {
                Some(frets) if !candidates.contains(&frets) => candidates.push(frets),
                Some(_) => {}
                None => trace!(?root, ?family, base, "shape falls off the neck"),
            }
        }
    }

    // Stable: equal positions keep template order.
    candidates.sort_by_key(min_sounding_fret);

    let voicings: Vec<Voicing> = candidates
        .into_iter()
        .take(MAX_VOICINGS)
        .enumerate()
        .map(|(rank, frets)| Voicing {
            frets,
            description: format!("Position {}", rank + 1),
        })
        .collect();

    if voicings.is_empty() {
        debug!(?root, ?family, "no playable voicings");
    }
    voicings
}

/// Move `shape` so its anchor string is fretted at `base`.
fn place(shape: &Shape, base: i16) -> Option<[Fret; STRING_COUNT]> {
    let mut frets = [Fret::Muted; STRING_COUNT];
    for (slot, offset) in frets.iter_mut().zip(shape.offsets) {
        if let Some(offset) = offset {
            let fret = u8::try_from(base + offset as i16).ok()?;
            *slot = Fret::Fretted(fret);
        }
    }
    is_playable(&frets).then_some(frets)
}
