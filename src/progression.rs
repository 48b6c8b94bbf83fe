//! # Progression Builder
//!
//! Realizes a genre's progression template in a key: each scale degree becomes
//! a named chord with a Roman numeral label and its guitar voicings.
//!
//! ## Pipeline
//! 1. Spell the scale from the root
//! 2. Pick one of the genre's templates through a [`TemplatePicker`]
//! 3. For each degree: wrap onto the scale, resolve the quality suffix,
//!    label it, and generate voicings
//!
//! Template choice is the only source of nondeterminism. [`build_section`]
//! draws from the thread RNG; [`build_section_with`] takes any picker, so
//! callers can seed it or force an exact template.
//!
//! ## Example
//! ```rust
//! use chordgen::{build_section_with, Genre, PitchClass, ScaleType, SequencePicker};
//!
//! // Pop template 0 is I-V-vi-IV.
//! let mut picker = SequencePicker::new(vec![0]);
//! let section = build_section_with(PitchClass::C, ScaleType::Major, Genre::Pop, "Verse", &mut picker);
//!
//! let names: Vec<&str> = section.chords.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, vec!["C", "G", "Am", "F"]);
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::chord::chord_suffix;
use crate::genre::Genre;
use crate::pitch::PitchClass;
use crate::roman::roman_numeral;
use crate::scale::{scale_notes, ScaleType};
use crate::voicing::{generate_voicings, Voicing};

/// Source of template choices.
///
/// `pick` receives the number of candidate templates (always at least one)
/// and returns an index in `[0, count)`.
pub trait TemplatePicker {
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform choice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker: the same seed yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise seeded from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> TemplatePicker for RandomPicker<R> {
    fn pick(&mut self, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        self.rng.gen_range(0..count)
    }
}

/// Replays a fixed list of indices, wrapping each into range.
#[derive(Debug, Clone)]
pub struct SequencePicker {
    indices: Vec<usize>,
    next: usize,
}

impl SequencePicker {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, next: 0 }
    }
}

impl TemplatePicker for SequencePicker {
    fn pick(&mut self, count: usize) -> usize {
        if self.indices.is_empty() || count == 0 {
            return 0;
        }
        let index = self.indices[self.next % self.indices.len()];
        self.next += 1;
        index % count
    }
}

/// One realized chord of a progression.
///
/// # Fields
/// - `name`: root plus quality suffix, e.g. `"F#m7"`
/// - `roman_numeral`: analytical label, e.g. `"ii"` (serialized as `romanNumeral`)
/// - `degree`: the template's scale degree, before wrapping
/// - `voicings`: up to four fingerings, nearest the nut first (may be empty)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordData {
    pub name: String,
    pub roman_numeral: String,
    pub degree: u8,
    pub voicings: Vec<Voicing>,
}

/// A titled progression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub chords: Vec<ChordData>,
}

impl Section {
    /// The template degrees this section was built from.
    pub fn degrees(&self) -> Vec<u8> {
        self.chords.iter().map(|chord| chord.degree).collect()
    }
}

/// Build a section with a template drawn from the thread RNG.
pub fn build_section(root: PitchClass, scale: ScaleType, genre: Genre, title: &str) -> Section {
    build_section_with(root, scale, genre, title, &mut RandomPicker::thread())
}

/// Build a section, letting `picker` choose the genre template.
pub fn build_section_with<P: TemplatePicker + ?Sized>(
    root: PitchClass,
    scale: ScaleType,
    genre: Genre,
    title: &str,
    picker: &mut P,
) -> Section {
    let notes = scale_notes(root, scale);
    let pattern = genre.pattern();
    let index = picker.pick(pattern.progressions.len()) % pattern.progressions.len();
    let template = pattern.progressions[index];

    debug!(
        %root,
        %scale,
        %genre,
        title,
        template = ?template,
        "picked progression template {}",
        index
    );

    let chords = template
        .iter()
        .map(|&degree| {
            let note = notes[(degree as usize + notes.len() - 1) % notes.len()];
            let name = format!("{}{}", note, chord_suffix(degree, scale, pattern.chord_type));
            let voicings = generate_voicings(&name);
            ChordData {
                roman_numeral: roman_numeral(degree, scale).to_string(),
                degree,
                voicings,
                name,
            }
        })
        .collect();

    Section {
        title: title.to_string(),
        chords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(section: &Section) -> Vec<&str> {
        section.chords.iter().map(|c| c.name.as_str()).collect()
    }

    fn numerals(section: &Section) -> Vec<&str> {
        section
            .chords
            .iter()
            .map(|c| c.roman_numeral.as_str())
            .collect()
    }

    #[test]
    fn test_c_major_pop() {
        let mut picker = SequencePicker::new(vec![0]);
        let section = build_section_with(
            PitchClass::C,
            ScaleType::Major,
            Genre::Pop,
            "Verse",
            &mut picker,
        );
        assert_eq!(section.title, "Verse");
        assert_eq!(section.degrees(), vec![1, 5, 6, 4]);
        assert_eq!(names(&section), vec!["C", "G", "Am", "F"]);
        assert_eq!(numerals(&section), vec!["I", "V", "vi", "IV"]);
        assert!(section.chords.iter().all(|c| !c.voicings.is_empty()));
    }

    #[test]
    fn test_a_minor_twelve_bar_blues() {
        let mut picker = SequencePicker::new(vec![4]);
        let section = build_section_with(
            PitchClass::A,
            ScaleType::Minor,
            Genre::Blues,
            "Chorus",
            &mut picker,
        );
        assert_eq!(
            names(&section),
            vec!["A7", "A7", "A7", "A7", "D7", "D7", "A7", "A7", "E7", "D7", "A7", "E7"]
        );
    }

    #[test]
    fn test_jazz_ii_v_i() {
        let mut picker = SequencePicker::new(vec![5]);
        let section = build_section_with(
            PitchClass::C,
            ScaleType::Major,
            Genre::Jazz,
            "Bridge",
            &mut picker,
        );
        assert_eq!(names(&section), vec!["Dm7", "G7", "Cmaj7"]);
        assert_eq!(numerals(&section), vec!["ii", "V", "I"]);
    }

    #[test]
    fn test_circle_of_fifths_wraps_to_tonic() {
        let mut picker = SequencePicker::new(vec![6]);
        let section = build_section_with(
            PitchClass::C,
            ScaleType::Major,
            Genre::Jazz,
            "Bridge",
            &mut picker,
        );
        assert_eq!(
            names(&section),
            vec!["Cmaj7", "Fmaj7", "Bm7b5", "Em7", "Am7", "Dm7", "G7", "Cmaj7"]
        );
        assert_eq!(numerals(&section).last(), Some(&"I"));
    }

    #[test]
    fn test_rock_power_chords() {
        let mut picker = SequencePicker::new(vec![0]);
        let section = build_section_with(
            PitchClass::E,
            ScaleType::Minor,
            Genre::Rock,
            "Verse",
            &mut picker,
        );
        assert_eq!(names(&section), vec!["E5", "A5", "B5", "A5"]);
        assert_eq!(numerals(&section), vec!["i", "iv", "v", "iv"]);
    }

    #[test]
    fn test_short_scale_wraps_degrees() {
        // Degree 6 and 7 wrap back onto the five-note scale.
        let mut picker = SequencePicker::new(vec![1]);
        let section = build_section_with(
            PitchClass::A,
            ScaleType::MinorPentatonic,
            Genre::Edm,
            "Drop",
            &mut picker,
        );
        assert_eq!(section.degrees(), vec![6, 7, 1, 5]);
        assert_eq!(names(&section), vec!["Am", "C", "Am", "G"]);
    }

    #[test]
    fn test_phrygian_dominant_tonic_is_dominant() {
        let mut picker = SequencePicker::new(vec![0]);
        let section = build_section_with(
            PitchClass::E,
            ScaleType::PhrygianDominant,
            Genre::Funk,
            "Verse",
            &mut picker,
        );
        // Funk template 0 is 1-1-4-4.
        assert_eq!(names(&section), vec!["E9", "E9", "Am9", "Am9"]);
    }

    #[test]
    fn test_random_picks_stay_in_template_set() {
        for genre in Genre::ALL {
            for _ in 0..20 {
                let section = build_section(PitchClass::G, ScaleType::Dorian, genre, "Chorus");
                assert_eq!(section.title, "Chorus");
                let degrees = section.degrees();
                assert!(
                    genre.progressions().iter().any(|t| *t == degrees.as_slice()),
                    "{} produced {:?}",
                    genre,
                    degrees
                );
            }
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.pick(5), b.pick(5));
        }
    }

    #[test]
    fn test_sequence_picker_wraps() {
        let mut picker = SequencePicker::new(vec![1, 9]);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(picker.pick(5), 4);
        assert_eq!(picker.pick(5), 1);
        assert_eq!(SequencePicker::new(vec![]).pick(3), 0);
    }

    #[test]
    fn test_chord_data_serializes_camel_case() {
        let mut picker = SequencePicker::new(vec![0]);
        let section = build_section_with(
            PitchClass::C,
            ScaleType::Major,
            Genre::Pop,
            "Verse",
            &mut picker,
        );
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["title"], "Verse");
        assert_eq!(json["chords"][2]["romanNumeral"], "vi");
        assert_eq!(json["chords"][2]["name"], "Am");
        assert_eq!(json["chords"][2]["voicings"][0]["frets"][0], "x");
    }
}
