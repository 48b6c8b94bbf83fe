//! Integration tests for chordgen
//!
//! Drives the full pipeline from catalogue names to realized sections and
//! fingerings through the public API.

use chordgen::voicing::{MAX_FRET, STANDARD_TUNING};
use chordgen::{
    build_section_named, build_section_with, catalog, generate_song_named, generate_voicings,
    scale_notes, ChordgenError, Fret, Genre, PitchClass, RandomPicker, ScaleType, SequencePicker,
    SongPart, SongRequest,
};

fn chord_tones(root: PitchClass, intervals: &[i32]) -> Vec<PitchClass> {
    intervals
        .iter()
        .map(|&i| chordgen::note_at_interval(root, i))
        .collect()
}

fn sounding_notes(frets: &[Fret; 6]) -> Vec<PitchClass> {
    frets
        .iter()
        .zip(STANDARD_TUNING)
        .filter_map(|(fret, open)| fret.fret().map(|f| chordgen::note_at_interval(open, f as i32)))
        .collect()
}

#[test]
fn test_c_major_pop_verse() {
    let section = build_section_with(
        PitchClass::C,
        ScaleType::Major,
        Genre::Pop,
        "Verse",
        &mut SequencePicker::new(vec![0]),
    );
    let names: Vec<&str> = section.chords.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["C", "G", "Am", "F"]);

    let c = &section.chords[0].voicings[0];
    assert_eq!(c.to_string(), "x32010");
    assert_eq!(c.description, "Position 1");
}

#[test]
fn test_a_minor_blues_is_all_dominant() {
    let section = build_section_with(
        PitchClass::A,
        ScaleType::Minor,
        Genre::Blues,
        "Chorus",
        &mut SequencePicker::new(vec![4]),
    );
    assert_eq!(section.chords.len(), 12);
    assert!(section.chords.iter().all(|c| c.name.ends_with('7')));
    assert_eq!(section.chords[4].name, "D7");
    assert_eq!(section.chords[4].roman_numeral, "iv");
}

#[test]
fn test_e_power_chord_open_position() {
    let voicings = generate_voicings("E5");
    assert!(!voicings.is_empty());
    assert_eq!(
        voicings[0].frets,
        [
            Fret::Fretted(0),
            Fret::Fretted(2),
            Fret::Fretted(2),
            Fret::Muted,
            Fret::Muted,
            Fret::Muted
        ]
    );
}

#[test]
fn test_unrecognized_chord_has_no_voicings() {
    assert!(generate_voicings("").is_empty());
    assert!(generate_voicings("H7").is_empty());
}

#[test]
fn test_triad_voicings_only_sound_chord_tones() {
    for root in PitchClass::ALL {
        let major = chord_tones(root, &[0, 4, 7]);
        for voicing in generate_voicings(&root.to_string()) {
            assert!(voicing.is_playable());
            assert!(
                sounding_notes(&voicing.frets).iter().all(|n| major.contains(n)),
                "{} {}",
                root,
                voicing
            );
        }

        let minor = chord_tones(root, &[0, 3, 7]);
        for voicing in generate_voicings(&format!("{}m", root)) {
            assert!(
                sounding_notes(&voicing.frets).iter().all(|n| minor.contains(n)),
                "{}m {}",
                root,
                voicing
            );
        }
    }
}

#[test]
fn test_voicing_bounds() {
    for root in PitchClass::ALL {
        for suffix in ["", "m", "5", "7", "maj7", "m7", "9", "m9", "maj9", "m7b5"] {
            let voicings = generate_voicings(&format!("{}{}", root, suffix));
            assert!(voicings.len() <= 4);
            for (i, voicing) in voicings.iter().enumerate() {
                assert_eq!(voicing.description, format!("Position {}", i + 1));
                assert!(voicing.frets.iter().any(|f| f.fret().is_some()));
                assert!(voicing
                    .frets
                    .iter()
                    .filter_map(|f| f.fret())
                    .all(|f| f <= MAX_FRET));
            }
            let mins: Vec<u8> = voicings.iter().map(|v| v.min_fret()).collect();
            assert!(mins.windows(2).all(|w| w[0] <= w[1]), "{}{}", root, suffix);
        }
    }
}

#[test]
fn test_scales_start_on_root() {
    for root in PitchClass::ALL {
        for scale in ScaleType::ALL {
            let notes = scale_notes(root, scale);
            assert_eq!(notes.len(), scale.intervals().len());
            assert_eq!(notes[0], root);
        }
    }
}

#[test]
fn test_every_genre_realizes_its_templates() {
    for genre in Genre::ALL {
        for index in 0..genre.progressions().len() {
            let section = build_section_with(
                PitchClass::D,
                ScaleType::Mixolydian,
                genre,
                "Verse",
                &mut SequencePicker::new(vec![index]),
            );
            assert_eq!(section.degrees(), genre.progressions()[index]);
        }
    }
}

#[test]
fn test_random_song_uses_genre_templates() {
    let mut picker = RandomPicker::seeded(2024);
    let song = chordgen::generate_song(PitchClass::F, ScaleType::Major, Genre::NeoSoul, &mut picker);
    for (_, section) in song.sections() {
        let degrees = section.degrees();
        assert!(Genre::NeoSoul
            .progressions()
            .iter()
            .any(|t| *t == degrees.as_slice()));
    }
}

#[test]
fn test_named_api_and_request_agree() {
    let request = SongRequest::from_yaml("key: A\nscale: dorian\ngenre: funk\nseed: 5").unwrap();
    let from_request = request.generate();
    let from_names = generate_song_named("A", "dorian", "funk", Some(5)).unwrap();
    assert_eq!(from_request, from_names);
}

#[test]
fn test_section_named_reports_unknown_scale() {
    let err = build_section_named("C", "lydian dominant", "pop", "Verse", None).unwrap_err();
    assert!(matches!(err, ChordgenError::UnknownScale(_)));
    assert_eq!(err.to_string(), "Unknown scale: lydian dominant");
}

#[test]
fn test_song_json_shape() {
    let song = generate_song_named("C", "major", "pop", Some(1)).unwrap();
    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(json["key"], "C");
    assert_eq!(json["preChorus"]["title"], SongPart::PreChorus.title());
    assert!(json["verse"]["chords"][0]["romanNumeral"].is_string());
}

#[test]
fn test_catalog_matches_parsers() {
    let catalog = catalog();
    for name in &catalog.scales {
        assert!(name.parse::<ScaleType>().is_ok(), "{}", name);
    }
    for name in &catalog.genres {
        assert!(name.parse::<Genre>().is_ok(), "{}", name);
    }
    for name in &catalog.notes {
        assert!(name.parse::<PitchClass>().is_ok(), "{}", name);
    }
}
