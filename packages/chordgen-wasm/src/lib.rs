use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize, Debug, PartialEq)]
struct GenerateError {
    message: String,
}

impl From<chordgen::ChordgenError> for GenerateError {
    fn from(e: chordgen::ChordgenError) -> Self {
        GenerateError {
            message: e.to_string(),
        }
    }
}

fn to_js_error(e: GenerateError) -> JsValue {
    let json = serde_json::to_string(&e).unwrap_or_else(|_| format!("{{\"message\":{:?}}}", e.message));
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, GenerateError> {
    serde_json::to_string(value).map_err(|e| chordgen::ChordgenError::from(e).into())
}

fn song_json(key: &str, scale: &str, genre: &str, seed: Option<u64>) -> Result<String, GenerateError> {
    let song = chordgen::generate_song_named(key, scale, genre, seed)?;
    to_json(&song)
}

fn section_json(
    key: &str,
    scale: &str,
    genre: &str,
    title: &str,
    seed: Option<u64>,
) -> Result<String, GenerateError> {
    let section = chordgen::build_section_named(key, scale, genre, title, seed)?;
    to_json(&section)
}

fn catalog_json() -> String {
    serde_json::to_string(&chordgen::catalog()).unwrap_or_else(|_| "{}".to_string())
}

/// Generate a four-section song as JSON
#[wasm_bindgen]
pub fn generate_song(key: &str, scale: &str, genre: &str, seed: Option<u64>) -> Result<String, JsValue> {
    song_json(key, scale, genre, seed).map_err(to_js_error)
}

/// Build a single section as JSON, e.g. to regenerate one slot of a song
#[wasm_bindgen]
pub fn build_section(
    key: &str,
    scale: &str,
    genre: &str,
    title: &str,
    seed: Option<u64>,
) -> Result<String, JsValue> {
    section_json(key, scale, genre, title, seed).map_err(to_js_error)
}

/// Selectable notes, scales, genres and section names as JSON
#[wasm_bindgen]
pub fn catalog() -> String {
    catalog_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_json_has_all_sections() {
        let json: serde_json::Value =
            serde_json::from_str(&song_json("D", "dorian", "funk", Some(3)).unwrap()).unwrap();
        for key in ["verse", "preChorus", "chorus", "bridge"] {
            assert!(json[key]["chords"].is_array(), "missing {}", key);
        }
        assert_eq!(json["scale"], "Dorian");
    }

    #[test]
    fn test_section_json_keeps_title() {
        let json: serde_json::Value =
            serde_json::from_str(&section_json("A", "minor", "blues", "Bridge", None).unwrap())
                .unwrap();
        assert_eq!(json["title"], "Bridge");
    }

    #[test]
    fn test_errors_carry_message() {
        let err = song_json("C", "major", "polka", None).unwrap_err();
        assert_eq!(
            err,
            GenerateError {
                message: "Unknown genre: polka".to_string()
            }
        );
    }

    #[test]
    fn test_catalog_json() {
        let json: serde_json::Value = serde_json::from_str(&catalog_json()).unwrap();
        assert_eq!(json["notes"].as_array().map(Vec::len), Some(12));
        assert_eq!(json["sections"][1], "Pre-Chorus");
    }
}
