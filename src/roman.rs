//! Roman numeral labels for scale degrees.
//!
//! Labels are analytical only and never feed back into chord construction.

use crate::scale::ScaleType;

const MAJOR_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];
const MINOR_NUMERALS: [&str; 7] = ["i", "ii°", "bIII", "iv", "v", "bVI", "bVII"];
const PLAIN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Label `degree` (1-based, wrapping every seven degrees) for `scale`.
///
/// Major uses the case convention of its diatonic triads, minor-like scales
/// use the minor convention, and every other scale gets plain uppercase
/// numerals.
///
/// ```
/// use chordgen::{roman_numeral, ScaleType};
///
/// assert_eq!(roman_numeral(6, ScaleType::Major), "vi");
/// assert_eq!(roman_numeral(6, ScaleType::Minor), "bVI");
/// assert_eq!(roman_numeral(8, ScaleType::Major), "I");
/// assert_eq!(roman_numeral(2, ScaleType::Dorian), "II");
/// ```
pub fn roman_numeral(degree: u8, scale: ScaleType) -> &'static str {
    let index = (degree as usize + 6) % 7;
    if scale == ScaleType::Major {
        MAJOR_NUMERALS[index]
    } else if scale.is_minor_like() {
        MINOR_NUMERALS[index]
    } else {
        PLAIN_NUMERALS[index]
    }
}
