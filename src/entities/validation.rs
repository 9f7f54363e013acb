use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

/// Validation failures raised by entity constructors and setters.
///
/// Construction is fail-fast: an entity that exists has already passed every
/// check below. The message text is stable and asserted on by tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    #[error("Not a valid musician name")]
    InvalidMusicianName,

    #[error("Not a valid instrument name")]
    InvalidInstrumentName,

    #[error("Not a valid album name")]
    InvalidAlbumName,

    #[error("Not a valid track name")]
    InvalidTrackName,

    #[error("Illegal record number")]
    IllegalRecordNumber,

    #[error("Year should be greater than 1970")]
    InvalidReleaseYear,

    #[error("Price should hold non negative numbers")]
    NegativePrice,

    #[error("Rating should hold valid range")]
    RatingOutOfRange,

    #[error("MusicalInstrument set can not be empty")]
    EmptyInstrumentSet,
}

/// Letters plus limited punctuation (`'`, `,`, `.`, `-`, inner spaces); no
/// leading space, no digits or stray symbols.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]+(([',. \-][a-zA-Z ])?[a-zA-Z]*)*$").expect("name pattern compiles")
});

/// Catalogue prefixes the label has used for record numbers.
pub(crate) const RECORD_NUMBER_PREFIXES: &[&str] =
    &["ECM ", "Carmo ", "RJAL ", "YAN ", "Watt ", "XtraWatt "];

pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty() && NAME_PATTERN.is_match(name)
}

/// A record number must carry a known label prefix and be alphanumeric once
/// spaces and `/` separators are removed (e.g. `ECM 1064/65`).
pub(crate) fn is_valid_record_number(record_number: &str) -> bool {
    if !RECORD_NUMBER_PREFIXES
        .iter()
        .any(|prefix| record_number.starts_with(prefix))
    {
        return false;
    }
    let stripped: String = record_number
        .chars()
        .filter(|c| *c != '/' && !c.is_whitespace())
        .collect();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_alphanumeric())
}

pub(crate) fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// The label's first release was in 1971; future years are rejected.
pub(crate) fn is_valid_release_year(year: i32) -> bool {
    year > 1970 && year <= current_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_names_with_inner_punctuation() {
        assert!(is_valid_name("Keith Jarrett"));
        assert!(is_valid_name("Jan Garbarek"));
        assert!(is_valid_name("The Koln Concert"));
        assert!(is_valid_name("O'Connor"));
        assert!(is_valid_name("Jean-Luc Ponty"));
    }

    #[test]
    fn rejects_blank_and_malformed_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name(" Keith Jarrett"));
        assert!(!is_valid_name("Keith@Jarrett"));
        assert!(!is_valid_name("1234"));
    }

    #[test]
    fn accepts_every_known_record_prefix() {
        for prefix in RECORD_NUMBER_PREFIXES {
            let record_number = format!("{prefix}1064/65");
            assert!(is_valid_record_number(&record_number), "{record_number}");
        }
    }

    #[test]
    fn rejects_unknown_prefixes_and_symbols() {
        assert!(!is_valid_record_number("XYZ 1064"));
        assert!(!is_valid_record_number("ECM 10-64"));
        assert!(!is_valid_record_number("ECM "));
        assert!(!is_valid_record_number("1064/65"));
    }

    #[test]
    fn release_year_window_is_post_1970_up_to_now() {
        assert!(!is_valid_release_year(1970));
        assert!(is_valid_release_year(1971));
        assert!(is_valid_release_year(current_year()));
        assert!(!is_valid_release_year(current_year() + 1));
    }
}
