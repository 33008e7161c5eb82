//! Keyword spellings and contextual classification tables.
//!
//! LP keywords are not reserved: `general`, `bounds`, `free` and `end` are
//! all legal variable names inside an expression. The lexer therefore
//! yields them as plain words, and the parser asks this module whether a
//! word matches a spelling expected at the current decision point. All
//! matching is case-insensitive.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::syntax::{Sense, SosType};

/// Keywords that can follow the constraints section: section openers plus
/// the end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKeyword {
    Bounds,
    Generals,
    Integers,
    Binaries,
    SemiContinuous,
    Sos,
    End,
}

/// Section keyword spellings, lowercased. Process-wide, read-only,
/// initialized once.
static SECTION_KEYWORDS: Lazy<FxHashMap<&'static str, SectionKeyword>> = Lazy::new(|| {
    let mut table = FxHashMap::default();
    for (spelling, keyword) in [
        ("bounds", SectionKeyword::Bounds),
        ("bound", SectionKeyword::Bounds),
        ("generals", SectionKeyword::Generals),
        ("general", SectionKeyword::Generals),
        ("gen", SectionKeyword::Generals),
        ("integers", SectionKeyword::Integers),
        ("integer", SectionKeyword::Integers),
        ("binaries", SectionKeyword::Binaries),
        ("binary", SectionKeyword::Binaries),
        ("bin", SectionKeyword::Binaries),
        ("semi-continuous", SectionKeyword::SemiContinuous),
        ("semis", SectionKeyword::SemiContinuous),
        ("semi", SectionKeyword::SemiContinuous),
        ("sos", SectionKeyword::Sos),
        ("end", SectionKeyword::End),
    ] {
        table.insert(spelling, keyword);
    }
    table
});

const MINIMIZE_SPELLINGS: [&str; 4] = ["minimize", "minimise", "minimum", "min"];
const MAXIMIZE_SPELLINGS: [&str; 4] = ["maximize", "maximise", "maximum", "max"];

fn matches_any(word: &str, spellings: &[&str]) -> bool {
    spellings.iter().any(|s| word.eq_ignore_ascii_case(s))
}

/// Classify a word as a section keyword.
pub fn section_keyword(word: &str) -> Option<SectionKeyword> {
    SECTION_KEYWORDS
        .get(word.to_ascii_lowercase().as_str())
        .copied()
}

/// Classify a word as an objective sense.
pub fn sense_keyword(word: &str) -> Option<Sense> {
    if matches_any(word, &MINIMIZE_SPELLINGS) {
        Some(Sense::Minimize)
    } else if matches_any(word, &MAXIMIZE_SPELLINGS) {
        Some(Sense::Maximize)
    } else {
        None
    }
}

/// The `free` marker of a bounds declaration.
pub fn is_free_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("free")
}

/// Classify a word as an SOS type.
pub fn sos_type(word: &str) -> Option<SosType> {
    if word.eq_ignore_ascii_case("s1") {
        Some(SosType::S1)
    } else if word.eq_ignore_ascii_case("s2") {
        Some(SosType::S2)
    } else {
        None
    }
}

/// Single-word constraints-header spellings: `st`, `s.t.` (one word
/// because `.` is an identifier character).
pub fn subject_to_single(word: &str) -> bool {
    word.eq_ignore_ascii_case("st") || word.eq_ignore_ascii_case("s.t.")
}

/// Two-word constraints-header spellings: `subject to`, `such that`.
/// Any amount of trivia may separate the words.
pub fn subject_to_pair(first: &str, second: &str) -> bool {
    (first.eq_ignore_ascii_case("subject") && second.eq_ignore_ascii_case("to"))
        || (first.eq_ignore_ascii_case("such") && second.eq_ignore_ascii_case("that"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_spellings_classify_case_insensitively() {
        assert_eq!(section_keyword("Bounds"), Some(SectionKeyword::Bounds));
        assert_eq!(section_keyword("BIN"), Some(SectionKeyword::Binaries));
        assert_eq!(
            section_keyword("Semi-Continuous"),
            Some(SectionKeyword::SemiContinuous)
        );
        assert_eq!(section_keyword("END"), Some(SectionKeyword::End));
        assert_eq!(section_keyword("x1"), None);
        // prefix spellings are exact words, not prefixes
        assert_eq!(section_keyword("bins"), None);
    }

    #[test]
    fn sense_spellings() {
        assert_eq!(sense_keyword("min"), Some(Sense::Minimize));
        assert_eq!(sense_keyword("MINIMISE"), Some(Sense::Minimize));
        assert_eq!(sense_keyword("Maximum"), Some(Sense::Maximize));
        assert_eq!(sense_keyword("maximilian"), None);
    }

    #[test]
    fn sos_type_spellings() {
        assert_eq!(sos_type("s1"), Some(SosType::S1));
        assert_eq!(sos_type("S2"), Some(SosType::S2));
        assert_eq!(sos_type("s3"), None);
    }

    #[test]
    fn subject_to_spellings() {
        assert!(subject_to_single("st"));
        assert!(subject_to_single("S.T."));
        assert!(!subject_to_single("subject"));
        assert!(subject_to_pair("Subject", "TO"));
        assert!(subject_to_pair("such", "that"));
        assert!(!subject_to_pair("subject", "that"));
    }
}
