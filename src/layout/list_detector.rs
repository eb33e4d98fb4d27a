//! List marker recognition.
//!
//! A line is a list item when its text opens with a bullet glyph or an
//! enumeration label (`1.`, `b)`, `IV.` ...) followed by whitespace.

use crate::structure::ListType;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Bullet glyph followed by whitespace
    static ref RE_BULLET: Regex = Regex::new(
        r"^[•\-*○■□▪▫\u{2022}\u{2023}\u{2043}\u{204C}\u{204D}\u{2219}\u{25AA}\u{25AB}\u{25CF}\u{25E6}]\s"
    )
    .unwrap();

    /// Digits, a single letter, or a roman numeral, then `.` or `)` and whitespace
    static ref RE_NUMBERED: Regex =
        Regex::new(r"^(?:\d+|[a-z]|[A-Z]|[ivxlcdm]+|[IVXLCDM]+)[.)]\s").unwrap();
}

/// Classify a line of text as a list item.
///
/// Returns `None` when the text carries no list marker. Surrounding whitespace
/// is ignored.
///
/// # Examples
///
/// ```
/// use ocr_layout::layout::list_detector::list_marker;
/// use ocr_layout::ListType;
///
/// assert_eq!(list_marker("• First item"), Some(ListType::Bullet));
/// assert_eq!(list_marker("2) Second"), Some(ListType::Numbered));
/// assert_eq!(list_marker("iv. Fourth"), Some(ListType::Numbered));
/// assert_eq!(list_marker("Plain sentence."), None);
/// ```
pub fn list_marker(text: &str) -> Option<ListType> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if RE_BULLET.is_match(text) {
        Some(ListType::Bullet)
    } else if RE_NUMBERED.is_match(text) {
        Some(ListType::Numbered)
    } else {
        None
    }
}

/// Whether the text opens with any list marker.
pub fn is_list_item(text: &str) -> bool {
    list_marker(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_bullets() {
        for text in ["• a", "- a", "* a", "○ a", "■ a", "□ a", "▪ a", "▫ a"] {
            assert_eq!(list_marker(text), Some(ListType::Bullet), "{}", text);
        }
    }

    #[test]
    fn test_unicode_bullets() {
        for text in ["\u{2023} a", "\u{2043} a", "\u{2219} a", "\u{25CF} a", "\u{25E6} a"] {
            assert_eq!(list_marker(text), Some(ListType::Bullet), "{}", text);
        }
    }

    #[test]
    fn test_bullet_requires_whitespace() {
        assert_eq!(list_marker("-dash"), None);
        assert_eq!(list_marker("*emphasis*"), None);
    }

    #[test]
    fn test_numbered_markers() {
        for text in ["1. a", "12) a", "a. a", "B) a", "iii. a", "XIV) a"] {
            assert_eq!(list_marker(text), Some(ListType::Numbered), "{}", text);
        }
    }

    #[test]
    fn test_numbered_requires_punctuation_and_space() {
        assert_eq!(list_marker("1 a"), None);
        assert_eq!(list_marker("1.5 kg"), None);
        assert_eq!(list_marker("ab. a"), None);
        assert_eq!(list_marker("Mr. Smith"), None);
    }

    #[test]
    fn test_leading_whitespace_ignored() {
        assert_eq!(list_marker("   3. indented"), Some(ListType::Numbered));
        assert!(!is_list_item("   "));
    }
}
