//! Repair of spaces dropped by recognition engines.
//!
//! Some engines fuse adjacent words ("ofthe", "RFPis", "page3"). The rules
//! below reinsert a space at boundaries that almost never occur inside a real
//! word. They are applied in a fixed order, so output is deterministic.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Lowercase letter directly followed by uppercase (camelCase)
    static ref RE_CAMEL: Regex = Regex::new(r"([a-z])([A-Z])").unwrap();

    /// Letter directly followed by a digit
    static ref RE_LETTER_DIGIT: Regex = Regex::new(r"([a-zA-Z])(\d)").unwrap();

    /// Digit directly followed by a letter
    static ref RE_DIGIT_LETTER: Regex = Regex::new(r"(\d)([a-zA-Z])").unwrap();

    /// Acronym directly followed by a lowercase word
    static ref RE_ACRONYM: Regex = Regex::new(r"([A-Z]{2,})([a-z])").unwrap();

    /// Sentence or clause punctuation directly followed by a letter
    static ref RE_PUNCT: Regex = Regex::new(r"([.!?,;:])([A-Za-z])").unwrap();

    /// Frequent fused function-word pairs
    static ref FUSED_WORDS: Vec<(Regex, &'static str)> = [
        ("tothis", "to this"),
        ("tothe", "to the"),
        ("ofthe", "of the"),
        ("inthe", "in the"),
        ("onthe", "on the"),
        ("forthe", "for the"),
        ("andthe", "and the"),
        ("withthe", "with the"),
        ("fromthe", "from the"),
        ("aboutthe", "about the"),
        ("thatis", "that is"),
        ("whichis", "which is"),
        ("thereis", "there is"),
        ("itis", "it is"),
    ]
    .iter()
    .map(|&(fused, split)| (Regex::new(&format!(r"(?i)\b{}\b", fused)).unwrap(), split))
    .collect();
}

/// Insert spaces that recognition dropped between words.
///
/// # Examples
///
/// ```
/// use ocr_layout::text::repair_spacing;
///
/// assert_eq!(repair_spacing("helloWorld"), "hello World");
/// assert_eq!(repair_spacing("The RFPis due"), "The RFP is due");
/// assert_eq!(repair_spacing("see page3"), "see page 3");
/// assert_eq!(repair_spacing("end.Next"), "end. Next");
/// assert_eq!(repair_spacing("most ofthe time"), "most of the time");
/// ```
pub fn repair_spacing(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = RE_CAMEL.replace_all(text, "$1 $2");
    let text = RE_LETTER_DIGIT.replace_all(&text, "$1 $2");
    let text = RE_DIGIT_LETTER.replace_all(&text, "$1 $2");
    let text = RE_ACRONYM.replace_all(&text, "$1 $2");
    let text = RE_PUNCT.replace_all(&text, "$1 $2");

    let mut text = text.into_owned();
    for (pattern, split) in FUSED_WORDS.iter() {
        text = pattern.replace_all(&text, *split).into_owned();
    }
    text
}
