//! Recognized words, the engine's input.
//!
//! A [`Word`] is what a text recognition provider hands over: text, a
//! pixel-space box and a confidence. Layout analysis assumes every word has a
//! positive area and non-empty text; the helpers here let callers enforce that
//! at the boundary, either strictly ([`validate_words`]) or by dropping the
//! offenders ([`sanitize_words`]).

use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A single recognized word with its position and confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The recognized text
    pub text: String,
    /// X coordinate of the top-left corner
    pub x: i32,
    /// Y coordinate of the top-left corner
    pub y: i32,
    /// Box width in pixels
    pub width: i32,
    /// Box height in pixels
    pub height: i32,
    /// Recognition confidence in `[0.0, 1.0]`
    pub confidence: f32,
}

impl Word {
    /// Create a word.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::layout::Word;
    ///
    /// let word = Word::new("Hello", 10, 10, 50, 20, 0.98);
    /// assert_eq!(word.right(), 60);
    /// assert_eq!(word.bottom(), 30);
    /// ```
    pub fn new(
        text: impl Into<String>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        confidence: f32,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            confidence,
        }
    }

    /// Bounding box of the word.
    pub fn bbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Left edge.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Top edge.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        self.bbox().center_x()
    }

    /// Check the invariants the layout engine relies on.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("text is empty".to_string());
        }
        if self.bbox().is_empty() {
            return Err(format!(
                "box {}x{} has no area",
                self.width, self.height
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} is outside [0, 1]", self.confidence));
        }
        Ok(())
    }
}

/// Fail on the first word that breaks the engine's input invariants.
pub fn validate_words(words: &[Word]) -> Result<()> {
    for (index, word) in words.iter().enumerate() {
        word.validate()
            .map_err(|reason| Error::InvalidInput { index, reason })?;
    }
    Ok(())
}

/// Trim word text and drop words that would break the engine's invariants.
pub fn sanitize_words(words: Vec<Word>) -> Vec<Word> {
    let total = words.len();
    let kept: Vec<Word> = words
        .into_iter()
        .enumerate()
        .filter_map(|(index, mut word)| {
            let trimmed = word.text.trim();
            if trimmed.len() != word.text.len() {
                word.text = trimmed.to_string();
            }
            match word.validate() {
                Ok(()) => Some(word),
                Err(reason) => {
                    log::debug!("Dropping word {} ({:?}): {}", index, word.text, reason);
                    None
                },
            }
        })
        .collect();

    if kept.len() != total {
        log::debug!("Sanitized words: kept {} of {}", kept.len(), total);
    }
    kept
}

/// Read a JSON array of words.
pub fn read_words_json<R: Read>(reader: R) -> Result<Vec<Word>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a JSON array of words from a file.
pub fn read_words_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let file = File::open(path)?;
    read_words_json(BufReader::new(file))
}

/// The complete output of a text recognition provider for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrResult {
    /// Full page text
    pub text: String,
    /// Individual words with positions
    pub words: Vec<Word>,
    /// Page confidence in `[0.0, 1.0]`
    pub confidence: f32,
}

impl OcrResult {
    /// Build a page result from raw words.
    ///
    /// Invalid words are dropped first. The page confidence is the mean word
    /// confidence, or 0.0 when nothing was recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::layout::{OcrResult, Word};
    ///
    /// let result = OcrResult::from_words(vec![
    ///     Word::new("Hello", 10, 10, 50, 20, 0.9),
    ///     Word::new("world", 70, 10, 50, 20, 0.7),
    ///     Word::new("  ", 130, 10, 10, 20, 0.1),
    /// ]);
    /// assert_eq!(result.text, "Hello world");
    /// assert_eq!(result.words.len(), 2);
    /// assert!((result.confidence - 0.8).abs() < 1e-6);
    /// ```
    pub fn from_words(words: Vec<Word>) -> Self {
        let words = sanitize_words(words);
        let confidence = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|w| w.confidence).sum::<f32>() / words.len() as f32
        };
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            text,
            words,
            confidence,
        }
    }

    /// An empty page.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            words: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Parse a page result from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
