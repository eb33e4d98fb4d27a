//! Text line representation for layout analysis.
//!
//! A line is a left-to-right run of words believed to share a baseline. Lines
//! are built once by line grouping and read by every later stage.

use crate::geometry::Rect;
use crate::layout::word::Word;

/// Words on one visual text line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Words in the order they were grouped
    pub words: Vec<Word>,
}

impl TextLine {
    /// Create a line from its words.
    ///
    /// # Panics
    ///
    /// Panics if `words` is empty.
    pub fn new(words: Vec<Word>) -> Self {
        assert!(!words.is_empty(), "Cannot create TextLine from empty words");
        Self { words }
    }

    /// The first word placed into the line.
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; lines are never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word texts joined by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::layout::{TextLine, Word};
    ///
    /// let line = TextLine::new(vec![
    ///     Word::new("Hello", 10, 10, 50, 20, 0.9),
    ///     Word::new("world", 70, 10, 50, 20, 0.9),
    /// ]);
    /// assert_eq!(line.text(), "Hello world");
    /// ```
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bounding box of all words.
    pub fn bbox(&self) -> Rect {
        self.words
            .iter()
            .map(Word::bbox)
            .fold(self.first().bbox(), |acc, r| acc.union(&r))
    }

    /// Leftmost word edge.
    pub fn min_x(&self) -> i32 {
        self.bbox().left()
    }

    /// Rightmost word edge.
    pub fn max_x(&self) -> i32 {
        self.bbox().right()
    }

    /// Highest word top.
    pub fn top(&self) -> i32 {
        self.bbox().top()
    }

    /// Lowest word bottom.
    pub fn bottom(&self) -> i32 {
        self.bbox().bottom()
    }

    /// Height of the tallest word, used as the line's font size.
    pub fn max_height(&self) -> i32 {
        self.words.iter().map(|w| w.height).max().unwrap_or(0)
    }

    /// Mean of the word centers.
    pub fn center_x(&self) -> f32 {
        self.words.iter().map(Word::center_x).sum::<f32>() / self.words.len() as f32
    }

    /// Word left edges in ascending order.
    pub fn left_edges(&self) -> Vec<i32> {
        let mut edges: Vec<i32> = self.words.iter().map(|w| w.x).collect();
        edges.sort_unstable();
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x: i32, y: i32, w: i32, h: i32) -> Word {
        Word::new(text, x, y, w, h, 0.9)
    }

    #[test]
    fn test_line_extent() {
        let line = TextLine::new(vec![
            word("a", 50, 12, 20, 10),
            word("b", 10, 10, 20, 14),
            word("c", 90, 11, 30, 10),
        ]);
        assert_eq!(line.min_x(), 10);
        assert_eq!(line.max_x(), 120);
        assert_eq!(line.top(), 10);
        assert_eq!(line.bottom(), 24);
        assert_eq!(line.max_height(), 14);
    }

    #[test]
    fn test_line_center_is_mean_of_word_centers() {
        let line = TextLine::new(vec![word("a", 0, 0, 10, 10), word("b", 100, 0, 20, 10)]);
        // (5 + 110) / 2
        assert_eq!(line.center_x(), 57.5);
    }

    #[test]
    fn test_left_edges_sorted() {
        let line = TextLine::new(vec![word("b", 40, 0, 5, 5), word("a", 10, 0, 5, 5)]);
        assert_eq!(line.left_edges(), vec![10, 40]);
    }

    #[test]
    #[should_panic(expected = "empty words")]
    fn test_empty_line_panics() {
        TextLine::new(vec![]);
    }
}
