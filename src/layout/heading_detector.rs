//! Heading detection from line heights.
//!
//! Recognition output carries no font metadata, so a line's "font size" is the
//! height of its tallest word. Headings are lines noticeably taller than the
//! column average; how much taller decides the level.

use crate::config::ClassifierConfig;
use crate::layout::text_line::TextLine;

/// Classification of a line in the heading hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    /// Main heading (largest)
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
    /// Regular body text
    Body,
}

impl HeadingLevel {
    /// Numeric heading level (1-3), or `None` for body text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::layout::heading_detector::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::H1.level(), Some(1));
    /// assert_eq!(HeadingLevel::H3.level(), Some(3));
    /// assert_eq!(HeadingLevel::Body.level(), None);
    /// ```
    pub fn level(&self) -> Option<u8> {
        match self {
            HeadingLevel::H1 => Some(1),
            HeadingLevel::H2 => Some(2),
            HeadingLevel::H3 => Some(3),
            HeadingLevel::Body => None,
        }
    }

    /// Check if this is a heading (H1, H2, or H3).
    pub fn is_heading(&self) -> bool {
        !matches!(self, HeadingLevel::Body)
    }
}

/// Height statistics of one column, fixed before classification starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingDetector {
    /// Mean tallest-word height over every line of the column
    pub avg_height: f32,
    /// Lines at least this tall are headings
    pub heading_threshold: f32,
    h1_threshold: f32,
    h2_threshold: f32,
}

impl HeadingDetector {
    /// Measure a column. Table lines count towards the average too.
    pub fn from_lines(lines: &[TextLine], config: &ClassifierConfig) -> Self {
        let avg_height = if lines.is_empty() {
            0.0
        } else {
            lines.iter().map(|l| l.max_height() as f32).sum::<f32>() / lines.len() as f32
        };

        Self {
            avg_height,
            heading_threshold: avg_height * config.heading_ratio,
            h1_threshold: avg_height * config.h1_ratio,
            h2_threshold: avg_height * config.h2_ratio,
        }
    }

    /// Classify a single line.
    pub fn classify(&self, line: &TextLine) -> HeadingLevel {
        let height = line.max_height() as f32;
        if height < self.heading_threshold {
            HeadingLevel::Body
        } else if height >= self.h1_threshold {
            HeadingLevel::H1
        } else if height >= self.h2_threshold {
            HeadingLevel::H2
        } else {
            HeadingLevel::H3
        }
    }

    /// Whether the line is tall enough to be a heading.
    pub fn is_heading(&self, line: &TextLine) -> bool {
        self.classify(line).is_heading()
    }
}

/// Detect heading levels for every line of a column.
pub fn detect_headings(lines: &[TextLine], config: &ClassifierConfig) -> Vec<HeadingLevel> {
    let detector = HeadingDetector::from_lines(lines, config);
    lines.iter().map(|line| detector.classify(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::word::Word;

    fn line_of_height(h: i32) -> TextLine {
        TextLine::new(vec![Word::new("text", 0, 0, 40, h, 0.9)])
    }

    #[test]
    fn test_detect_headings_empty() {
        let levels = detect_headings(&[], &ClassifierConfig::default());
        assert!(levels.is_empty());
    }

    #[test]
    fn test_uniform_heights_are_body() {
        let lines: Vec<TextLine> = (0..4).map(|_| line_of_height(20)).collect();
        let levels = detect_headings(&lines, &ClassifierConfig::default());
        assert!(levels.iter().all(|l| *l == HeadingLevel::Body));
    }

    #[test]
    fn test_levels_by_ratio() {
        // avg = (10 * 17 + 22 + 18 + 14) / 20 = 11.2
        let mut lines: Vec<TextLine> = (0..17).map(|_| line_of_height(10)).collect();
        lines.push(line_of_height(22)); // 1.96x
        lines.push(line_of_height(18)); // 1.61x
        lines.push(line_of_height(14)); // 1.25x
        let levels = detect_headings(&lines, &ClassifierConfig::default());

        assert_eq!(levels[0], HeadingLevel::Body);
        assert_eq!(levels[17], HeadingLevel::H1);
        assert_eq!(levels[18], HeadingLevel::H2);
        assert_eq!(levels[19], HeadingLevel::H3);
    }

    #[test]
    fn test_threshold_uses_tallest_word() {
        let detector = HeadingDetector::from_lines(
            &[line_of_height(10), line_of_height(10)],
            &ClassifierConfig::default(),
        );
        let mixed = TextLine::new(vec![
            Word::new("small", 0, 0, 40, 10, 0.9),
            Word::new("BIG", 50, 0, 40, 30, 0.9),
        ]);
        assert_eq!(detector.classify(&mixed), HeadingLevel::H1);
    }
}
