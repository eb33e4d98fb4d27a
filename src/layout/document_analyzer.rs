//! Layout reconstruction: from recognized words to document structure.
//!
//! ## Pipeline
//!
//! 1. Group words into lines ([`clustering`](crate::layout::clustering))
//! 2. Split lines into at most two columns ([`column_detector`](crate::layout::column_detector))
//! 3. Per column, find table regions ([`table_detector`](crate::layout::table_detector))
//! 4. Per column, classify the remaining lines as headings, lists and paragraphs
//!
//! Each column contributes its tables first, then its other elements in line
//! order. Columns are appended left to right and never interleaved.
//!
//! ## Example
//!
//! ```
//! use ocr_layout::layout::{LayoutAnalyzer, Word};
//! use ocr_layout::StructureElement;
//!
//! let words = vec![
//!     Word::new("Hello", 10, 10, 50, 20, 0.95),
//!     Word::new("world", 70, 10, 50, 20, 0.93),
//! ];
//! let structure = LayoutAnalyzer::new().analyze(&words);
//! assert_eq!(
//!     structure.elements,
//!     vec![StructureElement::Paragraph { content: "Hello world".to_string() }]
//! );
//! ```

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::clustering::group_into_lines_with;
use crate::layout::column_detector::detect_columns_with;
use crate::layout::heading_detector::HeadingDetector;
use crate::layout::list_detector::list_marker;
use crate::layout::table_detector::{detect_table_regions_with, extract_table};
use crate::layout::text_line::TextLine;
use crate::layout::word::{OcrResult, Word};
use crate::structure::{DocumentStructure, StructureElement};
use std::ops::Range;

/// Analyze words with the default configuration.
///
/// Empty input yields an empty structure.
pub fn analyze(words: &[Word]) -> DocumentStructure {
    LayoutAnalyzer::new().analyze(words)
}

/// Layout analyzer holding a set of tuning constants.
///
/// The analyzer is stateless between calls; one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutAnalyzer {
    config: LayoutConfig,
}

impl LayoutAnalyzer {
    /// Create an analyzer with default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom constants.
    ///
    /// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig) when a
    /// constant is out of range.
    pub fn with_config(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The constants in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Reconstruct the document structure of one page.
    pub fn analyze(&self, words: &[Word]) -> DocumentStructure {
        if words.is_empty() {
            return DocumentStructure::default();
        }

        let lines = self.group_into_lines(words);
        let columns = self.detect_columns(&lines);
        log::debug!(
            "Layout analysis: {} words, {} lines, {} columns",
            words.len(),
            lines.len(),
            columns.len()
        );

        let mut elements = vec![];
        for (index, column) in columns.iter().enumerate() {
            let regions = self.detect_table_regions(column);
            let column_elements = self.classify_column(column, &regions);
            log::debug!(
                "Column {}: {} lines, {} tables, {} elements",
                index,
                column.len(),
                regions.len(),
                column_elements.len()
            );
            elements.extend(column_elements);
        }

        DocumentStructure::new(elements)
    }

    /// Reconstruct the structure of a recognition provider's page result.
    pub fn analyze_ocr_result(&self, result: &OcrResult) -> DocumentStructure {
        self.analyze(&result.words)
    }

    /// Stage 1: group words into lines.
    pub fn group_into_lines(&self, words: &[Word]) -> Vec<TextLine> {
        group_into_lines_with(words, &self.config.line)
    }

    /// Stage 2: split lines into reading columns.
    pub fn detect_columns(&self, lines: &[TextLine]) -> Vec<Vec<TextLine>> {
        detect_columns_with(lines, &self.config.column)
    }

    /// Stage 3: find table regions within one column.
    pub fn detect_table_regions(&self, lines: &[TextLine]) -> Vec<Range<usize>> {
        detect_table_regions_with(lines, &self.config.table)
    }

    /// Stage 4: emit the elements of one column.
    ///
    /// Tables come first, in region order. The remaining lines are walked top
    /// to bottom and consumed in runs: a heading is always a single line, a
    /// list gathers following items of the same marker kind, and a paragraph
    /// gathers following plain lines until a large vertical gap.
    pub fn classify_column(&self, lines: &[TextLine], regions: &[Range<usize>]) -> Vec<StructureElement> {
        if lines.is_empty() {
            return vec![];
        }

        let mut claimed = vec![false; lines.len()];
        for region in regions {
            for flag in &mut claimed[region.clone()] {
                *flag = true;
            }
        }

        let headings = HeadingDetector::from_lines(lines, &self.config.classifier);
        let max_gap = headings.avg_height * self.config.classifier.paragraph_gap_ratio;

        let mut elements: Vec<StructureElement> = regions
            .iter()
            .map(|region| extract_table(lines, region.clone(), &self.config.table))
            .collect();

        let mut i = 0;
        while i < lines.len() {
            if claimed[i] {
                i += 1;
                continue;
            }

            let line = &lines[i];
            let text = line.text();

            if let Some(level) = headings.classify(line).level() {
                elements.push(StructureElement::Heading {
                    content: text,
                    level,
                });
                i += 1;
                continue;
            }

            if let Some(list_type) = list_marker(&text) {
                let mut items = vec![text];
                i += 1;
                while i < lines.len() && !claimed[i] && !headings.is_heading(&lines[i]) {
                    let next_text = lines[i].text();
                    if list_marker(&next_text) != Some(list_type) {
                        break;
                    }
                    items.push(next_text);
                    i += 1;
                }
                elements.push(StructureElement::List {
                    content: items.join("\n"),
                    list_type,
                });
                continue;
            }

            let mut paragraph = vec![text];
            i += 1;
            while i < lines.len() && !claimed[i] && !headings.is_heading(&lines[i]) {
                let next_text = lines[i].text();
                if list_marker(&next_text).is_some() {
                    break;
                }
                let spacing = (lines[i].top() - lines[i - 1].bottom()) as f32;
                if spacing > max_gap {
                    break;
                }
                paragraph.push(next_text);
                i += 1;
            }
            elements.push(StructureElement::Paragraph {
                content: paragraph.join("\n"),
            });
        }

        elements
    }
}
