//! Layout analysis algorithms for recognized text.
//!
//! This module reconstructs document structure from word geometry alone:
//! - Sequential line grouping (words → lines)
//! - Gap-based two-column detection
//! - Alignment-based table detection
//! - Height-based heading detection and marker-based list detection

pub mod clustering;
pub mod column_detector;
pub mod document_analyzer;
pub mod heading_detector;
pub mod list_detector;
pub mod table_detector;
pub mod text_line;
pub mod word;

// Re-export main types
pub use clustering::{cluster_positions, group_into_lines};
pub use column_detector::{detect_columns, GapRegion};
pub use document_analyzer::{analyze, LayoutAnalyzer};
pub use heading_detector::{detect_headings, HeadingDetector, HeadingLevel};
pub use list_detector::{is_list_item, list_marker};
pub use table_detector::{detect_table_regions, extract_table, find_table_end};
pub use text_line::TextLine;
pub use word::{read_words_file, read_words_json, sanitize_words, validate_words, OcrResult, Word};
