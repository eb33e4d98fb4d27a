// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # OCR Layout
//!
//! Layout reconstruction for OCR output: turns a flat collection of recognized
//! words (text, pixel box, confidence) into an ordered document structure of
//! paragraphs, headings, lists and tables.
//!
//! ## Core Features
//!
//! - **Line Grouping**: single-pass, height-relative baseline clustering
//! - **Column Detection**: coverage gaps split pages into up to two columns
//! - **Table Detection**: column alignment, usage and row-shape checks
//! - **Headings & Lists**: relative line height and list marker recognition
//! - **Deterministic**: a pure function of its input, safe to call from many threads
//!
//! ## Quick Start
//!
//! ```
//! use ocr_layout::{analyze, StructureElement, Word};
//!
//! let words = vec![
//!     Word::new("Chapter", 10, 10, 120, 30, 0.97),
//!     Word::new("One", 140, 10, 60, 30, 0.96),
//!     Word::new("This", 10, 60, 40, 20, 0.95),
//!     Word::new("is", 55, 60, 20, 20, 0.99),
//!     Word::new("text", 80, 60, 40, 20, 0.94),
//! ];
//!
//! let structure = analyze(&words);
//! assert_eq!(structure.len(), 2);
//! assert!(matches!(structure.elements[0], StructureElement::Heading { .. }));
//! assert_eq!(structure.elements[1].content(), "This is text");
//! ```
//!
//! Words that may violate the engine's assumptions (empty text, zero-area
//! boxes) should go through [`layout::validate_words`] or
//! [`layout::sanitize_words`] first.
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Layout analysis
pub mod geometry;
pub mod layout;

// Document structure
pub mod structure;

// Text post-processing
pub mod text;

// Re-exports
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use layout::{analyze, LayoutAnalyzer, OcrResult, Word};
pub use structure::{DocumentStructure, ListType, StructureElement};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        a.partial_cmp(&b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            _ => Ordering::Less,
        })
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
