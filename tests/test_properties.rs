//! Property-based tests for layout reconstruction.
//!
//! Random word clouds exercise the invariants every analysis must keep:
//! - Empty input produces an empty structure
//! - Heading levels stay within 1..=3
//! - Tables have at least three rows and two columns
//! - Lists only contain items of their own marker kind
//! - Every line ends up in exactly one element
//! - Analysis is deterministic

use ocr_layout::layout::{clustering::group_into_lines, list_marker};
use ocr_layout::{analyze, LayoutAnalyzer, StructureElement, Word};
use proptest::prelude::*;
use std::collections::HashSet;

const TOKENS: &[&str] = &["alpha", "beta", "gamma", "delta", "•", "-", "*", "1.", "2)", "a)", "IV.", "42"];

fn word_strategy() -> impl Strategy<Value = Word> {
    (0..TOKENS.len(), 0i32..800, 0i32..1200, 1i32..150, 5i32..40, 0.0f32..=1.0).prop_map(
        |(token, x, y, width, height, confidence)| Word::new(TOKENS[token], x, y, width, height, confidence),
    )
}

/// Words snapped to a coarse grid so aligned rows, and therefore tables, occur often.
fn gridded_word_strategy() -> impl Strategy<Value = Word> {
    (0..TOKENS.len(), 0i32..5, 0i32..12, 10i32..30).prop_map(|(token, col, row, height)| {
        Word::new(TOKENS[token], col * 120, row * 30, 60, height, 0.9)
    })
}

fn word_cloud() -> impl Strategy<Value = Vec<Word>> {
    prop_oneof![
        prop::collection::vec(word_strategy(), 0..80),
        prop::collection::vec(gridded_word_strategy(), 0..60),
    ]
}

// ============================================================================
// Structural Invariants
// ============================================================================

proptest! {
    #[test]
    fn proptest_heading_levels_are_bounded(words in word_cloud()) {
        for element in analyze(&words).iter() {
            if let StructureElement::Heading { level, .. } = element {
                prop_assert!((1..=3).contains(level), "heading level {} out of range", level);
            }
        }
    }

    #[test]
    fn proptest_tables_have_minimum_shape(words in word_cloud()) {
        for element in analyze(&words).iter() {
            if let StructureElement::Table { content, rows, columns } = element {
                prop_assert!(*rows >= 3, "table with {} rows", rows);
                prop_assert!(*columns >= 2, "table with {} columns", columns);
                prop_assert_eq!(content.split('\n').count(), *rows);
            }
        }
    }

    #[test]
    fn proptest_lists_are_homogeneous(words in word_cloud()) {
        for element in analyze(&words).iter() {
            if let StructureElement::List { list_type, .. } = element {
                for item in element.lines() {
                    prop_assert_eq!(list_marker(item), Some(*list_type), "item {:?}", item);
                }
            }
        }
    }

    #[test]
    fn proptest_every_line_is_emitted_once(words in word_cloud()) {
        let line_count = group_into_lines(&words).len();
        let emitted: usize = analyze(&words).iter().map(|e| e.lines().count()).sum();
        prop_assert_eq!(emitted, line_count);
    }

    #[test]
    fn proptest_analysis_is_deterministic(words in word_cloud()) {
        let analyzer = LayoutAnalyzer::new();
        prop_assert_eq!(analyzer.analyze(&words), analyzer.analyze(&words));
    }

    #[test]
    fn proptest_input_order_is_irrelevant(words in prop::collection::vec(word_strategy(), 0..80)) {
        // Words sharing a position keep their input order, so only clouds
        // with distinct positions are order-independent
        let positions: HashSet<(i32, i32)> = words.iter().map(|w| (w.x, w.y)).collect();
        prop_assume!(positions.len() == words.len());

        let mut reversed = words.clone();
        reversed.reverse();
        prop_assert_eq!(analyze(&words), analyze(&reversed));
    }
}

// ============================================================================
// Boundary Cases
// ============================================================================

#[test]
fn proptest_empty_input_law() {
    proptest!(|(_ in 0u8..10u8)| {
        prop_assert!(analyze(&[]).is_empty());
    });
}
