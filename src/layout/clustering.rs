//! Sequential clustering for text layout analysis.
//!
//! Two simple, deterministic clusterers:
//! - [`group_into_lines`] turns words into lines with a single forward pass
//! - [`cluster_positions`] groups 1-D coordinates (word left edges) into columns

use crate::config::LineConfig;
use crate::layout::text_line::TextLine;
use crate::layout::word::Word;
use crate::utils::safe_float_cmp;

/// Group words into lines using default parameters.
///
/// See [`group_into_lines_with`].
pub fn group_into_lines(words: &[Word]) -> Vec<TextLine> {
    group_into_lines_with(words, &LineConfig::default())
}

/// Group words into lines.
///
/// Words are sorted by `(y, x)` and walked once. A word joins the current line
/// when its top edge is within `line_height_ratio × height` of the line's first
/// word; otherwise it opens a new line and the threshold is taken from its own
/// height. Lines are never merged afterwards, so a small word sitting on the
/// baseline of a much taller one can end up on a line of its own.
///
/// # Examples
///
/// ```
/// use ocr_layout::layout::{Word, clustering::group_into_lines};
///
/// let words = vec![
///     Word::new("world", 70, 12, 50, 20, 0.9),
///     Word::new("Hello", 10, 10, 50, 20, 0.9),
///     Word::new("Next", 10, 40, 40, 20, 0.9),
/// ];
/// let lines = group_into_lines(&words);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text(), "Hello world");
/// assert_eq!(lines[1].text(), "Next");
/// ```
pub fn group_into_lines_with(words: &[Word], config: &LineConfig) -> Vec<TextLine> {
    if words.is_empty() {
        return vec![];
    }

    let mut sorted: Vec<Word> = words.to_vec();
    sorted.sort_by(|a, b| (a.y, a.x).cmp(&(b.y, b.x)));

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return vec![];
    };

    let mut lines = vec![];
    let mut threshold = first.height as f32 * config.line_height_ratio;
    let mut current = vec![first];

    for word in iter {
        let anchor_y = current[0].y;
        if ((word.y - anchor_y).abs() as f32) <= threshold {
            current.push(word);
        } else {
            threshold = word.height as f32 * config.line_height_ratio;
            lines.push(TextLine::new(std::mem::replace(&mut current, vec![word])));
        }
    }
    lines.push(TextLine::new(current));

    log::trace!("Grouped {} words into {} lines", words.len(), lines.len());
    lines
}

/// Cluster 1-D positions and return the cluster centers.
///
/// Positions are sorted; each one joins the running cluster when it lies within
/// `tolerance` of that cluster's last member, otherwise it starts a new one.
/// Centers are the mean of their members, in ascending order.
///
/// # Examples
///
/// ```
/// use ocr_layout::layout::clustering::cluster_positions;
///
/// let centers = cluster_positions(&[100.0, 10.0, 20.0, 105.0], 15.0);
/// assert_eq!(centers, vec![15.0, 102.5]);
/// ```
pub fn cluster_positions(positions: &[f32], tolerance: f32) -> Vec<f32> {
    if positions.is_empty() {
        return vec![];
    }

    let mut sorted = positions.to_vec();
    sorted.sort_by(|a, b| safe_float_cmp(*a, *b));

    let mut clusters: Vec<Vec<f32>> = vec![vec![sorted[0]]];
    for &pos in &sorted[1..] {
        let last_cluster = clusters.len() - 1;
        let last = clusters[last_cluster][clusters[last_cluster].len() - 1];
        if pos - last <= tolerance {
            clusters[last_cluster].push(pos);
        } else {
            clusters.push(vec![pos]);
        }
    }

    clusters
        .iter()
        .map(|c| c.iter().sum::<f32>() / c.len() as f32)
        .collect()
}
