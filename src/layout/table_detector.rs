//! Table detection using column alignment analysis.
//!
//! A table is a run of consecutive lines whose word left edges line up on a
//! shared set of column positions. Detection works on one column's lines at a
//! time and only ever reports contiguous, non-overlapping line ranges, so the
//! classifier can skip those lines afterwards.
//!
//! List items are never the start of a table: a run of `1. ...`, `2. ...`
//! lines aligns just as well as a grid, but reads as a list.

use crate::config::TableConfig;
use crate::layout::clustering::cluster_positions;
use crate::layout::list_detector::is_list_item;
use crate::layout::text_line::TextLine;
use crate::structure::StructureElement;
use std::collections::BTreeSet;
use std::ops::Range;

/// Find table regions using default parameters.
///
/// See [`detect_table_regions_with`].
pub fn detect_table_regions(lines: &[TextLine]) -> Vec<Range<usize>> {
    detect_table_regions_with(lines, &TableConfig::default())
}

/// Find table regions in one column.
///
/// Returns half-open line ranges in ascending order. Scanning restarts right
/// after each detected table.
///
/// # Examples
///
/// ```
/// use ocr_layout::layout::{Word, clustering::group_into_lines};
/// use ocr_layout::layout::table_detector::detect_table_regions;
///
/// let mut words = vec![];
/// for row in 0..3 {
///     for col in 0..3 {
///         words.push(Word::new("cell", col * 120, row * 30, 60, 20, 0.9));
///     }
/// }
/// let lines = group_into_lines(&words);
/// assert_eq!(detect_table_regions(&lines), vec![0..3]);
/// ```
pub fn detect_table_regions_with(lines: &[TextLine], config: &TableConfig) -> Vec<Range<usize>> {
    if lines.len() < config.min_rows {
        return vec![];
    }

    let mut regions = vec![];
    let mut i = 0;

    while i < lines.len() {
        if is_list_item(&lines[i].text()) {
            i += 1;
            continue;
        }

        let end = find_table_end(lines, i, config);
        if end > i && end - i >= config.min_rows {
            log::debug!("Table region detected: lines {}..{}", i, end);
            regions.push(i..end);
            i = end;
        } else {
            i += 1;
        }
    }

    regions
}

/// Find where a table starting at `start` ends.
///
/// Returns the exclusive end index, or `start` itself when the lines from
/// `start` do not form a table.
pub fn find_table_end(lines: &[TextLine], start: usize, config: &TableConfig) -> usize {
    if start + config.min_rows > lines.len() {
        return start;
    }

    let tolerance = config.position_tolerance;
    let stop = (start + config.lookahead).min(lines.len());

    // Left edges of each candidate row; a row needs at least two cells
    let mut rows: Vec<Vec<f32>> = vec![];
    for (i, line) in lines.iter().enumerate().take(stop).skip(start) {
        let edges = line.left_edges();
        if edges.len() < 2 {
            if i == start {
                return start;
            }
            break;
        }
        rows.push(edges.into_iter().map(|x| x as f32).collect());
    }

    if rows.len() < config.min_rows {
        return start;
    }

    let distinct: BTreeSet<i32> = rows.iter().flatten().map(|&x| x as i32).collect();
    let distinct: Vec<f32> = distinct.into_iter().map(|x| x as f32).collect();
    let columns = cluster_positions(&distinct, tolerance);
    if columns.len() < 2 {
        return start;
    }

    let near = |x: f32, col: f32| (x - col).abs() <= tolerance;

    // Most columns must be populated in most rows
    let min_usage = rows.len() as f32 * config.column_usage_ratio;
    let well_used = columns
        .iter()
        .filter(|&&col| {
            let appearances = rows
                .iter()
                .filter(|row| row.iter().any(|&x| near(x, col)))
                .count();
            appearances as f32 >= min_usage
        })
        .count();

    if (well_used as f32) < columns.len() as f32 * config.min_well_used_ratio {
        log::trace!(
            "Table candidate at {}: only {}/{} columns well used",
            start,
            well_used,
            columns.len()
        );
        return start;
    }

    // Leading rows whose words sit on the columns
    let aligned = rows
        .iter()
        .take_while(|row| {
            let on_column = row
                .iter()
                .filter(|&&x| columns.iter().any(|&col| near(x, col)))
                .count();
            on_column as f32 / row.len() as f32 >= config.word_alignment_ratio
        })
        .count();

    if aligned < config.min_rows {
        return start;
    }

    // Rows of a table carry similar numbers of cells
    let counts: Vec<f32> = rows[..aligned].iter().map(|row| row.len() as f32).collect();
    let avg = counts.iter().sum::<f32>() / counts.len() as f32;
    let consistent = counts
        .iter()
        .filter(|&&c| (c - avg).abs() <= avg * config.word_count_tolerance)
        .count();

    if consistent as f32 / counts.len() as f32 >= config.word_count_consistency_ratio {
        start + aligned
    } else {
        log::trace!(
            "Table candidate at {}: word counts inconsistent ({}/{})",
            start,
            consistent,
            counts.len()
        );
        start
    }
}

/// Build the table element for a detected region.
///
/// Each line becomes a row of space-joined words; the column count is the
/// number of position clusters over every word in the region.
pub fn extract_table(lines: &[TextLine], region: Range<usize>, config: &TableConfig) -> StructureElement {
    let table_lines = &lines[region];

    let content = table_lines
        .iter()
        .map(TextLine::text)
        .collect::<Vec<_>>()
        .join("\n");

    let all_x: Vec<f32> = table_lines
        .iter()
        .flat_map(|line| line.words.iter().map(|w| w.x as f32))
        .collect();
    let columns = cluster_positions(&all_x, config.position_tolerance).len();

    StructureElement::Table {
        content,
        rows: table_lines.len(),
        columns,
    }
}
