//! Gap-based column detection.
//!
//! The page is sampled left to right and each sample counts how many lines
//! cover it. Runs of sparsely covered samples form gap regions; the first
//! region wide enough becomes the separator between a left and a right column.
//!
//! Only one separator is ever chosen. A page with three or more genuine
//! columns is folded into two buckets by whichever side of that separator each
//! line's center falls on.

use crate::config::ColumnConfig;
use crate::layout::text_line::TextLine;

/// A horizontal band of the page with low text coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapRegion {
    /// First gap sample (inclusive)
    pub start: i32,
    /// Last gap sample (inclusive)
    pub end: i32,
}

impl GapRegion {
    /// Width between the first and last sample.
    pub fn width(&self) -> i32 {
        self.end - self.start
    }

    /// Midpoint, used as the column separator.
    pub fn midpoint(&self) -> f32 {
        (self.start + self.end) as f32 / 2.0
    }
}

/// Split lines into reading columns using default parameters.
///
/// See [`detect_columns_with`].
pub fn detect_columns(lines: &[TextLine]) -> Vec<Vec<TextLine>> {
    detect_columns_with(lines, &ColumnConfig::default())
}

/// Split lines into at most two reading columns.
///
/// Returns an empty vector for no lines, a single column when no gap region
/// survives, and otherwise the non-empty left and right columns. Line order is
/// preserved within each column.
pub fn detect_columns_with(lines: &[TextLine], config: &ColumnConfig) -> Vec<Vec<TextLine>> {
    if lines.is_empty() {
        return vec![];
    }

    let regions = find_gap_regions(lines, config);
    let Some(first) = regions.first() else {
        log::debug!("Column detection: no gap region, single column of {} lines", lines.len());
        return vec![lines.to_vec()];
    };

    let separator = first.midpoint();
    let (left, right): (Vec<TextLine>, Vec<TextLine>) =
        lines.iter().cloned().partition(|line| line.center_x() < separator);

    log::debug!(
        "Column detection: separator x={:.1} ({} gap regions), left={} right={}",
        separator,
        regions.len(),
        left.len(),
        right.len()
    );

    if left.is_empty() || right.is_empty() {
        return vec![lines.to_vec()];
    }
    vec![left, right]
}

/// Find gap regions wide enough to separate columns, left to right.
pub fn find_gap_regions(lines: &[TextLine], config: &ColumnConfig) -> Vec<GapRegion> {
    if lines.is_empty() {
        return vec![];
    }

    let extents: Vec<_> = lines.iter().map(TextLine::bbox).collect();
    let page_left = extents.iter().map(|r| r.left()).min().unwrap_or(0);
    let page_right = extents.iter().map(|r| r.right()).max().unwrap_or(0);
    let page_width = (page_right - page_left) as f32;

    let min_coverage = lines.len() as f32 * config.min_coverage_ratio;
    let gaps: Vec<i32> = (page_left..page_right)
        .step_by(config.sample_step.max(1))
        .filter(|&x| {
            let coverage = extents.iter().filter(|r| r.spans_x(x)).count();
            (coverage as f32) < min_coverage
        })
        .collect();

    let Some((&first, rest)) = gaps.split_first() else {
        return vec![];
    };

    let min_width = page_width * config.min_gap_width_ratio;
    let mut regions = vec![];
    let mut current = GapRegion {
        start: first,
        end: first,
    };

    for &x in rest {
        if x - current.end <= config.gap_merge_distance {
            current.end = x;
        } else {
            if current.width() as f32 >= min_width {
                regions.push(current);
            }
            current = GapRegion { start: x, end: x };
        }
    }
    if current.width() as f32 >= min_width {
        regions.push(current);
    }

    log::trace!(
        "Gap analysis: page [{}, {}), {} gap samples, {} regions",
        page_left,
        page_right,
        gaps.len(),
        regions.len()
    );
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::word::Word;

    fn line(x: i32, y: i32, width: i32) -> TextLine {
        TextLine::new(vec![Word::new("text", x, y, width, 20, 0.9)])
    }

    #[test]
    fn test_empty_lines() {
        assert!(detect_columns(&[]).is_empty());
    }

    #[test]
    fn test_single_column_full_width() {
        let lines: Vec<TextLine> = (0..5).map(|i| line(0, i * 30, 500)).collect();
        let columns = detect_columns(&lines);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].len(), 5);
    }

    #[test]
    fn test_two_columns_split_on_gap() {
        let mut lines = vec![];
        for i in 0..4 {
            lines.push(line(0, i * 30, 200));
            lines.push(line(400, i * 30, 200));
        }
        let columns = detect_columns(&lines);
        assert_eq!(columns.len(), 2);
        assert!(columns[0].iter().all(|l| l.min_x() == 0));
        assert!(columns[1].iter().all(|l| l.min_x() == 400));
        // order within a column is preserved
        let ys: Vec<i32> = columns[1].iter().map(|l| l.top()).collect();
        assert_eq!(ys, vec![0, 30, 60, 90]);
    }

    #[test]
    fn test_narrow_gap_is_ignored() {
        // gap of 30px on a 600px page is below 10% of the width
        let mut lines = vec![];
        for i in 0..4 {
            lines.push(line(0, i * 30, 285));
            lines.push(line(315, i * 30, 285));
        }
        assert_eq!(detect_columns(&lines).len(), 1);
    }

    #[test]
    fn test_gap_region_geometry() {
        let mut lines = vec![];
        for i in 0..4 {
            lines.push(line(0, i * 30, 200));
            lines.push(line(400, i * 30, 200));
        }
        let regions = find_gap_regions(&lines, &ColumnConfig::default());
        assert_eq!(regions.len(), 1);
        // samples at 205..=395 are uncovered (200 and 400 touch the extents)
        assert_eq!(regions[0], GapRegion { start: 205, end: 395 });
        assert_eq!(regions[0].midpoint(), 300.0);
    }

    #[test]
    fn test_one_sided_split_falls_back_to_single_column() {
        // The wide line keeps coverage above zero, but nine narrow lines leave
        // 305..=995 below 20%; every line center lies left of the separator
        let mut lines = vec![line(0, 0, 1000)];
        for i in 1..10 {
            lines.push(line(0, i * 30, 300));
        }
        let regions = find_gap_regions(&lines, &ColumnConfig::default());
        assert_eq!(regions, vec![GapRegion { start: 305, end: 995 }]);

        let columns = detect_columns(&lines);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].len(), 10);
    }

    #[test]
    fn test_three_columns_fold_into_two() {
        let mut lines = vec![];
        for i in 0..3 {
            lines.push(line(0, i * 30, 150));
            lines.push(line(300, i * 30, 150));
            lines.push(line(600, i * 30, 150));
        }
        let columns = detect_columns(&lines);
        // The first gap separates the left column from everything else
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 3);
        assert_eq!(columns[1].len(), 6);
    }
}
