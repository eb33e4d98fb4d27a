//! Tuning constants for layout reconstruction.
//!
//! Every threshold used by the detectors lives here. The defaults were tuned
//! empirically on scanned business documents; they are not derived from each
//! other, so changing one does not rescale the rest.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Line grouping parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// A word joins the current line when its top edge is within this
    /// fraction of the line's first word height.
    pub line_height_ratio: f32,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            line_height_ratio: 0.5,
        }
    }
}

/// Column segmentation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Horizontal sampling step in pixels.
    pub sample_step: usize,
    /// A sample is a gap when fewer than this fraction of lines cover it.
    pub min_coverage_ratio: f32,
    /// Gap samples closer than this many pixels form one region.
    pub gap_merge_distance: i32,
    /// Gap regions narrower than this fraction of the page width are ignored.
    pub min_gap_width_ratio: f32,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            sample_step: 5,
            min_coverage_ratio: 0.2,
            gap_merge_distance: 10,
            min_gap_width_ratio: 0.1,
        }
    }
}

/// Table detection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Minimum number of rows for a table.
    pub min_rows: usize,
    /// How many lines to inspect from a candidate start.
    pub lookahead: usize,
    /// Pixel tolerance for column alignment.
    pub position_tolerance: f32,
    /// Fraction of rows that must populate a column for it to count as used.
    pub column_usage_ratio: f32,
    /// Fraction of columns that must be well used.
    pub min_well_used_ratio: f32,
    /// Fraction of a row's words that must sit on a column.
    pub word_alignment_ratio: f32,
    /// Allowed deviation of a row's word count from the mean, as a fraction of it.
    pub word_count_tolerance: f32,
    /// Fraction of rows whose word count must be within tolerance.
    pub word_count_consistency_ratio: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_rows: 3,
            lookahead: 10,
            position_tolerance: 15.0,
            column_usage_ratio: 0.8,
            min_well_used_ratio: 0.8,
            word_alignment_ratio: 0.7,
            word_count_tolerance: 0.5,
            word_count_consistency_ratio: 0.7,
        }
    }
}

/// Heading and paragraph classification parameters.
///
/// All ratios are relative to the column's average line height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Lines at least this tall are headings.
    pub heading_ratio: f32,
    /// Level 1 heading threshold.
    pub h1_ratio: f32,
    /// Level 2 heading threshold.
    pub h2_ratio: f32,
    /// Vertical gaps larger than this start a new paragraph.
    pub paragraph_gap_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            heading_ratio: 1.14,
            h1_ratio: 1.8,
            h2_ratio: 1.5,
            paragraph_gap_ratio: 1.5,
        }
    }
}

/// Complete layout analysis configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Line grouping.
    pub line: LineConfig,
    /// Column segmentation.
    pub column: ColumnConfig,
    /// Table detection.
    pub table: TableConfig,
    /// Element classification.
    pub classifier: ClassifierConfig,
}

impl LayoutConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the line grouping parameters.
    pub fn with_line(mut self, line: LineConfig) -> Self {
        self.line = line;
        self
    }

    /// Replace the column segmentation parameters.
    pub fn with_column(mut self, column: ColumnConfig) -> Self {
        self.column = column;
        self
    }

    /// Replace the table detection parameters.
    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    /// Replace the classification parameters.
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the pixel tolerance used for table column alignment.
    pub fn with_table_tolerance(mut self, tolerance: f32) -> Self {
        self.table.position_tolerance = tolerance;
        self
    }

    /// Set the heading thresholds (`heading`, `h2`, `h1`), lowest first.
    pub fn with_heading_ratios(mut self, heading: f32, h2: f32, h1: f32) -> Self {
        self.classifier.heading_ratio = heading;
        self.classifier.h2_ratio = h2;
        self.classifier.h1_ratio = h1;
        self
    }

    /// Check that every constant is in a usable range.
    pub fn validate(&self) -> Result<()> {
        fn ratio(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{} must be in (0, 1], got {}", name, value)))
            }
        }

        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!("{} must be positive, got {}", name, value)))
            }
        }

        positive("line_height_ratio", self.line.line_height_ratio)?;

        if self.column.sample_step == 0 {
            return Err(Error::InvalidConfig("sample_step must be positive".to_string()));
        }
        if self.column.gap_merge_distance < 0 {
            return Err(Error::InvalidConfig("gap_merge_distance must not be negative".to_string()));
        }
        ratio("min_coverage_ratio", self.column.min_coverage_ratio)?;
        ratio("min_gap_width_ratio", self.column.min_gap_width_ratio)?;

        let table = &self.table;
        if table.min_rows < 2 {
            return Err(Error::InvalidConfig("min_rows must be at least 2".to_string()));
        }
        if table.lookahead < table.min_rows {
            return Err(Error::InvalidConfig(format!(
                "lookahead ({}) must not be smaller than min_rows ({})",
                table.lookahead, table.min_rows
            )));
        }
        positive("position_tolerance", table.position_tolerance)?;
        ratio("column_usage_ratio", table.column_usage_ratio)?;
        ratio("min_well_used_ratio", table.min_well_used_ratio)?;
        ratio("word_alignment_ratio", table.word_alignment_ratio)?;
        ratio("word_count_tolerance", table.word_count_tolerance)?;
        ratio("word_count_consistency_ratio", table.word_count_consistency_ratio)?;

        let c = &self.classifier;
        positive("paragraph_gap_ratio", c.paragraph_gap_ratio)?;
        if !(c.heading_ratio > 1.0 && c.heading_ratio <= c.h2_ratio && c.h2_ratio <= c.h1_ratio) {
            return Err(Error::InvalidConfig(format!(
                "heading ratios must satisfy 1 < heading ({}) <= h2 ({}) <= h1 ({})",
                c.heading_ratio, c.h2_ratio, c.h1_ratio
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.table.position_tolerance, 15.0);
        assert_eq!(config.classifier.heading_ratio, 1.14);
        assert_eq!(config.column.sample_step, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LayoutConfig::new()
            .with_table_tolerance(20.0)
            .with_heading_ratios(1.2, 1.6, 2.0);
        assert_eq!(config.table.position_tolerance, 20.0);
        assert_eq!(config.classifier.heading_ratio, 1.2);
        assert_eq!(config.classifier.h2_ratio, 1.6);
        assert_eq!(config.classifier.h1_ratio, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_sample_step_rejected() {
        let config = LayoutConfig::new().with_column(ColumnConfig {
            sample_step: 0,
            ..ColumnConfig::default()
        });
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_unordered_heading_ratios_rejected() {
        let config = LayoutConfig::new().with_heading_ratios(1.6, 1.5, 1.8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let config = LayoutConfig::new().with_table(TableConfig {
            column_usage_ratio: 1.5,
            ..TableConfig::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("column_usage_ratio"));
    }

    #[test]
    fn test_config_serde() {
        let config = LayoutConfig::new().with_table_tolerance(12.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
