//! Result series produced by the projectors.

use serde::{Deserialize, Serialize};

/// One computed result for a single input value.
///
/// All linear fields are in the caller's working unit. In forward mode
/// `input` and `agl` coincide (the flying height drove the row); in
/// inverse mode `input` is the required pixel resolution and
/// `pixel_resolution` echoes it while `agl` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// The driving input value for this row.
    pub input: f64,
    /// Flying height above ground level.
    pub agl: f64,
    /// Ground-projected footprint width (horizontal IFOV).
    pub ifov_x: f64,
    /// Ground-projected footprint height (vertical IFOV).
    pub ifov_y: f64,
    /// Ground distance per sensor pixel, averaged across the X and Y axes.
    pub pixel_resolution: f64,
}

/// Ordered sequence of projection results, one row per input value.
///
/// Rows are sorted ascending by the driving input (AGL in forward mode,
/// required resolution in inverse mode) regardless of the order the
/// inputs arrived in. Duplicate inputs yield identical, independently
/// computed rows. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSeries {
    rows: Vec<ResultRow>,
}

impl ResultSeries {
    /// Wrap computed rows. The projectors are responsible for having
    /// sorted the driving inputs before computing.
    pub(crate) fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// All rows in ascending driving-input order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of result rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the input list was empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flying heights, one per row.
    pub fn agl_values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.agl).collect()
    }

    /// Averaged pixel resolutions, one per row.
    pub fn pixel_resolutions(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.pixel_resolution).collect()
    }

    /// Horizontal IFOV values, one per row.
    pub fn ifov_horizontal(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.ifov_x).collect()
    }

    /// Vertical IFOV values, one per row.
    pub fn ifov_vertical(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.ifov_y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(input: f64) -> ResultRow {
        ResultRow {
            input,
            agl: input,
            ifov_x: input * 2.0,
            ifov_y: input * 1.5,
            pixel_resolution: input / 100.0,
        }
    }

    #[test]
    fn test_accessors() {
        let series = ResultSeries::new(vec![sample_row(50.0), sample_row(100.0)]);
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.agl_values(), vec![50.0, 100.0]);
        assert_eq!(series.pixel_resolutions(), vec![0.5, 1.0]);
        assert_eq!(series.ifov_horizontal(), vec![100.0, 200.0]);
        assert_eq!(series.ifov_vertical(), vec![75.0, 150.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = ResultSeries::new(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.agl_values().is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = ResultSeries::new(vec![sample_row(75.0)]);
        let json = serde_json::to_string(&original).unwrap();
        let recovered: ResultSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(original, recovered);
    }
}
