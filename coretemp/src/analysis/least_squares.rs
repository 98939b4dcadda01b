//! Ordinary least-squares trend fitting.
//!
//! The fit consumes a [`FitSums`] aggregate rather than raw points, so the
//! interpolation pass can build it in the same walk over the series.
//!
//! ```text
//! c1 = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
//! c0 = Σy/n − (Σx/n)·c1
//! ```

// Point counts are converted to f64 for the closed-form solution
#![allow(clippy::cast_precision_loss)]

/// Relative size below which `n·Σx² − (Σx)²` counts as zero.
const DEGENERATE_TOLERANCE: f64 = 1e-12;

use crate::domain::AnalysisError;
use serde::Serialize;

/// Running sums over the points a trend line is fit to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FitSums {
    /// Number of points summed.
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
}

impl FitSums {
    /// Return the sums extended by one point.
    #[must_use]
    pub fn with_point(self, x: f64, y: f64) -> Self {
        Self {
            n: self.n + 1,
            sum_x: self.sum_x + x,
            sum_y: self.sum_y + y,
            sum_xy: self.sum_xy + x * y,
            sum_x2: self.sum_x2 + x * x,
        }
    }

    /// Sum an arbitrary set of points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(Self::default(), |sums, (x, y)| sums.with_point(x, y))
    }
}

/// A line `y = c0 + c1·x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    /// Intercept
    pub c0: f64,
    /// Slope
    pub c1: f64,
}

impl TrendLine {
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x
    }
}

/// Fit a trend line to the points summarised by `sums`.
///
/// # Errors
/// Returns [`AnalysisError::DegenerateFit`] when there are no points or the
/// denominator vanishes (a single point, or every x identical).
pub fn fit_least_squares(sums: &FitSums) -> Result<TrendLine, AnalysisError> {
    let degenerate = AnalysisError::DegenerateFit { points: sums.n };
    if sums.n == 0 {
        return Err(degenerate);
    }

    let n = sums.n as f64;
    let denominator = n * sums.sum_x2 - sums.sum_x * sums.sum_x;
    // Cancellation leaves rounding noise proportional to n·Σx²
    if denominator.abs() <= DEGENERATE_TOLERANCE * (n * sums.sum_x2).abs()
        || !denominator.is_finite()
    {
        return Err(degenerate);
    }

    let c1 = (n * sums.sum_xy - sums.sum_x * sums.sum_y) / denominator;
    let c0 = sums.sum_y / n - (sums.sum_x / n) * c1;

    Ok(TrendLine { c0, c1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_fit_perfect_line() {
        // y = 2x + 1
        let sums = FitSums::from_points([(0.0, 1.0), (1.0, 3.0), (2.0, 5.0), (3.0, 7.0)]);
        let line = fit_least_squares(&sums).unwrap();

        assert_close(line.c1, 2.0);
        assert_close(line.c0, 1.0);
    }

    #[test]
    fn test_fit_horizontal_line() {
        let sums = FitSums::from_points([(0.0, 45.5), (30.0, 45.5), (60.0, 45.5)]);
        let line = fit_least_squares(&sums).unwrap();

        assert_close(line.c1, 0.0);
        assert_close(line.c0, 45.5);
    }

    #[test]
    fn test_fit_two_points_from_log() {
        let sums = FitSums::from_points([(0.0, 30.0), (30.0, 32.0)]);
        let line = fit_least_squares(&sums).unwrap();

        assert_close(line.c1, 2.0 / 30.0);
        assert_close(line.c0, 30.0);
    }

    #[test]
    fn test_fit_noisy_data() {
        let sums = FitSums::from_points([
            (0.0, 0.1),
            (1.0, 1.05),
            (2.0, 1.98),
            (3.0, 3.02),
            (4.0, 3.95),
        ]);
        let line = fit_least_squares(&sums).unwrap();

        assert!((line.c1 - 1.0).abs() < 0.1);
        assert!(line.c0.abs() < 0.1);
    }

    #[test]
    fn test_fit_no_points_is_degenerate() {
        let err = fit_least_squares(&FitSums::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateFit { points: 0 }));
    }

    #[test]
    fn test_fit_single_point_is_degenerate() {
        let sums = FitSums::from_points([(30.0, 50.0)]);
        let err = fit_least_squares(&sums).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateFit { points: 1 }));
    }

    #[test]
    fn test_fit_identical_x_is_degenerate() {
        let sums = FitSums::from_points([(60.0, 40.0), (60.0, 41.0), (60.0, 42.0)]);
        assert!(fit_least_squares(&sums).is_err());
    }

    #[test]
    fn test_fit_identical_fractional_x_is_degenerate() {
        // n·Σx² − (Σx)² rounds to a small non-zero value here
        let sums = FitSums::from_points([(100_000.1, 40.0), (100_000.1, 41.0), (100_000.1, 42.0)]);
        let err = fit_least_squares(&sums).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateFit { points: 3 }));
    }

    #[test]
    fn test_fit_all_zero_x_is_degenerate() {
        let sums = FitSums::from_points([(0.0, 40.0), (0.0, 41.0)]);
        assert!(fit_least_squares(&sums).is_err());
    }

    #[test]
    fn test_fit_long_log_is_not_degenerate() {
        // A day of samples every 30s
        let sums = FitSums::from_points((0..2880u32).map(|i| (f64::from(i * 30), 45.0)));
        let line = fit_least_squares(&sums).unwrap();
        assert_close(line.c1, 0.0);
        assert_close(line.c0, 45.0);
    }

    #[test]
    fn test_with_point_accumulates() {
        let sums = FitSums::default().with_point(2.0, 3.0).with_point(4.0, 5.0);

        assert_eq!(sums.n, 2);
        assert_close(sums.sum_x, 6.0);
        assert_close(sums.sum_y, 8.0);
        assert_close(sums.sum_xy, 26.0);
        assert_close(sums.sum_x2, 20.0);
    }

    #[test]
    fn test_trend_line_eval() {
        let line = TrendLine { c0: 30.0, c1: 0.5 };
        assert_close(line.eval(10.0), 35.0);
    }
}
