//! Piecewise-linear interpolation between consecutive samples.
//!
//! A series of N samples yields N-1 segments. The same walk collects the
//! [`FitSums`] for the trend line, one point per segment start. The final
//! sample starts no segment, so it is left out of the fit unless
//! [`FitPoints::IncludeFinal`] is requested.

// Timestamps are converted to f64 for the line coefficients
#![allow(clippy::cast_precision_loss)]

use super::least_squares::FitSums;
use crate::domain::Timestamp;
use crate::series::CoreSeries;
use serde::Serialize;
use std::num::NonZeroU32;

/// Which series points feed the least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPoints {
    /// One point per segment start (N-1 points).
    #[default]
    SegmentStarts,
    /// Segment starts plus the final sample (N points).
    IncludeFinal,
}

/// A line `y = c0 + c1·x` valid on `[domain_lo, domain_hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    /// Position of the segment within the series (0-based)
    pub index: usize,
    pub domain_lo: Timestamp,
    pub domain_hi: Timestamp,
    /// Intercept
    pub c0: f64,
    /// Slope
    pub c1: f64,
}

impl Segment {
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.c0 + self.c1 * x
    }
}

/// Segments of one core series plus the sums needed to fit its trend.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    pub segments: Vec<Segment>,
    pub sums: FitSums,
}

/// Interpolate between every adjacent pair of samples in `series`.
///
/// The slope divides by the sampling `interval`, which is the spacing of
/// every pair of positional timestamps.
#[must_use]
pub fn interpolate(series: &CoreSeries, interval: NonZeroU32, fit_points: FitPoints) -> Interpolation {
    let step = f64::from(interval.get());
    let mut segments = Vec::with_capacity(series.len().saturating_sub(1));
    let mut sums = FitSums::default();

    for (index, pair) in series.temperatures.windows(2).enumerate() {
        let (lo, hi) = (series.timestamps[index], series.timestamps[index + 1]);
        let x = lo as f64;

        let c1 = (pair[1] - pair[0]) / step;
        let c0 = pair[0] - c1 * x;
        let segment = Segment { index, domain_lo: lo, domain_hi: hi, c0, c1 };

        // Reconstructed value at the segment start, not the next sample
        sums = sums.with_point(x, segment.eval(x));
        segments.push(segment);
    }

    if fit_points == FitPoints::IncludeFinal {
        if let Some((x, y)) = series.points().last() {
            sums = sums.with_point(x as f64, y);
        }
    }

    Interpolation { segments, sums }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::CoreId;
    use proptest::prelude::*;

    fn series_strategy() -> impl Strategy<Value = (Vec<f64>, u32)> {
        (prop::collection::vec(-40.0f64..120.0, 0..200), 1u32..3600)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// N samples always produce max(N-1, 0) segments
        #[test]
        fn prop_segment_count((temps, secs) in series_strategy()) {
            let s = CoreSeries {
                core: CoreId(0),
                timestamps: (0..temps.len() as u64).map(|i| i * u64::from(secs)).collect(),
                temperatures: temps.clone(),
            };
            let result = interpolate(&s, NonZeroU32::new(secs).unwrap(), FitPoints::default());

            prop_assert_eq!(result.segments.len(), temps.len().saturating_sub(1));
            prop_assert_eq!(result.sums.n, temps.len().saturating_sub(1));
        }

        /// Each segment passes through both of its endpoints
        #[test]
        fn prop_segment_continuity((temps, secs) in series_strategy()) {
            let s = CoreSeries {
                core: CoreId(0),
                timestamps: (0..temps.len() as u64).map(|i| i * u64::from(secs)).collect(),
                temperatures: temps.clone(),
            };
            let result = interpolate(&s, NonZeroU32::new(secs).unwrap(), FitPoints::default());

            for seg in &result.segments {
                let start = seg.eval(seg.domain_lo as f64);
                let end = seg.eval(seg.domain_hi as f64);
                let expected_start = temps[seg.index];
                let expected_end = temps[seg.index + 1];
                prop_assert!((start - expected_start).abs() <= 1e-9 * expected_start.abs().max(1.0));
                prop_assert!((end - expected_end).abs() <= 1e-9 * expected_end.abs().max(1.0));
            }
        }
    }
}
