//! Trend analysis for temperature logs
//!
//! This module contains the pure numeric pipeline, separated from file
//! handling and report formatting:
//!
//! ```text
//! text log ──► parse_samples ──► project_cores ──► interpolate ──► fit_least_squares
//!                                    (per core)      (segments)      (trend line)
//! ```

pub mod interpolation;
pub mod least_squares;

pub use interpolation::{interpolate, FitPoints, Interpolation, Segment};
pub use least_squares::{fit_least_squares, FitSums, TrendLine};

use crate::domain::{AnalysisError, CoreId};
use crate::series::{parse_samples, project_cores, CoreSeries};
use log::{debug, info};
use std::io::BufRead;
use std::num::NonZeroU32;

/// Default seconds between two samples
pub const DEFAULT_INTERVAL: NonZeroU32 = match NonZeroU32::new(30) {
    Some(interval) => interval,
    None => panic!("default interval must be non-zero"),
};

/// Default number of readings per line
pub const DEFAULT_CORES: usize = 4;

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub interval: NonZeroU32,
    pub cores: usize,
    pub fit_points: FitPoints,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            cores: DEFAULT_CORES,
            fit_points: FitPoints::default(),
        }
    }
}

/// Interpolation segments and trend line of one core.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreAnalysis {
    pub core: CoreId,
    pub segments: Vec<Segment>,
    pub trend: TrendLine,
}

/// Result for a single core; failures stay local to their core.
#[derive(Debug)]
pub struct CoreOutcome {
    pub core: CoreId,
    pub result: Result<CoreAnalysis, AnalysisError>,
}

/// Analysis of a whole log.
#[derive(Debug)]
pub struct LogAnalysis {
    /// Number of samples parsed
    pub samples: usize,
    pub cores: Vec<CoreOutcome>,
}

impl LogAnalysis {
    /// Number of cores whose analysis failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.cores.iter().filter(|c| c.result.is_err()).count()
    }
}

/// Interpolate one core's series and fit its trend line.
///
/// # Errors
/// Returns [`AnalysisError::DegenerateFit`] when the series is too short (or
/// too flat in x) for a least-squares fit.
pub fn analyze_core(
    series: &CoreSeries,
    options: &AnalysisOptions,
) -> Result<CoreAnalysis, AnalysisError> {
    let Interpolation { segments, sums } = interpolate(series, options.interval, options.fit_points);
    let trend = fit_least_squares(&sums)?;

    debug!(
        "{}: {} segments, trend {:.4} + {:.4}x over {} points",
        series.core,
        segments.len(),
        trend.c0,
        trend.c1,
        sums.n
    );

    Ok(CoreAnalysis { core: series.core, segments, trend })
}

/// Parse a temperature log and analyze every core.
///
/// Parse and shape errors abort the run; fit errors are recorded per core.
///
/// # Errors
/// Returns [`AnalysisError::Parse`], [`AnalysisError::Shape`] or
/// [`AnalysisError::Io`] if the log cannot be turned into core series.
pub fn analyze_log<R: BufRead>(
    reader: R,
    options: &AnalysisOptions,
) -> Result<LogAnalysis, AnalysisError> {
    let samples = parse_samples(reader, options.interval)?;
    let series = project_cores(&samples, options.cores)?;
    info!("Loaded {} samples across {} cores", samples.len(), series.len());

    let cores = series
        .iter()
        .map(|s| CoreOutcome { core: s.core, result: analyze_core(s, options) })
        .collect();

    Ok(LogAnalysis { samples: samples.len(), cores })
}
