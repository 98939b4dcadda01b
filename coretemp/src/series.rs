//! Temperature log data models
//!
//! This module turns the raw text log into timestamped samples and projects
//! them into one series per CPU core.

use crate::domain::{AnalysisError, CoreId, Timestamp};
use log::debug;
use std::io::BufRead;
use std::num::NonZeroU32;

/// One line of the temperature log
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Seconds since the first sample (`index * interval`)
    pub timestamp: Timestamp,
    /// One reading per core, in column order
    pub readings: Vec<f64>,
}

/// A single core's readings over time (immutable once projected)
#[derive(Debug, Clone, PartialEq)]
pub struct CoreSeries {
    pub core: CoreId,
    pub timestamps: Vec<Timestamp>,
    pub temperatures: Vec<f64>,
}

impl CoreSeries {
    /// Number of samples in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Iterate over `(timestamp, temperature)` pairs
    pub fn points(&self) -> impl Iterator<Item = (Timestamp, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.temperatures.iter().copied())
    }
}

/// Parse a temperature log into timestamped samples.
///
/// Every non-blank line holds whitespace-separated decimal readings. Blank
/// lines are skipped and do not advance the clock. The first token that is
/// not a number aborts the whole parse.
///
/// # Errors
/// Returns [`AnalysisError::Parse`] naming the 1-based line and offending
/// token, or [`AnalysisError::Io`] if the reader fails.
pub fn parse_samples<R: BufRead>(
    reader: R,
    interval: NonZeroU32,
) -> Result<Vec<Sample>, AnalysisError> {
    let step = Timestamp::from(interval.get());
    let mut samples = Vec::new();
    let mut timestamp: Timestamp = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let readings = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| AnalysisError::Parse {
                    line: index + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        samples.push(Sample { timestamp, readings });
        timestamp += step;
    }

    debug!("Parsed {} samples at {}s interval", samples.len(), step);
    Ok(samples)
}

/// Split samples into one series per core.
///
/// Every sample must carry exactly `cores` readings.
///
/// # Errors
/// Returns [`AnalysisError::Shape`] for the first sample whose reading count
/// differs from `cores`.
pub fn project_cores(samples: &[Sample], cores: usize) -> Result<Vec<CoreSeries>, AnalysisError> {
    if let Some((line, sample)) =
        samples.iter().enumerate().find(|(_, s)| s.readings.len() != cores)
    {
        return Err(AnalysisError::Shape { line, expected: cores, actual: sample.readings.len() });
    }

    let timestamps: Vec<Timestamp> = samples.iter().map(|s| s.timestamp).collect();

    Ok((0..cores)
        .map(|k| CoreSeries {
            core: CoreId(k),
            timestamps: timestamps.clone(),
            temperatures: samples.iter().map(|s| s.readings[k]).collect(),
        })
        .collect())
}
