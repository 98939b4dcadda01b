//! Structured error types for coretemp
//!
//! Using thiserror for automatic Display implementation and error chaining.

use super::types::CoreId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A token on `line` (1-based) is not a number.
    #[error("line {line}: invalid temperature reading {token:?}")]
    Parse { line: usize, token: String },

    /// Sample `line` (0-based) carries the wrong number of readings.
    #[error("sample {line}: expected {expected} readings, found {actual}")]
    Shape { line: usize, expected: usize, actual: usize },

    /// The least-squares denominator is zero (fewer than two distinct x values).
    #[error("least-squares fit is degenerate over {points} point(s)")]
    DegenerateFit { points: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write report for {core}: {source}")]
    ReportWriteFailed {
        core: CoreId,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
