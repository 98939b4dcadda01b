//! Per-core text reports
//!
//! A report is rendered completely in memory and only then handed to a
//! [`ReportSink`], so a core either gets its whole report or nothing.
//!
//! ```text
//! Core 0:
//! 0 <= x < 30; y_0 = 30.0000 + 0.0667x; interpolation
//! 30 <= x < 60; y_1 = 30.0000 + 0.0667x; interpolation
//! 30.0000 + 0.0667x
//! ```

use crate::analysis::{CoreAnalysis, LogAnalysis};
use crate::domain::{CoreId, ExportError};
use log::{info, warn};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Render the text report for one analyzed core.
#[must_use]
pub fn render_report(analysis: &CoreAnalysis) -> String {
    let mut out = format!("{}:\n", analysis.core);

    for seg in &analysis.segments {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} <= x < {}; y_{} = {:.4} + {:.4}x; interpolation",
            seg.domain_lo, seg.domain_hi, seg.index, seg.c0, seg.c1
        );
    }

    let _ = writeln!(out, "{:.4} + {:.4}x", analysis.trend.c0, analysis.trend.c1);
    out
}

/// Destination for finished per-core reports.
pub trait ReportSink {
    /// Store the complete report for `core`.
    ///
    /// # Errors
    /// Returns any I/O error raised by the destination.
    fn write_report(&mut self, core: CoreId, report: &str) -> io::Result<()>;
}

/// Collects reports in memory, keyed by core.
impl ReportSink for BTreeMap<CoreId, String> {
    fn write_report(&mut self, core: CoreId, report: &str) -> io::Result<()> {
        self.insert(core, report.to_string());
        Ok(())
    }
}

/// Writes each report to `outputCore<k>.txt` inside a directory.
///
/// Reports go to a temporary file in the same directory that is renamed over
/// the target once complete, so a failed write leaves no truncated report.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), written: Vec::new() }
    }

    /// File that receives the report for `core`
    #[must_use]
    pub fn path_for(&self, core: CoreId) -> PathBuf {
        self.dir.join(format!("outputCore{}.txt", core.0))
    }

    /// Files written so far, in write order
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for DirectorySink {
    fn write_report(&mut self, core: CoreId, report: &str) -> io::Result<()> {
        let path = self.path_for(core);
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(report.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&path).map_err(|e| e.error)?;
        self.written.push(path);
        Ok(())
    }
}

/// Render and store the report of every core that analyzed successfully.
///
/// Failed cores are logged and skipped; no partial report is written for
/// them. Returns the number of reports written.
///
/// # Errors
/// Returns [`ExportError::ReportWriteFailed`] naming the core whose report
/// could not be stored.
pub fn write_reports<S: ReportSink>(analysis: &LogAnalysis, sink: &mut S) -> Result<usize, ExportError> {
    let mut written = 0;

    for outcome in &analysis.cores {
        match &outcome.result {
            Ok(core) => {
                sink.write_report(outcome.core, &render_report(core))
                    .map_err(|source| ExportError::ReportWriteFailed { core: outcome.core, source })?;
                written += 1;
            }
            Err(e) => warn!("{}: no report written ({e})", outcome.core),
        }
    }

    info!("Wrote {written} of {} core reports", analysis.cores.len());
    Ok(written)
}
