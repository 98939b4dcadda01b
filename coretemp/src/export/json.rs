//! JSON export of a whole log analysis

use crate::analysis::{LogAnalysis, Segment, TrendLine};
use crate::domain::{CoreId, ExportError};
use serde::Serialize;
use std::io::Write;

/// One core's entry in the export
#[derive(Debug, Serialize)]
struct CoreEntry<'a> {
    core: CoreId,
    /// Interpolation segments (empty when the fit failed)
    segments: &'a [Segment],
    /// Least-squares trend, `null` when the fit failed
    trend: Option<TrendLine>,
    /// Failure reason, `null` on success
    error: Option<String>,
}

/// Export document container
#[derive(Debug, Serialize)]
struct AnalysisDocument<'a> {
    /// Seconds between samples
    interval: u32,
    /// Number of samples parsed
    samples: usize,
    cores: Vec<CoreEntry<'a>>,
}

/// JSON exporter for a whole log analysis
pub struct JsonExporter<'a> {
    analysis: &'a LogAnalysis,
    interval: u32,
}

impl<'a> JsonExporter<'a> {
    /// Create an exporter for `analysis`, sampled every `interval` seconds
    pub fn new(analysis: &'a LogAnalysis, interval: u32) -> Self {
        Self { analysis, interval }
    }

    fn document(&self) -> AnalysisDocument<'a> {
        let analysis = self.analysis;
        let cores = analysis
            .cores
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(core) => CoreEntry {
                    core: outcome.core,
                    segments: &core.segments,
                    trend: Some(core.trend),
                    error: None,
                },
                Err(e) => CoreEntry {
                    core: outcome.core,
                    segments: &[],
                    trend: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        AnalysisDocument { interval: self.interval, samples: analysis.samples, cores }
    }

    /// Export the analysis as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn export<W: Write>(&self, mut writer: W) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut writer, &self.document())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
