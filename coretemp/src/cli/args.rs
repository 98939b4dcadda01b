//! CLI argument definitions

use crate::analysis::{AnalysisOptions, FitPoints, DEFAULT_CORES, DEFAULT_INTERVAL};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coretemp",
    about = "Interpolate CPU core temperature logs and fit a least-squares trend per core",
    after_help = "\
EXAMPLES:
    coretemp temps.txt                          Write outputCore0.txt .. outputCore3.txt here
    coretemp temps.txt --output-dir reports     Write the reports into ./reports
    coretemp temps.txt --export trends.json     Also export every core as JSON"
)]
pub struct Args {
    /// Temperature log: one line per sample, one reading per core
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Seconds between two samples
    #[arg(long, default_value_t = DEFAULT_INTERVAL)]
    pub interval: NonZeroU32,

    /// Readings per line
    #[arg(long, default_value_t = DEFAULT_CORES, value_parser = parse_core_count)]
    pub cores: usize,

    /// Directory that receives the outputCore<N>.txt reports
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Fit the trend through the final sample too
    #[arg(long)]
    pub include_final_point: bool,

    /// Export every core's analysis as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Analysis tunables selected on the command line
    #[must_use]
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            interval: self.interval,
            cores: self.cores,
            fit_points: if self.include_final_point {
                FitPoints::IncludeFinal
            } else {
                FitPoints::SegmentStarts
            },
        }
    }
}

fn parse_core_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("core count must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
