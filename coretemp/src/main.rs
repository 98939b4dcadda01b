//! # coretemp - Main Entry Point
//!
//! Reads the temperature log named on the command line, writes one text
//! report per core and optionally a JSON export.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use coretemp::analysis::analyze_log;
use coretemp::cli::Args;
use coretemp::export::JsonExporter;
use coretemp::report::{write_reports, DirectorySink};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();

    // Usage errors exit through clap with status 2
    let args = Args::parse();

    std::process::exit(match run(&args) {
        Ok(0) => EXIT_SUCCESS,
        Ok(_) => EXIT_ERROR,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

/// Run the pipeline, returning the number of cores that could not be reported.
fn run(args: &Args) -> Result<usize> {
    let options = args.analysis_options();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;
    let analysis = analyze_log(BufReader::new(file), &options)
        .with_context(|| format!("Failed to analyze {}", args.input.display()))?;

    if !args.quiet {
        println!("coretemp v{}", env!("CARGO_PKG_VERSION"));
        println!("input: {}", args.input.display());
        println!("samples: {} every {}s", analysis.samples, options.interval);
    }

    for outcome in &analysis.cores {
        if let Err(e) = &outcome.result {
            eprintln!("error: {}: {e}", outcome.core);
        }
    }

    let mut sink = DirectorySink::new(&args.output_dir);
    write_reports(&analysis, &mut sink).context("Failed to write core reports")?;

    if !args.quiet {
        for path in sink.written() {
            println!("saved: {}", path.display());
        }
    }

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path).with_context(|| {
            format!("Failed to create export file: {}", export_path.display())
        })?;
        JsonExporter::new(&analysis, options.interval.get())
            .export(BufWriter::new(file))
            .context("Failed to export analysis")?;

        info!("Exported analysis to {}", export_path.display());
        if !args.quiet {
            println!("export: {}", export_path.display());
        }
    }

    Ok(analysis.failure_count())
}
