//! # coretemp - CPU Core Temperature Trend Analysis
//!
//! coretemp reads a log of periodic CPU core temperature samples, rebuilds the
//! piecewise-linear curve between consecutive samples for each core, and fits
//! a least-squares trend line to it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   series     │──▶│   analysis   │──▶│    report    │──▶│  ReportSink  │
//! │ parse/project│   │ interp + OLS │   │ text render  │   │ (files, map) │
//! └──────────────┘   └──────┬───────┘   └──────────────┘   └──────────────┘
//!                           │
//!                           ▼
//!                    ┌──────────────┐
//!                    │    export    │
//!                    │   (JSON)     │
//!                    └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`series`]: Parse the text log into timestamped samples and split them
//!   into one series per core
//! - [`analysis`]: Interpolation segments and the least-squares trend line
//! - [`report`]: Per-core text reports and the sinks that receive them
//! - [`export`]: JSON export of a whole analysis
//! - [`cli`]: Command-line argument parsing and configuration
//! - [`domain`]: Core domain types (`CoreId`) and errors
//!
//! ## Input Format
//!
//! One line per sampling interval, one whitespace-separated reading per core,
//! oldest first. Timestamps are positional: line `k` is `k * interval`
//! seconds after the first.
//!
//! ## Typical Usage
//!
//! ```bash
//! # Write outputCore0.txt .. outputCore3.txt into the current directory
//! coretemp temps.txt
//!
//! # Eight cores sampled every 10 seconds, plus a JSON export
//! coretemp temps.txt --cores 8 --interval 10 --export trends.json
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod export;
pub mod report;
pub mod series;
