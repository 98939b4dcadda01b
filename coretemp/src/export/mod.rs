//! Analysis export functionality
//!
//! This module provides functionality for exporting analysis results to
//! machine-readable formats. Currently supports JSON.

pub mod json;

pub use json::JsonExporter;
