//! CLI logic for the dmnx model marshaller.
//!
//! This module contains the core CLI logic: load a model document, flatten
//! it into one definitions document and write the result as a TOML report.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use dmnx::{DmnxError, ModelBuilder};

/// Run the dmnx CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DmnxError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed model documents
/// - Inconsistent model graphs
/// - Report serialization errors
pub fn run(args: &Args) -> Result<(), DmnxError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing model"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = ModelBuilder::new(app_config);
    let mut graph = builder.load(&source)?;
    let definitions = builder.marshal(&mut graph)?;
    let report = builder.report(&graph, &definitions)?;

    fs::write(&args.output, report)?;

    info!(output_file = args.output; "Report exported successfully");

    Ok(())
}
