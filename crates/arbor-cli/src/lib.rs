//! CLI logic for the Arbor layout tool.
//!
//! The CLI stands in for a diagram host: it replays an editing script
//! against a fresh graph and writes the resulting layout, with a color per
//! depth level, as a plain-text report.

pub mod config;
pub mod error;
pub mod error_adapter;
pub mod report;
pub mod script;

mod args;

pub use args::Args;
pub use error::CliError;
pub use error_adapter::ErrorAdapter;

use std::fs;

use log::info;

use script::Script;

/// Run the Arbor CLI application
///
/// Loads the configuration, replays the script and writes the layout
/// report to the output file, or to stdout when no output is given.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script parsing errors
/// - The first script step the engine rejects
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(script_path = args.script; "Processing script");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(width) = args.viewport_width {
        app_config = app_config.with_viewport_width(width);
    }
    let palette = app_config.style().palette()?;

    let source = fs::read_to_string(&args.script)?;
    let script = Script::parse(&source)?;
    let graph = script.replay(app_config.layout().clone())?;
    info!(nodes_count = graph.len(); "Script replayed");

    let report = report::render(&graph, &palette);
    match &args.output {
        Some(path) => {
            fs::write(path, report)?;
            info!(output_file = path; "Layout report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}
