//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the script and report paths,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Arbor layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the editing script (TOML)
    #[arg(help = "Path to the editing script")]
    pub script: String,

    /// Path to the layout report; printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Viewport width the root is centered in, overriding the configuration
    #[arg(long)]
    pub viewport_width: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
