//! Error types for the Arbor CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use arbor::GraphError;
use arbor_core::palette::PaletteError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

/// The main error type for CLI runs.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse script: {0}")]
    Script(String),

    #[error("Step {step} failed: {source}")]
    Step {
        /// One-based position of the failing step in the script.
        step: usize,
        source: GraphError,
    },
}
