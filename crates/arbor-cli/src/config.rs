//! Configuration types and file loading for the CLI
//!
//! [`AppConfig`] groups the engine's [`LayoutConfig`] with the
//! [`StyleConfig`] the CLI uses to color its report. Configuration is read
//! from TOML, searched for in several locations (explicit path, local
//! directory, system directory).

use std::{fs, path::Path};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;

use arbor::config::LayoutConfig;
use arbor_core::palette::Palette;

use crate::error::{CliError, ConfigError};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the viewport width of the layout section.
    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.layout = self.layout.with_viewport_width(width);
        self
    }
}

/// Styling for the layout report.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Level colors as CSS color strings; the default palette is used when unset.
    #[serde(default)]
    palette: Option<Vec<String>>,
}

impl StyleConfig {
    /// Creates a style section with an explicit palette.
    pub fn with_palette(palette: Vec<String>) -> Self {
        Self {
            palette: Some(palette),
        }
    }

    /// Returns the parsed level [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is empty or contains a
    /// string that is not a valid CSS color.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        match &self.palette {
            Some(entries) => Ok(Palette::from_strings(entries)?),
            None => Ok(Palette::default()),
        }
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (arbor/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("arbor/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "arbor", "arbor") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, CliError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    // Surface palette problems at load time rather than when reporting.
    config.style.palette()?;
    Ok(config)
}
