//! Presentation settings for the CLI
//!
//! Layered with figment: built-in defaults, then an optional TOML file.
//! Core policy limits (size ceiling, preview width) are not configurable here.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
const APP_CONFIG_DIR: &str = "filemod";

/// File name of the configuration file
const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PreviewConfig {
    /// Lines shown when previewing the input file
    pub max_lines: usize,
    /// Lines shown when previewing the written file
    pub modified_max_lines: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub color_enabled: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_lines: filemod_core::DEFAULT_PREVIEW_LINES,
            modified_max_lines: 15,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

impl AppConfig {
    /// Reject settings that would make previews useless
    pub fn validate(&self) -> Result<()> {
        if self.preview.max_lines == 0 {
            anyhow::bail!("preview.max_lines must be greater than 0");
        }
        if self.preview.modified_max_lines == 0 {
            anyhow::bail!("preview.modified_max_lines must be greater than 0");
        }
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Locates and loads the configuration file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a ConfigManager using the platform config directory
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager for an explicit file
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `~/.config/filemod/config.toml` on Linux, the platform equivalent elsewhere
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(APP_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(".filemod"))
            .join(CONFIG_FILE)
    }

    /// Load configuration with layered priority: File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        let config: AppConfig = figment.extract().with_context(|| {
            format!(
                "Failed to load configuration from {}",
                self.config_path.display()
            )
        })?;
        config.validate()?;
        Ok(config)
    }
}
