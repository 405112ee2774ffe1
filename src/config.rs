//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/railyard/railyard.toml`
//! 3. Local config: `<dir>/.railyard.toml`
//! 4. Environment variables: `RAILYARD_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for railyard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Layout used by `play` when none is given on the command line
    pub default_layout: Option<PathBuf>,
    /// Prompt printed before each command is read
    pub prompt: String,
    /// Print locomotive and destination counts after each command
    pub show_counts: bool,
    /// Colored status output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_layout: None,
            prompt: Self::DEFAULT_PROMPT.into(),
            show_counts: true,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_layout: Option<PathBuf>,
    pub prompt: Option<String>,
    pub show_counts: Option<bool>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for railyard.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "railyard").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("railyard.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".railyard.toml")
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    pub const DEFAULT_PROMPT: &'static str = "What is your next command?";

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_layout: overlay
                .default_layout
                .clone()
                .or_else(|| self.default_layout.clone()),
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            show_counts: overlay.show_counts.unwrap_or(self.show_counts),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(layout) = &self.default_layout {
            let raw = layout.to_string_lossy();
            let expanded = shellexpand::full(raw.as_ref())
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            self.default_layout = Some(PathBuf::from(expanded));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.railyard.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        Ok(current)
    }

    /// Apply RAILYARD_* environment variables as explicit overrides.
    ///
    /// `RAILYARD_PROMPT` sets `prompt`; `__` separates nested keys.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("RAILYARD")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("default_layout") {
            settings.default_layout = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("prompt") {
            settings.prompt = val;
        }
        if let Ok(val) = config.get_bool("show_counts") {
            settings.show_counts = val;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
