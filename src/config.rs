//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/eqbalance/eqbalance.toml`
//! 3. Explicit config file: `--config <path>`
//! 4. Environment variables: `EQBALANCE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, IoResultExt};

/// Unified configuration for eqbalance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Problem opened by `play` without an argument (1-based)
    pub default_problem: usize,
    /// Colored output (NO_COLOR/CLICOLOR still apply when true)
    pub color: bool,
    /// Draw each molecule as a cluster of atom glyphs
    pub show_atoms: bool,
    /// Refresh the per-atom diagnostic row after every step
    pub live_diagnostics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_problem: 1,
            color: true,
            show_atoms: true,
            live_diagnostics: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_problem: Option<usize>,
    pub color: Option<bool>,
    pub show_atoms: Option<bool>,
    pub live_diagnostics: Option<bool>,
}

/// Get the XDG config directory for eqbalance.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "eqbalance").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("eqbalance.toml"))
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
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_problem: overlay.default_problem.unwrap_or(self.default_problem),
            color: overlay.color.unwrap_or(self.color),
            show_atoms: overlay.show_atoms.unwrap_or(self.show_atoms),
            live_diagnostics: overlay.live_diagnostics.unwrap_or(self.live_diagnostics),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, Environment::with_prefix("EQBALANCE"))
    }

    /// Apply `EQBALANCE_*` environment variables as explicit overrides.
    pub fn apply_env_overrides(
        mut settings: Self,
        environment: Environment,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(environment.try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_int("default_problem") {
            settings.default_problem = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("default_problem must be positive, got {val}"),
            })?;
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }
        if let Ok(val) = config.get_bool("show_atoms") {
            settings.show_atoms = val;
        }
        if let Ok(val) = config.get_bool("live_diagnostics") {
            settings.live_diagnostics = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Write the template to `path`, creating parent directories.
    pub fn write_template(path: &Path) -> Result<(), ApplicationError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path_context("create config dir", parent)?;
        }
        std::fs::write(path, Self::template()).with_path_context("write config template", path)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# eqbalance configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/eqbalance/eqbalance.toml
#   Explicit: eqbalance --config <path>
#   Env:      EQBALANCE_* environment variables

# Problem opened by `eqbalance play` without an argument (1-based)
# default_problem = 1

# Colored output
# color = true

# Draw molecules as clusters of atom glyphs
# show_atoms = true

# Refresh the atom count row after every coefficient change
# live_diagnostics = true
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
