//! Configuration file handling for img2braille.
//!
//! Loads configuration from `<config dir>/img2braille/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::convert::{ConvertOptions, DEFAULT_LINE_END};

/// Configuration file structure for img2braille.
/// Loaded from the user config dir (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "default_line_end")]
    pub line_end: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_end: default_line_end(),
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Log filter used when neither RUST_LOG nor -v is given
    #[serde(default)]
    pub level: Option<String>,
}

fn default_line_end() -> String {
    DEFAULT_LINE_END.to_string()
}

impl Config {
    /// Load configuration.
    ///
    /// With `None` the default path is tried and a missing file yields the
    /// defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)
            }
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Conversion options described by this config.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            line_end: self.render.line_end.clone(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("img2braille").join("config.toml"))
}
