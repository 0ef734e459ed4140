//! Configuration file handling.
//!
//! Settings live in `<config dir>/corpusprep/config.toml`. A missing file or
//! missing fields fall back to defaults, so an empty file is a valid config.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::normalize::transforms::{CHAR_REPEAT_THRESHOLD, PUNCT_REPEAT_THRESHOLD, REPEAT_KEEP};
use crate::normalize::{EmojiStrategy, DEFAULT_MIN_LENGTH};

/// Directory name under the platform config dir.
const APP_DIR: &str = "corpusprep";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub rewrite: RewriteConfig,
}

/// Per-run pipeline settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How emoji are handled (separate, demojize, none)
    pub emoji_strategy: EmojiStrategy,
    /// Minimum accepted comment length in characters
    pub min_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            emoji_strategy: EmojiStrategy::default(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Repeat collapsing thresholds.
///
/// Letters and punctuation use different thresholds (3 and 4 by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Word-character runs this long or longer are collapsed
    pub char_repeat_threshold: usize,
    /// `!`, `?`, `.` runs this long or longer are collapsed
    pub punct_repeat_threshold: usize,
    /// Length a collapsed run is reduced to
    pub repeat_keep: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            char_repeat_threshold: CHAR_REPEAT_THRESHOLD,
            punct_repeat_threshold: PUNCT_REPEAT_THRESHOLD,
            repeat_keep: REPEAT_KEEP,
        }
    }
}

impl RewriteConfig {
    /// A collapsed run must be strictly shorter than the run that triggered
    /// it, otherwise collapsing would lengthen text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_keep == 0 {
            return Err(ConfigError::Invalid(
                "rewrite.repeat_keep must be at least 1".to_string(),
            ));
        }
        for (name, threshold) in [
            ("char_repeat_threshold", self.char_repeat_threshold),
            ("punct_repeat_threshold", self.punct_repeat_threshold),
        ] {
            if threshold <= self.repeat_keep {
                return Err(ConfigError::Invalid(format!(
                    "rewrite.{} ({}) must be greater than rewrite.repeat_keep ({})",
                    name, threshold, self.repeat_keep
                )));
            }
        }
        Ok(())
    }
}

impl Config {
    /// Path of the user config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the user config, or defaults when no file exists yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a config file at an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rewrite.validate()
    }

    /// Serialize to pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to the user config file, creating its directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
