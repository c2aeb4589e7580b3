//! Internal implementation for config module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::greeting::DEFAULT_GREETING;
use crate::shape::{ShapeKind, MAX_DIMENSION};

/// Upper bound for a configured `max_dimension`
pub const MAX_DIMENSION_LIMIT: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_dimension must be between 1 and {limit}, got {value}")]
    InvalidMaxDimension { value: u32, limit: u32 },

    #[error("default_fill must be visible, got {0:?}")]
    InvisibleDefaultFill(char),
}

// =============================================================================
// Config Types
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingSection,
    #[serde(default)]
    pub shape: ShapeSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.shape.max_dimension;
        if max == 0 || max > MAX_DIMENSION_LIMIT {
            return Err(ConfigError::InvalidMaxDimension {
                value: max,
                limit: MAX_DIMENSION_LIMIT,
            });
        }
        if let Some(fill) = self.shape.default_fill {
            if fill.is_whitespace() || fill.is_control() {
                return Err(ConfigError::InvisibleDefaultFill(fill));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingSection {
    /// Fixed greeting printed first
    #[serde(default = "default_message")]
    pub message: String,
}

impl Default for GreetingSection {
    fn default() -> Self {
        Self {
            message: default_message(),
        }
    }
}

fn default_message() -> String {
    DEFAULT_GREETING.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSection {
    /// Largest accepted width or height
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Shape drawn when none is requested
    #[serde(default)]
    pub default_kind: ShapeKind,
    /// Character used when the fill prompt is left blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_fill: Option<char>,
}

impl Default for ShapeSection {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            default_kind: ShapeKind::default(),
            default_fill: None,
        }
    }
}

fn default_max_dimension() -> u32 {
    MAX_DIMENSION
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Colorize greetings and errors on a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

// =============================================================================
// Config Load/Save
// =============================================================================

pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn save(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}
