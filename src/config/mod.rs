//! Config module - user settings in `~/.hello-shapes/config.toml`
//!
//! Every section is optional; a missing file or a partial file falls
//! back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use hello_shapes::config;
//!
//! let config = config::load(&hello_shapes::paths::config_path())?;
//! println!("Largest shape: {}", config.shape.max_dimension);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

pub use internal::{
    Config, ConfigError, GreetingSection, OutputSection, ShapeSection, MAX_DIMENSION_LIMIT,
};

/// Load config from `path`, using defaults when it does not exist
pub fn load(path: &Path) -> Result<Config> {
    internal::load(path)
}

/// Write config to `path`, creating parent directories
pub fn save(path: &Path, config: &Config) -> Result<()> {
    internal::save(path, config)
}
