//! Filesystem layout for hello-shapes.
//!
//! ```text
//! ~/.hello-shapes/
//! └── config.toml              # User config
//! ```

use std::path::PathBuf;

/// User's home directory for the app: `~/.hello-shapes/`
pub fn app_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hello-shapes")
}

/// User config file: `~/.hello-shapes/config.toml`
pub fn config_path() -> PathBuf {
    app_home().join("config.toml")
}
