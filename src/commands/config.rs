use anyhow::{bail, Result};
use std::path::Path;

use hello_shapes::config::{self, Config};

pub fn execute(path: &Path, show: bool, init: bool, force: bool) -> Result<i32> {
    if init {
        if path.exists() && !force {
            bail!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
        config::save(path, &Config::default())?;
        println!("✓ Wrote default config to {}", path.display());
    }

    if show {
        let effective = config::load(path)?;
        println!("# {}", path.display());
        print!("{}", toml::to_string_pretty(&effective)?);
    }

    Ok(0)
}
