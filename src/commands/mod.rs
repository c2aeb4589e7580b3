//! Subcommand implementations for the `hello-shapes` binary.

pub mod config;
pub mod greet;
pub mod hello;
pub mod run;
pub mod shape;

use anyhow::Result;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};
use std::path::PathBuf;

use hello_shapes::config as app_config;
use hello_shapes::output::Palette;
use hello_shapes::{Config, InputError, Session, StepError};

/// Loaded config plus output settings shared by every command
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub palette: Palette,
}

impl Context {
    pub fn load(config_path: PathBuf, no_color: bool) -> Result<Self> {
        let config = app_config::load(&config_path)?;
        let palette = Palette::for_stdout(!no_color && config.output.color);
        Ok(Self {
            config,
            config_path,
            palette,
        })
    }

    /// A session reading stdin and writing stdout
    pub fn session(&self) -> Session<'_, StdinLock<'static>, StdoutLock<'static>> {
        Session::new(io::stdin().lock(), io::stdout().lock(), &self.config).with_palette(self.palette)
    }
}

/// Exit code for a single step: 0 on success, 1 after printing the
/// rejection. I/O failures propagate.
pub fn step_exit_code<T, R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
    step: &str,
    result: Result<T, StepError>,
) -> Result<i32> {
    match result {
        Ok(_) => Ok(0),
        Err(StepError::Input(InputError::Io(e))) => Err(e.into()),
        Err(err) => {
            session.reject(step, &err)?;
            Ok(1)
        }
    }
}
