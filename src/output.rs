//! Optional coloring for greeting and error lines.

use colored::Colorize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color only when requested and stdout is a terminal.
    pub fn for_stdout(requested: bool) -> Self {
        Self::new(requested && atty::is(atty::Stream::Stdout))
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn greeting(&self, text: &str) -> String {
        if self.color {
            text.bright_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, message: &str) -> String {
        if self.color {
            format!("{} {}", "Error:".bright_red().bold(), message)
        } else {
            format!("Error: {message}")
        }
    }
}
