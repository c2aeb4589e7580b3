//! Line parsers for each prompted value.
//!
//! Every parser takes the whole line as read (without its newline), so
//! whatever follows the accepted value is discarded with it.

use std::num::IntErrorKind;
use thiserror::Error;

use crate::shape::FillStyle;

/// Longest name kept; longer input is cut to this many characters.
pub const NAME_MAX_CHARS: usize = 99;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input received")]
    EndOfInput,

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{label} must be a whole number, got '{input}'")]
    NotANumber { label: &'static str, input: String },

    #[error("{label} must be between {min} and {max}, got {value}")]
    OutOfRange {
        label: &'static str,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("'{input}' is not a valid choice, expected {expected}")]
    InvalidChoice {
        input: String,
        expected: &'static str,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// End of input cannot be recovered from by asking again.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, InputError::EndOfInput)
    }
}

pub fn parse_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::Empty("name"));
    }
    Ok(name.chars().take(NAME_MAX_CHARS).collect())
}

pub fn parse_dimension(label: &'static str, line: &str, max: u32) -> Result<u32, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(label));
    }

    // Whole numbers too large for i64 are still out of range, not garbage
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                return Err(InputError::NotANumber {
                    label,
                    input: trimmed.to_string(),
                })
            }
        },
    };

    if value < 1 || value > i64::from(max) {
        return Err(InputError::OutOfRange {
            label,
            value,
            min: 1,
            max,
        });
    }

    // Bounded by `max` above
    Ok(value as u32)
}

pub fn parse_fill_char(line: &str, default: Option<char>) -> Result<char, InputError> {
    match line.chars().find(|c| !c.is_whitespace()) {
        Some(c) => Ok(c),
        None => default.ok_or(InputError::Empty("fill character")),
    }
}

pub fn parse_style(line: &str) -> Result<FillStyle, InputError> {
    let choice = line.trim().to_lowercase();
    match choice.as_str() {
        "s" | "solid" => Ok(FillStyle::Solid),
        "h" | "hollow" => Ok(FillStyle::Hollow),
        _ => Err(InputError::InvalidChoice {
            input: line.trim().to_string(),
            expected: "'s' (solid) or 'h' (hollow)",
        }),
    }
}
