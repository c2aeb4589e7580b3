//! Line-oriented prompts.
//!
//! [`Prompter`] writes a prompt, reads exactly one line and hands it to
//! the matching parser in [`parse`]. It works over any `BufRead`/`Write`
//! pair, so stdin/stdout and in-memory buffers behave the same.

pub mod parse;

use std::io::{BufRead, Write};
use tracing::debug;

use crate::shape::FillStyle;

pub use parse::{InputError, NAME_MAX_CHARS};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output side, for lines that are not prompts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print `prompt` and read one line without its line terminator.
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!(prompt, "input closed");
            return Err(InputError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn read_name(&mut self) -> Result<String, InputError> {
        let line = self.ask("Please enter your name: ")?;
        parse::parse_name(&line)
    }

    pub fn read_dimension(&mut self, label: &'static str, max: u32) -> Result<u32, InputError> {
        let line = self.ask(&format!("Enter the {label} (1-{max}): "))?;
        parse::parse_dimension(label, &line, max)
    }

    pub fn read_fill_char(&mut self, default: Option<char>) -> Result<char, InputError> {
        let prompt = match default {
            Some(c) => format!("Enter the character to draw with [{c}]: "),
            None => "Enter the character to draw with: ".to_string(),
        };
        let line = self.ask(&prompt)?;
        parse::parse_fill_char(&line, default)
    }

    pub fn read_style(&mut self) -> Result<FillStyle, InputError> {
        let line = self.ask("Solid or hollow? (s/h): ")?;
        parse::parse_style(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_ask_strips_line_endings() {
        let mut p = prompter("first\r\nsecond\nlast");
        assert_eq!(p.ask("> ").unwrap(), "first");
        assert_eq!(p.ask("> ").unwrap(), "second");
        assert_eq!(p.ask("> ").unwrap(), "last");
        assert!(p.ask("> ").unwrap_err().is_end_of_input());
        assert_eq!(output(p), "> > > > ");
    }

    #[test]
    fn test_read_sequence() {
        let mut p = prompter("Linus\n12\n5\n#\nh\n");
        assert_eq!(p.read_name().unwrap(), "Linus");
        assert_eq!(p.read_dimension("width", 80).unwrap(), 12);
        assert_eq!(p.read_dimension("height", 80).unwrap(), 5);
        assert_eq!(p.read_fill_char(None).unwrap(), '#');
        assert_eq!(p.read_style().unwrap(), FillStyle::Hollow);

        let out = output(p);
        assert!(out.contains("Please enter your name: "));
        assert!(out.contains("Enter the width (1-80): "));
        assert!(out.contains("Enter the height (1-80): "));
        assert!(out.contains("Solid or hollow? (s/h): "));
    }

    #[test]
    fn test_rejected_line_is_consumed() {
        let mut p = prompter("12abc\n7\n");
        assert!(p.read_dimension("width", 80).is_err());
        assert_eq!(p.read_dimension("width", 80).unwrap(), 7);
    }

    #[test]
    fn test_fill_default_shown_in_prompt() {
        let mut p = prompter("\n");
        assert_eq!(p.read_fill_char(Some('o')).unwrap(), 'o');
        assert!(output(p).contains("[o]"));
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.read_name(), Err(InputError::EndOfInput)));
    }
}
