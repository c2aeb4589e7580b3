//! The interactive program: greet, ask for a name, draw a shape.
//!
//! A step that fails validation prints one `Error:` line and gives up;
//! the session then moves on to the next step. Once input is closed the
//! remaining steps are skipped.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::greeting::Greeter;
use crate::input::{parse, InputError, Prompter};
use crate::output::Palette;
use crate::shape::{self, FillStyle, ShapeError, ShapeKind, ShapeSpec};

#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Rejected(String),
    Skipped,
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub greeting: StepOutcome,
    pub hello: StepOutcome,
    pub shape: StepOutcome,
}

impl SessionReport {
    pub fn all_completed(&self) -> bool {
        self.greeting.is_completed() && self.hello.is_completed() && self.shape.is_completed()
    }
}

/// Values already known before prompting; `None` fields are asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeRequest {
    pub kind: Option<ShapeKind>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fill: Option<char>,
    pub style: Option<FillStyle>,
}

pub struct Session<'a, R, W> {
    prompter: Prompter<R, W>,
    config: &'a Config,
    greeter: Greeter,
    palette: Palette,
    input_closed: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(reader: R, writer: W, config: &'a Config) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            config,
            greeter: Greeter::new(config.greeting.message.clone()),
            palette: Palette::plain(),
            input_closed: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn into_inner(self) -> (R, W) {
        self.prompter.into_inner()
    }

    /// Run every step in order.
    pub fn run(&mut self) -> io::Result<SessionReport> {
        info!("session started");

        self.simple_greet()?;
        let greeting = StepOutcome::Completed;

        let result = self.greet_user(None);
        let hello = self.settle("hello", result)?;

        let shape = if self.input_closed {
            debug!("input closed, skipping shape");
            StepOutcome::Skipped
        } else {
            let result = self.draw_dynamic_shape(ShapeRequest::default());
            self.settle("shape", result)?
        };

        let report = SessionReport {
            greeting,
            hello,
            shape,
        };
        info!(completed = report.all_completed(), "session finished");
        Ok(report)
    }

    pub fn simple_greet(&mut self) -> io::Result<()> {
        let line = self.palette.greeting(self.greeter.simple());
        writeln!(self.prompter.writer(), "{line}")
    }

    /// Greet `name`, prompting for it when not given. Returns the name
    /// as it was greeted.
    pub fn greet_user(&mut self, name: Option<String>) -> Result<String, StepError> {
        let name = match name {
            Some(name) => parse::parse_name(&name)?,
            None => self.prompter.read_name()?,
        };

        let line = self.palette.greeting(&self.greeter.personal(&name));
        writeln!(self.prompter.writer(), "{line}").map_err(InputError::from)?;
        Ok(name)
    }

    /// Collect the missing shape values, validate and draw.
    pub fn draw_dynamic_shape(&mut self, request: ShapeRequest) -> Result<ShapeSpec, StepError> {
        let kind = request.kind.unwrap_or(self.config.shape.default_kind);
        let max = self.config.shape.max_dimension;

        // Given values are checked before the next prompt is written.
        // Pyramid width comes from its height.
        let width = match (kind, request.width) {
            (ShapeKind::Pyramid, _) => 0,
            (ShapeKind::Rectangle, Some(width)) => {
                shape::check_dimension("width", width, max)?;
                width
            }
            (ShapeKind::Rectangle, None) => self.prompter.read_dimension("width", max)?,
        };
        let height = match request.height {
            Some(height) => {
                shape::check_dimension("height", height, max)?;
                height
            }
            None => self.prompter.read_dimension("height", max)?,
        };
        let fill = match request.fill {
            Some(fill) => {
                shape::check_fill(fill)?;
                fill
            }
            None => self
                .prompter
                .read_fill_char(self.config.shape.default_fill)?,
        };
        let style = match request.style {
            Some(style) => style,
            None => self.prompter.read_style()?,
        };

        let spec = ShapeSpec::new(kind, width, height, fill, style, max)?;
        info!(
            %kind,
            width = spec.width(),
            height = spec.height(),
            %style,
            "drawing shape"
        );

        let drawn = shape::render(&spec);
        let writer = self.prompter.writer();
        writeln!(writer).map_err(InputError::from)?;
        writer
            .write_all(drawn.as_bytes())
            .map_err(InputError::from)?;
        writer.flush().map_err(InputError::from)?;

        Ok(spec)
    }

    /// Print the error line for a failed step. After end of input the
    /// line starts below the unanswered prompt and the session stops
    /// reading.
    pub fn reject(&mut self, step: &str, err: &StepError) -> io::Result<()> {
        if let StepError::Input(input) = err {
            if input.is_end_of_input() {
                self.input_closed = true;
                writeln!(self.prompter.writer())?;
            }
        }
        debug!(step, error = %err, "step rejected");

        let line = self.palette.error(&err.to_string());
        writeln!(self.prompter.writer(), "{line}")
    }

    fn settle<T>(&mut self, step: &str, result: Result<T, StepError>) -> io::Result<StepOutcome> {
        match result {
            Ok(_) => Ok(StepOutcome::Completed),
            Err(StepError::Input(InputError::Io(e))) => Err(e),
            Err(err) => {
                self.reject(step, &err)?;
                Ok(StepOutcome::Rejected(err.to_string()))
            }
        }
    }
}
