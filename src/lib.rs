//! Console greeter that draws ASCII shapes.
//!
//! The library holds everything the `hello-shapes` binary does, split so
//! each step can be driven with in-memory readers and writers.

pub mod config;
pub mod greeting;
pub mod input;
pub mod output;
pub mod paths;
pub mod session;
pub mod shape;

// Re-export commonly used types
pub use config::Config;
pub use greeting::Greeter;
pub use input::{InputError, Prompter};
pub use session::{Session, SessionReport, ShapeRequest, StepError, StepOutcome};
pub use shape::{FillStyle, ShapeKind, ShapeSpec};
