//! Shape module - ASCII rectangles and pyramids
//!
//! A [`ShapeSpec`] is only constructed through [`ShapeSpec::new`], which
//! checks the dimensions against a limit, so anything that reaches
//! [`render`] is drawable.
//!
//! # Example
//!
//! ```
//! use hello_shapes::shape::{self, FillStyle, ShapeKind, ShapeSpec, MAX_DIMENSION};
//!
//! let spec = ShapeSpec::new(ShapeKind::Rectangle, 4, 3, '#', FillStyle::Hollow, MAX_DIMENSION)?;
//! assert_eq!(shape::render(&spec), "####\n#  #\n####\n");
//! # Ok::<(), hello_shapes::shape::ShapeError>(())
//! ```

mod internal;

pub use internal::{FillStyle, ShapeError, ShapeKind, ShapeSpec};

/// Largest width or height accepted by default
pub const MAX_DIMENSION: u32 = 80;

/// Draw a shape, one `\n`-terminated line per row
pub fn render(spec: &ShapeSpec) -> String {
    internal::render(spec)
}

/// Check one width or height against `1..=max` on its own
pub fn check_dimension(dimension: &'static str, value: u32, max: u32) -> Result<(), ShapeError> {
    internal::check_dimension(dimension, value, max)
}

/// Reject fill characters that would draw nothing
pub fn check_fill(fill: char) -> Result<(), ShapeError> {
    internal::check_fill(fill)
}
