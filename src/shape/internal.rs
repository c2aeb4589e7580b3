//! Internal implementation for shape module

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Types
// =============================================================================

/// Outline of the drawn figure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Pyramid,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Pyramid => write!(f, "pyramid"),
        }
    }
}

/// Whether interior cells are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    Solid,
    Hollow,
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStyle::Solid => write!(f, "solid"),
            FillStyle::Hollow => write!(f, "hollow"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{dimension} must be between 1 and {max}, got {value}")]
    DimensionOutOfRange {
        dimension: &'static str,
        value: u32,
        max: u32,
    },

    #[error("fill character must be visible, got {0:?}")]
    InvisibleFill(char),
}

/// A validated shape request.
///
/// For pyramids `width` is derived from the height (`2 * height - 1`,
/// the width of the base row) rather than taken from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    kind: ShapeKind,
    width: u32,
    height: u32,
    fill: char,
    style: FillStyle,
}

impl ShapeSpec {
    pub fn new(
        kind: ShapeKind,
        width: u32,
        height: u32,
        fill: char,
        style: FillStyle,
        max_dimension: u32,
    ) -> Result<Self, ShapeError> {
        check_dimension("height", height, max_dimension)?;

        let width = match kind {
            ShapeKind::Rectangle => {
                check_dimension("width", width, max_dimension)?;
                width
            }
            ShapeKind::Pyramid => height.saturating_mul(2) - 1,
        };

        check_fill(fill)?;

        Ok(Self {
            kind,
            width,
            height,
            fill,
            style,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fill(&self) -> char {
        self.fill
    }

    pub fn style(&self) -> FillStyle {
        self.style
    }

    /// Whether the cell at `(row, col)` of the bounding grid is drawn.
    /// Cells outside the grid are never drawn.
    pub fn cell(&self, row: u32, col: u32) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        let last_row = self.height - 1;

        match self.kind {
            ShapeKind::Rectangle => match self.style {
                FillStyle::Solid => true,
                FillStyle::Hollow => {
                    row == 0 || row == last_row || col == 0 || col == self.width - 1
                }
            },
            ShapeKind::Pyramid => {
                let (left, right) = pyramid_span(last_row, row);
                if col < left || col > right {
                    return false;
                }
                match self.style {
                    FillStyle::Solid => true,
                    FillStyle::Hollow => col == left || col == right || row == last_row,
                }
            }
        }
    }

    /// Number of columns emitted for `row`; trailing blank cells are cut.
    fn row_len(&self, row: u32) -> u32 {
        match self.kind {
            ShapeKind::Rectangle => self.width,
            ShapeKind::Pyramid => pyramid_span(self.height - 1, row)
                .1
                .saturating_add(1)
                .min(self.width),
        }
    }
}

pub fn check_dimension(dimension: &'static str, value: u32, max: u32) -> Result<(), ShapeError> {
    if value == 0 || value > max {
        return Err(ShapeError::DimensionOutOfRange {
            dimension,
            value,
            max,
        });
    }
    Ok(())
}

pub fn check_fill(fill: char) -> Result<(), ShapeError> {
    if fill.is_whitespace() || fill.is_control() {
        return Err(ShapeError::InvisibleFill(fill));
    }
    Ok(())
}

/// Leftmost and rightmost filled columns of a pyramid row.
fn pyramid_span(last_row: u32, row: u32) -> (u32, u32) {
    (last_row - row, last_row.saturating_add(row))
}

// =============================================================================
// Rendering
// =============================================================================

pub fn render(spec: &ShapeSpec) -> String {
    let capacity = (spec.width as usize + 1)
        .checked_mul(spec.height as usize)
        .unwrap_or(0);
    let mut out = String::with_capacity(capacity);

    for row in 0..spec.height {
        for col in 0..spec.row_len(row) {
            out.push(if spec.cell(row, col) { spec.fill } else { ' ' });
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 80;

    fn rect(width: u32, height: u32, style: FillStyle) -> ShapeSpec {
        ShapeSpec::new(ShapeKind::Rectangle, width, height, '*', style, MAX).unwrap()
    }

    fn pyramid(height: u32, style: FillStyle) -> ShapeSpec {
        ShapeSpec::new(ShapeKind::Pyramid, 0, height, '*', style, MAX).unwrap()
    }

    #[test]
    fn test_solid_rectangle() {
        assert_eq!(render(&rect(3, 2, FillStyle::Solid)), "***\n***\n");
    }

    #[test]
    fn test_hollow_rectangle() {
        let drawn = render(&rect(5, 4, FillStyle::Hollow));
        assert_eq!(drawn, "*****\n*   *\n*   *\n*****\n");
    }

    #[test]
    fn test_thin_hollow_rectangles_are_full() {
        assert_eq!(render(&rect(1, 3, FillStyle::Hollow)), "*\n*\n*\n");
        assert_eq!(render(&rect(2, 2, FillStyle::Hollow)), "**\n**\n");
        assert_eq!(render(&rect(4, 1, FillStyle::Hollow)), "****\n");
    }

    #[test]
    fn test_grid_matches_requested_dimensions() {
        for (w, h) in [(1, 1), (7, 3), (80, 80), (13, 1)] {
            for style in [FillStyle::Solid, FillStyle::Hollow] {
                let drawn = render(&rect(w, h, style));
                let rows: Vec<&str> = drawn.lines().collect();
                assert_eq!(rows.len(), h as usize);
                assert!(rows.iter().all(|r| r.chars().count() == w as usize));
            }
        }
    }

    #[test]
    fn test_hollow_interior_is_blank() {
        let spec = rect(6, 5, FillStyle::Hollow);
        for row in 1..4 {
            for col in 1..5 {
                assert!(!spec.cell(row, col), "({row}, {col}) should be blank");
            }
        }
        assert!(spec.cell(0, 3));
        assert!(spec.cell(4, 3));
        assert!(spec.cell(2, 0));
        assert!(spec.cell(2, 5));
    }

    #[test]
    fn test_cell_outside_grid() {
        let spec = rect(3, 3, FillStyle::Solid);
        assert!(!spec.cell(3, 0));
        assert!(!spec.cell(0, 3));
    }

    #[test]
    fn test_solid_pyramid() {
        let spec = pyramid(3, FillStyle::Solid);
        assert_eq!(spec.width(), 5);
        assert_eq!(render(&spec), "  *\n ***\n*****\n");
    }

    #[test]
    fn test_hollow_pyramid() {
        let drawn = render(&pyramid(4, FillStyle::Hollow));
        assert_eq!(drawn, "   *\n  * *\n *   *\n*******\n");
    }

    #[test]
    fn test_pyramid_has_no_trailing_spaces() {
        let drawn = render(&pyramid(6, FillStyle::Hollow));
        assert!(drawn.lines().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_pyramid_ignores_width() {
        let spec = ShapeSpec::new(ShapeKind::Pyramid, 500, 2, '^', FillStyle::Solid, MAX).unwrap();
        assert_eq!(render(&spec), " ^\n^^^\n");
    }

    #[test]
    fn test_dimension_limits() {
        let err = ShapeSpec::new(ShapeKind::Rectangle, 0, 5, '*', FillStyle::Solid, MAX);
        assert_eq!(
            err,
            Err(ShapeError::DimensionOutOfRange {
                dimension: "width",
                value: 0,
                max: MAX
            })
        );

        let err = ShapeSpec::new(ShapeKind::Rectangle, 5, 81, '*', FillStyle::Solid, MAX);
        assert!(matches!(
            err,
            Err(ShapeError::DimensionOutOfRange {
                dimension: "height",
                value: 81,
                ..
            })
        ));

        assert!(ShapeSpec::new(ShapeKind::Rectangle, 10, 10, '*', FillStyle::Solid, 9).is_err());
    }

    #[test]
    fn test_invisible_fill_rejected() {
        for fill in [' ', '\t', '\u{7}'] {
            let err = ShapeSpec::new(ShapeKind::Rectangle, 2, 2, fill, FillStyle::Solid, MAX);
            assert_eq!(err, Err(ShapeError::InvisibleFill(fill)));
        }
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let spec =
            ShapeSpec::new(ShapeKind::Pyramid, 0, u32::MAX, '*', FillStyle::Hollow, u32::MAX)
                .unwrap();
        // Grid width saturates instead of wrapping
        assert_eq!(spec.width(), u32::MAX - 1);
        assert!(spec.cell(u32::MAX - 1, 0));
        assert!(!spec.cell(1, 0));
        assert_eq!(spec.row_len(u32::MAX - 1), spec.width());
    }

    #[test]
    fn test_standalone_checks() {
        assert!(check_dimension("width", 80, 80).is_ok());
        assert!(check_dimension("width", 81, 80).is_err());
        assert!(check_fill('#').is_ok());
        assert_eq!(check_fill('\n'), Err(ShapeError::InvisibleFill('\n')));
    }

    #[test]
    fn test_error_message() {
        let err = ShapeError::DimensionOutOfRange {
            dimension: "width",
            value: 90,
            max: 80,
        };
        assert_eq!(err.to_string(), "width must be between 1 and 80, got 90");
    }
}
