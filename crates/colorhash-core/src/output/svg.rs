//! SVG output: one square `<rect>` per cell.

use std::fmt::Write as _;

use super::OutputError;
use crate::colorize::ColorMatrix;

/// Default edge length of one cell in pixels.
pub const DEFAULT_SQUARE_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgWriter {
    square_size: u32,
}

impl SvgWriter {
    /// # Errors
    ///
    /// Returns [`OutputError::InvalidSquareSize`] for a size of zero.
    pub fn new(square_size: u32) -> Result<Self, OutputError> {
        if square_size == 0 {
            return Err(OutputError::InvalidSquareSize);
        }
        Ok(Self { square_size })
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Serialize the grid. Fill colors use each color's own HTML form.
    pub fn write(&self, matrix: &ColorMatrix) -> String {
        let size = self.square_size as u64;
        let width = matrix.width() as u64 * size;
        let height = matrix.height() as u64 * size;

        let mut svg = format!(
            "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
        );
        for (r, row) in matrix.rows().enumerate() {
            for (c, color) in row.iter().enumerate() {
                let x = c as u64 * size;
                let y = r as u64 * size;
                // writing into a String cannot fail
                let _ = writeln!(
                    svg,
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"{size}\" height=\"{size}\" fill=\"{}\" />",
                    color.to_html()
                );
            }
        }
        svg.push_str("</svg>");
        svg
    }
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}
