//! Applying a palette to a matrix.

use crate::color::Color;
use crate::matrix::Matrix;
use crate::output::OutputError;
use crate::palette::Palette;

/// A non-empty, rectangular grid of colors in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatrix {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl ColorMatrix {
    /// Build a color matrix from explicit rows.
    ///
    /// # Errors
    ///
    /// - [`OutputError::EmptyGrid`] if there are no rows or the rows are empty
    /// - [`OutputError::RaggedRow`] if a row's length differs from the first
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, OutputError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(OutputError::EmptyGrid);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(OutputError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Distinct colors as rounded RGB bytes, in first-seen row-major order.
    pub fn distinct_rgb(&self) -> Vec<[u8; 3]> {
        let mut seen: Vec<[u8; 3]> = Vec::new();
        for color in &self.cells {
            let bytes = color.to_rgb().to_bytes();
            if !seen.contains(&bytes) {
                seen.push(bytes);
            }
        }
        seen
    }
}

/// Map every matrix cell through the palette.
///
/// Matrix cells are always in `0..=15`, so this cannot fail.
///
/// ```
/// use colorhash_core::{colorize, HashAlgorithm, PaletteRegistry, Strategy};
///
/// let registry = PaletteRegistry::builtin();
/// let palette = &registry.get("rainbow").unwrap().palette;
/// let matrix = Strategy::Nibble.matricize(&[0u8; 16], Some(HashAlgorithm::Md5)).unwrap();
///
/// let colors = colorize(palette, &matrix);
/// assert_eq!((colors.width(), colors.height()), (8, 4));
/// assert!(colors.cells().iter().all(|c| *c == palette[0]));
/// ```
pub fn colorize(palette: &Palette, matrix: &Matrix) -> ColorMatrix {
    ColorMatrix {
        width: matrix.width(),
        height: matrix.height(),
        cells: matrix.cells().iter().map(|&v| palette[v]).collect(),
    }
}
