//! 24-bit ANSI terminal output.

use crate::colorize::ColorMatrix;

const ESC: &str = "\x1b";
/// Two full blocks make a roughly square cell in most terminal fonts.
const BLOCK: &str = "██";

/// Renders each cell as a truecolor foreground escape followed by two
/// block glyphs. Rows end with a newline; a single reset follows the last row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiWriter;

impl AnsiWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, matrix: &ColorMatrix) -> String {
        // escape (at most 19 bytes) plus the 6-byte block per cell
        let mut out = String::with_capacity(matrix.cells().len() * 25 + matrix.height() + 4);
        for row in matrix.rows() {
            for color in row {
                let [r, g, b] = color.to_rgb().to_bytes();
                out.push_str(&format!("{ESC}[38;2;{r};{g};{b}m"));
                out.push_str(BLOCK);
            }
            out.push('\n');
        }
        out.push_str(&format!("{ESC}[0m"));
        out
    }
}
