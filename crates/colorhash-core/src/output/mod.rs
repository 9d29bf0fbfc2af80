//! Serializing a [`ColorMatrix`] to ANSI text, SVG or PNG.

mod ansi;
mod error;
mod png;
mod svg;

pub use ansi::AnsiWriter;
pub use error::OutputError;
pub use png::{PngWriter, MAX_RAW_BYTES};
pub use svg::{SvgWriter, DEFAULT_SQUARE_SIZE};

use crate::colorize::ColorMatrix;

/// Writer output. ANSI and SVG produce text; PNG produces bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Binary(Vec<u8>),
}

impl Output {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Text(text) => text.as_bytes(),
            Output::Binary(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Output::Text(text) => text.into_bytes(),
            Output::Binary(bytes) => bytes,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Output::Text(_))
    }
}

/// One of the supported output formats, configured and ready to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Writer {
    Ansi(AnsiWriter),
    Svg(SvgWriter),
    Png(PngWriter),
}

impl Writer {
    /// # Errors
    ///
    /// [`OutputError::EmptyGrid`] for a grid without cells; otherwise only
    /// PNG output can fail, see [`PngWriter::write`].
    pub fn write(&self, matrix: &ColorMatrix) -> Result<Output, OutputError> {
        if matrix.cells().is_empty() {
            return Err(OutputError::EmptyGrid);
        }
        match self {
            Writer::Ansi(w) => Ok(Output::Text(w.write(matrix))),
            Writer::Svg(w) => Ok(Output::Text(w.write(matrix))),
            Writer::Png(w) => w.write(matrix).map(Output::Binary),
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Writer::Ansi(_) => "text/plain",
            Writer::Svg(_) => "image/svg+xml",
            Writer::Png(_) => "image/png",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Writer::Ansi(_) => "txt",
            Writer::Svg(_) => "svg",
            Writer::Png(_) => "png",
        }
    }
}

impl From<AnsiWriter> for Writer {
    fn from(w: AnsiWriter) -> Self {
        Writer::Ansi(w)
    }
}

impl From<SvgWriter> for Writer {
    fn from(w: SvgWriter) -> Self {
        Writer::Svg(w)
    }
}

impl From<PngWriter> for Writer {
    fn from(w: PngWriter) -> Self {
        Writer::Png(w)
    }
}
