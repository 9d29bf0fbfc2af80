//! Unified error type for the colorhash-core public API.

use thiserror::Error;

use crate::matrix::MatrixError;
use crate::output::OutputError;
use crate::palette::{PaletteError, ParseColorError};

/// Unified error type for the colorhash-core public API.
///
/// Wraps every error type in the crate so application code can use `?`
/// across the whole pipeline.
///
/// # Example
///
/// ```
/// use colorhash_core::{ColorhashError, Palette};
///
/// fn mono() -> Result<Palette, ColorhashError> {
///     let palette = Palette::from_hex(&["#000"; 16])?;
///     Ok(palette)
/// }
/// assert!(mono().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorhashError {
    /// Palette validation or registry lookup error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// Color parsing error (invalid hex string)
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),
    /// Digest validation error
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
    /// Serialization error
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}
