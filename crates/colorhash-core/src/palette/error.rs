//! Error types for palette operations
//!
//! This module provides error types for color parsing, palette validation
//! and registry lookups.

use thiserror::Error;

use super::PALETTE_SIZE;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Hex string contains non-ASCII characters
    #[error("hex color contains non-ASCII characters")]
    NonAscii,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character {0:?}")]
    InvalidHex(char),
}

/// Error type for palette construction and registry lookups.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A palette was built from the wrong number of colors
    #[error("palette must contain exactly {expected} colors, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    /// An expanded HSL channel did not resolve to one value per palette entry
    #[error("{channel} channel must resolve to {size} values, got {actual}", size = PALETTE_SIZE)]
    ChannelLength {
        channel: &'static str,
        actual: usize,
    },
    /// A palette with this name is already registered
    #[error("palette {0:?} is already registered")]
    DuplicateName(String),
    /// No palette with this name is registered
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
    /// Automatic selection was asked to choose from an empty collection
    #[error("no palettes available for automatic selection")]
    NoCandidates,
    /// Invalid hex color string at the given palette position
    #[error("invalid color at index {index}: {source}")]
    ParseColor {
        index: usize,
        #[source]
        source: ParseColorError,
    },
}
