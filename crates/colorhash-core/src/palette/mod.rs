//! Palette types and utilities
//!
//! This module provides the 16-color [`Palette`], helpers for defining
//! palettes as HSL sweeps, the ordered [`PaletteRegistry`] of named
//! palettes, and the error types for parsing and validation.

mod builder;
mod error;
mod palette;
mod registry;

/// Number of colors in every palette: one per 4-bit matrix value.
pub const PALETTE_SIZE: usize = 16;

pub use builder::{hsl_palette, quantize, Channel};
pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
pub use registry::{select_palette, NamedPalette, PaletteFamily, PaletteRegistry};
