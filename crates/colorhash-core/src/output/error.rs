//! Error type for the writers.

use thiserror::Error;

/// Errors raised while validating or serializing a [`ColorMatrix`](crate::ColorMatrix).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    #[error("color grid is empty")]
    EmptyGrid,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("square size must be a positive number of pixels")]
    InvalidSquareSize,
    #[error("indexed PNG supports at most 16 colors, grid uses {count}")]
    TooManyColors { count: usize },
    #[error("image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: usize, height: usize },
    #[error("PNG compression failed: {0}")]
    Compression(String),
}
