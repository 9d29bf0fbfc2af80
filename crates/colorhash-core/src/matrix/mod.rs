//! Digest to matrix conversion
//!
//! A [`Strategy`] turns digest bytes into a [`Matrix`] of 4-bit values:
//!
//! - [`Strategy::Nibble`]: every nibble of the digest becomes one cell
//! - [`Strategy::RandomArt`]: cells count the visits of a random walk driven
//!   by the digest bits, in the manner of OpenSSH's key fingerprint art
//!
//! Grid dimensions come from a fixed per-strategy table keyed by the
//! [`HashAlgorithm`] that produced the digest.

mod algorithm;
mod nibble;
mod randomart;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use algorithm::HashAlgorithm;

use crate::palette::{select_palette, NamedPalette, PaletteError, PaletteFamily, PaletteRegistry};

/// Largest value a matrix cell can hold.
pub const MAX_CELL: u8 = 0xF;

/// Errors from digest validation and matricizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("digest is empty")]
    EmptyDigest,
    #[error("unable to determine hash algorithm from a {len}-byte digest")]
    UnknownAlgorithm { len: usize },
    #[error("{algorithm} digests are {expected} bytes, got {actual}")]
    LengthMismatch {
        algorithm: HashAlgorithm,
        expected: usize,
        actual: usize,
    },
    #[error("{cells} nibbles do not fill a {width}x{height} grid")]
    CellCount {
        cells: usize,
        width: usize,
        height: usize,
    },
    #[error("unknown hash algorithm {0:?}")]
    UnknownAlgorithmName(String),
    #[error("unknown matrix strategy {0:?} (expected nibble or randomart)")]
    UnknownStrategy(String),
}

/// A row-major grid of values in `0..=15`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Matrix {
    /// A `width x height` matrix of zeros.
    pub(crate) fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Build a matrix from row-major cells.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts the cell count and that every cell is at most 15.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        debug_assert!(cells.iter().all(|&c| c <= MAX_CELL));
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Increment a cell, saturating at [`MAX_CELL`].
    pub(crate) fn bump(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row * self.width + col];
        if *cell < MAX_CELL {
            *cell += 1;
        }
    }
}

/// Matricizing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One cell per nibble, high nibble first
    #[default]
    Nibble,
    /// OpenSSH-style random walk visit counts
    RandomArt,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Nibble => "nibble",
            Strategy::RandomArt => "randomart",
        }
    }

    /// Grid `(width, height)` for digests of `algorithm`.
    ///
    /// ```
    /// use colorhash_core::{HashAlgorithm, Strategy};
    ///
    /// assert_eq!(Strategy::Nibble.dimensions(HashAlgorithm::Md5), (8, 4));
    /// assert_eq!(Strategy::RandomArt.dimensions(HashAlgorithm::Md5), (7, 6));
    /// ```
    pub fn dimensions(self, algorithm: HashAlgorithm) -> (usize, usize) {
        match self {
            Strategy::Nibble => nibble::dimensions(algorithm),
            Strategy::RandomArt => randomart::dimensions(algorithm),
        }
    }

    /// Convert a digest into a matrix.
    ///
    /// `algorithm` is checked against the digest length; when `None` it is
    /// inferred from the length.
    ///
    /// # Errors
    ///
    /// Returns a [`MatrixError`] when the digest is empty or its length does
    /// not belong to a known (or the given) algorithm.
    pub fn matricize(
        self,
        digest: &[u8],
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Matrix, MatrixError> {
        let algorithm = HashAlgorithm::resolve(digest, algorithm)?;
        let (width, height) = self.dimensions(algorithm);
        match self {
            Strategy::Nibble => nibble::matricize(digest, width, height),
            Strategy::RandomArt => Ok(randomart::matricize(digest, width, height)),
        }
    }

    /// Palette family used for automatic selection when no explicit
    /// candidates are given.
    pub fn default_family(self) -> PaletteFamily {
        match self {
            Strategy::Nibble => PaletteFamily::Gradient,
            Strategy::RandomArt => PaletteFamily::Multicolor,
        }
    }

    /// Deterministically choose a palette for `digest`.
    ///
    /// Picks `candidates[sum(digest) % len]`, where `candidates` defaults to
    /// this strategy's [`default_family`](Self::default_family) in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::NoCandidates`] if the collection is empty.
    pub fn choose_palette<'a>(
        self,
        digest: &[u8],
        registry: &'a PaletteRegistry,
        candidates: Option<&[&'a NamedPalette]>,
    ) -> Result<&'a NamedPalette, PaletteError> {
        let family;
        let candidates = match candidates {
            Some(c) => c,
            None => {
                family = registry.family(self.default_family());
                &family[..]
            }
        };
        select_palette(digest, candidates).ok_or(PaletteError::NoCandidates)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nibble" => Ok(Strategy::Nibble),
            "randomart" => Ok(Strategy::RandomArt),
            _ => Err(MatrixError::UnknownStrategy(s.to_string())),
        }
    }
}
