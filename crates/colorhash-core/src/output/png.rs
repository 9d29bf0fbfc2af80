//! Minimal indexed PNG encoder.
//!
//! Produces a 4-bit palette image (color type 3) with the smallest legal
//! chunk sequence: signature, `IHDR`, `PLTE`, one `IDAT`, `IEND`. Each cell
//! becomes a `square_size x square_size` block of identical pixels.
//!
//! Every chunk is `length (u32 BE) | type | data | CRC-32(type | data)`.
//! Scanlines use filter type 0 and pack two pixels per byte, high nibble
//! first; an odd final pixel leaves the low nibble zero.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use super::svg::DEFAULT_SQUARE_SIZE;
use super::OutputError;
use crate::colorize::ColorMatrix;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const BIT_DEPTH: u8 = 4;
const COLOR_TYPE_INDEXED: u8 = 3;
const MAX_COLORS: usize = 1 << BIT_DEPTH;
/// Largest width or height the format allows.
const MAX_DIMENSION: u64 = (1 << 31) - 1;
const FILTER_NONE: u8 = 0;
/// Upper bound on the uncompressed scanline data (256 MiB). The whole image
/// is built in memory before compression, so larger images are refused.
pub const MAX_RAW_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngWriter {
    square_size: u32,
}

impl PngWriter {
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

    /// Encode the grid as a PNG file.
    ///
    /// # Errors
    ///
    /// - [`OutputError::TooManyColors`] if the grid has more than 16 distinct
    ///   RGB colors
    /// - [`OutputError::EmptyGrid`] if the grid has no cells
    /// - [`OutputError::ImageTooLarge`] if the scaled image exceeds PNG limits
    ///   or its raw data would exceed [`MAX_RAW_BYTES`]
    pub fn write(&self, matrix: &ColorMatrix) -> Result<Vec<u8>, OutputError> {
        if matrix.cells().is_empty() {
            return Err(OutputError::EmptyGrid);
        }

        let palette = matrix.distinct_rgb();
        if palette.len() > MAX_COLORS {
            return Err(OutputError::TooManyColors {
                count: palette.len(),
            });
        }

        let (width, height) = self.pixel_size(matrix)?;
        let indices: Vec<u8> = matrix
            .cells()
            .iter()
            .map(|color| {
                let rgb = color.to_rgb().to_bytes();
                // distinct_rgb saw every cell, so the color is present
                palette.iter().position(|&p| p == rgb).unwrap_or(0) as u8
            })
            .collect();

        let raw = scanlines(&indices, matrix.width(), self.square_size as usize);
        let compressed = deflate(&raw)?;

        let mut png = Vec::with_capacity(compressed.len() + 128);
        png.extend_from_slice(&SIGNATURE);
        write_chunk(&mut png, b"IHDR", &header(width as u32, height as u32));
        write_chunk(&mut png, b"PLTE", &palette.concat());
        write_chunk(&mut png, b"IDAT", &compressed);
        write_chunk(&mut png, b"IEND", &[]);
        Ok(png)
    }

    /// Image dimensions in pixels, checked against the format limits and
    /// the raw data budget.
    fn pixel_size(&self, matrix: &ColorMatrix) -> Result<(u64, u64), OutputError> {
        let size = u64::from(self.square_size);
        let too_large = || OutputError::ImageTooLarge {
            width: matrix.width().saturating_mul(self.square_size as usize),
            height: matrix.height().saturating_mul(self.square_size as usize),
        };

        let width = (matrix.width() as u64).checked_mul(size).ok_or_else(too_large)?;
        let height = (matrix.height() as u64).checked_mul(size).ok_or_else(too_large)?;
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(too_large());
        }

        // one filter byte plus packed pixels per scanline
        let raw_bytes = (width.div_ceil(2) + 1)
            .checked_mul(height)
            .ok_or_else(too_large)?;
        if raw_bytes > MAX_RAW_BYTES {
            return Err(too_large());
        }
        Ok((width, height))
    }
}

impl Default for PngWriter {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

/// IHDR payload: dimensions, bit depth, color type, then compression,
/// filter and interlace methods (all zero).
fn header(width: u32, height: u32) -> [u8; 13] {
    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_INDEXED;
    ihdr
}

/// Filtered, packed image data for a grid of `cols`-wide rows of palette
/// indices, each cell scaled to `size x size` pixels.
fn scanlines(indices: &[u8], cols: usize, size: usize) -> Vec<u8> {
    let row_bytes = (cols * size).div_ceil(2);
    let rows = indices.len() / cols;
    let mut raw = Vec::with_capacity((row_bytes + 1) * rows * size);

    for row in indices.chunks(cols) {
        let pixels: Vec<u8> = row
            .iter()
            .flat_map(|&idx| std::iter::repeat(idx).take(size))
            .collect();
        let packed = pack_nibbles(&pixels);
        for _ in 0..size {
            raw.push(FILTER_NONE);
            raw.extend_from_slice(&packed);
        }
    }

    raw
}

/// Pack 4-bit values two per byte, high nibble first.
fn pack_nibbles(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks(2)
        .map(|pair| {
            let hi = pair[0] & 0x0F;
            let lo = pair.get(1).map_or(0, |&p| p & 0x0F);
            (hi << 4) | lo
        })
        .collect()
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>, OutputError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(raw)
        .map_err(|e| OutputError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| OutputError::Compression(e.to_string()))
}

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    let mut crc = Crc::new();
    crc.update(kind);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}
