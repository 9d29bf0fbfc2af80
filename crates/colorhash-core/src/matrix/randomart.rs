//! Random walk visit counts, after the "randomart" fingerprint drawn by
//! `ssh-keygen`.
//!
//! The walk starts in the middle of the grid. Each byte supplies four steps,
//! consumed two bits at a time starting from the least significant pair:
//!
//! - bit 0 set moves right, clear moves left
//! - bit 1 set moves down, clear moves up
//!
//! The cursor is clamped to the grid on each axis (no wrapping), then the
//! cell under it is incremented, saturating at 15.

use super::{HashAlgorithm, Matrix};

/// `(width, height)` per algorithm.
pub(super) fn dimensions(algorithm: HashAlgorithm) -> (usize, usize) {
    match algorithm {
        HashAlgorithm::Md5 | HashAlgorithm::Sha1 => (7, 6),
        HashAlgorithm::Sha224 | HashAlgorithm::Sha256 => (8, 7),
        HashAlgorithm::Sha384 | HashAlgorithm::Sha512 => (11, 10),
    }
}

pub(super) fn matricize(digest: &[u8], width: usize, height: usize) -> Matrix {
    let mut matrix = Matrix::zeros(width, height);
    let (max_col, max_row) = (width as isize - 1, height as isize - 1);
    let mut col = (width / 2) as isize;
    let mut row = (height / 2) as isize;

    for &byte in digest {
        let mut bits = byte;
        for _ in 0..4 {
            col += if bits & 0x1 != 0 { 1 } else { -1 };
            row += if bits & 0x2 != 0 { 1 } else { -1 };
            col = col.clamp(0, max_col);
            row = row.clamp(0, max_row);
            matrix.bump(row as usize, col as usize);
            bits >>= 2;
        }
    }

    matrix
}
