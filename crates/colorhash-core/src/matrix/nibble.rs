//! One cell per nibble.

use super::{HashAlgorithm, Matrix, MatrixError};

/// `(width, height)` per algorithm; `width * height` is twice the digest length.
pub(super) fn dimensions(algorithm: HashAlgorithm) -> (usize, usize) {
    match algorithm {
        HashAlgorithm::Md5 => (8, 4),
        HashAlgorithm::Sha1 => (8, 5),
        HashAlgorithm::Sha224 => (8, 7),
        HashAlgorithm::Sha256 => (8, 8),
        HashAlgorithm::Sha384 => (12, 8),
        HashAlgorithm::Sha512 => (16, 8),
    }
}

/// Split every byte into its high then low nibble, laid out row-major.
pub(super) fn matricize(digest: &[u8], width: usize, height: usize) -> Result<Matrix, MatrixError> {
    let cells: Vec<u8> = digest.iter().flat_map(|&b| [b >> 4, b & 0x0F]).collect();

    if cells.len() != width * height {
        return Err(MatrixError::CellCount {
            cells: cells.len(),
            width,
            height,
        });
    }

    Ok(Matrix::from_cells(width, height, cells))
}
