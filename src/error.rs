use std::path::PathBuf;

use colorhash_core::{ColorhashError, HashAlgorithm};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid hex digest: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{algorithm} digests are {expected} bytes, got {actual}")]
    AlgorithmMismatch {
        algorithm: HashAlgorithm,
        expected: usize,
        actual: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Rendering error: {0}")]
    Render(#[from] ColorhashError),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
