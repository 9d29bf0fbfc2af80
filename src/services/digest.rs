//! Turning the command-line input into digest bytes.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use colorhash_core::HashAlgorithm;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::AppError;
use crate::models::InputKind;

/// Algorithm used to hash files and data when none is given.
pub const DEFAULT_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha512;

/// Input name that reads from standard input.
pub const STDIN: &str = "-";

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Digest bytes plus the algorithm that produced them, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestInput {
    pub bytes: Vec<u8>,
    /// `None` for hex input without an explicit algorithm; the length
    /// decides later.
    pub algorithm: Option<HashAlgorithm>,
}

impl DigestInput {
    /// Obtain a digest for `input` according to `kind`.
    ///
    /// Files and data are hashed with `algorithm` (default sha512). Hex input
    /// is decoded as-is and checked against `algorithm` when one is given.
    pub fn acquire(
        kind: InputKind,
        input: &str,
        algorithm: Option<HashAlgorithm>,
    ) -> Result<Self, AppError> {
        match kind {
            InputKind::Path => {
                let algorithm = algorithm.unwrap_or(DEFAULT_ALGORITHM);
                let bytes = if input == STDIN {
                    hash_reader(algorithm, io::stdin().lock())
                        .map_err(|e| AppError::io("<stdin>", e))?
                } else {
                    hash_file(algorithm, Path::new(input))?
                };
                Ok(Self {
                    bytes,
                    algorithm: Some(algorithm),
                })
            }
            InputKind::Data => {
                let algorithm = algorithm.unwrap_or(DEFAULT_ALGORITHM);
                Ok(Self {
                    bytes: hash_bytes(algorithm, input.as_bytes()),
                    algorithm: Some(algorithm),
                })
            }
            InputKind::Hash => {
                let bytes = parse_hex(input)?;
                if let Some(algorithm) = algorithm {
                    if algorithm.digest_len() != bytes.len() {
                        return Err(AppError::AlgorithmMismatch {
                            algorithm,
                            expected: algorithm.digest_len(),
                            actual: bytes.len(),
                        });
                    }
                }
                Ok(Self { bytes, algorithm })
            }
        }
    }
}

/// Decode a hex digest, ignoring surrounding whitespace and a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, AppError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    Ok(hex::decode(digits)?)
}

pub fn hash_bytes(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha224 => Sha224::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

pub fn hash_file(algorithm: HashAlgorithm, path: &Path) -> Result<Vec<u8>, AppError> {
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let digest = hash_reader(algorithm, file).map_err(|e| AppError::io(path, e))?;
    tracing::debug!(path = %path.display(), %algorithm, "Hashed file");
    Ok(digest)
}

/// Hash everything `reader` yields, without holding it in memory.
pub fn hash_reader<R: Read>(algorithm: HashAlgorithm, reader: R) -> io::Result<Vec<u8>> {
    match algorithm {
        HashAlgorithm::Md5 => stream::<Md5, _>(reader),
        HashAlgorithm::Sha1 => stream::<Sha1, _>(reader),
        HashAlgorithm::Sha224 => stream::<Sha224, _>(reader),
        HashAlgorithm::Sha256 => stream::<Sha256, _>(reader),
        HashAlgorithm::Sha384 => stream::<Sha384, _>(reader),
        HashAlgorithm::Sha512 => stream::<Sha512, _>(reader),
    }
}

fn stream<D: Digest, R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buf = vec![0u8; READ_BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(hasher.finalize().to_vec())
}
