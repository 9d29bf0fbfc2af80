//! Hash algorithm identities and their digest lengths.

use std::fmt;
use std::str::FromStr;

use super::MatrixError;

/// The hash algorithms whose digests can be matricized.
///
/// The core never computes digests; the algorithm only selects the grid
/// dimensions and validates the digest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Every algorithm, shortest digest first.
    pub const ALL: [HashAlgorithm; 6] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Infer the algorithm from a digest length in bytes.
    ///
    /// ```
    /// use colorhash_core::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::from_digest_len(20), Some(HashAlgorithm::Sha1));
    /// assert_eq!(HashAlgorithm::from_digest_len(21), None);
    /// ```
    pub fn from_digest_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.digest_len() == len)
    }

    /// Resolve the algorithm for `digest`, checking an explicit choice
    /// against the digest length or inferring one from it.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::EmptyDigest`] for an empty digest
    /// - [`MatrixError::LengthMismatch`] if `explicit` disagrees with the length
    /// - [`MatrixError::UnknownAlgorithm`] if no algorithm has this length
    pub fn resolve(digest: &[u8], explicit: Option<Self>) -> Result<Self, MatrixError> {
        if digest.is_empty() {
            return Err(MatrixError::EmptyDigest);
        }
        match explicit {
            Some(algorithm) if algorithm.digest_len() != digest.len() => {
                Err(MatrixError::LengthMismatch {
                    algorithm,
                    expected: algorithm.digest_len(),
                    actual: digest.len(),
                })
            }
            Some(algorithm) => Ok(algorithm),
            None => Self::from_digest_len(digest.len())
                .ok_or(MatrixError::UnknownAlgorithm { len: digest.len() }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name() == lower)
            .ok_or_else(|| MatrixError::UnknownAlgorithmName(s.to_string()))
    }
}
