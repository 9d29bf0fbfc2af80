//! Enumerated choices shared by the command line and the config file.

use clap::ValueEnum;
use colorhash_core::Strategy;
use serde::Deserialize;

/// How the positional input is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// A file to hash ("-" for stdin)
    #[default]
    Path,
    /// An existing digest in hexadecimal
    Hash,
    /// Literal data to hash
    Data,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 24-bit color terminal output
    #[default]
    Ansi,
    /// SVG document
    Svg,
    /// 4-bit indexed PNG
    Png,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatrixKind {
    /// Use each nibble of the hash as one cell
    #[default]
    Nibble,
    /// Use the SSH "randomart" walk
    Randomart,
}

impl From<MatrixKind> for Strategy {
    fn from(kind: MatrixKind) -> Self {
        match kind {
            MatrixKind::Nibble => Strategy::Nibble,
            MatrixKind::Randomart => Strategy::RandomArt,
        }
    }
}
