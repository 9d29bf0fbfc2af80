pub mod config;
pub mod options;

pub use config::{AppConfig, CustomPalette};
pub use options::{InputKind, MatrixKind, OutputFormat};
