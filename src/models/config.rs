use std::path::Path;

use colorhash_core::output::DEFAULT_SQUARE_SIZE;
use colorhash_core::{HashAlgorithm, Palette, PaletteFamily, PaletteRegistry};
use serde::{Deserialize, Deserializer};

use super::options::{InputKind, MatrixKind, OutputFormat};
use crate::error::AppError;

/// Application configuration loaded from a YAML file.
///
/// Every field is optional; command-line flags override whatever is set
/// here.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Matricizing strategy
    #[serde(default)]
    pub matrix: MatrixKind,

    /// Palette name, or "auto"
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Hash algorithm; inferred from the digest length for hash input
    #[serde(default, deserialize_with = "deserialize_algorithm")]
    pub algorithm: Option<HashAlgorithm>,

    /// Edge length of one cell in pixels (SVG and PNG)
    #[serde(default = "default_square_size")]
    pub square_size: u32,

    /// How the positional input is interpreted
    #[serde(default)]
    pub input: InputKind,

    /// Palettes "auto" chooses from, replacing the strategy's default family
    #[serde(default)]
    pub auto_palettes: Option<Vec<String>>,

    /// Extra palettes, registered after the built-ins
    #[serde(default)]
    pub palettes: Vec<CustomPalette>,
}

fn default_palette() -> String {
    "auto".to_string()
}

fn default_square_size() -> u32 {
    DEFAULT_SQUARE_SIZE
}

fn deserialize_algorithm<'de, D>(deserializer: D) -> Result<Option<HashAlgorithm>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    name.map(|n| n.parse().map_err(serde::de::Error::custom))
        .transpose()
}

/// A user-defined palette of 16 hex colors.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomPalette {
    pub name: String,
    pub colors: Vec<String>,
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when there is none.
    ///
    /// # Errors
    ///
    /// [`AppError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The built-in palettes followed by the configured custom ones.
    ///
    /// # Errors
    ///
    /// [`AppError::Config`] for a custom palette with bad colors or a name
    /// that is already taken.
    pub fn build_registry(&self) -> Result<PaletteRegistry, AppError> {
        let mut registry = PaletteRegistry::builtin();
        for custom in &self.palettes {
            let palette = Palette::from_hex(custom.colors.as_slice())
                .map_err(|e| AppError::Config(format!("palette {:?}: {e}", custom.name)))?;
            registry
                .register(custom.name.clone(), PaletteFamily::Custom, palette)
                .map_err(|e| AppError::Config(e.to_string()))?;
            tracing::debug!(name = %custom.name, "Registered custom palette");
        }
        Ok(registry)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            matrix: MatrixKind::default(),
            palette: default_palette(),
            output: OutputFormat::default(),
            algorithm: None,
            square_size: default_square_size(),
            input: InputKind::default(),
            auto_palettes: None,
            palettes: Vec::new(),
        }
    }
}
