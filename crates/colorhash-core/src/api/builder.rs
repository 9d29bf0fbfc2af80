//! HashArt builder: the primary entry point for the crate.
//!
//! [`HashArt`] wraps the pipeline (matricize, choose palette, colorize,
//! write) behind a fluent configuration API.

use std::fmt;

use crate::colorize::{colorize, ColorMatrix};
use crate::matrix::{HashAlgorithm, Matrix, Strategy};
use crate::output::{Output, Writer};
use crate::palette::{NamedPalette, PaletteRegistry};

use super::ColorhashError;

/// How the palette is picked for a digest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PaletteChoice {
    /// Deterministic choice from the digest bytes
    #[default]
    Auto,
    /// A registered palette by name
    Named(String),
}

impl From<&str> for PaletteChoice {
    /// `"auto"` (any case) selects [`PaletteChoice::Auto`]; anything else
    /// is a palette name.
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            PaletteChoice::Auto
        } else {
            PaletteChoice::Named(s.to_string())
        }
    }
}

impl fmt::Display for PaletteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteChoice::Auto => f.write_str("auto"),
            PaletteChoice::Named(name) => f.write_str(name),
        }
    }
}

/// Digest-to-image pipeline builder.
///
/// - Configuration methods consume and return `self`
/// - Pipeline methods take `&self`, so one builder renders any number of
///   digests
/// - The palette registry is passed in rather than owned, so callers can
///   extend it with their own palettes
///
/// # Example
///
/// ```
/// use colorhash_core::{HashAlgorithm, HashArt, PaletteRegistry, Strategy, SvgWriter, Writer};
///
/// let registry = PaletteRegistry::builtin();
/// let art = HashArt::new(Strategy::Nibble)
///     .algorithm(HashAlgorithm::Md5)
///     .palette("rainbow");
///
/// let writer = Writer::Svg(SvgWriter::new(8).unwrap());
/// let output = art.render(&[0xAB; 16], &registry, &writer).unwrap();
/// assert!(output.as_bytes().starts_with(b"<svg width=\"64\" height=\"32\""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashArt {
    strategy: Strategy,
    algorithm: Option<HashAlgorithm>,
    palette: PaletteChoice,
    auto_candidates: Option<Vec<String>>,
}

impl HashArt {
    /// Create a builder for `strategy` with automatic palette choice and the
    /// algorithm inferred from each digest's length.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Declare the algorithm that produced the digests. Digests of another
    /// length are then rejected.
    #[inline]
    pub fn algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    #[inline]
    pub fn palette(mut self, choice: impl Into<PaletteChoice>) -> Self {
        self.palette = choice.into();
        self
    }

    /// Names of the palettes automatic choice picks from, in order.
    /// Without this, the strategy's default family is used.
    #[inline]
    pub fn auto_candidates<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.auto_candidates = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn palette_choice(&self) -> &PaletteChoice {
        &self.palette
    }

    /// # Errors
    ///
    /// See [`Strategy::matricize`].
    pub fn matricize(&self, digest: &[u8]) -> Result<Matrix, ColorhashError> {
        Ok(self.strategy.matricize(digest, self.algorithm)?)
    }

    /// Look up the configured palette, or choose one from the digest.
    ///
    /// # Errors
    ///
    /// Returns [`ColorhashError::Palette`] for unknown names or an empty
    /// candidate collection.
    pub fn resolve_palette<'a>(
        &self,
        digest: &[u8],
        registry: &'a PaletteRegistry,
    ) -> Result<&'a NamedPalette, ColorhashError> {
        let chosen = match &self.palette {
            PaletteChoice::Named(name) => registry.get(name)?,
            PaletteChoice::Auto => match &self.auto_candidates {
                Some(names) => {
                    let candidates = registry.select(names.as_slice())?;
                    self.strategy
                        .choose_palette(digest, registry, Some(&candidates))?
                }
                None => self.strategy.choose_palette(digest, registry, None)?,
            },
        };
        Ok(chosen)
    }

    /// Matricize and colorize without serializing.
    ///
    /// # Errors
    ///
    /// Fails if the digest is invalid or the palette cannot be resolved.
    pub fn colorize(
        &self,
        digest: &[u8],
        registry: &PaletteRegistry,
    ) -> Result<ColorMatrix, ColorhashError> {
        let matrix = self.matricize(digest)?;
        let palette = self.resolve_palette(digest, registry)?;
        Ok(colorize(&palette.palette, &matrix))
    }

    /// Run the whole pipeline.
    ///
    /// # Errors
    ///
    /// Any digest, palette or writer error.
    pub fn render(
        &self,
        digest: &[u8],
        registry: &PaletteRegistry,
        writer: &Writer,
    ) -> Result<Output, ColorhashError> {
        let colors = self.colorize(digest, registry)?;
        Ok(writer.write(&colors)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::MatrixError;
    use crate::output::AnsiWriter;
    use crate::palette::PaletteError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_palette_choice_from_str() {
        assert_eq!(PaletteChoice::from("auto"), PaletteChoice::Auto);
        assert_eq!(PaletteChoice::from(" AUTO "), PaletteChoice::Auto);
        assert_eq!(
            PaletteChoice::from("blue-dark"),
            PaletteChoice::Named("blue-dark".to_string())
        );
        assert_eq!(PaletteChoice::Named("gray-light".into()).to_string(), "gray-light");
    }

    #[test]
    fn test_named_palette_is_used() {
        let registry = PaletteRegistry::builtin();
        let art = HashArt::new(Strategy::Nibble).palette("cyan-dark");
        let chosen = art.resolve_palette(&[0; 16], &registry).unwrap();
        assert_eq!(chosen.name, "cyan-dark");
    }

    #[test]
    fn test_unknown_palette_fails() {
        let registry = PaletteRegistry::builtin();
        let err = HashArt::new(Strategy::Nibble)
            .palette("teal")
            .resolve_palette(&[0; 16], &registry)
            .unwrap_err();
        assert_eq!(
            err,
            ColorhashError::Palette(PaletteError::UnknownPalette("teal".into()))
        );
    }

    #[test]
    fn test_auto_candidates_override_family() {
        let registry = PaletteRegistry::builtin();
        let art = HashArt::new(Strategy::RandomArt).auto_candidates(["black", "white"]);
        // byte sum 3 selects index 1
        let chosen = art.resolve_palette(&[1, 2], &registry).unwrap();
        assert_eq!(chosen.name, "white");
    }

    #[test]
    fn test_auto_candidates_unknown_name() {
        let registry = PaletteRegistry::builtin();
        let err = HashArt::new(Strategy::Nibble)
            .auto_candidates(vec!["black".to_string(), "mauve".to_string()])
            .resolve_palette(&[0; 16], &registry)
            .unwrap_err();
        assert_eq!(
            err,
            ColorhashError::Palette(PaletteError::UnknownPalette("mauve".into()))
        );
    }

    #[test]
    fn test_declared_algorithm_is_enforced() {
        let err = HashArt::new(Strategy::RandomArt)
            .algorithm(HashAlgorithm::Sha256)
            .matricize(&[0; 20])
            .unwrap_err();
        assert!(matches!(
            err,
            ColorhashError::Matrix(MatrixError::LengthMismatch { expected: 32, actual: 20, .. })
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let registry = PaletteRegistry::builtin();
        let art = HashArt::new(Strategy::RandomArt);
        let writer = Writer::Ansi(AnsiWriter::new());
        let digest: Vec<u8> = (0..32).collect();
        let a = art.render(&digest, &registry, &writer).unwrap();
        let b = art.render(&digest, &registry, &writer).unwrap();
        assert_eq!(a, b);
        assert!(a.is_text());
    }
}
