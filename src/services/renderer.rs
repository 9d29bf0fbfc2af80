use colorhash_core::{
    AnsiWriter, ColorhashError, HashArt, Output, PaletteChoice, PaletteRegistry, PngWriter,
    SvgWriter, Writer,
};

use crate::error::AppError;
use crate::models::{AppConfig, OutputFormat};
use crate::services::DigestInput;

/// Build the writer for an output format.
pub fn writer_for(format: OutputFormat, square_size: u32) -> Result<Writer, AppError> {
    let writer = match format {
        OutputFormat::Ansi => Writer::Ansi(AnsiWriter::new()),
        OutputFormat::Svg => Writer::Svg(SvgWriter::new(square_size).map_err(ColorhashError::from)?),
        OutputFormat::Png => Writer::Png(PngWriter::new(square_size).map_err(ColorhashError::from)?),
    };
    Ok(writer)
}

/// Renders digests with one fixed configuration.
pub struct RenderService {
    registry: PaletteRegistry,
    art: HashArt,
    writer: Writer,
}

impl RenderService {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let registry = config.build_registry()?;
        let mut art = HashArt::new(config.matrix.into()).palette(config.palette.as_str());
        if let Some(names) = &config.auto_palettes {
            art = art.auto_candidates(names.iter().cloned());
        }
        let writer = writer_for(config.output, config.square_size)?;

        // Fail on unknown names before any input is read
        if let PaletteChoice::Named(name) = art.palette_choice() {
            registry.get(name).map_err(ColorhashError::from)?;
        }
        if let Some(names) = &config.auto_palettes {
            registry.select(names.as_slice()).map_err(ColorhashError::from)?;
        }

        Ok(Self {
            registry,
            art,
            writer,
        })
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    /// Run the pipeline for one digest.
    pub fn render(&self, digest: &DigestInput) -> Result<Output, AppError> {
        let art = match digest.algorithm {
            Some(algorithm) => self.art.clone().algorithm(algorithm),
            None => self.art.clone(),
        };

        let named = art.resolve_palette(&digest.bytes, &self.registry)?;
        tracing::debug!(
            strategy = %art.strategy(),
            algorithm = ?digest.algorithm,
            palette = %named.name,
            family = %named.family,
            media_type = self.writer.media_type(),
            "Rendering digest"
        );

        Ok(art.render(&digest.bytes, &self.registry, &self.writer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InputKind, MatrixKind};
    use colorhash_core::{HashAlgorithm, MatrixError, OutputError, PaletteError};

    fn md5_zero() -> DigestInput {
        DigestInput {
            bytes: vec![0; 16],
            algorithm: Some(HashAlgorithm::Md5),
        }
    }

    #[test]
    fn test_writer_for_formats() {
        assert_eq!(writer_for(OutputFormat::Png, 4).unwrap().media_type(), "image/png");
        assert_eq!(writer_for(OutputFormat::Svg, 4).unwrap().extension(), "svg");
        assert!(writer_for(OutputFormat::Ansi, 0).is_ok());
        assert!(matches!(
            writer_for(OutputFormat::Svg, 0),
            Err(AppError::Render(_))
        ));
    }

    #[test]
    fn test_render_default_config() {
        let service = RenderService::new(&AppConfig::default()).unwrap();
        let output = service.render(&md5_zero()).unwrap();
        assert!(output.is_text());
        // 4 rows, each ending with a newline
        let text = String::from_utf8(output.into_bytes()).unwrap();
        assert_eq!(text.matches('\n').count(), 4);
    }

    #[test]
    fn test_unknown_palette_fails_early() {
        let config = AppConfig {
            palette: "teal".to_string(),
            ..AppConfig::default()
        };
        match RenderService::new(&config) {
            Err(AppError::Render(ColorhashError::Palette(PaletteError::UnknownPalette(name)))) => {
                assert_eq!(name, "teal")
            }
            Err(other) => panic!("Expected unknown palette, got {other:?}"),
            Ok(_) => panic!("Expected unknown palette"),
        }
    }

    #[test]
    fn test_hash_input_with_unknown_length() {
        let service = RenderService::new(&AppConfig::default()).unwrap();
        let digest = DigestInput {
            bytes: vec![1, 2, 3],
            algorithm: None,
        };
        let err = service.render(&digest).unwrap_err();
        assert!(matches!(
            err,
            AppError::Render(ColorhashError::Matrix(MatrixError::UnknownAlgorithm { len: 3 }))
        ));
        assert!(err.to_string().contains("unable to determine hash algorithm"));
    }

    #[test]
    fn test_randomart_png() {
        let config = AppConfig {
            matrix: MatrixKind::Randomart,
            output: OutputFormat::Png,
            square_size: 2,
            input: InputKind::Data,
            ..AppConfig::default()
        };
        let service = RenderService::new(&config).unwrap();
        let digest = DigestInput::acquire(InputKind::Data, "colorhash", None).unwrap();
        let output = service.render(&digest).unwrap();
        assert!(!output.is_text());
        assert_eq!(&output.as_bytes()[1..4], b"PNG");
    }

    #[test]
    fn test_oversized_png_is_an_error() {
        let config = AppConfig {
            output: OutputFormat::Png,
            square_size: 1 << 20,
            ..AppConfig::default()
        };
        let service = RenderService::new(&config).unwrap();
        assert_eq!(service.writer().extension(), "png");

        let err = service.render(&md5_zero()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Render(ColorhashError::Output(OutputError::ImageTooLarge { .. }))
        ));
    }
}
