use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorhash::models::{AppConfig, InputKind, MatrixKind, OutputFormat};
use colorhash::services::{DigestInput, RenderService};
use colorhash_core::{HashAlgorithm, PaletteFamily, Writer};

#[derive(Parser)]
#[command(name = "colorhash", version)]
#[command(about = "Create a piece of art based on the hash of a file")]
struct Cli {
    /// The input to use. Treated as a path ("-" for stdin), a hex digest or
    /// raw data depending on --input-type
    #[arg(default_value = "-")]
    input: String,

    /// Output file ("-" for stdout)
    #[arg(short, long = "out", value_name = "OUTFILE", default_value = "-")]
    output: PathBuf,

    /// Strategy that turns the hash into a matrix [default: nibble]
    #[arg(short, long, value_enum)]
    matrix: Option<MatrixKind>,

    /// Palette name, or "auto" [default: auto]
    #[arg(short, long)]
    palette: Option<String>,

    /// Hash algorithm [default: sha512, or inferred from hex input]
    #[arg(short, long = "hash", value_name = "ALGORITHM")]
    algorithm: Option<HashAlgorithm>,

    /// How the input is treated [default: path]
    #[arg(short = 'x', long, value_enum)]
    input_type: Option<InputKind>,

    /// How the output is generated [default: ansi]
    #[arg(short = 'y', long, value_enum)]
    output_type: Option<OutputFormat>,

    /// Edge length of each square in pixels, for SVG and PNG [default: 32]
    #[arg(short = 'z', long, value_name = "PX", alias = "svg-square-size")]
    square_size: Option<u32>,

    /// YAML config file (or set CONFIG_FILE)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the available palettes and exit
    #[arg(long)]
    list_palettes: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorhash=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(cli.config.as_deref())?;
    let config = apply_overrides(config, &cli);

    let service = RenderService::new(&config)?;

    if cli.list_palettes {
        list_palettes(&service);
        return Ok(());
    }

    let digest = DigestInput::acquire(config.input, &cli.input, config.algorithm)?;
    tracing::debug!(
        input = ?config.input,
        bytes = digest.bytes.len(),
        digest = %hex::encode(&digest.bytes),
        "Acquired digest"
    );

    let output = service.render(&digest)?;
    check_extension(&cli.output, service.writer());
    write_output(&cli.output, output.as_bytes())?;
    Ok(())
}

/// `--config` must exist; a missing CONFIG_FILE only warns.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return Ok(AppConfig::load(Some(path))?);
    }

    let from_env = std::env::var_os("CONFIG_FILE").map(PathBuf::from);
    match from_env {
        Some(path) if path.exists() => Ok(AppConfig::load(Some(&path))?),
        Some(path) => {
            tracing::warn!(path = %path.display(), "CONFIG_FILE does not exist, using defaults");
            Ok(AppConfig::default())
        }
        None => Ok(AppConfig::load(None)?),
    }
}

fn apply_overrides(mut config: AppConfig, cli: &Cli) -> AppConfig {
    if let Some(matrix) = cli.matrix {
        config.matrix = matrix;
    }
    if let Some(palette) = &cli.palette {
        config.palette = palette.clone();
    }
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = Some(algorithm);
    }
    if let Some(input) = cli.input_type {
        config.input = input;
    }
    if let Some(output) = cli.output_type {
        config.output = output;
    }
    if let Some(size) = cli.square_size {
        config.square_size = size;
    }
    config
}

fn list_palettes(service: &RenderService) {
    let registry = service.registry();
    for family in [
        PaletteFamily::Gradient,
        PaletteFamily::Multicolor,
        PaletteFamily::Flat,
        PaletteFamily::Custom,
    ] {
        let members = registry.family(family);
        if members.is_empty() {
            continue;
        }
        println!("{family}:");
        for named in members {
            println!("  {}", named.name);
        }
    }
}

/// Warn when the output file name suggests a different format.
fn check_extension(path: &Path, writer: &Writer) {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return;
    };
    if !ext.eq_ignore_ascii_case(writer.extension()) {
        tracing::warn!(
            path = %path.display(),
            media_type = writer.media_type(),
            "Output file extension does not match the output type"
        );
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes).context("Failed to write to stdout")?;
        stdout.flush().context("Failed to write to stdout")?;
        return Ok(());
    }

    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Wrote output");
    Ok(())
}
