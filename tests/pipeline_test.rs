//! Library-level tests of the digest -> config -> render path.

mod common;

use colorhash::models::{AppConfig, InputKind, MatrixKind, OutputFormat};
use colorhash::services::{DigestInput, RenderService};
use colorhash_core::{HashAlgorithm, PaletteFamily};
use common::fixtures::{self, digests};
use common::*;
use pretty_assertions::assert_eq;

fn render(config: &AppConfig, kind: InputKind, input: &str) -> Vec<u8> {
    let service = RenderService::new(config).unwrap();
    let digest = DigestInput::acquire(kind, input, config.algorithm).unwrap();
    service.render(&digest).unwrap().into_bytes()
}

#[test]
fn test_zero_md5_is_uniform_first_color() {
    let config = AppConfig {
        palette: "blue-dark".to_string(),
        output: OutputFormat::Png,
        square_size: 1,
        ..AppConfig::default()
    };
    let png = assert_png(&render(&config, InputKind::Hash, digests::MD5_ZERO));

    assert_eq!((png.width, png.height), (8, 4));
    assert_eq!(png.palette, vec![[0, 0, 0]]);
    assert!(png.pixels.iter().all(|&p| p == 0));
}

#[test]
fn test_all_ones_md5_is_uniform_last_color() {
    let config = AppConfig {
        palette: "red".to_string(),
        output: OutputFormat::Svg,
        square_size: 5,
        ..AppConfig::default()
    };
    let svg = String::from_utf8(render(&config, InputKind::Hash, digests::MD5_ONES)).unwrap();

    assert_eq!(assert_svg(&svg, 40, 20), 32);
    assert_eq!(svg.matches("fill=\"#ff0000\"").count(), 32);
}

#[test]
fn test_png_blocks_follow_cells() {
    let config = AppConfig {
        palette: "black".to_string(),
        output: OutputFormat::Png,
        square_size: 3,
        ..AppConfig::default()
    };
    let bytes = render(&config, InputKind::Hash, digests::MD5_EMPTY);
    let png = assert_png(&bytes);
    assert_eq!((png.width, png.height), (24, 12));

    // nibbles of d41d8cd9...: first cell 0xd, second 0x4
    let cell = |n: u8| [0x11 * n, 0x11 * n, 0x11 * n];
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(png.rgb(x, y), cell(0xd));
            assert_eq!(png.rgb(x + 3, y), cell(0x4));
        }
    }
}

#[test]
fn test_hash_input_infers_algorithm() {
    let config = AppConfig {
        output: OutputFormat::Svg,
        square_size: 1,
        ..AppConfig::default()
    };
    let svg = String::from_utf8(render(&config, InputKind::Hash, digests::SHA1_EMPTY)).unwrap();
    assert_eq!(assert_svg(&svg, 8, 5), 40);

    let config = AppConfig {
        matrix: MatrixKind::Randomart,
        ..config
    };
    let svg = String::from_utf8(render(&config, InputKind::Hash, digests::SHA256_EMPTY)).unwrap();
    assert_eq!(assert_svg(&svg, 8, 7), 56);
}

#[test]
fn test_data_and_path_inputs_agree() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "hello colorhash").unwrap();

    let config = AppConfig {
        algorithm: Some(HashAlgorithm::Sha256),
        ..AppConfig::default()
    };
    let from_path = render(&config, InputKind::Path, path.to_str().unwrap());
    let from_data = render(&config, InputKind::Data, "hello colorhash");
    assert_eq!(from_path, from_data);
    assert_ansi_grid(&String::from_utf8(from_data).unwrap(), 8, 8);
}

#[test]
fn test_config_file_registers_custom_palette() {
    let file = fixtures::write_config(&format!(
        "palette: mono\noutput: png\nsquare_size: 1\n{}",
        fixtures::mono_palette_yaml()
    ));
    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.output, OutputFormat::Png);

    let service = RenderService::new(&config).unwrap();
    assert_eq!(service.registry().family(PaletteFamily::Custom).len(), 1);

    let digest = DigestInput::acquire(InputKind::Hash, digests::MD5_ONES, None).unwrap();
    let png = assert_png(service.render(&digest).unwrap().as_bytes());
    assert_eq!(png.palette, vec![[0xff, 0xff, 0xff]]);
}

#[test]
fn test_auto_palettes_from_config() {
    let file = fixtures::write_config("output: svg\nsquare_size: 1\nauto_palettes: [white, black]\n");
    let config = AppConfig::load(Some(file.path())).unwrap();

    // byte sum of 16 x 0xff is 4080, even -> white
    let svg = String::from_utf8(render(&config, InputKind::Hash, digests::MD5_ONES)).unwrap();
    assert_eq!(svg.matches("fill=\"#000000\"").count(), 32);
}

#[test]
fn test_invalid_config_is_an_error() {
    let file = fixtures::write_config("matrix: spiral\n");
    let err = AppConfig::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Config error:"), "{err}");

    let missing = std::path::Path::new("/no/such/colorhash.yaml");
    assert!(AppConfig::load(Some(missing)).is_err());
}
