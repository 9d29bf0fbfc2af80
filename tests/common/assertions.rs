//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Decoded indexed PNG: dimensions, palette triples and one index per pixel
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub palette: Vec<[u8; 3]>,
    pub pixels: Vec<u8>,
}

impl DecodedPng {
    /// RGB of the pixel at (x, y)
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = self.pixels[(y * self.width + x) as usize];
        self.palette[idx as usize]
    }
}

/// Assert `bytes` is a 4-bit indexed PNG and decode it
pub fn assert_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );

    let mut decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("PNG header should decode");
    let palette: Vec<[u8; 3]> = reader
        .info()
        .palette
        .as_ref()
        .expect("indexed PNG must carry a palette")
        .chunks(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG data should decode");
    assert_eq!(info.bit_depth, png::BitDepth::Four, "Expected 4-bit depth");
    assert_eq!(info.color_type, png::ColorType::Indexed, "Expected indexed color");

    let mut pixels = Vec::with_capacity((info.width * info.height) as usize);
    for line in buf[..info.line_size * info.height as usize].chunks(info.line_size) {
        let row: Vec<u8> = line.iter().flat_map(|&b| [b >> 4, b & 0x0F]).collect();
        pixels.extend_from_slice(&row[..info.width as usize]);
    }

    DecodedPng {
        width: info.width,
        height: info.height,
        palette,
        pixels,
    }
}

/// Assert `text` is an SVG document of the given pixel size and return the
/// number of rects
pub fn assert_svg(text: &str, width: u32, height: u32) -> usize {
    let header = format!(
        "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    assert!(
        text.starts_with(&header),
        "Expected SVG header {header:?}, got {:?}",
        text.lines().next()
    );
    assert!(text.ends_with("</svg>"), "SVG should end with </svg>");
    text.matches("<rect ").count()
}

/// Assert ANSI output has `rows` lines of `cols` colored blocks
pub fn assert_ansi_grid(text: &str, cols: usize, rows: usize) {
    assert!(text.ends_with("\x1b[0m"), "Expected trailing reset");
    let body = &text[..text.len() - "\x1b[0m".len()];
    let lines: Vec<&str> = body.split_terminator('\n').collect();
    assert_eq!(lines.len(), rows, "row count");
    for line in lines {
        assert_eq!(line.matches("\x1b[38;2;").count(), cols, "cells in {line:?}");
        assert_eq!(line.matches("\u{2588}\u{2588}").count(), cols);
    }
}
