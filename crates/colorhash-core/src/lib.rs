#![allow(clippy::module_inception)]

//! colorhash-core: deterministic images from hash digests
//!
//! A digest is turned into a small grid of 4-bit values (a [`Matrix`]),
//! each value is looked up in a 16-color [`Palette`], and the resulting
//! [`ColorMatrix`] is serialized as ANSI terminal art, SVG or indexed PNG.
//! The same digest always yields the same image.
//!
//! # Quick Start
//!
//! The [`HashArt`] builder runs the whole pipeline:
//!
//! ```
//! use colorhash_core::{HashArt, PaletteRegistry, Strategy, Writer, AnsiWriter};
//!
//! let registry = PaletteRegistry::builtin();
//! let digest = [0x5Au8; 32]; // a sha256 digest
//!
//! let output = HashArt::new(Strategy::Nibble)
//!     .render(&digest, &registry, &Writer::Ansi(AnsiWriter::new()))
//!     .unwrap();
//! assert!(output.is_text());
//! ```
//!
//! # Pipeline
//!
//! 1. [`Strategy::matricize`] validates the digest length against a
//!    [`HashAlgorithm`] and produces the grid:
//!    - [`Strategy::Nibble`] emits every nibble, high nibble first
//!    - [`Strategy::RandomArt`] counts the visits of a digest-driven walk
//! 2. A palette is taken from a [`PaletteRegistry`] by name, or chosen
//!    automatically as `candidates[sum(digest) % len]`
//! 3. [`colorize`] maps cells through the palette
//! 4. A [`Writer`] serializes the colors
//!
//! # Palettes
//!
//! The built-in registry holds three families, in this order:
//!
//! - gradient: a lightness sweep of one hue (`blue-light`, `blue-dark`, ...)
//! - multicolor: `rainbow` and `rainbow-reverse`
//! - flat: sixteen steps of one or more RGB channels (`red`, `black`, ...)
//!
//! Auto selection picks from the gradient family for nibble grids and the
//! multicolor family for random-art grids. The order of the registry is part
//! of the output contract: reordering it changes which palette a digest gets.
//!
//! Custom palettes can be registered on a registry value:
//!
//! ```
//! use colorhash_core::{Palette, PaletteFamily, PaletteRegistry};
//!
//! let mut registry = PaletteRegistry::builtin();
//! let grays: Vec<String> = (0..16).map(|i| format!("#{0:x}{0:x}{0:x}", i)).collect();
//! registry
//!     .register("nibble-gray", PaletteFamily::Custom, Palette::from_hex(&grays).unwrap())
//!     .unwrap();
//! assert_eq!(registry.family(PaletteFamily::Custom).len(), 1);
//! ```

pub mod api;
pub mod color;
pub mod colorize;
pub mod matrix;
pub mod output;
pub mod palette;


pub use api::{ColorhashError, HashArt, PaletteChoice};
pub use color::{Color, Hsl, Rgb};
pub use colorize::{colorize, ColorMatrix};
pub use matrix::{HashAlgorithm, Matrix, MatrixError, Strategy};
pub use output::{AnsiWriter, Output, OutputError, PngWriter, SvgWriter, Writer};
pub use palette::{
    select_palette, NamedPalette, Palette, PaletteError, PaletteFamily, PaletteRegistry,
    ParseColorError,
};
