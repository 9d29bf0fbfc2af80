//! Named, ordered collection of palettes.
//!
//! The registry is an ordinary value: build one with
//! [`PaletteRegistry::builtin`] (or [`PaletteRegistry::empty`] in tests), add
//! custom palettes, then pass it by reference into the pipeline. Order is
//! significant because automatic selection indexes into it.

use std::fmt;

use super::builder::hsl_palette;
use super::error::PaletteError;
use super::palette::Palette;
use crate::color::{Color, Rgb};

/// Palette family, used to pick the candidates for automatic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFamily {
    /// One RGB channel (or all of them) scaled in sixteen steps
    Flat,
    /// Light and dark lightness sweeps of a single hue
    Gradient,
    /// Full hue sweeps
    Multicolor,
    /// Palettes registered by the user
    Custom,
}

impl PaletteFamily {
    pub fn name(self) -> &'static str {
        match self {
            PaletteFamily::Flat => "flat",
            PaletteFamily::Gradient => "gradient",
            PaletteFamily::Multicolor => "multicolor",
            PaletteFamily::Custom => "custom",
        }
    }
}

impl fmt::Display for PaletteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered palette.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedPalette {
    pub name: String,
    pub family: PaletteFamily,
    pub palette: Palette,
}

/// Hue and palette name for each gradient pair. Yellow has no light variant.
const GRADIENT_HUES: &[(&str, f64, f64, bool)] = &[
    // name, hue, saturation, has light variant
    ("red", 0.0, 100.0, true),
    ("orange", 30.0, 100.0, true),
    ("yellow", 60.0, 100.0, false),
    ("green", 120.0, 100.0, true),
    ("cyan", 180.0, 100.0, true),
    ("blue", 240.0, 100.0, true),
    ("purple", 270.0, 100.0, true),
    ("magenta", 300.0, 100.0, true),
    ("pink", 330.0, 100.0, true),
    ("gray", 0.0, 0.0, true),
];

/// Channel multiplier for each flat palette. `white` is `black` inverted.
const FLAT_TINTS: &[(&str, u32)] = &[
    ("red", 0x110000),
    ("green", 0x001100),
    ("blue", 0x000011),
    ("black", 0x111111),
    ("cyan", 0x001111),
    ("yellow", 0x111100),
    ("magenta", 0x110011),
];

/// Ordered collection of named palettes.
///
/// # Example
///
/// ```
/// use colorhash_core::{PaletteFamily, PaletteRegistry};
///
/// let registry = PaletteRegistry::builtin();
/// assert!(registry.get("rainbow").is_ok());
/// assert!(registry.get("yellow-light").is_err());
/// assert_eq!(registry.family(PaletteFamily::Multicolor).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    entries: Vec<NamedPalette>,
}

impl PaletteRegistry {
    /// A registry with no palettes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in palettes: gradient family, then multicolor, then flat.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for named in gradient_palettes()
            .into_iter()
            .chain(multicolor_palettes())
            .chain(flat_palettes())
        {
            registry.entries.push(named);
        }
        registry
    }

    /// Append a palette.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateName`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        family: PaletteFamily,
        palette: Palette,
    ) -> Result<(), PaletteError> {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(PaletteError::DuplicateName(name));
        }
        self.entries.push(NamedPalette {
            name,
            family,
            palette,
        });
        Ok(())
    }

    /// Look up a palette by name.
    pub fn get(&self, name: &str) -> Result<&NamedPalette, PaletteError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))
    }

    /// All palettes of one family, in registration order.
    pub fn family(&self, family: PaletteFamily) -> Vec<&NamedPalette> {
        self.entries.iter().filter(|e| e.family == family).collect()
    }

    /// Look up several palettes, keeping the order of `names`.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&NamedPalette>, PaletteError> {
        names.iter().map(|n| self.get(n.as_ref())).collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedPalette> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pick `candidates[sum(digest) % len]`.
///
/// Returns `None` when there are no candidates. The result depends on the
/// order of `candidates`.
///
/// ```
/// use colorhash_core::{select_palette, PaletteFamily, PaletteRegistry};
///
/// let registry = PaletteRegistry::builtin();
/// let multicolor = registry.family(PaletteFamily::Multicolor);
///
/// // 1 + 2 = 3, 3 % 2 = 1
/// let chosen = select_palette(&[1, 2], &multicolor).unwrap();
/// assert_eq!(chosen.name, "rainbow-reverse");
/// ```
pub fn select_palette<'a>(
    digest: &[u8],
    candidates: &[&'a NamedPalette],
) -> Option<&'a NamedPalette> {
    if candidates.is_empty() {
        return None;
    }
    let total: u64 = digest.iter().map(|&b| b as u64).sum();
    let index = (total % candidates.len() as u64) as usize;
    Some(candidates[index])
}

fn named(name: impl Into<String>, family: PaletteFamily, palette: Palette) -> NamedPalette {
    NamedPalette {
        name: name.into(),
        family,
        palette,
    }
}

fn gradient_palettes() -> Vec<NamedPalette> {
    let mut out = Vec::new();
    for &(name, hue, sat, has_light) in GRADIENT_HUES {
        if has_light {
            let light = hsl_palette(hue, sat, 50.0..100.0)
                .expect("constant and range channels always expand to 16 values");
            out.push(named(format!("{name}-light"), PaletteFamily::Gradient, light));
        }
        let dark = hsl_palette(hue, sat, 0.0..50.0)
            .expect("constant and range channels always expand to 16 values");
        out.push(named(format!("{name}-dark"), PaletteFamily::Gradient, dark));
    }
    out
}

fn multicolor_palettes() -> Vec<NamedPalette> {
    let rainbow = hsl_palette(0.0..360.0, 100.0, 50.0)
        .expect("constant and range channels always expand to 16 values");
    let reverse = rainbow.reversed();
    vec![
        named("rainbow", PaletteFamily::Multicolor, rainbow),
        named("rainbow-reverse", PaletteFamily::Multicolor, reverse),
    ]
}

fn flat_palettes() -> Vec<NamedPalette> {
    let tint = |step: u32, i: u32| -> Color { Rgb::from_u32(step * i).into() };

    let mut out: Vec<NamedPalette> = FLAT_TINTS
        .iter()
        .map(|&(name, step)| {
            let colors: Vec<Color> = (0..16).map(|i| tint(step, i)).collect();
            named(name, PaletteFamily::Flat, flat(&colors))
        })
        .collect();

    let white: Vec<Color> = (0..16).map(|i| tint(0x111111, 0xF - i)).collect();
    out.push(named("white", PaletteFamily::Flat, flat(&white)));
    out
}

fn flat(colors: &[Color]) -> Palette {
    Palette::new(colors).expect("flat palettes are generated with 16 entries")
}
