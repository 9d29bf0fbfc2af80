//! Helpers for defining palettes as HSL sweeps.

use super::error::PaletteError;
use super::palette::Palette;
use super::PALETTE_SIZE;
use crate::color::{Color, Hsl};

/// Evenly spaced samples from `start` to `stop`, both endpoints included.
///
/// The step is `(stop - start) / (steps - 1)`, so the last sample is exactly
/// `stop`. A single step yields `[start]`.
///
/// ```
/// use colorhash_core::palette::quantize;
///
/// let q = quantize(0.0, 15.0, 16);
/// assert_eq!(q.first(), Some(&0.0));
/// assert_eq!(q.last(), Some(&15.0));
/// assert_eq!(q.len(), 16);
/// ```
pub fn quantize(start: f64, stop: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![start; steps];
    }
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            if i == steps - 1 {
                stop
            } else {
                start + i as f64 * (stop - start) / last
            }
        })
        .collect()
}

/// One HSL component of a palette definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    /// Same value for every entry
    Constant(f64),
    /// Linear sweep from the first to the second value, endpoints included
    Range(f64, f64),
    /// Explicit per-entry values; must contain exactly 16
    Values(Vec<f64>),
}

impl Channel {
    fn expand(self, channel: &'static str) -> Result<Vec<f64>, PaletteError> {
        let values = match self {
            Channel::Constant(v) => vec![v; PALETTE_SIZE],
            Channel::Range(start, stop) => quantize(start, stop, PALETTE_SIZE),
            Channel::Values(values) => values,
        };
        if values.len() != PALETTE_SIZE {
            return Err(PaletteError::ChannelLength {
                channel,
                actual: values.len(),
            });
        }
        Ok(values)
    }
}

impl From<f64> for Channel {
    fn from(value: f64) -> Self {
        Channel::Constant(value)
    }
}

impl From<std::ops::Range<f64>> for Channel {
    fn from(range: std::ops::Range<f64>) -> Self {
        Channel::Range(range.start, range.end)
    }
}

/// Build a 16-color palette from hue, saturation and lightness channels.
///
/// # Errors
///
/// Returns [`PaletteError::ChannelLength`] if a [`Channel::Values`] does not
/// hold 16 entries.
///
/// ```
/// use colorhash_core::palette::hsl_palette;
///
/// // red, lightness from black to full red
/// let palette = hsl_palette(0.0, 100.0, 0.0..50.0).unwrap();
/// assert_eq!(palette[0].to_rgb().to_bytes(), [0, 0, 0]);
/// assert_eq!(palette[15].to_rgb().to_bytes(), [255, 0, 0]);
/// ```
pub fn hsl_palette(
    hue: impl Into<Channel>,
    sat: impl Into<Channel>,
    light: impl Into<Channel>,
) -> Result<Palette, PaletteError> {
    let hue = hue.into().expand("hue")?;
    let sat = sat.into().expand("saturation")?;
    let light = light.into().expand("lightness")?;

    let colors: Vec<Color> = hue
        .into_iter()
        .zip(sat)
        .zip(light)
        .map(|((h, s), l)| Hsl::new(h, s, l).into())
        .collect();
    Palette::new(&colors)
}
