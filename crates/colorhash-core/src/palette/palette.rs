//! Fixed-size palette indexed by 4-bit matrix values.

use std::ops::Index;

use super::error::PaletteError;
use super::PALETTE_SIZE;
use crate::color::{Color, Rgb};

/// An immutable table of exactly 16 colors.
///
/// Matrix cells are nibbles, so every value a matricizer produces is a valid
/// index. Indexing with a value above 15 panics; use [`Palette::get`] when the
/// index does not come from a [`Matrix`](crate::Matrix).
///
/// # Example
///
/// ```
/// use colorhash_core::{Color, Palette, Rgb};
///
/// let colors: Vec<Color> = (0..16u32).map(|i| Rgb::from_u32(0x111111 * i).into()).collect();
/// let palette = Palette::new(&colors).unwrap();
///
/// assert_eq!(palette[15].to_html(), "#ffffff");
/// assert!(Palette::new(&colors[..4]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from exactly 16 colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WrongSize`] for any other count.
    pub fn new(colors: &[Color]) -> Result<Self, PaletteError> {
        let colors: [Color; PALETTE_SIZE] =
            colors.try_into().map_err(|_| PaletteError::WrongSize {
                expected: PALETTE_SIZE,
                actual: colors.len(),
            })?;
        Ok(Self { colors })
    }

    /// Create a palette from 16 hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::WrongSize`] for the wrong count, or
    /// [`PaletteError::ParseColor`] naming the first entry that fails to parse.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        if hex.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongSize {
                expected: PALETTE_SIZE,
                actual: hex.len(),
            });
        }
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.as_ref()
                    .parse::<Rgb>()
                    .map(Color::from)
                    .map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&colors)
    }

    /// Look up a color, returning `None` outside 0..=15.
    #[inline]
    pub fn get(&self, index: u8) -> Option<&Color> {
        self.colors.get(index as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// The same colors in reverse order.
    pub fn reversed(&self) -> Self {
        let mut colors = self.colors;
        colors.reverse();
        Self { colors }
    }
}

impl Index<u8> for Palette {
    type Output = Color;

    #[inline]
    fn index(&self, index: u8) -> &Color {
        &self.colors[index as usize]
    }
}
