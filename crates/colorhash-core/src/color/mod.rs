//! Color types and conversion utilities
//!
//! A [`Color`] is stored in whichever representation it was defined in and
//! converted on demand:
//!
//! - [`Rgb`]: used by the ANSI and PNG writers and for hex input.
//! - [`Hsl`]: used by the built-in palette definitions.
//!
//! # Example
//!
//! ```
//! use colorhash_core::{Color, Hsl};
//!
//! let color = Color::from(Hsl::new(240.0, 100.0, 50.0));
//! assert_eq!(color.to_rgb().to_bytes(), [0, 0, 255]);
//! assert_eq!(color.to_html(), "hsl(240.00,100.00%,50.00%)");
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;

/// A color in one of the supported representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
}

impl Color {
    /// HTML color string in the color's own representation.
    ///
    /// HSL colors render as `hsl(...)`, so callers that need hex output
    /// should go through [`Color::to_rgb`] first.
    pub fn to_html(&self) -> String {
        match self {
            Color::Rgb(rgb) => rgb.to_html(),
            Color::Hsl(hsl) => hsl.to_html(),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Color::Rgb(rgb) => *rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match self {
            Color::Rgb(rgb) => rgb.to_hsl(),
            Color::Hsl(hsl) => *hsl,
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_identity_conversions() {
        let rgb = Rgb::new(12.5, 200.0, 99.9);
        assert_eq!(Color::from(rgb).to_rgb(), rgb);

        let hsl = Hsl::new(42.0, 10.0, 90.0);
        assert_eq!(Color::from(hsl).to_hsl(), hsl);
    }

    #[test]
    fn test_html_follows_representation() {
        assert_eq!(Color::from(Rgb::from_u8(1, 2, 3)).to_html(), "#010203");
        assert_eq!(
            Color::from(Hsl::new(1.0, 2.0, 3.0)).to_html(),
            "hsl(1.00,2.00%,3.00%)"
        );
    }

    /// RGB -> HSL -> RGB must reproduce the input within one unit after
    /// rounding, for arbitrary colors.
    #[test]
    fn test_rgb_hsl_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x00c0_1042);
        for _ in 0..1000 {
            let original = Rgb::new(
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
                rng.gen_range(0.0..255.0),
            );
            let back = Color::from(original).to_hsl().to_rgb();

            let a = original.to_bytes();
            let b = back.to_bytes();
            for channel in 0..3 {
                let diff = (a[channel] as i32 - b[channel] as i32).abs();
                assert!(
                    diff <= 1,
                    "round trip drifted: {original:?} -> {back:?} (channel {channel})"
                );
            }
        }
    }

    #[test]
    fn test_hsl_rgb_hsl_is_stable_for_palette_colors() {
        for i in 0..16 {
            let hsl = Hsl::new(i as f64 * 24.0 % 360.0, 100.0, 50.0);
            let back = hsl.to_rgb().to_hsl();
            assert!((back.h - hsl.h).abs() < 1e-6, "{hsl:?} -> {back:?}");
            assert!((back.s - hsl.s).abs() < 1e-6);
            assert!((back.l - hsl.l).abs() < 1e-6);
        }
    }
}
