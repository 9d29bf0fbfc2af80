//! HSL color type
//!
//! Built-in palettes are defined in HSL because their gradients are linear
//! sweeps of a single HSL component.

use super::rgb::Rgb;

/// A color in HSL space.
///
/// Hue is in degrees (0.0..360.0, wrapped on conversion), saturation and
/// lightness are percentages (0.0..=100.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// CSS functional form, `hsl(H,S%,L%)` with two decimals per component.
    ///
    /// ```
    /// use colorhash_core::Hsl;
    /// assert_eq!(Hsl::new(120.0, 100.0, 25.0).to_html(), "hsl(120.00,100.00%,25.00%)");
    /// ```
    pub fn to_html(self) -> String {
        format!("hsl({:.2},{:.2}%,{:.2}%)", self.h, self.s, self.l)
    }

    /// Convert to RGB on the 0..=255 scale.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
    }
}
