//! # Color Utilities
//!
//! Pure color-space helpers used by themes and style builders.
//!
//! ## Overview
//!
//! - **[HexColor]**: an opaque 24-bit sRGB color that parses from and prints as `#rrggbb`
//! - **[Hsl]**: hue/saturation/lightness representation for relative adjustments
//! - **Contrast**: WCAG relative luminance and contrast ratio, used to pick readable text
//! - **Blending**: [HexColor::mix] simulates drawing a translucent color over an opaque one
//!
//! ## Usage Examples
//!
//! ```rust
//! use bootstyle_theme::color::HexColor;
//!
//! let primary: HexColor = "#4582ec".parse().unwrap();
//! let tint = primary.mix(HexColor::WHITE, 0.12);
//! let text = primary.best_contrast(&[HexColor::BLACK, HexColor::WHITE]);
//! assert_eq!(text, HexColor::WHITE);
//! # let _ = tint;
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ThemeError;

/// An opaque sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

/// A color in hue/saturation/lightness form.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation fraction.
    pub s: f32,
    /// Lightness fraction.
    pub l: f32,
}

impl HexColor {
    /// Pure black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Create a color from its channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional, case is ignored).
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let hex = value.trim().trim_start_matches('#');
        let invalid = || ThemeError::InvalidColor(value.to_string());
        if !hex.is_ascii() {
            return Err(invalid());
        }

        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let v = digit.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = v * 17;
                }
                Ok(Self::from_rgb8(channels[0], channels[1], channels[2]))
            },
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::from_rgb8(r, g, b))
            },
            _ => Err(invalid()),
        }
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The channels as an array.
    pub const fn to_rgb8(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Multiply every channel by `factor`, clamping to `[0, 255]`.
    pub fn scale(self, factor: f32) -> Self {
        let channel = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::from_rgb8(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Simulate painting `self` with the given opacity over the opaque `base`.
    ///
    /// `alpha` is clamped to `[0, 1]`; `0` yields `base`, `1` yields `self`.
    pub fn mix(self, base: HexColor, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let channel = |top: u8, bottom: u8| {
            (top as f32 * alpha + bottom as f32 * (1.0 - alpha))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::from_rgb8(
            channel(self.r, base.r),
            channel(self.g, base.g),
            channel(self.b, base.b),
        )
    }

    /// Convert to hue/saturation/lightness.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f32::EPSILON {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl { h: h * 60.0, s, l }
    }

    /// Convert from hue/saturation/lightness.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::from_rgb8(channel(r), channel(g), channel(b))
    }

    /// Shift hue (degrees) and saturation/lightness (fractions), clamping the result.
    pub fn adjust_hsl(self, dh: f32, ds: f32, dl: f32) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(Hsl {
            h: hsl.h + dh,
            s: (hsl.s + ds).clamp(0.0, 1.0),
            l: (hsl.l + dl).clamp(0.0, 1.0),
        })
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two colors, in `[1, 21]`.
    pub fn contrast_ratio(self, other: HexColor) -> f64 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Pick the candidate with the highest contrast against `self`.
    ///
    /// Ties keep the earlier candidate; an empty slice yields black or white.
    pub fn best_contrast(self, candidates: &[HexColor]) -> HexColor {
        let fallback = if self.relative_luminance() > 0.179 {
            HexColor::BLACK
        } else {
            HexColor::WHITE
        };
        candidates
            .iter()
            .copied()
            .fold(None, |best: Option<(HexColor, f64)>, candidate| {
                let ratio = self.contrast_ratio(candidate);
                match best {
                    Some((_, best_ratio)) if best_ratio >= ratio => best,
                    _ => Some((candidate, ratio)),
                }
            })
            .map(|(color, _)| color)
            .unwrap_or(fallback)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let hex = String::deserialize(deserializer)?;
        HexColor::parse(&hex).map_err(Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(HexColor::parse("#4582EC").unwrap(), HexColor::from_u32(0x4582ec));
        assert_eq!(HexColor::parse("fff").unwrap(), HexColor::WHITE);
        assert_eq!(HexColor::parse(" #000 ").unwrap(), HexColor::BLACK);
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("#gg0000").is_err());
    }

    #[test]
    fn displays_lowercase_hex() {
        assert_eq!(HexColor::from_rgb8(255, 0, 171).to_string(), "#ff00ab");
    }

    #[test]
    fn scale_clamps_channels() {
        let c = HexColor::from_rgb8(200, 100, 0);
        assert_eq!(c.scale(1.4), HexColor::from_rgb8(255, 140, 0));
        assert_eq!(c.scale(0.5), HexColor::from_rgb8(100, 50, 0));
    }

    #[test]
    fn mix_endpoints() {
        let red = HexColor::from_rgb8(255, 0, 0);
        assert_eq!(red.mix(HexColor::WHITE, 0.0), HexColor::WHITE);
        assert_eq!(red.mix(HexColor::WHITE, 1.0), red);
        assert_eq!(HexColor::BLACK.mix(HexColor::WHITE, 0.5), HexColor::from_rgb8(128, 128, 128));
    }

    #[test]
    fn hsl_round_trip_is_stable() {
        for packed in [0x4582ec, 0x02b875, 0xf0ad4e, 0x343a40, 0xffffff, 0x000000] {
            let color = HexColor::from_u32(packed);
            let back = HexColor::from_hsl(color.to_hsl());
            for (a, b) in color.to_rgb8().into_iter().zip(back.to_rgb8()) {
                assert!(a.abs_diff(b) <= 1, "{color} -> {back}");
            }
        }
    }

    #[test]
    fn adjust_lightness_brightens() {
        let base = HexColor::from_u32(0x375a7f);
        let lighter = base.adjust_hsl(0.0, 0.0, 0.1);
        assert!(lighter.relative_luminance() > base.relative_luminance());
    }

    #[test]
    fn contrast_picks_readable_text() {
        assert!((HexColor::BLACK.contrast_ratio(HexColor::WHITE) - 21.0).abs() < 1e-9);
        let yellow = HexColor::from_u32(0xf0ad4e);
        assert_eq!(yellow.best_contrast(&[HexColor::WHITE, HexColor::BLACK]), HexColor::BLACK);
        assert_eq!(HexColor::from_u32(0x2c3e50).best_contrast(&[]), HexColor::WHITE);
    }
}
