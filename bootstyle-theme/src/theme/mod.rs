//! # Theme System
//!
//! This module provides the [Theme] palette and the color logic derived from it.
//!
//! ## Overview
//!
//! A theme is a name, a [Mode] and one color per [ColorToken]. Everything else a
//! style builder needs (hover and pressed colors, focus rings, disabled fills,
//! readable text) is computed from those eleven values on demand, so a theme
//! switch never leaves stale derived colors behind.
//!
//! - **[Theme]**: the immutable palette
//! - **[Shades]**: nine luminance-scaled derivatives of one token
//! - **[Platform]** / [scale_size]: DPI-aware size scaling
//! - **[builtin]**: the bundled light and dark themes
//!
//! ## Usage Examples
//!
//! ```rust
//! use bootstyle_theme::theme::builtin;
//! use bootstyle_theme::token::ColorToken;
//!
//! let theme = builtin::theme("darkly").unwrap();
//! let fill = theme.color(ColorToken::Primary);
//! let hover = theme.active_color(ColorToken::Primary);
//! let text = theme.contrast_foreground(ColorToken::Primary);
//! # let _ = (fill, hover, text);
//! ```

use crate::color::HexColor;
use crate::error::{ThemeError, ThemeResult};
use crate::token::{ColorToken, Mode};

/// The built-in themes.
pub mod builtin;
mod scaling;
mod shades;

pub use scaling::{scale_size, Platform};
pub use shades::{Shades, BASE_SHADE, SHADE_LADDER};

/// Opacity of a focus ring drawn over its surface.
const FOCUS_RING_ALPHA: f32 = 0.5;
/// Opacity of the foreground used to fill disabled controls.
const DISABLED_FILL_ALPHA: f32 = 0.10;
/// Opacity of the foreground used for disabled text.
const DISABLED_TEXT_ALPHA: f32 = 0.30;
/// Opacity of the accent used for ghost tints.
const SUBTLE_ALPHA: f32 = 0.12;
/// Opacity added per elevation level.
const ELEVATION_STEP: f32 = 0.03;

/// A named, mode-tagged palette of the eleven color roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    mode: Mode,
    colors: [HexColor; 11],
}

impl Theme {
    /// Create a theme from a list of token colors.
    ///
    /// Fails with [ThemeError::MissingColor] on the first token without a value.
    /// Later entries for the same token replace earlier ones.
    pub fn new(
        name: impl Into<String>,
        mode: Mode,
        colors: impl IntoIterator<Item = (ColorToken, HexColor)>,
    ) -> ThemeResult<Self> {
        let name = name.into();
        let mut slots: [Option<HexColor>; 11] = [None; 11];
        for (token, color) in colors {
            slots[token.index()] = Some(color);
        }

        let mut resolved = [HexColor::BLACK; 11];
        for token in ColorToken::ALL {
            resolved[token.index()] =
                slots[token.index()].ok_or_else(|| ThemeError::missing_color(&name, token))?;
        }

        Ok(Self::from_palette(name, mode, resolved))
    }

    /// Create a theme from a complete palette in [ColorToken::ALL] order.
    pub fn from_palette(name: impl Into<String>, mode: Mode, colors: [HexColor; 11]) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            mode,
            colors,
        }
    }

    /// The theme name (lowercase).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Light or dark.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Shorthand for `mode().is_dark()`.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// The color bound to `token`.
    pub fn color(&self, token: ColorToken) -> HexColor {
        self.colors[token.index()]
    }

    /// Iterate over every token and its color.
    pub fn colors(&self) -> impl Iterator<Item = (ColorToken, HexColor)> + '_ {
        ColorToken::ALL.into_iter().map(move |token| (token, self.color(token)))
    }

    /// The nine shades of `token`.
    pub fn shades(&self, token: ColorToken) -> Shades {
        Shades::from_color(self.color(token))
    }

    /// Text color to draw on top of `token`.
    ///
    /// `light` and `dark` map to the opposite extreme and `background` maps to
    /// `foreground`. Every other token gets `foreground` in dark mode and
    /// `background` in light mode.
    pub fn contrast_foreground(&self, token: ColorToken) -> HexColor {
        match token {
            ColorToken::Light => self.color(ColorToken::Dark),
            ColorToken::Dark => self.color(ColorToken::Light),
            ColorToken::Background => self.color(ColorToken::Foreground),
            _ if self.is_dark() => self.color(ColorToken::Foreground),
            _ => self.color(ColorToken::Background),
        }
    }

    /// Luminance-based choice between `foreground` and `background` for an arbitrary color.
    pub fn readable_on(&self, color: HexColor) -> HexColor {
        color.best_contrast(&[
            self.color(ColorToken::Foreground),
            self.color(ColorToken::Background),
        ])
    }

    /// Hover color: one shade lighter in light mode, one darker in dark mode.
    pub fn active_color(&self, token: ColorToken) -> HexColor {
        let shades = self.shades(token);
        if self.is_dark() {
            shades.darker(1)
        } else {
            shades.lighter(1)
        }
    }

    /// Pressed color: two shades lighter in light mode, two darker in dark mode.
    pub fn pressed_color(&self, token: ColorToken) -> HexColor {
        let shades = self.shades(token);
        if self.is_dark() {
            shades.darker(2)
        } else {
            shades.lighter(2)
        }
    }

    /// Border of a focused control: one shade away from the base, opposite to hover.
    pub fn focus_border(&self, token: ColorToken) -> HexColor {
        let shades = self.shades(token);
        if self.is_dark() {
            shades.lighter(1)
        } else {
            shades.darker(1)
        }
    }

    /// Translucent focus ring of `token` drawn over `surface`.
    pub fn focus_ring(&self, token: ColorToken, surface: HexColor) -> HexColor {
        self.color(token).mix(surface, FOCUS_RING_ALPHA)
    }

    /// Fill used for disabled controls on `surface`.
    pub fn disabled_color(&self, surface: HexColor) -> HexColor {
        self.color(ColorToken::Foreground).mix(surface, DISABLED_FILL_ALPHA)
    }

    /// Text color used for disabled controls on `surface`.
    pub fn on_disabled(&self, surface: HexColor) -> HexColor {
        self.color(ColorToken::Foreground).mix(surface, DISABLED_TEXT_ALPHA)
    }

    /// Faint tint of `token` on `surface`.
    pub fn subtle(&self, token: ColorToken, surface: HexColor) -> HexColor {
        self.color(token).mix(surface, SUBTLE_ALPHA)
    }

    /// Surface raised by `level` steps: darker in light mode, lighter in dark mode.
    pub fn elevate(&self, surface: HexColor, level: u8) -> HexColor {
        if level == 0 {
            return surface;
        }
        let toward = if self.is_dark() {
            HexColor::WHITE
        } else {
            self.color(ColorToken::Foreground)
        };
        toward.mix(surface, ELEVATION_STEP * level as f32)
    }

    /// Scale a baseline size for the toolkit `scaling` on the current platform.
    pub fn scale_size(&self, size: f64, scaling: f64) -> u32 {
        scale_size(size, scaling, Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(mode: Mode) -> Theme {
        Theme::from_palette(
            "Test",
            mode,
            [
                HexColor::from_u32(0x4582ec),
                HexColor::from_u32(0xadb5bd),
                HexColor::from_u32(0x02b875),
                HexColor::from_u32(0x17a2b8),
                HexColor::from_u32(0xf0ad4e),
                HexColor::from_u32(0xd9534f),
                HexColor::from_u32(0xf8f9fa),
                HexColor::from_u32(0x343a40),
                HexColor::from_u32(0x222222),
                HexColor::from_u32(0xeeeeee),
                HexColor::from_u32(0xbfbfbf),
            ],
        )
    }

    #[test]
    fn new_requires_every_token() {
        let partial = [(ColorToken::Primary, HexColor::BLACK)];
        match Theme::new("partial", Mode::Light, partial) {
            Err(ThemeError::MissingColor { token, .. }) => assert_eq!(token, ColorToken::Secondary),
            other => panic!("unexpected {other:?}"),
        }

        let full = palette(Mode::Light);
        let rebuilt = Theme::new("test", Mode::Light, full.colors()).unwrap();
        assert_eq!(rebuilt, full);
    }

    #[test]
    fn names_are_lowercased() {
        assert_eq!(palette(Mode::Light).name(), "test");
    }

    #[test]
    fn contrast_foreground_rules() {
        let dark = palette(Mode::Dark);
        assert_eq!(dark.contrast_foreground(ColorToken::Background), dark.color(ColorToken::Foreground));
        assert_eq!(dark.contrast_foreground(ColorToken::Primary), dark.color(ColorToken::Foreground));

        let light = palette(Mode::Light);
        assert_eq!(light.contrast_foreground(ColorToken::Light), light.color(ColorToken::Dark));
        assert_eq!(light.contrast_foreground(ColorToken::Dark), light.color(ColorToken::Light));
        assert_eq!(light.contrast_foreground(ColorToken::Success), light.color(ColorToken::Background));
    }

    #[test]
    fn state_offsets_invert_with_mode() {
        let light = palette(Mode::Light);
        let dark = palette(Mode::Dark);
        let shades = light.shades(ColorToken::Primary);

        assert_eq!(light.active_color(ColorToken::Primary), shades.get(3));
        assert_eq!(light.pressed_color(ColorToken::Primary), shades.get(2));
        assert_eq!(light.focus_border(ColorToken::Primary), shades.get(5));
        assert_eq!(dark.active_color(ColorToken::Primary), shades.get(5));
        assert_eq!(dark.pressed_color(ColorToken::Primary), shades.get(6));
        assert_eq!(dark.focus_border(ColorToken::Primary), shades.get(3));
    }

    #[test]
    fn derived_colors_are_pure() {
        let theme = palette(Mode::Dark);
        let surface = theme.color(ColorToken::Background);
        assert_eq!(theme.focus_ring(ColorToken::Info, surface), theme.focus_ring(ColorToken::Info, surface));
        assert_eq!(theme.elevate(surface, 0), surface);
        assert!(theme.elevate(surface, 2).relative_luminance() > surface.relative_luminance());
        assert_ne!(theme.disabled_color(surface), theme.on_disabled(surface));
    }
}
