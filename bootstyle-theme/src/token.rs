//! Color tokens and theme modes.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The eleven named color roles every theme provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    /// Main accent.
    Primary,
    /// Secondary accent.
    Secondary,
    /// Positive outcome.
    Success,
    /// Informational accent.
    Info,
    /// Warning accent.
    Warning,
    /// Destructive or error accent.
    Danger,
    /// Light extreme of the palette.
    Light,
    /// Dark extreme of the palette.
    Dark,
    /// Window and surface background.
    #[serde(alias = "bg")]
    Background,
    /// Default text color.
    #[serde(alias = "fg")]
    Foreground,
    /// Separator and outline color.
    #[serde(alias = "bordercolor")]
    Border,
}

impl ColorToken {
    /// Every token, in palette order.
    pub const ALL: [ColorToken; 11] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Success,
        ColorToken::Info,
        ColorToken::Warning,
        ColorToken::Danger,
        ColorToken::Light,
        ColorToken::Dark,
        ColorToken::Background,
        ColorToken::Foreground,
        ColorToken::Border,
    ];

    /// The tokens a bootstyle descriptor may name as its color.
    pub const ACCENTS: [ColorToken; 8] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Success,
        ColorToken::Info,
        ColorToken::Warning,
        ColorToken::Danger,
        ColorToken::Light,
        ColorToken::Dark,
    ];

    /// Get the string representation of the token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Success => "success",
            ColorToken::Info => "info",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Light => "light",
            ColorToken::Dark => "dark",
            ColorToken::Background => "background",
            ColorToken::Foreground => "foreground",
            ColorToken::Border => "border",
        }
    }

    /// Look a token up by name, accepting the `bg`/`fg`/`bordercolor` aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let token = match name.trim().to_ascii_lowercase().as_str() {
            "primary" => ColorToken::Primary,
            "secondary" => ColorToken::Secondary,
            "success" => ColorToken::Success,
            "info" => ColorToken::Info,
            "warning" => ColorToken::Warning,
            "danger" => ColorToken::Danger,
            "light" => ColorToken::Light,
            "dark" => ColorToken::Dark,
            "background" | "bg" => ColorToken::Background,
            "foreground" | "fg" => ColorToken::Foreground,
            "border" | "bordercolor" => ColorToken::Border,
            _ => return None,
        };
        Some(token)
    }

    /// Position of the token inside a palette array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the token is one of the eight accent colors.
    pub fn is_accent(self) -> bool {
        self.index() < ColorToken::ACCENTS.len()
    }
}

impl Display for ColorToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a theme is drawn light-on-dark or dark-on-light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dark text on light surfaces.
    #[default]
    Light,
    /// Light text on dark surfaces.
    Dark,
}

impl Mode {
    /// Returns `true` for [Mode::Dark].
    pub fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// Get the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for token in ColorToken::ALL {
            assert_eq!(ColorToken::from_name(token.as_str()), Some(token));
        }
        assert_eq!(ColorToken::from_name("BG"), Some(ColorToken::Background));
        assert_eq!(ColorToken::from_name("selectbg"), None);
    }

    #[test]
    fn accents_come_first() {
        assert!(ColorToken::Dark.is_accent());
        assert!(!ColorToken::Background.is_accent());
        assert_eq!(ColorToken::Border.index(), 10);
    }
}
