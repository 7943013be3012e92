#![warn(missing_docs)]

//! # Bootstyle Theming
//!
//! Palettes, color math and theme management for the bootstyle engine.
//!
//! ## Overview
//!
//! - **[Theme](theme::Theme)**: an immutable palette of eleven [ColorToken](token::ColorToken)s plus a [Mode](token::Mode)
//! - **[HexColor](color::HexColor)**: sRGB color with HSL, blending and WCAG contrast helpers
//! - **[ThemeProvider](provider::ThemeProvider)**: named theme catalog with change notifications
//! - **[ThemeDefinition](definition::ThemeDefinition)**: JSON/TOML theme files
//! - **[ThemeConfig](config::ThemeConfig)**: startup theme selection from env vars and files
//! - **[Typography](typography::Typography)**: font tokens
//!
//! ## Quick Start
//!
//! ```rust
//! use bootstyle_theme::provider::ThemeProvider;
//! use bootstyle_theme::token::ColorToken;
//!
//! let mut provider = ThemeProvider::new();
//! provider.use_theme("superhero").unwrap();
//!
//! let theme = provider.active();
//! let text = theme.contrast_foreground(ColorToken::Primary);
//! assert_eq!(text, theme.color(ColorToken::Foreground));
//! ```
//!
//! ## Derived Colors
//!
//! Nothing beyond the eleven token colors is stored. Shades, state colors,
//! focus rings and elevation are computed from the palette whenever a style
//! builder asks for them.

/// Contains the [color::HexColor] type and color math.
pub mod color;
/// Contains the [config::ThemeConfig] struct for theme configuration.
pub mod config;
/// Contains theme definition files.
pub mod definition;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [provider::ThemeProvider] for runtime theme switching.
pub mod provider;
/// Contains the [theme::Theme] struct and built-in themes.
pub mod theme;
/// Contains the [token::ColorToken] and [token::Mode] enums.
pub mod token;
/// Contains font tokens.
pub mod typography;

pub use color::HexColor;
pub use error::{ThemeError, ThemeResult};
pub use provider::{SharedThemeProvider, ThemeChange, ThemeProvider};
pub use theme::Theme;
pub use token::{ColorToken, Mode};
