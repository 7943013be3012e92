//! # Theme Error Types
//!
//! This module provides the error types for the theming layer: palette
//! construction, color parsing, theme lookup and theme definition loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::token::ColorToken;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// A color string could not be parsed as a hex color.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// A theme definition does not provide every color token.
    #[error("Theme '{theme}' is missing required color '{token}'")]
    MissingColor {
        /// The theme being constructed.
        theme: String,
        /// The first token without a value.
        token: ColorToken,
    },

    /// Error parsing a theme configuration or definition file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a missing color error.
    pub fn missing_color(theme: impl Into<String>, token: ColorToken) -> Self {
        Self::MissingColor {
            theme: theme.into(),
            token,
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
