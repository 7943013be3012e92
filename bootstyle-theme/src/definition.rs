//! # Theme Definitions
//!
//! Serializable theme descriptions that can be loaded from JSON or TOML.
//!
//! A definition file holds a single theme, a list of themes, or a table with a
//! `themes` list:
//!
//! ```toml
//! [[themes]]
//! name = "ocean"
//! type = "dark"
//!
//! [themes.colors]
//! primary = "#1b6ca8"
//! secondary = "#4e5d6c"
//! success = "#5cb85c"
//! info = "#5bc0de"
//! warning = "#f0ad4e"
//! danger = "#d9534f"
//! light = "#abb6c2"
//! dark = "#20374c"
//! bg = "#0b1d2e"
//! fg = "#ffffff"
//! border = "#222222"
//! ```
//!
//! Color keys accept the `bg`, `fg` and `bordercolor` aliases. Keys that do not
//! name a color token are ignored.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;
use crate::token::{ColorToken, Mode};

/// A theme as written in a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Theme name.
    pub name: String,
    /// Light or dark.
    #[serde(rename = "type", default)]
    pub mode: Mode,
    /// Token name to color.
    pub colors: IndexMap<String, HexColor>,
}

impl ThemeDefinition {
    /// Convert into a [Theme], failing on the first missing token.
    pub fn to_theme(&self) -> ThemeResult<Theme> {
        let mut colors = Vec::with_capacity(self.colors.len());
        for (key, color) in &self.colors {
            match ColorToken::from_name(key) {
                Some(token) => colors.push((token, *color)),
                None => debug!("Theme '{}': ignoring unknown color key '{}'", self.name, key),
            }
        }
        Theme::new(self.name.as_str(), self.mode, colors)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<&Theme> for ThemeDefinition {
    fn from(theme: &Theme) -> Self {
        Self {
            name: theme.name().to_string(),
            mode: theme.mode(),
            colors: theme
                .colors()
                .map(|(token, color)| (token.as_str().to_string(), color))
                .collect(),
        }
    }
}

/// The accepted shapes of a definition file.
#[derive(Deserialize)]
#[serde(untagged)]
enum DefinitionFile {
    Many(Vec<ThemeDefinition>),
    Wrapped { themes: Vec<ThemeDefinition> },
    Single(ThemeDefinition),
}

impl DefinitionFile {
    fn into_vec(self) -> Vec<ThemeDefinition> {
        match self {
            DefinitionFile::Many(themes) | DefinitionFile::Wrapped { themes } => themes,
            DefinitionFile::Single(theme) => vec![theme],
        }
    }
}

/// Serialization format of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl DefinitionFormat {
    /// Pick the format from a file extension; anything but `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DefinitionFormat::Toml,
            _ => DefinitionFormat::Json,
        }
    }
}

/// Parse definitions from a string.
pub fn parse_definitions(content: &str, format: DefinitionFormat) -> ThemeResult<Vec<ThemeDefinition>> {
    let file: DefinitionFile = match format {
        DefinitionFormat::Json => serde_json::from_str(content)?,
        DefinitionFormat::Toml => toml::from_str(content)?,
    };
    Ok(file.into_vec())
}

/// Parse definitions from a string and build their themes.
pub fn load_themes_str(content: &str, format: DefinitionFormat) -> ThemeResult<Vec<Theme>> {
    parse_definitions(content, format)?
        .iter()
        .map(ThemeDefinition::to_theme)
        .collect()
}

/// Read a definition file and build its themes.
pub fn load_themes_file(path: impl AsRef<Path>) -> ThemeResult<Vec<Theme>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let themes = load_themes_str(&content, DefinitionFormat::from_path(path)).map_err(|err| match err {
        ThemeError::Serialization(details) => ThemeError::parse_error(path, details),
        other => other,
    })?;
    debug!("Loaded {} theme(s) from {:?}", themes.len(), path);
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin;

    const OCEAN_JSON: &str = r##"{
        "name": "Ocean",
        "type": "dark",
        "colors": {
            "primary": "#1b6ca8", "secondary": "#4e5d6c", "success": "#5cb85c",
            "info": "#5bc0de", "warning": "#f0ad4e", "danger": "#d9534f",
            "light": "#abb6c2", "dark": "#20374c", "bg": "#0b1d2e",
            "fg": "#ffffff", "border": "#222222", "selectbg": "#123456"
        }
    }"##;

    #[test]
    fn single_json_definition() {
        let themes = load_themes_str(OCEAN_JSON, DefinitionFormat::Json).unwrap();
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].name(), "ocean");
        assert!(themes[0].is_dark());
        assert_eq!(themes[0].color(ColorToken::Background).to_hex(), "#0b1d2e");
    }

    #[test]
    fn missing_token_is_reported() {
        let json = r##"{"name": "half", "colors": {"primary": "#ffffff"}}"##;
        match load_themes_str(json, DefinitionFormat::Json) {
            Err(ThemeError::MissingColor { theme, token }) => {
                assert_eq!(theme, "half");
                assert_eq!(token, ColorToken::Secondary);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn definitions_round_trip_through_json() {
        let theme = builtin::theme("solar").unwrap();
        let json = ThemeDefinition::from(&theme).to_json().unwrap();
        let back = load_themes_str(&json, DefinitionFormat::Json).unwrap();
        assert_eq!(back, vec![theme]);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(DefinitionFormat::from_path(Path::new("a/themes.TOML")), DefinitionFormat::Toml);
        assert_eq!(DefinitionFormat::from_path(Path::new("themes.json")), DefinitionFormat::Json);
    }
}
