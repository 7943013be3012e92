//! # Theme Configuration
//!
//! Selects the startup theme and extra theme definitions from environment
//! variables, a TOML configuration file, or code.
//!
//! ## Environment Variables
//!
//! - `BOOTSTYLE_THEME`: name of the theme to activate
//! - `BOOTSTYLE_THEME_FALLBACK`: theme to activate if the default is unknown
//! - `BOOTSTYLE_THEME_FILE`: a JSON or TOML theme definition file to load first
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! default = "superhero"
//! fallback = "darkly"
//! definitions = ["themes/ocean.toml", "themes/extra.json"]
//! ```
//!
//! Relative definition paths are resolved against the configuration file.
//!
//! ## Usage Examples
//!
//! ```rust
//! use bootstyle_theme::config::ThemeConfig;
//! use bootstyle_theme::provider::ThemeProvider;
//!
//! let mut provider = ThemeProvider::new();
//! let change = ThemeConfig::new()
//!     .with_default_theme("cyborg")
//!     .with_fallback_theme("darkly")
//!     .apply(&mut provider)
//!     .unwrap();
//! assert_eq!(change.current, "cyborg");
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::definition::load_themes_file;
use crate::error::{ThemeError, ThemeResult};
use crate::provider::{ThemeChange, ThemeProvider};
use crate::theme::builtin::DEFAULT_THEME;

/// Environment variable naming the default theme.
pub const THEME_ENV: &str = "BOOTSTYLE_THEME";
/// Environment variable naming the fallback theme.
pub const THEME_FALLBACK_ENV: &str = "BOOTSTYLE_THEME_FALLBACK";
/// Environment variable pointing at a theme definition file.
pub const THEME_FILE_ENV: &str = "BOOTSTYLE_THEME_FILE";

/// Startup theme selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Theme to activate; [DEFAULT_THEME] when unset.
    pub default_theme: Option<String>,
    /// Theme to activate when the default is not registered.
    pub fallback_theme: Option<String>,
    /// Definition files loaded before activation, in order.
    pub definitions: Vec<PathBuf>,
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Default, Deserialize)]
struct ThemeSection {
    default: Option<String>,
    fallback: Option<String>,
    #[serde(default)]
    definitions: Vec<PathBuf>,
}

impl ThemeConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the `BOOTSTYLE_THEME*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            default_theme: non_empty(THEME_ENV),
            fallback_theme: non_empty(THEME_FALLBACK_ENV),
            definitions: non_empty(THEME_FILE_ENV).map(PathBuf::from).into_iter().collect(),
        }
    }

    /// Load a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config =
            Self::from_toml(&content).map_err(|err| ThemeError::parse_error(path, err.to_string()))?;

        if let Some(dir) = path.parent() {
            for definition in &mut config.definitions {
                if definition.is_relative() {
                    *definition = dir.join(&*definition);
                }
            }
        }
        Ok(config)
    }

    /// Parse TOML configuration content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self {
            default_theme: file.theme.default,
            fallback_theme: file.theme.fallback,
            definitions: file.theme.definitions,
        })
    }

    /// Overlay the values set in `other` onto this configuration.
    ///
    /// Definition files are appended.
    pub fn merge(mut self, other: ThemeConfig) -> Self {
        if other.default_theme.is_some() {
            self.default_theme = other.default_theme;
        }
        if other.fallback_theme.is_some() {
            self.fallback_theme = other.fallback_theme;
        }
        self.definitions.extend(other.definitions);
        self
    }

    /// Set the default theme.
    pub fn with_default_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = Some(name.into());
        self
    }

    /// Set the fallback theme.
    pub fn with_fallback_theme(mut self, name: impl Into<String>) -> Self {
        self.fallback_theme = Some(name.into());
        self
    }

    /// Add a definition file.
    pub fn with_definitions(mut self, path: impl Into<PathBuf>) -> Self {
        self.definitions.push(path.into());
        self
    }

    /// The theme name [apply](Self::apply) tries first.
    pub fn default_theme_name(&self) -> &str {
        self.default_theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Register every definition file and activate the configured theme.
    ///
    /// An unknown default theme falls back to the fallback theme when one is set.
    pub fn apply(&self, provider: &mut ThemeProvider) -> ThemeResult<ThemeChange> {
        for path in &self.definitions {
            for theme in load_themes_file(path)? {
                debug!("Registering theme '{}' from {:?}", theme.name(), path);
                provider.register(theme);
            }
        }

        let name = self.default_theme_name();
        match (provider.use_theme(name), &self.fallback_theme) {
            (Err(ThemeError::ThemeNotFound { .. }), Some(fallback)) => {
                warn!("Theme '{}' not found, falling back to '{}'", name, fallback);
                provider.use_theme(fallback)
            }
            (result, _) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_variables_from_lookup() {
        let config = ThemeConfig::from_lookup(|key| match key {
            THEME_ENV => Some("cosmo".to_string()),
            THEME_FALLBACK_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.default_theme.as_deref(), Some("cosmo"));
        assert_eq!(config.fallback_theme, None);
        assert!(config.definitions.is_empty());
    }

    #[test]
    fn parses_toml_section() {
        let config = ThemeConfig::from_toml(
            r#"
            [theme]
            default = "flatly"
            definitions = ["extra.json"]
            "#,
        )
        .unwrap();
        assert_eq!(config.default_theme_name(), "flatly");
        assert_eq!(config.definitions, vec![PathBuf::from("extra.json")]);
        assert_eq!(ThemeConfig::from_toml("").unwrap(), ThemeConfig::new());
    }

    #[test]
    fn falls_back_on_unknown_theme() {
        let mut provider = ThemeProvider::new();
        let change = ThemeConfig::new()
            .with_default_theme("nonexistent")
            .with_fallback_theme("vapor")
            .apply(&mut provider)
            .unwrap();
        assert_eq!(change.current, "vapor");

        let err = ThemeConfig::new().with_default_theme("nonexistent").apply(&mut provider);
        assert!(matches!(err, Err(ThemeError::ThemeNotFound { .. })));
    }

    #[test]
    fn merge_prefers_later_values() {
        let merged = ThemeConfig::new()
            .with_default_theme("cosmo")
            .with_fallback_theme("litera")
            .merge(ThemeConfig::new().with_default_theme("solar"));
        assert_eq!(merged.default_theme_name(), "solar");
        assert_eq!(merged.fallback_theme.as_deref(), Some("litera"));
    }
}
