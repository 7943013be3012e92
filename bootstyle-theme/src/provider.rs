use std::fmt;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use log::debug;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{builtin, Theme};
use crate::token::Mode;

/// Emitted whenever the active theme changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeChange {
    /// Theme active before the switch.
    pub previous: String,
    /// Theme active after the switch.
    pub current: String,
    /// Mode of the new theme.
    pub mode: Mode,
}

impl ThemeChange {
    /// Returns `false` when the switch targeted the theme that was already active.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Handle returned by [ThemeProvider::subscribe].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&ThemeChange) + Send + Sync>;

/// Catalog of named themes with one active theme.
///
/// Theme names are case-insensitive and stored lowercase. There is always an
/// active theme.
pub struct ThemeProvider {
    themes: IndexMap<String, Arc<Theme>>,
    active: Arc<Theme>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ThemeProvider {
    /// Create a provider with the built-in themes and the default theme active.
    pub fn new() -> Self {
        let themes: IndexMap<String, Arc<Theme>> = builtin::all()
            .into_iter()
            .map(|theme| (theme.name().to_string(), Arc::new(theme)))
            .collect();
        let active = themes
            .get(builtin::DEFAULT_THEME)
            .cloned()
            .unwrap_or_else(|| Arc::new(fallback_theme()));
        Self {
            themes,
            active,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Create a provider holding only `theme`, which becomes active.
    pub fn with_theme(theme: Theme) -> Self {
        let theme = Arc::new(theme);
        let mut themes = IndexMap::new();
        themes.insert(theme.name().to_string(), theme.clone());
        Self {
            themes,
            active: theme,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Add a theme, replacing any theme with the same name.
    ///
    /// Replacing the active theme updates the active palette without a change
    /// notification.
    pub fn register(&mut self, theme: Theme) -> Option<Arc<Theme>> {
        let theme = Arc::new(theme);
        if self.active.name() == theme.name() {
            self.active = theme.clone();
        }
        self.themes.insert(theme.name().to_string(), theme)
    }

    /// Activate the theme called `name` and notify listeners.
    ///
    /// Activating the current theme returns an unchanged event and notifies nobody.
    pub fn use_theme(&mut self, name: &str) -> ThemeResult<ThemeChange> {
        let key = name.trim().to_ascii_lowercase();
        let theme = self.themes.get(&key).cloned().ok_or_else(|| ThemeError::not_found(name))?;

        let change = ThemeChange {
            previous: self.active.name().to_string(),
            current: theme.name().to_string(),
            mode: theme.mode(),
        };
        if !change.changed() {
            return Ok(change);
        }

        debug!("Switching theme '{}' -> '{}'", change.previous, change.current);
        self.active = theme;
        for (_, listener) in &self.listeners {
            listener(&change);
        }
        Ok(change)
    }

    /// The active theme.
    pub fn active(&self) -> Arc<Theme> {
        self.active.clone()
    }

    /// Name of the active theme.
    pub fn active_name(&self) -> &str {
        self.active.name()
    }

    /// Whether `name` is the active theme.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.name().eq_ignore_ascii_case(name.trim())
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(&name.trim().to_ascii_lowercase()).cloned()
    }

    /// Registered theme names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Call `listener` after every effective theme switch.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&ThemeChange) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("themes", &self.themes.keys().collect::<Vec<_>>())
            .field("active", &self.active.name())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn fallback_theme() -> Theme {
    Theme::from_palette("default", Mode::Light, [crate::color::HexColor::WHITE; 11])
}

/// A thread-safe, shared theme provider.
pub type SharedThemeProvider = Arc<RwLock<ThemeProvider>>;

/// Create a shared provider with the built-in themes.
pub fn create_shared_theme_provider() -> SharedThemeProvider {
    Arc::new(RwLock::new(ThemeProvider::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn starts_with_default_theme() {
        let provider = ThemeProvider::new();
        assert!(provider.is_active("LITERA"));
        assert_eq!(provider.names().len(), builtin::names().count());
    }

    #[test]
    fn unknown_theme_fails() {
        let mut provider = ThemeProvider::new();
        assert!(matches!(provider.use_theme("missing"), Err(ThemeError::ThemeNotFound { .. })));
        assert!(provider.is_active("litera"));
    }

    #[test]
    fn listeners_fire_on_effective_switch_only() {
        let mut provider = ThemeProvider::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = provider.subscribe(move |change| {
            assert_eq!(change.current, "darkly");
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!provider.use_theme("litera").unwrap().changed());
        let change = provider.use_theme("Darkly").unwrap();
        assert_eq!(change.previous, "litera");
        assert_eq!(change.mode, Mode::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(provider.unsubscribe(id));
        assert!(!provider.unsubscribe(id));
    }

    #[test]
    fn replacing_the_active_theme_updates_it() {
        let mut provider = ThemeProvider::new();
        let replacement = Theme::from_palette("litera", Mode::Dark, [crate::color::HexColor::BLACK; 11]);
        assert!(provider.register(replacement).is_some());
        assert!(provider.active().is_dark());
    }
}
