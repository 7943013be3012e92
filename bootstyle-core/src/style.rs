// SPDX-License-Identifier: LGPL-3.0-only

//! # Style Engine
//!
//! [Style] ties the pieces together: it parses bootstyle strings, dispatches
//! to the [BuilderRegistry], and remembers which style names were built under
//! the active theme.
//!
//! A style name is built at most once per theme. Switching themes resets the
//! host, applies the base styles and rebuilds every style requested so far,
//! in the order they were first requested.
//!
//! Builds are all-or-nothing: a builder's declarations reach the host only
//! when it succeeds, and the bitmaps of a failed build are released.

use std::sync::Arc;

use bootstyle_theme::typography::Typography;
use bootstyle_theme::{Theme, ThemeChange, ThemeProvider};
use indexmap::{IndexMap, IndexSet};
use log::{debug, trace, warn};
use serde::Serialize;

use crate::bootstyle::{self, StyleDescriptor};
use crate::builder::{BuildRequest, BuilderContext};
use crate::error::{StyleError, StyleResult};
use crate::host::{StagedStyleSystem, StyleSystem};
use crate::icon::{GlyphIconProvider, IconProvider};
use crate::image::AssetStore;
use crate::options::StyleOptions;
use crate::registry::BuilderRegistry;
use crate::widget::Orientation;

/// Toolkit styles configured by base handlers after every theme switch.
pub const BASE_STYLES: [&str; 8] = [
    ".",
    "TFrame",
    "TLabel",
    "TLabelframe",
    "TSeparator",
    "TSizegrip",
    "Treeview",
    "TPanedwindow",
];

/// A style that was requested, and the theme it was last built under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledStyle {
    /// Style name.
    pub name: String,
    /// The descriptor it was built from.
    pub descriptor: StyleDescriptor,
    /// Name of the theme it was last built under.
    pub theme: String,
}

/// The style engine, writing into a host [StyleSystem].
pub struct Style<H: StyleSystem> {
    host: H,
    provider: ThemeProvider,
    registry: Arc<BuilderRegistry>,
    assets: AssetStore,
    icons: Arc<dyn IconProvider>,
    typography: Typography,
    built: IndexSet<String>,
    requests: IndexMap<String, CompiledStyle>,
    base_applied: bool,
}

impl<H: StyleSystem> Style<H> {
    /// Create an engine with the built-in themes, templates and glyph icons.
    pub fn new(host: H, registry: Arc<BuilderRegistry>) -> Self {
        Self {
            host,
            provider: ThemeProvider::new(),
            registry,
            assets: AssetStore::new(),
            icons: Arc::new(GlyphIconProvider::new()),
            typography: Typography::default(),
            built: IndexSet::new(),
            requests: IndexMap::new(),
            base_applied: false,
        }
    }

    /// Use `provider` for themes.
    pub fn with_provider(mut self, provider: ThemeProvider) -> Self {
        self.provider = provider;
        self
    }

    /// Use `assets` for image templates.
    pub fn with_assets(mut self, assets: AssetStore) -> Self {
        self.assets = assets;
        self
    }

    /// Use `icons` for the `icon` option.
    pub fn with_icons(mut self, icons: Arc<dyn IconProvider>) -> Self {
        self.icons = icons;
        self
    }

    /// Use `typography` for fonts.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// The host style system.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host style system.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The theme catalog.
    pub fn provider(&self) -> &ThemeProvider {
        &self.provider
    }

    /// The builder registry.
    pub fn registry(&self) -> &Arc<BuilderRegistry> {
        &self.registry
    }

    /// The active theme.
    pub fn theme(&self) -> Arc<Theme> {
        self.provider.active()
    }

    /// Whether `name` has been built under the active theme.
    pub fn is_built(&self, name: &str) -> bool {
        self.built.contains(name)
    }

    /// Every requested style, in first-request order.
    pub fn compiled_styles(&self) -> impl Iterator<Item = &CompiledStyle> {
        self.requests.values()
    }

    /// Parse `bootstyle` for a widget of toolkit class `native_class` and
    /// make sure its style exists. Returns the style name.
    pub fn resolve(
        &mut self,
        bootstyle: &str,
        native_class: &str,
        orientation: Option<Orientation>,
        options: StyleOptions,
    ) -> StyleResult<String> {
        let descriptor = bootstyle::parse_with_options(bootstyle, native_class, orientation, options);
        self.build(descriptor)
    }

    /// Make sure the style for `descriptor` exists. Returns the style name.
    pub fn build(&mut self, descriptor: StyleDescriptor) -> StyleResult<String> {
        let name = descriptor.style_name();
        if self.built.contains(&name) {
            trace!("Style '{}' already built", name);
            return Ok(name);
        }
        self.apply_base_styles()?;

        let theme = self.provider.active();
        self.run_builder(&theme, &name, &descriptor)?;
        self.built.insert(name.clone());
        self.requests
            .entry(name.clone())
            .and_modify(|compiled| compiled.theme = theme.name().to_string())
            .or_insert_with(|| CompiledStyle {
                name: name.clone(),
                descriptor,
                theme: theme.name().to_string(),
            });
        Ok(name)
    }

    /// Switch the active theme and rebuild every requested style.
    ///
    /// Switching to the active theme only applies the base styles if that has
    /// not happened yet. A style that fails to rebuild is left out and the
    /// others are still rebuilt; the first failure is returned once all were
    /// tried, with the new theme active. Resolving the style again retries it.
    pub fn theme_use(&mut self, name: &str) -> StyleResult<ThemeChange> {
        let change = self.provider.use_theme(name)?;
        if !change.changed() && self.base_applied {
            return Ok(change);
        }
        debug!("Switching styles from '{}' to '{}'", change.previous, change.current);
        self.rebuild()?;
        Ok(change)
    }

    /// Add or replace a theme. Replacing the active theme rebuilds every style.
    pub fn register_theme(&mut self, theme: Theme) -> StyleResult<()> {
        let active = self.provider.is_active(theme.name());
        self.provider.register(theme);
        if active && self.base_applied {
            self.rebuild()?;
        }
        Ok(())
    }

    /// Configure the root style `.` and the other [BASE_STYLES] if needed.
    ///
    /// Missing base handlers are logged and skipped.
    pub fn apply_base_styles(&mut self) -> StyleResult<()> {
        if self.base_applied {
            return Ok(());
        }
        let theme = self.provider.active();
        let registry = Arc::clone(&self.registry);
        self.staged(&theme, |ctx| {
            for name in BASE_STYLES {
                match registry.handler(name) {
                    Ok(handler) => handler(ctx)?,
                    Err(err) => warn!("{}; skipping", err),
                }
            }
            Ok(())
        })?;
        self.base_applied = true;
        Ok(())
    }

    fn rebuild(&mut self) -> StyleResult<()> {
        self.host.reset()?;
        self.icons.clear_cache();
        self.built.clear();
        self.base_applied = false;
        self.apply_base_styles()?;

        let theme = self.provider.active();
        let pending: Vec<(String, StyleDescriptor)> = self
            .requests
            .values()
            .map(|compiled| (compiled.name.clone(), compiled.descriptor.clone()))
            .collect();
        debug!("Rebuilding {} styles for theme '{}'", pending.len(), theme.name());
        let mut first_error: Option<StyleError> = None;
        for (name, descriptor) in pending {
            if let Err(err) = self.run_builder(&theme, &name, &descriptor) {
                warn!("Could not rebuild '{}' for theme '{}': {}", name, theme.name(), err);
                first_error.get_or_insert(err);
                continue;
            }
            self.built.insert(name.clone());
            if let Some(compiled) = self.requests.get_mut(&name) {
                compiled.theme = theme.name().to_string();
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn run_builder(&mut self, theme: &Theme, name: &str, descriptor: &StyleDescriptor) -> StyleResult<()> {
        let registry = Arc::clone(&self.registry);
        let request = BuildRequest::new(name, descriptor);
        self.staged(theme, |ctx| registry.dispatch(ctx, &request))
    }

    /// Run `build` against a staged host and commit its declarations only if it succeeds.
    fn staged(
        &mut self,
        theme: &Theme,
        build: impl FnOnce(&mut BuilderContext<'_>) -> StyleResult<()>,
    ) -> StyleResult<()> {
        let mut staged = StagedStyleSystem::new(&mut self.host);
        let built = {
            let mut ctx = BuilderContext::new(&mut staged, theme, &self.assets, self.icons.as_ref(), &self.typography);
            build(&mut ctx)
        };
        match built {
            Ok(()) => Ok(staged.commit()?),
            Err(err) => {
                if let Err(release) = staged.discard() {
                    warn!("Could not release the images of a failed build: {}", release);
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::host::{HostCall, ImageElement, RecordingStyleSystem, StyleValue};
    use crate::image::names;
    use crate::state::StateSpec;
    use bootstyle_theme::HexColor;
    use crate::registry::RegistryTable;
    use crate::widget::{Variant, WidgetClass};
    use bootstyle_theme::ColorToken;

    fn label(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
        let color = ctx.theme().color(request.descriptor.color.unwrap_or(ColorToken::Primary));
        ctx.configure(request.style, [("foreground", StyleValue::from(color))])
    }

    fn frame(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
        let background = ctx.theme().color(ColorToken::Background);
        ctx.configure("TFrame", [("background", StyleValue::from(background))])
    }

    /// Creates its border element, then fails under dark themes.
    fn fragile(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
        let color = ctx.theme().color(ColorToken::Primary);
        let handle = ctx.recolor(names::LINE, &[color])?;
        ctx.element_create(&request.element("border"), ImageElement::new(StateSpec::new().otherwise(handle)))?;
        if ctx.theme().is_dark() {
            return Err(StyleError::IconNotFound("moon".into()));
        }
        ctx.configure(request.style, [("relief", StyleValue::from("flat"))])
    }

    fn load(table: &mut RegistryTable) {
        table.register(WidgetClass::Label, Variant::Default, label);
        table.register(WidgetClass::Button, Variant::Default, fragile);
        table.register_handler("TFrame", frame);
    }

    fn engine() -> Style<RecordingStyleSystem> {
        Style::new(RecordingStyleSystem::default(), Arc::new(BuilderRegistry::with_loader(load)))
    }

    #[test]
    fn builds_each_style_once() {
        let mut style = engine();
        let name = style.resolve("info", "TLabel", None, StyleOptions::new()).unwrap();
        assert_eq!(name, "info.TLabel");
        style.host_mut().clear_calls();
        style.resolve("info", "TLabel", None, StyleOptions::new()).unwrap();
        assert!(style.host().calls().is_empty());
        assert!(style.host().style("TFrame").is_some());
    }

    #[test]
    fn theme_switch_replays_requests() {
        let mut style = engine();
        style.resolve("info", "TLabel", None, StyleOptions::new()).unwrap();
        style.resolve("danger", "TLabel", None, StyleOptions::new()).unwrap();
        style.theme_use("darkly").unwrap();

        let darkly = bootstyle_theme::theme::builtin::theme("darkly").unwrap();
        let recorded = style.host().style("info.TLabel").unwrap();
        assert_eq!(recorded.config["foreground"], StyleValue::from(darkly.color(ColorToken::Info)));
        assert!(style.host().calls().contains(&HostCall::Reset));
        let names: Vec<_> = style.compiled_styles().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["info.TLabel", "danger.TLabel"]);
        assert!(style.compiled_styles().all(|c| c.theme == "darkly"));
    }

    #[test]
    fn failed_builds_are_not_cached() {
        let mut style = engine();
        let err = style.resolve("primary", "TEntry", None, StyleOptions::new()).unwrap_err();
        assert!(matches!(err, StyleError::BuilderNotFound { .. }));
        assert!(!style.is_built("primary.TEntry"));
        assert_eq!(style.compiled_styles().count(), 0);
    }

    #[test]
    fn unknown_theme_keeps_the_current_one() {
        let mut style = engine();
        assert!(matches!(style.theme_use("nope"), Err(StyleError::Theme(_))));
        assert_eq!(style.theme().name(), "litera");
    }

    #[test]
    fn failed_builds_leave_the_host_untouched() {
        let mut style = engine();
        style.theme_use("darkly").unwrap();
        let images = style.host().image_count();
        for _ in 0..2 {
            let err = style.resolve("", "TButton", None, StyleOptions::new()).unwrap_err();
            assert!(matches!(err, StyleError::IconNotFound(ref name) if name == "moon"), "{err}");
            assert!(style.host().element("TButton.border").is_none());
            assert!(style.host().style("TButton").is_none());
            assert_eq!(style.host().image_count(), images);
        }
    }

    #[test]
    fn rebuild_skips_failing_styles_and_keeps_the_rest() {
        let mut style = engine();
        style.resolve("info", "TLabel", None, StyleOptions::new()).unwrap();
        style.resolve("", "TButton", None, StyleOptions::new()).unwrap();

        let err = style.theme_use("darkly").unwrap_err();
        assert!(matches!(err, StyleError::IconNotFound(_)));
        assert_eq!(style.theme().name(), "darkly");
        assert!(style.is_built("info.TLabel"));
        assert!(!style.is_built("TButton"));
        assert!(style.host().element("TButton.border").is_none());
        assert!(style.host().style("TFrame").is_some());

        style.theme_use("litera").unwrap();
        assert!(style.is_built("TButton"));
        let recorded = style.host().style("TButton").unwrap();
        assert_eq!(recorded.config["relief"], StyleValue::from("flat"));
    }

    #[test]
    fn theme_switch_clears_the_icon_cache() {
        let icons = Arc::new(GlyphIconProvider::new());
        icons.render("check", 16, HexColor::BLACK).unwrap();
        assert_eq!(icons.cache().len(), 1);

        let mut style = engine().with_icons(icons.clone());
        style.theme_use("darkly").unwrap();
        assert!(icons.cache().is_empty());
    }
}
