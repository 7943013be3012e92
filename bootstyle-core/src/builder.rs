// SPDX-License-Identifier: LGPL-3.0-only

//! # Style Builder Protocol
//!
//! Every builder follows the same steps:
//!
//! 1. Resolve [Roles] from the active theme.
//! 2. Recolor one image per state combination ([BuilderContext::images]).
//! 3. Register element images with most-specific-first state maps
//!    ([BuilderContext::element_create]).
//! 4. Register the layout tree ([BuilderContext::layout]).
//! 5. Configure scalar properties ([BuilderContext::configure]) and state
//!    maps ([BuilderContext::map]).
//! 6. Apply the `icon` option, tracking the foreground state map
//!    ([BuilderContext::apply_icon]).
//!
//! Errors are not caught; they propagate to the dispatch caller.

use bootstyle_theme::typography::Typography;
use bootstyle_theme::{ColorToken, HexColor, Theme};
use log::trace;

use crate::bootstyle::StyleDescriptor;
use crate::error::{StyleError, StyleResult};
use crate::host::{BitmapHandle, ElementSpec, ImageElement, LayoutNode, StyleConfig, StyleSystem, StyleValue};
use crate::icon::IconProvider;
use crate::image::{recolor_image, AssetStore};
use crate::options::{IconSpec, OptionValue, SURFACE_COLOR};
use crate::state::StateSpec;

/// Icon size in points when the `icon` option names none.
pub const DEFAULT_ICON_SIZE: u32 = 16;

/// What a builder is asked to build.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// The resolved style name.
    pub style: &'a str,
    /// The parsed descriptor.
    pub descriptor: &'a StyleDescriptor,
}

impl<'a> BuildRequest<'a> {
    /// A request to build `descriptor` under `style`.
    pub fn new(style: &'a str, descriptor: &'a StyleDescriptor) -> Self {
        Self { style, descriptor }
    }

    /// Name of the element `part` of this style, e.g. `primary.TButton.border`.
    pub fn element(&self, part: &str) -> String {
        format!("{}.{}", self.style, part)
    }

    /// Name of the sub-style `suffix`, e.g. `primary.TNotebook.Tab`.
    pub fn substyle(&self, suffix: &str) -> String {
        format!("{}.{}", self.style, suffix)
    }
}

/// The semantic colors of one style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roles {
    /// Token the accent comes from.
    pub accent_token: ColorToken,
    /// Accent color.
    pub accent: HexColor,
    /// Surface the widget sits on.
    pub surface: HexColor,
    /// Accent while hovered.
    pub active: HexColor,
    /// Accent while pressed.
    pub pressed: HexColor,
    /// Border of a focused control.
    pub focus_border: HexColor,
    /// Focus ring around the control.
    pub focus_ring: HexColor,
    /// Fill of a disabled control.
    pub disabled: HexColor,
    /// Faint accent tint on the surface.
    pub subtle: HexColor,
    /// Text on the accent.
    pub on_accent: HexColor,
    /// Text on the surface.
    pub on_surface: HexColor,
    /// Text of a disabled control.
    pub on_disabled: HexColor,
    /// Neutral border.
    pub border: HexColor,
}

impl Roles {
    /// Resolve the roles of `descriptor`, using `default_accent` when it names no color.
    ///
    /// The surface is the `surface_color` option (a token, a literal color or a
    /// token name) and `background` otherwise.
    pub fn resolve(theme: &Theme, descriptor: &StyleDescriptor, default_accent: ColorToken) -> Self {
        let accent_token = descriptor.color.unwrap_or(default_accent);
        let background = (Some(ColorToken::Background), theme.color(ColorToken::Background));
        let (surface_token, surface) = match descriptor.surface {
            Some(token) => (Some(token), theme.color(token)),
            None => match descriptor.extra_options.get(SURFACE_COLOR) {
                Some(OptionValue::Hex(color)) => (None, *color),
                Some(OptionValue::Str(text)) => HexColor::parse(text).map_or(background, |color| (None, color)),
                _ => background,
            },
        };
        let on_surface = match surface_token {
            Some(token) => theme.contrast_foreground(token),
            None => theme.readable_on(surface),
        };

        Self {
            accent_token,
            accent: theme.color(accent_token),
            surface,
            active: theme.active_color(accent_token),
            pressed: theme.pressed_color(accent_token),
            focus_border: theme.focus_border(accent_token),
            focus_ring: theme.focus_ring(accent_token, surface),
            disabled: theme.disabled_color(surface),
            subtle: theme.subtle(accent_token, surface),
            on_accent: theme.contrast_foreground(accent_token),
            on_surface,
            on_disabled: theme.on_disabled(surface),
            border: theme.color(ColorToken::Border),
        }
    }
}

fn check_order<T>(owner: &str, states: &StateSpec<T>) -> StyleResult<()> {
    match states.ordering_violation() {
        Some((general, specific)) => Err(StyleError::StateOrder {
            style: owner.to_string(),
            general: general.to_string(),
            specific: specific.to_string(),
        }),
        None => Ok(()),
    }
}

/// Everything a builder may use: the host, the active theme, templates,
/// icons and fonts.
pub struct BuilderContext<'a> {
    host: &'a mut dyn StyleSystem,
    theme: &'a Theme,
    assets: &'a AssetStore,
    icons: &'a dyn IconProvider,
    typography: &'a Typography,
    scaling: f64,
}

impl<'a> BuilderContext<'a> {
    /// Create a context. The scaling is read from the host once.
    pub fn new(
        host: &'a mut dyn StyleSystem,
        theme: &'a Theme,
        assets: &'a AssetStore,
        icons: &'a dyn IconProvider,
        typography: &'a Typography,
    ) -> Self {
        let scaling = host.scaling();
        Self {
            host,
            theme,
            assets,
            icons,
            typography,
            scaling,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// The font tokens.
    pub fn typography(&self) -> &'a Typography {
        self.typography
    }

    /// Toolkit pixels per point.
    pub fn scaling(&self) -> f64 {
        self.scaling
    }

    /// Scale a size given in points to pixels.
    pub fn scale(&self, size: f64) -> u32 {
        self.theme.scale_size(size, self.scaling)
    }

    /// Display size of a length measured on a template, which is authored at twice its size.
    pub fn template_px(&self, authored: f64) -> u32 {
        ((authored * 0.5 * self.scaling).round() as u32).max(1)
    }

    /// The host, for calls the helpers below do not cover.
    pub fn host(&mut self) -> &mut dyn StyleSystem {
        &mut *self.host
    }

    /// Recolor `template` and hand the bitmap to the host.
    pub fn recolor(&mut self, template: &str, colors: &[HexColor]) -> StyleResult<BitmapHandle> {
        let template = self.assets.get(template)?;
        let image = recolor_image(&template, colors, self.scaling)?;
        Ok(self.host.create_image(image)?)
    }

    /// Recolor `template` once per distinct color list in `states`.
    pub fn images(&mut self, template: &str, states: &StateSpec<Vec<HexColor>>) -> StyleResult<StateSpec<BitmapHandle>> {
        let mut made: Vec<(Vec<HexColor>, BitmapHandle)> = Vec::new();
        let handles = states.try_map(|colors| -> StyleResult<BitmapHandle> {
            if let Some((_, handle)) = made.iter().find(|(seen, _)| seen == colors) {
                return Ok(*handle);
            }
            let handle = self.recolor(template, colors)?;
            made.push((colors.clone(), handle));
            Ok(handle)
        })?;
        trace!("Created {} images from '{}' for {} states", made.len(), template, states.len());
        Ok(handles)
    }

    /// Create an image element. Its state map must be most-specific-first.
    pub fn element_create(&mut self, name: &str, element: ImageElement) -> StyleResult<()> {
        check_order(name, &element.states)?;
        self.host.element_create(name, &ElementSpec::Image(element))?;
        Ok(())
    }

    /// Create an element copied from a toolkit theme such as `clam`.
    pub fn element_from(&mut self, name: &str, theme: &str, element: Option<&str>) -> StyleResult<()> {
        let spec = ElementSpec::From {
            theme: theme.to_string(),
            element: element.map(str::to_string),
        };
        self.host.element_create(name, &spec)?;
        Ok(())
    }

    /// Merge scalar options into `style`.
    pub fn configure<'k>(
        &mut self,
        style: &str,
        options: impl IntoIterator<Item = (&'k str, StyleValue)>,
    ) -> StyleResult<()> {
        let config: StyleConfig = options.into_iter().map(|(name, value)| (name.to_string(), value)).collect();
        self.host.configure(style, &config)?;
        Ok(())
    }

    /// Set the state map of `option`. It must be most-specific-first.
    pub fn map(&mut self, style: &str, option: &str, states: &StateSpec<StyleValue>) -> StyleResult<()> {
        check_order(&format!("{style}:{option}"), states)?;
        self.host.map(style, option, states)?;
        Ok(())
    }

    /// [map](Self::map) for a color-valued option.
    pub fn map_colors(&mut self, style: &str, option: &str, states: &StateSpec<HexColor>) -> StyleResult<()> {
        self.map(style, option, &states.map(|color| StyleValue::Color(*color)))
    }

    /// Set the layout tree of `style`.
    pub fn layout(&mut self, style: &str, layout: Vec<LayoutNode>) -> StyleResult<()> {
        self.host.layout(style, &layout)?;
        Ok(())
    }

    /// Render `icon` once per foreground color and map the style's `image`
    /// option with the same states as `foreground`.
    pub fn apply_icon(&mut self, style: &str, icon: &IconSpec, foreground: &StateSpec<HexColor>) -> StyleResult<()> {
        let size = self.scale(f64::from(icon.size.unwrap_or(DEFAULT_ICON_SIZE)));
        let mut made: Vec<(HexColor, BitmapHandle)> = Vec::new();
        let images = foreground.try_map(|color| -> StyleResult<StyleValue> {
            if let Some((_, handle)) = made.iter().find(|(seen, _)| seen == color) {
                return Ok(StyleValue::Image(*handle));
            }
            let bitmap = self.icons.render(&icon.name, size, *color)?;
            let handle = self.host.create_image(bitmap)?;
            made.push((*color, handle));
            Ok(StyleValue::Image(handle))
        })?;

        if let Some(normal) = images.normal().cloned() {
            self.configure(style, [("image", normal), ("compound", StyleValue::from("left"))])?;
        }
        self.map(style, "image", &images)
    }

    /// [apply_icon](Self::apply_icon) when the request carries an `icon` option.
    pub fn apply_icon_option(&mut self, request: &BuildRequest<'_>, foreground: &StateSpec<HexColor>) -> StyleResult<()> {
        match request.descriptor.extra_options.icon() {
            Some(icon) => self.apply_icon(request.style, &icon, foreground),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstyle::parse_with_options;
    use crate::host::RecordingStyleSystem;
    use crate::icon::GlyphIconProvider;
    use crate::options::{StyleOptions, ICON};
    use crate::state::VisualState;
    use bootstyle_theme::theme::builtin;

    struct Fixture {
        host: RecordingStyleSystem,
        theme: Theme,
        assets: AssetStore,
        icons: GlyphIconProvider,
        typography: Typography,
    }

    impl Fixture {
        fn new(theme: &str) -> Self {
            Self {
                host: RecordingStyleSystem::new(2.0),
                theme: builtin::theme(theme).unwrap(),
                assets: AssetStore::new(),
                icons: GlyphIconProvider::new(),
                typography: Typography::default(),
            }
        }

        fn context(&mut self) -> BuilderContext<'_> {
            BuilderContext::new(&mut self.host, &self.theme, &self.assets, &self.icons, &self.typography)
        }
    }

    #[test]
    fn roles_default_to_background_surface() {
        let theme = builtin::theme("litera").unwrap();
        let descriptor = crate::bootstyle::parse("", "TButton", None);
        let roles = Roles::resolve(&theme, &descriptor, ColorToken::Primary);
        assert_eq!(roles.accent, theme.color(ColorToken::Primary));
        assert_eq!(roles.surface, theme.color(ColorToken::Background));
        assert_eq!(roles.on_surface, theme.color(ColorToken::Foreground));
    }

    #[test]
    fn roles_take_the_surface_option() {
        let theme = builtin::theme("litera").unwrap();
        let options = StyleOptions::new().with(SURFACE_COLOR, ColorToken::Dark);
        let descriptor = parse_with_options("info", "TLabel", None, options);
        let roles = Roles::resolve(&theme, &descriptor, ColorToken::Primary);
        assert_eq!(roles.accent_token, ColorToken::Info);
        assert_eq!(roles.surface, theme.color(ColorToken::Dark));
        assert_eq!(roles.on_surface, theme.color(ColorToken::Light));

        let literal = HexColor::from_u32(0x202020);
        let options = StyleOptions::new().with(SURFACE_COLOR, literal);
        let descriptor = parse_with_options("info", "TLabel", None, options);
        assert_eq!(Roles::resolve(&theme, &descriptor, ColorToken::Primary).surface, literal);
    }

    #[test]
    fn images_are_shared_between_identical_states() {
        let mut fixture = Fixture::new("litera");
        let red = HexColor::from_rgb8(255, 0, 0);
        let states = StateSpec::new()
            .with(VisualState::Disabled, vec![HexColor::BLACK, red])
            .with(VisualState::Hover, vec![HexColor::BLACK, red])
            .otherwise(vec![red, red]);
        let handles = fixture.context().images("button", &states).unwrap();
        assert_eq!(handles.len(), 3);
        assert_eq!(fixture.host.image_count(), 2);
    }

    #[test]
    fn rejects_misordered_maps() {
        let mut fixture = Fixture::new("litera");
        let states = StateSpec::new()
            .with(VisualState::Pressed, StyleValue::from("a"))
            .with([VisualState::Focus, VisualState::Pressed], StyleValue::from("b"));
        let err = fixture.context().map("TButton", "relief", &states).unwrap_err();
        assert!(matches!(err, StyleError::StateOrder { general, .. } if general == "pressed"));
    }

    #[test]
    fn icons_follow_the_foreground_states() {
        let mut fixture = Fixture::new("litera");
        let options = StyleOptions::new().with(ICON, "check");
        let descriptor = parse_with_options("primary", "TButton", None, options);
        let style = descriptor.style_name();
        let foreground = StateSpec::new()
            .with(VisualState::Disabled, HexColor::from_u32(0x999999))
            .otherwise(HexColor::WHITE);

        let request = BuildRequest::new(&style, &descriptor);
        fixture.context().apply_icon_option(&request, &foreground).unwrap();

        let recorded = fixture.host.style(&style).unwrap();
        let images = &recorded.maps["image"];
        assert_eq!(images.len(), 2);
        assert_eq!(recorded.config["compound"], StyleValue::from("left"));
        assert_eq!(fixture.host.image_count(), 2);
    }
}
