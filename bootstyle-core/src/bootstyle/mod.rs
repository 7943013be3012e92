// SPDX-License-Identifier: LGPL-3.0-only

//! # Bootstyle Descriptors
//!
//! Parses compact modifier strings such as `"primary-outline-toolbutton"` into
//! a [StyleDescriptor] and composes the toolkit style name for it.
//!
//! ## Algorithm
//!
//! 1. Normalize: trim, lowercase, join list parts with `-`, and turn
//!    whitespace and `_` into `-`.
//! 2. The leftmost widget alias picks the class; otherwise the widget's own
//!    toolkit class is used.
//! 3. The leftmost accent color picks the color; absent means the builder's
//!    default.
//! 4. The leftmost variant name picks the variant; absent means
//!    [Variant::Default].
//! 5. Orientation comes from a literal `horizontal`/`vertical`, else the
//!    caller's argument, else the class default, else none.
//!
//! Parsing never fails. Unknown words are ignored.
//!
//! ```rust
//! use bootstyle_core::bootstyle::parse;
//! use bootstyle_core::widget::{Variant, WidgetClass};
//!
//! let descriptor = parse("primary-outline-toolbutton", "TButton", None);
//! assert_eq!(descriptor.widget_class, WidgetClass::Toolbutton);
//! assert_eq!(descriptor.variant, Variant::Outline);
//! assert_eq!(descriptor.style_name(), "primary.Outline.Toolbutton");
//! ```

use bootstyle_theme::ColorToken;
use serde::Serialize;

use crate::options::{StyleOptions, SURFACE_COLOR};
use crate::widget::{Orientation, Variant, WidgetClass};

mod keywords;

/// The parsed form of a bootstyle string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDescriptor {
    /// Widget class the style is built for.
    pub widget_class: WidgetClass,
    /// Structural variant.
    pub variant: Variant,
    /// Accent color; builders fall back to their own default when unset.
    pub color: Option<ColorToken>,
    /// Surface the widget sits on, from the `surface_color` option.
    pub surface: Option<ColorToken>,
    /// Layout axis for oriented classes.
    pub orientation: Option<Orientation>,
    /// Options passed alongside the bootstyle string.
    pub extra_options: StyleOptions,
}

impl StyleDescriptor {
    /// A descriptor for `widget_class` with every modifier unset.
    pub fn new(widget_class: WidgetClass) -> Self {
        Self {
            orientation: widget_class.default_orientation(),
            widget_class,
            variant: Variant::Default,
            color: None,
            surface: None,
            extra_options: StyleOptions::new(),
        }
    }

    /// Set the accent color.
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Replace the extra options, updating the surface.
    pub fn with_options(mut self, options: StyleOptions) -> Self {
        self.surface = options.color(SURFACE_COLOR);
        self.extra_options = options;
        self
    }

    /// The toolkit style name, e.g. `primary.Outline.Horizontal.TScale`.
    ///
    /// Descriptors with extra options get an option digest as first segment,
    /// so styles that differ only in their options never share a name.
    pub fn style_name(&self) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(5);
        if !self.extra_options.is_empty() {
            segments.push(self.extra_options.digest());
        }
        if let Some(color) = self.color {
            segments.push(color.as_str().to_string());
        }
        if let Some(variant) = self.variant.segment() {
            segments.push(variant);
        }
        if let Some(orientation) = self.orientation {
            segments.push(orientation.segment().to_string());
        }
        segments.push(self.widget_class.class_name().to_string());
        segments.join(".")
    }
}

/// Lowercase `raw` and turn whitespace and underscores into `-`.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Parse a bootstyle string for a widget whose toolkit class is `native_class`.
pub fn parse(raw: &str, native_class: &str, orientation: Option<Orientation>) -> StyleDescriptor {
    parse_with_options(raw, native_class, orientation, StyleOptions::new())
}

/// Parse a bootstyle given as separate words, e.g. `["info", "outline"]`.
pub fn parse_parts<S: AsRef<str>>(
    parts: &[S],
    native_class: &str,
    orientation: Option<Orientation>,
) -> StyleDescriptor {
    let joined = parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("-");
    parse(&joined, native_class, orientation)
}

/// [parse] with extra options. A `surface_color` token option sets
/// [StyleDescriptor::surface].
pub fn parse_with_options(
    raw: &str,
    native_class: &str,
    orientation: Option<Orientation>,
    options: StyleOptions,
) -> StyleDescriptor {
    let text = normalize(raw);

    let widget_class = keywords::find_class(&text).unwrap_or_else(|| WidgetClass::from_native(native_class));
    let orientation = keywords::find_orientation(&text)
        .or(orientation)
        .or_else(|| widget_class.default_orientation());

    StyleDescriptor {
        color: keywords::find_color(&text),
        variant: keywords::find_variant(&text).unwrap_or_default(),
        orientation,
        widget_class,
        surface: None,
        extra_options: StyleOptions::new(),
    }
    .with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_separators() {
        assert_eq!(normalize("  Primary_Outline  Toolbutton "), "primary-outline-toolbutton");
        assert_eq!(normalize("--info--"), "info");
    }

    #[test]
    fn alias_overrides_native_class() {
        let descriptor = parse("primary-outline-toolbutton", "TButton", None);
        assert_eq!(descriptor.color, Some(ColorToken::Primary));
        assert_eq!(descriptor.variant, Variant::Outline);
        assert_eq!(descriptor.widget_class, WidgetClass::Toolbutton);
    }

    #[test]
    fn falls_back_to_native_class_and_defaults() {
        let descriptor = parse("", "TButton", None);
        assert_eq!(descriptor.widget_class, WidgetClass::Button);
        assert_eq!(descriptor.color, None);
        assert_eq!(descriptor.variant, Variant::Default);
        assert_eq!(descriptor.style_name(), "TButton");

        let descriptor = parse("nonsense words", "Canvas", None);
        assert_eq!(descriptor.widget_class, WidgetClass::Other("Canvas".into()));
    }

    #[test]
    fn orientation_precedence() {
        let literal = parse("info-vertical", "TScale", Some(Orientation::Horizontal));
        assert_eq!(literal.orientation, Some(Orientation::Vertical));

        let explicit = parse("info", "TScale", Some(Orientation::Vertical));
        assert_eq!(explicit.orientation, Some(Orientation::Vertical));

        let class_default = parse("info", "TScrollbar", None);
        assert_eq!(class_default.orientation, Some(Orientation::Vertical));

        let none = parse("info", "TButton", None);
        assert_eq!(none.orientation, None);
    }

    #[test]
    fn composes_style_names() {
        let descriptor = parse("primary outline", "TScale", Some(Orientation::Horizontal));
        assert_eq!(descriptor.style_name(), "primary.Outline.Horizontal.TScale");

        let descriptor = parse_parts(&["success", "round", "toggle"], "TCheckbutton", None);
        assert_eq!(descriptor.style_name(), "success.Roundtoggle.Toolbutton");
    }

    #[test]
    fn options_prefix_the_name_and_set_the_surface() {
        let options = StyleOptions::new().with(SURFACE_COLOR, ColorToken::Dark);
        let descriptor = parse_with_options("info", "TLabel", None, options.clone());
        assert_eq!(descriptor.surface, Some(ColorToken::Dark));
        assert_eq!(descriptor.style_name(), format!("{}.info.TLabel", options.digest()));
        assert_ne!(descriptor.style_name(), parse("info", "TLabel", None).style_name());
    }

    #[test]
    fn unknown_variant_words_are_ignored() {
        let descriptor = parse("danger-sparkly", "TButton", None);
        assert_eq!(descriptor.variant, Variant::Default);
        assert_eq!(descriptor.color, Some(ColorToken::Danger));
    }
}
