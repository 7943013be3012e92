#![warn(missing_docs)]

//! Turn semantic bootstyle descriptors into themed, toolkit-native widget styles.
//!
//! A widget asks for a look with a short string such as `"success-outline"`.
//! The [Style](core::style::Style) engine parses it, runs the matching
//! builder from [widgets], and writes the resulting elements, layouts and
//! state maps into the host's [StyleSystem](core::host::StyleSystem). Switching
//! themes rebuilds every style that was asked for so far.
//!
//! ```rust
//! use bootstyle::prelude::*;
//!
//! let mut style = bootstyle::style(RecordingStyleSystem::default());
//! let name = style.resolve("success-outline", "TButton", None, StyleOptions::new()).unwrap();
//! assert_eq!(name, "success.Outline.TButton");
//!
//! style.theme_use("darkly").unwrap();
//! assert!(style.is_built(&name));
//! ```

use std::sync::Arc;

use bootstyle_core::host::StyleSystem;
use bootstyle_core::style::Style;
use bootstyle_core::StyleResult;
use bootstyle_theme::config::ThemeConfig;
use bootstyle_theme::ThemeProvider;
use log::info;

pub use bootstyle_core as core;
pub use bootstyle_theme as theme;
pub use bootstyle_widgets as widgets;

/// A "prelude" for users of bootstyle.
///
/// Importing this module brings into scope the types needed to resolve
/// styles and switch themes.
///
/// ```rust
/// use bootstyle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::bootstyle::{parse, parse_with_options, StyleDescriptor};
    pub use crate::core::builder::{BuildRequest, BuilderContext, Roles};
    pub use crate::core::host::{
        BitmapHandle, ElementSpec, ImageElement, LayoutNode, RecordingStyleSystem, StyleSystem, StyleValue,
    };
    pub use crate::core::options::{IconSpec, OptionValue, StyleOptions, ICON, SURFACE_COLOR};
    pub use crate::core::registry::{BuilderRegistry, RegistryTable};
    pub use crate::core::state::{StateSpec, VisualState};
    pub use crate::core::style::Style;
    pub use crate::core::widget::{Orientation, Variant, WidgetClass};
    pub use crate::core::{StyleError, StyleResult};

    pub use crate::theme::config::ThemeConfig;
    pub use crate::theme::typography::{FontRole, FontSpec, Typography};
    pub use crate::theme::{ColorToken, HexColor, Mode, Theme, ThemeProvider};

    pub use crate::widgets::{builtin_registry, register_builtin_builders};
}

/// A style engine on `host` with the built-in themes and builders.
pub fn style<H: StyleSystem>(host: H) -> Style<H> {
    Style::new(host, Arc::new(widgets::builtin_registry()))
}

/// [style], with themes and the startup theme taken from `config`.
///
/// Nothing is written to the host until the first style is resolved.
pub fn style_with_config<H: StyleSystem>(host: H, config: &ThemeConfig) -> StyleResult<Style<H>> {
    let mut provider = ThemeProvider::new();
    let change = config.apply(&mut provider)?;
    info!("Using theme '{}'", change.current);
    Ok(style(host).with_provider(provider))
}

/// [style_with_config] with the configuration read from the environment.
pub fn style_from_env<H: StyleSystem>(host: H) -> StyleResult<Style<H>> {
    style_with_config(host, &ThemeConfig::from_env())
}
