#![warn(missing_docs)]

//! Core style engine for bootstyle => See `bootstyle` crate.
//!
//! Contains the descriptor parser, the builder registry and protocol, the
//! image recolor engine and the [Style](style::Style) engine that caches
//! built styles per theme.

pub use bootstyle_theme as theme;

/// Contains the bootstyle descriptor parser.
pub mod bootstyle;

/// Contains the [BuilderContext](builder::BuilderContext) builders draw with.
pub mod builder;

/// Contains the [StyleError](error::StyleError) type.
pub mod error;

/// Contains the host style system interface and an in-memory host.
pub mod host;

/// Contains the [IconProvider](icon::IconProvider) trait and glyph icons.
pub mod icon;

/// Contains the image recolor engine and template store.
pub mod image;

/// Contains extra style options.
pub mod options;

/// Contains the [BuilderRegistry](registry::BuilderRegistry).
pub mod registry;

/// Contains visual states and state maps.
pub mod state;

/// Contains the [Style](style::Style) engine.
pub mod style;

/// Contains widget classes, variants and orientation.
pub mod widget;

pub use error::{StyleError, StyleResult};
