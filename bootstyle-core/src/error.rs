// SPDX-License-Identifier: LGPL-3.0-only

//! Style building errors.

use bootstyle_theme::ThemeError;
use thiserror::Error;

use crate::host::HostError;

/// Errors raised while resolving, building or registering a style.
#[derive(Error, Debug)]
pub enum StyleError {
    /// No builder is registered for the widget class at all.
    #[error("No style builder registered for widget class '{widget}'")]
    BuilderNotFound {
        /// Toolkit class name of the widget.
        widget: String,
    },

    /// The widget class has builders, but not for the requested variant.
    #[error(
        "Variant '{variant}' is not registered for widget class '{widget}'; available variants: {}",
        .available.join(", ")
    )]
    VariantNotFound {
        /// Toolkit class name of the widget.
        widget: String,
        /// The requested variant.
        variant: String,
        /// Every variant registered for the widget class.
        available: Vec<String>,
    },

    /// A base style handler was requested but never registered.
    #[error("No base style handler registered for '{0}'")]
    StyleHandlerNotFound(String),

    /// A state map lists a general state before a more specific one.
    #[error("State map for '{style}' lists '{general}' before the more specific '{specific}'")]
    StateOrder {
        /// Style or element the map belongs to.
        style: String,
        /// The entry that shadows a later one.
        general: String,
        /// The shadowed entry.
        specific: String,
    },

    /// The asset store has no template with this name.
    #[error("Image template '{0}' not found")]
    TemplateNotFound(String),

    /// More colors were supplied than the template has color regions.
    #[error("Template '{template}' accepts at most {accepted} colors, got {given}")]
    TemplateRegions {
        /// Template name.
        template: String,
        /// Number of colors the template accepts.
        accepted: usize,
        /// Number of colors supplied.
        given: usize,
    },

    /// The icon provider does not know this icon.
    #[error("Icon '{0}' not found")]
    IconNotFound(String),

    /// Template decoding or encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The host style system rejected a call.
    #[error("Host style system error: {0}")]
    Host(#[from] HostError),

    /// Theme lookup or loading failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Result type alias for style operations.
pub type StyleResult<T> = Result<T, StyleError>;
