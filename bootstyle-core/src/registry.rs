// SPDX-License-Identifier: LGPL-3.0-only

//! # Builder Registry
//!
//! A table of style builders keyed by [WidgetClass] and [Variant], plus the
//! base style handlers applied after every theme switch.
//!
//! A registry built [with a loader](BuilderRegistry::with_loader) populates
//! itself on first access. The loaded flag is checked without locking; only
//! the load step itself runs under a mutex. Lookups read an [ArcSwap]
//! snapshot of the table, so dispatch never blocks.
//!
//! Registering a builder for a key that already has one replaces it.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use indexmap::IndexMap;
use log::{debug, trace};
use serde::Serialize;

use crate::builder::{BuildRequest, BuilderContext};
use crate::error::{StyleError, StyleResult};
use crate::widget::{Variant, WidgetClass};

/// Builds one style into the host.
pub type BuildFn = fn(&mut BuilderContext<'_>, &BuildRequest<'_>) -> StyleResult<()>;

/// Configures one base toolkit style, such as `TFrame` or the root style `.`.
pub type HandlerFn = fn(&mut BuilderContext<'_>) -> StyleResult<()>;

/// Populates a fresh [RegistryTable].
pub type Loader = fn(&mut RegistryTable);

/// A `(widget class, variant)` pair with a registered builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BuilderKey {
    /// Widget class.
    pub widget: WidgetClass,
    /// Variant.
    pub variant: Variant,
}

/// The builders and base handlers of a registry.
#[derive(Clone, Default)]
pub struct RegistryTable {
    builders: IndexMap<WidgetClass, IndexMap<Variant, BuildFn>>,
    handlers: IndexMap<String, HandlerFn>,
}

impl RegistryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `builder` to `(widget, variant)`, replacing any previous builder.
    pub fn register(&mut self, widget: WidgetClass, variant: Variant, builder: BuildFn) {
        self.builders.entry(widget).or_default().insert(variant, builder);
    }

    /// Bind the base style handler for the toolkit style `name`.
    pub fn register_handler(&mut self, name: impl Into<String>, handler: HandlerFn) {
        self.handlers.insert(name.into(), handler);
    }

    fn builder(&self, widget: &WidgetClass, variant: &Variant) -> StyleResult<BuildFn> {
        let Some(variants) = self.builders.get(widget) else {
            return Err(StyleError::BuilderNotFound {
                widget: widget.class_name().to_string(),
            });
        };
        variants
            .get(variant)
            .copied()
            .ok_or_else(|| StyleError::VariantNotFound {
                widget: widget.class_name().to_string(),
                variant: variant.as_str().to_string(),
                available: variants.keys().map(|variant| variant.as_str().to_string()).collect(),
            })
    }
}

impl fmt::Debug for RegistryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builders: Vec<_> = self
            .builders
            .iter()
            .map(|(widget, variants)| (widget.class_name(), variants.keys().map(Variant::as_str).collect::<Vec<_>>()))
            .collect();
        f.debug_struct("RegistryTable")
            .field("builders", &builders)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registry of style builders and base style handlers.
///
/// `Send + Sync`; share it between engines with an [Arc].
pub struct BuilderRegistry {
    table: ArcSwap<RegistryTable>,
    loader: Option<Loader>,
    loaded: AtomicBool,
    load_lock: Mutex<()>,
}

impl BuilderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(RegistryTable::new()),
            loader: None,
            loaded: AtomicBool::new(true),
            load_lock: Mutex::new(()),
        }
    }

    /// Create a registry that runs `loader` on first access.
    pub fn with_loader(loader: Loader) -> Self {
        Self {
            table: ArcSwap::from_pointee(RegistryTable::new()),
            loader: Some(loader),
            loaded: AtomicBool::new(false),
            load_lock: Mutex::new(()),
        }
    }

    /// Whether the loader has run (always `true` without a loader).
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    fn ensure_loaded(&self) {
        if self.loaded.load(Ordering::Acquire) {
            return;
        }
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if self.loaded.load(Ordering::Acquire) {
            return;
        }
        if let Some(loader) = self.loader {
            self.table.rcu(|current| {
                let mut table = RegistryTable::clone(current);
                loader(&mut table);
                table
            });
            let table = self.table.load();
            debug!(
                "Loaded {} widget classes and {} base handlers into the builder registry",
                table.builders.len(),
                table.handlers.len()
            );
        }
        self.loaded.store(true, Ordering::Release);
    }

    /// The current table.
    pub fn snapshot(&self) -> Arc<RegistryTable> {
        self.ensure_loaded();
        self.table.load_full()
    }

    /// Bind `builder` to `(widget, variant)`, replacing any previous builder.
    pub fn register(&self, widget: WidgetClass, variant: Variant, builder: BuildFn) {
        self.ensure_loaded();
        trace!("Registering builder for {} ({})", widget, variant);
        self.table.rcu(|current| {
            let mut table = RegistryTable::clone(current);
            table.register(widget.clone(), variant.clone(), builder);
            table
        });
    }

    /// Bind the base style handler for `name`.
    pub fn register_handler(&self, name: &str, handler: HandlerFn) {
        self.ensure_loaded();
        self.table.rcu(|current| {
            let mut table = RegistryTable::clone(current);
            table.register_handler(name, handler);
            table
        });
    }

    /// Whether a builder exists for `(widget, variant)`.
    pub fn has_builder(&self, widget: &WidgetClass, variant: &Variant) -> bool {
        self.snapshot()
            .builders
            .get(widget)
            .is_some_and(|variants| variants.contains_key(variant))
    }

    /// Variants registered for `widget`, in registration order.
    pub fn variants(&self, widget: &WidgetClass) -> Vec<Variant> {
        self.snapshot()
            .builders
            .get(widget)
            .map(|variants| variants.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Every registered key, grouped by widget class.
    pub fn get_registered_builders(&self) -> Vec<BuilderKey> {
        self.snapshot()
            .builders
            .iter()
            .flat_map(|(widget, variants)| {
                variants.keys().map(move |variant| BuilderKey {
                    widget: widget.clone(),
                    variant: variant.clone(),
                })
            })
            .collect()
    }

    /// The builder for `(widget, variant)`.
    ///
    /// Fails with [StyleError::BuilderNotFound] when the class has no builders
    /// and with [StyleError::VariantNotFound] when only the variant is missing.
    pub fn get(&self, widget: &WidgetClass, variant: &Variant) -> StyleResult<BuildFn> {
        self.snapshot().builder(widget, variant)
    }

    /// Run the builder matching `request.descriptor`.
    pub fn dispatch(&self, ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
        let descriptor = request.descriptor;
        let builder = self.get(&descriptor.widget_class, &descriptor.variant)?;
        debug!("Building style '{}'", request.style);
        builder(ctx, request)
    }

    /// The base handler for `name`.
    pub fn handler(&self, name: &str) -> StyleResult<HandlerFn> {
        self.snapshot()
            .handlers
            .get(name)
            .copied()
            .ok_or_else(|| StyleError::StyleHandlerNotFound(name.to_string()))
    }

    /// Names with a base handler.
    pub fn handler_names(&self) -> Vec<String> {
        self.snapshot().handlers.keys().cloned().collect()
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BuilderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuilderRegistry")
            .field("loaded", &self.is_loaded())
            .field("has_loader", &self.loader.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut BuilderContext<'_>, _: &BuildRequest<'_>) -> StyleResult<()> {
        Ok(())
    }

    fn load(table: &mut RegistryTable) {
        table.register(WidgetClass::Button, Variant::Default, noop);
        table.register(WidgetClass::Button, Variant::Outline, noop);
    }

    #[test]
    fn loader_runs_on_first_access() {
        let registry = BuilderRegistry::with_loader(load);
        assert!(!registry.is_loaded());
        assert!(registry.has_builder(&WidgetClass::Button, &Variant::Outline));
        assert!(registry.is_loaded());
    }

    #[test]
    fn registrations_after_loading_win() {
        let registry = BuilderRegistry::with_loader(load);
        registry.register(WidgetClass::Button, Variant::Ghost, noop);
        assert_eq!(
            registry.variants(&WidgetClass::Button),
            vec![Variant::Default, Variant::Outline, Variant::Ghost]
        );
    }

    #[test]
    fn missing_class_and_variant_are_distinguished() {
        let registry = BuilderRegistry::with_loader(load);
        assert!(matches!(
            registry.get(&WidgetClass::Scale, &Variant::Default),
            Err(StyleError::BuilderNotFound { widget }) if widget == "TScale"
        ));
        match registry.get(&WidgetClass::Button, &Variant::Pill) {
            Err(StyleError::VariantNotFound { available, .. }) => {
                assert_eq!(available, vec!["default", "outline"]);
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_handler_is_reported() {
        let registry = BuilderRegistry::new();
        assert!(matches!(
            registry.handler("TFrame"),
            Err(StyleError::StyleHandlerNotFound(name)) if name == "TFrame"
        ));
    }
}
