#![warn(missing_docs)]

//! Style builders for bootstyle => See `bootstyle` crate.
//!
//! Contains the built-in builder for every widget class and variant, and the
//! handlers that configure the toolkit's base styles.

use bootstyle_core::registry::{BuilderRegistry, RegistryTable};
use log::debug;

/// Contains the base style handlers.
pub mod base;

/// Contains the button, button group, toolbutton and menu button builders.
pub mod button;

/// Contains the [Look](chrome::Look) shared by button-like builders.
pub mod chrome;

/// Contains the entry, spinbox and combobox builders.
pub mod field;

/// Contains the tab item, list item and calendar day builders.
pub mod item;

/// Contains the label, frame and separator builders.
pub mod label;

/// Contains the notebook builder.
pub mod notebook;

/// Contains the progress bar, scale and scrollbar builders.
pub mod range;

/// Contains the switch, check box and radio button builders.
pub mod toggle;

/// Register every built-in builder and base handler into `table`.
pub fn register_builtin_builders(table: &mut RegistryTable) {
    base::register(table);
    button::register(table);
    toggle::register(table);
    field::register(table);
    notebook::register(table);
    item::register(table);
    range::register(table);
    label::register(table);
    debug!("Registered built-in style builders");
}

/// A registry that loads the built-in builders on first use.
pub fn builtin_registry() -> BuilderRegistry {
    BuilderRegistry::with_loader(register_builtin_builders)
}
