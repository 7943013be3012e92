use std::sync::Arc;
use std::thread;

use bootstyle_core::bootstyle::{parse, parse_parts};
use bootstyle_core::builder::{BuildRequest, BuilderContext};
use bootstyle_core::host::{RecordingStyleSystem, StyleValue};
use bootstyle_core::options::StyleOptions;
use bootstyle_core::registry::{BuilderKey, BuilderRegistry, RegistryTable};
use bootstyle_core::style::Style;
use bootstyle_core::widget::{Orientation, Variant, WidgetClass};
use bootstyle_core::{StyleError, StyleResult};
use bootstyle_theme::ColorToken;

fn solid(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    ctx.configure(request.style, [("relief", StyleValue::from("solid"))])
}

fn flat(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    ctx.configure(request.style, [("relief", StyleValue::from("flat"))])
}

fn load(table: &mut RegistryTable) {
    table.register(WidgetClass::Button, Variant::Default, solid);
    table.register(WidgetClass::Button, Variant::Outline, solid);
}

#[test]
fn registering_twice_is_the_same_as_once() {
    let registry = BuilderRegistry::with_loader(load);
    let before = registry.get_registered_builders();
    registry.register(WidgetClass::Button, Variant::Outline, solid);
    assert_eq!(registry.get_registered_builders(), before);
    assert_eq!(
        before,
        vec![
            BuilderKey {
                widget: WidgetClass::Button,
                variant: Variant::Default
            },
            BuilderKey {
                widget: WidgetClass::Button,
                variant: Variant::Outline
            },
        ]
    );
}

#[test]
fn later_registration_replaces_the_builder() {
    let registry = Arc::new(BuilderRegistry::with_loader(load));
    registry.register(WidgetClass::Button, Variant::Default, flat);
    assert!(registry.has_builder(&WidgetClass::Button, &Variant::Default));

    let mut style = Style::new(RecordingStyleSystem::default(), Arc::clone(&registry));
    let name = style.resolve("primary", "TButton", None, StyleOptions::new()).unwrap();
    let recorded = style.host().style(&name).unwrap();
    assert_eq!(recorded.config["relief"], StyleValue::from("flat"));
}

#[test]
fn variant_errors_list_the_registered_variants() {
    let registry = BuilderRegistry::with_loader(load);
    let err = registry
        .get(&WidgetClass::from_native("TButton"), &Variant::from_name("nonexistent-variant"))
        .map(|_| ())
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("nonexistent-variant"));
    assert!(message.contains("default"));
    assert!(message.contains("outline"));

    let err = registry.get(&WidgetClass::Frame, &Variant::Default).map(|_| ()).unwrap_err();
    assert!(matches!(err, StyleError::BuilderNotFound { .. }));
}

#[test]
fn lazy_load_happens_once_across_threads() {
    let registry = Arc::new(BuilderRegistry::with_loader(load));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.variants(&WidgetClass::Button).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
    assert!(registry.is_loaded());
}

#[test]
fn parsing_is_deterministic() {
    let expected = parse("primary-outline-toolbutton", "TButton", None);
    for raw in ["info-vertical", "danger", "", "primary-outline-toolbutton"] {
        let _ = parse(raw, "TScale", Some(Orientation::Horizontal));
        let again = parse("primary-outline-toolbutton", "TButton", None);
        assert_eq!(again, expected);
    }
    assert_eq!(expected.color, Some(ColorToken::Primary));
    assert_eq!(expected.variant, Variant::Outline);
    assert_eq!(expected.widget_class, WidgetClass::Toolbutton);
    assert_eq!(parse_parts(&["primary", "outline", "toolbutton"], "TButton", None), expected);
}
