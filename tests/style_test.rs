use bootstyle::prelude::*;

#[test]
fn config_selects_the_startup_theme() {
    let config = ThemeConfig::new().with_default_theme("superhero");
    let mut style = bootstyle::style_with_config(RecordingStyleSystem::default(), &config).unwrap();
    assert_eq!(style.theme().name(), "superhero");
    assert!(style.host().calls().is_empty());

    let name = style.resolve("info", "TLabel", None, StyleOptions::new()).unwrap();
    let compiled: Vec<_> = style.compiled_styles().collect();
    assert_eq!(compiled.len(), 1);
    assert_eq!(compiled[0].name, name);
    assert_eq!(compiled[0].theme, "superhero");
}

#[test]
fn unknown_startup_theme_uses_the_fallback() {
    let config = ThemeConfig::new()
        .with_default_theme("no-such-theme")
        .with_fallback_theme("darkly");
    let style = bootstyle::style_with_config(RecordingStyleSystem::default(), &config).unwrap();
    assert!(style.theme().is_dark());

    let config = ThemeConfig::new().with_default_theme("no-such-theme");
    let err = bootstyle::style_with_config(RecordingStyleSystem::default(), &config)
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, StyleError::Theme(_)));
}

#[test]
fn custom_builders_replace_builtin_ones() {
    fn plain(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
        ctx.configure(request.style, [("relief", StyleValue::from("raised"))])
    }

    let mut style = bootstyle::style(RecordingStyleSystem::default());
    style.registry().register(WidgetClass::Button, Variant::Link, plain);
    let name = style.resolve("link", "TButton", None, StyleOptions::new()).unwrap();
    assert_eq!(style.host().style(&name).unwrap().config["relief"], StyleValue::from("raised"));
    assert!(style.registry().has_builder(&WidgetClass::Button, &Variant::Ghost));
}

#[test]
fn styles_rebuild_after_a_theme_definition_is_replaced() {
    let mut style = bootstyle::style(RecordingStyleSystem::default());
    let name = style.resolve("primary", "TFrame", None, StyleOptions::new()).unwrap();

    let litera = style.theme();
    let replaced = HexColor::from_u32(0x123456);
    let colors = litera
        .colors()
        .map(|(token, color)| (token, if token == ColorToken::Primary { replaced } else { color }));
    let theme = Theme::new("litera", Mode::Light, colors).unwrap();
    style.register_theme(theme).unwrap();

    let recorded = style.host().style(&name).unwrap();
    assert_eq!(recorded.config["background"], StyleValue::from(replaced));
}
