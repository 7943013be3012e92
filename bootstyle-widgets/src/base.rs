//! Handlers for the toolkit's own styles, run after every theme switch.

use bootstyle_core::builder::BuilderContext;
use bootstyle_core::host::StyleValue;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::ColorToken;

/// `.`: defaults every style inherits.
pub fn configure_root(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let background = theme.color(ColorToken::Background);
    let foreground = theme.color(ColorToken::Foreground);
    let border = theme.color(ColorToken::Border);
    let font = ctx.typography().font(FontRole::Body).clone();
    ctx.configure(
        ".",
        [
            ("background", StyleValue::from(background)),
            ("foreground", StyleValue::from(foreground)),
            ("bordercolor", StyleValue::from(border)),
            ("darkcolor", StyleValue::from(background)),
            ("lightcolor", StyleValue::from(background)),
            ("troughcolor", StyleValue::from(theme.elevate(background, 1))),
            ("selectbackground", StyleValue::from(theme.color(ColorToken::Primary))),
            ("selectforeground", StyleValue::from(theme.contrast_foreground(ColorToken::Primary))),
            ("insertcolor", StyleValue::from(foreground)),
            ("focuscolor", StyleValue::from(theme.focus_ring(ColorToken::Primary, background))),
            ("relief", StyleValue::from("flat")),
            ("font", StyleValue::from(font)),
        ],
    )?;
    let states = StateSpec::new()
        .with(VisualState::Disabled, theme.on_disabled(background))
        .otherwise(foreground);
    ctx.map_colors(".", "foreground", &states)
}

/// `TFrame`.
pub fn configure_frame(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let background = ctx.theme().color(ColorToken::Background);
    ctx.configure("TFrame", [("background", StyleValue::from(background))])
}

/// `TLabel`.
pub fn configure_label(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let font = ctx.typography().font(FontRole::Label).clone();
    ctx.configure(
        "TLabel",
        [
            ("foreground", StyleValue::from(theme.color(ColorToken::Foreground))),
            ("background", StyleValue::from(theme.color(ColorToken::Background))),
            ("font", StyleValue::from(font)),
        ],
    )
}

/// `TLabelframe` and its caption, `TLabelframe.Label`.
pub fn configure_labelframe(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let background = theme.color(ColorToken::Background);
    let width = ctx.scale(1.0);
    ctx.configure(
        "TLabelframe",
        [
            ("background", StyleValue::from(background)),
            ("bordercolor", StyleValue::from(theme.color(ColorToken::Border))),
            ("borderwidth", StyleValue::from(width)),
            ("relief", StyleValue::from("solid")),
        ],
    )?;
    let font = ctx.typography().font(FontRole::Heading).clone();
    ctx.configure(
        "TLabelframe.Label",
        [
            ("foreground", StyleValue::from(theme.color(ColorToken::Foreground))),
            ("background", StyleValue::from(background)),
            ("font", StyleValue::from(font)),
        ],
    )
}

/// `TSeparator`.
pub fn configure_separator(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let border = ctx.theme().color(ColorToken::Border);
    ctx.configure("TSeparator", [("background", StyleValue::from(border))])
}

/// `TSizegrip`.
pub fn configure_sizegrip(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let background = ctx.theme().color(ColorToken::Background);
    ctx.configure("TSizegrip", [("background", StyleValue::from(background))])
}

/// `Treeview` and its column headings, `Treeview.Heading`.
pub fn configure_treeview(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let background = theme.color(ColorToken::Background);
    let foreground = theme.color(ColorToken::Foreground);
    let primary = theme.color(ColorToken::Primary);
    let rowheight = ctx.scale(24.0);
    ctx.configure(
        "Treeview",
        [
            ("background", StyleValue::from(background)),
            ("fieldbackground", StyleValue::from(background)),
            ("foreground", StyleValue::from(foreground)),
            ("bordercolor", StyleValue::from(theme.color(ColorToken::Border))),
            ("rowheight", StyleValue::from(rowheight)),
            ("relief", StyleValue::from("flat")),
        ],
    )?;
    ctx.map_colors(
        "Treeview",
        "background",
        &StateSpec::new().with(VisualState::Selected, primary).otherwise(background),
    )?;
    ctx.map_colors(
        "Treeview",
        "foreground",
        &StateSpec::new()
            .with(VisualState::Disabled, theme.on_disabled(background))
            .with(VisualState::Selected, theme.contrast_foreground(ColorToken::Primary))
            .otherwise(foreground),
    )?;

    let heading = theme.elevate(background, 1);
    let font = ctx.typography().font(FontRole::Heading).clone();
    ctx.configure(
        "Treeview.Heading",
        [
            ("background", StyleValue::from(heading)),
            ("foreground", StyleValue::from(foreground)),
            ("relief", StyleValue::from("flat")),
            ("font", StyleValue::from(font)),
        ],
    )?;
    ctx.map_colors(
        "Treeview.Heading",
        "background",
        &StateSpec::new()
            .with(VisualState::Hover, theme.elevate(background, 2))
            .otherwise(heading),
    )
}

/// `TPanedwindow` and its `Sash`.
pub fn configure_panedwindow(ctx: &mut BuilderContext<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    ctx.configure(
        "TPanedwindow",
        [("background", StyleValue::from(theme.color(ColorToken::Background)))],
    )?;
    let thickness = ctx.scale(6.0);
    ctx.configure(
        "Sash",
        [
            ("sashthickness", StyleValue::from(thickness)),
            ("gripcount", StyleValue::from(0u32)),
            ("background", StyleValue::from(theme.color(ColorToken::Border))),
        ],
    )
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register_handler(".", configure_root);
    table.register_handler("TFrame", configure_frame);
    table.register_handler("TLabel", configure_label);
    table.register_handler("TLabelframe", configure_labelframe);
    table.register_handler("TSeparator", configure_separator);
    table.register_handler("TSizegrip", configure_sizegrip);
    table.register_handler("Treeview", configure_treeview);
    table.register_handler("TPanedwindow", configure_panedwindow);
}
