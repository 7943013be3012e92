//! Notebooks and their tabs.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::{ImageElement, LayoutNode, StyleValue};
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::widget::{Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::ColorToken;

/// `TNotebook`, default variant, and its `{style}.Tab` sub-style.
///
/// The selected tab takes the client's surface so the two read as one sheet;
/// its label takes the accent.
pub fn build_notebook(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let roles = Roles::resolve(theme, request.descriptor, ColorToken::Primary);
    let idle_tab = theme.elevate(roles.surface, 2);
    let hover_tab = theme.elevate(roles.surface, 1);

    let client = request.element("client");
    let images = ctx.images(names::SQUARE, &StateSpec::new().otherwise(vec![roles.border, roles.surface]))?;
    let slice = ctx.template_px(8.0);
    ctx.element_create(&client, ImageElement::new(images).border(vec![slice]).sticky("nsew"))?;
    ctx.layout(request.style, vec![LayoutNode::new(client).sticky("nsew")])?;
    let tabmargins = vec![0, ctx.scale(2.0), 0, 0];
    ctx.configure(
        request.style,
        [
            ("background", StyleValue::from(roles.surface)),
            ("bordercolor", StyleValue::from(roles.border)),
            ("tabmargins", StyleValue::from(tabmargins)),
        ],
    )?;

    let tab_style = request.substyle("Tab");
    let tab = format!("{tab_style}.tab");
    let tab_states = StateSpec::new()
        .with(VisualState::Disabled, vec![roles.border, roles.disabled])
        .with(VisualState::Selected, vec![roles.border, roles.surface])
        .with(VisualState::Hover, vec![roles.border, hover_tab])
        .otherwise(vec![roles.border, idle_tab]);
    let images = ctx.images(names::TAB, &tab_states)?;
    let slice = ctx.template_px(12.0);
    ctx.element_create(&tab, ImageElement::new(images).border(vec![slice]).sticky("nsew"))?;
    ctx.layout(
        &tab_style,
        vec![LayoutNode::new(tab).sticky("nsew").children([LayoutNode::new("Notebook.padding")
            .side("top")
            .sticky("nsew")
            .children([LayoutNode::new("Notebook.label").side("top").sticky("")])])],
    )?;

    let font = ctx.typography().font(FontRole::Heading).clone();
    let padding = vec![ctx.scale(12.0), ctx.scale(5.0)];
    ctx.configure(
        &tab_style,
        [
            ("foreground", StyleValue::from(roles.on_surface)),
            ("background", StyleValue::from(idle_tab)),
            ("padding", StyleValue::from(padding)),
            ("font", StyleValue::from(font)),
        ],
    )?;
    let foreground = StateSpec::new()
        .with(VisualState::Disabled, roles.on_disabled)
        .with(VisualState::Selected, roles.accent)
        .otherwise(roles.on_surface);
    ctx.map_colors(&tab_style, "foreground", &foreground)?;
    ctx.map_colors(
        &tab_style,
        "background",
        &StateSpec::new()
            .with(VisualState::Selected, roles.surface)
            .otherwise(idle_tab),
    )
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Notebook, Variant::Default, build_notebook);
}
