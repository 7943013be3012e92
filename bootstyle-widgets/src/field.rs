//! Text fields: entries, spinboxes and comboboxes.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::{ImageElement, LayoutNode, StyleValue};
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::widget::{Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::{ColorToken, HexColor};

use crate::chrome::{glyph_element, FRAME_SLICE};

use VisualState::{Disabled, Focus, Hover, Invalid, Pressed, Readonly};

/// Colors every field shares, derived from the roles and the theme's danger color.
struct FieldColors {
    roles: Roles,
    danger: HexColor,
    danger_ring: HexColor,
    readonly: HexColor,
}

impl FieldColors {
    fn resolve(ctx: &BuilderContext<'_>, request: &BuildRequest<'_>) -> Self {
        let theme = ctx.theme();
        let roles = Roles::resolve(theme, request.descriptor, ColorToken::Primary);
        Self {
            danger: theme.color(ColorToken::Danger),
            danger_ring: theme.focus_ring(ColorToken::Danger, roles.surface),
            readonly: theme.elevate(roles.surface, 1),
            roles,
        }
    }

    fn frame(&self) -> StateSpec<Vec<HexColor>> {
        let r = &self.roles;
        StateSpec::new()
            .with(Disabled, vec![r.disabled, r.disabled])
            .with([Focus, Invalid], vec![self.danger, r.surface, self.danger_ring])
            .with(Invalid, vec![self.danger, r.surface])
            .with(Readonly, vec![r.border, self.readonly])
            .with(Focus, vec![r.focus_border, r.surface, r.focus_ring])
            .with(Hover, vec![r.accent, r.surface])
            .otherwise(vec![r.border, r.surface])
    }

    fn arrows(&self) -> StateSpec<HexColor> {
        let r = &self.roles;
        StateSpec::new()
            .with(Disabled, r.on_disabled)
            .with(Pressed, r.pressed)
            .with(Hover, r.accent)
            .otherwise(r.on_surface)
    }
}

fn field(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    colors: &FieldColors,
    class: &str,
    arrows: Vec<LayoutNode>,
) -> StyleResult<()> {
    let images = ctx.images(names::FIELD, &colors.frame())?;
    let slice = ctx.template_px(FRAME_SLICE);
    let field = request.element("field");
    ctx.element_create(
        &field,
        ImageElement::new(images).border(vec![slice]).sticky("nsew"),
    )?;

    let textarea = LayoutNode::new(format!("{class}.textarea")).sticky("nsew");
    let mut children = arrows;
    children.push(textarea);
    ctx.layout(
        request.style,
        vec![LayoutNode::new(field)
            .sticky("nsew")
            .children([LayoutNode::new(format!("{class}.padding")).sticky("nsew").children(children)])],
    )?;

    let r = &colors.roles;
    let font = ctx.typography().font(FontRole::Body).clone();
    let padding = vec![ctx.scale(8.0), ctx.scale(5.0)];
    ctx.configure(
        request.style,
        [
            ("foreground", StyleValue::from(r.on_surface)),
            ("fieldbackground", StyleValue::from(r.surface)),
            ("background", StyleValue::from(r.surface)),
            ("insertcolor", StyleValue::from(r.on_surface)),
            ("selectbackground", StyleValue::from(r.accent)),
            ("selectforeground", StyleValue::from(r.on_accent)),
            ("relief", StyleValue::from("flat")),
            ("padding", StyleValue::from(padding)),
            ("font", StyleValue::from(font)),
        ],
    )?;
    let foreground = StateSpec::new().with(Disabled, r.on_disabled).otherwise(r.on_surface);
    ctx.map_colors(request.style, "foreground", &foreground)?;
    ctx.map_colors(
        request.style,
        "fieldbackground",
        &StateSpec::new()
            .with(Disabled, r.disabled)
            .with(Readonly, colors.readonly)
            .otherwise(r.surface),
    )
}

/// `TEntry`, default variant.
pub fn build_entry(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let colors = FieldColors::resolve(ctx, request);
    field(ctx, request, &colors, "Entry", Vec::new())
}

/// `TSpinbox`, default variant. Up and down arrows stack on the right.
pub fn build_spinbox(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let colors = FieldColors::resolve(ctx, request);
    let up = request.element("uparrow");
    let down = request.element("downarrow");
    glyph_element(ctx, &up, names::CHEVRON_UP, &colors.arrows())?;
    glyph_element(ctx, &down, names::CHEVRON_DOWN, &colors.arrows())?;
    let arrows = vec![
        LayoutNode::new(up).side("top").sticky("e"),
        LayoutNode::new(down).side("bottom").sticky("e"),
    ];
    field(ctx, request, &colors, "Spinbox", arrows)?;
    let arrowsize = ctx.scale(12.0);
    ctx.configure(request.style, [("arrowsize", StyleValue::from(arrowsize))])
}

/// `TCombobox`, default variant. The drop-down arrow sits on the right.
pub fn build_combobox(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let colors = FieldColors::resolve(ctx, request);
    let down = request.element("downarrow");
    glyph_element(ctx, &down, names::CHEVRON_DOWN, &colors.arrows())?;
    let arrows = vec![LayoutNode::new(down).side("right").sticky("ns")];
    field(ctx, request, &colors, "Combobox", arrows)
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Entry, Variant::Default, build_entry);
    table.register(WidgetClass::Spinbox, Variant::Default, build_spinbox);
    table.register(WidgetClass::Combobox, Variant::Default, build_combobox);
}
