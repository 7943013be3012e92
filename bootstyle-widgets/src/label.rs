//! Labels, frames and separators. Only the separator draws an image.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::{ImageElement, LayoutNode, StyleValue};
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::widget::{Orientation, Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::{ColorToken, HexColor};

fn label(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    foreground: HexColor,
    background: HexColor,
    disabled: HexColor,
) -> StyleResult<()> {
    let font = ctx.typography().font(FontRole::Label).clone();
    ctx.configure(
        request.style,
        [
            ("foreground", StyleValue::from(foreground)),
            ("background", StyleValue::from(background)),
            ("font", StyleValue::from(font)),
        ],
    )?;
    let states = StateSpec::new()
        .with(VisualState::Disabled, disabled)
        .otherwise(foreground);
    ctx.map_colors(request.style, "foreground", &states)?;
    ctx.apply_icon_option(request, &states)
}

/// `TLabel`, default variant. A color names the text color.
pub fn build_label(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Foreground);
    let foreground = match request.descriptor.color {
        Some(_) => roles.accent,
        None => roles.on_surface,
    };
    label(ctx, request, foreground, roles.surface, roles.on_disabled)
}

/// `TLabel`, inverse variant. A color names the background.
pub fn build_inverse_label(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let roles = Roles::resolve(theme, request.descriptor, ColorToken::Primary);
    let disabled = theme.on_disabled(roles.accent);
    label(ctx, request, roles.on_accent, roles.accent, disabled)
}

/// `TFrame`, default variant. A color names the background.
pub fn build_frame(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Background);
    let background = match request.descriptor.color {
        Some(_) => roles.accent,
        None => roles.surface,
    };
    ctx.configure(request.style, [("background", StyleValue::from(background))])
}

/// `TSeparator`, default variant.
pub fn build_separator(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Border);
    let line = request.element("separator");
    let images = ctx.images(names::LINE, &StateSpec::new().otherwise(vec![roles.accent]))?;
    let thickness = ctx.scale(1.0);
    let sticky = match request.descriptor.orientation.unwrap_or(Orientation::Horizontal) {
        Orientation::Horizontal => "ew",
        Orientation::Vertical => "ns",
    };
    ctx.element_create(&line, ImageElement::new(images).size(thickness, thickness).sticky(sticky))?;
    ctx.layout(request.style, vec![LayoutNode::new(line).sticky(sticky)])?;
    ctx.configure(request.style, [("background", StyleValue::from(roles.accent))])
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Label, Variant::Default, build_label);
    table.register(WidgetClass::Label, Variant::Inverse, build_inverse_label);
    table.register(WidgetClass::Frame, Variant::Default, build_frame);
    table.register(WidgetClass::Separator, Variant::Default, build_separator);
}
