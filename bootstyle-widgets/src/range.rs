//! Progress bars, scales and scrollbars.
//!
//! Each lays out along its orientation; the descriptor's orientation wins and
//! the class default applies otherwise.

use bootstyle_core::bootstyle::StyleDescriptor;
use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::{ImageElement, LayoutNode, StyleValue};
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::widget::{Orientation, Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::{ColorToken, HexColor};

use crate::chrome::{glyph_element, Look, Paint, FRAME_SLICE};

fn orientation(descriptor: &StyleDescriptor) -> Orientation {
    descriptor
        .orientation
        .or_else(|| descriptor.widget_class.default_orientation())
        .unwrap_or(Orientation::Horizontal)
}

fn solid(colors: Vec<HexColor>) -> StateSpec<Vec<HexColor>> {
    StateSpec::new().otherwise(colors)
}

fn progressbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>, striped: bool) -> StyleResult<()> {
    let theme = ctx.theme();
    let roles = Roles::resolve(theme, request.descriptor, ColorToken::Primary);
    let trough_color = theme.elevate(roles.surface, 2);

    let trough = request.element("trough");
    let images = ctx.images(names::BUTTON_SQUARE, &solid(vec![trough_color, trough_color]))?;
    let slice = ctx.template_px(FRAME_SLICE);
    ctx.element_create(&trough, ImageElement::new(images).border(vec![slice]).sticky("nsew"))?;

    let pbar = request.element("pbar");
    let (template, colors) = if striped {
        (names::STRIPES, vec![roles.accent, roles.active])
    } else {
        (names::BUTTON_SQUARE, vec![roles.accent, roles.accent])
    };
    let images = ctx.images(template, &solid(colors))?;
    let element = if striped {
        ImageElement::new(images)
    } else {
        ImageElement::new(images).border(vec![slice])
    };
    ctx.element_create(&pbar, element)?;

    let bar = match orientation(request.descriptor) {
        Orientation::Horizontal => LayoutNode::new(pbar).side("left").sticky("ns"),
        Orientation::Vertical => LayoutNode::new(pbar).side("bottom").sticky("ew"),
    };
    ctx.layout(request.style, vec![LayoutNode::new(trough).sticky("nsew").children([bar])])?;
    let thickness = ctx.scale(10.0);
    ctx.configure(
        request.style,
        [
            ("thickness", StyleValue::from(thickness)),
            ("background", StyleValue::from(roles.accent)),
            ("troughcolor", StyleValue::from(trough_color)),
            ("borderwidth", StyleValue::from(0u32)),
        ],
    )
}

/// `TProgressbar`, default variant.
pub fn build_progressbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    progressbar(ctx, request, false)
}

/// `TProgressbar`, striped variant.
pub fn build_striped_progressbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    progressbar(ctx, request, true)
}

/// `TScale`, default variant. A thin track with a round slider.
pub fn build_scale(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);

    let track = request.element("track");
    let track_states = StateSpec::new()
        .with(VisualState::Disabled, vec![roles.disabled])
        .otherwise(vec![roles.border]);
    let images = ctx.images(names::LINE, &track_states)?;
    let thickness = ctx.scale(4.0);
    let sticky = if orientation(request.descriptor).is_horizontal() { "ew" } else { "ns" };
    let element = ImageElement::new(images).size(thickness, thickness).sticky(sticky);
    ctx.element_create(&track, element)?;

    let look = Look {
        normal: Paint::solid(roles.accent, roles.on_accent),
        hover: Paint::solid(roles.active, roles.on_accent),
        pressed: Paint::solid(roles.pressed, roles.on_accent),
        selected: None,
        disabled: Paint::new(roles.disabled, roles.surface, roles.on_disabled),
        ring: roles.focus_ring,
    };
    let slider = request.element("slider");
    let images = ctx.images(names::SLIDER, &look.chrome())?;
    ctx.element_create(&slider, ImageElement::new(images))?;

    let (sticky, side) = match orientation(request.descriptor) {
        Orientation::Horizontal => ("ew", "left"),
        Orientation::Vertical => ("ns", "top"),
    };
    let track = LayoutNode::new(track)
        .sticky(sticky)
        .children([LayoutNode::new(slider).side(side).sticky("")]);
    ctx.layout(
        request.style,
        vec![LayoutNode::new("Scale.focus").sticky(sticky).children([track])],
    )?;
    ctx.configure(
        request.style,
        [
            ("background", StyleValue::from(roles.surface)),
            ("troughcolor", StyleValue::from(roles.border)),
        ],
    )
}

fn scrollbar(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    thumb: &'static str,
    arrows: bool,
) -> StyleResult<()> {
    let theme = ctx.theme();
    let roles = Roles::resolve(theme, request.descriptor, ColorToken::Border);
    let trough_color = theme.elevate(roles.surface, 1);
    let orientation = orientation(request.descriptor);

    let trough = request.element("trough");
    let images = ctx.images(names::LINE, &solid(vec![trough_color]))?;
    ctx.element_create(&trough, ImageElement::new(images).sticky("nsew"))?;

    let thumb_name = request.element("thumb");
    let thumb_states = StateSpec::new()
        .with(VisualState::Disabled, vec![roles.disabled, roles.disabled])
        .with(VisualState::Pressed, vec![roles.pressed, roles.pressed])
        .with(VisualState::Hover, vec![roles.active, roles.active])
        .otherwise(vec![roles.accent, roles.accent]);
    let images = ctx.images(thumb, &thumb_states)?;
    let slice = ctx.template_px(FRAME_SLICE);
    ctx.element_create(&thumb_name, ImageElement::new(images).border(vec![slice]).sticky("nsew"))?;

    let mut children = Vec::new();
    if arrows {
        let arrow_colors = StateSpec::new()
            .with(VisualState::Disabled, roles.on_disabled)
            .with(VisualState::Pressed, roles.pressed)
            .with(VisualState::Hover, roles.active)
            .otherwise(roles.accent);
        let ends = match orientation {
            Orientation::Horizontal => [
                ("leftarrow", names::CHEVRON_LEFT, "left"),
                ("rightarrow", names::CHEVRON_RIGHT, "right"),
            ],
            Orientation::Vertical => [
                ("uparrow", names::CHEVRON_UP, "top"),
                ("downarrow", names::CHEVRON_DOWN, "bottom"),
            ],
        };
        for (part, glyph, side) in ends {
            let name = request.element(part);
            glyph_element(ctx, &name, glyph, &arrow_colors)?;
            children.push(LayoutNode::new(name).side(side).sticky(""));
        }
    }
    children.push(LayoutNode::new(thumb_name).expand().sticky("nsew"));
    let sticky = if orientation.is_horizontal() { "ew" } else { "ns" };
    ctx.layout(request.style, vec![LayoutNode::new(trough).sticky(sticky).children(children)])?;

    let arrowsize = ctx.scale(12.0);
    ctx.configure(
        request.style,
        [
            ("troughcolor", StyleValue::from(trough_color)),
            ("background", StyleValue::from(roles.accent)),
            ("arrowcolor", StyleValue::from(roles.accent)),
            ("arrowsize", StyleValue::from(arrowsize)),
            ("relief", StyleValue::from("flat")),
        ],
    )
}

/// `TScrollbar`, default variant. Rounded thumb with arrows.
pub fn build_scrollbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    scrollbar(ctx, request, names::BUTTON, true)
}

/// `TScrollbar`, rounded variant. Pill thumb, no arrows.
pub fn build_rounded_scrollbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    scrollbar(ctx, request, names::PILL, false)
}

/// `TScrollbar`, squared variant. Square thumb with arrows.
pub fn build_squared_scrollbar(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    scrollbar(ctx, request, names::BUTTON_SQUARE, true)
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Progressbar, Variant::Default, build_progressbar);
    table.register(WidgetClass::Progressbar, Variant::Striped, build_striped_progressbar);
    table.register(WidgetClass::Scale, Variant::Default, build_scale);
    table.register(WidgetClass::Scrollbar, Variant::Default, build_scrollbar);
    table.register(WidgetClass::Scrollbar, Variant::Rounded, build_rounded_scrollbar);
    table.register(WidgetClass::Scrollbar, Variant::Squared, build_squared_scrollbar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstyle_core::bootstyle::parse;

    #[test]
    fn orientation_falls_back_to_the_class() {
        assert_eq!(orientation(&parse("", "TScrollbar", None)), Orientation::Vertical);
        assert_eq!(orientation(&parse("horizontal", "TScrollbar", None)), Orientation::Horizontal);
        assert_eq!(orientation(&parse("", "TProgressbar", None)), Orientation::Horizontal);
    }
}
