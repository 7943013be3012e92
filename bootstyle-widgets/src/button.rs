//! Push buttons, button groups, toolbuttons and menu buttons.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::LayoutNode;
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::widget::{Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::ColorToken;

use crate::chrome::{build_chrome, framed_layout, glyph_element, Chrome, Look, Paint};

/// Accent fill with contrasting text.
pub fn solid_look(roles: &Roles) -> Look {
    Look {
        normal: Paint::solid(roles.accent, roles.on_accent),
        hover: Paint::solid(roles.active, roles.on_accent),
        pressed: Paint::solid(roles.pressed, roles.on_accent),
        selected: None,
        disabled: Paint::solid(roles.disabled, roles.on_disabled),
        ring: roles.focus_ring,
    }
}

/// Accent border and text on the surface, filled while hovered.
pub fn outline_look(roles: &Roles) -> Look {
    Look {
        normal: Paint::new(roles.accent, roles.surface, roles.accent),
        hover: Paint::solid(roles.active, roles.on_accent),
        pressed: Paint::solid(roles.pressed, roles.on_accent),
        selected: None,
        disabled: Paint::new(roles.disabled, roles.surface, roles.on_disabled),
        ring: roles.focus_ring,
    }
}

/// Accent text only.
pub fn link_look(roles: &Roles) -> Look {
    Look {
        normal: Paint::solid(roles.surface, roles.accent),
        hover: Paint::solid(roles.surface, roles.active),
        pressed: Paint::solid(roles.surface, roles.pressed),
        selected: None,
        disabled: Paint::solid(roles.surface, roles.on_disabled),
        ring: roles.focus_ring,
    }
}

/// Accent text on the surface with a faint tint while hovered.
pub fn ghost_look(roles: &Roles) -> Look {
    Look {
        normal: Paint::solid(roles.surface, roles.accent),
        hover: Paint::solid(roles.subtle, roles.accent),
        pressed: Paint::solid(roles.accent.mix(roles.surface, 0.24), roles.accent),
        selected: None,
        disabled: Paint::solid(roles.surface, roles.on_disabled),
        ring: roles.focus_ring,
    }
}

fn toggling(look: Look, selected: Paint) -> Look {
    Look {
        selected: Some(selected),
        ..look
    }
}

fn button(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    template: &'static str,
    look: fn(&Roles) -> Look,
) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let chrome = Chrome::new(template, look(&roles));
    build_chrome(ctx, request, &chrome, framed_layout(request, "Button", Vec::new()))
}

/// `TButton`, default variant.
pub fn build_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON, solid_look)
}

/// `TButton`, outline variant.
pub fn build_outline_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON, outline_look)
}

/// `TButton`, link variant.
pub fn build_link_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON, link_look)
}

/// `TButton`, ghost variant.
pub fn build_ghost_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON, ghost_look)
}

/// `ButtonGroup.TButton`, default variant. Square corners so members join.
pub fn build_group_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON_SQUARE, solid_look)
}

/// `ButtonGroup.TButton`, outline variant.
pub fn build_outline_group_button(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    button(ctx, request, names::BUTTON_SQUARE, outline_look)
}

/// `Toolbutton`, default variant. Stays pressed while selected.
pub fn build_toolbutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let look = toggling(solid_look(&roles), Paint::solid(roles.pressed, roles.on_accent));
    let chrome = Chrome::new(names::BUTTON, look);
    build_chrome(ctx, request, &chrome, framed_layout(request, "Toolbutton", Vec::new()))
}

/// `Toolbutton`, outline variant. Filled while selected.
pub fn build_outline_toolbutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let look = toggling(outline_look(&roles), Paint::solid(roles.accent, roles.on_accent));
    let chrome = Chrome::new(names::BUTTON, look);
    build_chrome(ctx, request, &chrome, framed_layout(request, "Toolbutton", Vec::new()))
}

fn menubutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>, look: fn(&Roles) -> Look) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let chrome = Chrome::new(names::BUTTON, look(&roles)).anchor("w");
    let arrow = request.element("arrow");
    glyph_element(ctx, &arrow, names::CHEVRON_DOWN, &chrome.look.foreground())?;

    let layout = framed_layout(
        request,
        "Menubutton",
        vec![LayoutNode::new(arrow).side("right").sticky("e")],
    );
    build_chrome(ctx, request, &chrome, layout)
}

/// `TMenubutton`, default variant.
pub fn build_menubutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    menubutton(ctx, request, solid_look)
}

/// `TMenubutton`, outline variant.
pub fn build_outline_menubutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    menubutton(ctx, request, outline_look)
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Button, Variant::Default, build_button);
    table.register(WidgetClass::Button, Variant::Outline, build_outline_button);
    table.register(WidgetClass::Button, Variant::Link, build_link_button);
    table.register(WidgetClass::Button, Variant::Ghost, build_ghost_button);

    table.register(WidgetClass::ButtonGroup, Variant::Default, build_group_button);
    table.register(WidgetClass::ButtonGroup, Variant::Outline, build_outline_group_button);

    table.register(WidgetClass::Toolbutton, Variant::Default, build_toolbutton);
    table.register(WidgetClass::Toolbutton, Variant::Outline, build_outline_toolbutton);

    table.register(WidgetClass::Menubutton, Variant::Default, build_menubutton);
    table.register(WidgetClass::Menubutton, Variant::Outline, build_outline_menubutton);
}
