//! Selectable items: tab items, list rows and calendar days.
//!
//! These are toolbuttons and frames that stay highlighted while `selected`.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::LayoutNode;
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::widget::{Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::ColorToken;

use crate::chrome::{build_chrome, framed_layout, Chrome, Look, Paint};

fn quiet(roles: &Roles, selected: Paint, pressed: Paint) -> Look {
    Look {
        normal: Paint::solid(roles.surface, roles.on_surface),
        hover: Paint::solid(roles.subtle, roles.on_surface),
        pressed,
        selected: Some(selected),
        disabled: Paint::solid(roles.surface, roles.on_disabled),
        ring: roles.focus_ring,
    }
}

/// `TabItem.Toolbutton`, default variant. Square corners with an accent edge.
pub fn build_tab_item(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let look = quiet(
        &roles,
        Paint::new(roles.accent, roles.subtle, roles.accent),
        Paint::solid(roles.subtle, roles.accent),
    );
    let chrome = Chrome::new(names::BUTTON_SQUARE, look).padding(12.0, 6.0);
    build_chrome(ctx, request, &chrome, framed_layout(request, "Toolbutton", Vec::new()))
}

/// `TabItem.Toolbutton`, pill variant. Filled with the accent when selected.
pub fn build_pill_tab_item(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let look = quiet(
        &roles,
        Paint::solid(roles.accent, roles.on_accent),
        Paint::solid(roles.pressed, roles.on_accent),
    );
    let chrome = Chrome::new(names::PILL, look).padding(12.0, 6.0).slice(20.0);
    build_chrome(ctx, request, &chrome, framed_layout(request, "Toolbutton", Vec::new()))
}

/// `ListItem.TFrame`, default variant.
pub fn build_list_item(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let theme = ctx.theme();
    let roles = Roles::resolve(theme, request.descriptor, ColorToken::Primary);
    let look = Look {
        hover: Paint::solid(theme.elevate(roles.surface, 1), roles.on_surface),
        ..quiet(
            &roles,
            Paint::solid(roles.subtle, roles.accent),
            Paint::solid(theme.elevate(roles.surface, 2), roles.on_surface),
        )
    };
    let chrome = Chrome::new(names::BUTTON_SQUARE, look).padding(8.0, 4.0).anchor("w");
    let layout = vec![LayoutNode::new(request.element("border")).sticky("nsew")];
    build_chrome(ctx, request, &chrome, layout)
}

fn calendar_day(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>, outline: bool) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let look = if outline {
        quiet(
            &roles,
            Paint::new(roles.accent, roles.surface, roles.accent),
            Paint::new(roles.pressed, roles.surface, roles.pressed),
        )
    } else {
        quiet(
            &roles,
            Paint::solid(roles.accent, roles.on_accent),
            Paint::solid(roles.pressed, roles.on_accent),
        )
    };
    let chrome = Chrome::new(names::CIRCLE, look).padding(4.0, 4.0).slice(18.0);
    build_chrome(ctx, request, &chrome, framed_layout(request, "Toolbutton", Vec::new()))
}

/// `CalendarDay.Toolbutton`, default variant.
pub fn build_calendar_day(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    calendar_day(ctx, request, false)
}

/// `CalendarDay.Toolbutton`, outline variant.
pub fn build_outline_calendar_day(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    calendar_day(ctx, request, true)
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::TabItem, Variant::Default, build_tab_item);
    table.register(WidgetClass::TabItem, Variant::Pill, build_pill_tab_item);
    table.register(WidgetClass::ListItem, Variant::Default, build_list_item);
    table.register(WidgetClass::CalendarDay, Variant::Default, build_calendar_day);
    table.register(WidgetClass::CalendarDay, Variant::Outline, build_outline_calendar_day);
}
