//! Switches, check boxes and radio buttons.
//!
//! All of them draw an `indicator` element next to the toolkit's label. The
//! indicator swaps template when selected, so each state carries its own
//! template name along with its colors.

use bootstyle_core::builder::{BuildRequest, BuilderContext, Roles};
use bootstyle_core::host::{BitmapHandle, ImageElement, LayoutNode, StyleValue};
use bootstyle_core::image::names;
use bootstyle_core::registry::RegistryTable;
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::widget::{Variant, WidgetClass};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::{ColorToken, HexColor};

use VisualState::{Alternate, Disabled, Focus, Hover, Selected};

type Indicator = StateSpec<(&'static str, Vec<HexColor>)>;

fn toggle_states(roles: &Roles, off: &'static str, on: &'static str) -> Indicator {
    let idle = vec![roles.border, roles.surface, roles.border];
    let armed = vec![roles.accent, roles.surface, roles.accent];
    StateSpec::new()
        .with([Disabled, Selected], (on, vec![roles.disabled, roles.disabled, roles.on_disabled]))
        .with(Disabled, (off, vec![roles.disabled, roles.surface, roles.disabled]))
        .with([Focus, Selected], (on, vec![roles.focus_border, roles.accent, roles.on_accent]))
        .with([Hover, Selected], (on, vec![roles.active, roles.active, roles.on_accent]))
        .with(Selected, (on, vec![roles.accent, roles.accent, roles.on_accent]))
        .with(Focus, (off, armed.clone()))
        .with(Hover, (off, armed))
        .otherwise((off, idle))
}

fn checkbox_states(roles: &Roles) -> Indicator {
    let on = vec![roles.accent, roles.accent, roles.on_accent];
    StateSpec::new()
        .with([Disabled, Selected], (names::CHECKBOX, vec![roles.disabled, roles.disabled, roles.on_disabled]))
        .with(
            [Disabled, Alternate],
            (names::CHECKBOX_ALTERNATE, vec![roles.disabled, roles.disabled, roles.on_disabled]),
        )
        .with(Disabled, (names::CHECKBOX, vec![roles.disabled, roles.surface]))
        .with([Hover, Selected], (names::CHECKBOX, vec![roles.active, roles.active, roles.on_accent]))
        .with(Selected, (names::CHECKBOX, on.clone()))
        .with(Alternate, (names::CHECKBOX_ALTERNATE, on))
        .with(Hover, (names::CHECKBOX, vec![roles.accent, roles.surface]))
        .otherwise((names::CHECKBOX, vec![roles.border, roles.surface]))
}

fn radio_states(roles: &Roles) -> Indicator {
    StateSpec::new()
        .with([Disabled, Selected], (names::RADIO, vec![roles.disabled, roles.disabled, roles.on_disabled]))
        .with(Disabled, (names::RADIO, vec![roles.disabled, roles.surface]))
        .with([Hover, Selected], (names::RADIO, vec![roles.active, roles.active, roles.on_accent]))
        .with(Selected, (names::RADIO, vec![roles.accent, roles.accent, roles.on_accent]))
        .with(Hover, (names::RADIO, vec![roles.accent, roles.surface]))
        .otherwise((names::RADIO, vec![roles.border, roles.surface]))
}

/// Recolor each state's template, sharing images between identical states.
fn indicator_images(ctx: &mut BuilderContext<'_>, states: &Indicator) -> StyleResult<ImageElement> {
    let mut made: Vec<(&str, Vec<HexColor>, BitmapHandle)> = Vec::new();
    let images = states.try_map(|(template, colors)| -> StyleResult<BitmapHandle> {
        if let Some((_, _, handle)) = made.iter().find(|(name, seen, _)| name == template && seen == colors) {
            return Ok(*handle);
        }
        let handle = ctx.recolor(template, colors)?;
        made.push((*template, colors.clone(), handle));
        Ok(handle)
    })?;
    Ok(ImageElement::new(images).sticky("w"))
}

fn labeled_indicator(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    roles: &Roles,
    states: &Indicator,
    class: &str,
) -> StyleResult<()> {
    let indicator = request.element("indicator");
    let element = indicator_images(ctx, states)?.padding(vec![ctx.scale(4.0), 0]);
    ctx.element_create(&indicator, element)?;
    ctx.layout(
        request.style,
        vec![LayoutNode::new(format!("{class}.padding")).sticky("nsew").children([
            LayoutNode::new(indicator).side("left").sticky(""),
            LayoutNode::new(format!("{class}.label")).side("left").sticky("nsew"),
        ])],
    )?;

    let font = ctx.typography().font(FontRole::Label).clone();
    let padding = vec![ctx.scale(2.0)];
    ctx.configure(
        request.style,
        [
            ("foreground", StyleValue::from(roles.on_surface)),
            ("background", StyleValue::from(roles.surface)),
            ("relief", StyleValue::from("flat")),
            ("padding", StyleValue::from(padding)),
            ("font", StyleValue::from(font)),
        ],
    )?;
    let foreground = StateSpec::new()
        .with(Disabled, roles.on_disabled)
        .otherwise(roles.on_surface);
    ctx.map_colors(request.style, "foreground", &foreground)?;
    ctx.apply_icon_option(request, &foreground)
}

/// `Roundtoggle.Toolbutton`, default variant.
pub fn build_round_toggle(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let states = toggle_states(&roles, names::TOGGLE_ROUND_OFF, names::TOGGLE_ROUND_ON);
    labeled_indicator(ctx, request, &roles, &states, "Toolbutton")
}

/// `Squaretoggle.Toolbutton`, default variant.
pub fn build_square_toggle(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    let states = toggle_states(&roles, names::TOGGLE_SQUARE_OFF, names::TOGGLE_SQUARE_ON);
    labeled_indicator(ctx, request, &roles, &states, "Toolbutton")
}

/// `TCheckbutton`, default variant. The `alternate` state shows a dash.
pub fn build_checkbutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    labeled_indicator(ctx, request, &roles, &checkbox_states(&roles), "Checkbutton")
}

/// `TRadiobutton`, default variant.
pub fn build_radiobutton(ctx: &mut BuilderContext<'_>, request: &BuildRequest<'_>) -> StyleResult<()> {
    let roles = Roles::resolve(ctx.theme(), request.descriptor, ColorToken::Primary);
    labeled_indicator(ctx, request, &roles, &radio_states(&roles), "Radiobutton")
}

pub(crate) fn register(table: &mut RegistryTable) {
    table.register(WidgetClass::Roundtoggle, Variant::Default, build_round_toggle);
    table.register(WidgetClass::Squaretoggle, Variant::Default, build_square_toggle);
    table.register(WidgetClass::Checkbutton, Variant::Default, build_checkbutton);
    table.register(WidgetClass::Radiobutton, Variant::Default, build_radiobutton);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstyle_core::bootstyle::parse;
    use bootstyle_theme::theme::builtin;

    fn roles() -> Roles {
        let theme = builtin::theme("litera").unwrap();
        Roles::resolve(&theme, &parse("success", "TCheckbutton", None), ColorToken::Primary)
    }

    #[test]
    fn indicator_states_are_well_ordered() {
        let roles = roles();
        assert!(checkbox_states(&roles).is_well_ordered());
        assert!(radio_states(&roles).is_well_ordered());
        assert!(toggle_states(&roles, names::TOGGLE_ROUND_OFF, names::TOGGLE_ROUND_ON).is_well_ordered());
    }

    #[test]
    fn selected_toggles_use_the_on_template() {
        let roles = roles();
        let states = toggle_states(&roles, names::TOGGLE_SQUARE_OFF, names::TOGGLE_SQUARE_ON);
        let (template, colors) = states.resolve(&[Selected, Hover]).unwrap();
        assert_eq!(*template, names::TOGGLE_SQUARE_ON);
        assert_eq!(colors[0], roles.active);
        assert_eq!(states.resolve(&[]).unwrap().0, names::TOGGLE_SQUARE_OFF);
    }
}
