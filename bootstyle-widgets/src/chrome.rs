//! The framed, stateful look shared by button-like builders.
//!
//! A [Look] gives the border, fill and text color of every state. [build_chrome]
//! turns it into a recolored `border` element, a layout, and the scalar and
//! state-mapped text options.

use bootstyle_core::builder::{BuildRequest, BuilderContext};
use bootstyle_core::host::{ImageElement, LayoutNode, StyleValue};
use bootstyle_core::state::{StateSpec, VisualState};
use bootstyle_core::StyleResult;
use bootstyle_theme::typography::FontRole;
use bootstyle_theme::HexColor;

/// Corner size of the framed built-in templates, in template pixels.
pub const FRAME_SLICE: f64 = 14.0;

/// Colors of one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Border color.
    pub border: HexColor,
    /// Fill color.
    pub fill: HexColor,
    /// Text and icon color.
    pub text: HexColor,
}

impl Paint {
    /// Create a paint.
    pub fn new(border: HexColor, fill: HexColor, text: HexColor) -> Self {
        Self { border, fill, text }
    }

    /// A paint whose border matches its fill.
    pub fn solid(fill: HexColor, text: HexColor) -> Self {
        Self::new(fill, fill, text)
    }
}

/// The paint of every state of a button-like widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Look {
    /// Resting state.
    pub normal: Paint,
    /// Pointer over the widget.
    pub hover: Paint,
    /// Mouse button held down.
    pub pressed: Paint,
    /// Selected state, for toggling widgets.
    pub selected: Option<Paint>,
    /// Not interactive.
    pub disabled: Paint,
    /// Focus ring color.
    pub ring: HexColor,
}

impl Look {
    fn interactive(&self) -> Vec<(VisualState, Paint)> {
        let mut states = vec![(VisualState::Pressed, self.pressed)];
        if let Some(selected) = self.selected {
            states.push((VisualState::Selected, selected));
        }
        states.push((VisualState::Hover, self.hover));
        states
    }

    /// Template colors per state: border and fill, plus the ring while focused.
    ///
    /// The order is `disabled`, each interactive state combined with `focus`,
    /// `focus`, each interactive state alone, and the resting state.
    pub fn chrome(&self) -> StateSpec<Vec<HexColor>> {
        let interactive = self.interactive();
        let mut states = StateSpec::new().with(VisualState::Disabled, vec![self.disabled.border, self.disabled.fill]);
        for (state, paint) in &interactive {
            states.push([VisualState::Focus, *state], vec![paint.border, paint.fill, self.ring]);
        }
        states.push(VisualState::Focus, vec![self.normal.border, self.normal.fill, self.ring]);
        for (state, paint) in &interactive {
            states.push(*state, vec![paint.border, paint.fill]);
        }
        states.otherwise(vec![self.normal.border, self.normal.fill])
    }

    /// Text color per state.
    pub fn foreground(&self) -> StateSpec<HexColor> {
        self.per_state(|paint| paint.text)
    }

    /// Fill color per state.
    pub fn background(&self) -> StateSpec<HexColor> {
        self.per_state(|paint| paint.fill)
    }

    fn per_state(&self, pick: impl Fn(&Paint) -> HexColor) -> StateSpec<HexColor> {
        let mut states = StateSpec::new().with(VisualState::Disabled, pick(&self.disabled));
        for (state, paint) in self.interactive() {
            states.push(state, pick(&paint));
        }
        states.otherwise(pick(&self.normal))
    }
}

/// Everything [build_chrome] needs besides the layout.
#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    /// Template with border, fill and ring colors.
    pub template: &'static str,
    /// State colors.
    pub look: Look,
    /// Nine-slice border in template pixels.
    pub slice: f64,
    /// Horizontal and vertical padding in points.
    pub padding: [f64; 2],
    /// Text anchor.
    pub anchor: &'static str,
    /// Text font.
    pub font: FontRole,
}

impl Chrome {
    /// A centered, label-font chrome over `template`.
    pub fn new(template: &'static str, look: Look) -> Self {
        Self {
            template,
            look,
            slice: FRAME_SLICE,
            padding: [10.0, 5.0],
            anchor: "center",
            font: FontRole::Label,
        }
    }

    /// Set the padding in points.
    pub fn padding(mut self, horizontal: f64, vertical: f64) -> Self {
        self.padding = [horizontal, vertical];
        self
    }

    /// Set the text anchor.
    pub fn anchor(mut self, anchor: &'static str) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the nine-slice border in template pixels.
    pub fn slice(mut self, slice: f64) -> Self {
        self.slice = slice;
        self
    }
}

/// `border` around `extra` and the toolkit's `{class}.padding` and `{class}.label`.
pub fn framed_layout(request: &BuildRequest<'_>, class: &str, extra: Vec<LayoutNode>) -> Vec<LayoutNode> {
    let mut children = extra;
    children.push(
        LayoutNode::new(format!("{class}.padding"))
            .sticky("nsew")
            .children([LayoutNode::new(format!("{class}.label")).sticky("nsew")]),
    );
    vec![LayoutNode::new(request.element("border")).sticky("nsew").children(children)]
}

/// Create the `border` element, set `layout`, and configure the text options.
///
/// Elements referenced by `layout` other than `border` must exist already.
pub fn build_chrome(
    ctx: &mut BuilderContext<'_>,
    request: &BuildRequest<'_>,
    chrome: &Chrome,
    layout: Vec<LayoutNode>,
) -> StyleResult<()> {
    let images = ctx.images(chrome.template, &chrome.look.chrome())?;
    let slice = ctx.template_px(chrome.slice);
    ctx.element_create(
        &request.element("border"),
        ImageElement::new(images).border(vec![slice]).sticky("nsew"),
    )?;
    ctx.layout(request.style, layout)?;

    let font = ctx.typography().font(chrome.font).clone();
    let padding = vec![ctx.scale(chrome.padding[0]), ctx.scale(chrome.padding[1])];
    let normal = chrome.look.normal;
    ctx.configure(
        request.style,
        [
            ("foreground", StyleValue::from(normal.text)),
            ("background", StyleValue::from(normal.fill)),
            ("relief", StyleValue::from("flat")),
            ("anchor", StyleValue::from(chrome.anchor)),
            ("padding", StyleValue::from(padding)),
            ("font", StyleValue::from(font)),
        ],
    )?;

    let foreground = chrome.look.foreground();
    ctx.map_colors(request.style, "foreground", &foreground)?;
    ctx.map_colors(request.style, "background", &chrome.look.background())?;
    ctx.apply_icon_option(request, &foreground)
}

/// One single-color glyph image per state of `colors`, for arrows and marks.
pub fn glyph_element(
    ctx: &mut BuilderContext<'_>,
    name: &str,
    glyph: &str,
    colors: &StateSpec<HexColor>,
) -> StyleResult<()> {
    let images = ctx.images(glyph, &colors.map(|color| vec![*color]))?;
    ctx.element_create(name, ImageElement::new(images))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn look() -> Look {
        let c = HexColor::from_u32;
        Look {
            normal: Paint::solid(c(0x0000ff), c(0xffffff)),
            hover: Paint::solid(c(0x3333ff), c(0xffffff)),
            pressed: Paint::solid(c(0x6666ff), c(0xffffff)),
            selected: None,
            disabled: Paint::solid(c(0xeeeeee), c(0x999999)),
            ring: c(0x8080ff),
        }
    }

    #[test]
    fn chrome_states_are_most_specific_first() {
        let states = look().chrome();
        let order: Vec<String> = states.iter().map(|(expr, _)| expr.to_string()).collect();
        assert_eq!(
            order,
            vec!["disabled", "focus pressed", "focus hover", "focus", "pressed", "hover", ""]
        );
        assert!(states.is_well_ordered());
        assert_eq!(states.resolve(&[VisualState::Focus]).map(Vec::len), Some(3));
    }

    #[test]
    fn selected_sits_between_pressed_and_hover() {
        let mut look = look();
        look.selected = Some(look.pressed);
        let order: Vec<String> = look.foreground().iter().map(|(expr, _)| expr.to_string()).collect();
        assert_eq!(order, vec!["disabled", "pressed", "selected", "hover", ""]);
        assert!(look.chrome().is_well_ordered());
    }
}
