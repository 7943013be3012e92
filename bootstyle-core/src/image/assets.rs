// SPDX-License-Identifier: LGPL-3.0-only

use std::sync::Arc;

use image::GrayImage;
use indexmap::IndexMap;
use log::debug;
use vello_cpu::kurbo::{BezPath, Circle, Rect, RoundedRect, Shape};

use super::canvas::{disc, grow, inset_rect, polylines, rounded, Canvas, BLACK, WHITE};
use super::template::{Placement, Template};
use crate::error::{StyleError, StyleResult};

/// Names of the built-in templates.
pub mod names {
    /// Rounded button body with a focus ring. Colors: border, fill, ring.
    pub const BUTTON: &str = "button";
    /// Button body with square corners. Colors: border, fill, ring.
    pub const BUTTON_SQUARE: &str = "button-square";
    /// Fully rounded body. Colors: border, fill, ring.
    pub const PILL: &str = "pill";
    /// Text field body with a focus ring. Colors: border, fill, ring.
    pub const FIELD: &str = "field";
    /// Tab with rounded top corners and an open bottom edge. Colors: border, fill.
    pub const TAB: &str = "tab";
    /// Framed disc with a focus ring. Colors: border, fill, ring.
    pub const CIRCLE: &str = "circle";
    /// Small framed square. Colors: border, fill.
    pub const SQUARE: &str = "square";
    /// Check box. Colors: border, fill, mark.
    pub const CHECKBOX: &str = "checkbox";
    /// Check box in the alternate state. Colors: border, fill, dash.
    pub const CHECKBOX_ALTERNATE: &str = "checkbox-alternate";
    /// Radio indicator. Colors: border, fill, dot.
    pub const RADIO: &str = "radio";
    /// Rounded switch, off. Colors: track border, track fill, knob.
    pub const TOGGLE_ROUND_OFF: &str = "toggle-round-off";
    /// Rounded switch, on. Colors: track border, track fill, knob.
    pub const TOGGLE_ROUND_ON: &str = "toggle-round-on";
    /// Square switch, off. Colors: track border, track fill, knob.
    pub const TOGGLE_SQUARE_OFF: &str = "toggle-square-off";
    /// Square switch, on. Colors: track border, track fill, knob.
    pub const TOGGLE_SQUARE_ON: &str = "toggle-square-on";
    /// Slider knob with a focus ring. Colors: border, fill, ring.
    pub const SLIDER: &str = "slider";
    /// Diagonal stripes. Colors: stripe, background.
    pub const STRIPES: &str = "stripes";
    /// Solid block. Colors: fill.
    pub const LINE: &str = "line";
    /// Glyph.
    pub const CHEVRON_UP: &str = "chevron-up";
    /// Glyph.
    pub const CHEVRON_DOWN: &str = "chevron-down";
    /// Glyph.
    pub const CHEVRON_LEFT: &str = "chevron-left";
    /// Glyph.
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    /// Glyph.
    pub const CHECK: &str = "check";
    /// Glyph.
    pub const CLOSE: &str = "close";
    /// Glyph.
    pub const PLUS: &str = "plus";
    /// Glyph.
    pub const MINUS: &str = "minus";
    /// Glyph.
    pub const DOT: &str = "dot";

    /// Single-color glyph templates, usable as icons.
    pub const GLYPHS: [&str; 9] = [
        CHEVRON_UP,
        CHEVRON_DOWN,
        CHEVRON_LEFT,
        CHEVRON_RIGHT,
        CHECK,
        CLOSE,
        PLUS,
        MINUS,
        DOT,
    ];
}

const FOCUS_RING: f64 = 3.0;
const GLYPH_SIZE: u16 = 32;
const GLYPH_STROKE: f64 = 4.0;

/// Named image templates.
///
/// [AssetStore::new] rasterizes the built-in templates; applications can add
/// their own with [AssetStore::insert] or [AssetStore::load].
#[derive(Debug, Clone)]
pub struct AssetStore {
    templates: IndexMap<String, Arc<Template>>,
}

impl AssetStore {
    /// Create a store holding the built-in templates.
    pub fn new() -> Self {
        let mut store = Self::empty();
        for template in builtin_templates() {
            store.insert(template);
        }
        debug!("Rendered {} built-in templates", store.templates.len());
        store
    }

    /// Create a store without templates.
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// Add a template, replacing one with the same name.
    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name().to_string(), Arc::new(template));
    }

    /// Decode an image and add it as a template without extra regions.
    pub fn load(&mut self, name: &str, bytes: &[u8]) -> StyleResult<()> {
        self.insert(Template::from_bytes(name, bytes)?);
        Ok(())
    }

    /// Look a template up.
    pub fn get(&self, name: &str) -> StyleResult<Arc<Template>> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| StyleError::TemplateNotFound(name.to_string()))
    }

    /// Whether a template exists.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A template whose base is a bordered shape: the border ring is dark, the
/// interior light.
fn framed(name: &str, width: u16, height: u16, outer: RoundedRect, border: f64) -> Template {
    let base = Canvas::new(width, height)
        .fill(&outer, BLACK)
        .fill(&grow(&outer, -border), WHITE)
        .into_rgba();
    Template::new(name, base)
}

/// [framed], plus a focus ring region drawn below the shape.
fn framed_with_ring(name: &str, width: u16, height: u16, outer: RoundedRect, border: f64) -> Template {
    let ring = Canvas::new(width, height)
        .fill(&grow(&outer, FOCUS_RING), WHITE)
        .into_mask();
    framed(name, width, height, outer, border).with_region(ring, Placement::Below)
}

fn mask(width: u16, height: u16, shape: &impl Shape) -> GrayImage {
    Canvas::new(width, height).fill(shape, WHITE).into_mask()
}

fn stroke_mask(width: u16, height: u16, path: &BezPath) -> GrayImage {
    Canvas::new(width, height).stroke(path, GLYPH_STROKE, WHITE).into_mask()
}

fn glyph(name: &str, path: &BezPath) -> Template {
    let base = Canvas::new(GLYPH_SIZE, GLYPH_SIZE)
        .stroke(path, GLYPH_STROKE, BLACK)
        .into_rgba();
    Template::new(name, base)
}

fn toggle(name: &str, radius: f64, on: bool) -> Template {
    let (width, height) = (64, 36);
    let track = inset_rect(width, height, 2.0, radius);
    let knob_x = if on { 46.0 } else { 18.0 };
    let knob = rounded(Rect::from_center_size((knob_x, 18.0), (20.0, 20.0)), radius.min(10.0));
    framed(name, width, height, track, 3.0).with_region(mask(width, height, &knob), Placement::Above)
}

/// Diagonal bands: black where `(x + y) mod 20 < 10`, white elsewhere.
fn stripes() -> Template {
    let size = 40.0;
    let mut bands = BezPath::new();
    for start in (0..=4).map(|band| f64::from(band) * 20.0) {
        bands.move_to((start, 0.0));
        bands.line_to((start + 10.0, 0.0));
        bands.line_to((start + 10.0 - size, size));
        bands.line_to((start - size, size));
        bands.close_path();
    }
    let base = Canvas::new(40, 40)
        .fill(&Rect::new(0.0, 0.0, size, size), WHITE)
        .fill(&bands, BLACK)
        .into_rgba();
    Template::new(names::STRIPES, base)
}

fn builtin_templates() -> Vec<Template> {
    use names::*;

    let inset = FOCUS_RING + 1.0;
    let check = polylines(&[&[(9.0, 16.5), (14.0, 21.5), (23.0, 11.0)]]);
    let dash = polylines(&[&[(10.0, 16.0), (22.0, 16.0)]]);
    let dot = Circle::new((16.0, 16.0), 6.0);
    let box_outline = inset_rect(32, 32, 2.0, 4.0);

    // Open at the bottom: the shape runs past the lower edge of the canvas.
    let tab = framed(TAB, 40, 36, rounded(Rect::new(1.0, 0.0, 39.0, 56.0), 8.0), 2.0);

    vec![
        framed_with_ring(BUTTON, 48, 48, inset_rect(48, 48, inset, 8.0), 2.0),
        framed_with_ring(BUTTON_SQUARE, 48, 48, inset_rect(48, 48, inset, 1.0), 2.0),
        framed_with_ring(PILL, 56, 48, inset_rect(56, 48, inset, f64::MAX), 2.0),
        framed_with_ring(FIELD, 48, 48, inset_rect(48, 48, inset, 6.0), 2.0),
        tab,
        framed_with_ring(CIRCLE, 40, 40, disc((20.0, 20.0), 20.0 - inset), 2.0),
        framed(SQUARE, 32, 32, box_outline, 2.0),
        framed(CHECKBOX, 32, 32, box_outline, 2.0).with_region(stroke_mask(32, 32, &check), Placement::Above),
        framed(CHECKBOX_ALTERNATE, 32, 32, box_outline, 2.0)
            .with_region(stroke_mask(32, 32, &dash), Placement::Above),
        framed(RADIO, 32, 32, disc((16.0, 16.0), 14.0), 2.0).with_region(mask(32, 32, &dot), Placement::Above),
        toggle(TOGGLE_ROUND_OFF, f64::MAX, false),
        toggle(TOGGLE_ROUND_ON, f64::MAX, true),
        toggle(TOGGLE_SQUARE_OFF, 3.0, false),
        toggle(TOGGLE_SQUARE_ON, 3.0, true),
        framed_with_ring(SLIDER, 40, 40, disc((20.0, 20.0), 12.0), 3.0),
        stripes(),
        Template::new(LINE, Canvas::new(4, 4).fill(&Rect::new(0.0, 0.0, 4.0, 4.0), WHITE).into_rgba()),
        glyph(CHEVRON_UP, &polylines(&[&[(9.0, 20.0), (16.0, 13.0), (23.0, 20.0)]])),
        glyph(CHEVRON_DOWN, &polylines(&[&[(9.0, 12.0), (16.0, 19.0), (23.0, 12.0)]])),
        glyph(CHEVRON_LEFT, &polylines(&[&[(20.0, 9.0), (13.0, 16.0), (20.0, 23.0)]])),
        glyph(CHEVRON_RIGHT, &polylines(&[&[(12.0, 9.0), (19.0, 16.0), (12.0, 23.0)]])),
        glyph(CHECK, &check),
        glyph(CLOSE, &polylines(&[&[(9.0, 9.0), (23.0, 23.0)], &[(23.0, 9.0), (9.0, 23.0)]])),
        glyph(PLUS, &polylines(&[&[(16.0, 8.0), (16.0, 24.0)], &[(8.0, 16.0), (24.0, 16.0)]])),
        glyph(MINUS, &polylines(&[&[(8.0, 16.0), (24.0, 16.0)]])),
        Template::new(DOT, Canvas::new(GLYPH_SIZE, GLYPH_SIZE).fill(&dot, BLACK).into_rgba()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_template_is_built() {
        let store = AssetStore::new();
        for name in names::GLYPHS {
            assert_eq!(store.get(name).unwrap().color_slots(), 2);
        }
        assert_eq!(store.get(names::BUTTON).unwrap().color_slots(), 3);
        assert_eq!(store.get(names::TOGGLE_ROUND_ON).unwrap().regions()[0].placement(), Placement::Above);
        assert!(matches!(store.get("nope"), Err(StyleError::TemplateNotFound(_))));
    }

    #[test]
    fn button_border_is_dark_and_interior_light() {
        let store = AssetStore::new();
        let button = store.get(names::BUTTON).unwrap();
        let center = button.base().get_pixel(24, 24);
        assert_eq!(center.0, [255, 255, 255, 255]);
        let ring = &button.regions()[0];
        assert_eq!(ring.placement(), Placement::Below);
        assert_eq!(ring.mask().get_pixel(24, 2).0[0], 255);
        assert_eq!(ring.mask().get_pixel(24, 0).0[0], 0);
        let corner = button.base().get_pixel(0, 0);
        assert_eq!(corner.0[3], 0);
        let edge = button.base().get_pixel(24, 5);
        assert_eq!(edge.0[0], 0);
        assert_eq!(edge.0[3], 255);
    }

    #[test]
    fn user_templates_decode_from_png() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([128, 128, 128, 255]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        let mut store = AssetStore::empty();
        store.load("custom", &png).unwrap();
        assert_eq!(store.get("custom").unwrap().dimensions(), (2, 2));
    }
}
