// SPDX-License-Identifier: LGPL-3.0-only

//! Grayscale drawing surface for the built-in templates.
//!
//! Shapes are kurbo geometry rendered by the vello CPU rasterizer. Only gray
//! levels are drawn: black marks the first template color and white the second.

use image::{GrayImage, Luma, Rgba, RgbaImage};
use peniko::Color;
use vello_cpu::kurbo::{BezPath, Cap, Join, Point, Rect, RoundedRect, Shape, Stroke};
use vello_cpu::{Pixmap, RenderContext};

const TOLERANCE: f64 = 0.1;

/// Gray level of the first template color.
pub(crate) const BLACK: u8 = 0;
/// Gray level of the second template color.
pub(crate) const WHITE: u8 = 255;

/// A transparent canvas that shapes are painted onto in order.
pub(crate) struct Canvas {
    ctx: RenderContext,
    width: u16,
    height: u16,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            ctx: RenderContext::new(width, height),
            width,
            height,
        }
    }

    /// Fill `shape` with the gray level `gray`.
    pub fn fill(mut self, shape: &impl Shape, gray: u8) -> Self {
        self.ctx.set_paint(Color::from_rgba8(gray, gray, gray, 255));
        self.ctx.fill_path(&shape.to_path(TOLERANCE));
        self
    }

    /// Stroke `path` with round caps and joins.
    pub fn stroke(mut self, path: &BezPath, width: f64, gray: u8) -> Self {
        let mut stroke = Stroke::new(width);
        stroke.join = Join::Round;
        stroke.start_cap = Cap::Round;
        stroke.end_cap = Cap::Round;
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(Color::from_rgba8(gray, gray, gray, 255));
        self.ctx.stroke_path(path);
        self
    }

    fn render(mut self) -> (u32, Vec<[u8; 4]>) {
        let mut pixmap = Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        let pixels = pixmap
            .take_unpremultiplied()
            .into_iter()
            .map(|p| [p.r, p.g, p.b, p.a])
            .collect();
        (u32::from(self.width), pixels)
    }

    /// The painted canvas as a template base layer.
    pub fn into_rgba(self) -> RgbaImage {
        let height = u32::from(self.height);
        let (width, pixels) = self.render();
        RgbaImage::from_fn(width, height, |x, y| Rgba(pixels[(y * width + x) as usize]))
    }

    /// The painted coverage as a region mask.
    pub fn into_mask(self) -> GrayImage {
        let height = u32::from(self.height);
        let (width, pixels) = self.render();
        GrayImage::from_fn(width, height, |x, y| Luma([pixels[(y * width + x) as usize][3]]))
    }
}

/// Rounded rectangle whose corner radius is clamped to half its shorter side.
pub(crate) fn rounded(rect: Rect, radius: f64) -> RoundedRect {
    let limit = (rect.width().min(rect.height()) / 2.0).max(0.0);
    RoundedRect::from_rect(rect, radius.clamp(0.0, limit))
}

/// A `width` x `height` canvas minus `inset` on every side, with rounded corners.
pub(crate) fn inset_rect(width: u16, height: u16, inset: f64, radius: f64) -> RoundedRect {
    let canvas = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
    rounded(canvas.inset(-inset), radius)
}

/// A disc as a fully rounded square.
pub(crate) fn disc(center: (f64, f64), radius: f64) -> RoundedRect {
    rounded(Rect::from_center_size(center, (2.0 * radius, 2.0 * radius)), radius)
}

/// `shape` moved outward by `amount` on every side (negative shrinks).
pub(crate) fn grow(shape: &RoundedRect, amount: f64) -> RoundedRect {
    rounded(shape.rect().inset(amount), shape.radii().top_left + amount)
}

/// Open polylines, one subpath each.
pub(crate) fn polylines(lines: &[&[(f64, f64)]]) -> BezPath {
    let mut path = BezPath::new();
    for line in lines {
        let mut points = line.iter().map(|&(x, y)| Point::new(x, y));
        if let Some(start) = points.next() {
            path.move_to(start);
            for point in points {
                path.line_to(point);
            }
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_paint_in_order() {
        let outer = inset_rect(20, 20, 2.0, 4.0);
        let image = Canvas::new(20, 20)
            .fill(&outer, BLACK)
            .fill(&grow(&outer, -4.0), WHITE)
            .into_rgba();
        assert_eq!(image.get_pixel(10, 10).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        let edge = image.get_pixel(10, 3).0;
        assert_eq!(edge[0], 0);
        assert_eq!(edge[3], 255);
    }

    #[test]
    fn strokes_cover_their_path() {
        let mask = Canvas::new(10, 10)
            .stroke(&polylines(&[&[(0.0, 5.0), (10.0, 5.0)]]), 2.0, WHITE)
            .into_mask();
        assert!(mask.get_pixel(5, 4).0[0] > 200);
        assert_eq!(mask.get_pixel(5, 8).0[0], 0);
    }

    #[test]
    fn shrinking_keeps_the_radius_in_range() {
        let pill = inset_rect(56, 48, 4.0, f64::MAX);
        assert_eq!(pill.radii().top_left, 20.0);
        let inner = grow(&pill, -2.0);
        assert_eq!(inner.radii().top_left, 18.0);
        assert_eq!(disc((10.0, 10.0), 6.0).rect(), Rect::new(4.0, 4.0, 16.0, 16.0));
    }
}
