// SPDX-License-Identifier: LGPL-3.0-only

//! # Image Recolor Engine
//!
//! Turns grayscale templates into theme-colored, DPI-scaled bitmaps.
//!
//! ## Algorithm
//!
//! 1. Each base-layer pixel's luminance `lum` (0 to 1) interpolates between the
//!    first two colors: `dark + (light - dark) * lum`, per channel, through a
//!    256-entry lookup table. Alpha is kept as authored.
//! 2. Every further color paints one [Region] of the template, above or below
//!    the base as the template declares.
//! 3. Templates are authored at twice their intended size, so the result is
//!    resampled by `0.5 * scaling` with a Lanczos3 filter. A factor of one
//!    leaves the image untouched.
//!
//! The engine keeps no cache. Bitmaps belong to the host, which drops them when
//! it is reset.

use bootstyle_theme::HexColor;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::trace;

use crate::error::{StyleError, StyleResult};

mod assets;
mod canvas;
mod template;

pub use assets::{names, AssetStore};
pub use template::{Placement, Region, Template};

/// Recolor `template` with `colors` and scale it for the toolkit `scaling`.
///
/// `colors[0]` replaces black and `colors[1]` replaces white in the base layer;
/// a single color paints the whole base. Further colors fill the template's
/// regions in order; regions without a color are left out.
///
/// Fails with [StyleError::TemplateRegions] when no color is given or when
/// there are more colors than [Template::color_slots].
pub fn recolor_image(template: &Template, colors: &[HexColor], scaling: f64) -> StyleResult<RgbaImage> {
    let (dark, light) = match colors {
        [only] => (*only, *only),
        [dark, light, ..] if colors.len() <= template.color_slots() => (*dark, *light),
        _ => {
            return Err(StyleError::TemplateRegions {
                template: template.name().to_string(),
                accepted: template.color_slots(),
                given: colors.len(),
            })
        }
    };
    trace!("Recoloring '{}' with {} colors", template.name(), colors.len());

    let lut = luminance_lut(dark, light);
    let mut image = template.base().clone();
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let [r, g, b] = lut[luma(r, g, b) as usize];
        pixel.0 = [r, g, b, a];
    }

    for (region, color) in template.regions().iter().zip(colors.iter().skip(2)) {
        paint_region(&mut image, region, *color);
    }

    Ok(scale_for_display(image, scaling))
}

fn luminance_lut(dark: HexColor, light: HexColor) -> [[u8; 3]; 256] {
    let dark = dark.to_rgb8();
    let light = light.to_rgb8();
    let mut lut = [[0u8; 3]; 256];
    for (level, entry) in lut.iter_mut().enumerate() {
        let t = level as f32 / 255.0;
        for channel in 0..3 {
            let d = f32::from(dark[channel]);
            let l = f32::from(light[channel]);
            entry[channel] = (d + (l - d) * t).round().clamp(0.0, 255.0) as u8;
        }
    }
    lut
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    ((weighted + 500) / 1000).min(255) as u8
}

/// Source-over compositing of non-premultiplied colors.
fn over(src: [u8; 3], src_alpha: f32, dst: [u8; 3], dst_alpha: f32) -> [u8; 4] {
    let alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if alpha <= f32::EPSILON {
        return [dst[0], dst[1], dst[2], 0];
    }
    let mut out = [0u8; 4];
    for channel in 0..3 {
        let value = (f32::from(src[channel]) * src_alpha
            + f32::from(dst[channel]) * dst_alpha * (1.0 - src_alpha))
            / alpha;
        out[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}

fn paint_region(image: &mut RgbaImage, region: &Region, color: HexColor) {
    let color = color.to_rgb8();
    for (pixel, coverage) in image.pixels_mut().zip(region.mask().pixels()) {
        let coverage = f32::from(coverage.0[0]) / 255.0;
        if coverage <= 0.0 {
            continue;
        }
        let [r, g, b, a] = pixel.0;
        let base_alpha = f32::from(a) / 255.0;
        pixel.0 = match region.placement() {
            Placement::Above => over(color, coverage, [r, g, b], base_alpha),
            Placement::Below => over([r, g, b], base_alpha, color, coverage),
        };
    }
}

fn scale_for_display(image: RgbaImage, scaling: f64) -> RgbaImage {
    let factor = 0.5 * scaling;
    let (width, height) = image.dimensions();
    let target = |size: u32| ((f64::from(size) * factor).round() as u32).max(1);
    let (new_width, new_height) = (target(width), target(height));
    if (new_width, new_height) == (width, height) {
        return image;
    }
    imageops::resize(&image, new_width, new_height, FilterType::Lanczos3)
}
