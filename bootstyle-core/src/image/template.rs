// SPDX-License-Identifier: LGPL-3.0-only

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbaImage};

use crate::error::StyleResult;

/// Where an extra color region is drawn relative to the base layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Painted over the base layer, e.g. a check mark or a toggle knob.
    Above,
    /// Painted underneath, visible only where the base is transparent, e.g. a focus ring.
    Below,
}

/// An extra color region of a [Template].
#[derive(Debug, Clone)]
pub struct Region {
    mask: GrayImage,
    placement: Placement,
}

impl Region {
    /// Coverage of the region, one byte per pixel.
    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    /// Whether the region is drawn above or below the base.
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

/// A grayscale image asset authored at twice its intended size.
///
/// The base layer's luminance selects between the first two recolor colors
/// (black picks the first, white the second) and its alpha is kept. Every
/// extra [Region] takes one more color.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    base: RgbaImage,
    regions: Vec<Region>,
}

impl Template {
    /// A template without extra regions.
    pub fn new(name: impl Into<String>, base: RgbaImage) -> Self {
        Self {
            name: name.into(),
            base,
            regions: Vec::new(),
        }
    }

    /// Decode a PNG (or any format the `image` crate was built with).
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> StyleResult<Self> {
        let base = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self::new(name, base))
    }

    /// Add a color region. Masks of a different size are resampled to the base.
    pub fn with_region(mut self, mask: GrayImage, placement: Placement) -> Self {
        let mask = if mask.dimensions() == self.base.dimensions() {
            mask
        } else {
            let (width, height) = self.base.dimensions();
            imageops::resize(&mask, width, height, FilterType::Triangle)
        };
        self.regions.push(Region { mask, placement });
        self
    }

    /// Add a color region decoded from an image; its luminance is the coverage.
    pub fn with_region_bytes(self, bytes: &[u8], placement: Placement) -> StyleResult<Self> {
        let mask = image::load_from_memory(bytes)?.to_luma8();
        Ok(self.with_region(mask, placement))
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The grayscale base layer.
    pub fn base(&self) -> &RgbaImage {
        &self.base
    }

    /// Extra color regions in color order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Maximum number of colors [recolor_image](super::recolor_image) accepts.
    pub fn color_slots(&self) -> usize {
        2 + self.regions.len()
    }

    /// Authoring size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.base.dimensions()
    }
}
