// SPDX-License-Identifier: LGPL-3.0-only

//! Icon rendering for styles that carry an `icon` option.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use bootstyle_theme::HexColor;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::trace;

use crate::error::{StyleError, StyleResult};
use crate::image::{names, recolor_image, AssetStore};

/// Renders named icons in a given color.
pub trait IconProvider: Send + Sync {
    /// Render `name` as a `size` x `size` bitmap in `color`.
    fn render(&self, name: &str, size: u32, color: HexColor) -> StyleResult<RgbaImage>;

    /// Whether `name` can be rendered.
    fn has_icon(&self, name: &str) -> bool;

    /// Forget cached renderings. Called when the theme changes.
    fn clear_cache(&self) {}
}

type CacheKey = (String, u32, HexColor);

/// In-memory cache of rendered icons.
pub struct IconCache {
    cache: Mutex<HashMap<CacheKey, Arc<RgbaImage>>>,
}

impl IconCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<RgbaImage>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get a cached icon.
    pub fn get(&self, name: &str, size: u32, color: HexColor) -> Option<Arc<RgbaImage>> {
        self.lock().get(&(name.to_string(), size, color)).cloned()
    }

    /// Store an icon.
    pub fn put(&self, name: String, size: u32, color: HexColor, icon: Arc<RgbaImage>) {
        self.lock().insert((name, size, color), icon);
    }

    /// Number of cached icons.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached icon.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

/// [IconProvider] drawing the built-in glyph templates.
///
/// Extra glyphs can be supplied as an [AssetStore]; any single-layer template
/// works.
pub struct GlyphIconProvider {
    assets: AssetStore,
    cache: IconCache,
}

impl GlyphIconProvider {
    /// A provider for the built-in glyphs.
    pub fn new() -> Self {
        let store = AssetStore::new();
        let mut glyphs = AssetStore::empty();
        for name in names::GLYPHS {
            if let Ok(template) = store.get(name) {
                glyphs.insert((*template).clone());
            }
        }
        Self::with_assets(glyphs)
    }

    /// A provider drawing the templates in `assets`.
    pub fn with_assets(assets: AssetStore) -> Self {
        Self {
            assets,
            cache: IconCache::new(),
        }
    }

    /// The render cache.
    pub fn cache(&self) -> &IconCache {
        &self.cache
    }
}

impl Default for GlyphIconProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IconProvider for GlyphIconProvider {
    fn render(&self, name: &str, size: u32, color: HexColor) -> StyleResult<RgbaImage> {
        let size = size.max(1);
        if let Some(icon) = self.cache.get(name, size, color) {
            return Ok((*icon).clone());
        }
        let template = self
            .assets
            .get(name)
            .map_err(|_| StyleError::IconNotFound(name.to_string()))?;

        trace!("Rendering icon '{}' at {}px", name, size);
        let painted = recolor_image(&template, &[color], 2.0)?;
        let icon = if painted.dimensions() == (size, size) {
            painted
        } else {
            imageops::resize(&painted, size, size, FilterType::Lanczos3)
        };
        self.cache.put(name.to_string(), size, color, Arc::new(icon.clone()));
        Ok(icon)
    }

    fn has_icon(&self, name: &str) -> bool {
        self.assets.contains(name)
    }

    fn clear_cache(&self) {
        trace!("Dropping {} cached icons", self.cache.len());
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_caches_glyphs() {
        let provider = GlyphIconProvider::new();
        let red = HexColor::from_rgb8(255, 0, 0);
        let icon = provider.render("check", 16, red).unwrap();
        assert_eq!(icon.dimensions(), (16, 16));
        assert_eq!(provider.cache().len(), 1);
        provider.render("check", 16, red).unwrap();
        assert_eq!(provider.cache().len(), 1);
    }

    #[test]
    fn unknown_icon_fails() {
        let provider = GlyphIconProvider::new();
        assert!(!provider.has_icon("button"));
        assert!(matches!(
            provider.render("button", 16, HexColor::BLACK),
            Err(StyleError::IconNotFound(name)) if name == "button"
        ));
    }
}
