mod primitives;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::core::{Color, Point};

use super::{FontdueEngine, Image, RenderDevice, Sprite};

/// Cached glyph rasterization.
pub(super) struct GlyphBitmap {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub left: i32,
    /// Distance from the glyph's top row to the baseline.
    pub top: i32,
    pub advance: f32,
}

/// CPU renderer drawing into an owned `0x00RRGGBB` pixel canvas.
///
/// The canvas can be copied straight into a softbuffer surface.
pub struct SoftwareDevice {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
    asset_root: PathBuf,
    font: Option<Arc<FontdueEngine>>,
    glyph_cache: HashMap<char, GlyphBitmap>,
}

impl SoftwareDevice {
    pub fn new(width: usize, height: usize) -> Self {
        SoftwareDevice {
            width,
            height,
            buffer: vec![0; width * height],
            asset_root: PathBuf::new(),
            font: None,
            glyph_cache: HashMap::new(),
        }
    }

    /// Font used by [`RenderDevice::draw_text`]. Without one, text is skipped.
    pub fn with_font(mut self, font: Arc<FontdueEngine>) -> Self {
        self.font = Some(font);
        self.glyph_cache.clear();
        self
    }

    /// Directory that relative image paths are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.buffer[y * self.width + x])
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.buffer = vec![0; width * height];
    }

    pub fn clear(&mut self, color: Color) {
        self.buffer.fill(color.to_pixel());
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}

impl RenderDevice for SoftwareDevice {
    fn load_image(&mut self, path: &Path) -> anyhow::Result<Image> {
        let full = self.resolve(path);
        let rgba = image::open(&full)
            .with_context(|| format!("failed to load image {}", full.display()))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();
        let img = Image::from_argb(width, height, pixels)
            .with_context(|| format!("decoded image {} has inconsistent size", full.display()))?;
        tracing::debug!(path = %full.display(), width, height, "image loaded");
        Ok(img)
    }

    fn render(&mut self, sprite: &Sprite) {
        self.blit(sprite);
    }

    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color) {
        let pixel = color.to_pixel();
        self.draw_hline(top_left.x, bottom_right.x, top_left.y, pixel);
        self.draw_hline(top_left.x, bottom_right.x, bottom_right.y, pixel);
        self.draw_vline(top_left.x, top_left.y, bottom_right.y, pixel);
        self.draw_vline(bottom_right.x, top_left.y, bottom_right.y, pixel);
    }

    fn draw_text(&mut self, text: &str, top_left: Point, color: Color) {
        let Some(font) = self.font.clone() else {
            return;
        };
        let baseline = top_left.y + font.ascent();
        let mut pen = top_left.x as f32;
        for ch in text.chars() {
            pen += self.draw_glyph(&font, ch, pen.round() as i32, baseline, color);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render_software.rs"]
mod tests;
