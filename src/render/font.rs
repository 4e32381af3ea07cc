use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use fontdue::{Font, FontSettings, Metrics};

use crate::core::Color;

use super::FontEngine;

/// [`FontEngine`] backed by a single `fontdue` font at a fixed pixel size.
pub struct FontdueEngine {
    font: Font,
    size: f32,
    ascent: i32,
    line_height: i32,
    colors: HashMap<String, Color>,
}

impl FontdueEngine {
    pub fn from_bytes(bytes: &[u8], size: f32) -> anyhow::Result<Self> {
        let size = size.max(1.0);
        let settings = FontSettings {
            scale: size,
            ..FontSettings::default()
        };
        let font =
            Font::from_bytes(bytes, settings).map_err(|e| anyhow::anyhow!("invalid font: {e}"))?;
        let line_metrics = font
            .horizontal_line_metrics(size)
            .context("font has no horizontal line metrics")?;
        // Round the ascent up so glyph tops are never clipped; descent is
        // negative, so ceil tightens it towards the baseline.
        let ascent = line_metrics.ascent.ceil() as i32;
        let descent = line_metrics.descent.ceil() as i32;
        Ok(FontdueEngine {
            font,
            size,
            ascent,
            line_height: (ascent - descent).max(1),
            colors: HashMap::new(),
        })
    }

    pub fn load(path: &Path, size: f32) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        let engine = Self::from_bytes(&bytes, size)
            .with_context(|| format!("failed to parse font {}", path.display()))?;
        tracing::info!(path = %path.display(), size, "font loaded");
        Ok(engine)
    }

    /// Replaces the named color table used by [`FontEngine::color`].
    pub fn with_colors(mut self, colors: HashMap<String, Color>) -> Self {
        self.colors = colors;
        self
    }

    /// Distance from the top of a line to the baseline.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    pub fn rasterize(&self, ch: char) -> (Metrics, Vec<u8>) {
        self.font.rasterize(ch, self.size)
    }
}

impl FontEngine for FontdueEngine {
    fn calc_width(&self, text: &str) -> i32 {
        let advance: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, self.size).advance_width)
            .sum();
        advance.round() as i32
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn color(&self, key: &str) -> Color {
        if let Some(color) = self.colors.get(key) {
            return *color;
        }
        match key {
            "widget_disabled" => Color::WIDGET_DISABLED,
            _ => Color::WIDGET_NORMAL,
        }
    }
}
