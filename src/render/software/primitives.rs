use std::collections::hash_map::Entry;

use crate::core::{Color, Rect};
use crate::render::{FontdueEngine, Sprite};

use super::{GlyphBitmap, SoftwareDevice};

impl SoftwareDevice {
    /// Copies the sprite's clip region to its destination, alpha-blending
    /// translucent source pixels. Anything outside the canvas is dropped.
    pub(super) fn blit(&mut self, sprite: &Sprite) {
        let image = sprite.image();
        let bounds = Rect::new(0, 0, image.width(), image.height());
        let Some(clip) = sprite.clip().intersect(&bounds) else {
            return;
        };
        // Keep the destination aligned with the requested clip origin even
        // when the clip had to be trimmed on its top/left side.
        let dest = sprite.dest();
        let dx0 = dest.x + (clip.x - sprite.clip().x);
        let dy0 = dest.y + (clip.y - sprite.clip().y);

        for row in 0..clip.h {
            let dy = dy0 + row;
            if dy < 0 || dy as usize >= self.height {
                continue;
            }
            for col in 0..clip.w {
                let dx = dx0 + col;
                if dx < 0 || dx as usize >= self.width {
                    continue;
                }
                let Some(src) = image.pixel(clip.x + col, clip.y + row) else {
                    continue;
                };
                let alpha = (src >> 24) as u8;
                if alpha == 0 {
                    continue;
                }
                let idx = dy as usize * self.width + dx as usize;
                self.buffer[idx] = if alpha == 255 {
                    src & 0x00FF_FFFF
                } else {
                    Color::from_pixel(src)
                        .blend_over(Color::from_pixel(self.buffer[idx]), alpha)
                        .to_pixel()
                };
            }
        }
    }

    /// Horizontal line from `x0` to `x1` inclusive.
    pub(super) fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, pixel: u32) {
        if y < 0 || y as usize >= self.height || self.width == 0 {
            return;
        }
        let (lo, hi) = (x0.min(x1).max(0), x0.max(x1).min(self.width as i32 - 1));
        for x in lo..=hi {
            self.buffer[y as usize * self.width + x as usize] = pixel;
        }
    }

    /// Vertical line from `y0` to `y1` inclusive.
    pub(super) fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, pixel: u32) {
        if x < 0 || x as usize >= self.width || self.height == 0 {
            return;
        }
        let (lo, hi) = (y0.min(y1).max(0), y0.max(y1).min(self.height as i32 - 1));
        for y in lo..=hi {
            self.buffer[y as usize * self.width + x as usize] = pixel;
        }
    }

    /// Draws one glyph with its origin at `(x, baseline)` and returns the
    /// pen advance.
    pub(super) fn draw_glyph(
        &mut self,
        font: &FontdueEngine,
        ch: char,
        x: i32,
        baseline: i32,
        fg: Color,
    ) -> f32 {
        let glyph = match self.glyph_cache.entry(ch) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let (metrics, bitmap) = font.rasterize(ch);
                entry.insert(GlyphBitmap {
                    data: bitmap,
                    width: metrics.width,
                    height: metrics.height,
                    left: metrics.xmin,
                    top: metrics.height as i32 + metrics.ymin,
                    advance: metrics.advance_width,
                })
            }
        };

        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let alpha = glyph.data[gy * glyph.width + gx];
                if alpha == 0 {
                    continue;
                }
                let sx = x + glyph.left + gx as i32;
                let sy = baseline - glyph.top + gy as i32;
                if sx < 0 || sy < 0 || sx as usize >= self.width || sy as usize >= self.height {
                    continue;
                }
                let idx = sy as usize * self.width + sx as usize;
                self.buffer[idx] = fg
                    .blend_over(Color::from_pixel(self.buffer[idx]), alpha)
                    .to_pixel();
            }
        }
        glyph.advance
    }
}
