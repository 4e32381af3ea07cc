//! Rendering collaborators consumed by widgets.
//!
//! Widgets never touch pixels directly: they describe sprites, outlines
//! and text through [`RenderDevice`] and measure strings through
//! [`FontEngine`]. The software backend implements both for a CPU
//! canvas; tests substitute recording fakes.

mod font;
mod label;
mod sprite;
pub mod software;

use std::path::Path;

use crate::core::{Color, Point};

pub use font::FontdueEngine;
pub use label::{Justify, Label, VAlign};
pub use sprite::{Image, Sprite};
pub use software::SoftwareDevice;

/// Drawing surface used by widgets.
pub trait RenderDevice {
    /// Loads an image from `path`.
    fn load_image(&mut self, path: &Path) -> anyhow::Result<Image>;

    /// Draws the sprite's clip region at its destination.
    fn render(&mut self, sprite: &Sprite);

    /// Draws a 1px outline whose corners are `top_left` and `bottom_right`.
    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color);

    /// Draws a single line of text with its bounding box at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Point, color: Color);
}

/// Text measurement and named text colors.
pub trait FontEngine {
    /// Width of `text` in pixels when rendered on one line.
    fn calc_width(&self, text: &str) -> i32;

    /// Height of one line of text in pixels.
    fn line_height(&self) -> i32;

    /// Looks up a named text color (e.g. `widget_normal`).
    fn color(&self, key: &str) -> Color;
}
