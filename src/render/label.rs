use crate::core::{Color, Point, Rect};

use super::{FontEngine, RenderDevice};

/// Horizontal anchoring of a label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

/// Vertical anchoring of a label relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// A single line of positioned, colored text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Point,
    pub justify: Justify,
    pub valign: VAlign,
    pub text: String,
    pub color: Color,
}

impl Label {
    pub fn new(
        pos: Point,
        justify: Justify,
        valign: VAlign,
        text: impl Into<String>,
        color: Color,
    ) -> Self {
        Label {
            pos,
            justify,
            valign,
            text: text.into(),
            color,
        }
    }

    /// Resolves the anchor into the text's bounding box.
    pub fn bounds(&self, font: &dyn FontEngine) -> Rect {
        let w = font.calc_width(&self.text);
        let h = font.line_height();
        let x = match self.justify {
            Justify::Left => self.pos.x,
            Justify::Right => self.pos.x - w,
            Justify::Center => self.pos.x - w / 2,
        };
        let y = match self.valign {
            VAlign::Top => self.pos.y,
            VAlign::Center => self.pos.y - h / 2,
            VAlign::Bottom => self.pos.y - h,
        };
        Rect::new(x, y, w, h)
    }

    pub fn render(&self, device: &mut dyn RenderDevice, font: &dyn FontEngine) {
        if self.text.is_empty() {
            return;
        }
        let b = self.bounds(font);
        device.draw_text(&self.text, Point::new(b.x, b.y), self.color);
    }
}
