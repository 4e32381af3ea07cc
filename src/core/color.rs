use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Default menu background.
    pub const MENU_BG: Color = Color {
        r: 30,
        g: 30,
        b: 46,
    }; // #1E1E2E

    /// Text color for enabled widgets.
    pub const WIDGET_NORMAL: Color = Color {
        r: 240,
        g: 240,
        b: 240,
    }; // #F0F0F0

    /// Text color for disabled or inactive widgets.
    pub const WIDGET_DISABLED: Color = Color {
        r: 128,
        g: 128,
        b: 128,
    }; // #808080

    /// Focus outline around the selected widget.
    pub const SELECTION_RECT: Color = Color {
        r: 255,
        g: 248,
        b: 220,
    }; // #FFF8DC

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn from_pixel(pixel: u32) -> Self {
        Color {
            r: ((pixel >> 16) & 0xFF) as u8,
            g: ((pixel >> 8) & 0xFF) as u8,
            b: (pixel & 0xFF) as u8,
        }
    }

    /// Blends `self` over `bg` with the given coverage (0 = bg, 255 = self).
    pub fn blend_over(self, bg: Color, alpha: u8) -> Color {
        let a = alpha as u32;
        let inv_a = 255 - a;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * inv_a) / 255) as u8;
        Color {
            r: mix(self.r, bg.r),
            g: mix(self.g, bg.g),
            b: mix(self.b, bg.b),
        }
    }
}
