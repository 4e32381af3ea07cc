use std::sync::Arc;

use crate::core::{Point, Rect};

/// Decoded pixel data. Pixels are `0xAARRGGBB`, row-major.
#[derive(Debug)]
struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

/// Shared handle to a loaded image.
///
/// Cloning bumps a reference count; the pixels are freed when the last
/// handle (including sprites built from it) is dropped.
#[derive(Debug, Clone)]
pub struct Image {
    data: Arc<Pixmap>,
}

impl Image {
    /// Wraps ARGB pixels. Returns `None` when the buffer size does not
    /// match `width * height`.
    pub fn from_argb(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Image {
            data: Arc::new(Pixmap {
                width,
                height,
                pixels,
            }),
        })
    }

    pub fn width(&self) -> i32 {
        self.data.width as i32
    }

    pub fn height(&self) -> i32 {
        self.data.height as i32
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.data
            .pixels
            .get(y as usize * self.data.width as usize + x as usize)
            .copied()
    }

    /// Number of live handles sharing this image.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// Creates a sprite covering the whole image at the origin.
    pub fn create_sprite(&self) -> Sprite {
        Sprite {
            clip: Rect::new(0, 0, self.width(), self.height()),
            dest: Point::default(),
            image: self.clone(),
        }
    }
}

/// An image plus a source clip and a destination position.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: Image,
    clip: Rect,
    dest: Point,
}

impl Sprite {
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn clip(&self) -> Rect {
        self.clip
    }

    pub fn dest(&self) -> Point {
        self.dest
    }

    pub fn set_clip(&mut self, clip: Rect) {
        self.clip = clip;
    }

    pub fn set_dest(&mut self, dest: Point) {
        self.dest = dest;
    }
}
