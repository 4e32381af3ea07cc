mod color;
mod geometry;
mod input;

pub use color::Color;
pub use geometry::{Point, Rect};
pub use input::{Action, InputState};
