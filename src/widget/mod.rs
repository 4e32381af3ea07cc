pub mod tab_math;
mod tab_strip;

use crate::core::InputState;
use crate::render::RenderDevice;

pub use tab_strip::{Tab, TabStrip, TabStripSettings};

/// Direction in which keyboard navigation moves inside a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollType {
    #[default]
    Vertical,
    Horizontal,
    TwoDirections,
}

/// Behavior shared by menu widgets driven once per frame.
pub trait Widget {
    /// Processes this frame's input.
    fn logic(&mut self, input: &InputState);

    fn render(&self, device: &mut dyn RenderDevice);

    fn in_focus(&self) -> bool;

    fn set_focus(&mut self, focused: bool);

    fn scroll_type(&self) -> ScrollType {
        ScrollType::Vertical
    }

    /// Moves the widget's inner selection forward. Returns `true` when the
    /// widget consumed the navigation.
    fn get_next(&mut self) -> bool {
        false
    }

    /// Moves the widget's inner selection backward.
    fn get_prev(&mut self) -> bool {
        false
    }
}
