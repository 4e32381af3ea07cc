use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

use tabstrip::core::{Action, Point};
use tabstrip::widget::Widget;

use super::DemoWindow;

/// Maps a logical key to the menu action it triggers.
pub(super) fn action_for_key(key: &Key) -> Option<Action> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(Action::Left),
        Key::Named(NamedKey::ArrowRight) => Some(Action::Right),
        Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Space) => Some(Action::Accept),
        Key::Named(NamedKey::Escape) => Some(Action::Cancel),
        _ => None,
    }
}

/// What the event loop should do after a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyOutcome {
    Redraw,
    Exit,
    Ignored,
}

impl DemoWindow {
    pub(super) fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.input.mouse = Point::new(position.x as i32, position.y as i32);
        self.update_strip();
    }

    pub(super) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => self.input.press(Action::Main1),
            ElementState::Released => self.input.release(Action::Main1),
        }
        self.update_strip();
    }

    pub(super) fn on_key(&mut self, key: &Key, state: ElementState) -> KeyOutcome {
        if key == &Key::Named(NamedKey::Tab) {
            if state == ElementState::Pressed {
                let focused = self.strip.in_focus();
                self.strip.set_focus(!focused);
                return KeyOutcome::Redraw;
            }
            return KeyOutcome::Ignored;
        }

        let Some(action) = action_for_key(key) else {
            return KeyOutcome::Ignored;
        };
        if state == ElementState::Released {
            self.input.release(action);
            return KeyOutcome::Ignored;
        }
        self.input.press(action);

        match action {
            Action::Cancel => KeyOutcome::Exit,
            Action::Left | Action::Right if self.strip.in_focus() => {
                if action == Action::Left {
                    self.strip.get_prev();
                } else {
                    self.strip.get_next();
                }
                self.sync_title();
                KeyOutcome::Redraw
            }
            _ => KeyOutcome::Ignored,
        }
    }

    pub(super) fn on_focus_lost(&mut self) {
        self.input.release_all();
    }

    fn update_strip(&mut self) {
        let before = self.strip.active_tab();
        self.strip.logic(&self.input);
        if self.strip.active_tab() != before {
            tracing::debug!(tab = self.strip.active_tab(), "tab selected with pointer");
            self.sync_title();
            self.window.request_redraw();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gui_input.rs"]
mod tests;
