use super::Point;

/// Logical input actions polled by widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Primary pointer button.
    Main1,
    Accept,
    Cancel,
    Left,
    Right,
}

impl Action {
    const COUNT: usize = 5;

    const fn slot(self) -> usize {
        match self {
            Action::Main1 => 0,
            Action::Accept => 1,
            Action::Cancel => 2,
            Action::Left => 3,
            Action::Right => 4,
        }
    }
}

/// Snapshot of pointer position and held actions for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub mouse: Point,
    pressing: [bool; Action::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressing(&self, action: Action) -> bool {
        self.pressing[action.slot()]
    }

    pub fn press(&mut self, action: Action) {
        self.pressing[action.slot()] = true;
    }

    pub fn release(&mut self, action: Action) {
        self.pressing[action.slot()] = false;
    }

    /// Releases every held action (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.pressing = [false; Action::COUNT];
    }
}
