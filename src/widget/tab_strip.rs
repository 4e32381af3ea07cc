use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{Action, Color, InputState, Point, Rect};
use crate::render::{FontEngine, Image, Justify, Label, RenderDevice, VAlign};

use super::{ScrollType, Widget, tab_math};

/// Look-and-feel of a [`TabStrip`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabStripSettings {
    /// `x` is both the horizontal text inset and the width of the
    /// background's fixed left/right edges; `y` nudges labels vertically.
    pub tab_padding: Point,
    pub selection_rect_color: Color,
    pub active_image: PathBuf,
    pub inactive_image: PathBuf,
}

impl Default for TabStripSettings {
    fn default() -> Self {
        Self {
            tab_padding: Point::new(8, 0),
            selection_rect_color: Color::SELECTION_RECT,
            active_image: PathBuf::from("images/menus/tab_active.png"),
            inactive_image: PathBuf::from("images/menus/tab_inactive.png"),
        }
    }
}

/// One tab header.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub title: String,
    pub bounds: Rect,
    pub active_label: Label,
    pub inactive_label: Label,
}

impl Tab {
    fn untitled(normal: Color, disabled: Color) -> Self {
        let label = |color| Label::new(Point::default(), Justify::Left, VAlign::Center, "", color);
        Tab {
            title: String::new(),
            bounds: Rect::default(),
            active_label: label(normal),
            inactive_label: label(disabled),
        }
    }
}

/// A horizontal row of selectable tab headers.
///
/// Titles and layout are updated separately: after changing titles (or
/// anything else that affects widths) call [`TabStrip::update_header`].
/// [`TabStrip::set_origin`] reflows on its own.
pub struct TabStrip {
    font: Arc<dyn FontEngine>,
    settings: TabStripSettings,
    active_bg: Option<Image>,
    inactive_bg: Option<Image>,
    tabs: Vec<Tab>,
    active_tab: usize,
    tabs_area: Rect,
    color_normal: Color,
    color_disabled: Color,
    in_focus: bool,
}

impl TabStrip {
    /// Creates an empty strip and loads both tab backgrounds through
    /// `device`. A background that fails to load is left out; tabs are
    /// then drawn without it.
    pub fn new(
        device: &mut dyn RenderDevice,
        font: Arc<dyn FontEngine>,
        settings: TabStripSettings,
    ) -> Self {
        let active_bg = load_background(device, &settings.active_image);
        let inactive_bg = load_background(device, &settings.inactive_image);
        let color_normal = font.color("widget_normal");
        let color_disabled = font.color("widget_disabled");
        TabStrip {
            font,
            settings,
            active_bg,
            inactive_bg,
            tabs: Vec::new(),
            active_tab: 0,
            tabs_area: Rect::default(),
            color_normal,
            color_disabled,
            in_focus: false,
        }
    }

    /// Sets the title of tab `index`, appending untitled tabs as needed.
    /// Does not reflow.
    pub fn set_tab_title(&mut self, index: usize, title: impl Into<String>) {
        if index >= self.tabs.len() {
            let (normal, disabled) = (self.color_normal, self.color_disabled);
            self.tabs
                .resize_with(index + 1, || Tab::untitled(normal, disabled));
        }
        self.tabs[index].title = title.into();
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Activates `index`. One past the last tab selects the last tab;
    /// anything beyond that selects the first.
    pub fn set_active_tab(&mut self, index: usize) {
        self.active_tab = tab_math::clamp_active(index, self.tabs.len());
    }

    /// Moves the strip's top-left corner and reflows.
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.tabs_area = Rect::new(x, y, 0, self.tab_height());
        self.update_header();
    }

    /// Recomputes every tab's bounds and labels from the current titles
    /// and origin.
    pub fn update_header(&mut self) {
        let padding = self.settings.tab_padding;
        let text_widths: Vec<i32> = self
            .tabs
            .iter()
            .map(|tab| self.font.calc_width(&tab.title))
            .collect();
        let bounds = tab_math::layout_tabs(self.tabs_area, padding.x, text_widths);

        self.tabs_area.w = 0;
        for (tab, rect) in self.tabs.iter_mut().zip(bounds) {
            tab.bounds = rect;
            self.tabs_area.w += rect.w;

            let anchor = Point::new(rect.x + padding.x, rect.y + rect.h / 2 + padding.y);
            tab.active_label = Label::new(
                anchor,
                Justify::Left,
                VAlign::Center,
                tab.title.clone(),
                self.color_normal,
            );
            tab.inactive_label = Label::new(
                anchor,
                Justify::Left,
                VAlign::Center,
                tab.title.clone(),
                self.color_disabled,
            );
        }
        tracing::debug!(tabs = self.tabs.len(), area = ?self.tabs_area, "tab header updated");
    }

    /// Activates the tab under `pointer` when the primary action is held
    /// and the pointer is inside the header.
    pub fn handle_pointer(&mut self, pointer: Point, pressed: bool) {
        if !pressed {
            return;
        }
        let bounds: Vec<Rect> = self.tabs.iter().map(|t| t.bounds).collect();
        if let Some(idx) = tab_math::hit_test(self.tabs_area, &bounds, pointer) {
            self.active_tab = idx;
        }
    }

    /// Frame logic for an explicit pointer position.
    pub fn logic_at(&mut self, x: i32, y: i32, input: &InputState) {
        self.handle_pointer(Point::new(x, y), input.is_pressing(Action::Main1));
    }

    /// Height of the tab background, or 0 when it is not loaded.
    pub fn tab_height(&self) -> i32 {
        self.active_bg.as_ref().map_or(0, Image::height)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_title(&self, index: usize) -> Option<&str> {
        self.tabs.get(index).map(|t| t.title.as_str())
    }

    pub fn tab_bounds(&self, index: usize) -> Option<Rect> {
        self.tabs.get(index).map(|t| t.bounds)
    }

    pub fn header_area(&self) -> Rect {
        self.tabs_area
    }

    pub fn settings(&self) -> &TabStripSettings {
        &self.settings
    }

    /// Draws the background and label of tab `index`.
    pub fn render_tab(&self, device: &mut dyn RenderDevice, index: usize) {
        let Some(tab) = self.tabs.get(index) else {
            return;
        };
        let is_active = index == self.active_tab;
        let background = if is_active {
            self.active_bg.as_ref()
        } else {
            self.inactive_bg.as_ref()
        };

        if let Some(image) = background {
            let mut sprite = image.create_sprite();
            let rect = tab.bounds;
            let slices =
                tab_math::background_slices(rect.w, image.width(), self.settings.tab_padding.x);
            for slice in slices {
                sprite.set_clip(Rect::new(slice.src_x, 0, slice.width, rect.h));
                sprite.set_dest(Point::new(rect.x + slice.dest_offset, rect.y));
                device.render(&sprite);
            }
        }

        let label = if is_active {
            &tab.active_label
        } else {
            &tab.inactive_label
        };
        label.render(device, self.font.as_ref());
    }
}

impl Widget for TabStrip {
    fn logic(&mut self, input: &InputState) {
        self.logic_at(input.mouse.x, input.mouse.y, input);
    }

    /// Draws every tab, then the focus outline around the active tab.
    fn render(&self, device: &mut dyn RenderDevice) {
        for i in 0..self.tabs.len() {
            self.render_tab(device, i);
        }

        if !self.in_focus {
            return;
        }
        if let Some(tab) = self.tabs.get(self.active_tab) {
            let r = tab.bounds;
            device.draw_rectangle(
                Point::new(r.x, r.y),
                Point::new(r.right(), r.bottom()),
                self.settings.selection_rect_color,
            );
        }
    }

    fn in_focus(&self) -> bool {
        self.in_focus
    }

    fn set_focus(&mut self, focused: bool) {
        self.in_focus = focused;
    }

    fn scroll_type(&self) -> ScrollType {
        ScrollType::Horizontal
    }

    fn get_next(&mut self) -> bool {
        self.set_active_tab(tab_math::wrap_next(self.active_tab, self.tabs.len()));
        true
    }

    fn get_prev(&mut self) -> bool {
        self.set_active_tab(tab_math::wrap_prev(self.active_tab, self.tabs.len()));
        true
    }
}

fn load_background(device: &mut dyn RenderDevice, path: &Path) -> Option<Image> {
    match device.load_image(path) {
        Ok(image) => Some(image),
        Err(err) => {
            tracing::warn!(path = %path.display(), "tab background unavailable: {err:#}");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget_tab_strip.rs"]
mod tests;
