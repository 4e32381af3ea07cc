use std::collections::HashMap;

use super::*;

const ACTIVE_PIXEL: u32 = 0xFFAA_0000;
const INACTIVE_PIXEL: u32 = 0xFF00_AA00;
const GRAY: Color = Color::new(90, 90, 90);

/// Measures `4 * chars + 2` pixels per non-empty string, so "A", "BB" and
/// "CCC" measure 6, 10 and 14.
struct FixedFont;

impl FontEngine for FixedFont {
    fn calc_width(&self, text: &str) -> i32 {
        if text.is_empty() {
            0
        } else {
            text.chars().count() as i32 * 4 + 2
        }
    }

    fn line_height(&self) -> i32 {
        10
    }

    fn color(&self, key: &str) -> Color {
        match key {
            "widget_disabled" => GRAY,
            _ => Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Sprite { tag: u32, clip: Rect, dest: Point },
    Outline { top_left: Point, bottom_right: Point, color: Color },
    Text { text: String, top_left: Point, color: Color },
}

#[derive(Default)]
struct RecordingDevice {
    images: HashMap<PathBuf, Image>,
    calls: Vec<Call>,
}

impl RecordingDevice {
    /// Device that knows both default tab backgrounds (32x20).
    fn with_backgrounds() -> Self {
        let settings = TabStripSettings::default();
        let mut dev = RecordingDevice::default();
        dev.images.insert(settings.active_image, solid(ACTIVE_PIXEL));
        dev.images.insert(settings.inactive_image, solid(INACTIVE_PIXEL));
        dev
    }

    fn sprites(&self) -> Vec<(u32, Rect, Point)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Sprite { tag, clip, dest } => Some((*tag, *clip, *dest)),
                _ => None,
            })
            .collect()
    }

    fn outlines(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Outline { .. }))
            .collect()
    }

    fn texts(&self) -> Vec<(&str, Color)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text { text, color, .. } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect()
    }
}

impl RenderDevice for RecordingDevice {
    fn load_image(&mut self, path: &Path) -> anyhow::Result<Image> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such image: {}", path.display()))
    }

    fn render(&mut self, sprite: &crate::render::Sprite) {
        self.calls.push(Call::Sprite {
            tag: sprite.image().pixel(0, 0).unwrap_or(0),
            clip: sprite.clip(),
            dest: sprite.dest(),
        });
    }

    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Color) {
        self.calls.push(Call::Outline {
            top_left,
            bottom_right,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, top_left: Point, color: Color) {
        self.calls.push(Call::Text {
            text: text.to_string(),
            top_left,
            color,
        });
    }
}

fn solid(argb: u32) -> Image {
    Image::from_argb(32, 20, vec![argb; 32 * 20]).unwrap()
}

fn settings() -> TabStripSettings {
    TabStripSettings {
        tab_padding: Point::new(4, 1),
        ..TabStripSettings::default()
    }
}

fn strip(dev: &mut RecordingDevice, titles: &[&str]) -> TabStrip {
    let mut strip = TabStrip::new(dev, Arc::new(FixedFont), settings());
    for (i, title) in titles.iter().enumerate() {
        strip.set_tab_title(i, *title);
    }
    strip.set_origin(0, 0);
    strip
}

// ── titles ──────────────────────────────────────────────────────────

#[test]
fn set_tab_title_grows_with_untitled_gaps() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = TabStrip::new(&mut dev, Arc::new(FixedFont), settings());
    s.set_tab_title(0, "A");
    s.set_tab_title(3, "D");
    assert_eq!(s.tab_count(), 4);
    assert_eq!(s.tab_title(1), Some(""));
    assert_eq!(s.tab_title(2), Some(""));
    assert_eq!(s.tab_title(3), Some("D"));

    s.set_tab_title(1, "B");
    assert_eq!(s.tab_count(), 4);
    assert_eq!(s.tab_title(1), Some("B"));
    assert_eq!(s.tab_title(4), None);
}

#[test]
fn renaming_does_not_reflow_until_update_header() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB"]);
    s.set_tab_title(0, "AAAA");
    assert_eq!(s.tab_bounds(0).unwrap().w, 14);
    assert_eq!(s.tab_bounds(1).unwrap().x, 14);

    s.update_header();
    assert_eq!(s.tab_bounds(0).unwrap().w, 26);
    assert_eq!(s.tab_bounds(1).unwrap().x, 26);
}

// ── active tab ──────────────────────────────────────────────────────

#[test]
fn new_strip_starts_on_first_tab() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["A", "BB", "CCC"]);
    assert_eq!(s.active_tab(), 0);
}

#[test]
fn set_active_tab_clamping() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    for n in 0..3 {
        s.set_active_tab(n);
        assert_eq!(s.active_tab(), n);
    }
    s.set_active_tab(3);
    assert_eq!(s.active_tab(), 2);
    for k in 1..4 {
        s.set_active_tab(1);
        s.set_active_tab(3 + k);
        assert_eq!(s.active_tab(), 0);
    }
}

#[test]
fn set_active_tab_on_empty_strip_stays_zero() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &[]);
    s.set_active_tab(0);
    assert_eq!(s.active_tab(), 0);
    s.set_active_tab(7);
    assert_eq!(s.active_tab(), 0);
}

#[test]
fn next_wraps_to_first_and_prev_wraps_to_last() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    assert!(s.get_next());
    assert_eq!(s.active_tab(), 1);
    assert!(s.get_next());
    assert_eq!(s.active_tab(), 2);
    assert!(s.get_next());
    assert_eq!(s.active_tab(), 0);

    assert!(s.get_prev());
    assert_eq!(s.active_tab(), 2);
    assert!(s.get_prev());
    assert_eq!(s.active_tab(), 1);
}

#[test]
fn navigation_on_empty_strip_is_harmless() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &[]);
    assert!(s.get_next());
    assert!(s.get_prev());
    assert_eq!(s.active_tab(), 0);
}

// ── layout ──────────────────────────────────────────────────────────

#[test]
fn update_header_matches_worked_example() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["A", "BB", "CCC"]);
    let bounds: Vec<Rect> = (0..3).map(|i| s.tab_bounds(i).unwrap()).collect();
    assert_eq!(
        bounds,
        vec![
            Rect::new(0, 0, 14, 20),
            Rect::new(14, 0, 18, 20),
            Rect::new(32, 0, 22, 20),
        ]
    );
    assert_eq!(s.header_area(), Rect::new(0, 0, 54, 20));
}

#[test]
fn header_width_is_sum_of_tabs_and_tabs_are_adjacent() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["Inventory", "", "Powers", "Log"]);
    s.set_origin(120, 48);
    let tabs = s.tabs();
    assert_eq!(tabs[0].bounds.x, 120);
    for pair in tabs.windows(2) {
        assert_eq!(pair[1].bounds.x, pair[0].bounds.x + pair[0].bounds.w);
    }
    let sum: i32 = tabs.iter().map(|t| t.bounds.w).sum();
    assert_eq!(s.header_area().w, sum);
    assert_eq!(s.header_area().y, 48);
    assert!(tabs.iter().all(|t| t.bounds.y == 48 && t.bounds.h == 20));
}

#[test]
fn labels_are_inset_and_vertically_centered() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["A", "BB"]);
    let tab = &s.tabs()[1];
    // x: tab.x + padding.x; y: tab.y + h/2 + padding.y
    assert_eq!(tab.active_label.pos, Point::new(18, 11));
    assert_eq!(tab.active_label.justify, Justify::Left);
    assert_eq!(tab.active_label.valign, VAlign::Center);
    assert_eq!(tab.active_label.color, Color::WHITE);
    assert_eq!(tab.inactive_label.color, GRAY);
    assert_eq!(tab.inactive_label.text, "BB");
}

#[test]
fn missing_backgrounds_give_zero_height() {
    let mut dev = RecordingDevice::default();
    let s = strip(&mut dev, &["A"]);
    assert_eq!(s.tab_height(), 0);
    assert_eq!(s.header_area().h, 0);
}

// ── pointer ─────────────────────────────────────────────────────────

#[test]
fn pressing_inside_a_tab_activates_it() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    s.handle_pointer(Point::new(20, 5), true);
    assert_eq!(s.active_tab(), 1);
    s.handle_pointer(Point::new(53, 19), true);
    assert_eq!(s.active_tab(), 2);
}

#[test]
fn pointer_without_press_or_outside_header_is_ignored() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    s.handle_pointer(Point::new(20, 5), false);
    assert_eq!(s.active_tab(), 0);
    s.handle_pointer(Point::new(54, 5), true);
    assert_eq!(s.active_tab(), 0);
    s.handle_pointer(Point::new(20, 20), true);
    assert_eq!(s.active_tab(), 0);
}

#[test]
fn widget_logic_uses_mouse_and_primary_action() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    let mut input = InputState::new();
    input.mouse = Point::new(40, 10);
    s.logic(&input);
    assert_eq!(s.active_tab(), 0);

    input.press(Action::Main1);
    s.logic(&input);
    assert_eq!(s.active_tab(), 2);

    s.logic_at(1, 1, &input);
    assert_eq!(s.active_tab(), 0);
}

// ── rendering ───────────────────────────────────────────────────────

#[test]
fn each_tab_background_covers_its_width() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "A much longer tab title", "CCC"]);
    s.set_origin(10, 30);
    dev.calls.clear();
    s.render(&mut dev);

    for (i, tab) in s.tabs().iter().enumerate() {
        let b = tab.bounds;
        let drawn: Vec<_> = dev
            .sprites()
            .into_iter()
            .filter(|(_, _, dest)| dest.x >= b.x && dest.x < b.right())
            .collect();
        let width: i32 = drawn.iter().map(|(_, clip, _)| clip.w).sum();
        assert_eq!(width, b.w, "tab {i}");
        assert!(drawn.iter().all(|(_, clip, dest)| dest.y == 30 && clip.h == 20));
        assert!(drawn.iter().all(|(_, clip, dest)| dest.x + clip.w <= b.right()));
    }
}

#[test]
fn active_tab_uses_active_style() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB"]);
    s.set_active_tab(1);
    dev.calls.clear();
    s.render(&mut dev);

    let first = s.tab_bounds(0).unwrap();
    for (tag, _, dest) in dev.sprites() {
        let expected = if dest.x < first.right() {
            INACTIVE_PIXEL
        } else {
            ACTIVE_PIXEL
        };
        assert_eq!(tag, expected);
    }
    assert_eq!(dev.texts(), vec![("A", GRAY), ("BB", Color::WHITE)]);
}

#[test]
fn focus_outline_surrounds_active_tab_only_when_focused() {
    let mut dev = RecordingDevice::with_backgrounds();
    let mut s = strip(&mut dev, &["A", "BB", "CCC"]);
    s.set_active_tab(1);
    dev.calls.clear();
    s.render(&mut dev);
    assert!(dev.outlines().is_empty());

    s.set_focus(true);
    assert!(s.in_focus());
    dev.calls.clear();
    s.render(&mut dev);
    assert_eq!(
        dev.outlines(),
        vec![&Call::Outline {
            top_left: Point::new(14, 0),
            bottom_right: Point::new(32, 20),
            color: Color::SELECTION_RECT,
        }]
    );
}

#[test]
fn missing_backgrounds_still_render_labels() {
    let mut dev = RecordingDevice::default();
    let s = strip(&mut dev, &["A", "BB"]);
    s.render(&mut dev);
    assert!(dev.sprites().is_empty());
    assert_eq!(dev.texts().len(), 2);
}

#[test]
fn empty_titles_draw_no_text() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["", "B"]);
    s.render(&mut dev);
    assert_eq!(dev.texts(), vec![("B", GRAY)]);
}

#[test]
fn render_tab_out_of_range_is_noop() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["A"]);
    s.render_tab(&mut dev, 5);
    assert!(dev.calls.is_empty());
}

#[test]
fn scroll_type_is_horizontal() {
    let mut dev = RecordingDevice::with_backgrounds();
    let s = strip(&mut dev, &["A"]);
    assert_eq!(s.scroll_type(), ScrollType::Horizontal);
}

#[test]
fn dropping_strip_releases_backgrounds() {
    let mut dev = RecordingDevice::with_backgrounds();
    let active = dev.images[&TabStripSettings::default().active_image].clone();
    let before = active.ref_count();
    let s = strip(&mut dev, &["A"]);
    assert_eq!(active.ref_count(), before + 1);
    drop(s);
    assert_eq!(active.ref_count(), before);
}
