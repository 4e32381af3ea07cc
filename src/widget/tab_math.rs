//! Pure layout math for the tab strip.
//!
//! Every function in this module is a pure calculation over rectangles,
//! widths and indices. No rendering, no side effects.

use crate::core::{Point, Rect};

/// One horizontal piece of a tab background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundSlice {
    /// Left edge of the piece inside the source image.
    pub src_x: i32,
    /// Offset of the piece from the tab's left edge.
    pub dest_offset: i32,
    pub width: i32,
}

/// Width of a tab whose title measures `text_width`.
pub fn tab_width(padding: i32, text_width: i32) -> i32 {
    padding + text_width + padding
}

/// Lays tabs out left to right starting at the area origin; each tab
/// begins where the previous one ends and takes the area's height.
pub fn layout_tabs(
    area: Rect,
    padding: i32,
    text_widths: impl IntoIterator<Item = i32>,
) -> Vec<Rect> {
    let mut x = area.x;
    text_widths
        .into_iter()
        .map(|text_w| {
            let w = tab_width(padding, text_w);
            let r = Rect::new(x, area.y, w, area.h);
            x += w;
            r
        })
        .collect()
}

/// Plans how to stretch a background image across a tab.
///
/// The image is split into a `padding`-wide left edge, a repeatable
/// middle and a `padding`-wide right edge. The left edge plus as much
/// middle as fits is drawn first, the middle is repeated until only the
/// right edge is missing, and the right edge is drawn last. Slice widths
/// always sum to `tab_width`.
///
/// Returns no slices when the tab is narrower than one edge, and stops
/// repeating when the image has no middle to repeat.
pub fn background_slices(tab_width: i32, image_width: i32, padding: i32) -> Vec<BackgroundSlice> {
    let mut slices = Vec::new();
    if tab_width < padding || padding < 0 {
        return slices;
    }

    // The right edge is drawn separately.
    let renderable = tab_width - padding;
    let mut cursor = 0;
    while cursor < renderable {
        let (src_x, mut width) = if cursor == 0 {
            (0, (tab_width - padding).min(image_width - padding))
        } else {
            (padding, (tab_width - padding * 2).min(image_width - padding * 2))
        };
        if width <= 0 {
            break;
        }
        if cursor + width > renderable {
            width = renderable - cursor;
        }
        slices.push(BackgroundSlice {
            src_x,
            dest_offset: cursor,
            width,
        });
        cursor += width;
    }

    if padding > 0 {
        slices.push(BackgroundSlice {
            src_x: image_width - padding,
            dest_offset: tab_width - padding,
            width: padding,
        });
    }
    slices
}

/// Returns the first tab containing `p`, provided `p` is inside the header.
pub fn hit_test(header: Rect, tabs: &[Rect], p: Point) -> Option<usize> {
    if !header.contains(p) {
        return None;
    }
    tabs.iter().position(|tab| tab.contains(p))
}

/// Maps a requested active index onto a valid one.
///
/// One past the end selects the last tab, anything further selects the
/// first tab.
pub fn clamp_active(index: usize, count: usize) -> usize {
    if index > count {
        0
    } else if index == count {
        count.saturating_sub(1)
    } else {
        index
    }
}

/// Index after `active`, wrapping to the first tab.
pub fn wrap_next(active: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (active + 1) % count }
}

/// Index before `active`, wrapping to the last tab.
pub fn wrap_prev(active: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (active % count + count - 1) % count
    }
}
