//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Page layout areas
pub struct PageLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Popup covering `percent` of the area in each direction
pub fn centered_percent(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width.saturating_mul(percent_x.min(100)) / 100;
    let height = area.height.saturating_mul(percent_y.min(100)) / 100;
    centered_popup(area, width, height)
}

/// Header tabs, section body, footer line and help bar
pub fn calculate_page_layout(area: Rect) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    PageLayout {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        help: chunks[3],
    }
}

/// Slot for the `index`-th toast, stacked downward from the top-right corner
///
/// Returns `None` once the stack would leave the area.
pub fn toast_slot(area: Rect, index: u16, width: u16, height: u16) -> Option<Rect> {
    let width = width.min(area.width);
    let y = area.y.checked_add(1)?.checked_add(index.checked_mul(height)?)?;
    if y.saturating_add(height) > area.y.saturating_add(area.height) {
        return None;
    }
    let x = (area.x + area.width).saturating_sub(width + 1).max(area.x);
    Some(Rect::new(x, y, width, height))
}

/// The longest suffix of `text` that fits in `width` columns, and its width
///
/// Single-line inputs show the tail so the cursor stays visible.
pub fn visible_tail(text: &str, width: u16) -> (&str, u16) {
    let max = width as usize;
    let total = text.width();
    if total <= max {
        return (text, total as u16);
    }

    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        start = idx;
    }
    (&text[start..], used as u16)
}
