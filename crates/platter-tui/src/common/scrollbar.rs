//! Scrollbar for the catalog list.
//!
//! The track represents the full `total_extent` of the list, including items
//! that were never materialized. The thumb length is computed once from the
//! viewport/extent ratio so it does not jitter while scrolling, and it
//! reaches the bottom of the track exactly at the maximum scroll offset.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

#[derive(Debug, Clone, Copy)]
pub struct Scrollbar {
    total_extent: usize,
    viewport_size: usize,
    scroll_offset: usize,
}

impl Scrollbar {
    pub fn new(total_extent: usize, viewport_size: usize, scroll_offset: usize) -> Self {
        Self {
            total_extent,
            viewport_size,
            scroll_offset,
        }
    }

    /// Thumb position and length within a track of `track_len` cells.
    ///
    /// `None` when everything fits in the viewport.
    fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_scroll = self.total_extent.saturating_sub(self.viewport_size);
        if track_len == 0 || max_scroll == 0 {
            return None;
        }

        // round(track * viewport / total), at least one cell
        let numerator = track_len as u64 * self.viewport_size.min(self.total_extent) as u64;
        let total = self.total_extent as u64;
        let thumb_len = (((numerator + total / 2) / total) as usize).clamp(1, track_len);

        let available = track_len - thumb_len;
        let offset = self.scroll_offset.min(max_scroll) as u64;
        let thumb_start = ((offset * available as u64) / max_scroll as u64) as usize;
        Some((thumb_start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((thumb_start, thumb_len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let (symbol, color) = if (thumb_start..thumb_start + thumb_len).contains(&idx) {
                (THUMB_SYMBOL, Color::Gray)
            } else {
                (TRACK_SYMBOL, Color::DarkGray)
            };
            buf.set_string(x, y, symbol, Style::default().fg(color));
        }
    }
}
