//! Text helpers for card rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates `text` to `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Lays out `left` and `right` on one line of `width` columns.
///
/// `right` is kept whole; `left` is truncated to make room for it.
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let right_width = right.width();
    if right_width >= width {
        return truncate_with_ellipsis(right, width);
    }

    let left = truncate_with_ellipsis(left, width - right_width - 1);
    let gap = width - right_width - left.width();
    format!("{left}{}{right}", " ".repeat(gap))
}
