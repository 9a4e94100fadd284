use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Centers a `width` x `height` box in `area`, leaving a small margin.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws the titled border.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Areas inside a rendered overlay.
pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
}

/// Draws the container and hint row; returns where the body goes.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    let footer_height = u16::from(!config.hints.is_empty()).min(inner.height);
    if footer_height > 0 {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(footer_height),
    );
    OverlayLayout { popup, body }
}

/// One "key action" pair in the hint row.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub const fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders hints centered on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>], key_color: Color) {
    let row = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(key_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        row,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(calculate_overlay_area(area, 60, 20), Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_overlay_shrinks_to_fit() {
        let area = Rect::new(0, 2, 30, 10);
        let popup = calculate_overlay_area(area, 60, 20);
        assert_eq!(popup.width, 26);
        assert_eq!(popup.height, 8);
        assert_eq!(popup.x, 2);
        assert_eq!(popup.y, 3);
    }
}
