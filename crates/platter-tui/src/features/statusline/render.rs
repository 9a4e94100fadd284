use ratatui::style::{Color, Style};
use ratatui::text::Span;

use super::StatusLine;

/// Header spans: `render 1.23ms · 60.0 fps`.
pub fn status_spans(status: &StatusLine) -> Vec<Span<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    if let Some(ms) = status.render_ms {
        spans.push(Span::styled("render ", dim));
        spans.push(Span::styled(
            format!("{ms:.2}ms"),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(" · ", dim));
    }
    spans.push(Span::styled(
        format!("{:.1}", status.fps),
        Style::default().fg(fps_color(status.fps)),
    ));
    spans.push(Span::styled(" fps", dim));
    spans
}

fn fps_color(fps: f32) -> Color {
    if fps >= 50.0 {
        Color::Green
    } else if fps >= 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
