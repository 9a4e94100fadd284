use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use platter_core::catalog::FoodItem;
use platter_core::pages::PageState;

use crate::common::{Scrollbar, spread, truncate_with_ellipsis};
use crate::render::{SCROLLBAR_WIDTH, SPINNER_FRAMES};
use crate::state::TuiState;

/// Left gutter holding the selection bar.
const GUTTER: &str = "  ";
const SELECTED_GUTTER: &str = "▌ ";

/// Renders the list, or the loading/error panel while nothing is loaded.
pub fn render_catalog(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let catalog = &tui.catalog;
    if catalog.store.is_empty() {
        render_empty(frame, area, tui);
        return;
    }

    let list_width = area.width.saturating_sub(SCROLLBAR_WIDTH) as usize;
    let item_height = catalog.item_height();
    let layout = &catalog.layout;

    // Only the windowed range is turned into lines.
    let mut lines = Vec::new();
    if let Some(range) = layout.range {
        for (index, item) in range.indices().zip(catalog.store.slice(range)) {
            lines.extend(render_card(
                item,
                list_width,
                item_height,
                index == catalog.selected,
                tui.is_favorite(item.id),
                tui.cart_count(item.id),
            ));
        }
    }

    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(layout.leading_extent(item_height))
        .take(area.height as usize)
        .collect();

    let list_area = Rect::new(area.x, area.y, list_width as u16, area.height);
    frame.render_widget(Paragraph::new(visible), list_area);

    frame.render_widget(
        Scrollbar::new(
            layout.total_extent,
            catalog.viewport.viewport_size,
            layout.scroll_offset,
        ),
        area,
    );
}

/// Renders one card as exactly `height` lines of `width` columns.
pub fn render_card(
    item: &FoodItem,
    width: usize,
    height: usize,
    selected: bool,
    favorite: bool,
    in_cart: usize,
) -> Vec<Line<'static>> {
    let (gutter, name_style) = if selected {
        (
            Span::styled(SELECTED_GUTTER, Style::default().fg(Color::Cyan)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Span::raw(GUTTER),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };
    let dim = Style::default().fg(Color::DarkGray);
    let inner = width.saturating_sub(GUTTER.len());

    let title = if favorite {
        format!("♥ {}", item.name)
    } else {
        item.name.clone()
    };
    let rating = format!("★ {:.1}", item.rating);

    let mut badges = Vec::new();
    if item.is_vegetarian {
        badges.push("vegetarian");
    }
    if item.is_gluten_free {
        badges.push("gluten-free");
    }
    let price = if in_cart > 0 {
        format!("{} in cart · {}", in_cart, item.price_label())
    } else {
        item.price_label()
    };

    let tags = item
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    let details = [
        (spread(&title, &rating, inner), name_style),
        (truncate_with_ellipsis(&item.description, inner), Style::default()),
        (
            truncate_with_ellipsis(
                &format!(
                    "{} · {} cal · {} min",
                    item.category, item.calories, item.prep_time_minutes
                ),
                inner,
            ),
            dim,
        ),
        (
            truncate_with_ellipsis(&tags, inner),
            Style::default().fg(Color::Magenta),
        ),
        (
            spread(&badges.join(" "), &price, inner),
            Style::default().fg(Color::Green),
        ),
    ];

    let body_rows = height.saturating_sub(1);
    let mut lines: Vec<Line<'static>> = details
        .into_iter()
        .take(body_rows)
        .map(|(text, style)| Line::from(vec![gutter.clone(), Span::styled(text, style)]))
        .collect();
    while lines.len() < body_rows {
        lines.push(Line::from(gutter.clone()));
    }
    if height > 0 {
        lines.push(Line::from(Span::styled("─".repeat(width), dim)));
    }
    lines
}

fn render_empty(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let catalog = &tui.catalog;
    let lines = match (catalog.store.state(), catalog.store.last_error()) {
        (PageState::Failed, Some(error)) => vec![
            Line::from(Span::styled(
                "Error loading food items",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(error.to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled("r", Style::default().fg(Color::Yellow)),
                Span::styled(" try again", Style::default().fg(Color::DarkGray)),
            ]),
        ],
        (PageState::Exhausted, _) => vec![Line::from(Span::styled(
            "The catalog is empty",
            Style::default().fg(Color::DarkGray),
        ))],
        _ => {
            let spinner = SPINNER_FRAMES[tui.spinner_frame % SPINNER_FRAMES.len()];
            vec![
                Line::from(Span::styled(
                    format!("{spinner} Loading delicious food items..."),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!(
                        "Simulating server fetch with {} ms delay",
                        catalog.fetch_latency.as_millis()
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let panel = Rect::new(
        area.x,
        area.y + top,
        area.width,
        area.height.saturating_sub(top),
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        panel,
    );
}

#[cfg(test)]
mod tests {
    use platter_core::catalog::generate_catalog;
    use unicode_width::UnicodeWidthStr;

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_card_has_exact_height() {
        let item = &generate_catalog(1, 5)[0];
        for height in [1, 3, 8, 12] {
            assert_eq!(render_card(item, 60, height, false, false, 0).len(), height);
        }
        assert!(render_card(item, 60, 0, false, false, 0).is_empty());
    }

    #[test]
    fn test_card_lines_fit_width() {
        let item = &generate_catalog(1, 5)[0];
        for line in render_card(item, 40, 8, true, true, 2) {
            assert!(text(&line).width() <= 40, "{:?}", text(&line));
        }
    }

    #[test]
    fn test_card_shows_markers() {
        let item = &generate_catalog(1, 5)[0];
        let lines = render_card(item, 80, 8, true, true, 2);

        assert!(text(&lines[0]).starts_with(SELECTED_GUTTER));
        assert!(text(&lines[0]).contains(&format!("♥ {}", item.name)));
        assert!(text(&lines[4]).ends_with(&format!("2 in cart · {}", item.price_label())));
        assert!(text(&lines[7]).starts_with('─'));
    }
}
