//! Pure view functions.
//!
//! `render` reads `&AppState` and draws; it never mutates state. The list
//! window it draws was computed by the reducer on the preceding `Frame`
//! event, using the same `list_height` as here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use platter_core::pages::PageState;

use crate::features::catalog::render_catalog;
use crate::overlays::OverlayExt;
use crate::state::{AppState, TuiState};
use crate::statusline::status_spans;

/// Title row plus stats row.
pub const HEADER_HEIGHT: u16 = 2;
/// Key hints.
pub const FOOTER_HEIGHT: u16 = 1;
/// Column reserved on the right of the list.
pub const SCROLLBAR_WIDTH: u16 = 1;

pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

const HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("PgUp/PgDn", "page"),
    ("g/G", "top/end"),
    ("Enter", "details"),
    ("a", "cart"),
    ("f", "favorite"),
    ("c/x", "clear"),
    ("r", "retry"),
    ("R", "reload"),
    ("q", "quit"),
];

/// Rows available to the list in a terminal `height` rows tall.
pub fn list_height(height: u16) -> usize {
    height.saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT) as usize
}

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, chunks[0], state);
    render_catalog(frame, chunks[1], state);
    render_footer(frame, chunks[2]);

    app.overlay.render(frame, area);
}

fn render_header(frame: &mut Frame, area: Rect, state: &TuiState) {
    let title = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Platter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        title,
    );
    frame.render_widget(
        Paragraph::new(Line::from(status_spans(&state.status_line.snapshot())))
            .alignment(Alignment::Right),
        title,
    );

    if area.height < 2 {
        return;
    }
    let stats = Rect::new(area.x, area.y + 1, area.width, 1);
    let dim = Style::default().fg(Color::DarkGray);
    let counters = Line::from(vec![
        Span::styled(" Items: ", dim),
        Span::raw(state.catalog.store.len().to_string()),
        Span::styled("  Cart: ", dim),
        Span::raw(state.cart.len().to_string()),
        Span::styled("  Favorites: ", dim),
        Span::raw(state.favorites.len().to_string()),
    ]);
    frame.render_widget(Paragraph::new(counters), stats);
    frame.render_widget(
        Paragraph::new(fetch_status(state)).alignment(Alignment::Right),
        stats,
    );
}

/// Pagination status shown at the right of the stats row.
fn fetch_status(state: &TuiState) -> Line<'static> {
    let store = &state.catalog.store;
    match store.state() {
        PageState::Fetching => {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!("{spinner} loading page {}", store.page_bounds().len() + 1),
                Style::default().fg(Color::Yellow),
            ))
        }
        PageState::Exhausted => Line::from(Span::styled(
            format!("all {} loaded", store.len()),
            Style::default().fg(Color::Green),
        )),
        PageState::Failed => Line::from(Span::styled(
            "fetch failed, r to retry",
            Style::default().fg(Color::Red),
        )),
        PageState::Idle => Line::from(Span::styled(
            "more available",
            Style::default().fg(Color::DarkGray),
        )),
    }
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use platter_core::catalog::{CatalogOptions, MockCatalog};
    use platter_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::effects::UiEffect;
    use crate::events::UiEvent;
    use crate::update::update;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 30;

    fn app() -> AppState {
        let source = MockCatalog::new(CatalogOptions {
            size: 250,
            ..CatalogOptions::default()
        });
        AppState::new(Config::default(), Arc::new(source))
    }

    fn frame_event(app: &mut AppState) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Frame {
                width: WIDTH,
                height: HEIGHT,
            },
        )
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_to_text(terminal.backend().buffer())
    }

    fn buffer_to_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn load_first_page(app: &mut AppState) {
        let effects = frame_event(app);
        let Some(UiEffect::FetchPage { request }) = effects.first().cloned() else {
            panic!("expected a fetch, got {effects:?}");
        };
        let page = app.tui.source.page_at(request.cursor);
        update(
            app,
            UiEvent::PageFetched {
                request,
                result: Ok(page),
            },
        );
    }

    #[test]
    fn test_list_height_excludes_chrome() {
        assert_eq!(list_height(30), 27);
        assert_eq!(list_height(2), 0);
    }

    #[test]
    fn test_loading_screen() {
        let mut app = app();
        frame_event(&mut app);
        let text = draw(&app);
        assert!(text.contains("Loading delicious food items..."));
        assert!(text.contains("Simulating server fetch with 1000 ms delay"));
        assert!(text.contains("loading page 1"));
    }

    #[test]
    fn test_only_windowed_cards_are_drawn() {
        let mut app = app();
        load_first_page(&mut app);
        frame_event(&mut app);
        let text = draw(&app);

        assert!(text.contains("Items: 100"));
        assert!(text.contains(&app.tui.catalog.store.items()[0].name));
        // 27 rows hold cards 0..=3; card 10 is far outside the window
        assert!(!text.contains(&format!("{} ", app.tui.catalog.store.items()[10].name)));
        assert!(text.contains("more available"));
    }

    #[test]
    fn test_detail_overlay_is_drawn() {
        let mut app = app();
        load_first_page(&mut app);
        update(
            &mut app,
            UiEvent::Terminal(crossterm::event::Event::Key(
                crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Enter,
                    crossterm::event::KeyModifiers::NONE,
                ),
            )),
        );
        let text = draw(&app);
        assert!(text.contains("Prep Time:"));
        assert!(text.contains("add to cart"));
    }
}
