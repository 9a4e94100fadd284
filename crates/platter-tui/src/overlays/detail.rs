//! Item detail overlay.

use crossterm::event::{KeyCode, KeyEvent};
use platter_core::catalog::FoodItem;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tracing::info;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::mutations::StateMutation;

const WIDTH: u16 = 64;
const HEIGHT: u16 = 18;

#[derive(Debug, Clone)]
pub struct DetailState {
    pub item: FoodItem,
}

impl DetailState {
    pub fn open(item: FoodItem) -> Self {
        info!(id = item.id, name = %item.name, "item selected");
        Self { item }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => OverlayUpdate::close(),
            KeyCode::Char('a') => {
                OverlayUpdate::stay().with_mutations(vec![StateMutation::AddToCart(self.item.id)])
            }
            KeyCode::Char('f') => OverlayUpdate::stay()
                .with_mutations(vec![StateMutation::ToggleFavorite(self.item.id)]),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("a", "add to cart"),
            InputHint::new("f", "favorite"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: &self.item.name,
                border_color: Color::Cyan,
                width: WIDTH,
                height: HEIGHT,
                hints: &hints,
            },
        );

        frame.render_widget(
            Paragraph::new(detail_lines(&self.item)).wrap(Wrap { trim: false }),
            layout.body,
        );
    }
}

fn detail_lines(item: &FoodItem) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ])
    };

    vec![
        Line::from(item.description.clone()),
        Line::from(""),
        field("Category", item.category.clone()),
        field("Price", item.price_label()),
        field("Calories", item.calories.to_string()),
        field("Prep Time", format!("{} minutes", item.prep_time_minutes)),
        field("Ingredients", item.ingredients.join(", ")),
    ]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use platter_core::catalog::generate_catalog;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn open() -> DetailState {
        DetailState::open(generate_catalog(3, 1).remove(2))
    }

    fn press(state: &mut DetailState, code: KeyCode) -> OverlayUpdate {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_close_keys() {
        let mut state = open();
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            let update = press(&mut state, code);
            assert!(matches!(update.transition, OverlayTransition::Close));
        }
    }

    #[test]
    fn test_add_to_cart_stays_open() {
        let mut state = open();
        let update = press(&mut state, KeyCode::Char('a'));
        assert!(matches!(update.transition, OverlayTransition::Stay));
        assert_eq!(update.mutations, vec![StateMutation::AddToCart(3)]);
    }

    #[test]
    fn test_detail_lines_cover_record() {
        let state = open();
        let text: Vec<String> = detail_lines(&state.item)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(text.iter().any(|l| l.starts_with("Prep Time: ")));
        assert!(
            text.iter()
                .any(|l| l == &format!("Ingredients: {}", state.item.ingredients.join(", ")))
        );
    }
}
