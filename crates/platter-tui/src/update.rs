//! TUI reducer.
//!
//! The runtime calls `update(app, event)` for every event and executes the
//! returned effects. All state changes happen here.
//!
//! Each call ends with a relayout of the list and a load-more check, so a
//! `FetchPage` effect can follow any event that moved the window or changed
//! the item count. The page store refuses a second request while one is
//! outstanding, which keeps repeated signals from piling up fetches.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::catalog;
use crate::mutations::StateMutation;
use crate::overlays::{DetailState, Overlay, OverlayTransition, OverlayUpdate};
use crate::render;
use crate::state::{AppState, TuiState};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let mut effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            return vec![];
        }
        UiEvent::Frame { height, .. } => {
            catalog::handle_frame(&mut app.tui.catalog, render::list_height(height));
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::PageFetched { request, result } => {
            catalog::handle_page_fetched(&mut app.tui.catalog, request, result);
            vec![]
        }
    };

    if let Some(request) = catalog::load_more(&mut app.tui.catalog) {
        effects.push(UiEffect::FetchPage { request });
    }
    effects
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) if app.overlay.is_none() => {
            catalog::handle_mouse(&mut app.tui.catalog, mouse);
            vec![]
        }
        // Resize is picked up by the next Frame.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        apply_overlay_update(app, update);
        return vec![];
    }

    if catalog::handle_nav_key(&mut app.tui.catalog, key) {
        return vec![];
    }

    handle_main_key(app, key)
}

fn handle_main_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let selected = app.tui.catalog.selected_item().map(|item| item.id);

    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Enter => {
            if let Some(item) = app.tui.catalog.selected_item() {
                app.overlay = Some(Overlay::Detail(DetailState::open(item.clone())));
            }
        }
        KeyCode::Char('a') => {
            if let Some(id) = selected {
                app.tui.apply(StateMutation::AddToCart(id));
            }
        }
        KeyCode::Char('f') => {
            if let Some(id) = selected {
                app.tui.apply(StateMutation::ToggleFavorite(id));
            }
        }
        KeyCode::Char('c') => app.tui.apply(StateMutation::ClearCart),
        KeyCode::Char('x') => app.tui.apply(StateMutation::ClearFavorites),
        KeyCode::Char('r') => {
            return app
                .tui
                .catalog
                .retry()
                .map(|request| UiEffect::FetchPage { request })
                .into_iter()
                .collect();
        }
        // The empty window after a reset triggers the first page again.
        KeyCode::Char('R') => app.tui.catalog.reset(),
        _ => {}
    }
    vec![]
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) {
    apply_mutations(&mut app.tui, update.mutations);
    if update.transition == OverlayTransition::Close {
        app.overlay = None;
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        tui.apply(mutation);
    }
}
