use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use platter_core::catalog::FoodItem;
use platter_core::pages::{Page, PageCompletion, PageRequest};
use platter_core::source::FetchError;
use tracing::{debug, info, warn};

use super::state::{CatalogState, MOUSE_SCROLL_ROWS};

/// Applies the list height for this frame and any coalesced wheel scroll.
pub fn handle_frame(state: &mut CatalogState, list_height: usize) {
    state.set_viewport_size(list_height);
    let delta = state.scroll_accumulator.take_delta();
    if delta != 0 {
        state.scroll_by(delta);
    }
}

/// Relayouts and returns the next page request, if one is due.
pub fn load_more(state: &mut CatalogState) -> Option<PageRequest> {
    state.relayout();
    state.load_more_request()
}

pub fn handle_mouse(state: &mut CatalogState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll_accumulator.accumulate(-MOUSE_SCROLL_ROWS),
        MouseEventKind::ScrollDown => state.scroll_accumulator.accumulate(MOUSE_SCROLL_ROWS),
        _ => {}
    }
}

/// Handles list navigation keys. Returns false for keys it does not own.
pub fn handle_nav_key(state: &mut CatalogState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => state.select_next(1),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(1),
        KeyCode::PageDown => state.select_next(state.cards_per_page()),
        KeyCode::PageUp => state.select_prev(state.cards_per_page()),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        _ => return false,
    }
    true
}

/// Feeds a finished fetch back into the store.
pub fn handle_page_fetched(
    state: &mut CatalogState,
    request: PageRequest,
    result: Result<Page<FoodItem>, FetchError>,
) -> PageCompletion {
    let completion = state.store.complete(request.generation, result);
    match &completion {
        PageCompletion::Appended {
            appended,
            total,
            exhausted,
        } => {
            info!(appended, total, exhausted, "catalog page loaded");
        }
        PageCompletion::Failed(error) => {
            warn!(%error, loaded = state.store.len(), "catalog page failed");
        }
        PageCompletion::Stale => {
            debug!(generation = %request.generation, "ignored page from before reset");
        }
    }
    completion
}
