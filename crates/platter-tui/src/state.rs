//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── catalog: CatalogState   (page store, viewport, selection)
//! │   ├── cart / favorites
//! │   ├── status_line             (fps, render time)
//! │   └── source: Arc<MockCatalog>
//! └── overlay: Option<Overlay>
//! ```
//!
//! Overlays live beside `TuiState` so an overlay key handler can hold
//! `&mut Overlay` while the reducer mutates `TuiState`.

use std::collections::HashSet;
use std::sync::Arc;

use platter_core::catalog::{ItemId, MockCatalog};
use platter_core::config::Config;
use tracing::info;

use crate::features::catalog::CatalogState;
use crate::mutations::StateMutation;
use crate::overlays::Overlay;
use crate::statusline::StatusLineAccumulator;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<MockCatalog>) -> Self {
        Self {
            tui: TuiState::new(config, source),
            overlay: None,
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub catalog: CatalogState,
    /// Item ids in the order they were added; an item may appear more than once.
    pub cart: Vec<ItemId>,
    pub favorites: HashSet<ItemId>,
    pub config: Config,
    /// Upstream the runtime fetches pages from.
    pub source: Arc<MockCatalog>,
    pub spinner_frame: usize,
    pub status_line: StatusLineAccumulator,
}

impl TuiState {
    pub fn new(config: Config, source: Arc<MockCatalog>) -> Self {
        let catalog = CatalogState::new(&config.list, source.options().latency);
        Self {
            should_quit: false,
            catalog,
            cart: Vec::new(),
            favorites: HashSet::new(),
            config,
            source,
            spinner_frame: 0,
            status_line: StatusLineAccumulator::new(),
        }
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(&id)
    }

    pub fn cart_count(&self, id: ItemId) -> usize {
        self.cart.iter().filter(|entry| **entry == id).count()
    }

    pub fn apply(&mut self, mutation: StateMutation) {
        match mutation {
            StateMutation::AddToCart(id) => {
                self.cart.push(id);
                info!(id, cart = self.cart.len(), "added to cart");
            }
            StateMutation::ToggleFavorite(id) => {
                let favorite = self.favorites.insert(id);
                if !favorite {
                    self.favorites.remove(&id);
                }
                info!(id, favorite, "favorite toggled");
            }
            StateMutation::ClearCart => {
                self.cart.clear();
                info!("cart cleared");
            }
            StateMutation::ClearFavorites => {
                self.favorites.clear();
                info!("favorites cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use platter_core::catalog::CatalogOptions;

    use super::*;

    fn tui() -> TuiState {
        let source = MockCatalog::new(CatalogOptions {
            size: 10,
            ..CatalogOptions::default()
        });
        TuiState::new(Config::default(), Arc::new(source))
    }

    #[test]
    fn test_cart_keeps_duplicates() {
        let mut tui = tui();
        tui.apply(StateMutation::AddToCart(4));
        tui.apply(StateMutation::AddToCart(4));
        tui.apply(StateMutation::AddToCart(7));

        assert_eq!(tui.cart.len(), 3);
        assert_eq!(tui.cart_count(4), 2);

        tui.apply(StateMutation::ClearCart);
        assert!(tui.cart.is_empty());
    }

    #[test]
    fn test_favorite_toggles() {
        let mut tui = tui();
        tui.apply(StateMutation::ToggleFavorite(2));
        assert!(tui.is_favorite(2));
        tui.apply(StateMutation::ToggleFavorite(2));
        assert!(!tui.is_favorite(2));

        tui.apply(StateMutation::ToggleFavorite(3));
        tui.apply(StateMutation::ClearFavorites);
        assert!(tui.favorites.is_empty());
    }

    #[test]
    fn test_loading_message_uses_source_latency() {
        let tui = tui();
        assert_eq!(tui.catalog.fetch_latency.as_millis(), 1000);
    }
}
