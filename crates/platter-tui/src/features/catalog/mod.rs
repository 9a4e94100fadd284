//! Catalog list feature slice.
//!
//! Owns the page store, the scroll viewport and the selection. Every event
//! that can move the window (frame, scroll, selection, arriving page) ends
//! with a relayout followed by a load-more check, so the window is never
//! stale when the notifier looks at it.
//!
//! ## Module Structure
//!
//! - `state.rs`: `CatalogState` (store, viewport, layout, selection)
//! - `update.rs`: frame, key, mouse and page completion handling
//! - `render.rs`: card list, loading and error panels

mod render;
mod state;
mod update;

pub use render::{render_catalog, render_card};
pub use state::{CatalogState, MOUSE_SCROLL_ROWS, ScrollAccumulator};
pub use update::{handle_frame, handle_mouse, handle_nav_key, handle_page_fetched, load_more};
