//! Full-screen catalog browser.
//!
//! Elm-style split: `state` holds everything, `update` is the reducer,
//! `render` draws, and `runtime` owns the terminal and runs effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
pub use features::{catalog, statusline};
use platter_core::catalog::MockCatalog;
use platter_core::config::Config;
pub use runtime::TuiRuntime;
use tracing::info;

/// Runs the browser until the user quits.
pub async fn run_catalog_browser(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The catalog browser requires a terminal.\n\
             Use `platter pages` or `platter search` for non-interactive output."
        );
    }

    let options = config.catalog_options();
    info!(
        size = options.size,
        page_size = options.page_size,
        latency_ms = options.latency.as_millis() as u64,
        "starting catalog browser"
    );
    let source = Arc::new(MockCatalog::new(options));

    let mut runtime = TuiRuntime::new(config.clone(), source)?;
    runtime.run()?;

    let state = &runtime.state.tui;
    info!(
        loaded = state.catalog.store.len(),
        cart = state.cart.len(),
        favorites = state.favorites.len(),
        "catalog browser closed"
    );
    Ok(())
}
