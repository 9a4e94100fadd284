//! Lookup of a single catalog item.

use anyhow::{Context, Result};
use platter_core::catalog::{ItemId, MockCatalog};
use platter_core::config::Config;
use tracing::debug;

pub async fn run(config: &Config, id: ItemId) -> Result<()> {
    let catalog = MockCatalog::new(config.catalog_options());
    debug!(id, "looking up item");

    let Some(item) = catalog.find_by_id(id).await else {
        anyhow::bail!("Item {id} not found");
    };

    let json = serde_json::to_string_pretty(&item).context("serialize item")?;
    println!("{json}");
    Ok(())
}
