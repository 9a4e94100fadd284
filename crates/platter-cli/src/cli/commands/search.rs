//! Catalog search.

use anyhow::Result;
use platter_core::catalog::MockCatalog;
use platter_core::config::Config;
use tracing::debug;

pub async fn run(config: &Config, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!("Search query cannot be empty");
    }

    let catalog = MockCatalog::new(config.catalog_options());
    let hits = catalog.search(query).await;
    debug!(query, hits = hits.len(), "search finished");

    for item in &hits {
        println!("{}\t{}\t{}", item.id, item.name, item.category);
    }
    let noun = if hits.len() == 1 { "match" } else { "matches" };
    println!("{} {noun} for \"{query}\"", hits.len());
    Ok(())
}
