use anyhow::Result;
use platter_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    platter_tui::run_catalog_browser(config).await
}
