//! Headless pagination: drives the same `PageStore` the browser uses, one
//! page at a time, and reports each page as it lands.

use anyhow::{Context, Result};
use platter_core::catalog::{ItemId, MockCatalog};
use platter_core::config::Config;
use platter_core::pages::{Cursor, PageCompletion, PageStore};
use platter_core::source::{LoadOutcome, load_next_page};
use serde::Serialize;
use tracing::info;

pub struct PagesOptions {
    pub max_pages: Option<usize>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PageSummary {
    page: usize,
    first_id: Option<ItemId>,
    last_id: Option<ItemId>,
    count: usize,
    next_cursor: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PagesReport {
    pages: Vec<PageSummary>,
    total: usize,
    exhausted: bool,
    requests: u64,
}

pub async fn run(config: &Config, options: PagesOptions) -> Result<()> {
    if options.max_pages == Some(0) {
        anyhow::bail!("--max-pages must be at least 1");
    }

    let catalog = MockCatalog::new(config.catalog_options());
    let timeout = config.fetch_timeout();
    let mut store = PageStore::new();
    let mut pages = Vec::new();

    info!(
        size = catalog.len(),
        page_size = catalog.options().page_size,
        "paging through catalog"
    );

    while store.has_more() && options.max_pages.is_none_or(|max| pages.len() < max) {
        let completion = match load_next_page(&mut store, &catalog, timeout).await {
            LoadOutcome::Completed(completion) => completion,
            LoadOutcome::Skipped => break,
        };

        match completion {
            PageCompletion::Appended { .. } => {}
            PageCompletion::Failed(error) => {
                return Err(error).with_context(|| format!("fetch page {}", pages.len() + 1));
            }
            PageCompletion::Stale => continue,
        }

        let Some(bounds) = store.page_bounds().last().cloned() else {
            break;
        };
        let items = &store.items()[bounds];
        let summary = PageSummary {
            page: pages.len() + 1,
            first_id: items.first().map(|item| item.id),
            last_id: items.last().map(|item| item.id),
            count: items.len(),
            next_cursor: store.next_cursor().map(Cursor::value),
        };
        if !options.json {
            println!("{}", page_line(&summary));
        }
        pages.push(summary);
    }

    let report = PagesReport {
        total: store.len(),
        exhausted: !store.has_more(),
        requests: catalog.page_requests(),
        pages,
    };

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        let suffix = if report.exhausted {
            "catalog exhausted"
        } else {
            "more available"
        };
        println!(
            "total: {} items in {} pages ({suffix})",
            report.total,
            report.pages.len()
        );
    }
    Ok(())
}

fn page_line(summary: &PageSummary) -> String {
    let range = match (summary.first_id, summary.last_id) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "none".to_string(),
    };
    let next = summary
        .next_cursor
        .map_or_else(|| "none".to_string(), |cursor| cursor.to_string());
    format!(
        "page {}: items {range} ({}), next cursor {next}",
        summary.page, summary.count
    )
}
