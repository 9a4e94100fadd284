use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use super::generator::generate_catalog;
use super::item::{FoodItem, ItemId};
use crate::pages::{Cursor, Page};
use crate::source::{FetchError, PageSource};

/// Shape and timing of a [`MockCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Number of generated items.
    pub size: usize,
    /// RNG seed for the generator.
    pub seed: u64,
    /// Items per page.
    pub page_size: usize,
    /// Simulated delay of a page fetch.
    pub latency: Duration,
    /// Simulated delay of a lookup by id.
    pub lookup_latency: Duration,
    /// Simulated delay of a search.
    pub search_latency: Duration,
    /// Every Nth page request fails. 0 disables.
    pub fail_every: u64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            size: 1500,
            seed: 42,
            page_size: 100,
            latency: Duration::from_millis(1000),
            lookup_latency: Duration::from_millis(500),
            search_latency: Duration::from_millis(300),
            fail_every: 0,
        }
    }
}

/// In-memory paginated catalog.
///
/// Cursors are item offsets: a page starting at offset `s` covers
/// `[s, min(s + page_size, len))` and carries `Some(end)` as its next cursor
/// unless it reached the end.
#[derive(Debug)]
pub struct MockCatalog {
    items: Vec<FoodItem>,
    options: CatalogOptions,
    page_requests: AtomicU64,
}

impl MockCatalog {
    /// Generates a catalog from `options`.
    pub fn new(options: CatalogOptions) -> Self {
        let items = generate_catalog(options.size, options.seed);
        Self::from_items(items, options)
    }

    /// Serves `items` verbatim; `options.size` and `options.seed` are ignored.
    pub fn from_items(items: Vec<FoodItem>, options: CatalogOptions) -> Self {
        debug_assert!(options.page_size > 0, "page_size must be positive");
        Self {
            items,
            options,
            page_requests: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Number of page requests received so far.
    pub fn page_requests(&self) -> u64 {
        self.page_requests.load(Ordering::SeqCst)
    }

    /// The page starting at `cursor`, without latency or failure injection.
    pub fn page_at(&self, cursor: Option<Cursor>) -> Page<FoodItem> {
        let start = cursor.map_or(0, Cursor::value).min(self.items.len());
        let end = start
            .saturating_add(self.options.page_size)
            .min(self.items.len());
        let next_cursor = (end < self.items.len()).then_some(Cursor::new(end));
        Page::new(self.items[start..end].to_vec(), next_cursor)
    }

    pub async fn find_by_id(&self, id: ItemId) -> Option<FoodItem> {
        tokio::time::sleep(self.options.lookup_latency).await;
        self.items.iter().find(|item| item.id == id).cloned()
    }

    pub async fn search(&self, query: &str) -> Vec<FoodItem> {
        tokio::time::sleep(self.options.search_latency).await;
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect()
    }
}

impl PageSource for MockCatalog {
    type Item = FoodItem;

    async fn fetch_page(&self, cursor: Option<Cursor>) -> Result<Page<FoodItem>, FetchError> {
        let request = self.page_requests.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.options.latency).await;

        let fail_every = self.options.fail_every;
        if fail_every > 0 && request % fail_every == 0 {
            debug!(request, "injecting catalog failure");
            return Err(FetchError::rejected(format!(
                "simulated upstream failure on request {request}"
            )));
        }

        Ok(self.page_at(cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(size: usize, page_size: usize) -> CatalogOptions {
        CatalogOptions {
            size,
            page_size,
            ..CatalogOptions::default()
        }
    }

    #[test]
    fn test_page_boundaries() {
        let catalog = MockCatalog::new(options(250, 100));

        let first = catalog.page_at(None);
        assert_eq!(first.items.len(), 100);
        assert_eq!(first.items[0].id, 1);
        assert_eq!(first.next_cursor, Some(Cursor::new(100)));

        let last = catalog.page_at(Some(Cursor::new(200)));
        assert_eq!(last.items.len(), 50);
        assert_eq!(last.items[49].id, 250);
        assert_eq!(last.next_cursor, None);
    }

    #[test]
    fn test_exact_multiple_ends_without_cursor() {
        let catalog = MockCatalog::new(options(200, 100));
        assert_eq!(catalog.page_at(Some(Cursor::new(100))).next_cursor, None);
    }

    #[test]
    fn test_cursor_past_end_yields_empty_last_page() {
        let catalog = MockCatalog::new(options(10, 100));
        let page = catalog.page_at(Some(Cursor::new(50)));
        assert!(page.items.is_empty());
        assert_eq!(page.next_cursor, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let catalog = MockCatalog::new(options(10, 5));
        let started = tokio::time::Instant::now();
        let page = catalog.fetch_page(None).await.unwrap();

        assert_eq!(page.items.len(), 5);
        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(catalog.page_requests(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fail_every_nth_request() {
        let catalog = MockCatalog::new(CatalogOptions {
            fail_every: 2,
            ..options(10, 5)
        });

        assert!(catalog.fetch_page(None).await.is_ok());
        assert!(matches!(
            catalog.fetch_page(None).await,
            Err(FetchError::Rejected { .. })
        ));
        assert!(catalog.fetch_page(None).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_by_id() {
        let catalog = MockCatalog::new(options(30, 10));
        assert_eq!(catalog.find_by_id(17).await.map(|item| item.id), Some(17));
        assert!(catalog.find_by_id(31).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_case_insensitive() {
        let catalog = MockCatalog::new(options(200, 10));
        let expected = catalog
            .items
            .iter()
            .filter(|item| item.category == "Thai")
            .count();
        let hits = catalog.search("THAI").await;
        assert!(hits.len() >= expected);
        assert!(hits.iter().all(|item| item.matches("thai")));
    }

    #[test]
    fn test_independent_catalogs_do_not_share_counters() {
        let a = MockCatalog::new(options(10, 5));
        let b = MockCatalog::new(options(10, 5));
        a.page_requests.fetch_add(3, Ordering::SeqCst);
        assert_eq!(a.page_requests(), 3);
        assert_eq!(b.page_requests(), 0);
    }
}
