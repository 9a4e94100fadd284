//! Async effect handlers.
//!
//! Handlers are plain async functions returning the `UiEvent` that reports
//! their result; the runtime decides where they run.

use std::sync::Arc;
use std::time::Duration;

use platter_core::catalog::MockCatalog;
use platter_core::pages::{Cursor, PageRequest};
use platter_core::source::fetch_with_timeout;
use tracing::debug;

use crate::events::UiEvent;

/// Fetches one page for `request`, bounded by `timeout`.
pub async fn fetch_page(
    source: Arc<MockCatalog>,
    request: PageRequest,
    timeout: Duration,
) -> UiEvent {
    debug!(
        generation = %request.generation,
        cursor = ?request.cursor.map(Cursor::value),
        "fetching page"
    );
    let result = fetch_with_timeout(source.as_ref(), request.cursor, timeout).await;
    UiEvent::PageFetched { request, result }
}
