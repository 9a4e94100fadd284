//! Upstream data source contract.
//!
//! A [`PageSource`] hands out pages for an optional cursor. The store never
//! talks to a source itself: callers take the `PageRequest` returned by
//! `PageStore::request_next_page`, run the fetch (on the TUI's runtime or
//! inline via [`load_next_page`]) and feed the result back.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::pages::{Cursor, Page, PageCompletion, PageStore};

/// Failure of a single page fetch.
///
/// This is the only error kind the pagination core deals with. It is
/// recorded on the store and returned to whoever issued the request; it
/// never affects windowing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source answered with an error.
    #[error("upstream rejected the page request: {reason}")]
    Rejected { reason: String },
    /// The source did not answer in time.
    #[error("page request timed out after {}ms", .after.as_millis())]
    TimedOut { after: Duration },
}

impl FetchError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// A paginated upstream.
pub trait PageSource: Send + Sync {
    type Item: Send;

    /// Fetches the page starting at `cursor` (`None` for the first page).
    fn fetch_page(
        &self,
        cursor: Option<Cursor>,
    ) -> impl Future<Output = Result<Page<Self::Item>, FetchError>> + Send;
}

/// Runs `source.fetch_page(cursor)`, failing with `FetchError::TimedOut`
/// when it takes longer than `timeout`.
pub async fn fetch_with_timeout<S>(
    source: &S,
    cursor: Option<Cursor>,
    timeout: Duration,
) -> Result<Page<S::Item>, FetchError>
where
    S: PageSource,
{
    match tokio::time::timeout(timeout, source.fetch_page(cursor)).await {
        Ok(result) => result,
        Err(_elapsed) => Err(FetchError::TimedOut { after: timeout }),
    }
}

/// Result of one [`load_next_page`] round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store refused to issue a request (fetch in flight or exhausted).
    Skipped,
    /// A request was issued and its resolution applied.
    Completed(PageCompletion),
}

/// Requests the next page and awaits it inline.
///
/// The exclusive borrow of `store` serializes callers, so this is the
/// headless counterpart of the TUI's spawn-and-complete flow.
pub async fn load_next_page<S>(
    store: &mut PageStore<S::Item>,
    source: &S,
    timeout: Duration,
) -> LoadOutcome
where
    S: PageSource,
{
    let Some(request) = store.request_next_page() else {
        return LoadOutcome::Skipped;
    };
    let result = fetch_with_timeout(source, request.cursor, timeout).await;
    LoadOutcome::Completed(store.complete(request.generation, result))
}
