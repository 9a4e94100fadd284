use std::ops::Range;

use tracing::{debug, trace, warn};

use super::{Cursor, Generation, Page, PageRequest};
use crate::source::FetchError;
use crate::window::VisibleRange;

/// Observable state of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Not fetching; more pages may be available.
    Idle,
    /// One request is outstanding.
    Fetching,
    /// Not fetching; the last request failed and the error is recorded.
    Failed,
    /// The source reported no continuation. Terminal until `reset()`.
    Exhausted,
}

/// Snapshot of the pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub has_more: bool,
    pub is_fetching: bool,
    pub next_token: Option<Cursor>,
}

/// What `PageStore::complete` did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCompletion {
    /// Items were appended.
    Appended {
        appended: usize,
        total: usize,
        exhausted: bool,
    },
    /// The fetch failed; data and cursor are unchanged.
    Failed(FetchError),
    /// The response belongs to an earlier generation (or was never
    /// requested) and was discarded.
    Stale,
}

/// Ordered collection assembled from fetched pages, plus cursor state.
///
/// At most one request is outstanding at any time: `request_next_page`
/// returns `None` while fetching or once exhausted, so callers may invoke it
/// as often as they like (e.g. on every scroll event).
///
/// Items are appended in fetch order with no sorting or deduplication; if a
/// source returns overlapping pages, duplicates propagate.
#[derive(Debug)]
pub struct PageStore<T> {
    items: Vec<T>,
    pages: Vec<Range<usize>>,
    has_more: bool,
    next_token: Option<Cursor>,
    in_flight: Option<Generation>,
    generation: Generation,
    last_error: Option<FetchError>,
}

impl<T> Default for PageStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pages: Vec::new(),
            has_more: true,
            next_token: None,
            in_flight: None,
            generation: Generation::default(),
            last_error: None,
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Issues the next fetch, if allowed.
    ///
    /// Returns `None` (and changes nothing) while a request is outstanding or
    /// after the source reported no continuation. Otherwise moves to
    /// `Fetching` and returns the request ticket to execute.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if let Some(generation) = self.in_flight {
            trace!(%generation, "page request skipped: fetch in flight");
            return None;
        }
        if !self.has_more {
            trace!("page request skipped: exhausted");
            return None;
        }

        self.in_flight = Some(self.generation);
        self.last_error = None;
        let request = PageRequest {
            generation: self.generation,
            cursor: self.next_token,
        };
        debug!(
            generation = %request.generation,
            cursor = ?request.cursor.map(Cursor::value),
            loaded = self.items.len(),
            "page request issued"
        );
        Some(request)
    }

    /// Applies the resolution of a request issued under `generation`.
    pub fn complete(
        &mut self,
        generation: Generation,
        result: Result<Page<T>, FetchError>,
    ) -> PageCompletion {
        if generation != self.generation || self.in_flight != Some(generation) {
            debug!(
                %generation,
                current = %self.generation,
                "discarding stale page response"
            );
            return PageCompletion::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let start = self.items.len();
                let appended = page.items.len();
                self.items.extend(page.items);
                self.pages.push(start..self.items.len());
                self.next_token = page.next_cursor;
                self.has_more = page.next_cursor.is_some();
                debug!(
                    %generation,
                    appended,
                    total = self.items.len(),
                    next = ?self.next_token.map(Cursor::value),
                    "page appended"
                );
                PageCompletion::Appended {
                    appended,
                    total: self.items.len(),
                    exhausted: !self.has_more,
                }
            }
            Err(error) => {
                warn!(%generation, %error, "page fetch failed");
                self.last_error = Some(error.clone());
                PageCompletion::Failed(error)
            }
        }
    }

    /// Drops all items, cursor and error state and starts a new generation.
    ///
    /// A response still in flight from before the reset will be reported as
    /// `PageCompletion::Stale` when it arrives.
    pub fn reset(&mut self) {
        self.generation = self.generation.next();
        self.items.clear();
        self.pages.clear();
        self.has_more = true;
        self.next_token = None;
        self.in_flight = None;
        self.last_error = None;
        debug!(generation = %self.generation, "page store reset");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> PageState {
        if self.in_flight.is_some() {
            PageState::Fetching
        } else if !self.has_more {
            PageState::Exhausted
        } else if self.last_error.is_some() {
            PageState::Failed
        } else {
            PageState::Idle
        }
    }

    pub fn cursor_state(&self) -> CursorState {
        CursorState {
            has_more: self.has_more,
            is_fetching: self.is_fetching(),
            next_token: self.next_token,
        }
    }

    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    pub const fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    pub const fn next_cursor(&self) -> Option<Cursor> {
        self.next_token
    }

    pub const fn generation(&self) -> Generation {
        self.generation
    }

    pub const fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index ranges of each appended page, in fetch order.
    pub fn page_bounds(&self) -> &[Range<usize>] {
        &self.pages
    }

    /// Items covered by `range`, clipped to what is loaded.
    pub fn slice(&self, range: VisibleRange) -> &[T] {
        let start = range.start_index.min(self.items.len());
        let end = range.stop_index.saturating_add(1).min(self.items.len());
        &self.items[start..end]
    }
}
