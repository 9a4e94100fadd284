//! Paged collection state.
//!
//! ## Module Structure
//!
//! - `mod.rs`: page, cursor and request types shared with sources and surfaces
//! - `store.rs`: `PageStore`, the pagination state machine
//!
//! ## State Machine
//!
//! ```text
//!            request_next_page()
//!   Idle ───────────────────────────▶ Fetching
//!    ▲  ▲                               │
//!    │  └──── complete(Ok, next=Some) ──┤
//!    │                                  │
//!    └─ Failed ◀── complete(Err) ───────┤
//!                                       │
//!   Exhausted ◀── complete(Ok, next=None)
//! ```
//!
//! `reset()` returns to `Idle` from any state and bumps the generation, so a
//! response issued before the reset is recognised as stale when it lands.

mod store;

use std::fmt;

pub use store::{CursorState, PageCompletion, PageState, PageStore};

/// Opaque continuation token handed back by a paginated source.
///
/// The store never interprets it; it only passes the last one it received
/// back to the source on the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub const fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contiguous batch of items plus the token for the next batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` means the source has nothing after this page.
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<Cursor>) -> Self {
        Self { items, next_cursor }
    }

    /// A page with no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Store generation. Bumped by every `reset()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub const fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket for one outstanding fetch.
///
/// Returned by `PageStore::request_next_page`; the caller performs the fetch
/// and hands the result back together with `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: Generation,
    pub cursor: Option<Cursor>,
}
