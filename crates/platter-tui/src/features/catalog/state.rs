use std::time::Duration;

use platter_core::catalog::FoodItem;
use platter_core::config::ListConfig;
use platter_core::notifier::LoadMoreNotifier;
use platter_core::pages::{PageRequest, PageStore};
use platter_core::window::{self, Viewport, WindowLayout};

/// Rows scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: i32 = 3;

/// Coalesces wheel events between frames.
#[derive(Debug, Default)]
pub struct ScrollAccumulator {
    delta: i32,
}

impl ScrollAccumulator {
    pub fn accumulate(&mut self, rows: i32) {
        self.delta = self.delta.saturating_add(rows);
    }

    pub fn take_delta(&mut self) -> i32 {
        std::mem::take(&mut self.delta)
    }
}

#[derive(Debug)]
pub struct CatalogState {
    /// Accumulated pages.
    pub store: PageStore<FoodItem>,
    /// Scroll position and list geometry, in terminal rows.
    pub viewport: Viewport,
    /// Result of the last windowing pass.
    pub layout: WindowLayout,
    pub notifier: LoadMoreNotifier,
    /// Index of the highlighted card.
    pub selected: usize,
    pub scroll_accumulator: ScrollAccumulator,
    /// Simulated fetch delay, shown on the loading screen.
    pub fetch_latency: Duration,
}

impl CatalogState {
    pub fn new(list: &ListConfig, fetch_latency: Duration) -> Self {
        Self {
            store: PageStore::new(),
            viewport: Viewport::new(list.item_height, list.overscan),
            layout: WindowLayout::default(),
            notifier: LoadMoreNotifier::new(list.lead_distance),
            selected: 0,
            scroll_accumulator: ScrollAccumulator::default(),
            fetch_latency,
        }
    }

    pub const fn item_height(&self) -> usize {
        self.viewport.item_size
    }

    pub fn selected_item(&self) -> Option<&FoodItem> {
        self.store.get(self.selected)
    }

    fn max_scroll_offset(&self) -> usize {
        window::max_scroll_offset(
            self.store.len(),
            self.viewport.item_size,
            self.viewport.viewport_size,
        )
    }

    /// Recomputes the window for the current item count and viewport.
    pub fn relayout(&mut self) {
        self.viewport.scroll_offset = self.viewport.scroll_offset.min(self.max_scroll_offset());
        self.layout = window::compute_window(self.store.len(), &self.viewport);
    }

    pub fn set_viewport_size(&mut self, rows: usize) {
        self.viewport.viewport_size = rows;
    }

    /// Scrolls by `rows` (negative is up), clamped to the content.
    pub fn scroll_by(&mut self, rows: i32) {
        let amount = rows.unsigned_abs() as usize;
        let offset = if rows < 0 {
            self.viewport.scroll_offset.saturating_sub(amount)
        } else {
            self.viewport.scroll_offset.saturating_add(amount)
        };
        self.viewport.scroll_offset = offset.min(self.max_scroll_offset());
    }

    /// Whole cards that fit in the viewport, at least one.
    pub fn cards_per_page(&self) -> usize {
        (self.viewport.viewport_size / self.item_height().max(1)).max(1)
    }

    /// Moves the selection and scrolls just enough to keep it in view.
    pub fn select(&mut self, index: usize) {
        let Some(last) = self.store.len().checked_sub(1) else {
            self.selected = 0;
            return;
        };
        self.selected = index.min(last);

        let item_top = self.selected * self.item_height();
        let item_bottom = item_top + self.item_height();
        let viewport = self.viewport.viewport_size;
        if item_top < self.viewport.scroll_offset {
            self.viewport.scroll_offset = item_top;
        } else if item_bottom > self.viewport.scroll_offset + viewport {
            self.viewport.scroll_offset = item_bottom.saturating_sub(viewport);
        }
        self.viewport.scroll_offset = self.viewport.scroll_offset.min(self.max_scroll_offset());
    }

    pub fn select_next(&mut self, count: usize) {
        self.select(self.selected.saturating_add(count));
    }

    pub fn select_prev(&mut self, count: usize) {
        self.select(self.selected.saturating_sub(count));
    }

    pub fn select_first(&mut self) {
        self.select(0);
        self.viewport.scroll_offset = 0;
    }

    pub fn select_last(&mut self) {
        self.select(usize::MAX);
        self.viewport.scroll_offset = self.max_scroll_offset();
    }

    /// Asks the notifier whether the window is near the end and, if so,
    /// asks the store for a request ticket.
    ///
    /// After a failure nothing is requested until the user retries.
    pub fn load_more_request(&mut self) -> Option<PageRequest> {
        if self.store.last_error().is_some() {
            return None;
        }

        let mut request = None;
        let store = &mut self.store;
        self.notifier
            .notify(self.layout.range, store.len(), || {
                request = store.request_next_page();
            });
        request
    }

    /// Re-issues the request that failed.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.store.last_error().is_none() {
            return None;
        }
        self.store.request_next_page()
    }

    /// Drops everything loaded and returns to the top.
    pub fn reset(&mut self) {
        self.store.reset();
        self.viewport.scroll_offset = 0;
        self.selected = 0;
        self.scroll_accumulator.take_delta();
        self.relayout();
    }
}
