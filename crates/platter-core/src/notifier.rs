//! Visible-range notifier.
//!
//! Decides whether the rendered window is close enough to the end of the
//! loaded items that the next page should be requested. The notifier keeps
//! no memory of earlier signals and fires on every qualifying check (i.e. on
//! every scroll event near the end). Deduplication is the job of
//! `PageStore::request_next_page`, which ignores calls while a fetch is
//! outstanding or after exhaustion.

use crate::window::VisibleRange;

/// Default number of items before the end at which more are requested.
pub const DEFAULT_LEAD_DISTANCE: usize = 5;

/// Returns true when `stop_index >= item_count - 1 - lead_distance`.
///
/// An empty window (`None`, nothing loaded) always qualifies: the end of the
/// loaded data is trivially in view.
pub const fn should_load_more(
    range: Option<VisibleRange>,
    item_count: usize,
    lead_distance: usize,
) -> bool {
    match range {
        None => true,
        // stop >= N - 1 - L, rearranged so nothing underflows
        Some(range) => {
            range
                .stop_index
                .saturating_add(1)
                .saturating_add(lead_distance)
                >= item_count
        }
    }
}

/// Bridges windowing output to a "load more" callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadMoreNotifier {
    lead_distance: usize,
}

impl Default for LoadMoreNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_DISTANCE)
    }
}

impl LoadMoreNotifier {
    pub const fn new(lead_distance: usize) -> Self {
        Self { lead_distance }
    }

    pub const fn lead_distance(&self) -> usize {
        self.lead_distance
    }

    /// Runs the check and invokes `load_more` when it passes.
    ///
    /// Returns whether the callback was invoked.
    pub fn notify<F>(&self, range: Option<VisibleRange>, item_count: usize, load_more: F) -> bool
    where
        F: FnOnce(),
    {
        let fire = should_load_more(range, item_count, self.lead_distance);
        if fire {
            load_more();
        }
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_at(stop_index: usize) -> Option<VisibleRange> {
        Some(VisibleRange {
            start_index: stop_index.saturating_sub(3),
            stop_index,
        })
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 100 loaded, lead 5: threshold is index 94
        assert!(!should_load_more(stop_at(93), 100, 5));
        assert!(should_load_more(stop_at(94), 100, 5));
        assert!(should_load_more(stop_at(99), 100, 5));
    }

    #[test]
    fn test_zero_lead_fires_only_at_last_item() {
        assert!(!should_load_more(stop_at(98), 100, 0));
        assert!(should_load_more(stop_at(99), 100, 0));
    }

    #[test]
    fn test_lead_larger_than_collection() {
        assert!(should_load_more(stop_at(0), 3, 5));
    }

    #[test]
    fn test_empty_window_fires() {
        assert!(should_load_more(None, 0, DEFAULT_LEAD_DISTANCE));
    }

    #[test]
    fn test_notify_fires_every_time_it_qualifies() {
        let notifier = LoadMoreNotifier::default();
        let mut calls = 0;
        for _ in 0..4 {
            notifier.notify(stop_at(96), 100, || calls += 1);
        }
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_notify_skips_callback_below_threshold() {
        let notifier = LoadMoreNotifier::new(5);
        let mut called = false;
        let fired = notifier.notify(stop_at(10), 100, || called = true);
        assert!(!fired);
        assert!(!called);
    }
}
