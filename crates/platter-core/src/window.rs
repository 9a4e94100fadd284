//! Windowing engine.
//!
//! Maps a scroll position onto the contiguous index range that has to be
//! materialized, plus the total scrollable extent the surface reports to its
//! host. Everything here is a pure function of its inputs: the render surface
//! keeps the [`Viewport`] as state and calls [`compute_window`] on every scroll,
//! resize, or item-count change. Nothing is cached between calls, so the item
//! count may change freely between two renders (pages arrive asynchronously).
//!
//! Extents are plain `usize` values in a caller-chosen unit (terminal rows in
//! the TUI). A zero item extent is a caller error; it yields an empty layout.

use std::ops::RangeInclusive;

/// Scroll surface inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Distance scrolled from the top of the content.
    pub scroll_offset: usize,
    /// Extent of the visible area.
    pub viewport_size: usize,
    /// Fixed extent of a single item.
    pub item_size: usize,
    /// Extra items materialized beyond each viewport edge.
    pub overscan: usize,
}

impl Viewport {
    pub const fn new(item_size: usize, overscan: usize) -> Self {
        Self {
            scroll_offset: 0,
            viewport_size: 0,
            item_size,
            overscan,
        }
    }

    #[must_use]
    pub const fn with_scroll_offset(mut self, scroll_offset: usize) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    #[must_use]
    pub const fn with_viewport_size(mut self, viewport_size: usize) -> Self {
        self.viewport_size = viewport_size;
        self
    }
}

/// Inclusive range of item indices (`start_index <= stop_index`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    pub start_index: usize,
    pub stop_index: usize,
}

impl VisibleRange {
    pub const fn count(&self) -> usize {
        self.stop_index - self.start_index + 1
    }

    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.stop_index
    }

    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.stop_index
    }
}

/// Result of one windowing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowLayout {
    /// `item_count * item_size`: the track size of the scrollbar.
    pub total_extent: usize,
    /// Scroll offset actually used, after clamping against `total_extent`.
    pub scroll_offset: usize,
    /// Items intersecting the viewport, without overscan.
    pub visible: Option<VisibleRange>,
    /// `visible` widened by the overscan count. This is what gets rendered.
    pub range: Option<VisibleRange>,
}

impl WindowLayout {
    pub const fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// Distance between the top of the first materialized item and the top
    /// of the viewport. The surface skips this much of its rendered output.
    pub const fn leading_extent(&self, item_size: usize) -> usize {
        match self.range {
            Some(range) => self
                .scroll_offset
                .saturating_sub(range.start_index * item_size),
            None => 0,
        }
    }
}

/// Total scrollable extent for `item_count` items of `item_size` each.
pub const fn total_extent(item_count: usize, item_size: usize) -> usize {
    item_count.saturating_mul(item_size)
}

/// Largest scroll offset that still fills the viewport.
pub const fn max_scroll_offset(item_count: usize, item_size: usize, viewport_size: usize) -> usize {
    total_extent(item_count, item_size).saturating_sub(viewport_size)
}

/// Computes the window for `item_count` items under `viewport`.
///
/// - `firstVisible = floor(O / S)` and `lastVisible = floor((O + V) / S)`,
///   both clamped to `[0, N-1]`
/// - the rendered range widens both ends by the overscan count, clamped
/// - an offset past `total_extent` (left over after the collection shrank)
///   is pulled back to `total_extent - V` first
pub fn compute_window(item_count: usize, viewport: &Viewport) -> WindowLayout {
    let Viewport {
        scroll_offset,
        viewport_size,
        item_size,
        overscan,
    } = *viewport;

    if item_count == 0 || item_size == 0 {
        return WindowLayout::default();
    }

    let total = total_extent(item_count, item_size);
    let offset = if scroll_offset > total {
        total.saturating_sub(viewport_size)
    } else {
        scroll_offset
    };

    let last_index = item_count - 1;
    let first_visible = (offset / item_size).min(last_index);
    let last_visible = (offset.saturating_add(viewport_size) / item_size).min(last_index);

    let visible = VisibleRange {
        start_index: first_visible,
        stop_index: last_visible,
    };
    let range = VisibleRange {
        start_index: first_visible.saturating_sub(overscan),
        stop_index: last_visible.saturating_add(overscan).min(last_index),
    };

    WindowLayout {
        total_extent: total,
        scroll_offset: offset,
        visible: Some(visible),
        range: Some(range),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn viewport(offset: usize, size: usize, item: usize, overscan: usize) -> Viewport {
        Viewport::new(item, overscan)
            .with_scroll_offset(offset)
            .with_viewport_size(size)
    }

    #[test]
    fn test_empty_collection_has_no_range() {
        let layout = compute_window(0, &viewport(500, 600, 320, 2));
        assert!(layout.is_empty());
        assert_eq!(layout.total_extent, 0);
        assert_eq!(layout.scroll_offset, 0);
    }

    #[test]
    fn test_zero_item_size_is_empty() {
        let layout = compute_window(10, &viewport(0, 600, 0, 2));
        assert!(layout.is_empty());
    }

    #[test]
    fn test_top_of_list() {
        let layout = compute_window(100, &viewport(0, 600, 320, 2));
        assert_eq!(layout.total_extent, 32_000);
        assert_eq!(
            layout.visible,
            Some(VisibleRange {
                start_index: 0,
                stop_index: 1
            })
        );
        assert_eq!(
            layout.range,
            Some(VisibleRange {
                start_index: 0,
                stop_index: 3
            })
        );
    }

    #[test]
    fn test_mid_list_with_overscan() {
        // 29000 / 320 = 90, 29600 / 320 = 92
        let layout = compute_window(100, &viewport(29_000, 600, 320, 2));
        assert_eq!(
            layout.visible,
            Some(VisibleRange {
                start_index: 90,
                stop_index: 92
            })
        );
        assert_eq!(
            layout.range,
            Some(VisibleRange {
                start_index: 88,
                stop_index: 94
            })
        );
        assert_eq!(layout.leading_extent(320), 29_000 - 88 * 320);
    }

    #[test]
    fn test_bottom_clamps_to_last_index() {
        let layout = compute_window(100, &viewport(31_400, 600, 320, 2));
        let range = layout.range.unwrap();
        assert_eq!(range.stop_index, 99);
        assert_eq!(range.start_index, 96);
    }

    #[test]
    fn test_offset_beyond_extent_is_pulled_back() {
        // Collection shrank from 100 to 10 items while scrolled deep.
        let layout = compute_window(10, &viewport(29_000, 600, 320, 0));
        assert_eq!(layout.scroll_offset, 3200 - 600);
        assert_eq!(
            layout.visible,
            Some(VisibleRange {
                start_index: 8,
                stop_index: 9
            })
        );
    }

    #[test]
    fn test_viewport_larger_than_content() {
        let layout = compute_window(3, &viewport(0, 10_000, 320, 2));
        assert_eq!(
            layout.range,
            Some(VisibleRange {
                start_index: 0,
                stop_index: 2
            })
        );
    }

    #[test]
    fn test_max_scroll_offset() {
        assert_eq!(max_scroll_offset(100, 8, 20), 780);
        assert_eq!(max_scroll_offset(2, 8, 20), 0);
    }

    #[test]
    fn test_range_helpers() {
        let range = VisibleRange {
            start_index: 4,
            stop_index: 7,
        };
        assert_eq!(range.count(), 4);
        assert!(range.contains(4));
        assert!(range.contains(7));
        assert!(!range.contains(8));
        assert_eq!(range.indices().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
    }

    proptest! {
        #[test]
        fn prop_range_is_bounded(
            n in 0usize..5_000,
            s in 1usize..500,
            v in 1usize..5_000,
            k in 0usize..8,
            raw_offset in any::<usize>(),
        ) {
            let offset = raw_offset % (n * s + 1);
            let layout = compute_window(n, &viewport(offset, v, s, k));

            prop_assert_eq!(layout.total_extent, n * s);
            match layout.range {
                None => prop_assert_eq!(n, 0),
                Some(range) => {
                    prop_assert!(range.start_index <= range.stop_index);
                    prop_assert!(range.stop_index < n);
                    prop_assert!(range.count() <= v.div_ceil(s) + 2 * k + 1);
                }
            }
        }

        #[test]
        fn prop_identical_inputs_identical_output(
            n in 0usize..5_000,
            s in 1usize..500,
            v in 1usize..5_000,
            k in 0usize..8,
            offset in 0usize..3_000_000,
        ) {
            let vp = viewport(offset, v, s, k);
            prop_assert_eq!(compute_window(n, &vp), compute_window(n, &vp));
        }

        #[test]
        fn prop_visible_inside_rendered(
            n in 1usize..5_000,
            s in 1usize..500,
            v in 1usize..5_000,
            k in 0usize..8,
            offset in 0usize..3_000_000,
        ) {
            let layout = compute_window(n, &viewport(offset, v, s, k));
            let visible = layout.visible.unwrap();
            let range = layout.range.unwrap();
            prop_assert!(range.contains(visible.start_index));
            prop_assert!(range.contains(visible.stop_index));
        }
    }
}
