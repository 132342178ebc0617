use crate::window::{self, effective_extent};
use crate::{Align, Window, WindowItem};

/// Layout parameters for a uniformly sized list.
///
/// This is a plain value: cheap to copy and compare. [`crate::Windower`] uses equality on these
/// fields to decide whether its cached window is still valid.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Layout {
    pub item_count: usize,
    /// Size of every item in the scroll axis (e.g. row height for vertical lists).
    pub item_extent: u32,
    /// Size of the visible scrolling area in the scroll axis.
    pub viewport_extent: u32,
    /// Extra items materialized beyond each edge of the visible range.
    pub overscan: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            item_count: 0,
            item_extent: 1,
            viewport_extent: 0,
            overscan: Self::DEFAULT_OVERSCAN,
        }
    }
}

impl Layout {
    pub const DEFAULT_OVERSCAN: usize = 5;

    /// Creates a layout with no viewport yet and the default overscan.
    pub fn new(item_count: usize, item_extent: u32) -> Self {
        Self {
            item_count,
            item_extent,
            ..Self::default()
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_viewport_extent(mut self, viewport_extent: u32) -> Self {
        self.viewport_extent = viewport_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// The overscanned window for `scroll_offset`.
    pub fn window(&self, scroll_offset: u64) -> Window {
        window::compute_window(
            scroll_offset,
            self.item_extent,
            self.viewport_extent,
            self.item_count,
            self.overscan,
        )
    }

    /// The strictly visible range for `scroll_offset` (no overscan).
    pub fn visible_range(&self, scroll_offset: u64) -> Window {
        window::visible_range(
            scroll_offset,
            self.item_extent,
            self.viewport_extent,
            self.item_count,
        )
    }

    pub fn total_extent(&self) -> u64 {
        window::total_extent(self.item_count, self.item_extent)
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        (index < self.item_count).then(|| window::item_offset(index, self.item_extent))
    }

    pub fn item(&self, index: usize) -> Option<WindowItem> {
        (index < self.item_count).then(|| WindowItem::at(index, self.item_extent))
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        window::index_at_offset(offset, self.item_extent, self.item_count)
    }

    /// Number of items that fit entirely inside the viewport (at least one).
    pub fn page_len(&self) -> usize {
        let per_page = self.viewport_extent / effective_extent(self.item_extent);
        usize::try_from(per_page).unwrap_or(usize::MAX).max(1)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_extent()
            .saturating_sub(self.viewport_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Computes the scroll offset that brings `index` into view.
    ///
    /// `index` is clamped to the last item. `current_offset` only matters for [`Align::Auto`],
    /// which keeps it when the item is already fully visible. The result is clamped to
    /// `[0, max_scroll_offset]`.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align, current_offset: u64) -> u64 {
        if self.item_count == 0 {
            return 0;
        }
        let item = WindowItem::at(index.min(self.item_count - 1), self.item_extent);
        let view = self.viewport_extent as u64;

        let target = match align {
            Align::Start => item.offset,
            Align::End => item.end().saturating_sub(view),
            Align::Center => {
                let center = item.offset.saturating_add(item.extent as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let view_end = current_offset.saturating_add(view);
                if item.offset >= current_offset && item.end() <= view_end {
                    current_offset
                } else if item.offset < current_offset {
                    item.offset
                } else {
                    item.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }
}
