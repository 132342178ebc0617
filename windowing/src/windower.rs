use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;
use core::fmt;

use crate::{Align, FrameState, Layout, ScrollDirection, ScrollState, Window, WindowItem};

/// A callback fired when the windower's inputs or scrolling state change.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&Windower, bool) + Send + Sync>;

/// A stateful wrapper around [`crate::compute_window`] that tracks its inputs.
///
/// The window is memoized: it is recomputed lazily, and only after one of the five inputs
/// (scroll offset, item extent, viewport extent, item count, overscan) actually changed.
/// Setters called with the current value are no-ops. Scrolling bookkeeping (`is_scrolling`,
/// direction) notifies observers without invalidating the window.
///
/// The windower holds no UI objects. Your adapter feeds it viewport geometry and scroll offsets
/// and reads back [`Window`]s and [`WindowItem`]s.
#[derive(Clone)]
pub struct Windower {
    layout: Layout,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
    is_scrolling_reset_delay_ms: u64,
    on_change: Option<OnChangeCallback>,

    cached: Cell<Option<Window>>,
    generation: Cell<u64>,
    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Windower {
    pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

    pub fn new(layout: Layout) -> Self {
        wdebug!(
            item_count = layout.item_count,
            item_extent = layout.item_extent,
            viewport_extent = layout.viewport_extent,
            overscan = layout.overscan,
            "Windower::new"
        );
        if layout.item_extent == 0 {
            wwarn!("Windower::new: item_extent is 0, treating it as 1");
        }
        Self {
            layout,
            scroll_offset: 0,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            is_scrolling_reset_delay_ms: Self::DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
            on_change: None,
            cached: Cell::new(None),
            generation: Cell::new(0),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn with_scroll_offset(mut self, scroll_offset: u64) -> Self {
        self.scroll_offset = scroll_offset;
        self.cached.set(None);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: impl Fn(&Windower, bool) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Debounce used by [`Self::update_scrolling`] to reset `is_scrolling`.
    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn set_on_change(&mut self, on_change: impl Fn(&Windower, bool) + Send + Sync + 'static) {
        self.on_change = Some(Arc::new(on_change));
    }

    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.is_scrolling_reset_delay_ms = delay_ms;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn item_count(&self) -> usize {
        self.layout.item_count
    }

    pub fn item_extent(&self) -> u32 {
        self.layout.item_extent
    }

    pub fn viewport_extent(&self) -> u32 {
        self.layout.viewport_extent
    }

    pub fn overscan(&self) -> usize {
        self.layout.overscan
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// Number of times the window has been recomputed.
    ///
    /// Useful for adapters (and tests) that want to confirm unrelated updates did not trigger a
    /// recomputation.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Returns the overscanned window for the current inputs.
    pub fn window(&self) -> Window {
        if let Some(window) = self.cached.get() {
            return window;
        }
        let window = self.layout.window(self.scroll_offset);
        self.cached.set(Some(window));
        self.generation.set(self.generation.get().wrapping_add(1));
        wtrace!(
            scroll_offset = self.scroll_offset,
            start_index = window.start_index,
            end_index = window.end_index,
            "Windower::window recomputed"
        );
        window
    }

    pub fn visible_range(&self) -> Window {
        self.layout.visible_range(self.scroll_offset)
    }

    pub fn total_extent(&self) -> u64 {
        self.layout.total_extent()
    }

    pub fn item(&self, index: usize) -> Option<WindowItem> {
        self.layout.item(index)
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        self.layout.item_offset(index)
    }

    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        self.layout.index_at_offset(offset)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.layout.max_scroll_offset()
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        self.layout.clamp_scroll_offset(offset)
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        self.layout
            .scroll_to_index_offset(index, align, self.scroll_offset)
    }

    /// Programmatically scrolls to an index (no animation).
    ///
    /// This does **not** mark the windower as scrolling. Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    /// Visits every item of the current window in ascending index order.
    pub fn for_each_item(&self, mut f: impl FnMut(WindowItem)) {
        for item in self.window().items(self.layout.item_extent) {
            f(item);
        }
    }

    /// Collects the current window's items into `out` (clears `out` first).
    ///
    /// For hot paths, prefer [`Self::for_each_item`] and reuse a scratch buffer in your adapter.
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        out.reserve(self.window().len());
        self.for_each_item(|item| out.push(item));
    }

    fn invalidate(&self) {
        self.cached.set(None);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A frame typically updates viewport extent, scroll offset and scrolling state together;
    /// batching turns those into one notification, and the window is recomputed at most once
    /// afterwards. Nested batches notify when the outermost one finishes.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.layout == layout {
            return;
        }
        wtrace!(
            item_count = layout.item_count,
            item_extent = layout.item_extent,
            viewport_extent = layout.viewport_extent,
            overscan = layout.overscan,
            "Windower::set_layout"
        );
        self.layout = layout;
        self.invalidate();
    }

    /// Clones the current layout, applies `f`, then delegates to [`Self::set_layout`].
    pub fn update_layout(&mut self, f: impl FnOnce(&mut Layout)) {
        let mut next = self.layout;
        f(&mut next);
        self.set_layout(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        if self.layout.item_count == item_count {
            return;
        }
        self.layout.item_count = item_count;
        self.invalidate();
    }

    pub fn set_item_extent(&mut self, item_extent: u32) {
        if self.layout.item_extent == item_extent {
            return;
        }
        if item_extent == 0 {
            wwarn!("set_item_extent: item_extent is 0, treating it as 1");
        }
        self.layout.item_extent = item_extent;
        self.invalidate();
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) {
        if self.layout.viewport_extent == viewport_extent {
            return;
        }
        self.layout.viewport_extent = viewport_extent;
        self.invalidate();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.layout.overscan == overscan {
            return;
        }
        self.layout.overscan = overscan;
        self.invalidate();
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.invalidate();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_extent: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_extent(viewport_extent);
            w.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_extent: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_extent(viewport_extent);
            w.set_scroll_offset_clamped(scroll_offset);
        });
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    /// Records a scroll event at `now_ms` and marks the windower as scrolling.
    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once no scroll event arrived for the configured delay.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    /// Applies a scroll position update from your UI layer (e.g. wheel/drag) and marks the
    /// windower as scrolling, with a single notification.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_offset(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as [`Self::apply_scroll_event`], but clamps the offset.
    pub fn apply_scroll_event_clamped(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport_extent: self.layout.viewport_extent,
            scroll: self.scroll_state(),
        }
    }

    /// Restores viewport extent + scroll state from a snapshot.
    ///
    /// When `frame.scroll.is_scrolling` is `true`, this updates the scrolling timers as if a
    /// scroll event happened at `now_ms`.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.batch_update(|w| {
            w.set_viewport_extent(frame.viewport_extent);
            w.set_scroll_offset_clamped(frame.scroll.offset);
            if frame.scroll.is_scrolling {
                w.notify_scroll_event(now_ms);
            } else {
                w.set_is_scrolling(false);
            }
        });
    }
}

impl fmt::Debug for Windower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Windower")
            .field("layout", &self.layout)
            .field("scroll_offset", &self.scroll_offset)
            .field("is_scrolling", &self.is_scrolling)
            .field("scroll_direction", &self.scroll_direction)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("generation", &self.generation.get())
            .finish_non_exhaustive()
    }
}
