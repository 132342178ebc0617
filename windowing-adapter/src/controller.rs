use windowing::{Align, Layout, Window, Windower};

use crate::{Easing, Navigation, ScrollAnchor, Tween, WindowDiff, apply_anchor};

/// A framework-neutral controller that wraps a [`Windower`] and provides common adapter
/// workflows: tween-driven scrolling, keyboard navigation, anchoring, and window diffs.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_extent` / `on_scroll` / `on_item_count` when UI or data events occur
/// - `tick(now_ms)` each frame/timer tick (for tween scrolling and `is_scrolling` debouncing)
/// - `take_window_diff()` when rendering, to learn which elements to create and release
#[derive(Clone, Debug)]
pub struct Controller {
    w: Windower,
    tween: Option<Tween>,
    selected: Option<usize>,
    presented: Window,
}

impl Controller {
    pub fn new(layout: Layout) -> Self {
        Self::from_windower(Windower::new(layout))
    }

    pub fn from_windower(w: Windower) -> Self {
        Self {
            w,
            tween: None,
            selected: None,
            presented: Window::EMPTY,
        }
    }

    pub fn windower(&self) -> &Windower {
        &self.w
    }

    pub fn windower_mut(&mut self) -> &mut Windower {
        &mut self.w
    }

    pub fn into_windower(self) -> Windower {
        self.w
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_extent(&mut self, viewport_extent: u32) {
        self.w.set_viewport_extent(viewport_extent);
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.cancel_animation();
        self.w.apply_scroll_event(scroll_offset, now_ms);
    }

    /// Call this when the data source grows or shrinks. The selection is clamped to the new
    /// bounds (and cleared for an empty list).
    pub fn on_item_count(&mut self, item_count: usize) {
        self.w.set_item_count(item_count);
        self.selected = self
            .selected
            .and_then(|i| item_count.checked_sub(1).map(|last| i.min(last)));
    }

    /// Advances the controller.
    ///
    /// - If a tween is active, updates the scroll offset and returns it.
    /// - Otherwise, runs `is_scrolling` debouncing and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(tween) = self.tween else {
            self.w.update_scrolling(now_ms);
            return None;
        };

        self.w
            .apply_scroll_event_clamped(tween.sample(now_ms), now_ms);

        if tween.is_done(now_ms) {
            atrace!(to = tween.to, now_ms, "tween finished");
            self.tween = None;
            self.w.set_is_scrolling(false);
        }

        Some(self.w.scroll_offset())
    }

    /// Scrolls to an index immediately (no animation). Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align, now_ms: u64) -> u64 {
        let offset = self.w.scroll_to_index_offset(index, align);
        self.scroll_to_offset(offset, now_ms)
    }

    /// Scrolls to an offset immediately (no animation). Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: u64, now_ms: u64) -> u64 {
        self.cancel_animation();
        self.w.apply_scroll_event_clamped(offset, now_ms);
        self.w.scroll_offset()
    }

    /// Starts a tween to an index. Returns the clamped target offset.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.w.scroll_to_index_offset(index, align);
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween to an offset. Returns the clamped target offset.
    ///
    /// An active tween is retargeted from its current position instead of jumping back.
    pub fn start_tween_to_offset(
        &mut self,
        offset: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.w.clamp_scroll_offset(offset);
        let tween = match self.tween {
            Some(mut tween) => {
                tween.retarget(now_ms, to, duration_ms);
                tween.easing = easing;
                tween
            }
            None => Tween::new(self.w.scroll_offset(), to, now_ms, duration_ms, easing),
        };
        adebug!(from = tween.from, to, duration_ms, "start tween");
        self.tween = Some(tween);
        to
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Sets the selection without scrolling. Out-of-range indexes are clamped.
    pub fn select(&mut self, index: Option<usize>) {
        let last = self.w.item_count().checked_sub(1);
        self.selected = index.zip(last).map(|(i, last)| i.min(last));
    }

    /// Moves the selection and scrolls the minimum amount needed to keep it fully visible.
    ///
    /// Returns the new selection (`None` for an empty list). This cancels any active tween.
    pub fn navigate(&mut self, nav: Navigation, now_ms: u64) -> Option<usize> {
        self.cancel_animation();
        let page = self.w.layout().page_len();
        let target = nav.target(self.selected, self.w.item_count(), page);
        self.selected = target;

        let index = target?;
        atrace!(?nav, index, "navigate");
        let offset = self.w.scroll_to_index_offset(index, Align::Auto);
        if offset != self.w.scroll_offset() {
            self.scroll_to_offset(offset, now_ms);
        }
        Some(index)
    }

    /// Returns what changed since the previous call and records the current window as
    /// presented.
    pub fn take_window_diff(&mut self) -> WindowDiff {
        let current = self.w.window();
        let diff = WindowDiff::new(self.presented, current);
        self.presented = current;
        diff
    }

    pub fn capture_first_visible_anchor<K>(
        &self,
        key_for: impl FnOnce(usize) -> K,
    ) -> Option<ScrollAnchor<K>> {
        crate::capture_first_visible_anchor(&self.w, key_for)
    }

    /// Captures an anchor for the item at a given offset in the viewport.
    ///
    /// For example, `offset_in_viewport = 0` anchors the item at the top of the viewport.
    pub fn capture_anchor_at_offset_in_viewport<K>(
        &self,
        offset_in_viewport: u64,
        key_for: impl FnOnce(usize) -> K,
    ) -> Option<ScrollAnchor<K>> {
        crate::capture_anchor_at_offset_in_viewport(&self.w, offset_in_viewport, key_for)
    }

    /// Applies a previously captured anchor. This cancels any active tween.
    pub fn apply_anchor<K>(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnOnce(&K) -> Option<usize>,
    ) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.w, anchor, key_to_index)
    }
}
