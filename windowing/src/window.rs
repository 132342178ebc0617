//! Pure window math for uniformly sized items.
//!
//! Every function here is a plain function of its arguments: no caching, no hidden state. The
//! stateful [`crate::Windower`] and [`crate::Layout`] both delegate to these.

use crate::Window;

/// The extent actually used for layout. A zero extent is a caller bug; it is treated as `1` so
/// the division below stays defined.
pub(crate) fn effective_extent(item_extent: u32) -> u32 {
    item_extent.max(1)
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// Computes the overscanned window for a scroll position.
///
/// The window covers every item intersecting `[scroll_offset, scroll_offset + viewport_extent)`
/// plus up to `overscan` items on each side, clamped to `[0, item_count - 1]`. Near either end
/// of the sequence the margin is cut on that side only.
///
/// Returns [`Window::EMPTY`] when `item_count == 0`.
///
/// ```
/// let w = windowing::compute_window(500, 50, 300, 100, 2);
/// assert_eq!(w.to_inclusive(), Some(8..=18));
/// ```
pub fn compute_window(
    scroll_offset: u64,
    item_extent: u32,
    viewport_extent: u32,
    item_count: usize,
    overscan: usize,
) -> Window {
    let visible = visible_range(scroll_offset, item_extent, viewport_extent, item_count);
    let Some(last_visible) = visible.last_index() else {
        return Window::EMPTY;
    };

    let last_index = item_count - 1;
    let start = visible.start_index.saturating_sub(overscan);
    let end = last_visible.saturating_add(overscan).min(last_index);
    Window::inclusive(start, end)
}

/// Computes the strictly visible range (no overscan).
///
/// `last_visible` is `first_visible + ceil(viewport_extent / item_extent)`, so an item starting
/// exactly at the viewport's trailing edge is counted as visible.
pub fn visible_range(
    scroll_offset: u64,
    item_extent: u32,
    viewport_extent: u32,
    item_count: usize,
) -> Window {
    if item_count == 0 {
        return Window::EMPTY;
    }

    let extent = effective_extent(item_extent) as u64;
    let last_index = item_count - 1;

    // Overscrolled offsets pin to the last item instead of producing an inverted range.
    let first_visible = to_index(scroll_offset / extent).min(last_index);
    let span = to_index((viewport_extent as u64).div_ceil(extent));
    let last_visible = first_visible.saturating_add(span).min(last_index);

    Window::inclusive(first_visible, last_visible)
}

/// Total scrollable extent: `item_count * item_extent`.
pub fn total_extent(item_count: usize, item_extent: u32) -> u64 {
    (item_count as u64).saturating_mul(effective_extent(item_extent) as u64)
}

/// Start offset of `index`: `index * item_extent`.
pub fn item_offset(index: usize, item_extent: u32) -> u64 {
    (index as u64).saturating_mul(effective_extent(item_extent) as u64)
}

/// Maps an offset in the scroll axis to the item covering it, clamped to the last item.
pub fn index_at_offset(offset: u64, item_extent: u32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let extent = effective_extent(item_extent) as u64;
    Some(to_index(offset / extent).min(item_count - 1))
}
