use windowing::Windower;

/// A scroll anchor that preserves visual position across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - any reorder/replace where the viewport should stay on an item identity
///
/// Items are opaque to the windower, so the caller supplies the identity (`key_for`) when
/// capturing and the reverse lookup (`key_to_index`) when applying.
///
/// At most one of `offset_in_item` and `item_top_in_viewport` is non-zero: the first is used
/// when the item straddles the viewport's top edge, the second when it starts below it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's start to the scroll offset.
    pub offset_in_item: u64,
    /// Distance from the scroll offset down to the anchor item's start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub item_top_in_viewport: u64,
}

/// Captures an anchor for the first visible item.
///
/// The current offset is clamped first, so an overscrolled windower still yields an
/// `offset_in_item` inside the item.
///
/// Returns `None` if the list is empty.
pub fn capture_first_visible_anchor<K>(
    w: &Windower,
    key_for: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>> {
    capture_anchor_at_offset_in_viewport(w, 0, key_for)
}

/// Captures an anchor for the item under `offset_in_viewport` (0 is the viewport's top edge).
///
/// Points past the end of the list resolve to the last item. Returns `None` if the list is
/// empty.
pub fn capture_anchor_at_offset_in_viewport<K>(
    w: &Windower,
    offset_in_viewport: u64,
    key_for: impl FnOnce(usize) -> K,
) -> Option<ScrollAnchor<K>> {
    let scroll = w.clamp_scroll_offset(w.scroll_offset());
    let index = w.index_at_offset(scroll.saturating_add(offset_in_viewport))?;
    let start = w.item_offset(index)?;
    Some(ScrollAnchor {
        key: key_for(index),
        offset_in_item: scroll.saturating_sub(start),
        item_top_in_viewport: start.saturating_sub(scroll),
    })
}

/// Re-applies an anchor against the current dataset by adjusting the scroll offset (clamped).
///
/// Returns `false` when the anchored item no longer exists.
pub fn apply_anchor<K>(
    w: &mut Windower,
    anchor: &ScrollAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<usize>,
) -> bool {
    let Some(start) = key_to_index(&anchor.key).and_then(|i| w.item_offset(i)) else {
        return false;
    };
    let target = start
        .saturating_add(anchor.offset_in_item)
        .saturating_sub(anchor.item_top_in_viewport);
    w.set_scroll_offset_clamped(target);
    true
}
