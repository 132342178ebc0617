use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

/// Brute force: every index whose extent overlaps `[scroll, scroll + viewport)`.
fn expected_intersecting(
    scroll_offset: u64,
    item_extent: u32,
    viewport_extent: u32,
    item_count: usize,
) -> Vec<usize> {
    let e = item_extent as u64;
    let view_end = scroll_offset + viewport_extent as u64;
    (0..item_count)
        .filter(|&i| {
            let start = i as u64 * e;
            let end = start + e;
            start < view_end && end > scroll_offset
        })
        .collect()
}

fn counter() -> (Arc<AtomicUsize>, impl Fn(&Windower, bool) + Send + Sync + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let cb = {
        let calls = Arc::clone(&calls);
        move |_: &Windower, _: bool| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    };
    (calls, cb)
}

#[test]
fn reference_example_window_and_visible_range() {
    let w = compute_window(500, 50, 300, 100, 2);
    assert_eq!(w.to_inclusive(), Some(8..=18));
    assert_eq!(w.first_index(), Some(8));
    assert_eq!(w.last_index(), Some(18));
    assert_eq!(w.len(), 11);

    let v = visible_range(500, 50, 300, 100);
    assert_eq!(v.to_inclusive(), Some(10..=16));
}

#[test]
fn empty_sequence_yields_empty_window() {
    for scroll in [0u64, 1, 49, 500, u64::MAX] {
        for overscan in [0usize, 5, usize::MAX] {
            let w = compute_window(scroll, 50, 300, 0, overscan);
            assert!(w.is_empty());
            assert_eq!(w.first_index(), None);
            assert_eq!(w.to_inclusive(), None);
            assert_eq!(w.iter().count(), 0);
        }
    }
}

#[test]
fn overscan_is_clamped_on_the_leading_side_only() {
    // Top of the list: nothing above index 0, full margin below.
    let w = compute_window(0, 10, 30, 100, 5);
    assert_eq!(w.to_inclusive(), Some(0..=8));

    // Bottom of the list: full margin above, nothing past the last index.
    let w = compute_window(970, 10, 30, 100, 5);
    assert_eq!(w.to_inclusive(), Some(92..=99));
}

#[test]
fn overscrolled_offset_pins_to_last_item() {
    let w = compute_window(10_000, 10, 30, 10, 2);
    assert_eq!(w.to_inclusive(), Some(7..=9));

    let w = compute_window(u64::MAX, 1, u32::MAX, 3, usize::MAX);
    assert_eq!(w.to_inclusive(), Some(0..=2));
}

#[test]
fn zero_viewport_still_materializes_the_item_under_the_offset() {
    let w = compute_window(55, 10, 0, 100, 0);
    assert_eq!(w.to_inclusive(), Some(5..=5));
}

#[test]
fn zero_item_extent_is_treated_as_one() {
    let w = compute_window(3, 0, 2, 10, 0);
    assert_eq!(w.to_inclusive(), Some(3..=5));
    assert_eq!(total_extent(10, 0), 10);
    assert_eq!(item_offset(4, 0), 4);
}

#[test]
fn property_random_window_invariants() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..2_000 {
        let item_count = rng.gen_range_usize(0, 200);
        let item_extent = rng.gen_range_u32(1, 40);
        let viewport_extent = rng.gen_range_u32(0, 500);
        let overscan = rng.gen_range_usize(0, 8);
        let total = total_extent(item_count, item_extent);
        let scroll = rng.gen_range_u64(0, total + 200);

        let w = compute_window(scroll, item_extent, viewport_extent, item_count, overscan);
        assert_eq!(
            w,
            compute_window(scroll, item_extent, viewport_extent, item_count, overscan),
            "pure function must be idempotent"
        );

        if item_count == 0 {
            assert!(w.is_empty());
            continue;
        }

        let (start, end) = (w.start_index, w.end_index - 1);
        assert!(start <= end);
        assert!(end < item_count);

        for i in expected_intersecting(scroll, item_extent, viewport_extent, item_count) {
            assert!(
                w.contains(i),
                "index {i} intersects the viewport but is outside {w:?} \
                 (scroll={scroll}, extent={item_extent}, view={viewport_extent}, n={item_count})"
            );
        }

        let visible = visible_range(scroll, item_extent, viewport_extent, item_count);
        let vis_first = visible.first_index().unwrap();
        let vis_last = visible.last_index().unwrap();
        assert_eq!(start, vis_first.saturating_sub(overscan));
        assert_eq!(end, (vis_last + overscan).min(item_count - 1));

        let step = rng.gen_range_u64(0, 300);
        let later = compute_window(
            scroll + step,
            item_extent,
            viewport_extent,
            item_count,
            overscan,
        );
        assert!(later.start_index >= w.start_index);
        assert!(later.end_index >= w.end_index);
    }
}

#[test]
fn sweeping_scroll_never_moves_window_backwards() {
    let layout = Layout::new(1_000, 17).with_viewport_extent(233);
    let mut prev = layout.window(0);
    let mut scroll = 0u64;
    while scroll <= layout.total_extent() + 100 {
        let next = layout.window(scroll);
        assert!(next.start_index >= prev.start_index);
        assert!(next.end_index >= prev.end_index);
        prev = next;
        scroll += 7;
    }
    assert_eq!(prev.last_index(), Some(999));
}

#[test]
fn layout_defaults_and_geometry() {
    let layout = Layout::default();
    assert_eq!(layout.overscan, Layout::DEFAULT_OVERSCAN);
    assert_eq!(layout.overscan, 5);
    assert!(layout.window(0).is_empty());

    let layout = Layout::new(100, 50).with_viewport_extent(300);
    assert_eq!(layout.total_extent(), 5_000);
    assert_eq!(layout.item_offset(3), Some(150));
    assert_eq!(layout.item_offset(100), None);
    assert_eq!(
        layout.item(3),
        Some(WindowItem {
            index: 3,
            offset: 150,
            extent: 50
        })
    );
    assert_eq!(layout.item(3).map(|it| it.end()), Some(200));
    assert_eq!(layout.max_scroll_offset(), 4_700);
    assert_eq!(layout.clamp_scroll_offset(9_999), 4_700);
    assert_eq!(layout.page_len(), 6);
    assert_eq!(Layout::new(10, 50).page_len(), 1);
}

#[test]
fn index_at_offset_clamps_to_last_item() {
    let layout = Layout::new(10, 10);
    assert_eq!(layout.index_at_offset(0), Some(0));
    assert_eq!(layout.index_at_offset(9), Some(0));
    assert_eq!(layout.index_at_offset(10), Some(1));
    assert_eq!(layout.index_at_offset(10_000), Some(9));
    assert_eq!(Layout::new(0, 10).index_at_offset(0), None);
}

#[test]
fn scroll_to_index_offset_alignments() {
    let layout = Layout::new(100, 10).with_viewport_extent(50);
    assert_eq!(layout.scroll_to_index_offset(20, Align::Start, 0), 200);
    assert_eq!(layout.scroll_to_index_offset(20, Align::End, 0), 160);
    assert_eq!(layout.scroll_to_index_offset(20, Align::Center, 0), 180);

    // Viewport covers [180, 230): item 20 is fully visible.
    assert_eq!(layout.scroll_to_index_offset(20, Align::Auto, 180), 180);
    assert_eq!(layout.scroll_to_index_offset(10, Align::Auto, 180), 100);
    assert_eq!(layout.scroll_to_index_offset(40, Align::Auto, 180), 360);

    // Clamped to max_scroll_offset and to the last index.
    assert_eq!(layout.scroll_to_index_offset(99, Align::Start, 0), 950);
    assert_eq!(layout.scroll_to_index_offset(500, Align::Start, 0), 950);
    assert_eq!(Layout::new(0, 10).scroll_to_index_offset(3, Align::Start, 0), 0);
}

#[test]
fn window_inclusive_bounds_and_iteration() {
    assert!(Window::inclusive(3, 1).is_empty());
    assert_eq!(Window::inclusive(3, 1), Window::EMPTY);

    let w = Window::inclusive(2, 4);
    assert_eq!(w.len(), 3);
    assert!(w.contains(4));
    assert!(!w.contains(5));
    assert!(!w.contains(1));
    assert_eq!(w.into_iter().collect::<Vec<_>>(), [2, 3, 4]);

    let offsets: Vec<u64> = w.items(25).map(|it| it.offset).collect();
    assert_eq!(offsets, [50, 75, 100]);
}

#[test]
fn windower_recomputes_only_when_inputs_change() {
    let mut w = Windower::new(Layout::new(100, 10).with_viewport_extent(50));
    assert_eq!(w.generation(), 0);

    let first = w.window();
    assert_eq!(w.generation(), 1);
    assert_eq!(w.window(), first);
    assert_eq!(w.generation(), 1);

    // Same values and unrelated state do not invalidate.
    w.set_scroll_offset(0);
    w.set_overscan(Layout::DEFAULT_OVERSCAN);
    w.set_viewport_extent(50);
    w.set_is_scrolling(true);
    w.notify_scroll_event(10);
    assert_eq!(w.window(), first);
    assert_eq!(w.generation(), 1);

    w.set_scroll_offset(200);
    assert_eq!(w.window().to_inclusive(), Some(15..=30));
    assert_eq!(w.generation(), 2);

    w.set_overscan(1);
    w.set_item_count(25);
    w.set_item_extent(10);
    assert_eq!(w.window().to_inclusive(), Some(19..=24));
    assert_eq!(w.generation(), 3);
}

#[test]
fn no_op_setters_do_not_notify() {
    let (calls, cb) = counter();
    let mut w = Windower::new(Layout::new(10, 2).with_viewport_extent(4)).with_on_change(cb);

    w.set_scroll_offset(0);
    w.set_item_count(10);
    w.set_item_extent(2);
    w.set_viewport_extent(4);
    w.set_overscan(Layout::DEFAULT_OVERSCAN);
    w.set_layout(*w.layout());
    w.set_is_scrolling(false);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    w.set_scroll_offset(3);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let (calls, cb) = counter();
    let mut w = Windower::new(Layout::new(100, 1)).with_on_change(cb);

    w.apply_scroll_event(10, 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    w.batch_update(|w| {
        w.set_viewport_extent(20);
        w.batch_update(|w| {
            w.set_scroll_offset(30);
            w.set_overscan(0);
        });
        w.set_item_count(200);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(w.window().to_inclusive(), Some(30..=50));

    // A batch that changes nothing does not notify.
    w.batch_update(|w| w.set_scroll_offset(30));
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn on_change_observes_the_fresh_window() {
    let seen_start = Arc::new(AtomicUsize::new(usize::MAX));
    let layout = Layout::new(100, 10)
        .with_viewport_extent(30)
        .with_overscan(0);
    let mut w = Windower::new(layout).with_on_change({
        let seen_start = Arc::clone(&seen_start);
        move |w: &Windower, _| {
            seen_start.store(w.window().start_index, Ordering::Relaxed);
        }
    });

    w.set_scroll_offset(420);
    assert_eq!(seen_start.load(Ordering::Relaxed), 42);
    w.set_viewport_and_scroll(30, 100);
    assert_eq!(seen_start.load(Ordering::Relaxed), 10);
}

#[test]
fn clear_on_change_stops_notifications() {
    let (calls, cb) = counter();
    let mut w = Windower::new(Layout::new(100, 1));
    w.set_on_change(cb);
    w.set_scroll_offset(1);
    w.clear_on_change();
    w.set_scroll_offset(2);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn windower_items_carry_offsets() {
    let layout = Layout::new(100, 50)
        .with_viewport_extent(300)
        .with_overscan(2);
    let mut w = Windower::new(layout);
    w.set_scroll_offset(500);

    let mut items = Vec::new();
    w.collect_items(&mut items);
    assert_eq!(items.len(), 11);
    assert_eq!(items.first().map(|it| it.index), Some(8));
    assert_eq!(items.last().map(|it| it.index), Some(18));
    for it in &items {
        assert_eq!(it.offset, it.index as u64 * 50);
        assert_eq!(it.extent, 50);
    }
    assert_eq!(w.total_extent(), 5_000);
}

#[test]
fn is_scrolling_resets_after_delay() {
    let mut w = Windower::new(Layout::new(100, 1)).with_is_scrolling_reset_delay_ms(150);
    w.apply_scroll_event(10, 0);
    assert!(w.is_scrolling());
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));

    w.update_scrolling(100);
    assert!(w.is_scrolling());
    w.update_scrolling(150);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), None);
}

#[test]
fn scroll_direction_follows_offset_changes() {
    let mut w = Windower::new(Layout::new(100, 1).with_viewport_extent(10));
    w.set_scroll_offset(10);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));
    w.set_scroll_offset(5);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));
    w.set_scroll_offset(5);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn clamped_setters_respect_max_scroll_offset() {
    let mut w = Windower::new(Layout::new(10, 10).with_viewport_extent(30));
    w.set_scroll_offset_clamped(1_000);
    assert_eq!(w.scroll_offset(), 70);

    w.apply_scroll_event_clamped(5_000, 0);
    assert_eq!(w.scroll_offset(), 70);
    assert!(w.is_scrolling());

    w.set_viewport_and_scroll_clamped(100, 1_000);
    assert_eq!(w.scroll_offset(), 0);
}

#[test]
fn scroll_to_index_sets_offset_without_scrolling() {
    let mut w = Windower::new(Layout::new(100, 10).with_viewport_extent(50));
    let off = w.scroll_to_index(30, Align::Start);
    assert_eq!(off, 300);
    assert_eq!(w.scroll_offset(), 300);
    assert!(!w.is_scrolling());
    assert_eq!(w.visible_range().first_index(), Some(30));
}

#[test]
fn frame_state_can_roundtrip() {
    let mut a = Windower::new(Layout::new(1_000, 4));
    a.set_viewport_extent(40);
    a.apply_scroll_event(120, 7);
    let frame = a.frame_state();
    assert_eq!(frame.viewport_extent, 40);
    assert_eq!(
        frame.scroll,
        ScrollState {
            offset: 120,
            is_scrolling: true
        }
    );

    let mut b = Windower::new(Layout::new(1_000, 4));
    b.restore_frame_state(frame, 7);
    assert_eq!(b.frame_state(), frame);
    assert_eq!(b.window(), a.window());

    b.restore_frame_state(FrameState::default(), 8);
    assert!(!b.is_scrolling());
    assert_eq!(b.scroll_offset(), 0);
}

#[test]
fn update_layout_rebuilds_once() {
    let (calls, cb) = counter();
    let mut w = Windower::new(Layout::new(10, 1)).with_on_change(cb);
    w.update_layout(|l| {
        l.item_count = 50;
        l.viewport_extent = 5;
        l.overscan = 0;
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(w.window().to_inclusive(), Some(0..=5));
}

#[test]
fn virtual_list_renders_window_with_placements() {
    let rows: Vec<String> = (0..100).map(|i| format!("row {i}")).collect();
    let layout = Layout::new(0, 50)
        .with_viewport_extent(300)
        .with_overscan(2);
    let list = VirtualList::new(&rows, layout);
    assert_eq!(list.layout().item_count, 100);
    assert_eq!(list.total_extent(), 5_000);

    let rendered = list.render(500, |row, index| format!("{index}: {row}"));
    assert_eq!(rendered.len(), 11);
    assert_eq!(rendered[0].index, 8);
    assert_eq!(rendered[0].offset, 400);
    assert_eq!(rendered[0].element, "8: row 8");
    assert_eq!(rendered[10].index, 18);
    assert_eq!(rendered[10].offset, 900);
}

#[test]
fn virtual_list_over_empty_slice_renders_nothing() {
    let rows: [u8; 0] = [];
    let list = VirtualList::new(&rows, Layout::new(0, 10).with_viewport_extent(100));
    let mut called = 0usize;
    list.for_each_visible(0, |_, _| called += 1);
    assert_eq!(called, 0);
    assert!(list.render(1_000, |_, _| ()).is_empty());
}

#[test]
fn example_basic_smoke_large_count() {
    let mut w = Windower::new(Layout::new(1_000_000, 1).with_viewport_extent(10));
    w.set_scroll_offset(123_456);
    let mut items = Vec::new();
    w.for_each_item(|it| items.push(it));
    assert_eq!(items.len(), 10 + 1 + 2 * Layout::DEFAULT_OVERSCAN);
    assert_eq!(items.first().map(|it| it.index), Some(123_451));

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    assert_eq!(w.scroll_offset(), 999_990);
}
