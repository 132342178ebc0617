// Example: an event loop feeding scroll positions; the window is recomputed only on change.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use windowing::{Layout, Windower};

fn main() {
    let renders = Arc::new(AtomicUsize::new(0));
    let layout = Layout::new(10_000, 18).with_viewport_extent(540);
    let mut w = Windower::new(layout).with_on_change({
        let renders = Arc::clone(&renders);
        move |w: &Windower, is_scrolling| {
            renders.fetch_add(1, Ordering::Relaxed);
            println!(
                "render window={:?} scrolling={is_scrolling} generation={}",
                w.window(),
                w.generation()
            );
        }
    });

    // Simulated wheel events, including duplicates the host did not coalesce.
    let events = [(0u64, 0u64), (36, 16), (36, 32), (90, 48), (90, 64), (400, 80)];
    for (offset, now_ms) in events {
        w.apply_scroll_event_clamped(offset, now_ms);
    }

    // Let the debounce settle.
    w.update_scrolling(80 + Windower::DEFAULT_IS_SCROLLING_RESET_DELAY_MS);
    println!(
        "notifications={} recomputations={}",
        renders.load(Ordering::Relaxed),
        w.generation()
    );
}
