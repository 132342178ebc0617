// Example: keyboard navigation with scroll-into-view and anchoring across a prepend.
use windowing::Layout;
use windowing_adapter::{Controller, Navigation};

fn main() {
    let mut c = Controller::new(Layout::new(500, 20).with_viewport_extent(200));

    let keys = [
        Navigation::Next,
        Navigation::PageDown,
        Navigation::PageDown,
        Navigation::Next,
        Navigation::Last,
        Navigation::PageUp,
        Navigation::First,
    ];
    for (tick, nav) in keys.into_iter().enumerate() {
        let selected = c.navigate(nav, tick as u64 * 100);
        println!(
            "{nav:?}: selected={selected:?} offset={} visible={:?}",
            c.windower().scroll_offset(),
            c.windower().visible_range()
        );
    }

    // Older rows arrive above: keep the same row at the top.
    c.scroll_to_index(42, windowing::Align::Start, 1_000);
    let anchor = c
        .capture_first_visible_anchor(|i| format!("row-{i}"))
        .expect("non-empty list");
    c.on_item_count(550);
    let restored = c.apply_anchor(&anchor, |key| {
        key.strip_prefix("row-")
            .and_then(|n| n.parse::<usize>().ok())
            .map(|i| i + 50)
    });
    println!(
        "anchor={anchor:?} restored={restored} offset={}",
        c.windower().scroll_offset()
    );
}
