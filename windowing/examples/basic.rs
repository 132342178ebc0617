// Example: pure window math, then a list bound to real items.
use windowing::{Align, Layout, VirtualList, Windower, compute_window};

fn main() {
    let w = compute_window(500, 50, 300, 100, 2);
    println!("window={:?} inclusive={:?}", w, w.to_inclusive());

    let mut windower = Windower::new(Layout::new(1_000_000, 1).with_viewport_extent(10));
    windower.set_scroll_offset(123_456);
    println!("total_extent={}", windower.total_extent());
    println!("window={:?}", windower.window());

    let off = windower.scroll_to_index_offset(999_999, Align::End);
    windower.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", windower.scroll_offset());

    let names: Vec<String> = (0..200).map(|i| format!("user-{i:03}")).collect();
    let list = VirtualList::new(&names, Layout::new(0, 24).with_viewport_extent(120));
    for placed in list.render(480, |name, index| format!("#{index} {name}")) {
        println!("y={:>5} {}", placed.offset, placed.element);
    }
}
