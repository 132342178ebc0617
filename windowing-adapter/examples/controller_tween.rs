use windowing::{Align, Layout};
use windowing_adapter::{Controller, Easing};

fn main() {
    // Example: controller driving tween scrolling without holding any UI objects.
    //
    // An adapter would:
    // - start a tween (e.g. in response to a "jump to row" command)
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real scroll container (if any)
    // - create/release elements from take_window_diff()
    let mut c = Controller::new(Layout::new(10_000, 1).with_viewport_extent(20));

    let target = c.start_tween_to_index(2_000, Align::Center, 0, 240, Easing::SmoothStep);
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms + 16) {
        now_ms += 16;
        let diff = c.take_window_diff();
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} off={off} window={:?} +{} -{}",
                c.windower().window(),
                diff.entered_len(),
                diff.left_len()
            );
        }
    }

    println!(
        "done: off={} window={:?}",
        c.windower().scroll_offset(),
        c.windower().window()
    );
}
