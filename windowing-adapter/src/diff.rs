use core::ops::Range;

use windowing::Window;

/// What changed between the window a presentation layer last rendered and the current one.
///
/// Both windows are contiguous, so each side of the difference is at most two runs: one before
/// and one after the overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowDiff {
    pub previous: Window,
    pub current: Window,
}

impl WindowDiff {
    pub fn new(previous: Window, current: Window) -> Self {
        Self { previous, current }
    }

    pub fn is_unchanged(&self) -> bool {
        self.previous.as_range() == self.current.as_range()
    }

    /// Runs of indexes that need a new element.
    pub fn entered(&self) -> [Range<usize>; 2] {
        difference(self.current, self.previous)
    }

    /// Runs of indexes whose element can be released.
    pub fn left(&self) -> [Range<usize>; 2] {
        difference(self.previous, self.current)
    }

    pub fn entered_len(&self) -> usize {
        self.entered().iter().map(|r| r.len()).sum()
    }

    pub fn left_len(&self) -> usize {
        self.left().iter().map(|r| r.len()).sum()
    }

    pub fn for_each_entered(&self, f: impl FnMut(usize)) {
        self.entered().into_iter().flatten().for_each(f);
    }

    pub fn for_each_left(&self, f: impl FnMut(usize)) {
        self.left().into_iter().flatten().for_each(f);
    }
}

/// `a \ b` as (before, after) runs; empty runs are `0..0`.
fn difference(a: Window, b: Window) -> [Range<usize>; 2] {
    let a = a.as_range();
    let b = b.as_range();
    if b.is_empty() {
        return [a, 0..0];
    }
    let before = a.start..a.end.min(b.start);
    let after = a.start.max(b.end)..a.end;
    [non_empty(before), non_empty(after)]
}

fn non_empty(r: Range<usize>) -> Range<usize> {
    if r.is_empty() { 0..0 } else { r }
}
