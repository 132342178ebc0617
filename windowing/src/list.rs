use alloc::vec::Vec;

use crate::{Layout, Window, WindowItem};

/// A rendered element together with where the presentation layer should place it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placed<R> {
    pub index: usize,
    /// Absolute start offset in the scroll axis.
    pub offset: u64,
    pub element: R,
}

/// Binds a borrowed item slice to a [`Layout`].
///
/// The slice's length is the item count; any `item_count` already set on the layout is
/// overridden. Items are passed to render callbacks by reference with their index, so the
/// callback is typed against `T` rather than an opaque value.
#[derive(Debug)]
pub struct VirtualList<'a, T> {
    items: &'a [T],
    layout: Layout,
}

impl<T> Clone for VirtualList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VirtualList<'_, T> {}

impl<'a, T> VirtualList<'a, T> {
    pub fn new(items: &'a [T], layout: Layout) -> Self {
        Self {
            items,
            layout: layout.with_item_count(items.len()),
        }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn window(&self, scroll_offset: u64) -> Window {
        self.layout.window(scroll_offset)
    }

    pub fn total_extent(&self) -> u64 {
        self.layout.total_extent()
    }

    /// Visits each item of the window for `scroll_offset` with its placement.
    pub fn for_each_visible(&self, scroll_offset: u64, mut f: impl FnMut(&'a T, WindowItem)) {
        let window = self.window(scroll_offset);
        for placed in window.items(self.layout.item_extent) {
            if let Some(item) = self.items.get(placed.index) {
                f(item, placed);
            }
        }
    }

    /// Renders the window for `scroll_offset` with `render(item, index)`.
    pub fn render<R>(
        &self,
        scroll_offset: u64,
        mut render: impl FnMut(&'a T, usize) -> R,
    ) -> Vec<Placed<R>> {
        let mut out = Vec::with_capacity(self.window(scroll_offset).len());
        self.for_each_visible(scroll_offset, |item, placed| {
            out.push(Placed {
                index: placed.index,
                offset: placed.offset,
                element: render(item, placed.index),
            });
        });
        out
    }
}
