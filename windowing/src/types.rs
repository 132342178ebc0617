use core::ops::{Range, RangeInclusive};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A contiguous run of item indexes that must be materialized.
///
/// Stored half-open (`start_index..end_index`). The inclusive bounds `[start, end]` are available
/// through [`Window::first_index`], [`Window::last_index`] and [`Window::to_inclusive`]; an empty
/// window has neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Builds a window from inclusive bounds.
    pub fn inclusive(start: usize, end: usize) -> Self {
        if start > end {
            return Self::EMPTY;
        }
        Self {
            start_index: start,
            end_index: end.saturating_add(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn first_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start_index)
    }

    pub fn last_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }

    pub fn to_inclusive(&self) -> Option<RangeInclusive<usize>> {
        Some(self.first_index()?..=self.last_index()?)
    }

    pub fn as_range(&self) -> Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        self.start_index..self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn iter(&self) -> Range<usize> {
        self.as_range()
    }

    /// Iterates the items of this window positioned with a uniform `item_extent`.
    pub fn items(&self, item_extent: u32) -> impl Iterator<Item = WindowItem> + use<> {
        self.as_range()
            .map(move |index| WindowItem::at(index, item_extent))
    }
}

impl IntoIterator for Window {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_range()
    }
}

/// One materialized item: its index and where it sits on the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Start offset in the scroll axis (`index * extent`).
    pub offset: u64,
    pub extent: u32,
}

impl WindowItem {
    pub(crate) fn at(index: usize, extent: u32) -> Self {
        let extent = crate::window::effective_extent(extent);
        Self {
            index,
            offset: crate::window::item_offset(index, extent),
            extent,
        }
    }

    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.extent as u64)
    }
}
