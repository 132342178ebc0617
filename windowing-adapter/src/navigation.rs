/// Keyboard-style selection movement over a windowed list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Navigation {
    Previous,
    Next,
    PageUp,
    PageDown,
    First,
    Last,
}

impl Navigation {
    /// Resolves the index this command moves the selection to.
    ///
    /// A stale `current` (past the end after the list shrank) is clamped first. Without a
    /// selection, forward commands land on the first item and backward commands on the last.
    /// Returns `None` only for an empty list. `page_len` is treated as at least 1.
    pub fn target(
        self,
        current: Option<usize>,
        item_count: usize,
        page_len: usize,
    ) -> Option<usize> {
        let last = item_count.checked_sub(1)?;
        let page = page_len.max(1);
        let Some(current) = current.map(|i| i.min(last)) else {
            return Some(match self {
                Self::Next | Self::PageDown | Self::First => 0,
                Self::Previous | Self::PageUp | Self::Last => last,
            });
        };

        let next = match self {
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::PageUp => current.saturating_sub(page),
            Self::PageDown => current.saturating_add(page),
            Self::First => 0,
            Self::Last => last,
        };
        Some(next.min(last))
    }
}
