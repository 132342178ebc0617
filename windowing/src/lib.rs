//! A headless windowing engine for virtualized lists with uniformly sized items.
//!
//! Given a scroll position, a per-item extent, a viewport extent, an item count and an overscan
//! margin, the engine answers one question: which contiguous run of items must be materialized,
//! and where does each of them sit on the scroll axis.
//!
//! - [`compute_window`] and friends are pure functions.
//! - [`Layout`] bundles the parameters and adds scroll-to helpers.
//! - [`Windower`] tracks inputs across scroll events and recomputes only when they change.
//! - [`VirtualList`] binds a borrowed item slice to a layout for rendering.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide the viewport extent and the scroll
//! offset, then position each item at its offset inside a container sized to
//! [`Layout::total_extent`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod layout;
mod list;
mod state;
mod types;
mod window;
mod windower;

#[cfg(test)]
mod tests;

pub use layout::Layout;
pub use list::{Placed, VirtualList};
pub use state::{FrameState, ScrollState};
pub use types::{Align, ScrollDirection, Window, WindowItem};
pub use window::{compute_window, index_at_offset, item_offset, total_extent, visible_range};
pub use windower::{OnChangeCallback, Windower};
