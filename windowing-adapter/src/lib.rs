//! Adapter utilities for the `windowing` crate.
//!
//! The `windowing` crate is UI-agnostic and focuses on the window math and input tracking. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] that turns scroll, resize and key events into windower updates
//! - Tween-based smooth scrolling (adapter-driven clock)
//! - Keyboard-style [`Navigation`] with scroll-into-view
//! - [`WindowDiff`] to create/release elements as indexes enter and leave the window
//! - Scroll anchoring (e.g. prepend in chat/timelines without visual jumps)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod diff;
mod navigation;
mod tween;


pub use anchor::{
    ScrollAnchor, apply_anchor, capture_anchor_at_offset_in_viewport,
    capture_first_visible_anchor,
};
pub use controller::Controller;
pub use diff::WindowDiff;
pub use navigation::Navigation;
pub use tween::{Easing, Tween};
