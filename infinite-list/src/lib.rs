//! A headless windowing engine for long, conceptually infinite lists of uniform-height items
//! (e.g. calendar months in a date picker).
//!
//! For host plumbing (surfaces, scroll subscriptions, lifecycle), see the `infinite-list-adapter`
//! crate.
//!
//! Given a scroll position, the engine decides:
//! - which item sits at the vertical center of the viewport (the central index);
//! - which items are live: the central item plus `preload_items` on each side;
//! - how tall the top and bottom placeholders must be so that the scrollable extent stays at
//!   `max_items * item_height` regardless of which items are expanded.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - viewport geometry through the [`Viewport`] trait
//! - scroll notifications
//! - a way to apply [`VisibilityUpdate`]s (placeholder heights, collapsed markers)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod state;
mod types;
mod viewport;
mod virtualizer;
mod window;


pub use options::{
    DEFAULT_ITEM_HEIGHT, DEFAULT_PRELOAD_ITEMS, InitialOffset, OnChangeCallback,
    VirtualizerOptions,
};
pub use state::{ListState, ScrollState};
pub use types::{
    IndexRange, ItemState, Placement, ScrollOutcome, SpaceHolderKind, SpaceHolders,
    VisibilityUpdate,
};
pub use viewport::{Viewport, ViewportMetrics, is_scrolled_to_bottom, is_scrolled_to_top};
pub use virtualizer::Virtualizer;
