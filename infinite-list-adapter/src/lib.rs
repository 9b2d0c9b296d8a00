//! Host plumbing for the `infinite-list` crate.
//!
//! `infinite-list` is UI-agnostic and only does the windowing math and state. This crate adds the
//! framework-neutral pieces a host needs around it:
//!
//! - collaborator traits for the render target ([`Surface`]), scroll subscriptions ([`EventHub`])
//!   and programmatic scrolling ([`ScrollContainer`])
//! - a [`SubscriptionRegistry`] so two lists never double-subscribe one scroll container
//! - a [`Controller`] tying one list instance to its container through populate, attach, scroll
//!   and detach
//! - in-memory collaborators under [`sim`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod instance;
mod key;
mod registry;
pub mod sim;

#[cfg(test)]
mod tests;

pub use controller::{AttachOutcome, Controller, ListSettings, apply_update};
pub use host::{EventHub, ScrollContainer, ScrollEventKind, Surface};
pub use instance::{EventNamespace, InstanceId};
pub use key::{ContainerId, ContainerKey};
pub use registry::{Claim, SubscriptionRegistry};
