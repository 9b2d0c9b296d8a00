use crate::InstanceId;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type OwnerMap<C> = HashMap<C, InstanceId>;
#[cfg(not(feature = "std"))]
pub(crate) type OwnerMap<C> = BTreeMap<C, InstanceId>;

/// Identity of a scroll container as seen by the host.
#[cfg(feature = "std")]
pub trait ContainerKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> ContainerKey for T {}

#[cfg(not(feature = "std"))]
pub trait ContainerKey: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> ContainerKey for T {}

/// A plain numeric container handle, for hosts without a richer identity type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);
