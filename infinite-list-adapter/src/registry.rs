use crate::key::OwnerMap;
use crate::{ContainerId, ContainerKey, InstanceId};

/// Result of [`SubscriptionRegistry::claim`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Claim {
    /// The container was free; the caller now owns its scroll subscriptions.
    Acquired,
    /// The caller already owns the container.
    AlreadyHeld,
    /// Another instance owns the container's scroll subscriptions.
    HeldBy(InstanceId),
}

/// Maps each scroll container to the list instance whose handlers are subscribed on it.
///
/// Query it before subscribing so two instances never double-subscribe the same container.
/// Owned by whichever component manages container lifecycles.
#[derive(Clone, Debug)]
pub struct SubscriptionRegistry<C = ContainerId> {
    owners: OwnerMap<C>,
}

impl<C: ContainerKey> Default for SubscriptionRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ContainerKey> SubscriptionRegistry<C> {
    pub fn new() -> Self {
        Self {
            owners: OwnerMap::new(),
        }
    }

    pub fn claim(&mut self, container: C, instance: InstanceId) -> Claim {
        match self.owners.get(&container).copied() {
            Some(owner) if owner == instance => Claim::AlreadyHeld,
            Some(owner) => Claim::HeldBy(owner),
            None => {
                self.owners.insert(container, instance);
                Claim::Acquired
            }
        }
    }

    /// Releases `container` if `instance` owns it.
    pub fn release(&mut self, container: &C, instance: InstanceId) -> bool {
        if self.owners.get(container) != Some(&instance) {
            return false;
        }
        self.owners.remove(container);
        true
    }

    /// Releases every container owned by `instance`. Returns how many were released.
    pub fn release_instance(&mut self, instance: InstanceId) -> usize {
        let before = self.owners.len();
        self.owners.retain(|_, owner| *owner != instance);
        before - self.owners.len()
    }

    pub fn owner(&self, container: &C) -> Option<InstanceId> {
        self.owners.get(container).copied()
    }

    pub fn is_claimed(&self, container: &C) -> bool {
        self.owners.contains_key(container)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
