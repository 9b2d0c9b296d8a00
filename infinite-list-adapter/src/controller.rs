use infinite_list::{
    Placement, ScrollOutcome, SpaceHolderKind, Viewport, VirtualizerOptions, VisibilityUpdate,
};

use crate::{
    Claim, ContainerId, ContainerKey, EventHub, EventNamespace, InstanceId, ScrollContainer,
    ScrollEventKind, SubscriptionRegistry, Surface,
};

/// Construction-time configuration of a list: windowing options plus the item renderer.
#[derive(Clone, Debug)]
pub struct ListSettings<F> {
    pub options: VirtualizerOptions,
    /// Produces the renderable representation of one item.
    pub generate_item: F,
}

impl<F> ListSettings<F> {
    pub fn new(options: VirtualizerOptions, generate_item: F) -> Self {
        Self {
            options,
            generate_item,
        }
    }
}

/// Result of [`Controller::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    AlreadyAttached,
    /// Another instance holds the container's scroll subscriptions; this instance stays detached.
    ContainerBusy(InstanceId),
}

/// A framework-neutral controller that wraps an `infinite_list::Virtualizer` bound to one scroll
/// container and applies its decisions to host collaborators.
///
/// This type does not hold any UI objects. Collaborators are passed in per call:
/// - a [`Viewport`] / [`ScrollContainer`] for geometry,
/// - a [`Surface`] to render into,
/// - an [`EventHub`] plus the shared [`SubscriptionRegistry`] for attach/detach.
///
/// The host routes scroll and touch-move notifications for this controller's namespace to
/// [`Self::on_scroll_event`].
#[derive(Debug)]
pub struct Controller<F, C = ContainerId> {
    v: infinite_list::Virtualizer,
    container: C,
    instance: InstanceId,
    namespace: EventNamespace,
    generate_item: F,
}

/// A clone is a separate list instance: it gets a fresh id and namespace and starts detached.
impl<F: Clone, C: ContainerKey + Clone> Clone for Controller<F, C> {
    fn clone(&self) -> Self {
        let mut v = self.v.clone();
        v.detach();
        Self::from_parts(
            v,
            self.container.clone(),
            InstanceId::next(),
            self.generate_item.clone(),
        )
    }
}

impl<F, C: ContainerKey + Clone> Controller<F, C> {
    pub fn new(settings: ListSettings<F>, container: C) -> Self {
        Self::with_instance_id(settings, container, InstanceId::next())
    }

    pub fn with_instance_id(settings: ListSettings<F>, container: C, instance: InstanceId) -> Self {
        let v = infinite_list::Virtualizer::new(settings.options);
        Self::from_parts(v, container, instance, settings.generate_item)
    }

    fn from_parts(
        v: infinite_list::Virtualizer,
        container: C,
        instance: InstanceId,
        generate_item: F,
    ) -> Self {
        Self {
            v,
            container,
            instance,
            namespace: EventNamespace::for_instance(instance),
            generate_item,
        }
    }

    pub fn virtualizer(&self) -> &infinite_list::Virtualizer {
        &self.v
    }

    pub fn virtualizer_mut(&mut self) -> &mut infinite_list::Virtualizer {
        &mut self.v
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance
    }

    pub fn namespace(&self) -> &EventNamespace {
        &self.namespace
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn is_attached(&self) -> bool {
        self.v.is_attached()
    }

    /// Renders the placeholders and every item, then applies the initial visual state.
    ///
    /// `items` should hold exactly `max_items` entries. Missing entries leave their slot
    /// unrendered; extra entries are ignored.
    pub fn populate<T, S>(
        &mut self,
        items: &[T],
        viewport: &impl Viewport,
        surface: &mut S,
    ) -> VisibilityUpdate
    where
        S: Surface,
        F: Fn(&T) -> S::Content,
    {
        if items.len() != self.v.max_items() {
            vwarn!(
                items = items.len(),
                max_items = self.v.max_items(),
                "populate: item count differs from max_items"
            );
        }
        let generate = &self.generate_item;
        let update = self.v.populate(viewport, |placement| match placement {
            Placement::SpaceHolder { kind, height } => surface.append_space_holder(kind, height),
            Placement::Item { index } => {
                if let Some(item) = items.get(index) {
                    surface.append_item(index, generate(item));
                }
            }
        });
        apply_update(surface, &update);
        update
    }

    /// Renders a single item and inserts it next to the placeholder on its side of the central
    /// index. Returns the side used, or `None` when `index` is out of range.
    ///
    /// Hosts that create item nodes lazily use this instead of [`Self::populate`]'s eager
    /// rendering: insert items entering the window in descending order above the center and
    /// ascending order below it.
    pub fn insert_item<T, S>(
        &mut self,
        index: usize,
        item: &T,
        viewport: &impl Viewport,
        surface: &mut S,
    ) -> Option<SpaceHolderKind>
    where
        S: Surface,
        F: Fn(&T) -> S::Content,
    {
        if index >= self.v.max_items() {
            return None;
        }
        let side = self.v.insertion_side(index, viewport);
        vtrace!(index, ?side, "insert_item");
        surface.insert_item(side, index, (self.generate_item)(item));
        Some(side)
    }

    /// Subscribes to scroll and touch-move notifications on the container.
    ///
    /// The registry is consulted first; a container whose handlers belong to another instance is
    /// left untouched.
    pub fn attach<H>(
        &mut self,
        registry: &mut SubscriptionRegistry<C>,
        hub: &mut H,
    ) -> AttachOutcome
    where
        H: EventHub<C> + ?Sized,
    {
        if self.v.is_attached() {
            return AttachOutcome::AlreadyAttached;
        }
        match registry.claim(self.container.clone(), self.instance) {
            Claim::Acquired => {
                for kind in ScrollEventKind::ALL {
                    hub.subscribe(&self.container, &self.namespace, kind);
                }
            }
            Claim::AlreadyHeld => {}
            Claim::HeldBy(owner) => {
                vwarn!(
                    instance = self.instance.get(),
                    owner = owner.get(),
                    "attach: container already has scroll handlers"
                );
                return AttachOutcome::ContainerBusy(owner);
            }
        }
        self.v.attach();
        vdebug!(instance = self.instance.get(), namespace = %self.namespace, "attached");
        AttachOutcome::Attached
    }

    /// Unsubscribes this instance, strips placeholders and collapsed markers from the surface
    /// and resets per-attachment state. Returns `false` if already detached.
    pub fn detach<H, S>(
        &mut self,
        registry: &mut SubscriptionRegistry<C>,
        hub: &mut H,
        surface: &mut S,
    ) -> bool
    where
        H: EventHub<C> + ?Sized,
        S: Surface + ?Sized,
    {
        if !self.v.is_attached() {
            return false;
        }
        hub.unsubscribe(&self.container, &self.namespace);
        registry.release(&self.container, self.instance);
        surface.clear_virtualization();
        self.v.detach();
        vdebug!(instance = self.instance.get(), namespace = %self.namespace, "detached");
        true
    }

    /// Call when the viewport height changes (resize, orientation change).
    pub fn on_height_changed(&mut self) {
        self.v.on_height_changed();
    }

    /// Handles one scroll or touch-move notification delivered by the host.
    pub fn on_scroll_event<S>(
        &mut self,
        kind: ScrollEventKind,
        viewport: &impl Viewport,
        surface: &mut S,
    ) -> ScrollOutcome
    where
        S: Surface + ?Sized,
    {
        let _ = kind;
        let outcome = self.v.on_scroll(viewport);
        if let ScrollOutcome::Applied(update) = &outcome {
            vtrace!(?kind, central = update.central_index, "scroll applied");
            apply_update(surface, update);
        }
        outcome
    }

    /// Forces a recomputation at the current offset and applies it.
    pub fn refresh<S>(&mut self, viewport: &impl Viewport, surface: &mut S) -> VisibilityUpdate
    where
        S: Surface + ?Sized,
    {
        let update = self.v.update_visibility(viewport);
        apply_update(surface, &update);
        update
    }

    /// Scrolls the container so the item's top edge sits `inset` pixels below the viewport top.
    ///
    /// Returns the new scroll position, or `None` when `index` is out of range. The host's
    /// resulting scroll notification drives the visibility update.
    pub fn scroll_to_item(
        &self,
        index: usize,
        inset: u64,
        container: &mut impl ScrollContainer,
    ) -> Option<u64> {
        let offset = self.v.scroll_offset_for_item(index, container, inset)?;
        container.set_scroll_top(i64::try_from(offset).unwrap_or(i64::MAX));
        Some(offset)
    }

    pub fn scroll_to_offset(&self, offset: u64, container: &mut impl ScrollContainer) {
        container.set_scroll_top(i64::try_from(offset).unwrap_or(i64::MAX));
    }
}

/// Pushes a visibility update to a surface: both placeholder heights, then every state change.
pub fn apply_update<S: Surface + ?Sized>(surface: &mut S, update: &VisibilityUpdate) {
    surface.set_space_holder_height(SpaceHolderKind::Top, update.space_holders.top);
    surface.set_space_holder_height(SpaceHolderKind::Bottom, update.space_holders.bottom);
    update.for_each_expanded(|index| surface.set_collapsed(index, false));
    update.for_each_collapsed(|index| surface.set_collapsed(index, true));
}
