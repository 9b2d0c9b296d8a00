use crate::sim::{SimEventHub, SimNode, SimSurface, SimViewport};
use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use infinite_list::{IndexRange, ScrollOutcome, SpaceHolderKind, VirtualizerOptions};

type Label = fn(&u32) -> String;

fn label(month: &u32) -> String {
    format!("month-{month}")
}

const CONTAINER: ContainerId = ContainerId(1);

fn months() -> Vec<u32> {
    (0..24).collect()
}

fn controller(initial_offset: u64) -> Controller<Label> {
    let options = VirtualizerOptions::new(24)
        .with_item_height(200)
        .with_preload_items(3)
        .with_initial_offset_value(initial_offset);
    Controller::new(ListSettings::new(options, label as Label), CONTAINER)
}

fn viewport() -> SimViewport {
    SimViewport::new(400, 24 * 200)
}

struct Host {
    viewport: SimViewport,
    surface: SimSurface<String>,
    registry: SubscriptionRegistry,
    hub: SimEventHub<ContainerId>,
}

impl Host {
    fn new() -> Self {
        Self {
            viewport: viewport(),
            surface: SimSurface::new(),
            registry: SubscriptionRegistry::new(),
            hub: SimEventHub::new(),
        }
    }

    fn mount(&mut self, c: &mut Controller<Label>) {
        c.populate(&months(), &self.viewport, &mut self.surface);
        assert_eq!(
            c.attach(&mut self.registry, &mut self.hub),
            AttachOutcome::Attached
        );
    }

    fn scroll_to(&mut self, c: &mut Controller<Label>, top: i64) -> ScrollOutcome {
        self.viewport.set_scroll_top(top);
        c.on_scroll_event(ScrollEventKind::Scroll, &self.viewport, &mut self.surface)
    }
}

#[test]
fn populate_renders_placeholders_items_and_initial_state() {
    let mut host = Host::new();
    let mut c = controller(0);
    let update = c.populate(&months(), &host.viewport, &mut host.surface);

    assert_eq!(update.central_index, 1);
    assert_eq!(update.window, IndexRange::new(0, 5));

    let nodes = host.surface.nodes();
    assert_eq!(nodes.len(), 26);
    assert!(matches!(
        nodes[0],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Top,
            height: 0
        }
    ));
    assert!(matches!(
        nodes[25],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Bottom,
            height: 3800
        }
    ));
    assert_eq!(host.surface.item_order(), (0..24).collect::<Vec<_>>());
    assert_eq!(host.surface.content(7).map(String::as_str), Some("month-7"));

    for i in 0..5 {
        assert_eq!(host.surface.is_collapsed(i), Some(false));
    }
    for i in 5..24 {
        assert_eq!(host.surface.is_collapsed(i), Some(true));
    }
    assert_eq!(host.surface.layout_height(200), 24 * 200);
}

#[test]
fn scroll_event_moves_window_and_placeholders() {
    let mut host = Host::new();
    let mut c = controller(0);
    host.mount(&mut c);

    let outcome = host.scroll_to(&mut c, 2000);
    let update = outcome.update().expect("applied");
    assert_eq!(update.central_index, 11);
    assert_eq!(update.window, IndexRange::new(8, 15));
    assert_eq!(update.collapsed, vec![IndexRange::new(0, 5)]);
    assert_eq!(update.expanded, vec![IndexRange::new(8, 15)]);

    assert_eq!(host.surface.space_holder_height(SpaceHolderKind::Top), Some(1600));
    assert_eq!(
        host.surface.space_holder_height(SpaceHolderKind::Bottom),
        Some(1800)
    );
    assert_eq!(host.surface.collapsed_count(), 17);
    assert_eq!(host.surface.layout_height(200), 24 * 200);
}

#[test]
fn throttled_scroll_issues_no_instructions() {
    let mut host = Host::new();
    let mut c = controller(0);
    host.mount(&mut c);
    host.scroll_to(&mut c, 2000);

    let before = host.surface.instructions();
    assert_eq!(host.scroll_to(&mut c, 2050), ScrollOutcome::Throttled);
    assert_eq!(host.scroll_to(&mut c, 1901), ScrollOutcome::Throttled);
    assert_eq!(host.surface.instructions(), before);
    assert_eq!(c.virtualizer().offset(), 1901);
    assert_eq!(c.virtualizer().last_applied_offset(), Some(2000));
}

#[test]
fn refresh_without_movement_changes_nothing() {
    let mut host = Host::new();
    let mut c = controller(2000);
    host.mount(&mut c);

    let nodes = host.surface.nodes().to_vec();
    let update = c.refresh(&host.viewport, &mut host.surface);
    assert!(update.is_unchanged());
    assert_eq!(host.surface.nodes(), nodes.as_slice());
}

#[test]
fn touch_move_bounce_clamps_to_top() {
    let mut host = Host::new();
    let mut c = controller(2000);
    host.mount(&mut c);

    host.viewport.bounce_to(-40);
    let outcome = c.on_scroll_event(ScrollEventKind::TouchMove, &host.viewport, &mut host.surface);
    assert_eq!(outcome.update().map(|u| u.central_index), Some(1));
    assert_eq!(c.virtualizer().offset(), 0);
    assert_eq!(host.surface.space_holder_height(SpaceHolderKind::Top), Some(0));
}

#[test]
fn attach_subscribes_both_event_kinds_under_own_namespace() {
    let mut host = Host::new();
    let mut c = controller(0);
    host.mount(&mut c);

    assert_eq!(host.hub.count_for(&CONTAINER), 2);
    for kind in ScrollEventKind::ALL {
        assert_eq!(host.hub.listeners(&CONTAINER, kind), vec![c.namespace()]);
    }
    assert_eq!(host.registry.owner(&CONTAINER), Some(c.instance_id()));

    assert_eq!(
        c.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::AlreadyAttached
    );
    assert_eq!(host.hub.count_for(&CONTAINER), 2);
}

#[test]
fn second_instance_on_busy_container_stays_detached() {
    let mut host = Host::new();
    let mut first = controller(0);
    host.mount(&mut first);

    let mut second = controller(0);
    let mut other_surface = SimSurface::new();
    second.populate(&months(), &host.viewport, &mut other_surface);
    assert_eq!(
        second.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::ContainerBusy(first.instance_id())
    );
    assert!(!second.is_attached());
    assert_eq!(host.hub.count_for(&CONTAINER), 2);

    assert!(first.detach(&mut host.registry, &mut host.hub, &mut host.surface));
    assert!(host.registry.is_empty());
    assert!(host.hub.is_empty());

    assert_eq!(
        second.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::Attached
    );
    assert_eq!(
        host.hub.listeners(&CONTAINER, ScrollEventKind::Scroll),
        vec![second.namespace()]
    );
}

#[test]
fn detach_strips_virtualization_and_reattach_restores_it() {
    let mut host = Host::new();
    let mut c = controller(0);
    host.mount(&mut c);
    host.scroll_to(&mut c, 2000);

    assert!(c.detach(&mut host.registry, &mut host.hub, &mut host.surface));
    assert!(!c.detach(&mut host.registry, &mut host.hub, &mut host.surface));
    assert_eq!(host.surface.space_holder_height(SpaceHolderKind::Top), None);
    assert_eq!(host.surface.space_holder_height(SpaceHolderKind::Bottom), None);
    assert_eq!(host.surface.collapsed_count(), 0);
    assert_eq!(host.surface.item_order().len(), 24);
    assert_eq!(c.virtualizer().cached_viewport_center(), None);

    // Detached: notifications are ignored.
    let before = host.surface.instructions();
    assert_eq!(host.scroll_to(&mut c, 2400), ScrollOutcome::Detached);
    assert_eq!(host.surface.instructions(), before);

    assert_eq!(
        c.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::Attached
    );
    let outcome = c.on_scroll_event(ScrollEventKind::Scroll, &host.viewport, &mut host.surface);
    let update = outcome.update().expect("first scroll after attach recomputes");
    assert_eq!(update.central_index, 13);
    assert_eq!(update.collapsed_len(), 24 - 7);

    let nodes = host.surface.nodes();
    assert!(matches!(
        nodes[0],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Top,
            height: 2000
        }
    ));
    assert!(matches!(
        nodes[nodes.len() - 1],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Bottom,
            height: 1400
        }
    ));
    assert_eq!(host.surface.layout_height(200), 24 * 200);
}

#[test]
fn lazy_insertion_keeps_document_order() {
    let vp = viewport();
    let mut surface = SimSurface::new();
    let mut c = controller(2000);
    surface.append_space_holder(SpaceHolderKind::Top, 1600);
    surface.append_space_holder(SpaceHolderKind::Bottom, 1800);

    assert_eq!(c.virtualizer_mut().central_index(&vp), 11);
    assert_eq!(
        c.insert_item(12, &12, &vp, &mut surface),
        Some(SpaceHolderKind::Bottom)
    );
    assert_eq!(
        c.insert_item(13, &13, &vp, &mut surface),
        Some(SpaceHolderKind::Bottom)
    );
    assert_eq!(
        c.insert_item(10, &10, &vp, &mut surface),
        Some(SpaceHolderKind::Top)
    );
    assert_eq!(
        c.insert_item(9, &9, &vp, &mut surface),
        Some(SpaceHolderKind::Top)
    );
    assert_eq!(c.insert_item(24, &24, &vp, &mut surface), None);

    assert_eq!(surface.item_order(), vec![9, 10, 12, 13]);
    assert!(matches!(
        surface.nodes()[0],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Top,
            ..
        }
    ));
    assert!(matches!(
        surface.nodes()[5],
        SimNode::SpaceHolder {
            kind: SpaceHolderKind::Bottom,
            ..
        }
    ));
}

#[test]
fn scroll_to_item_positions_container() {
    let mut host = Host::new();
    let mut c = controller(0);
    host.mount(&mut c);

    assert_eq!(c.scroll_to_item(12, 0, &mut host.viewport), Some(2400));
    assert_eq!(host.viewport.metrics.scroll_top, 2400);
    let outcome = c.on_scroll_event(ScrollEventKind::Scroll, &host.viewport, &mut host.surface);
    assert_eq!(outcome.update().map(|u| u.central_index), Some(13));

    assert_eq!(c.scroll_to_item(24, 0, &mut host.viewport), None);
    assert_eq!(c.scroll_to_item(0, 100, &mut host.viewport), Some(0));

    // Clamped by the container to its scrollable range.
    c.scroll_to_offset(100_000, &mut host.viewport);
    assert_eq!(host.viewport.metrics.scroll_top, 4400);
}

#[test]
fn height_change_recenters_on_next_refresh() {
    let mut host = Host::new();
    let mut c = controller(2000);
    host.mount(&mut c);
    assert_eq!(c.virtualizer().cached_viewport_center(), Some(200));

    host.viewport.set_client_height(800);
    c.on_height_changed();
    let update = c.refresh(&host.viewport, &mut host.surface);
    assert_eq!(update.central_index, 12);
    assert_eq!(update.window, IndexRange::new(9, 16));
    assert_eq!(host.surface.layout_height(200), 24 * 200);
}

#[test]
fn short_item_slice_renders_what_is_available() {
    let vp = viewport();
    let mut surface = SimSurface::new();
    let mut c = controller(0);
    let items: Vec<u32> = (0..20).collect();
    c.populate(&items, &vp, &mut surface);

    assert_eq!(surface.item_order().len(), 20);
    assert_eq!(surface.is_collapsed(22), None);
    assert_eq!(surface.space_holder_height(SpaceHolderKind::Bottom), Some(3800));
}

#[test]
fn namespace_is_derived_from_instance_id() {
    let options = VirtualizerOptions::new(10);
    let c = Controller::with_instance_id(
        ListSettings::new(options, label as Label),
        CONTAINER,
        InstanceId::from_raw(7),
    );
    assert_eq!(c.namespace().as_str(), "infinite-list-7");
    assert_eq!(format!("{}", c.namespace()), "infinite-list-7");

    let a = controller(0);
    let b = controller(0);
    assert_ne!(a.instance_id(), b.instance_id());
    assert_ne!(a.namespace(), b.namespace());
}

#[test]
fn registry_claim_and_release() {
    let mut registry = SubscriptionRegistry::new();
    let a = InstanceId::from_raw(1);
    let b = InstanceId::from_raw(2);

    assert_eq!(registry.claim(ContainerId(10), a), Claim::Acquired);
    assert_eq!(registry.claim(ContainerId(10), a), Claim::AlreadyHeld);
    assert_eq!(registry.claim(ContainerId(10), b), Claim::HeldBy(a));
    assert_eq!(registry.claim(ContainerId(11), a), Claim::Acquired);
    assert!(registry.is_claimed(&ContainerId(11)));

    assert!(!registry.release(&ContainerId(10), b));
    assert_eq!(registry.owner(&ContainerId(10)), Some(a));
    assert!(registry.release(&ContainerId(10), a));
    assert_eq!(registry.len(), 1);

    assert_eq!(registry.claim(ContainerId(10), b), Claim::Acquired);
    assert_eq!(registry.release_instance(a), 1);
    assert_eq!(registry.owner(&ContainerId(10)), Some(b));
    assert_eq!(registry.owner(&ContainerId(11)), None);
}

#[test]
fn unsubscribe_only_removes_own_namespace() {
    let mut hub = SimEventHub::new();
    let a = EventNamespace::for_instance(InstanceId::from_raw(1));
    let b = EventNamespace::for_instance(InstanceId::from_raw(2));
    for kind in ScrollEventKind::ALL {
        hub.subscribe(&CONTAINER, &a, kind);
        hub.subscribe(&CONTAINER, &b, kind);
    }
    hub.subscribe(&ContainerId(2), &a, ScrollEventKind::Scroll);

    hub.unsubscribe(&CONTAINER, &a);
    assert_eq!(hub.count_for(&CONTAINER), 2);
    assert_eq!(hub.listeners(&CONTAINER, ScrollEventKind::TouchMove), vec![&b]);
    assert_eq!(hub.count_for(&ContainerId(2)), 1);
}

#[test]
fn clear_then_upsert_recreates_placeholders_at_edges() {
    let mut surface = SimSurface::new();
    surface.append_space_holder(SpaceHolderKind::Top, 10);
    surface.append_item(0, 'a');
    surface.append_item(1, 'b');
    surface.append_space_holder(SpaceHolderKind::Bottom, 20);
    surface.set_collapsed(1, true);
    surface.set_collapsed(5, true);

    surface.clear_virtualization();
    assert_eq!(surface.nodes().len(), 2);
    assert_eq!(surface.is_collapsed(1), Some(false));

    surface.set_space_holder_height(SpaceHolderKind::Bottom, 30);
    surface.set_space_holder_height(SpaceHolderKind::Top, 40);
    assert_eq!(
        surface.nodes(),
        &[
            SimNode::SpaceHolder {
                kind: SpaceHolderKind::Top,
                height: 40
            },
            SimNode::Item {
                index: 0,
                content: 'a',
                collapsed: false
            },
            SimNode::Item {
                index: 1,
                content: 'b',
                collapsed: false
            },
            SimNode::SpaceHolder {
                kind: SpaceHolderKind::Bottom,
                height: 30
            },
        ]
    );
}

#[test]
fn clone_is_a_separate_detached_instance() {
    let mut host = Host::new();
    let mut original = controller(0);
    host.mount(&mut original);

    let mut copy = original.clone();
    assert_ne!(copy.instance_id(), original.instance_id());
    assert_ne!(copy.namespace(), original.namespace());
    assert!(!copy.is_attached());
    assert_eq!(
        copy.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::ContainerBusy(original.instance_id())
    );
    assert_eq!(host.hub.count_for(&CONTAINER), 2);

    assert!(original.detach(&mut host.registry, &mut host.hub, &mut host.surface));
    assert!(!copy.is_attached());
    assert!(!host.registry.is_claimed(&CONTAINER));

    assert_eq!(
        copy.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::Attached
    );
    assert_eq!(host.registry.owner(&CONTAINER), Some(copy.instance_id()));
    assert_eq!(
        host.hub.listeners(&CONTAINER, ScrollEventKind::TouchMove),
        vec![copy.namespace()]
    );

    let mut third = controller(0);
    assert_eq!(
        third.attach(&mut host.registry, &mut host.hub),
        AttachOutcome::ContainerBusy(copy.instance_id())
    );
}
