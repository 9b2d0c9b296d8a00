//! In-memory host collaborators.
//!
//! Useful for tests, demos and headless hosts that want to inspect what a real surface would show.

use alloc::vec::Vec;

use infinite_list::{SpaceHolderKind, Viewport, ViewportMetrics};

use crate::{EventHub, EventNamespace, ScrollContainer, ScrollEventKind, Surface};

/// A viewport backed by plain geometry; programmatic scrolls clamp to the scrollable range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimViewport {
    pub metrics: ViewportMetrics,
}

impl SimViewport {
    pub fn new(client_height: u32, scroll_height: u64) -> Self {
        Self {
            metrics: ViewportMetrics::new(client_height).with_scroll_height(scroll_height),
        }
    }

    pub fn with_container_top(mut self, container_top: i64) -> Self {
        self.metrics.container_top = container_top;
        self
    }

    /// Moves the scroll position without clamping, e.g. to simulate overscroll bounce.
    pub fn bounce_to(&mut self, scroll_top: i64) {
        self.metrics.scroll_top = scroll_top;
    }

    pub fn set_client_height(&mut self, client_height: u32) {
        self.metrics.client_height = client_height;
    }

    fn max_scroll_top(&self) -> i64 {
        let max = self
            .metrics
            .scroll_height
            .saturating_sub(u64::from(self.metrics.client_height));
        i64::try_from(max).unwrap_or(i64::MAX)
    }
}

impl Viewport for SimViewport {
    fn scroll_top(&self) -> i64 {
        self.metrics.scroll_top
    }

    fn client_height(&self) -> u32 {
        self.metrics.client_height
    }

    fn scroll_height(&self) -> u64 {
        self.metrics.scroll_height
    }

    fn container_top(&self) -> i64 {
        self.metrics.container_top
    }
}

impl ScrollContainer for SimViewport {
    fn set_scroll_top(&mut self, scroll_top: i64) {
        self.metrics.scroll_top = scroll_top.clamp(0, self.max_scroll_top());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimNode<T> {
    SpaceHolder {
        kind: SpaceHolderKind,
        height: u64,
    },
    Item {
        index: usize,
        content: T,
        collapsed: bool,
    },
}

/// A surface that keeps its children in a flat vector and counts every instruction it receives.
#[derive(Clone, Debug)]
pub struct SimSurface<T> {
    nodes: Vec<SimNode<T>>,
    instructions: usize,
}

impl<T> Default for SimSurface<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SimSurface<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            instructions: 0,
        }
    }

    pub fn nodes(&self) -> &[SimNode<T>] {
        &self.nodes
    }

    /// Number of surface calls received so far.
    pub fn instructions(&self) -> usize {
        self.instructions
    }

    pub fn space_holder_height(&self, kind: SpaceHolderKind) -> Option<u64> {
        self.nodes.iter().find_map(|node| match node {
            SimNode::SpaceHolder { kind: k, height } if *k == kind => Some(*height),
            _ => None,
        })
    }

    /// `None` for an index that was never rendered.
    pub fn is_collapsed(&self, index: usize) -> Option<bool> {
        self.item(index).map(|(_, collapsed)| collapsed)
    }

    pub fn content(&self, index: usize) -> Option<&T> {
        self.item(index).map(|(content, _)| content)
    }

    /// Item indices in document order.
    pub fn item_order(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                SimNode::Item { index, .. } => Some(*index),
                SimNode::SpaceHolder { .. } => None,
            })
            .collect()
    }

    pub fn collapsed_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, SimNode::Item { collapsed: true, .. }))
            .count()
    }

    /// Laid-out height: placeholders plus every item that is not collapsed.
    pub fn layout_height(&self, item_height: u32) -> u64 {
        self.nodes
            .iter()
            .map(|node| match node {
                SimNode::SpaceHolder { height, .. } => *height,
                SimNode::Item { collapsed: false, .. } => u64::from(item_height),
                SimNode::Item { collapsed: true, .. } => 0,
            })
            .sum()
    }

    fn item(&self, index: usize) -> Option<(&T, bool)> {
        self.nodes.iter().find_map(|node| match node {
            SimNode::Item {
                index: i,
                content,
                collapsed,
            } if *i == index => Some((content, *collapsed)),
            _ => None,
        })
    }

    fn space_holder_position(&self, kind: SpaceHolderKind) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| matches!(node, SimNode::SpaceHolder { kind: k, .. } if *k == kind))
    }
}

impl<T> Surface for SimSurface<T> {
    type Content = T;

    fn append_space_holder(&mut self, kind: SpaceHolderKind, height: u64) {
        self.instructions += 1;
        self.nodes.push(SimNode::SpaceHolder { kind, height });
    }

    fn append_item(&mut self, index: usize, content: T) {
        self.instructions += 1;
        self.nodes.push(SimNode::Item {
            index,
            content,
            collapsed: false,
        });
    }

    fn insert_item(&mut self, side: SpaceHolderKind, index: usize, content: T) {
        self.instructions += 1;
        let at = match side {
            SpaceHolderKind::Top => self
                .space_holder_position(SpaceHolderKind::Top)
                .map_or(0, |p| p + 1),
            SpaceHolderKind::Bottom => self
                .space_holder_position(SpaceHolderKind::Bottom)
                .unwrap_or(self.nodes.len()),
        };
        self.nodes.insert(
            at,
            SimNode::Item {
                index,
                content,
                collapsed: false,
            },
        );
    }

    fn set_space_holder_height(&mut self, kind: SpaceHolderKind, height: u64) {
        self.instructions += 1;
        if let Some(position) = self.space_holder_position(kind) {
            self.nodes[position] = SimNode::SpaceHolder { kind, height };
            return;
        }
        let node = SimNode::SpaceHolder { kind, height };
        match kind {
            SpaceHolderKind::Top => self.nodes.insert(0, node),
            SpaceHolderKind::Bottom => self.nodes.push(node),
        }
    }

    fn set_collapsed(&mut self, index: usize, collapsed: bool) {
        self.instructions += 1;
        for node in &mut self.nodes {
            if let SimNode::Item {
                index: i,
                collapsed: c,
                ..
            } = node
            {
                if *i == index {
                    *c = collapsed;
                    return;
                }
            }
        }
    }

    fn clear_virtualization(&mut self) {
        self.instructions += 1;
        self.nodes
            .retain(|node| !matches!(node, SimNode::SpaceHolder { .. }));
        for node in &mut self.nodes {
            if let SimNode::Item { collapsed, .. } = node {
                *collapsed = false;
            }
        }
    }
}

/// Records namespaced subscriptions per container.
#[derive(Clone, Debug)]
pub struct SimEventHub<C> {
    subscriptions: Vec<(C, EventNamespace, ScrollEventKind)>,
}

impl<C> Default for SimEventHub<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SimEventHub<C> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl<C: PartialEq> SimEventHub<C> {
    /// Number of handlers registered on `container`.
    pub fn count_for(&self, container: &C) -> usize {
        self.subscriptions
            .iter()
            .filter(|(c, _, _)| c == container)
            .count()
    }

    /// Namespaces that receive `kind` notifications from `container`, in subscription order.
    pub fn listeners(&self, container: &C, kind: ScrollEventKind) -> Vec<&EventNamespace> {
        self.subscriptions
            .iter()
            .filter(|(c, _, k)| c == container && *k == kind)
            .map(|(_, namespace, _)| namespace)
            .collect()
    }
}

impl<C: Clone + PartialEq> EventHub<C> for SimEventHub<C> {
    fn subscribe(&mut self, container: &C, namespace: &EventNamespace, kind: ScrollEventKind) {
        self.subscriptions
            .push((container.clone(), namespace.clone(), kind));
    }

    fn unsubscribe(&mut self, container: &C, namespace: &EventNamespace) {
        self.subscriptions
            .retain(|(c, ns, _)| !(c == container && ns == namespace));
    }
}
