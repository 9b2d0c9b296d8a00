use infinite_list::{SpaceHolderKind, Viewport};

use crate::EventNamespace;

/// Host notifications that move the scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEventKind {
    Scroll,
    TouchMove,
}

impl ScrollEventKind {
    pub const ALL: [ScrollEventKind; 2] = [ScrollEventKind::Scroll, ScrollEventKind::TouchMove];
}

/// The UI layer the list renders into (DOM, TUI buffer, retained scene, ...).
///
/// The surface holds, in document order: the top placeholder, the item representations, the
/// bottom placeholder.
pub trait Surface {
    /// Renderable representation of one item.
    type Content;

    /// Appends a placeholder region at the end of the container.
    fn append_space_holder(&mut self, kind: SpaceHolderKind, height: u64);

    /// Appends an item representation at the end of the container.
    fn append_item(&mut self, index: usize, content: Self::Content);

    /// Inserts an item right after the top placeholder (`Top`) or right before the bottom
    /// placeholder (`Bottom`).
    fn insert_item(&mut self, side: SpaceHolderKind, index: usize, content: Self::Content);

    /// Sets a placeholder's height, re-creating it at its edge of the item block if it was
    /// removed by [`Self::clear_virtualization`].
    fn set_space_holder_height(&mut self, kind: SpaceHolderKind, height: u64);

    /// Adds or removes the collapsed visual state. Unknown indices are ignored.
    fn set_collapsed(&mut self, index: usize, collapsed: bool);

    /// Removes both placeholders and every collapsed marker.
    fn clear_virtualization(&mut self);
}

/// Scroll/touch-move subscription on a container, keyed by namespace.
pub trait EventHub<C> {
    fn subscribe(&mut self, container: &C, namespace: &EventNamespace, kind: ScrollEventKind);

    /// Removes every subscription registered under `namespace` on `container`, and no others.
    fn unsubscribe(&mut self, container: &C, namespace: &EventNamespace);
}

/// A viewport whose scroll position can be set programmatically.
pub trait ScrollContainer: Viewport {
    fn set_scroll_top(&mut self, scroll_top: i64);
}
