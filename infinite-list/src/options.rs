use alloc::sync::Arc;

use crate::VisibilityUpdate;
use crate::virtualizer::Virtualizer;

pub const DEFAULT_ITEM_HEIGHT: u32 = 200;
pub const DEFAULT_PRELOAD_ITEMS: usize = 3;

/// A callback fired after every visibility recomputation.
pub type OnChangeCallback = Arc<dyn Fn(&Virtualizer, &VisibilityUpdate) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `Virtualizer::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Virtualizer`].
///
/// Closures are stored in `Arc`s, so cloning is cheap.
#[derive(Clone)]
pub struct VirtualizerOptions {
    /// Total logical item count. Fixed for the lifetime of the virtualizer.
    pub max_items: usize,
    /// Uniform item height in pixels. Zero is treated as one.
    pub item_height: u32,
    /// Items kept live on each side of the central item.
    pub preload_items: usize,
    /// Minimum offset delta (pixels) since the last recomputation before recomputing again.
    ///
    /// `None` means half the item height.
    pub scroll_threshold: Option<u32>,
    pub initial_offset: InitialOffset,
    pub on_change: Option<OnChangeCallback>,
}

impl VirtualizerOptions {
    pub fn new(max_items: usize) -> Self {
        Self {
            max_items,
            item_height: DEFAULT_ITEM_HEIGHT,
            preload_items: DEFAULT_PRELOAD_ITEMS,
            scroll_threshold: None,
            initial_offset: InitialOffset::default(),
            on_change: None,
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_preload_items(mut self, preload_items: usize) -> Self {
        self.preload_items = preload_items;
        self
    }

    pub fn with_scroll_threshold(mut self, scroll_threshold: u32) -> Self {
        self.scroll_threshold = Some(scroll_threshold);
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Virtualizer, &VisibilityUpdate) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn effective_item_height(&self) -> u32 {
        self.item_height.max(1)
    }

    pub(crate) fn effective_scroll_threshold(&self) -> u32 {
        self.scroll_threshold
            .unwrap_or(self.effective_item_height() / 2)
    }
}

impl core::fmt::Debug for VirtualizerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualizerOptions")
            .field("max_items", &self.max_items)
            .field("item_height", &self.item_height)
            .field("preload_items", &self.preload_items)
            .field("scroll_threshold", &self.scroll_threshold)
            .field("initial_offset", &self.initial_offset)
            .finish_non_exhaustive()
    }
}
