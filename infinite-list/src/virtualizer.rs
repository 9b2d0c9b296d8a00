use alloc::sync::Arc;

use crate::window::{self, saturating_i64};
use crate::{
    IndexRange, ItemState, ListState, Placement, ScrollOutcome, ScrollState, SpaceHolderKind,
    SpaceHolders, Viewport, VirtualizerOptions, VisibilityUpdate,
};

/// Which visual state the host currently shows for the item block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Presentation {
    /// Nothing rendered yet.
    Unpopulated,
    /// Every item rendered without a collapsed marker.
    Neutral,
    /// Items inside the window are expanded, all others collapsed.
    Windowed(IndexRange),
}

/// A headless windowing engine for uniform-height lists.
///
/// The virtualizer decides which items are live (expanded), which are collapsed, and how tall the
/// two placeholder regions around the live block must be so that the scrollable extent stays at
/// `max_items * item_height` no matter which subset is expanded.
///
/// It does not hold any UI objects. The host:
/// - calls [`Self::populate`] once, rendering the emitted placements in order;
/// - calls [`Self::attach`] and then forwards scroll notifications to [`Self::on_scroll`];
/// - applies every returned [`VisibilityUpdate`] to its UI layer;
/// - calls [`Self::on_height_changed`] when the viewport is resized.
///
/// `populate` must precede scroll-driven updates; before it, updates carry space-holder sizes
/// but no item transitions.
///
/// For collaborator traits and a lifecycle controller, see the `infinite-list-adapter` crate.
#[derive(Clone, Debug)]
pub struct Virtualizer {
    options: VirtualizerOptions,
    offset: u64,
    last_applied_offset: Option<u64>,
    viewport_center: Option<u32>,
    attached: bool,
    presentation: Presentation,
    space_holders: SpaceHolders,
}

impl Virtualizer {
    /// Creates a detached, unpopulated virtualizer.
    ///
    /// `options.initial_offset` is resolved immediately.
    pub fn new(options: VirtualizerOptions) -> Self {
        let offset = options.initial_offset.resolve();
        vdebug!(
            max_items = options.max_items,
            item_height = options.item_height,
            preload_items = options.preload_items,
            offset,
            "Virtualizer::new"
        );
        Self {
            options,
            offset,
            last_applied_offset: Some(offset),
            viewport_center: None,
            attached: false,
            presentation: Presentation::Unpopulated,
            space_holders: SpaceHolders::default(),
        }
    }

    pub fn options(&self) -> &VirtualizerOptions {
        &self.options
    }

    pub fn max_items(&self) -> usize {
        self.options.max_items
    }

    pub fn item_height(&self) -> u32 {
        self.options.effective_item_height()
    }

    pub fn preload_items(&self) -> usize {
        self.options.preload_items
    }

    pub fn scroll_threshold(&self) -> u32 {
        self.options.effective_scroll_threshold()
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Virtualizer, &VisibilityUpdate) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Full scrollable extent of the list: `max_items * item_height`.
    pub fn total_height(&self) -> u64 {
        (self.options.max_items as u64).saturating_mul(u64::from(self.item_height()))
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn last_applied_offset(&self) -> Option<u64> {
        self.last_applied_offset
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_populated(&self) -> bool {
        self.presentation != Presentation::Unpopulated
    }

    /// Space-holder sizes pushed by the last recomputation (zero before populate and after detach).
    pub fn applied_space_holders(&self) -> SpaceHolders {
        self.space_holders
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            last_applied_offset: self.last_applied_offset,
        }
    }

    pub fn state(&self) -> ListState {
        ListState {
            scroll: self.scroll_state(),
            viewport_center: self.viewport_center,
            attached: self.attached,
            populated: self.is_populated(),
            space_holders: self.space_holders,
        }
    }

    /// Restores scroll bookkeeping from a snapshot without recomputing visibility.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState) {
        self.offset = scroll.offset;
        self.last_applied_offset = scroll.last_applied_offset;
    }

    /// Index of the item at `offset_px` from the list top, clamped to `[0, max_items - 1]`.
    pub fn index_for_offset(&self, offset_px: i64) -> usize {
        window::index_for_offset(offset_px, self.item_height(), self.options.max_items)
    }

    /// Half the viewport height, cached until [`Self::on_height_changed`].
    ///
    /// A zero center (hidden viewport, no layout yet) is not cached.
    pub fn viewport_center(&mut self, viewport: &impl Viewport) -> u32 {
        if let Some(center) = self.viewport_center {
            return center;
        }
        let center = viewport.client_height() / 2;
        vtrace!(center, "viewport center computed");
        if center > 0 {
            self.viewport_center = Some(center);
        }
        center
    }

    pub fn cached_viewport_center(&self) -> Option<u32> {
        self.viewport_center
    }

    /// Invalidates the cached viewport center. Call on resize or orientation change.
    pub fn on_height_changed(&mut self) {
        self.viewport_center = None;
    }

    /// Index of the item positioned at the vertical midpoint of the viewport.
    pub fn central_index(&mut self, viewport: &impl Viewport) -> usize {
        let center = self.viewport_center(viewport);
        let probe = saturating_i64(self.offset)
            .saturating_sub(viewport.container_top())
            .saturating_add(i64::from(center));
        self.index_for_offset(probe)
    }

    /// The live window around the central index.
    pub fn window(&mut self, viewport: &impl Viewport) -> IndexRange {
        let central = self.central_index(viewport);
        window::window_around(central, self.options.preload_items, self.options.max_items)
    }

    pub fn is_visible(&mut self, index: usize, viewport: &impl Viewport) -> bool {
        if index >= self.options.max_items {
            return false;
        }
        let central = self.central_index(viewport);
        central == index || central.abs_diff(index) <= self.options.preload_items
    }

    pub fn space_holders(&mut self, viewport: &impl Viewport) -> SpaceHolders {
        let central = self.central_index(viewport);
        window::space_holders(
            central,
            self.options.preload_items,
            self.options.max_items,
            self.item_height(),
        )
    }

    pub fn space_holder_height(&mut self, kind: SpaceHolderKind, viewport: &impl Viewport) -> u64 {
        self.space_holders(viewport).height(kind)
    }

    /// Current visual state of an item, or `None` before populate / out of range.
    pub fn item_state(&self, index: usize) -> Option<ItemState> {
        if index >= self.options.max_items {
            return None;
        }
        match self.presentation {
            Presentation::Unpopulated => None,
            Presentation::Neutral => Some(ItemState::Expanded),
            Presentation::Windowed(window) if window.contains(index) => Some(ItemState::Expanded),
            Presentation::Windowed(_) => Some(ItemState::Collapsed),
        }
    }

    /// Recomputes the window and space holders and returns the visual-state delta.
    ///
    /// Items whose state does not change are never listed, so two consecutive calls without an
    /// offset change yield an unchanged update the second time.
    pub fn update_visibility(&mut self, viewport: &impl Viewport) -> VisibilityUpdate {
        let count = self.options.max_items;
        let preload = self.options.preload_items;
        let central_index = self.central_index(viewport);
        let window = window::window_around(central_index, preload, count);
        let space_holders =
            window::space_holders(central_index, preload, count, self.item_height());

        let mut update = VisibilityUpdate::new(central_index, window, space_holders);
        match self.presentation {
            Presentation::Unpopulated => {
                vwarn!("update_visibility before populate; no item state to update");
            }
            Presentation::Neutral => {
                update.push_collapsed(IndexRange::new(0, count).difference(window));
                self.presentation = Presentation::Windowed(window);
            }
            Presentation::Windowed(prev) => {
                update.push_collapsed(prev.difference(window));
                update.push_expanded(window.difference(prev));
                self.presentation = Presentation::Windowed(window);
            }
        }

        self.space_holders = space_holders;
        self.last_applied_offset = Some(self.offset);
        vtrace!(
            central_index,
            window_start = window.start_index,
            window_end = window.end_index,
            top = space_holders.top,
            bottom = space_holders.bottom,
            "visibility updated"
        );

        if let Some(cb) = &self.options.on_change {
            cb(self, &update);
        }
        update
    }

    /// Emits the initial layout in document order: the top placeholder, every item, the bottom
    /// placeholder. Then sets the initial collapsed/expanded state.
    ///
    /// All items are emitted up front; only their visual state is virtualized.
    pub fn populate(
        &mut self,
        viewport: &impl Viewport,
        mut emit: impl FnMut(Placement),
    ) -> VisibilityUpdate {
        if self.is_populated() {
            vwarn!("populate on an already populated list; layout restarts from scratch");
        }
        let holders = self.space_holders(viewport);
        vdebug!(
            max_items = self.options.max_items,
            top = holders.top,
            bottom = holders.bottom,
            "populate"
        );

        emit(Placement::SpaceHolder {
            kind: SpaceHolderKind::Top,
            height: holders.top,
        });
        for index in 0..self.options.max_items {
            emit(Placement::Item { index });
        }
        emit(Placement::SpaceHolder {
            kind: SpaceHolderKind::Bottom,
            height: holders.bottom,
        });

        self.presentation = Presentation::Neutral;
        self.update_visibility(viewport)
    }

    /// Enables scroll handling. Returns `false` if already attached.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        vdebug!(offset = self.offset, "attach");
        true
    }

    /// Disables scroll handling and drops per-attachment state. Returns `false` if already
    /// detached.
    ///
    /// Items return to the neutral baseline, placeholders count as removed, the viewport center
    /// is cleared and the next scroll notification after re-attaching always recomputes.
    pub fn detach(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.attached = false;
        self.viewport_center = None;
        self.last_applied_offset = None;
        self.space_holders = SpaceHolders::default();
        if self.is_populated() {
            self.presentation = Presentation::Neutral;
        }
        vdebug!(offset = self.offset, "detach");
        true
    }

    /// Handles a scroll notification reporting `scroll_top`.
    ///
    /// Negative positions (overscroll bounce) clamp to zero. Visibility is only recomputed once the
    /// offset has moved at least `scroll_threshold` pixels from the last applied offset.
    pub fn apply_scroll_event(&mut self, scroll_top: i64, viewport: &impl Viewport) -> ScrollOutcome {
        if !self.attached {
            return ScrollOutcome::Detached;
        }
        let offset = u64::try_from(scroll_top).unwrap_or(0);
        self.offset = offset;

        if let Some(last) = self.last_applied_offset {
            if offset.abs_diff(last) < u64::from(self.scroll_threshold()) {
                return ScrollOutcome::Throttled;
            }
        }

        vtrace!(offset, "scroll offset applied");
        ScrollOutcome::Applied(self.update_visibility(viewport))
    }

    /// Same as [`Self::apply_scroll_event`], reading the position from the viewport.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) -> ScrollOutcome {
        self.apply_scroll_event(viewport.scroll_top(), viewport)
    }

    /// Offset of an item's top edge from the list top.
    pub fn item_offset(&self, index: usize) -> Option<u64> {
        (index < self.options.max_items)
            .then(|| (index as u64).saturating_mul(u64::from(self.item_height())))
    }

    /// Scroll position that puts an item's top edge `inset` pixels below the viewport top.
    pub fn scroll_offset_for_item(
        &self,
        index: usize,
        viewport: &impl Viewport,
        inset: u64,
    ) -> Option<u64> {
        let item = saturating_i64(self.item_offset(index)?);
        let target = viewport
            .container_top()
            .saturating_add(item)
            .saturating_sub(saturating_i64(inset));
        Some(u64::try_from(target).unwrap_or(0))
    }

    /// Where a single lazily created item belongs: right after the top placeholder for items
    /// before the central index, right before the bottom placeholder otherwise.
    pub fn insertion_side(&mut self, index: usize, viewport: &impl Viewport) -> SpaceHolderKind {
        if index < self.central_index(viewport) {
            SpaceHolderKind::Top
        } else {
            SpaceHolderKind::Bottom
        }
    }
}
