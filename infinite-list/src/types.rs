use alloc::vec::Vec;

/// Visual state of a populated item.
///
/// `Expanded` is also the neutral baseline: an item that carries no collapsed marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    Expanded,
    Collapsed,
}

/// One of the two placeholder regions bracketing the live-item block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaceHolderKind {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Creates a range; an `end_index` before `start_index` yields an empty range at `start_index`.
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index: end_index.max(start_index),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }

    /// Returns `self \ other` as (before, after) pieces. Either piece may be empty.
    pub(crate) fn difference(self, other: IndexRange) -> [IndexRange; 2] {
        if self.is_empty() || other.is_empty() {
            return [self, IndexRange::EMPTY];
        }
        let before = IndexRange::new(self.start_index, self.end_index.min(other.start_index));
        let after = IndexRange::new(self.start_index.max(other.end_index), self.end_index);
        [before, after]
    }
}

/// Heights of the two placeholder regions, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceHolders {
    pub top: u64,
    pub bottom: u64,
}

impl SpaceHolders {
    pub fn height(&self, kind: SpaceHolderKind) -> u64 {
        match kind {
            SpaceHolderKind::Top => self.top,
            SpaceHolderKind::Bottom => self.bottom,
        }
    }

    pub fn total(&self) -> u64 {
        self.top.saturating_add(self.bottom)
    }
}

/// A layout slot emitted, in document order, by [`crate::Virtualizer::populate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    SpaceHolder { kind: SpaceHolderKind, height: u64 },
    Item { index: usize },
}

/// The result of one visibility recomputation.
///
/// `expanded` and `collapsed` only list items whose visual state changed; an item already in
/// the right state never appears. Each holds at most two ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityUpdate {
    pub central_index: usize,
    pub window: IndexRange,
    pub space_holders: SpaceHolders,
    pub expanded: Vec<IndexRange>,
    pub collapsed: Vec<IndexRange>,
}

impl VisibilityUpdate {
    pub(crate) fn new(central_index: usize, window: IndexRange, space_holders: SpaceHolders) -> Self {
        Self {
            central_index,
            window,
            space_holders,
            expanded: Vec::new(),
            collapsed: Vec::new(),
        }
    }

    pub(crate) fn push_expanded(&mut self, ranges: [IndexRange; 2]) {
        self.expanded.extend(ranges.into_iter().filter(|r| !r.is_empty()));
    }

    pub(crate) fn push_collapsed(&mut self, ranges: [IndexRange; 2]) {
        self.collapsed.extend(ranges.into_iter().filter(|r| !r.is_empty()));
    }

    /// `true` when no item changed its visual state.
    pub fn is_unchanged(&self) -> bool {
        self.expanded.is_empty() && self.collapsed.is_empty()
    }

    pub fn expanded_len(&self) -> usize {
        self.expanded.iter().map(IndexRange::len).sum()
    }

    pub fn collapsed_len(&self) -> usize {
        self.collapsed.iter().map(IndexRange::len).sum()
    }

    pub fn for_each_expanded(&self, mut f: impl FnMut(usize)) {
        for range in &self.expanded {
            range.iter().for_each(&mut f);
        }
    }

    pub fn for_each_collapsed(&self, mut f: impl FnMut(usize)) {
        for range in &self.collapsed {
            range.iter().for_each(&mut f);
        }
    }
}

/// What a scroll notification did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The list is detached; the notification was ignored.
    Detached,
    /// The offset was recorded but moved less than the scroll threshold.
    Throttled,
    Applied(VisibilityUpdate),
}

impl ScrollOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn update(&self) -> Option<&VisibilityUpdate> {
        match self {
            Self::Applied(update) => Some(update),
            _ => None,
        }
    }
}
