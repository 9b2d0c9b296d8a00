use crate::SpaceHolders;

/// A lightweight, serializable snapshot of the scroll bookkeeping.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    /// Offset of the last visibility recomputation. `None` forces the next scroll
    /// notification to recompute regardless of the threshold.
    pub last_applied_offset: Option<u64>,
}

/// A combined snapshot of scroll, viewport and lifecycle state.
///
/// Useful for diagnostics and for restoring scroll bookkeeping when a list widget is rebuilt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    pub scroll: ScrollState,
    pub viewport_center: Option<u32>,
    pub attached: bool,
    pub populated: bool,
    pub space_holders: SpaceHolders,
}
