//! Index math for uniform-height lists.
//!
//! Everything here is total: offsets before the list saturate to the first item, offsets past
//! the end saturate to the last one.

use crate::{IndexRange, SpaceHolders};

/// Maps a pixel offset (relative to the list top) to the item under it.
///
/// Returns `0` for empty lists.
pub(crate) fn index_for_offset(offset_px: i64, item_height: u32, count: usize) -> usize {
    if offset_px <= 0 || count == 0 {
        return 0;
    }
    let index = offset_px as u64 / u64::from(item_height.max(1));
    let last = count - 1;
    usize::try_from(index).map_or(last, |i| i.min(last))
}

/// The closed window `[central - preload, central + preload]`, truncated at the sequence bounds.
pub(crate) fn window_around(central: usize, preload: usize, count: usize) -> IndexRange {
    let start = central.saturating_sub(preload);
    let end = central
        .saturating_add(preload)
        .saturating_add(1)
        .min(count);
    IndexRange::new(start.min(count), end)
}

pub(crate) fn space_holders(
    central: usize,
    preload: usize,
    count: usize,
    item_height: u32,
) -> SpaceHolders {
    let height = u64::from(item_height.max(1));
    let top_items = central.saturating_sub(preload).min(count);
    let bottom_items = count.saturating_sub(central.saturating_add(preload).saturating_add(1));
    SpaceHolders {
        top: (top_items as u64).saturating_mul(height),
        bottom: (bottom_items as u64).saturating_mul(height),
    }
}

pub(crate) fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
