//! Property-based invariant tests for the windowing math.
//!
//! 1. `index_for_offset` stays in `[0, max_items - 1]` and is monotonic in the offset
//! 2. The central item is always visible
//! 3. The window holds `min(2 * preload + 1, max_items)` items unless truncated at a bound
//! 4. Placeholders plus live items always add up to `max_items * item_height`
//! 5. A second `update_visibility` without an offset change issues no instructions
//! 6. Scroll notifications within the threshold of the last applied offset never recompute

use infinite_list::{ScrollOutcome, Virtualizer, VirtualizerOptions, ViewportMetrics};
use proptest::prelude::*;

fn list(max_items: usize, item_height: u32, preload: usize, offset: u64) -> Virtualizer {
    Virtualizer::new(
        VirtualizerOptions::new(max_items)
            .with_item_height(item_height)
            .with_preload_items(preload)
            .with_initial_offset_value(offset),
    )
}

proptest! {
    #[test]
    fn index_for_offset_is_clamped_and_monotonic(
        max_items in 1usize..500,
        item_height in 1u32..400,
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        let v = list(max_items, item_height, 3, 0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let i_lo = v.index_for_offset(lo);
        let i_hi = v.index_for_offset(hi);
        prop_assert!(i_lo < max_items);
        prop_assert!(i_hi < max_items);
        prop_assert!(i_lo <= i_hi);
    }

    #[test]
    fn central_item_is_visible(
        max_items in 1usize..300,
        preload in 0usize..8,
        offset in 0u64..200_000,
        client_height in 0u32..3000,
        container_top in -2000i64..2000,
    ) {
        let viewport = ViewportMetrics::new(client_height).with_container_top(container_top);
        let mut v = list(max_items, 200, preload, offset);
        let central = v.central_index(&viewport);
        prop_assert!(central < max_items);
        prop_assert!(v.is_visible(central, &viewport));
    }

    #[test]
    fn window_is_symmetric_or_truncated(
        max_items in 0usize..300,
        preload in 0usize..8,
        offset in 0u64..100_000,
    ) {
        let viewport = ViewportMetrics::new(400);
        let mut v = list(max_items, 200, preload, offset);
        let central = v.central_index(&viewport);
        let window = v.window(&viewport);

        let full = (2 * preload + 1).min(max_items);
        let truncated = central < preload || central + preload >= max_items;
        if truncated {
            prop_assert!(window.len() <= full);
        } else {
            prop_assert_eq!(window.len(), full);
        }
        prop_assert!(window.end_index <= max_items);
        if max_items > 0 {
            prop_assert_eq!(window.start_index, central.saturating_sub(preload));
        }
    }

    #[test]
    fn placeholders_and_live_items_fill_the_extent(
        max_items in 0usize..300,
        item_height in 1u32..400,
        preload in 0usize..8,
        offsets in proptest::collection::vec(-5_000i64..150_000, 1..20),
    ) {
        let viewport = ViewportMetrics::new(600);
        let mut v = list(max_items, item_height, preload, 0);
        v.populate(&viewport, |_| {});
        v.attach();
        for top in offsets {
            v.apply_scroll_event(top, &viewport);
            let update = v.update_visibility(&viewport);
            let live = update.window.len() as u64 * u64::from(item_height);
            prop_assert_eq!(update.space_holders.total() + live, v.total_height());
        }
    }

    #[test]
    fn repeated_update_issues_no_instructions(
        max_items in 1usize..300,
        preload in 0usize..8,
        top in 0i64..80_000,
    ) {
        let viewport = ViewportMetrics::new(400);
        let mut v = list(max_items, 200, preload, 0);
        v.populate(&viewport, |_| {});
        v.attach();
        v.apply_scroll_event(top, &viewport);
        v.update_visibility(&viewport);
        prop_assert!(v.update_visibility(&viewport).is_unchanged());
    }

    #[test]
    fn notifications_within_threshold_never_recompute(
        start in 0u64..50_000,
        deltas in proptest::collection::vec(-99i64..100, 1..40),
    ) {
        let viewport = ViewportMetrics::new(400);
        let mut v = list(500, 200, 3, start);
        v.populate(&viewport, |_| {});
        v.attach();
        for delta in deltas {
            let top = (start as i64 + delta).max(0);
            prop_assert_eq!(v.apply_scroll_event(top, &viewport), ScrollOutcome::Throttled);
        }
        prop_assert_eq!(v.last_applied_offset(), Some(start));
    }
}
