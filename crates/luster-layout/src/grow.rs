//! Positive free-space distribution along the main axis.

use log::trace;

use crate::axis;
use crate::tree::{NodeId, Tree};

/// Distribute `amount` of free space across the growable items of a line,
/// proportionally to their grow factors. Single pass: grown sizes are not
/// clamped against a maximum. Returns the total grown size so the caller can
/// reconcile the remaining space.
pub(crate) fn grow(tree: &mut Tree, items: &[NodeId], horizontal: bool, amount: f32) -> f32 {
    let total_grow: f32 = items
        .iter()
        .map(|&id| tree.item_config(id).grow.max(0.0))
        .sum();
    if total_grow <= 0.0 {
        return 0.0;
    }
    let amount_per_grow = amount / total_grow;
    trace!(
        target: "luster::distribute",
        "grow amount={amount:.3} total_grow={total_grow:.3} per={amount_per_grow:.3}"
    );
    let mut grown = 0.0f32;
    for &id in items {
        let factor = tree.item_config(id).grow.max(0.0);
        if factor <= 0.0 {
            continue;
        }
        let delta = factor * amount_per_grow;
        let current = axis::outer_axis_size(tree, id, horizontal);
        axis::resize_item_axis(tree, id, horizontal, current + delta);
        grown += delta;
    }
    grown
}
