//! Negative free-space distribution along the main axis.

use log::trace;

use crate::axis;
use crate::tree::{NodeId, Tree};

const EPSILON: f32 = 1e-6;

/// Remove `amount` of overflow from the shrinkable items of a line.
///
/// Iterative fixed point: each pass distributes the outstanding amount over
/// the still-shrinkable items by their shrink factors; items that hit their
/// minimum size are frozen and drop out of the distribution. The loop ends
/// when the amount is consumed or nothing can shrink further. Margins are
/// never shrunk. Returns the total shrunk size.
pub(crate) fn shrink(tree: &mut Tree, items: &[NodeId], horizontal: bool, amount: f32) -> f32 {
    let mut shrinkable: Vec<(NodeId, f32)> = items
        .iter()
        .filter_map(|&id| {
            let factor = tree
                .item_config(id)
                .effective_shrink(tree.is_flex_enabled(id));
            if factor <= 0.0 {
                return None;
            }
            let current = axis::outer_axis_size(tree, id, horizontal);
            let min = axis::axis_min_size(tree, id, horizontal);
            (current > min).then_some((id, factor))
        })
        .collect();
    let mut total_shrink: f32 = shrinkable.iter().map(|&(_, f)| f).sum();
    let mut to_shrink = amount;
    let mut shrunk = 0.0f32;

    // The shrinkable set strictly decreases each pass, so item count bounds
    // the iteration. Hitting the cap with work left is an internal bug.
    for _ in 0..=items.len() {
        if to_shrink <= EPSILON || shrinkable.is_empty() || total_shrink <= 0.0 {
            break;
        }
        let amount_per_shrink = to_shrink / total_shrink;
        trace!(
            target: "luster::distribute",
            "shrink pass to_shrink={to_shrink:.3} total_shrink={total_shrink:.3} per={amount_per_shrink:.3}"
        );
        let mut froze_any = false;
        shrinkable.retain(|&(id, factor)| {
            let desired = factor * amount_per_shrink;
            let current = axis::outer_axis_size(tree, id, horizontal);
            let min = axis::axis_min_size(tree, id, horizontal);
            let room = (current - min).max(0.0);
            let actual = desired.min(room);
            if actual > 0.0 {
                axis::resize_item_axis(tree, id, horizontal, current - actual);
                to_shrink -= actual;
                shrunk += actual;
            }
            if actual >= room - EPSILON {
                // floored at its minimum; out of the distribution
                total_shrink -= factor;
                froze_any = true;
                false
            } else {
                true
            }
        });
        if !froze_any {
            // every item took its full desired share
            break;
        }
    }
    debug_assert!(
        to_shrink <= EPSILON || shrinkable.is_empty() || total_shrink <= 0.0,
        "shrink distribution did not converge: {to_shrink} left over"
    );
    shrunk
}
