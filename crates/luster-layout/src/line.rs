//! A single wrap line: distribution, positioning, and metrics.

use crate::layout::AxisCtx;
use crate::spacing::{self, SpacingMode};
use crate::tree::{NodeId, Tree};
use crate::{axis, grow, shrink};

/// One contiguous run of items sharing a line, as an index range into the
/// container's participating-item list. Rebuilt from scratch on every pass.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LineLayout {
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Cross-axis extent of the line box, possibly grown by `align-content:
    /// stretch`.
    pub(crate) cross_size: f32,
}

impl LineLayout {
    pub(crate) fn slice<'a>(&self, items: &'a [NodeId]) -> &'a [NodeId] {
        &items[self.start..self.end]
    }
}

/// Lay out one line along the main axis: consume free space through the
/// grower or shrinker, then position the items with the leftover.
pub(crate) fn perform_layout(
    tree: &mut Tree,
    ctx: &AxisCtx,
    line_items: &[NodeId],
    available_space: f32,
) {
    let mut remaining = available_space;
    if remaining > 0.0 {
        remaining -= grow::grow(tree, line_items, ctx.horizontal, remaining);
    } else if remaining < 0.0 {
        remaining += shrink::shrink(tree, line_items, ctx.horizontal, -remaining);
    }
    position_items(tree, ctx, line_items, remaining);
}

/// Position the line's items along the main axis using justification
/// spacing. Stored positions exclude the item's own leading margin; the
/// commit pass adds it together with the container padding.
pub(crate) fn position_items(
    tree: &mut Tree,
    ctx: &AxisCtx,
    line_items: &[NodeId],
    remaining_space: f32,
) {
    let (spacing_before, spacing_between) = spacing::spacing(
        SpacingMode::from(ctx.justify),
        line_items.len(),
        remaining_space,
    );
    let mut pos = spacing_before;
    for &id in line_items {
        axis::set_layout_pos(tree, id, ctx.horizontal, pos);
        pos += axis::outer_axis_size_with_margin(tree, id, ctx.horizontal) + spacing_between;
    }
}

/// Main-axis space left over after the items' current sizes.
pub(crate) fn remaining_space(tree: &Tree, ctx: &AxisCtx, line_items: &[NodeId]) -> f32 {
    if ctx.main_size > 0.0 {
        let used: f32 = line_items
            .iter()
            .map(|&id| axis::outer_axis_size_with_margin(tree, id, ctx.horizontal))
            .sum();
        ctx.main_size - used
    } else {
        0.0
    }
}

/// Largest outer cross extent (including margins) among the line's items.
pub(crate) fn max_outer_cross_size(tree: &Tree, horizontal: bool, line_items: &[NodeId]) -> f32 {
    line_items
        .iter()
        .map(|&id| axis::outer_axis_size_with_margin(tree, id, !horizontal))
        .fold(0.0, f32::max)
}

/// Sum of the items' minimum main-axis sizes with padding and margins.
/// Reported upward for nested-shrink scenarios.
pub(crate) fn main_axis_min_size(tree: &Tree, horizontal: bool, line_items: &[NodeId]) -> f32 {
    line_items
        .iter()
        .map(|&id| axis::axis_min_size_with_margin(tree, id, horizontal))
        .sum()
}

/// Largest minimum cross extent among the line's items.
pub(crate) fn cross_axis_min_size(tree: &Tree, horizontal: bool, line_items: &[NodeId]) -> f32 {
    line_items
        .iter()
        .map(|&id| axis::axis_min_size_with_margin(tree, id, !horizontal))
        .fold(0.0, f32::max)
}
