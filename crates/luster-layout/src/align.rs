//! Cross-axis pass: places lines inside the container and items inside
//! their line.

use log::debug;

use crate::container::{AlignContent, AlignItems};
use crate::layout::AxisCtx;
use crate::spacing::{self, SpacingMode};
use crate::tree::{NodeId, Tree};
use crate::{axis, layout, line};

const EPSILON: f32 = 1e-6;

/// Distribute lines along the cross axis per `align-content`, then align
/// each item within its line per `align-items` / `align-self`.
pub(crate) fn align_content(tree: &mut Tree, container: NodeId) {
    let ctx = layout::ctx(tree, container);
    let mut lines = std::mem::take(&mut tree.container_mut(container).state.lines);
    let items = std::mem::take(&mut tree.container_mut(container).state.items);

    let occupied: f32 = lines.iter().map(|l| l.cross_size).sum();
    let remaining = ctx.cross_size - occupied;
    let (spacing_before, spacing_between) = spacing::spacing(
        SpacingMode::from(ctx.align_content),
        lines.len(),
        remaining,
    );
    if ctx.align_content == AlignContent::Stretch && remaining > 0.0 && !lines.is_empty() {
        let extra = remaining / lines.len() as f32;
        for lin in &mut lines {
            lin.cross_size += extra;
        }
    }

    debug!(
        target: "luster::align",
        "container {:?}: {} line(s), cross {} occupied {}",
        container,
        lines.len(),
        ctx.cross_size,
        occupied
    );

    let mut offset = spacing_before;
    for lin in &lines {
        let line_items = lin.slice(&items);
        let resized_main = align_line_items(tree, &ctx, line_items, offset, lin.cross_size);
        if resized_main {
            // A stretch changed a nested container's main-axis size, so the
            // main positions within this line are stale. Only the positions
            // are refreshed; space distribution is not rerun.
            let remaining_main = line::remaining_space(tree, &ctx, line_items);
            line::position_items(tree, &ctx, line_items, remaining_main);
        }
        offset += lin.cross_size + spacing_between;
    }

    let state = &mut tree.container_mut(container).state;
    state.items = items;
    state.lines = lines;
}

/// Align every item in the line, returning whether any item's main-axis
/// size changed as a side effect of stretching.
fn align_line_items(
    tree: &mut Tree,
    ctx: &AxisCtx,
    line_items: &[NodeId],
    line_offset: f32,
    line_cross_size: f32,
) -> bool {
    let cross_horizontal = !ctx.horizontal;
    let mut resized_main = false;
    for &id in line_items {
        let config = tree.item_config(id);
        let mut align = config.align_self.unwrap_or(ctx.align_items);
        if align == AlignItems::Stretch && prevent_stretch(tree, id, cross_horizontal, &config) {
            align = AlignItems::FlexStart;
        }
        match align {
            AlignItems::FlexStart => {
                axis::set_layout_pos(tree, id, cross_horizontal, line_offset);
            }
            AlignItems::FlexEnd => {
                let outer = axis::outer_axis_size_with_margin(tree, id, cross_horizontal);
                axis::set_layout_pos(tree, id, cross_horizontal, line_offset + line_cross_size - outer);
            }
            AlignItems::Center => {
                let outer = axis::outer_axis_size_with_margin(tree, id, cross_horizontal);
                axis::set_layout_pos(
                    tree,
                    id,
                    cross_horizontal,
                    line_offset + (line_cross_size - outer) / 2.0,
                );
            }
            AlignItems::Stretch => {
                axis::set_layout_pos(tree, id, cross_horizontal, line_offset);
                let main_before = axis::outer_axis_size(tree, id, ctx.horizontal);
                let margins = config.margin.along(axis::axis_index(cross_horizontal));
                let stretched = (line_cross_size - margins).max(0.0);
                axis::resize_item_axis(tree, id, cross_horizontal, stretched);
                let main_after = axis::outer_axis_size(tree, id, ctx.horizontal);
                if (main_after - main_before).abs() > EPSILON {
                    resized_main = true;
                }
            }
        }
    }
    resized_main
}

/// An item with an explicit cross-axis base size keeps it unless the item
/// itself asked to stretch via `align-self`.
fn prevent_stretch(
    tree: &Tree,
    id: NodeId,
    cross_horizontal: bool,
    config: &crate::item::FlexItem,
) -> bool {
    axis::rel_axis_size(tree, id, cross_horizontal) > 0.0
        && config.align_self != Some(AlignItems::Stretch)
}
