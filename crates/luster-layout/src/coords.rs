//! Commit pass: translates scratch layout positions into final node
//! coordinates, applying axis reversal, padding and margins.

use log::trace;

use crate::target::Recalc;
use crate::tree::{NodeId, Tree};
use crate::{axis, layout};

/// Commit the laid-out geometry of a layout root and its subtree.
///
/// The root keeps its host-specified position; its committed size is the
/// content box plus padding. Subtrees whose inputs and output sizes are
/// unchanged are skipped.
pub(crate) fn finalize(tree: &mut Tree, root: NodeId) {
    let node = tree.node(root);
    let padding = tree.container(root).padding;
    let w = node.flex.layout_size[0] + padding.horizontal();
    let h = node.flex.layout_size[1] + padding.vertical();
    let (x, y) = (node.source.x, node.source.y);
    let size_changed = w != node.w || h != node.h;

    let n = tree.node_mut(root);
    n.x = x;
    n.y = y;
    n.w = w;
    n.h = h;
    n.flex.recalc = Recalc::Clean;

    update_children(tree, root, size_changed);
}

/// Position and size one container's items, recursing into nested
/// containers whose committed geometry is stale.
fn update_children(tree: &mut Tree, container: NodeId, force: bool) {
    let ctx = layout::ctx(tree, container);
    let padding = tree.container(container).padding;
    let items = tree.container(container).state.items.clone();
    let main = axis::axis_index(ctx.horizontal);
    let cross = 1 - main;

    for id in items {
        let margin = tree.item_config(id).margin;
        let outer_main = axis::outer_axis_size(tree, id, ctx.horizontal);
        let outer_cross = axis::outer_axis_size(tree, id, !ctx.horizontal);

        let mut pos_main = tree.node(id).flex.layout_pos[main];
        if ctx.reverse {
            pos_main = ctx.main_size - (pos_main + outer_main);
        }
        let pos_cross = tree.node(id).flex.layout_pos[cross];
        let final_main = pos_main + padding.before(main) + margin.before(main);
        let final_cross = pos_cross + padding.before(cross) + margin.before(cross);

        let (x, y, w, h) = if main == 0 {
            (final_main, final_cross, outer_main, outer_cross)
        } else {
            (final_cross, final_main, outer_cross, outer_main)
        };

        let node = tree.node(id);
        let size_changed = node.w != w || node.h != h;
        let was_dirty = node.flex.recalc > Recalc::Clean;

        trace!(
            target: "luster::coords",
            "item {:?}: committed at ({}, {}) size {}x{}",
            id,
            x,
            y,
            w,
            h
        );

        let n = tree.node_mut(id);
        n.x = x;
        n.y = y;
        n.w = w;
        n.h = h;
        n.flex.recalc = Recalc::Clean;

        if tree.is_flex_enabled(id) && (force || size_changed || was_dirty) {
            update_children(tree, id, size_changed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{FlexContainer, FlexDirection};
    use crate::item::FlexItem;
    use luster_core::Edges;

    fn committed(tree: &Tree, id: NodeId) -> (f32, f32, f32, f32) {
        let n = tree.node(id);
        (n.x, n.y, n.w, n.h)
    }

    fn build_row(width: f32, height: f32, sizes: &[(f32, f32)]) -> (Tree, NodeId, Vec<NodeId>) {
        let mut tree = Tree::new();
        let container = tree.new_node();
        tree.set_size(container, width, height);
        tree.set_flex(container, Some(FlexContainer::new()));
        let mut items = Vec::new();
        for &(w, h) in sizes {
            let id = tree.new_node();
            tree.set_size(id, w, h);
            tree.add_child(container, id);
            items.push(id);
        }
        (tree, container, items)
    }

    #[test]
    fn test_commit_adds_padding_offset() {
        let (mut tree, container, items) = build_row(400.0, 400.0, &[(50.0, 50.0)]);
        tree.set_padding(container, Edges::uniform(100.0));
        layout::update_layout_tree(&mut tree, container);
        finalize(&mut tree, container);
        assert_eq!(committed(&tree, container), (0.0, 0.0, 400.0, 400.0));
        assert_eq!(committed(&tree, items[0]), (100.0, 100.0, 50.0, 50.0));
    }

    #[test]
    fn test_commit_adds_leading_margin() {
        let (mut tree, container, items) = build_row(300.0, 50.0, &[(50.0, 50.0)]);
        tree.set_flex_item(
            items[0],
            Some(FlexItem::new().margin(Edges::new(20.0, 10.0, 0.0, 0.0))),
        );
        layout::update_layout_tree(&mut tree, container);
        finalize(&mut tree, container);
        assert_eq!(committed(&tree, items[0]), (20.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn test_row_reverse_mirrors_positions() {
        let (mut tree, container, items) = build_row(300.0, 50.0, &[(100.0, 50.0), (50.0, 50.0)]);
        tree.set_direction(container, FlexDirection::RowReverse);
        layout::update_layout_tree(&mut tree, container);
        finalize(&mut tree, container);
        assert_eq!(committed(&tree, items[0]), (200.0, 0.0, 100.0, 50.0));
        assert_eq!(committed(&tree, items[1]), (150.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_auto_root_keeps_source_position() {
        let (mut tree, container, _items) = build_row(0.0, 0.0, &[(80.0, 40.0)]);
        tree.set_position(container, 13.0, 29.0);
        layout::update_layout_tree(&mut tree, container);
        finalize(&mut tree, container);
        assert_eq!(committed(&tree, container), (13.0, 29.0, 80.0, 40.0));
    }

    #[test]
    fn test_recalc_cleared_after_commit() {
        let (mut tree, container, items) = build_row(300.0, 50.0, &[(50.0, 50.0)]);
        layout::update_layout_tree(&mut tree, container);
        finalize(&mut tree, container);
        assert_eq!(tree.node(container).flex.recalc, Recalc::Clean);
        assert_eq!(tree.node(items[0]).flex.recalc, Recalc::Clean);
    }
}
