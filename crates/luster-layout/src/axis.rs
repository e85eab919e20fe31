//! Axis-agnostic accessors over layout targets.
//!
//! Every algorithm in the engine works in main/cross terms; these helpers
//! translate a `horizontal` flag into reads and writes of the right scratch
//! coordinate, resolve relative sizing callbacks, and fold padding and
//! margins into outer extents.

use crate::layout;
use crate::tree::{NodeId, Tree};

/// Scratch array index for an axis (0 = horizontal, 1 = vertical).
pub(crate) const fn axis_index(horizontal: bool) -> usize {
    if horizontal {
        0
    } else {
        1
    }
}

pub(crate) fn layout_size(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    tree.node(id).flex.layout_size[axis_index(horizontal)]
}

pub(crate) fn set_layout_size(tree: &mut Tree, id: NodeId, horizontal: bool, size: f32) {
    tree.node_mut(id).flex.layout_size[axis_index(horizontal)] = size;
}

pub(crate) fn layout_pos(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    tree.node(id).flex.layout_pos[axis_index(horizontal)]
}

pub(crate) fn set_layout_pos(tree: &mut Tree, id: NodeId, horizontal: bool, pos: f32) {
    tree.node_mut(id).flex.layout_pos[axis_index(horizontal)] = pos;
}

/// Resolve the node's sizing basis on an axis: a relative callback evaluated
/// against the parent's available content-box extent if present, otherwise
/// the host-specified fixed size. 0 means "fit to contents".
pub(crate) fn rel_axis_size(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    let node = tree.node(id);
    let func = if horizontal { &node.func_w } else { &node.func_h };
    match func {
        Some(f) => f.eval(parent_available(tree, id, horizontal)),
        None => {
            if horizontal {
                node.source.width
            } else {
                node.source.height
            }
        }
    }
}

/// The parent's content-box extent on an axis, as seen by relative sizing.
fn parent_available(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    let Some(parent) = tree.node(id).parent else {
        return 0.0;
    };
    if tree.is_flex_enabled(parent) {
        layout_size(tree, parent, horizontal)
    } else {
        let node = tree.node(parent);
        if horizontal {
            node.w
        } else {
            node.h
        }
    }
}

/// Total padding along an axis; zero for anything but an enabled container.
pub(crate) fn padding_along(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    if tree.is_flex_enabled(id) {
        tree.container(id).padding.along(axis_index(horizontal))
    } else {
        0.0
    }
}

/// Outer (border-box) extent on an axis: scratch size plus own padding.
pub(crate) fn outer_axis_size(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    layout_size(tree, id, horizontal) + padding_along(tree, id, horizontal)
}

/// Outer extent including the item's margins on that axis.
pub(crate) fn outer_axis_size_with_margin(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    let margin = tree.item_config(id).margin.along(axis_index(horizontal));
    outer_axis_size(tree, id, horizontal) + margin
}

/// Minimum outer extent of an item on an axis.
///
/// A nested container reports its own layout minimum plus padding; a plain
/// box reports its current size unless it is shrinkable (then 0). The item's
/// explicit minimum applies only along the owning container's main axis.
pub(crate) fn axis_min_size(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    let plain = if tree.is_flex_enabled(id) {
        layout::container_axis_min_size(tree, id, horizontal)
            + padding_along(tree, id, horizontal)
    } else {
        let shrinkable = tree.item_config(id).effective_shrink(false) > 0.0;
        if shrinkable {
            0.0
        } else {
            layout_size(tree, id, horizontal)
        }
    };
    let explicit = match tree.flex_parent(id) {
        Some(owner) if tree.container(owner).is_horizontal() == horizontal => {
            tree.item_config(id).main_axis_min(horizontal)
        }
        _ => 0.0,
    };
    plain.max(explicit)
}

/// Minimum outer extent including margins.
pub(crate) fn axis_min_size_with_margin(tree: &Tree, id: NodeId, horizontal: bool) -> f32 {
    let margin = tree.item_config(id).margin.along(axis_index(horizontal));
    axis_min_size(tree, id, horizontal) + margin
}

/// Reset a plain box's scratch sizes from its sizing basis.
pub(crate) fn reset_layout_size(tree: &mut Tree, id: NodeId) {
    let w = rel_axis_size(tree, id, true);
    let h = rel_axis_size(tree, id, false);
    let flex = &mut tree.node_mut(id).flex;
    flex.layout_size = [w, h];
}

/// Resize an item's outer extent on an axis.
///
/// For a nested container this re-enters its layout on the affected axis;
/// for a plain box it just rewrites the scratch size.
pub(crate) fn resize_item_axis(tree: &mut Tree, id: NodeId, horizontal: bool, new_outer: f32) {
    if tree.is_flex_enabled(id) {
        if tree.container(id).is_horizontal() == horizontal {
            layout::resize_main_axis(tree, id, new_outer);
        } else {
            layout::resize_cross_axis(tree, id, new_outer);
        }
    } else {
        set_layout_size(tree, id, horizontal, new_outer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::FlexContainer;
    use luster_core::Edges;

    #[test]
    fn test_axis_index() {
        assert_eq!(axis_index(true), 0);
        assert_eq!(axis_index(false), 1);
    }

    #[test]
    fn test_scratch_accessors() {
        let mut tree = Tree::new();
        let id = tree.new_node();
        set_layout_size(&mut tree, id, true, 12.0);
        set_layout_size(&mut tree, id, false, 34.0);
        set_layout_pos(&mut tree, id, true, 5.0);
        assert_eq!(layout_size(&tree, id, true), 12.0);
        assert_eq!(layout_size(&tree, id, false), 34.0);
        assert_eq!(layout_pos(&tree, id, true), 5.0);
    }

    #[test]
    fn test_rel_axis_size_prefers_callback() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.add_child(parent, child);
        tree.set_flex(parent, Some(FlexContainer::new()));
        set_layout_size(&mut tree, parent, true, 200.0);
        tree.set_width_fn(child, |pw| pw * 0.3);
        assert_eq!(rel_axis_size(&tree, child, true), 60.0);
        // fixed basis without a callback
        tree.set_height(child, 40.0);
        assert_eq!(rel_axis_size(&tree, child, false), 40.0);
    }

    #[test]
    fn test_outer_size_folds_padding_and_margin() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.add_child(parent, child);
        tree.set_flex(parent, Some(FlexContainer::new()));
        tree.set_flex(
            child,
            Some(FlexContainer::new().padding(Edges::uniform(10.0))),
        );
        tree.set_flex_item(
            child,
            Some(crate::item::FlexItem::new().margin(Edges::new(1.0, 2.0, 3.0, 4.0))),
        );
        set_layout_size(&mut tree, child, true, 100.0);
        assert_eq!(outer_axis_size(&tree, child, true), 120.0);
        assert_eq!(outer_axis_size_with_margin(&tree, child, true), 124.0);
    }

    #[test]
    fn test_plain_min_size_depends_on_shrinkability() {
        let mut tree = Tree::new();
        let parent = tree.new_node();
        let child = tree.new_node();
        tree.add_child(parent, child);
        tree.set_flex(parent, Some(FlexContainer::new()));
        set_layout_size(&mut tree, child, true, 80.0);
        // default plain boxes are not shrinkable: min is the current size
        assert_eq!(axis_min_size(&tree, child, true), 80.0);
        // shrinkable boxes go to zero unless an explicit floor is set
        tree.set_shrink(child, Some(1.0));
        set_layout_size(&mut tree, child, true, 80.0);
        assert_eq!(axis_min_size(&tree, child, true), 0.0);
        tree.set_min_width(child, 50.0);
        set_layout_size(&mut tree, child, true, 80.0);
        assert_eq!(axis_min_size(&tree, child, true), 50.0);
        // min_width does not constrain the vertical axis of a row container
        set_layout_size(&mut tree, child, false, 80.0);
        tree.set_shrink(child, Some(1.0));
        set_layout_size(&mut tree, child, false, 80.0);
        assert_eq!(axis_min_size(&tree, child, false), 0.0);
    }
}
