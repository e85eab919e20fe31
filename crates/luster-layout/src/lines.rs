//! Main-axis pass: gathers participating children, splits them into wrap
//! lines and lays each line out.

use log::trace;

use crate::line::{self, LineLayout};
use crate::target::Recalc;
use crate::tree::{NodeId, Tree};
use crate::{axis, layout};

/// Run the main-axis layout for `container`: refresh child sizes, break the
/// children into lines and distribute space within each line.
///
/// The resulting lines and the participating-item list are stored in the
/// container's layout state for the cross-axis pass to consume.
pub(crate) fn layout_lines(tree: &mut Tree, container: NodeId) {
    let items = collect_items(tree, container);
    prepare_items(tree, &items);

    let ctx = layout::ctx(tree, container);
    let mut lines: Vec<LineLayout> = Vec::new();
    let mut main_content_size: f32 = 0.0;
    let mut line_start = 0;
    let mut cursor = 0.0;

    for (i, &id) in items.iter().enumerate() {
        let size = axis::outer_axis_size_with_margin(tree, id, ctx.horizontal);
        if ctx.wrap && i > line_start && cursor + size > ctx.main_size {
            lines.push(LineLayout {
                start: line_start,
                end: i,
                cross_size: 0.0,
            });
            main_content_size = main_content_size.max(cursor);
            line_start = i;
            cursor = 0.0;
        }
        cursor += size;
    }
    if !items.is_empty() {
        lines.push(LineLayout {
            start: line_start,
            end: items.len(),
            cross_size: 0.0,
        });
        main_content_size = main_content_size.max(cursor);
    }

    trace!(
        target: "luster::lines",
        "container {:?}: {} items in {} line(s), content size {}",
        container,
        items.len(),
        lines.len(),
        main_content_size
    );

    for lin in &lines {
        let line_items = lin.slice(&items);
        let available = line::remaining_space(tree, &ctx, line_items);
        line::perform_layout(tree, &ctx, line_items, available);
    }

    let state = &mut tree.container_mut(container).state;
    state.items = items;
    state.lines = lines;
    state.main_content_size = main_content_size;
}

/// Children take part in layout unless they are invisible or have opted out
/// as flex items.
fn collect_items(tree: &Tree, container: NodeId) -> Vec<NodeId> {
    tree.node(container)
        .children
        .iter()
        .copied()
        .filter(|&c| {
            let node = tree.node(c);
            node.visible && !node.flex.item_disabled
        })
        .collect()
}

/// Refresh each item's scratch size before line breaking. Nested containers
/// that are dirty or carry size functions are laid out; plain items get
/// their base sizes re-evaluated.
fn prepare_items(tree: &mut Tree, items: &[NodeId]) {
    for &id in items {
        if tree.is_flex_enabled(id) {
            let node = tree.node(id);
            if node.flex.recalc > Recalc::Clean || node.func_w.is_some() || node.func_h.is_some() {
                layout::update_layout_tree(tree, id);
            }
        } else {
            axis::reset_layout_size(tree, id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::FlexContainer;

    fn row(wrap: bool, width: f32, sizes: &[(f32, f32)]) -> (Tree, NodeId) {
        let mut tree = Tree::new();
        let container = tree.new_node();
        if width > 0.0 {
            tree.set_width(container, width);
        }
        tree.set_flex(container, Some(FlexContainer::new().wrap(wrap)));
        for &(w, h) in sizes {
            let id = tree.new_node();
            tree.set_size(id, w, h);
            tree.add_child(container, id);
        }
        (tree, container)
    }

    #[test]
    fn test_single_line_without_wrap() {
        let (mut tree, container) = row(false, 100.0, &[(60.0, 10.0), (60.0, 10.0)]);
        layout::update_layout_tree(&mut tree, container);
        let state = &tree.container(container).state;
        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.main_content_size, 120.0);
    }

    #[test]
    fn test_wrap_breaks_on_overflow() {
        let (mut tree, container) = row(true, 100.0, &[(60.0, 10.0), (60.0, 10.0), (30.0, 10.0)]);
        layout::update_layout_tree(&mut tree, container);
        let state = &tree.container(container).state;
        assert_eq!(state.lines.len(), 2);
        assert_eq!(state.lines[0].end, 1);
        assert_eq!(state.lines[1].end, 3);
    }

    #[test]
    fn test_exact_fit_does_not_wrap() {
        let (mut tree, container) = row(true, 120.0, &[(60.0, 10.0), (60.0, 10.0)]);
        layout::update_layout_tree(&mut tree, container);
        assert_eq!(tree.container(container).state.lines.len(), 1);
    }

    #[test]
    fn test_oversized_item_gets_its_own_line() {
        let (mut tree, container) = row(true, 100.0, &[(150.0, 10.0), (40.0, 10.0)]);
        layout::update_layout_tree(&mut tree, container);
        let state = &tree.container(container).state;
        // a first item wider than the container still opens the line
        assert_eq!(state.lines.len(), 2);
        assert_eq!(state.lines[0].start, 0);
        assert_eq!(state.lines[0].end, 1);
    }

    #[test]
    fn test_invisible_children_are_skipped() {
        let (mut tree, container) = row(false, 100.0, &[(60.0, 10.0), (60.0, 10.0)]);
        let second = tree.children(container)[1];
        tree.set_visible(second, false);
        layout::update_layout_tree(&mut tree, container);
        let state = &tree.container(container).state;
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.main_content_size, 60.0);
    }
}
