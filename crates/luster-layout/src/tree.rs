//! The scene tree: an index arena of layout targets.
//!
//! Nodes are addressed by [`NodeId`] handles; the tree owns every node and all
//! flex state attached to it. Mutations mark the nearest enclosing layout root
//! dirty; [`Tree::update`] drains the dirty-root queue and runs one layout
//! pass per root.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use luster_core::{Edges, Rect};

use crate::container::{AlignContent, AlignItems, FlexContainer, FlexDirection, JustifyContent};
use crate::item::FlexItem;
use crate::target::{FlexTarget, Recalc};
use crate::{coords, layout};

/// Handle to a node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Relative sizing callback, evaluated against the parent's available
/// content-box extent on the same axis.
pub(crate) struct SizeFn(Box<dyn Fn(f32) -> f32>);

impl SizeFn {
    pub(crate) fn new(f: impl Fn(f32) -> f32 + 'static) -> Self {
        Self(Box::new(f))
    }

    pub(crate) fn eval(&self, available: f32) -> f32 {
        (self.0)(available)
    }
}

impl fmt::Debug for SizeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SizeFn")
    }
}

/// A single layout target.
#[derive(Debug)]
pub(crate) struct Node {
    /// Committed geometry, relative to the parent node.
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) w: f32,
    pub(crate) h: f32,
    /// Host-specified basis geometry, restored when flex is disabled.
    pub(crate) source: Rect,
    /// Relative width callback; takes precedence over `source.width`.
    pub(crate) func_w: Option<SizeFn>,
    /// Relative height callback; takes precedence over `source.height`.
    pub(crate) func_h: Option<SizeFn>,
    /// Invisible nodes are excluded from layout entirely.
    pub(crate) visible: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    /// Flex adapter state (dirty flag, container/item configs, scratch axes).
    pub(crate) flex: FlexTarget,
}

impl Node {
    fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            source: Rect::ZERO,
            func_w: None,
            func_h: None,
            visible: true,
            parent: None,
            children: Vec::new(),
            flex: FlexTarget::default(),
        }
    }
}

/// Arena of layout targets plus the dirty-root schedule.
#[derive(Debug, Default)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    /// Layout roots awaiting a pass, in request order.
    dirty_roots: VecDeque<NodeId>,
    /// O(1) containment for the queue.
    dirty_root_set: HashSet<NodeId>,
}

impl Tree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node (visible, zero-sized) and return its handle.
    pub fn new_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new());
        id
    }

    /// Number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -- structure ----------------------------------------------------------

    /// Append `child` to `parent`'s children, reparenting if needed.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).parent.is_some() {
            self.remove_child(child);
        }
        self.node_mut(parent).children.push(child);
        self.node_mut(child).parent = Some(parent);
        self.mark_dirty(child);
        if self.is_flex_enabled(parent) {
            self.mark_dirty(parent);
        }
    }

    /// Detach `child` from its parent, restoring its source geometry if it
    /// was laid out as a flex item.
    pub fn remove_child(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).parent else {
            return;
        };
        let was_item = self.flex_parent(child).is_some();
        self.node_mut(parent).children.retain(|&c| c != child);
        self.node_mut(child).parent = None;
        if was_item {
            self.restore_source_geometry(child);
            self.mark_dirty(parent);
        }
    }

    /// Parent handle, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Ordered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    // -- geometry and visibility --------------------------------------------

    /// Set the node's position basis.
    ///
    /// Flex layout overrides the position of flex items on the next pass.
    pub fn set_position(&mut self, id: NodeId, x: f32, y: f32) {
        let node = self.node_mut(id);
        node.source.x = x;
        node.source.y = y;
        node.x = x;
        node.y = y;
        self.mark_dirty(id);
    }

    /// Set both size bases, clearing any relative sizing callbacks.
    pub fn set_size(&mut self, id: NodeId, w: f32, h: f32) {
        self.set_width(id, w);
        self.set_height(id, h);
    }

    /// Set the width basis (0 = auto), clearing a relative width callback.
    pub fn set_width(&mut self, id: NodeId, w: f32) {
        let node = self.node_mut(id);
        node.source.width = w;
        node.func_w = None;
        node.w = w;
        self.mark_dirty(id);
    }

    /// Set the height basis (0 = auto), clearing a relative height callback.
    pub fn set_height(&mut self, id: NodeId, h: f32) {
        let node = self.node_mut(id);
        node.source.height = h;
        node.func_h = None;
        node.h = h;
        self.mark_dirty(id);
    }

    /// Derive the node's width from the parent's available width on every
    /// pass, e.g. `tree.set_width_fn(id, |pw| pw * 0.3)`.
    pub fn set_width_fn(&mut self, id: NodeId, f: impl Fn(f32) -> f32 + 'static) {
        self.node_mut(id).func_w = Some(SizeFn::new(f));
        self.mark_dirty(id);
    }

    /// Derive the node's height from the parent's available height.
    pub fn set_height_fn(&mut self, id: NodeId, f: impl Fn(f32) -> f32 + 'static) {
        self.node_mut(id).func_h = Some(SizeFn::new(f));
        self.mark_dirty(id);
    }

    /// Show or hide a node. Hidden nodes do not participate in layout.
    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if self.node(id).visible == visible {
            return;
        }
        self.node_mut(id).visible = visible;
        if let Some(parent) = self.flex_parent(id) {
            self.mark_dirty(parent);
        }
    }

    /// Committed geometry of a node, relative to its parent.
    #[must_use]
    pub fn layout(&self, id: NodeId) -> Rect {
        let node = self.node(id);
        Rect::new(node.x, node.y, node.w, node.h)
    }

    // -- container properties ------------------------------------------------

    /// Whether the node currently establishes a flex context.
    #[must_use]
    pub fn is_flex_container(&self, id: NodeId) -> bool {
        self.is_flex_enabled(id)
    }

    pub(crate) fn container(&self, id: NodeId) -> &FlexContainer {
        self.node(id)
            .flex
            .container
            .as_ref()
            .expect("node is not a flex container")
    }

    pub(crate) fn container_mut(&mut self, id: NodeId) -> &mut FlexContainer {
        self.node_mut(id)
            .flex
            .container
            .as_mut()
            .expect("node is not a flex container")
    }

    /// Change the main axis direction of an enabled container.
    pub fn set_direction(&mut self, id: NodeId, direction: FlexDirection) {
        self.container_mut(id).direction = direction;
        self.mark_dirty(id);
    }

    /// Enable or disable wrapping on an enabled container.
    pub fn set_wrap(&mut self, id: NodeId, wrap: bool) {
        self.container_mut(id).wrap = wrap;
        self.mark_dirty(id);
    }

    /// Change the default item alignment of an enabled container.
    pub fn set_align_items(&mut self, id: NodeId, align: AlignItems) {
        self.container_mut(id).align_items = align;
        self.mark_dirty(id);
    }

    /// Change the line distribution of an enabled container.
    pub fn set_align_content(&mut self, id: NodeId, align: AlignContent) {
        self.container_mut(id).align_content = align;
        self.mark_dirty(id);
    }

    /// Change the main axis distribution of an enabled container.
    pub fn set_justify_content(&mut self, id: NodeId, justify: JustifyContent) {
        self.container_mut(id).justify_content = justify;
        self.mark_dirty(id);
    }

    /// Change the inner padding of an enabled container.
    pub fn set_padding(&mut self, id: NodeId, padding: Edges) {
        self.container_mut(id).padding = padding;
        self.mark_dirty(id);
    }

    // -- item properties -----------------------------------------------------

    fn item_config_mut(&mut self, id: NodeId) -> &mut FlexItem {
        self.node_mut(id).flex.item.get_or_insert_with(FlexItem::new)
    }

    fn mark_item_changed(&mut self, id: NodeId) {
        self.mark_dirty(id);
        if let Some(parent) = self.flex_parent(id) {
            self.mark_dirty(parent);
        }
    }

    /// Set the grow factor of an item.
    pub fn set_grow(&mut self, id: NodeId, grow: f32) {
        self.item_config_mut(id).grow = grow;
        self.mark_item_changed(id);
    }

    /// Set or clear (`None` = auto) the shrink factor of an item.
    pub fn set_shrink(&mut self, id: NodeId, shrink: Option<f32>) {
        self.item_config_mut(id).shrink = shrink;
        self.mark_item_changed(id);
    }

    /// Set or clear the per-item alignment override.
    pub fn set_align_self(&mut self, id: NodeId, align: Option<AlignItems>) {
        self.item_config_mut(id).align_self = align;
        self.mark_item_changed(id);
    }

    /// Set the minimum width floor of an item.
    pub fn set_min_width(&mut self, id: NodeId, min_width: f32) {
        self.item_config_mut(id).min_width = min_width;
        self.mark_item_changed(id);
    }

    /// Set the minimum height floor of an item.
    pub fn set_min_height(&mut self, id: NodeId, min_height: f32) {
        self.item_config_mut(id).min_height = min_height;
        self.mark_item_changed(id);
    }

    /// Set the outer margins of an item.
    pub fn set_margin(&mut self, id: NodeId, margin: Edges) {
        self.item_config_mut(id).margin = margin;
        self.mark_item_changed(id);
    }

    // -- layout scheduling ---------------------------------------------------

    /// Queue a layout root for the next [`Tree::update`].
    pub(crate) fn request_layout(&mut self, root: NodeId) {
        if self.dirty_root_set.insert(root) {
            self.dirty_roots.push_back(root);
        }
    }

    /// Whether any layout root is awaiting a pass.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        !self.dirty_roots.is_empty()
    }

    /// Run pending layout passes and commit final geometry.
    ///
    /// Idempotent: a second call with no intervening mutation is a no-op and
    /// leaves all committed geometry unchanged.
    pub fn update(&mut self) {
        while let Some(root) = self.dirty_roots.pop_front() {
            self.dirty_root_set.remove(&root);
            if !self.is_flex_enabled(root) {
                // disabled between request and pass
                continue;
            }
            if self.node(root).flex.recalc > Recalc::Clean {
                layout::update_layout_tree(self, root);
                coords::finalize(self, root);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_size_commits_outside_flex() {
        let mut tree = Tree::new();
        let id = tree.new_node();
        tree.set_position(id, 5.0, 6.0);
        tree.set_size(id, 40.0, 30.0);
        assert_eq!(tree.layout(id), Rect::new(5.0, 6.0, 40.0, 30.0));
        assert!(!tree.needs_update());
    }

    #[test]
    fn test_add_child_reparents() {
        let mut tree = Tree::new();
        let a = tree.new_node();
        let b = tree.new_node();
        let child = tree.new_node();
        tree.add_child(a, child);
        assert_eq!(tree.parent(child), Some(a));
        tree.add_child(b, child);
        assert_eq!(tree.parent(child), Some(b));
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[child]);
    }

    #[test]
    fn test_reparenting_out_of_a_container_restores_geometry() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        tree.set_flex(root, Some(FlexContainer::new()));
        let sibling = tree.new_node();
        tree.set_size(sibling, 30.0, 30.0);
        tree.add_child(root, sibling);
        let child = tree.new_node();
        tree.set_position(child, 9.0, 9.0);
        tree.set_size(child, 20.0, 20.0);
        tree.add_child(root, child);
        tree.update();
        assert_eq!(tree.layout(child).x, 30.0);

        tree.remove_child(child);
        assert_eq!(tree.layout(child), Rect::new(9.0, 9.0, 20.0, 20.0));
        // the old container reflows without the removed item
        tree.update();
        assert_eq!(tree.layout(root).width, 30.0);
    }

    #[test]
    fn test_size_fn_replaced_by_fixed_size() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        tree.set_width(root, 100.0);
        tree.set_flex(root, Some(FlexContainer::new()));
        let child = tree.new_node();
        tree.set_height(child, 10.0);
        tree.set_width_fn(child, |w| w / 2.0);
        tree.add_child(root, child);
        tree.update();
        assert_eq!(tree.layout(child).width, 50.0);

        tree.set_width(child, 25.0);
        tree.update();
        assert_eq!(tree.layout(child).width, 25.0);
    }

    #[test]
    fn test_update_with_nothing_dirty_is_a_noop() {
        let mut tree = Tree::new();
        tree.update();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}
