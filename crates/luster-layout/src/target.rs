//! The flex adapter attached to every tree node.
//!
//! Bridges a plain scene node and the flex subsystem: which role(s) the node
//! plays, its dirty flag, and the scratch axis coordinates written during a
//! pass and committed afterwards by the coordinates updater.

use crate::container::FlexContainer;
use crate::item::FlexItem;
use crate::tree::{NodeId, Tree};

/// Layout validity of a node, least to most dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) enum Recalc {
    /// Untouched since the last pass.
    #[default]
    Clean,
    /// Something below changed; recurse to find it.
    DescendantDirty,
    /// This node changed; its layout must be recomputed.
    SelfDirty,
}

/// Per-node flex state. Always embedded, lazily enabled.
#[derive(Debug, Default)]
pub(crate) struct FlexTarget {
    pub(crate) recalc: Recalc,
    /// Present when the node establishes a flex context for its children.
    pub(crate) container: Option<FlexContainer>,
    /// Item configuration; `None` participates with defaults.
    pub(crate) item: Option<FlexItem>,
    /// Explicitly opted out of the parent's flex flow.
    pub(crate) item_disabled: bool,
    /// Scratch axis positions `[x, y]` written during layout.
    pub(crate) layout_pos: [f32; 2],
    /// Scratch axis sizes `[w, h]`; content-box for containers.
    pub(crate) layout_size: [f32; 2],
}

impl Tree {
    /// Whether the node establishes a flex context.
    pub(crate) fn is_flex_enabled(&self, id: NodeId) -> bool {
        self.node(id).flex.container.is_some()
    }

    /// The container this node is laid out by, if it participates as an item.
    pub(crate) fn flex_parent(&self, id: NodeId) -> Option<NodeId> {
        if self.node(id).flex.item_disabled {
            return None;
        }
        let parent = self.node(id).parent?;
        self.is_flex_enabled(parent).then_some(parent)
    }

    /// Effective item configuration (defaults when not explicitly set).
    pub(crate) fn item_config(&self, id: NodeId) -> FlexItem {
        self.node(id).flex.item.unwrap_or_default()
    }

    /// The topmost flex container this node's layout originates from.
    pub(crate) fn layout_root(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = if self.is_flex_enabled(id) {
            id
        } else {
            self.flex_parent(id)?
        };
        while let Some(parent) = self.flex_parent(cur) {
            cur = parent;
        }
        Some(cur)
    }

    /// Mark a node as changed: the node itself must re-layout, ancestors up
    /// to the layout root learn a descendant changed, and the root is queued.
    pub(crate) fn mark_dirty(&mut self, id: NodeId) {
        if !self.is_flex_enabled(id) && self.flex_parent(id).is_none() {
            // plain node outside any flex context
            return;
        }
        self.node_mut(id).flex.recalc = Recalc::SelfDirty;
        let mut cur = id;
        while let Some(parent) = self.flex_parent(cur) {
            let flex = &mut self.node_mut(parent).flex;
            if flex.recalc < Recalc::DescendantDirty {
                flex.recalc = Recalc::DescendantDirty;
            }
            cur = parent;
        }
        if let Some(root) = self.layout_root(id) {
            self.request_layout(root);
        }
    }

    /// Enable (`Some`) or disable (`None`) flex-container behavior.
    ///
    /// Disabling restores the node's source geometry and releases all direct
    /// children from item layout, restoring theirs as well.
    pub fn set_flex(&mut self, id: NodeId, container: Option<FlexContainer>) {
        match container {
            Some(config) => {
                self.node_mut(id).flex.container = Some(config);
                self.mark_dirty(id);
            }
            None => {
                if !self.is_flex_enabled(id) {
                    return;
                }
                // release children first so their restore still sees a parent
                let children: Vec<NodeId> = self.node(id).children.clone();
                for child in children {
                    self.restore_source_geometry(child);
                    self.node_mut(child).flex.recalc = Recalc::Clean;
                }
                self.node_mut(id).flex.container = None;
                self.restore_source_geometry(id);
                self.node_mut(id).flex.recalc = Recalc::Clean;
                // the node may still be an item of an outer container
                if let Some(parent) = self.flex_parent(id) {
                    self.mark_dirty(parent);
                }
            }
        }
    }

    /// Configure (`Some`) or explicitly disable (`None`) flex-item behavior.
    ///
    /// A disabled item keeps its source geometry and is skipped by the
    /// parent's layout; the parent's remaining children still flow.
    pub fn set_flex_item(&mut self, id: NodeId, item: Option<FlexItem>) {
        match item {
            Some(config) => {
                let flex = &mut self.node_mut(id).flex;
                flex.item = Some(config);
                flex.item_disabled = false;
                self.mark_dirty(id);
                if let Some(parent) = self.flex_parent(id) {
                    self.mark_dirty(parent);
                }
            }
            None => {
                // capture the owner before the flag cuts the link
                let parent = self.flex_parent(id);
                let flex = &mut self.node_mut(id).flex;
                flex.item = None;
                flex.item_disabled = true;
                self.restore_source_geometry(id);
                if let Some(parent) = parent {
                    self.mark_dirty(parent);
                }
            }
        }
    }

    /// Put the host-specified geometry back on the node.
    pub(crate) fn restore_source_geometry(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.x = node.source.x;
        node.y = node.source.y;
        node.w = node.source.width;
        node.h = node.source.height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recalc_ordering() {
        assert!(Recalc::Clean < Recalc::DescendantDirty);
        assert!(Recalc::DescendantDirty < Recalc::SelfDirty);
    }

    #[test]
    fn test_layout_root_detection() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        let mid = tree.new_node();
        let leaf = tree.new_node();
        tree.add_child(root, mid);
        tree.add_child(mid, leaf);
        tree.set_flex(root, Some(FlexContainer::new()));
        tree.set_flex(mid, Some(FlexContainer::new()));

        assert_eq!(tree.layout_root(leaf), Some(root));
        assert_eq!(tree.layout_root(mid), Some(root));
        assert_eq!(tree.layout_root(root), Some(root));
    }

    #[test]
    fn test_disabled_item_breaks_the_chain() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        let mid = tree.new_node();
        tree.add_child(root, mid);
        tree.set_flex(root, Some(FlexContainer::new()));
        tree.set_flex(mid, Some(FlexContainer::new()));
        tree.set_flex_item(mid, None);

        // mid no longer participates in root's flow, so it roots itself
        assert_eq!(tree.layout_root(mid), Some(mid));
        assert_eq!(tree.flex_parent(mid), None);
    }

    #[test]
    fn test_dirty_propagation_marks_ancestors() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        let mid = tree.new_node();
        let leaf = tree.new_node();
        tree.add_child(root, mid);
        tree.add_child(mid, leaf);
        tree.set_flex(root, Some(FlexContainer::new()));
        tree.set_flex(mid, Some(FlexContainer::new()));
        tree.update();

        tree.set_width(leaf, 10.0);
        assert_eq!(tree.nodes[leaf.0].flex.recalc, Recalc::SelfDirty);
        assert!(tree.nodes[mid.0].flex.recalc >= Recalc::DescendantDirty);
        assert!(tree.nodes[root.0].flex.recalc >= Recalc::DescendantDirty);
        assert!(tree.needs_update());
    }

    #[test]
    fn test_disable_restores_source_geometry() {
        let mut tree = Tree::new();
        let root = tree.new_node();
        let child = tree.new_node();
        tree.add_child(root, child);
        tree.set_size(root, 100.0, 100.0);
        tree.set_position(child, 7.0, 8.0);
        tree.set_size(child, 30.0, 30.0);
        tree.set_flex(
            root,
            Some(FlexContainer::new().align_items(crate::container::AlignItems::FlexStart)),
        );
        tree.update();
        // layout moved the child to the line origin
        assert_eq!(tree.layout(child).x, 0.0);

        tree.set_flex(root, None);
        let r = tree.layout(child);
        assert_eq!((r.x, r.y), (7.0, 8.0));
        assert_eq!((r.width, r.height), (30.0, 30.0));
    }
}
