//! Flexbox-style layout for a retained scene tree.
//!
//! Nodes live in an arena [`Tree`]; any node can be turned into a flex
//! container with [`Tree::set_flex`], making its visible children
//! participate as flex items. Layout is incremental: property changes mark
//! the affected layout roots dirty and [`Tree::update`] recomputes only
//! those subtrees, committing final coordinates back onto the nodes.
//!
//! ```
//! use luster_layout::{FlexContainer, JustifyContent, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.new_node();
//! tree.set_width(root, 300.0);
//! tree.set_flex(
//!     root,
//!     Some(FlexContainer::new().justify_content(JustifyContent::SpaceBetween)),
//! );
//! for _ in 0..3 {
//!     let child = tree.new_node();
//!     tree.set_size(child, 50.0, 50.0);
//!     tree.add_child(root, child);
//! }
//! tree.update();
//! assert_eq!(tree.layout(root).height, 50.0);
//! ```

mod align;
mod axis;
mod container;
mod coords;
mod grow;
mod item;
mod layout;
mod line;
mod lines;
mod shrink;
mod spacing;
mod target;
mod tree;

pub use container::{AlignContent, AlignItems, FlexContainer, FlexDirection, JustifyContent};
pub use item::FlexItem;
pub use tree::{NodeId, Tree};

pub use luster_core::{ConfigError, Edges, Rect, Size};
