//! Flex item configuration: grow/shrink factors, self-alignment, margins.

use luster_core::Edges;
use serde::{Deserialize, Serialize};

use crate::container::AlignItems;

/// Flex item configuration attached to a tree node.
///
/// A node laid out inside a flex container participates with this
/// configuration; a node without one participates with the defaults.
///
/// `shrink` left unset resolves to 1 for items that are themselves flex
/// containers and 0 for plain boxes. Margins are never part of the
/// shrinkable amount: the engine shrinks an item's box, not its margins.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlexItem {
    /// Share of positive free space this item receives (0 = does not grow)
    pub grow: f32,
    /// Share of negative free space this item absorbs; `None` = auto
    pub shrink: Option<f32>,
    /// Per-item override of the container's `align_items`
    pub align_self: Option<AlignItems>,
    /// Minimum main axis width when the container is horizontal (0 = unset)
    pub min_width: f32,
    /// Minimum main axis height when the container is vertical (0 = unset)
    pub min_height: f32,
    /// Outer margins shifting the item within its line
    pub margin: Edges,
}

impl FlexItem {
    /// Create an item with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grow factor.
    #[must_use]
    pub fn grow(mut self, grow: f32) -> Self {
        self.grow = grow;
        self
    }

    /// Set the shrink factor.
    #[must_use]
    pub fn shrink(mut self, shrink: f32) -> Self {
        self.shrink = Some(shrink);
        self
    }

    /// Override the container's item alignment for this item.
    #[must_use]
    pub fn align_self(mut self, align: AlignItems) -> Self {
        self.align_self = Some(align);
        self
    }

    /// Set the minimum width floor used when shrinking along a horizontal
    /// main axis.
    #[must_use]
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the minimum height floor used when shrinking along a vertical
    /// main axis.
    #[must_use]
    pub fn min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set all four margins.
    #[must_use]
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Resolve the effective shrink factor.
    ///
    /// `flex_enabled` is whether the item itself establishes a flex context.
    #[must_use]
    pub(crate) fn effective_shrink(&self, flex_enabled: bool) -> f32 {
        self.shrink
            .unwrap_or(if flex_enabled { 1.0 } else { 0.0 })
            .max(0.0)
    }

    /// Explicit main axis minimum for the given orientation.
    #[must_use]
    pub(crate) const fn main_axis_min(&self, horizontal: bool) -> f32 {
        if horizontal {
            self.min_width
        } else {
            self.min_height
        }
    }
}
