//! Flex container configuration: direction, wrapping, alignment, padding.

use std::str::FromStr;

use luster_core::{ConfigError, Edges};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutState;

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    /// Horizontal, left to right
    #[default]
    Row,
    /// Horizontal, right to left
    RowReverse,
    /// Vertical, top to bottom
    Column,
    /// Vertical, bottom to top
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis runs horizontally.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items flow against the natural axis direction.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

impl FromStr for FlexDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::Row),
            "row-reverse" => Ok(Self::RowReverse),
            "column" => Ok(Self::Column),
            "column-reverse" => Ok(Self::ColumnReverse),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

/// Cross axis alignment of items within a line.
///
/// Also the value space of a flex item's `align_self` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    /// Align to the line start
    FlexStart,
    /// Align to the line end
    FlexEnd,
    /// Center within the line
    Center,
    /// Stretch to fill the line
    #[default]
    Stretch,
}

impl FromStr for AlignItems {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Self::FlexStart),
            "flex-end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "stretch" => Ok(Self::Stretch),
            other => Err(ConfigError::InvalidAlignItems(other.to_string())),
        }
    }
}

/// Cross axis distribution of lines in a wrapping container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignContent {
    /// Pack lines at the start
    #[default]
    FlexStart,
    /// Pack lines at the end
    FlexEnd,
    /// Center lines
    Center,
    /// Distribute space between lines
    SpaceBetween,
    /// Distribute space around lines
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
    /// Grow lines to fill the cross axis
    Stretch,
}

impl FromStr for AlignContent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Self::FlexStart),
            "flex-end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            "stretch" => Ok(Self::Stretch),
            other => Err(ConfigError::InvalidAlignContent(other.to_string())),
        }
    }
}

/// Main axis distribution of items within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack items at the start
    #[default]
    FlexStart,
    /// Pack items at the end
    FlexEnd,
    /// Center items
    Center,
    /// Distribute space between items
    SpaceBetween,
    /// Distribute space around items
    SpaceAround,
    /// Distribute space evenly, including edges
    SpaceEvenly,
}

impl FromStr for JustifyContent {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex-start" => Ok(Self::FlexStart),
            "flex-end" => Ok(Self::FlexEnd),
            "center" => Ok(Self::Center),
            "space-between" => Ok(Self::SpaceBetween),
            "space-around" => Ok(Self::SpaceAround),
            "space-evenly" => Ok(Self::SpaceEvenly),
            other => Err(ConfigError::InvalidJustifyContent(other.to_string())),
        }
    }
}

/// Flex container configuration attached to a tree node.
///
/// Enabling a container on a node makes its visible children participate as
/// flex items; the node's own width/height become the layout basis, with 0
/// meaning "fit to contents".
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlexContainer {
    /// Main axis direction
    pub direction: FlexDirection,
    /// Whether items wrap onto multiple lines
    pub wrap: bool,
    /// Default cross axis alignment of items
    pub align_items: AlignItems,
    /// Cross axis distribution of wrap lines
    pub align_content: AlignContent,
    /// Main axis distribution of items
    pub justify_content: JustifyContent,
    /// Inner padding shifting children away from the container edges
    pub padding: Edges,
    /// Per-pass layout bookkeeping, rebuilt by the engine.
    #[serde(skip)]
    pub(crate) state: LayoutState,
}

impl FlexContainer {
    /// Create a container with default configuration (row, no wrap,
    /// `align-items: stretch`, `justify-content: flex-start`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main axis direction.
    #[must_use]
    pub fn direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Enable or disable wrapping.
    #[must_use]
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the default item alignment.
    #[must_use]
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Set the line distribution mode.
    #[must_use]
    pub fn align_content(mut self, align: AlignContent) -> Self {
        self.align_content = align;
        self
    }

    /// Set the main axis distribution mode.
    #[must_use]
    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set the inner padding.
    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Whether the main axis runs horizontally.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.direction.is_horizontal()
    }

    /// Whether the main axis is reversed.
    #[must_use]
    pub const fn is_reverse(&self) -> bool {
        self.direction.is_reverse()
    }
}

impl Clone for FlexContainer {
    fn clone(&self) -> Self {
        // Layout state is per-node scratch and never travels with the config.
        Self {
            direction: self.direction,
            wrap: self.wrap,
            align_items: self.align_items,
            align_content: self.align_content,
            justify_content: self.justify_content,
            padding: self.padding,
            state: LayoutState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axis_queries() {
        assert!(FlexDirection::Row.is_horizontal());
        assert!(FlexDirection::RowReverse.is_horizontal());
        assert!(!FlexDirection::Column.is_horizontal());
        assert!(FlexDirection::RowReverse.is_reverse());
        assert!(FlexDirection::ColumnReverse.is_reverse());
        assert!(!FlexDirection::Row.is_reverse());
    }

    #[test]
    fn test_defaults() {
        let c = FlexContainer::new();
        assert_eq!(c.direction, FlexDirection::Row);
        assert!(!c.wrap);
        assert_eq!(c.align_items, AlignItems::Stretch);
        assert_eq!(c.align_content, AlignContent::FlexStart);
        assert_eq!(c.justify_content, JustifyContent::FlexStart);
        assert_eq!(c.padding, Edges::ZERO);
    }

    #[test]
    fn test_builder() {
        let c = FlexContainer::new()
            .direction(FlexDirection::ColumnReverse)
            .wrap(true)
            .align_items(AlignItems::Center)
            .align_content(AlignContent::Stretch)
            .justify_content(JustifyContent::SpaceBetween)
            .padding(Edges::uniform(5.0));
        assert_eq!(c.direction, FlexDirection::ColumnReverse);
        assert!(c.wrap);
        assert_eq!(c.align_items, AlignItems::Center);
        assert_eq!(c.align_content, AlignContent::Stretch);
        assert_eq!(c.justify_content, JustifyContent::SpaceBetween);
        assert_eq!(c.padding.left, 5.0);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(
            "row-reverse".parse::<FlexDirection>(),
            Ok(FlexDirection::RowReverse)
        );
        assert_eq!(
            "space-evenly".parse::<JustifyContent>(),
            Ok(JustifyContent::SpaceEvenly)
        );
        assert_eq!("stretch".parse::<AlignContent>(), Ok(AlignContent::Stretch));
        assert_eq!("center".parse::<AlignItems>(), Ok(AlignItems::Center));
    }

    #[test]
    fn test_invalid_values_are_rejected_before_layout() {
        assert!("bogus".parse::<AlignItems>().is_err());
        // `stretch` is valid for align-content but not justify-content
        assert!("stretch".parse::<JustifyContent>().is_err());
        // `space-between` is not a valid item alignment
        assert!("space-between".parse::<AlignItems>().is_err());
        assert!("diagonal".parse::<FlexDirection>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&JustifyContent::SpaceBetween).expect("serialize");
        assert_eq!(json, "\"space-between\"");
        let parsed: AlignContent = serde_json::from_str("\"space-around\"").expect("deserialize");
        assert_eq!(parsed, AlignContent::SpaceAround);
    }
}
