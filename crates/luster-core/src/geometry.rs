//! Geometric primitives: `Size`, `Rect`, `Edges`.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Read the extent along an axis (0 = horizontal, 1 = vertical).
    #[must_use]
    pub const fn axis(&self, axis: usize) -> f32 {
        if axis == 0 {
            self.width
        } else {
            self.height
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size, relative to the parent box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Size of this rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (x + width).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Per-side box offsets, used for margins and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Left offset
    pub left: f32,
    /// Top offset
    pub top: f32,
    /// Right offset
    pub right: f32,
    /// Bottom offset
    pub bottom: f32,
}

impl Edges {
    /// Zero offsets on all sides.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create edges with explicit values for each side.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create uniform edges with the same value on all sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal extent (left + right).
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical extent (top + bottom).
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Leading offset along an axis (0 = horizontal, 1 = vertical).
    #[must_use]
    pub const fn before(&self, axis: usize) -> f32 {
        if axis == 0 {
            self.left
        } else {
            self.top
        }
    }

    /// Trailing offset along an axis (0 = horizontal, 1 = vertical).
    #[must_use]
    pub const fn after(&self, axis: usize) -> f32 {
        if axis == 0 {
            self.right
        } else {
            self.bottom
        }
    }

    /// Total extent along an axis (0 = horizontal, 1 = vertical).
    #[must_use]
    pub fn along(&self, axis: usize) -> f32 {
        self.before(axis) + self.after(axis)
    }
}
