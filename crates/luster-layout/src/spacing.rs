//! Justification spacing math, shared by both axes.
//!
//! The same distribution applies to items along the main axis
//! (`justify-content`) and to lines along the cross axis (`align-content`);
//! only the axis differs.

use crate::container::{AlignContent, JustifyContent};

/// Distribution mode for leftover space along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpacingMode {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Spacing-neutral: the caller grows boxes instead.
    Stretch,
}

impl From<JustifyContent> for SpacingMode {
    fn from(justify: JustifyContent) -> Self {
        match justify {
            JustifyContent::FlexStart => Self::FlexStart,
            JustifyContent::FlexEnd => Self::FlexEnd,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for SpacingMode {
    fn from(align: AlignContent) -> Self {
        match align {
            AlignContent::FlexStart => Self::FlexStart,
            AlignContent::FlexEnd => Self::FlexEnd,
            AlignContent::Center => Self::Center,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
            AlignContent::SpaceEvenly => Self::SpaceEvenly,
            AlignContent::Stretch => Self::Stretch,
        }
    }
}

/// Leading offset and per-gap spacing for `count` boxes with `remaining`
/// leftover space.
///
/// Over-constrained input never fails: the `space-*` modes degrade to
/// `center` when `remaining` is negative so layout stays deterministic.
pub(crate) fn spacing(mode: SpacingMode, count: usize, remaining: f32) -> (f32, f32) {
    match mode {
        SpacingMode::FlexStart | SpacingMode::Stretch => (0.0, 0.0),
        SpacingMode::FlexEnd => (remaining, 0.0),
        SpacingMode::Center => (remaining / 2.0, 0.0),
        SpacingMode::SpaceBetween => {
            let between = if count > 1 {
                remaining.max(0.0) / (count as f32 - 1.0)
            } else {
                0.0
            };
            (0.0, between)
        }
        SpacingMode::SpaceAround => {
            if remaining < 0.0 || count == 0 {
                spacing(SpacingMode::Center, count, remaining)
            } else {
                let gap = remaining / count as f32;
                (gap / 2.0, gap)
            }
        }
        SpacingMode::SpaceEvenly => {
            if remaining < 0.0 || count == 0 {
                spacing(SpacingMode::Center, count, remaining)
            } else {
                let gap = remaining / (count as f32 + 1.0);
                (gap, gap)
            }
        }
    }
}
