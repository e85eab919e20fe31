//! Per-container layout driver: runs the main and cross axis passes and
//! handles re-entrant resizes from parent containers.

use log::debug;

use crate::container::{AlignContent, AlignItems, JustifyContent};
use crate::line::{self, LineLayout};
use crate::target::Recalc;
use crate::tree::{NodeId, Tree};
use crate::{align, axis, lines};

/// Scratch state a container accumulates over one layout pass. Content-box
/// sizes: the container's own padding is excluded here and re-added when
/// coordinates are committed.
#[derive(Debug, Default)]
pub(crate) struct LayoutState {
    /// Children participating in layout, in tree order.
    pub(crate) items: Vec<NodeId>,
    /// Wrap lines over `items`.
    pub(crate) lines: Vec<LineLayout>,
    /// Content-box main axis size (0 while fitting to contents).
    pub(crate) main_size: f32,
    /// Content-box cross axis size.
    pub(crate) cross_size: f32,
    /// Extent of the widest line before space distribution.
    pub(crate) main_content_size: f32,
    /// Whether the main axis basis was non-zero at pass start.
    pub(crate) has_fixed_main_basis: bool,
    /// Whether the cross axis basis was non-zero at pass start.
    pub(crate) has_fixed_cross_basis: bool,
    /// Re-entrancy guard: a parent is resizing our main axis.
    pub(crate) resizing_main: bool,
    /// Re-entrancy guard: a parent is resizing our cross axis.
    pub(crate) resizing_cross: bool,
}

/// Immutable snapshot of the container configuration the passes consult.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AxisCtx {
    pub(crate) horizontal: bool,
    pub(crate) reverse: bool,
    pub(crate) wrap: bool,
    pub(crate) main_size: f32,
    pub(crate) cross_size: f32,
    pub(crate) justify: JustifyContent,
    pub(crate) align_items: AlignItems,
    pub(crate) align_content: AlignContent,
}

pub(crate) fn ctx(tree: &Tree, container: NodeId) -> AxisCtx {
    let c = tree.container(container);
    AxisCtx {
        horizontal: c.is_horizontal(),
        reverse: c.is_reverse(),
        wrap: c.wrap,
        main_size: c.state.main_size,
        cross_size: c.state.cross_size,
        justify: c.justify_content,
        align_items: c.align_items,
        align_content: c.align_content,
    }
}

/// Fully lay out a container subtree: establish the axis sizes from the
/// sizing basis, then run the main and cross axis passes. Nested dirty
/// containers are laid out on the way.
pub(crate) fn update_layout_tree(tree: &mut Tree, container: NodeId) {
    tree.node_mut(container).flex.recalc = Recalc::Clean;
    set_initial_axis_sizes(tree, container);
    layout_axes(tree, container);
    debug!(
        target: "luster::layout",
        "container {:?}: laid out to {}x{} (content box)",
        container,
        tree.container(container).state.main_size,
        tree.container(container).state.cross_size
    );
}

/// Seed the pass from the sizing basis. A non-zero basis fixes the axis
/// (minus the container's own padding); zero means fit to contents.
fn set_initial_axis_sizes(tree: &mut Tree, container: NodeId) {
    let horizontal = tree.container(container).is_horizontal();
    let main_basis = axis::rel_axis_size(tree, container, horizontal);
    let cross_basis = axis::rel_axis_size(tree, container, !horizontal);
    let main_padding = axis::padding_along(tree, container, horizontal);
    let cross_padding = axis::padding_along(tree, container, !horizontal);

    let main = if main_basis > 0.0 {
        (main_basis - main_padding).max(0.0)
    } else {
        0.0
    };
    let cross = if cross_basis > 0.0 {
        (cross_basis - cross_padding).max(0.0)
    } else {
        0.0
    };

    let state = &mut tree.container_mut(container).state;
    state.main_size = main;
    state.cross_size = cross;
    state.has_fixed_main_basis = main_basis > 0.0;
    state.has_fixed_cross_basis = cross_basis > 0.0;
    state.resizing_main = false;
    state.resizing_cross = false;
    axis::set_layout_size(tree, container, horizontal, main);
    axis::set_layout_size(tree, container, !horizontal, cross);
}

fn layout_axes(tree: &mut Tree, container: NodeId) {
    layout_main_axis(tree, container);
    layout_cross_axis(tree, container);
}

fn layout_main_axis(tree: &mut Tree, container: NodeId) {
    lines::layout_lines(tree, container);
    fit_main_axis_size_to_contents(tree, container);
}

/// A container without a fixed main basis adopts its content size (the
/// widest line when wrapping), unless a parent is currently driving the axis.
fn fit_main_axis_size_to_contents(tree: &mut Tree, container: NodeId) {
    let state = &tree.container(container).state;
    if !state.resizing_main && !state.has_fixed_main_basis {
        let content = state.main_content_size;
        set_main_size(tree, container, content);
    }
}

fn set_main_size(tree: &mut Tree, container: NodeId, size: f32) {
    let horizontal = tree.container(container).is_horizontal();
    tree.container_mut(container).state.main_size = size;
    axis::set_layout_size(tree, container, horizontal, size);
}

fn set_cross_size(tree: &mut Tree, container: NodeId, size: f32) {
    let horizontal = tree.container(container).is_horizontal();
    tree.container_mut(container).state.cross_size = size;
    axis::set_layout_size(tree, container, !horizontal, size);
}

fn layout_cross_axis(tree: &mut Tree, container: NodeId) {
    measure_line_cross_sizes(tree, container);
    fit_cross_axis_size_to_contents(tree, container);
    align::align_content(tree, container);
}

/// Give every line a cross extent. Wrapping containers and containers
/// without a specified cross size measure each line from its tallest item;
/// otherwise the single line spans the container's cross size.
fn measure_line_cross_sizes(tree: &mut Tree, container: NodeId) {
    let horizontal = tree.container(container).is_horizontal();
    let state = &tree.container(container).state;
    let use_container_cross =
        !tree.container(container).wrap && (state.cross_size > 0.0 || state.resizing_cross);
    let container_cross = state.cross_size;
    let line_count = state.lines.len();

    for i in 0..line_count {
        let cross = if use_container_cross {
            container_cross
        } else {
            let state = &tree.container(container).state;
            let lin = state.lines[i];
            line::max_outer_cross_size(tree, horizontal, lin.slice(&state.items))
        };
        tree.container_mut(container).state.lines[i].cross_size = cross;
    }
}

fn fit_cross_axis_size_to_contents(tree: &mut Tree, container: NodeId) {
    let state = &tree.container(container).state;
    if !state.resizing_cross && !state.has_fixed_cross_basis {
        let total: f32 = state.lines.iter().map(|l| l.cross_size).sum();
        set_cross_size(tree, container, total);
    }
}

/// Re-enter layout with a new outer main-axis extent, as driven by the
/// parent's grower, shrinker or stretch. Both axes re-run because main-axis
/// changes can move the wrap points.
pub(crate) fn resize_main_axis(tree: &mut Tree, container: NodeId, new_outer_size: f32) {
    let horizontal = tree.container(container).is_horizontal();
    let padding = axis::padding_along(tree, container, horizontal);
    let new_size = (new_outer_size - padding).max(0.0);
    if new_size != tree.container(container).state.main_size {
        debug!(
            target: "luster::layout",
            "container {:?}: main axis resized to {}",
            container,
            new_size
        );
        tree.container_mut(container).state.resizing_main = true;
        set_main_size(tree, container, new_size);
        layout_axes(tree, container);
        tree.container_mut(container).state.resizing_main = false;
    }
}

/// Re-enter layout with a new outer cross-axis extent. Only the cross pass
/// re-runs; line membership is unaffected.
pub(crate) fn resize_cross_axis(tree: &mut Tree, container: NodeId, new_outer_size: f32) {
    let horizontal = tree.container(container).is_horizontal();
    let padding = axis::padding_along(tree, container, !horizontal);
    let new_size = (new_outer_size - padding).max(0.0);
    if new_size != tree.container(container).state.cross_size {
        debug!(
            target: "luster::layout",
            "container {:?}: cross axis resized to {}",
            container,
            new_size
        );
        tree.container_mut(container).state.resizing_cross = true;
        set_cross_size(tree, container, new_size);
        layout_cross_axis(tree, container);
        tree.container_mut(container).state.resizing_cross = false;
    }
}

/// Minimum content-box extent of a laid-out container on an axis, consulted
/// when the container shrinks as an item of its parent.
///
/// On the main axis a single line reports the sum of its items' minimums; a
/// multi-line container refuses to shrink below its assigned size (wrap
/// points would move). On the cross axis each line contributes its largest
/// item minimum.
pub(crate) fn container_axis_min_size(tree: &Tree, container: NodeId, horizontal: bool) -> f32 {
    let c = tree.container(container);
    let state = &c.state;
    if c.is_horizontal() == horizontal {
        match state.lines.len() {
            0 => 0.0,
            1 => line::main_axis_min_size(tree, horizontal, state.lines[0].slice(&state.items)),
            _ => state.main_size,
        }
    } else {
        let main_horizontal = c.is_horizontal();
        state
            .lines
            .iter()
            .map(|l| line::cross_axis_min_size(tree, main_horizontal, l.slice(&state.items)))
            .sum()
    }
}
