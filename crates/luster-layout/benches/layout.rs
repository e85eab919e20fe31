//! Benchmarks for full and incremental layout passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use luster_layout::{FlexContainer, NodeId, Tree};

fn wide_row(items: usize) -> (Tree, NodeId, Vec<NodeId>) {
    let mut tree = Tree::new();
    let root = tree.new_node();
    tree.set_width(root, 10_000.0);
    tree.set_flex(root, Some(FlexContainer::new().wrap(true)));
    let mut children = Vec::with_capacity(items);
    for i in 0..items {
        let child = tree.new_node();
        tree.set_size(child, 50.0 + (i % 7) as f32 * 10.0, 40.0);
        tree.add_child(root, child);
        children.push(child);
    }
    (tree, root, children)
}

fn nested_tree(depth: usize, fanout: usize) -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let root = tree.new_node();
    tree.set_size(root, 1920.0, 1080.0);
    tree.set_flex(root, Some(FlexContainer::new()));
    let mut frontier = vec![root];
    for _ in 0..depth {
        let mut next = Vec::new();
        for &parent in &frontier {
            for _ in 0..fanout {
                let child = tree.new_node();
                tree.set_flex(child, Some(FlexContainer::new()));
                let leaf = tree.new_node();
                tree.set_size(leaf, 20.0, 20.0);
                tree.add_child(child, leaf);
                tree.add_child(parent, child);
                next.push(child);
            }
        }
        frontier = next;
    }
    (tree, root)
}

fn bench_wide_row(c: &mut Criterion) {
    c.bench_function("layout_wide_row_1000", |b| {
        b.iter_batched(
            || wide_row(1000).0,
            |mut tree| {
                tree.update();
                black_box(tree)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_nested(c: &mut Criterion) {
    c.bench_function("layout_nested_depth4_fanout3", |b| {
        b.iter_batched(
            || nested_tree(4, 3).0,
            |mut tree| {
                tree.update();
                black_box(tree)
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_incremental(c: &mut Criterion) {
    c.bench_function("layout_incremental_single_item", |b| {
        let (mut tree, _root, children) = wide_row(1000);
        tree.update();
        let target = children[500];
        let mut w = 50.0;
        b.iter(|| {
            w = if w > 50.0 { 50.0 } else { 60.0 };
            tree.set_width(target, w);
            tree.update();
            black_box(tree.layout(target))
        });
    });
}

criterion_group!(benches, bench_wide_row, bench_nested, bench_incremental);
criterion_main!(benches);
