//! Benchmarks for graph loading and traversal
//!
//! Measures load and ordering time on generated sources with thousands of
//! classes, including a long chain that would be deep for a recursive DFS.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depsort::graph::{DependencyGraph, TraversalMode};
use depsort::parser::{parse_str, Record};

/// Create a source where every class depends on the previous one
fn create_chain(total: usize) -> Vec<Record> {
    (0..total.saturating_sub(1))
        .map(|i| Record::new(format!("Class{}", i), [format!("Class{}", i + 1)]))
        .collect()
}

/// Create a tree-shaped source with `fanout` dependents per class
fn create_tree_source(total: usize, fanout: usize) -> String {
    let mut source = String::new();
    for parent in 0..total {
        let first = parent * fanout + 1;
        if first >= total {
            break;
        }
        source.push_str(&format!("Class{}", parent));
        for child in first..(first + fanout).min(total) {
            source.push_str(&format!(" Class{}", child));
        }
        source.push('\n');
    }
    source
}

/// Benchmark parsing and loading a source
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1000, 10000].iter() {
        let source = create_tree_source(*size, 4);

        group.bench_with_input(BenchmarkId::new("classes", size), &source, |b, src| {
            b.iter(|| {
                let mut graph: DependencyGraph = DependencyGraph::new();
                graph.load_records(&parse_str(black_box(src)));
                black_box(graph.vertex_count())
            });
        });
    }

    group.finish();
}

/// Benchmark ordering a tree from its root
fn bench_order_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_tree");

    for size in [100, 1000, 10000].iter() {
        let mut graph: DependencyGraph = DependencyGraph::new();
        graph.load_records(&parse_str(&create_tree_source(*size, 4)));

        group.bench_with_input(BenchmarkId::new("classes", size), &graph, |b, g| {
            b.iter(|| black_box(g.topological_order_from("Class0").map(|o| o.len())));
        });
    }

    group.finish();
}

/// Benchmark ordering a long chain
fn bench_order_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_chain");

    for size in [1000, 10000, 100000].iter() {
        let mut graph: DependencyGraph = DependencyGraph::with_capacity(*size);
        graph.load_records(&create_chain(*size));

        group.bench_with_input(BenchmarkId::new("classes", size), &graph, |b, g| {
            b.iter(|| {
                black_box(
                    g.topological_order_with("Class0", TraversalMode::BackEdgesOnly)
                        .map(|o| o.len()),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_order_tree, bench_order_chain);
criterion_main!(benches);
