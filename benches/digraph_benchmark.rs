use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hyperpath::graph::{self, io::read_digraph};
use hyperpath::{Digraph, DigraphBuilder};

const NODES: usize = 100_000;

fn edges(nodes: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(nodes * 2);
    for v in 1..nodes {
        let h = v.wrapping_mul(0x9E37_79B9) >> 7;
        edges.push((v, h % v));
        if v % 3 == 0 {
            edges.push((v, (h >> 3) % v));
        }
    }
    edges
}

fn bench_build(c: &mut Criterion) {
    let edges = edges(NODES);

    c.bench_function("digraph_builder_freeze", |b| {
        b.iter(|| {
            let mut builder = DigraphBuilder::new(NODES);
            for &(u, v) in &edges {
                builder.add_edge(u, v).unwrap();
            }
            black_box(builder.freeze())
        });
    });

    c.bench_function("digraph_from_edges", |b| {
        b.iter(|| black_box(Digraph::from_edges(NODES, &edges).unwrap()));
    });

    let text = Digraph::from_edges(NODES, &edges).unwrap().to_string();
    c.bench_function("digraph_read_text", |b| {
        b.iter(|| black_box(read_digraph(text.as_bytes()).unwrap()));
    });
}

fn bench_validate(c: &mut Criterion) {
    let graph = Digraph::from_edges(NODES, &edges(NODES)).unwrap();

    c.bench_function("digraph_reverse", |b| {
        b.iter(|| black_box(graph.reverse()));
    });

    c.bench_function("digraph_is_acyclic", |b| {
        b.iter(|| black_box(graph::is_acyclic(&graph)));
    });

    c.bench_function("digraph_is_rooted_acyclic", |b| {
        b.iter(|| black_box(graph::is_rooted_acyclic(&graph)));
    });
}

criterion_group!(benches, bench_build, bench_validate);
criterion_main!(benches);
