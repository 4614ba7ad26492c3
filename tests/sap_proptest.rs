use hyperpath::graph::{self, MultiSourceBfs};
use hyperpath::{Digraph, SapEngine, SapResult};
use petgraph::algo::{dijkstra, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..48),
        )
    })
}

fn sets_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>, Vec<usize>)> {
    graph_strategy().prop_flat_map(|(n, edges)| {
        (
            Just(n),
            Just(edges),
            proptest::collection::vec(0..n, 1..4),
            proptest::collection::vec(0..n, 1..4),
        )
    })
}

fn oracle(n: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut g = DiGraph::new();
    for _ in 0..n {
        g.add_node(());
    }
    for &(u, v) in edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

/// Unit-weight Dijkstra from each source, keeping the nearest.
fn oracle_distances(g: &DiGraph<(), ()>, sources: &[usize]) -> Vec<Option<usize>> {
    let mut dist = vec![None; g.node_count()];
    for &s in sources {
        for (node, d) in dijkstra(g, NodeIndex::new(s), None, |_| 1usize) {
            let slot = &mut dist[node.index()];
            *slot = Some(slot.map_or(d, |cur: usize| cur.min(d)));
        }
    }
    dist
}

fn oracle_sap(g: &DiGraph<(), ()>, vs: &[usize], ws: &[usize]) -> SapResult {
    let dv = oracle_distances(g, vs);
    let dw = oracle_distances(g, ws);
    let mut best = SapResult::NONE;
    for x in 0..g.node_count() {
        if let (Some(a), Some(b)) = (dv[x], dw[x]) {
            if best.length.map_or(true, |len| a + b < len) {
                best = SapResult {
                    length: Some(a + b),
                    ancestor: Some(x),
                };
            }
        }
    }
    best
}

proptest! {
    #[test]
    fn test_bfs_matches_dijkstra((n, edges, vs, _ws) in sets_strategy()) {
        let g = Digraph::from_edges(n, &edges).unwrap();
        let bfs = MultiSourceBfs::run(&g, vs.iter().copied()).unwrap();
        let expected = oracle_distances(&oracle(n, &edges), &vs);

        for (v, want) in expected.iter().enumerate() {
            prop_assert_eq!(bfs.dist_to(v), *want, "distance mismatch at {}", v);
            if let Some(path) = bfs.path_to(v) {
                prop_assert_eq!(path.len(), want.unwrap() + 1);
                prop_assert!(vs.contains(&path[0]));
                prop_assert_eq!(*path.last().unwrap(), v);
            }
        }
    }

    #[test]
    fn test_sap_matches_brute_force((n, edges, vs, ws) in sets_strategy()) {
        let g = Digraph::from_edges(n, &edges).unwrap();
        let sap = SapEngine::new(&g);
        let reference = oracle(n, &edges);

        let got = sap.query_sets(vs.iter().copied(), ws.iter().copied()).unwrap();
        prop_assert_eq!(got, oracle_sap(&reference, &vs, &ws));

        let single = sap.query(vs[0], ws[0]).unwrap();
        prop_assert_eq!(single, oracle_sap(&reference, &vs[..1], &ws[..1]));
    }

    #[test]
    fn test_sap_is_symmetric_in_length((n, edges, vs, ws) in sets_strategy()) {
        let g = Digraph::from_edges(n, &edges).unwrap();
        let sap = SapEngine::new(&g);

        let forward = sap.query_sets(vs.iter().copied(), ws.iter().copied()).unwrap();
        let backward = sap.query_sets(ws.iter().copied(), vs.iter().copied()).unwrap();
        prop_assert_eq!(forward.length, backward.length);
        // Identical inputs give identical answers.
        prop_assert_eq!(forward, sap.query_sets(vs.iter().copied(), ws.iter().copied()).unwrap());
    }

    #[test]
    fn test_shape_predicates_match_petgraph((n, edges) in graph_strategy()) {
        let g = Digraph::from_edges(n, &edges).unwrap();
        let reference = oracle(n, &edges);

        let acyclic = toposort(&reference, None).is_ok();
        prop_assert_eq!(graph::is_acyclic(&g), acyclic);

        let sinks: Vec<usize> = (0..n)
            .filter(|&v| g.out_degree(v).unwrap() == 0)
            .collect();
        let rooted = acyclic && sinks.len() == 1;
        prop_assert_eq!(graph::is_rooted_acyclic(&g), rooted);
        if rooted {
            prop_assert_eq!(graph::find_root(&g), Some(sinks[0]));
        }
    }

    #[test]
    fn test_reverse_swaps_every_edge((n, edges) in graph_strategy()) {
        let g = Digraph::from_edges(n, &edges).unwrap();
        let r = g.reverse();

        let mut forward: Vec<(usize, usize)> = g.edges().map(|(u, v)| (v, u)).collect();
        let mut backward: Vec<(usize, usize)> = r.edges().collect();
        forward.sort_unstable();
        backward.sort_unstable();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(r.reverse().edge_count(), g.edge_count());
    }
}
