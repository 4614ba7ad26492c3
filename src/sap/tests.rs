//! Tests for the SAP engine.

use super::*;
use crate::error::Error;
use crate::graph::Digraph;

/// Thirteen-vertex hierarchy rooted at 0 with an isolated vertex 6.
fn hierarchy() -> Digraph {
    Digraph::from_edges(
        13,
        &[
            (7, 3),
            (8, 3),
            (3, 1),
            (4, 1),
            (5, 1),
            (9, 5),
            (10, 5),
            (11, 10),
            (12, 10),
            (1, 0),
            (2, 0),
        ],
    )
    .unwrap()
}

/// Six vertices, with a directed cycle through 0 and 5.
fn cyclic() -> Digraph {
    Digraph::from_edges(6, &[(1, 0), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap()
}

#[test]
fn test_known_pairs() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);

    assert_eq!(sap.query(3, 11).unwrap(), SapResult::found(4, 1));
    assert_eq!(sap.query(9, 12).unwrap(), SapResult::found(3, 5));
    assert_eq!(sap.query(7, 2).unwrap(), SapResult::found(4, 0));
    assert_eq!(sap.query(1, 6).unwrap(), SapResult::NONE);
    assert_eq!(sap.length(1, 6).unwrap(), None);
    assert_eq!(sap.ancestor(7, 2).unwrap(), Some(0));
}

#[test]
fn test_vertex_is_its_own_ancestor() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);
    for v in 0..g.vertex_count() {
        assert_eq!(sap.query(v, v).unwrap(), SapResult::found(0, v));
    }
    // 3 is an ancestor of 7, so 3 is the meeting point.
    assert_eq!(sap.query(7, 3).unwrap(), SapResult::found(1, 3));
}

#[test]
fn test_cyclic_graph() {
    let g = cyclic();
    let sap = SapEngine::new(&g);
    assert_eq!(sap.query(1, 5).unwrap(), SapResult::found(2, 0));
    assert_eq!(sap.query(1, 3).unwrap(), SapResult::found(2, 3));
    assert_eq!(sap.length(3, 1).unwrap(), Some(2));
}

#[test]
fn test_ties_resolve_to_lowest_vertex() {
    // Both 2 and 3 are at distance 1 from 0 and from 1.
    let g = Digraph::from_edges(4, &[(0, 3), (0, 2), (1, 3), (1, 2)]).unwrap();
    let sap = SapEngine::new(&g);
    assert_eq!(sap.query(0, 1).unwrap(), SapResult::found(2, 2));
    assert_eq!(sap.query(1, 0).unwrap(), SapResult::found(2, 2));
}

#[test]
fn test_sets() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);
    assert_eq!(
        sap.query_sets([3, 11], [9, 12]).unwrap(),
        SapResult::found(2, 10)
    );
    assert_eq!(sap.length_of_sets(vec![7, 7], vec![2]).unwrap(), Some(4));
    assert_eq!(sap.ancestor_of_sets([6], [0, 1]).unwrap(), None);
    // Overlapping sets meet at distance 0.
    assert_eq!(sap.query_sets([4, 8], [8]).unwrap(), SapResult::found(0, 8));
}

#[test]
fn test_set_form_agrees_with_single_form() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);
    for v in 0..g.vertex_count() {
        for w in 0..g.vertex_count() {
            assert_eq!(sap.query(v, w).unwrap(), sap.query_sets([v], [w]).unwrap());
        }
    }
}

#[test]
fn test_invalid_arguments() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);

    assert!(matches!(
        sap.query(13, 0),
        Err(Error::OutOfRange { vertex: 13, vertex_count: 13 })
    ));
    assert!(matches!(sap.ancestor(0, 100), Err(Error::OutOfRange { .. })));
    assert!(matches!(
        sap.query_sets(Vec::new(), [1]),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        sap.query_sets([1], Vec::new()),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        sap.query_sets([1], [2, 13]),
        Err(Error::OutOfRange { vertex: 13, .. })
    ));
}

#[test]
fn test_batch_matches_individual_queries() {
    let g = hierarchy();
    let sap = SapEngine::new(&g);
    let pairs = [(3, 11), (9, 12), (7, 2), (1, 6)];
    let batch = sap.query_batch(&pairs).unwrap();
    let single: Vec<_> = pairs.iter().map(|&(v, w)| sap.query(v, w).unwrap()).collect();
    assert_eq!(batch, single);
    assert!(sap.query_batch(&[(0, 1), (0, 13)]).is_err());
    assert!(sap.query_batch(&[]).unwrap().is_empty());
}
