//! Structural predicates for hypernym hierarchies.
//!
//! A well-formed is-a hierarchy is a *rooted DAG*: it has no directed cycle,
//! and a single vertex (the root) is reachable from every other vertex.
//! Neither property is needed for SAP queries to be correct; callers that
//! want the hierarchy-shape guarantee check it here.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `topological_order` | \(O(n + m)\) | Kahn's algorithm |
//! | `is_acyclic` | \(O(n + m)\) | Topological sort completeness |
//! | `is_rooted_acyclic` | \(O(n + m)\) | Post-order candidate + reverse DFS |

mod math_assert;

use tracing::debug;

use crate::graph::compressed::Digraph;
use crate::graph::traversal::{reaches_all, DepthFirstOrder};

use math_assert::{is_topological, math_assert_msg};

/// Computes a topological ordering using Kahn's algorithm.
///
/// Returns `None` if the graph contains a directed cycle (self-loops
/// included). Sources are dequeued in increasing id order, so the ordering is
/// deterministic.
pub fn topological_order(graph: &Digraph) -> Option<Vec<usize>> {
    use std::collections::VecDeque;

    let n = graph.vertex_count();
    let mut indeg = graph.in_degrees();

    let mut q: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();

    let mut order = Vec::with_capacity(n);
    while let Some(u) = q.pop_front() {
        order.push(u);
        for &v in graph.row(u) {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                q.push_back(v);
            }
        }
    }

    if order.len() == n {
        if cfg!(debug_assertions) {
            math_assert_msg(
                is_topological(graph, &order),
                "Kahn order must place every edge forward",
            );
        }
        Some(order)
    } else {
        None // Cycle detected
    }
}

/// Returns `true` iff the graph has no directed cycle.
pub fn is_acyclic(graph: &Digraph) -> bool {
    let acyclic = topological_order(graph).is_some();
    debug!(vertices = graph.vertex_count(), acyclic, "checked acyclicity");
    acyclic
}

/// Returns the root of a rooted DAG, or `None` if the graph is not one.
///
/// The candidate is the first vertex to finish in a depth-first post-order:
/// in a DAG that vertex has no out-edges, so it is the only possible vertex
/// every other vertex can reach. The candidate is accepted when a DFS over the
/// reversed graph from it covers every vertex.
pub fn find_root(graph: &Digraph) -> Option<usize> {
    if !is_acyclic(graph) {
        return None;
    }

    let order = DepthFirstOrder::new(graph);
    let &candidate = order.post().first()?;
    math_assert_msg(
        graph.row(candidate).is_empty(),
        "first finished vertex of a DAG must be a sink",
    );

    let rooted = reaches_all(&graph.reverse(), candidate).unwrap_or(false);
    debug!(candidate, rooted, "checked rooted DAG candidate");
    rooted.then_some(candidate)
}

/// Returns `true` iff the graph is acyclic and every vertex reaches a single
/// root.
///
/// Short-circuits to `false` on a cyclic graph without any further traversal.
/// An empty graph has no root and is not rooted.
pub fn is_rooted_acyclic(graph: &Digraph) -> bool {
    find_root(graph).is_some()
}
