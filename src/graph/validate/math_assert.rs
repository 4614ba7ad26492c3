//! Debug-only mathematical assertion helpers.
//!
//! The validator uses these helpers to keep invariants explicit while ensuring
//! release builds remain unaffected.

use crate::graph::compressed::Digraph;

/// Debug-asserts a mathematical invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Mathematical invariant violated: {}", message);
}

/// Checks that `order` is a permutation of the vertices with every edge
/// pointing forward.
pub(crate) fn is_topological(graph: &Digraph, order: &[usize]) -> bool {
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut pos = vec![usize::MAX; n];
    for (i, &v) in order.iter().enumerate() {
        if v >= n || pos[v] != usize::MAX {
            return false;
        }
        pos[v] = i;
    }

    graph.edges().all(|(u, v)| pos[u] < pos[v])
}
