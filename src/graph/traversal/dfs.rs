//! Depth-first traversals.

use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::compressed::Digraph;

/// An iterator for Depth-First Search (DFS) from one start vertex.
///
/// Yields each vertex reachable from the start exactly once. Uses an explicit
/// stack and a dense visited set, so deep hierarchies cannot overflow the call
/// stack.
pub struct Dfs<'g> {
    graph: &'g Digraph,
    visited: VisitedSet,
    stack: Vec<usize>,
}

impl<'g> Dfs<'g> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`](crate::Error::OutOfRange) if `start` is outside `[0, V)`.
    pub fn new(graph: &'g Digraph, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;
        let mut visited = VisitedSet::new(graph.vertex_count());
        visited.try_visit(start);
        Ok(Self {
            graph,
            visited,
            stack: vec![start],
        })
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        // Push in reverse so the first neighbor is expanded first.
        for &v in self.graph.row(u).iter().rev() {
            if self.visited.try_visit(v) {
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// Returns `true` if every vertex of `graph` is reachable from `start`.
pub(crate) fn reaches_all(graph: &Digraph, start: usize) -> Result<bool> {
    let mut dfs = Dfs::new(graph, start)?;
    while dfs.next().is_some() {}
    Ok(dfs.visited.count() == graph.vertex_count())
}

/// Preorder, postorder and reverse postorder of a full depth-first search.
///
/// Roots are tried in ascending vertex order and neighbors in insertion
/// order, so the orders are deterministic for a given graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
}

impl DepthFirstOrder {
    /// Runs the search over every vertex of `graph`.
    pub fn new(graph: &Digraph) -> Self {
        let n = graph.vertex_count();
        let mut visited = VisitedSet::new(n);
        let mut pre = Vec::with_capacity(n);
        let mut post = Vec::with_capacity(n);
        // (vertex, position of the next neighbor to examine)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if !visited.try_visit(root) {
                continue;
            }
            pre.push(root);
            stack.push((root, 0));

            while let Some(top) = stack.last_mut() {
                let (u, pos) = *top;
                if let Some(&v) = graph.row(u).get(pos) {
                    top.1 += 1;
                    if visited.try_visit(v) {
                        pre.push(v);
                        stack.push((v, 0));
                    }
                } else {
                    stack.pop();
                    post.push(u);
                }
            }
        }

        Self { pre, post }
    }

    /// Vertices in the order they were first discovered.
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// Vertices in the order they finished.
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// Postorder reversed; a topological order when the graph is acyclic.
    pub fn reverse_post(&self) -> impl Iterator<Item = usize> + '_ {
        self.post.iter().rev().copied()
    }
}
