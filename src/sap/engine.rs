//! The shortest-ancestral-path engine.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::error::{Error, Result};
use crate::graph::traversal::{BfsDistances, MultiSourceBfs};
use crate::graph::Digraph;
use crate::sap::SapResult;

/// Answers shortest-ancestral-path queries against a frozen [`Digraph`].
///
/// The engine only borrows the graph. Every query allocates its own BFS state
/// and returns its answer as a value, so a single engine (or many engines
/// over the same graph) can serve concurrent callers without locking.
///
/// The graph does not need to be acyclic; cycles only make more vertices
/// reachable.
///
/// ```rust
/// use hyperpath::{Digraph, SapEngine};
///
/// // 0 -> 1 -> 2 <- 3
/// let graph = Digraph::from_edges(4, &[(0, 1), (1, 2), (3, 2)])?;
/// let sap = SapEngine::new(&graph);
///
/// assert_eq!(sap.length(0, 3)?, Some(3));
/// assert_eq!(sap.ancestor(0, 3)?, Some(2));
/// # Ok::<(), hyperpath::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SapEngine<'g> {
    graph: &'g Digraph,
}

impl<'g> SapEngine<'g> {
    /// Creates an engine over `graph`.
    pub fn new(graph: &'g Digraph) -> Self {
        Self { graph }
    }

    /// The graph queries run against.
    pub fn graph(&self) -> &'g Digraph {
        self.graph
    }

    /// Shortest ancestral path between two vertices.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either vertex is outside `[0, V)`.
    pub fn query(&self, v: usize, w: usize) -> Result<SapResult> {
        self.graph.check_vertex(v)?;
        self.graph.check_vertex(w)?;

        let from_v = MultiSourceBfs::single(self.graph, v)?.finish();
        let from_w = MultiSourceBfs::single(self.graph, w)?.finish();
        let result = self.meet(&from_v, &from_w);

        trace!(v, w, length = ?result.length, ancestor = ?result.ancestor, "sap query");
        Ok(result)
    }

    /// Shortest ancestral path between any vertex of `vs` and any vertex of `ws`.
    ///
    /// Both sets are fully validated before any traversal starts.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if any vertex is outside `[0, V)`
    /// - [`Error::InvalidArgument`] if either set is empty
    pub fn query_sets<V, W>(&self, vs: V, ws: W) -> Result<SapResult>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        let vs = self.checked_set(vs, "first")?;
        let ws = self.checked_set(ws, "second")?;

        let from_v = MultiSourceBfs::run(self.graph, vs.iter().copied())?;
        let from_w = MultiSourceBfs::run(self.graph, ws.iter().copied())?;
        let result = self.meet(&from_v, &from_w);

        trace!(
            v_sources = vs.len(),
            w_sources = ws.len(),
            length = ?result.length,
            ancestor = ?result.ancestor,
            "sap set query"
        );
        Ok(result)
    }

    /// Length of the shortest ancestral path between `v` and `w`; `None` if
    /// they share no ancestor.
    ///
    /// # Errors
    /// Same as [`SapEngine::query`].
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        self.query(v, w).map(|r| r.length)
    }

    /// A common ancestor of `v` and `w` on a shortest ancestral path; `None` if
    /// they share no ancestor.
    ///
    /// # Errors
    /// Same as [`SapEngine::query`].
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        self.query(v, w).map(|r| r.ancestor)
    }

    /// Set form of [`SapEngine::length`].
    ///
    /// # Errors
    /// Same as [`SapEngine::query_sets`].
    pub fn length_of_sets<V, W>(&self, vs: V, ws: W) -> Result<Option<usize>>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        self.query_sets(vs, ws).map(|r| r.length)
    }

    /// Set form of [`SapEngine::ancestor`].
    ///
    /// # Errors
    /// Same as [`SapEngine::query_sets`].
    pub fn ancestor_of_sets<V, W>(&self, vs: V, ws: W) -> Result<Option<usize>>
    where
        V: IntoIterator<Item = usize>,
        W: IntoIterator<Item = usize>,
    {
        self.query_sets(vs, ws).map(|r| r.ancestor)
    }

    /// Answers many single-vertex queries at once, in input order.
    ///
    /// With the `parallel` feature the pairs are spread over the rayon pool.
    ///
    /// # Errors
    /// The first [`Error::OutOfRange`] encountered; no results are returned in
    /// that case.
    pub fn query_batch(&self, pairs: &[(usize, usize)]) -> Result<Vec<SapResult>> {
        #[cfg(feature = "parallel")]
        {
            pairs.par_iter().map(|&(v, w)| self.query(v, w)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs.iter().map(|&(v, w)| self.query(v, w)).collect()
        }
    }

    fn checked_set<I>(&self, vertices: I, side: &str) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = usize>,
    {
        let set: Vec<usize> = vertices.into_iter().collect();
        for &v in &set {
            self.graph.check_vertex(v)?;
        }
        if set.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{side} vertex set must not be empty"
            )));
        }
        Ok(set)
    }

    /// Single linear scan over `0..V` keeping the first strict minimum, so
    /// ties resolve to the lowest vertex id.
    fn meet(&self, from_v: &BfsDistances, from_w: &BfsDistances) -> SapResult {
        let mut best = SapResult::NONE;
        let mut min = usize::MAX;

        for a in 0..self.graph.vertex_count() {
            if let (Some(dv), Some(dw)) = (from_v.dist_to(a), from_w.dist_to(a)) {
                let d = dv + dw;
                if d < min {
                    min = d;
                    best = SapResult::found(d, a);
                }
            }
        }

        best
    }
}
