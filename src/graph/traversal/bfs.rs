//! Multi-source breadth-first search.
//!
//! Every source starts at distance 0 and the frontier expands one edge at a
//! time, so each vertex is finalized the first time it is discovered with the
//! minimum edge count from the source set. Visited vertices are never
//! re-expanded, which bounds a run by the vertices and edges reachable from the
//! sources even on cyclic graphs.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::compressed::Digraph;

const UNREACHED: usize = usize::MAX;

/// A breadth-first walk from a set of source vertices.
///
/// The walk is an iterator yielding `(vertex, distance)` pairs in
/// non-decreasing distance order. Use [`MultiSourceBfs::run`] when only the
/// final [`BfsDistances`] are needed.
pub struct MultiSourceBfs<'g> {
    graph: &'g Digraph,
    queue: VecDeque<usize>,
    dist: Vec<usize>,
    edge_to: Vec<usize>,
}

impl<'g> MultiSourceBfs<'g> {
    /// Starts a walk from every vertex in `sources`.
    ///
    /// Duplicate sources collapse into one.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if any source is outside `[0, V)`
    /// - [`Error::InvalidArgument`] if `sources` is empty
    pub fn new<I>(graph: &'g Digraph, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let n = graph.vertex_count();
        let mut dist = vec![UNREACHED; n];
        let mut edge_to = vec![UNREACHED; n];
        let mut queue = VecDeque::new();

        for s in sources {
            graph.check_vertex(s)?;
            if dist[s] == UNREACHED {
                dist[s] = 0;
                edge_to[s] = s;
                queue.push_back(s);
            }
        }

        if queue.is_empty() {
            return Err(Error::InvalidArgument(
                "source vertex set must not be empty".into(),
            ));
        }

        Ok(Self {
            graph,
            queue,
            dist,
            edge_to,
        })
    }

    /// Starts a walk from a single vertex.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `source` is outside `[0, V)`.
    pub fn single(graph: &'g Digraph, source: usize) -> Result<Self> {
        Self::new(graph, [source])
    }

    /// Runs a complete walk from `sources` and returns its distance record.
    ///
    /// # Errors
    /// Same as [`MultiSourceBfs::new`].
    pub fn run<I>(graph: &'g Digraph, sources: I) -> Result<BfsDistances>
    where
        I: IntoIterator<Item = usize>,
    {
        Ok(Self::new(graph, sources)?.finish())
    }

    /// Drains the remaining frontier and returns the distance record.
    pub fn finish(mut self) -> BfsDistances {
        while self.next().is_some() {}
        BfsDistances {
            dist: self.dist,
            edge_to: self.edge_to,
        }
    }
}

impl Iterator for MultiSourceBfs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        let d = self.dist[u];

        for &v in self.graph.row(u) {
            if self.dist[v] == UNREACHED {
                self.dist[v] = d + 1;
                self.edge_to[v] = u;
                self.queue.push_back(v);
            }
        }

        Some((u, d))
    }
}

/// Per-vertex reachability and shortest edge-count distance from a source set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsDistances {
    dist: Vec<usize>,
    edge_to: Vec<usize>,
}

impl BfsDistances {
    /// Number of vertices covered by the record (the graph's `V`).
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns `true` if the record covers an empty graph.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Returns `true` if `vertex` is reachable from the source set.
    ///
    /// Ids outside the graph are simply unreachable.
    #[inline]
    pub fn has_path_to(&self, vertex: usize) -> bool {
        self.dist.get(vertex).is_some_and(|&d| d != UNREACHED)
    }

    /// Minimum number of edges from the source set to `vertex`, if reachable.
    #[inline]
    pub fn dist_to(&self, vertex: usize) -> Option<usize> {
        self.dist.get(vertex).copied().filter(|&d| d != UNREACHED)
    }

    /// One shortest path from the source set to `vertex`, source first.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        let d = self.dist_to(vertex)?;
        let mut path = Vec::with_capacity(d + 1);
        let mut cur = vertex;
        path.push(cur);
        while self.dist[cur] != 0 {
            cur = self.edge_to[cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// Vertices reachable from the source set, in ascending id order.
    pub fn reachable(&self) -> impl Iterator<Item = usize> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != UNREACHED)
            .map(|(v, _)| v)
    }
}
