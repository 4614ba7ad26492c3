//! The frozen, read-only digraph in CSR (compressed sparse row) form.
//!
//! CSR stores every vertex's out-edges contiguously, in insertion order, which
//! gives O(1) access to a vertex's neighbor slice and keeps BFS/DFS scans
//! cache-friendly.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `usize` targets for each row

use core::fmt;

use crate::error::{Error, Result};
use crate::graph::basic::DigraphBuilder;

/// An immutable directed graph over vertices `0..vertex_count()`.
///
/// A `Digraph` is produced by [`DigraphBuilder::freeze`] (or one of the
/// convenience constructors below) and exposes no mutating methods, so a
/// single instance can back any number of concurrent queries.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `out_neighbors` | \(O(1)\) | Returns a lazy iterator over the row |
/// | `out_degree` | \(O(1)\) | Difference of two offsets |
/// | `in_degrees` | \(O(n + m)\) | Single pass over all rows |
/// | `reverse` | \(O(n + m)\) | Counting sort by target |
#[derive(Clone, PartialEq, Eq)]
pub struct Digraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

/// Lazy, restartable iterator over a vertex's out-neighbors.
///
/// A clone walks the remaining part of the row independently, and calling
/// [`Digraph::out_neighbors`] again starts over from the first neighbor.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    inner: core::slice::Iter<'a, usize>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl DoubleEndedIterator for Neighbors<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.inner.next_back().copied()
    }
}

impl Digraph {
    /// Assembles a graph from parts already validated by the builder.
    pub(crate) fn from_parts_unchecked(offsets: Vec<usize>, targets: Vec<usize>) -> Self {
        debug_assert!(!offsets.is_empty());
        debug_assert_eq!(offsets.last().copied(), Some(targets.len()));
        Self { offsets, targets }
    }

    /// Builds a graph with `vertex_count` vertices from an edge list.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if any endpoint is `>= vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut builder = DigraphBuilder::new(vertex_count);
        for &(from, to) in edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.freeze())
    }

    /// Builds a graph directly from CSR parts.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `offsets` is empty, not monotone, or its
    ///   last entry differs from `targets.len()`
    /// - [`Error::OutOfRange`] if a target is `>= offsets.len() - 1`
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Result<Self> {
        let Some(&last) = offsets.last() else {
            return Err(Error::InvalidArgument(
                "offsets must have length n + 1".into(),
            ));
        };
        if offsets.first() != Some(&0) || offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidArgument(
                "offsets must start at 0 and be monotone".into(),
            ));
        }
        if last != targets.len() {
            return Err(Error::InvalidArgument(format!(
                "last offset {last} does not match {} targets",
                targets.len()
            )));
        }
        let n = offsets.len() - 1;
        if let Some(&bad) = targets.iter().find(|&&v| v >= n) {
            return Err(Error::out_of_range(bad, n));
        }
        Ok(Self { offsets, targets })
    }

    /// Number of vertices `V`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of edges, duplicates and self-loops included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns `Ok(())` if `vertex` lies in `[0, V)`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] otherwise.
    #[inline]
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(Error::out_of_range(vertex, self.vertex_count()))
        }
    }

    /// Returns the out-neighbors of `vertex` in insertion order.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for an invalid vertex.
    pub fn out_neighbors(&self, vertex: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(Neighbors {
            inner: self.row(vertex).iter(),
        })
    }

    /// Returns the out-degree of `vertex`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for an invalid vertex.
    pub fn out_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.offsets[vertex + 1] - self.offsets[vertex])
    }

    /// In-degree of every vertex, indexed by vertex id.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut indeg = vec![0usize; self.vertex_count()];
        for &v in &self.targets {
            indeg[v] += 1;
        }
        indeg
    }

    /// Iterates over all edges `(from, to)` in row order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count()).flat_map(move |u| self.row(u).iter().map(move |&v| (u, v)))
    }

    /// Returns a new graph with every edge inverted.
    ///
    /// In-neighbors of each vertex come out in ascending source order.
    pub fn reverse(&self) -> Self {
        let n = self.vertex_count();

        // Count incoming edges for each vertex, then prefix-sum into offsets.
        let mut offsets = vec![0usize; n + 1];
        for &v in &self.targets {
            offsets[v + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }

        let mut cursor = offsets.clone();
        let mut targets = vec![0usize; self.targets.len()];
        for (u, v) in self.edges() {
            targets[cursor[v]] = u;
            cursor[v] += 1;
        }

        Self { offsets, targets }
    }

    /// Neighbor slice for a vertex already known to be in range.
    #[inline(always)]
    pub(crate) fn row(&self, vertex: usize) -> &[usize] {
        &self.targets[self.offsets[vertex]..self.offsets[vertex + 1]]
    }
}

impl fmt::Debug for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Digraph")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

/// Writes the graph in the plain-text digraph format read by
/// [`read_digraph`](crate::graph::io::read_digraph): `V`, `E`, then one
/// `from to` pair per line.
impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        writeln!(f, "{}", self.edge_count())?;
        for (u, v) in self.edges() {
            writeln!(f, "{u} {v}")?;
        }
        Ok(())
    }
}
