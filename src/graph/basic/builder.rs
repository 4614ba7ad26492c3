//! Build-phase adjacency-list storage.
//!
//! A [`DigraphBuilder`] owns one `Vec<usize>` of out-neighbors per vertex and
//! accepts edges until it is frozen into a CSR [`Digraph`]. There is no
//! removal: the graph only grows while it is being built.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::compressed::Digraph;

/// A growable directed graph with a fixed vertex count.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n)\) | One empty list per vertex |
/// | `add_edge` | \(O(1)\) amortized | Appends; duplicates are kept |
/// | `freeze` | \(O(n + m)\) | Flattens into CSR |
#[derive(Clone, Debug, Default)]
pub struct DigraphBuilder {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl DigraphBuilder {
    /// Creates a builder with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a builder from a signed vertex count.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `vertex_count` is negative.
    pub fn try_with_vertex_count(vertex_count: i64) -> Result<Self> {
        let n = usize::try_from(vertex_count).map_err(|_| {
            Error::InvalidArgument(format!("vertex count must be non-negative, got {vertex_count}"))
        })?;
        Ok(Self::new(n))
    }

    /// Creates a builder from adjacency lists, one list per vertex.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if any neighbor index is out of bounds.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let n = adjacency.len();
        let mut edge_count = 0usize;
        for nbrs in &adjacency {
            if let Some(&v) = nbrs.iter().find(|&&v| v >= n) {
                return Err(Error::out_of_range(v, n));
            }
            edge_count += nbrs.len();
        }
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either endpoint is outside `[0, V)`; the
    /// builder is left unchanged.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let n = self.vertex_count();
        if from >= n {
            return Err(Error::out_of_range(from, n));
        }
        if to >= n {
            return Err(Error::out_of_range(to, n));
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbors added so far for `vertex`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for an invalid vertex.
    pub fn out_neighbors(&self, vertex: usize) -> Result<&[usize]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::out_of_range(vertex, self.vertex_count()))
    }

    /// Freezes the builder into an immutable CSR [`Digraph`].
    pub fn freeze(self) -> Digraph {
        let n = self.adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        let mut targets = Vec::with_capacity(self.edge_count);
        for nbrs in self.adjacency {
            targets.extend(nbrs);
            offsets.push(targets.len());
        }

        debug!(vertices = n, edges = targets.len(), "froze digraph");
        Digraph::from_parts_unchecked(offsets, targets)
    }
}
