//! Directed graph storage, traversals and structural validation.
//!
//! Graph code is organized into categories:
//! - `basic`: the build-phase adjacency lists ([`DigraphBuilder`])
//! - `compressed`: the frozen CSR graph every query runs against ([`Digraph`])
//! - `traversal`: multi-source BFS and depth-first orders
//! - `validate`: acyclicity and rooted-DAG predicates
//! - `io`: the plain-text digraph reader

pub mod basic;
pub mod compressed;
pub mod io;
pub mod traversal;
pub mod validate;
pub(crate) mod access;

pub use basic::DigraphBuilder;
pub use compressed::{Digraph, Neighbors};
pub use traversal::{BfsDistances, DepthFirstOrder, Dfs, MultiSourceBfs};
pub use validate::{find_root, is_acyclic, is_rooted_acyclic, topological_order};

use crate::error::{Error, Result};

/// Converts a signed vertex id into an index checked against `[0, vertex_count)`.
///
/// # Errors
/// [`Error::OutOfRange`] for negative ids and ids `>= vertex_count`.
pub fn checked_vertex(raw: i64, vertex_count: usize) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&v| v < vertex_count)
        .ok_or(Error::OutOfRange {
            vertex: raw,
            vertex_count,
        })
}
