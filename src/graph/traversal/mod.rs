//! Graph traversals over a frozen [`Digraph`](crate::graph::Digraph).
//!
//! Each traversal allocates its own visited/distance state, so any number of
//! them can run against the same graph at once.

mod bfs;
mod dfs;

pub use bfs::{BfsDistances, MultiSourceBfs};
pub use dfs::{DepthFirstOrder, Dfs};

pub(crate) use dfs::reaches_all;
