//! Compressed graph implementations.
//!
//! The frozen, query-time representation of a hypernym graph lives here.

pub mod digraph;

pub use digraph::{Digraph, Neighbors};
