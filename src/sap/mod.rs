//! Shortest ancestral paths.
//!
//! An *ancestral path* between `v` and `w` is a pair of directed paths
//! `v ~> a` and `w ~> a` meeting at a common ancestor `a`. The shortest one
//! minimizes the combined edge count. Queries run one breadth-first search
//! per side and then scan every vertex once for the cheapest meeting point;
//! length and ancestor always come out of that same scan.

mod engine;
mod result;

pub use engine::SapEngine;
pub use result::SapResult;

#[cfg(test)]
mod tests;
