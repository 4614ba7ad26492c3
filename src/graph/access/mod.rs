//! Internal graph accessors and low-level building blocks.
//!
//! Scratch structures shared by traversals (visited sets) live here and stay
//! crate-private.

pub(crate) mod visited;
