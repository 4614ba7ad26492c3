//! Basic graph implementations.
//!
//! This module contains the build-phase representation that every frozen
//! [`Digraph`](crate::graph::Digraph) starts from.

pub mod builder;

pub use builder::DigraphBuilder;
