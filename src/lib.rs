//! # `hyperpath` - Shortest Ancestral Paths over Hypernym Graphs
//!
//! A lexical ontology such as WordNet groups words into *synsets* and links
//! each synset to its more general *hypernyms* with directed is-a edges. Two
//! concepts are related through the ancestors they share: the shorter the
//! combined path to a common ancestor, the closer the concepts.
//!
//! This crate provides the graph machinery behind that measure:
//!
//! - **Storage**: [`DigraphBuilder`] collects edges during a build phase and
//!   freezes into an immutable CSR [`Digraph`].
//! - **Search**: [`MultiSourceBfs`] computes shortest edge-count distances
//!   from a whole set of sources at once.
//! - **Shortest ancestral paths**: [`SapEngine`] answers length/ancestor
//!   queries between two vertices or two vertex sets.
//! - **Validation**: [`graph::is_acyclic`] and [`graph::is_rooted_acyclic`]
//!   check that a graph has the shape of a well-formed is-a hierarchy.
//! - **Lexicon**: [`WordNet`] loads synset/hypernym text sources and answers
//!   queries by word; [`Outcast`] picks the least related word of a list.
//!
//! ## Concurrency
//!
//! A frozen [`Digraph`] is never mutated, and every query allocates its own
//! traversal state and returns its result by value. Queries against the same
//! graph are independent and may run on any number of threads; the
//! `parallel` feature uses rayon for batch queries and outcast scoring.
//!
//! ## Example
//!
//! ```rust
//! use hyperpath::{DigraphBuilder, SapEngine};
//!
//! // 0 -> 1 -> 2 <- 3
//! let mut builder = DigraphBuilder::new(4);
//! builder.add_edge(0, 1)?;
//! builder.add_edge(1, 2)?;
//! builder.add_edge(3, 2)?;
//! let graph = builder.freeze();
//!
//! let sap = SapEngine::new(&graph);
//! let result = sap.query(0, 3)?;
//! assert_eq!(result.length, Some(3));
//! assert_eq!(result.ancestor, Some(2));
//!
//! assert!(hyperpath::graph::is_rooted_acyclic(&graph));
//! # Ok::<(), hyperpath::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod lexicon;
pub mod sap;

pub use config::WordNetConfig;
pub use error::{Error, Result};
pub use graph::{BfsDistances, Digraph, DigraphBuilder, MultiSourceBfs};
pub use lexicon::{LexiconIndex, Outcast, WordNet};
pub use sap::{SapEngine, SapResult};

// Frozen graphs and query results cross thread boundaries freely.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Digraph>();
    assert_send_sync::<WordNet>();
    assert_send_sync::<SapEngine<'static>>();
    assert_send_sync::<SapResult>();
};
