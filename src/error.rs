//! Error type shared by graph construction, queries and lexicon ingestion.
//!
//! Every error is local to the call that raised it: nothing is retried and no
//! partial result is produced. Contract violations by the caller
//! ([`Error::InvalidArgument`], [`Error::OutOfRange`], [`Error::NullInput`]) are
//! reported before any traversal starts.

use thiserror::Error;

/// Errors produced by `hyperpath`.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed call shape: a negative vertex count, an empty vertex set, an
    /// empty noun list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A vertex id outside `[0, vertex_count)`.
    ///
    /// The id is kept signed so that raw ids read from text or handed over by
    /// callers holding signed integers are reported verbatim.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending id.
        vertex: i64,
        /// Number of vertices in the graph the id was checked against.
        vertex_count: usize,
    },

    /// A required collaborator was not supplied.
    #[error("required input not supplied: {0}")]
    NullInput(&'static str),

    /// A word that is not present in the lexicon.
    #[error("unknown word: {0:?}")]
    UnknownWord(String),

    /// A malformed line in a synset, hypernym or digraph text source.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number (0 when the source has no line structure).
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The hypernym graph was required to be a rooted DAG and is not.
    #[error("hypernym graph is not a rooted DAG")]
    NotRooted,

    /// Reading a text source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::OutOfRange`] for an unsigned vertex id.
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::OutOfRange {
            vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
            vertex_count,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
