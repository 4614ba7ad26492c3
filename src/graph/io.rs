//! Plain-text digraph reader.
//!
//! The format is a whitespace separated stream of integers: the vertex count
//! `V`, the edge count `E`, then `E` pairs `from to`. Line breaks carry no
//! meaning beyond separating tokens; they are only tracked for error reports.

use std::io::BufRead;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::basic::DigraphBuilder;
use crate::graph::checked_vertex;
use crate::graph::compressed::Digraph;

/// Reads a digraph in plain-text form.
///
/// # Errors
/// - [`Error::InvalidArgument`] for a negative vertex or edge count
/// - [`Error::OutOfRange`] for an edge endpoint outside `[0, V)`
/// - [`Error::Parse`] for a non-integer token or truncated input
/// - [`Error::Io`] if reading fails
pub fn read_digraph<R: BufRead>(reader: R) -> Result<Digraph> {
    let mut tokens = Tokens::new(reader);

    let vertex_count = tokens.next_int("vertex count")?;
    let mut builder = DigraphBuilder::try_with_vertex_count(vertex_count)?;
    let n = builder.vertex_count();

    let edge_count = tokens.next_int("edge count")?;
    if edge_count < 0 {
        return Err(Error::InvalidArgument(format!(
            "edge count must be non-negative, got {edge_count}"
        )));
    }

    for _ in 0..edge_count {
        let from = checked_vertex(tokens.next_int("edge source")?, n)?;
        let to = checked_vertex(tokens.next_int("edge target")?, n)?;
        builder.add_edge(from, to)?;
    }

    debug!(vertices = n, edges = edge_count, "read digraph");
    Ok(builder.freeze())
}

struct Tokens<R> {
    reader: R,
    line: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_int(&mut self, what: &str) -> Result<i64> {
        loop {
            if let Some(tok) = self.pending.next() {
                return tok
                    .parse()
                    .map_err(|_| Error::parse(self.line, format!("expected {what}, found {tok:?}")));
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Err(Error::parse(
                    self.line,
                    format!("unexpected end of input, expected {what}"),
                ));
            }
            self.line += 1;
            self.pending = buf
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
