//! Readers for the synset and hypernym text encodings.
//!
//! Both sources are comma separated with one record per line:
//! - synsets: `id,synonyms,gloss`, where `synonyms` is a space separated word
//!   list and the gloss (everything after the second comma) is optional
//! - hypernyms: `id,h1,h2,...`, one is-a edge `id -> hk` per listed hypernym
//!
//! Blank lines are skipped in both.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::graph::{checked_vertex, DigraphBuilder};

/// One record of the synset source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synset {
    /// Raw id as written; checked against the synset count once every record
    /// has been read.
    pub id: i64,
    /// The synonym field verbatim, used as the synset's display label.
    pub label: String,
    /// Individual words of the synonym field.
    pub words: Vec<String>,
    /// Free-text definition, if present.
    pub gloss: Option<String>,
}

/// Reads every synset record from `reader`.
///
/// # Errors
/// - [`Error::Parse`] for a line without an id and synonym field, or with a
///   non-integer id
/// - [`Error::Io`] if reading fails
pub fn read_synsets<R: BufRead>(reader: R) -> Result<Vec<Synset>> {
    let mut synsets = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(3, ',');
        let id = parse_id(fields.next().unwrap_or_default(), line_no)?;
        let label = fields
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::parse(line_no, "missing synonym field"))?;
        let gloss = fields.next().map(str::to_owned);

        synsets.push(Synset {
            id,
            label: label.to_owned(),
            words: label.split_whitespace().map(str::to_owned).collect(),
            gloss,
        });
    }

    Ok(synsets)
}

/// Reads hypernym records from `reader` into `builder`, one edge per listed
/// hypernym.
///
/// Returns the number of edges added.
///
/// # Errors
/// - [`Error::Parse`] for a non-integer field
/// - [`Error::OutOfRange`] for an id outside the builder's vertex range
/// - [`Error::Io`] if reading fails
pub fn read_hypernyms<R: BufRead>(reader: R, builder: &mut DigraphBuilder) -> Result<usize> {
    let n = builder.vertex_count();
    let mut added = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',');
        let hyponym = checked_vertex(parse_id(fields.next().unwrap_or_default(), line_no)?, n)?;
        for field in fields {
            let hypernym = checked_vertex(parse_id(field, line_no)?, n)?;
            builder.add_edge(hyponym, hypernym)?;
            added += 1;
        }
    }

    Ok(added)
}

fn parse_id(field: &str, line: usize) -> Result<i64> {
    let field = field.trim();
    field
        .parse()
        .map_err(|_| Error::parse(line, format!("expected integer id, found {field:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synsets_with_and_without_gloss() {
        let text = "0,entity,that which is perceived, or known\n\n1,dog domestic_dog Canis_familiaris\r\n";
        let synsets = read_synsets(text.as_bytes()).unwrap();

        assert_eq!(synsets.len(), 2);
        assert_eq!(synsets[0].id, 0);
        assert_eq!(synsets[0].label, "entity");
        assert_eq!(
            synsets[0].gloss.as_deref(),
            Some("that which is perceived, or known")
        );
        assert_eq!(synsets[1].words, vec!["dog", "domestic_dog", "Canis_familiaris"]);
        assert_eq!(synsets[1].gloss, None);
    }

    #[test]
    fn synset_errors_carry_line_numbers() {
        assert!(matches!(
            read_synsets("0,a\nx,b\n".as_bytes()),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_synsets("0,a\n1,\n".as_bytes()),
            Err(Error::Parse { line: 2, .. })
        ));
        assert!(matches!(
            read_synsets("0\n".as_bytes()),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn hypernyms_add_one_edge_per_field() {
        let mut builder = DigraphBuilder::new(4);
        let added = read_hypernyms("0,1,2\n1,3\n3\n\n2,3\n".as_bytes(), &mut builder).unwrap();
        assert_eq!(added, 4);
        assert_eq!(builder.out_neighbors(0).unwrap(), &[1, 2]);
        assert!(builder.out_neighbors(3).unwrap().is_empty());
    }

    #[test]
    fn hypernym_ids_are_range_checked() {
        let mut builder = DigraphBuilder::new(2);
        assert!(matches!(
            read_hypernyms("0,2\n".as_bytes(), &mut builder),
            Err(Error::OutOfRange { vertex: 2, vertex_count: 2 })
        ));
        assert!(matches!(
            read_hypernyms("-1,0\n".as_bytes(), &mut builder),
            Err(Error::OutOfRange { vertex: -1, vertex_count: 2 })
        ));
        assert!(matches!(
            read_hypernyms("0,one\n".as_bytes(), &mut builder),
            Err(Error::Parse { line: 1, .. })
        ));
    }
}
