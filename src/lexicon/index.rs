//! Word ↔ synset lookup tables.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::lexicon::parse::Synset;

/// Maps words to the synsets containing them and synset ids to labels.
///
/// Synset ids are the vertex ids of the hypernym graph, so they form the
/// contiguous range `0..synset_count()`.
#[derive(Clone, Debug, Default)]
pub struct LexiconIndex {
    words: HashMap<String, Vec<usize>>,
    labels: Vec<String>,
    glosses: Vec<Option<String>>,
}

impl LexiconIndex {
    /// Builds the index from parsed synset records.
    ///
    /// Records may appear in any order but their ids must cover
    /// `0..records.len()` exactly once.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] for an id outside `0..records.len()`
    /// - [`Error::InvalidArgument`] for a repeated id
    pub fn from_synsets(records: Vec<Synset>) -> Result<Self> {
        let n = records.len();
        let mut labels: Vec<Option<String>> = vec![None; n];
        let mut glosses = vec![None; n];
        let mut words: HashMap<String, Vec<usize>> = HashMap::new();

        for record in records {
            let id = crate::graph::checked_vertex(record.id, n)?;
            if labels[id].is_some() {
                return Err(Error::InvalidArgument(format!("synset id {id} appears twice")));
            }
            for word in record.words {
                let ids = words.entry(word).or_default();
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            labels[id] = Some(record.label);
            glosses[id] = record.gloss;
        }

        // `n` records with distinct ids in `0..n` fill every slot.
        let labels = labels.into_iter().map(Option::unwrap_or_default).collect();

        Ok(Self {
            words,
            labels,
            glosses,
        })
    }

    /// Number of synsets, i.e. the vertex count of the hypernym graph.
    pub fn synset_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// All indexed words, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.keys().map(String::as_str)
    }

    /// Returns `true` if `word` belongs to at least one synset.
    pub fn is_noun(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Synset ids containing `word`, if it is indexed.
    pub fn synsets_of(&self, word: &str) -> Option<&[usize]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Synset ids containing `word`.
    ///
    /// # Errors
    /// [`Error::UnknownWord`] if `word` is not indexed.
    pub fn resolve(&self, word: &str) -> Result<&[usize]> {
        self.synsets_of(word)
            .ok_or_else(|| Error::UnknownWord(word.to_owned()))
    }

    /// The synonym field of synset `id`.
    pub fn label(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// The gloss of synset `id`, if it has one.
    pub fn gloss(&self, id: usize) -> Option<&str> {
        self.glosses.get(id).and_then(Option::as_deref)
    }
}
