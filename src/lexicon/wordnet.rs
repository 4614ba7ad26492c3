//! A loaded lexicon: word index plus frozen hypernym graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::WordNetConfig;
use crate::error::{Error, Result};
use crate::graph::{find_root, Digraph, DigraphBuilder};
use crate::lexicon::index::LexiconIndex;
use crate::lexicon::parse::{read_hypernyms, read_synsets};
use crate::sap::{SapEngine, SapResult};

/// Word-level semantic relatedness over a hypernym hierarchy.
///
/// Words resolve to every synset that contains them, and word-to-word queries
/// run as set queries between those synsets.
#[derive(Clone, Debug)]
pub struct WordNet {
    index: LexiconIndex,
    digraph: Digraph,
    root: Option<usize>,
}

impl WordNet {
    /// Loads a lexicon from synset and hypernym text sources.
    ///
    /// # Errors
    /// Any parse, range or I/O error from the two sources.
    pub fn from_readers<S, H>(synsets: S, hypernyms: H) -> Result<Self>
    where
        S: BufRead,
        H: BufRead,
    {
        let index = LexiconIndex::from_synsets(read_synsets(synsets)?)?;
        let mut builder = DigraphBuilder::new(index.synset_count());
        read_hypernyms(hypernyms, &mut builder)?;
        let digraph = builder.freeze();
        let root = find_root(&digraph);

        debug!(
            synsets = index.synset_count(),
            words = index.word_count(),
            hypernym_edges = digraph.edge_count(),
            root = ?root,
            "loaded lexicon"
        );

        Ok(Self {
            index,
            digraph,
            root,
        })
    }

    /// Loads a lexicon from two files.
    ///
    /// # Errors
    /// [`Error::Io`] if a file cannot be opened, plus everything
    /// [`WordNet::from_readers`] reports.
    pub fn from_paths(synsets: impl AsRef<Path>, hypernyms: impl AsRef<Path>) -> Result<Self> {
        let synsets = BufReader::new(File::open(synsets)?);
        let hypernyms = BufReader::new(File::open(hypernyms)?);
        Self::from_readers(synsets, hypernyms)
    }

    /// Loads the lexicon described by `config`.
    ///
    /// # Errors
    /// - [`Error::NullInput`] if a source path is missing
    /// - [`Error::NotRooted`] if `require_rooted` is set and the hypernym graph
    ///   is not a rooted DAG
    /// - everything [`WordNet::from_paths`] reports
    pub fn from_config(config: &WordNetConfig) -> Result<Self> {
        let (synsets, hypernyms) = config.sources()?;
        let wordnet = Self::from_paths(synsets, hypernyms)?;
        if config.require_rooted && !wordnet.is_rooted() {
            return Err(Error::NotRooted);
        }
        Ok(wordnet)
    }

    /// The word index.
    pub fn index(&self) -> &LexiconIndex {
        &self.index
    }

    /// The frozen hypernym graph.
    pub fn digraph(&self) -> &Digraph {
        &self.digraph
    }

    /// The root synset, when the hypernym graph is a rooted DAG.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Returns `true` if the hypernym graph is a rooted DAG.
    pub fn is_rooted(&self) -> bool {
        self.root.is_some()
    }

    /// All words of the lexicon, in no particular order.
    pub fn nouns(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.nouns()
    }

    /// Returns `true` if `word` is in the lexicon.
    pub fn is_noun(&self, word: &str) -> bool {
        self.index.is_noun(word)
    }

    /// Shortest ancestral path between the synsets of two words.
    ///
    /// # Errors
    /// [`Error::UnknownWord`] if either word is not in the lexicon.
    pub fn relation(&self, noun_a: &str, noun_b: &str) -> Result<SapResult> {
        let a = self.index.resolve(noun_a)?;
        let b = self.index.resolve(noun_b)?;
        SapEngine::new(&self.digraph).query_sets(a.iter().copied(), b.iter().copied())
    }

    /// Semantic distance between two words; `None` if their synsets share no
    /// ancestor.
    ///
    /// Words equal ignoring case are at distance 0.
    ///
    /// # Errors
    /// [`Error::UnknownWord`] if either word is not in the lexicon.
    pub fn distance(&self, noun_a: &str, noun_b: &str) -> Result<Option<usize>> {
        if noun_a.eq_ignore_ascii_case(noun_b) {
            self.index.resolve(noun_a)?;
            self.index.resolve(noun_b)?;
            return Ok(Some(0));
        }
        self.relation(noun_a, noun_b).map(|r| r.length)
    }

    /// Label of the common ancestor on a shortest ancestral path between two
    /// words; `None` if their synsets share no ancestor.
    ///
    /// # Errors
    /// [`Error::UnknownWord`] if either word is not in the lexicon.
    pub fn sap(&self, noun_a: &str, noun_b: &str) -> Result<Option<&str>> {
        Ok(self
            .relation(noun_a, noun_b)?
            .ancestor
            .and_then(|id| self.index.label(id)))
    }
}
