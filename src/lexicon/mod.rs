//! Lexicon ingestion and word-level queries.
//!
//! - `parse`: readers for the synset and hypernym text sources
//! - `index`: word → synset ids and synset id → label tables
//! - `wordnet`: the loaded lexicon answering distance/ancestor queries by word
//! - `outcast`: most-unrelated-word selection on top of word distances

pub mod index;
pub mod outcast;
pub mod parse;
pub mod wordnet;

pub use index::LexiconIndex;
pub use outcast::Outcast;
pub use parse::Synset;
pub use wordnet::WordNet;
