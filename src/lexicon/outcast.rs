//! Outcast detection: the word least related to the others in a list.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::lexicon::wordnet::WordNet;

/// Picks the most unrelated word of a list.
///
/// The score of a word is the sum of its distances to every other word in the
/// list; the outcast is the word with the largest score. Pairs without a
/// common ancestor add nothing to either score.
#[derive(Clone, Copy, Debug)]
pub struct Outcast<'w> {
    wordnet: &'w WordNet,
}

impl<'w> Outcast<'w> {
    /// Creates a selector over `wordnet`.
    pub fn new(wordnet: &'w WordNet) -> Self {
        Self { wordnet }
    }

    /// Distance sums of every word, in input order.
    ///
    /// Each unordered pair is queried once.
    ///
    /// # Errors
    /// [`Error::UnknownWord`] if any word is not in the lexicon.
    pub fn scores<S: AsRef<str> + Sync>(&self, nouns: &[S]) -> Result<Vec<usize>> {
        let pairs: Vec<(usize, usize)> = (0..nouns.len())
            .flat_map(|i| (i + 1..nouns.len()).map(move |j| (i, j)))
            .collect();

        let distance = |&(i, j): &(usize, usize)| {
            self.wordnet
                .distance(nouns[i].as_ref(), nouns[j].as_ref())
                .map(|d| (i, j, d.unwrap_or(0)))
        };

        #[cfg(feature = "parallel")]
        let distances: Vec<(usize, usize, usize)> =
            pairs.par_iter().map(distance).collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let distances: Vec<(usize, usize, usize)> =
            pairs.iter().map(distance).collect::<Result<_>>()?;

        let mut scores = vec![0usize; nouns.len()];
        for (i, j, d) in distances {
            scores[i] += d;
            scores[j] += d;
        }
        Ok(scores)
    }

    /// Returns the outcast of `nouns`.
    ///
    /// Ties go to the earliest word; when every score is zero the first word
    /// is returned.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `nouns` is empty
    /// - [`Error::UnknownWord`] if any word is not in the lexicon
    pub fn outcast<S: AsRef<str> + Sync>(&self, nouns: &[S]) -> Result<String> {
        if nouns.is_empty() {
            return Err(Error::InvalidArgument("noun list must not be empty".into()));
        }

        let scores = self.scores(nouns)?;
        let mut best = 0usize;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = i;
            }
        }

        let outcast = nouns[best].as_ref();
        debug!(words = nouns.len(), outcast, score = scores[best], "selected outcast");
        Ok(outcast.to_owned())
    }
}
