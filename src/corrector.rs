//! Candidate selection: exact match, then distance 1, then distance 2.

use std::collections::HashSet;
use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::edits::{edits_distance_one, edits_distance_two};
use crate::error::{Result, SpellError};
use crate::frequency::Probabilities;

/// A proposed correction and its unigram probability.
pub type Candidate = (String, f64);

#[derive(Debug, Clone, Default)]
pub struct CorrectorConfig {
    /// Letters substitution and insertion may introduce.
    pub alphabet: Alphabet,
    /// Words longer than this (in chars) never reach the distance-2 stage.
    pub max_expansion_len: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Corrector {
    config: CorrectorConfig,
}

impl Corrector {
    pub fn new() -> Self {
        Corrector::default()
    }

    pub fn with_config(config: CorrectorConfig) -> Self {
        Corrector { config }
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Vocabulary words closest to `word`, paired with their probabilities.
    ///
    /// A known word is returned alone. Otherwise distance-1 edits are tried, and
    /// distance-2 edits only when distance 1 finds nothing. Candidates are sorted
    /// by descending probability, ties by word. An empty result is not an error.
    pub fn correct(
        &self,
        word: &str,
        probabilities: &Probabilities,
        vocabulary: &HashSet<String>,
    ) -> Result<Vec<Candidate>> {
        let candidates = self.candidates(word, vocabulary);
        rank(candidates, probabilities)
    }

    /// Correct every word in `words` in parallel. Results keep input order.
    pub fn correct_batch<S>(
        &self,
        words: &[S],
        probabilities: &Probabilities,
        vocabulary: &HashSet<String>,
    ) -> Result<Vec<Vec<Candidate>>>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.correct(word.as_ref(), probabilities, vocabulary))
            .collect()
    }

    fn candidates(&self, word: &str, vocabulary: &HashSet<String>) -> HashSet<String> {
        if vocabulary.contains(word) {
            debug!("'{}' is a known word", word);
            return HashSet::from([word.to_string()]);
        }

        let start = Instant::now();
        let one = known(edits_distance_one(word, &self.config.alphabet, true), vocabulary);
        debug!(
            "distance-1 stage for '{}' found {} candidates in {:?}",
            word,
            one.len(),
            start.elapsed()
        );
        if !one.is_empty() {
            return one;
        }

        if let Some(max_len) = self.config.max_expansion_len {
            if word.chars().count() > max_len {
                debug!(
                    "skipping distance-2 stage for '{}': longer than {} chars",
                    word, max_len
                );
                return one;
            }
        }

        let start = Instant::now();
        let two = known(edits_distance_two(word, &self.config.alphabet), vocabulary);
        debug!(
            "distance-2 stage for '{}' found {} candidates in {:?}",
            word,
            two.len(),
            start.elapsed()
        );
        two
    }
}

/// Correct `word` with the default configuration.
pub fn correct(
    word: &str,
    probabilities: &Probabilities,
    vocabulary: &HashSet<String>,
) -> Result<Vec<Candidate>> {
    Corrector::default().correct(word, probabilities, vocabulary)
}

fn known(words: HashSet<String>, vocabulary: &HashSet<String>) -> HashSet<String> {
    words
        .into_iter()
        .filter(|word| vocabulary.contains(word))
        .collect()
}

fn rank(candidates: HashSet<String>, probabilities: &Probabilities) -> Result<Vec<Candidate>> {
    let mut ranked = candidates
        .into_iter()
        .map(|word| match probabilities.get(&word) {
            Some(&prob) => Ok((word, prob)),
            None => Err(SpellError::inconsistent_model(word)),
        })
        .collect::<Result<Vec<Candidate>>>()?;

    ranked.sort_by(|(a, pa), (b, pb)| pb.total_cmp(pa).then_with(|| a.cmp(b)));
    Ok(ranked)
}
