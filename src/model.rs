use std::collections::HashSet;

use crate::corrector::{Candidate, Corrector, CorrectorConfig};
use crate::error::Result;
use crate::frequency::{build_probabilities, CountFilter, Probabilities, WordCounts};

/// Word counts, probabilities and vocabulary built together so they stay in
/// sync. Read-only once constructed and safe to share across threads.
pub struct SpellModel {
    word_counts: WordCounts,
    probabilities: Probabilities,
    vocabulary: HashSet<String>,
    corrector: Corrector,
}

impl SpellModel {
    pub fn new(word_counts: WordCounts) -> Result<Self> {
        SpellModel::with_config(
            word_counts,
            CountFilter::default(),
            CorrectorConfig::default(),
        )
    }

    pub fn with_config(
        word_counts: WordCounts,
        filter: CountFilter,
        config: CorrectorConfig,
    ) -> Result<Self> {
        let word_counts = filter.apply(word_counts);
        let probabilities = build_probabilities(&word_counts)?;
        let vocabulary = word_counts.keys().cloned().collect();

        Ok(SpellModel {
            word_counts,
            probabilities,
            vocabulary,
            corrector: Corrector::with_config(config),
        })
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    pub fn known<'a, I>(&self, words: I) -> HashSet<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        words
            .into_iter()
            .filter(|&word| self.vocabulary.contains(word))
            .cloned()
            .collect()
    }

    pub fn prob(&self, word: &str) -> f64 {
        *self.probabilities.get(word).unwrap_or(&0.0)
    }

    pub fn freq(&self, word: &str) -> usize {
        *self.word_counts.get(word).unwrap_or(&0)
    }

    pub fn correct(&self, word: &str) -> Result<Vec<Candidate>> {
        self.corrector
            .correct(word, &self.probabilities, &self.vocabulary)
    }

    pub fn correct_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Result<Vec<Vec<Candidate>>> {
        self.corrector
            .correct_batch(words, &self.probabilities, &self.vocabulary)
    }

    /// The most probable correction, or `word` itself when nothing is close.
    pub fn best(&self, word: &str) -> Result<String> {
        Ok(self
            .correct(word)?
            .into_iter()
            .next()
            .map(|(candidate, _)| candidate)
            .unwrap_or_else(|| word.to_string()))
    }

    /// All `(word, count)` pairs, most frequent first.
    pub fn dictionary(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .word_counts
            .iter()
            .map(|(word, &freq)| (word.clone(), freq))
            .collect();
        entries.sort_by(|(a, fa), (b, fb)| fb.cmp(fa).then_with(|| a.cmp(b)));
        entries
    }
}
