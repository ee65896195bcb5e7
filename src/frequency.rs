use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::error::{Result, SpellError};

pub type WordCounts = HashMap<String, usize>;
pub type Probabilities = HashMap<String, f64>;

/// Count occurrences of each token.
pub fn count_words<I, S>(words: I) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = WordCounts::new();
    for word in words {
        *counts.entry(word.into()).or_insert(0) += 1;
    }
    counts
}

/// Map every word to `count / total`.
///
/// Fails with [`SpellError::EmptyCorpus`] when `word_counts` is empty or sums to
/// zero.
pub fn build_probabilities(word_counts: &WordCounts) -> Result<Probabilities> {
    let total: usize = word_counts.values().sum();
    if total == 0 {
        return Err(SpellError::EmptyCorpus);
    }

    let total = total as f64;
    Ok(word_counts
        .iter()
        .map(|(word, &count)| (word.clone(), count as f64 / total))
        .collect())
}

/// Decides which raw counts make it into a dictionary.
#[derive(Debug, Clone)]
pub struct CountFilter {
    pub min_freq: usize,
    pub min_len: usize,
    pub max_len: usize,
    /// When set, only words spelled entirely with these letters are kept.
    pub alphabet: Option<Alphabet>,
    pub predicate: Option<fn(&str) -> bool>,
}

impl CountFilter {
    pub fn keep(&self, word: &str, freq: usize) -> bool {
        if freq == 0 || freq < self.min_freq {
            return false;
        }

        let len = word.chars().count();
        if word.is_empty() || len < self.min_len || len > self.max_len {
            return false;
        }

        if let Some(alphabet) = &self.alphabet {
            if !alphabet.covers(word) {
                return false;
            }
        }

        if let Some(predicate) = self.predicate {
            return predicate(word);
        }

        true
    }

    pub fn apply(&self, word_counts: WordCounts) -> WordCounts {
        word_counts
            .into_iter()
            .filter(|(word, freq)| self.keep(word, *freq))
            .collect()
    }
}

impl Default for CountFilter {
    fn default() -> Self {
        CountFilter {
            min_freq: 1,
            min_len: 1,
            max_len: usize::MAX,
            alphabet: None,
            predicate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_hat_bat() -> WordCounts {
        WordCounts::from([
            ("cat".to_string(), 2),
            ("hat".to_string(), 1),
            ("bat".to_string(), 1),
        ])
    }

    #[test]
    fn test_count_words() {
        let counts = count_words(["a", "b", "a", "c", "a"]);
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_build_probabilities() {
        let probs = build_probabilities(&cat_hat_bat()).unwrap();
        assert_eq!(probs["cat"], 0.5);
        assert_eq!(probs["hat"], 0.25);
        assert_eq!(probs["bat"], 0.25);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let counts = count_words("the quick brown fox jumps over the lazy dog the end".split(' '));
        let probs = build_probabilities(&counts).unwrap();
        let sum: f64 = probs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(probs.values().all(|&p| p > 0.0 && p <= 1.0));
    }

    #[test]
    fn test_empty_corpus() {
        let err = build_probabilities(&WordCounts::new()).unwrap_err();
        assert!(matches!(err, SpellError::EmptyCorpus));

        let zeros = WordCounts::from([("a".to_string(), 0)]);
        assert!(matches!(
            build_probabilities(&zeros),
            Err(SpellError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_count_filter() {
        fn no_b(word: &str) -> bool {
            !word.starts_with('b')
        }

        let filter = CountFilter {
            min_freq: 1,
            min_len: 2,
            max_len: 3,
            alphabet: None,
            predicate: Some(no_b),
        };
        assert!(filter.keep("cat", 2));
        assert!(!filter.keep("bat", 1));
        assert!(!filter.keep("a", 5));
        assert!(!filter.keep("cats", 5));
        assert!(!filter.keep("hat", 0));

        let kept = filter.apply(cat_hat_bat());
        assert_eq!(kept.len(), 2);
        assert!(!kept.contains_key("bat"));
    }

    #[test]
    fn test_count_filter_alphabet() {
        let filter = CountFilter {
            alphabet: Some(Alphabet::default()),
            ..Default::default()
        };
        assert!(filter.keep("ɓernde", 1));
        assert!(!filter.keep("quiz", 1));
        assert!(!filter.keep("route66", 1));

        let counts = count_words(["ŋari", "ŋari", "xenon", "café"]);
        let kept = filter.apply(counts);
        assert_eq!(kept, WordCounts::from([("ŋari".to_string(), 2)]));
    }
}
