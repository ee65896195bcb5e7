//! Single-edit operators and the distance-1 / distance-2 expanders built on them.
//!
//! Every operator walks all `len + 1` split points of the word. Splits are taken
//! on char boundaries, so multi-byte letters such as `ɓ` are edited as one unit.
//! None of these functions look at a vocabulary.

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;

use crate::alphabet::Alphabet;

fn splits(word: &str) -> Vec<(&str, &str)> {
    let mut splits: Vec<(&str, &str)> = Vec::new();
    for (i, _) in word.char_indices() {
        splits.push(word.split_at(i));
    }
    splits.push((word, ""));
    splits
}

/// All strings with one character removed. Yields exactly one entry per char of
/// `word`, duplicates included.
pub fn delete(word: &str) -> Vec<String> {
    splits(word)
        .into_iter()
        .filter(|(_, r)| !r.is_empty())
        .map(|(l, r)| {
            let mut chars = r.chars();
            chars.next();
            format!("{}{}", l, chars.as_str())
        })
        .collect()
}

/// All strings with two adjacent characters swapped.
pub fn transpose(word: &str) -> Vec<String> {
    let mut edits = Vec::new();
    for (l, r) in splits(word) {
        let mut chars = r.chars();
        if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
            edits.push(format!("{}{}{}{}", l, second, first, chars.as_str()));
        }
    }
    edits
}

/// All strings with one character replaced by an alphabet letter, deduplicated
/// and sorted.
pub fn substitute(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let mut edits = BTreeSet::new();
    for (l, r) in splits(word) {
        let mut chars = r.chars();
        if chars.next().is_some() {
            let rest = chars.as_str();
            for c in alphabet.letters() {
                edits.insert(format!("{}{}{}", l, c, rest));
            }
        }
    }
    edits.into_iter().collect()
}

/// All strings with one alphabet letter inserted at any position, ends included.
pub fn insert(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let mut edits = Vec::with_capacity((word.chars().count() + 1) * alphabet.len());
    for (l, r) in splits(word) {
        for c in alphabet.letters() {
            edits.push(format!("{}{}{}", l, c, r));
        }
    }
    edits
}

pub fn edits_distance_one(
    word: &str,
    alphabet: &Alphabet,
    allow_transpose: bool,
) -> HashSet<String> {
    let mut edits: HashSet<String> = HashSet::new();
    edits.extend(delete(word));
    if allow_transpose {
        edits.extend(transpose(word));
    }
    edits.extend(substitute(word, alphabet));
    edits.extend(insert(word, alphabet));
    edits
}

/// Every string reachable by applying [`edits_distance_one`] twice.
///
/// This is the full cross product and grows roughly with
/// `(alphabet.len() * word.len())^2`; the first-level set is fanned out across
/// the rayon pool.
pub fn edits_distance_two(word: &str, alphabet: &Alphabet) -> HashSet<String> {
    edits_distance_one(word, alphabet, true)
        .par_iter()
        .flat_map_iter(|e1| edits_distance_one(e1, alphabet, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet {
        Alphabet::new("abc")
    }

    #[test]
    fn delete_yields_one_per_char() {
        assert_eq!(delete("cat"), vec!["at", "ct", "ca"]);
        assert_eq!(delete("aa"), vec!["a", "a"]);
        assert!(delete("").is_empty());
        for w in ["", "a", "hello", "ɓernde"] {
            let edits = delete(w);
            assert_eq!(edits.len(), w.chars().count());
            assert!(edits.iter().all(|e| e.chars().count() + 1 == w.chars().count()));
        }
    }

    #[test]
    fn transpose_swaps_adjacent_pairs() {
        assert_eq!(transpose("cat"), vec!["act", "cta"]);
        assert!(transpose("a").is_empty());
        assert!(transpose("").is_empty());
        assert_eq!(transpose("ɓa"), vec!["aɓ"]);
        assert_eq!(transpose("hello").len(), 4);
    }

    #[test]
    fn substitute_is_sorted_and_deduplicated() {
        let edits = substitute("ab", &abc());
        assert_eq!(edits, vec!["aa", "ab", "ac", "bb", "cb"]);
        assert!(substitute("", &abc()).is_empty());

        let edits = substitute("cet", &Alphabet::default());
        assert!(edits.contains(&"cat".to_string()));
        assert!(edits.windows(2).all(|w| w[0] < w[1]));
        assert!(edits.iter().all(|e| e.chars().count() == 3));
    }

    #[test]
    fn insert_covers_both_ends() {
        let edits = insert("a", &abc());
        assert_eq!(edits, vec!["aa", "ba", "ca", "aa", "ab", "ac"]);
        assert!(edits.iter().all(|e| e.chars().count() == 2));
    }

    #[test]
    fn insert_into_empty_word_yields_alphabet() {
        let alphabet = Alphabet::default();
        let edits = insert("", &alphabet);
        assert_eq!(edits.len(), alphabet.len());
        assert!(edits.contains(&"ŋ".to_string()));
    }

    #[test]
    fn unknown_chars_can_be_removed_but_not_introduced() {
        let alphabet = abc();
        assert!(delete("axb").contains(&"ab".to_string()));
        assert!(transpose("xa").contains(&"ax".to_string()));
        assert!(insert("a", &alphabet).iter().all(|e| !e.contains('x')));
    }

    #[test]
    fn distance_one_is_union_of_operators() {
        let alphabet = abc();
        let word = "abca";
        let mut union: HashSet<String> = HashSet::new();
        union.extend(delete(word));
        union.extend(transpose(word));
        union.extend(substitute(word, &alphabet));
        union.extend(insert(word, &alphabet));

        assert_eq!(edits_distance_one(word, &alphabet, true), union);
    }

    #[test]
    fn distance_one_without_transpose() {
        let alphabet = Alphabet::new("z");
        let with = edits_distance_one("ab", &alphabet, true);
        let without = edits_distance_one("ab", &alphabet, false);
        assert!(with.contains("ba"));
        assert!(!without.contains("ba"));
    }

    #[test]
    fn distance_two_contains_every_second_level_edit() {
        let alphabet = abc();
        let word = "ab";
        let two = edits_distance_two(word, &alphabet);
        for e1 in edits_distance_one(word, &alphabet, true) {
            assert!(edits_distance_one(&e1, &alphabet, true).is_subset(&two));
        }
        assert!(two.contains("ba"));
        assert!(two.contains("cc"));
        assert!(two.contains(""));
    }
}
