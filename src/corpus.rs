//! Loading word tokens and counts from files on disk.

use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::LazyLock;

use log::{info, warn};
use regex::Regex;

use crate::error::Result;
use crate::frequency::{count_words, WordCounts};

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is a valid regex"));

/// Lower-case `text` and split it into runs of Unicode letters, digits and `_`.
///
/// Combining marks and connector punctuation other than `_` end a token.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path.as_ref())?;
    let words = tokenize(&text);
    info!(
        "loaded {} tokens from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

pub fn load_word_counts<P: AsRef<Path>>(path: P) -> Result<WordCounts> {
    Ok(count_words(load_words(path)?))
}

/// Read a `word<TAB>count` frequency list.
///
/// Text after `#` is ignored. Lines without a parsable count are skipped, and a
/// word listed twice has its counts summed.
pub fn load_frequency_file<P: AsRef<Path>>(path: P) -> Result<WordCounts> {
    let path = path.as_ref();
    let reader = io::BufReader::new(File::open(path)?);
    let mut word_counts = WordCounts::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let word = fields.next().map(str::trim).unwrap_or_default();
        let freq = fields.next().and_then(|f| f.trim().parse::<usize>().ok());
        match freq {
            Some(freq) if !word.is_empty() => {
                *word_counts.entry(word.to_string()).or_insert(0) += freq;
            }
            _ => warn!(
                "{}:{}: skipping malformed frequency line",
                path.display(),
                lineno + 1
            ),
        }
    }

    info!(
        "loaded {} distinct words from {}",
        word_counts.len(),
        path.display()
    );
    Ok(word_counts)
}
