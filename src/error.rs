//! Error types for the spell corrector.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    /// The word-count mapping was empty or its counts summed to zero.
    #[error("empty corpus: no word counts available to build probabilities")]
    EmptyCorpus,

    /// A vocabulary word was selected as a candidate but has no probability.
    #[error("inconsistent model: candidate '{word}' has no probability entry")]
    InconsistentModel { word: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    pub fn inconsistent_model<S: Into<String>>(word: S) -> Self {
        SpellError::InconsistentModel { word: word.into() }
    }
}
