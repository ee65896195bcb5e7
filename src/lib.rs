//! Frequency-ranked spelling correction over a corpus-derived vocabulary.
//!
//! A misspelled word is expanded into every string one edit away (deletion,
//! adjacent transposition, substitution, insertion). Known words among them are
//! the candidates; if there are none, the expansion is repeated to distance two.
//! Candidates are ranked by unigram probability.
//!
//! ```no_run
//! use spell_corrector::{load_word_counts, SpellModel};
//!
//! let model = SpellModel::new(load_word_counts("corpus.txt")?)?;
//! for (word, prob) in model.correct("ɓerde")? {
//!     println!("{word}\t{prob:.6}");
//! }
//! # Ok::<(), spell_corrector::SpellError>(())
//! ```

pub mod alphabet;
pub mod corpus;
pub mod corrector;
pub mod edits;
pub mod error;
pub mod frequency;
pub mod model;

pub use alphabet::{Alphabet, PULAAR_LETTERS};
pub use corpus::{load_frequency_file, load_word_counts, load_words, tokenize};
pub use corrector::{correct, Candidate, Corrector, CorrectorConfig};
pub use edits::{delete, edits_distance_one, edits_distance_two, insert, substitute, transpose};
pub use error::{Result, SpellError};
pub use frequency::{build_probabilities, count_words, CountFilter, Probabilities, WordCounts};
pub use model::SpellModel;
