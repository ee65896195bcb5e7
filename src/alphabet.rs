use const_format::formatcp;

const PULAAR_PLAIN: &str = "abcdefghijklmnoprstuwyz"; // 23 chars, no q/v/x
const PULAAR_EXTENDED: &str = "\u{0253}\u{0257}\u{014b}\u{00f1}\u{01b4}"; // ɓ ɗ ŋ ñ ƴ
pub const PULAAR_LETTERS: &str = formatcp!("{}{}", PULAAR_PLAIN, PULAAR_EXTENDED); // 28 chars

/// Ordered set of letters that substitution and insertion may introduce.
///
/// Duplicate letters are dropped on construction, keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    pub fn new(letters: &str) -> Self {
        let mut seen = Vec::new();
        for c in letters.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        Alphabet { letters: seen }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// True when every character of `word` belongs to the alphabet.
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(PULAAR_LETTERS)
    }
}
