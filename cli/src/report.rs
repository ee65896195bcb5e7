//! Text rendering of correction results.

use std::fmt::Write;

use spell_corrector::Candidate;

/// Render the result for one word. Known words get a single line; otherwise the
/// word is followed by up to `limit` indented `candidate<TAB>probability` lines.
pub fn format_report(
    word: &str,
    is_correct: bool,
    candidates: &[Candidate],
    limit: usize,
) -> String {
    let mut out = String::new();
    if is_correct {
        let _ = writeln!(out, "{word}: correctly spelled");
        return out;
    }

    let _ = writeln!(out, "{word}:");
    if candidates.is_empty() {
        let _ = writeln!(out, "  no suggestions");
    }
    for (candidate, prob) in candidates.iter().take(limit) {
        let _ = writeln!(out, "  {candidate}\t{prob:.6}");
    }
    out
}
