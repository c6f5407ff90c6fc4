//! Candidate forms tried for each token before declaring it misspelled.

use crate::config::Mode;
use crate::punctuation::{Candidate, is_punctuation_char, remove_numbers, remove_punctuation};

/// Sole candidate for a token made entirely of punctuation.
///
/// This is a literal string sentinel, not the English word: correctness
/// checking accepts it unconditionally so pure-punctuation tokens always
/// pass.
pub const PASS_THROUGH: &str = "true";

/// Ordered candidates to test for `word` under `mode`.
pub fn generate(word: &str, mode: Mode) -> Vec<Candidate> {
    match mode {
        Mode::Simple => simple(word),
        Mode::Complex => complex(word),
    }
}

fn simple(word: &str) -> Vec<Candidate> {
    let word = word.trim_matches(is_punctuation_char);
    if word.is_empty() {
        return vec![Candidate::text(PASS_THROUGH)];
    }

    let lower = word.to_lowercase();
    let mut candidates = vec![Candidate::text(word), Candidate::text(lower.as_str())];

    let sep = if word.contains('-') {
        Some('-')
    } else if word.contains('/') {
        Some('/')
    } else {
        None
    };
    if let Some(sep) = sep {
        candidates.push(Candidate::group(word.split(sep)));
        candidates.push(Candidate::group(lower.split(sep)));
    }

    candidates
}

fn complex(word: &str) -> Vec<Candidate> {
    let base = [Candidate::text(word), Candidate::text(word.to_lowercase())];

    let mut candidates = base.to_vec();
    candidates.extend(base.iter().map(|c| c.normalized(remove_punctuation)));
    candidates.extend(base.iter().map(Candidate::split));
    candidates.extend(base.iter().map(|c| c.normalized(remove_numbers)));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().filter_map(Candidate::as_text).collect()
    }

    #[test]
    fn test_simple_strips_outer_punctuation() {
        let candidates = generate("\"Hello,", Mode::Simple);
        assert_eq!(candidates, vec![Candidate::text("Hello"), Candidate::text("hello")]);

        // interior punctuation survives
        let candidates = generate("(don't)", Mode::Simple);
        assert_eq!(texts(&candidates), vec!["don't", "don't"]);
    }

    #[test]
    fn test_simple_pure_punctuation_is_sentinel() {
        assert_eq!(generate("...", Mode::Simple), vec![Candidate::text("true")]);
        assert_eq!(generate("--", Mode::Simple), vec![Candidate::text(PASS_THROUGH)]);
    }

    #[test]
    fn test_simple_splits_hyphen_and_slash() {
        assert_eq!(
            generate("Well-Known", Mode::Simple),
            vec![
                Candidate::text("Well-Known"),
                Candidate::text("well-known"),
                Candidate::group(["Well", "Known"]),
                Candidate::group(["well", "known"]),
            ]
        );
        assert_eq!(
            generate("and/or", Mode::Simple)[2..],
            [Candidate::group(["and", "or"]), Candidate::group(["and", "or"])]
        );
        // hyphen wins when both are present
        assert_eq!(
            generate("a-b/c", Mode::Simple)[2],
            Candidate::group(["a", "b/c"])
        );
    }

    #[test]
    fn test_complex_layers_normalizations() {
        assert_eq!(
            generate("Word2,", Mode::Complex),
            vec![
                Candidate::text("Word2,"),
                Candidate::text("word2,"),
                Candidate::text("Word2"),
                Candidate::text("word2"),
                Candidate::group(["Word2", ""]),
                Candidate::group(["word2", ""]),
                Candidate::text("Word,"),
                Candidate::text("word,"),
            ]
        );
    }

    #[test]
    fn test_complex_covers_simple() {
        let simple = generate("Word,", Mode::Simple);
        let complex = generate("Word,", Mode::Complex);
        for candidate in &simple {
            assert!(complex.contains(candidate), "{:?} missing", candidate);
        }
    }
}
