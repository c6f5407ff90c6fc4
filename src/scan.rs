//! Whole-book scanning.
//!
//! A book is scanned page by page as a small state machine:
//!
//! ```text
//! Scanning(0) -> Scanning(1) -> ... -> Accepted | Rejected
//! ```
//!
//! Without statistics the first unacceptable word moves straight to
//! `Rejected`. With statistics every word of every page is classified into
//! the known/unknown sets and the outcome is decided at the end.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::Mode;
use crate::correctness::TokenCorrectness;
use crate::extract::WordExtractor;
use crate::search_space::generate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A book record as supplied by the collection; fields the scan does not
/// use are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub slug: String,
    pub pages: Vec<Page>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Known/unknown words seen during a statistics scan.
///
/// Classification is per occurrence, so a word may end up in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub known: HashSet<String>,
    pub unknown: HashSet<String>,
}

impl VocabularyStats {
    pub fn record_known(&mut self, word: &str) {
        if !self.known.contains(word) {
            self.known.insert(word.to_string());
        }
    }

    pub fn record_unknown(&mut self, word: &str) {
        if !self.unknown.contains(word) {
            self.unknown.insert(word.to_string());
        }
    }

    pub fn merge(&mut self, other: VocabularyStats) {
        self.known.extend(other.known);
        self.unknown.extend(other.unknown);
    }

    /// Words that failed at least once.
    pub fn ever_unknown(&self) -> &HashSet<String> {
        &self.unknown
    }

    /// Words that never failed anywhere in the scan.
    pub fn only_known(&self) -> HashSet<&str> {
        self.known
            .difference(&self.unknown)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Accepted,
    Rejected,
}

impl ScanOutcome {
    pub fn is_accepted(self) -> bool {
        self == ScanOutcome::Accepted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning { page: usize },
    Accepted,
    Rejected,
}

pub struct BookScanner<'a> {
    extractor: &'a WordExtractor<'a>,
    correctness: &'a TokenCorrectness<'a>,
    mode: Mode,
}

impl<'a> BookScanner<'a> {
    pub fn new(
        extractor: &'a WordExtractor<'a>,
        correctness: &'a TokenCorrectness<'a>,
        mode: Mode,
    ) -> Self {
        Self {
            extractor,
            correctness,
            mode,
        }
    }

    /// True if any candidate form of `word` is correct.
    pub fn is_acceptable(&self, word: &str) -> bool {
        generate(word, self.mode)
            .iter()
            .any(|candidate| self.correctness.is_correct(candidate))
    }

    /// Scan `book`. Passing `stats` switches to statistics mode, which never
    /// stops early.
    pub fn scan(&self, book: &Book, mut stats: Option<&mut VocabularyStats>) -> ScanOutcome {
        let mut state = ScanState::Scanning { page: 0 };
        let mut any_failed = false;

        loop {
            state = match state {
                ScanState::Scanning { page } => match book.pages.get(page) {
                    Some(p) => {
                        let words = self.extractor.extract(&p.text, stats.as_deref_mut());
                        match self.scan_words(&words, stats.as_deref_mut()) {
                            Some(word) if stats.is_none() => {
                                debug!("Rejected {:?}: {:?} on page {}", book.title, word, page);
                                ScanState::Rejected
                            }
                            Some(_) => {
                                any_failed = true;
                                ScanState::Scanning { page: page + 1 }
                            }
                            None => ScanState::Scanning { page: page + 1 },
                        }
                    }
                    None if any_failed => ScanState::Rejected,
                    None => ScanState::Accepted,
                },
                ScanState::Accepted => return ScanOutcome::Accepted,
                ScanState::Rejected => return ScanOutcome::Rejected,
            };
        }
    }

    /// Returns the first unacceptable word. Without `stats` it stops there;
    /// with `stats` every word is classified before returning.
    fn scan_words<'w>(
        &self,
        words: &'w [String],
        mut stats: Option<&mut VocabularyStats>,
    ) -> Option<&'w str> {
        let mut first_failure = None;
        for word in words {
            let acceptable = self.is_acceptable(word);
            match stats.as_deref_mut() {
                None if !acceptable => return Some(word.as_str()),
                None => {}
                Some(stats) if acceptable => stats.record_known(word),
                Some(stats) => {
                    stats.record_unknown(word);
                    first_failure.get_or_insert(word.as_str());
                }
            }
        }
        first_failure
    }
}
