//! In-crate doubles for the external collaborators.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::correctness::Dictionary;
use crate::extract::{TaggedWord, Tagger};
use crate::scan::{Book, Page};

pub struct WordListDictionary {
    exact: HashSet<String>,
    known: HashSet<String>,
    lookups: AtomicUsize,
    queried: Mutex<Vec<String>>,
}

impl WordListDictionary {
    pub fn new(words: &[&str]) -> Self {
        Self {
            exact: words.iter().map(|w| w.to_string()).collect(),
            known: HashSet::new(),
            lookups: AtomicUsize::new(0),
            queried: Mutex::new(Vec::new()),
        }
    }

    pub fn with_known(mut self, words: &[&str]) -> Self {
        self.known.extend(words.iter().map(|w| w.to_string()));
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn was_queried(&self, word: &str) -> bool {
        self.queried.lock().unwrap().iter().any(|q| q == word)
    }
}

impl Dictionary for WordListDictionary {
    fn lookup_exact(&self, word: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().unwrap().push(word.to_string());
        self.exact.contains(word)
    }

    fn is_known(&self, word: &str) -> bool {
        self.known.contains(word)
    }
}

/// Splits on whitespace. Capitalized words are tagged `NNP` unless they
/// start the text, everything else `NN`.
#[derive(Default)]
pub struct WhitespaceTagger {
    calls: AtomicUsize,
}

impl WhitespaceTagger {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Tagger for WhitespaceTagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        text.split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                let proper = i > 0 && word.chars().next().is_some_and(char::is_uppercase);
                TaggedWord::new(word, if proper { "NNP" } else { "NN" })
            })
            .collect()
    }
}

pub fn book(title: &str, pages: &[&str]) -> Book {
    Book {
        title: title.to_string(),
        author: "Anonymous".to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        pages: pages
            .iter()
            .map(|text| Page {
                text: text.to_string(),
                url: None,
            })
            .collect(),
        extra: Default::default(),
    }
}
