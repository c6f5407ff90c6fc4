//! Corpus-level filtering: keep the books whose every word is acceptable.

use log::{info, warn};
use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::correctness::{Dictionary, TokenCorrectness};
use crate::dictionary::Lexicon;
use crate::error::Result;
use crate::extract::{StopWords, Tagger, WordExtractor};
use crate::scan::{Book, BookScanner, ScanOutcome, VocabularyStats};
use crate::units::UnitParser;

/// Result of filtering a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<T> {
    pub accepted: Vec<T>,
    /// Present only when statistics were requested and a dictionary was
    /// available. Covers rejected books too.
    pub stats: Option<VocabularyStats>,
    /// False when the dictionary was unavailable and nothing was checked.
    pub filtered: bool,
}

pub struct CorpusFilter<'a> {
    config: ScanConfig,
    dictionary: Option<&'a dyn Dictionary>,
    tagger: &'a dyn Tagger,
    units: &'a dyn UnitParser,
    stop_words: &'a StopWords,
}

impl<'a> CorpusFilter<'a> {
    /// A filter without a dictionary passes every book through until
    /// [`with_dictionary`](Self::with_dictionary) is called.
    pub fn new(
        config: ScanConfig,
        tagger: &'a dyn Tagger,
        units: &'a dyn UnitParser,
        stop_words: &'a StopWords,
    ) -> Self {
        Self {
            config,
            dictionary: None,
            tagger,
            units,
            stop_words,
        }
    }

    pub fn with_dictionary(mut self, dictionary: &'a dyn Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Build a filter from the outcome of [`Lexicon::load`]. A lexicon that
    /// failed to load leaves the filter without a dictionary, so every book
    /// passes through unchecked.
    pub fn from_lexicon(
        config: ScanConfig,
        lexicon: &'a Result<Lexicon>,
        tagger: &'a dyn Tagger,
        units: &'a dyn UnitParser,
        stop_words: &'a StopWords,
    ) -> Self {
        let filter = Self::new(config, tagger, units, stop_words);
        match lexicon {
            Ok(lexicon) => filter.with_dictionary(lexicon),
            Err(e) => {
                warn!("Spell-check disabled: {}", e);
                filter
            }
        }
    }

    fn with_scanner<R>(&self, dictionary: &dyn Dictionary, f: impl FnOnce(&BookScanner<'_>) -> R) -> R {
        let correctness = TokenCorrectness::new(dictionary, self.units);
        let extractor = WordExtractor::new(self.tagger, self.stop_words);
        let scanner = BookScanner::new(&extractor, &correctness, self.config.mode);
        f(&scanner)
    }

    fn new_stats(&self) -> Option<VocabularyStats> {
        self.config
            .statistics_enabled
            .then(VocabularyStats::default)
    }

    fn unfiltered<T>(&self, accepted: Vec<T>) -> Filtered<T> {
        warn!(
            "Dictionary unavailable, returning {} books unfiltered",
            accepted.len()
        );
        Filtered {
            accepted,
            stats: None,
            filtered: false,
        }
    }

    /// Indices of the accepted books, in corpus order.
    pub fn filter_indices(&self, books: &[Book]) -> Filtered<usize> {
        let Some(dictionary) = self.dictionary else {
            return self.unfiltered((0..books.len()).collect());
        };

        let mut stats = self.new_stats();
        let accepted: Vec<usize> = self.with_scanner(dictionary, |scanner| {
            books
                .iter()
                .enumerate()
                .filter(|(_, book)| scanner.scan(book, stats.as_mut()).is_accepted())
                .map(|(i, _)| i)
                .collect()
        });

        info!(
            "Spell-checked {} books ({} mode): {} accepted",
            books.len(),
            self.config.mode,
            accepted.len()
        );
        Filtered {
            accepted,
            stats,
            filtered: true,
        }
    }

    pub fn filter(&self, books: Vec<Book>) -> Filtered<Book> {
        let Filtered {
            accepted,
            stats,
            filtered,
        } = self.filter_indices(&books);

        let mut keep = accepted.into_iter().peekable();
        let accepted = books
            .into_iter()
            .enumerate()
            .filter(|(i, _)| keep.next_if_eq(i).is_some())
            .map(|(_, book)| book)
            .collect();

        Filtered {
            accepted,
            stats,
            filtered,
        }
    }

    /// Like [`filter`](Self::filter), scanning books on the rayon pool.
    /// Each book keeps its own statistics, merged once every scan is done.
    pub fn filter_parallel(&self, books: Vec<Book>) -> Filtered<Book> {
        let Some(dictionary) = self.dictionary else {
            return self.unfiltered(books);
        };

        let total = books.len();
        let scanned: Vec<(Book, ScanOutcome, Option<VocabularyStats>)> =
            self.with_scanner(dictionary, |scanner| {
                books
                    .into_par_iter()
                    .map(|book| {
                        let mut local = self.new_stats();
                        let outcome = scanner.scan(&book, local.as_mut());
                        (book, outcome, local)
                    })
                    .collect()
            });

        let mut stats = self.new_stats();
        let mut accepted = Vec::new();
        for (book, outcome, local) in scanned {
            if let (Some(stats), Some(local)) = (stats.as_mut(), local) {
                stats.merge(local);
            }
            if outcome.is_accepted() {
                accepted.push(book);
            }
        }

        info!(
            "Spell-checked {} books in parallel ({} mode): {} accepted",
            total,
            self.config.mode,
            accepted.len()
        );
        Filtered {
            accepted,
            stats,
            filtered: true,
        }
    }
}
