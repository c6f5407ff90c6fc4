//! Spell-check filter for collections of short illustrated books.
//!
//! Every word a part-of-speech tagger hands back for a page is expanded into
//! candidate forms and accepted if any form is punctuation, a number, a time
//! of day, or a dictionary word. Books with an unacceptable word are dropped
//! from the collection; optionally the known and unknown vocabulary is
//! collected along the way.
//!
//! ```no_run
//! use std::path::Path;
//! use book_spellcheck::{Book, CorpusFilter, Lexicon, ScanConfig, StopWords, Tagger, UnitTable};
//!
//! fn run(books: Vec<Book>, tagger: &dyn Tagger) -> book_spellcheck::Result<Vec<Book>> {
//!     let config = ScanConfig::from_json(r#"{"mode": "simple"}"#)?;
//!     let lexicon = Lexicon::load(Path::new("dictionaries"));
//!     let units = UnitTable::default();
//!     let stop_words = StopWords::english();
//!
//!     // A lexicon that fails to load returns the books unfiltered.
//!     let filter = CorpusFilter::from_lexicon(config, &lexicon, tagger, &units, &stop_words);
//!     Ok(filter.filter(books).accepted)
//! }
//! ```

pub mod config;
pub mod corpus;
pub mod correctness;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod numbers;
pub mod punctuation;
pub mod scan;
pub mod search_space;
pub mod units;

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod test_support;

pub use config::{Mode, ScanConfig};
pub use corpus::{CorpusFilter, Filtered};
pub use correctness::{Dictionary, TokenCorrectness};
pub use dictionary::Lexicon;
pub use error::{Error, Result};
pub use extract::{StopWords, TaggedWord, Tagger, WordExtractor};
pub use punctuation::Candidate;
pub use scan::{Book, BookScanner, Page, ScanOutcome, VocabularyStats};
pub use search_space::{PASS_THROUGH, generate};
pub use units::{Quantity, UnitError, UnitParser, UnitTable};
