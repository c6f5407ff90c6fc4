//! Python bindings for the site generator.

use std::collections::HashSet;
use std::path::Path;

use log::warn;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{Mode, ScanConfig};
use crate::corpus::CorpusFilter;
use crate::dictionary::{global_lexicon, init_lexicon};
use crate::extract::{StopWords, TaggedWord, Tagger};
use crate::numbers;
use crate::scan::Book;
use crate::units::UnitTable;

/// Wraps a Python callable `text -> list[(word, tag)]`, e.g. nltk's
/// `pos_tag(word_tokenize(text))`.
struct PyTagger {
    callable: Py<PyAny>,
}

impl Tagger for PyTagger {
    fn tag(&self, text: &str) -> Vec<TaggedWord> {
        Python::attach(|py| {
            let tagged = match self.callable.bind(py).call1((text,)) {
                Ok(result) => result
                    .extract::<Vec<(String, String)>>()
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match tagged {
                Ok(pairs) => pairs
                    .into_iter()
                    .map(|(word, tag)| TaggedWord::new(word, tag))
                    .collect(),
                Err(e) => {
                    // Untagged words are still checked, so a broken tagger
                    // cannot let typos through.
                    warn!("Tagger failed, checking untagged words: {}", e);
                    text.split_whitespace()
                        .map(|word| TaggedWord::new(word, "NN"))
                        .collect()
                }
            }
        })
    }
}

/// Load dictionaries from a directory. Returns false if the frequency
/// dictionary is missing; `spellcheck` then returns every book.
#[pyfunction]
fn init_dictionaries(dict_dir: String) -> bool {
    init_lexicon(Path::new(&dict_dir))
}

#[pyfunction]
fn is_number(token: &str) -> bool {
    numbers::is_number(token, &UnitTable::default())
}

/// Filter books given as a JSON array, loading dictionaries from `dict_dir`
/// on first use.
/// Returns: (accepted_indices, unknown_words | None, known_words | None)
#[pyfunction]
#[pyo3(signature = (books_json, tagger, dict_dir, mode = "simple", spellcheckdata = false, stop_words = None))]
fn spellcheck(
    books_json: &str,
    tagger: Py<PyAny>,
    dict_dir: &str,
    mode: &str,
    spellcheckdata: bool,
    stop_words: Option<Vec<String>>,
) -> PyResult<(Vec<usize>, Option<HashSet<String>>, Option<HashSet<String>>)> {
    let mode: Mode = mode
        .parse()
        .map_err(|e: crate::Error| PyValueError::new_err(e.to_string()))?;
    let books: Vec<Book> = serde_json::from_str(books_json)
        .map_err(|e| PyValueError::new_err(format!("Invalid books JSON: {}", e)))?;

    let stop_words = match stop_words {
        Some(words) => words.into_iter().collect(),
        None => StopWords::english(),
    };
    let tagger = PyTagger { callable: tagger };
    let units = UnitTable::default();

    let mut filter = CorpusFilter::new(ScanConfig::new(mode, spellcheckdata), &tagger, &units, &stop_words);
    if init_lexicon(Path::new(dict_dir)) {
        if let Some(lexicon) = global_lexicon() {
            filter = filter.with_dictionary(lexicon);
        }
    }

    let result = filter.filter_indices(&books);
    let (unknown, known) = match result.stats {
        Some(stats) => (Some(stats.unknown), Some(stats.known)),
        None => (None, None),
    };
    Ok((result.accepted, unknown, known))
}

#[pymodule]
fn book_spellcheck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_dictionaries, m)?)?;
    m.add_function(wrap_pyfunction!(is_number, m)?)?;
    m.add_function(wrap_pyfunction!(spellcheck, m)?)?;
    Ok(())
}
