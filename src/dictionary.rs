//! Dictionary resources for token validation.
//!
//! Exact lookups go through a SymSpell frequency dictionary queried with a
//! maximum edit distance of zero. The known-word set combines an optional
//! Hunspell dictionary with an optional plain word list.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::{info, warn};
use symspell::{SymSpell, SymSpellBuilder, UnicodeStringStrategy, Verbosity};
use unicode_normalization::UnicodeNormalization;

use crate::correctness::Dictionary;
use crate::error::{Error, Result};

/// SymSpell's English frequency list, `term count` per line.
pub const FREQUENCY_DICTIONARY: &str = "frequency_dictionary_en_82_765.txt";
/// Basename of the Hunspell `.aff`/`.dic` pair.
pub const HUNSPELL_NAME: &str = "en_US";
/// One word per line, `#` starts a comment line.
pub const KNOWN_WORDS: &str = "known_words.txt";

/// Only exact lookups are made, so no deletes are indexed.
const MAX_EDIT_DISTANCE: i64 = 0;
const PREFIX_LENGTH: i64 = 7;

/// Global lexicon instance (loaded once, reused)
static LEXICON: OnceLock<Lexicon> = OnceLock::new();

pub struct Lexicon {
    frequency: SymSpell<UnicodeStringStrategy>,
    hunspell: Option<zspell::Dictionary>,
    word_list: HashSet<String>,
}

impl Lexicon {
    /// Load every resource from `dict_dir`.
    ///
    /// Only the frequency dictionary is required; a missing Hunspell pair or
    /// word list leaves that part of the known set empty.
    pub fn load(dict_dir: &Path) -> Result<Self> {
        Ok(Self {
            frequency: load_frequency(&dict_dir.join(FREQUENCY_DICTIONARY))?,
            hunspell: load_hunspell(dict_dir, HUNSPELL_NAME),
            word_list: load_word_list(&dict_dir.join(KNOWN_WORDS)),
        })
    }

    fn is_known_exact(&self, word: &str) -> bool {
        if let Some(ref d) = self.hunspell {
            if d.check_word(word) {
                return true;
            }
        }
        self.word_list.contains(word)
    }

    pub fn stats(&self) -> String {
        format!(
            "Lexicon loaded: frequency=true, hunspell={}, word_list={}",
            self.hunspell.is_some(),
            self.word_list.len()
        )
    }
}

impl Dictionary for Lexicon {
    fn lookup_exact(&self, word: &str) -> bool {
        let word: String = word.nfc().collect();
        !self
            .frequency
            .lookup(&word, Verbosity::Top, MAX_EDIT_DISTANCE)
            .is_empty()
    }

    fn is_known(&self, word: &str) -> bool {
        let word: String = word.nfc().collect();
        if self.is_known_exact(&word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.is_known_exact(&lower)
    }
}

fn load_frequency(path: &Path) -> Result<SymSpell<UnicodeStringStrategy>> {
    if !path.exists() {
        return Err(Error::ResourceUnavailable(format!(
            "frequency dictionary not found: {}",
            path.display()
        )));
    }

    let mut engine: SymSpell<UnicodeStringStrategy> = SymSpellBuilder::default()
        .max_dictionary_edit_distance(MAX_EDIT_DISTANCE)
        .prefix_length(PREFIX_LENGTH)
        .build()
        .map_err(|e| Error::ResourceUnavailable(format!("cannot build SymSpell engine: {}", e)))?;

    if !engine.load_dictionary(path.to_string_lossy().as_ref(), 0, 1, " ") {
        return Err(Error::ResourceUnavailable(format!(
            "failed to load frequency dictionary: {}",
            path.display()
        )));
    }
    info!("Loaded frequency dictionary: {}", path.display());
    Ok(engine)
}

fn load_word_list(path: &Path) -> HashSet<String> {
    if !path.exists() {
        return HashSet::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => {
            let words: HashSet<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(|line| line.nfc().collect())
                .collect();
            info!("Loaded known-word list: {} words", words.len());
            words
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            HashSet::new()
        }
    }
}

/// `<name>.aff` + `<name>.dic` from `dict_dir`, or `None` when either file
/// is missing or does not parse. Contributes to the known set only.
fn load_hunspell(dict_dir: &Path, name: &str) -> Option<zspell::Dictionary> {
    let read = |ext: &str| {
        let path = dict_dir.join(format!("{}.{}", name, ext));
        if !path.exists() {
            warn!("Hunspell {} missing, known set without it: {}", ext, path.display());
            return None;
        }
        fs::read_to_string(&path)
            .map_err(|e| warn!("Failed to read Hunspell {}: {}", path.display(), e))
            .ok()
    };
    let aff = read("aff")?;
    let dic = read("dic")?;

    match zspell::builder().config_str(&aff).dict_str(&dic).build() {
        Ok(dict) => {
            info!("Loaded Hunspell known words: {}", name);
            Some(dict)
        }
        Err(e) => {
            warn!("Hunspell {} does not parse, known set without it: {}", name, e);
            None
        }
    }
}

/// Load the process-wide lexicon from `dict_dir`.
///
/// Returns false when the frequency dictionary cannot be loaded; filtering
/// then falls back to returning books unfiltered.
pub fn init_lexicon(dict_dir: &Path) -> bool {
    if LEXICON.get().is_some() {
        return true;
    }

    match Lexicon::load(dict_dir) {
        Ok(lexicon) => {
            let stats = lexicon.stats();
            if LEXICON.set(lexicon).is_ok() {
                info!("Dictionary initialization complete: {}", stats);
            }
            true
        }
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}

pub fn global_lexicon() -> Option<&'static Lexicon> {
    LEXICON.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_missing_frequency_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        match Lexicon::load(dir.path()) {
            Err(Error::ResourceUnavailable(msg)) => assert!(msg.contains(FREQUENCY_DICTIONARY)),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("expected ResourceUnavailable"),
        }
    }

    #[test]
    fn test_frequency_and_word_list() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), FREQUENCY_DICTIONARY, "the 23135851162\ncat 3000000\nran 2000000\n");
        write_file(dir.path(), KNOWN_WORDS, "# extra words\nzebra\n\ncafé\n");

        let lexicon = Lexicon::load(dir.path()).unwrap();
        assert!(lexicon.lookup_exact("cat"));
        assert!(lexicon.lookup_exact("ran"));
        assert!(!lexicon.lookup_exact("cta"));
        // one edit away from an entry
        assert!(!lexicon.lookup_exact("cats"));
        assert!(!lexicon.lookup_exact("ca"));
        assert!(!lexicon.lookup_exact("xzqy"));

        assert!(lexicon.is_known("zebra"));
        assert!(lexicon.is_known("Zebra"));
        // decomposed e + combining acute
        assert!(lexicon.is_known("cafe\u{301}"));
        assert!(!lexicon.is_known("cat"));
        assert!(lexicon.stats().contains("word_list=2"));
    }

    #[test]
    fn test_incomplete_hunspell_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), FREQUENCY_DICTIONARY, "cat 3000000\n");
        write_file(dir.path(), "en_US.aff", "SET UTF-8\n");

        // .dic missing: lexicon still loads, without Hunspell
        let lexicon = Lexicon::load(dir.path()).unwrap();
        assert!(lexicon.stats().contains("hunspell=false"));
        assert!(lexicon.lookup_exact("cat"));
    }

    #[test]
    fn test_init_lexicon_without_frequency_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!init_lexicon(dir.path()));
        assert!(global_lexicon().is_none());
    }

    #[test]
    fn test_hunspell_known_words() {
        // This test requires dictionaries to be present
        let dict_dir = Path::new("dictionaries");
        if dict_dir.join(FREQUENCY_DICTIONARY).exists() {
            let lexicon = Lexicon::load(dict_dir).unwrap();
            assert!(lexicon.is_known("hello"));
            assert!(lexicon.is_known("Still"));
            assert!(!lexicon.is_known("asdfgh"));
        }
    }
}
