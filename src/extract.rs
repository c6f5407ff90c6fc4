//! Reduces page text to the words that need spell-checking.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::punctuation::is_punctuation_token;
use crate::scan::VocabularyStats;

/// Penn Treebank tags for singular and plural proper nouns.
const PROPER_NOUN_TAGS: [&str; 2] = ["NNP", "NNPS"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn is_proper_noun(&self) -> bool {
        PROPER_NOUN_TAGS.contains(&self.tag.as_str())
    }
}

/// Tokenizer plus part-of-speech tagger.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedWord>;
}

lazy_static! {
    static ref ENGLISH_STOP_WORDS: HashSet<&'static str> = {
        let words = [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
            "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
            "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
            "themselves", "what", "which", "who", "whom", "this", "that", "these", "those",
            "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
            "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if",
            "or", "because", "as", "until", "while", "of", "at", "by", "for", "with",
            "about", "against", "between", "into", "through", "during", "before", "after",
            "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
            "under", "again", "further", "then", "once", "here", "there", "when", "where",
            "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
            "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
            "very", "s", "t", "can", "will", "just", "don", "should", "now",
        ];
        words.iter().cloned().collect()
    };
}

/// Lowercase words that are never spell-checked.
#[derive(Debug, Clone, Default)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn english() -> Self {
        Self(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|w| w.as_ref().to_lowercase()).collect())
    }
}

pub struct WordExtractor<'a> {
    tagger: &'a dyn Tagger,
    stop_words: &'a StopWords,
}

impl<'a> WordExtractor<'a> {
    pub fn new(tagger: &'a dyn Tagger, stop_words: &'a StopWords) -> Self {
        Self { tagger, stop_words }
    }

    /// Words of `text` to check, skipping proper nouns, punctuation and stop
    /// words. Skipped proper nouns and stop words count as known.
    pub fn extract(&self, text: &str, mut stats: Option<&mut VocabularyStats>) -> Vec<String> {
        let mut words = Vec::new();
        for tagged in self.tagger.tag(text) {
            if tagged.is_proper_noun() || self.stop_words.contains(&tagged.word) {
                if let Some(stats) = stats.as_deref_mut() {
                    stats.record_known(&tagged.word);
                }
                continue;
            }
            if is_punctuation_token(&tagged.word) {
                continue;
            }
            words.push(tagged.word);
        }
        words
    }
}
