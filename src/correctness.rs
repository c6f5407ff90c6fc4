//! The composite "is this candidate acceptable" predicate.

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::numbers::matching_rule;
use crate::punctuation::{Candidate, is_punctuation_token};
use crate::search_space::PASS_THROUGH;
use crate::units::UnitParser;

/// Dictionary capability consumed by the pipeline.
pub trait Dictionary: Send + Sync {
    /// Zero-edit-distance lookup in the frequency dictionary.
    fn lookup_exact(&self, word: &str) -> bool;

    /// Membership in the static known-word set.
    fn is_known(&self, word: &str) -> bool;
}

lazy_static! {
    static ref CLOCK_TIME: Regex =
        Regex::new(r"(?i)^(\d{1,2}):[0-5]\d\s?(am|pm)?$").unwrap();
    static ref HOUR_TIME: Regex = Regex::new(r"(?i)^(\d{1,2})\s?(am|pm)$").unwrap();
}

/// `3:15pm`, `14:30`, `9am`.
pub fn is_time(s: &str) -> bool {
    let caps = match CLOCK_TIME.captures(s).or_else(|| HOUR_TIME.captures(s)) {
        Some(caps) => caps,
        None => return false,
    };
    let hour: u32 = match caps[1].parse() {
        Ok(h) => h,
        Err(_) => return false,
    };
    if caps.get(2).is_some() {
        (1..=12).contains(&hour)
    } else {
        hour <= 23
    }
}

pub struct TokenCorrectness<'a> {
    dictionary: &'a dyn Dictionary,
    units: &'a dyn UnitParser,
}

impl<'a> TokenCorrectness<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, units: &'a dyn UnitParser) -> Self {
        Self { dictionary, units }
    }

    /// A group holds only if every member holds.
    pub fn is_correct(&self, candidate: &Candidate) -> bool {
        match candidate {
            Candidate::Text(text) => self.is_correct_text(text),
            Candidate::Group(items) => items.iter().all(|item| self.is_correct(item)),
        }
    }

    // Cheapest checks first; the order never changes the result.
    fn is_correct_text(&self, text: &str) -> bool {
        text == PASS_THROUGH
            || is_punctuation_token(text)
            || self.is_number(text)
            || is_time(text)
            || self.dictionary.lookup_exact(text)
            || self.dictionary.is_known(text)
    }

    fn is_number(&self, text: &str) -> bool {
        match matching_rule(text, self.units) {
            Some(rule) => {
                trace!("{:?} accepted as a number ({})", text, rule);
                true
            }
            None => false,
        }
    }
}
