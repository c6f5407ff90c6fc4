//! Punctuation and digit normalization over single strings and nested
//! candidate groups.

/// ASCII punctuation plus the typographic marks common in book text.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~º–°…";

pub fn is_punctuation_char(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// A token that counts as punctuation: a single punctuation character, or
/// the empty fragment left behind by splitting on punctuation.
pub fn is_punctuation_token(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => is_punctuation_char(c),
        _ => false,
    }
}

pub fn remove_punctuation(s: &str) -> String {
    s.chars().filter(|&c| !is_punctuation_char(c)).collect()
}

/// Split on every punctuation character. Empty fragments are kept, so
/// `"Word,"` becomes `["Word", ""]`.
pub fn split_punctuation(s: &str) -> Vec<String> {
    s.split(is_punctuation_char).map(str::to_string).collect()
}

pub fn remove_numbers(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// One entry of a search space: a string, or a group whose members must
/// all be correct (the parts of a split compound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Text(String),
    Group(Vec<Candidate>),
}

impl Candidate {
    pub fn text(s: impl Into<String>) -> Self {
        Candidate::Text(s.into())
    }

    pub fn group<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Candidate::Group(parts.into_iter().map(Candidate::text).collect())
    }

    /// Apply a string-to-string normalization to every leaf, keeping the
    /// nesting intact.
    pub fn normalized(&self, f: fn(&str) -> String) -> Candidate {
        match self {
            Candidate::Text(s) => Candidate::Text(f(s)),
            Candidate::Group(items) => {
                Candidate::Group(items.iter().map(|item| item.normalized(f)).collect())
            }
        }
    }

    /// Replace every leaf with the group of its punctuation-split fragments.
    pub fn split(&self) -> Candidate {
        match self {
            Candidate::Text(s) => Candidate::group(split_punctuation(s)),
            Candidate::Group(items) => Candidate::Group(items.iter().map(Candidate::split).collect()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Candidate::Text(s) => Some(s),
            Candidate::Group(_) => None,
        }
    }
}
