//! Scan configuration: the candidate-generation mode and whether to collect
//! vocabulary statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Candidate-generation strategy, fixed for a whole scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Strip outer punctuation, try both cases and hyphen/slash parts.
    #[default]
    Simple,
    /// Layer punctuation removal, punctuation splitting and digit removal
    /// onto both case variants.
    Complex,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "simple" => Ok(Mode::Simple),
            "complex" => Ok(Mode::Complex),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => f.write_str("simple"),
            Mode::Complex => f.write_str("complex"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub mode: Mode,
    /// Scan every word of every book and keep known/unknown sets.
    #[serde(default, alias = "spellcheckdata")]
    pub statistics_enabled: bool,
}

impl ScanConfig {
    pub fn new(mode: Mode, statistics_enabled: bool) -> Self {
        Self {
            mode,
            statistics_enabled,
        }
    }

    /// Parse from JSON such as `{"mode": "complex", "statistics_enabled": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
