//! Recognizes tokens that denote a number in any of the written forms found
//! in children's book text: plain and comma-grouped integers, ordinals,
//! arithmetic, scientific notation, exponents, ranges, fractions and
//! quantities with units.

use lazy_static::lazy_static;
use regex::Regex;

use crate::units::UnitParser;

type Rule = fn(&str, &dyn UnitParser) -> bool;

lazy_static! {
    // Decimal digits of any script plus superscript and subscript digits.
    static ref DIGITS: Regex =
        Regex::new(r"^[\d\x{B9}\x{B2}\x{B3}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}]+$").unwrap();
    static ref ORDINAL: Regex = Regex::new(r"^[1-9]\d*(th|rd|nd|st)$").unwrap();
    static ref ARITHMETIC: Regex = Regex::new(r"^[1-9]\d*([-+xX*][1-9]\d*)*(=\d+)?$").unwrap();
    static ref SCIENTIFIC: Regex = Regex::new(r"^([1-9]\d*(\.\d*)?[xX*])?-?10\^[-+]?\d+$").unwrap();
    static ref EXPONENT: Regex = Regex::new(r"^[1-9]\d*\^[-+]?\d+$").unwrap();
}

/// Independent rules; a token is a number if any of them holds.
const RULES: [(&str, Rule); 9] = [
    ("digits", is_digits),
    ("comma_grouped", is_comma_grouped),
    ("ordinal", is_ordinal),
    ("arithmetic", is_arithmetic),
    ("scientific", is_scientific),
    ("exponent", is_exponent),
    ("hyphen_joined", is_hyphen_joined),
    ("slash_joined", is_slash_joined),
    ("with_units", has_units),
];

pub fn is_number(token: &str, units: &dyn UnitParser) -> bool {
    RULES.iter().any(|(_, rule)| rule(token, units))
}

/// Name of the first rule that recognizes `token`, for diagnostics.
pub fn matching_rule(token: &str, units: &dyn UnitParser) -> Option<&'static str> {
    RULES
        .iter()
        .find(|(_, rule)| rule(token, units))
        .map(|(name, _)| *name)
}

fn is_digits(s: &str, _: &dyn UnitParser) -> bool {
    DIGITS.is_match(s)
}

fn is_comma_grouped(s: &str, units: &dyn UnitParser) -> bool {
    s.contains(',') && is_number(&s.replace(',', ""), units)
}

fn is_ordinal(s: &str, _: &dyn UnitParser) -> bool {
    ORDINAL.is_match(s)
}

fn is_arithmetic(s: &str, _: &dyn UnitParser) -> bool {
    ARITHMETIC.is_match(s)
}

fn is_scientific(s: &str, _: &dyn UnitParser) -> bool {
    SCIENTIFIC.is_match(s)
}

fn is_exponent(s: &str, _: &dyn UnitParser) -> bool {
    EXPONENT.is_match(s)
}

fn is_hyphen_joined(s: &str, units: &dyn UnitParser) -> bool {
    is_joined(s, '-', units)
}

fn is_slash_joined(s: &str, units: &dyn UnitParser) -> bool {
    is_joined(s, '/', units)
}

/// Parse failures of any kind mean "not a number".
fn has_units(s: &str, units: &dyn UnitParser) -> bool {
    units.parse(s).is_ok()
}

/// `12-34`, `3/4`: every non-empty part is itself a number.
fn is_joined(s: &str, sep: char, units: &dyn UnitParser) -> bool {
    if !s.contains(sep) {
        return false;
    }
    let mut parts = s.split(sep).filter(|part| !part.is_empty()).peekable();
    parts.peek().is_some() && parts.all(|part| is_number(part, units))
}
