//! Physical-quantity parsing used by the unit-bearing number rule.
//!
//! `UnitTable` understands a magnitude followed by a unit expression
//! (`5kg`, `10 ft`, `60 km/h`, `3 m^2`) and sums of such terms
//! (`5ft+3in`). A bare magnitude such as `1.5` is a dimensionless quantity.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("undefined unit: {0}")]
    UndefinedUnit(String),

    #[error("malformed quantity expression: {0}")]
    Malformed(String),

    #[error("cannot combine {left} with {right}")]
    DimensionMismatch { left: String, right: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: String,
    /// Canonical dimension signature, e.g. `length/time`.
    pub dimension: String,
}

/// Parses quantity expressions. Callers treat every error as "not a quantity".
pub trait UnitParser: Send + Sync {
    fn parse(&self, expr: &str) -> Result<Quantity, UnitError>;
}

lazy_static! {
    static ref TERM_PATTERN: Regex =
        Regex::new(r"^(\d+(?:\.\d+)?)\s*([^\d\s.].*)?$").unwrap();
    static ref FACTOR_PATTERN: Regex = Regex::new(r"^([^\^]+)(?:\^(-?\d+))?$").unwrap();

    static ref BUILTIN_UNITS: Vec<(&'static str, &'static str)> = {
        let mut units = Vec::new();
        let table: [(&str, &[&str]); 9] = [
            ("length", &[
                "m", "cm", "mm", "km", "in", "ft", "yd", "mi",
                "meter", "meters", "metre", "metres", "centimeter", "centimeters",
                "millimeter", "millimeters", "kilometer", "kilometers",
                "inch", "inches", "foot", "feet", "yard", "yards", "mile", "miles",
            ]),
            ("mass", &[
                "g", "kg", "mg", "lb", "lbs", "oz", "t",
                "gram", "grams", "kilogram", "kilograms", "pound", "pounds",
                "ounce", "ounces", "ton", "tons",
            ]),
            ("time", &[
                "s", "sec", "secs", "min", "mins", "h", "hr", "hrs", "ms",
                "second", "seconds", "minute", "minutes", "hour", "hours",
                "day", "days", "week", "weeks", "month", "months", "year", "years",
            ]),
            ("temperature", &["K", "°C", "°F", "ºC", "ºF", "degC", "degF", "kelvin", "celsius", "fahrenheit"]),
            ("volume", &[
                "l", "L", "ml", "mL", "gal", "qt", "pt", "tsp", "tbsp",
                "liter", "liters", "litre", "litres", "gallon", "gallons",
                "cup", "cups", "quart", "quarts", "pint", "pints",
            ]),
            ("speed", &["mph", "kph", "knot", "knots"]),
            ("angle", &["°", "º", "deg", "degree", "degrees", "rad", "radian", "radians"]),
            ("ratio", &["%", "percent"]),
            ("area", &["acre", "acres", "ha", "hectare", "hectares"]),
        ];
        for (dimension, symbols) in table {
            for symbol in symbols {
                units.push((*symbol, dimension));
            }
        }
        units
    };
}

/// Table-driven unit parser over a fixed set of common units.
#[derive(Debug, Clone)]
pub struct UnitTable {
    units: HashMap<String, &'static str>,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self {
            units: BUILTIN_UNITS
                .iter()
                .map(|(symbol, dimension)| (symbol.to_string(), *dimension))
                .collect(),
        }
    }
}

impl UnitTable {
    fn dimension_of(&self, unit: &str) -> Option<&'static str> {
        self.units
            .get(unit)
            .or_else(|| self.units.get(&unit.to_lowercase()))
            .copied()
    }

    /// Dimension signature of a unit expression like `km/h` or `m^2`.
    fn unit_dimension(&self, unit: &str) -> Result<String, UnitError> {
        let mut numerator: Vec<String> = Vec::new();
        let mut denominator: Vec<String> = Vec::new();
        let mut dividing = false;
        let mut rest = unit;

        loop {
            let split = rest.find(['/', '*']);
            let factor = match split {
                Some(i) => &rest[..i],
                None => rest,
            };
            let caps = FACTOR_PATTERN
                .captures(factor.trim())
                .ok_or_else(|| UnitError::Malformed(unit.to_string()))?;
            let name = &caps[1];
            let dimension = self
                .dimension_of(name)
                .ok_or_else(|| UnitError::UndefinedUnit(name.to_string()))?;
            let power: i32 = match caps.get(2) {
                Some(p) => p
                    .as_str()
                    .parse()
                    .map_err(|_| UnitError::Malformed(unit.to_string()))?,
                None => 1,
            };
            let factor_dim = if power == 1 {
                dimension.to_string()
            } else {
                format!("{}^{}", dimension, power)
            };
            if dividing {
                denominator.push(factor_dim);
            } else {
                numerator.push(factor_dim);
            }

            match split {
                Some(i) => {
                    dividing = rest.as_bytes()[i] == b'/';
                    rest = &rest[i + 1..];
                }
                None => break,
            }
        }

        numerator.sort();
        denominator.sort();
        let mut signature = numerator.join("*");
        if !denominator.is_empty() {
            signature.push('/');
            signature.push_str(&denominator.join("*"));
        }
        Ok(signature)
    }

    fn parse_term(&self, term: &str) -> Result<Quantity, UnitError> {
        let caps = TERM_PATTERN
            .captures(term.trim())
            .ok_or_else(|| UnitError::Malformed(term.to_string()))?;
        let magnitude: f64 = caps[1]
            .parse()
            .map_err(|_| UnitError::Malformed(term.to_string()))?;

        match caps.get(2) {
            Some(unit) => {
                let unit = unit.as_str().trim();
                Ok(Quantity {
                    magnitude,
                    unit: unit.to_string(),
                    dimension: self.unit_dimension(unit)?,
                })
            }
            None => Ok(Quantity {
                magnitude,
                unit: String::new(),
                dimension: "dimensionless".to_string(),
            }),
        }
    }
}

impl UnitParser for UnitTable {
    fn parse(&self, expr: &str) -> Result<Quantity, UnitError> {
        let mut terms = expr.split('+');
        let first = terms
            .next()
            .ok_or_else(|| UnitError::Malformed(expr.to_string()))?;
        let mut total = self.parse_term(first)?;

        for term in terms {
            let next = self.parse_term(term)?;
            if next.dimension != total.dimension {
                return Err(UnitError::DimensionMismatch {
                    left: total.dimension,
                    right: next.dimension,
                });
            }
            // Magnitudes in different units of one dimension are not
            // converted; the sum only has to be well-formed.
            total.magnitude += next.magnitude;
        }

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_with_unit() {
        let units = UnitTable::default();
        let q = units.parse("5kg").unwrap();
        assert_eq!(q.magnitude, 5.0);
        assert_eq!(q.unit, "kg");
        assert_eq!(q.dimension, "mass");

        let q = units.parse("10 ft").unwrap();
        assert_eq!(q.dimension, "length");
    }

    #[test]
    fn test_compound_units() {
        let units = UnitTable::default();
        assert_eq!(units.parse("60km/h").unwrap().dimension, "length/time");
        assert_eq!(units.parse("3 m^2").unwrap().dimension, "length^2");
        assert_eq!(units.parse("98.6°F").unwrap().dimension, "temperature");
    }

    #[test]
    fn test_bare_magnitude_is_dimensionless() {
        let units = UnitTable::default();
        let q = units.parse("1.5").unwrap();
        assert_eq!(q.magnitude, 1.5);
        assert_eq!(q.dimension, "dimensionless");
    }

    #[test]
    fn test_errors() {
        let units = UnitTable::default();
        assert_eq!(
            units.parse("5 wibbles"),
            Err(UnitError::UndefinedUnit("wibbles".to_string()))
        );
        assert!(matches!(units.parse("kg"), Err(UnitError::Malformed(_))));
        assert!(matches!(units.parse(""), Err(UnitError::Malformed(_))));
        assert!(matches!(
            units.parse("5kg+3m"),
            Err(UnitError::DimensionMismatch { .. })
        ));
        assert!(units.parse("5ft+3in").is_ok());
    }
}
