use std::fmt;

use regex::Regex;

/// Field delimiters: any run of `,`, `:`, `;` or whitespace.
pub const DELIMITERS: &str = r"[,:;\s]+";

/// Accepted numeric literal for pre-counted values.
pub const NUMBER: &str = r"^(((\d+)?\.)?\d+)$";

/// Record shape of a line, decided by its field count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One item per line, tallied once per occurrence.
    SingleColumn,
    /// `key<delim>value` pairs, already counted.
    TwoColumn,
    /// `x<delim>name<delim>count` tuples.
    ThreeColumn,
    /// Anything else, including blank lines.
    Malformed,
}

impl Shape {
    #[must_use]
    pub const fn from_field_count(count: usize) -> Self {
        match count {
            1 => Self::SingleColumn,
            2 => Self::TwoColumn,
            3 => Self::ThreeColumn,
            _ => Self::Malformed,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleColumn => write!(f, "single-column"),
            Self::TwoColumn => write!(f, "two-column"),
            Self::ThreeColumn => write!(f, "three-column"),
            Self::Malformed => write!(f, "malformed"),
        }
    }
}

/// Splits input lines into fields and validates numeric values.
pub struct Tokenizer {
    delimiters: Regex,
    number: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: Regex::new(DELIMITERS).expect("Invalid regex"),
            number: Regex::new(NUMBER).expect("Invalid regex"),
        }
    }

    /// Split a line into its non-empty fields.
    #[must_use]
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        self.delimiters
            .split(line)
            .filter(|field| !field.is_empty())
            .collect()
    }

    #[must_use]
    pub fn classify(&self, line: &str) -> Shape {
        Shape::from_field_count(self.split(line).len())
    }

    /// Parse a pre-counted value. Only unsigned decimal literals that fit a
    /// finite `f64` are accepted.
    #[must_use]
    pub fn parse_number(&self, field: &str) -> Option<f64> {
        if !self.number.is_match(field) {
            return None;
        }
        field.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
