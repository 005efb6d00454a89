use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Caret exponent: "^" followed by its digits
    static ref CARET_POWER: Regex = Regex::new(r"\^([0-9]+)").unwrap();
}

/// Operator that introduces a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// First token of an expression, no operator in front of it
    Implicit,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Operator::Implicit => None,
            Operator::Multiply => Some('*'),
            Operator::Divide => Some('/'),
        }
    }

    /// Combine a running product with a token factor
    pub fn apply(&self, acc: f64, factor: f64) -> f64 {
        match self {
            Operator::Implicit | Operator::Multiply => acc * factor,
            Operator::Divide => acc / factor,
        }
    }
}

/// One operator-tagged piece of a unit expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub operator: Operator,
    /// Unit text with the operator stripped, e.g. "s2" for "/s2"
    pub unit: &'a str,
    /// The token as it appeared in the expression, e.g. "/s2"
    pub raw: &'a str,
}

impl<'a> Token<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let mut chars = raw.chars();
        match chars.next().and_then(Operator::from_char) {
            Some(operator) => Token {
                operator,
                unit: chars.as_str(),
                raw,
            },
            None => Token {
                operator: Operator::Implicit,
                unit: raw,
                raw,
            },
        }
    }
}

/// Rewrite "^N" exponents as "N" ("km^2" -> "km2")
pub fn normalize_powers(unit: &str) -> Cow<'_, str> {
    CARET_POWER.replace_all(unit, "$1")
}

/// Split an expression at `*` and `/`, keeping each operator at the
/// start of the piece it introduces. Concatenating the pieces gives
/// back the input.
pub fn split_by_operators(unit: &str) -> Vec<&str> {
    if !unit.contains(['*', '/']) {
        return vec![unit];
    }

    let mut parts = Vec::new();
    let mut start = 0;

    for (idx, c) in unit.char_indices() {
        if Operator::from_char(c).is_some() {
            if idx > start {
                parts.push(&unit[start..idx]);
            }
            start = idx;
        }
    }

    if start < unit.len() {
        parts.push(&unit[start..]);
    }

    parts
}

/// Tokenize a cleaned expression (no whitespace, no carets)
pub fn tokenize(unit: &str) -> Vec<Token<'_>> {
    split_by_operators(unit)
        .into_iter()
        .map(Token::parse)
        .collect()
}
