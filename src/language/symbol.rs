use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::TermError;

/// The text label of a term.
///
/// A symbol is never empty and contains neither whitespace nor parentheses,
/// so any symbol can be printed and read back unambiguously.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: &str) -> Result<Self, TermError> {
        if Self::is_valid(name) {
            Ok(Self(String::from(name)))
        } else {
            Err(TermError::InvalidSymbol(String::from(name)))
        }
    }

    /// For names known to be valid, such as keywords.
    pub(crate) fn from_keyword(name: &'static str) -> Self {
        debug_assert!(Self::is_valid(name), "invalid keyword {name:?}");
        Self(String::from(name))
    }

    /// Checks whether `name` may be used as a symbol.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == '(' || c == ')')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first_char(&self) -> char {
        // Symbols are never empty
        self.0.chars().next().unwrap_or_default()
    }

    /// Reads the symbol as a decimal integer, e.g. a repeat marker.
    pub fn parse_integer(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<usize> for Symbol {
    fn from(number: usize) -> Self {
        Self(number.to_string())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::str::FromStr for Symbol {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Symbol::new(&name).map_err(de::Error::custom)
    }
}
