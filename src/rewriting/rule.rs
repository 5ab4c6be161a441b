use serde::{Deserialize, Serialize};

use crate::error::TermError;
use crate::language::Term;

/// A rewrite rule `pattern -> replacement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pattern: Term,
    replacement: Term,
}

impl Rule {
    pub fn new(pattern: Term, replacement: Term) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    pub fn from_strings(pattern: &str, replacement: &str) -> Result<Self, TermError> {
        Ok(Self::new(pattern.parse()?, replacement.parse()?))
    }

    pub fn pattern(&self) -> &Term {
        &self.pattern
    }

    pub fn replacement(&self) -> &Term {
        &self.replacement
    }

    /// The rule rewriting in the opposite direction.
    pub fn inverse(&self) -> Self {
        Self::new(self.replacement.clone(), self.pattern.clone())
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;

    #[test]
    fn from_strings() {
        let rule = Rule::from_strings("(* X 1)", "X").unwrap();

        assert_eq!(rule.pattern().to_string(), "(* X 1)");
        assert_eq!(rule.replacement().to_string(), "X");
        assert_eq!(rule.to_string(), "(* X 1) -> X");
        assert!(Rule::from_strings("(* X", "X").is_err());
    }

    #[test]
    fn inverse() {
        let rule = Rule::from_strings("(+ X 0)", "X").unwrap();
        assert_eq!(rule.inverse(), Rule::from_strings("X", "(+ X 0)").unwrap());
        assert_eq!(rule.inverse().inverse(), rule);
    }

    #[test]
    fn test_rule_serialization() {
        let rule = Rule::from_strings("(* X 2)", "(<< X 1)").unwrap();
        let serialized = serde_json::to_string(&rule).unwrap();
        let deserialized: Rule = serde_json::from_str(&serialized).unwrap();
        assert_eq!(rule, deserialized);
    }
}
