//! Reading terms from their s-expression text.
//!
//! A leaf is written as its bare symbol, a compound term as `(head arg ...)`.
//! The printed form of a term (its `Display`) reads back to the same term.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::term::Term;
use crate::error::TermError;

#[derive(Parser)]
#[grammar = "language/term.pest"]
struct TermParser;

fn syntax_error(error: pest::error::Error<Rule>) -> TermError {
    TermError::Parse(error.to_string())
}

fn build_term(pair: Pair<'_, Rule>) -> Result<Term, TermError> {
    match pair.as_rule() {
        Rule::symbol => Term::new(pair.as_str()),
        Rule::compound => {
            let mut inner = pair.into_inner();
            let head = inner
                .next()
                .ok_or_else(|| TermError::Parse(String::from("compound term without a head")))?;
            let arguments = inner.map(build_term).collect::<Result<Vec<_>, _>>()?;
            Term::compound(head.as_str(), arguments)
        }
        rule => Err(TermError::Parse(format!("unexpected {rule:?}"))),
    }
}

/// Parses exactly one term.
pub fn parse_term(input: &str) -> Result<Term, TermError> {
    TermParser::parse(Rule::single_term, input)
        .map_err(syntax_error)?
        .find(|pair| pair.as_rule() != Rule::EOI)
        .ok_or_else(|| TermError::Parse(String::from("empty input")))
        .and_then(build_term)
}

/// Parses a whitespace separated sequence of terms.
pub fn parse_terms(input: &str) -> Result<Vec<Term>, TermError> {
    TermParser::parse(Rule::terms, input)
        .map_err(syntax_error)?
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(build_term)
        .collect()
}

impl std::str::FromStr for Term {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_term(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_term, parse_terms};
    use crate::language::Term;

    fn test_display(input: &str) {
        let term = parse_term(input).unwrap();
        assert_eq!(input, term.to_string());
    }

    #[test]
    fn display_leaf() {
        test_display("a")
    }

    #[test]
    fn display_compound() {
        test_display("(+ X Y (sin Y))");
    }

    #[test]
    fn display_nested() {
        test_display("(rewrite 2 (-> (f X) (g X)) (h (f a) (f (f b))))");
    }

    #[test]
    fn structure() {
        let term = parse_term("  (f a\n (g b c)\t) ").unwrap();

        assert_eq!(term.symbol(), "f");
        assert_eq!(term.arity(), 2);
        assert_eq!(term.arguments()[1].symbol(), "g");
        assert_eq!(term.arguments()[1].arity(), 2);
    }

    #[test]
    fn nullary_compound_is_a_leaf() {
        assert_eq!(parse_term("(f)").unwrap(), Term::new("f").unwrap());
    }

    #[test]
    fn errors() {
        for input in ["", "(", ")", "(f a", "f a", "()", "((f) a)", "a\u{a0}b"] {
            assert!(parse_term(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn sequences() {
        let terms = parse_terms("a (f b)\n(g)").unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[1].to_string(), "(f b)");
        assert!(parse_terms("").unwrap().is_empty());
    }
}
