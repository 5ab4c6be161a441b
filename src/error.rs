//! Error types for building, reading and classifying terms.

use thiserror::Error;

/// Errors raised while constructing or reading terms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("invalid symbol {0:?}: symbols must be non-empty and free of whitespace and parentheses")]
    InvalidSymbol(String),

    #[error("syntax error:\n{0}")]
    Parse(String),
}

/// Errors raised when a term does not have the shape its head keyword demands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("rule must have exactly two arguments, found {found}")]
    RuleArity { found: usize },

    #[error("valuation must have exactly two arguments, found {found}")]
    ValuationArity { found: usize },

    #[error("valuation must bind a variable, found `{0}`")]
    NotAVariable(String),

    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedHead {
        expected: &'static str,
        found: String,
    },

    #[error("rewrite request has no term to rewrite")]
    MissingTarget,

    #[error("repeat factor must be at least 1, found {0}")]
    InvalidRepeat(i64),

    #[error("argument {position} of a rewrite request is not a rule: {source}")]
    NotARule {
        position: usize,
        #[source]
        source: Box<FormError>,
    },
}

/// Errors raised while reading a rewrite request from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error(transparent)]
    Term(#[from] TermError),

    #[error(transparent)]
    Form(#[from] FormError),
}
