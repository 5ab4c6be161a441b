use super::term::Term;

/// Decides which terms of a pattern are placeholders.
pub trait VariableClassifier {
    fn is_variable(&self, term: &Term) -> bool;
}

/// Leaves whose symbol starts with an ASCII uppercase letter or `_`, e.g. `X`, `Rest`, `_1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Capitalized;

impl VariableClassifier for Capitalized {
    fn is_variable(&self, term: &Term) -> bool {
        let first = term.symbol().first_char();
        term.is_leaf() && (first.is_ascii_uppercase() || first == '_')
    }
}

/// Leaves whose symbol starts with a given prefix, e.g. `$x`.
#[derive(Clone, Copy, Debug)]
pub struct Prefixed(pub char);

impl VariableClassifier for Prefixed {
    fn is_variable(&self, term: &Term) -> bool {
        term.is_leaf() && term.symbol().first_char() == self.0 && term.symbol().len() > 1
    }
}

impl<F> VariableClassifier for F
where
    F: Fn(&Term) -> bool,
{
    fn is_variable(&self, term: &Term) -> bool {
        self(term)
    }
}
