//! The term tree.
//!
//! A [`Term`] is a labelled node owning an ordered list of argument terms.
//! Ownership follows Rust ownership: attaching an argument moves it into its
//! parent, `clone` is a deep copy sharing no nodes, and dropping a term drops
//! its whole subtree. Positions inside a term are addressed by [`Path`]s, which
//! also stand in for parent back-references.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::path::{OwnedPath, Path};
use super::symbol::Symbol;
use super::traversal::{ArgumentCursor, PathIterator};
use super::variable::VariableClassifier;
use crate::error::TermError;

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Term {
    symbol: Symbol,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    arguments: Vec<Term>,
}

impl Term {
    /// Creates a leaf, failing if `symbol` is not a valid symbol.
    pub fn new(symbol: &str) -> Result<Self, TermError> {
        Symbol::new(symbol).map(Self::leaf)
    }

    pub fn leaf(symbol: Symbol) -> Self {
        Self {
            symbol,
            arguments: Vec::new(),
        }
    }

    pub fn compound(symbol: &str, arguments: Vec<Term>) -> Result<Self, TermError> {
        Ok(Self {
            symbol: Symbol::new(symbol)?,
            arguments,
        })
    }

    pub fn from_parts(symbol: Symbol, arguments: Vec<Term>) -> Self {
        Self { symbol, arguments }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn arguments(&self) -> &[Term] {
        &self.arguments
    }

    pub fn argument(&self, position: usize) -> Option<&Term> {
        self.arguments.get(position)
    }

    pub fn into_parts(self) -> (Symbol, Vec<Term>) {
        (self.symbol, self.arguments)
    }

    pub fn add_argument_first(&mut self, argument: Term) {
        self.arguments.insert(0, argument);
    }

    pub fn add_argument_last(&mut self, argument: Term) {
        self.arguments.push(argument);
    }

    /// Inserts `argument` so that it ends up at `position`.
    ///
    /// Panics if `position > arity`.
    pub fn add_argument_at(&mut self, position: usize, argument: Term) {
        assert!(
            position <= self.arity(),
            "argument position {position} out of range for arity {}",
            self.arity()
        );
        self.arguments.insert(position, argument);
    }

    /// Detaches the argument at `position` and hands its ownership to the caller.
    ///
    /// Panics if `position >= arity`.
    pub fn extract_argument(&mut self, position: usize) -> Term {
        assert!(
            position < self.arity(),
            "argument position {position} out of range for arity {}",
            self.arity()
        );
        self.arguments.remove(position)
    }

    /// Returns the sub-term at `path`, or `None` if the path leaves the tree.
    pub fn subterm(&self, path: Path) -> Option<&Term> {
        match path.head() {
            Some(head) => self.arguments.get(head)?.subterm(path.child()),
            None => Some(self),
        }
    }

    /// Returns the term holding the sub-term at `path` as an argument.
    ///
    /// The root has no father, and neither has a path that leaves the tree.
    pub fn father(&self, path: Path) -> Option<&Term> {
        self.subterm(path)?;
        self.subterm(path.parent()?)
    }

    /// Total order used to sort and deduplicate results.
    ///
    /// Compares symbols, then arities, then the symbols of same-indexed direct
    /// arguments. Arguments are not compared recursively, so two terms that only
    /// differ below their direct arguments compare equal.
    pub fn compare(&self, other: &Term) -> Ordering {
        self.symbol
            .cmp(&other.symbol)
            .then_with(|| self.arity().cmp(&other.arity()))
            .then_with(|| {
                self.arguments
                    .iter()
                    .zip(&other.arguments)
                    .map(|(a, b)| a.symbol.cmp(&b.symbol))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }

    /// Like [`Term::compare`], but descending into every argument.
    pub fn compare_deep(&self, other: &Term) -> Ordering {
        self.symbol
            .cmp(&other.symbol)
            .then_with(|| self.arity().cmp(&other.arity()))
            .then_with(|| {
                self.arguments
                    .iter()
                    .zip(&other.arguments)
                    .map(|(a, b)| a.compare_deep(b))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }

    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.symbol == *symbol || self.arguments.iter().any(|a| a.contains_symbol(symbol))
    }

    /// Replaces, in place, every variable named `symbol` by a copy of `value`.
    ///
    /// Copies of `value` are not searched again, so a value mentioning its own
    /// variable does not loop.
    pub fn replace_variable(
        &mut self,
        symbol: &Symbol,
        value: &Term,
        classifier: &impl VariableClassifier,
    ) {
        if self.symbol == *symbol && classifier.is_variable(self) {
            *self = value.clone();
        } else {
            for argument in &mut self.arguments {
                argument.replace_variable(symbol, value, classifier);
            }
        }
    }

    /// Builds a fresh copy of `self` with the sub-term at `path` replaced.
    ///
    /// Panics if `path` does not lead to a sub-term of `self`.
    pub fn copy_replace_at(&self, path: Path, replacement: Term) -> Term {
        let Some(head) = path.head() else {
            return replacement;
        };
        assert!(
            head < self.arity(),
            "argument position {head} out of range for arity {}",
            self.arity()
        );

        let mut arguments = Vec::with_capacity(self.arity());
        arguments.extend(self.arguments[..head].iter().cloned());
        arguments.push(self.arguments[head].copy_replace_at(path.child(), replacement));
        arguments.extend(self.arguments[head + 1..].iter().cloned());

        Term {
            symbol: self.symbol.clone(),
            arguments,
        }
    }

    pub fn cursor(&self) -> ArgumentCursor<'_> {
        ArgumentCursor::new(self)
    }

    /// Iterates over the paths of all sub-terms in preorder, the root first.
    pub fn iter_paths(&self) -> PathIterator<'_> {
        PathIterator::new(self)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.arguments.iter().map(Term::size).sum::<usize>()
    }

    pub fn positions(&self) -> Vec<OwnedPath> {
        self.iter_paths().collect()
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.symbol);
        }

        write!(f, "({}", self.symbol)?;
        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }
        write!(f, ")")
    }
}
