//! Pattern matching of terms.
//!
//! Patterns are terms in which some leaves are variables, as decided by a
//! [`VariableClassifier`]. A variable matches any sub-term as a whole; every
//! other pattern node must agree with the target on symbol and arity, and its
//! arguments must match pairwise. Bindings are recorded in the order the
//! variables are met in a preorder walk of the pattern.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::language::{Symbol, Term, VariableClassifier};

/// A single variable binding of a [`Substitution`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub variable: Symbol,
    pub value: Term,
}

/// The ordered bindings produced by a successful match.
///
/// A variable occurring several times in a pattern is bound once per
/// occurrence, and the bound values are not required to agree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: Vec<Binding>,
}

impl Substitution {
    pub fn bind(&mut self, variable: Symbol, value: Term) {
        self.bindings.push(Binding { variable, value });
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Value of the first binding of `variable`.
    pub fn at(&self, variable: &Symbol) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|binding| binding.variable == *variable)
            .map(|binding| &binding.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }
}

impl FromIterator<Binding> for Substitution {
    fn from_iter<I: IntoIterator<Item = Binding>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<'s> IntoIterator for &'s Substitution {
    type Item = &'s Binding;
    type IntoIter = std::slice::Iter<'s, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Matches `target` against `pattern`, appending the bindings to `substitution`.
///
/// Neither term is modified. When the match fails, `substitution` may hold
/// bindings made before the mismatch was found.
pub fn matches(
    target: &Term,
    pattern: &Term,
    classifier: &impl VariableClassifier,
    substitution: &mut Substitution,
) -> bool {
    if classifier.is_variable(pattern) {
        trace!(variable = %pattern.symbol(), value = %target, "binding");
        substitution.bind(pattern.symbol().clone(), target.clone());
        return true;
    }

    pattern.symbol() == target.symbol()
        && pattern.arity() == target.arity()
        && target
            .cursor()
            .zip_eq(pattern.cursor())
            .all(|(argument, sub_pattern)| matches(argument, sub_pattern, classifier, substitution))
}

impl Term {
    /// `self` is treated as a pattern which may match `target`
    pub fn try_match(
        &self,
        target: &Term,
        classifier: &impl VariableClassifier,
    ) -> Option<Substitution> {
        let mut substitution = Substitution::default();
        matches(target, self, classifier, &mut substitution).then_some(substitution)
    }
}
