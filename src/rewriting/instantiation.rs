use tracing::trace;

use super::matching::Substitution;
use crate::language::{Term, VariableClassifier};

/// Builds a fresh instance of `template` under `substitution`.
///
/// Bindings are applied one after the other, in their recorded order, each one
/// replacing every occurrence of its variable in the term built so far. A
/// variable bound twice is therefore only ever replaced by its first value,
/// unless that value itself mentions the variable.
pub fn instantiate(
    template: &Term,
    substitution: &Substitution,
    classifier: &impl VariableClassifier,
) -> Term {
    let mut instance = template.clone();
    for binding in substitution {
        instance.replace_variable(&binding.variable, &binding.value, classifier);
    }
    trace!(%template, %instance, "instantiated");
    instance
}
