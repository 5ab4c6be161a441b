use super::engine::RewriteEngine;
use super::form::{expect_head, keywords};
use super::result_set::ResultSet;
use super::rule::Rule;
use crate::error::{FormError, RequestError};
use crate::language::{Capitalized, Term, VariableClassifier};

/// A rule set together with the term to rewrite and an optional round count.
///
/// Its term form is `(rewrite [repeat] (-> pattern replacement)* target)`.
/// The leading `repeat` marker is recognised when the request has at least
/// two arguments and the first one is a leaf reading as an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteRequest {
    repeat: Option<usize>,
    rules: Vec<Rule>,
    target: Term,
}

impl RewriteRequest {
    pub fn new(repeat: Option<usize>, rules: Vec<Rule>, target: Term) -> Self {
        Self {
            repeat,
            rules,
            target,
        }
    }

    pub fn repeat(&self) -> Option<usize> {
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: usize) {
        self.repeat = Some(repeat);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn target(&self) -> &Term {
        &self.target
    }

    pub fn into_parts(self) -> (Option<usize>, Vec<Rule>, Term) {
        (self.repeat, self.rules, self.target)
    }

    /// Number of rounds to run, falling back to the engine's configuration.
    pub fn rounds<C: VariableClassifier>(&self, engine: &RewriteEngine<C>) -> usize {
        self.repeat.unwrap_or(engine.config().repeat)
    }

    pub fn evaluate<C: VariableClassifier>(&self, engine: &RewriteEngine<C>) -> ResultSet {
        engine.run_rounds(&self.rules, &self.target, self.rounds(engine))
    }
}

fn repeat_marker(
    term: &Term,
    classifier: &impl VariableClassifier,
) -> Option<Result<usize, FormError>> {
    if !term.is_leaf() || classifier.is_variable(term) {
        return None;
    }
    let value = term.symbol().parse_integer()?;
    Some(
        usize::try_from(value)
            .ok()
            .filter(|repeat| *repeat >= 1)
            .ok_or(FormError::InvalidRepeat(value)),
    )
}

impl RewriteRequest {
    /// Reads a `(rewrite ...)` term. A leading integer leaf is taken as the
    /// repeat marker unless `classifier` calls it a variable.
    pub fn from_term(term: Term, classifier: &impl VariableClassifier) -> Result<Self, FormError> {
        let mut arguments = expect_head(term, keywords::REWRITE)?;
        let target = arguments.pop().ok_or(FormError::MissingTarget)?;

        let mut repeat = None;
        let mut first_rule = 0;
        if let Some(marker) = arguments
            .first()
            .and_then(|first| repeat_marker(first, classifier))
        {
            repeat = Some(marker?);
            first_rule = 1;
        }

        let rules = arguments
            .into_iter()
            .enumerate()
            .skip(first_rule)
            .map(|(position, rule)| {
                Rule::try_from(rule).map_err(|source| FormError::NotARule {
                    position,
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(repeat, rules, target))
    }
}

impl TryFrom<Term> for RewriteRequest {
    type Error = FormError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        Self::from_term(term, &Capitalized)
    }
}

impl std::str::FromStr for RewriteRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let term: Term = s.parse()?;
        Ok(Self::try_from(term)?)
    }
}
