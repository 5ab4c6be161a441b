//! Typed view of the keyword-headed terms exchanged with the outside world.
//!
//! Rules, rewrite requests, result sets and substitutions all have a textual
//! term form whose head symbol names their role:
//!
//! ```text
//! (-> pattern replacement)
//! (rewrite [repeat] rule* target)
//! (results term*)
//! (affectation (valuation variable value)*)
//! ```
//!
//! [`Form::classify`] inspects the head once and converts the term into the
//! matching typed value, so nothing downstream dispatches on strings.

use super::matching::{Binding, Substitution};
use super::request::RewriteRequest;
use super::result_set::{ResultSet, TermOrder};
use super::rule::Rule;
use crate::error::FormError;
use crate::language::{Capitalized, Symbol, Term, VariableClassifier};

pub mod keywords {
    pub const REWRITE: &str = "rewrite";
    pub const RULE: &str = "->";
    pub const RESULTS: &str = "results";
    pub const AFFECTATION: &str = "affectation";
    pub const VALUATION: &str = "valuation";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Form {
    Request(RewriteRequest),
    Rule(Rule),
    Results(ResultSet),
    Affectation(Substitution),
    Term(Term),
}

impl Form {
    /// Classifies `term` with the default [`TermOrder`] for result sets and
    /// [`Capitalized`] variables.
    pub fn classify(term: Term) -> Result<Self, FormError> {
        Self::classify_with(term, TermOrder::default(), &Capitalized)
    }

    /// Classifies `term`, reading `(results ...)` under `order` and telling
    /// a request's repeat marker from a variable with `classifier`.
    ///
    /// The `(results ...)` form does not record its order, so a set printed
    /// under [`TermOrder::Deep`] reads back intact only with that order.
    pub fn classify_with(
        term: Term,
        order: TermOrder,
        classifier: &impl VariableClassifier,
    ) -> Result<Self, FormError> {
        let head = term.symbol();
        Ok(if head == keywords::REWRITE {
            Form::Request(RewriteRequest::from_term(term, classifier)?)
        } else if head == keywords::RULE {
            Form::Rule(Rule::try_from(term)?)
        } else if head == keywords::RESULTS {
            Form::Results(ResultSet::from_form(term, order)?)
        } else if head == keywords::AFFECTATION {
            Form::Affectation(Substitution::try_from(term)?)
        } else {
            Form::Term(term)
        })
    }

    pub fn into_term(self) -> Term {
        match self {
            Form::Request(request) => request.into(),
            Form::Rule(rule) => rule.into(),
            Form::Results(results) => results.into(),
            Form::Affectation(substitution) => substitution.into(),
            Form::Term(term) => term,
        }
    }
}

fn keyword_term(keyword: &'static str, arguments: Vec<Term>) -> Term {
    Term::from_parts(Symbol::from_keyword(keyword), arguments)
}

/// Splits `term` into its arguments, checking that its head is `keyword`.
pub(super) fn expect_head(term: Term, keyword: &'static str) -> Result<Vec<Term>, FormError> {
    let (symbol, arguments) = term.into_parts();
    if symbol == keyword {
        Ok(arguments)
    } else {
        Err(FormError::UnexpectedHead {
            expected: keyword,
            found: symbol.to_string(),
        })
    }
}

fn expect_pair(
    term: Term,
    keyword: &'static str,
    arity_error: fn(usize) -> FormError,
) -> Result<(Term, Term), FormError> {
    let arguments = expect_head(term, keyword)?;
    let found = arguments.len();
    let mut arguments = arguments.into_iter();

    match (arguments.next(), arguments.next(), arguments.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(arity_error(found)),
    }
}

impl TryFrom<Term> for Rule {
    type Error = FormError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        let (pattern, replacement) = expect_pair(term, keywords::RULE, |found| {
            FormError::RuleArity { found }
        })?;
        Ok(Rule::new(pattern, replacement))
    }
}

impl From<Rule> for Term {
    fn from(rule: Rule) -> Self {
        keyword_term(
            keywords::RULE,
            vec![rule.pattern().clone(), rule.replacement().clone()],
        )
    }
}

impl TryFrom<Term> for Substitution {
    type Error = FormError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        expect_head(term, keywords::AFFECTATION)?
            .into_iter()
            .map(|valuation| {
                let (variable, value) = expect_pair(valuation, keywords::VALUATION, |found| {
                    FormError::ValuationArity { found }
                })?;
                if !variable.is_leaf() {
                    return Err(FormError::NotAVariable(variable.to_string()));
                }
                Ok(Binding {
                    variable: variable.symbol().clone(),
                    value,
                })
            })
            .collect()
    }
}

impl From<Substitution> for Term {
    fn from(substitution: Substitution) -> Self {
        let valuations = substitution
            .iter()
            .map(|binding| {
                keyword_term(
                    keywords::VALUATION,
                    vec![Term::leaf(binding.variable.clone()), binding.value.clone()],
                )
            })
            .collect();
        keyword_term(keywords::AFFECTATION, valuations)
    }
}

impl ResultSet {
    /// Reads a `(results ...)` term, sorting its arguments under `order`.
    pub fn from_form(term: Term, order: TermOrder) -> Result<Self, FormError> {
        let mut results = ResultSet::new(order);
        results.extend(expect_head(term, keywords::RESULTS)?);
        Ok(results)
    }
}

impl From<ResultSet> for Term {
    fn from(results: ResultSet) -> Self {
        keyword_term(keywords::RESULTS, results.into_iter().collect())
    }
}

impl From<RewriteRequest> for Term {
    fn from(request: RewriteRequest) -> Self {
        let (repeat, rules, target) = request.into_parts();
        let mut arguments = Vec::with_capacity(rules.len() + 2);
        if let Some(repeat) = repeat {
            arguments.push(Term::leaf(Symbol::from(repeat)));
        }
        arguments.extend(rules.into_iter().map(Term::from));
        arguments.push(target);
        keyword_term(keywords::REWRITE, arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::Form;
    use crate::error::FormError;
    use crate::language::{Capitalized, Term};
    use crate::rewriting::matching::Substitution;
    use crate::rewriting::result_set::{ResultSet, TermOrder};
    use crate::rewriting::rule::Rule;

    fn t(s: &str) -> Term {
        s.parse().unwrap()
    }

    fn classify(s: &str) -> Result<Form, FormError> {
        Form::classify(t(s))
    }

    #[test]
    fn rule_form() {
        let Ok(Form::Rule(rule)) = classify("(-> (f X) (g X))") else {
            panic!("expected a rule");
        };
        assert_eq!(rule, Rule::from_strings("(f X)", "(g X)").unwrap());

        assert_eq!(
            classify("(-> a)"),
            Err(FormError::RuleArity { found: 1 })
        );
        assert_eq!(
            classify("(-> a b c)"),
            Err(FormError::RuleArity { found: 3 })
        );
    }

    #[test]
    fn affectation_form() {
        let Ok(Form::Affectation(substitution)) =
            classify("(affectation (valuation X a) (valuation Y (f b)))")
        else {
            panic!("expected an affectation");
        };
        let expected = t("(f X Y)").try_match(&t("(f a (f b))"), &Capitalized);
        assert_eq!(Some(substitution), expected);

        assert!(matches!(
            classify("(affectation (binding X a))"),
            Err(FormError::UnexpectedHead { expected: "valuation", .. })
        ));
        assert!(matches!(
            classify("(affectation (valuation (f X) a))"),
            Err(FormError::NotAVariable(_))
        ));
    }

    #[test]
    fn results_form_is_sorted() {
        let Ok(Form::Results(results)) = classify("(results (f b) a (f b) (f a))") else {
            panic!("expected results");
        };
        let printed: Vec<_> = results.iter().map(Term::to_string).collect();
        assert_eq!(printed, vec!["a", "(f a)", "(f b)"]);
    }

    #[test]
    fn deep_results_read_back_under_their_order() {
        let mut deep = ResultSet::new(TermOrder::Deep);
        deep.extend(["(h (f a))", "(h (f b))"].map(t));
        let printed = Term::from(deep.clone());

        let Ok(Form::Results(read)) =
            Form::classify_with(printed.clone(), TermOrder::Deep, &Capitalized)
        else {
            panic!("expected results");
        };
        assert_eq!(read, deep);

        let Ok(Form::Results(shallow)) = Form::classify(printed) else {
            panic!("expected results");
        };
        assert_eq!(shallow.len(), 1);
    }

    #[test]
    fn plain_terms() {
        assert_eq!(classify("(f a)"), Ok(Form::Term(t("(f a)"))));
        assert_eq!(classify("->"), Err(FormError::RuleArity { found: 0 }));
    }

    #[test]
    fn forms_print_back() {
        for input in [
            "(-> (f X) (g X))",
            "(results a (f a))",
            "(affectation (valuation X a))",
            "(rewrite 2 (-> a b) (-> b a) (h a))",
            "(rewrite (h a))",
            "(f a)",
        ] {
            let form = classify(input).unwrap();
            assert_eq!(form.into_term(), t(input));
        }
    }

    #[test]
    fn empty_affectation() {
        let Ok(Form::Affectation(substitution)) = classify("affectation") else {
            panic!("expected an affectation");
        };
        assert_eq!(substitution, Substitution::default());
    }
}
