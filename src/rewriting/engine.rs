//! Exhaustive one-step rewriting, repeated over rounds.
//!
//! A round rewrites every term of the working set with every rule at every
//! position where the rule's pattern matches, collecting the rewritten terms
//! into a fresh [`ResultSet`]. That set is the working set of the next round.
//!
//! Positions are explored top-down: once a rule matches at some position, the
//! sub-terms below that position are not tried for the same rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::instantiation::instantiate;
use super::result_set::{ResultSet, TermOrder};
use super::rule::Rule;
use crate::language::{Capitalized, OwnedPath, Path, Term, VariableClassifier};

/// Configuration of a [`RewriteEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Number of rounds; 0 is treated as 1
    pub repeat: usize,
    /// Order used to sort and deduplicate each round's results
    pub order: TermOrder,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            repeat: 1,
            order: TermOrder::default(),
        }
    }
}

/// Applies rule sets to terms, see the [module documentation](self).
#[derive(Clone, Debug, Default)]
pub struct RewriteEngine<C: VariableClassifier = Capitalized> {
    config: RewriteConfig,
    classifier: C,
}

impl RewriteEngine<Capitalized> {
    pub fn new(config: RewriteConfig) -> Self {
        Self::with_classifier(config, Capitalized)
    }
}

impl<C: VariableClassifier> RewriteEngine<C> {
    pub fn with_classifier(config: RewriteConfig, classifier: C) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Rewrites `target` for the configured number of rounds and returns the
    /// last round's results.
    pub fn run(&self, rules: &[Rule], target: &Term) -> ResultSet {
        self.run_rounds(rules, target, self.config.repeat)
    }

    /// Like [`RewriteEngine::run`], with an explicit number of rounds.
    pub fn run_rounds(&self, rules: &[Rule], target: &Term, repeat: usize) -> ResultSet {
        let mut results = self.round(rules, [target]);
        debug!(round = 1, results = results.len(), "round finished");

        for round in 2..=repeat {
            results = self.round(rules, &results);
            debug!(round, results = results.len(), "round finished");
        }

        results
    }

    /// Like [`RewriteEngine::run`], keeping the results of every round.
    pub fn trace(&self, rules: &[Rule], target: &Term) -> Vec<ResultSet> {
        let mut rounds = vec![self.round(rules, [target])];

        for _ in 1..self.config.repeat {
            let previous = rounds.last().map(ResultSet::terms).unwrap_or_default();
            let next = self.round(rules, previous);
            rounds.push(next);
        }

        rounds
    }

    fn round<'t>(&self, rules: &[Rule], working: impl IntoIterator<Item = &'t Term>) -> ResultSet {
        let mut results = ResultSet::new(self.config.order);
        for term in working {
            self.step(rules, term, &mut results);
        }
        results
    }

    /// Applies every rule at every position of `term` once, adding the
    /// rewritten terms to `results`.
    pub fn step(&self, rules: &[Rule], term: &Term, results: &mut ResultSet) {
        for rule in rules {
            self.apply_rule(term, Path::new(&[]), rule, results);
        }
    }

    /// Rewrites `whole` with `rule` at the sub-term addressed by `candidate`,
    /// or, if the rule does not match there, at each position below it.
    ///
    /// Panics if `candidate` does not address a sub-term of `whole`.
    pub fn apply_rule(&self, whole: &Term, candidate: Path, rule: &Rule, results: &mut ResultSet) {
        let current = whole
            .subterm(candidate)
            .unwrap_or_else(|| panic!("no sub-term at {candidate} in {whole}"));
        self.apply_rule_below(whole, current, &mut candidate.to_owned_path(), rule, results);
    }

    fn apply_rule_below(
        &self,
        whole: &Term,
        current: &Term,
        candidate: &mut OwnedPath,
        rule: &Rule,
        results: &mut ResultSet,
    ) {
        if let Some(substitution) = rule.pattern().try_match(current, &self.classifier) {
            let instance = instantiate(rule.replacement(), &substitution, &self.classifier);
            let rewritten = whole.copy_replace_at(candidate.as_path(), instance);
            trace!(%rule, at = %candidate, %rewritten, "rule applied");
            results.insert(rewritten);
            return;
        }

        for (position, argument) in current.cursor().enumerate() {
            candidate.push(position);
            self.apply_rule_below(whole, argument, candidate, rule, results);
            candidate.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RewriteConfig, RewriteEngine};
    use crate::language::{Path, Prefixed, Term};
    use crate::macros::rules;
    use crate::rewriting::result_set::{ResultSet, TermOrder};
    use crate::rewriting::rule::Rule;

    fn t(s: &str) -> Term {
        s.parse().unwrap()
    }

    fn engine(repeat: usize) -> RewriteEngine {
        RewriteEngine::new(RewriteConfig {
            repeat,
            ..Default::default()
        })
    }

    fn printed(results: &ResultSet) -> Vec<String> {
        results.iter().map(Term::to_string).collect()
    }

    #[test]
    fn rewrite_at_root() {
        let rules = rules!("(f X)" => "(g X)");
        let results = engine(1).run(&rules, &t("(f a)"));

        assert_eq!(printed(&results), vec!["(g a)"]);
    }

    #[test]
    fn every_position_is_explored() {
        let rules = rules!("a" => "b");
        let results = engine(1).run(&rules, &t("(h a a)"));

        assert_eq!(printed(&results), vec!["(h a b)", "(h b a)"]);
    }

    #[test]
    fn nested_positions() {
        let rules = rules!("(s X)" => "X");
        let results = RewriteEngine::new(RewriteConfig {
            repeat: 1,
            order: TermOrder::Deep,
        })
        .run(&rules, &t("(+ (s (s 0)) (s 0))"));

        // The inner `(s 0)` of the first argument is shadowed by the outer match
        assert_eq!(printed(&results), vec!["(+ (s 0) (s 0))", "(+ (s (s 0)) 0)"]);
    }

    #[test]
    fn no_match_gives_no_results() {
        let rules = rules!("(k X)" => "X");
        assert!(engine(3).run(&rules, &t("(f a (g b))")).is_empty());
    }

    #[test]
    fn several_rules_are_unioned() {
        let rules = rules!(
            "(+ X 0)" => "X",
            "(+ X Y)" => "(+ Y X)",
        );
        let results = engine(1).run(&rules, &t("(+ a 0)"));

        assert_eq!(printed(&results), vec!["(+ 0 a)", "a"]);
    }

    #[test]
    fn inverse_rule_returns_to_target() {
        let rule = Rule::from_strings("(f X)", "(g X)").unwrap();
        let rules = vec![rule.inverse(), rule];
        let target = t("(f a)");

        let results = engine(2).run(&rules, &target);
        assert!(results.contains(&target));
        assert_eq!(printed(&results), vec!["(f a)"]);
    }

    #[test]
    fn rounds_compose() {
        let rules = rules!("(s X)" => "X");
        let engine = RewriteEngine::new(RewriteConfig {
            repeat: 3,
            order: TermOrder::Deep,
        });
        let rounds = engine.trace(&rules, &t("(s (s (s 0)))"));

        assert_eq!(rounds.len(), 3);
        assert_eq!(printed(&rounds[0]), vec!["(s (s 0))"]);
        assert_eq!(printed(&rounds[1]), vec!["(s 0)"]);
        assert_eq!(printed(&rounds[2]), vec!["0"]);
        assert_eq!(engine.run(&rules, &t("(s (s (s 0)))")), rounds[2]);
    }

    #[test]
    fn exhausted_rounds_stay_empty() {
        let rules = rules!("(s X)" => "X");
        assert!(engine(3).run(&rules, &t("(s 0)")).is_empty());
    }

    #[test]
    fn zero_repeat_runs_one_round() {
        let rules = rules!("a" => "b");
        assert_eq!(printed(&engine(0).run(&rules, &t("a"))), vec!["b"]);
    }

    #[test]
    fn apply_rule_below_candidate() {
        let rule = Rule::from_strings("a", "b").unwrap();
        let whole = t("(h a (g a))");
        let mut results = ResultSet::default();

        engine(1).apply_rule(&whole, Path::new(&[1]), &rule, &mut results);
        assert_eq!(printed(&results), vec!["(h a (g b))"]);
    }

    #[test]
    #[should_panic(expected = "no sub-term")]
    fn apply_rule_outside_the_term() {
        let rule = Rule::from_strings("a", "b").unwrap();
        let mut results = ResultSet::default();

        engine(1).apply_rule(&t("(h a)"), Path::new(&[0, 2]), &rule, &mut results);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let rules = rules!("(f X Y)" => "(f Y X)");
        let target = t("(f (f a b) c)");
        let (rules_copy, target_copy) = (rules.clone(), target.clone());

        let results = engine(2).run(&rules, &target);
        assert!(!results.is_empty());
        assert_eq!(rules, rules_copy);
        assert_eq!(target, target_copy);
    }

    #[test]
    fn custom_classifier() {
        let engine = RewriteEngine::with_classifier(RewriteConfig::default(), Prefixed('$'));
        let rules = rules!("(f $x)" => "(g $x X)");

        assert_eq!(printed(&engine.run(&rules, &t("(f a)"))), vec!["(g a X)"]);
    }
}
