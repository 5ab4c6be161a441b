//! Symbolic term rewriting.
//!
//! Terms are labelled trees written as s-expressions, e.g. `(+ (s 0) X)`.
//! A [`rewriting::Rule`] rewrites every sub-term matching its pattern into an
//! instance of its replacement; the [`rewriting::RewriteEngine`] collects all
//! terms reachable in a given number of rounds.
//!
//! ```
//! use rewrite_terms::language::Term;
//! use rewrite_terms::rewriting::{RewriteConfig, RewriteEngine, Rule};
//!
//! let rules = vec![Rule::from_strings("a", "b").unwrap()];
//! let target: Term = "(h a a)".parse().unwrap();
//! let results = RewriteEngine::new(RewriteConfig::default()).run(&rules, &target);
//!
//! let printed: Vec<_> = results.iter().map(Term::to_string).collect();
//! assert_eq!(printed, ["(h a b)", "(h b a)"]);
//! ```

#[cfg(test)]
mod macros;

pub mod error;
pub mod language;
pub mod output;
pub mod rewriting;
pub mod seen;
pub mod utils;
