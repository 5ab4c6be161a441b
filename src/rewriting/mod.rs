//! Term rewriting modules.
//!
//! Matching patterns against terms, instantiating replacements, and the engine
//! applying rule sets at every position of a term over several rounds.

pub mod engine;
pub mod form;
pub mod instantiation;
pub mod matching;
pub mod request;
pub mod result_set;
pub mod rule;

pub use engine::{RewriteConfig, RewriteEngine};
pub use form::Form;
pub use instantiation::instantiate;
pub use matching::{Binding, Substitution, matches};
pub use request::RewriteRequest;
pub use result_set::{ResultSet, TermOrder};
pub use rule::Rule;
