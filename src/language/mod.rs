//! Terms and the vocabulary around them: symbols, positions, traversal,
//! variables and the textual syntax.

pub mod parsing;
pub mod path;
pub mod symbol;
pub mod term;
pub mod traversal;
pub mod variable;

pub use parsing::{parse_term, parse_terms};
pub use path::{OwnedPath, Path};
pub use symbol::Symbol;
pub use term::Term;
pub use traversal::{ArgumentCursor, PathIterator};
pub use variable::{Capitalized, Prefixed, VariableClassifier};
