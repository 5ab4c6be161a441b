use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::language::Term;
use crate::seen::Seen;

/// Order under which a [`ResultSet`] sorts and deduplicates its terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TermOrder {
    /// [`Term::compare`]: symbol, arity and the symbols of the direct arguments
    #[default]
    Shallow,
    /// [`Term::compare_deep`]: the whole tree
    Deep,
}

impl TermOrder {
    pub fn compare(self, a: &Term, b: &Term) -> Ordering {
        match self {
            TermOrder::Shallow => a.compare(b),
            TermOrder::Deep => a.compare_deep(b),
        }
    }
}

/// Terms kept sorted under a [`TermOrder`], without duplicates.
///
/// Deserialized sets are rebuilt term by term, so unsorted or repeated input
/// still yields a sorted set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UncheckedResultSet")]
pub struct ResultSet {
    order: TermOrder,
    terms: Vec<Term>,
}

#[derive(Deserialize)]
struct UncheckedResultSet {
    #[serde(default)]
    order: TermOrder,
    terms: Vec<Term>,
}

impl From<UncheckedResultSet> for ResultSet {
    fn from(unchecked: UncheckedResultSet) -> Self {
        let mut results = ResultSet::new(unchecked.order);
        results.extend(unchecked.terms);
        results
    }
}

impl ResultSet {
    pub fn new(order: TermOrder) -> Self {
        Self {
            order,
            terms: Vec::new(),
        }
    }

    pub fn order(&self) -> TermOrder {
        self.order
    }

    /// Inserts `term` at its sorted position.
    ///
    /// If an equal term is already present, `term` is dropped and the position
    /// of the present one is returned as [`Seen::Old`].
    pub fn insert(&mut self, term: Term) -> Seen<usize> {
        match self
            .terms
            .binary_search_by(|present| self.order.compare(present, &term))
        {
            Ok(position) => {
                trace!(%term, position, "duplicate result");
                Seen::Old(position)
            }
            Err(position) => {
                trace!(%term, position, "new result");
                self.terms.insert(position, term);
                Seen::New(position)
            }
        }
    }

    pub fn contains(&self, term: &Term) -> bool {
        self.terms
            .binary_search_by(|present| self.order.compare(present, term))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'r> IntoIterator for &'r ResultSet {
    type Item = &'r Term;
    type IntoIter = std::slice::Iter<'r, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Term> for ResultSet {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}
