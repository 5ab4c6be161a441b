use super::path::OwnedPath;
use super::term::Term;

/// Forward cursor over the direct arguments of a term.
///
/// The cursor only reads an index, so traversing never changes the term and a
/// traversal can be restarted with [`ArgumentCursor::reset`]. It borrows the
/// term for its whole lifetime, which keeps the arguments from being mutated
/// while the traversal is in progress.
#[derive(Clone, Debug)]
pub struct ArgumentCursor<'t> {
    term: &'t Term,
    position: usize,
}

impl<'t> ArgumentCursor<'t> {
    pub fn new(term: &'t Term) -> Self {
        Self { term, position: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.term.arity()
    }

    /// Index of the argument the next call to `next` yields.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn peek(&self) -> Option<&'t Term> {
        self.term.argument(self.position)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// The term whose arguments are traversed.
    pub fn father(&self) -> &'t Term {
        self.term
    }
}

impl<'t> Iterator for ArgumentCursor<'t> {
    type Item = &'t Term;

    fn next(&mut self) -> Option<Self::Item> {
        let argument = self.term.argument(self.position)?;
        self.position += 1;
        Some(argument)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.term.arity() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ArgumentCursor<'_> {}

/// Preorder iterator over the paths of every sub-term, the root first.
#[derive(Clone, Debug)]
pub struct PathIterator<'t> {
    root: &'t Term,
    pending: Vec<OwnedPath>,
}

impl<'t> PathIterator<'t> {
    pub fn new(root: &'t Term) -> Self {
        Self {
            root,
            pending: vec![OwnedPath::root()],
        }
    }
}

impl Iterator for PathIterator<'_> {
    type Item = OwnedPath;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.pending.pop()?;
        let arity = self
            .root
            .subterm(path.as_path())
            .map_or(0, Term::arity);

        for position in (0..arity).rev() {
            let mut child = path.clone();
            child.push(position);
            self.pending.push(child);
        }

        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::language::{OwnedPath, Term};

    #[test]
    fn cursor_visits_arguments_in_order() {
        let term: Term = "(f a b c)".parse().unwrap();
        let mut cursor = term.cursor();

        assert_eq!(cursor.len(), 3);
        let mut seen = Vec::new();
        while cursor.has_next() {
            let position = cursor.position();
            seen.push((position, cursor.next().unwrap().symbol().to_string()));
        }
        assert_eq!(
            seen,
            vec![
                (0, String::from("a")),
                (1, String::from("b")),
                (2, String::from("c"))
            ]
        );
        assert!(cursor.peek().is_none());
    }

    #[test]
    fn cursor_leaves_term_unchanged_and_restarts() {
        let term: Term = "(f a (g b))".parse().unwrap();
        let copy = term.clone();
        let mut cursor = term.cursor();

        assert_eq!(cursor.by_ref().count(), 2);
        cursor.reset();
        assert_eq!(cursor.peek().map(|a| a.symbol().as_str()), Some("a"));
        assert!(std::ptr::eq(cursor.father(), &term));
        assert_eq!(term, copy);
    }

    #[test]
    fn cursor_over_leaf_is_empty() {
        let leaf = Term::new("a").unwrap();
        let cursor = leaf.cursor();

        assert!(!cursor.has_next());
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn paths_of_leaf() {
        let leaf = Term::new("a").unwrap();
        assert_eq!(leaf.iter_paths().collect::<Vec<_>>(), vec![OwnedPath::root()]);
    }
}
