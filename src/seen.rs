//! Outcome of inserting into a deduplicating collection.

/// Whether an inserted value was new to the collection or already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seen<T> {
    /// The value was added
    New(T),
    /// An equal value was already present, the inserted one was dropped
    Old(T),
}

impl<T> Seen<T> {
    /// Extracts the inner value regardless of whether it's new or old.
    pub fn any(self) -> T {
        match self {
            Seen::New(x) | Seen::Old(x) => x,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Seen::New(_))
    }
}
