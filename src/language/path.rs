use serde::{Deserialize, Serialize};

/// Position of a sub-term, as the argument indices leading to it from the root.
///
/// The empty path is the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedPath(Vec<usize>);

impl OwnedPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn as_path(&self) -> Path<'_> {
        Path(&self.0)
    }

    /// Adds a new position at the end of the path
    pub fn push(&mut self, position: usize) {
        self.0.push(position)
    }

    /// Removes the last position from the path
    pub fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<usize>> for OwnedPath {
    fn from(positions: Vec<usize>) -> Self {
        Self(positions)
    }
}

impl std::fmt::Display for OwnedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_path().fmt(f)
    }
}

/// Borrowed view of an [`OwnedPath`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Path<'p>(&'p [usize]);

impl<'p> Path<'p> {
    pub fn new(positions: &'p [usize]) -> Self {
        Path(positions)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first element on the path, or `None` if the path is empty
    pub fn head(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Returns the path below the first element
    pub fn child(&self) -> Self {
        Path(self.0.get(1..).unwrap_or_default())
    }

    /// Returns the path of the enclosing term, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.0.split_last().map(|(_, init)| Path(init))
    }

    pub fn to_owned_path(&self) -> OwnedPath {
        OwnedPath(self.0.to_vec())
    }
}

impl std::fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{position}")?;
        }
        write!(f, "]")
    }
}
