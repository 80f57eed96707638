//! Single-pass lazy sequences of atoms.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rove_graph::GraphError;

use super::Atom;

/// One element of a lazy sequence.
///
/// Traversal work happens while the sequence is pulled, so backend
/// failures surface per element and abort the consuming combinator.
pub type LazyItem = Result<Atom, GraphError>;

/// A single-pass lazy sequence of atoms.
///
/// Produces elements on demand; finite for bounded traversals but not
/// restartable. Clones share the underlying cursor: they are the same
/// stream, and an element pulled through one clone is gone from all of
/// them. Evaluate-to-completion combinators drain a sequence exactly
/// once before returning.
#[derive(Clone)]
pub struct LazySeq {
    cursor: Arc<Mutex<Box<dyn Iterator<Item = LazyItem> + Send>>>,
}

impl LazySeq {
    /// Wrap an iterator as a lazy sequence.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = LazyItem> + Send + 'static,
    {
        LazySeq {
            cursor: Arc::new(Mutex::new(Box::new(iter))),
        }
    }

    /// Lazy sequence over already-materialized atoms.
    pub fn from_atoms(items: Vec<Atom>) -> Self {
        LazySeq::new(items.into_iter().map(Ok))
    }

    /// Pull the next element, advancing the shared cursor.
    pub fn next(&self) -> Option<LazyItem> {
        self.cursor.lock().next()
    }

    /// Drain every remaining element into a vector.
    ///
    /// The first backend failure aborts the drain and is returned; any
    /// elements pulled before it are discarded.
    pub fn drain(&self) -> Result<Vec<Atom>, GraphError> {
        let mut cursor = self.cursor.lock();
        let mut items = Vec::new();
        for item in cursor.by_ref() {
            items.push(item?);
        }
        Ok(items)
    }

    /// Whether two sequences share one cursor (clone identity).
    pub fn same_cursor(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cursor, &other.cursor)
    }
}

impl fmt::Debug for LazySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LazySeq(..)")
    }
}
