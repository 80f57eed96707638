//! Arc-enforcing wrapper for heap-allocated atom payloads.

// Arc is the implementation detail of Heap<T>; all usage goes through
// the factory methods on `Atom`.
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable heap allocation behind an `Arc`.
///
/// The constructor is private to the atom module, so external code can
/// only obtain heap payloads through `Atom::` factory methods. Cloning
/// is O(1) reference counting; the payload itself is never mutated.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation. Only `Atom` factories call this.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality is a fast path; fall back to value equality.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
