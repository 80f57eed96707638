//! Function registry: name-to-implementation dispatch table.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::function::Function;
use crate::functions;

/// Immutable-after-startup mapping from function name to implementation.
///
/// Populated once during process initialization; lookups never mutate
/// it, so a finished registry is shared read-only across unboundedly
/// many concurrent evaluations (see [`SharedRegistry`]).
///
/// Operation trees reference functions by *name*, never by direct
/// reference, so a compiled tree stays independent of function
/// implementations; unknown names surface at evaluation time.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<&'static str, Box<dyn Function>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard built-in function set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        functions::install(&mut registry);
        registry
    }

    /// Register a function under its own name.
    ///
    /// Startup-time only. Panics on a duplicate name: two functions
    /// claiming one name is a wiring bug, not a runtime condition.
    pub fn register(&mut self, function: Box<dyn Function>) {
        let name = function.name();
        let previous = self.functions.insert(name, function);
        assert!(previous.is_none(), "duplicate function name: {name}");
    }

    /// Look up a function by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Function> {
        self.functions.get(name).map(AsRef::as_ref)
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort_unstable();
        f.debug_tuple("FunctionRegistry").field(&names).finish()
    }
}

/// Thread-safe shared registry wrapper (immutable).
///
/// Wraps a finished registry in an `Arc` so many evaluating threads can
/// share one instance; the wrapped registry is immutable after creation.
pub struct SharedRegistry<T>(Arc<T>);

impl<T> SharedRegistry<T> {
    /// Create a new shared registry from an owned registry.
    pub fn new(registry: T) -> Self {
        SharedRegistry(Arc::new(registry))
    }
}

impl<T> Clone for SharedRegistry<T> {
    fn clone(&self) -> Self {
        SharedRegistry(Arc::clone(&self.0))
    }
}

impl<T> std::ops::Deref for SharedRegistry<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedRegistry({:?})", &*self.0)
    }
}
