//! Per-evaluation binding state.

use rustc_hash::FxHashMap;

use rove_ir::Atom;

/// Exclusively owned state of one in-flight evaluation.
///
/// Exactly one context instance backs exactly one logical evaluation of
/// a compiled tree: created immediately before the evaluation begins,
/// discarded when it completes or fails, never shared between concurrent
/// evaluations.
///
/// Bindings are populated with [`bind`](Self::bind) before evaluation
/// starts and are fixed for its duration: functions read them but never
/// introduce new global bindings. A function that needs a loop variable
/// for nested sub-evaluations layers it onto a *copy* of the context via
/// [`scoped`](Self::scoped).
#[derive(Clone, Debug, Default)]
pub struct EvaluationContext {
    bindings: FxHashMap<String, Atom>,
}

impl EvaluationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name before evaluation starts.
    ///
    /// Names are unique within one context; rebinding replaces the
    /// previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: Atom) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Atom> {
        self.bindings.get(name)
    }

    /// A copy of this context with one extra scoped binding.
    ///
    /// Used by closure-bearing combinators to expose a loop variable to
    /// a sub-evaluation without touching the caller's context. Shadows
    /// an existing binding of the same name for the sub-evaluation only.
    #[must_use]
    pub fn scoped(&self, name: impl Into<String>, value: Atom) -> Self {
        let mut child = self.clone();
        child.bind(name, value);
        child
    }
}
