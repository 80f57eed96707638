//! Recursive descent over a compiled operation tree.

use rove_ir::ops::{OpId, OpTree, Operation};

use crate::errors::{unknown_function, unresolved_binding};
use crate::{EvalResult, EvaluationContext, FunctionRegistry};

/// Drives one or more evaluations of a compiled tree.
///
/// Holds only shared, read-only references: the tree and the registry.
/// All per-evaluation state lives in the caller's [`EvaluationContext`],
/// so one evaluator (or any number of them over the same tree) can serve
/// concurrent callers. Evaluation is purely call-stack recursion: it
/// runs to completion or failure on the calling thread, with no
/// suspension point and no internal cancellation checkpoint.
#[derive(Copy, Clone)]
pub struct Evaluator<'a> {
    tree: &'a OpTree,
    registry: &'a FunctionRegistry,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a compiled tree and a function registry.
    pub fn new(tree: &'a OpTree, registry: &'a FunctionRegistry) -> Self {
        Evaluator { tree, registry }
    }

    /// The tree this evaluator walks.
    pub fn tree(&self) -> &'a OpTree {
        self.tree
    }

    /// Evaluate the tree's root operation against `ctx`.
    ///
    /// All-or-nothing: returns exactly one atom or exactly one error.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn evaluate(&self, ctx: &EvaluationContext) -> EvalResult {
        self.eval(self.tree.root(), ctx)
    }

    /// Resolve one operation to an atom.
    ///
    /// Functions call back into this for any child they choose to
    /// evaluate, with the same context or a scoped copy of it.
    pub fn eval(&self, op: OpId, ctx: &EvaluationContext) -> EvalResult {
        match self.tree.get(op) {
            Operation::Literal(atom) => Ok(atom.clone()),
            Operation::Binding(name) => ctx
                .get(name)
                .cloned()
                .ok_or_else(|| unresolved_binding(name)),
            Operation::Call { function, args } => {
                let f = self
                    .registry
                    .lookup(function)
                    .ok_or_else(|| unknown_function(function))?;
                tracing::trace!(function = %function, argc = args.len(), "dispatch");
                f.compute(args, self, ctx)
            }
        }
    }
}
