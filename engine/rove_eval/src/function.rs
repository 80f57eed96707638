//! The unit-of-computation contract.

use rove_ir::ops::OpId;

use crate::{EvalResult, EvaluationContext, Evaluator};

/// A named, stateless computation dispatched from call operations.
///
/// `compute` receives the *unevaluated* child operations, not
/// pre-resolved atoms: the function chooses evaluation order, may skip
/// children entirely (short-circuit) or evaluate a child more than once
/// (per element of a sequence), recursing into the evaluator with the
/// same context or a scoped copy of it.
///
/// # Reentrancy
///
/// Implementations hold no per-call state, so one instance safely backs
/// unlimited concurrent evaluations with different contexts. Results
/// must never be cached keyed by operation identity: the same operation
/// carries different live values in different contexts.
///
/// # Argument checking
///
/// Arity and argument-shape checking is the function's own
/// responsibility; a function that receives operands it does not accept
/// fails with an `Argument` error naming the expected contract.
pub trait Function: Send + Sync {
    /// Stable name used for registry lookup and dispatch.
    fn name(&self) -> &'static str;

    /// Produce one result atom from the raw child operations.
    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult;
}
