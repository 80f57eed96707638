//! The `if` combinator.

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::errors::bad_argument;
use crate::functions::expect_arity;
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Short-circuiting ternary branch: condition, then, else.
///
/// Evaluates the condition (must be `bool`, no truthiness coercion),
/// then exactly one branch. The untaken branch is never evaluated.
pub struct IfFunction;

impl Function for IfFunction {
    fn name(&self) -> &'static str {
        "if"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 3)?;

        match ev.eval(args[0], ctx)? {
            Atom::Bool(true) => ev.eval(args[1], ctx),
            Atom::Bool(false) => ev.eval(args[2], ctx),
            other => Err(bad_argument(
                self.name(),
                format!("condition must be bool, got {}", other.kind()),
            )),
        }
    }
}
