//! The `any` combinator.

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::functions::expect_arity;
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Whether the single child produced at least one element.
///
/// Pulls at most one element from a lazy sequence and leaves the rest
/// unconsumed; checks emptiness of a materialized sequence; a scalar is
/// present, `Null` is absent.
pub struct AnyFunction;

impl Function for AnyFunction {
    fn name(&self) -> &'static str {
        "any"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 1)?;

        let present = match ev.eval(args[0], ctx)? {
            Atom::Null => false,
            Atom::Seq(items) => !items.is_empty(),
            Atom::Lazy(seq) => match seq.next() {
                Some(item) => {
                    item?;
                    true
                }
                None => false,
            },
            _scalar => true,
        };
        Ok(Atom::Bool(present))
    }
}
