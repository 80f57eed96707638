//! The `filter` combinator.

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::errors::bad_argument;
use crate::functions::{expect_arity, flatten_into};
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Name the current element is bound to while the predicate runs.
pub const ELEMENT_BINDING: &str = "it";

/// Keep the elements of the first child for which the second child,
/// re-evaluated with [`ELEMENT_BINDING`] bound to the element, yields
/// `true`.
///
/// The predicate operation is evaluated once per element against a
/// scoped copy of the context, so the caller's own bindings stay
/// visible and unchanged. A non-`bool` predicate result is an argument
/// error, not a falsy value.
pub struct FilterFunction;

impl Function for FilterFunction {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 2)?;

        let mut elements = Vec::new();
        flatten_into(ev.eval(args[0], ctx)?, &mut elements)?;

        let mut kept = Vec::new();
        for element in elements {
            let scoped = ctx.scoped(ELEMENT_BINDING, element.clone());
            match ev.eval(args[1], &scoped)? {
                Atom::Bool(true) => kept.push(element),
                Atom::Bool(false) => {}
                other => {
                    return Err(bad_argument(
                        self.name(),
                        format!("predicate must yield bool, got {}", other.kind()),
                    ));
                }
            }
        }
        Ok(Atom::seq(kept))
    }
}
