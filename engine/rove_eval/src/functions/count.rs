//! The `count` combinator.

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::functions::expect_arity;
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Number of elements produced by the single child.
///
/// Fully drains a lazy sequence (exactly once) without materializing
/// its elements. A scalar counts as one element, `Null` as zero.
pub struct CountFunction;

impl Function for CountFunction {
    fn name(&self) -> &'static str {
        "count"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        expect_arity(self.name(), args, 1)?;

        let count: u64 = match ev.eval(args[0], ctx)? {
            Atom::Null => 0,
            Atom::Seq(items) => items.len() as u64,
            Atom::Lazy(seq) => {
                let mut n = 0;
                while let Some(item) = seq.next() {
                    item?;
                    n += 1;
                }
                n
            }
            _scalar => 1,
        };
        Ok(Atom::Int(i64::try_from(count).unwrap_or(i64::MAX)))
    }
}
