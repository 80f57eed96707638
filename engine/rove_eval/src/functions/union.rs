//! The `union` combinator.

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::errors::wrong_arg_count;
use crate::functions::eval_flattened;
use crate::{EvalResult, EvaluationContext, Evaluator, Function};

/// Deduplicated merge of one or more child results.
///
/// Evaluates every child eagerly in argument order, flattens one level
/// of sequence nesting, and merges all contributed elements with set
/// semantics: duplicates by value equality collapse so each distinct
/// value appears exactly once, regardless of how many times or from
/// which argument it was contributed. First occurrence fixes a value's
/// position; equality is strict (no numeric coercion).
pub struct UnionFunction;

impl Function for UnionFunction {
    fn name(&self) -> &'static str {
        "union"
    }

    fn compute(
        &self,
        args: &[OpId],
        ev: &Evaluator<'_>,
        ctx: &EvaluationContext,
    ) -> EvalResult {
        if args.is_empty() {
            return Err(wrong_arg_count(self.name(), "at least 1 argument", 0));
        }

        let elements = eval_flattened(args, ev, ctx)?;
        // Linear-scan dedup: atoms are not hashable (floats, graph
        // elements), and distinct counts stay small in practice.
        let mut distinct: Vec<Atom> = Vec::new();
        for atom in elements {
            if !distinct.contains(&atom) {
                distinct.push(atom);
            }
        }
        Ok(Atom::seq(distinct))
    }
}
