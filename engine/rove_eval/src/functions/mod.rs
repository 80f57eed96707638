//! Built-in traversal functions.
//!
//! One file per function. Adding a function means implementing
//! [`Function`](crate::Function) in a new file here and registering it
//! in [`install`]; the evaluator itself never changes.

mod any;
mod branch;
mod count;
mod filter;
mod traversal;
mod union;

pub use any::AnyFunction;
pub use branch::IfFunction;
pub use count::CountFunction;
pub use filter::{FilterFunction, ELEMENT_BINDING};
pub use traversal::{OutFunction, ValuesFunction, VerticesFunction};
pub use union::UnionFunction;

use rove_ir::ops::OpId;
use rove_ir::Atom;

use crate::errors::{wrong_arg_count, EvalError};
use crate::{EvaluationContext, Evaluator, FunctionRegistry};

/// Register the standard function set.
pub(crate) fn install(registry: &mut FunctionRegistry) {
    registry.register(Box::new(UnionFunction));
    registry.register(Box::new(CountFunction));
    registry.register(Box::new(AnyFunction));
    registry.register(Box::new(IfFunction));
    registry.register(Box::new(FilterFunction));
    registry.register(Box::new(VerticesFunction));
    registry.register(Box::new(OutFunction));
    registry.register(Box::new(ValuesFunction));
}

/// Check an exact argument count.
pub(crate) fn expect_arity(
    function: &'static str,
    args: &[OpId],
    expected: usize,
) -> Result<(), EvalError> {
    if args.len() == expected {
        return Ok(());
    }
    let arg_word = if expected == 1 { "argument" } else { "arguments" };
    Err(wrong_arg_count(
        function,
        &format!("exactly {expected} {arg_word}"),
        args.len(),
    ))
}

/// Evaluate every child in argument order and flatten one level of
/// sequence nesting: a child whose atom is a sequence (materialized or
/// lazy) contributes its elements individually, so variadic combinators
/// compose uniformly whether each argument was a literal or produced a
/// collection. Lazy children are drained exactly once, here.
pub(crate) fn eval_flattened(
    args: &[OpId],
    ev: &Evaluator<'_>,
    ctx: &EvaluationContext,
) -> Result<Vec<Atom>, EvalError> {
    let mut elements = Vec::new();
    for arg in args {
        let atom = ev.eval(*arg, ctx)?;
        flatten_into(atom, &mut elements)?;
    }
    Ok(elements)
}

/// Flatten one level: sequences contribute elements, scalars themselves.
pub(crate) fn flatten_into(atom: Atom, out: &mut Vec<Atom>) -> Result<(), EvalError> {
    match atom {
        Atom::Seq(items) => out.extend(items.iter().cloned()),
        Atom::Lazy(seq) => out.extend(seq.drain()?),
        other => out.push(other),
    }
    Ok(())
}
