//! Whole-pipeline tests: compiled trees evaluated through the standard
//! registry. Unit tests for individual types stay inline next to them.

mod evaluator_tests;
mod function_tests;

use rove_ir::ops::{OpId, OpTree};
use rove_ir::Atom;

use crate::{EvalError, EvalResult, EvaluationContext, Evaluator, FunctionRegistry};

/// Evaluate `tree` against a standard registry and `ctx`.
fn run(tree: &OpTree, ctx: &EvaluationContext) -> EvalResult {
    let registry = FunctionRegistry::standard();
    Evaluator::new(tree, &registry).evaluate(ctx)
}

/// Build a tree of one call over literal arguments.
fn call_over_literals(function: &str, literals: Vec<Atom>) -> OpTree {
    let mut b = OpTree::builder();
    let args: Vec<OpId> = literals.into_iter().map(|atom| b.literal(atom)).collect();
    let root = b.call(function, args);
    b.build(root)
}

fn expect_err(result: EvalResult) -> EvalError {
    match result {
        Err(err) => err,
        Ok(atom) => panic!("expected an error, got {atom:?}"),
    }
}
