//! Evaluator dispatch and error surfacing.

use pretty_assertions::assert_eq;
use rove_ir::ops::OpTree;
use rove_ir::Atom;

use crate::errors::EvalErrorKind;
use crate::EvaluationContext;

use super::{call_over_literals, expect_err, run};

#[test]
fn literal_roots_evaluate_to_themselves() {
    let mut b = OpTree::builder();
    let root = b.literal(Atom::Int(42));
    let tree = b.build(root);

    assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Int(42)));
}

#[test]
fn bindings_resolve_against_the_context() {
    let mut b = OpTree::builder();
    let root = b.binding("name");
    let tree = b.build(root);

    let mut ctx = EvaluationContext::new();
    ctx.bind("name", Atom::str("marko"));
    assert_eq!(run(&tree, &ctx), Ok(Atom::str("marko")));
}

#[test]
fn missing_bindings_fail_by_name() {
    let mut b = OpTree::builder();
    let root = b.binding("name");
    let tree = b.build(root);

    let err = expect_err(run(&tree, &EvaluationContext::new()));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnresolvedBinding {
            name: "name".to_owned()
        }
    );
    assert!(err.is_expression_defect());
}

#[test]
fn unknown_functions_fail_by_name() {
    let tree = call_over_literals("loop", vec![Atom::Int(1)]);

    let err = expect_err(run(&tree, &EvaluationContext::new()));
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownFunction {
            name: "loop".to_owned()
        }
    );
}

#[test]
fn errors_propagate_out_of_nested_calls() {
    // count(union(<missing binding>)) fails with the innermost cause.
    let mut b = OpTree::builder();
    let missing = b.binding("g");
    let merged = b.call("union", vec![missing]);
    let root = b.call("count", vec![merged]);
    let tree = b.build(root);

    let err = expect_err(run(&tree, &EvaluationContext::new()));
    assert!(matches!(err.kind, EvalErrorKind::UnresolvedBinding { .. }));
}

#[test]
fn identical_inputs_give_identical_results() {
    let tree = call_over_literals(
        "union",
        vec![Atom::Int(1), Atom::Int(2), Atom::Int(1)],
    );

    let first = run(&tree, &EvaluationContext::new());
    let second = run(&tree, &EvaluationContext::new());
    assert_eq!(first, second);
    assert_eq!(first, Ok(Atom::seq(vec![Atom::Int(1), Atom::Int(2)])));
}
