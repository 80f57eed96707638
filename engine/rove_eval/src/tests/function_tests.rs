//! Built-in function semantics: union, count, any, if, filter.

use pretty_assertions::assert_eq;
use rove_ir::ops::OpTree;
use rove_ir::{Atom, LazySeq};

use crate::errors::EvalErrorKind;
use crate::EvaluationContext;

use super::{call_over_literals, expect_err, run};

fn lazy_ints(values: &[i64]) -> LazySeq {
    let atoms: Vec<Atom> = values.iter().map(|n| Atom::Int(*n)).collect();
    LazySeq::new(atoms.into_iter().map(Ok))
}

mod union_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scalars_merge_in_argument_order() {
        let tree = call_over_literals(
            "union",
            vec![
                Atom::Float(1.0),
                Atom::Float(2.0),
                Atom::Float(3.0),
                Atom::Float(4.0),
            ],
        );

        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![
                Atom::Float(1.0),
                Atom::Float(2.0),
                Atom::Float(3.0),
                Atom::Float(4.0),
            ]))
        );
    }

    #[test]
    fn duplicates_collapse_across_arguments() {
        let tree = call_over_literals(
            "union",
            vec![
                Atom::seq(vec![Atom::Int(1), Atom::Int(2)]),
                Atom::seq(vec![Atom::Int(2), Atom::Int(2)]),
            ],
        );

        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![Atom::Int(1), Atom::Int(2)]))
        );
    }

    #[test]
    fn flattening_is_one_level_deep() {
        let inner = Atom::seq(vec![Atom::Int(1), Atom::Int(2)]);
        let tree = call_over_literals(
            "union",
            vec![Atom::seq(vec![inner.clone(), Atom::Int(3)])],
        );

        // The nested sequence stays a single element.
        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![inner, Atom::Int(3)]))
        );
    }

    #[test]
    fn no_numeric_coercion_between_int_and_float() {
        let tree = call_over_literals("union", vec![Atom::Int(1), Atom::Float(1.0)]);

        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![Atom::Int(1), Atom::Float(1.0)]))
        );
    }

    #[test]
    fn lazy_arguments_are_drained_and_merged() {
        let tree = call_over_literals(
            "union",
            vec![
                Atom::Lazy(lazy_ints(&[1, 2])),
                Atom::Lazy(lazy_ints(&[2, 3])),
            ],
        );

        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)]))
        );
    }

    #[test]
    fn zero_arguments_is_an_argument_error() {
        let tree = call_over_literals("union", vec![]);

        let err = expect_err(run(&tree, &EvaluationContext::new()));
        assert!(matches!(err.kind, EvalErrorKind::Argument { .. }));
        assert_eq!(err.to_string(), "union: expects at least 1 argument, got 0");
    }

    mod properties {
        use super::*;
        use pretty_assertions::assert_eq;
        use proptest::prelude::*;
        use rustc_hash::FxHashSet;

        proptest! {
            #[test]
            fn each_distinct_value_appears_exactly_once(
                values in proptest::collection::vec(any::<i64>(), 0..64)
            ) {
                let atoms: Vec<Atom> = values.iter().map(|n| Atom::Int(*n)).collect();
                let tree = call_over_literals("union", vec![Atom::seq(atoms)]);

                let mut seen = FxHashSet::default();
                let expected: Vec<Atom> = values
                    .iter()
                    .filter(|n| seen.insert(**n))
                    .map(|n| Atom::Int(*n))
                    .collect();

                prop_assert_eq!(
                    run(&tree, &EvaluationContext::new()),
                    Ok(Atom::seq(expected))
                );
            }
        }
    }
}

mod count_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_by_shape() {
        let cases = [
            (Atom::Null, 0),
            (Atom::Int(7), 1),
            (Atom::str("marko"), 1),
            (Atom::seq(vec![]), 0),
            (Atom::seq(vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)]), 3),
        ];
        for (input, expected) in cases {
            let tree = call_over_literals("count", vec![input.clone()]);
            assert_eq!(
                run(&tree, &EvaluationContext::new()),
                Ok(Atom::Int(expected)),
                "counting {input:?}"
            );
        }
    }

    #[test]
    fn drains_a_lazy_sequence_without_materializing() {
        let seq = lazy_ints(&[10, 20, 30]);
        let tree = call_over_literals("count", vec![Atom::Lazy(seq.clone())]);

        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Int(3)));
        // The cursor is shared, so the stream is now exhausted.
        assert!(seq.next().is_none());
    }

    #[test]
    fn rejects_extra_arguments() {
        let tree = call_over_literals("count", vec![Atom::Int(1), Atom::Int(2)]);

        let err = expect_err(run(&tree, &EvaluationContext::new()));
        assert_eq!(err.to_string(), "count: expects exactly 1 argument, got 2");
    }
}

mod any_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reports_presence_by_shape() {
        let cases = [
            (Atom::Null, false),
            (Atom::Int(0), true),
            (Atom::Bool(false), true),
            (Atom::seq(vec![]), false),
            (Atom::seq(vec![Atom::Int(1)]), true),
        ];
        for (input, expected) in cases {
            let tree = call_over_literals("any", vec![input.clone()]);
            assert_eq!(
                run(&tree, &EvaluationContext::new()),
                Ok(Atom::Bool(expected)),
                "probing {input:?}"
            );
        }
    }

    #[test]
    fn pulls_at_most_one_lazy_element() {
        let seq = lazy_ints(&[1, 2, 3]);
        let tree = call_over_literals("any", vec![Atom::Lazy(seq.clone())]);

        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Bool(true)));
        // Two of three elements are still unconsumed.
        assert_eq!(
            seq.drain().unwrap(),
            vec![Atom::Int(2), Atom::Int(3)]
        );
    }

    #[test]
    fn exhausted_lazy_sequence_is_absent() {
        let seq = lazy_ints(&[]);
        let tree = call_over_literals("any", vec![Atom::Lazy(seq)]);

        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Bool(false)));
    }
}

mod if_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn picks_the_matching_branch() {
        let tree = call_over_literals(
            "if",
            vec![Atom::Bool(true), Atom::str("yes"), Atom::str("no")],
        );
        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::str("yes")));

        let tree = call_over_literals(
            "if",
            vec![Atom::Bool(false), Atom::str("yes"), Atom::str("no")],
        );
        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::str("no")));
    }

    #[test]
    fn the_untaken_branch_is_never_evaluated() {
        // The false branch calls an unregistered function; taking the
        // true branch must not even look it up.
        let mut b = OpTree::builder();
        let cond = b.literal(Atom::Bool(true));
        let taken = b.literal(Atom::Int(1));
        let boom = b.call("explode", vec![]);
        let root = b.call("if", vec![cond, taken, boom]);
        let tree = b.build(root);

        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Int(1)));
    }

    #[test]
    fn untaken_branches_may_reference_missing_bindings() {
        let mut b = OpTree::builder();
        let cond = b.literal(Atom::Bool(false));
        let absent = b.binding("never-bound");
        let fallback = b.literal(Atom::Null);
        let root = b.call("if", vec![cond, absent, fallback]);
        let tree = b.build(root);

        assert_eq!(run(&tree, &EvaluationContext::new()), Ok(Atom::Null));
    }

    #[test]
    fn non_bool_conditions_are_rejected() {
        let tree = call_over_literals(
            "if",
            vec![Atom::Int(1), Atom::str("yes"), Atom::str("no")],
        );

        let err = expect_err(run(&tree, &EvaluationContext::new()));
        assert_eq!(err.to_string(), "if: condition must be bool, got int");
    }
}

mod filter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_elements_whose_predicate_holds() {
        // any(it) is false only for Null, so the Null element drops out.
        let mut b = OpTree::builder();
        let source = b.literal(Atom::seq(vec![Atom::Int(1), Atom::Null, Atom::Int(2)]));
        let it = b.binding("it");
        let pred = b.call("any", vec![it]);
        let root = b.call("filter", vec![source, pred]);
        let tree = b.build(root);

        assert_eq!(
            run(&tree, &EvaluationContext::new()),
            Ok(Atom::seq(vec![Atom::Int(1), Atom::Int(2)]))
        );
    }

    #[test]
    fn predicate_sees_the_caller_bindings() {
        let mut b = OpTree::builder();
        let source = b.literal(Atom::seq(vec![Atom::Int(1), Atom::Int(2)]));
        let pred = b.binding("keep");
        let root = b.call("filter", vec![source, pred]);
        let tree = b.build(root);

        let mut ctx = EvaluationContext::new();
        ctx.bind("keep", Atom::Bool(true));
        assert_eq!(
            run(&tree, &ctx),
            Ok(Atom::seq(vec![Atom::Int(1), Atom::Int(2)]))
        );
    }

    #[test]
    fn element_binding_shadows_without_leaking() {
        // The caller's own `it` is shadowed per element, then restored.
        let mut b = OpTree::builder();
        let source = b.literal(Atom::seq(vec![Atom::Bool(true), Atom::Bool(false)]));
        let pred = b.binding("it");
        let root = b.call("filter", vec![source, pred]);
        let tree = b.build(root);

        let mut ctx = EvaluationContext::new();
        ctx.bind("it", Atom::str("outer"));
        assert_eq!(run(&tree, &ctx), Ok(Atom::seq(vec![Atom::Bool(true)])));
        assert_eq!(ctx.get("it"), Some(&Atom::str("outer")));
    }

    #[test]
    fn non_bool_predicates_are_rejected() {
        let mut b = OpTree::builder();
        let source = b.literal(Atom::seq(vec![Atom::Int(1)]));
        let it = b.binding("it");
        let pred = b.call("count", vec![it]);
        let root = b.call("filter", vec![source, pred]);
        let tree = b.build(root);

        let err = expect_err(run(&tree, &EvaluationContext::new()));
        assert_eq!(
            err.to_string(),
            "filter: predicate must yield bool, got int"
        );
    }
}
