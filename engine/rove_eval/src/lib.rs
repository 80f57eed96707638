//! Rove Eval - Functional evaluation core for compiled traversals.
//!
//! A compiled traversal is an immutable [`OpTree`](rove_ir::ops::OpTree)
//! whose call operations dispatch by name into a [`FunctionRegistry`].
//! The [`Evaluator`] walks the tree recursively; all per-evaluation
//! state lives in the caller-owned [`EvaluationContext`].
//!
//! # Concurrency
//!
//! One tree plus one registry serve any number of simultaneous
//! evaluations, each with its own context. Nothing here spawns threads
//! or synchronizes: the shared pieces are read-only and per-evaluation
//! state is exclusively owned.
//!
//! # Re-exports
//!
//! Value types from `rove_ir` are re-exported for convenience:
//! `Atom`, `AtomKind`, `GraphHandle`, `Heap`, `LazySeq`, `VertexRef`.

mod context;
mod evaluator;
pub mod errors;
mod function;
pub mod functions;
mod registry;

#[cfg(test)]
mod tests;

// Re-export value types from rove_ir
pub use rove_ir::{Atom, AtomKind, GraphHandle, Heap, LazySeq, VertexRef};

// Re-export error constructors for convenience (canonical path is rove_eval::errors::*)
pub use errors::{
    bad_argument, external, unknown_function, unresolved_binding, wrong_arg_count,
    EvalError, EvalErrorKind, EvalResult,
};

pub use context::EvaluationContext;
pub use evaluator::Evaluator;
pub use function::Function;
pub use registry::{FunctionRegistry, SharedRegistry};
