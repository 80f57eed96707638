//! Rove IR - the compiled form of a traversal query.
//!
//! A query compiled by the (external) front end is a flat [`ops::OpTree`]
//! of operations: literals, binding references, and function calls. The
//! values flowing through an evaluation are [`Atom`]s.
//!
//! Both structures are immutable once built. One tree is safely shared,
//! read-only, by unboundedly many concurrent evaluations; atoms never
//! outlive the single evaluation that produced them.

mod atom;
pub mod ops;

pub use atom::{Atom, AtomKind, GraphHandle, Heap, LazySeq, VertexRef};
