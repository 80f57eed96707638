//! The compiled operation tree.
//!
//! A query is compiled (by the external front end) into a flat arena of
//! [`Operation`]s addressed by [`OpId`]: u32 indices instead of boxed
//! nodes, so one compiled tree is a contiguous, immutable block that any
//! number of concurrent evaluations can share.
//!
//! Trees are acyclic by construction: an operation can only reference
//! ids the builder has already handed out.

use std::fmt;

use crate::Atom;

/// Index into an operation tree.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct OpId(u32);

impl OpId {
    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op#{}", self.0)
    }
}

/// One node of a compiled expression.
#[derive(Clone, Debug)]
pub enum Operation {
    /// A literal atom, resolved without recursion.
    Literal(Atom),
    /// A variable reference, resolved against the evaluation context.
    Binding(String),
    /// A function invocation: registry name plus ordered child
    /// operations (order is argument position). Children are handed to
    /// the function *unevaluated*.
    Call { function: String, args: Vec<OpId> },
}

/// Immutable arena of operations with a designated root.
///
/// Built once at compile time via [`OpTreeBuilder`], never mutated at
/// evaluation time. Function names are not validated here; unknown
/// names surface when the tree is evaluated.
#[derive(Clone, Debug)]
pub struct OpTree {
    ops: Vec<Operation>,
    root: OpId,
}

impl OpTree {
    /// Start building a tree.
    pub fn builder() -> OpTreeBuilder {
        OpTreeBuilder { ops: Vec::new() }
    }

    /// The root operation id.
    #[inline]
    pub fn root(&self) -> OpId {
        self.root
    }

    /// Resolve an id to its operation.
    #[inline]
    pub fn get(&self, id: OpId) -> &Operation {
        &self.ops[id.index()]
    }

    /// Number of operations in the tree.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the tree holds no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Builder for [`OpTree`].
///
/// Each push returns the new operation's id; `Call` arguments must be
/// ids this builder already handed out, which makes cycles impossible.
pub struct OpTreeBuilder {
    ops: Vec<Operation>,
}

impl OpTreeBuilder {
    /// Push a literal operation.
    pub fn literal(&mut self, atom: Atom) -> OpId {
        self.push(Operation::Literal(atom))
    }

    /// Push a binding-reference operation.
    pub fn binding(&mut self, name: impl Into<String>) -> OpId {
        self.push(Operation::Binding(name.into()))
    }

    /// Push a function-call operation over previously pushed children.
    pub fn call(&mut self, function: impl Into<String>, args: Vec<OpId>) -> OpId {
        for arg in &args {
            assert!(
                arg.index() < self.ops.len(),
                "call argument {arg:?} does not exist yet"
            );
        }
        self.push(Operation::Call {
            function: function.into(),
            args,
        })
    }

    /// Finish the tree with `root` as its result operation.
    pub fn build(self, root: OpId) -> OpTree {
        assert!(
            root.index() < self.ops.len(),
            "root {root:?} does not exist"
        );
        OpTree {
            ops: self.ops,
            root,
        }
    }

    fn push(&mut self, op: Operation) -> OpId {
        let id = u32::try_from(self.ops.len()).unwrap_or_else(|_| {
            unreachable!("operation tree exceeds u32::MAX nodes");
        });
        self.ops.push(op);
        OpId(id)
    }
}
