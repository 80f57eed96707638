//! Error types for query evaluation.
//!
//! `EvalErrorKind` provides typed error categories so callers can tell a
//! programming error in the compiled expression (unknown function,
//! unresolved binding, bad argument shape) from a transient data or
//! resource failure (external). Factory functions populate both `kind`
//! and `message`.

use std::fmt;

use rove_graph::GraphError;
use rove_ir::Atom;

/// Result of evaluation.
pub type EvalResult = Result<Atom, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A call operation names a function absent from the registry.
    UnknownFunction { name: String },
    /// A binding-reference operation names a binding absent from the
    /// context.
    UnresolvedBinding { name: String },
    /// A function received an operand count or shape it does not accept.
    Argument { function: String, message: String },
    /// A failure reported by an externally supplied resource while a
    /// function was computing. Wrapped, never masked.
    External { message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFunction { name } => write!(f, "unknown function: {name}"),
            Self::UnresolvedBinding { name } => write!(f, "unresolved binding: {name}"),
            Self::Argument { function, message } => write!(f, "{function}: {message}"),
            Self::External { message } => write!(f, "external resource failure: {message}"),
        }
    }
}

/// Evaluation error.
///
/// Every failure aborts the enclosing evaluation immediately; evaluate
/// is all-or-nothing and nothing is retried inside the core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category for programmatic matching.
    pub kind: EvalErrorKind,
    /// Human-readable error message (equals `kind.to_string()`).
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }

    /// Whether this error marks a defect in the compiled expression
    /// rather than a data/resource failure.
    pub fn is_expression_defect(&self) -> bool {
        !matches!(self.kind, EvalErrorKind::External { .. })
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

impl From<GraphError> for EvalError {
    fn from(err: GraphError) -> Self {
        external(err)
    }
}

// Factory constructors

/// A call operation named a function the registry does not know.
pub fn unknown_function(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownFunction { name: name.into() })
}

/// A binding reference had no entry in the evaluation context.
pub fn unresolved_binding(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedBinding { name: name.into() })
}

/// A function received the wrong number of arguments.
pub fn wrong_arg_count(function: &str, expected: &str, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Argument {
        function: function.to_owned(),
        message: format!("expects {expected}, got {got}"),
    })
}

/// A function received an argument of a shape it does not accept.
pub fn bad_argument(function: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Argument {
        function: function.to_owned(),
        message: message.into(),
    })
}

/// Wrap a graph collaborator failure.
pub fn external(err: GraphError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::External {
        message: err.to_string(),
    })
}
