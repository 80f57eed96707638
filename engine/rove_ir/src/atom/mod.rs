//! Typed runtime values for the Rove evaluator.
//!
//! An [`Atom`] is the unit of data flowing through an operation tree:
//! produced by evaluating a literal, a binding reference, or a function
//! call, and consumed by whichever enclosing function asked for it.
//!
//! # Arc Enforcement
//!
//! Heap payloads go through factory methods on `Atom` only. The
//! [`Heap<T>`] wrapper has a module-private constructor, so external
//! code cannot build heap values directly and every shared payload is
//! reference counted.
//!
//! # Immutability
//!
//! Atoms never change value after a function returns them. "Mutation"
//! in a lazy sequence is confined to its cursor position; the elements
//! themselves are immutable.

mod heap;
mod lazy;

use std::fmt;
use std::sync::Arc;

use rove_graph::{Graph, GraphError, PropertyValue, VertexId};

pub use heap::Heap;
pub use lazy::LazySeq;

/// Shared handle to an externally supplied graph.
///
/// Read-only from the engine's perspective; the backend guarantees
/// concurrent-read safety.
pub type GraphHandle = Arc<dyn Graph>;

/// Opaque reference to one vertex of one graph.
///
/// Carries its graph handle so traversal functions can follow edges and
/// read properties without a separate graph argument.
#[derive(Clone)]
pub struct VertexRef {
    graph: GraphHandle,
    id: VertexId,
}

impl VertexRef {
    /// Create a reference to `id` within `graph`.
    pub fn new(graph: GraphHandle, id: VertexId) -> Self {
        VertexRef { graph, id }
    }

    /// The vertex id within its graph.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Vertices reachable over one outgoing edge.
    pub fn out(&self) -> Result<Vec<VertexRef>, GraphError> {
        let ids = self.graph.out(self.id)?;
        Ok(ids
            .into_iter()
            .map(|id| VertexRef::new(Arc::clone(&self.graph), id))
            .collect())
    }

    /// Look up a property of this vertex.
    pub fn property(&self, key: &str) -> Result<Option<PropertyValue>, GraphError> {
        self.graph.property(self.id, key)
    }
}

impl PartialEq for VertexRef {
    fn eq(&self, other: &Self) -> bool {
        // Same id in the same graph instance.
        self.id == other.id && Arc::ptr_eq(&self.graph, &other.graph)
    }
}

impl fmt::Debug for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.id)
    }
}

/// Type tag identifying an atom's semantic category.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AtomKind {
    Int,
    Float,
    Bool,
    Str,
    Seq,
    Lazy,
    Vertex,
    Graph,
    Null,
}

impl AtomKind {
    /// Human-readable tag name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            AtomKind::Int => "int",
            AtomKind::Float => "float",
            AtomKind::Bool => "bool",
            AtomKind::Str => "str",
            AtomKind::Seq => "seq",
            AtomKind::Lazy => "lazy seq",
            AtomKind::Vertex => "vertex",
            AtomKind::Graph => "graph",
            AtomKind::Null => "null",
        }
    }
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed, immutable value produced by one evaluation step.
#[derive(Clone)]
pub enum Atom {
    // Scalars (inline, no heap allocation)
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),

    // Heap payloads (factory-constructed only)
    /// Text value.
    Str(Heap<String>),
    /// Materialized ordered sequence.
    Seq(Heap<Vec<Atom>>),

    /// Single-pass lazy sequence (see [`LazySeq`]).
    Lazy(LazySeq),

    // Graph-shaped values
    /// Opaque reference to a graph vertex.
    Vertex(VertexRef),
    /// Externally supplied graph resource.
    Graph(GraphHandle),

    /// Absent result.
    Null,
}

impl Atom {
    /// Create a text atom.
    #[inline]
    pub fn str(s: impl Into<String>) -> Self {
        Atom::Str(Heap::new(s.into()))
    }

    /// Create a materialized sequence atom.
    #[inline]
    pub fn seq(items: Vec<Atom>) -> Self {
        Atom::Seq(Heap::new(items))
    }

    /// Create a lazy sequence atom from an iterator.
    #[inline]
    pub fn lazy<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<Atom, GraphError>> + Send + 'static,
    {
        Atom::Lazy(LazySeq::new(iter))
    }

    /// Create a vertex-reference atom.
    #[inline]
    pub fn vertex(graph: GraphHandle, id: VertexId) -> Self {
        Atom::Vertex(VertexRef::new(graph, id))
    }

    /// Create a graph-handle atom.
    #[inline]
    pub fn graph(handle: GraphHandle) -> Self {
        Atom::Graph(handle)
    }

    /// The atom's type tag.
    pub fn kind(&self) -> AtomKind {
        match self {
            Atom::Int(_) => AtomKind::Int,
            Atom::Float(_) => AtomKind::Float,
            Atom::Bool(_) => AtomKind::Bool,
            Atom::Str(_) => AtomKind::Str,
            Atom::Seq(_) => AtomKind::Seq,
            Atom::Lazy(_) => AtomKind::Lazy,
            Atom::Vertex(_) => AtomKind::Vertex,
            Atom::Graph(_) => AtomKind::Graph,
            Atom::Null => AtomKind::Null,
        }
    }

    /// Whether this atom is a sequence shape (materialized or lazy).
    pub fn is_sequence(&self) -> bool {
        matches!(self, Atom::Seq(_) | Atom::Lazy(_))
    }
}

/// Strict value equality, no numeric coercion: `Int(1) != Float(1.0)`.
///
/// Lazy sequences compare by cursor identity (two handles to the same
/// stream), graph handles by instance identity.
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Int(a), Atom::Int(b)) => a == b,
            (Atom::Float(a), Atom::Float(b)) => a == b,
            (Atom::Bool(a), Atom::Bool(b)) => a == b,
            (Atom::Str(a), Atom::Str(b)) => a == b,
            (Atom::Seq(a), Atom::Seq(b)) => a == b,
            (Atom::Lazy(a), Atom::Lazy(b)) => a.same_cursor(b),
            (Atom::Vertex(a), Atom::Vertex(b)) => a == b,
            (Atom::Graph(a), Atom::Graph(b)) => Arc::ptr_eq(a, b),
            (Atom::Null, Atom::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(n) => write!(f, "Int({n})"),
            Atom::Float(n) => write!(f, "Float({n})"),
            Atom::Bool(b) => write!(f, "Bool({b})"),
            Atom::Str(s) => write!(f, "Str({s:?})"),
            Atom::Seq(items) => f.debug_tuple("Seq").field(&**items).finish(),
            Atom::Lazy(seq) => write!(f, "{seq:?}"),
            Atom::Vertex(v) => write!(f, "Vertex({v:?})"),
            Atom::Graph(_) => write!(f, "Graph(..)"),
            Atom::Null => write!(f, "Null"),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Str(s) => write!(f, "{s}"),
            other => write!(f, "{other:?}"),
        }
    }
}

impl From<PropertyValue> for Atom {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Str(s) => Atom::str(s),
            PropertyValue::Int(n) => Atom::Int(n),
            PropertyValue::Float(n) => Atom::Float(n),
            PropertyValue::Bool(b) => Atom::Bool(b),
        }
    }
}
