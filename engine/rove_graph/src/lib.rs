//! Rove Graph - property-graph collaborator contract for the Rove engine.
//!
//! The evaluation core never defines graph storage; it consumes any
//! backend through the [`Graph`] trait. This crate provides:
//! - The trait itself plus the id and property types that cross it
//! - [`GraphError`], the failure type backends report
//! - [`MemoryGraph`], an in-memory reference implementation
//! - [`sample::modern`], the six-vertex fixture used by traversal tests
//!
//! # Thread Safety
//!
//! Implementations are read-only from the engine's perspective and must
//! be safe for concurrent reads (`Send + Sync`). The engine takes no
//! locks of its own.

mod memory;
pub mod sample;

use std::fmt;

pub use memory::MemoryGraph;

/// Identifier of a vertex within one graph.
///
/// Ids are opaque to the engine; only the owning graph can resolve them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a vertex id from a raw value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        VertexId(raw)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v[{}]", self.0)
    }
}

/// Scalar property value stored on a graph element.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(n: i64) -> Self {
        PropertyValue::Int(n)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Float(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

/// Failure reported by a graph backend.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id did not resolve in the queried graph.
    #[error("no such vertex: {0:?}")]
    NoSuchVertex(VertexId),
    /// The backend failed while serving a read.
    #[error("graph backend failure: {0}")]
    Backend(String),
}

/// Read contract between the evaluation engine and a graph backend.
///
/// `vertex_ids` and `out` return materialized id vectors; ids are cheap
/// `u64`s and the expensive per-element work (property loads, element
/// construction) stays lazy in the engine's sequence values.
pub trait Graph: Send + Sync {
    /// All vertex ids in the graph.
    fn vertex_ids(&self) -> Result<Vec<VertexId>, GraphError>;

    /// Ids of vertices reachable over one outgoing edge of `v`.
    ///
    /// Fails with [`GraphError::NoSuchVertex`] if `v` does not resolve.
    fn out(&self, v: VertexId) -> Result<Vec<VertexId>, GraphError>;

    /// Look up a property of `v`, `None` when the key is absent.
    ///
    /// Fails with [`GraphError::NoSuchVertex`] if `v` does not resolve.
    fn property(&self, v: VertexId, key: &str) -> Result<Option<PropertyValue>, GraphError>;
}
