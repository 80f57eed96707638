//! In-memory reference implementation of the [`Graph`] contract.

use rustc_hash::FxHashMap;

use crate::{Graph, GraphError, PropertyValue, VertexId};

/// Per-vertex storage.
#[derive(Clone, Debug, Default)]
struct VertexRecord {
    properties: FxHashMap<String, PropertyValue>,
    /// Outgoing edges as (label, target) pairs, in insertion order.
    out: Vec<(String, VertexId)>,
}

/// Simple in-memory property graph.
///
/// Vertices and edges are added up front; reads never mutate, so a
/// finished graph is safe to share across threads behind an `Arc`.
#[derive(Clone, Debug, Default)]
pub struct MemoryGraph {
    vertices: FxHashMap<VertexId, VertexRecord>,
    /// Insertion order of vertex ids, so `vertex_ids` is deterministic.
    order: Vec<VertexId>,
    next_id: u64,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with the given properties, returning its id.
    pub fn add_vertex<K, V, I>(&mut self, properties: I) -> VertexId
    where
        K: Into<String>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let id = VertexId::new(self.next_id);
        self.next_id += 1;
        let record = VertexRecord {
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            out: Vec::new(),
        };
        self.vertices.insert(id, record);
        self.order.push(id);
        id
    }

    /// Add a directed labeled edge.
    ///
    /// Both endpoints must already exist.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        label: impl Into<String>,
        to: VertexId,
    ) -> Result<(), GraphError> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::NoSuchVertex(to));
        }
        let record = self
            .vertices
            .get_mut(&from)
            .ok_or(GraphError::NoSuchVertex(from))?;
        record.out.push((label.into(), to));
        Ok(())
    }

    fn record(&self, v: VertexId) -> Result<&VertexRecord, GraphError> {
        self.vertices.get(&v).ok_or(GraphError::NoSuchVertex(v))
    }
}

impl Graph for MemoryGraph {
    fn vertex_ids(&self) -> Result<Vec<VertexId>, GraphError> {
        Ok(self.order.clone())
    }

    fn out(&self, v: VertexId) -> Result<Vec<VertexId>, GraphError> {
        Ok(self.record(v)?.out.iter().map(|(_, to)| *to).collect())
    }

    fn property(&self, v: VertexId, key: &str) -> Result<Option<PropertyValue>, GraphError> {
        Ok(self.record(v)?.properties.get(key).cloned())
    }
}
