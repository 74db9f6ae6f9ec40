//! Edge record and adjacency entries for the property graph

use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph
///
/// Edges are created only by [`GraphStore::add_relation`](super::GraphStore::add_relation)
/// and are immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<E> {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Edge goes FROM this node
    pub start: NodeId,

    /// Edge goes TO this node
    pub end: NodeId,

    /// Properties associated with this edge
    pub properties: E,
}

impl<E> Edge<E> {
    pub fn new(id: EdgeId, start: NodeId, end: NodeId, properties: E) -> Self {
        Edge {
            id,
            start,
            end,
            properties,
        }
    }
}

impl<E> PartialEq for Edge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for Edge<E> {}

/// Cached `(edge, end)` pointer recorded under the start node
///
/// Derived from an [`Edge`]. At most one entry exists per ordered
/// `(start, end)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjacencyEntry {
    pub edge: EdgeId,
    pub start: NodeId,
    pub end: NodeId,
}

impl<E> From<&Edge<E>> for AdjacencyEntry {
    fn from(edge: &Edge<E>) -> Self {
        AdjacencyEntry {
            edge: edge.id,
            start: edge.start,
            end: edge.end,
        }
    }
}
