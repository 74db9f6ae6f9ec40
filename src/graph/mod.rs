//! Core graph implementation
//!
//! This module implements an identifier-indexed property graph with:
//! - Nodes and directed edges carrying caller-defined property payloads
//! - Independent, monotonic id allocation for nodes and edges
//! - Append-only adjacency, one entry per ordered node pair
//! - Breadth-first search gated by shallow-equality filters on edges and nodes

pub mod edge;
pub mod id_gen;
pub mod node;
pub mod property;
pub mod shallow;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{AdjacencyEntry, Edge};
pub use id_gen::IdAllocator;
pub use node::Node;
pub use property::{MergeProperties, PropertyMap, PropertyValue};
pub use shallow::ShallowEq;
pub use store::{GraphError, GraphResult, GraphStatistics, GraphStore, SearchMatch};
pub use types::{EdgeId, IdKind, NodeId};
