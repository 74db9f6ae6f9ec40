//! Graphtrie
//!
//! An in-memory, identifier-indexed property graph with a filtered
//! breadth-first search, and a prefix index (trie) built entirely out of graph
//! primitives.
//!
//! # Layout
//!
//! - [`graph`]: node and edge arenas, adjacency, shallow-equality filters and
//!   the filtered reachability search
//! - [`trie`]: character trie where each vertex is a node and each transition
//!   an edge
//! - [`config`]: serde-backed configuration for the prefix index
//!
//! ## Example Usage
//!
//! ```rust
//! use graphtrie::graph::{GraphStore, PropertyMap};
//! use graphtrie::props;
//!
//! let mut store: GraphStore<PropertyMap, PropertyMap> = GraphStore::new();
//! let a = store.add_node(props! { "key" => "A" }).unwrap();
//! let b = store.add_node(props! { "key" => "B" }).unwrap();
//! let c = store.add_node(props! { "key" => "C" }).unwrap();
//!
//! store.add_relation(a, b, props! { "weight" => 5i64 }).unwrap();
//! store.add_relation(a, c, props! { "weight" => 10i64 }).unwrap();
//!
//! let hits = store.breadth_first_search(a, Some(&props! { "weight" => 5i64 }), None);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].end.id, b);
//! ```
//!
//! ```rust
//! use graphtrie::PrefixIndex;
//!
//! let mut index = PrefixIndex::new().unwrap();
//! for word in ["a", "apple", "banana", "barbarian"] {
//!     index.add_key(word).unwrap();
//! }
//! assert_eq!(index.get_keys_by_prefix("a").unwrap(), vec!["a", "apple"]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod trie;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, IndexConfig, PrefixMissPolicy};
pub use graph::{
    Edge, EdgeId, GraphError, GraphResult, GraphStatistics, GraphStore, Node, NodeId,
    PropertyMap, PropertyValue, SearchMatch, ShallowEq,
};
pub use trie::{PrefixIndex, TrieError, TrieResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
