//! In-memory graph storage
//!
//! Nodes and edges live in two arenas addressed by their dense identifiers.
//! Outgoing adjacency is kept per start node as an append-only list of
//! [`AdjacencyEntry`] values. Nothing is ever removed, so an identifier that was
//! handed out stays valid for the lifetime of the store.

use super::edge::{AdjacencyEntry, Edge};
use super::id_gen::IdAllocator;
use super::node::Node;
use super::property::MergeProperties;
use super::shallow::{accepts, ShallowEq};
use super::types::{EdgeId, IdKind, NodeId};
use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("{kind} identifier space exhausted")]
    IdSpaceExhausted { kind: IdKind },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// One hit of a filtered breadth-first search
///
/// Borrowed views of the start node, the reached node and the edge between
/// them.
#[derive(Debug)]
pub struct SearchMatch<'a, N, E> {
    pub start: &'a Node<N>,
    pub end: &'a Node<N>,
    pub edge: &'a Edge<E>,
}

impl<N, E> Clone for SearchMatch<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for SearchMatch<'_, N, E> {}

/// Summary counters for a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Number of adjacency entries across all start nodes
    pub adjacency_count: usize,
    /// Edge records no traversal can reach (duplicate relations)
    pub unreachable_edges: usize,
}

/// In-memory graph storage
///
/// - nodes: NodeId -> Node (arena slot == id)
/// - edges: EdgeId -> Edge (arena slot == id)
/// - adjacency: NodeId -> outgoing entries, `None` until the node first
///   appears as the start of a relation
///
/// Generic over the node payload `N` and the edge payload `E`. Filtering
/// operations require the payloads to implement [`ShallowEq`].
#[derive(Debug, Clone)]
pub struct GraphStore<N, E> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
    adjacency: Vec<Option<Vec<AdjacencyEntry>>>,
    node_ids: IdAllocator,
    edge_ids: IdAllocator,
}

impl<N, E> GraphStore<N, E> {
    /// Create a new empty graph store
    pub fn new() -> Self {
        GraphStore {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            node_ids: IdAllocator::new(IdKind::Node),
            edge_ids: IdAllocator::new(IdKind::Edge),
        }
    }

    /// Insert a node and return its freshly allocated id
    ///
    /// The payload is stored as given; later changes go through
    /// [`update_node_by_key`](Self::update_node_by_key).
    pub fn add_node(&mut self, properties: N) -> GraphResult<NodeId> {
        let id = NodeId::new(self.node_ids.next()?);
        self.nodes.push(Node::new(id, properties));
        self.adjacency.push(None);
        trace!("Added node {}", id);
        Ok(id)
    }

    /// Connect `start` to `end`
    ///
    /// Returns `Ok(None)` without touching anything when either endpoint is
    /// unknown. Otherwise an edge record is always created, but an adjacency
    /// entry is appended only when `start` has no entry targeting `end` yet.
    /// A repeated relation therefore yields an edge that no traversal will ever
    /// reach.
    pub fn add_relation(
        &mut self,
        start: NodeId,
        end: NodeId,
        properties: E,
    ) -> GraphResult<Option<EdgeId>> {
        if !self.has_node(start) || !self.has_node(end) {
            debug!("Skipped relation {} -> {}: unknown endpoint", start, end);
            return Ok(None);
        }

        let id = EdgeId::new(self.edge_ids.next()?);
        let edge = Edge::new(id, start, end, properties);
        let entry = AdjacencyEntry::from(&edge);
        self.edges.push(edge);

        let list = self.adjacency[slot(start.as_u64())].get_or_insert_with(Vec::new);
        if list.iter().any(|adj| adj.end == end) {
            debug!(
                "Relation {} -> {} already present; edge {} stays unreachable",
                start, end, id
            );
        } else {
            list.push(entry);
            trace!("Added edge {} ({} -> {})", id, start, end);
        }

        Ok(Some(id))
    }

    /// Connect `start` to `end` with an empty edge payload
    pub fn add_default_relation(
        &mut self,
        start: NodeId,
        end: NodeId,
    ) -> GraphResult<Option<EdgeId>>
    where
        E: Default,
    {
        self.add_relation(start, end, E::default())
    }

    /// Point lookup of a node
    pub fn get_node_by_key(&self, id: NodeId) -> Option<&Node<N>> {
        self.nodes.get(slot(id.as_u64()))
    }

    /// Point lookup of an edge
    pub fn get_edge_by_key(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(slot(id.as_u64()))
    }

    /// Check if a node exists
    pub fn has_node(&self, id: NodeId) -> bool {
        self.get_node_by_key(id).is_some()
    }

    /// First node, in insertion order, for which `predicate` holds
    ///
    /// Linear scan over the whole node table.
    pub fn get_node<F>(&self, mut predicate: F) -> Option<&Node<N>>
    where
        F: FnMut(&Node<N>) -> bool,
    {
        self.nodes.iter().find(|node| predicate(node))
    }

    /// Merge `patch` into the node's payload in place
    ///
    /// Returns `false`, changing nothing, when the node does not exist.
    pub fn update_node_by_key(&mut self, id: NodeId, patch: N::Patch) -> bool
    where
        N: MergeProperties,
    {
        match self.nodes.get_mut(slot(id.as_u64())) {
            Some(node) => {
                node.merge(patch);
                trace!("Updated node {}", id);
                true
            }
            None => false,
        }
    }

    /// Outgoing adjacency entries of a node
    ///
    /// `None` when the node has never been the start of a relation (or does
    /// not exist).
    pub fn adjacency(&self, id: NodeId) -> Option<&[AdjacencyEntry]> {
        self.adjacency
            .get(slot(id.as_u64()))
            .and_then(|list| list.as_deref())
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.nodes.iter()
    }

    /// All edge records in insertion order, reachable or not
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.edges.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of adjacency entries
    pub fn adjacency_count(&self) -> usize {
        self.adjacency.iter().flatten().map(Vec::len).sum()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let adjacency_count = self.adjacency_count();
        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            adjacency_count,
            unreachable_edges: self.edge_count() - adjacency_count,
        }
    }
}

impl<N: ShallowEq, E: ShallowEq> GraphStore<N, E> {
    /// Nodes one adjacency entry away from `id`
    ///
    /// With `where_node`, only neighbours whose payload is shallow-equal to the
    /// filter are returned. `None` when `id` has no adjacency list at all.
    pub fn get_close_nodes(&self, id: NodeId, where_node: Option<&N>) -> Option<Vec<&Node<N>>> {
        let entries = self.adjacency(id)?;
        Some(
            entries
                .iter()
                .filter_map(|entry| self.get_node_by_key(entry.end))
                .filter(|node| accepts(where_node, &node.properties))
                .collect(),
        )
    }

    /// Filtered breadth-first search from `id`
    ///
    /// The frontier starts as a copy of `id`'s adjacency list and is consumed
    /// in order. Each reached node is marked visited *before* the filters run,
    /// so the first entry to reach a node decides its fate even when that
    /// entry's edge does not match. A hit is recorded only when both filters
    /// accept (an absent filter accepts everything), and only a hit extends the
    /// frontier with the reached node's adjacency list.
    ///
    /// Matches come back in frontier order.
    pub fn breadth_first_search(
        &self,
        id: NodeId,
        where_edge: Option<&E>,
        where_node: Option<&N>,
    ) -> Vec<SearchMatch<'_, N, E>> {
        let mut checked = FxHashSet::default();
        checked.insert(id);

        let mut frontier: Vec<AdjacencyEntry> =
            self.adjacency(id).map(<[_]>::to_vec).unwrap_or_default();
        let mut found = Vec::new();
        let mut cursor = 0;

        while cursor < frontier.len() {
            let entry = frontier[cursor];
            cursor += 1;

            if !checked.insert(entry.end) {
                continue;
            }

            let Some(edge) = self.get_edge_by_key(entry.edge) else {
                continue;
            };
            let (Some(start), Some(end)) = (
                self.get_node_by_key(entry.start),
                self.get_node_by_key(entry.end),
            ) else {
                continue;
            };

            if !accepts(where_edge, &edge.properties) || !accepts(where_node, &end.properties) {
                trace!("Branch through {} stops at {}", edge.id, end.id);
                continue;
            }

            found.push(SearchMatch { start, end, edge });
            if let Some(next) = self.adjacency(entry.end) {
                frontier.extend_from_slice(next);
            }
        }

        found
    }
}

impl<N, E> Default for GraphStore<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena slot for an identifier
///
/// Identifiers past `usize::MAX` cannot be stored, so they map to a slot that
/// is guaranteed to be out of bounds.
fn slot(id: u64) -> usize {
    usize::try_from(id).unwrap_or(usize::MAX)
}
