//! Prefix index built from graph primitives
//!
//! Every trie vertex is a graph node carrying a [`Vertex`] payload, and every
//! transition is an edge labelled with a [`Transition`]. Lookups walk one
//! character at a time, locating each transition with a breadth-first search
//! filtered on the edge payload.

use super::vertex::{Transition, Vertex, VertexPatch};
use super::{TrieError, TrieResult};
use crate::config::{IndexConfig, PrefixMissPolicy};
use crate::graph::{GraphStore, NodeId};
use tracing::{debug, trace};

/// Character trie stored as a graph
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    graph: GraphStore<Vertex, Transition>,
    config: IndexConfig,
}

impl PrefixIndex {
    /// Create an index with the default configuration
    pub fn new() -> TrieResult<Self> {
        Self::with_config(IndexConfig::default())
    }

    /// Create an index and its root vertex
    pub fn with_config(config: IndexConfig) -> TrieResult<Self> {
        config.validate()?;
        let mut graph = GraphStore::new();
        graph.add_node(Vertex::new(config.root_char, false))?;
        Ok(PrefixIndex { graph, config })
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Read-only view of the underlying graph
    pub fn graph(&self) -> &GraphStore<Vertex, Transition> {
        &self.graph
    }

    /// Insert `word`, reusing every transition that already exists
    ///
    /// Returns `true` when the word was not a key before. The empty word is
    /// ignored.
    pub fn add_key(&mut self, word: &str) -> TrieResult<bool> {
        let word = self.normalize(word);
        if word.is_empty() {
            debug!("Ignored empty key");
            return Ok(false);
        }

        let mut current = self.root()?;
        for ch in word.chars() {
            current = match self.find_transition(current, ch) {
                Some(next) => next,
                None => {
                    let next = self.graph.add_node(Vertex::new(ch, false))?;
                    self.graph.add_relation(current, next, Transition::new(ch))?;
                    next
                }
            };
        }

        let was_key = self.is_key(current);
        self.graph.update_node_by_key(current, VertexPatch::mark_key());
        debug!("Indexed key {:?} at {}", word, current);
        Ok(!was_key)
    }

    /// Every stored key that starts with `prefix`
    ///
    /// Keys are reported depth-first, siblings in insertion order, with the
    /// prefix itself first when it is a key. A prefix that walks off the trie
    /// is handled according to [`IndexConfig::prefix_miss`].
    pub fn get_keys_by_prefix(&self, prefix: &str) -> TrieResult<Vec<String>> {
        let prefix = self.normalize(prefix);
        let mut current = self.root()?;
        let mut matched = String::with_capacity(prefix.len());

        for ch in prefix.chars() {
            match self.find_transition(current, ch) {
                Some(next) => {
                    current = next;
                    matched.push(ch);
                }
                None => match self.config.prefix_miss {
                    PrefixMissPolicy::Empty => {
                        trace!("No transition for {:?} after {:?}", ch, matched);
                        return Ok(Vec::new());
                    }
                    PrefixMissPolicy::AncestorFallback => {
                        trace!("Falling back to {:?} for prefix {:?}", matched, prefix);
                        break;
                    }
                },
            }
        }

        let mut keys = Vec::new();
        if self.is_key(current) {
            keys.push(matched.clone());
        }
        self.collect_keys_below(current, &matched, &mut keys);
        Ok(keys)
    }

    /// Exact membership test
    pub fn contains_key(&self, word: &str) -> TrieResult<bool> {
        let word = self.normalize(word);
        if word.is_empty() {
            return Ok(false);
        }

        let mut current = self.root()?;
        for ch in word.chars() {
            match self.find_transition(current, ch) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(self.is_key(current))
    }

    /// Number of distinct keys stored
    pub fn key_count(&self) -> usize {
        self.graph.nodes().filter(|v| v.properties.is_key).count()
    }

    /// Number of trie vertices, root included
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    fn normalize(&self, word: &str) -> String {
        if self.config.lowercase_keys {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    fn root(&self) -> TrieResult<NodeId> {
        let root = Vertex::new(self.config.root_char, false);
        self.graph
            .get_node(|node| node.properties == root)
            .map(|node| node.id)
            .ok_or(TrieError::RootMissing {
                root_char: self.config.root_char,
            })
    }

    fn is_key(&self, id: NodeId) -> bool {
        self.graph
            .get_node_by_key(id)
            .is_some_and(|node| node.properties.is_key)
    }

    /// Child of `from` reached by consuming `ch`
    ///
    /// Hits come back in frontier order, so the first one is always a direct
    /// child of `from` if any child matches.
    ///
    /// The search still walks every vertex reachable through `ch`-labelled
    /// transitions before the first hit is taken. Along a run of one repeated
    /// letter that is the rest of the run, so inserting or looking up such a
    /// key is quadratic in its length.
    fn find_transition(&self, from: NodeId, ch: char) -> Option<NodeId> {
        self.graph
            .breadth_first_search(from, Some(&Transition::new(ch)), None)
            .first()
            .map(|hit| hit.end.id)
    }

    /// Depth-first walk below `from`, appending every key found
    fn collect_keys_below(&self, from: NodeId, base: &str, keys: &mut Vec<String>) {
        let mut stack: Vec<(NodeId, String)> = Vec::new();
        self.push_children(from, base, &mut stack);

        while let Some((id, path)) = stack.pop() {
            if self.is_key(id) {
                keys.push(path.clone());
            }
            self.push_children(id, &path, &mut stack);
        }
    }

    fn push_children(&self, id: NodeId, path: &str, stack: &mut Vec<(NodeId, String)>) {
        let Some(children) = self.graph.get_close_nodes(id, None) else {
            return;
        };
        // Reversed so the first inserted child is popped first
        for child in children.into_iter().rev() {
            let mut next = String::with_capacity(path.len() + child.properties.ch.len_utf8());
            next.push_str(path);
            next.push(child.properties.ch);
            stack.push((child.id, next));
        }
    }
}
