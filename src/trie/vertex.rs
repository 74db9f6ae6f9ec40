//! Trie payloads stored in the graph

use crate::graph::{MergeProperties, ShallowEq};
use serde::{Deserialize, Serialize};

/// Payload of a trie vertex: the character it adds and whether the path to it
/// spells a complete key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(rename = "char")]
    pub ch: char,
    #[serde(rename = "isKey")]
    pub is_key: bool,
}

impl Vertex {
    pub fn new(ch: char, is_key: bool) -> Self {
        Vertex { ch, is_key }
    }
}

impl ShallowEq for Vertex {
    fn shallow_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Partial update of a [`Vertex`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexPatch {
    pub ch: Option<char>,
    pub is_key: Option<bool>,
}

impl VertexPatch {
    /// Patch that marks a vertex as the end of a key
    pub fn mark_key() -> Self {
        VertexPatch {
            ch: None,
            is_key: Some(true),
        }
    }
}

impl MergeProperties for Vertex {
    type Patch = VertexPatch;

    fn merge(&mut self, patch: VertexPatch) {
        if let Some(ch) = patch.ch {
            self.ch = ch;
        }
        if let Some(is_key) = patch.is_key {
            self.is_key = is_key;
        }
    }
}

/// Payload of a trie edge: the character consumed by the transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub to: char,
}

impl Transition {
    pub fn new(to: char) -> Self {
        Transition { to }
    }
}

impl ShallowEq for Transition {
    fn shallow_eq(&self, other: &Self) -> bool {
        self == other
    }
}
