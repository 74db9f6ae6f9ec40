//! Node record for the property graph

use super::property::MergeProperties;
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// A node in the property graph
///
/// The payload is owned exclusively by the node. It is replaced only through
/// a partial merge; nodes are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node<N> {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Properties associated with this node
    pub properties: N,
}

impl<N> Node<N> {
    pub fn new(id: NodeId, properties: N) -> Self {
        Node { id, properties }
    }

    pub(crate) fn merge(&mut self, patch: N::Patch)
    where
        N: MergeProperties,
    {
        self.properties.merge(patch);
    }
}

impl<N> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N> Eq for Node<N> {}

impl<N> std::hash::Hash for Node<N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyMap;
    use crate::props;

    #[test]
    fn test_node_merge() {
        let mut node = Node::new(NodeId::new(4), props! { "name" => "Alice" });
        node.merge(props! { "age" => 30i64 });

        assert_eq!(node.properties.len(), 2);
        assert_eq!(node.properties.get("age").unwrap().as_integer(), Some(30));
    }

    #[test]
    fn test_node_equality_is_by_id() {
        let node1 = Node::new(NodeId::new(7), props! { "name" => "a" });
        let node2 = Node::new(NodeId::new(7), props! { "name" => "b" });
        let node3 = Node::new(NodeId::new(8), PropertyMap::new());

        assert_eq!(node1, node2);
        assert_ne!(node1, node3);
    }
}
