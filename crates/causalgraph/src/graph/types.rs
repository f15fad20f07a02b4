//! Core graph types: nodes, edges, IDs, and traversal direction.

use serde::{Deserialize, Serialize};

/// Identifier of a node. Unique within a graph and shared across graphs,
/// which is what makes bridge detection possible.
pub type NodeId = String;

/// Direction for neighbor queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing edges (from this node)
    Outgoing,
    /// Follow incoming edges (to this node)
    Incoming,
    /// Follow edges in both directions, outgoing first
    Both,
}

/// A node in a graph.
///
/// The type is a free-form tag such as `"Risk"`, `"Event"` or `"Company"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Entity type tag
    #[serde(rename = "type")]
    pub node_type: String,
}

impl Node {
    /// Create a new node.
    pub fn new(id: impl Into<NodeId>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
        }
    }

    /// Check whether the node's type is one of `types`.
    pub fn has_type<S: AsRef<str>>(&self, types: &[S]) -> bool {
        types.iter().any(|t| t.as_ref() == self.node_type)
    }
}

/// A directed edge in a graph.
///
/// At most one edge exists per `(source_id, target_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source node ID
    #[serde(rename = "source")]
    pub source_id: NodeId,
    /// Target node ID
    #[serde(rename = "target")]
    pub target_id: NodeId,
    /// Relation type tag (e.g. "hits", "disrupts")
    #[serde(rename = "type")]
    pub edge_type: String,
}

impl Edge {
    /// Create a new edge.
    pub fn new(
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        edge_type: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            edge_type: edge_type.into(),
        }
    }
}
