//! The in-memory directed graph.

use super::types::{Direction, Edge, Node, NodeId};
use crate::error::{GraphError, Result};
use indexmap::{IndexMap, IndexSet};
use log::trace;

/// An in-memory directed graph of typed nodes and typed edges.
///
/// Nodes are keyed by identifier. Edges are keyed by `(source, target)`, so
/// inserting a second edge between the same endpoints overwrites its relation
/// type. Both adjacency directions are indexed, which keeps undirected
/// traversal over the directed structure cheap.
///
/// All maps preserve insertion order; iteration and neighbor order are
/// therefore deterministic for a given construction sequence.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    // source -> target -> edge
    adjacency_out: IndexMap<NodeId, IndexMap<NodeId, Edge>>,
    // target -> sources
    adjacency_in: IndexMap<NodeId, IndexSet<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from nodes and edges, applying the overwrite rules in order.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = Node>,
        E: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.insert_node(node);
        }
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Add a node, or overwrite the type of an existing one.
    pub fn add_node(&mut self, id: impl Into<NodeId>, node_type: impl Into<String>) {
        self.insert_node(Node::new(id, node_type));
    }

    /// Insert a node value, overwriting any node with the same ID.
    pub fn insert_node(&mut self, node: Node) {
        trace!("Adding node: id={}, type={}", node.id, node.node_type);
        self.nodes.insert(node.id.clone(), node);
    }

    /// Add a directed edge, or overwrite the relation type of an existing one.
    ///
    /// Endpoints are not required to exist as nodes. Such an edge is kept,
    /// but traversal never steps onto the missing endpoint.
    pub fn add_edge(
        &mut self,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        edge_type: impl Into<String>,
    ) {
        self.insert_edge(Edge::new(source_id, target_id, edge_type));
    }

    /// Insert an edge value, overwriting any edge with the same endpoints.
    pub fn insert_edge(&mut self, edge: Edge) {
        trace!(
            "Adding edge: source={}, target={}, type={}",
            edge.source_id,
            edge.target_id,
            edge.edge_type
        );
        self.adjacency_in
            .entry(edge.target_id.clone())
            .or_default()
            .insert(edge.source_id.clone());

        let previous = self
            .adjacency_out
            .entry(edge.source_id.clone())
            .or_default()
            .insert(edge.target_id.clone(), edge);

        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    /// Add every node and edge of `other`; `other`'s attributes win on conflict.
    pub fn merge(&mut self, other: &Graph) {
        for node in other.nodes() {
            self.insert_node(node.clone());
        }
        for edge in other.edges() {
            self.insert_edge(edge.clone());
        }
    }

    /// Get a node by ID.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get the type tag of a node.
    pub fn node_type(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.node_type.as_str())
    }

    /// Check whether a node exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the edge from `source_id` to `target_id`, if any.
    pub fn edge(&self, source_id: &str, target_id: &str) -> Option<&Edge> {
        self.adjacency_out
            .get(source_id)
            .and_then(|targets| targets.get(target_id))
    }

    /// Relation type of the edge `source_id -> target_id`, if any.
    pub fn edge_type_between(&self, source_id: &str, target_id: &str) -> Option<&str> {
        self.edge(source_id, target_id).map(|e| e.edge_type.as_str())
    }

    /// Check whether an edge `source_id -> target_id` exists.
    pub fn contains_edge(&self, source_id: &str, target_id: &str) -> bool {
        self.edge(source_id, target_id).is_some()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over all node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Iterate over all edges, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency_out.values().flat_map(|targets| targets.values())
    }

    /// Get neighbor node IDs in the specified direction.
    ///
    /// Outgoing targets come first, then incoming sources, each in insertion
    /// order and without duplicates. Endpoints that are not nodes of this
    /// graph are skipped. Unknown IDs have no neighbors.
    pub fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        if !self.nodes.contains_key(id) {
            return Vec::new();
        }

        let mut neighbors: IndexSet<&str> = IndexSet::new();

        if matches!(direction, Direction::Outgoing | Direction::Both) {
            if let Some(targets) = self.adjacency_out.get(id) {
                neighbors.extend(targets.keys().map(String::as_str));
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            if let Some(sources) = self.adjacency_in.get(id) {
                neighbors.extend(sources.iter().map(String::as_str));
            }
        }

        neighbors
            .into_iter()
            .filter(|n| self.nodes.contains_key(*n))
            .collect()
    }

    /// Number of edges pointing at `id`.
    pub fn in_degree(&self, id: &str) -> usize {
        self.adjacency_in.get(id).map_or(0, IndexSet::len)
    }

    /// Number of edges leaving `id`.
    pub fn out_degree(&self, id: &str) -> usize {
        self.adjacency_out.get(id).map_or(0, IndexMap::len)
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edge_count == 0
    }

    /// Check the structural invariants the search relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedNode`] for an empty node ID and
    /// [`GraphError::MalformedEdge`] for an edge with an empty endpoint or an
    /// empty relation type. Edges whose endpoints are simply absent from the
    /// node map are accepted.
    pub fn validate(&self) -> Result<()> {
        for node in self.nodes() {
            if node.id.trim().is_empty() {
                return Err(GraphError::MalformedNode {
                    node_id: node.id.clone(),
                    message: "node id is empty".to_string(),
                });
            }
        }

        for edge in self.edges() {
            if edge.source_id.trim().is_empty() || edge.target_id.trim().is_empty() {
                return Err(GraphError::malformed_edge(
                    &edge.source_id,
                    &edge.target_id,
                    "endpoint id is empty",
                ));
            }
            if edge.edge_type.trim().is_empty() {
                return Err(GraphError::malformed_edge(
                    &edge.source_id,
                    &edge.target_id,
                    "relation type is empty",
                ));
            }
        }

        Ok(())
    }

    /// Create a new query builder for this graph.
    pub fn query(&self) -> crate::query::QueryBuilder<'_> {
        crate::query::QueryBuilder::new(self)
    }

    // ===== Reasoning Methods =====

    /// Node IDs shared with `other`. See [`crate::reasoning::bridge_nodes`].
    pub fn bridge_nodes(&self, other: &Graph) -> crate::reasoning::BridgeSet {
        crate::reasoning::bridge_nodes(self, other)
    }

    /// Union with `other`. See [`super::compose`].
    pub fn compose(&self, other: &Graph) -> Graph {
        super::compose(self, other)
    }

    /// Render a path through this graph. See [`crate::reasoning::format_chain`].
    pub fn format_path<S: AsRef<str>>(&self, path: &[S]) -> String {
        crate::reasoning::format_chain(path, self)
    }
}
