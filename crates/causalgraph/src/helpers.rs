//! Convenience helpers for common entities and relations.
//!
//! Higher-level shortcuts over [`Graph`] for building event and contract
//! graphs by hand and for picking a search start node.

use crate::config::SearchConfig;
use crate::graph::{Direction, Graph, NodeId};
use crate::reasoning::resolve_targets;

/// Add an entity node to the graph.
///
/// # Arguments
///
/// * `graph` - The graph to add the entity to
/// * `id` - Entity identifier (e.g., "Supplier_A")
/// * `entity_type` - Type tag (e.g., "Company", "Risk")
pub fn add_entity(graph: &mut Graph, id: &str, entity_type: &str) -> NodeId {
    graph.add_node(id, entity_type);
    id.to_string()
}

/// Add a relation between two entities, creating or retyping both.
///
/// # Arguments
///
/// * `graph` - The graph
/// * `source` - `(id, type)` of the source entity
/// * `relation` - Relation type (e.g., "disrupts")
/// * `target` - `(id, type)` of the target entity
pub fn add_typed_relation(
    graph: &mut Graph,
    source: (&str, &str),
    relation: &str,
    target: (&str, &str),
) {
    graph.add_node(source.0, source.1);
    graph.add_node(target.0, target.1);
    graph.add_edge(source.0, target.0, relation);
}

/// Get neighbors of `id` connected through edges of type `relation`.
///
/// `Direction::Outgoing` follows `id -> n`, `Direction::Incoming` follows
/// `n -> id`, `Direction::Both` accepts either.
pub fn related_by(graph: &Graph, id: &str, relation: &str, direction: Direction) -> Vec<NodeId> {
    graph
        .neighbors(id, direction)
        .into_iter()
        .filter(|n| {
            let forward = matches!(direction, Direction::Outgoing | Direction::Both)
                && graph.edge(id, n).is_some_and(|e| e.edge_type == relation);
            let backward = matches!(direction, Direction::Incoming | Direction::Both)
                && graph.edge(n, id).is_some_and(|e| e.edge_type == relation);
            forward || backward
        })
        .map(str::to_string)
        .collect()
}

/// All nodes without incoming edges, in graph order.
pub fn root_causes(graph: &Graph) -> Vec<NodeId> {
    graph.query().roots().execute()
}

/// Pick the start node of a news graph.
///
/// The first node with no incoming edge is taken as the root cause; a graph
/// where every node has a predecessor falls back to its first node. Returns
/// `None` for an empty graph.
pub fn news_root_cause(graph: &Graph) -> Option<NodeId> {
    root_causes(graph)
        .into_iter()
        .next()
        .or_else(|| graph.node_ids().next().map(str::to_string))
}

/// Nodes a search over `graph` would accept as targets under `config`.
///
/// Follows the same primary/fallback selection as the search itself.
pub fn target_nodes(graph: &Graph, config: &SearchConfig) -> Vec<NodeId> {
    match resolve_targets(graph, config) {
        Some(selection) => graph.query().node_types(selection.types(config)).execute(),
        None => Vec::new(),
    }
}
