//! Graph composition: the search space is the union of both input graphs.

use super::digraph::Graph;
use log::debug;

/// The union of a contract graph and an event graph.
pub type CompositeGraph = Graph;

/// Compose two graphs into one.
///
/// The result contains every node and edge of both inputs. When the same node
/// ID or the same `(source, target)` pair appears in both, `g2`'s type wins.
/// Neither input is modified.
pub fn compose(g1: &Graph, g2: &Graph) -> CompositeGraph {
    let mut composite = g1.clone();
    composite.merge(g2);
    debug!(
        "Composed graph: {} nodes, {} edges ({} + {} nodes in)",
        composite.node_count(),
        composite.edge_count(),
        g1.node_count(),
        g2.node_count()
    );
    composite
}
