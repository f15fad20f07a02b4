//! Bridge node detection.

use crate::graph::{Graph, NodeId};
use std::collections::BTreeSet;

/// Node IDs present in both graphs.
pub type BridgeSet = BTreeSet<NodeId>;

/// Find the entities shared by the contract graph and the event graph.
///
/// An empty set means no cross-domain inference is possible; callers are
/// expected to skip the search rather than treat it as a failure.
pub fn bridge_nodes(base: &Graph, news: &Graph) -> BridgeSet {
    let (smaller, larger) = if base.node_count() <= news.node_count() {
        (base, news)
    } else {
        (news, base)
    };

    smaller
        .node_ids()
        .filter(|id| larger.contains_node(id))
        .map(str::to_string)
        .collect()
}
