//! Causal path discovery: bounded bidirectional breadth-first search.
//!
//! The search walks the composite graph ignoring edge direction, so it can
//! follow propagation forward ("storm hits region") as well as backward
//! ("factory located-in country", reached from the country). Nodes are marked
//! visited when enqueued, so every node is reached by at most one path: the
//! first breadth-first, hence shortest by hop count.

use super::bridge::{bridge_nodes, BridgeSet};
use crate::config::SearchConfig;
use crate::error::{GraphError, Result};
use crate::graph::{compose, CompositeGraph, Direction, Graph, NodeId};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// An ordered, non-empty sequence of distinct node IDs.
///
/// The first element is the start node, the last one a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>")]
pub struct CausalPath(Vec<NodeId>);

#[allow(clippy::len_without_is_empty)]
impl CausalPath {
    /// Wrap a node sequence. Returns `None` for an empty sequence or one that
    /// repeats a node.
    pub fn new(nodes: Vec<NodeId>) -> Option<Self> {
        Self::try_from(nodes).ok()
    }

    /// The node IDs in order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// First node of the chain.
    pub fn start(&self) -> &str {
        &self.0[0]
    }

    /// Last node of the chain.
    pub fn end(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Number of nodes (not edges).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the chain passes through `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|n| n == id)
    }

    /// Take the node IDs out.
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.0
    }
}

impl TryFrom<Vec<NodeId>> for CausalPath {
    type Error = GraphError;

    fn try_from(nodes: Vec<NodeId>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(GraphError::malformed_path("path is empty"));
        }
        let repeated = {
            let mut seen = HashSet::with_capacity(nodes.len());
            nodes.iter().find(|n| !seen.insert(n.as_str())).cloned()
        };
        if let Some(repeated) = repeated {
            return Err(GraphError::malformed_path(format!(
                "node {repeated} appears more than once"
            )));
        }
        Ok(Self(nodes))
    }
}

impl From<CausalPath> for Vec<NodeId> {
    fn from(path: CausalPath) -> Self {
        path.0
    }
}

/// A discovered chain from the start node to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SearchResultRecord")]
pub struct SearchResult {
    /// Node the chain ends at
    pub target: NodeId,
    /// The chain itself
    pub path: CausalPath,
    /// Node count of `path`
    pub length: usize,
}

impl SearchResult {
    fn from_path(path: CausalPath) -> Self {
        Self {
            target: path.end().to_string(),
            length: path.len(),
            path,
        }
    }
}

// Serialized form, checked against the path before use.
#[derive(Deserialize)]
struct SearchResultRecord {
    target: NodeId,
    path: CausalPath,
    length: usize,
}

impl TryFrom<SearchResultRecord> for SearchResult {
    type Error = GraphError;

    fn try_from(record: SearchResultRecord) -> Result<Self> {
        if record.target != record.path.end() {
            return Err(GraphError::malformed_path(format!(
                "target {} is not the last node of the path",
                record.target
            )));
        }
        if record.length != record.path.len() {
            return Err(GraphError::malformed_path(format!(
                "length {} does not match a path of {} nodes",
                record.length,
                record.path.len()
            )));
        }
        Ok(Self::from_path(record.path))
    }
}

/// Which target type set the search ran with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetSelection {
    /// Risk, obligation and similar contract-level types
    Primary,
    /// The fallback set, used when no primary type occurs in the graph
    Fallback,
}

impl TargetSelection {
    /// The type tags this selection accepts under `config`.
    pub fn types<'c>(&self, config: &'c SearchConfig) -> &'c [String] {
        match self {
            TargetSelection::Primary => &config.target_types,
            TargetSelection::Fallback => &config.fallback_target_types,
        }
    }
}

/// Why a discovery produced the results it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryStatus {
    /// At least one chain was found
    Found,
    /// Targets exist but none is reachable within the hop bound
    NoPath,
    /// The start node is not part of the composite graph
    StartAbsent,
    /// No node of a target type (primary or fallback) exists
    NoTargets,
}

/// Discovery results together with diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// The requested start node
    pub start: NodeId,
    /// Outcome classification
    pub status: DiscoveryStatus,
    /// Entities shared by the two input graphs
    pub bridges: BridgeSet,
    /// Target type set in effect, if any
    pub selection: Option<TargetSelection>,
    /// Chains sorted by ascending length
    pub results: Vec<SearchResult>,
}

/// Pick the target type set for `composite`.
///
/// Primary types win if any node carries one; otherwise the fallback types
/// are used if any node carries one of those. `None` means nothing can be a
/// target.
pub fn resolve_targets(
    composite: &CompositeGraph,
    config: &SearchConfig,
) -> Option<TargetSelection> {
    if composite.query().node_types(&config.target_types).exists() {
        Some(TargetSelection::Primary)
    } else if composite
        .query()
        .node_types(&config.fallback_target_types)
        .exists()
    {
        Some(TargetSelection::Fallback)
    } else {
        None
    }
}

/// Discover causal chains from `start` using the default configuration.
///
/// Composes `base` and `news` and searches from `start` to every node of a
/// target type. A missing start node, a graph without targets and an
/// unreachable target all yield `Ok` with an empty list.
///
/// Callers are expected to check [`bridge_nodes`] first; this function does
/// not special-case an empty bridge set.
///
/// # Errors
///
/// Returns a structural error if either graph fails [`Graph::validate`].
pub fn discover(base: &Graph, news: &Graph, start: &str) -> Result<Vec<SearchResult>> {
    discover_with_config(base, news, start, &SearchConfig::default())
}

/// Discover causal chains from `start` with an explicit configuration.
///
/// # Errors
///
/// Returns [`crate::GraphError::InvalidConfig`] for an unusable config and a
/// structural error if either graph fails [`Graph::validate`].
pub fn discover_with_config(
    base: &Graph,
    news: &Graph,
    start: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    let composite = prepare(base, news, config)?;
    let (_, _, results) = run(&composite, start, config);
    Ok(results)
}

/// Discover causal chains in a graph that is already composed.
///
/// Same as [`discover_with_config`] for callers that keep the composite
/// around, e.g. to render the chains afterwards.
///
/// # Errors
///
/// Returns [`crate::GraphError::InvalidConfig`] for an unusable config and a
/// structural error if `composite` fails [`Graph::validate`].
pub fn discover_composed(
    composite: &CompositeGraph,
    start: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    config.validate()?;
    composite.validate()?;
    let (_, _, results) = run(composite, start, config);
    Ok(results)
}

/// Discover causal chains and report why the result looks the way it does.
///
/// Unlike [`discover`], this distinguishes a missing start node from a
/// search that found nothing.
///
/// # Errors
///
/// Same as [`discover_with_config`].
pub fn discover_report(
    base: &Graph,
    news: &Graph,
    start: &str,
    config: &SearchConfig,
) -> Result<DiscoveryReport> {
    let composite = prepare(base, news, config)?;
    let (status, selection, results) = run(&composite, start, config);

    Ok(DiscoveryReport {
        start: start.to_string(),
        status,
        bridges: bridge_nodes(base, news),
        selection,
        results,
    })
}

fn prepare(base: &Graph, news: &Graph, config: &SearchConfig) -> Result<CompositeGraph> {
    config.validate()?;
    base.validate()?;
    news.validate()?;
    Ok(compose(base, news))
}

fn run(
    composite: &CompositeGraph,
    start: &str,
    config: &SearchConfig,
) -> (DiscoveryStatus, Option<TargetSelection>, Vec<SearchResult>) {
    let Some(start_node) = composite.node(start) else {
        debug!("Start node {start} not in composite graph");
        return (DiscoveryStatus::StartAbsent, None, Vec::new());
    };

    let Some(selection) = resolve_targets(composite, config) else {
        debug!("No target-typed nodes in composite graph");
        return (DiscoveryStatus::NoTargets, None, Vec::new());
    };
    let target_types = selection.types(config);

    let paths = bounded_bfs(
        composite,
        &start_node.id,
        |id| {
            composite
                .node(id)
                .is_some_and(|node| node.has_type(target_types))
        },
        config.max_path_len,
    );

    let mut results: Vec<SearchResult> = paths.into_iter().map(SearchResult::from_path).collect();
    results.sort_by_key(|r| r.length);

    debug!(
        "Discovery from {start}: {} chains ({selection:?} targets)",
        results.len()
    );

    let status = if results.is_empty() {
        DiscoveryStatus::NoPath
    } else {
        DiscoveryStatus::Found
    };
    (status, Some(selection), results)
}

// One entry per visited node; parent points back into the arena.
#[derive(Clone, Copy)]
struct Visit<'g> {
    id: &'g str,
    parent: Option<usize>,
    len: usize,
}

/// Breadth-first search over both edge directions.
///
/// A target other than `start` ends its branch. A branch already holding
/// more than `max_path_len` nodes is not expanded.
fn bounded_bfs<'g, F>(
    graph: &'g Graph,
    start: &'g str,
    is_target: F,
    max_path_len: usize,
) -> Vec<CausalPath>
where
    F: Fn(&str) -> bool,
{
    let mut arena = vec![Visit {
        id: start,
        parent: None,
        len: 1,
    }];
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut frontier = VecDeque::from([0usize]);
    let mut found = Vec::new();

    while let Some(index) = frontier.pop_front() {
        let Visit { id, len, .. } = arena[index];

        if id != start && is_target(id) {
            trace!("Target reached: {id} at length {len}");
            found.push(index);
            continue;
        }

        if len > max_path_len {
            trace!("Abandoning branch at {id}: length {len} exceeds bound");
            continue;
        }

        for neighbor in graph.neighbors(id, Direction::Both) {
            if visited.insert(neighbor) {
                arena.push(Visit {
                    id: neighbor,
                    parent: Some(index),
                    len: len + 1,
                });
                frontier.push_back(arena.len() - 1);
            }
        }
    }

    trace!("Search from {start} visited {} nodes", arena.len());

    found
        .into_iter()
        .filter_map(|index| CausalPath::new(rebuild_path(&arena, index)))
        .collect()
}

fn rebuild_path(arena: &[Visit<'_>], mut index: usize) -> Vec<NodeId> {
    let mut nodes = vec![arena[index].id.to_string()];
    while let Some(parent) = arena[index].parent {
        nodes.push(arena[parent].id.to_string());
        index = parent;
    }
    nodes.reverse();
    nodes
}
