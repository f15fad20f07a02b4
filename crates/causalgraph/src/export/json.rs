//! JSON export for persistence and summarization layers.
//!
//! Graphs are written as `nodes` and `links` arrays, the shape expected by
//! graph stores and force-directed layouts alike.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::reasoning::{format_chain, DiscoveryReport, SearchResult};
use serde_json::{json, Value};

/// Export a graph to a JSON document with `nodes` and `links` arrays.
pub fn export_graph_json(graph: &Graph) -> Result<String> {
    let nodes: Vec<Value> = graph
        .nodes()
        .map(|node| json!({ "id": node.id, "type": node.node_type }))
        .collect();

    let links: Vec<Value> = graph
        .edges()
        .map(|edge| {
            json!({
                "source": edge.source_id,
                "target": edge.target_id,
                "type": edge.edge_type,
            })
        })
        .collect();

    to_pretty(&json!({ "nodes": nodes, "links": links }))
}

/// Export search results, each with its chain rendered against `composite`.
pub fn export_results_json(results: &[SearchResult], composite: &Graph) -> Result<String> {
    let entries: Vec<Value> = results
        .iter()
        .map(|result| {
            json!({
                "target": result.target,
                "path": result.path,
                "length": result.length,
                "chain": format_chain(result.path.nodes(), composite),
            })
        })
        .collect();

    to_pretty(&Value::Array(entries))
}

/// Export a full discovery report.
pub fn export_report_json(report: &DiscoveryReport) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| GraphError::serialization("Failed to serialize report", Some(e)))
}

fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GraphError::serialization("Failed to serialize JSON", Some(e)))
}
