//! Path rendering.
//!
//! The search ignores edge direction, so each hop is resolved against the
//! composite graph to show whether it follows or opposes the stored edge.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// How a hop relates to the stored edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HopDirection {
    /// Edge `from -> to` exists
    Forward,
    /// Only edge `to -> from` exists
    Backward,
    /// No edge between the two nodes
    Unknown,
}

/// One step of a rendered chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    /// Node the hop leaves
    pub from: String,
    /// Node the hop reaches
    pub to: String,
    /// Direction relative to the stored edge
    pub direction: HopDirection,
    /// Relation type, `None` when `direction` is `Unknown`
    pub relation: Option<String>,
}

impl Hop {
    /// Render the connector between `from` and `to`.
    fn connector(&self) -> String {
        match (self.direction, self.relation.as_deref()) {
            (HopDirection::Forward, Some(rel)) => format!("--({rel})-->"),
            (HopDirection::Backward, Some(rel)) => format!("<--({rel})--"),
            _ => "--(?)--".to_string(),
        }
    }
}

/// Resolve each consecutive pair of `path` against `graph`.
///
/// A forward edge is preferred when edges exist in both directions.
pub fn resolve_hops<S: AsRef<str>>(path: &[S], graph: &Graph) -> Vec<Hop> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            let (direction, relation) = if let Some(edge) = graph.edge(from, to) {
                (HopDirection::Forward, Some(edge.edge_type.clone()))
            } else if let Some(edge) = graph.edge(to, from) {
                (HopDirection::Backward, Some(edge.edge_type.clone()))
            } else {
                (HopDirection::Unknown, None)
            };
            Hop {
                from: from.to_string(),
                to: to.to_string(),
                direction,
                relation,
            }
        })
        .collect()
}

/// Render a path as an annotated chain.
///
/// `Storm_Z --(hits)--> Region_Y <--(located_in)-- Factory_F`
///
/// An empty path renders as an empty string, a single node as its ID.
pub fn format_chain<S: AsRef<str>>(path: &[S], graph: &Graph) -> String {
    let Some(first) = path.first() else {
        return String::new();
    };

    let mut output = first.as_ref().to_string();
    for hop in resolve_hops(path, graph) {
        output.push(' ');
        output.push_str(&hop.connector());
        output.push(' ');
        output.push_str(&hop.to);
    }
    output
}
