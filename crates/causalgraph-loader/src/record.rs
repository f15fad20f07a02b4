//! Serialized shapes of dataset entries.
//!
//! A graph document is `{"entities": [{"id", "type"}], "relations":
//! [{"source", "target", "type"}]}`. Missing lists are empty; an entity or
//! relation without `type` does not parse. A relation endpoint that is not
//! declared as an entity still becomes a node.

use causalgraph::{Edge, Graph, Node};
use log::debug;
use serde::{Deserialize, Serialize};

/// Type given to a relation endpoint no document declares.
pub const UNDECLARED_ENTITY_TYPE: &str = "Entity";

/// One entity of a graph document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity identifier
    pub id: String,

    /// Entity type tag
    #[serde(rename = "type")]
    pub entity_type: String,
}

/// One relation of a graph document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// Source entity identifier
    pub source: String,

    /// Target entity identifier
    pub target: String,

    /// Relation type tag
    #[serde(rename = "type")]
    pub relation_type: String,
}

/// A graph document: entities plus relations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Nodes
    #[serde(default)]
    pub entities: Vec<EntityRecord>,

    /// Directed edges
    #[serde(default)]
    pub relations: Vec<RelationRecord>,
}

impl GraphRecord {
    /// Build the graph this document describes.
    ///
    /// Entities are added first, then relations, so later duplicates
    /// overwrite earlier ones. Undeclared relation endpoints become nodes of
    /// type [`UNDECLARED_ENTITY_TYPE`].
    pub fn to_graph(&self) -> Graph {
        self.to_graph_resolving(&GraphRecord::default())
    }

    /// Like [`Self::to_graph`], but an undeclared endpoint takes its type from
    /// `other` when `other` declares it.
    ///
    /// Used for the news graph of a contract, so an entity the contract
    /// declares keeps its type after composition.
    pub fn to_graph_resolving(&self, other: &GraphRecord) -> Graph {
        let mut graph = Graph::from_parts(
            self.entities
                .iter()
                .map(|e| Node::new(e.id.as_str(), e.entity_type.as_str())),
            self.relations.iter().map(|r| {
                Edge::new(
                    r.source.as_str(),
                    r.target.as_str(),
                    r.relation_type.as_str(),
                )
            }),
        );

        for relation in &self.relations {
            for id in [&relation.source, &relation.target] {
                // left for validation to report
                if id.trim().is_empty() || graph.contains_node(id) {
                    continue;
                }
                let entity_type = other.entity_type(id).unwrap_or(UNDECLARED_ENTITY_TYPE);
                debug!("Adding undeclared endpoint {id} as {entity_type}");
                graph.add_node(id.as_str(), entity_type);
            }
        }

        graph
    }

    /// Declared type of entity `id`; the last declaration wins.
    pub fn entity_type(&self, id: &str) -> Option<&str> {
        self.entities
            .iter()
            .rev()
            .find(|e| e.id == id)
            .map(|e| e.entity_type.as_str())
    }

    /// Total number of entities and relations
    pub fn element_count(&self) -> usize {
        self.entities.len() + self.relations.len()
    }
}

impl From<&GraphRecord> for Graph {
    fn from(record: &GraphRecord) -> Self {
        record.to_graph()
    }
}

impl From<&Graph> for GraphRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            entities: graph
                .nodes()
                .map(|n| EntityRecord {
                    id: n.id.clone(),
                    entity_type: n.node_type.clone(),
                })
                .collect(),
            relations: graph
                .edges()
                .map(|e| RelationRecord {
                    source: e.source_id.clone(),
                    target: e.target_id.clone(),
                    relation_type: e.edge_type.clone(),
                })
                .collect(),
        }
    }
}

/// One dataset entry: a contract with its graph and the related news graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Contract identifier
    #[serde(default)]
    pub contract_id: String,

    /// Human-readable title
    #[serde(default)]
    pub title: String,

    /// Raw contract text
    #[serde(default)]
    pub contract_text: String,

    /// Structured contract graph
    #[serde(default)]
    pub base_graph: GraphRecord,

    /// Graph of the news sequence related to the contract
    #[serde(default)]
    pub news_sequence: GraphRecord,
}
