//! # causalgraph
//!
//! Causal chain discovery between an event graph (news) and a contract graph
//! (risks, obligations, penalties) through the entities both graphs share.
//!
//! ## Core Principles
//!
//! - **Loader Agnostic**: Bring your own records, we handle the graph
//! - **Absence Is Normal**: "No causal link" is an empty result, not an error
//! - **Bounded Work**: Every search stops at a fixed hop bound, even on cycles
//! - **Zero Magic**: Explicit over implicit, always
//!
//! ## Architecture
//!
//! ```text
//! Loader (records -> Graph)
//!     ↓
//! BridgeDetector (shared entities)
//!     ↓
//! GraphComposer (base ∪ news)
//!     ↓
//! CausalPathFinder (bounded bidirectional BFS)
//!     ↓
//! PathFormatter (annotated chains)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use causalgraph::{bridge_nodes, discover, format_chain, compose, Graph};
//!
//! let mut base = Graph::new();
//! base.add_node("Supplier_A", "Entity");
//! base.add_node("Product_Risk", "Risk");
//! base.add_edge("Supplier_A", "Product_Risk", "affects");
//!
//! let mut news = Graph::new();
//! news.add_node("Storm_Z", "Event");
//! news.add_node("Supplier_A", "Entity");
//! news.add_edge("Storm_Z", "Supplier_A", "disrupts");
//!
//! assert!(!bridge_nodes(&base, &news).is_empty());
//!
//! let results = discover(&base, &news, "Storm_Z").unwrap();
//! let composite = compose(&base, &news);
//! assert_eq!(
//!     format_chain(results[0].path.nodes(), &composite),
//!     "Storm_Z --(disrupts)--> Supplier_A --(affects)--> Product_Risk"
//! );
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod query;
pub mod reasoning;

// Re-export main types
pub use config::SearchConfig;
pub use error::{GraphError, Result};
pub use graph::{compose, CompositeGraph, Direction, Edge, Graph, Node, NodeId};
pub use query::QueryBuilder;
pub use reasoning::{
    bridge_nodes, discover, discover_composed, discover_report, discover_with_config,
    format_chain, resolve_hops, resolve_targets, BridgeSet, CausalPath, DiscoveryReport,
    DiscoveryStatus, Hop, HopDirection, SearchResult, TargetSelection,
};
