//! Cross-domain causal reasoning.
//!
//! - [`bridge_nodes`]: entities shared by the contract graph and the event graph
//! - [`discover`]: bounded bidirectional BFS from an event to risk-typed nodes
//! - [`format_chain`]: human-readable rendering of a discovered path
//!
//! All functions are pure. Absence of a causal link is reported as an empty
//! value, never as an error.

mod bridge;
mod format;
mod search;

pub use bridge::{bridge_nodes, BridgeSet};
pub use format::{format_chain, resolve_hops, Hop, HopDirection};
pub use search::{
    discover, discover_composed, discover_report, discover_with_config, resolve_targets,
    CausalPath, DiscoveryReport, DiscoveryStatus, SearchResult, TargetSelection,
};
