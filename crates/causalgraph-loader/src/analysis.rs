//! Per-contract analysis: the pipeline run for each dataset entry.

use crate::loader::ContractData;
use causalgraph::helpers::news_root_cause;
use causalgraph::{
    bridge_nodes, compose, discover_composed, format_chain, BridgeSet, NodeId, Result,
    SearchConfig, SearchResult,
};
use log::{debug, info};
use serde::Serialize;

/// Outcome of analyzing one contract against its news graph
#[derive(Debug, Clone, Serialize)]
pub struct ContractAnalysis {
    /// Contract identifier
    pub contract_id: String,
    /// Entities shared by the contract and news graphs
    pub bridges: BridgeSet,
    /// Node the search started from; `None` when the contract was skipped
    pub start: Option<NodeId>,
    /// Chains sorted by ascending length
    pub results: Vec<SearchResult>,
    /// `results` rendered against the composite graph, same order
    pub chains: Vec<String>,
}

impl ContractAnalysis {
    /// True when the graphs share no entity, so no search was run
    pub fn is_skipped(&self) -> bool {
        self.bridges.is_empty()
    }

    /// True when at least one chain was found
    pub fn has_chains(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Analyze one contract.
///
/// Computes the bridge entities first; a contract whose graphs share nothing
/// is returned without searching. Otherwise the news root cause is the start
/// node and every discovered chain is rendered.
///
/// # Errors
///
/// Propagates errors from [`discover_composed`].
pub fn analyze_contract(
    contract: &ContractData,
    config: &SearchConfig,
) -> Result<ContractAnalysis> {
    let bridges = bridge_nodes(&contract.base_graph, &contract.news_graph);
    let mut analysis = ContractAnalysis {
        contract_id: contract.contract_id.clone(),
        bridges,
        start: None,
        results: Vec::new(),
        chains: Vec::new(),
    };

    if analysis.is_skipped() {
        debug!("Skipping contract {}: no bridge entities", contract.contract_id);
        return Ok(analysis);
    }

    let Some(start) = news_root_cause(&contract.news_graph) else {
        return Ok(analysis);
    };

    let composite = compose(&contract.base_graph, &contract.news_graph);
    let results = discover_composed(&composite, &start, config)?;
    analysis.chains = results
        .iter()
        .map(|r| format_chain(r.path.nodes(), &composite))
        .collect();

    info!(
        "Contract {}: {} chains from {start}",
        contract.contract_id,
        results.len()
    );

    analysis.start = Some(start);
    analysis.results = results;
    Ok(analysis)
}
