//! Dataset loading.

use crate::errors::{LoaderError, LoaderResult};
use crate::record::ContractRecord;
use causalgraph::Graph;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// A contract with both of its graphs built
#[derive(Debug, Clone)]
pub struct ContractData {
    /// Contract identifier
    pub contract_id: String,
    /// Human-readable title
    pub title: String,
    /// Raw contract text
    pub contract_text: String,
    /// Contract graph
    pub base_graph: Graph,
    /// News graph
    pub news_graph: Graph,
}

impl ContractData {
    /// Build both graphs of a record.
    ///
    /// Undeclared relation endpoints are typed from the other graph when it
    /// declares them.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Graph`] if either graph is structurally invalid.
    pub fn from_record(record: &ContractRecord) -> LoaderResult<Self> {
        let base_graph = record.base_graph.to_graph_resolving(&record.news_sequence);
        let news_graph = record.news_sequence.to_graph_resolving(&record.base_graph);
        base_graph.validate()?;
        news_graph.validate()?;

        debug!(
            "Built contract {}: base {} nodes / {} edges, news {} nodes / {} edges",
            record.contract_id,
            base_graph.node_count(),
            base_graph.edge_count(),
            news_graph.node_count(),
            news_graph.edge_count()
        );

        Ok(Self {
            contract_id: record.contract_id.clone(),
            title: record.title.clone(),
            contract_text: record.contract_text.clone(),
            base_graph,
            news_graph,
        })
    }
}

/// Loads a JSON array of contract records from a file
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Create a loader for the dataset at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw records without building graphs.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::NotFound`] if the file does not exist,
    /// [`LoaderError::Io`] if it cannot be read and [`LoaderError::Parse`]
    /// if it is not a JSON array of contract records.
    pub fn load_records(&self) -> LoaderResult<Vec<ContractRecord>> {
        if !self.path.exists() {
            return Err(LoaderError::NotFound(self.path.clone()));
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| LoaderError::Io(self.path.clone(), e))?;
        Self::parse(&content).map_err(|e| LoaderError::Parse(self.path.clone(), e))
    }

    /// Load every contract and build its graphs.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_records`], plus [`LoaderError::Graph`] for a
    /// structurally invalid graph.
    pub fn load(&self) -> LoaderResult<Vec<ContractData>> {
        let contracts = self
            .load_records()?
            .iter()
            .map(ContractData::from_record)
            .collect::<LoaderResult<Vec<_>>>()?;

        info!(
            "Successfully loaded {} contracts from {}",
            contracts.len(),
            self.path.display()
        );
        Ok(contracts)
    }

    /// Parse dataset JSON held in memory.
    pub fn parse(content: &str) -> Result<Vec<ContractRecord>, serde_json::Error> {
        serde_json::from_str(content)
    }
}
