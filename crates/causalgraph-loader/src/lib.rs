//! causalgraph loader
//!
//! Turns contract datasets into the graph pairs the causalgraph engine reasons
//! over.
//!
//! - **Records**: serde shapes of `entities` / `relations` graph documents
//! - **Loader**: reads a JSON array of contracts from disk
//! - **Analysis**: bridges, start node and discovered chains for one contract
//! - **Error handling**: file, parse and structural errors kept apart
//!
//! # Example
//!
//! ```rust,no_run
//! use causalgraph::SearchConfig;
//! use causalgraph_loader::{analyze_contract, DatasetLoader};
//!
//! let contracts = DatasetLoader::new("data/contracts_and_news.json").load().unwrap();
//! for contract in &contracts {
//!     let analysis = analyze_contract(contract, &SearchConfig::default()).unwrap();
//!     for chain in &analysis.chains {
//!         println!("{}: {chain}", contract.contract_id);
//!     }
//! }
//! ```

pub mod analysis;
pub mod errors;
pub mod loader;
pub mod record;

// Re-export commonly used types
pub use analysis::{analyze_contract, ContractAnalysis};
pub use errors::{LoaderError, LoaderResult};
pub use loader::{ContractData, DatasetLoader};
pub use record::{
    ContractRecord, EntityRecord, GraphRecord, RelationRecord, UNDECLARED_ENTITY_TYPE,
};
