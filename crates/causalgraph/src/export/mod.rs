//! Export module for handing graphs and discovery results to other tools.
//!
//! - **JSON**: `nodes`/`links` graph documents and search result lists

pub mod json;

pub use json::{export_graph_json, export_report_json, export_results_json};
