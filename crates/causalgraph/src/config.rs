//! Search configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of nodes a candidate path may hold before it is abandoned.
pub const DEFAULT_MAX_PATH_LEN: usize = 10;

/// Node types that terminate a causal chain.
pub const DEFAULT_TARGET_TYPES: [&str; 8] = [
    "Risk",
    "RiskCondition",
    "FinancialCondition",
    "Obligation",
    "Penalty",
    "Condition",
    "Prohibition",
    "Product",
];

/// Node types used when no node of a primary target type exists.
pub const DEFAULT_FALLBACK_TARGET_TYPES: [&str; 1] = ["Company"];

/// Configuration for causal path discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Paths longer than this (in nodes) are not expanded further.
    /// A found path can hold one more node than this.
    pub max_path_len: usize,

    /// Types accepted as chain terminus
    pub target_types: Vec<String>,

    /// Types accepted when the composite graph holds no primary target.
    /// Empty disables the fallback.
    pub fallback_target_types: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN,
            target_types: DEFAULT_TARGET_TYPES.iter().map(|t| t.to_string()).collect(),
            fallback_target_types: DEFAULT_FALLBACK_TARGET_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

impl SearchConfig {
    /// Create config without the `Company` fallback
    pub fn strict() -> Self {
        Self {
            fallback_target_types: Vec::new(),
            ..Default::default()
        }
    }

    /// Set the hop bound
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    /// Replace the primary target types
    pub fn with_target_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the fallback target types
    pub fn with_fallback_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_target_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Reject configurations the search cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the hop bound is zero or no
    /// primary target type is given.
    pub fn validate(&self) -> Result<()> {
        if self.max_path_len == 0 {
            return Err(GraphError::InvalidConfig {
                message: "max_path_len must be at least 1".to_string(),
            });
        }
        if self.target_types.is_empty() {
            return Err(GraphError::InvalidConfig {
                message: "at least one target type is required".to_string(),
            });
        }
        Ok(())
    }
}
