//! Analysis configuration.
//!
//! Every section has defaults matching the dashboard's behaviour, so an
//! empty document (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::subgraph::MAX_SELECTION;

/// Which shortest-path direction closeness centrality measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosenessDirection {
    /// Distances from every other player to the scored player
    Incoming,
    /// Distances from the scored player to every other player
    Outgoing,
}

/// Configuration for centrality computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CentralityConfig {
    /// PageRank damping factor (default: 0.85)
    pub damping: f64,
    /// Per-node convergence tolerance for power iteration (default: 1e-6)
    pub tolerance: f64,
    /// Iteration cap for eigenvector and PageRank (default: 100)
    pub max_iterations: usize,
    /// Closeness path direction (default: incoming)
    pub closeness_direction: ClosenessDirection,
    /// Use pass counts as edge weights in eigenvector and PageRank.
    /// Betweenness and closeness always count hops.
    pub weighted: bool,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 1.0e-6,
            max_iterations: 100,
            closeness_direction: ClosenessDirection::Incoming,
            weighted: false,
        }
    }
}

/// Configuration for the substitution view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionConfig {
    /// Minimum pass count for an edge to be drawn (default: 6)
    pub min_passes: u32,
    /// Maximum number of selected players per team (default: 11)
    pub max_selection: usize,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self { min_passes: 6, max_selection: 11 }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub centrality: CentralityConfig,
    pub substitution: SubstitutionConfig,
    /// Histogram bins per centrality distribution (default: 5)
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            centrality: CentralityConfig::default(),
            substitution: SubstitutionConfig::default(),
            histogram_bins: 5,
        }
    }
}

impl AnalysisConfig {
    /// Parse from JSON and validate bounds.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML and validate bounds.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let c = &self.centrality;
        // Negated comparisons also reject NaN
        if !(c.damping > 0.0 && c.damping < 1.0) {
            return Err(ConfigError::Validation(format!(
                "centrality.damping must be in (0, 1), got {}",
                c.damping
            )));
        }
        if !(c.tolerance > 0.0 && c.tolerance.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "centrality.tolerance must be positive and finite, got {}",
                c.tolerance
            )));
        }
        if c.max_iterations == 0 {
            return Err(ConfigError::Validation(
                "centrality.max_iterations must be at least 1".to_string(),
            ));
        }

        let max_selection = self.substitution.max_selection;
        if !(1..=MAX_SELECTION).contains(&max_selection) {
            return Err(ConfigError::Validation(format!(
                "substitution.max_selection must be 1-{}, got {}",
                MAX_SELECTION, max_selection
            )));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::Validation("histogram_bins must be at least 1".to_string()));
        }
        Ok(())
    }
}
