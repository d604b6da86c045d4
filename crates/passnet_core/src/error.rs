use thiserror::Error;

use crate::centrality::Measure;

/// Failure to assemble a `TeamGraph` from stored match data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Edge {from} -> {to} references unknown player '{missing}'")]
    UnknownPlayer { from: String, to: String, missing: String },

    #[error("Edge {from} -> {to} has non-positive pass count {weight}")]
    NonPositiveWeight { from: String, to: String, weight: i64 },

    #[error("Player '{0}' appears more than once in the node list")]
    DuplicatePlayer(String),

    #[error("Unsupported graph layout: {0}")]
    UnsupportedLayout(String),
}

impl GraphError {
    /// Malformed graphs are fatal for the match they belong to.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CentralityError {
    #[error("Unsupported centrality measure: {0}")]
    UnsupportedMeasure(String),

    #[error("{measure} did not converge within {iterations} iterations")]
    NotConverged { measure: Measure, iterations: usize },
}

impl CentralityError {
    /// A non-converged measure is shown as unavailable; the rest of the
    /// analysis carries on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CentralityError::UnsupportedMeasure(_) => false,
            CentralityError::NotConverged { .. } => true,
        }
    }
}

/// Analysis configuration outside its valid bounds.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Malformed graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Centrality error: {0}")]
    Centrality(#[from] CentralityError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
