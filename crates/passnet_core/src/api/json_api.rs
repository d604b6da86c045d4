//! JSON API for the dashboard layer
//!
//! Every entry point takes a JSON request string and returns a JSON
//! `ApiResponse` string; failures are reported inside the envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::analysis::{analyze_match, MatchAnalysis, MatchRecord};
use crate::centrality::{compute_named, CentralityScores};
use crate::config::AnalysisConfig;
use crate::coordinates::Venue;
use crate::error::{AnalysisError, CentralityError};
use crate::subgraph::{substitution_view, Selection, SubstitutionView};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

pub mod error_codes {
    pub const INVALID_JSON: &str = "INVALID_JSON";
    pub const MALFORMED_GRAPH: &str = "MALFORMED_GRAPH";
    pub const UNSUPPORTED_MEASURE: &str = "UNSUPPORTED_MEASURE";
    pub const NOT_CONVERGED: &str = "NOT_CONVERGED";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }
}

impl From<&AnalysisError> for ApiError {
    fn from(err: &AnalysisError) -> Self {
        let code = match err {
            AnalysisError::Graph(_) => error_codes::MALFORMED_GRAPH,
            AnalysisError::Centrality(CentralityError::UnsupportedMeasure(_)) => {
                error_codes::UNSUPPORTED_MEASURE
            }
            AnalysisError::Centrality(CentralityError::NotConverged { .. }) => {
                error_codes::NOT_CONVERGED
            }
            AnalysisError::Config(_) => error_codes::INVALID_CONFIG,
            AnalysisError::Json(_) | AnalysisError::Yaml(_) => error_codes::INVALID_JSON,
        };
        Self::new(code, &err.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn respond<T: Serialize>(result: Result<T, AnalysisError>) -> String {
    match result {
        Ok(data) => ApiResponse::success(data).to_json(),
        Err(err) => {
            error!("Request failed: {}", err);
            ApiResponse::<T>::error(ApiError::from(&err)).to_json()
        }
    }
}

/// Full analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "match")]
    pub record: MatchRecord,
    #[serde(default)]
    pub config: AnalysisConfig,
}

/// Single-measure request, addressed by measure name
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureRequest {
    #[serde(rename = "match")]
    pub record: MatchRecord,
    pub venue: Venue,
    pub measure: String,
    #[serde(default)]
    pub config: AnalysisConfig,
}

/// Substitution view request
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionRequest {
    #[serde(rename = "match")]
    pub record: MatchRecord,
    pub venue: Venue,
    /// Selected players; the lineup's starters when absent
    #[serde(default)]
    pub players: Option<Vec<String>>,
    /// Minimum passes per drawn edge; the configured default when absent
    #[serde(default)]
    pub min_passes: Option<u32>,
    #[serde(default)]
    pub config: AnalysisConfig,
}

/// Analyse both teams of a match.
///
/// # Returns
/// JSON string containing `ApiResponse<MatchAnalysis>`
pub fn analyze_match_json(request_json: &str) -> String {
    debug!("Processing analysis request");
    respond(run_analysis(request_json))
}

fn run_analysis(request_json: &str) -> Result<MatchAnalysis, AnalysisError> {
    let request: AnalysisRequest = serde_json::from_str(request_json)?;
    request.config.validate()?;
    analyze_match(&request.record, &request.config)
}

/// Compute one named centrality measure for one team.
///
/// # Returns
/// JSON string containing `ApiResponse<CentralityScores>`
pub fn centrality_json(request_json: &str) -> String {
    debug!("Processing centrality request");
    respond(run_centrality(request_json))
}

fn run_centrality(request_json: &str) -> Result<CentralityScores, AnalysisError> {
    let request: MeasureRequest = serde_json::from_str(request_json)?;
    request.config.validate()?;
    let graph = request.record.team_graph(request.venue)?;
    Ok(compute_named(&graph, &request.measure, &request.config.centrality)?)
}

/// Build the substitution view of one team.
///
/// # Returns
/// JSON string containing `ApiResponse<SubstitutionView>`
pub fn substitution_view_json(request_json: &str) -> String {
    debug!("Processing substitution request");
    respond(run_substitution(request_json))
}

fn run_substitution(request_json: &str) -> Result<SubstitutionView, AnalysisError> {
    let request: SubstitutionRequest = serde_json::from_str(request_json)?;
    request.config.validate()?;
    let graph = request.record.team_graph(request.venue)?;
    let limit = request.config.substitution.max_selection;
    let selection = match &request.players {
        Some(players) => Selection::with_limit(players, limit),
        None => Selection::with_limit(request.record.side(request.venue).lineup.starters(), limit),
    };
    let min_passes = request.min_passes.unwrap_or(request.config.substitution.min_passes);
    Ok(substitution_view(&graph, request.venue, &selection, min_passes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::sample_match_json;
    use serde_json::{json, Value};

    fn request(extra: Value) -> String {
        let mut body = json!({ "match": serde_json::from_str::<Value>(&sample_match_json()).unwrap() });
        if let (Some(obj), Some(more)) = (body.as_object_mut(), extra.as_object()) {
            for (k, v) in more {
                obj.insert(k.clone(), v.clone());
            }
        }
        body.to_string()
    }

    #[test]
    fn test_analyze_match_json_success() {
        let out: Value = serde_json::from_str(&analyze_match_json(&request(json!({})))).unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["schema_version"], API_VERSION);
        assert_eq!(out["data"]["home"]["team"], "Flamengo");
        assert_eq!(out["data"]["home"]["measures"]["pagerank"]["status"], "available");
        assert!(out["data"]["away"]["measures"]["betweenness"]["scores"]["Vitão"].is_number());
    }

    #[test]
    fn test_invalid_json() {
        let out: Value = serde_json::from_str(&analyze_match_json("{not json")).unwrap();
        assert_eq!(out["success"], false);
        assert_eq!(out["error"]["code"], error_codes::INVALID_JSON);
    }

    #[test]
    fn test_malformed_graph_code() {
        let mut body: Value = serde_json::from_str(&request(json!({}))).unwrap();
        body["match"]["home_graph"]["links"][0]["source"] = json!("D");
        let out: Value = serde_json::from_str(&analyze_match_json(&body.to_string())).unwrap();
        assert_eq!(out["error"]["code"], error_codes::MALFORMED_GRAPH);
    }

    #[test]
    fn test_out_of_range_config_code() {
        let out: Value = serde_json::from_str(&analyze_match_json(&request(
            json!({"config": {"centrality": {"damping": 1.5}}}),
        )))
        .unwrap();
        assert_eq!(out["success"], false);
        assert_eq!(out["error"]["code"], error_codes::INVALID_CONFIG);

        let out: Value = serde_json::from_str(&substitution_view_json(&request(json!({
            "venue": "home",
            "config": {"substitution": {"max_selection": 30}}
        }))))
        .unwrap();
        assert_eq!(out["error"]["code"], error_codes::INVALID_CONFIG);
        assert!(out["error"]["message"].as_str().unwrap().contains("max_selection"));
    }

    #[test]
    fn test_centrality_json_by_name() {
        let out: Value = serde_json::from_str(&centrality_json(&request(
            json!({"venue": "home", "measure": "closeness centrality"}),
        )))
        .unwrap();
        assert_eq!(out["success"], true);
        assert_eq!(out["data"].as_object().unwrap().len(), 4);

        let out: Value = serde_json::from_str(&centrality_json(&request(
            json!({"venue": "home", "measure": "katz centrality"}),
        )))
        .unwrap();
        assert_eq!(out["error"]["code"], error_codes::UNSUPPORTED_MEASURE);
    }

    #[test]
    fn test_substitution_defaults_to_starters() {
        let out: Value = serde_json::from_str(&substitution_view_json(&request(
            json!({"venue": "home"}),
        )))
        .unwrap();
        assert_eq!(out["success"], true);
        let players = out["data"]["graph"]["players"].as_array().unwrap();
        assert_eq!(players.len(), 3);
        // Rossi -> Pulgar (8), Pulgar -> Arrascaeta (12), Arrascaeta -> Pulgar (7)
        assert_eq!(out["data"]["graph"]["passes"].as_array().unwrap().len(), 3);
        assert_eq!(out["data"]["min_passes"], 6);
    }

    #[test]
    fn test_substitution_with_explicit_players_away() {
        let out: Value = serde_json::from_str(&substitution_view_json(&request(json!({
            "venue": "away",
            "players": ["Vitão", "Alan Patrick", "Borré"],
            "min_passes": 5
        }))))
        .unwrap();
        let data = &out["data"];
        assert_eq!(data["graph"]["players"].as_array().unwrap().len(), 2);
        assert_eq!(data["graph"]["passes"].as_array().unwrap().len(), 1);
        // Vitão at (30, 35) is drawn at (90, 45) for the away side
        assert_eq!(data["display_positions"][0]["player"], "Vitão");
        assert_eq!(data["display_positions"][0]["position"]["x"], 90.0);
        assert_eq!(data["display_positions"][0]["position"]["y"], 45.0);
    }
}
