pub mod json_api;

pub use json_api::{
    analyze_match_json, centrality_json, substitution_view_json, AnalysisRequest, ApiError,
    ApiResponse, MeasureRequest, SubstitutionRequest, API_VERSION,
};
