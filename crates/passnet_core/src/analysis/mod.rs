//! # Analysis Module
//!
//! Match-level analysis built on the network, centrality and subgraph
//! modules.
//!
//! - `match_record` - Stored match document and per-side team graphs
//! - `report` - Team/match reports with per-measure availability

pub mod match_record;
pub mod report;

pub use match_record::{MatchRecord, TeamSide};
pub use report::{
    analyze_match, analyze_team, AveragePositions, MatchAnalysis, MeasureOutcome, TeamAnalysis,
};
