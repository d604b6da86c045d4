//! # passnet_core - Football Passing-Network Analysis
//!
//! Passing networks are directed, weighted graphs: players are nodes and
//! pass counts between two players are edge weights. This library provides
//! the analytic core behind a match dashboard.
//!
//! ## Features
//! - Validated, immutable team graphs built from stored node-link data
//! - Betweenness, closeness, eigenvector and PageRank centrality
//! - Substitution subgraphs filtered by selection and minimum pass count
//! - Home/away pitch orientation for display coordinates
//! - JSON API for the presentation layer
//!
//! All operations are pure: inputs are passed explicitly and nothing is
//! cached between calls.
//!
//! ```
//! use passnet_core::{compute, CentralityConfig, Measure, PlayerNode, TeamGraph};
//!
//! let graph = TeamGraph::builder()
//!     .players(["A", "B", "C"].into_iter().map(PlayerNode::new))
//!     .pass("A", "B", 3)
//!     .pass("B", "C", 7)
//!     .pass("C", "A", 2)
//!     .build()
//!     .unwrap();
//!
//! let scores = compute(&graph, Measure::PageRank, &CentralityConfig::default()).unwrap();
//! assert!((scores.sum() - 1.0).abs() < 1e-9);
//! ```

// Doc formatting lints - purely cosmetic
#![allow(clippy::doc_lazy_continuation)]

pub mod analysis;
pub mod api;
pub mod centrality;
pub mod config;
pub mod coordinates;
pub mod error;
pub mod network;
pub mod subgraph;

pub use analysis::{
    analyze_match, analyze_team, AveragePositions, MatchAnalysis, MatchRecord, MeasureOutcome,
    TeamAnalysis,
};
pub use api::{analyze_match_json, centrality_json, substitution_view_json};
pub use centrality::{compute, compute_named, CentralityScores, Histogram, Measure};
pub use config::{AnalysisConfig, CentralityConfig, ClosenessDirection, SubstitutionConfig};
pub use coordinates::{to_display, PitchPoint, Venue, PITCH_LENGTH, PITCH_WIDTH};
pub use error::{AnalysisError, CentralityError, ConfigError, GraphError, Result};
pub use network::{Lineup, LineupEntry, NodeLinkGraph, PassEdge, PlayerNode, PositionRecord, TeamGraph};
pub use subgraph::{filter_subgraph, substitution_view, Selection, SubstitutionView, MAX_SELECTION};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
