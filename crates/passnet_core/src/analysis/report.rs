//! Per-team and per-match analysis reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::centrality::{compute, CentralityScores, Histogram, Measure};
use crate::config::AnalysisConfig;
use crate::coordinates::{PitchPoint, Venue};
use crate::error::{CentralityError, Result};
use crate::network::{PositionRecord, TeamGraph};

use super::match_record::MatchRecord;

/// Result of one centrality measure for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MeasureOutcome {
    Available { scores: CentralityScores, histogram: Histogram },
    Unavailable { reason: String },
}

impl MeasureOutcome {
    pub fn scores(&self) -> Option<&CentralityScores> {
        match self {
            MeasureOutcome::Available { scores, .. } => Some(scores),
            MeasureOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MeasureOutcome::Available { .. })
    }
}

/// Mean positions of the players in each half.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AveragePositions {
    /// Mean of players with x >= 60
    pub attacking: Option<PitchPoint>,
    /// Mean of players with x < 60
    pub defensive: Option<PitchPoint>,
}

impl AveragePositions {
    pub fn from_points<I: IntoIterator<Item = PitchPoint>>(points: I) -> Self {
        let (mut att, mut def) = ((0.0, 0.0, 0usize), (0.0, 0.0, 0usize));
        for p in points {
            let acc = if p.in_attacking_half() { &mut att } else { &mut def };
            acc.0 += p.x;
            acc.1 += p.y;
            acc.2 += 1;
        }

        let mean = |(sx, sy, n): (f64, f64, usize)| {
            (n > 0).then(|| PitchPoint::new(sx / n as f64, sy / n as f64))
        };
        Self { attacking: mean(att), defensive: mean(def) }
    }
}

/// Everything the dashboard shows for one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    pub team: String,
    pub coach: String,
    pub venue: Venue,
    pub players: usize,
    pub connections: usize,
    pub total_passes: u64,
    pub average_positions: AveragePositions,
    pub measures: BTreeMap<Measure, MeasureOutcome>,
}

impl TeamAnalysis {
    pub fn measure(&self, measure: Measure) -> Option<&MeasureOutcome> {
        self.measures.get(&measure)
    }

    pub fn scores(&self, measure: Measure) -> Option<&CentralityScores> {
        self.measure(measure).and_then(MeasureOutcome::scores)
    }
}

/// Analysis of both teams of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub home: TeamAnalysis,
    pub away: TeamAnalysis,
}

impl MatchAnalysis {
    pub fn team(&self, venue: Venue) -> &TeamAnalysis {
        match venue {
            Venue::Home => &self.home,
            Venue::Away => &self.away,
        }
    }
}

/// Run every measure over `graph`.
///
/// A measure that fails to converge is recorded as unavailable; the others
/// are still computed. Average positions cover every record in `positions`,
/// including players who are not nodes of `graph`.
pub fn analyze_team(
    graph: &TeamGraph,
    positions: &[PositionRecord],
    team: &str,
    coach: &str,
    venue: Venue,
    cfg: &AnalysisConfig,
) -> TeamAnalysis {
    let measures = Measure::ALL
        .into_iter()
        .map(|measure| {
            let outcome = match compute(graph, measure, &cfg.centrality) {
                Ok(scores) => {
                    let histogram = scores.histogram(cfg.histogram_bins);
                    MeasureOutcome::Available { scores, histogram }
                }
                Err(err @ CentralityError::NotConverged { .. }) => {
                    warn!("{} ({}): {} unavailable: {}", team, venue, measure, err);
                    MeasureOutcome::Unavailable { reason: err.to_string() }
                }
                Err(err) => MeasureOutcome::Unavailable { reason: err.to_string() },
            };
            (measure, outcome)
        })
        .collect();

    TeamAnalysis {
        team: team.to_string(),
        coach: coach.to_string(),
        venue,
        players: graph.node_count(),
        connections: graph.edge_count(),
        total_passes: graph.total_passes(),
        average_positions: AveragePositions::from_points(
            positions.iter().map(PositionRecord::point),
        ),
        measures,
    }
}

/// Build both team graphs of `record` and analyse them side by side.
pub fn analyze_match(record: &MatchRecord, cfg: &AnalysisConfig) -> Result<MatchAnalysis> {
    let home_graph = record.team_graph(Venue::Home)?;
    let away_graph = record.team_graph(Venue::Away)?;

    let home_side = record.side(Venue::Home);
    let away_side = record.side(Venue::Away);
    let (home, away) = rayon::join(
        || {
            analyze_team(
                &home_graph,
                home_side.positions,
                home_side.name,
                home_side.coach,
                Venue::Home,
                cfg,
            )
        },
        || {
            analyze_team(
                &away_graph,
                away_side.positions,
                away_side.name,
                away_side.coach,
                Venue::Away,
                cfg,
            )
        },
    );

    info!(
        "Analysed {} vs {}: {} and {} players",
        record.home, record.away, home.players, away.players
    );
    Ok(MatchAnalysis { home, away })
}
