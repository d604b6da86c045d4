//! Stored match document.

use serde::{Deserialize, Serialize};

use crate::coordinates::Venue;
use crate::error::GraphError;
use crate::network::{Lineup, NodeLinkGraph, PositionRecord, TeamGraph};

/// One match as delivered by storage: both passing networks, average
/// positions, lineups and coaches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub home: String,
    #[serde(default)]
    pub away: String,
    pub home_graph: NodeLinkGraph,
    pub away_graph: NodeLinkGraph,
    #[serde(default)]
    pub home_pos: Vec<PositionRecord>,
    #[serde(default)]
    pub away_pos: Vec<PositionRecord>,
    #[serde(default)]
    pub lineup_home: Lineup,
    #[serde(default)]
    pub lineup_away: Lineup,
    #[serde(default)]
    pub coach_home: String,
    #[serde(default)]
    pub coach_away: String,
}

/// Borrowed view of one side of a match record.
#[derive(Debug, Clone, Copy)]
pub struct TeamSide<'a> {
    pub venue: Venue,
    pub name: &'a str,
    pub coach: &'a str,
    pub graph: &'a NodeLinkGraph,
    pub positions: &'a [PositionRecord],
    pub lineup: &'a Lineup,
}

impl MatchRecord {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn side(&self, venue: Venue) -> TeamSide<'_> {
        match venue {
            Venue::Home => TeamSide {
                venue,
                name: &self.home,
                coach: &self.coach_home,
                graph: &self.home_graph,
                positions: &self.home_pos,
                lineup: &self.lineup_home,
            },
            Venue::Away => TeamSide {
                venue,
                name: &self.away,
                coach: &self.coach_away,
                graph: &self.away_graph,
                positions: &self.away_pos,
                lineup: &self.lineup_away,
            },
        }
    }

    /// Build the validated team graph of one side.
    pub fn team_graph(&self, venue: Venue) -> Result<TeamGraph, GraphError> {
        let side = self.side(venue);
        TeamGraph::from_node_link(side.graph, side.lineup, side.positions)
    }
}
