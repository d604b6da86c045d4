//! # Network Module
//!
//! Typed passing network of one team.
//!
//! - `player` - Player nodes, pass edges, lineup and position records
//! - `node_link` - Stored node-link graph layout
//! - `team_graph` - Validated, immutable `TeamGraph`

pub mod node_link;
pub mod player;
pub mod team_graph;

pub use node_link::{NodeLinkEdge, NodeLinkGraph, NodeLinkNode};
pub use player::{Lineup, LineupEntry, PassEdge, PlayerNode, PositionRecord};
pub use team_graph::{TeamGraph, TeamGraphBuilder};
