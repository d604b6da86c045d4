//! Substitution subgraphs.
//!
//! When players are swapped in or out, the network is redrawn from the full
//! match graph restricted to the current selection, showing only the pass
//! links at or above a minimum count. Centrality is not recomputed here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::coordinates::{to_display, PitchPoint, Venue};
use crate::network::{Lineup, TeamGraph};

/// Maximum players selectable per team.
pub const MAX_SELECTION: usize = 11;

/// Ordered, de-duplicated set of selected player ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    players: Vec<String>,
}

impl Selection {
    /// Selection capped at [`MAX_SELECTION`] players.
    pub fn new<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_limit(players, MAX_SELECTION)
    }

    /// Keep the first `limit` distinct players; later ones are dropped.
    pub fn with_limit<I, S>(players: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();
        let mut dropped = 0usize;
        for player in players {
            let id = player.as_ref().trim();
            if !seen.insert(id.to_string()) {
                continue;
            }
            if selected.len() < limit {
                selected.push(id.to_string());
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!("Selection limited to {} players, dropped {}", limit, dropped);
        }
        Self { players: selected }
    }

    /// Default selection: the lineup's starters.
    pub fn starters(lineup: &Lineup) -> Self {
        Self::new(lineup.starters())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.iter().any(|p| p == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Restrict `graph` to the selected players, keeping only edges between them
/// with at least `min_passes` passes.
///
/// Node and edge order follow `graph`. Selected ids missing from `graph` are
/// ignored. Never fails.
pub fn filter_subgraph(graph: &TeamGraph, selection: &Selection, min_passes: u32) -> TeamGraph {
    let wanted: HashSet<&str> = selection.iter().collect();
    let sub = graph.retain(|p| wanted.contains(p.id.as_str()), |e| e.passes >= min_passes);

    debug!(
        "Filtered subgraph: {}/{} players, {}/{} edges (min {} passes)",
        sub.node_count(),
        graph.node_count(),
        sub.edge_count(),
        graph.edge_count(),
        min_passes
    );
    sub
}

/// Display position of one selected player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPosition {
    pub player: String,
    pub position: PitchPoint,
}

/// Filtered network plus venue-oriented coordinates, ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionView {
    pub venue: Venue,
    pub min_passes: u32,
    pub graph: TeamGraph,
    pub display_positions: Vec<DisplayPosition>,
}

/// Build the substitution view of one team.
///
/// Selected players without a recorded position are part of the graph but
/// get no display position.
pub fn substitution_view(
    graph: &TeamGraph,
    venue: Venue,
    selection: &Selection,
    min_passes: u32,
) -> SubstitutionView {
    let sub = filter_subgraph(graph, selection, min_passes);
    let display_positions = sub
        .players()
        .filter_map(|p| {
            p.position.map(|pos| DisplayPosition {
                player: p.id.clone(),
                position: to_display(pos, venue),
            })
        })
        .collect();

    SubstitutionView { venue, min_passes, graph: sub, display_positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::fixtures::triangle;
    use crate::network::{LineupEntry, PlayerNode};

    #[test]
    fn test_threshold_drops_light_edge() {
        let sub = filter_subgraph(&triangle(), &Selection::new(["A", "B"]), 5);
        assert_eq!(sub.player_ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn test_full_selection_keeps_all_edges() {
        let g = triangle();
        let sub = filter_subgraph(&g, &Selection::new(["A", "B", "C"]), 2);
        assert_eq!(sub.node_count(), 3);
        assert_eq!(sub.edges().collect::<Vec<_>>(), g.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let sub = filter_subgraph(&triangle(), &Selection::new(["A", "B", "C"]), 3);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![("A", "B", 3), ("B", "C", 7)]);
    }

    #[test]
    fn test_unknown_players_ignored() {
        let sub = filter_subgraph(&triangle(), &Selection::new(["A", "Zico", "C"]), 1);
        assert_eq!(sub.player_ids().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![("C", "A", 2)]);
    }

    #[test]
    fn test_empty_selection_gives_empty_graph() {
        let sub = filter_subgraph(&triangle(), &Selection::default(), 0);
        assert!(sub.is_empty());
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn test_filter_is_reproducible() {
        let g = triangle();
        let sel = Selection::new(["C", "A", "B"]);
        assert_eq!(filter_subgraph(&g, &sel, 3), filter_subgraph(&g, &sel, 3));
    }

    #[test]
    fn test_selection_caps_and_dedups() {
        let names: Vec<String> = (0..14).map(|i| format!("P{i}")).collect();
        let sel = Selection::new(names.iter().chain(std::iter::once(&names[0])));
        assert_eq!(sel.len(), MAX_SELECTION);
        assert!(sel.contains("P10"));
        assert!(!sel.contains("P11"));

        let sel = Selection::new(["A", " A", "B"]);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_selection_from_starters() {
        let lineup = Lineup::new(vec![
            LineupEntry { player: "Rossi".into(), titular: true },
            LineupEntry { player: "Bruno Henrique".into(), titular: false },
            LineupEntry { player: "Arrascaeta".into(), titular: true },
        ]);
        let sel = Selection::starters(&lineup);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["Rossi", "Arrascaeta"]);
    }

    #[test]
    fn test_view_orients_away_positions() {
        let g = TeamGraph::builder()
            .player(PlayerNode::new("GK").with_position(PitchPoint::new(10.0, 40.0)))
            .player(PlayerNode::new("CB").with_position(PitchPoint::new(30.0, 25.0)))
            .player(PlayerNode::new("ST"))
            .pass("GK", "CB", 9)
            .pass("CB", "ST", 2)
            .build()
            .unwrap();

        let view = substitution_view(&g, Venue::Away, &Selection::new(["GK", "CB", "ST"]), 6);
        assert_eq!(view.graph.edge_count(), 1);
        assert_eq!(
            view.display_positions,
            vec![
                DisplayPosition { player: "GK".into(), position: PitchPoint::new(110.0, 40.0) },
                DisplayPosition { player: "CB".into(), position: PitchPoint::new(90.0, 55.0) },
            ]
        );

        let home = substitution_view(&g, Venue::Home, &Selection::new(["CB"]), 6);
        assert_eq!(home.display_positions[0].position, PitchPoint::new(30.0, 25.0));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const IDS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

        fn arb_graph() -> impl Strategy<Value = TeamGraph> {
            proptest::collection::vec((0usize..8, 0usize..8, 1i64..20), 0..30).prop_map(|edges| {
                let mut builder =
                    TeamGraph::builder().players(IDS.iter().map(|&id| PlayerNode::new(id)));
                for (a, b, w) in edges {
                    builder = builder.pass(IDS[a], IDS[b], w);
                }
                builder.build().unwrap()
            })
        }

        proptest! {
            /// Property: no node outside the selection, no edge below threshold
            #[test]
            fn prop_filter_respects_selection_and_threshold(
                graph in arb_graph(),
                picks in proptest::collection::vec(0usize..10, 0..11),
                min_passes in 0u32..20
            ) {
                let names: Vec<String> = picks.iter().map(|&i| {
                    IDS.get(i).map(|s| s.to_string()).unwrap_or_else(|| format!("X{i}"))
                }).collect();
                let sel = Selection::new(&names);
                let sub = filter_subgraph(&graph, &sel, min_passes);

                for id in sub.player_ids() {
                    prop_assert!(sel.contains(id));
                }
                for (from, to, passes) in sub.edges() {
                    prop_assert!(passes >= min_passes);
                    prop_assert_eq!(graph.passes(from, to), Some(passes));
                }
            }

            /// Property: filtering twice with the same inputs is identical
            #[test]
            fn prop_filter_is_idempotent(
                graph in arb_graph(),
                picks in proptest::collection::vec(0usize..8, 0..11),
                min_passes in 0u32..20
            ) {
                let sel = Selection::new(picks.iter().map(|&i| IDS[i]));
                let once = filter_subgraph(&graph, &sel, min_passes);
                let again = filter_subgraph(&once, &sel, min_passes);
                prop_assert_eq!(&once, &filter_subgraph(&graph, &sel, min_passes));
                prop_assert_eq!(once, again);
            }
        }
    }
}
