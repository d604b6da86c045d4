//! Immutable directed pass graph of one team.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use tracing::{debug, warn};

use super::node_link::{NodeLinkEdge, NodeLinkGraph, NodeLinkNode};
use super::player::{Lineup, PassEdge, PlayerNode, PositionRecord};
use crate::coordinates::PitchPoint;
use crate::error::GraphError;

/// Directed, weighted passing network of one team.
///
/// Every edge endpoint is a node of the same graph. Nodes keep the order in
/// which they were supplied; edges keep the order of their first appearance.
/// There is no way to mutate a graph after construction.
#[derive(Debug, Clone)]
pub struct TeamGraph {
    graph: DiGraph<PlayerNode, PassEdge>,
    index: HashMap<String, NodeIndex>,
}

impl TeamGraph {
    pub fn builder() -> TeamGraphBuilder {
        TeamGraphBuilder::default()
    }

    pub fn empty() -> Self {
        Self { graph: DiGraph::new(), index: HashMap::new() }
    }

    /// Assemble a team graph from its stored node-link form, taking the
    /// titular flag from `lineup` and pitch positions from `positions`.
    ///
    /// Node ids and position names are trimmed of surrounding whitespace.
    pub fn from_node_link(
        data: &NodeLinkGraph,
        lineup: &Lineup,
        positions: &[PositionRecord],
    ) -> Result<Self, GraphError> {
        if !data.directed {
            return Err(GraphError::UnsupportedLayout("graph is undirected".to_string()));
        }
        if data.multigraph {
            return Err(GraphError::UnsupportedLayout("multigraphs are not supported".to_string()));
        }

        let mut position_of: HashMap<&str, PitchPoint> = HashMap::with_capacity(positions.len());
        for record in positions {
            position_of.entry(record.player.trim()).or_insert_with(|| record.point());
        }

        let mut builder = TeamGraph::builder();
        for node in &data.nodes {
            let id = node.id.trim();
            let mut player = PlayerNode::new(id).with_titular(lineup.is_titular(id));
            if let Some(&point) = position_of.get(id) {
                player = player.with_position(point);
            }
            builder = builder.player(player);
        }
        for link in &data.links {
            builder = builder.pass(link.source.trim(), link.target.trim(), link.passes);
        }
        builder.build()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Players in node order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerNode> + '_ {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }

    /// Player ids in node order.
    pub fn player_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.players().map(|p| p.id.as_str())
    }

    pub fn player(&self, id: &str) -> Option<&PlayerNode> {
        self.index.get(id).map(|&i| &self.graph[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Pass count of the edge `from -> to`, if present.
    pub fn passes(&self, from: &str, to: &str) -> Option<u32> {
        let a = *self.index.get(from)?;
        let b = *self.index.get(to)?;
        self.graph.find_edge(a, b).map(|e| self.graph[e].passes)
    }

    /// `(source, target, passes)` triples in edge order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, u32)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                e.weight().passes,
            )
        })
    }

    pub fn position(&self, id: &str) -> Option<PitchPoint> {
        self.player(id).and_then(|p| p.position)
    }

    pub fn total_passes(&self) -> u64 {
        self.graph.edge_references().map(|e| e.weight().passes as u64).sum()
    }

    /// Serialize back into node-link form.
    pub fn to_node_link(&self) -> NodeLinkGraph {
        let nodes = self.players().map(|p| NodeLinkNode { id: p.id.clone() }).collect();
        let links = self
            .edges()
            .map(|(source, target, passes)| NodeLinkEdge {
                source: source.to_string(),
                target: target.to_string(),
                passes: passes as i64,
            })
            .collect();
        NodeLinkGraph::new(nodes, links)
    }

    /// Copy of this graph keeping the players accepted by `keep_player` and
    /// the passes accepted by `keep_pass` between them. Relative node and
    /// edge order is preserved.
    pub(crate) fn retain<F, G>(&self, mut keep_player: F, mut keep_pass: G) -> TeamGraph
    where
        F: FnMut(&PlayerNode) -> bool,
        G: FnMut(&PassEdge) -> bool,
    {
        let graph = self.graph.filter_map(
            |_, player| keep_player(player).then(|| player.clone()),
            |_, pass| keep_pass(pass).then_some(*pass),
        );
        let index = graph.node_indices().map(|i| (graph[i].id.clone(), i)).collect();
        TeamGraph { graph, index }
    }

    pub(crate) fn inner(&self) -> &DiGraph<PlayerNode, PassEdge> {
        &self.graph
    }
}

impl Default for TeamGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for TeamGraph {
    fn eq(&self, other: &Self) -> bool {
        self.players().eq(other.players()) && self.edges().eq(other.edges())
    }
}

#[derive(Serialize)]
struct GraphSnapshot<'a> {
    players: Vec<&'a PlayerNode>,
    passes: Vec<PassSnapshot<'a>>,
}

#[derive(Serialize)]
struct PassSnapshot<'a> {
    source: &'a str,
    target: &'a str,
    passes: u32,
}

impl Serialize for TeamGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphSnapshot {
            players: self.players().collect(),
            passes: self
                .edges()
                .map(|(source, target, passes)| PassSnapshot { source, target, passes })
                .collect(),
        }
        .serialize(serializer)
    }
}

/// Collects players and passes, validating everything in `build`.
#[derive(Debug, Clone, Default)]
pub struct TeamGraphBuilder {
    players: Vec<PlayerNode>,
    passes: Vec<(String, String, i64)>,
}

impl TeamGraphBuilder {
    pub fn player(mut self, player: PlayerNode) -> Self {
        self.players.push(player);
        self
    }

    pub fn players<I: IntoIterator<Item = PlayerNode>>(mut self, players: I) -> Self {
        self.players.extend(players);
        self
    }

    pub fn pass(mut self, from: impl Into<String>, to: impl Into<String>, passes: i64) -> Self {
        self.passes.push((from.into(), to.into(), passes));
        self
    }

    /// Fails on duplicate players, edges with an unknown endpoint and
    /// non-positive pass counts. A repeated `(from, to)` pair overwrites the
    /// earlier count.
    pub fn build(self) -> Result<TeamGraph, GraphError> {
        let mut graph = DiGraph::with_capacity(self.players.len(), self.passes.len());
        let mut index = HashMap::with_capacity(self.players.len());

        for player in self.players {
            if index.contains_key(&player.id) {
                return Err(GraphError::DuplicatePlayer(player.id));
            }
            let id = player.id.clone();
            let node = graph.add_node(player);
            index.insert(id, node);
        }

        for (from, to, passes) in self.passes {
            let a = match index.get(&from) {
                Some(&a) => a,
                None => {
                    let missing = from.clone();
                    return Err(GraphError::UnknownPlayer { from, to, missing });
                }
            };
            let b = match index.get(&to) {
                Some(&b) => b,
                None => {
                    let missing = to.clone();
                    return Err(GraphError::UnknownPlayer { from, to, missing });
                }
            };
            let passes = match u32::try_from(passes) {
                Ok(p) if p > 0 => p,
                _ => return Err(GraphError::NonPositiveWeight { from, to, weight: passes }),
            };

            if graph.find_edge(a, b).is_some() {
                warn!("Duplicate pass edge {} -> {}, keeping the later count {}", from, to, passes);
            }
            graph.update_edge(a, b, PassEdge { passes });
        }

        debug!("Built team graph: {} players, {} edges", graph.node_count(), graph.edge_count());

        Ok(TeamGraph { graph, index })
    }
}
