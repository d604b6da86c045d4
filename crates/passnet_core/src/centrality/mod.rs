//! # Centrality Module
//!
//! Structural importance of each player within a passing network.
//!
//! - `betweenness` - Share of shortest passing routes through a player
//! - `closeness` - Inverse mean hop distance, scaled by reach
//! - `eigenvector` - Principal eigenvector of the pass relation
//! - `pagerank` - Damped random walk over passes
//!
//! Every measure returns exactly one score per player of the input graph.
//! Eigenvector and PageRank are iterative and may fail with
//! `CentralityError::NotConverged`; callers report that single measure as
//! unavailable.

pub mod betweenness;
pub mod closeness;
pub mod eigenvector;
pub mod pagerank;

pub use betweenness::betweenness;
pub use closeness::closeness;
pub use eigenvector::eigenvector;
pub use pagerank::pagerank;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::CentralityConfig;
use crate::error::CentralityError;
use crate::network::TeamGraph;

/// The four supported centrality measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Betweenness,
    Closeness,
    Eigenvector,
    #[serde(rename = "pagerank")]
    PageRank,
}

impl Measure {
    pub const ALL: [Measure; 4] =
        [Measure::Betweenness, Measure::Closeness, Measure::Eigenvector, Measure::PageRank];

    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Betweenness => "betweenness centrality",
            Measure::Closeness => "closeness centrality",
            Measure::Eigenvector => "eigenvector centrality",
            Measure::PageRank => "pagerank",
        }
    }

    /// Title-cased label for axis captions.
    pub fn title(&self) -> &'static str {
        match self {
            Measure::Betweenness => "Betweenness Centrality",
            Measure::Closeness => "Closeness Centrality",
            Measure::Eigenvector => "Eigenvector Centrality",
            Measure::PageRank => "Pagerank",
        }
    }

    /// True for measures computed by power iteration.
    pub fn is_iterative(&self) -> bool {
        matches!(self, Measure::Eigenvector | Measure::PageRank)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measure {
    type Err = CentralityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "betweenness centrality" | "betweenness" => Ok(Measure::Betweenness),
            "closeness centrality" | "closeness" => Ok(Measure::Closeness),
            "eigenvector centrality" | "eigenvector" => Ok(Measure::Eigenvector),
            "pagerank" | "page rank" => Ok(Measure::PageRank),
            _ => Err(CentralityError::UnsupportedMeasure(s.to_string())),
        }
    }
}

/// Score per player for one (graph, measure) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CentralityScores {
    scores: BTreeMap<String, f64>,
}

impl CentralityScores {
    /// Pair `values` (indexed like the graph's nodes) with player ids.
    pub(crate) fn from_node_values(graph: &TeamGraph, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), graph.node_count());
        let scores = graph.player_ids().map(str::to_string).zip(values).collect();
        Self { scores }
    }

    pub fn get(&self, player: &str) -> Option<f64> {
        self.scores.get(player).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// `(player, score)` pairs ordered by player id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.values().copied()
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// The `k` highest scores, ties broken by player id.
    pub fn top(&self, k: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(k);
        ranked
    }

    /// Highest-scoring player.
    pub fn leader(&self) -> Option<(&str, f64)> {
        self.top(1).into_iter().next()
    }

    /// Equal-width histogram of the score distribution.
    pub fn histogram(&self, bins: usize) -> Histogram {
        Histogram::from_values(self.values(), bins)
    }
}

/// Equal-width histogram over `[min, max]` of a set of values.
///
/// `edges` has `counts.len() + 1` entries. The last bin includes its right
/// edge. A constant distribution spans `[v - 0.5, v + 0.5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I, bins: usize) -> Self {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        let bins = bins.max(1);

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if values.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0; bins];
        for v in values {
            let slot = (((v - lo) / width) as usize).min(bins - 1);
            counts[slot] += 1;
        }

        Self { edges, counts }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Compute one measure over `graph`.
pub fn compute(
    graph: &TeamGraph,
    measure: Measure,
    cfg: &CentralityConfig,
) -> Result<CentralityScores, CentralityError> {
    match measure {
        Measure::Betweenness => Ok(betweenness(graph)),
        Measure::Closeness => Ok(closeness(graph, cfg.closeness_direction)),
        Measure::Eigenvector => eigenvector(graph, cfg),
        Measure::PageRank => pagerank(graph, cfg),
    }
}

/// Compute a measure given by name, e.g. `"closeness centrality"`.
pub fn compute_named(
    graph: &TeamGraph,
    name: &str,
    cfg: &CentralityConfig,
) -> Result<CentralityScores, CentralityError> {
    compute(graph, name.parse()?, cfg)
}

/// Weight of an edge under `cfg`: the pass count, or 1 when unweighted.
#[inline]
pub(crate) fn edge_weight(passes: u32, cfg: &CentralityConfig) -> f64 {
    if cfg.weighted {
        passes as f64
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::fixtures::{path, single, triangle};

    #[test]
    fn test_measure_parse() {
        assert_eq!("betweenness centrality".parse::<Measure>(), Ok(Measure::Betweenness));
        assert_eq!("Closeness".parse::<Measure>(), Ok(Measure::Closeness));
        assert_eq!("eigenvector centrality".parse::<Measure>(), Ok(Measure::Eigenvector));
        assert_eq!("PageRank".parse::<Measure>(), Ok(Measure::PageRank));
        assert_eq!(
            "degree centrality".parse::<Measure>(),
            Err(CentralityError::UnsupportedMeasure("degree centrality".into()))
        );
    }

    #[test]
    fn test_measure_serde_names() {
        assert_eq!(serde_json::to_string(&Measure::PageRank).unwrap(), "\"pagerank\"");
        assert_eq!(serde_json::to_string(&Measure::Closeness).unwrap(), "\"closeness\"");
    }

    #[test]
    fn test_compute_named_unknown_measure() {
        let err = compute_named(&triangle(), "katz", &CentralityConfig::default()).unwrap_err();
        assert!(matches!(err, CentralityError::UnsupportedMeasure(_)));
    }

    #[test]
    fn test_every_measure_scores_every_player() {
        let cfg = CentralityConfig::default();
        for graph in [triangle(), path(&["A", "B"]), single("A")] {
            for measure in Measure::ALL {
                let scores = match compute(&graph, measure, &cfg) {
                    Ok(scores) => scores,
                    // A -> B does not converge for eigenvector
                    Err(CentralityError::NotConverged { measure: Measure::Eigenvector, .. })
                        if graph.node_count() == 2 =>
                    {
                        continue
                    }
                    Err(err) => panic!("{measure} failed: {err}"),
                };
                assert_eq!(scores.len(), graph.node_count(), "{measure}");
                for id in graph.player_ids() {
                    assert!(scores.get(id).is_some(), "{measure} missing {id}");
                }
            }
        }
    }

    #[test]
    fn test_single_node_degenerate_values() {
        let g = single("A");
        let cfg = CentralityConfig::default();
        assert_eq!(compute(&g, Measure::Betweenness, &cfg).unwrap().get("A"), Some(0.0));
        assert_eq!(compute(&g, Measure::Closeness, &cfg).unwrap().get("A"), Some(0.0));
        assert_eq!(compute(&g, Measure::Eigenvector, &cfg).unwrap().get("A"), Some(1.0));
        assert_eq!(compute(&g, Measure::PageRank, &cfg).unwrap().get("A"), Some(1.0));
    }

    #[test]
    fn test_empty_graph_yields_empty_scores() {
        let g = TeamGraph::empty();
        let cfg = CentralityConfig::default();
        for measure in Measure::ALL {
            assert!(compute(&g, measure, &cfg).unwrap().is_empty(), "{measure}");
        }
    }

    #[test]
    fn test_top_orders_by_score_then_name() {
        let g = path(&["A", "B", "C"]);
        let scores = CentralityScores::from_node_values(&g, vec![0.2, 0.5, 0.2]);
        assert_eq!(scores.top(2), vec![("B", 0.5), ("A", 0.2)]);
        assert_eq!(scores.leader(), Some(("B", 0.5)));
        assert_eq!(scores.top(10).len(), 3);
    }

    #[test]
    fn test_histogram_bins() {
        let h = Histogram::from_values([0.0, 0.1, 0.5, 0.9, 1.0], 5);
        assert_eq!(h.edges.len(), 6);
        assert_eq!(h.counts, vec![2, 0, 1, 0, 2]);
        assert_eq!(h.total(), 5);
    }

    #[test]
    fn test_histogram_constant_values() {
        let h = Histogram::from_values([0.25, 0.25, 0.25], 5);
        assert_eq!(h.total(), 3);
        assert_eq!(h.edges[0], -0.25);
        assert_eq!(h.edges[5], 0.75);
        assert_eq!(h.counts[2], 3);
    }

    #[test]
    fn test_histogram_empty_and_zero_bins() {
        let h = Histogram::from_values(std::iter::empty(), 0);
        assert_eq!(h.counts, vec![0]);
        assert_eq!(h.edges, vec![0.0, 1.0]);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use crate::network::PlayerNode;
        use proptest::prelude::*;

        const IDS: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "I"];

        fn arb_graph() -> impl Strategy<Value = TeamGraph> {
            (1usize..=IDS.len())
                .prop_flat_map(|n| {
                    (Just(n), proptest::collection::vec((0..n, 0..n, 1i64..30), 0..40))
                })
                .prop_map(|(n, edges)| {
                    let mut builder =
                        TeamGraph::builder().players(IDS[..n].iter().map(|&id| PlayerNode::new(id)));
                    for (a, b, w) in edges {
                        builder = builder.pass(IDS[a], IDS[b], w);
                    }
                    builder.build().unwrap()
                })
        }

        fn assert_one_entry_per_player(graph: &TeamGraph, scores: &CentralityScores) {
            assert_eq!(scores.len(), graph.node_count());
            for id in graph.player_ids() {
                assert!(scores.get(id).is_some(), "missing {id}");
            }
        }

        proptest! {
            /// Property: betweenness and closeness cover every player and lie in [0, 1]
            #[test]
            fn prop_path_measures_are_bounded(
                graph in arb_graph(),
                outgoing in any::<bool>()
            ) {
                let direction = if outgoing {
                    crate::config::ClosenessDirection::Outgoing
                } else {
                    crate::config::ClosenessDirection::Incoming
                };
                let cfg = CentralityConfig { closeness_direction: direction, ..Default::default() };
                for measure in [Measure::Betweenness, Measure::Closeness] {
                    let scores = compute(&graph, measure, &cfg).unwrap();
                    assert_one_entry_per_player(&graph, &scores);
                    for (id, v) in scores.iter() {
                        prop_assert!((0.0..=1.0 + 1e-12).contains(&v), "{} {} = {}", measure, id, v);
                    }
                }
            }

            /// Property: PageRank converges, is non-negative and sums to 1
            #[test]
            fn prop_pagerank_is_a_distribution(
                graph in arb_graph(),
                weighted in any::<bool>()
            ) {
                let cfg = CentralityConfig { weighted, ..Default::default() };
                let scores = compute(&graph, Measure::PageRank, &cfg).unwrap();
                assert_one_entry_per_player(&graph, &scores);
                prop_assert!(scores.values().all(|v| v >= 0.0));
                prop_assert!((scores.sum() - 1.0).abs() < 1e-6, "sum = {}", scores.sum());
            }

            /// Property: eigenvector either covers every player or fails to converge
            #[test]
            fn prop_eigenvector_scores_or_not_converged(
                graph in arb_graph(),
                weighted in any::<bool>()
            ) {
                let cfg = CentralityConfig { weighted, ..Default::default() };
                match compute(&graph, Measure::Eigenvector, &cfg) {
                    Ok(scores) => {
                        assert_one_entry_per_player(&graph, &scores);
                        prop_assert!(scores.values().all(|v| v >= 0.0));
                    }
                    Err(err) => {
                        let expected = CentralityError::NotConverged {
                            measure: Measure::Eigenvector,
                            iterations: cfg.max_iterations,
                        };
                        prop_assert_eq!(err, expected);
                    }
                }
            }
        }
    }
}
