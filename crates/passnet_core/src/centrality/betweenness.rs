//! Betweenness centrality (Brandes, unweighted, directed).
//!
//! For each player `v`:
//!
//! ```text
//! B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! where `σ_st` counts shortest s→t passing routes (by hops) and `σ_st(v)`
//! those routed through `v`. Scores are normalized by `1 / ((n-1)(n-2))`
//! so they fall in [0, 1]; graphs with two or fewer players score 0.

use petgraph::Direction;
use std::collections::VecDeque;

use super::CentralityScores;
use crate::network::TeamGraph;

pub fn betweenness(graph: &TeamGraph) -> CentralityScores {
    let g = graph.inner();
    let n = g.node_count();
    let mut centrality = vec![0.0; n];

    for source in g.node_indices() {
        let s = source.index();

        let mut order = Vec::with_capacity(n);
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist: Vec<Option<usize>> = vec![None; n];
        sigma[s] = 1.0;
        dist[s] = Some(0);

        let mut queue = VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            let vi = v.index();
            order.push(vi);
            let next = dist[vi].unwrap_or(0) + 1;

            for w in g.neighbors_directed(v, Direction::Outgoing) {
                let wi = w.index();
                if dist[wi].is_none() {
                    dist[wi] = Some(next);
                    queue.push_back(w);
                }
                if dist[wi] == Some(next) {
                    sigma[wi] += sigma[vi];
                    preds[wi].push(vi);
                }
            }
        }

        // Dependency accumulation in reverse BFS order
        let mut delta = vec![0.0_f64; n];
        while let Some(w) = order.pop() {
            for &v in &preds[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) * (n - 2)) as f64;
        for c in &mut centrality {
            *c *= scale;
        }
    }

    CentralityScores::from_node_values(graph, centrality)
}
