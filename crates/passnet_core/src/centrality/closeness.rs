//! Closeness centrality with Wasserman-Faust scaling.
//!
//! ```text
//! C(u) = (r / Σ d(u)) * (r / (n - 1))
//! ```
//!
//! `r` is the number of other players reachable along the chosen direction
//! and `Σ d(u)` the sum of their hop distances. Players who reach nobody
//! score 0.

use petgraph::Direction;
use std::collections::VecDeque;

use super::CentralityScores;
use crate::config::ClosenessDirection;
use crate::network::TeamGraph;

pub fn closeness(graph: &TeamGraph, direction: ClosenessDirection) -> CentralityScores {
    let g = graph.inner();
    let n = g.node_count();

    // Incoming closeness walks passes backwards from the scored player
    let walk = match direction {
        ClosenessDirection::Incoming => Direction::Incoming,
        ClosenessDirection::Outgoing => Direction::Outgoing,
    };

    let mut values = vec![0.0; n];
    for start in g.node_indices() {
        let mut dist: Vec<Option<usize>> = vec![None; n];
        dist[start.index()] = Some(0);

        let mut reached = 0usize;
        let mut total = 0usize;
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            let next = dist[v.index()].unwrap_or(0) + 1;
            for w in g.neighbors_directed(v, walk) {
                if dist[w.index()].is_none() {
                    dist[w.index()] = Some(next);
                    reached += 1;
                    total += next;
                    queue.push_back(w);
                }
            }
        }

        if total > 0 && n > 1 {
            let r = reached as f64;
            values[start.index()] = (r / total as f64) * (r / (n - 1) as f64);
        }
    }

    CentralityScores::from_node_values(graph, values)
}
