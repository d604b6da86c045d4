//! PageRank over the passing network.
//!
//! Each iteration moves `damping` of every player's mass along their outgoing
//! passes (split evenly, or by pass count when weighted) and spreads the rest
//! uniformly. Mass held by players with no outgoing passes is spread
//! uniformly as well, so scores always sum to 1.

use petgraph::visit::EdgeRef;
use tracing::warn;

use super::{edge_weight, CentralityScores, Measure};
use crate::config::CentralityConfig;
use crate::error::CentralityError;
use crate::network::TeamGraph;

pub fn pagerank(
    graph: &TeamGraph,
    cfg: &CentralityConfig,
) -> Result<CentralityScores, CentralityError> {
    let g = graph.inner();
    let n = g.node_count();
    match n {
        0 => return Ok(CentralityScores::default()),
        1 => return Ok(CentralityScores::from_node_values(graph, vec![1.0])),
        _ => {}
    }

    let alpha = cfg.damping;
    let uniform = 1.0 / n as f64;

    let mut out_weight = vec![0.0_f64; n];
    for e in g.edge_references() {
        out_weight[e.source().index()] += edge_weight(e.weight().passes, cfg);
    }
    let dangling: Vec<usize> = (0..n).filter(|&i| out_weight[i] == 0.0).collect();

    let mut x = vec![uniform; n];
    for _ in 0..cfg.max_iterations {
        let last = std::mem::replace(&mut x, vec![0.0; n]);

        let dangling_mass: f64 = dangling.iter().map(|&i| last[i]).sum();
        let base = (alpha * dangling_mass + (1.0 - alpha)) * uniform;

        for e in g.edge_references() {
            let s = e.source().index();
            let share = edge_weight(e.weight().passes, cfg) / out_weight[s];
            x[e.target().index()] += alpha * last[s] * share;
        }
        for v in &mut x {
            *v += base;
        }

        let err: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if err < n as f64 * cfg.tolerance {
            return Ok(CentralityScores::from_node_values(graph, x));
        }
    }

    warn!("PageRank failed to converge after {} iterations", cfg.max_iterations);
    Err(CentralityError::NotConverged { measure: Measure::PageRank, iterations: cfg.max_iterations })
}
