//! Eigenvector centrality by power iteration.
//!
//! A player's score is proportional to the summed scores of the players who
//! pass to them. Iterates `x ← (Aᵀ + I) x` from a uniform start, L2
//! normalizing each step; the identity shift keeps cycles of even length
//! from oscillating. Converged once `Σ|x - x_prev| < n · tolerance`.

use petgraph::visit::EdgeRef;
use tracing::warn;

use super::{edge_weight, CentralityScores, Measure};
use crate::config::CentralityConfig;
use crate::error::CentralityError;
use crate::network::TeamGraph;

pub fn eigenvector(
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

    let mut x = vec![1.0 / n as f64; n];
    for _ in 0..cfg.max_iterations {
        let last = x.clone();

        for e in g.edge_references() {
            x[e.target().index()] += last[e.source().index()] * edge_weight(e.weight().passes, cfg);
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm > 0.0 { norm } else { 1.0 };
        for v in &mut x {
            *v /= norm;
        }

        let err: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if err < n as f64 * cfg.tolerance {
            return Ok(CentralityScores::from_node_values(graph, x));
        }
    }

    warn!("Eigenvector centrality failed to converge after {} iterations", cfg.max_iterations);
    Err(CentralityError::NotConverged {
        measure: Measure::Eigenvector,
        iterations: cfg.max_iterations,
    })
}
