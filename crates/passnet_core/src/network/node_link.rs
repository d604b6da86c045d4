//! Node-link serialization of a directed pass graph.
//!
//! ```json
//! {
//!   "directed": true,
//!   "multigraph": false,
//!   "graph": {},
//!   "nodes": [{"id": "Rossi"}, {"id": "Gerson"}],
//!   "links": [{"source": "Rossi", "target": "Gerson", "passes": 7}]
//! }
//! ```
//!
//! `edges` is accepted in place of `links`, and `weight` in place of `passes`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    #[serde(default)]
    pub graph: serde_json::Value,
    #[serde(default)]
    pub nodes: Vec<NodeLinkNode>,
    #[serde(default, alias = "edges")]
    pub links: Vec<NodeLinkEdge>,
}

fn default_directed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    pub source: String,
    pub target: String,
    /// Signed so that corrupt (zero or negative) counts can be reported
    #[serde(alias = "weight")]
    pub passes: i64,
}

impl NodeLinkGraph {
    pub fn new(nodes: Vec<NodeLinkNode>, links: Vec<NodeLinkEdge>) -> Self {
        Self {
            directed: true,
            multigraph: false,
            graph: serde_json::Value::Object(Default::default()),
            nodes,
            links,
        }
    }
}

impl Default for NodeLinkGraph {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_links_layout() {
        let g: NodeLinkGraph = serde_json::from_str(
            r#"{
                "directed": true,
                "multigraph": false,
                "graph": {},
                "nodes": [{"id": "A"}, {"id": "B"}],
                "links": [{"source": "A", "target": "B", "passes": 3}]
            }"#,
        )
        .unwrap();
        assert!(g.directed);
        assert_eq!(g.nodes.len(), 2);
        assert_eq!(g.links[0].passes, 3);
    }

    #[test]
    fn test_parse_edges_alias_and_weight_alias() {
        let g: NodeLinkGraph = serde_json::from_str(
            r#"{
                "nodes": [{"id": "A"}, {"id": "B"}],
                "edges": [{"source": "B", "target": "A", "weight": 9}]
            }"#,
        )
        .unwrap();
        assert!(g.directed, "directed defaults to true");
        assert_eq!(g.links.len(), 1);
        assert_eq!(g.links[0].passes, 9);
    }
}
