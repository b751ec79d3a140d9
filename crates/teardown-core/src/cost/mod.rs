//! Product-specific edge cost assignment
//!
//! Two strategies exist: edge-keyed (attributes recorded per relation)
//! and node-keyed (attributes recorded per component). Both turn
//! categorical and numeric attributes into one positive scalar weight
//! per edge, fixed for the remainder of the optimize call.

mod edge_keyed;
mod node_keyed;
pub mod tables;

use crate::model::Overlay;
use crate::topology::Topology;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which cost rules apply to a product line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductFamily {
    /// Attributes live on the relations between parts (kettle-style datasets)
    EdgeKeyed,
    /// Attributes live on the component being removed (gearbox-style datasets)
    NodeKeyed,
}

/// Topology plus one positive weight per edge
///
/// Built once per optimize call and immutable afterwards; identical
/// inputs always produce identical weights.
pub struct WeightedTopology {
    graph: DiGraph<String, f64>,
    node_indices: HashMap<String, NodeIndex>,
}

impl WeightedTopology {
    pub fn build(topology: &Topology, family: ProductFamily, overlay: &Overlay) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices: HashMap<String, NodeIndex> = HashMap::new();

        for record in topology.records() {
            let weight = match family {
                ProductFamily::EdgeKeyed => edge_keyed::edge_weight(record, overlay),
                ProductFamily::NodeKeyed => node_keyed::edge_weight(record, overlay),
            };
            let from = Self::intern(&mut graph, &mut node_indices, &record.from);
            let to = Self::intern(&mut graph, &mut node_indices, &record.to);
            if graph.find_edge(from, to).is_none() {
                graph.add_edge(from, to, weight);
            }
        }

        Self {
            graph,
            node_indices,
        }
    }

    fn intern(
        graph: &mut DiGraph<String, f64>,
        indices: &mut HashMap<String, NodeIndex>,
        id: &str,
    ) -> NodeIndex {
        if let Some(idx) = indices.get(id) {
            return *idx;
        }
        let idx = graph.add_node(id.to_string());
        indices.insert(id.to_string(), idx);
        idx
    }

    pub fn graph(&self) -> &DiGraph<String, f64> {
        &self.graph
    }

    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub fn part_id(&self, idx: NodeIndex) -> Option<&String> {
        self.graph.node_weight(idx)
    }

    pub fn weight_of(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.node(from)?;
        let to = self.node(to)?;
        self.graph.find_edge(from, to).map(|e| self.graph[e])
    }

    /// Summed weight of a path; +infinity if any hop is not an edge of
    /// the weighted graph, so broken candidates sort last.
    pub fn path_cost(&self, path: &[String]) -> f64 {
        let mut cost = 0.0;
        for pair in path.windows(2) {
            match self.weight_of(&pair[0], &pair[1]) {
                Some(weight) => cost += weight,
                None => return f64::INFINITY,
            }
        }
        cost
    }
}
