//! Directed disassembly topology and simple-path enumeration

use crate::error::{OptimizeError, Result};
use crate::model::EdgeRecord;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use tracing::warn;

/// Parts as nodes, "disassembles to" relations as edges.
///
/// The graph carries connectivity only; edge attributes stay on the
/// originating records and are consumed by the cost models.
pub struct Topology {
    graph: DiGraph<String, ()>,
    node_indices: HashMap<String, NodeIndex>,
    records: Vec<EdgeRecord>,
}

impl Topology {
    /// Build a topology from raw edge records.
    ///
    /// Endpoints are trimmed; an empty endpoint after trimming fails
    /// with `InvalidGraph`, as does an empty edge list.
    pub fn build(edges: Vec<EdgeRecord>) -> Result<Self> {
        let mut graph = DiGraph::new();
        let mut node_indices: HashMap<String, NodeIndex> = HashMap::new();
        let mut records = Vec::with_capacity(edges.len());

        for mut edge in edges {
            edge.from = edge.from.trim().to_string();
            edge.to = edge.to.trim().to_string();
            if edge.from.is_empty() || edge.to.is_empty() {
                return Err(OptimizeError::InvalidGraph {
                    reason: "edge with missing endpoint".to_string(),
                });
            }

            let from = Self::intern(&mut graph, &mut node_indices, &edge.from);
            let to = Self::intern(&mut graph, &mut node_indices, &edge.to);
            if graph.find_edge(from, to).is_none() {
                graph.add_edge(from, to, ());
            }
            records.push(edge);
        }

        if node_indices.is_empty() {
            return Err(OptimizeError::InvalidGraph {
                reason: "edge list is empty".to_string(),
            });
        }

        Ok(Self {
            graph,
            node_indices,
            records,
        })
    }

    fn intern(
        graph: &mut DiGraph<String, ()>,
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

    /// The cleaned dataset rows this topology was built from
    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All part ids, in first-seen dataset order
    pub fn node_ids(&self) -> Vec<String> {
        self.graph.node_weights().cloned().collect()
    }

    /// Parts with no incoming edges, in first-seen dataset order.
    /// These are the valid disassembly start points.
    pub fn roots(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .filter_map(|idx| self.graph.node_weight(idx).cloned())
            .collect()
    }

    /// Every simple path from any of `roots` to `target`, depth-first
    /// per root, truncated once `cap` paths are collected.
    ///
    /// A branch terminates when the target is reached, so paths never
    /// continue past the target.
    pub fn enumerate_simple_paths(
        &self,
        roots: &[String],
        target: &str,
        cap: usize,
    ) -> Result<Vec<Vec<String>>> {
        let target_idx =
            *self
                .node_indices
                .get(target)
                .ok_or_else(|| OptimizeError::TargetNotFound {
                    target: target.to_string(),
                })?;
        if roots.is_empty() {
            return Err(OptimizeError::NoRoots);
        }

        let mut paths = Vec::new();
        for root in roots {
            if paths.len() >= cap {
                break;
            }
            let Some(&root_idx) = self.node_indices.get(root) else {
                continue;
            };
            let mut on_path = vec![false; self.graph.node_count()];
            on_path[root_idx.index()] = true;
            let mut trail = vec![root_idx];
            self.dfs(root_idx, target_idx, &mut trail, &mut on_path, &mut paths, cap);
        }

        if paths.len() >= cap {
            warn!(cap, "path enumeration truncated, proceeding with the paths found");
        }
        if paths.is_empty() {
            return Err(OptimizeError::NoPathFound);
        }
        Ok(paths)
    }

    fn dfs(
        &self,
        current: NodeIndex,
        target: NodeIndex,
        trail: &mut Vec<NodeIndex>,
        on_path: &mut [bool],
        out: &mut Vec<Vec<String>>,
        cap: usize,
    ) {
        if current == target {
            out.push(
                trail
                    .iter()
                    .filter_map(|&idx| self.graph.node_weight(idx).cloned())
                    .collect(),
            );
            return;
        }

        // petgraph yields neighbors newest-first; reverse to walk them
        // in dataset order so enumeration order is stable.
        let mut successors: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(current, Direction::Outgoing)
            .collect();
        successors.reverse();

        for next in successors {
            if out.len() >= cap {
                return;
            }
            if on_path[next.index()] {
                continue;
            }
            on_path[next.index()] = true;
            trail.push(next);
            self.dfs(next, target, trail, on_path, out, cap);
            trail.pop();
            on_path[next.index()] = false;
        }
    }
}
