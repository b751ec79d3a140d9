//! Exact solver: per-root shortest path over the weighted topology

use crate::cost::WeightedTopology;
use crate::error::{OptimizeError, Result};
use petgraph::algo::astar;
use petgraph::visit::EdgeRef;
use tracing::debug;

/// Minimum-cost path from any of `roots` to `target`.
///
/// Runs a non-negative-weight shortest-path search from each root and
/// keeps the global minimum; ties break toward the first root in
/// enumeration order. Fails with `NoPathFound` when no root reaches
/// the target.
pub fn shortest_path(
    weighted: &WeightedTopology,
    roots: &[String],
    target: &str,
) -> Result<(Vec<String>, f64)> {
    let Some(target_idx) = weighted.node(target) else {
        return Err(OptimizeError::TargetNotFound {
            target: target.to_string(),
        });
    };

    let mut best: Option<(Vec<String>, f64)> = None;
    for root in roots {
        let Some(root_idx) = weighted.node(root) else {
            continue;
        };

        let found = astar(
            weighted.graph(),
            root_idx,
            |finish| finish == target_idx,
            |edge| *edge.weight(),
            |_| 0.0,
        );

        if let Some((cost, indices)) = found {
            debug!(root = %root, cost, "root reaches target");
            if best.as_ref().map_or(true, |(_, c)| cost < *c) {
                let path = indices
                    .iter()
                    .filter_map(|&idx| weighted.part_id(idx).cloned())
                    .collect();
                best = Some((path, cost));
            }
        }
    }

    best.ok_or(OptimizeError::NoPathFound)
}
