//! Engine entry point: topology, weights, search, report

use crate::assemble::{assemble, RunInfo};
use crate::cost::{ProductFamily, WeightedTopology};
use crate::error::{OptimizeError, Result};
use crate::model::{EdgeRecord, OptimizeReport, Overlay};
use crate::solver::{exact, HeuristicSearch};
use crate::topology::Topology;
use serde::{Deserialize, Serialize};
use tracing::info;
use teardown_config::OptimizeParams;

/// Which search strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Exact,
    Heuristic,
}

/// Compute an optimal disassembly sequence for `target`.
///
/// Builds the topology from `edges`, assigns per-edge weights under the
/// given product family's cost rules (layered with `overlay`), and runs
/// the selected search. Pure and synchronous: all state is allocated
/// per call.
pub fn optimize(
    family: ProductFamily,
    edges: Vec<EdgeRecord>,
    target: &str,
    algorithm: Algorithm,
    params: &OptimizeParams,
    overlay: &Overlay,
) -> Result<OptimizeReport> {
    let target = target.trim();
    if target.is_empty() {
        return Err(OptimizeError::TargetNotFound {
            target: target.to_string(),
        });
    }

    let topology = Topology::build(edges)?;
    if !topology.contains(target) {
        return Err(OptimizeError::TargetNotFound {
            target: target.to_string(),
        });
    }

    let roots = topology.roots();
    if roots.is_empty() {
        return Err(OptimizeError::NoRoots);
    }

    let paths = topology.enumerate_simple_paths(&roots, target, params.max_enumerated_paths)?;
    info!(
        nodes = topology.node_count(),
        edges = topology.edge_count(),
        roots = roots.len(),
        candidates = paths.len(),
        "topology ready"
    );

    let weighted = WeightedTopology::build(&topology, family, overlay);

    let report = match algorithm {
        Algorithm::Exact => {
            let (path, cost) = exact::shortest_path(&weighted, &roots, target)?;
            assemble(
                target,
                path,
                cost,
                RunInfo {
                    algorithm: "exact",
                    generations: None,
                    execution_time: None,
                },
            )
        }
        Algorithm::Heuristic => {
            let outcome = HeuristicSearch::new(&weighted, &paths, params).run()?;
            assemble(
                target,
                outcome.path,
                outcome.cost,
                RunInfo {
                    algorithm: "heuristic",
                    generations: Some(outcome.generations),
                    execution_time: Some(outcome.elapsed_secs),
                },
            )
        }
    };

    info!(
        cost = report.metrics.total_cost,
        steps = report.metrics.number_of_steps,
        "optimization finished"
    );
    Ok(report)
}
