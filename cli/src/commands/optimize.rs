use super::source;
use super::{CliAlgorithm, CliFamily};
use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use teardown_config::OptimizeParams;
use teardown_core::optimize;

#[allow(clippy::too_many_arguments)]
pub fn handle_optimize(
    edges: PathBuf,
    target: String,
    family: CliFamily,
    algorithm: CliAlgorithm,
    params: Option<PathBuf>,
    overlay: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let records = source::load_edges(&edges)?;

    let overlay = match overlay {
        Some(path) => source::load_overlay(&path)?,
        None => HashMap::new(),
    };

    let params = match params {
        Some(path) => teardown_config::load_from_file(&path)?,
        None => OptimizeParams::default(),
    };

    let report = optimize(
        family.into(),
        records,
        &target,
        algorithm.into(),
        &params,
        &overlay,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Optimal disassembly sequence for '{}':", report.target);
    for step in &report.steps {
        println!("  {}. {}", step.step, step.part_id);
    }

    let metrics = &report.metrics;
    println!(
        "total cost {:.2} | avg difficulty {:.2} | steps {} | efficiency {:.4}",
        metrics.total_cost,
        metrics.average_difficulty,
        metrics.number_of_steps,
        metrics.efficiency_score
    );
    if let Some(secs) = metrics.execution_time {
        println!(
            "search: {} generations in {:.3}s",
            metrics.generations.unwrap_or(0),
            secs
        );
    }

    Ok(())
}
