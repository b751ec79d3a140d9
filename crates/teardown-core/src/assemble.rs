//! Projection of a winning path into the caller-facing report
//!
//! No decision-making happens here; the solver's path and cost are
//! turned into steps, summary metrics, and the viewer animation script.

use crate::model::{AnimationStep, Metrics, OptimizeReport, PlanStep};

const STEP_ACTION: &str = "disassemble";
const STEP_DURATION_SECS: f64 = 1.0;

pub struct RunInfo<'a> {
    pub algorithm: &'a str,
    pub generations: Option<u32>,
    pub execution_time: Option<f64>,
}

pub fn assemble(target: &str, path: Vec<String>, total_cost: f64, run: RunInfo<'_>) -> OptimizeReport {
    let steps = path
        .iter()
        .enumerate()
        .map(|(i, part)| PlanStep {
            step: i + 1,
            part_id: part.clone(),
            action: STEP_ACTION.to_string(),
        })
        .collect();

    let animation = path
        .iter()
        .enumerate()
        .map(|(i, part)| AnimationStep {
            step: i + 1,
            part_id: part.clone(),
            highlight: true,
            duration: STEP_DURATION_SECS,
            action: STEP_ACTION.to_string(),
        })
        .collect();

    let number_of_steps = path.len();
    let metrics = Metrics {
        total_cost,
        average_difficulty: if number_of_steps > 0 {
            total_cost / number_of_steps as f64
        } else {
            0.0
        },
        number_of_steps,
        efficiency_score: if total_cost > 0.0 { 1.0 / total_cost } else { 0.0 },
        algorithm: run.algorithm.to_string(),
        generations: run.generations,
        execution_time: run.execution_time,
    };

    OptimizeReport {
        target: target.to_string(),
        sequence: path,
        steps,
        metrics,
        animation,
    }
}
