//! Data model: dataset rows, caller overlays, and the result record

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the disassembly dataset: a directed edge plus whatever
/// attributes the dataset recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub safety_risk: Option<String>,
    #[serde(default)]
    pub fastener: Option<String>,
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub fastener_count: Option<i64>,
    #[serde(default)]
    pub disassembly_tools: Option<String>,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }

    /// The record's attributes detached from its endpoints, for use as
    /// one layer of the cost-resolution chain.
    pub fn attributes(&self) -> AttributeBundle {
        AttributeBundle {
            safety_risk: self.safety_risk.clone(),
            fastener: self.fastener.clone(),
            tool: self.tool.clone(),
            fastener_count: self.fastener_count,
            disassembly_tools: self.disassembly_tools.clone(),
        }
    }
}

/// Caller-supplied attribute overrides for one edge or component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBundle {
    #[serde(default)]
    pub safety_risk: Option<String>,
    #[serde(default)]
    pub fastener: Option<String>,
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub fastener_count: Option<i64>,
    #[serde(default)]
    pub disassembly_tools: Option<String>,
}

/// Attribute overrides keyed either by `"from->to"` (edge-scoped) or by
/// part id (component-scoped).
pub type Overlay = HashMap<String, AttributeBundle>;

/// One step of the winning sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub step: usize,
    pub part_id: String,
    pub action: String,
}

/// One step of the viewer animation script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub step: usize,
    pub part_id: String,
    pub highlight: bool,
    pub duration: f64,
    pub action: String,
}

/// Summary metrics of a finished optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_cost: f64,
    pub average_difficulty: f64,
    pub number_of_steps: usize,
    pub efficiency_score: f64,
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

/// The result of one optimize call. Created fresh per call and never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeReport {
    pub target: String,
    pub sequence: Vec<String>,
    pub steps: Vec<PlanStep>,
    pub metrics: Metrics,
    pub animation: Vec<AnimationStep>,
}
