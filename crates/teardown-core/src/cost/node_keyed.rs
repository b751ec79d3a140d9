//! Node-keyed cost rules (product family B)
//!
//! The weight of edge `(u, v)` depends only on `v`: disassembly
//! difficulty here is a property of the component being removed, not of
//! the relation it is removed through. Safety comes from the overlay,
//! tooling from a free-text tool list, and fastening from the
//! component's own name.

use super::tables::SafetyLevel;
use crate::model::{EdgeRecord, Overlay};

pub(super) fn edge_weight(record: &EdgeRecord, overlay: &Overlay) -> f64 {
    let props = overlay.get(&record.to);

    let safety = props
        .and_then(|b| b.safety_risk.as_deref())
        .map(SafetyLevel::parse)
        .unwrap_or(SafetyLevel::Medium)
        .cost();

    let tools = props
        .and_then(|b| b.disassembly_tools.as_deref())
        .or(record.disassembly_tools.as_deref());

    safety + tool_list_cost(tools) + name_fastener_cost(&record.to)
}

/// Free-text tool list: pulling or screwing both take 2, anything
/// else (or nothing) takes 1.
fn tool_list_cost(tools: Option<&str>) -> f64 {
    let Some(tools) = tools else {
        return 1.0;
    };
    let tools = tools.to_lowercase();
    if tools.contains("pull") || tools.contains("screw") {
        2.0
    } else {
        1.0
    }
}

/// Fastening cost read off the component's own name
fn name_fastener_cost(part: &str) -> f64 {
    let name = part.to_lowercase();
    if name.contains("bolt") || name.contains("screw") {
        3.0
    } else if name.contains("snap ring") {
        2.0
    } else {
        1.0
    }
}
