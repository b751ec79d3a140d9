//! Edge-keyed cost rules (product family A)
//!
//! Each attribute of an edge resolves through a fixed precedence chain:
//! overlay entry for `"u->v"`, overlay entry for the destination part
//! (legacy node fallback), the edge's own dataset record, then hard
//! defaults (Medium / Screws / Hand / count 2). The chain is walked
//! per attribute, so a partial overlay only overrides what it names.

use super::tables::{fastener_count_penalty, FastenerType, SafetyLevel, ToolType};
use crate::model::{AttributeBundle, EdgeRecord, Overlay};

/// First `Some` along the resolver chain wins
fn resolve<'a, T>(
    sources: &[Option<&'a AttributeBundle>],
    pick: impl Fn(&'a AttributeBundle) -> Option<T>,
) -> Option<T> {
    sources.iter().copied().flatten().find_map(pick)
}

pub(super) fn edge_weight(record: &EdgeRecord, overlay: &Overlay) -> f64 {
    let edge_key = format!("{}->{}", record.from, record.to);
    let dataset = record.attributes();
    let sources = [
        overlay.get(&edge_key),
        overlay.get(&record.to),
        Some(&dataset),
    ];

    let safety = resolve(&sources, |b| b.safety_risk.as_deref())
        .map(SafetyLevel::parse)
        .unwrap_or(SafetyLevel::Medium)
        .cost();

    let fastener = resolve(&sources, |b| b.fastener.as_deref())
        .map(FastenerType::parse)
        .unwrap_or(FastenerType::Screws)
        .cost();

    let tool = resolve(&sources, |b| b.tool.as_deref())
        .map(ToolType::parse)
        .unwrap_or(ToolType::Hand)
        .cost();

    let count = resolve(&sources, |b| b.fastener_count);

    safety + fastener + tool + fastener_count_penalty(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(from: &str, to: &str) -> EdgeRecord {
        EdgeRecord::new(from, to)
    }

    #[test]
    fn test_full_default_weight_is_six() {
        // Medium(2) + Screws(2) + Hand(1) + count penalty(1)
        let weight = edge_weight(&record("A", "B"), &HashMap::new());
        assert_eq!(weight, 6.0);
    }

    #[test]
    fn test_dataset_row_beats_defaults() {
        let mut rec = record("A", "B");
        rec.safety_risk = Some("High".to_string());
        rec.fastener = Some("Wires".to_string());
        rec.tool = Some("Wire cutter".to_string());
        rec.fastener_count = Some(5);
        // 3 + 3 + 3 + 3
        assert_eq!(edge_weight(&rec, &HashMap::new()), 12.0);
    }

    #[test]
    fn test_node_overlay_beats_dataset() {
        let mut rec = record("A", "B");
        rec.safety_risk = Some("High".to_string());

        let mut overlay = Overlay::new();
        overlay.insert(
            "B".to_string(),
            AttributeBundle {
                safety_risk: Some("Low".to_string()),
                ..Default::default()
            },
        );
        // Low(1) + Screws(2) + Hand(1) + 1
        assert_eq!(edge_weight(&rec, &overlay), 5.0);
    }

    #[test]
    fn test_edge_overlay_beats_node_overlay() {
        let mut overlay = Overlay::new();
        overlay.insert(
            "A->B".to_string(),
            AttributeBundle {
                safety_risk: Some("High".to_string()),
                ..Default::default()
            },
        );
        overlay.insert(
            "B".to_string(),
            AttributeBundle {
                safety_risk: Some("Low".to_string()),
                ..Default::default()
            },
        );
        // High(3) + 2 + 1 + 1
        assert_eq!(edge_weight(&record("A", "B"), &overlay), 7.0);
    }

    #[test]
    fn test_partial_overlay_falls_through_per_attribute() {
        let mut rec = record("A", "B");
        rec.tool = Some("Philips screwdriver".to_string());

        let mut overlay = Overlay::new();
        overlay.insert(
            "A->B".to_string(),
            AttributeBundle {
                fastener: Some("Snap fit".to_string()),
                ..Default::default()
            },
        );
        // safety default(2) + overlay SnapFit(1) + dataset screwdriver(2) + 1
        assert_eq!(edge_weight(&rec, &overlay), 6.0);
    }

    #[test]
    fn test_unknown_strings_take_silent_fallback() {
        let mut rec = record("A", "B");
        rec.safety_risk = Some("catastrophic".to_string());
        rec.fastener = Some("duct tape".to_string());
        rec.tool = Some("crowbar".to_string());
        // 2 + 2 + 1 + 1
        assert_eq!(edge_weight(&rec, &HashMap::new()), 6.0);
    }
}
