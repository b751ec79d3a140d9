//! Edge-record sources: flat edge lists and graph documents
//!
//! The engine is agnostic to where edge records come from; this module
//! covers the two file shapes in the wild: a flat array of records, and
//! the nodes/edges document a graph-store export produces (endpoints
//! named `source`/`target` there).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use teardown_core::{EdgeRecord, Overlay};

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    edges: Vec<GraphDocumentEdge>,
}

#[derive(Debug, Deserialize)]
struct GraphDocumentEdge {
    source: String,
    target: String,
    #[serde(default)]
    safety_risk: Option<String>,
    #[serde(default)]
    fastener: Option<String>,
    #[serde(default)]
    tool: Option<String>,
    #[serde(default)]
    fastener_count: Option<i64>,
    #[serde(default)]
    disassembly_tools: Option<String>,
}

impl From<GraphDocumentEdge> for EdgeRecord {
    fn from(edge: GraphDocumentEdge) -> Self {
        EdgeRecord {
            from: edge.source,
            to: edge.target,
            safety_risk: edge.safety_risk,
            fastener: edge.fastener,
            tool: edge.tool,
            fastener_count: edge.fastener_count,
            disassembly_tools: edge.disassembly_tools,
        }
    }
}

pub fn load_edges(path: &Path) -> Result<Vec<EdgeRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read edge file {}", path.display()))?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => parse_json(&content),
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&content).context("failed to parse YAML edge list")
        }
        other => bail!("unsupported edge file format: {:?}", other),
    }
}

fn parse_json(content: &str) -> Result<Vec<EdgeRecord>> {
    // Flat edge list first, then the nodes/edges document form.
    if let Ok(records) = serde_json::from_str::<Vec<EdgeRecord>>(content) {
        return Ok(records);
    }
    let document: GraphDocument = serde_json::from_str(content)
        .context("edge file is neither an edge list nor a graph document")?;
    Ok(document.edges.into_iter().map(EdgeRecord::from).collect())
}

pub fn load_overlay(path: &Path) -> Result<Overlay> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read overlay file {}", path.display()))?;
    serde_json::from_str(&content).context("failed to parse overlay file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_edge_list() {
        let records = parse_json(r#"[{"from": "A", "to": "B", "fastener": "Screws"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from, "A");
        assert_eq!(records[0].fastener.as_deref(), Some("Screws"));
    }

    #[test]
    fn test_parse_graph_document() {
        let records = parse_json(
            r#"{"nodes": [{"id": "A"}], "edges": [{"source": "A", "target": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].from, "A");
        assert_eq!(records[0].to, "B");
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_json("42").is_err());
    }
}
