use super::source;
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;
use teardown_core::Topology;

pub fn handle_graph(edges: PathBuf, json_out: bool) -> Result<()> {
    let records = source::load_edges(&edges)?;
    let topology = Topology::build(records)?;
    let roots = topology.roots();

    if json_out {
        let document = json!({
            "nodes": topology.node_ids(),
            "roots": roots,
            "node_count": topology.node_count(),
            "edge_count": topology.edge_count(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!(
        "{} parts, {} relations",
        topology.node_count(),
        topology.edge_count()
    );
    println!("roots: {}", roots.join(", "));
    Ok(())
}
