mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_graph, handle_optimize, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            edges,
            target,
            family,
            algorithm,
            params,
            overlay,
            json,
        } => {
            handle_optimize(edges, target, family, algorithm, params, overlay, json)?;
        }
        Commands::Graph { edges, json } => {
            handle_graph(edges, json)?;
        }
    }

    Ok(())
}
