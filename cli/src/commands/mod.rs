pub mod graph;
pub mod optimize;
pub mod source;

pub use graph::handle_graph;
pub use optimize::handle_optimize;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use teardown_core::{Algorithm, ProductFamily};

#[derive(Parser)]
#[command(name = "teardown")]
#[command(about = "disassembly sequence optimizer for multi-part products")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an optimal disassembly sequence for a target part
    Optimize {
        /// Edge list file (.json or .yaml)
        #[arg(long, value_name = "FILE")]
        edges: PathBuf,

        /// Target part to disassemble down to
        #[arg(long)]
        target: String,

        /// Cost rules to apply
        #[arg(long, value_enum, default_value_t = CliFamily::EdgeKeyed)]
        family: CliFamily,

        /// Search algorithm
        #[arg(long, value_enum, default_value_t = CliAlgorithm::Exact)]
        algorithm: CliAlgorithm,

        /// Optimization parameter file (.yml, .toml, or .json)
        #[arg(long, value_name = "FILE")]
        params: Option<PathBuf>,

        /// Attribute overlay file (JSON map of edge/component overrides)
        #[arg(long, value_name = "FILE")]
        overlay: Option<PathBuf>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect the disassembly graph of an edge list
    Graph {
        /// Edge list file (.json or .yaml)
        #[arg(long, value_name = "FILE")]
        edges: PathBuf,

        /// Emit nodes, roots, and counts as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFamily {
    /// Attributes recorded per relation (kettle-style datasets)
    EdgeKeyed,
    /// Attributes recorded per component (gearbox-style datasets)
    NodeKeyed,
}

impl From<CliFamily> for ProductFamily {
    fn from(family: CliFamily) -> Self {
        match family {
            CliFamily::EdgeKeyed => ProductFamily::EdgeKeyed,
            CliFamily::NodeKeyed => ProductFamily::NodeKeyed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliAlgorithm {
    Exact,
    Heuristic,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(algorithm: CliAlgorithm) -> Self {
        match algorithm {
            CliAlgorithm::Exact => Algorithm::Exact,
            CliAlgorithm::Heuristic => Algorithm::Heuristic,
        }
    }
}
