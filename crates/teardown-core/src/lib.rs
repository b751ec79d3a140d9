//! Disassembly path optimization engine.
//!
//! Given a directed disassembly graph and a target part, computes the
//! minimum-cost removal sequence from any entry point to the target,
//! either exactly (per-root Dijkstra) or via a deterministic
//! population-based search. Cost rules are product-family specific.
//!
//! The engine is a pure, synchronous function of its inputs: each
//! [`optimize`] call builds its own topology, weighted graph, and
//! population, so concurrent calls need no coordination.

pub mod assemble;
pub mod cost;
pub mod error;
pub mod model;
pub mod optimize;
pub mod solver;
pub mod topology;

pub use cost::{ProductFamily, WeightedTopology};
pub use error::OptimizeError;
pub use model::{AnimationStep, AttributeBundle, EdgeRecord, Metrics, OptimizeReport, Overlay, PlanStep};
pub use optimize::{optimize, Algorithm};
pub use topology::Topology;
