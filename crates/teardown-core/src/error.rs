//! Error taxonomy for the optimization engine
//!
//! All variants are caller-visible validation/domain failures; none is
//! retryable. Unexpected internal failures surface as [`OptimizeError::Internal`]
//! rather than being swallowed.

use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, OptimizeError>;

#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The edge list is malformed (empty, or an edge is missing an endpoint)
    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },

    /// The requested target part is not a node of the graph
    #[error("target '{target}' not found in graph")]
    TargetNotFound { target: String },

    /// The graph has no zero-indegree node to start disassembly from
    #[error("no start nodes found in graph")]
    NoRoots,

    /// No path from any start node reaches the target
    #[error("no valid disassembly path found")]
    NoPathFound,

    /// The heuristic search never saw a finite-cost candidate
    #[error("search finished without a finite-cost solution")]
    NoSolution,

    /// Defensive invariant violation inside the engine
    #[error("internal error: {0}")]
    Internal(String),
}
