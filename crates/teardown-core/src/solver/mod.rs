pub mod exact;
pub mod heuristic;

pub use exact::shortest_path;
pub use heuristic::{HeuristicOutcome, HeuristicSearch};
