//! Parameter handling for the teardown optimizer.
//!
//! Typed parameter structs with serde-backed defaults, a `Validate`
//! trait, and file loading from YAML, TOML, or JSON.

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::load_from_file;
pub use types::OptimizeParams;
pub use validation::Validate;
