//! Optimization parameter definitions

use serde::{Deserialize, Serialize};

/// Parameters steering one optimize call
///
/// Every field has a sensible default, so a partial parameter file
/// (or none at all) yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeParams {
    /// Fraction of the population kept each generation (elitist selection)
    ///
    /// Range: (0.0, 1.0]
    #[serde(default = "default_retain_fraction")]
    pub retain_fraction: f64,

    /// Drives the scheduled-replacement interval
    ///
    /// Replacement fires on generations divisible by
    /// `round(1 / mutation_rate)`. A rate of 0 disables replacement.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Number of generations the heuristic search runs
    #[serde(default = "default_generations")]
    pub generations: u32,

    /// Legacy fallback weight, kept for interface compatibility
    ///
    /// Cost models resolve missing attributes per-field against fixed
    /// defaults instead of consulting this value.
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Hard ceiling on simple-path enumeration
    ///
    /// Enumeration is exponential in graph branching factor; once this
    /// many paths are collected the search proceeds on what was found.
    #[serde(default = "default_max_enumerated_paths")]
    pub max_enumerated_paths: usize,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            retain_fraction: default_retain_fraction(),
            mutation_rate: default_mutation_rate(),
            generations: default_generations(),
            default_weight: default_weight(),
            max_enumerated_paths: default_max_enumerated_paths(),
        }
    }
}

impl crate::validation::Validate for OptimizeParams {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::{validate_positive, validate_range};

        if self.retain_fraction <= 0.0 || self.retain_fraction > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "retain_fraction".to_string(),
                value: self.retain_fraction,
                min: 0.0,
                max: 1.0,
            });
        }

        validate_range("mutation_rate", self.mutation_rate, 0.0, 1.0)?;
        validate_positive("generations", self.generations as usize, 0)?;
        validate_positive("max_enumerated_paths", self.max_enumerated_paths, 0)?;

        if self.default_weight <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: "default_weight".to_string(),
                message: format!("must be positive, got {}", self.default_weight),
            });
        }

        Ok(())
    }
}

fn default_retain_fraction() -> f64 {
    0.5
}

fn default_mutation_rate() -> f64 {
    0.2
}

fn default_generations() -> u32 {
    30
}

fn default_weight() -> f64 {
    2.0
}

fn default_max_enumerated_paths() -> usize {
    10_000
}
