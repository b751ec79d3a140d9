//! Deterministic scheduled-replacement search
//!
//! Keeps the classic select / replace / evaluate shape of a genetic
//! algorithm, but draws every replacement from the pre-enumerated path
//! list by index instead of sampling a random source, so identical
//! inputs always walk the same sequence of populations. The best path
//! seen across all generations is the authoritative result; the final
//! population need not contain it.

use crate::cost::WeightedTopology;
use crate::error::{OptimizeError, Result};
use std::time::Instant;
use teardown_config::OptimizeParams;
use tracing::debug;

const MIN_POPULATION: usize = 2;
const MAX_POPULATION: usize = 100;

/// Best path found by the search, with run diagnostics
pub struct HeuristicOutcome {
    pub path: Vec<String>,
    pub cost: f64,
    pub generations: u32,
    pub elapsed_secs: f64,
}

pub struct HeuristicSearch<'a> {
    weighted: &'a WeightedTopology,
    paths: &'a [Vec<String>],
    params: &'a OptimizeParams,
}

impl<'a> HeuristicSearch<'a> {
    /// `paths` is the enumerated candidate list; must be non-empty.
    pub fn new(
        weighted: &'a WeightedTopology,
        paths: &'a [Vec<String>],
        params: &'a OptimizeParams,
    ) -> Self {
        Self {
            weighted,
            paths,
            params,
        }
    }

    pub fn run(&self) -> Result<HeuristicOutcome> {
        if self.paths.is_empty() {
            return Err(OptimizeError::Internal(
                "heuristic search started with no candidate paths".to_string(),
            ));
        }

        let started = Instant::now();
        let size = self.population_size();

        // Seed by cycling the enumerated list until the target size.
        let mut population: Vec<Vec<String>> =
            self.paths.iter().cycle().take(size).cloned().collect();

        let interval = mutation_interval(self.params.mutation_rate);
        let mut best: Option<(Vec<String>, f64)> = None;

        for gen in 0..self.params.generations as usize {
            // Select: elitist retention of the cheapest fraction.
            population.sort_by(|a, b| {
                self.weighted
                    .path_cost(a)
                    .total_cmp(&self.weighted.path_cost(b))
            });
            let keep = ((self.params.retain_fraction * population.len() as f64).ceil() as usize)
                .max(1);
            population.truncate(keep);

            // Scheduled replacement: a full deterministic refresh from
            // the enumerated list on every interval-th generation.
            if interval.map_or(false, |iv| gen % iv == 0) {
                for (i, member) in population.iter_mut().enumerate() {
                    *member = self.paths[(gen + i) % self.paths.len()].clone();
                }
            }

            // Evaluate, tracking the global best.
            for path in &population {
                let cost = self.weighted.path_cost(path);
                if best.as_ref().map_or(true, |(_, c)| cost < *c) {
                    best = Some((path.clone(), cost));
                }
            }
            debug!(
                gen,
                population = population.len(),
                best_cost = best.as_ref().map(|(_, c)| *c),
                "generation done"
            );
        }

        let elapsed_secs = started.elapsed().as_secs_f64();
        match best {
            Some((path, cost)) if cost.is_finite() => Ok(HeuristicOutcome {
                path,
                cost,
                generations: self.params.generations,
                elapsed_secs,
            }),
            _ => Err(OptimizeError::NoSolution),
        }
    }

    /// clamp(L!, 2, 100) with L the floor of the mean enumerated length
    fn population_size(&self) -> usize {
        let mean_len = self.paths.iter().map(|p| p.len()).sum::<usize>() / self.paths.len();
        saturating_factorial(mean_len, MAX_POPULATION).clamp(MIN_POPULATION, MAX_POPULATION)
    }
}

/// Generations between scheduled replacements; `None` disables them
fn mutation_interval(rate: f64) -> Option<usize> {
    if rate <= 0.0 {
        return None;
    }
    Some(((1.0 / rate).round() as usize).max(1))
}

/// n! stopping early once `cap` is passed, so large path lengths
/// cannot overflow.
fn saturating_factorial(n: usize, cap: usize) -> usize {
    let mut acc: usize = 1;
    for k in 2..=n {
        acc = acc.saturating_mul(k);
        if acc >= cap {
            return cap;
        }
    }
    acc
}
