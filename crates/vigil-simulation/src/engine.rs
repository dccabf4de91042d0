use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use vigil_core::config::SimulationConfig;
use vigil_core::constants::{MAX_SIMULATION_ITERATIONS, SIMULATION_CHUNK_SIZE};
use vigil_core::errors::{ParameterError, VigilResult};
use vigil_core::models::{SimulationInputs, SimulationResult};
use vigil_core::tracing_setup::events;

use crate::impact::Draw;
use crate::sampling::splitmix64;
use crate::stats;

/// Monte Carlo breach estimator.
///
/// Randomness is explicit: a configured seed makes every run reproducible,
/// otherwise each run draws a fresh base seed from entropy and reports it in
/// [`SimulationResult::seed`] so the run can be replayed.
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Default configuration with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run with the configured default iteration count.
    pub fn run(&self, inputs: &SimulationInputs) -> VigilResult<SimulationResult> {
        self.run_simulation(inputs, self.config.iterations)
    }

    /// Estimate breach probability, mean impact and 95% VaR over `iterations`
    /// independent draws.
    ///
    /// The iteration count and every driver are validated before any draw.
    pub fn run_simulation(
        &self,
        inputs: &SimulationInputs,
        iterations: usize,
    ) -> VigilResult<SimulationResult> {
        validate_iterations(iterations)?;
        inputs.validate()?;

        let seed = self.config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let span = vigil_core::simulation_span!(iterations, seed);
        let _guard = span.enter();

        let mut impacts = self.draw_impacts(inputs, iterations, seed);

        let mean_impact = stats::mean(&impacts);
        let breach_probability = stats::exceedance(&impacts, self.config.breach_threshold_mm);
        impacts.sort_by(f64::total_cmp);
        let var_95 = stats::percentile_sorted(&impacts, 0.95);
        let is_breach = breach_probability > self.config.policy_cutoff;

        debug!(mean_impact, var_95, "simulation statistics");
        events::simulation_completed(iterations, seed, breach_probability, is_breach);

        Ok(SimulationResult {
            breach_probability,
            mean_impact,
            var_95,
            is_breach,
            iterations,
            seed,
        })
    }

    /// Impact of every draw, in chunk order. Each chunk owns an RNG seeded
    /// from `(seed, chunk_index)`, so the output does not depend on how rayon
    /// schedules the chunks.
    fn draw_impacts(&self, inputs: &SimulationInputs, iterations: usize, seed: u64) -> Vec<f64> {
        let chunk_count = iterations.div_ceil(SIMULATION_CHUNK_SIZE);
        let chunks: Vec<Vec<f64>> = (0..chunk_count)
            .into_par_iter()
            .map(|chunk_index| {
                let start = chunk_index * SIMULATION_CHUNK_SIZE;
                let len = SIMULATION_CHUNK_SIZE.min(iterations - start);
                let mut rng = StdRng::seed_from_u64(splitmix64(seed, chunk_index as u64));
                (0..len)
                    .map(|_| Draw::sample(&mut rng, inputs, &self.config).impact())
                    .collect()
            })
            .collect();
        chunks.concat()
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

fn validate_iterations(iterations: usize) -> Result<(), ParameterError> {
    if iterations == 0 {
        return Err(ParameterError::NonPositiveIterations);
    }
    if iterations > MAX_SIMULATION_ITERATIONS {
        return Err(ParameterError::TooManyIterations {
            requested: iterations,
            max: MAX_SIMULATION_ITERATIONS,
        });
    }
    Ok(())
}
