use serde::{Deserialize, Serialize};

use super::defaults;

/// Monte Carlo engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Iterations used when the caller does not specify a count.
    pub iterations: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Impact (currency-millions) above which a draw counts as a breach.
    pub breach_threshold_mm: f64,
    /// `is_breach` is set when breach probability exceeds this.
    pub policy_cutoff: f64,
    /// Relative spread for normally distributed drivers.
    pub normal_spread: f64,
    /// Relative spread for heavy-tailed drivers.
    pub heavy_tail_spread: f64,
    /// Student-t degrees of freedom for heavy-tailed drivers.
    pub tail_degrees_of_freedom: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            iterations: defaults::DEFAULT_ITERATIONS,
            seed: None,
            breach_threshold_mm: defaults::DEFAULT_BREACH_THRESHOLD_MM,
            policy_cutoff: defaults::DEFAULT_POLICY_CUTOFF,
            normal_spread: defaults::DEFAULT_NORMAL_SPREAD,
            heavy_tail_spread: defaults::DEFAULT_HEAVY_TAIL_SPREAD,
            tail_degrees_of_freedom: defaults::DEFAULT_TAIL_DEGREES_OF_FREEDOM,
        }
    }
}
