//! Configuration for every subsystem, with TOML loading and validation.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`VIGIL_*`)
//! 2. Config file passed to [`VigilConfig::load`]
//! 3. Compiled defaults

pub mod clustering_config;
pub mod defaults;
pub mod gate_config;
pub mod observability_config;
pub mod scoring_config;
pub mod simulation_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use clustering_config::ClusteringConfig;
pub use gate_config::GateConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use simulation_config::SimulationConfig;

use crate::constants::MAX_SIMULATION_ITERATIONS;
use crate::errors::ConfigError;

pub const ENV_GATE_THRESHOLD: &str = "VIGIL_GATE_THRESHOLD";
pub const ENV_SIMILARITY_THRESHOLD: &str = "VIGIL_SIMILARITY_THRESHOLD";
pub const ENV_SIMULATION_SEED: &str = "VIGIL_SIMULATION_SEED";
pub const ENV_SIMULATION_ITERATIONS: &str = "VIGIL_SIMULATION_ITERATIONS";

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub gate: GateConfig,
    pub clustering: ClusteringConfig,
    pub scoring: ScoringConfig,
    pub simulation: SimulationConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Load from a TOML file, apply `VIGIL_*` environment overrides, validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file without validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (environment, CLI, tests).
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_GATE_THRESHOLD) {
            self.gate.threshold = parse_override(ENV_GATE_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_SIMILARITY_THRESHOLD) {
            self.clustering.similarity_threshold = parse_override(ENV_SIMILARITY_THRESHOLD, &v)?;
        }
        if let Some(v) = lookup(ENV_SIMULATION_SEED) {
            self.simulation.seed = Some(parse_override(ENV_SIMULATION_SEED, &v)?);
        }
        if let Some(v) = lookup(ENV_SIMULATION_ITERATIONS) {
            self.simulation.iterations = parse_override(ENV_SIMULATION_ITERATIONS, &v)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gate.threshold.is_finite() || self.gate.threshold < 0.0 {
            return Err(invalid("gate.threshold", "must be a non-negative number"));
        }
        if !(0.0..=1.0).contains(&self.clustering.similarity_threshold) {
            return Err(invalid(
                "clustering.similarity_threshold",
                "must be between 0.0 and 1.0",
            ));
        }
        let similarity_weights = self.clustering.category_weight
            + self.clustering.keyword_weight
            + self.clustering.proximity_weight;
        if (similarity_weights - 1.0).abs() > 1e-6 {
            return Err(invalid("clustering", "similarity weights must sum to 1.0"));
        }
        if self.clustering.proximity_window_hours <= 0.0 {
            return Err(invalid(
                "clustering.proximity_window_hours",
                "must be greater than 0",
            ));
        }
        if (self.scoring.total_share() - 1.0).abs() > 1e-6 {
            return Err(invalid("scoring", "factor shares must sum to 1.0"));
        }
        if self.simulation.iterations == 0 || self.simulation.iterations > MAX_SIMULATION_ITERATIONS
        {
            return Err(invalid(
                "simulation.iterations",
                &format!("must be between 1 and {MAX_SIMULATION_ITERATIONS}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.simulation.policy_cutoff) {
            return Err(invalid(
                "simulation.policy_cutoff",
                "must be between 0.0 and 1.0",
            ));
        }
        if self.simulation.tail_degrees_of_freedom < 3 {
            return Err(invalid(
                "simulation.tail_degrees_of_freedom",
                "must be at least 3 so the variance is finite",
            ));
        }
        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("cannot parse `{raw}`"),
    })
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
