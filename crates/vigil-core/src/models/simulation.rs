use serde::{Deserialize, Serialize};

use crate::errors::ParameterError;

/// Declared valid range for one simulation driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self { name, min, max }
    }

    pub fn check(&self, value: f64) -> Result<(), ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite {
                parameter: self.name,
            });
        }
        if value < self.min || value > self.max {
            return Err(ParameterError::OutOfRange {
                parameter: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub const INTEREST_RATE_RANGE: ParameterRange =
    ParameterRange::new("interest_rate_bps", 0.0, 100.0);
pub const DOWNTIME_RANGE: ParameterRange = ParameterRange::new("downtime_minutes", 0.0, 120.0);
pub const REGULATORY_FINE_RANGE: ParameterRange =
    ParameterRange::new("regulatory_fine_mm", 0.0, 10.0);
pub const MARKET_VOLATILITY_RANGE: ParameterRange =
    ParameterRange::new("market_volatility_index", 10.0, 50.0);
pub const CYBER_BREACH_RANGE: ParameterRange =
    ParameterRange::new("cyber_breach_cost_mm", 0.0, 20.0);

/// Analyst-supplied cost/impact drivers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Interest-rate impact in basis points.
    pub interest_rate_bps: f64,
    pub downtime_minutes: f64,
    /// Regulatory fine in currency-millions.
    pub regulatory_fine_mm: f64,
    /// VIX-style market volatility index.
    pub market_volatility_index: f64,
    /// Cyber-breach cost in currency-millions.
    pub cyber_breach_cost_mm: f64,
}

impl SimulationInputs {
    pub const RANGES: [ParameterRange; 5] = [
        INTEREST_RATE_RANGE,
        DOWNTIME_RANGE,
        REGULATORY_FINE_RANGE,
        MARKET_VOLATILITY_RANGE,
        CYBER_BREACH_RANGE,
    ];

    /// Every driver at the bottom of its range.
    pub fn minimums() -> Self {
        Self {
            interest_rate_bps: INTEREST_RATE_RANGE.min,
            downtime_minutes: DOWNTIME_RANGE.min,
            regulatory_fine_mm: REGULATORY_FINE_RANGE.min,
            market_volatility_index: MARKET_VOLATILITY_RANGE.min,
            cyber_breach_cost_mm: CYBER_BREACH_RANGE.min,
        }
    }

    /// Every driver at the top of its range.
    pub fn maximums() -> Self {
        Self {
            interest_rate_bps: INTEREST_RATE_RANGE.max,
            downtime_minutes: DOWNTIME_RANGE.max,
            regulatory_fine_mm: REGULATORY_FINE_RANGE.max,
            market_volatility_index: MARKET_VOLATILITY_RANGE.max,
            cyber_breach_cost_mm: CYBER_BREACH_RANGE.max,
        }
    }

    /// Values paired with their declared ranges, in `RANGES` order.
    pub fn values(&self) -> [(ParameterRange, f64); 5] {
        [
            (INTEREST_RATE_RANGE, self.interest_rate_bps),
            (DOWNTIME_RANGE, self.downtime_minutes),
            (REGULATORY_FINE_RANGE, self.regulatory_fine_mm),
            (MARKET_VOLATILITY_RANGE, self.market_volatility_index),
            (CYBER_BREACH_RANGE, self.cyber_breach_cost_mm),
        ]
    }

    /// Reject the first out-of-range or non-finite driver.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (range, value) in self.values() {
            range.check(value)?;
        }
        Ok(())
    }
}

impl Default for SimulationInputs {
    /// Starting values of the analytics form.
    fn default() -> Self {
        Self {
            interest_rate_bps: 25.0,
            downtime_minutes: 30.0,
            regulatory_fine_mm: 1.0,
            market_volatility_index: 20.0,
            cyber_breach_cost_mm: 5.0,
        }
    }
}

/// Summary statistics of one Monte Carlo run. Never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fraction of draws above the breach threshold, in [0, 1].
    pub breach_probability: f64,
    pub mean_impact: f64,
    /// 95th-percentile impact (nearest rank).
    pub var_95: f64,
    pub is_breach: bool,
    pub iterations: usize,
    /// Base seed the draws were derived from.
    pub seed: u64,
}
