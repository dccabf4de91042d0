//! Aggregation of one draw of the cost drivers into an impact figure.

use rand::Rng;
use vigil_core::config::SimulationConfig;
use vigil_core::models::SimulationInputs;

use crate::sampling::{heavy_tail_around, normal_around};

/// VIX level treated as calm; excess volatility adds a direct cost.
const CALM_VOLATILITY: f64 = 10.0;
const REFERENCE_VOLATILITY: f64 = 20.0;

/// MM of impact per basis point at reference volatility.
const RATE_COST_PER_BPS: f64 = 0.05;
/// MM of impact per minute of downtime.
const DOWNTIME_COST_PER_MINUTE: f64 = 0.04;
/// MM of impact per VIX point above calm.
const EXCESS_VOLATILITY_COST: f64 = 0.1;

/// One sampled realisation of the five drivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    pub interest_rate_bps: f64,
    pub downtime_minutes: f64,
    pub regulatory_fine_mm: f64,
    pub market_volatility_index: f64,
    pub cyber_breach_cost_mm: f64,
}

impl Draw {
    /// The drivers exactly at their supplied values.
    pub fn at(inputs: &SimulationInputs) -> Self {
        Self {
            interest_rate_bps: inputs.interest_rate_bps,
            downtime_minutes: inputs.downtime_minutes,
            regulatory_fine_mm: inputs.regulatory_fine_mm,
            market_volatility_index: inputs.market_volatility_index,
            cyber_breach_cost_mm: inputs.cyber_breach_cost_mm,
        }
    }

    /// Sample every driver around its supplied value. Volatility and cyber
    /// cost are heavy-tailed.
    pub fn sample<R: Rng>(rng: &mut R, inputs: &SimulationInputs, config: &SimulationConfig) -> Self {
        let dof = config.tail_degrees_of_freedom;
        Self {
            interest_rate_bps: normal_around(rng, inputs.interest_rate_bps, config.normal_spread),
            downtime_minutes: normal_around(rng, inputs.downtime_minutes, config.normal_spread),
            regulatory_fine_mm: normal_around(rng, inputs.regulatory_fine_mm, config.normal_spread),
            market_volatility_index: heavy_tail_around(
                rng,
                inputs.market_volatility_index,
                config.heavy_tail_spread,
                dof,
            ),
            cyber_breach_cost_mm: heavy_tail_around(
                rng,
                inputs.cyber_breach_cost_mm,
                config.heavy_tail_spread,
                dof,
            ),
        }
    }

    /// Total impact in currency-millions.
    pub fn impact(&self) -> f64 {
        let vix = self.market_volatility_index;
        let rate_cost = self.interest_rate_bps * RATE_COST_PER_BPS * (vix / REFERENCE_VOLATILITY);
        let downtime_cost = self.downtime_minutes * DOWNTIME_COST_PER_MINUTE;
        let volatility_cost = EXCESS_VOLATILITY_COST * (vix - CALM_VOLATILITY).max(0.0);
        rate_cost
            + downtime_cost
            + self.regulatory_fine_mm
            + self.cyber_breach_cost_mm
            + volatility_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_at_minimums_is_zero() {
        assert_eq!(Draw::at(&SimulationInputs::minimums()).impact(), 0.0);
    }

    #[test]
    fn impact_at_maximums() {
        // 12.5 rate + 4.8 downtime + 10 fine + 20 cyber + 4 volatility
        let impact = Draw::at(&SimulationInputs::maximums()).impact();
        assert!((impact - 51.3).abs() < 1e-9, "impact {impact}");
    }

    #[test]
    fn impact_at_defaults() {
        // 1.25 + 1.2 + 1 + 5 + 1
        let impact = Draw::at(&SimulationInputs::default()).impact();
        assert!((impact - 9.45).abs() < 1e-9, "impact {impact}");
    }

    #[test]
    fn volatility_amplifies_rate_cost() {
        let calm = SimulationInputs {
            market_volatility_index: 20.0,
            ..SimulationInputs::minimums()
        };
        let stressed = SimulationInputs {
            market_volatility_index: 40.0,
            interest_rate_bps: 50.0,
            ..SimulationInputs::minimums()
        };
        let calm_rate = SimulationInputs {
            interest_rate_bps: 50.0,
            ..calm
        };
        let calm_cost = Draw::at(&calm_rate).impact() - Draw::at(&calm).impact();
        let stressed_base = SimulationInputs {
            interest_rate_bps: 0.0,
            ..stressed
        };
        let stressed_cost = Draw::at(&stressed).impact() - Draw::at(&stressed_base).impact();
        assert!((stressed_cost - 2.0 * calm_cost).abs() < 1e-9);
    }
}
