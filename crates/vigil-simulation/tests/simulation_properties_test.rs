//! Property tests for simulation bounds and reproducibility.

use proptest::prelude::*;
use vigil_core::models::SimulationInputs;
use vigil_simulation::SimulationEngine;

fn arb_inputs() -> impl Strategy<Value = SimulationInputs> {
    (
        0.0..=100.0f64,
        0.0..=120.0f64,
        0.0..=10.0f64,
        10.0..=50.0f64,
        0.0..=20.0f64,
    )
        .prop_map(|(rate, downtime, fine, vix, cyber)| SimulationInputs {
            interest_rate_bps: rate,
            downtime_minutes: downtime,
            regulatory_fine_mm: fine,
            market_volatility_index: vix,
            cyber_breach_cost_mm: cyber,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn statistics_stay_in_bounds(inputs in arb_inputs(), iterations in 1usize..3_000, seed in any::<u64>()) {
        let result = SimulationEngine::seeded(seed).run_simulation(&inputs, iterations).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.breach_probability));
        prop_assert!(result.mean_impact >= 0.0);
        prop_assert!(result.var_95 >= 0.0);
        prop_assert_eq!(result.is_breach, result.breach_probability > 0.5);
        prop_assert_eq!(result.iterations, iterations);
    }

    #[test]
    fn seeded_runs_repeat(inputs in arb_inputs(), iterations in 1usize..3_000, seed in any::<u64>()) {
        let engine = SimulationEngine::seeded(seed);
        let a = engine.run_simulation(&inputs, iterations).unwrap();
        let b = engine.run_simulation(&inputs, iterations).unwrap();
        prop_assert_eq!(a.breach_probability, b.breach_probability);
        prop_assert_eq!(a.mean_impact, b.mean_impact);
        prop_assert_eq!(a.var_95, b.var_95);
    }
}
