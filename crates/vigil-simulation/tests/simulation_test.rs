//! Monte Carlo engine behaviour: extreme scenarios, reproducibility, errors.

use vigil_core::config::SimulationConfig;
use vigil_core::errors::{ParameterError, VigilError, VigilErrorCode};
use vigil_core::models::SimulationInputs;
use vigil_simulation::SimulationEngine;

#[test]
fn minimum_drivers_never_breach() {
    let result = SimulationEngine::seeded(42)
        .run_simulation(&SimulationInputs::minimums(), 5_000)
        .unwrap();
    assert!(result.breach_probability < 1e-3, "p = {}", result.breach_probability);
    assert!(!result.is_breach);
    assert_eq!(result.iterations, 5_000);
    assert_eq!(result.seed, 42);
}

#[test]
fn maximum_drivers_breach() {
    let result = SimulationEngine::seeded(42)
        .run_simulation(&SimulationInputs::maximums(), 5_000)
        .unwrap();
    assert!(result.breach_probability > 0.5, "p = {}", result.breach_probability);
    assert!(result.is_breach);
    assert!(result.var_95 >= result.mean_impact * 0.9);
}

#[test]
fn default_drivers_stay_below_threshold() {
    let result = SimulationEngine::seeded(7)
        .run_simulation(&SimulationInputs::default(), 5_000)
        .unwrap();
    assert!(!result.is_breach);
    assert!((result.mean_impact - 9.45).abs() < 1.0, "mean {}", result.mean_impact);
    assert!(result.var_95 > result.mean_impact);
}

#[test]
fn same_seed_same_result() {
    let inputs = SimulationInputs {
        cyber_breach_cost_mm: 15.0,
        market_volatility_index: 35.0,
        ..SimulationInputs::default()
    };
    let a = SimulationEngine::seeded(1234).run_simulation(&inputs, 10_000).unwrap();
    let b = SimulationEngine::seeded(1234).run_simulation(&inputs, 10_000).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let inputs = SimulationInputs::default();
    let a = SimulationEngine::seeded(1).run_simulation(&inputs, 2_000).unwrap();
    let b = SimulationEngine::seeded(2).run_simulation(&inputs, 2_000).unwrap();
    assert_ne!(a.mean_impact, b.mean_impact);
}

#[test]
fn result_is_independent_of_thread_count() {
    let inputs = SimulationInputs::maximums();
    let engine = SimulationEngine::seeded(99);
    let parallel = engine.run_simulation(&inputs, 20_000).unwrap();
    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| engine.run_simulation(&inputs, 20_000).unwrap());
    assert_eq!(parallel, single);
}

#[test]
fn unseeded_run_reports_a_replayable_seed() {
    let inputs = SimulationInputs::default();
    let first = SimulationEngine::default().run_simulation(&inputs, 1_500).unwrap();
    let replay = SimulationEngine::seeded(first.seed)
        .run_simulation(&inputs, 1_500)
        .unwrap();
    assert_eq!(first, replay);
}

#[test]
fn zero_iterations_rejected() {
    let err = SimulationEngine::seeded(1)
        .run_simulation(&SimulationInputs::default(), 0)
        .unwrap_err();
    assert!(matches!(
        err,
        VigilError::Parameter(ParameterError::NonPositiveIterations)
    ));
    assert_eq!(err.error_code(), "PARAMETER_ERROR");
}

#[test]
fn absurd_iterations_rejected() {
    let err = SimulationEngine::seeded(1)
        .run_simulation(&SimulationInputs::default(), usize::MAX)
        .unwrap_err();
    assert!(matches!(
        err,
        VigilError::Parameter(ParameterError::TooManyIterations { .. })
    ));
}

#[test]
fn out_of_range_driver_rejected() {
    let inputs = SimulationInputs {
        downtime_minutes: 500.0,
        ..SimulationInputs::default()
    };
    let err = SimulationEngine::seeded(1).run_simulation(&inputs, 100).unwrap_err();
    assert!(matches!(
        err,
        VigilError::Parameter(ParameterError::OutOfRange {
            parameter: "downtime_minutes",
            ..
        })
    ));
}

#[test]
fn run_uses_configured_iterations() {
    let engine = SimulationEngine::new(SimulationConfig {
        iterations: 321,
        seed: Some(5),
        ..SimulationConfig::default()
    });
    let result = engine.run(&SimulationInputs::default()).unwrap();
    assert_eq!(result.iterations, 321);
}

#[test]
fn lower_threshold_raises_breach_probability() {
    let inputs = SimulationInputs::default();
    let strict = SimulationEngine::new(SimulationConfig {
        seed: Some(3),
        breach_threshold_mm: 5.0,
        ..SimulationConfig::default()
    });
    let lenient = SimulationEngine::seeded(3);
    let strict_p = strict.run_simulation(&inputs, 4_000).unwrap().breach_probability;
    let lenient_p = lenient.run_simulation(&inputs, 4_000).unwrap().breach_probability;
    assert!(strict_p > lenient_p);
    assert!(strict_p > 0.9);
}
