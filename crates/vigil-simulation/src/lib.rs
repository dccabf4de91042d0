//! # vigil-simulation
//!
//! Monte Carlo estimator of downstream financial impact. Independent of the
//! triage pipeline: callers supply five cost drivers and an iteration count.
//!
//! Draws are split into fixed-size chunks, each with its own seed derived from
//! the base seed, so a seeded run is reproducible on any number of threads.

pub mod engine;
pub mod impact;
pub mod sampling;
pub mod stats;

pub use engine::SimulationEngine;
