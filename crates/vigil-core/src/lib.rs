//! # vigil-core
//!
//! Foundation crate for the Vigil signal triage system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use errors::{VigilError, VigilResult};
pub use models::{
    AnalystCard, Category, Cluster, ClusterAnalysis, ClusteringResult, GatingResult,
    PipelineResult, PipelineStage, RawEvent, RedactedEvent, RiskScore, RiskTier,
    SimulationInputs, SimulationResult, SourceChannel,
};
