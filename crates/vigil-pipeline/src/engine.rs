//! PipelineEngine: owns the configuration and redactor, runs the pipeline.

use vigil_core::config::VigilConfig;
use vigil_core::errors::VigilResult;
use vigil_core::models::{EventRecord, PipelineResult, RawEvent};
use vigil_core::traits::IRedactor;
use vigil_privacy::RedactionEngine;

use crate::pipeline;

/// Stateless between calls: every `process` is a pure function of its input
/// events and the engine's configuration.
pub struct PipelineEngine {
    config: VigilConfig,
    redactor: Box<dyn IRedactor>,
}

impl PipelineEngine {
    /// Engine with the built-in regex redactor.
    pub fn new(config: VigilConfig) -> Self {
        Self::with_redactor(config, Box::new(RedactionEngine::new()))
    }

    pub fn with_redactor(config: VigilConfig, redactor: Box<dyn IRedactor>) -> Self {
        Self { config, redactor }
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    /// Process typed events.
    pub fn process(&self, events: &[RawEvent]) -> VigilResult<PipelineResult> {
        pipeline::run_pipeline(events, &self.config, self.redactor.as_ref())
    }

    /// Process loose records; malformed ones are reported in `rejected`.
    pub fn process_records(&self, records: &[EventRecord]) -> VigilResult<PipelineResult> {
        pipeline::run_pipeline_on_records(records, &self.config, self.redactor.as_ref())
    }

    /// Cache key over the serialized events and configuration. Equal keys
    /// mean equal results, timing aside.
    pub fn cache_key(&self, events: &[RawEvent]) -> VigilResult<String> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&serde_json::to_vec(events)?);
        hasher.update(&serde_json::to_vec(&self.config)?);
        Ok(hasher.finalize().to_hex().to_string())
    }
}

impl Default for PipelineEngine {
    fn default() -> Self {
        Self::new(VigilConfig::default())
    }
}
