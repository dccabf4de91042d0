//! # vigil-pipeline
//!
//! Batch triage pipeline over social-media-style events.
//! Validation → Redaction → Gate → Clustering → Scoring → Rationale.
//! A pure function of (events, config): no cross-call state, no I/O.

pub mod algorithms;
pub mod engine;
pub mod pipeline;
pub mod playbook;

pub use engine::PipelineEngine;
