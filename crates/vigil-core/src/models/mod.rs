pub mod analysis;
pub mod category;
pub mod cluster;
pub mod event;
pub mod pipeline_result;
pub mod risk_score;
pub mod simulation;

pub use analysis::{AnalystCard, ClusterAnalysis, Rationale};
pub use category::Category;
pub use cluster::Cluster;
pub use event::{EventRecord, PiiCategory, RawEvent, RedactedEvent, Redaction, SourceChannel};
pub use pipeline_result::{
    ClusteringResult, GatingResult, PipelineResult, PipelineStage, RejectedRecord,
};
pub use risk_score::{RiskFactor, RiskScore, RiskTier};
pub use simulation::{ParameterRange, SimulationInputs, SimulationResult};
