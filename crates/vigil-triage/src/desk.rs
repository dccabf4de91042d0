use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;
use vigil_core::errors::TriageError;
use vigil_core::models::{ClusterAnalysis, PipelineResult};

use crate::audit_log::{AuditAction, AuditEntry, AuditLog};
use crate::departments::Department;

/// Recorded as the acting user when none is configured.
pub const DEFAULT_USER: &str = "Risk Analyst";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Escalated,
    Dismissed,
}

impl Resolution {
    fn as_str(self) -> &'static str {
        match self {
            Self::Escalated => "escalated",
            Self::Dismissed => "dismissed",
        }
    }
}

/// Action counts over the whole audit trail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub escalated: usize,
    pub dismissed: usize,
    pub routed: usize,
}

impl ActivitySummary {
    pub fn from_log(log: &AuditLog) -> Self {
        Self {
            escalated: log.count(AuditAction::Escalated),
            dismissed: log.count(AuditAction::Dismissed),
            routed: log.count(AuditAction::Routed),
        }
    }
}

/// Analyst review queue over one pipeline result.
///
/// Each cluster is escalated or dismissed at most once; escalated clusters
/// may be routed any number of times. Every accepted action is appended to
/// the audit log, rejected ones leave it untouched.
pub struct TriageDesk {
    analyses: Vec<ClusterAnalysis>,
    resolutions: BTreeMap<String, Resolution>,
    /// Cluster ids in escalation order.
    escalation_order: Vec<String>,
    log: AuditLog,
    user: String,
}

impl TriageDesk {
    pub fn new(analyses: Vec<ClusterAnalysis>) -> Self {
        Self {
            analyses,
            resolutions: BTreeMap::new(),
            escalation_order: Vec::new(),
            log: AuditLog::new(),
            user: DEFAULT_USER.to_string(),
        }
    }

    pub fn from_result(result: &PipelineResult) -> Self {
        Self::new(result.analyses.clone())
    }

    /// Set the user recorded on subsequent audit entries.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Clusters awaiting a decision, highest risk first (ties by cluster id).
    pub fn pending(&self) -> Vec<&ClusterAnalysis> {
        let mut pending: Vec<&ClusterAnalysis> = self
            .analyses
            .iter()
            .filter(|a| !self.resolutions.contains_key(a.cluster_id()))
            .collect();
        pending.sort_by(|a, b| {
            b.total_score()
                .total_cmp(&a.total_score())
                .then_with(|| a.cluster_id().cmp(b.cluster_id()))
        });
        pending
    }

    /// Escalated clusters in the order they were escalated.
    pub fn escalated(&self) -> Vec<&ClusterAnalysis> {
        self.escalation_order
            .iter()
            .filter_map(|id| self.find(id))
            .collect()
    }

    pub fn dismissed(&self) -> Vec<&ClusterAnalysis> {
        self.analyses
            .iter()
            .filter(|a| self.resolutions.get(a.cluster_id()) == Some(&Resolution::Dismissed))
            .collect()
    }

    pub fn escalate(&mut self, cluster_id: &str) -> Result<&AuditEntry, TriageError> {
        self.resolve(cluster_id, Resolution::Escalated)?;
        self.escalation_order.push(cluster_id.to_string());
        info!(cluster_id, user = %self.user, "cluster escalated");
        Ok(self
            .log
            .record(AuditAction::Escalated, cluster_id, &self.user, ""))
    }

    pub fn dismiss(&mut self, cluster_id: &str) -> Result<&AuditEntry, TriageError> {
        self.resolve(cluster_id, Resolution::Dismissed)?;
        info!(cluster_id, user = %self.user, "cluster dismissed");
        Ok(self
            .log
            .record(AuditAction::Dismissed, cluster_id, &self.user, ""))
    }

    /// Hand an escalated cluster to a department.
    pub fn route(
        &mut self,
        cluster_id: &str,
        department: Department,
    ) -> Result<&AuditEntry, TriageError> {
        self.require_known(cluster_id)?;
        if self.resolutions.get(cluster_id) != Some(&Resolution::Escalated) {
            return Err(TriageError::NotEscalated {
                cluster_id: cluster_id.to_string(),
            });
        }
        info!(cluster_id, department = %department, "cluster routed");
        let details = format!("Routed to {department}");
        Ok(self
            .log
            .record(AuditAction::Routed, cluster_id, &self.user, &details))
    }

    /// Route an escalated cluster to the department owning its suggested queue.
    pub fn route_to_suggested(&mut self, cluster_id: &str) -> Result<&AuditEntry, TriageError> {
        let department = self
            .find(cluster_id)
            .and_then(|a| Department::from_queue(&a.suggested_queue))
            .unwrap_or(Department::CustomerExperience);
        self.route(cluster_id, department)
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.log
    }

    pub fn activity_summary(&self) -> ActivitySummary {
        ActivitySummary::from_log(&self.log)
    }

    fn find(&self, cluster_id: &str) -> Option<&ClusterAnalysis> {
        self.analyses.iter().find(|a| a.cluster_id() == cluster_id)
    }

    fn require_known(&self, cluster_id: &str) -> Result<(), TriageError> {
        match self.find(cluster_id) {
            Some(_) => Ok(()),
            None => Err(TriageError::UnknownCluster {
                cluster_id: cluster_id.to_string(),
            }),
        }
    }

    fn resolve(&mut self, cluster_id: &str, resolution: Resolution) -> Result<(), TriageError> {
        self.require_known(cluster_id)?;
        if let Some(previous) = self.resolutions.get(cluster_id) {
            return Err(TriageError::AlreadyResolved {
                cluster_id: cluster_id.to_string(),
                resolution: previous.as_str(),
            });
        }
        self.resolutions.insert(cluster_id.to_string(), resolution);
        Ok(())
    }
}
