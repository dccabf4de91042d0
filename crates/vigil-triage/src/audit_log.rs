use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Analyst decisions recorded on the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Escalated,
    Dismissed,
    Routed,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Escalated => "ESCALATED",
            Self::Dismissed => "DISMISSED",
            Self::Routed => "ROUTED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: AuditAction,
    pub cluster_id: String,
    pub user: String,
    /// Free text, empty when the action needs no detail.
    pub details: String,
}

/// Append-only log of analyst actions. Entries are never edited or removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time.
    pub fn record(
        &mut self,
        action: AuditAction,
        cluster_id: &str,
        user: &str,
        details: &str,
    ) -> &AuditEntry {
        self.record_at(Utc::now(), action, cluster_id, user, details)
    }

    /// Append an entry with an explicit timestamp.
    pub fn record_at(
        &mut self,
        timestamp: DateTime<Utc>,
        action: AuditAction,
        cluster_id: &str,
        user: &str,
        details: &str,
    ) -> &AuditEntry {
        let index = self.entries.len();
        self.entries.push(AuditEntry {
            id: Uuid::new_v4(),
            timestamp,
            action,
            cluster_id: cluster_id.to_string(),
            user: user.to_string(),
            details: details.to_string(),
        });
        &self.entries[index]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[AuditEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn count(&self, action: AuditAction) -> usize {
        self.entries.iter().filter(|e| e.action == action).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
