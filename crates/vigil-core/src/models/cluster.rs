use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RedactedEvent;

/// A group of topically related signal events treated as one reviewable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Stable within a pipeline run, assigned in formation order.
    pub cluster_id: String,
    pub members: Vec<RedactedEvent>,
    /// The terms that drove grouping, most frequent first.
    pub representative_keywords: Vec<String>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id())
    }

    /// Earliest and latest member timestamps, `None` when empty.
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.members.iter().map(|m| m.timestamp()).min()?;
        let last = self.members.iter().map(|m| m.timestamp()).max()?;
        Some((first, last))
    }
}
