use std::fmt;

use serde::{Deserialize, Serialize};

/// Topical category of a cluster.
///
/// Declaration order is the tie-break priority (most urgent first), so the
/// derived `Ord` and any `BTreeMap<Category, _>` iterate in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Fraud,
    Service,
    Misinformation,
    Risk,
    Compliance,
    CustomerExperience,
    Other,
}

impl Category {
    /// All categories in priority order.
    pub const PRIORITY: [Category; 7] = [
        Self::Fraud,
        Self::Service,
        Self::Misinformation,
        Self::Risk,
        Self::Compliance,
        Self::CustomerExperience,
        Self::Other,
    ];

    /// Position in the priority order; 0 is most urgent.
    pub fn priority_rank(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fraud => "FRAUD",
            Self::Service => "SERVICE",
            Self::Misinformation => "MISINFORMATION",
            Self::Risk => "RISK",
            Self::Compliance => "COMPLIANCE",
            Self::CustomerExperience => "CUSTOMER_EXPERIENCE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
