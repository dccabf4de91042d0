use std::fmt;

use serde::{Deserialize, Serialize};

/// Teams an escalated cluster can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    ItOperations,
    FraudPrevention,
    Communications,
    RiskManagement,
    CustomerExperience,
    Compliance,
}

impl Department {
    pub const ALL: [Department; 6] = [
        Self::ItOperations,
        Self::FraudPrevention,
        Self::Communications,
        Self::RiskManagement,
        Self::CustomerExperience,
        Self::Compliance,
    ];

    /// Display name. Matches the pipeline's suggested queue names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ItOperations => "IT Operations",
            Self::FraudPrevention => "Fraud Prevention",
            Self::Communications => "Communications",
            Self::RiskManagement => "Risk Management",
            Self::CustomerExperience => "Customer Experience",
            Self::Compliance => "Compliance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ItOperations => "System outages, technical failures",
            Self::FraudPrevention => "Scams, unauthorized access, phishing",
            Self::Communications => "Misinformation, PR crisis",
            Self::RiskManagement => "Liquidity concerns, market rumors",
            Self::CustomerExperience => "Service complaints, sentiment",
            Self::Compliance => "Regulatory, audit requirements",
        }
    }

    /// Department owning a suggested queue, by exact name.
    pub fn from_queue(queue: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == queue)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
