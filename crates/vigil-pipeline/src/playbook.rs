//! Category playbook: one row of data per category.
//!
//! Adding or retuning a category means editing this table; no stage branches
//! on category.

use vigil_core::models::Category;

/// Everything downstream stages need to know about a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybookEntry {
    pub category: Category,
    /// Human-readable title prefix.
    pub label: &'static str,
    /// Department queue the cluster is routed to.
    pub queue: &'static str,
    /// Severity floor before lexical evidence is added.
    pub base_severity: f64,
    pub why_it_matters: &'static str,
    pub action_plan: [&'static str; 4],
}

const GENERAL_ACTION_PLAN: [&str; 4] = [
    "Review: Analyze signal patterns and trends",
    "Classify: Determine appropriate response category",
    "Assign: Route to relevant department",
    "Track: Monitor for escalation patterns",
];

/// Rows in priority order, so `PLAYBOOK[category.priority_rank()]` is the row.
pub static PLAYBOOK: [PlaybookEntry; 7] = [
    PlaybookEntry {
        category: Category::Fraud,
        label: "Fraud activity",
        queue: "Fraud Prevention",
        base_severity: 5.0,
        why_it_matters: "Customers may be losing money to scams or account takeover; \
            unchecked fraud carries direct losses and mandatory regulatory reporting.",
        action_plan: [
            "Alert: Notify fraud prevention team immediately",
            "Block: Consider temporary holds on affected channels",
            "Investigate: Review transaction patterns for anomalies",
            "Report: File regulatory report if confirmed",
        ],
    },
    PlaybookEntry {
        category: Category::Service,
        label: "Service disruption",
        queue: "IT Operations",
        base_severity: 4.0,
        why_it_matters: "Customers may be unable to access accounts or complete payments; \
            prolonged disruption drives complaints and incident reporting obligations.",
        action_plan: [
            "Immediate: Verify system status via monitoring dashboards",
            "Investigate: Check recent deployment logs for changes",
            "Communicate: Prepare customer-facing status update",
            "Escalate: If unresolved in 15 mins, escalate to L2 support",
        ],
    },
    PlaybookEntry {
        category: Category::Misinformation,
        label: "Misinformation",
        queue: "Communications",
        base_severity: 4.0,
        why_it_matters: "False claims about the institution can erode trust quickly and, \
            left unanswered, can trigger withdrawals or press attention.",
        action_plan: [
            "Verify: Cross-reference with official sources",
            "Monitor: Track spread across social channels",
            "Prepare: Draft official clarification statement",
            "Engage: Coordinate with PR team for response",
        ],
    },
    PlaybookEntry {
        category: Category::Risk,
        label: "Financial risk concern",
        queue: "Risk Management",
        base_severity: 4.5,
        why_it_matters: "Public concern about liquidity or solvency can become \
            self-fulfilling through deposit outflows and market reaction.",
        action_plan: [
            "Assess: Check current liquidity and funding positions",
            "Monitor: Watch deposit flows and market indicators",
            "Brief: Inform treasury and senior risk officers",
            "Prepare: Align holding statement with Communications",
        ],
    },
    PlaybookEntry {
        category: Category::Compliance,
        label: "Compliance issue",
        queue: "Compliance",
        base_severity: 4.0,
        why_it_matters: "Signals of regulatory or data-protection failures can lead to \
            fines, audits and mandatory disclosures.",
        action_plan: [
            "Document: Preserve evidence of the reported issue",
            "Assess: Determine regulatory reporting obligations",
            "Notify: Inform the compliance officer on duty",
            "Track: Log the case for audit follow-up",
        ],
    },
    PlaybookEntry {
        category: Category::CustomerExperience,
        label: "Customer experience",
        queue: "Customer Experience",
        base_severity: 2.5,
        why_it_matters: "Recurring service complaints signal churn risk and reputational \
            damage even without an underlying incident.",
        action_plan: GENERAL_ACTION_PLAN,
    },
    PlaybookEntry {
        category: Category::Other,
        label: "Unclassified signal",
        queue: "Customer Experience",
        base_severity: 1.5,
        why_it_matters: "The signal cleared the relevance gate but matches no known \
            category; an analyst should confirm whether it needs an owner.",
        action_plan: GENERAL_ACTION_PLAN,
    },
];

/// Playbook row for a category.
pub fn entry(category: Category) -> &'static PlaybookEntry {
    &PLAYBOOK[category.priority_rank()]
}
