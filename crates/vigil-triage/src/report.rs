//! Markdown report for management. Returned as text; never written to disk.

use std::fmt::{self, Write};

use chrono::{DateTime, Utc};

use crate::audit_log::AuditLog;
use crate::desk::ActivitySummary;

/// Timeline entries included in the report.
pub const TIMELINE_LENGTH: usize = 10;

const GOVERNANCE_CHECKLIST: [&str; 4] = [
    "All signals processed through the staged triage pipeline",
    "PII automatically redacted (phone, email, IBAN, social handles)",
    "Author handles pseudonymised before clustering",
    "Human-in-the-loop verification for all decisions",
];

/// Render the activity summary, governance checklist and the most recent
/// audit entries.
pub fn management_report(log: &AuditLog, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    match write_management_report(&mut out, log, generated_at) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

/// Write the management report into any `fmt::Write` sink.
pub fn write_management_report<W: Write>(
    out: &mut W,
    log: &AuditLog,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(out, "# Vigil Triage - Executive Report")?;
    writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;
    write_summary(out, &ActivitySummary::from_log(log))?;
    write_checklist(out)?;
    write_timeline(out, log)?;
    writeln!(out, "---")?;
    writeln!(out, "*All machine recommendations require human approval.*")
}

fn write_summary<W: Write>(out: &mut W, summary: &ActivitySummary) -> fmt::Result {
    writeln!(out, "## Summary\n")?;
    writeln!(out, "| Metric | Count |")?;
    writeln!(out, "|--------|-------|")?;
    writeln!(out, "| Signals Escalated | {} |", summary.escalated)?;
    writeln!(out, "| Signals Dismissed | {} |", summary.dismissed)?;
    writeln!(out, "| Team Routings | {} |\n", summary.routed)
}

fn write_checklist<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "## Governance Compliance\n")?;
    for item in GOVERNANCE_CHECKLIST {
        writeln!(out, "- [x] {item}")?;
    }
    writeln!(out)
}

fn write_timeline<W: Write>(out: &mut W, log: &AuditLog) -> fmt::Result {
    writeln!(out, "## Activity Timeline\n")?;
    if log.is_empty() {
        writeln!(out, "_No actions recorded._")?;
    }
    for entry in log.recent(TIMELINE_LENGTH) {
        let line = format!(
            "- **{}**: {} - Signal {} {}",
            entry.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            entry.action,
            entry.cluster_id,
            entry.details
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)
}
