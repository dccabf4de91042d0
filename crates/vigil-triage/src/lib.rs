//! # vigil-triage
//!
//! Review-layer state owned by the surrounding application. Pipeline results
//! are never mutated: analyst decisions live in an append-only [`AuditLog`]
//! held by a [`TriageDesk`].

pub mod audit_log;
pub mod departments;
pub mod desk;
pub mod kpis;
pub mod report;

pub use audit_log::{AuditAction, AuditEntry, AuditLog};
pub use departments::Department;
pub use desk::{ActivitySummary, TriageDesk};
pub use kpis::DashboardKpis;
pub use report::{management_report, write_management_report};
