//! Non-conformance report (NCR) model.
//!
//! # Invariants
//! - `capa_reference` is free text and never checked against the CAPA store.
//! - `Closed` and `Cancelled` are terminal.

use crate::model::common::{vocabulary, Severity};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// NCR lifecycle state.
    pub enum NcrStatus {
        Open => "Open",
        UnderInvestigation => "Under Investigation",
        CapaRequired => "CAPA Required",
        Closed => "Closed",
        Cancelled => "Cancelled",
    }
}

impl WorkflowStatus for NcrStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::UnderInvestigation, Self::Cancelled],
            Self::UnderInvestigation => &[Self::CapaRequired, Self::Closed, Self::Cancelled],
            Self::CapaRequired => &[Self::Closed, Self::Cancelled],
            Self::Closed | Self::Cancelled => &[],
        }
    }
}

vocabulary! {
    /// What kind of thing failed to conform.
    pub enum NcrCategory {
        Product => "Product",
        Process => "Process",
        System => "System",
        Documentation => "Documentation",
        Personnel => "Personnel",
    }
}

vocabulary! {
    /// How strongly the customer is affected.
    pub enum CustomerImpact {
        None => "None",
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

/// Departments offered by the NCR filters.
pub const NCR_DEPARTMENTS: [&str; 5] = [
    "Production",
    "Quality",
    "Engineering",
    "Procurement",
    "Shipping",
];

/// Non-conformance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NcrRecord {
    /// Business number, e.g. `NCR-2024-001`.
    pub ncr_number: String,
    pub title: String,
    pub description: String,
    pub reported_by: String,
    pub reported_date: NaiveDate,
    pub department: String,
    pub area: String,
    pub category: NcrCategory,
    pub severity: Severity,
    pub status: NcrStatus,
    pub assigned_to: String,
    pub target_close_date: NaiveDate,
    pub actual_close_date: Option<NaiveDate>,
    pub root_cause: Option<String>,
    pub immediate_action: String,
    pub capa_required: bool,
    pub capa_reference: Option<String>,
    pub verification_method: Option<String>,
    pub verified_by: Option<String>,
    pub verification_date: Option<NaiveDate>,
    pub attachments: Vec<String>,
    pub cost: Option<f64>,
    pub customer_impact: CustomerImpact,
}

impl Record for NcrRecord {
    type Status = NcrStatus;

    fn status(&self) -> NcrStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.target_close_date)
    }
}
