//! Corrective and preventive action (CAPA) model.
//!
//! # Responsibility
//! - Define the CAPA record and its closed vocabularies.
//! - Declare which statuses end a CAPA's active life.
//!
//! # Invariants
//! - `closed_on` is set only while status is `Closed`.
//! - `Closed` and `Cancelled` are terminal.

use crate::model::common::{vocabulary, Priority};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// CAPA lifecycle state.
    pub enum CapaStatus {
        Open => "Open",
        InProgress => "In Progress",
        UnderReview => "Under Review",
        Closed => "Closed",
        Cancelled => "Cancelled",
    }
}

impl WorkflowStatus for CapaStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::UnderReview, Self::Cancelled],
            Self::UnderReview => &[Self::Closed, Self::InProgress, Self::Cancelled],
            Self::Closed | Self::Cancelled => &[],
        }
    }
}

vocabulary! {
    /// Where the problem behind a CAPA was found.
    pub enum CapaSource {
        InternalAudit => "Internal Audit",
        CustomerComplaint => "Customer Complaint",
        ManagementReview => "Management Review",
        ProcessMonitoring => "Process Monitoring",
        Other => "Other",
    }
}

/// Departments offered by the CAPA form.
pub const CAPA_DEPARTMENTS: [&str; 6] = [
    "Quality",
    "Production",
    "Engineering",
    "Purchasing",
    "Sales",
    "Management",
];

/// Corrective/preventive action record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapaRecord {
    /// Business number, e.g. `CAPA-2024-001`.
    pub capa_number: String,
    pub title: String,
    pub description: String,
    pub root_cause: String,
    pub corrective_action: String,
    pub preventive_action: String,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: CapaStatus,
    pub source: CapaSource,
    pub department: String,
    /// Date the CAPA reached `Closed`.
    pub closed_on: Option<NaiveDate>,
    /// `None` until effectiveness has been verified either way.
    pub effective: Option<bool>,
    pub follow_up_date: Option<NaiveDate>,
    pub attachments: Vec<String>,
}

impl Record for CapaRecord {
    type Status = CapaStatus;

    fn status(&self) -> CapaStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}
