//! Controlled document model.

use crate::model::common::vocabulary;
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Document approval state; `Obsolete` is terminal.
    pub enum DocumentStatus {
        Draft => "Draft",
        UnderReview => "Under Review",
        Approved => "Approved",
        Obsolete => "Obsolete",
    }
}

impl WorkflowStatus for DocumentStatus {
    fn is_terminal(self) -> bool {
        self == Self::Obsolete
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::UnderReview, Self::Obsolete],
            Self::UnderReview => &[Self::Draft, Self::Approved],
            Self::Approved => &[Self::UnderReview, Self::Obsolete],
            Self::Obsolete => &[],
        }
    }
}

vocabulary! {
    pub enum DocumentType {
        Procedure => "Procedure",
        Policy => "Policy",
        Form => "Form",
        Manual => "Manual",
        Specification => "Specification",
        Record => "Record",
    }
}

pub const DOCUMENT_DEPARTMENTS: [&str; 5] = ["Quality", "Production", "Engineering", "HR", "Finance"];

/// Controlled document in the document register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Register number, e.g. `QP-001`.
    pub document_number: String,
    pub title: String,
    pub kind: DocumentType,
    pub version: String,
    pub status: DocumentStatus,
    pub approved_by: String,
    pub approval_date: NaiveDate,
    pub effective_date: NaiveDate,
    /// Next periodic review; drives the overdue check.
    pub review_date: NaiveDate,
    pub department: String,
    pub owner: String,
    pub description: String,
    pub file_size: String,
    pub download_count: u32,
}

impl Record for DocumentRecord {
    type Status = DocumentStatus;

    fn status(&self) -> DocumentStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.review_date)
    }
}
