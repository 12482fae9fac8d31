//! Quality procedure / SOP model.
//!
//! # Invariants
//! - `review_frequency_months` and `estimated_minutes` are plain counts.
//! - `Obsolete` is terminal.

use crate::model::common::vocabulary;
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    pub enum ProcedureStatus {
        Draft => "Draft",
        UnderReview => "Under Review",
        Approved => "Approved",
        Active => "Active",
        Obsolete => "Obsolete",
    }
}

impl WorkflowStatus for ProcedureStatus {
    fn is_terminal(self) -> bool {
        self == Self::Obsolete
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::UnderReview, Self::Obsolete],
            Self::UnderReview => &[Self::Draft, Self::Approved],
            Self::Approved => &[Self::Active, Self::UnderReview, Self::Obsolete],
            Self::Active => &[Self::UnderReview, Self::Obsolete],
            Self::Obsolete => &[],
        }
    }
}

vocabulary! {
    pub enum ProcedureCategory {
        QualityManagement => "Quality Management",
        Manufacturing => "Manufacturing",
        Inspection => "Inspection",
        Calibration => "Calibration",
        Training => "Training",
        Safety => "Safety",
        Environmental => "Environmental",
    }
}

vocabulary! {
    pub enum ProcedureType {
        Sop => "SOP",
        WorkInstruction => "Work Instruction",
        ProcessProcedure => "Process Procedure",
        TestMethod => "Test Method",
        QualityPlan => "Quality Plan",
        Checklist => "Checklist",
    }
}

vocabulary! {
    pub enum Difficulty {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

vocabulary! {
    /// How often a procedure is consulted.
    pub enum Usage {
        Active => "Active",
        RarelyUsed => "Rarely Used",
        FrequentlyUsed => "Frequently Used",
    }
}

/// Standard operating procedure or work instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    /// Register number, e.g. `SOP-QM-001`.
    pub procedure_number: String,
    pub title: String,
    pub description: String,
    pub category: ProcedureCategory,
    pub kind: ProcedureType,
    pub version: String,
    pub status: ProcedureStatus,
    pub owner: String,
    pub department: String,
    pub approved_by: String,
    pub approval_date: NaiveDate,
    pub effective_date: NaiveDate,
    pub next_review_date: NaiveDate,
    pub last_review_date: NaiveDate,
    pub review_frequency_months: u32,
    pub training_required: bool,
    pub certification_required: bool,
    pub related_documents: Vec<String>,
    pub equipment_required: Vec<String>,
    pub skills_required: Vec<String>,
    pub safety_requirements: Vec<String>,
    pub estimated_minutes: u32,
    pub difficulty: Difficulty,
    pub download_count: u32,
    pub usage: Usage,
    pub tags: Vec<String>,
    pub file_size: String,
}

impl Record for ProcedureRecord {
    type Status = ProcedureStatus;

    fn status(&self) -> ProcedureStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.next_review_date)
    }
}
