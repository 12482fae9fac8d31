//! Material review board (MRB) deviation model.
//!
//! # Responsibility
//! - Define the deviation record reviewed by the board and its comment log.
//!
//! # Invariants
//! - Comment ids are unique within one record and increase monotonically.
//! - `Approved`, `Rejected` and `Closed` are terminal.

use crate::model::common::{vocabulary, Priority, Severity};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

vocabulary! {
    /// MRB lifecycle state.
    pub enum MrbStatus {
        Submitted => "Submitted",
        UnderReview => "Under Review",
        BoardReview => "Board Review",
        Approved => "Approved",
        Rejected => "Rejected",
        Closed => "Closed",
    }
}

impl WorkflowStatus for MrbStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Closed)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Submitted => &[Self::UnderReview, Self::Rejected],
            Self::UnderReview => &[Self::BoardReview, Self::Approved, Self::Rejected],
            Self::BoardReview => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[Self::Closed],
            Self::Closed => &[],
        }
    }
}

vocabulary! {
    /// Nature of the deviation from requirements.
    pub enum DeviationType {
        Process => "Process",
        Material => "Material",
        Dimensional => "Dimensional",
        Cosmetic => "Cosmetic",
        Documentation => "Documentation",
        Other => "Other",
    }
}

vocabulary! {
    /// Board decision on the deviating material.
    pub enum MrbDisposition {
        UseAsIs => "Use As Is",
        Rework => "Rework",
        Repair => "Repair",
        Scrap => "Scrap",
        ReturnToSupplier => "Return to Supplier",
        Pending => "Pending",
    }
}

vocabulary! {
    /// Review stage a comment was written in.
    pub enum CommentType {
        Review => "Review",
        Board => "Board",
        General => "General",
    }
}

/// Units of measure offered by the MRB form.
pub const MRB_UNITS: [&str; 10] = [
    "EA", "PC", "LB", "KG", "FT", "M", "IN", "MM", "SQ FT", "SQ M",
];

/// Roles that may sit on the review board.
pub const BOARD_ROLES: [&str; 5] = [
    "Quality Manager",
    "Engineering Manager",
    "Production Manager",
    "Customer Rep",
    "Supplier Rep",
];

/// Comment attached to an MRB record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrbComment {
    pub id: u32,
    pub author: String,
    pub written_at: NaiveDateTime,
    pub text: String,
    pub kind: CommentType,
}

/// Deviation submitted for board review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrbRecord {
    pub mrb_number: String,
    pub title: String,
    pub description: String,
    pub part_number: String,
    pub lot_number: Option<String>,
    pub quantity: u32,
    pub unit_of_measure: String,
    pub supplier: Option<String>,
    pub customer_order: Option<String>,
    pub deviation: String,
    pub deviation_type: DeviationType,
    pub severity: Severity,
    pub priority: Priority,
    pub status: MrbStatus,
    pub disposition: MrbDisposition,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    pub reviewed_by: Option<String>,
    pub reviewed_date: Option<NaiveDate>,
    pub board_members: Vec<String>,
    pub board_decision: Option<String>,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub customer_notification: bool,
    pub customer_approval: bool,
    pub justification: Option<String>,
    pub quality_impact: Option<String>,
    pub corrective_action: Option<String>,
    pub attachments: Vec<String>,
    pub comments: Vec<MrbComment>,
}

impl MrbRecord {
    /// Appends a comment with the next free comment id.
    pub fn push_comment(
        &mut self,
        author: impl Into<String>,
        written_at: NaiveDateTime,
        text: impl Into<String>,
        kind: CommentType,
    ) -> u32 {
        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.comments.push(MrbComment {
            id,
            author: author.into(),
            written_at,
            text: text.into(),
            kind,
        });
        id
    }
}

impl Record for MrbRecord {
    type Status = MrbStatus;

    fn status(&self) -> MrbStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}
