//! Training record, employee and certification models.
//!
//! # Responsibility
//! - Define employee training records and the reference tables they cite.
//! - Grade a score against its passing threshold.
//!
//! # Invariants
//! - `Completed`, `Failed`, `Expired` and `Cancelled` are terminal.
//! - `employee_id` is free text; no referential check against employees.

use crate::model::common::vocabulary;
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    pub enum TrainingStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Failed => "Failed",
        Expired => "Expired",
        Cancelled => "Cancelled",
    }
}

impl WorkflowStatus for TrainingStatus {
    fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Expired | Self::Cancelled
        )
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed, Self::Failed, Self::Cancelled],
            Self::Completed => &[Self::Expired],
            Self::Failed | Self::Expired | Self::Cancelled => &[],
        }
    }
}

vocabulary! {
    pub enum TrainingType {
        Orientation => "Orientation",
        ProcedureTraining => "Procedure Training",
        Certification => "Certification",
        SafetyTraining => "Safety Training",
        SkillDevelopment => "Skill Development",
        Refresher => "Refresher",
        Regulatory => "Regulatory",
    }
}

vocabulary! {
    pub enum TrainingCategory {
        Quality => "Quality",
        Safety => "Safety",
        Manufacturing => "Manufacturing",
        Regulatory => "Regulatory",
        Technical => "Technical",
        Leadership => "Leadership",
        Compliance => "Compliance",
    }
}

vocabulary! {
    pub enum TrainingMethod {
        Classroom => "Classroom",
        Online => "Online",
        OnTheJob => "On-the-Job",
        Workshop => "Workshop",
        External => "External",
        SelfStudy => "Self-Study",
    }
}

vocabulary! {
    pub enum CertificationCategory {
        Internal => "Internal",
        Industry => "Industry",
        Regulatory => "Regulatory",
        Professional => "Professional",
    }
}

/// Score relative to the passing threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// At least ten points above passing.
    Excellent,
    Passed,
    Failed,
}

impl ScoreBand {
    pub fn grade(score: u32, passing_score: u32) -> Self {
        if score >= passing_score.saturating_add(10) {
            Self::Excellent
        } else if score >= passing_score {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

/// Employee reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub email: String,
    pub supervisor: String,
    pub active: bool,
}

/// Certification catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub certification_id: String,
    pub name: String,
    pub issuing_body: String,
    pub category: CertificationCategory,
    pub validity_months: u32,
    pub prerequisite: Option<String>,
    pub description: String,
    pub renewal_required: bool,
    pub cost: f64,
}

/// One employee's attendance of one training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Register number, e.g. `TRN-001`.
    pub training_number: String,
    pub employee_id: String,
    pub employee_name: String,
    pub training_title: String,
    pub training_type: TrainingType,
    pub category: TrainingCategory,
    pub instructor: String,
    pub training_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub duration_hours: f64,
    pub status: TrainingStatus,
    pub score: Option<u32>,
    pub passing_score: u32,
    pub attempts: u32,
    pub max_attempts: u32,
    pub certificate_number: Option<String>,
    pub related_procedures: Vec<String>,
    /// Regulation or requirement mandating the training.
    pub required_by: String,
    pub competency_areas: Vec<String>,
    pub method: TrainingMethod,
    pub cost: f64,
    pub provider: String,
    pub location: String,
    pub notes: Option<String>,
    pub attachments: Vec<String>,
}

impl TrainingRecord {
    /// Grade of the recorded score, when one exists.
    pub fn score_band(&self) -> Option<ScoreBand> {
        self.score
            .map(|score| ScoreBand::grade(score, self.passing_score))
    }

    /// Whether the certificate lapsed strictly before `today`.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date < today)
    }
}

impl Record for TrainingRecord {
    type Status = TrainingStatus;

    fn status(&self) -> TrainingStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreBand;

    #[test]
    fn score_band_uses_ten_point_margin() {
        assert_eq!(ScoreBand::grade(92, 80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::grade(88, 80), ScoreBand::Passed);
        assert_eq!(ScoreBand::grade(80, 80), ScoreBand::Passed);
        assert_eq!(ScoreBand::grade(79, 80), ScoreBand::Failed);
    }
}
