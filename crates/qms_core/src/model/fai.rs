//! AS9102 first article inspection (FAI) model.
//!
//! # Responsibility
//! - Define the FAI record with its four nested check lists.
//! - Roll individual check results up into an overall verdict.
//!
//! # Invariants
//! - Nested line ids run 1..n in list order after every form submit.
//! - `Approved`, `Rejected` and `Closed` are terminal.

use crate::model::common::{vocabulary, CheckResult, Priority};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// FAI lifecycle state.
    pub enum FaiStatus {
        InProgress => "In Progress",
        PendingReview => "Pending Review",
        Approved => "Approved",
        Rejected => "Rejected",
        Closed => "Closed",
    }
}

impl WorkflowStatus for FaiStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Closed)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::InProgress => &[Self::PendingReview],
            Self::PendingReview => &[Self::InProgress, Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[Self::Closed],
            Self::Closed => &[],
        }
    }
}

vocabulary! {
    /// Trigger for performing a first article inspection.
    pub enum FaiReason {
        InitialProduction => "Initial Production",
        ProcessChange => "Process Change",
        ToolChange => "Tool Change",
        MaterialChange => "Material Change",
        FacilityChange => "Facility Change",
        SupplierChange => "Supplier Change",
    }
}

vocabulary! {
    /// How the inspected article was produced.
    pub enum ProductionMethod {
        Production => "Production",
        Prototype => "Prototype",
        PreProduction => "Pre-Production",
    }
}

vocabulary! {
    /// Acceptance decision for the first article.
    pub enum FaiDisposition {
        Accept => "Accept",
        AcceptWithDeviation => "Accept with Deviation",
        Reject => "Reject",
        Pending => "Pending",
    }
}

/// Units offered for dimension and surface-finish lines.
pub const FAI_UNITS: [&str; 6] = ["mm", "in", "µm", "µin", "degrees", "%"];

/// Roll-up of every nested check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallResult {
    Pass,
    Fail,
    /// No check has been recorded as pass or fail yet.
    Partial,
}

/// Measured drawing characteristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaiDimension {
    pub id: u32,
    pub characteristic: String,
    pub specification: String,
    pub tolerance: String,
    pub actual_value: f64,
    pub unit: String,
    pub method: String,
    pub result: CheckResult,
    pub notes: Option<String>,
}

/// Functional or material test line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaiTest {
    pub id: u32,
    pub test_name: String,
    pub specification: String,
    pub procedure: String,
    pub actual_result: String,
    pub result: CheckResult,
    pub equipment: Option<String>,
    pub notes: Option<String>,
}

/// Surface roughness measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaiSurfaceFinish {
    pub id: u32,
    pub surface: String,
    pub specification: String,
    pub actual_value: f64,
    pub unit: String,
    pub result: CheckResult,
    pub notes: Option<String>,
}

/// First article inspection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaiRecord {
    pub fai_number: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    pub drawing_number: String,
    pub drawing_revision: String,
    pub work_order: String,
    pub customer: String,
    pub program: String,
    pub reason: FaiReason,
    pub production_method: ProductionMethod,
    pub status: FaiStatus,
    pub priority: Priority,
    pub inspector_name: String,
    pub inspection_date: NaiveDate,
    pub due_date: NaiveDate,
    pub manufacturing_process: String,
    pub tooling_used: String,
    pub equipment_used: String,
    pub material_certification: bool,
    pub process_documentation: bool,
    pub calibration_records: bool,
    pub dimensions: Vec<FaiDimension>,
    pub functional_tests: Vec<FaiTest>,
    pub material_tests: Vec<FaiTest>,
    pub surface_finish: Vec<FaiSurfaceFinish>,
    pub notes: Option<String>,
    pub disposition: FaiDisposition,
    pub customer_approval: bool,
    pub approved_by: Option<String>,
    pub approved_date: Option<NaiveDate>,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    pub attachments: Vec<String>,
}

impl FaiRecord {
    /// Every nested check result, in list order.
    pub fn check_results(&self) -> impl Iterator<Item = CheckResult> + '_ {
        self.dimensions
            .iter()
            .map(|line| line.result)
            .chain(self.functional_tests.iter().map(|line| line.result))
            .chain(self.material_tests.iter().map(|line| line.result))
            .chain(self.surface_finish.iter().map(|line| line.result))
    }

    /// Fail if any check failed, Pass if any passed, otherwise Partial.
    pub fn overall_result(&self) -> OverallResult {
        overall_result(self.check_results())
    }
}

/// Rolls check results up into one verdict.
pub fn overall_result(results: impl IntoIterator<Item = CheckResult>) -> OverallResult {
    let mut passed = false;
    for result in results {
        match result {
            CheckResult::Fail => return OverallResult::Fail,
            CheckResult::Pass => passed = true,
            CheckResult::NotApplicable => {}
        }
    }
    if passed {
        OverallResult::Pass
    } else {
        OverallResult::Partial
    }
}

impl Record for FaiRecord {
    type Status = FaiStatus;

    fn status(&self) -> FaiStatus {
        self.status
    }

    fn due_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
}

#[cfg(test)]
mod tests {
    use super::{overall_result, OverallResult};
    use crate::model::common::CheckResult;

    #[test]
    fn any_failure_fails_the_article() {
        let results = [CheckResult::Pass, CheckResult::Fail, CheckResult::Pass];
        assert_eq!(overall_result(results), OverallResult::Fail);
    }

    #[test]
    fn only_not_applicable_is_partial() {
        assert_eq!(
            overall_result(Vec::<CheckResult>::new()),
            OverallResult::Partial
        );
        assert_eq!(
            overall_result([CheckResult::NotApplicable]),
            OverallResult::Partial
        );
        assert_eq!(
            overall_result([CheckResult::NotApplicable, CheckResult::Pass]),
            OverallResult::Pass
        );
    }
}
