//! In-process inspection (IPI) model.
//!
//! # Responsibility
//! - Define the inspection record taken at one routing operation.
//! - Carry defect, measurement, visual and process-parameter lines.
//!
//! # Invariants
//! - Quantities are non-negative counts.
//! - `Approved` and `Rejected` are terminal; `Hold` and `Rework Required` are not.

use crate::model::common::{vocabulary, CheckResult, Severity};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// IPI lifecycle state.
    pub enum IpiStatus {
        InProgress => "In Progress",
        Hold => "Hold",
        Approved => "Approved",
        Rejected => "Rejected",
        ReworkRequired => "Rework Required",
    }
}

impl WorkflowStatus for IpiStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::InProgress => &[
                Self::Hold,
                Self::Approved,
                Self::Rejected,
                Self::ReworkRequired,
            ],
            Self::Hold => &[Self::InProgress, Self::Approved, Self::Rejected],
            Self::ReworkRequired => &[Self::InProgress, Self::Hold],
            Self::Approved | Self::Rejected => &[],
        }
    }
}

vocabulary! {
    /// Production shift the inspection was taken in.
    pub enum Shift {
        Day => "Day",
        Night => "Night",
        Weekend => "Weekend",
    }
}

vocabulary! {
    /// IPI urgency; distinct from the four-level record priority.
    pub enum IpiPriority {
        Low => "Low",
        Normal => "Normal",
        High => "High",
        Urgent => "Urgent",
    }
}

vocabulary! {
    /// Decision for the inspected lot.
    pub enum IpiDisposition {
        Accept => "Accept",
        Reject => "Reject",
        Rework => "Rework",
        Hold => "Hold",
        Pending => "Pending",
    }
}

vocabulary! {
    /// Outcome of a measured characteristic.
    pub enum MeasurementResult {
        Pass => "Pass",
        Fail => "Fail",
        Warning => "Warning",
    }
}

vocabulary! {
    /// Outcome of a monitored process parameter.
    pub enum ParameterResult {
        WithinSpec => "Within Spec",
        OutOfSpec => "Out of Spec",
        Warning => "Warning",
    }
}

/// Defect categories offered by the defect lines.
pub const DEFECT_TYPES: [&str; 10] = [
    "Dimensional",
    "Surface Finish",
    "Burr/Sharp Edge",
    "Crack",
    "Inclusion",
    "Porosity",
    "Contamination",
    "Missing Feature",
    "Wrong Material",
    "Tool Mark",
];

/// Work centers offered by the form and filter.
pub const WORK_CENTERS: [&str; 5] = ["WC-100", "WC-200", "WC-300", "WC-400", "WC-500"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpiDefect {
    pub id: u32,
    pub defect_type: String,
    pub description: String,
    pub quantity: u32,
    pub severity: Severity,
    pub location: String,
    pub cause: Option<String>,
    pub correction_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpiMeasurement {
    pub id: u32,
    pub characteristic: String,
    pub specification: String,
    pub nominal_value: f64,
    pub tolerance: String,
    pub actual_value: f64,
    pub unit: String,
    pub instrument: String,
    pub result: MeasurementResult,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpiVisualCheck {
    pub id: u32,
    pub check_point: String,
    pub requirement: String,
    pub result: CheckResult,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpiProcessParameter {
    pub id: u32,
    pub parameter: String,
    pub specification: String,
    pub actual_value: String,
    pub unit: String,
    pub result: ParameterResult,
    pub notes: Option<String>,
}

/// In-process inspection at one operation of a work order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpiRecord {
    pub inspection_number: String,
    pub work_order: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub operation: String,
    pub operation_sequence: u32,
    pub lot_number: Option<String>,
    pub quantity: u32,
    pub inspected_quantity: u32,
    pub accepted_quantity: u32,
    pub rejected_quantity: u32,
    pub rework_quantity: u32,
    pub inspector: String,
    pub inspection_date: NaiveDate,
    pub shift: Shift,
    pub work_center: String,
    pub operator: String,
    pub machine: String,
    pub tooling: String,
    pub status: IpiStatus,
    pub priority: IpiPriority,
    pub defects: Vec<IpiDefect>,
    pub measurements: Vec<IpiMeasurement>,
    pub visual_checks: Vec<IpiVisualCheck>,
    pub process_parameters: Vec<IpiProcessParameter>,
    pub notes: Option<String>,
    pub next_operation: Option<String>,
    pub disposition: IpiDisposition,
    pub customer_notification: bool,
    pub quality_alert: bool,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    pub reviewed_by: Option<String>,
    pub reviewed_date: Option<NaiveDate>,
    pub attachments: Vec<String>,
}

impl IpiRecord {
    /// Sum of defect quantities across every defect line.
    pub fn defect_quantity(&self) -> u64 {
        self.defects.iter().map(|d| u64::from(d.quantity)).sum()
    }
}

impl Record for IpiRecord {
    type Status = IpiStatus;

    fn status(&self) -> IpiStatus {
        self.status
    }
}
