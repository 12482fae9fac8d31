//! Final (pre-shipment) inspection model.
//!
//! # Invariants
//! - Visual and packaging checklists line up with their label tables.
//! - `Shipped` and `Rejected` are terminal; `Approved` still awaits shipment.

use crate::model::common::{vocabulary, CheckResult};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Final inspection outcome.
    pub enum FinalStatus {
        PendingReview => "Pending Review",
        Approved => "Approved",
        Rejected => "Rejected",
        ReworkRequired => "Rework Required",
        Hold => "Hold",
        Shipped => "Shipped",
    }
}

impl WorkflowStatus for FinalStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Shipped | Self::Rejected)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::PendingReview => &[
                Self::Approved,
                Self::Rejected,
                Self::ReworkRequired,
                Self::Hold,
            ],
            Self::Approved => &[Self::Shipped, Self::Hold],
            Self::ReworkRequired => &[Self::PendingReview],
            Self::Hold => &[Self::PendingReview, Self::Approved, Self::Rejected],
            Self::Rejected | Self::Shipped => &[],
        }
    }
}

vocabulary! {
    pub enum FinalDisposition {
        Ship => "Ship",
        Rework => "Rework",
        Scrap => "Scrap",
        ReturnToVendor => "Return to Vendor",
        Hold => "Hold",
    }
}

pub const FINAL_SHIFTS: [&str; 3] = ["Day Shift", "Night Shift", "Weekend"];
pub const PACKAGE_TYPES: [&str; 4] = [
    "Standard Box",
    "Anti-Static Bag",
    "Custom Container",
    "Foam Packaging",
];
pub const SHIPPING_METHODS: [&str; 4] = ["Ground", "Express", "Overnight", "International"];

pub const VISUAL_CHECK_LABELS: [&str; 7] = [
    "Surface finish meets specification",
    "No visible defects or damage",
    "Proper marking/labeling applied",
    "Correct color/coating",
    "No foreign material contamination",
    "Proper packaging condition",
    "Documentation complete",
];

pub const PACKAGING_CHECK_LABELS: [&str; 7] = [
    "Correct packaging material used",
    "Anti-static protection (if required)",
    "Proper cushioning/protection",
    "Labels and markings applied",
    "Certificate of Conformance included",
    "Customer requirements met",
    "Package sealed properly",
];

/// One checklist line; `passed` means verified or completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub passed: bool,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDimension {
    pub id: u32,
    pub feature: String,
    pub nominal: String,
    pub actual: String,
    pub result: CheckResult,
}

/// Final inspection before release to the customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalInspectionRecord {
    pub work_order: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub serial_number: Option<String>,
    pub lot_number: String,
    pub quantity: u32,
    pub customer_po: Option<String>,
    pub inspector: String,
    pub inspection_date: NaiveDate,
    pub shift: Option<String>,
    pub visual_checks: Vec<ChecklistItem>,
    pub dimensions: Vec<FinalDimension>,
    pub status: FinalStatus,
    pub disposition: Option<FinalDisposition>,
    pub inspector_notes: Option<String>,
    pub quality_engineer: Option<String>,
    pub qe_approval_date: Option<NaiveDate>,
    pub packaging_checks: Vec<ChecklistItem>,
    pub package_type: Option<String>,
    pub shipping_method: Option<String>,
    pub tracking_number: Option<String>,
    pub special_instructions: Option<String>,
}

/// Checklist prefilled from `labels` with every line passing.
pub fn default_checklist(labels: &[&str]) -> Vec<ChecklistItem> {
    labels
        .iter()
        .map(|label| ChecklistItem {
            label: (*label).to_string(),
            passed: true,
            comments: String::new(),
        })
        .collect()
}

impl Record for FinalInspectionRecord {
    type Status = FinalStatus;

    fn status(&self) -> FinalStatus {
        self.status
    }
}
