//! Incoming material inspection model.
//!
//! # Responsibility
//! - Define the receiving-inspection record for one purchase order line.
//! - Hold the fixed checklists every receipt is inspected against.
//!
//! # Invariants
//! - Checklist vectors line up index-for-index with their label tables.
//! - `Accepted` and `Rejected` are terminal.

use crate::model::common::{vocabulary, CheckResult};
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Overall receiving-inspection outcome.
    pub enum IncomingStatus {
        PendingInspection => "Pending Inspection",
        Accepted => "Accepted",
        Rejected => "Rejected",
        Quarantined => "Quarantined",
        ReworkSort => "Rework/Sort",
        ConditionalAccept => "Conditional Accept",
    }
}

impl WorkflowStatus for IncomingStatus {
    fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::PendingInspection => &[
                Self::Accepted,
                Self::Rejected,
                Self::Quarantined,
                Self::ReworkSort,
                Self::ConditionalAccept,
            ],
            Self::Quarantined => &[Self::Accepted, Self::Rejected, Self::ReworkSort],
            Self::ReworkSort => &[Self::Accepted, Self::Rejected, Self::Quarantined],
            Self::ConditionalAccept => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }
}

impl IncomingStatus {
    /// Whether the supplier has to be told about this outcome.
    pub fn requires_supplier_notification(self) -> bool {
        matches!(self, Self::Rejected | Self::Quarantined | Self::ReworkSort)
    }
}

vocabulary! {
    /// What happens to the received material.
    pub enum IncomingDisposition {
        ReleaseToStock => "Release to Stock",
        ReturnToSupplier => "Return to Supplier",
        Scrap => "Scrap",
        Rework => "Rework",
        UseAsIs => "Use As-Is",
        SortAndRework => "Sort & Rework",
        Quarantine => "Quarantine",
        EngineeringReview => "Engineering Review",
    }
}

/// Storage location assigned by "move to stock" when none is given.
pub const DEFAULT_STOCK_LOCATION: &str = "STOCK-A1";

pub const SUPPLIERS: [&str; 6] = [
    "ABC Manufacturing Co.",
    "XYZ Precision Parts",
    "Global Steel Supply",
    "Advanced Materials Inc.",
    "Quality Components Ltd.",
    "Reliable Fasteners Corp.",
];

pub const MATERIAL_TYPES: [&str; 8] = [
    "Raw Material",
    "Fasteners",
    "Electrical Components",
    "Mechanical Parts",
    "Chemicals",
    "Packaging Materials",
    "Tools & Equipment",
    "Software/Documentation",
];

pub const INSPECTION_LEVELS: [&str; 5] = [
    "General Level I",
    "General Level II",
    "General Level III",
    "Special",
    "Skip Lot",
];

/// Inspection kinds that may be required for a receipt.
pub const INSPECTION_TYPE_LABELS: [&str; 8] = [
    "Visual Inspection",
    "Dimensional Verification",
    "Material Testing",
    "Surface Finish Check",
    "Functional Testing",
    "Documentation Review",
    "Chemical Analysis",
    "Hardness Testing",
];

pub const VISUAL_INSPECTION_LABELS: [&str; 6] = [
    "Overall Appearance",
    "Surface Defects",
    "Dimensional Compliance",
    "Marking/Labeling",
    "Packaging Condition",
    "Color/Finish",
];

pub const DOCUMENTATION_LABELS: [&str; 6] = [
    "Drawing/Specification",
    "Process Sheets",
    "Calibration Certificates",
    "Safety Data Sheets",
    "Inspection Reports",
    "Shipping Documents",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionTypeCheck {
    pub label: String,
    pub required: bool,
    pub specification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualInspection {
    pub label: String,
    pub result: CheckResult,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationCheck {
    pub label: String,
    pub received: bool,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingMeasurement {
    pub id: u32,
    pub characteristic: String,
    pub specification: String,
    pub actual_value: String,
    pub result: CheckResult,
}

/// Free-text laboratory results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTesting {
    pub hardness: String,
    pub surface_finish: String,
    pub chemical_composition: String,
    pub tensile_strength: String,
}

/// Receiving inspection of one delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingRecord {
    pub purchase_order: String,
    pub receipt_date: NaiveDate,
    pub packing_slip_number: Option<String>,
    pub supplier: String,
    pub supplier_lot_number: String,
    pub part_number: String,
    pub part_description: String,
    pub revision: Option<String>,
    pub quantity_ordered: u32,
    pub quantity_received: u32,
    pub unit_of_measure: String,
    pub material_type: String,
    pub inspection_level: String,
    pub aql: Option<String>,
    pub sample_size: u32,
    pub inspector: String,
    pub inspection_date: NaiveDate,
    pub inspection_types: Vec<InspectionTypeCheck>,
    pub visual_inspections: Vec<VisualInspection>,
    pub measurements: Vec<IncomingMeasurement>,
    pub material_testing: MaterialTesting,
    pub coc_received: bool,
    pub coc_number: Option<String>,
    pub mtr_received: bool,
    pub mtr_number: Option<String>,
    pub documentation_checks: Vec<DocumentationCheck>,
    pub status: IncomingStatus,
    pub disposition: Option<IncomingDisposition>,
    pub disposition_notes: Option<String>,
    pub quality_engineer: Option<String>,
    pub approval_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notification_method: Option<String>,
    pub notification_date: Option<NaiveDate>,
}

/// Fresh inspection-type checklist, one unchecked line per label.
pub fn default_inspection_types() -> Vec<InspectionTypeCheck> {
    INSPECTION_TYPE_LABELS
        .iter()
        .map(|label| InspectionTypeCheck {
            label: (*label).to_string(),
            required: false,
            specification: String::new(),
        })
        .collect()
}

/// Fresh visual checklist with every line passing.
pub fn default_visual_inspections() -> Vec<VisualInspection> {
    VISUAL_INSPECTION_LABELS
        .iter()
        .map(|label| VisualInspection {
            label: (*label).to_string(),
            result: CheckResult::Pass,
            comments: String::new(),
        })
        .collect()
}

/// Fresh documentation checklist with nothing received.
pub fn default_documentation_checks() -> Vec<DocumentationCheck> {
    DOCUMENTATION_LABELS
        .iter()
        .map(|label| DocumentationCheck {
            label: (*label).to_string(),
            received: false,
            reference: String::new(),
        })
        .collect()
}

impl Record for IncomingRecord {
    type Status = IncomingStatus;

    fn status(&self) -> IncomingStatus {
        self.status
    }
}
