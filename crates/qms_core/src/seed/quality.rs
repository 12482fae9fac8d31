//! CAPA, NCR and MRB demonstration records.

use crate::model::capa::{CapaRecord, CapaSource, CapaStatus};
use crate::model::common::{Priority, Severity};
use crate::model::mrb::{CommentType, DeviationType, MrbComment, MrbDisposition, MrbRecord, MrbStatus};
use crate::model::ncr::{CustomerImpact, NcrCategory, NcrRecord, NcrStatus};
use crate::repo::record_store::Entry;
use crate::seed::{at, date, entry, strings};

pub fn capa_entries() -> Vec<Entry<CapaRecord>> {
    vec![
        entry(
            date(2024, 11, 15),
            CapaRecord {
                capa_number: "CAPA-2024-002".to_string(),
                title: "Customer complaint - product defect".to_string(),
                description: "Customer reported product malfunction in unit #12345".to_string(),
                root_cause: "Assembly process error during production".to_string(),
                corrective_action: "Replace defective unit and investigate assembly process"
                    .to_string(),
                preventive_action: "Update assembly work instructions and training".to_string(),
                assigned_to: "Sarah Johnson".to_string(),
                due_date: date(2024, 12, 30),
                priority: Priority::Critical,
                status: CapaStatus::Open,
                source: CapaSource::CustomerComplaint,
                department: "Production".to_string(),
                closed_on: None,
                effective: None,
                follow_up_date: None,
                attachments: Vec::new(),
            },
        ),
        entry(
            date(2024, 11, 1),
            CapaRecord {
                capa_number: "CAPA-2024-001".to_string(),
                title: "Non-conforming raw material received".to_string(),
                description: "Raw material batch #RM-2024-123 does not meet specifications"
                    .to_string(),
                root_cause: "Supplier quality control process failure".to_string(),
                corrective_action: "Return non-conforming material to supplier".to_string(),
                preventive_action: "Implement incoming inspection checklist".to_string(),
                assigned_to: "John Smith".to_string(),
                due_date: date(2024, 12, 15),
                priority: Priority::High,
                status: CapaStatus::InProgress,
                source: CapaSource::ProcessMonitoring,
                department: "Quality".to_string(),
                closed_on: None,
                effective: None,
                follow_up_date: None,
                attachments: Vec::new(),
            },
        ),
    ]
}

pub fn ncr_entries() -> Vec<Entry<NcrRecord>> {
    vec![
        entry(
            date(2024, 11, 22),
            NcrRecord {
                ncr_number: "NCR-2024-004".to_string(),
                title: "Customer Complaint - Product Defect".to_string(),
                description: "Customer reported premature failure of product within warranty period. Investigation required.".to_string(),
                reported_by: "Customer Service".to_string(),
                reported_date: date(2024, 11, 22),
                department: "Quality".to_string(),
                area: "Customer Interface".to_string(),
                category: NcrCategory::Product,
                severity: Severity::Critical,
                status: NcrStatus::Open,
                assigned_to: "Senior Quality Engineer".to_string(),
                target_close_date: date(2024, 12, 10),
                actual_close_date: None,
                root_cause: None,
                immediate_action: "Product recalled, customer provided replacement, investigation initiated".to_string(),
                capa_required: true,
                capa_reference: None,
                verification_method: None,
                verified_by: None,
                verification_date: None,
                attachments: strings(&["customer_complaint.pdf", "returned_product_photos.zip"]),
                cost: Some(5000.0),
                customer_impact: CustomerImpact::High,
            },
        ),
        entry(
            date(2024, 11, 20),
            NcrRecord {
                ncr_number: "NCR-2024-001".to_string(),
                title: "Dimensional Non-Conformance in Batch #12345".to_string(),
                description: "Parts found to be outside specified dimensional tolerances during final inspection. 15 units affected.".to_string(),
                reported_by: "John Inspector".to_string(),
                reported_date: date(2024, 11, 20),
                department: "Production".to_string(),
                area: "Final Assembly".to_string(),
                category: NcrCategory::Product,
                severity: Severity::Major,
                status: NcrStatus::UnderInvestigation,
                assigned_to: "Quality Engineer".to_string(),
                target_close_date: date(2024, 12, 5),
                actual_close_date: None,
                root_cause: None,
                immediate_action: "Quarantine affected batch, inspect additional units from same production run".to_string(),
                capa_required: true,
                capa_reference: Some("CAPA-2024-015".to_string()),
                verification_method: None,
                verified_by: None,
                verification_date: None,
                attachments: strings(&["inspection_report.pdf", "photos.zip"]),
                cost: Some(2500.0),
                customer_impact: CustomerImpact::Medium,
            },
        ),
        entry(
            date(2024, 11, 18),
            NcrRecord {
                ncr_number: "NCR-2024-002".to_string(),
                title: "Procedure Not Followed - Material Handling".to_string(),
                description: "Operator found not following proper material handling procedure, potentially contaminating raw materials.".to_string(),
                reported_by: "Shift Supervisor".to_string(),
                reported_date: date(2024, 11, 18),
                department: "Production".to_string(),
                area: "Material Storage".to_string(),
                category: NcrCategory::Process,
                severity: Severity::Minor,
                status: NcrStatus::CapaRequired,
                assigned_to: "Production Manager".to_string(),
                target_close_date: date(2024, 11, 30),
                actual_close_date: None,
                root_cause: Some(
                    "Inadequate training on updated material handling procedures".to_string(),
                ),
                immediate_action: "Re-training conducted, materials inspected and segregated if necessary".to_string(),
                capa_required: true,
                capa_reference: Some("CAPA-2024-016".to_string()),
                verification_method: None,
                verified_by: None,
                verification_date: None,
                attachments: strings(&["witness_statement.pdf"]),
                cost: Some(150.0),
                customer_impact: CustomerImpact::Low,
            },
        ),
        entry(
            date(2024, 11, 15),
            NcrRecord {
                ncr_number: "NCR-2024-003".to_string(),
                title: "Missing Calibration Certificate".to_string(),
                description: "Measuring equipment found without valid calibration certificate during audit.".to_string(),
                reported_by: "Internal Auditor".to_string(),
                reported_date: date(2024, 11, 15),
                department: "Quality".to_string(),
                area: "Metrology Lab".to_string(),
                category: NcrCategory::System,
                severity: Severity::Major,
                status: NcrStatus::Closed,
                assigned_to: "Metrology Technician".to_string(),
                target_close_date: date(2024, 11, 25),
                actual_close_date: Some(date(2024, 11, 22)),
                root_cause: Some("Calibration due date tracking system failure".to_string()),
                immediate_action: "Equipment immediately sent for calibration, all measurements verified".to_string(),
                capa_required: false,
                capa_reference: None,
                verification_method: Some(
                    "Calibration certificate review and system verification".to_string(),
                ),
                verified_by: Some("Quality Manager".to_string()),
                verification_date: Some(date(2024, 11, 22)),
                attachments: strings(&["audit_finding.pdf", "calibration_cert.pdf"]),
                cost: Some(300.0),
                customer_impact: CustomerImpact::None,
            },
        ),
    ]
}

pub fn mrb_entries() -> Vec<Entry<MrbRecord>> {
    vec![
        entry(
            date(2024, 11, 20),
            MrbRecord {
                mrb_number: "MRB-2024-001".to_string(),
                title: "Surface finish deviation on machined part".to_string(),
                description: "Surface roughness exceeds specification requirement of 32 Ra"
                    .to_string(),
                part_number: "PN-12345-A".to_string(),
                lot_number: Some("LOT-2024-098".to_string()),
                quantity: 50,
                unit_of_measure: "EA".to_string(),
                supplier: Some("ABC Machining Co.".to_string()),
                customer_order: Some("CO-2024-156".to_string()),
                deviation: "Surface roughness measured at 45 Ra instead of specified 32 Ra maximum"
                    .to_string(),
                deviation_type: DeviationType::Process,
                severity: Severity::Minor,
                priority: Priority::Medium,
                status: MrbStatus::UnderReview,
                disposition: MrbDisposition::Pending,
                submitted_by: "John Smith".to_string(),
                submitted_date: date(2024, 11, 20),
                reviewed_by: None,
                reviewed_date: None,
                board_members: Vec::new(),
                board_decision: None,
                approved_by: None,
                approved_date: None,
                due_date: date(2024, 12, 5),
                estimated_cost: 2500.0,
                actual_cost: 0.0,
                customer_notification: true,
                customer_approval: false,
                justification: Some(
                    "Functional performance not affected, cosmetic issue only".to_string(),
                ),
                quality_impact: Some("No impact on functionality or performance".to_string()),
                corrective_action: None,
                attachments: Vec::new(),
                comments: vec![MrbComment {
                    id: 1,
                    author: "Quality Manager".to_string(),
                    written_at: at(2024, 11, 21, 0, 0),
                    text: "Part function not affected by surface finish variance".to_string(),
                    kind: CommentType::Review,
                }],
            },
        ),
        entry(
            date(2024, 11, 18),
            MrbRecord {
                mrb_number: "MRB-2024-002".to_string(),
                title: "Dimensional non-conformance in bracket assembly".to_string(),
                description: "Hole diameter out of tolerance in mounting bracket".to_string(),
                part_number: "PN-67890-B".to_string(),
                lot_number: Some("LOT-2024-099".to_string()),
                quantity: 25,
                unit_of_measure: "EA".to_string(),
                supplier: Some("XYZ Manufacturing".to_string()),
                customer_order: Some("CO-2024-157".to_string()),
                deviation: "Hole diameter 10.2mm instead of 10.0 ±0.1mm specification".to_string(),
                deviation_type: DeviationType::Dimensional,
                severity: Severity::Major,
                priority: Priority::High,
                status: MrbStatus::BoardReview,
                disposition: MrbDisposition::Rework,
                submitted_by: "Sarah Johnson".to_string(),
                submitted_date: date(2024, 11, 18),
                reviewed_by: None,
                reviewed_date: None,
                board_members: Vec::new(),
                board_decision: None,
                approved_by: None,
                approved_date: None,
                due_date: date(2024, 12, 1),
                estimated_cost: 5000.0,
                actual_cost: 4800.0,
                customer_notification: true,
                customer_approval: true,
                justification: Some(
                    "Rework will restore part to full specification compliance".to_string(),
                ),
                quality_impact: Some("Assembly interference potential, requires rework".to_string()),
                corrective_action: Some("Review machining program and tooling setup".to_string()),
                attachments: Vec::new(),
                comments: Vec::new(),
            },
        ),
    ]
}
