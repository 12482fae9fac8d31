//! Controlled documents, procedure library and training demonstration records.

use crate::model::document::{DocumentRecord, DocumentStatus, DocumentType};
use crate::model::procedure::{
    Difficulty, ProcedureCategory, ProcedureRecord, ProcedureStatus, ProcedureType, Usage,
};
use crate::model::training::{
    Certification, CertificationCategory, Employee, TrainingCategory, TrainingMethod,
    TrainingRecord, TrainingStatus, TrainingType,
};
use crate::repo::record_store::Entry;
use crate::seed::{date, entry, strings};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn document(
    number: &str,
    title: &str,
    kind: DocumentType,
    version: &str,
    status: DocumentStatus,
    approved_by: &str,
    dates: [NaiveDate; 3],
    department: &str,
    owner: &str,
    description: &str,
    file_size: &str,
    download_count: u32,
) -> DocumentRecord {
    let [approval_date, effective_date, review_date] = dates;
    DocumentRecord {
        document_number: number.to_string(),
        title: title.to_string(),
        kind,
        version: version.to_string(),
        status,
        approved_by: approved_by.to_string(),
        approval_date,
        effective_date,
        review_date,
        department: department.to_string(),
        owner: owner.to_string(),
        description: description.to_string(),
        file_size: file_size.to_string(),
        download_count,
    }
}

pub fn document_entries() -> Vec<Entry<DocumentRecord>> {
    vec![
        entry(
            date(2024, 10, 1),
            document(
                "QP-002",
                "Document Control Procedure",
                DocumentType::Procedure,
                "3.0",
                DocumentStatus::UnderReview,
                "Quality Director",
                [date(2024, 10, 1), date(2024, 11, 1), date(2025, 11, 1)],
                "Quality",
                "Sarah Johnson",
                "Procedures for creating, reviewing, and maintaining controlled documents",
                "2.8 MB",
                23,
            ),
        ),
        entry(
            date(2024, 8, 15),
            document(
                "SOP-101",
                "Incoming Material Inspection",
                DocumentType::Procedure,
                "1.5",
                DocumentStatus::Approved,
                "Operations Manager",
                [date(2024, 8, 15), date(2024, 9, 1), date(2025, 9, 1)],
                "Production",
                "Mike Wilson",
                "Standard operating procedure for incoming material inspection",
                "3.1 MB",
                67,
            ),
        ),
        entry(
            date(2024, 6, 10),
            document(
                "FORM-001",
                "Non-Conformance Report Form",
                DocumentType::Form,
                "2.0",
                DocumentStatus::Approved,
                "Quality Manager",
                [date(2024, 6, 10), date(2024, 7, 1), date(2025, 7, 1)],
                "Quality",
                "Lisa Brown",
                "Standard form for reporting non-conformances",
                "0.5 MB",
                134,
            ),
        ),
        entry(
            date(2024, 1, 15),
            document(
                "QP-001",
                "Quality Policy",
                DocumentType::Policy,
                "2.1",
                DocumentStatus::Approved,
                "Quality Manager",
                [date(2024, 1, 15), date(2024, 2, 1), date(2025, 2, 1)],
                "Quality",
                "John Smith",
                "Corporate quality policy and commitment statement",
                "1.2 MB",
                45,
            ),
        ),
    ]
}

pub fn procedure_entries() -> Vec<Entry<ProcedureRecord>> {
    vec![
        entry(
            date(2024, 11, 1),
            ProcedureRecord {
                procedure_number: "SOP-TRN-002".to_string(),
                title: "New Employee Quality Training Program".to_string(),
                description: "Comprehensive training program for new employees on quality procedures and standards".to_string(),
                category: ProcedureCategory::Training,
                kind: ProcedureType::QualityPlan,
                version: "4.0".to_string(),
                status: ProcedureStatus::UnderReview,
                owner: "Training Coordinator".to_string(),
                department: "Human Resources".to_string(),
                approved_by: "HR Director".to_string(),
                approval_date: date(2024, 11, 1),
                effective_date: date(2024, 12, 1),
                next_review_date: date(2025, 6, 1),
                last_review_date: date(2024, 10, 25),
                review_frequency_months: 6,
                training_required: false,
                certification_required: false,
                related_documents: strings(&["TRN-MATRIX-001", "EVAL-FORM-002"]),
                equipment_required: strings(&["Training Materials", "Presentation Equipment"]),
                skills_required: strings(&["Training Delivery", "Assessment"]),
                safety_requirements: Vec::new(),
                estimated_minutes: 480,
                difficulty: Difficulty::Beginner,
                download_count: 67,
                usage: Usage::Active,
                tags: strings(&["training", "onboarding", "quality", "new employee"]),
                file_size: "3.1 MB".to_string(),
            },
        ),
        entry(
            date(2024, 10, 15),
            ProcedureRecord {
                procedure_number: "SOP-QM-001".to_string(),
                title: "Incoming Material Inspection Procedure".to_string(),
                description: "Detailed procedure for inspecting incoming raw materials and components to ensure quality standards".to_string(),
                category: ProcedureCategory::QualityManagement,
                kind: ProcedureType::Sop,
                version: "3.2".to_string(),
                status: ProcedureStatus::Active,
                owner: "Quality Manager".to_string(),
                department: "Quality Assurance".to_string(),
                approved_by: "VP Quality".to_string(),
                approval_date: date(2024, 10, 15),
                effective_date: date(2024, 11, 1),
                next_review_date: date(2025, 11, 1),
                last_review_date: date(2024, 10, 10),
                review_frequency_months: 12,
                training_required: true,
                certification_required: false,
                related_documents: strings(&["FORM-001", "WI-INS-002"]),
                equipment_required: strings(&[
                    "Calipers",
                    "Coordinate Measuring Machine",
                    "Visual Inspection Lamp",
                ]),
                skills_required: strings(&[
                    "Basic Measurement",
                    "GD&T Reading",
                    "Material Identification",
                ]),
                safety_requirements: strings(&["Safety Glasses", "Gloves"]),
                estimated_minutes: 45,
                difficulty: Difficulty::Intermediate,
                download_count: 156,
                usage: Usage::FrequentlyUsed,
                tags: strings(&["inspection", "incoming", "materials", "quality"]),
                file_size: "2.8 MB".to_string(),
            },
        ),
        entry(
            date(2024, 9, 20),
            ProcedureRecord {
                procedure_number: "SOP-MFG-003".to_string(),
                title: "CNC Machine Setup and Operation".to_string(),
                description: "Standard operating procedure for setting up and operating CNC machining centers".to_string(),
                category: ProcedureCategory::Manufacturing,
                kind: ProcedureType::Sop,
                version: "2.1".to_string(),
                status: ProcedureStatus::Active,
                owner: "Manufacturing Engineer".to_string(),
                department: "Production".to_string(),
                approved_by: "Manufacturing Manager".to_string(),
                approval_date: date(2024, 9, 20),
                effective_date: date(2024, 10, 1),
                next_review_date: date(2025, 4, 1),
                last_review_date: date(2024, 9, 15),
                review_frequency_months: 6,
                training_required: true,
                certification_required: true,
                related_documents: strings(&["WI-SAFE-001", "CHKLIST-CNC-001"]),
                equipment_required: strings(&[
                    "CNC Machine",
                    "Cutting Tools",
                    "Measuring Equipment",
                    "Safety Equipment",
                ]),
                skills_required: strings(&[
                    "CNC Programming",
                    "Blueprint Reading",
                    "Tool Selection",
                    "Machine Operation",
                ]),
                safety_requirements: strings(&[
                    "Safety Glasses",
                    "Steel-toed Boots",
                    "Machine Guard Verification",
                ]),
                estimated_minutes: 120,
                difficulty: Difficulty::Advanced,
                download_count: 89,
                usage: Usage::FrequentlyUsed,
                tags: strings(&["cnc", "machining", "setup", "manufacturing"]),
                file_size: "4.2 MB".to_string(),
            },
        ),
        entry(
            date(2024, 8, 10),
            ProcedureRecord {
                procedure_number: "WI-CAL-005".to_string(),
                title: "Gauge Block Calibration Work Instruction".to_string(),
                description: "Step-by-step work instruction for calibrating precision gauge blocks".to_string(),
                category: ProcedureCategory::Calibration,
                kind: ProcedureType::WorkInstruction,
                version: "1.8".to_string(),
                status: ProcedureStatus::Active,
                owner: "Metrology Technician".to_string(),
                department: "Quality Assurance".to_string(),
                approved_by: "Quality Manager".to_string(),
                approval_date: date(2024, 8, 10),
                effective_date: date(2024, 8, 15),
                next_review_date: date(2025, 8, 15),
                last_review_date: date(2024, 8, 5),
                review_frequency_months: 12,
                training_required: true,
                certification_required: true,
                related_documents: strings(&["SOP-CAL-001", "CERT-CAL-REQ"]),
                equipment_required: strings(&[
                    "Gauge Blocks",
                    "Comparator",
                    "Environmental Controls",
                ]),
                skills_required: strings(&[
                    "Precision Measurement",
                    "Calibration Procedures",
                    "Environmental Awareness",
                ]),
                safety_requirements: strings(&["Clean Room Protocol", "ESD Protection"]),
                estimated_minutes: 90,
                difficulty: Difficulty::Advanced,
                download_count: 34,
                usage: Usage::RarelyUsed,
                tags: strings(&["calibration", "gauge blocks", "metrology"]),
                file_size: "1.5 MB".to_string(),
            },
        ),
        entry(
            date(2024, 7, 15),
            ProcedureRecord {
                procedure_number: "CHKLIST-FINAL-001".to_string(),
                title: "Final Inspection Checklist".to_string(),
                description: "Comprehensive checklist for final product inspection before shipment".to_string(),
                category: ProcedureCategory::Inspection,
                kind: ProcedureType::Checklist,
                version: "2.3".to_string(),
                status: ProcedureStatus::Active,
                owner: "QC Inspector".to_string(),
                department: "Quality Control".to_string(),
                approved_by: "Quality Manager".to_string(),
                approval_date: date(2024, 7, 15),
                effective_date: date(2024, 8, 1),
                next_review_date: date(2025, 2, 1),
                last_review_date: date(2024, 7, 10),
                review_frequency_months: 6,
                training_required: true,
                certification_required: false,
                related_documents: strings(&["SOP-FINAL-001", "SPEC-PROD-001"]),
                equipment_required: strings(&["Inspection Tools", "Test Equipment"]),
                skills_required: strings(&["Product Knowledge", "Inspection Techniques"]),
                safety_requirements: strings(&["Safety Glasses"]),
                estimated_minutes: 30,
                difficulty: Difficulty::Intermediate,
                download_count: 203,
                usage: Usage::FrequentlyUsed,
                tags: strings(&["final inspection", "checklist", "shipping"]),
                file_size: "0.8 MB".to_string(),
            },
        ),
    ]
}

pub fn training_entries() -> Vec<Entry<TrainingRecord>> {
    vec![
        entry(
            date(2024, 11, 20),
            TrainingRecord {
                training_number: "TRN-005".to_string(),
                employee_id: "EMP-002".to_string(),
                employee_name: "Sarah Wilson".to_string(),
                training_title: "Measurement System Analysis (MSA)".to_string(),
                training_type: TrainingType::ProcedureTraining,
                category: TrainingCategory::Quality,
                instructor: "Metrology Engineer".to_string(),
                training_date: date(2024, 12, 5),
                expiration_date: None,
                duration_hours: 6.0,
                status: TrainingStatus::Scheduled,
                score: None,
                passing_score: 80,
                attempts: 0,
                max_attempts: 3,
                certificate_number: None,
                related_procedures: strings(&["SOP-MSA-001", "WI-GAGE-002"]),
                required_by: "IATF 16949 Requirements".to_string(),
                competency_areas: strings(&["Gage R&R", "Bias Studies", "Linearity Analysis"]),
                method: TrainingMethod::OnTheJob,
                cost: 200.0,
                provider: "Internal Training Dept".to_string(),
                location: "Metrology Lab".to_string(),
                notes: None,
                attachments: Vec::new(),
            },
        ),
        entry(
            date(2024, 11, 15),
            TrainingRecord {
                training_number: "TRN-001".to_string(),
                employee_id: "EMP-001".to_string(),
                employee_name: "John Smith".to_string(),
                training_title: "CNC Machine Operation Safety".to_string(),
                training_type: TrainingType::SafetyTraining,
                category: TrainingCategory::Safety,
                instructor: "Safety Manager".to_string(),
                training_date: date(2024, 11, 15),
                expiration_date: Some(date(2025, 11, 15)),
                duration_hours: 4.0,
                status: TrainingStatus::Completed,
                score: Some(92),
                passing_score: 80,
                attempts: 1,
                max_attempts: 3,
                certificate_number: Some("SAFE-2024-001".to_string()),
                related_procedures: strings(&["SOP-MFG-003"]),
                required_by: "OSHA Safety Standards".to_string(),
                competency_areas: strings(&["Machine Safety", "Emergency Procedures"]),
                method: TrainingMethod::Classroom,
                cost: 150.0,
                provider: "Internal Training Dept".to_string(),
                location: "Training Room A".to_string(),
                notes: None,
                attachments: strings(&["certificate.pdf", "training_materials.pdf"]),
            },
        ),
        entry(
            date(2024, 10, 20),
            TrainingRecord {
                training_number: "TRN-002".to_string(),
                employee_id: "EMP-002".to_string(),
                employee_name: "Sarah Wilson".to_string(),
                training_title: "ISO 9001:2015 Internal Auditor Certification".to_string(),
                training_type: TrainingType::Certification,
                category: TrainingCategory::Quality,
                instructor: "External Consultant".to_string(),
                training_date: date(2024, 10, 20),
                expiration_date: Some(date(2027, 10, 20)),
                duration_hours: 24.0,
                status: TrainingStatus::Completed,
                score: Some(88),
                passing_score: 75,
                attempts: 1,
                max_attempts: 2,
                certificate_number: Some("ISO-AUDIT-2024-045".to_string()),
                related_procedures: strings(&["SOP-QM-001", "SOP-QM-002"]),
                required_by: "ISO 9001 Certification".to_string(),
                competency_areas: strings(&[
                    "Audit Planning",
                    "Non-conformance Identification",
                    "Report Writing",
                ]),
                method: TrainingMethod::External,
                cost: 1200.0,
                provider: "Quality Training Institute".to_string(),
                location: "External Facility".to_string(),
                notes: Some(
                    "Excellent performance, recommended for lead auditor training".to_string(),
                ),
                attachments: strings(&["iso_certificate.pdf", "audit_checklist.pdf"]),
            },
        ),
        entry(
            date(2024, 9, 10),
            TrainingRecord {
                training_number: "TRN-003".to_string(),
                employee_id: "EMP-003".to_string(),
                employee_name: "Mike Davis".to_string(),
                training_title: "Statistical Process Control (SPC)".to_string(),
                training_type: TrainingType::SkillDevelopment,
                category: TrainingCategory::Technical,
                instructor: "Quality Manager".to_string(),
                training_date: date(2024, 9, 10),
                expiration_date: None,
                duration_hours: 16.0,
                status: TrainingStatus::Completed,
                score: Some(95),
                passing_score: 70,
                attempts: 1,
                max_attempts: 3,
                certificate_number: Some("SPC-2024-012".to_string()),
                related_procedures: strings(&["SOP-QC-005", "WI-SPC-001"]),
                required_by: "Quality System Requirements".to_string(),
                competency_areas: strings(&[
                    "Control Charts",
                    "Process Capability",
                    "Statistical Analysis",
                ]),
                method: TrainingMethod::Workshop,
                cost: 800.0,
                provider: "Internal Training Dept".to_string(),
                location: "Conference Room B".to_string(),
                notes: None,
                attachments: strings(&["spc_manual.pdf", "control_chart_templates.xlsx"]),
            },
        ),
        entry(
            date(2023, 6, 16),
            TrainingRecord {
                training_number: "TRN-004".to_string(),
                employee_id: "EMP-001".to_string(),
                employee_name: "John Smith".to_string(),
                training_title: "New Employee Orientation".to_string(),
                training_type: TrainingType::Orientation,
                category: TrainingCategory::Compliance,
                instructor: "HR Manager".to_string(),
                training_date: date(2023, 6, 16),
                expiration_date: Some(date(2024, 6, 16)),
                duration_hours: 8.0,
                status: TrainingStatus::Expired,
                score: Some(85),
                passing_score: 70,
                attempts: 1,
                max_attempts: 2,
                certificate_number: None,
                related_procedures: strings(&["HR-001", "SAFE-001"]),
                required_by: "Company Policy".to_string(),
                competency_areas: strings(&[
                    "Company Policies",
                    "Safety Basics",
                    "Quality Awareness",
                ]),
                method: TrainingMethod::Classroom,
                cost: 100.0,
                provider: "Internal HR Dept".to_string(),
                location: "Main Conference Room".to_string(),
                notes: Some("Needs refresher training".to_string()),
                attachments: strings(&["employee_handbook.pdf"]),
            },
        ),
    ]
}

/// Employee reference table for the training area.
pub fn employees() -> Vec<Employee> {
    let employee = |id: &str,
                    name: &str,
                    department: &str,
                    position: &str,
                    hired: NaiveDate,
                    email: &str,
                    supervisor: &str| Employee {
        employee_id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        hire_date: hired,
        email: email.to_string(),
        supervisor: supervisor.to_string(),
        active: true,
    };
    vec![
        employee(
            "EMP-001",
            "John Smith",
            "Production",
            "Machine Operator",
            date(2023, 6, 15),
            "john.smith@company.com",
            "Mike Johnson",
        ),
        employee(
            "EMP-002",
            "Sarah Wilson",
            "Quality",
            "QC Inspector",
            date(2022, 3, 10),
            "sarah.wilson@company.com",
            "Lisa Brown",
        ),
        employee(
            "EMP-003",
            "Mike Davis",
            "Engineering",
            "Quality Engineer",
            date(2021, 9, 20),
            "mike.davis@company.com",
            "David Chen",
        ),
    ]
}

/// Certification catalog for the training area.
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            certification_id: "CERT-001".to_string(),
            name: "ISO 9001 Internal Auditor".to_string(),
            issuing_body: "Quality Training Institute".to_string(),
            category: CertificationCategory::Industry,
            validity_months: 36,
            prerequisite: None,
            description: "Certification for conducting internal quality audits per ISO 9001 standard".to_string(),
            renewal_required: true,
            cost: 1200.0,
        },
        Certification {
            certification_id: "CERT-002".to_string(),
            name: "CNC Machine Safety Certification".to_string(),
            issuing_body: "Company Safety Department".to_string(),
            category: CertificationCategory::Internal,
            validity_months: 12,
            prerequisite: None,
            description: "Internal certification for safe operation of CNC machinery".to_string(),
            renewal_required: true,
            cost: 150.0,
        },
        Certification {
            certification_id: "CERT-003".to_string(),
            name: "Statistical Process Control Specialist".to_string(),
            issuing_body: "American Society for Quality".to_string(),
            category: CertificationCategory::Professional,
            validity_months: 24,
            prerequisite: Some("Basic Statistics Knowledge".to_string()),
            description: "Professional certification in statistical process control methods".to_string(),
            renewal_required: true,
            cost: 800.0,
        },
    ]
}
