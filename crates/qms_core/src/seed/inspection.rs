//! FAI, in-process, incoming and final inspection demonstration records.

use crate::model::common::{CheckResult, Priority, Severity};
use crate::model::fai::{
    FaiDimension, FaiDisposition, FaiReason, FaiRecord, FaiStatus, FaiSurfaceFinish, FaiTest,
    ProductionMethod,
};
use crate::model::final_inspection::{
    default_checklist, FinalDisposition, FinalInspectionRecord, FinalStatus,
    PACKAGING_CHECK_LABELS, VISUAL_CHECK_LABELS,
};
use crate::model::incoming::{
    default_documentation_checks, default_inspection_types, default_visual_inspections,
    IncomingDisposition, IncomingRecord, IncomingStatus, MaterialTesting,
};
use crate::model::ipi::{
    IpiDefect, IpiDisposition, IpiMeasurement, IpiPriority, IpiProcessParameter, IpiRecord,
    IpiStatus, IpiVisualCheck, MeasurementResult, ParameterResult, Shift,
};
use crate::repo::record_store::Entry;
use crate::seed::{date, entry};

pub fn fai_entries() -> Vec<Entry<FaiRecord>> {
    vec![
        entry(
            date(2024, 11, 20),
            FaiRecord {
                fai_number: "FAI-2024-002".to_string(),
                part_number: "PN-67890-B".to_string(),
                part_name: "Support Bracket".to_string(),
                revision: "A".to_string(),
                lot_number: None,
                serial_number: None,
                drawing_number: "DWG-67890".to_string(),
                drawing_revision: "A".to_string(),
                work_order: "WO-2024-157".to_string(),
                customer: "Airbus".to_string(),
                program: "A350 Program".to_string(),
                reason: FaiReason::ProcessChange,
                production_method: ProductionMethod::Production,
                status: FaiStatus::InProgress,
                priority: Priority::Medium,
                inspector_name: "Sarah Johnson".to_string(),
                inspection_date: date(2024, 11, 22),
                due_date: date(2024, 12, 10),
                manufacturing_process: "Sheet Metal Forming, Welding".to_string(),
                tooling_used: "Press Tool P-789".to_string(),
                equipment_used: "Press P-500, Welder W-300".to_string(),
                material_certification: true,
                process_documentation: false,
                calibration_records: true,
                dimensions: Vec::new(),
                functional_tests: Vec::new(),
                material_tests: Vec::new(),
                surface_finish: Vec::new(),
                notes: Some("First article in progress. Awaiting material test results.".to_string()),
                disposition: FaiDisposition::Pending,
                customer_approval: true,
                approved_by: None,
                approved_date: None,
                submitted_by: "Quality Inspector".to_string(),
                submitted_date: date(2024, 11, 20),
                attachments: Vec::new(),
            },
        ),
        entry(
            date(2024, 11, 18),
            FaiRecord {
                fai_number: "FAI-2024-001".to_string(),
                part_number: "PN-12345-A".to_string(),
                part_name: "Main Housing Assembly".to_string(),
                revision: "C".to_string(),
                lot_number: Some("LOT-2024-098".to_string()),
                serial_number: Some("SN-001".to_string()),
                drawing_number: "DWG-12345".to_string(),
                drawing_revision: "C".to_string(),
                work_order: "WO-2024-156".to_string(),
                customer: "Boeing".to_string(),
                program: "Commercial Aircraft".to_string(),
                reason: FaiReason::InitialProduction,
                production_method: ProductionMethod::Production,
                status: FaiStatus::PendingReview,
                priority: Priority::High,
                inspector_name: "John Smith".to_string(),
                inspection_date: date(2024, 11, 20),
                due_date: date(2024, 12, 5),
                manufacturing_process: "CNC Machining, Assembly".to_string(),
                tooling_used: "Fixture A-123, Jig B-456".to_string(),
                equipment_used: "CNC Mill M-100, CMM C-200".to_string(),
                material_certification: true,
                process_documentation: true,
                calibration_records: true,
                dimensions: vec![
                    FaiDimension {
                        id: 1,
                        characteristic: "Overall Length".to_string(),
                        specification: "100.0 ± 0.1".to_string(),
                        tolerance: "± 0.1".to_string(),
                        actual_value: 100.05,
                        unit: "mm".to_string(),
                        method: "CMM Measurement".to_string(),
                        result: CheckResult::Pass,
                        notes: None,
                    },
                    FaiDimension {
                        id: 2,
                        characteristic: "Hole Diameter".to_string(),
                        specification: "10.0 +0.1/-0.0".to_string(),
                        tolerance: "+0.1/-0.0".to_string(),
                        actual_value: 10.08,
                        unit: "mm".to_string(),
                        method: "Pin Gauge".to_string(),
                        result: CheckResult::Pass,
                        notes: None,
                    },
                ],
                functional_tests: vec![FaiTest {
                    id: 1,
                    test_name: "Pressure Test".to_string(),
                    specification: "1000 PSI minimum".to_string(),
                    procedure: "PR-TEST-001".to_string(),
                    actual_result: "1150 PSI".to_string(),
                    result: CheckResult::Pass,
                    equipment: Some("Pressure Tester PT-100".to_string()),
                    notes: None,
                }],
                material_tests: vec![FaiTest {
                    id: 1,
                    test_name: "Material Hardness".to_string(),
                    specification: "HRC 45-50".to_string(),
                    procedure: "ASTM E18".to_string(),
                    actual_result: "HRC 47".to_string(),
                    result: CheckResult::Pass,
                    equipment: Some("Rockwell Tester RT-200".to_string()),
                    notes: None,
                }],
                surface_finish: vec![FaiSurfaceFinish {
                    id: 1,
                    surface: "Machined Surface A".to_string(),
                    specification: "3.2 Ra max".to_string(),
                    actual_value: 2.8,
                    unit: "µm".to_string(),
                    result: CheckResult::Pass,
                    notes: None,
                }],
                notes: Some("All measurements within specification. Ready for production.".to_string()),
                disposition: FaiDisposition::Accept,
                customer_approval: false,
                approved_by: None,
                approved_date: None,
                submitted_by: "Quality Inspector".to_string(),
                submitted_date: date(2024, 11, 18),
                attachments: Vec::new(),
            },
        ),
    ]
}

pub fn ipi_entries() -> Vec<Entry<IpiRecord>> {
    vec![
        entry(
            date(2024, 11, 26),
            IpiRecord {
                inspection_number: "IPI-2024-002".to_string(),
                work_order: "WO-2024-157".to_string(),
                part_number: "PN-67890-B".to_string(),
                part_name: "Support Bracket".to_string(),
                revision: "A".to_string(),
                operation: "Welding".to_string(),
                operation_sequence: 30,
                lot_number: None,
                quantity: 25,
                inspected_quantity: 25,
                accepted_quantity: 23,
                rejected_quantity: 0,
                rework_quantity: 2,
                inspector: "Sarah Wilson".to_string(),
                inspection_date: date(2024, 11, 26),
                shift: Shift::Day,
                work_center: "WC-300".to_string(),
                operator: "Tom Brown".to_string(),
                machine: "Welding Station W-200".to_string(),
                tooling: "Welding Jig WJ-456".to_string(),
                status: IpiStatus::InProgress,
                priority: IpiPriority::High,
                defects: Vec::new(),
                measurements: Vec::new(),
                visual_checks: Vec::new(),
                process_parameters: Vec::new(),
                notes: Some("Welding inspection in progress".to_string()),
                next_operation: Some("Heat Treatment".to_string()),
                disposition: IpiDisposition::Pending,
                customer_notification: false,
                quality_alert: false,
                submitted_by: "Quality Inspector".to_string(),
                submitted_date: date(2024, 11, 26),
                reviewed_by: None,
                reviewed_date: None,
                attachments: Vec::new(),
            },
        ),
        entry(
            date(2024, 11, 25),
            IpiRecord {
                inspection_number: "IPI-2024-001".to_string(),
                work_order: "WO-2024-156".to_string(),
                part_number: "PN-12345-A".to_string(),
                part_name: "Main Housing".to_string(),
                revision: "C".to_string(),
                operation: "CNC Machining".to_string(),
                operation_sequence: 20,
                lot_number: Some("LOT-2024-098".to_string()),
                quantity: 50,
                inspected_quantity: 50,
                accepted_quantity: 48,
                rejected_quantity: 2,
                rework_quantity: 0,
                inspector: "John Smith".to_string(),
                inspection_date: date(2024, 11, 25),
                shift: Shift::Day,
                work_center: "WC-200".to_string(),
                operator: "Mike Johnson".to_string(),
                machine: "CNC Mill M-100".to_string(),
                tooling: "Fixture F-123".to_string(),
                status: IpiStatus::Approved,
                priority: IpiPriority::Normal,
                defects: vec![IpiDefect {
                    id: 1,
                    defect_type: "Dimensional".to_string(),
                    description: "Hole diameter slightly undersized".to_string(),
                    quantity: 2,
                    severity: Severity::Minor,
                    location: "Mounting holes".to_string(),
                    cause: Some("Tool wear".to_string()),
                    correction_required: true,
                }],
                measurements: vec![IpiMeasurement {
                    id: 1,
                    characteristic: "Overall Length".to_string(),
                    specification: "100.0 ± 0.1".to_string(),
                    nominal_value: 100.0,
                    tolerance: "± 0.1".to_string(),
                    actual_value: 99.98,
                    unit: "mm".to_string(),
                    instrument: "CMM".to_string(),
                    result: MeasurementResult::Pass,
                    notes: None,
                }],
                visual_checks: vec![IpiVisualCheck {
                    id: 1,
                    check_point: "Surface Finish".to_string(),
                    requirement: "No visible tool marks".to_string(),
                    result: CheckResult::Pass,
                    notes: None,
                }],
                process_parameters: vec![IpiProcessParameter {
                    id: 1,
                    parameter: "Spindle Speed".to_string(),
                    specification: "3000 ± 100 RPM".to_string(),
                    actual_value: "2980".to_string(),
                    unit: "RPM".to_string(),
                    result: ParameterResult::WithinSpec,
                    notes: None,
                }],
                notes: Some("Minor dimensional issue resolved by tool change".to_string()),
                next_operation: Some("Assembly".to_string()),
                disposition: IpiDisposition::Accept,
                customer_notification: false,
                quality_alert: false,
                submitted_by: "Quality Inspector".to_string(),
                submitted_date: date(2024, 11, 25),
                reviewed_by: Some("QC Supervisor".to_string()),
                reviewed_date: Some(date(2024, 11, 25)),
                attachments: Vec::new(),
            },
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn incoming(
    purchase_order: &str,
    received: (i32, u32, u32),
    supplier: &str,
    supplier_lot_number: &str,
    part: (&str, &str),
    quantities: (u32, u32, u32),
    unit_of_measure: &str,
    material_type: &str,
    inspection_level: &str,
    inspector: &str,
    status: IncomingStatus,
    disposition: IncomingDisposition,
) -> IncomingRecord {
    let (year, month, day) = received;
    let (ordered, received_qty, sample_size) = quantities;
    IncomingRecord {
        purchase_order: purchase_order.to_string(),
        receipt_date: date(year, month, day),
        packing_slip_number: None,
        supplier: supplier.to_string(),
        supplier_lot_number: supplier_lot_number.to_string(),
        part_number: part.0.to_string(),
        part_description: part.1.to_string(),
        revision: None,
        quantity_ordered: ordered,
        quantity_received: received_qty,
        unit_of_measure: unit_of_measure.to_string(),
        material_type: material_type.to_string(),
        inspection_level: inspection_level.to_string(),
        aql: None,
        sample_size,
        inspector: inspector.to_string(),
        inspection_date: date(year, month, day),
        inspection_types: default_inspection_types(),
        visual_inspections: default_visual_inspections(),
        measurements: Vec::new(),
        material_testing: MaterialTesting::default(),
        coc_received: false,
        coc_number: None,
        mtr_received: false,
        mtr_number: None,
        documentation_checks: default_documentation_checks(),
        status,
        disposition: Some(disposition),
        disposition_notes: None,
        quality_engineer: None,
        approval_date: None,
        storage_location: None,
        notification_method: None,
        notification_date: None,
    }
}

pub fn incoming_entries() -> Vec<Entry<IncomingRecord>> {
    let mut steel = incoming(
        "PO-2024-1001",
        (2024, 11, 28),
        "ABC Manufacturing Co.",
        "ABC-LOT-2024-456",
        ("P/N-STL-001", "316 Stainless Steel Rod"),
        (100, 100, 13),
        "Each",
        "Raw Material",
        "General Level II",
        "Inspector-001 John Smith",
        IncomingStatus::Accepted,
        IncomingDisposition::ReleaseToStock,
    );
    steel.packing_slip_number = Some("PS-ABC-5678".to_string());
    steel.revision = Some("B".to_string());
    steel.aql = Some("1.5".to_string());
    steel.coc_received = true;
    steel.coc_number = Some("COC-ABC-2024-789".to_string());

    let mut connector = incoming(
        "PO-2024-1002",
        (2024, 11, 27),
        "XYZ Precision Parts",
        "XYZ-BATCH-2024-123",
        ("P/N-ELC-456", "Electronic Connector Assembly"),
        (50, 45, 8),
        "Each",
        "Electrical Components",
        "General Level I",
        "Inspector-002 Jane Doe",
        IncomingStatus::Rejected,
        IncomingDisposition::ReturnToSupplier,
    );
    connector.disposition_notes = Some("Dimensional non-conformance detected".to_string());

    let mut plate = incoming(
        "PO-2024-1003",
        (2024, 11, 26),
        "Global Steel Supply",
        "GSS-2024-789",
        ("P/N-ALU-789", "Aluminum Plate 6061-T6"),
        (25, 25, 5),
        "Sq Ft",
        "Raw Material",
        "General Level II",
        "Inspector-003 Mike Johnson",
        IncomingStatus::Quarantined,
        IncomingDisposition::EngineeringReview,
    );
    plate.disposition_notes = Some("Material certification pending review".to_string());

    vec![
        entry(date(2024, 11, 28), steel),
        entry(date(2024, 11, 27), connector),
        entry(date(2024, 11, 26), plate),
    ]
}

#[allow(clippy::too_many_arguments)]
fn final_inspection(
    work_order: &str,
    part: (&str, &str, &str),
    lot_number: &str,
    quantity: u32,
    inspector: &str,
    inspected: (i32, u32, u32),
    status: FinalStatus,
    disposition: FinalDisposition,
) -> FinalInspectionRecord {
    let (year, month, day) = inspected;
    FinalInspectionRecord {
        work_order: work_order.to_string(),
        part_number: part.0.to_string(),
        part_name: part.1.to_string(),
        revision: part.2.to_string(),
        serial_number: None,
        lot_number: lot_number.to_string(),
        quantity,
        customer_po: None,
        inspector: inspector.to_string(),
        inspection_date: date(year, month, day),
        shift: None,
        visual_checks: default_checklist(&VISUAL_CHECK_LABELS),
        dimensions: Vec::new(),
        status,
        disposition: Some(disposition),
        inspector_notes: None,
        quality_engineer: None,
        qe_approval_date: None,
        packaging_checks: default_checklist(&PACKAGING_CHECK_LABELS),
        package_type: None,
        shipping_method: None,
        tracking_number: None,
        special_instructions: None,
    }
}

pub fn final_inspection_entries() -> Vec<Entry<FinalInspectionRecord>> {
    let mut machined = final_inspection(
        "WO-2024-1234",
        ("P/N-ABC-123", "Precision Machined Component", "C"),
        "LOT-2024-045",
        50,
        "John Smith",
        (2024, 11, 28),
        FinalStatus::Approved,
        FinalDisposition::Ship,
    );
    machined.serial_number = Some("SN-001234".to_string());
    machined.customer_po = Some("PO-CUST-789".to_string());
    machined.shift = Some("Day Shift".to_string());
    machined.quality_engineer = Some("QE-001 Robert Chen".to_string());
    machined.package_type = Some("Anti-Static Bag".to_string());
    machined.shipping_method = Some("Express".to_string());

    let electronic = final_inspection(
        "WO-2024-1235",
        ("P/N-DEF-456", "Electronic Assembly", "B"),
        "LOT-2024-046",
        25,
        "Jane Doe",
        (2024, 11, 27),
        FinalStatus::ReworkRequired,
        FinalDisposition::Rework,
    );

    let mut aerospace = final_inspection(
        "WO-2024-1236",
        ("P/N-GHI-789", "Aerospace Component", "A"),
        "LOT-2024-047",
        10,
        "Mike Johnson",
        (2024, 11, 26),
        FinalStatus::Shipped,
        FinalDisposition::Ship,
    );
    aerospace.tracking_number = Some("TRK-123456789".to_string());

    vec![
        entry(date(2024, 11, 28), machined),
        entry(date(2024, 11, 27), electronic),
        entry(date(2024, 11, 26), aerospace),
    ]
}
