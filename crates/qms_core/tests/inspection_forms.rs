use chrono::NaiveDate;
use qms_core::form::fai::FaiForm;
use qms_core::form::final_inspection::FinalInspectionForm;
use qms_core::form::incoming::IncomingForm;
use qms_core::form::ipi::IpiForm;
use qms_core::model::common::CheckResult;
use qms_core::model::fai::{FaiReason, OverallResult};
use qms_core::model::final_inspection::FinalStatus;
use qms_core::model::incoming::IncomingStatus;
use qms_core::service::fai::FaiSession;
use qms_core::service::final_inspection::FinalInspectionSession;
use qms_core::service::incoming::IncomingSession;
use qms_core::service::ipi::IpiSession;
use qms_core::{Clock, FieldError, FixedClock, FormModel, SubmitOutcome, WorkflowConfig};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(day(2024, 12, 1)))
}

fn fill_fai(form: &mut FaiForm) {
    form.fai_number = "FAI-2024-101".to_string();
    form.part_number = "PN-7781".to_string();
    form.part_name = "Mounting Bracket".to_string();
    form.revision = "B".to_string();
    form.drawing_number = "DWG-7781".to_string();
    form.drawing_revision = "B".to_string();
    form.work_order = "WO-5521".to_string();
    form.customer = "Northwind Aero".to_string();
    form.reason = Some(FaiReason::InitialProduction);
    form.inspector_name = "Ana Ruiz".to_string();
    form.inspection_date = Some(day(2024, 11, 29));
    form.due_date = Some(day(2024, 12, 12));
    form.manufacturing_process = "CNC milling".to_string();
    form.submitted_by = "Ana Ruiz".to_string();
}

#[test]
fn fai_nested_lines_are_validated_by_path() {
    let mut session = FaiSession::new(clock(), WorkflowConfig::default());
    fill_fai(session.form_values_mut());
    session.form_values_mut().add_dimension();
    session.form_values_mut().add_surface_finish();
    session.form_values_mut().surface_finish[0].surface = "Face A".to_string();
    session.form_values_mut().surface_finish[0].specification = "Ra 1.6".to_string();
    session.form_values_mut().surface_finish[0].actual_value = -0.5;

    assert!(matches!(session.submit(), SubmitOutcome::Invalid(_)));
    let errors = session.form_errors();
    assert!(errors.has("dimensions[0].characteristic"));
    assert!(errors.has("dimensions[0].method"));
    assert!(!errors.has("dimensions[0].unit"));
    assert_eq!(
        errors.get("surface_finish[0].actual_value"),
        &[FieldError::BelowMin {
            min: 0.0,
            actual: -0.5
        }]
    );
    assert!(session.is_empty());
}

#[test]
fn fai_missing_reason_is_required() {
    let mut session = FaiSession::new(clock(), WorkflowConfig::default());
    fill_fai(session.form_values_mut());
    session.form_values_mut().reason = None;
    session.submit();
    assert_eq!(session.form_errors().get("reason"), &[FieldError::Required]);
}

#[test]
fn fai_lines_are_numbered_and_rolled_up() {
    let mut session = FaiSession::new(clock(), WorkflowConfig::default());
    let form = session.form_values_mut();
    fill_fai(form);
    for (name, result) in [("Bore diameter", CheckResult::Pass), ("Flatness", CheckResult::Fail)] {
        form.add_dimension();
        let line = form.dimensions.last_mut().unwrap();
        line.characteristic = name.to_string();
        line.specification = "per drawing".to_string();
        line.tolerance = "±0.05".to_string();
        line.actual_value = 12.01;
        line.method = "CMM".to_string();
        line.result = result;
    }
    assert_eq!(form.overall_result(), OverallResult::Fail);

    let id = session.submit().record_id().unwrap();
    let record = session.get(id).unwrap().record();
    let ids: Vec<u32> = record.dimensions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(record.submitted_date, day(2024, 12, 1));
    assert_eq!(record.overall_result(), OverallResult::Fail);
}

#[test]
fn fai_removing_a_line_renumbers_on_build() {
    let mut session = FaiSession::seeded(clock(), WorkflowConfig::default());
    let id = session
        .all()
        .iter()
        .find(|e| e.record().dimensions.len() > 1)
        .map(|e| e.id())
        .unwrap();
    let count = session.get(id).unwrap().record().dimensions.len();

    session.begin_edit(id);
    session.form_values_mut().remove_dimension(0);
    session.form_values_mut().remove_dimension(99);
    assert_eq!(session.submit(), SubmitOutcome::Updated(id));

    let record = session.get(id).unwrap().record();
    assert_eq!(record.dimensions.len(), count - 1);
    assert_eq!(record.dimensions[0].id, 1);
}

#[test]
fn fai_edit_keeps_approval_stamp() {
    let mut session = FaiSession::new(clock(), WorkflowConfig::default());
    fill_fai(session.form_values_mut());
    let id = session.submit().record_id().unwrap();
    assert!(session.approve(id));

    session.begin_edit(id);
    session.form_values_mut().customer = "Contoso Defense".to_string();
    session.submit();

    let record = session.get(id).unwrap().record();
    assert_eq!(record.customer, "Contoso Defense");
    assert_eq!(record.approved_by.as_deref(), Some("Current User"));
    assert_eq!(record.approved_date, Some(day(2024, 12, 1)));
}

fn fill_ipi(form: &mut IpiForm) {
    form.inspection_number = "IPI-2024-101".to_string();
    form.work_order = "WO-5521".to_string();
    form.part_number = "PN-7781".to_string();
    form.part_name = "Mounting Bracket".to_string();
    form.revision = "B".to_string();
    form.operation = "Deburr".to_string();
    form.quantity = 40.0;
    form.inspected_quantity = 40.0;
    form.accepted_quantity = 38.0;
    form.rejected_quantity = 2.0;
    form.inspector = "Ana Ruiz".to_string();
    form.inspection_date = Some(day(2024, 11, 30));
    form.work_center = "WC-12".to_string();
    form.operator = "Lee Park".to_string();
    form.submitted_by = "Ana Ruiz".to_string();
}

#[test]
fn ipi_defect_quantity_must_be_positive() {
    let mut session = IpiSession::new(clock(), WorkflowConfig::default());
    let form = session.form_values_mut();
    fill_ipi(form);
    form.add_defect();
    form.defects[0].defect_type = "Burr".to_string();
    form.defects[0].description = "Edge burr".to_string();
    form.defects[0].location = "Slot 2".to_string();
    form.defects[0].quantity = 0.0;

    assert!(matches!(session.submit(), SubmitOutcome::Invalid(_)));
    assert_eq!(
        session.form_errors().get("defects[0].quantity"),
        &[FieldError::BelowMin {
            min: 1.0,
            actual: 0.0
        }]
    );

    session.form_values_mut().defects[0].quantity = 3.0;
    let id = session.submit().record_id().unwrap();
    let record = session.get(id).unwrap().record();
    assert_eq!(record.defect_quantity(), 3);
    assert_eq!(record.submitted_date, day(2024, 12, 1));
    assert_eq!(session.statistics().first_pass_yield, 95);
}

#[test]
fn ipi_defaults_start_at_one_piece() {
    let form = IpiForm::defaults();
    assert_eq!(form.quantity, 1.0);
    assert_eq!(form.inspected_quantity, 1.0);
    assert_eq!(form.operation_sequence, 1.0);
    assert!(form.defects.is_empty());
}

fn fill_incoming(form: &mut IncomingForm) {
    form.purchase_order = "PO-2024-2001".to_string();
    form.receipt_date = Some(day(2024, 11, 30));
    form.supplier = "ABC Manufacturing Co.".to_string();
    form.supplier_lot_number = "ABC-LOT-77".to_string();
    form.part_number = "P/N-STL-001".to_string();
    form.part_description = "316 Stainless Steel Rod".to_string();
    form.quantity_ordered = Some(200.0);
    form.quantity_received = Some(200.0);
    form.material_type = "Raw Material".to_string();
    form.inspection_level = "Level II".to_string();
    form.sample_size = Some(20.0);
    form.inspector = "Mike Davis".to_string();
    form.inspection_date = Some(day(2024, 12, 1));
    form.status = Some(IncomingStatus::Accepted);
}

#[test]
fn incoming_defaults_prefill_checklists() {
    let form = IncomingForm::defaults();
    assert_eq!(form.measurements.len(), 1);
    assert!(!form.inspection_types.is_empty());
    assert!(!form.visual_inspections.is_empty());
    assert!(!form.documentation_checks.is_empty());
    assert_eq!(form.quantity_received, None);
}

#[test]
fn incoming_requires_quantities_and_drops_blank_rows() {
    let mut session = IncomingSession::new(clock(), WorkflowConfig::default());
    fill_incoming(session.form_values_mut());
    session.form_values_mut().sample_size = None;
    session.form_values_mut().quantity_received = Some(0.0);

    session.submit();
    assert_eq!(session.form_errors().get("sample_size"), &[FieldError::Required]);
    assert!(session.form_errors().has("quantity_received"));

    let form = session.form_values_mut();
    form.sample_size = Some(20.0);
    form.quantity_received = Some(200.0);
    form.measurements[0].characteristic = "Diameter".to_string();
    form.measurements[0].specification = "25.00 ± 0.05".to_string();
    form.measurements[0].actual_value = "25.01".to_string();
    form.add_measurement();

    let id = session.submit().record_id().unwrap();
    let record = session.get(id).unwrap().record();
    assert_eq!(record.measurements.len(), 1);
    assert_eq!(record.measurements[0].id, 1);
    assert_eq!(record.sample_size, 20);
}

fn fill_final(form: &mut FinalInspectionForm) {
    form.work_order = "WO-2024-1300".to_string();
    form.part_number = "PN-7781".to_string();
    form.part_name = "Mounting Bracket".to_string();
    form.revision = "B".to_string();
    form.lot_number = "LOT-900".to_string();
    form.quantity = Some(12.0);
    form.inspector = "Ana Ruiz".to_string();
    form.inspection_date = Some(day(2024, 12, 1));
    form.status = Some(FinalStatus::PendingReview);
}

#[test]
fn final_inspection_checklists_start_passed() {
    let form = FinalInspectionForm::defaults();
    assert_eq!(form.visual_checks.len(), 7);
    assert_eq!(form.packaging_checks.len(), 7);
    assert!(form.visual_checks.iter().all(|item| item.passed));
    assert_eq!(form.dimensions.len(), 1);
}

#[test]
fn final_inspection_drops_blank_dimension_rows() {
    let mut session = FinalInspectionSession::new(clock(), WorkflowConfig::default());
    fill_final(session.form_values_mut());
    session.form_values_mut().quantity = Some(0.0);
    assert!(matches!(session.submit(), SubmitOutcome::Invalid(_)));
    assert!(session.form_errors().has("quantity"));

    let form = session.form_values_mut();
    form.quantity = Some(12.0);
    form.add_dimension();
    form.dimensions[1].feature = "Overall length".to_string();
    form.dimensions[1].nominal = "120.0".to_string();
    form.dimensions[1].actual = "120.1".to_string();

    let id = session.submit().record_id().unwrap();
    let record = session.get(id).unwrap().record();
    assert_eq!(record.dimensions.len(), 1);
    assert_eq!(record.dimensions[0].feature, "Overall length");
    assert_eq!(record.quantity, 12);
}
