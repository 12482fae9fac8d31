use chrono::NaiveDate;
use qms_core::model::common::Severity;
use qms_core::model::document::DocumentType;
use qms_core::model::ncr::NcrStatus;
use qms_core::model::procedure::Difficulty;
use qms_core::model::user::UserStatus;
use qms_core::service::admin::{UserFilter, UserSession};
use qms_core::service::capa::{CapaFilter, CapaSession};
use qms_core::service::document::{DocumentFilter, DocumentSession};
use qms_core::service::incoming::{IncomingFilter, IncomingSession};
use qms_core::service::ncr::{NcrFilter, NcrSession};
use qms_core::service::procedure::{ProcedureFilter, ProcedureSession};
use qms_core::service::training::{TrainingFilter, TrainingSession};
use qms_core::{Clock, FixedClock, RecordFilter, WorkflowConfig};
use std::sync::Arc;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()))
}

#[test]
fn empty_criteria_display_everything_in_natural_order() {
    let mut session = CapaSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(CapaFilter::default());

    let displayed: Vec<_> = session.displayed().iter().map(|e| e.id()).collect();
    let all: Vec<_> = session.all().iter().map(|e| e.id()).collect();
    assert_eq!(displayed, all);
    assert!(session.filter().is_empty());
}

#[test]
fn blank_search_term_counts_as_empty() {
    let filter = CapaFilter {
        search: "   ".to_string(),
        ..CapaFilter::default()
    };
    assert!(filter.is_empty());
}

#[test]
fn ncr_search_is_case_insensitive_across_fields() {
    let mut session = NcrSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(NcrFilter {
        search: "CALIBRATION CERTIFICATE".to_string(),
        ..NcrFilter::default()
    });

    let numbers: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().ncr_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["NCR-2024-003"]);
}

#[test]
fn ncr_selectors_combine_conjunctively() {
    let mut session = NcrSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(NcrFilter {
        severity: Some(Severity::Major),
        department: Some("production".to_string()),
        ..NcrFilter::default()
    });

    let numbers: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().ncr_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["NCR-2024-001"]);
}

#[test]
fn displayed_list_follows_store_mutations() {
    let mut session = NcrSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(NcrFilter {
        status: Some(NcrStatus::Open),
        ..NcrFilter::default()
    });
    let open = session.displayed()[0].id();
    assert_eq!(session.displayed().len(), 1);

    assert!(session.close(open));
    assert!(session.displayed().is_empty());

    session.clear_filters();
    assert_eq!(session.displayed().len(), session.len());
}

#[test]
fn document_filter_matches_kind_and_number() {
    let mut session = DocumentSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(DocumentFilter {
        search: "qp-".to_string(),
        kind: Some(DocumentType::Policy),
        ..DocumentFilter::default()
    });

    let numbers: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().document_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["QP-001"]);
}

#[test]
fn procedure_search_includes_tags() {
    let mut session = ProcedureSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(ProcedureFilter {
        search: "metrology".to_string(),
        ..ProcedureFilter::default()
    });
    let numbers: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().procedure_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["WI-CAL-005"]);

    session.apply_filters(ProcedureFilter {
        difficulty: Some(Difficulty::Advanced),
        ..ProcedureFilter::default()
    });
    assert_eq!(session.displayed().len(), 2);
}

#[test]
fn incoming_supplier_selector_matches_exact_name() {
    let mut session = IncomingSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(IncomingFilter {
        supplier: Some("Global Steel Supply".to_string()),
        ..IncomingFilter::default()
    });
    let orders: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().purchase_order.as_str())
        .collect();
    assert_eq!(orders, vec!["PO-2024-1003"]);
}

#[test]
fn training_employee_filter_uses_exact_id() {
    let mut session = TrainingSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(TrainingFilter {
        employee_id: Some("EMP-001".to_string()),
        ..TrainingFilter::default()
    });
    assert_eq!(session.displayed().len(), 2);
    assert_eq!(session.records_for_employee("EMP-001").len(), 2);
    assert!(session.records_for_employee("EMP-404").is_empty());
}

#[test]
fn user_search_covers_role_and_status_selector() {
    let mut session = UserSession::seeded(clock(), WorkflowConfig::default());
    session.apply_filters(UserFilter {
        search: "inspector".to_string(),
        ..UserFilter::default()
    });
    let names: Vec<&str> = session
        .displayed()
        .iter()
        .map(|e| e.record().full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Mike Davis"]);

    session.apply_filters(UserFilter {
        status: Some(UserStatus::Pending),
        ..UserFilter::default()
    });
    assert_eq!(session.displayed().len(), 1);
    assert_eq!(session.displayed()[0].record().full_name, "David Wilson");
}
