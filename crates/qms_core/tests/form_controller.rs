use chrono::NaiveDate;
use qms_core::form::capa::CapaForm;
use qms_core::model::capa::{CapaSource, CapaStatus};
use qms_core::model::common::Priority;
use qms_core::service::capa::CapaSession;
use qms_core::{Clock, FieldError, FixedClock, FormMode, FormModel, SubmitOutcome, WorkflowConfig};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session(strict: bool) -> CapaSession {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::on(day(2024, 12, 1)));
    let workflow = WorkflowConfig {
        strict_transitions: strict,
        ..WorkflowConfig::default()
    };
    CapaSession::new(clock, workflow)
}

fn fill(form: &mut CapaForm, number: &str) {
    form.capa_number = number.to_string();
    form.title = "Burr on machined flange".to_string();
    form.description = "Burrs found on 12 flanges after deburring step".to_string();
    form.root_cause = "Worn deburring tool".to_string();
    form.corrective_action = "Replace tool and re-inspect lot".to_string();
    form.assigned_to = "Dana Lee".to_string();
    form.due_date = Some(day(2024, 12, 20));
    form.source = Some(CapaSource::ProcessMonitoring);
    form.department = "Production".to_string();
}

#[test]
fn defaults_follow_area_conventions() {
    let form = CapaForm::defaults();
    assert_eq!(form.priority, Some(Priority::Medium));
    assert_eq!(form.status, Some(CapaStatus::Open));
    assert!(form.capa_number.is_empty());
}

#[test]
fn valid_create_adds_record_first_and_resets_form() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    let first = session.submit();
    assert!(matches!(first, SubmitOutcome::Created(_)));

    fill(session.form_values_mut(), "CAPA-2024-102");
    let second = session.submit().record_id().unwrap();

    assert_eq!(session.len(), 2);
    assert_eq!(session.all()[0].id(), second);
    assert_eq!(session.all()[0].record().capa_number, "CAPA-2024-102");
    assert_eq!(session.all()[0].created_on(), day(2024, 12, 1));
    assert_eq!(session.form().mode(), FormMode::Create);
    assert!(session.form().values().capa_number.is_empty());
}

#[test]
fn invalid_submit_mutates_nothing_and_reports_fields() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    session.form_values_mut().title = "Short".to_string();
    session.form_values_mut().assigned_to = "  ".to_string();

    let outcome = session.submit();
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(session.is_empty());
    assert!(session.form_errors().has("title"));
    assert!(session.form_errors().has("assigned_to"));
    assert!(!session.form_errors().has("capa_number"));
    assert_eq!(
        session.form_errors().get("title"),
        &[FieldError::TooShort {
            min: 10,
            actual: 5
        }]
    );
    assert!(!session.is_form_valid());
}

#[test]
fn padded_short_title_is_rejected() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    session.form_values_mut().title = "Leak      ".to_string();

    assert!(matches!(session.submit(), SubmitOutcome::Invalid(_)));
    assert!(session.is_empty());
    assert_eq!(
        session.form_errors().get("title"),
        &[FieldError::TooShort {
            min: 10,
            actual: 4
        }]
    );
}

#[test]
fn edit_submit_updates_in_place() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    let id = session.submit().record_id().unwrap();
    fill(session.form_values_mut(), "CAPA-2024-102");
    session.submit();

    assert!(session.begin_edit(id));
    assert!(session.form().is_edit_mode());
    assert_eq!(session.form().values().capa_number, "CAPA-2024-101");

    session.form_values_mut().status = Some(CapaStatus::Closed);
    session.form_values_mut().assigned_to = "Sam Ortiz".to_string();
    assert_eq!(session.submit(), SubmitOutcome::Updated(id));

    assert_eq!(session.len(), 2);
    let entry = session.get(id).unwrap();
    assert_eq!(entry.created_on(), day(2024, 12, 1));
    assert_eq!(entry.record().assigned_to, "Sam Ortiz");
    assert_eq!(entry.record().status, CapaStatus::Closed);
    assert_eq!(entry.record().closed_on, Some(day(2024, 12, 1)));
    assert_eq!(session.all()[1].id(), id);
}

#[test]
fn begin_edit_unknown_id_is_refused() {
    let mut session = session(false);
    assert!(!session.begin_edit(qms_core::RecordId::new_v4()));
    assert_eq!(session.form().mode(), FormMode::Create);
}

#[test]
fn edit_of_deleted_record_falls_back_to_create_mode() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    let id = session.submit().record_id().unwrap();

    session.begin_edit(id);
    assert!(session.delete(id));
    assert_eq!(session.form().mode(), FormMode::Create);
    assert!(session.is_empty());
}

#[test]
fn permissive_policy_allows_any_status_change() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    session.form_values_mut().status = Some(CapaStatus::Closed);
    let id = session.submit().record_id().unwrap();

    session.begin_edit(id);
    session.form_values_mut().status = Some(CapaStatus::Open);
    assert_eq!(session.submit(), SubmitOutcome::Updated(id));
    let record = session.get(id).unwrap().record();
    assert_eq!(record.status, CapaStatus::Open);
    assert_eq!(record.closed_on, None);
}

#[test]
fn strict_policy_denies_unlisted_transition() {
    let mut session = session(true);
    fill(session.form_values_mut(), "CAPA-2024-101");
    session.form_values_mut().status = Some(CapaStatus::Closed);
    let id = session.submit().record_id().unwrap();

    session.begin_edit(id);
    session.form_values_mut().status = Some(CapaStatus::Open);
    let outcome = session.submit();

    assert_eq!(
        outcome,
        SubmitOutcome::TransitionDenied {
            from: "Closed",
            to: "Open"
        }
    );
    assert_eq!(session.get(id).unwrap().record().status, CapaStatus::Closed);
    assert!(session.form().is_edit_mode());
    assert!(session.form_errors().has("status"));
}

#[test]
fn strict_policy_allows_listed_transition() {
    let mut session = session(true);
    fill(session.form_values_mut(), "CAPA-2024-101");
    let id = session.submit().record_id().unwrap();

    session.begin_edit(id);
    session.form_values_mut().status = Some(CapaStatus::InProgress);
    assert_eq!(session.submit(), SubmitOutcome::Updated(id));
}

#[test]
fn reset_restores_defaults() {
    let mut session = session(false);
    fill(session.form_values_mut(), "CAPA-2024-101");
    session.reset_form();
    assert_eq!(session.form().values(), &CapaForm::defaults());
}
