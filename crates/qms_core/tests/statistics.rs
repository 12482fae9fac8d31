use chrono::NaiveDate;
use qms_core::model::capa::{CapaSource, CapaStatus};
use qms_core::model::common::Priority;
use qms_core::model::document::DocumentStatus;
use qms_core::model::ipi::IpiStatus;
use qms_core::service::capa::{CapaFilter, CapaSession};
use qms_core::service::document::DocumentSession;
use qms_core::service::final_inspection::FinalInspectionSession;
use qms_core::service::incoming::IncomingSession;
use qms_core::service::ipi::IpiSession;
use qms_core::service::mrb::MrbSession;
use qms_core::service::ncr::NcrSession;
use qms_core::service::training::TrainingSession;
use qms_core::{Clock, FixedClock, RecordId, WorkflowConfig};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock_on(date: NaiveDate) -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(date))
}

fn submit_capa(session: &mut CapaSession, number: &str, status: CapaStatus, due: NaiveDate) -> RecordId {
    let form = session.form_values_mut();
    form.capa_number = number.to_string();
    form.title = "Seal leak on hydraulic fitting".to_string();
    form.description = "Fittings leaking at pressure test".to_string();
    form.root_cause = "Damaged O-ring".to_string();
    form.corrective_action = "Replace O-ring stock".to_string();
    form.assigned_to = "Dana Lee".to_string();
    form.due_date = Some(due);
    form.priority = Some(Priority::Medium);
    form.status = Some(status);
    form.source = Some(CapaSource::InternalAudit);
    form.department = "Quality".to_string();
    session.submit().record_id().unwrap()
}

#[test]
fn overdue_excludes_terminal_records_while_filtering_leaves_stats_alone() {
    let mut session = CapaSession::new(clock_on(day(2024, 12, 1)), WorkflowConfig::default());
    assert!(session.is_empty());

    let past = day(2024, 11, 1);
    let a = submit_capa(&mut session, "CAPA-A", CapaStatus::Open, past);
    let b = submit_capa(&mut session, "CAPA-B", CapaStatus::Closed, past);
    assert_eq!(session.len(), 2);
    assert_eq!(session.all()[0].id(), b);

    let stats = session.statistics();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.open, 1);
    assert_eq!(stats.closed, 1);

    session.apply_filters(CapaFilter {
        status: Some(CapaStatus::Open),
        ..CapaFilter::default()
    });
    let shown: Vec<RecordId> = session.displayed().iter().map(|e| e.id()).collect();
    assert_eq!(shown, vec![a]);
    assert_eq!(session.statistics(), stats);
}

#[test]
fn due_today_turns_overdue_once_the_day_starts() {
    let today = day(2024, 12, 1);
    let at = |h, m| -> Arc<dyn Clock> {
        Arc::new(FixedClock::at(today.and_hms_opt(h, m, 0).unwrap()))
    };

    let mut midnight = CapaSession::new(at(0, 0), WorkflowConfig::default());
    submit_capa(&mut midnight, "CAPA-T", CapaStatus::InProgress, today);
    assert_eq!(midnight.statistics().overdue, 0);

    let mut afternoon = CapaSession::new(at(15, 0), WorkflowConfig::default());
    submit_capa(&mut afternoon, "CAPA-T", CapaStatus::InProgress, today);
    assert_eq!(afternoon.statistics().overdue, 1);

    let mut tomorrow = CapaSession::new(at(15, 0), WorkflowConfig::default());
    submit_capa(&mut tomorrow, "CAPA-U", CapaStatus::Open, day(2024, 12, 2));
    assert_eq!(tomorrow.statistics().overdue, 0);
}

#[test]
fn empty_store_yields_zero_rates() {
    let clock = clock_on(day(2024, 12, 1));
    let incoming = IncomingSession::new(Arc::clone(&clock), WorkflowConfig::default());
    let stats = incoming.statistics();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.acceptance_rate, 0);

    let ipi = IpiSession::new(Arc::clone(&clock), WorkflowConfig::default());
    assert_eq!(ipi.statistics().first_pass_yield, 0);

    let training = TrainingSession::new(clock, WorkflowConfig::default());
    assert_eq!(training.statistics().average_score, 0);
}

#[test]
fn seeded_ncr_statistics() {
    let session = NcrSession::seeded(clock_on(day(2024, 12, 1)), WorkflowConfig::default());
    let stats = session.statistics();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.total_cost, 7950.0);
    assert_eq!(stats.by_status.total(), 4);
    // NCR-2024-002 was due on 2024-11-30.
    assert_eq!(stats.overdue, 1);
}

#[test]
fn seeded_mrb_statistics() {
    let session = MrbSession::seeded(clock_on(day(2024, 12, 1)), WorkflowConfig::default());
    let stats = session.statistics();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.under_review, 1);
    assert_eq!(stats.board_review, 1);
    assert_eq!(stats.approved, 0);
}

#[test]
fn seeded_inspection_rates() {
    let clock = clock_on(day(2024, 12, 1));

    let ipi = IpiSession::seeded(Arc::clone(&clock), WorkflowConfig::default()).statistics();
    assert_eq!(ipi.total, 2);
    assert_eq!(ipi.first_pass_yield, 95);
    assert_eq!(ipi.total_defects, 2);
    assert_eq!(ipi.approved(), 1);
    assert_eq!(ipi.in_progress(), 1);
    assert_eq!(ipi.by_status.get(IpiStatus::Hold), 0);

    let incoming =
        IncomingSession::seeded(Arc::clone(&clock), WorkflowConfig::default()).statistics();
    assert_eq!(incoming.total, 3);
    assert_eq!(incoming.accepted, 1);
    assert_eq!(incoming.rejected, 1);
    assert_eq!(incoming.quarantine, 1);
    assert_eq!(incoming.acceptance_rate, 33);

    let final_inspection =
        FinalInspectionSession::seeded(clock, WorkflowConfig::default()).statistics();
    assert_eq!(final_inspection.total, 3);
    assert_eq!(final_inspection.shipped, 1);
    assert_eq!(final_inspection.rework, 1);
    assert_eq!(final_inspection.pass_rate, 33);
}

#[test]
fn seeded_training_statistics() {
    let session = TrainingSession::seeded(clock_on(day(2024, 12, 1)), WorkflowConfig::default());
    let stats = session.statistics();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.average_score, 92);
    assert_eq!(stats.total_cost, 2450.0);
    // TRN-004 lapsed in June and still counts as expiring.
    assert_eq!(stats.expiring, 1);
    assert_eq!(stats.completed_this_month, 0);
}

#[test]
fn document_review_window_tracks_the_clock() {
    let early = DocumentSession::seeded(clock_on(day(2024, 12, 1)), WorkflowConfig::default());
    assert_eq!(early.statistics().review_due_soon, 0);
    assert_eq!(early.statistics().by_status.get(DocumentStatus::Approved), 3);

    let later = DocumentSession::seeded(clock_on(day(2025, 1, 15)), WorkflowConfig::default());
    assert_eq!(later.statistics().review_due_soon, 1);

    let wide = WorkflowConfig {
        review_window_days: 365,
        ..WorkflowConfig::default()
    };
    let wide = DocumentSession::seeded(clock_on(day(2024, 12, 1)), wide);
    assert_eq!(wide.statistics().review_due_soon, 4);
}
