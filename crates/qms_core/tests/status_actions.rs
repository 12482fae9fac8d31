use chrono::NaiveDate;
use qms_core::model::fai::{FaiDisposition, FaiStatus};
use qms_core::model::final_inspection::FinalStatus;
use qms_core::model::incoming::DEFAULT_STOCK_LOCATION;
use qms_core::model::ipi::{IpiDisposition, IpiStatus};
use qms_core::model::mrb::{CommentType, MrbStatus};
use qms_core::model::ncr::NcrStatus;
use qms_core::service::document::DocumentSession;
use qms_core::service::fai::FaiSession;
use qms_core::service::final_inspection::FinalInspectionSession;
use qms_core::service::incoming::IncomingSession;
use qms_core::service::ipi::IpiSession;
use qms_core::service::mrb::MrbSession;
use qms_core::service::ncr::NcrSession;
use qms_core::service::procedure::ProcedureSession;
use qms_core::{Clock, FixedClock, RecordId, WorkflowConfig};
use std::sync::Arc;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
}

fn clock() -> Arc<dyn Clock> {
    let now = today().and_hms_opt(14, 30, 0).unwrap();
    Arc::new(FixedClock::at(now))
}

fn workflow() -> WorkflowConfig {
    WorkflowConfig {
        acting_user: "Quality Lead".to_string(),
        ..WorkflowConfig::default()
    }
}

#[test]
fn mrb_approve_stamps_acting_user() {
    let mut session = MrbSession::seeded(clock(), workflow());
    let id = session.all()[0].id();

    assert!(session.approve(id));
    let record = session.get(id).unwrap().record();
    assert_eq!(record.status, MrbStatus::Approved);
    assert_eq!(record.approved_by.as_deref(), Some("Quality Lead"));
    assert_eq!(record.approved_date, Some(today()));
}

#[test]
fn mrb_reject_records_reviewer() {
    let mut session = MrbSession::seeded(clock(), workflow());
    let id = session.all()[1].id();

    assert!(session.reject(id));
    let record = session.get(id).unwrap().record();
    assert_eq!(record.status, MrbStatus::Rejected);
    assert_eq!(record.reviewed_by.as_deref(), Some("Quality Lead"));
    assert_eq!(record.reviewed_date, Some(today()));
}

#[test]
fn mrb_comments_get_sequential_ids_and_blank_text_is_ignored() {
    let mut session = MrbSession::seeded(clock(), workflow());
    let id = session.all()[0].id();
    let before = session.get(id).unwrap().record().comments.len();

    assert_eq!(session.add_comment(id, "   ", CommentType::General), None);
    let comment = session.add_comment(id, "  Rework acceptable  ", CommentType::Board);
    assert_eq!(comment, Some(2));

    let record = session.get(id).unwrap().record();
    assert_eq!(record.comments.len(), before + 1);
    let last = record.comments.last().unwrap();
    assert_eq!(last.text, "Rework acceptable");
    assert_eq!(last.author, "Quality Lead");
    assert_eq!(last.kind, CommentType::Board);
}

#[test]
fn fai_approve_and_reject_set_disposition() {
    let mut session = FaiSession::seeded(clock(), workflow());
    let first = session.all()[0].id();
    let second = session.all()[1].id();

    assert!(session.approve(first));
    let approved = session.get(first).unwrap().record();
    assert_eq!(approved.status, FaiStatus::Approved);
    assert_eq!(approved.disposition, FaiDisposition::Accept);
    assert_eq!(approved.approved_by.as_deref(), Some("Quality Lead"));

    assert!(session.reject(second));
    let rejected = session.get(second).unwrap().record();
    assert_eq!(rejected.status, FaiStatus::Rejected);
    assert_eq!(rejected.disposition, FaiDisposition::Reject);
}

#[test]
fn ipi_actions_pair_status_with_disposition() {
    let mut session = IpiSession::seeded(clock(), workflow());
    let id = session.all()[0].id();

    assert!(session.hold(id));
    let held = session.get(id).unwrap().record();
    assert_eq!(held.status, IpiStatus::Hold);
    assert_eq!(held.disposition, IpiDisposition::Hold);

    assert!(session.approve(id));
    let approved = session.get(id).unwrap().record();
    assert_eq!(approved.status, IpiStatus::Approved);
    assert_eq!(approved.reviewed_by.as_deref(), Some("Quality Lead"));
    assert_eq!(approved.reviewed_date, Some(today()));

    assert!(session.reject(id));
    assert_eq!(session.get(id).unwrap().record().status, IpiStatus::Rejected);
}

#[test]
fn ncr_close_stamps_actual_close_date() {
    let mut session = NcrSession::seeded(clock(), workflow());
    let id = session.all()[0].id();

    assert!(session.close(id));
    let record = session.get(id).unwrap().record();
    assert_eq!(record.status, NcrStatus::Closed);
    assert_eq!(record.actual_close_date, Some(today()));
    assert_eq!(session.statistics().active, 2);
}

#[test]
fn final_inspection_ship_marks_lot_shipped() {
    let mut session = FinalInspectionSession::seeded(clock(), workflow());
    let id = session.all()[0].id();

    assert!(session.ship(id));
    assert_eq!(session.get(id).unwrap().record().status, FinalStatus::Shipped);
    assert_eq!(session.statistics().shipped, 2);
}

#[test]
fn move_to_stock_uses_given_or_default_location() {
    let mut session = IncomingSession::seeded(clock(), workflow());
    let first = session.all()[0].id();
    let second = session.all()[1].id();

    assert!(session.move_to_stock(first, Some(" RACK-7 ")));
    assert_eq!(
        session.get(first).unwrap().record().storage_location.as_deref(),
        Some("RACK-7")
    );

    assert!(session.move_to_stock(second, Some("  ")));
    assert_eq!(
        session.get(second).unwrap().record().storage_location.as_deref(),
        Some(DEFAULT_STOCK_LOCATION)
    );
}

#[test]
fn document_download_counts_but_view_does_not() {
    let mut session = DocumentSession::seeded(clock(), workflow());
    let id = session.all()[0].id();
    let before = session.get(id).unwrap().record().download_count;

    assert!(session.record_view(id));
    assert_eq!(session.get(id).unwrap().record().download_count, before);

    assert_eq!(session.record_download(id), Some(before + 1));
    assert_eq!(session.get(id).unwrap().record().download_count, before + 1);
}

#[test]
fn procedure_view_and_download_both_count() {
    let mut session = ProcedureSession::seeded(clock(), workflow());
    let id = session.all()[0].id();
    let before = session.get(id).unwrap().record().download_count;

    assert_eq!(session.record_view(id), Some(before + 1));
    assert_eq!(session.record_download(id), Some(before + 2));
}

#[test]
fn actions_on_unknown_ids_change_nothing() {
    let missing = RecordId::new_v4();

    let mut mrb = MrbSession::seeded(clock(), workflow());
    let before = mrb.all().to_vec();
    assert!(!mrb.approve(missing));
    assert!(!mrb.reject(missing));
    assert_eq!(mrb.add_comment(missing, "note", CommentType::General), None);
    assert_eq!(mrb.all(), before.as_slice());

    let mut ncr = NcrSession::seeded(clock(), workflow());
    assert!(!ncr.close(missing));

    let mut fai = FaiSession::seeded(clock(), workflow());
    assert!(!fai.approve(missing));

    let mut incoming = IncomingSession::seeded(clock(), workflow());
    assert!(!incoming.move_to_stock(missing, None));

    let mut documents = DocumentSession::seeded(clock(), workflow());
    assert!(!documents.record_view(missing));
    assert_eq!(documents.record_download(missing), None);

    let mut procedures = ProcedureSession::seeded(clock(), workflow());
    assert_eq!(procedures.record_download(missing), None);
}
