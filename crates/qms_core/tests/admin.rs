use chrono::{NaiveDate, NaiveDateTime};
use qms_core::model::user::UserStatus;
use qms_core::service::admin::{time_ago, ActivityFilter, AdminConsole, RoleDeletion};
use qms_core::{Clock, FieldError, FixedClock, SubmitOutcome, WorkflowConfig};
use std::sync::Arc;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 28)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn console() -> AdminConsole {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::at(at(12, 0)));
    AdminConsole::seeded(clock, WorkflowConfig::default())
}

#[test]
fn seeded_statistics_combine_accounts_and_catalogs() {
    let stats = console().statistics();
    assert_eq!(stats.users.total, 5);
    assert_eq!(stats.users.active, 3);
    assert_eq!(stats.users.inactive, 1);
    assert_eq!(stats.users.pending, 1);
    assert_eq!(stats.users.admin, 1);
    assert_eq!(stats.total_roles, 5);
    assert_eq!(stats.total_permissions, 10);
}

#[test]
fn toggle_status_flips_between_active_and_inactive() {
    let mut console = console();
    let pending = console
        .users()
        .all()
        .iter()
        .find(|e| e.record().status == UserStatus::Pending)
        .map(|e| e.id())
        .unwrap();

    let users = console.users_mut();
    assert_eq!(users.toggle_status(pending), Some(UserStatus::Active));
    assert_eq!(users.toggle_status(pending), Some(UserStatus::Inactive));
    assert_eq!(users.toggle_status(pending), Some(UserStatus::Active));
    assert_eq!(users.toggle_status(qms_core::RecordId::new_v4()), None);
}

#[test]
fn new_accounts_start_pending_and_need_a_valid_email() {
    let mut console = console();
    let users = console.users_mut();
    let form = users.form_values_mut();
    form.full_name = "Priya Nair".to_string();
    form.email = "priya.nair".to_string();
    form.role = "Inspector".to_string();
    form.department = "Quality".to_string();

    assert!(matches!(users.submit(), SubmitOutcome::Invalid(_)));
    assert_eq!(users.form_errors().get("email"), &[FieldError::InvalidEmail]);

    users.form_values_mut().email = "priya.nair@company.com".to_string();
    let id = users.submit().record_id().unwrap();
    let record = users.get(id).unwrap().record();
    assert_eq!(record.status, UserStatus::Pending);
    assert_eq!(record.last_login, None);
    assert_eq!(users.all()[0].id(), id);
}

#[test]
fn permission_toggles_report_changes_only() {
    let mut console = console();
    assert!(!console.has_permission("Operator", "inspections"));

    assert!(console.toggle_permission("Operator", "inspections", true));
    assert!(console.has_permission("Operator", "inspections"));
    assert!(!console.toggle_permission("Operator", "inspections", true));

    assert!(console.toggle_permission("Operator", "inspections", false));
    assert!(!console.has_permission("Operator", "inspections"));

    assert!(!console.toggle_permission("Auditor", "inspections", true));
    assert!(!console.has_permission("Auditor", "inspections"));
}

#[test]
fn system_roles_cannot_be_deleted() {
    let mut console = console();
    assert_eq!(console.delete_role("1"), RoleDeletion::Refused);
    assert!(console.role("Administrator").is_some());

    assert_eq!(console.delete_role("5"), RoleDeletion::Deleted);
    assert!(console.role("Operator").is_none());
    assert_eq!(console.delete_role("5"), RoleDeletion::NotFound);
    assert_eq!(console.statistics().total_roles, 4);
}

#[test]
fn permission_categories_keep_catalog_order() {
    let console = console();
    assert_eq!(
        console.permission_categories(),
        vec!["Administration", "Quality", "Production"]
    );
}

#[test]
fn activity_filter_bounds_apply_independently() {
    let console = console();

    let since_nine = ActivityFilter {
        from: Some(at(9, 0)),
        ..ActivityFilter::default()
    };
    assert_eq!(console.filter_activity(&since_nine).len(), 2);

    let until_nine_45 = ActivityFilter {
        until: Some(at(9, 45)),
        ..ActivityFilter::default()
    };
    assert_eq!(console.filter_activity(&until_nine_45).len(), 2);

    let by_user = ActivityFilter {
        user: Some("sarah".to_string()),
        ..ActivityFilter::default()
    };
    let matched = console.filter_activity(&by_user);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].activity_type, "role_management");

    let by_type = ActivityFilter {
        activity_type: Some("security_events".to_string()),
        from: Some(at(9, 0)),
        ..ActivityFilter::default()
    };
    assert!(console.filter_activity(&by_type).is_empty());

    assert_eq!(
        console.filter_activity(&ActivityFilter::default()).len(),
        console.activity_logs().len()
    );
}

#[test]
fn activity_ages_are_relative_to_now() {
    let console = console();
    let ages: Vec<String> = console
        .activity_logs()
        .iter()
        .map(|log| time_ago(log.timestamp, at(12, 0)))
        .collect();
    assert_eq!(ages, vec!["1h ago", "2h ago", "3h ago"]);
}

#[test]
fn invalid_settings_leave_active_settings_untouched() {
    let mut console = console();
    let before = console.settings().clone();

    console.settings_form_mut().log_retention_days = 10.0;
    let errors = console.save_settings().unwrap_err();
    assert!(errors.has("log_retention_days"));
    assert_eq!(console.settings(), &before);

    console.settings_form_mut().log_retention_days = 90.0;
    console.settings_form_mut().enable_two_factor = true;
    console.save_settings().unwrap();
    assert_eq!(console.settings().log_retention_days, 90);
    assert!(console.settings().enable_two_factor);

    console.reset_settings();
    assert_eq!(console.settings(), &before);
    assert!(!console.settings_form().enable_two_factor);
}
