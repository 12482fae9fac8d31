//! User account form and the system settings form.
//!
//! # Invariants
//! - New accounts start `pending` until toggled active.
//! - Login history and per-user permission overrides survive edits.
//! - Settings limits: password length 6..=20, session timeout 5..=480
//!   minutes, failed attempts 3..=10, lockout 5..=60 minutes, log
//!   retention 30..=365 days.

use crate::form::validation::FieldRule::{Email, Max, Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{whole, BuildContext, FormModel};
use crate::model::user::{SystemSettings, UserRecord, UserStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub position: String,
    pub status: Option<UserStatus>,
}

impl FormModel for UserForm {
    type Record = UserRecord;

    fn defaults() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            role: String::new(),
            department: String::new(),
            position: String::new(),
            status: Some(UserStatus::Pending),
        }
    }

    fn from_record(record: &UserRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            department: record.department.clone(),
            position: record.position.clone(),
            status: Some(record.status),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("full_name", &self.full_name, &[Required]);
        v.text("email", &self.email, &[Required, Email]);
        v.text("role", &self.role, &[Required]);
        v.text("department", &self.department, &[Required]);
        v.choice("status", self.status);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, UserRecord>) -> Result<UserRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(UserRecord {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
            position: self.position.trim().to_string(),
            status: require("status", self.status)?,
            last_login: prev.and_then(|p| p.last_login),
            last_login_location: prev.and_then(|p| p.last_login_location.clone()),
            permissions: prev.map(|p| p.permissions.clone()).unwrap_or_default(),
        })
    }
}

/// Editable copy of [`SystemSettings`] with numeric fields as raw input.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub password_min_length: f64,
    pub session_timeout_minutes: f64,
    pub require_password_complexity: bool,
    pub enable_two_factor: bool,
    pub enable_account_lockout: bool,
    pub max_failed_attempts: f64,
    pub lockout_duration_minutes: f64,
    pub enable_user_activity_logging: bool,
    pub enable_system_audit_trail: bool,
    pub log_retention_days: f64,
    pub backup_frequency: String,
    pub enable_email_notifications: bool,
    pub notify_user_creation: bool,
    pub notify_password_reset: bool,
    pub notify_role_changes: bool,
    pub notify_security_events: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::from_settings(&SystemSettings::default())
    }
}

impl SettingsForm {
    pub fn from_settings(settings: &SystemSettings) -> Self {
        Self {
            password_min_length: f64::from(settings.password_min_length),
            session_timeout_minutes: f64::from(settings.session_timeout_minutes),
            require_password_complexity: settings.require_password_complexity,
            enable_two_factor: settings.enable_two_factor,
            enable_account_lockout: settings.enable_account_lockout,
            max_failed_attempts: f64::from(settings.max_failed_attempts),
            lockout_duration_minutes: f64::from(settings.lockout_duration_minutes),
            enable_user_activity_logging: settings.enable_user_activity_logging,
            enable_system_audit_trail: settings.enable_system_audit_trail,
            log_retention_days: f64::from(settings.log_retention_days),
            backup_frequency: settings.backup_frequency.clone(),
            enable_email_notifications: settings.enable_email_notifications,
            notify_user_creation: settings.notify_user_creation,
            notify_password_reset: settings.notify_password_reset,
            notify_role_changes: settings.notify_role_changes,
            notify_security_events: settings.notify_security_events,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.number(
            "password_min_length",
            self.password_min_length,
            &[Min(6.0), Max(20.0)],
        );
        v.number(
            "session_timeout_minutes",
            self.session_timeout_minutes,
            &[Min(5.0), Max(480.0)],
        );
        v.number(
            "max_failed_attempts",
            self.max_failed_attempts,
            &[Min(3.0), Max(10.0)],
        );
        v.number(
            "lockout_duration_minutes",
            self.lockout_duration_minutes,
            &[Min(5.0), Max(60.0)],
        );
        v.number(
            "log_retention_days",
            self.log_retention_days,
            &[Min(30.0), Max(365.0)],
        );
        v.text("backup_frequency", &self.backup_frequency, &[Required]);
        v.finish()
    }

    /// Validated settings, or the failing fields.
    pub fn to_settings(&self) -> Result<SystemSettings, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SystemSettings {
            password_min_length: whole(self.password_min_length),
            session_timeout_minutes: whole(self.session_timeout_minutes),
            require_password_complexity: self.require_password_complexity,
            enable_two_factor: self.enable_two_factor,
            enable_account_lockout: self.enable_account_lockout,
            max_failed_attempts: whole(self.max_failed_attempts),
            lockout_duration_minutes: whole(self.lockout_duration_minutes),
            enable_user_activity_logging: self.enable_user_activity_logging,
            enable_system_audit_trail: self.enable_system_audit_trail,
            log_retention_days: whole(self.log_retention_days),
            backup_frequency: self.backup_frequency.trim().to_string(),
            enable_email_notifications: self.enable_email_notifications,
            notify_user_creation: self.notify_user_creation,
            notify_password_reset: self.notify_password_reset,
            notify_role_changes: self.notify_role_changes,
            notify_security_events: self.notify_security_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{SettingsForm, UserForm};
    use crate::form::FormModel;

    #[test]
    fn user_form_requires_valid_email() {
        let mut form = UserForm::defaults();
        form.full_name = "Jane Doe".to_string();
        form.email = "jane.doe".to_string();
        form.role = "Inspector".to_string();
        form.department = "Quality".to_string();

        let errors = form.validate();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn settings_form_enforces_ranges() {
        let mut form = SettingsForm::default();
        assert!(form.to_settings().is_ok());

        form.session_timeout_minutes = 600.0;
        form.password_min_length = 4.0;
        let errors = form.to_settings().unwrap_err();
        assert!(errors.has("session_timeout_minutes"));
        assert!(errors.has("password_min_length"));
        assert_eq!(errors.len(), 2);
    }
}
