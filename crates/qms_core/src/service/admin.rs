//! User and permission administration.
//!
//! # Responsibility
//! - Manage user accounts through a regular [`FeatureSession`].
//! - Own the role/permission matrix, the activity log and system settings.
//!
//! # Invariants
//! - Roles are matched by name; users reference roles without integrity checks.
//! - System roles are never deleted.
//! - Saved settings always satisfy the settings form limits.

use crate::clock::Clock;
use crate::config::WorkflowConfig;
use crate::form::user::{SettingsForm, UserForm};
use crate::form::FieldErrors;
use crate::model::common::RecordId;
use crate::model::user::{ActivityLog, Permission, Role, SystemSettings, UserRecord, UserStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{label_matches, selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, StatsContext};
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct Users;

pub type UserSession = FeatureSession<Users>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Matches full name, email and role.
    pub search: String,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

impl RecordFilter<UserRecord> for UserFilter {
    fn matches(&self, record: &UserRecord) -> bool {
        text_matches(
            &self.search,
            &[&record.full_name, &record.email, &record.role],
        ) && label_matches(&self.role, &record.role)
            && selector_matches(self.status, record.status)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.role.as_deref().map_or(true, |r| r.trim().is_empty())
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub admin: usize,
    pub pending: usize,
}

impl Feature for Users {
    type Record = UserRecord;
    type Form = UserForm;
    type Filter = UserFilter;
    type Stats = UserStats;

    const AREA: FeatureArea = FeatureArea::UserSettings;

    fn statistics(entries: &[Entry<UserRecord>], _ctx: &StatsContext) -> UserStats {
        UserStats {
            total: entries.len(),
            active: count_where(entries, |r| r.status == UserStatus::Active),
            inactive: count_where(entries, |r| r.status == UserStatus::Inactive),
            admin: count_where(entries, UserRecord::is_admin),
            pending: count_where(entries, |r| r.status == UserStatus::Pending),
        }
    }

    fn seed() -> Vec<Entry<UserRecord>> {
        seed::admin::user_entries()
    }
}

impl FeatureSession<Users> {
    /// Flips the account between active and inactive; returns the new status.
    pub fn toggle_status(&mut self, id: RecordId) -> Option<UserStatus> {
        let mut next = None;
        self.act(id, "toggle_status", |record| {
            record.status = record.status.toggled();
            next = Some(record.status);
        });
        next
    }
}

/// Result of a role deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleDeletion {
    Deleted,
    /// System roles are protected.
    Refused,
    NotFound,
}

/// Activity-log criteria; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFilter {
    /// Case-insensitive substring of the acting user's name.
    pub user: Option<String>,
    pub activity_type: Option<String>,
    /// Inclusive lower bound.
    pub from: Option<NaiveDateTime>,
    /// Inclusive upper bound.
    pub until: Option<NaiveDateTime>,
}

impl ActivityFilter {
    pub fn matches(&self, log: &ActivityLog) -> bool {
        let user = self.user.as_deref().unwrap_or_default();
        text_matches(user, &[&log.user_name])
            && label_matches(&self.activity_type, &log.activity_type)
            && self.from.map_or(true, |from| log.timestamp >= from)
            && self.until.map_or(true, |until| log.timestamp <= until)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub users: UserStats,
    pub total_roles: usize,
    pub total_permissions: usize,
}

/// Coarse age of `then` relative to `now`: `"5m ago"`, `"3h ago"`, `"2d ago"`.
///
/// Timestamps in the future read as `"0m ago"`.
pub fn time_ago(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - then).num_minutes().max(0);
    let hours = minutes / 60;
    let days = hours / 24;
    if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{days}d ago")
    }
}

/// Administration area state: accounts, roles, audit trail and settings.
pub struct AdminConsole {
    users: UserSession,
    roles: Vec<Role>,
    permissions: Vec<Permission>,
    activity: Vec<ActivityLog>,
    settings: SystemSettings,
    settings_form: SettingsForm,
}

impl AdminConsole {
    /// Console with no accounts, roles or log entries and default settings.
    pub fn new(clock: Arc<dyn Clock>, workflow: WorkflowConfig) -> Self {
        Self::from_parts(
            UserSession::new(clock, workflow),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    /// Console holding the demonstration accounts, roles and log entries.
    pub fn seeded(clock: Arc<dyn Clock>, workflow: WorkflowConfig) -> Self {
        Self::from_parts(
            UserSession::seeded(clock, workflow),
            seed::admin::roles(),
            seed::admin::permissions(),
            seed::admin::activity_logs(),
        )
    }

    fn from_parts(
        users: UserSession,
        roles: Vec<Role>,
        permissions: Vec<Permission>,
        activity: Vec<ActivityLog>,
    ) -> Self {
        let settings = SystemSettings::default();
        let settings_form = SettingsForm::from_settings(&settings);
        Self {
            users,
            roles,
            permissions,
            activity,
            settings,
            settings_form,
        }
    }

    pub fn users(&self) -> &UserSession {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserSession {
        &mut self.users
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name == name)
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// Permission categories in catalog order, without repeats.
    pub fn permission_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for permission in &self.permissions {
            if !categories.contains(&permission.category.as_str()) {
                categories.push(&permission.category);
            }
        }
        categories
    }

    /// Whether role `role_name` grants `key`; unknown roles grant nothing.
    pub fn has_permission(&self, role_name: &str, key: &str) -> bool {
        self.role(role_name)
            .is_some_and(|role| role.has_permission(key))
    }

    /// Grants or revokes `key` on role `role_name`; returns whether it changed.
    pub fn toggle_permission(&mut self, role_name: &str, key: &str, granted: bool) -> bool {
        let Some(role) = self.roles.iter_mut().find(|role| role.name == role_name) else {
            warn!(
                "event=permission_toggle module=service area=user status=missing_role"
            );
            return false;
        };
        let changed = role.set_permission(key, granted);
        info!(
            "event=permission_toggle module=service area=user role_id={} granted={} changed={}",
            role.role_id, granted, changed
        );
        changed
    }

    /// Removes the role `role_id` unless it is a system role.
    pub fn delete_role(&mut self, role_id: &str) -> RoleDeletion {
        let Some(index) = self.roles.iter().position(|role| role.role_id == role_id) else {
            return RoleDeletion::NotFound;
        };
        if self.roles[index].is_system_role {
            warn!(
                "event=role_delete module=service area=user role_id={} status=refused",
                role_id
            );
            return RoleDeletion::Refused;
        }
        self.roles.remove(index);
        info!(
            "event=role_delete module=service area=user role_id={} status=ok",
            role_id
        );
        RoleDeletion::Deleted
    }

    /// Audit entries, most recent first.
    pub fn activity_logs(&self) -> &[ActivityLog] {
        &self.activity
    }

    pub fn filter_activity(&self, filter: &ActivityFilter) -> Vec<&ActivityLog> {
        self.activity
            .iter()
            .filter(|log| filter.matches(log))
            .collect()
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    pub fn settings_form(&self) -> &SettingsForm {
        &self.settings_form
    }

    pub fn settings_form_mut(&mut self) -> &mut SettingsForm {
        &mut self.settings_form
    }

    /// Validates the settings form and makes it the active settings.
    ///
    /// On failure the active settings are left unchanged.
    pub fn save_settings(&mut self) -> Result<(), FieldErrors> {
        match self.settings_form.to_settings() {
            Ok(settings) => {
                self.settings = settings;
                info!("event=settings_saved module=service area=user status=ok");
                Ok(())
            }
            Err(errors) => {
                warn!(
                    "event=settings_saved module=service area=user status=invalid fields={}",
                    errors.len()
                );
                Err(errors)
            }
        }
    }

    /// Restores default settings and reloads the form from them.
    pub fn reset_settings(&mut self) {
        self.settings = SystemSettings::default();
        self.settings_form = SettingsForm::from_settings(&self.settings);
    }

    pub fn statistics(&self) -> AdminStats {
        AdminStats {
            users: self.users.statistics(),
            total_roles: self.roles.len(),
            total_permissions: self.permissions.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::time_ago;
    use chrono::NaiveDate;

    #[test]
    fn time_ago_picks_coarsest_unit() {
        let now = NaiveDate::from_ymd_opt(2024, 11, 28)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        let at = |h: u32, m: u32| {
            NaiveDate::from_ymd_opt(2024, 11, 28)
                .and_then(|d| d.and_hms_opt(h, m, 0))
                .expect("valid timestamp")
        };
        assert_eq!(time_ago(at(11, 35), now), "25m ago");
        assert_eq!(time_ago(at(9, 0), now), "3h ago");
        let earlier = NaiveDate::from_ymd_opt(2024, 11, 25)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        assert_eq!(time_ago(earlier, now), "3d ago");
        assert_eq!(time_ago(now, at(11, 0)), "0m ago");
    }
}
