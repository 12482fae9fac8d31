//! User, role, permission and activity-log models.
//!
//! # Responsibility
//! - Define account records managed by the administration area.
//! - Define the role/permission matrix and the activity audit entries.
//!
//! # Invariants
//! - A role lists each permission key at most once.
//! - System roles cannot be deleted.
//! - No user status is terminal.

use crate::model::common::vocabulary;
use crate::repo::record_store::Record;
use crate::workflow::WorkflowStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Account state.
    pub enum UserStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
        Suspended => "suspended",
    }
}

impl WorkflowStatus for UserStatus {
    fn is_terminal(self) -> bool {
        false
    }

    fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Active, Self::Inactive],
            Self::Active => &[Self::Inactive, Self::Suspended],
            Self::Inactive => &[Self::Active],
            Self::Suspended => &[Self::Active, Self::Inactive],
        }
    }
}

impl UserStatus {
    /// Active accounts become inactive; every other state becomes active.
    pub fn toggled(self) -> Self {
        if self == Self::Active {
            Self::Inactive
        } else {
            Self::Active
        }
    }
}

vocabulary! {
    /// Outcome of an audited activity.
    pub enum ActivityStatus {
        Success => "Success",
        Failed => "Failed",
        Warning => "Warning",
    }
}

/// Role name that counts a user as an administrator.
pub const ADMIN_ROLE: &str = "Administrator";

/// Activity types recorded in the audit log.
pub const ACTIVITY_TYPES: [&str; 6] = [
    "login",
    "user_management",
    "role_management",
    "permission_changes",
    "system_settings",
    "security_events",
];

/// Application account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub full_name: String,
    pub email: String,
    /// Role name; matched against `Role::name` without integrity checks.
    pub role: String,
    pub department: String,
    pub position: String,
    pub status: UserStatus,
    pub last_login: Option<NaiveDateTime>,
    pub last_login_location: Option<String>,
    pub permissions: Vec<String>,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

impl Record for UserRecord {
    type Status = UserStatus;

    fn status(&self) -> UserStatus {
        self.status
    }
}

/// Named bundle of permission keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub permissions: Vec<String>,
    pub user_count: u32,
    pub is_system_role: bool,
}

impl Role {
    pub fn has_permission(&self, key: &str) -> bool {
        self.permissions.iter().any(|p| p == key)
    }

    /// Grants or revokes `key`; returns whether the role changed.
    pub fn set_permission(&mut self, key: &str, granted: bool) -> bool {
        let had = self.has_permission(key);
        if granted && !had {
            self.permissions.push(key.to_string());
            true
        } else if !granted && had {
            self.permissions.retain(|p| p != key);
            true
        } else {
            false
        }
    }
}

/// Permission catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

/// Audit trail entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub log_id: String,
    pub timestamp: NaiveDateTime,
    pub user_name: String,
    pub user_role: String,
    pub action: String,
    pub target: String,
    pub description: String,
    pub activity_type: String,
    pub status: ActivityStatus,
    pub ip_address: String,
    pub user_agent: String,
}

impl ActivityLog {
    /// Browser family named in the user agent string.
    pub fn browser(&self) -> &'static str {
        let agent = self.user_agent.as_str();
        if agent.contains("Chrome") {
            "Chrome"
        } else if agent.contains("Firefox") {
            "Firefox"
        } else if agent.contains("Safari") {
            "Safari"
        } else if agent.contains("Edge") {
            "Edge"
        } else {
            "Unknown"
        }
    }
}

/// Security, audit and notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub password_min_length: u32,
    pub session_timeout_minutes: u32,
    pub require_password_complexity: bool,
    pub enable_two_factor: bool,
    pub enable_account_lockout: bool,
    pub max_failed_attempts: u32,
    pub lockout_duration_minutes: u32,
    pub enable_user_activity_logging: bool,
    pub enable_system_audit_trail: bool,
    pub log_retention_days: u32,
    pub backup_frequency: String,
    pub enable_email_notifications: bool,
    pub notify_user_creation: bool,
    pub notify_password_reset: bool,
    pub notify_role_changes: bool,
    pub notify_security_events: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            session_timeout_minutes: 30,
            require_password_complexity: true,
            enable_two_factor: false,
            enable_account_lockout: true,
            max_failed_attempts: 5,
            lockout_duration_minutes: 15,
            enable_user_activity_logging: true,
            enable_system_audit_trail: true,
            log_retention_days: 90,
            backup_frequency: "weekly".to_string(),
            enable_email_notifications: true,
            notify_user_creation: true,
            notify_password_reset: true,
            notify_role_changes: true,
            notify_security_events: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Role, UserStatus};

    fn role() -> Role {
        Role {
            role_id: "3".to_string(),
            name: "Inspector".to_string(),
            display_name: "Quality Inspector".to_string(),
            description: String::new(),
            permissions: vec!["inspections".to_string()],
            user_count: 0,
            is_system_role: false,
        }
    }

    #[test]
    fn granting_twice_keeps_single_entry() {
        let mut role = role();
        assert!(role.set_permission("ncr_create", true));
        assert!(!role.set_permission("ncr_create", true));
        assert_eq!(role.permissions, vec!["inspections", "ncr_create"]);
    }

    #[test]
    fn revoking_removes_permission() {
        let mut role = role();
        assert!(role.set_permission("inspections", false));
        assert!(!role.has_permission("inspections"));
        assert!(!role.set_permission("inspections", false));
    }

    #[test]
    fn toggle_reactivates_any_non_active_state() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Pending.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Suspended.toggled(), UserStatus::Active);
    }
}
