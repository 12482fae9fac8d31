//! Accounts, roles, permission catalog and audit trail for the admin area.

use crate::model::user::{ActivityLog, ActivityStatus, Permission, Role, UserRecord, UserStatus};
use crate::repo::record_store::Entry;
use crate::seed::{at, date, entry, strings};
use chrono::NaiveDateTime;

const DESKTOP_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

fn user(
    full_name: &str,
    email: &str,
    role: &str,
    (department, position): (&str, &str),
    status: UserStatus,
    (last_login, location): (NaiveDateTime, &str),
    permissions: &[&str],
) -> UserRecord {
    UserRecord {
        full_name: full_name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        status,
        last_login: Some(last_login),
        last_login_location: Some(location.to_string()),
        permissions: strings(permissions),
    }
}

pub fn user_entries() -> Vec<Entry<UserRecord>> {
    vec![
        entry(
            date(2024, 11, 20),
            user(
                "David Wilson",
                "david.wilson@company.com",
                "Supervisor",
                ("Production", "Production Supervisor"),
                UserStatus::Pending,
                (at(2024, 11, 27, 14, 20), "Seattle, WA"),
                &["production_oversight", "team_management"],
            ),
        ),
        entry(
            date(2024, 4, 20),
            user(
                "Lisa Brown",
                "lisa.brown@company.com",
                "Operator",
                ("Production", "Production Operator"),
                UserStatus::Inactive,
                (at(2024, 11, 25, 16, 45), "Phoenix, AZ"),
                &["basic_access"],
            ),
        ),
        entry(
            date(2024, 3, 5),
            user(
                "Mike Davis",
                "mike.davis@company.com",
                "Inspector",
                ("Production", "Quality Inspector"),
                UserStatus::Active,
                (at(2024, 11, 28, 8, 0), "Detroit, MI"),
                &["inspections", "measurements"],
            ),
        ),
        entry(
            date(2024, 2, 10),
            user(
                "Sarah Johnson",
                "sarah.johnson@company.com",
                "Quality Manager",
                ("Quality", "Quality Assurance Manager"),
                UserStatus::Active,
                (at(2024, 11, 28, 9, 15), "Chicago, IL"),
                &["quality_procedures", "inspections", "ncr_management"],
            ),
        ),
        entry(
            date(2024, 1, 15),
            user(
                "John Smith",
                "john.smith@company.com",
                "Administrator",
                ("IT", "System Administrator"),
                UserStatus::Active,
                (at(2024, 11, 28, 10, 30), "New York, NY"),
                &["user_management", "system_settings", "audit_logs"],
            ),
        ),
    ]
}

pub fn roles() -> Vec<Role> {
    let role = |id: &str, name: &str, display: &str, description: &str, permissions: &[&str], users: u32| {
        Role {
            role_id: id.to_string(),
            name: name.to_string(),
            display_name: display.to_string(),
            description: description.to_string(),
            permissions: strings(permissions),
            user_count: users,
            is_system_role: false,
        }
    };
    let mut administrator = role(
        "1",
        "Administrator",
        "System Administrator",
        "Full system access with all permissions",
        &["user_management", "system_settings", "audit_logs", "all_modules"],
        2,
    );
    administrator.is_system_role = true;
    vec![
        administrator,
        role(
            "2",
            "Quality Manager",
            "Quality Manager",
            "Manage quality processes, procedures, and inspections",
            &[
                "quality_procedures",
                "inspections",
                "ncr_management",
                "capa_management",
                "training",
            ],
            3,
        ),
        role(
            "3",
            "Inspector",
            "Quality Inspector",
            "Perform inspections and quality checks",
            &["inspections", "measurements", "ncr_create", "reports_view"],
            8,
        ),
        role(
            "4",
            "Supervisor",
            "Production Supervisor",
            "Oversee production operations and team management",
            &["production_oversight", "team_management", "schedule_management"],
            5,
        ),
        role(
            "5",
            "Operator",
            "Production Operator",
            "Basic production floor access",
            &["basic_access", "work_instructions"],
            15,
        ),
    ]
}

pub fn permissions() -> Vec<Permission> {
    [
        ("user_management", "User Management", "Create, edit, and manage user accounts", "Administration"),
        ("system_settings", "System Settings", "Configure system-wide settings", "Administration"),
        ("audit_logs", "Audit Logs", "View system audit trails", "Administration"),
        ("quality_procedures", "Quality Procedures", "Manage SOPs and procedures", "Quality"),
        ("inspections", "Inspections", "Perform quality inspections", "Quality"),
        ("ncr_management", "NCR Management", "Manage non-conformance reports", "Quality"),
        ("capa_management", "CAPA Management", "Manage corrective actions", "Quality"),
        ("training", "Training Management", "Manage training programs", "Quality"),
        ("production_oversight", "Production Oversight", "Monitor production activities", "Production"),
        ("team_management", "Team Management", "Manage team assignments", "Production"),
    ]
    .into_iter()
    .map(|(key, name, description, category)| Permission {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    })
    .collect()
}

pub fn activity_logs() -> Vec<ActivityLog> {
    let log = |id: &str,
               timestamp: NaiveDateTime,
               (user_name, user_role): (&str, &str),
               (action, target): (&str, &str),
               description: &str,
               activity_type: &str,
               status: ActivityStatus,
               ip_address: &str| ActivityLog {
        log_id: id.to_string(),
        timestamp,
        user_name: user_name.to_string(),
        user_role: user_role.to_string(),
        action: action.to_string(),
        target: target.to_string(),
        description: description.to_string(),
        activity_type: activity_type.to_string(),
        status,
        ip_address: ip_address.to_string(),
        user_agent: DESKTOP_AGENT.to_string(),
    };
    vec![
        log(
            "1",
            at(2024, 11, 28, 10, 30),
            ("John Smith", "Administrator"),
            ("User Created", "David Wilson"),
            "Created new user account for David Wilson",
            "user_management",
            ActivityStatus::Success,
            "192.168.1.100",
        ),
        log(
            "2",
            at(2024, 11, 28, 9, 45),
            ("Sarah Johnson", "Quality Manager"),
            ("Permission Modified", "Inspector Role"),
            "Added NCR creation permission to Inspector role",
            "role_management",
            ActivityStatus::Success,
            "192.168.1.105",
        ),
        log(
            "3",
            at(2024, 11, 28, 8, 15),
            ("Mike Davis", "Inspector"),
            ("Failed Login", "Self"),
            "Failed login attempt - incorrect password",
            "security_events",
            ActivityStatus::Failed,
            "192.168.1.110",
        ),
    ]
}
