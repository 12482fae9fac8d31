//! CAPA form.
//!
//! # Invariants
//! - Defaults: priority `Medium`, status `Open`.
//! - `closed_on` is stamped when the submitted status is `Closed`; an
//!   already-closed record keeps its original closing date.

use crate::form::validation::FieldRule::{MinLength, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{BuildContext, FormModel};
use crate::model::capa::{CapaRecord, CapaSource, CapaStatus};
use crate::model::common::Priority;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct CapaForm {
    pub capa_number: String,
    pub title: String,
    pub description: String,
    pub root_cause: String,
    pub corrective_action: String,
    pub preventive_action: String,
    pub assigned_to: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<CapaStatus>,
    pub source: Option<CapaSource>,
    pub department: String,
    pub follow_up_date: Option<NaiveDate>,
    pub effective: Option<bool>,
}

impl FormModel for CapaForm {
    type Record = CapaRecord;

    fn defaults() -> Self {
        Self {
            capa_number: String::new(),
            title: String::new(),
            description: String::new(),
            root_cause: String::new(),
            corrective_action: String::new(),
            preventive_action: String::new(),
            assigned_to: String::new(),
            due_date: None,
            priority: Some(Priority::Medium),
            status: Some(CapaStatus::Open),
            source: None,
            department: String::new(),
            follow_up_date: None,
            effective: None,
        }
    }

    fn from_record(record: &CapaRecord) -> Self {
        Self {
            capa_number: record.capa_number.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            root_cause: record.root_cause.clone(),
            corrective_action: record.corrective_action.clone(),
            preventive_action: record.preventive_action.clone(),
            assigned_to: record.assigned_to.clone(),
            due_date: Some(record.due_date),
            priority: Some(record.priority),
            status: Some(record.status),
            source: Some(record.source),
            department: record.department.clone(),
            follow_up_date: record.follow_up_date,
            effective: record.effective,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("capa_number", &self.capa_number, &[Required]);
        v.text("title", &self.title, &[Required, MinLength(10)]);
        v.text("description", &self.description, &[Required, MinLength(20)]);
        v.text("root_cause", &self.root_cause, &[Required]);
        v.text("corrective_action", &self.corrective_action, &[Required]);
        v.text("assigned_to", &self.assigned_to, &[Required]);
        v.date("due_date", self.due_date);
        v.choice("priority", self.priority);
        v.choice("status", self.status);
        v.choice("source", self.source);
        v.text("department", &self.department, &[Required]);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, CapaRecord>) -> Result<CapaRecord, FieldErrors> {
        let status = require("status", self.status)?;
        // Why: re-saving a closed CAPA must not move its closing date to the
        // day of the edit, which would shift closure reporting.
        let closed_on = match (status, ctx.existing) {
            (CapaStatus::Closed, Some(prev)) if prev.status == CapaStatus::Closed => {
                prev.closed_on.or(Some(ctx.today))
            }
            (CapaStatus::Closed, _) => Some(ctx.today),
            _ => None,
        };

        Ok(CapaRecord {
            capa_number: self.capa_number.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            root_cause: self.root_cause.trim().to_string(),
            corrective_action: self.corrective_action.trim().to_string(),
            preventive_action: self.preventive_action.trim().to_string(),
            assigned_to: self.assigned_to.trim().to_string(),
            due_date: require("due_date", self.due_date)?,
            priority: require("priority", self.priority)?,
            status,
            source: require("source", self.source)?,
            department: self.department.trim().to_string(),
            closed_on,
            effective: self.effective,
            follow_up_date: self.follow_up_date,
            attachments: ctx
                .existing
                .map(|prev| prev.attachments.clone())
                .unwrap_or_default(),
        })
    }
}
