//! NCR form.
//!
//! Defaults: status `Open`, severity `Minor`, customer impact `None`.
//! Closing through the form stamps `actual_close_date` like the close action.

use crate::form::validation::FieldRule::{Min, MinLength, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{join_list, optional_text, split_list, text_or_empty, BuildContext, FormModel};
use crate::model::common::Severity;
use crate::model::ncr::{CustomerImpact, NcrCategory, NcrRecord, NcrStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct NcrForm {
    pub ncr_number: String,
    pub title: String,
    pub description: String,
    pub reported_by: String,
    pub reported_date: Option<NaiveDate>,
    pub department: String,
    pub area: String,
    pub category: Option<NcrCategory>,
    pub severity: Option<Severity>,
    pub status: Option<NcrStatus>,
    pub assigned_to: String,
    pub target_close_date: Option<NaiveDate>,
    pub root_cause: String,
    pub immediate_action: String,
    pub capa_required: bool,
    pub capa_reference: String,
    pub verification_method: String,
    pub verified_by: String,
    pub verification_date: Option<NaiveDate>,
    /// Comma-separated attachment names.
    pub attachments: String,
    pub cost: Option<f64>,
    pub customer_impact: Option<CustomerImpact>,
}

impl FormModel for NcrForm {
    type Record = NcrRecord;

    fn defaults() -> Self {
        Self {
            ncr_number: String::new(),
            title: String::new(),
            description: String::new(),
            reported_by: String::new(),
            reported_date: None,
            department: String::new(),
            area: String::new(),
            category: None,
            severity: Some(Severity::Minor),
            status: Some(NcrStatus::Open),
            assigned_to: String::new(),
            target_close_date: None,
            root_cause: String::new(),
            immediate_action: String::new(),
            capa_required: false,
            capa_reference: String::new(),
            verification_method: String::new(),
            verified_by: String::new(),
            verification_date: None,
            attachments: String::new(),
            cost: None,
            customer_impact: Some(CustomerImpact::None),
        }
    }

    fn from_record(record: &NcrRecord) -> Self {
        Self {
            ncr_number: record.ncr_number.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            reported_by: record.reported_by.clone(),
            reported_date: Some(record.reported_date),
            department: record.department.clone(),
            area: record.area.clone(),
            category: Some(record.category),
            severity: Some(record.severity),
            status: Some(record.status),
            assigned_to: record.assigned_to.clone(),
            target_close_date: Some(record.target_close_date),
            root_cause: text_or_empty(&record.root_cause),
            immediate_action: record.immediate_action.clone(),
            capa_required: record.capa_required,
            capa_reference: text_or_empty(&record.capa_reference),
            verification_method: text_or_empty(&record.verification_method),
            verified_by: text_or_empty(&record.verified_by),
            verification_date: record.verification_date,
            attachments: join_list(&record.attachments),
            cost: record.cost,
            customer_impact: Some(record.customer_impact),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("ncr_number", &self.ncr_number, &[Required]);
        v.text("title", &self.title, &[Required, MinLength(10)]);
        v.text("description", &self.description, &[Required, MinLength(20)]);
        v.text("reported_by", &self.reported_by, &[Required]);
        v.date("reported_date", self.reported_date);
        v.text("department", &self.department, &[Required]);
        v.text("area", &self.area, &[Required]);
        v.choice("category", self.category);
        v.choice("severity", self.severity);
        v.choice("status", self.status);
        v.text("assigned_to", &self.assigned_to, &[Required]);
        v.date("target_close_date", self.target_close_date);
        v.text("immediate_action", &self.immediate_action, &[Required]);
        v.optional_number("cost", self.cost, &[Min(0.0)]);
        v.choice("customer_impact", self.customer_impact);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, NcrRecord>) -> Result<NcrRecord, FieldErrors> {
        let status = require("status", self.status)?;
        let actual_close_date = match status {
            NcrStatus::Closed => ctx
                .existing
                .and_then(|prev| prev.actual_close_date)
                .or(Some(ctx.today)),
            _ => None,
        };

        Ok(NcrRecord {
            ncr_number: self.ncr_number.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            reported_by: self.reported_by.trim().to_string(),
            reported_date: require("reported_date", self.reported_date)?,
            department: self.department.trim().to_string(),
            area: self.area.trim().to_string(),
            category: require("category", self.category)?,
            severity: require("severity", self.severity)?,
            status,
            assigned_to: self.assigned_to.trim().to_string(),
            target_close_date: require("target_close_date", self.target_close_date)?,
            actual_close_date,
            root_cause: optional_text(&self.root_cause),
            immediate_action: self.immediate_action.trim().to_string(),
            capa_required: self.capa_required,
            capa_reference: optional_text(&self.capa_reference),
            verification_method: optional_text(&self.verification_method),
            verified_by: optional_text(&self.verified_by),
            verification_date: self.verification_date,
            attachments: split_list(&self.attachments),
            cost: self.cost,
            customer_impact: require("customer_impact", self.customer_impact)?,
        })
    }
}
