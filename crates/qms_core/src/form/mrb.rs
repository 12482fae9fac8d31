//! MRB deviation form.
//!
//! # Invariants
//! - Defaults: unit `EA`, severity `Minor`, priority `Medium`, status
//!   `Submitted`, disposition `Pending`, quantity 1, costs 0.
//! - Review, approval, board and comment fields are owned by status actions
//!   and carried over unchanged on edit.

use crate::form::validation::FieldRule::{Min, MinLength, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{optional_text, text_or_empty, whole, BuildContext, FormModel};
use crate::model::common::{Priority, Severity};
use crate::model::mrb::{DeviationType, MrbDisposition, MrbRecord, MrbStatus};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct MrbForm {
    pub mrb_number: String,
    pub title: String,
    pub description: String,
    pub part_number: String,
    pub lot_number: String,
    pub quantity: f64,
    pub unit_of_measure: String,
    pub supplier: String,
    pub customer_order: String,
    pub deviation: String,
    pub deviation_type: Option<DeviationType>,
    pub severity: Option<Severity>,
    pub priority: Option<Priority>,
    pub status: Option<MrbStatus>,
    pub disposition: Option<MrbDisposition>,
    pub submitted_by: String,
    pub due_date: Option<NaiveDate>,
    pub estimated_cost: f64,
    pub actual_cost: f64,
    pub customer_notification: bool,
    pub customer_approval: bool,
    pub justification: String,
    pub quality_impact: String,
    pub corrective_action: String,
}

impl FormModel for MrbForm {
    type Record = MrbRecord;

    fn defaults() -> Self {
        Self {
            mrb_number: String::new(),
            title: String::new(),
            description: String::new(),
            part_number: String::new(),
            lot_number: String::new(),
            quantity: 1.0,
            unit_of_measure: "EA".to_string(),
            supplier: String::new(),
            customer_order: String::new(),
            deviation: String::new(),
            deviation_type: None,
            severity: Some(Severity::Minor),
            priority: Some(Priority::Medium),
            status: Some(MrbStatus::Submitted),
            disposition: Some(MrbDisposition::Pending),
            submitted_by: String::new(),
            due_date: None,
            estimated_cost: 0.0,
            actual_cost: 0.0,
            customer_notification: false,
            customer_approval: false,
            justification: String::new(),
            quality_impact: String::new(),
            corrective_action: String::new(),
        }
    }

    fn from_record(record: &MrbRecord) -> Self {
        Self {
            mrb_number: record.mrb_number.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            part_number: record.part_number.clone(),
            lot_number: text_or_empty(&record.lot_number),
            quantity: f64::from(record.quantity),
            unit_of_measure: record.unit_of_measure.clone(),
            supplier: text_or_empty(&record.supplier),
            customer_order: text_or_empty(&record.customer_order),
            deviation: record.deviation.clone(),
            deviation_type: Some(record.deviation_type),
            severity: Some(record.severity),
            priority: Some(record.priority),
            status: Some(record.status),
            disposition: Some(record.disposition),
            submitted_by: record.submitted_by.clone(),
            due_date: Some(record.due_date),
            estimated_cost: record.estimated_cost,
            actual_cost: record.actual_cost,
            customer_notification: record.customer_notification,
            customer_approval: record.customer_approval,
            justification: text_or_empty(&record.justification),
            quality_impact: text_or_empty(&record.quality_impact),
            corrective_action: text_or_empty(&record.corrective_action),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("mrb_number", &self.mrb_number, &[Required]);
        v.text("title", &self.title, &[Required, MinLength(5)]);
        v.text("description", &self.description, &[Required, MinLength(10)]);
        v.text("part_number", &self.part_number, &[Required]);
        v.number("quantity", self.quantity, &[Min(1.0)]);
        v.text("unit_of_measure", &self.unit_of_measure, &[Required]);
        v.text("deviation", &self.deviation, &[Required]);
        v.choice("deviation_type", self.deviation_type);
        v.choice("severity", self.severity);
        v.choice("priority", self.priority);
        v.choice("status", self.status);
        v.choice("disposition", self.disposition);
        v.text("submitted_by", &self.submitted_by, &[Required]);
        v.date("due_date", self.due_date);
        v.number("estimated_cost", self.estimated_cost, &[Min(0.0)]);
        v.number("actual_cost", self.actual_cost, &[Min(0.0)]);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, MrbRecord>) -> Result<MrbRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(MrbRecord {
            mrb_number: self.mrb_number.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            lot_number: optional_text(&self.lot_number),
            quantity: whole(self.quantity),
            unit_of_measure: self.unit_of_measure.trim().to_string(),
            supplier: optional_text(&self.supplier),
            customer_order: optional_text(&self.customer_order),
            deviation: self.deviation.trim().to_string(),
            deviation_type: require("deviation_type", self.deviation_type)?,
            severity: require("severity", self.severity)?,
            priority: require("priority", self.priority)?,
            status: require("status", self.status)?,
            disposition: require("disposition", self.disposition)?,
            submitted_by: self.submitted_by.trim().to_string(),
            submitted_date: prev.map_or(ctx.today, |p| p.submitted_date),
            reviewed_by: prev.and_then(|p| p.reviewed_by.clone()),
            reviewed_date: prev.and_then(|p| p.reviewed_date),
            board_members: prev.map(|p| p.board_members.clone()).unwrap_or_default(),
            board_decision: prev.and_then(|p| p.board_decision.clone()),
            approved_by: prev.and_then(|p| p.approved_by.clone()),
            approved_date: prev.and_then(|p| p.approved_date),
            due_date: require("due_date", self.due_date)?,
            estimated_cost: self.estimated_cost,
            actual_cost: self.actual_cost,
            customer_notification: self.customer_notification,
            customer_approval: self.customer_approval,
            justification: optional_text(&self.justification),
            quality_impact: optional_text(&self.quality_impact),
            corrective_action: optional_text(&self.corrective_action),
            attachments: prev.map(|p| p.attachments.clone()).unwrap_or_default(),
            comments: prev.map(|p| p.comments.clone()).unwrap_or_default(),
        })
    }
}
