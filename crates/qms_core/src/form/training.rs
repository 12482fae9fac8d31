//! Training record form.
//!
//! # Invariants
//! - Defaults: status `Scheduled`, passing score 80, max attempts 3,
//!   method `Classroom`.
//! - Score is optional and bounded to 0..=100.
//! - Attachments are owned by the record and survive edits.

use crate::form::validation::FieldRule::{Max, Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{join_list, optional_text, split_list, text_or_empty, whole, BuildContext, FormModel};
use crate::model::training::{
    TrainingCategory, TrainingMethod, TrainingRecord, TrainingStatus, TrainingType,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingForm {
    pub training_number: String,
    pub employee_id: String,
    pub employee_name: String,
    pub training_title: String,
    pub training_type: Option<TrainingType>,
    pub category: Option<TrainingCategory>,
    pub instructor: String,
    pub training_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub duration_hours: f64,
    pub status: Option<TrainingStatus>,
    pub score: Option<f64>,
    pub passing_score: f64,
    pub attempts: f64,
    pub max_attempts: f64,
    pub certificate_number: String,
    pub related_procedures: String,
    pub required_by: String,
    pub competency_areas: String,
    pub method: Option<TrainingMethod>,
    pub cost: f64,
    pub provider: String,
    pub location: String,
    pub notes: String,
}

impl FormModel for TrainingForm {
    type Record = TrainingRecord;

    fn defaults() -> Self {
        Self {
            training_number: String::new(),
            employee_id: String::new(),
            employee_name: String::new(),
            training_title: String::new(),
            training_type: None,
            category: None,
            instructor: String::new(),
            training_date: None,
            expiration_date: None,
            duration_hours: 0.0,
            status: Some(TrainingStatus::Scheduled),
            score: None,
            passing_score: 80.0,
            attempts: 0.0,
            max_attempts: 3.0,
            certificate_number: String::new(),
            related_procedures: String::new(),
            required_by: String::new(),
            competency_areas: String::new(),
            method: Some(TrainingMethod::Classroom),
            cost: 0.0,
            provider: String::new(),
            location: String::new(),
            notes: String::new(),
        }
    }

    fn from_record(record: &TrainingRecord) -> Self {
        Self {
            training_number: record.training_number.clone(),
            employee_id: record.employee_id.clone(),
            employee_name: record.employee_name.clone(),
            training_title: record.training_title.clone(),
            training_type: Some(record.training_type),
            category: Some(record.category),
            instructor: record.instructor.clone(),
            training_date: Some(record.training_date),
            expiration_date: record.expiration_date,
            duration_hours: record.duration_hours,
            status: Some(record.status),
            score: record.score.map(f64::from),
            passing_score: f64::from(record.passing_score),
            attempts: f64::from(record.attempts),
            max_attempts: f64::from(record.max_attempts),
            certificate_number: text_or_empty(&record.certificate_number),
            related_procedures: join_list(&record.related_procedures),
            required_by: record.required_by.clone(),
            competency_areas: join_list(&record.competency_areas),
            method: Some(record.method),
            cost: record.cost,
            provider: record.provider.clone(),
            location: record.location.clone(),
            notes: text_or_empty(&record.notes),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("training_number", &self.training_number, &[Required]);
        v.text("employee_id", &self.employee_id, &[Required]);
        v.text("employee_name", &self.employee_name, &[Required]);
        v.text("training_title", &self.training_title, &[Required]);
        v.choice("training_type", self.training_type);
        v.choice("category", self.category);
        v.text("instructor", &self.instructor, &[Required]);
        v.date("training_date", self.training_date);
        v.number("duration_hours", self.duration_hours, &[Min(0.0)]);
        v.choice("status", self.status);
        v.optional_number("score", self.score, &[Min(0.0), Max(100.0)]);
        v.number("passing_score", self.passing_score, &[Min(0.0), Max(100.0)]);
        v.number("attempts", self.attempts, &[Min(0.0)]);
        v.number("max_attempts", self.max_attempts, &[Min(1.0)]);
        v.choice("method", self.method);
        v.number("cost", self.cost, &[Min(0.0)]);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, TrainingRecord>) -> Result<TrainingRecord, FieldErrors> {
        Ok(TrainingRecord {
            training_number: self.training_number.trim().to_string(),
            employee_id: self.employee_id.trim().to_string(),
            employee_name: self.employee_name.trim().to_string(),
            training_title: self.training_title.trim().to_string(),
            training_type: require("training_type", self.training_type)?,
            category: require("category", self.category)?,
            instructor: self.instructor.trim().to_string(),
            training_date: require("training_date", self.training_date)?,
            expiration_date: self.expiration_date,
            duration_hours: self.duration_hours,
            status: require("status", self.status)?,
            score: self.score.map(whole),
            passing_score: whole(self.passing_score),
            attempts: whole(self.attempts),
            max_attempts: whole(self.max_attempts),
            certificate_number: optional_text(&self.certificate_number),
            related_procedures: split_list(&self.related_procedures),
            required_by: self.required_by.trim().to_string(),
            competency_areas: split_list(&self.competency_areas),
            method: require("method", self.method)?,
            cost: self.cost,
            provider: self.provider.trim().to_string(),
            location: self.location.trim().to_string(),
            notes: optional_text(&self.notes),
            attachments: ctx
                .existing
                .map(|prev| prev.attachments.clone())
                .unwrap_or_default(),
        })
    }
}
