//! Procedure library form.
//!
//! # Invariants
//! - Defaults: status `Draft`, version `1.0`, difficulty `Beginner`,
//!   usage `Active`, review every 12 months.
//! - List fields (documents, equipment, skills, safety, tags) are edited
//!   as comma-separated text.
//! - Download count and file size survive edits.

use crate::form::validation::FieldRule::{Min, MinLength, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{join_list, split_list, whole, BuildContext, FormModel};
use crate::model::procedure::{
    Difficulty, ProcedureCategory, ProcedureRecord, ProcedureStatus, ProcedureType, Usage,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureForm {
    pub procedure_number: String,
    pub title: String,
    pub description: String,
    pub category: Option<ProcedureCategory>,
    pub kind: Option<ProcedureType>,
    pub version: String,
    pub status: Option<ProcedureStatus>,
    pub owner: String,
    pub department: String,
    pub approved_by: String,
    pub approval_date: Option<NaiveDate>,
    pub effective_date: Option<NaiveDate>,
    pub next_review_date: Option<NaiveDate>,
    pub last_review_date: Option<NaiveDate>,
    pub review_frequency_months: f64,
    pub training_required: bool,
    pub certification_required: bool,
    pub related_documents: String,
    pub equipment_required: String,
    pub skills_required: String,
    pub safety_requirements: String,
    pub estimated_minutes: f64,
    pub difficulty: Option<Difficulty>,
    pub usage: Option<Usage>,
    pub tags: String,
}

impl FormModel for ProcedureForm {
    type Record = ProcedureRecord;

    fn defaults() -> Self {
        Self {
            procedure_number: String::new(),
            title: String::new(),
            description: String::new(),
            category: None,
            kind: None,
            version: "1.0".to_string(),
            status: Some(ProcedureStatus::Draft),
            owner: String::new(),
            department: String::new(),
            approved_by: String::new(),
            approval_date: None,
            effective_date: None,
            next_review_date: None,
            last_review_date: None,
            review_frequency_months: 12.0,
            training_required: false,
            certification_required: false,
            related_documents: String::new(),
            equipment_required: String::new(),
            skills_required: String::new(),
            safety_requirements: String::new(),
            estimated_minutes: 0.0,
            difficulty: Some(Difficulty::Beginner),
            usage: Some(Usage::Active),
            tags: String::new(),
        }
    }

    fn from_record(record: &ProcedureRecord) -> Self {
        Self {
            procedure_number: record.procedure_number.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category: Some(record.category),
            kind: Some(record.kind),
            version: record.version.clone(),
            status: Some(record.status),
            owner: record.owner.clone(),
            department: record.department.clone(),
            approved_by: record.approved_by.clone(),
            approval_date: Some(record.approval_date),
            effective_date: Some(record.effective_date),
            next_review_date: Some(record.next_review_date),
            last_review_date: Some(record.last_review_date),
            review_frequency_months: f64::from(record.review_frequency_months),
            training_required: record.training_required,
            certification_required: record.certification_required,
            related_documents: join_list(&record.related_documents),
            equipment_required: join_list(&record.equipment_required),
            skills_required: join_list(&record.skills_required),
            safety_requirements: join_list(&record.safety_requirements),
            estimated_minutes: f64::from(record.estimated_minutes),
            difficulty: Some(record.difficulty),
            usage: Some(record.usage),
            tags: join_list(&record.tags),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("procedure_number", &self.procedure_number, &[Required]);
        v.text("title", &self.title, &[Required, MinLength(5)]);
        v.text("description", &self.description, &[Required]);
        v.choice("category", self.category);
        v.choice("kind", self.kind);
        v.text("version", &self.version, &[Required]);
        v.choice("status", self.status);
        v.text("owner", &self.owner, &[Required]);
        v.text("department", &self.department, &[Required]);
        v.date("approval_date", self.approval_date);
        v.date("effective_date", self.effective_date);
        v.date("next_review_date", self.next_review_date);
        v.date("last_review_date", self.last_review_date);
        v.number("review_frequency_months", self.review_frequency_months, &[Min(1.0)]);
        v.number("estimated_minutes", self.estimated_minutes, &[Min(0.0)]);
        v.choice("difficulty", self.difficulty);
        v.choice("usage", self.usage);
        v.finish()
    }

    fn build(
        &self,
        ctx: &BuildContext<'_, ProcedureRecord>,
    ) -> Result<ProcedureRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(ProcedureRecord {
            procedure_number: self.procedure_number.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: require("category", self.category)?,
            kind: require("kind", self.kind)?,
            version: self.version.trim().to_string(),
            status: require("status", self.status)?,
            owner: self.owner.trim().to_string(),
            department: self.department.trim().to_string(),
            approved_by: self.approved_by.trim().to_string(),
            approval_date: require("approval_date", self.approval_date)?,
            effective_date: require("effective_date", self.effective_date)?,
            next_review_date: require("next_review_date", self.next_review_date)?,
            last_review_date: require("last_review_date", self.last_review_date)?,
            review_frequency_months: whole(self.review_frequency_months),
            training_required: self.training_required,
            certification_required: self.certification_required,
            related_documents: split_list(&self.related_documents),
            equipment_required: split_list(&self.equipment_required),
            skills_required: split_list(&self.skills_required),
            safety_requirements: split_list(&self.safety_requirements),
            estimated_minutes: whole(self.estimated_minutes),
            difficulty: require("difficulty", self.difficulty)?,
            download_count: prev.map_or(0, |p| p.download_count),
            usage: require("usage", self.usage)?,
            tags: split_list(&self.tags),
            file_size: prev.map_or_else(|| "0 KB".to_string(), |p| p.file_size.clone()),
        })
    }
}
