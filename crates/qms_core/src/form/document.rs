//! Controlled document form.
//!
//! Defaults: status `Draft`, version `1.0`. File size and download count
//! are owned by the register and survive edits.

use crate::form::validation::FieldRule::Required;
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{BuildContext, FormModel};
use crate::model::document::{DocumentRecord, DocumentStatus, DocumentType};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentForm {
    pub document_number: String,
    pub title: String,
    pub kind: Option<DocumentType>,
    pub version: String,
    pub status: Option<DocumentStatus>,
    pub approved_by: String,
    pub approval_date: Option<NaiveDate>,
    pub effective_date: Option<NaiveDate>,
    pub review_date: Option<NaiveDate>,
    pub department: String,
    pub owner: String,
    pub description: String,
}

impl FormModel for DocumentForm {
    type Record = DocumentRecord;

    fn defaults() -> Self {
        Self {
            document_number: String::new(),
            title: String::new(),
            kind: None,
            version: "1.0".to_string(),
            status: Some(DocumentStatus::Draft),
            approved_by: String::new(),
            approval_date: None,
            effective_date: None,
            review_date: None,
            department: String::new(),
            owner: String::new(),
            description: String::new(),
        }
    }

    fn from_record(record: &DocumentRecord) -> Self {
        Self {
            document_number: record.document_number.clone(),
            title: record.title.clone(),
            kind: Some(record.kind),
            version: record.version.clone(),
            status: Some(record.status),
            approved_by: record.approved_by.clone(),
            approval_date: Some(record.approval_date),
            effective_date: Some(record.effective_date),
            review_date: Some(record.review_date),
            department: record.department.clone(),
            owner: record.owner.clone(),
            description: record.description.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("document_number", &self.document_number, &[Required]);
        v.text("title", &self.title, &[Required]);
        v.choice("kind", self.kind);
        v.text("version", &self.version, &[Required]);
        v.choice("status", self.status);
        v.date("approval_date", self.approval_date);
        v.date("effective_date", self.effective_date);
        v.date("review_date", self.review_date);
        v.text("department", &self.department, &[Required]);
        v.text("owner", &self.owner, &[Required]);
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, DocumentRecord>) -> Result<DocumentRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(DocumentRecord {
            document_number: self.document_number.trim().to_string(),
            title: self.title.trim().to_string(),
            kind: require("kind", self.kind)?,
            version: self.version.trim().to_string(),
            status: require("status", self.status)?,
            approved_by: self.approved_by.trim().to_string(),
            approval_date: require("approval_date", self.approval_date)?,
            effective_date: require("effective_date", self.effective_date)?,
            review_date: require("review_date", self.review_date)?,
            department: self.department.trim().to_string(),
            owner: self.owner.trim().to_string(),
            description: self.description.trim().to_string(),
            file_size: prev.map_or_else(|| "0 KB".to_string(), |p| p.file_size.clone()),
            download_count: prev.map_or(0, |p| p.download_count),
        })
    }
}
