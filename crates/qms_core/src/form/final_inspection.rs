//! Final inspection form.
//!
//! Visual and packaging checklists start fully passed; one empty dimension
//! row is offered and blank rows are dropped on build.

use crate::form::validation::FieldRule::{Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{line_id, optional_text, remove_at, text_or_empty, whole, BuildContext, FormModel};
use crate::model::common::CheckResult;
use crate::model::final_inspection::{
    default_checklist, ChecklistItem, FinalDimension, FinalDisposition, FinalInspectionRecord,
    FinalStatus, PACKAGING_CHECK_LABELS, VISUAL_CHECK_LABELS,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct FinalDimensionLine {
    pub feature: String,
    pub nominal: String,
    pub actual: String,
    pub result: CheckResult,
}

impl Default for FinalDimensionLine {
    fn default() -> Self {
        Self {
            feature: String::new(),
            nominal: String::new(),
            actual: String::new(),
            result: CheckResult::Pass,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalInspectionForm {
    pub work_order: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub serial_number: String,
    pub lot_number: String,
    pub quantity: Option<f64>,
    pub customer_po: String,
    pub inspector: String,
    pub inspection_date: Option<NaiveDate>,
    pub shift: String,
    pub visual_checks: Vec<ChecklistItem>,
    pub dimensions: Vec<FinalDimensionLine>,
    pub status: Option<FinalStatus>,
    pub disposition: Option<FinalDisposition>,
    pub inspector_notes: String,
    pub quality_engineer: String,
    pub qe_approval_date: Option<NaiveDate>,
    pub packaging_checks: Vec<ChecklistItem>,
    pub package_type: String,
    pub shipping_method: String,
    pub tracking_number: String,
    pub special_instructions: String,
}

impl FinalInspectionForm {
    pub fn add_dimension(&mut self) {
        self.dimensions.push(FinalDimensionLine::default());
    }

    pub fn remove_dimension(&mut self, index: usize) {
        remove_at(&mut self.dimensions, index);
    }
}

impl FormModel for FinalInspectionForm {
    type Record = FinalInspectionRecord;

    fn defaults() -> Self {
        Self {
            work_order: String::new(),
            part_number: String::new(),
            part_name: String::new(),
            revision: String::new(),
            serial_number: String::new(),
            lot_number: String::new(),
            quantity: None,
            customer_po: String::new(),
            inspector: String::new(),
            inspection_date: None,
            shift: String::new(),
            visual_checks: default_checklist(&VISUAL_CHECK_LABELS),
            dimensions: vec![FinalDimensionLine::default()],
            status: None,
            disposition: None,
            inspector_notes: String::new(),
            quality_engineer: String::new(),
            qe_approval_date: None,
            packaging_checks: default_checklist(&PACKAGING_CHECK_LABELS),
            package_type: String::new(),
            shipping_method: String::new(),
            tracking_number: String::new(),
            special_instructions: String::new(),
        }
    }

    fn from_record(record: &FinalInspectionRecord) -> Self {
        Self {
            work_order: record.work_order.clone(),
            part_number: record.part_number.clone(),
            part_name: record.part_name.clone(),
            revision: record.revision.clone(),
            serial_number: text_or_empty(&record.serial_number),
            lot_number: record.lot_number.clone(),
            quantity: Some(f64::from(record.quantity)),
            customer_po: text_or_empty(&record.customer_po),
            inspector: record.inspector.clone(),
            inspection_date: Some(record.inspection_date),
            shift: text_or_empty(&record.shift),
            visual_checks: record.visual_checks.clone(),
            dimensions: record
                .dimensions
                .iter()
                .map(|d| FinalDimensionLine {
                    feature: d.feature.clone(),
                    nominal: d.nominal.clone(),
                    actual: d.actual.clone(),
                    result: d.result,
                })
                .collect(),
            status: Some(record.status),
            disposition: record.disposition,
            inspector_notes: text_or_empty(&record.inspector_notes),
            quality_engineer: text_or_empty(&record.quality_engineer),
            qe_approval_date: record.qe_approval_date,
            packaging_checks: record.packaging_checks.clone(),
            package_type: text_or_empty(&record.package_type),
            shipping_method: text_or_empty(&record.shipping_method),
            tracking_number: text_or_empty(&record.tracking_number),
            special_instructions: text_or_empty(&record.special_instructions),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("work_order", &self.work_order, &[Required]);
        v.text("part_number", &self.part_number, &[Required]);
        v.text("part_name", &self.part_name, &[Required]);
        v.text("revision", &self.revision, &[Required]);
        v.text("lot_number", &self.lot_number, &[Required]);
        v.optional_number("quantity", self.quantity, &[Required, Min(1.0)]);
        v.text("inspector", &self.inspector, &[Required]);
        v.date("inspection_date", self.inspection_date);
        v.choice("status", self.status);
        v.finish()
    }

    fn build(
        &self,
        _ctx: &BuildContext<'_, FinalInspectionRecord>,
    ) -> Result<FinalInspectionRecord, FieldErrors> {
        Ok(FinalInspectionRecord {
            work_order: self.work_order.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            part_name: self.part_name.trim().to_string(),
            revision: self.revision.trim().to_string(),
            serial_number: optional_text(&self.serial_number),
            lot_number: self.lot_number.trim().to_string(),
            quantity: whole(require("quantity", self.quantity)?),
            customer_po: optional_text(&self.customer_po),
            inspector: self.inspector.trim().to_string(),
            inspection_date: require("inspection_date", self.inspection_date)?,
            shift: optional_text(&self.shift),
            visual_checks: self.visual_checks.clone(),
            dimensions: self
                .dimensions
                .iter()
                .filter(|d| !d.feature.trim().is_empty())
                .enumerate()
                .map(|(index, d)| FinalDimension {
                    id: line_id(index),
                    feature: d.feature.trim().to_string(),
                    nominal: d.nominal.trim().to_string(),
                    actual: d.actual.trim().to_string(),
                    result: d.result,
                })
                .collect(),
            status: require("status", self.status)?,
            disposition: self.disposition,
            inspector_notes: optional_text(&self.inspector_notes),
            quality_engineer: optional_text(&self.quality_engineer),
            qe_approval_date: self.qe_approval_date,
            packaging_checks: self.packaging_checks.clone(),
            package_type: optional_text(&self.package_type),
            shipping_method: optional_text(&self.shipping_method),
            tracking_number: optional_text(&self.tracking_number),
            special_instructions: optional_text(&self.special_instructions),
        })
    }
}
