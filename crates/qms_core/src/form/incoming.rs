//! Incoming material inspection form.
//!
//! # Invariants
//! - Checklists start prefilled from the label tables and stay aligned
//!   with them; only their values are editable.
//! - The form starts with one empty measurement row. Rows whose
//!   characteristic is blank are dropped on build.
//! - Quantities and sample size start blank and must be at least 1.

use crate::form::validation::FieldRule::{Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{line_id, optional_text, remove_at, text_or_empty, whole, BuildContext, FormModel};
use crate::model::common::CheckResult;
use crate::model::incoming::{
    default_documentation_checks, default_inspection_types, default_visual_inspections,
    DocumentationCheck, IncomingDisposition, IncomingMeasurement, IncomingRecord, IncomingStatus,
    InspectionTypeCheck, MaterialTesting, VisualInspection,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMeasurementLine {
    pub characteristic: String,
    pub specification: String,
    pub actual_value: String,
    pub result: CheckResult,
}

impl Default for IncomingMeasurementLine {
    fn default() -> Self {
        Self {
            characteristic: String::new(),
            specification: String::new(),
            actual_value: String::new(),
            result: CheckResult::Pass,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncomingForm {
    pub purchase_order: String,
    pub receipt_date: Option<NaiveDate>,
    pub packing_slip_number: String,
    pub supplier: String,
    pub supplier_lot_number: String,
    pub part_number: String,
    pub part_description: String,
    pub revision: String,
    pub quantity_ordered: Option<f64>,
    pub quantity_received: Option<f64>,
    pub unit_of_measure: String,
    pub material_type: String,
    pub inspection_level: String,
    pub aql: String,
    pub sample_size: Option<f64>,
    pub inspector: String,
    pub inspection_date: Option<NaiveDate>,
    pub inspection_types: Vec<InspectionTypeCheck>,
    pub visual_inspections: Vec<VisualInspection>,
    pub measurements: Vec<IncomingMeasurementLine>,
    pub material_testing: MaterialTesting,
    pub coc_received: bool,
    pub coc_number: String,
    pub mtr_received: bool,
    pub mtr_number: String,
    pub documentation_checks: Vec<DocumentationCheck>,
    pub status: Option<IncomingStatus>,
    pub disposition: Option<IncomingDisposition>,
    pub disposition_notes: String,
    pub quality_engineer: String,
    pub approval_date: Option<NaiveDate>,
    pub storage_location: String,
    pub notification_method: String,
    pub notification_date: Option<NaiveDate>,
}

impl IncomingForm {
    pub fn add_measurement(&mut self) {
        self.measurements.push(IncomingMeasurementLine::default());
    }

    pub fn remove_measurement(&mut self, index: usize) {
        remove_at(&mut self.measurements, index);
    }
}

impl FormModel for IncomingForm {
    type Record = IncomingRecord;

    fn defaults() -> Self {
        Self {
            purchase_order: String::new(),
            receipt_date: None,
            packing_slip_number: String::new(),
            supplier: String::new(),
            supplier_lot_number: String::new(),
            part_number: String::new(),
            part_description: String::new(),
            revision: String::new(),
            quantity_ordered: None,
            quantity_received: None,
            unit_of_measure: String::new(),
            material_type: String::new(),
            inspection_level: String::new(),
            aql: String::new(),
            sample_size: None,
            inspector: String::new(),
            inspection_date: None,
            inspection_types: default_inspection_types(),
            visual_inspections: default_visual_inspections(),
            measurements: vec![IncomingMeasurementLine::default()],
            material_testing: MaterialTesting::default(),
            coc_received: false,
            coc_number: String::new(),
            mtr_received: false,
            mtr_number: String::new(),
            documentation_checks: default_documentation_checks(),
            status: None,
            disposition: None,
            disposition_notes: String::new(),
            quality_engineer: String::new(),
            approval_date: None,
            storage_location: String::new(),
            notification_method: String::new(),
            notification_date: None,
        }
    }

    fn from_record(record: &IncomingRecord) -> Self {
        Self {
            purchase_order: record.purchase_order.clone(),
            receipt_date: Some(record.receipt_date),
            packing_slip_number: text_or_empty(&record.packing_slip_number),
            supplier: record.supplier.clone(),
            supplier_lot_number: record.supplier_lot_number.clone(),
            part_number: record.part_number.clone(),
            part_description: record.part_description.clone(),
            revision: text_or_empty(&record.revision),
            quantity_ordered: Some(f64::from(record.quantity_ordered)),
            quantity_received: Some(f64::from(record.quantity_received)),
            unit_of_measure: record.unit_of_measure.clone(),
            material_type: record.material_type.clone(),
            inspection_level: record.inspection_level.clone(),
            aql: text_or_empty(&record.aql),
            sample_size: Some(f64::from(record.sample_size)),
            inspector: record.inspector.clone(),
            inspection_date: Some(record.inspection_date),
            inspection_types: record.inspection_types.clone(),
            visual_inspections: record.visual_inspections.clone(),
            measurements: record
                .measurements
                .iter()
                .map(|m| IncomingMeasurementLine {
                    characteristic: m.characteristic.clone(),
                    specification: m.specification.clone(),
                    actual_value: m.actual_value.clone(),
                    result: m.result,
                })
                .collect(),
            material_testing: record.material_testing.clone(),
            coc_received: record.coc_received,
            coc_number: text_or_empty(&record.coc_number),
            mtr_received: record.mtr_received,
            mtr_number: text_or_empty(&record.mtr_number),
            documentation_checks: record.documentation_checks.clone(),
            status: Some(record.status),
            disposition: record.disposition,
            disposition_notes: text_or_empty(&record.disposition_notes),
            quality_engineer: text_or_empty(&record.quality_engineer),
            approval_date: record.approval_date,
            storage_location: text_or_empty(&record.storage_location),
            notification_method: text_or_empty(&record.notification_method),
            notification_date: record.notification_date,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("purchase_order", &self.purchase_order, &[Required]);
        v.date("receipt_date", self.receipt_date);
        v.text("supplier", &self.supplier, &[Required]);
        v.text("supplier_lot_number", &self.supplier_lot_number, &[Required]);
        v.text("part_number", &self.part_number, &[Required]);
        v.text("part_description", &self.part_description, &[Required]);
        v.optional_number("quantity_ordered", self.quantity_ordered, &[Required, Min(1.0)]);
        v.optional_number("quantity_received", self.quantity_received, &[Required, Min(1.0)]);
        v.text("material_type", &self.material_type, &[Required]);
        v.text("inspection_level", &self.inspection_level, &[Required]);
        v.optional_number("sample_size", self.sample_size, &[Required, Min(1.0)]);
        v.text("inspector", &self.inspector, &[Required]);
        v.date("inspection_date", self.inspection_date);
        v.choice("status", self.status);
        v.finish()
    }

    fn build(
        &self,
        _ctx: &BuildContext<'_, IncomingRecord>,
    ) -> Result<IncomingRecord, FieldErrors> {
        Ok(IncomingRecord {
            purchase_order: self.purchase_order.trim().to_string(),
            receipt_date: require("receipt_date", self.receipt_date)?,
            packing_slip_number: optional_text(&self.packing_slip_number),
            supplier: self.supplier.trim().to_string(),
            supplier_lot_number: self.supplier_lot_number.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            part_description: self.part_description.trim().to_string(),
            revision: optional_text(&self.revision),
            quantity_ordered: whole(require("quantity_ordered", self.quantity_ordered)?),
            quantity_received: whole(require("quantity_received", self.quantity_received)?),
            unit_of_measure: self.unit_of_measure.trim().to_string(),
            material_type: self.material_type.trim().to_string(),
            inspection_level: self.inspection_level.trim().to_string(),
            aql: optional_text(&self.aql),
            sample_size: whole(require("sample_size", self.sample_size)?),
            inspector: self.inspector.trim().to_string(),
            inspection_date: require("inspection_date", self.inspection_date)?,
            inspection_types: self.inspection_types.clone(),
            visual_inspections: self.visual_inspections.clone(),
            measurements: self
                .measurements
                .iter()
                .filter(|m| !m.characteristic.trim().is_empty())
                .enumerate()
                .map(|(index, m)| IncomingMeasurement {
                    id: line_id(index),
                    characteristic: m.characteristic.trim().to_string(),
                    specification: m.specification.trim().to_string(),
                    actual_value: m.actual_value.trim().to_string(),
                    result: m.result,
                })
                .collect(),
            material_testing: self.material_testing.clone(),
            coc_received: self.coc_received,
            coc_number: optional_text(&self.coc_number),
            mtr_received: self.mtr_received,
            mtr_number: optional_text(&self.mtr_number),
            documentation_checks: self.documentation_checks.clone(),
            status: require("status", self.status)?,
            disposition: self.disposition,
            disposition_notes: optional_text(&self.disposition_notes),
            quality_engineer: optional_text(&self.quality_engineer),
            approval_date: self.approval_date,
            storage_location: optional_text(&self.storage_location),
            notification_method: optional_text(&self.notification_method),
            notification_date: self.notification_date,
        })
    }
}
