//! In-process inspection form.
//!
//! # Invariants
//! - Defaults: shift `Day`, status `In Progress`, priority `Normal`,
//!   disposition `Pending`, quantity 1, inspected 1, operation sequence 1.
//! - Defect lines need a quantity of at least 1.
//! - Review fields are set by the approve/reject/hold actions only.

use crate::form::validation::FieldRule::{Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{
    line_id, optional_text, remove_at, text_or_empty, whole, BuildContext, FormModel,
};
use crate::model::common::{CheckResult, Severity};
use crate::model::ipi::{
    IpiDefect, IpiDisposition, IpiMeasurement, IpiPriority, IpiProcessParameter, IpiRecord,
    IpiStatus, IpiVisualCheck, MeasurementResult, ParameterResult, Shift,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DefectLine {
    pub defect_type: String,
    pub description: String,
    pub quantity: f64,
    pub severity: Severity,
    pub location: String,
    pub cause: String,
    pub correction_required: bool,
}

impl Default for DefectLine {
    fn default() -> Self {
        Self {
            defect_type: String::new(),
            description: String::new(),
            quantity: 1.0,
            severity: Severity::Minor,
            location: String::new(),
            cause: String::new(),
            correction_required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub characteristic: String,
    pub specification: String,
    pub nominal_value: f64,
    pub tolerance: String,
    pub actual_value: f64,
    pub unit: String,
    pub instrument: String,
    pub result: MeasurementResult,
    pub notes: String,
}

impl Default for MeasurementLine {
    fn default() -> Self {
        Self {
            characteristic: String::new(),
            specification: String::new(),
            nominal_value: 0.0,
            tolerance: String::new(),
            actual_value: 0.0,
            unit: "mm".to_string(),
            instrument: String::new(),
            result: MeasurementResult::Pass,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualCheckLine {
    pub check_point: String,
    pub requirement: String,
    pub result: CheckResult,
    pub notes: String,
}

impl Default for VisualCheckLine {
    fn default() -> Self {
        Self {
            check_point: String::new(),
            requirement: String::new(),
            result: CheckResult::Pass,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterLine {
    pub parameter: String,
    pub specification: String,
    pub actual_value: String,
    pub unit: String,
    pub result: ParameterResult,
    pub notes: String,
}

impl Default for ParameterLine {
    fn default() -> Self {
        Self {
            parameter: String::new(),
            specification: String::new(),
            actual_value: String::new(),
            unit: String::new(),
            result: ParameterResult::WithinSpec,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IpiForm {
    pub inspection_number: String,
    pub work_order: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub operation: String,
    pub operation_sequence: f64,
    pub lot_number: String,
    pub quantity: f64,
    pub inspected_quantity: f64,
    pub accepted_quantity: f64,
    pub rejected_quantity: f64,
    pub rework_quantity: f64,
    pub inspector: String,
    pub inspection_date: Option<NaiveDate>,
    pub shift: Option<Shift>,
    pub work_center: String,
    pub operator: String,
    pub machine: String,
    pub tooling: String,
    pub status: Option<IpiStatus>,
    pub priority: Option<IpiPriority>,
    pub notes: String,
    pub next_operation: String,
    pub disposition: Option<IpiDisposition>,
    pub customer_notification: bool,
    pub quality_alert: bool,
    pub submitted_by: String,
    pub defects: Vec<DefectLine>,
    pub measurements: Vec<MeasurementLine>,
    pub visual_checks: Vec<VisualCheckLine>,
    pub process_parameters: Vec<ParameterLine>,
}

impl IpiForm {
    pub fn add_defect(&mut self) {
        self.defects.push(DefectLine::default());
    }

    pub fn remove_defect(&mut self, index: usize) {
        remove_at(&mut self.defects, index);
    }

    pub fn add_measurement(&mut self) {
        self.measurements.push(MeasurementLine::default());
    }

    pub fn remove_measurement(&mut self, index: usize) {
        remove_at(&mut self.measurements, index);
    }

    pub fn add_visual_check(&mut self) {
        self.visual_checks.push(VisualCheckLine::default());
    }

    pub fn remove_visual_check(&mut self, index: usize) {
        remove_at(&mut self.visual_checks, index);
    }

    pub fn add_process_parameter(&mut self) {
        self.process_parameters.push(ParameterLine::default());
    }

    pub fn remove_process_parameter(&mut self, index: usize) {
        remove_at(&mut self.process_parameters, index);
    }
}

impl FormModel for IpiForm {
    type Record = IpiRecord;

    fn defaults() -> Self {
        Self {
            inspection_number: String::new(),
            work_order: String::new(),
            part_number: String::new(),
            part_name: String::new(),
            revision: String::new(),
            operation: String::new(),
            operation_sequence: 1.0,
            lot_number: String::new(),
            quantity: 1.0,
            inspected_quantity: 1.0,
            accepted_quantity: 0.0,
            rejected_quantity: 0.0,
            rework_quantity: 0.0,
            inspector: String::new(),
            inspection_date: None,
            shift: Some(Shift::Day),
            work_center: String::new(),
            operator: String::new(),
            machine: String::new(),
            tooling: String::new(),
            status: Some(IpiStatus::InProgress),
            priority: Some(IpiPriority::Normal),
            notes: String::new(),
            next_operation: String::new(),
            disposition: Some(IpiDisposition::Pending),
            customer_notification: false,
            quality_alert: false,
            submitted_by: String::new(),
            defects: Vec::new(),
            measurements: Vec::new(),
            visual_checks: Vec::new(),
            process_parameters: Vec::new(),
        }
    }

    fn from_record(record: &IpiRecord) -> Self {
        Self {
            inspection_number: record.inspection_number.clone(),
            work_order: record.work_order.clone(),
            part_number: record.part_number.clone(),
            part_name: record.part_name.clone(),
            revision: record.revision.clone(),
            operation: record.operation.clone(),
            operation_sequence: f64::from(record.operation_sequence),
            lot_number: text_or_empty(&record.lot_number),
            quantity: f64::from(record.quantity),
            inspected_quantity: f64::from(record.inspected_quantity),
            accepted_quantity: f64::from(record.accepted_quantity),
            rejected_quantity: f64::from(record.rejected_quantity),
            rework_quantity: f64::from(record.rework_quantity),
            inspector: record.inspector.clone(),
            inspection_date: Some(record.inspection_date),
            shift: Some(record.shift),
            work_center: record.work_center.clone(),
            operator: record.operator.clone(),
            machine: record.machine.clone(),
            tooling: record.tooling.clone(),
            status: Some(record.status),
            priority: Some(record.priority),
            notes: text_or_empty(&record.notes),
            next_operation: text_or_empty(&record.next_operation),
            disposition: Some(record.disposition),
            customer_notification: record.customer_notification,
            quality_alert: record.quality_alert,
            submitted_by: record.submitted_by.clone(),
            defects: record
                .defects
                .iter()
                .map(|d| DefectLine {
                    defect_type: d.defect_type.clone(),
                    description: d.description.clone(),
                    quantity: f64::from(d.quantity),
                    severity: d.severity,
                    location: d.location.clone(),
                    cause: text_or_empty(&d.cause),
                    correction_required: d.correction_required,
                })
                .collect(),
            measurements: record
                .measurements
                .iter()
                .map(|m| MeasurementLine {
                    characteristic: m.characteristic.clone(),
                    specification: m.specification.clone(),
                    nominal_value: m.nominal_value,
                    tolerance: m.tolerance.clone(),
                    actual_value: m.actual_value,
                    unit: m.unit.clone(),
                    instrument: m.instrument.clone(),
                    result: m.result,
                    notes: text_or_empty(&m.notes),
                })
                .collect(),
            visual_checks: record
                .visual_checks
                .iter()
                .map(|c| VisualCheckLine {
                    check_point: c.check_point.clone(),
                    requirement: c.requirement.clone(),
                    result: c.result,
                    notes: text_or_empty(&c.notes),
                })
                .collect(),
            process_parameters: record
                .process_parameters
                .iter()
                .map(|p| ParameterLine {
                    parameter: p.parameter.clone(),
                    specification: p.specification.clone(),
                    actual_value: p.actual_value.clone(),
                    unit: p.unit.clone(),
                    result: p.result,
                    notes: text_or_empty(&p.notes),
                })
                .collect(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("inspection_number", &self.inspection_number, &[Required]);
        v.text("work_order", &self.work_order, &[Required]);
        v.text("part_number", &self.part_number, &[Required]);
        v.text("part_name", &self.part_name, &[Required]);
        v.text("revision", &self.revision, &[Required]);
        v.text("operation", &self.operation, &[Required]);
        v.number("operation_sequence", self.operation_sequence, &[Min(1.0)]);
        v.number("quantity", self.quantity, &[Min(1.0)]);
        v.number("inspected_quantity", self.inspected_quantity, &[Min(0.0)]);
        v.number("accepted_quantity", self.accepted_quantity, &[Min(0.0)]);
        v.number("rejected_quantity", self.rejected_quantity, &[Min(0.0)]);
        v.number("rework_quantity", self.rework_quantity, &[Min(0.0)]);
        v.text("inspector", &self.inspector, &[Required]);
        v.date("inspection_date", self.inspection_date);
        v.choice("shift", self.shift);
        v.text("work_center", &self.work_center, &[Required]);
        v.text("operator", &self.operator, &[Required]);
        v.choice("status", self.status);
        v.choice("priority", self.priority);
        v.choice("disposition", self.disposition);
        v.text("submitted_by", &self.submitted_by, &[Required]);

        for (index, line) in self.defects.iter().enumerate() {
            let path = |field: &str| Validator::nested("defects", index, field);
            v.text(&path("defect_type"), &line.defect_type, &[Required]);
            v.text(&path("description"), &line.description, &[Required]);
            v.number(&path("quantity"), line.quantity, &[Min(1.0)]);
            v.text(&path("location"), &line.location, &[Required]);
        }
        for (index, line) in self.measurements.iter().enumerate() {
            let path = |field: &str| Validator::nested("measurements", index, field);
            v.text(&path("characteristic"), &line.characteristic, &[Required]);
            v.text(&path("specification"), &line.specification, &[Required]);
            v.text(&path("tolerance"), &line.tolerance, &[Required]);
            v.text(&path("unit"), &line.unit, &[Required]);
            v.text(&path("instrument"), &line.instrument, &[Required]);
        }
        for (index, line) in self.visual_checks.iter().enumerate() {
            let path = |field: &str| Validator::nested("visual_checks", index, field);
            v.text(&path("check_point"), &line.check_point, &[Required]);
            v.text(&path("requirement"), &line.requirement, &[Required]);
        }
        for (index, line) in self.process_parameters.iter().enumerate() {
            let path = |field: &str| Validator::nested("process_parameters", index, field);
            v.text(&path("parameter"), &line.parameter, &[Required]);
            v.text(&path("specification"), &line.specification, &[Required]);
            v.text(&path("actual_value"), &line.actual_value, &[Required]);
            v.text(&path("unit"), &line.unit, &[Required]);
        }
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, IpiRecord>) -> Result<IpiRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(IpiRecord {
            inspection_number: self.inspection_number.trim().to_string(),
            work_order: self.work_order.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            part_name: self.part_name.trim().to_string(),
            revision: self.revision.trim().to_string(),
            operation: self.operation.trim().to_string(),
            operation_sequence: whole(self.operation_sequence),
            lot_number: optional_text(&self.lot_number),
            quantity: whole(self.quantity),
            inspected_quantity: whole(self.inspected_quantity),
            accepted_quantity: whole(self.accepted_quantity),
            rejected_quantity: whole(self.rejected_quantity),
            rework_quantity: whole(self.rework_quantity),
            inspector: self.inspector.trim().to_string(),
            inspection_date: require("inspection_date", self.inspection_date)?,
            shift: require("shift", self.shift)?,
            work_center: self.work_center.trim().to_string(),
            operator: self.operator.trim().to_string(),
            machine: self.machine.trim().to_string(),
            tooling: self.tooling.trim().to_string(),
            status: require("status", self.status)?,
            priority: require("priority", self.priority)?,
            defects: self
                .defects
                .iter()
                .enumerate()
                .map(|(index, d)| IpiDefect {
                    id: line_id(index),
                    defect_type: d.defect_type.trim().to_string(),
                    description: d.description.trim().to_string(),
                    quantity: whole(d.quantity),
                    severity: d.severity,
                    location: d.location.trim().to_string(),
                    cause: optional_text(&d.cause),
                    correction_required: d.correction_required,
                })
                .collect(),
            measurements: self
                .measurements
                .iter()
                .enumerate()
                .map(|(index, m)| IpiMeasurement {
                    id: line_id(index),
                    characteristic: m.characteristic.trim().to_string(),
                    specification: m.specification.trim().to_string(),
                    nominal_value: m.nominal_value,
                    tolerance: m.tolerance.trim().to_string(),
                    actual_value: m.actual_value,
                    unit: m.unit.trim().to_string(),
                    instrument: m.instrument.trim().to_string(),
                    result: m.result,
                    notes: optional_text(&m.notes),
                })
                .collect(),
            visual_checks: self
                .visual_checks
                .iter()
                .enumerate()
                .map(|(index, c)| IpiVisualCheck {
                    id: line_id(index),
                    check_point: c.check_point.trim().to_string(),
                    requirement: c.requirement.trim().to_string(),
                    result: c.result,
                    notes: optional_text(&c.notes),
                })
                .collect(),
            process_parameters: self
                .process_parameters
                .iter()
                .enumerate()
                .map(|(index, p)| IpiProcessParameter {
                    id: line_id(index),
                    parameter: p.parameter.trim().to_string(),
                    specification: p.specification.trim().to_string(),
                    actual_value: p.actual_value.trim().to_string(),
                    unit: p.unit.trim().to_string(),
                    result: p.result,
                    notes: optional_text(&p.notes),
                })
                .collect(),
            notes: optional_text(&self.notes),
            next_operation: optional_text(&self.next_operation),
            disposition: require("disposition", self.disposition)?,
            customer_notification: self.customer_notification,
            quality_alert: self.quality_alert,
            submitted_by: self.submitted_by.trim().to_string(),
            submitted_date: prev.map_or(ctx.today, |p| p.submitted_date),
            reviewed_by: prev.and_then(|p| p.reviewed_by.clone()),
            reviewed_date: prev.and_then(|p| p.reviewed_date),
            attachments: prev.map(|p| p.attachments.clone()).unwrap_or_default(),
        })
    }
}
