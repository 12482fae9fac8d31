//! FAI form with nested dimension, test and surface-finish lines.
//!
//! # Responsibility
//! - Hold the header fields and four independently editable line lists.
//! - Validate every line and number lines 1..n on build.
//!
//! # Invariants
//! - Defaults: production method `Production`, status `In Progress`,
//!   priority `Medium`, disposition `Pending`, no lines.
//! - Approval fields are carried over from the edited record.

use crate::form::validation::FieldRule::{Min, Required};
use crate::form::validation::{require, FieldErrors, Validator};
use crate::form::{line_id, optional_text, remove_at, text_or_empty, BuildContext, FormModel};
use crate::model::common::{CheckResult, Priority};
use crate::model::fai::{
    overall_result, FaiDimension, FaiDisposition, FaiReason, FaiRecord, FaiStatus,
    FaiSurfaceFinish, FaiTest, OverallResult, ProductionMethod,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub characteristic: String,
    pub specification: String,
    pub tolerance: String,
    pub actual_value: f64,
    pub unit: String,
    pub method: String,
    pub result: CheckResult,
    pub notes: String,
}

impl Default for DimensionLine {
    fn default() -> Self {
        Self {
            characteristic: String::new(),
            specification: String::new(),
            tolerance: String::new(),
            actual_value: 0.0,
            unit: "mm".to_string(),
            method: String::new(),
            result: CheckResult::Pass,
            notes: String::new(),
        }
    }
}

/// Functional or material test line.
#[derive(Debug, Clone, PartialEq)]
pub struct TestLine {
    pub test_name: String,
    pub specification: String,
    pub procedure: String,
    pub actual_result: String,
    pub result: CheckResult,
    pub equipment: String,
    pub notes: String,
}

impl Default for TestLine {
    fn default() -> Self {
        Self {
            test_name: String::new(),
            specification: String::new(),
            procedure: String::new(),
            actual_result: String::new(),
            result: CheckResult::Pass,
            equipment: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFinishLine {
    pub surface: String,
    pub specification: String,
    pub actual_value: f64,
    pub unit: String,
    pub result: CheckResult,
    pub notes: String,
}

impl Default for SurfaceFinishLine {
    fn default() -> Self {
        Self {
            surface: String::new(),
            specification: String::new(),
            actual_value: 0.0,
            unit: "µm".to_string(),
            result: CheckResult::Pass,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaiForm {
    pub fai_number: String,
    pub part_number: String,
    pub part_name: String,
    pub revision: String,
    pub lot_number: String,
    pub serial_number: String,
    pub drawing_number: String,
    pub drawing_revision: String,
    pub work_order: String,
    pub customer: String,
    pub program: String,
    pub reason: Option<FaiReason>,
    pub production_method: Option<ProductionMethod>,
    pub status: Option<FaiStatus>,
    pub priority: Option<Priority>,
    pub inspector_name: String,
    pub inspection_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub manufacturing_process: String,
    pub tooling_used: String,
    pub equipment_used: String,
    pub material_certification: bool,
    pub process_documentation: bool,
    pub calibration_records: bool,
    pub notes: String,
    pub disposition: Option<FaiDisposition>,
    pub customer_approval: bool,
    pub submitted_by: String,
    pub dimensions: Vec<DimensionLine>,
    pub functional_tests: Vec<TestLine>,
    pub material_tests: Vec<TestLine>,
    pub surface_finish: Vec<SurfaceFinishLine>,
}

impl FaiForm {
    pub fn add_dimension(&mut self) {
        self.dimensions.push(DimensionLine::default());
    }

    pub fn remove_dimension(&mut self, index: usize) {
        remove_at(&mut self.dimensions, index);
    }

    pub fn add_functional_test(&mut self) {
        self.functional_tests.push(TestLine::default());
    }

    pub fn remove_functional_test(&mut self, index: usize) {
        remove_at(&mut self.functional_tests, index);
    }

    pub fn add_material_test(&mut self) {
        self.material_tests.push(TestLine::default());
    }

    pub fn remove_material_test(&mut self, index: usize) {
        remove_at(&mut self.material_tests, index);
    }

    pub fn add_surface_finish(&mut self) {
        self.surface_finish.push(SurfaceFinishLine::default());
    }

    pub fn remove_surface_finish(&mut self, index: usize) {
        remove_at(&mut self.surface_finish, index);
    }

    /// Verdict over the lines currently in the form.
    pub fn overall_result(&self) -> OverallResult {
        overall_result(
            self.dimensions
                .iter()
                .map(|line| line.result)
                .chain(self.functional_tests.iter().map(|line| line.result))
                .chain(self.material_tests.iter().map(|line| line.result))
                .chain(self.surface_finish.iter().map(|line| line.result)),
        )
    }
}

fn validate_test_lines(v: &mut Validator, list: &str, lines: &[TestLine]) {
    for (index, line) in lines.iter().enumerate() {
        let path = |field: &str| Validator::nested(list, index, field);
        v.text(&path("test_name"), &line.test_name, &[Required]);
        v.text(&path("specification"), &line.specification, &[Required]);
        v.text(&path("procedure"), &line.procedure, &[Required]);
        v.text(&path("actual_result"), &line.actual_result, &[Required]);
    }
}

fn build_tests(lines: &[TestLine]) -> Vec<FaiTest> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| FaiTest {
            id: line_id(index),
            test_name: line.test_name.trim().to_string(),
            specification: line.specification.trim().to_string(),
            procedure: line.procedure.trim().to_string(),
            actual_result: line.actual_result.trim().to_string(),
            result: line.result,
            equipment: optional_text(&line.equipment),
            notes: optional_text(&line.notes),
        })
        .collect()
}

fn test_line(test: &FaiTest) -> TestLine {
    TestLine {
        test_name: test.test_name.clone(),
        specification: test.specification.clone(),
        procedure: test.procedure.clone(),
        actual_result: test.actual_result.clone(),
        result: test.result,
        equipment: text_or_empty(&test.equipment),
        notes: text_or_empty(&test.notes),
    }
}

impl FormModel for FaiForm {
    type Record = FaiRecord;

    fn defaults() -> Self {
        Self {
            fai_number: String::new(),
            part_number: String::new(),
            part_name: String::new(),
            revision: String::new(),
            lot_number: String::new(),
            serial_number: String::new(),
            drawing_number: String::new(),
            drawing_revision: String::new(),
            work_order: String::new(),
            customer: String::new(),
            program: String::new(),
            reason: None,
            production_method: Some(ProductionMethod::Production),
            status: Some(FaiStatus::InProgress),
            priority: Some(Priority::Medium),
            inspector_name: String::new(),
            inspection_date: None,
            due_date: None,
            manufacturing_process: String::new(),
            tooling_used: String::new(),
            equipment_used: String::new(),
            material_certification: false,
            process_documentation: false,
            calibration_records: false,
            notes: String::new(),
            disposition: Some(FaiDisposition::Pending),
            customer_approval: false,
            submitted_by: String::new(),
            dimensions: Vec::new(),
            functional_tests: Vec::new(),
            material_tests: Vec::new(),
            surface_finish: Vec::new(),
        }
    }

    fn from_record(record: &FaiRecord) -> Self {
        Self {
            fai_number: record.fai_number.clone(),
            part_number: record.part_number.clone(),
            part_name: record.part_name.clone(),
            revision: record.revision.clone(),
            lot_number: text_or_empty(&record.lot_number),
            serial_number: text_or_empty(&record.serial_number),
            drawing_number: record.drawing_number.clone(),
            drawing_revision: record.drawing_revision.clone(),
            work_order: record.work_order.clone(),
            customer: record.customer.clone(),
            program: record.program.clone(),
            reason: Some(record.reason),
            production_method: Some(record.production_method),
            status: Some(record.status),
            priority: Some(record.priority),
            inspector_name: record.inspector_name.clone(),
            inspection_date: Some(record.inspection_date),
            due_date: Some(record.due_date),
            manufacturing_process: record.manufacturing_process.clone(),
            tooling_used: record.tooling_used.clone(),
            equipment_used: record.equipment_used.clone(),
            material_certification: record.material_certification,
            process_documentation: record.process_documentation,
            calibration_records: record.calibration_records,
            notes: text_or_empty(&record.notes),
            disposition: Some(record.disposition),
            customer_approval: record.customer_approval,
            submitted_by: record.submitted_by.clone(),
            dimensions: record
                .dimensions
                .iter()
                .map(|dim| DimensionLine {
                    characteristic: dim.characteristic.clone(),
                    specification: dim.specification.clone(),
                    tolerance: dim.tolerance.clone(),
                    actual_value: dim.actual_value,
                    unit: dim.unit.clone(),
                    method: dim.method.clone(),
                    result: dim.result,
                    notes: text_or_empty(&dim.notes),
                })
                .collect(),
            functional_tests: record.functional_tests.iter().map(test_line).collect(),
            material_tests: record.material_tests.iter().map(test_line).collect(),
            surface_finish: record
                .surface_finish
                .iter()
                .map(|surface| SurfaceFinishLine {
                    surface: surface.surface.clone(),
                    specification: surface.specification.clone(),
                    actual_value: surface.actual_value,
                    unit: surface.unit.clone(),
                    result: surface.result,
                    notes: text_or_empty(&surface.notes),
                })
                .collect(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut v = Validator::new();
        v.text("fai_number", &self.fai_number, &[Required]);
        v.text("part_number", &self.part_number, &[Required]);
        v.text("part_name", &self.part_name, &[Required]);
        v.text("revision", &self.revision, &[Required]);
        v.text("drawing_number", &self.drawing_number, &[Required]);
        v.text("drawing_revision", &self.drawing_revision, &[Required]);
        v.text("work_order", &self.work_order, &[Required]);
        v.text("customer", &self.customer, &[Required]);
        v.choice("reason", self.reason);
        v.choice("production_method", self.production_method);
        v.choice("status", self.status);
        v.choice("priority", self.priority);
        v.text("inspector_name", &self.inspector_name, &[Required]);
        v.date("inspection_date", self.inspection_date);
        v.date("due_date", self.due_date);
        v.text("manufacturing_process", &self.manufacturing_process, &[Required]);
        v.choice("disposition", self.disposition);
        v.text("submitted_by", &self.submitted_by, &[Required]);

        for (index, line) in self.dimensions.iter().enumerate() {
            let path = |field: &str| Validator::nested("dimensions", index, field);
            v.text(&path("characteristic"), &line.characteristic, &[Required]);
            v.text(&path("specification"), &line.specification, &[Required]);
            v.text(&path("tolerance"), &line.tolerance, &[Required]);
            v.number(&path("actual_value"), line.actual_value, &[Min(0.0)]);
            v.text(&path("unit"), &line.unit, &[Required]);
            v.text(&path("method"), &line.method, &[Required]);
        }
        validate_test_lines(&mut v, "functional_tests", &self.functional_tests);
        validate_test_lines(&mut v, "material_tests", &self.material_tests);
        for (index, line) in self.surface_finish.iter().enumerate() {
            let path = |field: &str| Validator::nested("surface_finish", index, field);
            v.text(&path("surface"), &line.surface, &[Required]);
            v.text(&path("specification"), &line.specification, &[Required]);
            v.number(&path("actual_value"), line.actual_value, &[Min(0.0)]);
            v.text(&path("unit"), &line.unit, &[Required]);
        }
        v.finish()
    }

    fn build(&self, ctx: &BuildContext<'_, FaiRecord>) -> Result<FaiRecord, FieldErrors> {
        let prev = ctx.existing;
        Ok(FaiRecord {
            fai_number: self.fai_number.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            part_name: self.part_name.trim().to_string(),
            revision: self.revision.trim().to_string(),
            lot_number: optional_text(&self.lot_number),
            serial_number: optional_text(&self.serial_number),
            drawing_number: self.drawing_number.trim().to_string(),
            drawing_revision: self.drawing_revision.trim().to_string(),
            work_order: self.work_order.trim().to_string(),
            customer: self.customer.trim().to_string(),
            program: self.program.trim().to_string(),
            reason: require("reason", self.reason)?,
            production_method: require("production_method", self.production_method)?,
            status: require("status", self.status)?,
            priority: require("priority", self.priority)?,
            inspector_name: self.inspector_name.trim().to_string(),
            inspection_date: require("inspection_date", self.inspection_date)?,
            due_date: require("due_date", self.due_date)?,
            manufacturing_process: self.manufacturing_process.trim().to_string(),
            tooling_used: self.tooling_used.trim().to_string(),
            equipment_used: self.equipment_used.trim().to_string(),
            material_certification: self.material_certification,
            process_documentation: self.process_documentation,
            calibration_records: self.calibration_records,
            dimensions: self
                .dimensions
                .iter()
                .enumerate()
                .map(|(index, line)| FaiDimension {
                    id: line_id(index),
                    characteristic: line.characteristic.trim().to_string(),
                    specification: line.specification.trim().to_string(),
                    tolerance: line.tolerance.trim().to_string(),
                    actual_value: line.actual_value,
                    unit: line.unit.trim().to_string(),
                    method: line.method.trim().to_string(),
                    result: line.result,
                    notes: optional_text(&line.notes),
                })
                .collect(),
            functional_tests: build_tests(&self.functional_tests),
            material_tests: build_tests(&self.material_tests),
            surface_finish: self
                .surface_finish
                .iter()
                .enumerate()
                .map(|(index, line)| FaiSurfaceFinish {
                    id: line_id(index),
                    surface: line.surface.trim().to_string(),
                    specification: line.specification.trim().to_string(),
                    actual_value: line.actual_value,
                    unit: line.unit.trim().to_string(),
                    result: line.result,
                    notes: optional_text(&line.notes),
                })
                .collect(),
            notes: optional_text(&self.notes),
            disposition: require("disposition", self.disposition)?,
            customer_approval: self.customer_approval,
            approved_by: prev.and_then(|p| p.approved_by.clone()),
            approved_date: prev.and_then(|p| p.approved_date),
            submitted_by: self.submitted_by.trim().to_string(),
            submitted_date: prev.map_or(ctx.today, |p| p.submitted_date),
            attachments: prev.map(|p| p.attachments.clone()).unwrap_or_default(),
        })
    }
}
