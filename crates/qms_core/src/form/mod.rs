//! Form controllers bound to record shapes.
//!
//! # Responsibility
//! - Hold editable form values separate from stored records.
//! - Validate, build and forward records to the owning store.
//!
//! # Invariants
//! - A failed submit never mutates the store.
//! - A successful submit resets the form to create mode with defaults.
//! - Edit-mode submits keep the target's id and creation date.

pub mod capa;
pub mod document;
pub mod fai;
pub mod final_inspection;
pub mod incoming;
pub mod ipi;
pub mod mrb;
pub mod ncr;
pub mod procedure;
pub mod training;
pub mod user;
pub mod validation;

use crate::model::common::{RecordId, Vocabulary};
use crate::repo::record_store::{Entry, Record, RecordStore};
use crate::workflow::TransitionPolicy;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
pub use validation::{FieldError, FieldErrors, FieldRule, Validator};

/// Inputs available while turning form values into a record.
pub struct BuildContext<'a, R> {
    /// Record being edited; `None` in create mode.
    pub existing: Option<&'a R>,
    pub today: NaiveDate,
    pub now: NaiveDateTime,
    /// Name recorded in "submitted by"/"approved by" style fields.
    pub acting_user: &'a str,
}

/// Editable value model for one record type.
pub trait FormModel: Clone + std::fmt::Debug {
    type Record: Record;

    /// Values shown by a freshly reset form.
    fn defaults() -> Self;

    /// Copies a stored record into form values for editing.
    fn from_record(record: &Self::Record) -> Self;

    /// Checks every field rule.
    fn validate(&self) -> FieldErrors;

    /// Builds the record to store. Called only after `validate` passed.
    fn build(&self, ctx: &BuildContext<'_, Self::Record>) -> Result<Self::Record, FieldErrors>;
}

/// Whether submits create a record or replace an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

/// Per-submit inputs supplied by the owning session.
#[derive(Debug, Clone, Copy)]
pub struct SubmitContext<'a> {
    pub now: NaiveDateTime,
    pub acting_user: &'a str,
    pub policy: TransitionPolicy,
}

/// Result of a form submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// Field rules failed; nothing was stored.
    Invalid(FieldErrors),
    /// A strict workflow refused the status change; nothing was stored.
    TransitionDenied {
        from: &'static str,
        to: &'static str,
    },
    /// The edited record no longer exists; the form was reset.
    TargetMissing(RecordId),
}

impl SubmitOutcome {
    /// Whether the store now holds the submitted values.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_))
    }

    /// Id of the stored record on success.
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            Self::Created(id) | Self::Updated(id) => Some(*id),
            _ => None,
        }
    }
}

/// Form state machine: values, mode and last submit errors.
#[derive(Debug, Clone)]
pub struct FormController<F: FormModel> {
    values: F,
    mode: FormMode,
    errors: FieldErrors,
}

impl<F: FormModel> Default for FormController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormModel> FormController<F> {
    /// Creates a create-mode controller holding default values.
    pub fn new() -> Self {
        Self {
            values: F::defaults(),
            mode: FormMode::Create,
            errors: FieldErrors::new(),
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    /// Mutable access for field edits; clears stale submit errors.
    pub fn values_mut(&mut self) -> &mut F {
        self.errors = FieldErrors::new();
        &mut self.values
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Errors from the last rejected submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the current values pass every field rule.
    pub fn is_valid(&self) -> bool {
        self.values.validate().is_empty()
    }

    /// Loads `entry` into the form and switches to edit mode.
    pub fn begin_edit(&mut self, entry: &Entry<F::Record>) {
        self.values = F::from_record(entry.record());
        self.mode = FormMode::Edit(entry.id());
        self.errors = FieldErrors::new();
    }

    /// Restores defaults and create mode.
    pub fn reset(&mut self) {
        self.values = F::defaults();
        self.mode = FormMode::Create;
        self.errors = FieldErrors::new();
    }

    /// Validates, builds and stores the form's record.
    pub fn submit(
        &mut self,
        store: &mut RecordStore<F::Record>,
        ctx: SubmitContext<'_>,
    ) -> SubmitOutcome {
        let area = store.area().slug();
        let errors = self.values.validate();
        if !errors.is_empty() {
            debug!(
                "event=form_submit module=form area={} status=invalid fields={}",
                area,
                errors.len()
            );
            self.errors = errors.clone();
            return SubmitOutcome::Invalid(errors);
        }

        let outcome = match self.mode {
            FormMode::Create => self.submit_create(store, ctx),
            FormMode::Edit(id) => self.submit_edit(store, id, ctx),
        };

        match &outcome {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => {
                info!(
                    "event=form_submit module=form area={} status=ok id={}",
                    area, id
                );
                self.reset();
            }
            SubmitOutcome::TargetMissing(id) => {
                info!(
                    "event=form_submit module=form area={} status=target_missing id={}",
                    area, id
                );
                self.reset();
            }
            SubmitOutcome::TransitionDenied { from, to } => {
                info!(
                    "event=form_submit module=form area={} status=transition_denied from={} to={}",
                    area, from, to
                );
            }
            SubmitOutcome::Invalid(errors) => {
                debug!(
                    "event=form_submit module=form area={} status=invalid fields={}",
                    area,
                    errors.len()
                );
            }
        }
        outcome
    }

    fn submit_create(
        &mut self,
        store: &mut RecordStore<F::Record>,
        ctx: SubmitContext<'_>,
    ) -> SubmitOutcome {
        let build_ctx = BuildContext {
            existing: None,
            today: ctx.now.date(),
            now: ctx.now,
            acting_user: ctx.acting_user,
        };
        match self.values.build(&build_ctx) {
            Ok(record) => SubmitOutcome::Created(store.insert(record)),
            Err(errors) => self.reject(errors),
        }
    }

    fn submit_edit(
        &mut self,
        store: &mut RecordStore<F::Record>,
        id: RecordId,
        ctx: SubmitContext<'_>,
    ) -> SubmitOutcome {
        let built = {
            let Some(existing) = store.get(id) else {
                return SubmitOutcome::TargetMissing(id);
            };
            let build_ctx = BuildContext {
                existing: Some(existing.record()),
                today: ctx.now.date(),
                now: ctx.now,
                acting_user: ctx.acting_user,
            };
            self.values
                .build(&build_ctx)
                .map(|record| (existing.record().status(), record))
        };

        let (from, record) = match built {
            Ok(pair) => pair,
            Err(errors) => return self.reject(errors),
        };

        let to = record.status();
        if !ctx.policy.permits(from, to) {
            self.errors = FieldErrors::single(
                "status",
                FieldError::TransitionDenied {
                    from: from.label(),
                    to: to.label(),
                },
            );
            return SubmitOutcome::TransitionDenied {
                from: from.label(),
                to: to.label(),
            };
        }

        store.update(id, record);
        SubmitOutcome::Updated(id)
    }

    fn reject(&mut self, errors: FieldErrors) -> SubmitOutcome {
        self.errors = errors.clone();
        SubmitOutcome::Invalid(errors)
    }
}

/// Trims `value` and maps blank input to `None`.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Inverse of [`optional_text`] for loading records into a form.
pub(crate) fn text_or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Splits a comma-separated list field, dropping blank items.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(optional_text)
        .collect()
}

/// Joins list items for editing as one comma-separated field.
pub(crate) fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Converts a validated non-negative whole number.
pub(crate) fn whole(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value.round() as u32
    }
}

/// Removes the nested line at `index`; out-of-range indexes are ignored.
pub(crate) fn remove_at<T>(lines: &mut Vec<T>, index: usize) {
    if index < lines.len() {
        lines.remove(index);
    }
}

/// Nested line ids are positions starting at 1.
pub(crate) fn line_id(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{line_id, remove_at, split_list, whole};

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_list(" inspection, , quality ,"),
            vec!["inspection".to_string(), "quality".to_string()]
        );
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn whole_clamps_to_unsigned_range() {
        assert_eq!(whole(-3.0), 0);
        assert_eq!(whole(12.4), 12);
    }

    #[test]
    fn remove_at_ignores_out_of_range_rows() {
        let mut rows = vec!["a", "b"];
        remove_at(&mut rows, 5);
        remove_at(&mut rows, 0);
        assert_eq!(rows, vec!["b"]);
        assert_eq!(line_id(0), 1);
    }
}
