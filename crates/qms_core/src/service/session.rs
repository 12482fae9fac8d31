//! Feature session: one area's store, form, filter and statistics.
//!
//! # Responsibility
//! - Own the record store of exactly one feature area.
//! - Route presentation calls (submit, edit, delete, filter) to the store.
//! - Derive the displayed list and statistics from the full store.
//!
//! # Invariants
//! - The displayed list is recomputed from the store and the active
//!   filter on every read, so it can never go stale after a mutation.
//! - Statistics always cover the full store, never the filtered view.

use crate::clock::Clock;
use crate::config::WorkflowConfig;
use crate::form::{FieldErrors, FormController, FormMode, FormModel, SubmitContext, SubmitOutcome};
use crate::model::common::RecordId;
use crate::navigation::FeatureArea;
use crate::repo::record_store::{Entry, Record, RecordStore};
use crate::search::{apply_filters, RecordFilter};
use crate::stats::StatsContext;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use std::fmt::Debug;
use std::sync::Arc;

/// Binds one feature area's record, form, filter and statistics types.
pub trait Feature {
    type Record: Record;
    type Form: FormModel<Record = Self::Record>;
    type Filter: RecordFilter<Self::Record> + Default + Clone + Debug;
    type Stats: Debug;

    const AREA: FeatureArea;

    /// Aggregates over every stored entry.
    fn statistics(entries: &[Entry<Self::Record>], ctx: &StatsContext) -> Self::Stats;

    /// Demonstration records the area starts with.
    fn seed() -> Vec<Entry<Self::Record>>;
}

/// Explicitly owned state of one feature area.
pub struct FeatureSession<F: Feature> {
    store: RecordStore<F::Record>,
    form: FormController<F::Form>,
    filter: F::Filter,
    clock: Arc<dyn Clock>,
    workflow: WorkflowConfig,
}

impl<F: Feature> FeatureSession<F> {
    /// Opens a session over an empty store.
    pub fn new(clock: Arc<dyn Clock>, workflow: WorkflowConfig) -> Self {
        let store = RecordStore::new(F::AREA, Arc::clone(&clock));
        Self::with_store(store, clock, workflow)
    }

    /// Opens a session holding the area's demonstration records.
    pub fn seeded(clock: Arc<dyn Clock>, workflow: WorkflowConfig) -> Self {
        let store = RecordStore::from_entries(F::AREA, Arc::clone(&clock), F::seed());
        Self::with_store(store, clock, workflow)
    }

    /// Opens a session holding `entries` in the given order.
    pub fn with_entries(
        clock: Arc<dyn Clock>,
        workflow: WorkflowConfig,
        entries: Vec<Entry<F::Record>>,
    ) -> Self {
        let store = RecordStore::from_entries(F::AREA, Arc::clone(&clock), entries);
        Self::with_store(store, clock, workflow)
    }

    fn with_store(
        store: RecordStore<F::Record>,
        clock: Arc<dyn Clock>,
        workflow: WorkflowConfig,
    ) -> Self {
        info!(
            "event=session_open module=service area={} records={} policy={:?}",
            F::AREA.slug(),
            store.len(),
            workflow.policy()
        );
        Self {
            store,
            form: FormController::new(),
            filter: F::Filter::default(),
            clock,
            workflow,
        }
    }

    pub fn area(&self) -> FeatureArea {
        F::AREA
    }

    pub fn store(&self) -> &RecordStore<F::Record> {
        &self.store
    }

    /// Every stored entry, most recent first.
    pub fn all(&self) -> &[Entry<F::Record>] {
        self.store.all()
    }

    pub fn get(&self, id: RecordId) -> Option<&Entry<F::Record>> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn form(&self) -> &FormController<F::Form> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController<F::Form> {
        &mut self.form
    }

    /// Shorthand for editing form values.
    pub fn form_values_mut(&mut self) -> &mut F::Form {
        self.form.values_mut()
    }

    pub fn form_errors(&self) -> &FieldErrors {
        self.form.errors()
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.is_valid()
    }

    /// Validates the form and stores its record.
    pub fn submit(&mut self) -> SubmitOutcome {
        let ctx = SubmitContext {
            now: self.clock.now(),
            acting_user: &self.workflow.acting_user,
            policy: self.workflow.policy(),
        };
        self.form.submit(&mut self.store, ctx)
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Loads the record `id` into the form; `false` when it does not exist.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        match self.store.get(id) {
            Some(entry) => {
                self.form.begin_edit(entry);
                true
            }
            None => false,
        }
    }

    /// Removes the record `id`; `false` when it does not exist.
    ///
    /// A form editing the removed record falls back to create mode.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let removed = self.store.delete(id).is_some();
        if removed && self.form.mode() == FormMode::Edit(id) {
            self.form.reset();
        }
        removed
    }

    /// Replaces the active filter criteria.
    pub fn apply_filters(&mut self, filter: F::Filter) {
        self.filter = filter;
        info!(
            "event=filter_applied module=service area={} empty={} matched={}",
            F::AREA.slug(),
            self.filter.is_empty(),
            self.displayed().len()
        );
    }

    pub fn clear_filters(&mut self) {
        self.filter = F::Filter::default();
    }

    pub fn filter(&self) -> &F::Filter {
        &self.filter
    }

    /// Entries accepted by the active filter, in natural order.
    pub fn displayed(&self) -> Vec<&Entry<F::Record>> {
        apply_filters(self.store.all(), &self.filter)
    }

    pub fn stats_context(&self) -> StatsContext {
        StatsContext::new(self.clock.now(), self.workflow.review_window_days)
    }

    pub fn statistics(&self) -> F::Stats {
        F::statistics(self.store.all(), &self.stats_context())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn acting_user(&self) -> &str {
        &self.workflow.acting_user
    }

    /// Applies a status action to `id`, logging the outcome.
    pub(crate) fn act(
        &mut self,
        id: RecordId,
        action: &'static str,
        mutate: impl FnOnce(&mut F::Record),
    ) -> bool {
        let applied = self.store.modify(id, mutate);
        info!(
            "event=status_action module=service area={} action={} id={} applied={}",
            F::AREA.slug(),
            action,
            id,
            applied
        );
        applied
    }
}
