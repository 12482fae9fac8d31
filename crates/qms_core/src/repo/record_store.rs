//! In-memory record store shared by every feature area.
//!
//! # Responsibility
//! - Own the ordered list of records for one feature session.
//! - Assign identity (id + creation date) at insert time.
//!
//! # Invariants
//! - Ids are unique within a store.
//! - New records are prepended, so natural order is most-recent-first.
//! - `update` never changes an entry's id or creation date.
//! - `update`, `modify` and `delete` are silent no-ops for unknown ids.

use crate::clock::Clock;
use crate::model::common::RecordId;
use crate::navigation::FeatureArea;
use crate::workflow::WorkflowStatus;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Domain record held by a [`RecordStore`].
pub trait Record: Clone + std::fmt::Debug {
    /// Lifecycle status vocabulary of this record type.
    type Status: WorkflowStatus;

    /// Current lifecycle status.
    fn status(&self) -> Self::Status;

    /// Date the record is due, when the area tracks one.
    fn due_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Due strictly before `now` while the status is not terminal.
    ///
    /// A due date means midnight at the start of that day.
    fn is_overdue(&self, now: NaiveDateTime) -> bool {
        match self.due_date() {
            Some(due) => due.and_time(NaiveTime::MIN) < now && !self.status().is_terminal(),
            None => false,
        }
    }
}

/// Stored record with its store-owned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<R> {
    id: RecordId,
    created_on: NaiveDate,
    record: R,
}

impl<R> Entry<R> {
    /// Builds an entry with a caller-provided identity.
    ///
    /// Used by seed data where ids and creation dates already exist.
    pub fn new(id: RecordId, created_on: NaiveDate, record: R) -> Self {
        Self {
            id,
            created_on,
            record,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_record(self) -> R {
        self.record
    }
}

/// Ordered, id-addressed collection of records for one feature area.
pub struct RecordStore<R: Record> {
    area: FeatureArea,
    clock: Arc<dyn Clock>,
    entries: Vec<Entry<R>>,
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store.
    pub fn new(area: FeatureArea, clock: Arc<dyn Clock>) -> Self {
        Self {
            area,
            clock,
            entries: Vec::new(),
        }
    }

    /// Creates a store holding `entries` in the given order.
    ///
    /// Entries repeating an earlier id are dropped.
    pub fn from_entries(area: FeatureArea, clock: Arc<dyn Clock>, entries: Vec<Entry<R>>) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert(entry.id) {
                kept.push(entry);
            } else {
                warn!(
                    "event=seed_duplicate_dropped module=store area={} id={}",
                    area.slug(),
                    entry.id
                );
            }
        }

        Self {
            area,
            clock,
            entries: kept,
        }
    }

    pub fn area(&self) -> FeatureArea {
        self.area
    }

    /// Prepends `record` with a fresh id and today's creation date.
    pub fn insert(&mut self, record: R) -> RecordId {
        // Why: seeded entries carry fixed ids, so a fresh v4 id is re-rolled
        // rather than trusted to be unique against them.
        let mut id = Uuid::new_v4();
        while self.position(id).is_some() {
            id = Uuid::new_v4();
        }

        let created_on = self.clock.today();
        self.entries.insert(0, Entry::new(id, created_on, record));
        debug!(
            "event=record_created module=store area={} id={} len={}",
            self.area.slug(),
            id,
            self.entries.len()
        );
        id
    }

    /// Replaces the record stored under `id`, keeping id and creation date.
    ///
    /// Returns `false` and leaves the store untouched when `id` is unknown.
    pub fn update(&mut self, id: RecordId, record: R) -> bool {
        let Some(index) = self.position(id) else {
            debug!(
                "event=record_update_skipped module=store area={} id={} reason=not_found",
                self.area.slug(),
                id
            );
            return false;
        };

        self.entries[index].record = record;
        debug!(
            "event=record_updated module=store area={} id={}",
            self.area.slug(),
            id
        );
        true
    }

    /// Mutates the record stored under `id` in place.
    pub fn modify(&mut self, id: RecordId, mutate: impl FnOnce(&mut R)) -> bool {
        let Some(index) = self.position(id) else {
            debug!(
                "event=record_modify_skipped module=store area={} id={} reason=not_found",
                self.area.slug(),
                id
            );
            return false;
        };

        mutate(&mut self.entries[index].record);
        true
    }

    /// Removes the first entry with `id` and returns it.
    pub fn delete(&mut self, id: RecordId) -> Option<Entry<R>> {
        let Some(index) = self.position(id) else {
            debug!(
                "event=record_delete_skipped module=store area={} id={} reason=not_found",
                self.area.slug(),
                id
            );
            return None;
        };

        let removed = self.entries.remove(index);
        debug!(
            "event=record_deleted module=store area={} id={} len={}",
            self.area.slug(),
            id,
            self.entries.len()
        );
        Some(removed)
    }

    pub fn get(&self, id: RecordId) -> Option<&Entry<R>> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Every entry in natural (most-recent-first) order.
    pub fn all(&self) -> &[Entry<R>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, Record, RecordStore};
    use crate::clock::FixedClock;
    use crate::model::capa::CapaStatus;
    use crate::navigation::FeatureArea;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        status: CapaStatus,
        due: Option<NaiveDate>,
    }

    impl Record for Ticket {
        type Status = CapaStatus;

        fn status(&self) -> CapaStatus {
            self.status
        }

        fn due_date(&self) -> Option<NaiveDate> {
            self.due
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    fn store() -> RecordStore<Ticket> {
        RecordStore::new(FeatureArea::Capa, Arc::new(FixedClock::on(day(10))))
    }

    #[test]
    fn insert_prepends_and_stamps_creation_date() {
        let mut store = store();
        let first = store.insert(Ticket {
            status: CapaStatus::Open,
            due: None,
        });
        let second = store.insert(Ticket {
            status: CapaStatus::Closed,
            due: None,
        });

        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id(), second);
        assert_eq!(store.all()[1].id(), first);
        assert_eq!(store.all()[0].created_on(), day(10));
    }

    #[test]
    fn from_entries_drops_repeated_ids() {
        let id = Uuid::new_v4();
        let ticket = Ticket {
            status: CapaStatus::Open,
            due: None,
        };
        let store = RecordStore::from_entries(
            FeatureArea::Capa,
            Arc::new(FixedClock::on(day(1))),
            vec![
                Entry::new(id, day(1), ticket.clone()),
                Entry::new(id, day(2), ticket),
            ],
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].created_on(), day(1));
    }

    #[test]
    fn overdue_requires_past_due_and_active_status() {
        let open = Ticket {
            status: CapaStatus::Open,
            due: Some(day(9)),
        };
        let closed = Ticket {
            status: CapaStatus::Closed,
            due: Some(day(9)),
        };
        let due_today = Ticket {
            status: CapaStatus::Open,
            due: Some(day(10)),
        };
        let midnight = day(10).and_hms_opt(0, 0, 0).unwrap();
        let morning = day(10).and_hms_opt(8, 15, 0).unwrap();
        assert!(open.is_overdue(midnight));
        assert!(!closed.is_overdue(morning));
        assert!(!due_today.is_overdue(midnight));
        assert!(due_today.is_overdue(morning));
    }
}
