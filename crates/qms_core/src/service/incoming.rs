//! Incoming inspection area: filter, statistics and stock release.

use crate::form::incoming::IncomingForm;
use crate::model::common::RecordId;
use crate::model::incoming::{IncomingRecord, IncomingStatus, DEFAULT_STOCK_LOCATION};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{label_matches, selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, percentage, StatsContext};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Incoming;

pub type IncomingSession = FeatureSession<Incoming>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomingFilter {
    /// Matches purchase order, part number, description and supplier.
    pub search: String,
    pub status: Option<IncomingStatus>,
    pub supplier: Option<String>,
}

impl RecordFilter<IncomingRecord> for IncomingFilter {
    fn matches(&self, record: &IncomingRecord) -> bool {
        text_matches(
            &self.search,
            &[
                &record.purchase_order,
                &record.part_number,
                &record.part_description,
                &record.supplier,
            ],
        ) && selector_matches(self.status, record.status)
            && label_matches(&self.supplier, &record.supplier)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_none()
            && self
                .supplier
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomingStats {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub quarantine: usize,
    pub rework: usize,
    /// Accepted over all receipts, rounded percentage.
    pub acceptance_rate: u32,
}

impl Feature for Incoming {
    type Record = IncomingRecord;
    type Form = IncomingForm;
    type Filter = IncomingFilter;
    type Stats = IncomingStats;

    const AREA: FeatureArea = FeatureArea::IncomingInspection;

    fn statistics(entries: &[Entry<IncomingRecord>], _ctx: &StatsContext) -> IncomingStats {
        let accepted = count_where(entries, |r| r.status == IncomingStatus::Accepted);
        IncomingStats {
            total: entries.len(),
            pending: count_where(entries, |r| r.status == IncomingStatus::PendingInspection),
            accepted,
            rejected: count_where(entries, |r| r.status == IncomingStatus::Rejected),
            quarantine: count_where(entries, |r| r.status == IncomingStatus::Quarantined),
            rework: count_where(entries, |r| r.status == IncomingStatus::ReworkSort),
            acceptance_rate: percentage(accepted, entries.len()),
        }
    }

    fn seed() -> Vec<Entry<IncomingRecord>> {
        seed::inspection::incoming_entries()
    }
}

impl FeatureSession<Incoming> {
    /// Records the receipt's storage location.
    ///
    /// A blank `location` falls back to [`DEFAULT_STOCK_LOCATION`].
    pub fn move_to_stock(&mut self, id: RecordId, location: Option<&str>) -> bool {
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_STOCK_LOCATION)
            .to_string();
        self.act(id, "move_to_stock", |record| {
            record.storage_location = Some(location);
        })
    }
}
