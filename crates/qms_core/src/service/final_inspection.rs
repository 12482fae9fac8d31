//! Final inspection area: filter, statistics and shipping.

use crate::form::final_inspection::FinalInspectionForm;
use crate::model::common::RecordId;
use crate::model::final_inspection::{FinalInspectionRecord, FinalStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, percentage, StatsContext};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct FinalInspection;

pub type FinalInspectionSession = FeatureSession<FinalInspection>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalInspectionFilter {
    /// Matches part number, work order and part name.
    pub search: String,
    pub status: Option<FinalStatus>,
}

impl RecordFilter<FinalInspectionRecord> for FinalInspectionFilter {
    fn matches(&self, record: &FinalInspectionRecord) -> bool {
        text_matches(
            &self.search,
            &[&record.part_number, &record.work_order, &record.part_name],
        ) && selector_matches(self.status, record.status)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalInspectionStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub rework: usize,
    pub shipped: usize,
    /// Approved over all inspections, rounded percentage.
    pub pass_rate: u32,
}

impl Feature for FinalInspection {
    type Record = FinalInspectionRecord;
    type Form = FinalInspectionForm;
    type Filter = FinalInspectionFilter;
    type Stats = FinalInspectionStats;

    const AREA: FeatureArea = FeatureArea::FinalInspection;

    fn statistics(
        entries: &[Entry<FinalInspectionRecord>],
        _ctx: &StatsContext,
    ) -> FinalInspectionStats {
        let approved = count_where(entries, |r| r.status == FinalStatus::Approved);
        FinalInspectionStats {
            total: entries.len(),
            pending: count_where(entries, |r| r.status == FinalStatus::PendingReview),
            approved,
            rejected: count_where(entries, |r| r.status == FinalStatus::Rejected),
            rework: count_where(entries, |r| r.status == FinalStatus::ReworkRequired),
            shipped: count_where(entries, |r| r.status == FinalStatus::Shipped),
            pass_rate: percentage(approved, entries.len()),
        }
    }

    fn seed() -> Vec<Entry<FinalInspectionRecord>> {
        seed::inspection::final_inspection_entries()
    }
}

impl FeatureSession<FinalInspection> {
    /// Marks the lot as shipped.
    pub fn ship(&mut self, id: RecordId) -> bool {
        self.act(id, "ship", |record| {
            record.status = FinalStatus::Shipped;
        })
    }
}
