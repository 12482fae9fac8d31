//! FAI area: filter, statistics and approval actions.

use crate::form::fai::FaiForm;
use crate::model::common::RecordId;
use crate::model::fai::{FaiDisposition, FaiRecord, FaiStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, overdue_count, StatsContext};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Fai;

pub type FaiSession = FeatureSession<Fai>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaiFilter {
    /// Matches FAI number, part number, part name and customer.
    pub search: String,
    pub status: Option<FaiStatus>,
}

impl RecordFilter<FaiRecord> for FaiFilter {
    fn matches(&self, record: &FaiRecord) -> bool {
        text_matches(
            &self.search,
            &[
                &record.fai_number,
                &record.part_number,
                &record.part_name,
                &record.customer,
            ],
        ) && selector_matches(self.status, record.status)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaiStats {
    pub total: usize,
    pub in_progress: usize,
    pub pending_review: usize,
    pub approved: usize,
    pub rejected: usize,
    pub overdue: usize,
}

impl Feature for Fai {
    type Record = FaiRecord;
    type Form = FaiForm;
    type Filter = FaiFilter;
    type Stats = FaiStats;

    const AREA: FeatureArea = FeatureArea::Fai;

    fn statistics(entries: &[Entry<FaiRecord>], ctx: &StatsContext) -> FaiStats {
        FaiStats {
            total: entries.len(),
            in_progress: count_where(entries, |r| r.status == FaiStatus::InProgress),
            pending_review: count_where(entries, |r| r.status == FaiStatus::PendingReview),
            approved: count_where(entries, |r| r.status == FaiStatus::Approved),
            rejected: count_where(entries, |r| r.status == FaiStatus::Rejected),
            overdue: overdue_count(entries, ctx.now),
        }
    }

    fn seed() -> Vec<Entry<FaiRecord>> {
        seed::inspection::fai_entries()
    }
}

impl FeatureSession<Fai> {
    /// Approves the article: `Approved` + `Accept`, stamped by the acting user.
    pub fn approve(&mut self, id: RecordId) -> bool {
        let today = self.today();
        let user = self.acting_user().to_string();
        self.act(id, "approve", |record| {
            record.status = FaiStatus::Approved;
            record.disposition = FaiDisposition::Accept;
            record.approved_by = Some(user);
            record.approved_date = Some(today);
        })
    }

    /// Rejects the article: `Rejected` + `Reject`.
    pub fn reject(&mut self, id: RecordId) -> bool {
        self.act(id, "reject", |record| {
            record.status = FaiStatus::Rejected;
            record.disposition = FaiDisposition::Reject;
        })
    }
}
